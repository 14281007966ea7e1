//! Test doubles for exercising runners without touching the real console.

use crate::error::RunnerError;
use crate::io::IoManager;

/// In-memory [`IoManager`] with a scripted part value, optionally injected
/// read/write failures, and a transcript of everything written.
///
/// Pass it by mutable reference so the transcript stays inspectable after
/// the run:
///
/// ```
/// use aoc_runner::testing::MockManager;
/// use aoc_runner::Runner;
///
/// let mut manager = MockManager::new("2");
/// Runner::new(|_: &str| 42, |_: &str| 24)
///     .with_manager(&mut manager)
///     .run("input")?;
///
/// assert_eq!("The challenge result is 24\n", manager.output());
/// # Ok::<(), aoc_runner::RunnerError>(())
/// ```
#[derive(Debug, Default)]
pub struct MockManager {
    part: String,
    read_error: Option<RunnerError>,
    write_error: Option<RunnerError>,
    output: String,
}

impl MockManager {
    pub fn new(part: &str) -> Self {
        Self {
            part: part.to_string(),
            ..Self::default()
        }
    }

    /// Make the next `read` fail with `error`.
    pub fn with_read_error(mut self, error: RunnerError) -> Self {
        self.read_error = Some(error);
        self
    }

    /// Make the next `write` fail with `error`.
    pub fn with_write_error(mut self, error: RunnerError) -> Self {
        self.write_error = Some(error);
        self
    }

    /// Everything written through the manager so far.
    pub fn output(&self) -> &str {
        &self.output
    }
}

impl IoManager for MockManager {
    fn read(&mut self, _arg: &str) -> Result<String, RunnerError> {
        if let Some(error) = self.read_error.take() {
            return Err(error);
        }

        Ok(self.part.clone())
    }

    fn write(&mut self, result: &str) -> Result<(), RunnerError> {
        if let Some(error) = self.write_error.take() {
            return Err(error);
        }

        self.output
            .push_str(&format!("The challenge result is {result}\n"));

        Ok(())
    }
}
