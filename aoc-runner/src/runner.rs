use crate::error::RunnerError;
use crate::io::{ConsoleManager, IoManager};
use crate::part::Part;

/// Run a challenge against the default console manager, resolving the part
/// from the command line, environment, or an interactive prompt.
///
/// `part_one` and `part_two` are the two divisions of the challenge: pure
/// functions from the raw input to an integer answer.
///
/// ```no_run
/// fn part_one(input: &str) -> i64 {
///     input.len() as i64
/// }
///
/// fn part_two(input: &str) -> i64 {
///     input.len() as i64 * 2
/// }
///
/// fn main() -> miette::Result<()> {
///     aoc_runner::run("input", part_one, part_two)?;
///     Ok(())
/// }
/// ```
pub fn run<P1, P2>(input: &str, part_one: P1, part_two: P2) -> Result<(), RunnerError>
where
    P1: Fn(&str) -> i64,
    P2: Fn(&str) -> i64,
{
    Runner::new(part_one, part_two).run(input)
}

/// Configurable challenge run: pick a part up front with [`Runner::with_part`]
/// or swap the I/O strategy with [`Runner::with_manager`].
///
/// ```
/// use aoc_runner::testing::MockManager;
/// use aoc_runner::Runner;
///
/// let mut manager = MockManager::new("1");
/// Runner::new(|input: &str| input.len() as i64, |input: &str| input.len() as i64 * 2)
///     .with_manager(&mut manager)
///     .run("abc")?;
///
/// assert_eq!("The challenge result is 3\n", manager.output());
/// # Ok::<(), aoc_runner::RunnerError>(())
/// ```
pub struct Runner<P1, P2, M = ConsoleManager> {
    part_one: P1,
    part_two: P2,
    manager: M,
    part: Option<Part>,
}

impl<P1, P2> Runner<P1, P2>
where
    P1: Fn(&str) -> i64,
    P2: Fn(&str) -> i64,
{
    pub fn new(part_one: P1, part_two: P2) -> Self {
        Self {
            part_one,
            part_two,
            manager: ConsoleManager::new(),
            part: None,
        }
    }
}

impl<P1, P2, M> Runner<P1, P2, M>
where
    P1: Fn(&str) -> i64,
    P2: Fn(&str) -> i64,
    M: IoManager,
{
    /// Force the part, skipping the source chain entirely.
    pub fn with_part(mut self, part: Part) -> Self {
        self.part = Some(part);
        self
    }

    /// Replace the I/O strategy for both the part lookup and the report.
    pub fn with_manager<N: IoManager>(self, manager: N) -> Runner<P1, P2, N> {
        Runner {
            part_one: self.part_one,
            part_two: self.part_two,
            manager,
            part: self.part,
        }
    }

    /// Resolve the part, dispatch to exactly one challenge function, and
    /// report its result through the manager.
    #[tracing::instrument(skip_all)]
    pub fn run(mut self, input: &str) -> Result<(), RunnerError> {
        let part = match self.part {
            Some(part) => part,
            None => self.resolve_part()?,
        };

        tracing::debug!(%part, "dispatching challenge");
        let result = match part {
            Part::One => (self.part_one)(input),
            Part::Two => (self.part_two)(input),
        };

        self.manager.write(&result.to_string())
    }

    fn resolve_part(&mut self) -> Result<Part, RunnerError> {
        let raw = self.manager.read("part")?;
        let value = raw
            .parse::<i64>()
            .map_err(|_| RunnerError::InvalidPartType)?;

        Part::try_from(value)
    }
}
