use std::collections::HashMap;
use std::io::{BufRead, BufReader, Stdin, Stdout, Write};

use arboard::Clipboard;
use clap::Parser;

use crate::error::RunnerError;

/// Environment variable consulted as the second source of the part lookup
/// chain.
pub const PART_ENV_VAR: &str = "CHALLENGE_PART";

/// Environment variable that, when set to exactly `"true"`, suppresses the
/// best-effort clipboard copy of the result.
pub const DISABLE_CLIPBOARD_ENV_VAR: &str = "DISABLE_COPY_CLIPBOARD";

/// Read/write capability set required by the runner.
///
/// The default implementation is [`ConsoleManager`]; tests and embedders can
/// substitute anything else that can answer a `"part"` lookup and accept a
/// result line.
pub trait IoManager {
    /// Retrieve a configuration value by name. Managers answer `"part"` with
    /// the raw part value; unknown names yield an empty string.
    fn read(&mut self, arg: &str) -> Result<String, RunnerError>;

    /// Emit the textual challenge result.
    fn write(&mut self, result: &str) -> Result<(), RunnerError>;
}

impl<M: IoManager + ?Sized> IoManager for &mut M {
    fn read(&mut self, arg: &str) -> Result<String, RunnerError> {
        (**self).read(arg)
    }

    fn write(&mut self, result: &str) -> Result<(), RunnerError> {
        (**self).write(result)
    }
}

/// Console wiring captured once at manager construction: input and output
/// streams, the argument vector, and an optional override map for the
/// recognized environment variables.
///
/// `vars: None` resolves lookups against the process environment; a `Some`
/// map makes the manager fully deterministic for tests.
#[derive(Debug)]
pub struct ConsoleEnv<R, W> {
    pub stdin: R,
    pub stdout: W,
    pub args: Vec<String>,
    pub vars: Option<HashMap<String, String>>,
}

impl Default for ConsoleEnv<BufReader<Stdin>, Stdout> {
    fn default() -> Self {
        Self {
            stdin: BufReader::new(std::io::stdin()),
            stdout: std::io::stdout(),
            args: std::env::args().skip(1).collect(),
            vars: None,
        }
    }
}

impl<R, W> ConsoleEnv<R, W> {
    fn var(&self, key: &str) -> Option<String> {
        match &self.vars {
            Some(vars) => vars.get(key).cloned(),
            None => std::env::var(key).ok(),
        }
    }
}

/// Command line surface recognized by the console manager.
#[derive(Debug, Parser)]
#[command(name = "aoc-runner", disable_help_flag = true)]
struct PartArgs {
    /// Part of the challenge, valid values are (1/2)
    #[arg(long)]
    part: Option<String>,
}

/// [`IoManager`] over a console: resolves the part from flags, environment,
/// or an interactive prompt, and reports results to stdout plus the system
/// clipboard.
#[derive(Debug)]
pub struct ConsoleManager<R = BufReader<Stdin>, W = Stdout> {
    pub env: ConsoleEnv<R, W>,
}

impl ConsoleManager {
    /// Manager wired to the real process streams, arguments, and environment.
    pub fn new() -> Self {
        Self {
            env: ConsoleEnv::default(),
        }
    }
}

impl Default for ConsoleManager {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> ConsoleManager<R, W> {
    /// Manager over explicitly constructed wiring.
    pub fn with_env(env: ConsoleEnv<R, W>) -> Self {
        Self { env }
    }

    fn part_from_flags(&mut self) -> Result<Option<String>, RunnerError> {
        let args = PartArgs::try_parse_from(
            std::iter::once("aoc-runner".to_string()).chain(self.env.args.iter().cloned()),
        )
        .map_err(|err| RunnerError::FlagParse(err.to_string()))?;

        Ok(args.part.filter(|part| !part.is_empty()))
    }

    fn part_from_env(&mut self) -> Result<Option<String>, RunnerError> {
        Ok(self.env.var(PART_ENV_VAR).filter(|part| !part.is_empty()))
    }

    fn part_from_prompt(&mut self) -> Result<Option<String>, RunnerError> {
        writeln!(self.env.stdout, "Which part do you want to run? (1/2)")
            .map_err(RunnerError::OutputWrite)?;

        let mut line = String::new();
        let read = self
            .env
            .stdin
            .read_line(&mut line)
            .map_err(RunnerError::InputRead)?;

        // end of input counts as "no answer", not as a read failure
        if read == 0 {
            return Ok(None);
        }

        let part = line.trim().to_string();
        Ok((!part.is_empty()).then_some(part))
    }

    fn copy_to_clipboard(&mut self, value: &str) {
        if self.env.var(DISABLE_CLIPBOARD_ENV_VAR).as_deref() == Some("true") {
            tracing::debug!("clipboard copy disabled");
            return;
        }

        let copied = Clipboard::new().and_then(|mut clipboard| clipboard.set_text(value.to_owned()));

        // status lines are informational, a clipboard failure never fails the run
        match copied {
            Ok(()) => {
                let _ = writeln!(self.env.stdout, "Copied to clipboard: {value}");
            }
            Err(err) => {
                let _ = writeln!(self.env.stdout, "Error copying to clipboard: {err}");
            }
        }
    }
}

impl<R: BufRead, W: Write> IoManager for ConsoleManager<R, W> {
    /// Walks the source chain in priority order: command line flag, then
    /// environment variable, then interactive prompt. The first non-empty
    /// value wins; a failing source aborts the chain immediately, so a
    /// malformed command line is never masked by a later source.
    #[tracing::instrument(skip(self))]
    fn read(&mut self, arg: &str) -> Result<String, RunnerError> {
        if arg != "part" {
            return Ok(String::new());
        }

        let sources: [fn(&mut Self) -> Result<Option<String>, RunnerError>; 3] = [
            Self::part_from_flags,
            Self::part_from_env,
            Self::part_from_prompt,
        ];

        for source in sources {
            if let Some(part) = source(self)? {
                tracing::debug!(%part, "resolved raw part value");
                return Ok(part);
            }
        }

        Err(RunnerError::MissingPart)
    }

    #[tracing::instrument(skip(self))]
    fn write(&mut self, result: &str) -> Result<(), RunnerError> {
        writeln!(self.env.stdout, "The challenge result is {result}")
            .map_err(RunnerError::OutputWrite)?;

        self.copy_to_clipboard(result);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use rstest::rstest;

    type TestManager = ConsoleManager<Cursor<Vec<u8>>, Vec<u8>>;

    fn console(args: &[&str], vars: &[(&str, &str)], input: &str) -> TestManager {
        ConsoleManager::with_env(ConsoleEnv {
            stdin: Cursor::new(input.as_bytes().to_vec()),
            stdout: Vec::new(),
            args: args.iter().map(ToString::to_string).collect(),
            vars: Some(
                vars.iter()
                    .map(|&(key, value)| (key.to_string(), value.to_string()))
                    .collect(),
            ),
        })
    }

    fn stdout(manager: &TestManager) -> String {
        String::from_utf8(manager.env.stdout.clone()).unwrap()
    }

    #[derive(Debug)]
    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("write failed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[rstest]
    #[case::from_flag(&["--part=1"], &[], "", "1")]
    #[case::from_flag_with_space(&["--part", "2"], &[], "", "2")]
    #[case::from_env(&[], &[(PART_ENV_VAR, "2")], "", "2")]
    #[case::from_prompt(&[], &[], "1\n", "1")]
    #[case::flag_wins_over_env(&["--part=1"], &[(PART_ENV_VAR, "2")], "", "1")]
    #[case::empty_flag_falls_through(&["--part="], &[(PART_ENV_VAR, "2")], "", "2")]
    #[case::empty_env_falls_through(&[], &[(PART_ENV_VAR, "")], "1\n", "1")]
    fn part_lookup_walks_sources_in_order(
        #[case] args: &[&str],
        #[case] vars: &[(&str, &str)],
        #[case] input: &str,
        #[case] expected: &str,
    ) {
        let mut manager = console(args, vars, input);

        assert_eq!(expected, manager.read("part").unwrap());
    }

    #[test]
    fn prompt_line_precedes_interactive_read() {
        let mut manager = console(&[], &[], "2\n");

        let part = manager.read("part").unwrap();

        assert_eq!("2", part);
        assert_eq!("Which part do you want to run? (1/2)\n", stdout(&manager));
    }

    #[test]
    fn exhausted_chain_reports_missing_part() {
        let mut manager = console(&[], &[], "");

        let err = manager.read("part").unwrap_err();

        assert!(matches!(err, RunnerError::MissingPart));
    }

    #[test]
    fn blank_prompt_answer_reports_missing_part() {
        let mut manager = console(&[], &[], "\n");

        let err = manager.read("part").unwrap_err();

        assert!(matches!(err, RunnerError::MissingPart));
    }

    #[test]
    fn unknown_flag_short_circuits_the_chain() {
        // the prompt would answer "1", but the flag failure must win
        let mut manager = console(&["--test"], &[], "1\n");

        let err = manager.read("part").unwrap_err();

        assert!(matches!(err, RunnerError::FlagParse(_)));
    }

    #[test]
    fn unknown_args_read_empty() {
        let mut manager = console(&[], &[], "");

        assert_eq!("", manager.read("input").unwrap());
    }

    #[test]
    fn write_reports_result_then_clipboard_status() {
        let mut manager = console(&[], &[], "");

        manager.write("42").unwrap();

        let output = stdout(&manager);
        let status = output
            .strip_prefix("The challenge result is 42\n")
            .expect("result line comes first");
        // copy outcome depends on the host; either status line is acceptable
        assert!(status.contains("to clipboard: "));
    }

    #[test]
    fn clipboard_copy_skipped_when_disabled() {
        let mut manager = console(&[], &[(DISABLE_CLIPBOARD_ENV_VAR, "true")], "");

        manager.write("42").unwrap();

        assert_eq!("The challenge result is 42\n", stdout(&manager));
    }

    #[test]
    fn rejected_result_write_fails() {
        let mut manager = ConsoleManager::with_env(ConsoleEnv {
            stdin: Cursor::new(Vec::new()),
            stdout: FailingWriter,
            args: Vec::new(),
            vars: Some(HashMap::new()),
        });

        let err = manager.write("42").unwrap_err();

        assert!(matches!(err, RunnerError::OutputWrite(_)));
    }

    #[test]
    fn rejected_prompt_write_fails() {
        let mut manager = ConsoleManager::with_env(ConsoleEnv {
            stdin: Cursor::new(b"1\n".to_vec()),
            stdout: FailingWriter,
            args: Vec::new(),
            vars: Some(HashMap::new()),
        });

        let err = manager.read("part").unwrap_err();

        assert!(matches!(err, RunnerError::OutputWrite(_)));
    }
}
