use miette::Diagnostic;
use thiserror::Error;

/// Failures surfaced while resolving the part to run or reporting its result.
///
/// Every fatal condition of a run is one of these variants; clipboard
/// failures are deliberately absent because they are downgraded to an
/// informational output line and never abort a run.
#[derive(Debug, Error, Diagnostic)]
pub enum RunnerError {
    /// No source in the lookup chain produced a part value.
    #[error("no part specified, please provide a valid part")]
    #[diagnostic(code(aoc_runner::missing_part))]
    MissingPart,

    /// A part value was found but does not parse as an integer.
    #[error("invalid part type. The part type allowed is int")]
    #[diagnostic(code(aoc_runner::invalid_part_type))]
    InvalidPartType,

    /// A part value parsed as an integer outside the valid range.
    #[error("invalid part: {0}. The valid parts are (1/2)")]
    #[diagnostic(code(aoc_runner::invalid_part))]
    InvalidPart(i64),

    #[error("failed to parse command line flags: {0}")]
    #[diagnostic(code(aoc_runner::flag_parse))]
    FlagParse(String),

    #[error("failed to read input: {0}")]
    #[diagnostic(code(aoc_runner::input_read))]
    InputRead(#[source] std::io::Error),

    #[error("failed to write output: {0}")]
    #[diagnostic(code(aoc_runner::output_write))]
    OutputWrite(#[source] std::io::Error),
}
