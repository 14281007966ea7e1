use std::fmt;

use crate::error::RunnerError;

/// The two divisions of a challenge. Dispatch is exhaustive over this enum,
/// so an out-of-range part can only exist as a rejected raw value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Part {
    One,
    Two,
}

impl TryFrom<i64> for Part {
    type Error = RunnerError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Part::One),
            2 => Ok(Part::Two),
            other => Err(RunnerError::InvalidPart(other)),
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Part::One => write!(f, "1"),
            Part::Two => write!(f, "2"),
        }
    }
}
