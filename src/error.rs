use thiserror::Error;

/// Which of the cube-code validation rules failed.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum InvalidCubeReason {
    /// The text is not exactly 54 characters long.
    Length,
    /// The text contains a character outside the `{b,r,g,o,y,w}` alphabet.
    Alphabet,
    /// Not all six colors appear at least once.
    MissingColor,
    /// Some color does not appear exactly nine times.
    UnevenDistribution,
    /// Two of the six center positions carry the same color.
    DuplicateCenterColor,
}

impl std::fmt::Display for InvalidCubeReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            InvalidCubeReason::Length => "cube code must be exactly 54 characters",
            InvalidCubeReason::Alphabet => "cube code must use only the letters b, r, g, o, y, w",
            InvalidCubeReason::MissingColor => "cube code must contain all six colors",
            InvalidCubeReason::UnevenDistribution => "cube code must contain each color exactly 9 times",
            InvalidCubeReason::DuplicateCenterColor => "cube code center stickers must all be distinct colors",
        };
        write!(f, "{s}")
    }
}

/// Errors surfaced across the codec/solver boundary.
#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SolverError {
    /// The caller omitted the cube text entirely.
    #[error("no cube text supplied")]
    InputMissing,

    /// The supplied text failed one of the five validation rules.
    #[error("invalid cube code: {0}")]
    InputMalformed(InvalidCubeReason),

    /// A stage produced a state that does not satisfy its own post-invariant.
    /// Must never happen for a cube that decoded successfully; treated as a
    /// fatal assertion rather than a panic so an embedding caller gets an
    /// `Err` instead of a process abort.
    #[error("internal solver invariant violated: {0}")]
    ProgrammerError(String),
}
