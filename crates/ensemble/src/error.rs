use qrv_board::*;

/// A move the ensemble refuses. Rejection leaves every generation untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Illegal {
    /// The coordinate lies off the board.
    Outside { x: usize, y: usize },
    /// Every realization already holds a stone on the square.
    Occupied(Square),
    /// No realization lets the color flip anything from the square.
    Unsupported(Square, Color),
}

impl std::fmt::Display for Illegal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Outside { x, y } => write!(f, "illegal move: ({}, {}) is off the board", x, y),
            Self::Occupied(square) => write!(f, "illegal move: {} is occupied", square),
            Self::Unsupported(square, color) => {
                write!(f, "illegal move: {} cannot play {}", color.label(), square)
            }
        }
    }
}

impl std::error::Error for Illegal {}

/// A broken structural guarantee of the ensemble. Indicates a defect, never a user error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Invariant {
    /// A generation with no realizations.
    Barren { turn: usize },
    /// A realization whose occupied squares differ from the first member's.
    Divergent { turn: usize, index: usize },
}

impl std::fmt::Display for Invariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Barren { turn } => {
                write!(f, "invariant violation: generation {} has no realizations", turn)
            }
            Self::Divergent { turn, index } => write!(
                f,
                "invariant violation: realization {} of generation {} diverges in topology",
                index, turn
            ),
        }
    }
}

impl std::error::Error for Invariant {}

/// Any failure of [`Ensemble::advance`](super::Ensemble::advance).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnsembleError {
    Illegal(Illegal),
    Invariant(Invariant),
}

impl From<Illegal> for EnsembleError {
    fn from(illegal: Illegal) -> Self {
        Self::Illegal(illegal)
    }
}
impl From<Invariant> for EnsembleError {
    fn from(invariant: Invariant) -> Self {
        Self::Invariant(invariant)
    }
}

impl std::fmt::Display for EnsembleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Illegal(e) => write!(f, "{}", e),
            Self::Invariant(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for EnsembleError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Illegal(e) => Some(e),
            Self::Invariant(e) => Some(e),
        }
    }
}
