use qrv_board::Color;

/// How a finished game ended.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Won(Color),
    Draw,
}

/// Whether the session accepts moves, and from whom.
///
/// - `InProgress(color)`: `color` is to move
/// - `Over(outcome)`: terminal, no further moves are accepted
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Status {
    InProgress(Color),
    Over(Outcome),
}

impl Status {
    pub fn is_over(&self) -> bool {
        matches!(self, Self::Over(_))
    }
    /// The color to move, if the game is still running.
    pub fn mover(&self) -> Option<Color> {
        match self {
            Self::InProgress(color) => Some(*color),
            Self::Over(_) => None,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Won(color) => write!(f, "{} wins", color.label()),
            Self::Draw => write!(f, "draw"),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::InProgress(color) => write!(f, "{} to move", color.label()),
            Self::Over(outcome) => write!(f, "game over, {}", outcome),
        }
    }
}
