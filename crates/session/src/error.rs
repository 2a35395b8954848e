use qrv_ensemble::Illegal;
use qrv_ensemble::Invariant;

/// Why [`Session::submit`](super::Session::submit) refused a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    /// The move is not legal for the color to move. Nothing changed.
    Illegal(Illegal),
    /// The game has already ended.
    Finished,
    /// The ensemble broke an invariant, now or on an earlier move. The session is dead.
    Faulted(Invariant),
}

impl From<Illegal> for SessionError {
    fn from(illegal: Illegal) -> Self {
        Self::Illegal(illegal)
    }
}

impl std::fmt::Display for SessionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Illegal(e) => write!(f, "{}", e),
            Self::Finished => write!(f, "game is over"),
            Self::Faulted(e) => write!(f, "session faulted: {}", e),
        }
    }
}

impl std::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Illegal(e) => Some(e),
            Self::Faulted(e) => Some(e),
            Self::Finished => None,
        }
    }
}
