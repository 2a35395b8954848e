use super::*;
use qrv_board::*;
use qrv_core::Percent;
use qrv_ensemble::*;

/// A game of probabilistic Reversi, from the opening to the final count.
///
/// `Session` is the only mutable surface a renderer touches. It holds the
/// [`Ensemble`] and the bookkeeping that sits on top of it: whose move it
/// is, the current [`Score`], and the [`Status`].
///
/// # Turn cycle
///
/// [`submit`](Self::submit) asks the ensemble to branch on the mover's asserted
/// color, recounts the score, then hands the move to the other color. If the
/// other color has no playable square anywhere in the ensemble, the game ends
/// and the score decides the winner. There are no passes. The end-of-game scan
/// checks the color due to move next, not Black, so a lopsided fixture ends
/// exactly when its next mover is stuck.
///
/// # Faults
///
/// An [`Invariant`] reported by the ensemble is fatal. The session logs it
/// and refuses every later move with [`SessionError::Faulted`].
#[derive(Debug, Clone)]
pub struct Session {
    ensemble: Ensemble,
    active: Color,
    score: Score,
    status: Status,
    fault: Option<Invariant>,
}

impl Default for Session {
    fn default() -> Self {
        Self::from((Ensemble::default(), Color::Black))
    }
}

/// Resume from an arbitrary ensemble with `color` to move.
///
/// A position where `color` has no playable square is already over.
impl From<(Ensemble, Color)> for Session {
    fn from((ensemble, active): (Ensemble, Color)) -> Self {
        let score = Score::from(ensemble.current());
        let status = match ensemble.current().playable(active).next() {
            Some(_) => Status::InProgress(active),
            None => Status::Over(score.outcome()),
        };
        Self {
            ensemble,
            active,
            score,
            status,
            fault: None,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn with_ceiling(ceiling: Ceiling) -> Self {
        Self::from((Ensemble::default().with_ceiling(ceiling), Color::Black))
    }
    /// Side length of the board.
    pub fn side() -> usize {
        qrv_core::SIZE
    }
}

/// Read-only queries for the renderer.
impl Session {
    pub fn turn(&self) -> usize {
        self.ensemble.turn()
    }
    /// The color whose move it is, or whose move ended the game.
    pub fn active(&self) -> Color {
        self.active
    }
    pub fn status(&self) -> Status {
        self.status
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn ensemble(&self) -> &Ensemble {
        &self.ensemble
    }
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from(self)
    }
    /// Whether the color to move may play `(x, y)`. Always false once the game is over.
    pub fn is_playable(&self, x: usize, y: usize) -> bool {
        match (self.status.mover(), Square::try_from((x, y))) {
            (Some(color), Ok(square)) => self.ensemble.current().supports(square, color),
            _ => false,
        }
    }
    /// Percent chance `(x, y)` is black, `None` if empty everywhere or off the board.
    pub fn black_probability(&self, x: usize, y: usize) -> Option<Percent> {
        Square::try_from((x, y))
            .ok()
            .and_then(|square| self.ensemble.current().black_probability(square))
    }
}

/// The single mutating entry point.
impl Session {
    /// Plays the color to move at `(x, y)` and advances the turn.
    pub fn submit(&mut self, x: usize, y: usize) -> Result<(), SessionError> {
        if let Some(fault) = self.fault {
            return Err(SessionError::Faulted(fault));
        }
        let color = self.status.mover().ok_or(SessionError::Finished)?;
        let square = Square::try_from((x, y)).map_err(|_| Illegal::Outside { x, y })?;
        match self.ensemble.advance(square, color) {
            Ok(generation) => log::info!("{} {} | {}", color, square, generation),
            Err(EnsembleError::Illegal(illegal)) => {
                log::warn!("{}", illegal);
                return Err(SessionError::Illegal(illegal));
            }
            Err(EnsembleError::Invariant(invariant)) => {
                log::error!("{}", invariant);
                self.fault = Some(invariant);
                return Err(SessionError::Faulted(invariant));
            }
        }
        self.score = Score::from(self.ensemble.current());
        self.turnover(color);
        Ok(())
    }
    fn turnover(&mut self, mover: Color) {
        let next = !mover;
        match self.ensemble.current().playable(next).next() {
            Some(_) => {
                self.active = next;
                self.status = Status::InProgress(next);
            }
            None => {
                self.status = Status::Over(self.score.outcome());
                log::info!("{} | {}", self.status, self.score);
            }
        }
    }
}
