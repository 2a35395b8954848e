use super::*;
use qrv_board::*;

/// What a renderer draws on one square.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Shade {
    /// Empty, and playable by the color to move.
    Hint,
    /// Empty everywhere.
    Vacant,
    /// Occupied, drawn by its aggregate tone.
    Stone(Tone),
}

/// Read-only picture of a [`Session`] at one instant.
///
/// `cells` holds one [`Shade`] per square in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Snapshot {
    pub side: usize,
    pub turn: usize,
    pub active: Color,
    pub status: Status,
    pub score: Score,
    pub population: usize,
    pub cells: Vec<Shade>,
}

impl Snapshot {
    pub fn at(&self, x: usize, y: usize) -> Option<Shade> {
        Square::try_from((x, y))
            .ok()
            .map(u8::from)
            .and_then(|i| self.cells.get(i as usize).copied())
    }
}

impl From<&Session> for Snapshot {
    fn from(session: &Session) -> Self {
        let generation = session.ensemble().current();
        let mover = session.status().mover();
        let cells = Square::all()
            .map(|square| match generation.black_probability(square) {
                Some(p) => Shade::Stone(Tone::from(p)),
                None if mover.is_some_and(|c| generation.supports(square, c)) => Shade::Hint,
                None => Shade::Vacant,
            })
            .collect();
        Self {
            side: Session::side(),
            turn: session.turn(),
            active: session.active(),
            status: session.status(),
            score: session.score(),
            population: generation.population(),
            cells,
        }
    }
}
