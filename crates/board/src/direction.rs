/// One of the 8 compass directions scanned from a placement.
///
/// Offsets are `(dx, dy)` with `y` growing downward, so `N` is `(0, -1)`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Direction {
    NW,
    N,
    NE,
    W,
    E,
    SW,
    S,
    SE,
}

impl Direction {
    /// Scan order. Row-major over the 3x3 neighborhood, skipping the center.
    pub const ALL: [Self; 8] = [
        Self::NW,
        Self::N,
        Self::NE,
        Self::W,
        Self::E,
        Self::SW,
        Self::S,
        Self::SE,
    ];
    pub fn offset(&self) -> (isize, isize) {
        match self {
            Self::NW => (-1, -1),
            Self::N => (0, -1),
            Self::NE => (1, -1),
            Self::W => (-1, 0),
            Self::E => (1, 0),
            Self::SW => (-1, 1),
            Self::S => (0, 1),
            Self::SE => (1, 1),
        }
    }
}
