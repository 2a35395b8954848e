use super::direction::Direction;
use qrv_core::CELLS;
use qrv_core::SIZE;

/// A coordinate on the board, encoded as a single byte.
///
/// The `CELLS` squares are bijectively mapped to `0..CELLS` in row-major
/// order, `y * SIZE + x`, with `(0, 0)` in the upper-left corner.
///
/// # Representations
///
/// - `(usize, usize)`: `(x, y)` column and row, fallible on the way in
/// - `u8`: compact index for array indexing
/// - `u64`: single-bit mask for set membership in a [`Grid`]
/// - `&str`: algebraic notation `a1` through `f6`, column letter then row digit
///
/// [`Grid`]: super::grid::Grid
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Square(u8);

impl Square {
    /// Column, counted from the left edge.
    pub fn x(&self) -> usize {
        self.0 as usize % SIZE
    }
    /// Row, counted from the top edge.
    pub fn y(&self) -> usize {
        self.0 as usize / SIZE
    }
    /// The adjacent square in the given direction, or `None` past the edge.
    pub fn step(&self, direction: Direction) -> Option<Self> {
        let (dx, dy) = direction.offset();
        let x = self.x().checked_add_signed(dx)?;
        let y = self.y().checked_add_signed(dy)?;
        Self::try_from((x, y)).ok()
    }
    /// Every square in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..CELLS as u8).map(Self)
    }
}

/// (x, y) isomorphism
impl TryFrom<(usize, usize)> for Square {
    type Error = anyhow::Error;
    fn try_from((x, y): (usize, usize)) -> Result<Self, Self::Error> {
        match x < SIZE && y < SIZE {
            true => Ok(Self((y * SIZE + x) as u8)),
            false => Err(anyhow::anyhow!("({}, {}) is off the board", x, y)),
        }
    }
}
impl From<Square> for (usize, usize) {
    fn from(square: Square) -> Self {
        (square.x(), square.y())
    }
}

/// u8 isomorphism
impl From<Square> for u8 {
    fn from(square: Square) -> Self {
        square.0
    }
}

/// u64 representation
/// each square is just one bit turned on. this is a one-way morphism
impl From<Square> for u64 {
    fn from(square: Square) -> Self {
        1 << square.0
    }
}

/// str isomorphism
impl TryFrom<&str> for Square {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let mut chars = s.trim().chars();
        match (chars.next(), chars.next(), chars.next()) {
            (Some(col), Some(row), None) => {
                let x = (col.to_ascii_lowercase() as usize).wrapping_sub('a' as usize);
                let y = row
                    .to_digit(10)
                    .map(|d| d as usize)
                    .and_then(|d| d.checked_sub(1))
                    .ok_or_else(|| anyhow::anyhow!("invalid row {:?}", row))?;
                Self::try_from((x, y))
            }
            _ => Err(anyhow::anyhow!("2 characters")),
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}", (b'a' + self.x() as u8) as char, self.y() + 1)
    }
}

impl qrv_core::Arbitrary for Square {
    fn random() -> Self {
        Self(rand::random_range(0..CELLS as u8))
    }
}
