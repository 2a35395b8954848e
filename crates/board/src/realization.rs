use super::color::Color;
use super::grid::Grid;
use super::square::Square;
use qrv_core::Weight;

/// A single deterministic board within the ensemble, with its relative weight.
///
/// Realizations are immutable once created. A move produces a child through
/// [`derive`](Self::derive), which copies the grid and leaves the parent as is.
/// Weight is strictly positive for every live realization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Realization {
    grid: Grid,
    weight: Weight,
}

impl Realization {
    /// The `index`-th opening realization, at unit weight.
    pub fn seed(index: usize) -> Self {
        Self {
            grid: Grid::seed(index),
            weight: qrv_core::SEED_WEIGHT,
        }
    }
    pub fn grid(&self) -> &Grid {
        &self.grid
    }
    pub fn weight(&self) -> Weight {
        self.weight
    }
    pub fn can_place(&self, square: Square, color: Color) -> bool {
        self.grid.can_place(square, color)
    }
    /// The child realization where a `color` stone lands on `square`.
    ///
    /// A child whose color matches the `asserted` color of the move is
    /// [`ABUNDANCE_RATIO`](qrv_core::ABUNDANCE_RATIO) times heavier than its
    /// parent. The other child inherits the parent weight unchanged.
    pub fn derive(&self, square: Square, color: Color, asserted: Color) -> Self {
        Self {
            grid: self.grid.apply(square, color),
            weight: match color == asserted {
                true => self.weight * qrv_core::ABUNDANCE_RATIO,
                false => self.weight,
            },
        }
    }
}

impl From<Grid> for Realization {
    fn from(grid: Grid) -> Self {
        Self::from((grid, qrv_core::SEED_WEIGHT))
    }
}
impl From<(Grid, Weight)> for Realization {
    fn from((grid, weight): (Grid, Weight)) -> Self {
        debug_assert!(weight > 0.);
        Self { grid, weight }
    }
}

impl std::fmt::Display for Realization {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "weight {:.4}", self.weight)?;
        write!(f, "{}", self.grid)
    }
}
