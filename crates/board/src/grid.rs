use super::cell::Cell;
use super::color::Color;
use super::direction::Direction;
use super::square::Square;
use qrv_core::CELLS;
use qrv_core::CENTER;
use qrv_core::SIZE;

/// One fully deterministic board.
///
/// Stored as a pair of disjoint occupancy masks, one bit per [`Square`].
/// `Grid` is `Copy`, so deriving a child board never aliases its parent:
/// [`apply`](Self::apply) takes `&self` and returns a fresh value.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub struct Grid {
    black: u64,
    white: u64,
}

impl Grid {
    pub fn empty() -> Self {
        Self::default()
    }
    /// One of the [`SEEDS`](qrv_core::SEEDS) opening boards.
    ///
    /// Bit `k` of `index` colors the `k`-th center cell, Black when set.
    /// Center cells are ordered upper-left, upper-right, lower-left, lower-right.
    pub fn seed(index: usize) -> Self {
        debug_assert!(index < qrv_core::SEEDS);
        let mut grid = Self::empty();
        [
            (CENTER - 1, CENTER - 1),
            (CENTER, CENTER - 1),
            (CENTER - 1, CENTER),
            (CENTER, CENTER),
        ]
        .into_iter()
        .filter_map(|xy| Square::try_from(xy).ok())
        .enumerate()
        .map(|(k, square)| match (index >> k) & 1 {
            1 => (square, Color::Black),
            _ => (square, Color::White),
        })
        .for_each(|(square, color)| grid.set(square, color));
        grid
    }
}

/// Cell accessors.
impl Grid {
    pub fn cell(&self, square: Square) -> Cell {
        let bit = u64::from(square);
        if self.black & bit != 0 {
            Cell::Black
        } else if self.white & bit != 0 {
            Cell::White
        } else {
            Cell::Empty
        }
    }
    pub fn is_vacant(&self, square: Square) -> bool {
        self.occupied() & u64::from(square) == 0
    }
    /// Mask of every non-empty square. Two grids share topology iff their masks match.
    pub fn occupied(&self) -> u64 {
        self.black | self.white
    }
    /// Mask of squares holding a stone of the given color.
    pub fn stones(&self, color: Color) -> u64 {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
    pub fn count(&self, color: Color) -> usize {
        self.stones(color).count_ones() as usize
    }
    fn set(&mut self, square: Square, color: Color) {
        let bit = u64::from(square);
        match color {
            Color::Black => {
                self.black |= bit;
                self.white &= !bit;
            }
            Color::White => {
                self.white |= bit;
                self.black &= !bit;
            }
        }
    }
}

/// Reversi rules.
impl Grid {
    /// Number of opposite stones bracketed from `square` toward `direction`.
    ///
    /// Counts the contiguous run of opposite-colored stones starting at the
    /// neighbor. The run only counts when a `color` stone closes it; running
    /// into an empty square or off the board yields 0.
    pub fn run(&self, square: Square, direction: Direction, color: Color) -> usize {
        let mut count = 0;
        let mut cursor = square;
        while let Some(next) = cursor.step(direction) {
            match self.cell(next).color() {
                None => return 0,
                Some(c) if c == color => return count,
                Some(_) => count += 1,
            }
            cursor = next;
        }
        0
    }
    /// Whether a `color` stone may legally be placed at `square`.
    pub fn can_place(&self, square: Square, color: Color) -> bool {
        self.is_vacant(square)
            && Direction::ALL
                .iter()
                .any(|&direction| self.run(square, direction, color) > 0)
    }
    /// The board after placing a `color` stone at `square` and flipping every bracketed run.
    pub fn apply(&self, square: Square, color: Color) -> Self {
        debug_assert!(self.can_place(square, color));
        let mut child = *self;
        for direction in Direction::ALL {
            std::iter::successors(square.step(direction), |s| s.step(direction))
                .take(self.run(square, direction, color))
                .for_each(|flip| child.set(flip, color));
        }
        child.set(square, color);
        child
    }
}

/// str isomorphism
/// rows are separated by whitespace or '/', cells are X/B, O/W, or '.'
impl TryFrom<&str> for Grid {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let cells = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '/')
            .map(Cell::try_from)
            .collect::<Result<Vec<Cell>, _>>()?;
        match cells.len() {
            CELLS => Ok(Square::all()
                .zip(cells)
                .filter_map(|(square, cell)| cell.color().map(|color| (square, color)))
                .fold(Self::empty(), |mut grid, (square, color)| {
                    grid.set(square, color);
                    grid
                })),
            n => Err(anyhow::anyhow!("expected {} cells, found {}", CELLS, n)),
        }
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for (i, square) in Square::all().enumerate() {
            write!(f, "{}", self.cell(square))?;
            if i % SIZE == SIZE - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(x: usize, y: usize) -> Square {
        Square::try_from((x, y)).unwrap()
    }

    /// the classic opening: white on the main diagonal, black on the anti-diagonal
    fn classic() -> Grid {
        Grid::seed(0b0110)
    }

    #[test]
    fn seeds_are_distinct_center_assignments() {
        let seeds = (0..qrv_core::SEEDS).map(Grid::seed).collect::<Vec<_>>();
        for (i, a) in seeds.iter().enumerate() {
            assert_eq!(a.occupied().count_ones(), 4);
            assert_eq!(a.occupied(), seeds[0].occupied());
            assert!(seeds[i + 1..].iter().all(|b| b != a));
        }
        assert_eq!(Grid::seed(0).count(Color::White), 4);
        assert_eq!(Grid::seed(15).count(Color::Black), 4);
    }

    #[test]
    fn seed_bit_order() {
        let grid = Grid::seed(0b0001);
        assert_eq!(grid.cell(at(CENTER - 1, CENTER - 1)), Cell::Black);
        assert_eq!(grid.count(Color::Black), 1);
        let grid = Grid::seed(0b0010);
        assert_eq!(grid.cell(at(CENTER, CENTER - 1)), Cell::Black);
        let grid = Grid::seed(0b0100);
        assert_eq!(grid.cell(at(CENTER - 1, CENTER)), Cell::Black);
        let grid = Grid::seed(0b1000);
        assert_eq!(grid.cell(at(CENTER, CENTER)), Cell::Black);
    }

    #[test]
    fn classic_opening_moves() {
        let grid = classic();
        let black = Square::all()
            .filter(|&s| grid.can_place(s, Color::Black))
            .collect::<Vec<_>>();
        assert_eq!(black.len(), 4);
        assert!(black.contains(&at(2, 1)));
        assert!(black.contains(&at(1, 2)));
        assert!(black.contains(&at(4, 3)));
        assert!(black.contains(&at(3, 4)));
    }

    #[test]
    fn run_requires_closing_stone() {
        let grid = Grid::try_from(
            "
            . O O X . .
            . O . . . .
            . . . . . .
            O . . . . .
            . . . . . .
            . . . . . .
            ",
        )
        .unwrap();
        assert_eq!(grid.run(at(0, 0), Direction::E, Color::Black), 2);
        assert_eq!(grid.run(at(0, 0), Direction::SE, Color::Black), 0); // runs into empty
        assert_eq!(grid.run(at(0, 0), Direction::S, Color::Black), 0); // neighbor empty
        assert_eq!(grid.run(at(0, 0), Direction::N, Color::Black), 0); // off board
        assert_eq!(grid.run(at(0, 0), Direction::E, Color::White), 0); // neighbor is own color
        assert!(grid.can_place(at(0, 0), Color::Black));
        assert!(!grid.can_place(at(0, 0), Color::White));
        assert!(!grid.can_place(at(1, 0), Color::Black)); // occupied
    }

    #[test]
    fn run_to_edge_does_not_count() {
        let grid = Grid::try_from(". O O O O O / ...... / ...... / ...... / ...... / ......").unwrap();
        assert_eq!(grid.run(at(0, 0), Direction::E, Color::Black), 0);
        assert!(!grid.can_place(at(0, 0), Color::Black));
    }

    #[test]
    fn apply_flips_every_bracketed_run() {
        let grid = Grid::try_from(
            "
            X . X . X .
            . O O O . .
            X O . O X .
            . O O O . .
            X . X . X .
            . . . . . .
            ",
        )
        .unwrap();
        let child = grid.apply(at(2, 2), Color::Black);
        assert_eq!(child.count(Color::White), 0);
        assert_eq!(child.count(Color::Black), grid.occupied().count_ones() as usize + 1);
        assert_eq!(child.occupied(), grid.occupied() | u64::from(at(2, 2)));
        assert_eq!(grid.cell(at(2, 2)), Cell::Empty); // parent untouched
    }

    #[test]
    fn apply_leaves_unbracketed_runs() {
        let grid = classic();
        let child = grid.apply(at(2, 1), Color::Black);
        assert_eq!(child.cell(at(2, 1)), Cell::Black);
        assert_eq!(child.cell(at(2, 2)), Cell::Black); // flipped
        assert_eq!(child.cell(at(3, 3)), Cell::White); // untouched
        assert_eq!(child.count(Color::Black), 4);
        assert_eq!(child.count(Color::White), 1);
    }

    #[test]
    fn bijective_str() {
        let grid = classic().apply(at(2, 1), Color::Black);
        assert_eq!(grid, Grid::try_from(grid.to_string().as_str()).unwrap());
    }

    #[test]
    fn rejects_malformed_fixtures() {
        assert!(Grid::try_from("X O .").is_err());
        assert!(Grid::try_from("? ? ? ? ? ? / ...... / ...... / ...... / ...... / ......").is_err());
    }
}
