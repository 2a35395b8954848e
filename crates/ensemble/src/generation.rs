use super::error::Invariant;
use qrv_board::*;
use qrv_core::Percent;
use qrv_core::Weight;

/// Every realization alive after `turn` moves, in canonical creation order.
///
/// All members share the same set of occupied squares; only stone colors
/// differ between them. [`new`](Self::new) verifies this once, so the
/// occupancy queries below read it off the first member.
///
/// The total weight is the denominator of every probability query.
#[derive(Debug, Clone, PartialEq)]
pub struct Generation {
    turn: usize,
    members: Vec<Realization>,
    total: Weight,
}

impl Generation {
    /// Validates topology and sums weights.
    pub fn new(turn: usize, members: Vec<Realization>) -> Result<Self, Invariant> {
        let occupied = members
            .first()
            .map(|r| r.grid().occupied())
            .ok_or(Invariant::Barren { turn })?;
        if let Some(index) = members
            .iter()
            .position(|r| r.grid().occupied() != occupied)
        {
            return Err(Invariant::Divergent { turn, index });
        }
        let total = members.iter().map(Realization::weight).sum();
        Ok(Self {
            turn,
            members,
            total,
        })
    }
    /// The opening generation: one unit-weight realization per center assignment.
    pub fn seed() -> Self {
        let members = (0..qrv_core::SEEDS)
            .map(Realization::seed)
            .collect::<Vec<_>>();
        Self {
            turn: 0,
            total: members.iter().map(Realization::weight).sum(),
            members,
        }
    }
}

/// Accessors.
impl Generation {
    pub fn turn(&self) -> usize {
        self.turn
    }
    pub fn members(&self) -> &[Realization] {
        &self.members
    }
    pub fn population(&self) -> usize {
        self.members.len()
    }
    pub fn total_weight(&self) -> Weight {
        self.total
    }
    /// Occupancy mask shared by every member.
    pub fn occupied(&self) -> u64 {
        self.head().grid().occupied()
    }
    fn head(&self) -> &Realization {
        &self.members[0]
    }
}

/// Aggregate queries across all members.
impl Generation {
    /// True iff the square is empty in every realization.
    pub fn is_vacant(&self, square: Square) -> bool {
        self.head().grid().is_vacant(square)
    }
    /// Weighted share of realizations holding a black stone on `square`, rounded to a percent.
    ///
    /// `None` when the square is empty everywhere.
    pub fn black_probability(&self, square: Square) -> Option<Percent> {
        if self.is_vacant(square) {
            return None;
        }
        let black = self
            .members
            .iter()
            .filter(|r| r.grid().cell(square) == Cell::Black)
            .map(Realization::weight)
            .sum::<Weight>();
        Some((100. * black / self.total).round().clamp(0., 100.) as Percent)
    }
    /// True iff at least one realization can play `color` on `square`.
    pub fn supports(&self, square: Square, color: Color) -> bool {
        self.members.iter().any(|r| r.can_place(square, color))
    }
    /// Every square `color` may play somewhere in the ensemble.
    pub fn playable(&self, color: Color) -> impl Iterator<Item = Square> + '_ {
        Square::all().filter(move |&square| self.supports(square, color))
    }
}

/// Transitions.
impl Generation {
    /// The next generation after a move at `square` asserting `asserted`.
    ///
    /// Each member contributes a Black child then a White child, each only
    /// if that color is legal for the member. Members are visited in order,
    /// which fixes the canonical order of the result. Children matching the
    /// asserted color gain weight by the abundance ratio.
    pub fn branch(&self, square: Square, asserted: Color) -> Result<Self, Invariant> {
        let children = self
            .members
            .iter()
            .flat_map(|parent| {
                Color::ALL
                    .into_iter()
                    .filter(move |&color| parent.can_place(square, color))
                    .map(move |color| parent.derive(square, color, asserted))
            })
            .collect::<Vec<_>>();
        Self::new(self.turn + 1, children)
    }
    /// The `n` heaviest members, kept in canonical order.
    ///
    /// Ties in weight favor the earlier member. At least one member survives.
    pub fn heaviest(&self, n: usize) -> Self {
        let mut ranked = (0..self.members.len()).collect::<Vec<_>>();
        ranked.sort_by(|&i, &j| {
            let wi = self.members[i].weight();
            let wj = self.members[j].weight();
            wj.total_cmp(&wi).then(i.cmp(&j))
        });
        ranked.truncate(n.max(1));
        ranked.sort_unstable();
        let members = ranked
            .into_iter()
            .map(|i| self.members[i])
            .collect::<Vec<_>>();
        Self {
            turn: self.turn,
            total: members.iter().map(Realization::weight).sum(),
            members,
        }
    }
}

impl std::fmt::Display for Generation {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "generation {:>2} | {:>7} realizations | weight {:.4}",
            self.turn,
            self.population(),
            self.total
        )
    }
}
