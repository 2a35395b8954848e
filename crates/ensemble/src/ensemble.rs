use super::*;
use qrv_board::*;

/// Owner of the live [`Generation`] and the record of how it was reached.
///
/// Only the latest generation is kept in memory. Each accepted move replaces
/// it with its branched successor and appends a [`Ply`] to the [`Lineage`].
#[derive(Debug, Clone, PartialEq)]
pub struct Ensemble {
    current: Generation,
    ceiling: Ceiling,
    lineage: Lineage,
}

impl Default for Ensemble {
    fn default() -> Self {
        Self::from(Generation::seed())
    }
}

impl From<Generation> for Ensemble {
    fn from(current: Generation) -> Self {
        Self {
            current,
            ceiling: Ceiling::default(),
            lineage: Lineage::default(),
        }
    }
}

impl Ensemble {
    pub fn with_ceiling(mut self, ceiling: Ceiling) -> Self {
        self.ceiling = ceiling;
        self
    }
    pub fn current(&self) -> &Generation {
        &self.current
    }
    pub fn turn(&self) -> usize {
        self.current.turn()
    }
    pub fn ceiling(&self) -> Ceiling {
        self.ceiling
    }
    pub fn lineage(&self) -> &Lineage {
        &self.lineage
    }
}

impl Ensemble {
    /// Whether `color` may be asserted on `square` in the current generation.
    pub fn check(&self, square: Square, color: Color) -> Result<(), Illegal> {
        if !self.current.is_vacant(square) {
            Err(Illegal::Occupied(square))
        } else if !self.current.supports(square, color) {
            Err(Illegal::Unsupported(square, color))
        } else {
            Ok(())
        }
    }
    /// Plays `color` on `square` and replaces the current generation with its successor.
    ///
    /// Rejected moves leave the ensemble untouched. A successor that fails
    /// validation is reported as an [`Invariant`] and also leaves it untouched.
    pub fn advance(&mut self, square: Square, color: Color) -> Result<&Generation, EnsembleError> {
        self.check(square, color)?;
        let branched = self.current.branch(square, color)?;
        let population = branched.population();
        let next = self.ceiling.enforce(branched);
        let ply = Ply {
            turn: self.current.turn(),
            square,
            color,
            population: next.population(),
            pruned: population - next.population(),
            total_weight: next.total_weight(),
        };
        log::debug!("{}", ply);
        self.lineage.push(ply);
        self.current = next;
        Ok(&self.current)
    }
}
