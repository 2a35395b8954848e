use qrv_board::*;
use qrv_core::Weight;

/// Summary of one accepted move and the generation it produced.
///
/// Superseded generations are dropped wholesale; a `Ply` is what remains of them.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "client", derive(serde::Serialize))]
pub struct Ply {
    /// Generation index the move was played on.
    pub turn: usize,
    pub square: Square,
    /// Color asserted by the mover.
    pub color: Color,
    /// Population of the produced generation, after any ceiling.
    pub population: usize,
    /// Realizations removed by the ceiling.
    pub pruned: usize,
    pub total_weight: Weight,
}

impl std::fmt::Display for Ply {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{:>3}. {} {} -> {} realizations",
            self.turn + 1,
            self.color,
            self.square,
            self.population
        )?;
        if self.pruned > 0 {
            write!(f, " ({} pruned)", self.pruned)?;
        }
        Ok(())
    }
}

/// The remembered past of an [`Ensemble`](super::Ensemble): one [`Ply`] per turn.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Lineage(Vec<Ply>);

impl Lineage {
    pub fn push(&mut self, ply: Ply) {
        self.0.push(ply);
    }
    pub fn plies(&self) -> &[Ply] {
        &self.0
    }
    pub fn last(&self) -> Option<&Ply> {
        self.0.last()
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for Lineage {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for ply in self.0.iter() {
            writeln!(f, "{}", ply)?;
        }
        Ok(())
    }
}
