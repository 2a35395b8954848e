use super::generation::Generation;

/// Population policy applied to each freshly branched generation.
///
/// Branching can double the population every turn. `Unbounded` keeps every
/// realization, which is the exact probabilistic game. `Capped(n)` keeps the
/// `n` heaviest realizations and renormalizes over the survivors, trading
/// exactness for bounded memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ceiling {
    #[default]
    Unbounded,
    Capped(usize),
}

impl Ceiling {
    pub fn enforce(&self, generation: Generation) -> Generation {
        match self {
            Self::Capped(n) if generation.population() > *n => {
                let pruned = generation.heaviest(*n);
                log::debug!(
                    "pruned generation {} from {} to {} realizations",
                    generation.turn(),
                    generation.population(),
                    pruned.population()
                );
                pruned
            }
            _ => generation,
        }
    }
}

/// 0 means no cap, as on the command line
impl From<usize> for Ceiling {
    fn from(n: usize) -> Self {
        match n {
            0 => Self::Unbounded,
            n => Self::Capped(n),
        }
    }
}

impl std::fmt::Display for Ceiling {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Unbounded => write!(f, "unbounded"),
            Self::Capped(n) => write!(f, "capped at {}", n),
        }
    }
}
