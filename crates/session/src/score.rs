use super::status::Outcome;
use super::tone::Tone;
use qrv_board::*;
use qrv_ensemble::Generation;

/// Stone counts credited to each side under the [`Tone`] bucketing rule.
#[derive(Debug, Clone, Copy, Default, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    pub fn outcome(&self) -> Outcome {
        match self.black.cmp(&self.white) {
            std::cmp::Ordering::Greater => Outcome::Won(Color::Black),
            std::cmp::Ordering::Less => Outcome::Won(Color::White),
            std::cmp::Ordering::Equal => Outcome::Draw,
        }
    }
}

impl From<&Generation> for Score {
    fn from(generation: &Generation) -> Self {
        Square::all()
            .filter_map(|square| generation.black_probability(square))
            .map(Tone::from)
            .filter_map(|tone| tone.side())
            .fold(Self::default(), |mut score, side| {
                match side {
                    Color::Black => score.black += 1,
                    Color::White => score.white += 1,
                }
                score
            })
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "Black {} - White {}", self.black, self.white)
    }
}
