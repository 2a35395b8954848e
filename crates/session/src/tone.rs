use qrv_board::Color;
use qrv_core::Percent;

/// Aggregate appearance of an occupied square, bucketed from its black probability.
///
/// - `White`: 0%, white in every realization
/// - `Black`: 100%, black in every realization
/// - `Contested`: exactly 50%
/// - `Mixed(p)`: anything else
///
/// Scoring credits a square to whichever side its tone leans toward.
/// `Contested` squares count for neither side.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Tone {
    White,
    Contested,
    Black,
    Mixed(Percent),
}

impl Tone {
    /// The side this square is credited to, if any.
    pub fn side(&self) -> Option<Color> {
        match self {
            Self::White => Some(Color::White),
            Self::Black => Some(Color::Black),
            Self::Contested => None,
            Self::Mixed(p) if *p > 50 => Some(Color::Black),
            Self::Mixed(p) if *p < 50 => Some(Color::White),
            Self::Mixed(_) => None,
        }
    }
}

impl From<Percent> for Tone {
    fn from(p: Percent) -> Self {
        debug_assert!(p <= 100);
        match p {
            0 => Self::White,
            50 => Self::Contested,
            100 => Self::Black,
            p => Self::Mixed(p),
        }
    }
}

impl std::fmt::Display for Tone {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::White => write!(f, " O"),
            Self::Black => write!(f, " X"),
            Self::Contested => write!(f, "50"),
            Self::Mixed(p) => write!(f, "{:>2}", p),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets() {
        assert_eq!(Tone::from(0), Tone::White);
        assert_eq!(Tone::from(50), Tone::Contested);
        assert_eq!(Tone::from(100), Tone::Black);
        assert_eq!(Tone::from(1), Tone::Mixed(1));
        assert_eq!(Tone::from(99), Tone::Mixed(99));
    }

    #[test]
    fn sides() {
        assert_eq!(Tone::from(0).side(), Some(Color::White));
        assert_eq!(Tone::from(49).side(), Some(Color::White));
        assert_eq!(Tone::from(50).side(), None);
        assert_eq!(Tone::from(51).side(), Some(Color::Black));
        assert_eq!(Tone::from(100).side(), Some(Color::Black));
    }

    #[test]
    fn two_column_glyphs() {
        assert_eq!(Tone::from(0).to_string(), " O");
        assert_eq!(Tone::from(100).to_string(), " X");
        assert_eq!(Tone::from(50).to_string(), "50");
        assert_eq!(Tone::from(7).to_string(), " 7");
        assert_eq!(Tone::from(93).to_string(), "93");
        for p in 0..=100 {
            assert_eq!(Tone::from(p).to_string().chars().count(), 2);
        }
    }
}
