use super::color::Color;

/// Contents of a single square in one realization.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
#[cfg_attr(feature = "client", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    Black,
    White,
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
    /// The stone color, if any.
    pub fn color(&self) -> Option<Color> {
        match self {
            Self::Black => Some(Color::Black),
            Self::White => Some(Color::White),
            Self::Empty => None,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::Black => Self::Black,
            Color::White => Self::White,
        }
    }
}

/// char isomorphism, as used by the fixture parser
impl TryFrom<char> for Cell {
    type Error = anyhow::Error;
    fn try_from(c: char) -> Result<Self, Self::Error> {
        match c {
            'X' | 'x' | 'B' | 'b' => Ok(Self::Black),
            'O' | 'o' | 'W' | 'w' => Ok(Self::White),
            '.' | '-' => Ok(Self::Empty),
            other => Err(anyhow::anyhow!("invalid cell character {:?}", other)),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.color() {
            Some(color) => write!(f, "{}", color),
            None => write!(f, "."),
        }
    }
}
