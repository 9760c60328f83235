use std::fmt;
use std::str::FromStr;

use crate::{Face, Sign};

/// Direction and magnitude of a face twist.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TwistDirection {
    /// Clockwise quarter turn (no suffix).
    #[default]
    CW,
    /// Counterclockwise quarter turn (`'` suffix).
    CCW,
    /// Half turn (`2` suffix).
    Half,
}
impl fmt::Display for TwistDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}
impl TwistDirection {
    /// List of all twist directions, in the order used for scrambling.
    pub const ALL: [TwistDirection; 3] = [Self::CW, Self::CCW, Self::Half];

    /// Returns the reverse direction. A half turn is its own reverse.
    #[must_use]
    pub const fn rev(self) -> Self {
        match self {
            Self::CW => Self::CCW,
            Self::CCW => Self::CW,
            Self::Half => Self::Half,
        }
    }

    /// Returns the number of clockwise quarter turns that have the same effect
    /// on the facelet state: 1, 2, or 3.
    pub const fn quarter_turns(self) -> usize {
        match self {
            Self::CW => 1,
            Self::Half => 2,
            Self::CCW => 3,
        }
    }

    /// Returns the number of quarter turns that the layer visibly rotates
    /// through, with sign. Clockwise and half turns are positive.
    pub const fn signed_quarter_turns(self) -> i8 {
        match self {
            Self::CW => 1,
            Self::Half => 2,
            Self::CCW => -1,
        }
    }

    /// Returns the suffix used in notation.
    pub const fn suffix(self) -> &'static str {
        match self {
            Self::CW => "",
            Self::CCW => "'",
            Self::Half => "2",
        }
    }
}

/// Twist of a single outer layer, written as a move token such as `R`, `R'`,
/// or `R2`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Twist {
    /// Face whose layer is turned.
    pub face: Face,
    /// Direction of the turn.
    pub direction: TwistDirection,
}
impl fmt::Display for Twist {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.face, self.direction)
    }
}
impl FromStr for Twist {
    type Err = TwistParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let first = chars.next().ok_or(TwistParseError::Empty)?;
        let face = Face::from_letter(first).ok_or(TwistParseError::BadFace(first))?;
        let direction = match chars.as_str() {
            "" => TwistDirection::CW,
            "'" => TwistDirection::CCW,
            "2" => TwistDirection::Half,
            other => return Err(TwistParseError::BadModifier(other.to_owned())),
        };
        Ok(Self { face, direction })
    }
}
impl Twist {
    /// Returns a twist of `face` in `direction`.
    pub const fn new(face: Face, direction: TwistDirection) -> Self {
        Self { face, direction }
    }

    /// Returns the twist that undoes this one.
    #[must_use]
    pub const fn rev(self) -> Self {
        Self {
            face: self.face,
            direction: self.direction.rev(),
        }
    }

    /// Returns the rotation sign of a plain twist of this face about its axis.
    /// Twists of U, R, and F rotate positively; D, L, and B negatively.
    pub const fn axis_sign(self) -> Sign {
        self.face.sign()
    }

    /// Returns an iterator over all 18 single-layer twists.
    pub fn iter() -> impl Iterator<Item = Twist> {
        Face::ALL.into_iter().flat_map(|face| {
            TwistDirection::ALL
                .into_iter()
                .map(move |direction| Twist::new(face, direction))
        })
    }
}

/// Error encountered while parsing a move token.
#[allow(missing_docs)]
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TwistParseError {
    #[error("empty move token")]
    Empty,
    #[error("bad face letter: {0:?}")]
    BadFace(char),
    #[error("bad move modifier: {0:?}")]
    BadModifier(String),
}
