use crate::{Color, Sign};

/// A 3-dimensional axis.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Axis {
    /// X axis (right).
    X = 0,
    /// Y axis (up).
    Y = 1,
    /// Z axis (towards the camera).
    Z = 2,
}
impl Axis {
    /// List of all axes.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Returns an integer index for this axis; X = 0, Y = 1, Z = 2.
    pub const fn int(self) -> usize {
        self as usize
    }
}

/// A face of the cube, named by its letter in standard notation.
#[derive(
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum Face {
    /// Up face (+Y).
    U,
    /// Down face (-Y).
    D,
    /// Front face (+Z).
    F,
    /// Back face (-Z).
    B,
    /// Left face (-X).
    L,
    /// Right face (+X).
    R,
}
impl Face {
    /// List of all faces, in canonical order.
    pub const ALL: [Face; 6] = [Face::U, Face::D, Face::F, Face::B, Face::L, Face::R];

    /// Returns the index of the face in [`Face::ALL`].
    pub const fn idx(self) -> usize {
        self as usize
    }

    /// Returns the axis perpendicular to this face.
    pub const fn axis(self) -> Axis {
        match self {
            Face::U | Face::D => Axis::Y,
            Face::F | Face::B => Axis::Z,
            Face::L | Face::R => Axis::X,
        }
    }
    /// Returns the side of the cube that this face is on along its axis.
    pub const fn sign(self) -> Sign {
        match self {
            Face::U | Face::F | Face::R => Sign::Pos,
            Face::D | Face::B | Face::L => Sign::Neg,
        }
    }
    /// Returns the face on the given side of the given axis. Returns `None` if
    /// given [`Sign::Zero`].
    pub const fn from_axis_sign(axis: Axis, sign: Sign) -> Option<Self> {
        match (axis, sign) {
            (_, Sign::Zero) => None,
            (Axis::X, Sign::Pos) => Some(Face::R),
            (Axis::X, Sign::Neg) => Some(Face::L),
            (Axis::Y, Sign::Pos) => Some(Face::U),
            (Axis::Y, Sign::Neg) => Some(Face::D),
            (Axis::Z, Sign::Pos) => Some(Face::F),
            (Axis::Z, Sign::Neg) => Some(Face::B),
        }
    }

    /// Returns the color that every facelet on this face has when the cube is
    /// solved.
    pub const fn initial_color(self) -> Color {
        match self {
            Face::U => Color::White,
            Face::D => Color::Yellow,
            Face::F => Color::Green,
            Face::B => Color::Blue,
            Face::L => Color::Orange,
            Face::R => Color::Red,
        }
    }

    /// Returns the letter for the face.
    pub const fn letter(self) -> char {
        match self {
            Face::U => 'U',
            Face::D => 'D',
            Face::F => 'F',
            Face::B => 'B',
            Face::L => 'L',
            Face::R => 'R',
        }
    }
    /// Returns the face with the given letter, or `None` if there is none.
    pub const fn from_letter(c: char) -> Option<Self> {
        match c {
            'U' => Some(Face::U),
            'D' => Some(Face::D),
            'F' => Some(Face::F),
            'B' => Some(Face::B),
            'L' => Some(Face::L),
            'R' => Some(Face::R),
            _ => None,
        }
    }
}
