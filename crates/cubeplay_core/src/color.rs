use std::fmt;

/// Color label of a single facelet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, strum::EnumIter)]
pub enum Color {
    /// White (initially on U).
    White,
    /// Yellow (initially on D).
    Yellow,
    /// Green (initially on F).
    Green,
    /// Blue (initially on B).
    Blue,
    /// Orange (initially on L).
    Orange,
    /// Red (initially on R).
    Red,
}
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
impl Color {
    /// List of all colors.
    pub const ALL: [Color; 6] = [
        Color::White,
        Color::Yellow,
        Color::Green,
        Color::Blue,
        Color::Orange,
        Color::Red,
    ];

    /// Returns the index of the color in [`Color::ALL`].
    pub const fn idx(self) -> usize {
        self as usize
    }

    /// Returns the single-letter abbreviation for the color.
    pub const fn letter(self) -> char {
        match self {
            Color::White => 'W',
            Color::Yellow => 'Y',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Orange => 'O',
            Color::Red => 'R',
        }
    }
}
