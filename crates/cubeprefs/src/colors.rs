use std::ops::Index;

use cubeplay_core::{Color, Rgb};
use serde::{Deserialize, Serialize};

/// Display color for each facelet color label, plus the color of cubie faces
/// that are not on the outside of the cube.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
#[allow(missing_docs)]
pub struct ColorScheme {
    pub white: Rgb,
    pub yellow: Rgb,
    pub green: Rgb,
    pub blue: Rgb,
    pub orange: Rgb,
    pub red: Rgb,
    pub inner: Rgb,
}
impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            white: Rgb::from_u32(0xFFFFFF),
            yellow: Rgb::from_u32(0xFFD500),
            green: Rgb::from_u32(0x009E60),
            blue: Rgb::from_u32(0x0051BA),
            orange: Rgb::from_u32(0xFF5800),
            red: Rgb::from_u32(0xC41E3A),
            inner: Rgb::from_u32(0x111111),
        }
    }
}
impl Index<Color> for ColorScheme {
    type Output = Rgb;

    fn index(&self, color: Color) -> &Rgb {
        match color {
            Color::White => &self.white,
            Color::Yellow => &self.yellow,
            Color::Green => &self.green,
            Color::Blue => &self.blue,
            Color::Orange => &self.orange,
            Color::Red => &self.red,
        }
    }
}
impl ColorScheme {
    /// Returns the display color for a sticker, using the inner color if there
    /// is no sticker.
    pub fn sticker(&self, color: Option<Color>) -> Rgb {
        color.map_or(self.inner, |c| self[c])
    }
}
