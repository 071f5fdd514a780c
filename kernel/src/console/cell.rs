/// VGA text-mode cells — one glyph byte plus one color attribute byte.
///
/// The layout is bit-exact with hardware text memory: low byte character,
/// high byte attribute (bits 0-3 foreground, bits 4-7 background).
use static_assertions::assert_eq_size;

/// The 16 standard VGA colors.
#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    Black = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Brown = 6,
    LightGrey = 7,
    DarkGrey = 8,
    LightBlue = 9,
    LightGreen = 10,
    LightCyan = 11,
    LightRed = 12,
    LightMagenta = 13,
    LightBrown = 14,
    White = 15,
}

/// Packed attribute byte: foreground | background << 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(transparent)]
pub struct ColorCode(u8);

impl ColorCode {
    pub const fn new(fg: Color, bg: Color) -> Self {
        Self(fg as u8 | (bg as u8) << 4)
    }
}

/// One cell of the 80x25 text grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(C)]
pub struct ScreenCell {
    pub glyph: u8,
    pub color: ColorCode,
}

// Hardware contract: cells are exactly two bytes, written as a unit.
assert_eq_size!(ScreenCell, u16);

impl ScreenCell {
    pub const fn new(glyph: u8, color: ColorCode) -> Self {
        Self { glyph, color }
    }

    pub const fn blank(color: ColorCode) -> Self {
        Self::new(b' ', color)
    }
}
