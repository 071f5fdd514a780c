/// Cursor-aware, scrolling text console over an 80x25 cell grid.
///
/// `Console` owns the cursor position, the active color, and a `Surface`
/// backing store. The kernel drives it over memory-mapped VGA text memory
/// (`drivers::vga::VgaText`); host tests drive it over `RamSurface`. The
/// rendering rules — wrap, scroll, software cursor glyph — are identical
/// on both, which is the point.
///
/// The cursor is a software marker (an underscore cell), not the hardware
/// cursor register. Invariant: after every public operation exactly one
/// cell, the one at the cursor position, bears the cursor glyph.
mod cell;

pub use cell::{Color, ColorCode, ScreenCell};

use core::fmt;

pub const WIDTH: usize = 80;
pub const HEIGHT: usize = 25;

const CURSOR_GLYPH: u8 = b'_';

/// Attribute applied to newly written cells until changed.
pub const DEFAULT_COLOR: ColorCode = ColorCode::new(Color::LightGrey, Color::Black);

/// Raw cell store. `put`/`get` are primitives, not safety boundaries:
/// callers pre-validate `row < HEIGHT` and `col < WIDTH`.
pub trait Surface {
    fn put(&mut self, cell: ScreenCell, row: usize, col: usize);
    fn get(&self, row: usize, col: usize) -> ScreenCell;
}

/// RAM-backed surface for host tests and hosted builds.
pub struct RamSurface {
    cells: [[ScreenCell; WIDTH]; HEIGHT],
}

impl RamSurface {
    pub const fn new() -> Self {
        let blank = ScreenCell::blank(DEFAULT_COLOR);
        Self {
            cells: [[blank; WIDTH]; HEIGHT],
        }
    }

    /// Glyph bytes of one row (for test verification).
    pub fn row_glyphs(&self, row: usize) -> [u8; WIDTH] {
        let mut out = [0u8; WIDTH];
        for col in 0..WIDTH {
            out[col] = self.cells[row][col].glyph;
        }
        out
    }
}

impl Surface for RamSurface {
    fn put(&mut self, cell: ScreenCell, row: usize, col: usize) {
        self.cells[row][col] = cell;
    }

    fn get(&self, row: usize, col: usize) -> ScreenCell {
        self.cells[row][col]
    }
}

/// The terminal state: one owned context value, passed explicitly to
/// everything that writes to the screen. No free-floating globals.
pub struct Console<S: Surface> {
    surface: S,
    row: usize,
    col: usize,
    color: ColorCode,
}

impl<S: Surface> Console<S> {
    pub const fn new(surface: S) -> Self {
        Self {
            surface,
            row: 0,
            col: 0,
            color: DEFAULT_COLOR,
        }
    }

    /// Reset to a blank screen: cursor to (0,0), every cell blanked in the
    /// active color. `!clear` re-runs this.
    pub fn clear(&mut self) {
        self.row = 0;
        self.col = 0;
        let blank = ScreenCell::blank(self.color);
        for row in 0..HEIGHT {
            for col in 0..WIDTH {
                self.surface.put(blank, row, col);
            }
        }
        self.show_cursor();
    }

    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Blank the cell under the cursor. Text output always advances past
    /// the cells it fills, so the cursor only ever rests on a blank cell;
    /// restoring it to blank never destroys content.
    fn hide_cursor(&mut self) {
        self.surface
            .put(ScreenCell::blank(self.color), self.row, self.col);
    }

    fn show_cursor(&mut self) {
        self.surface
            .put(ScreenCell::new(CURSOR_GLYPH, self.color), self.row, self.col);
    }

    /// Shift rows 1..HEIGHT up by one, blank the exposed last row, and pin
    /// the cursor row to the last row. Column is left to the caller.
    fn scroll(&mut self) {
        for row in 1..HEIGHT {
            for col in 0..WIDTH {
                let cell = self.surface.get(row, col);
                self.surface.put(cell, row - 1, col);
            }
        }
        let blank = ScreenCell::blank(self.color);
        for col in 0..WIDTH {
            self.surface.put(blank, HEIGHT - 1, col);
        }
        self.row = HEIGHT - 1;
    }

    /// Advance to the start of the next row, scrolling off the bottom.
    fn newline(&mut self) {
        self.col = 0;
        self.row += 1;
        if self.row == HEIGHT {
            self.scroll();
        }
    }

    /// Write one byte at the cursor, advancing it. `\n` starts a new row.
    /// The cursor position is normalized after every write so it always
    /// addresses a valid cell, including after filling a row's last column.
    pub fn put_char(&mut self, byte: u8) {
        self.hide_cursor();
        if byte == b'\n' {
            self.newline();
        } else {
            self.surface
                .put(ScreenCell::new(byte, self.color), self.row, self.col);
            self.col += 1;
            if self.col == WIDTH {
                self.newline();
            }
        }
        self.show_cursor();
    }

    pub fn write_str(&mut self, s: &str) {
        for byte in s.bytes() {
            self.put_char(byte);
        }
    }

    /// Move the cursor one cell left (unwrapping to the previous row's last
    /// column) and blank it. At (0,0) this is a no-op apart from the cursor
    /// glyph being redrawn in place. Visual erase only: the line buffer is
    /// the caller's to keep in lockstep.
    pub fn backspace(&mut self) {
        self.hide_cursor();
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = WIDTH - 1;
        }
        self.surface
            .put(ScreenCell::blank(self.color), self.row, self.col);
        self.show_cursor();
    }
}

impl<S: Surface> fmt::Write for Console<S> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        Console::write_str(self, s);
        Ok(())
    }
}
