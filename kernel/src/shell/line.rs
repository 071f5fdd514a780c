/// Line editor for the VGA console.
///
/// Accumulates key bytes into a bounded buffer, keeping the screen in
/// lockstep with every edit:
/// - Enter (`\n`) — submit the line (possibly empty)
/// - Backspace (0x08) — drop the last character and erase it on screen;
///   silently ignored on an empty buffer
/// - Printable bytes (>= 0x20) — appended and echoed while room remains;
///   silently dropped once the buffer is full
/// - Any other control byte — silently dropped
use crate::console::{Console, Surface};

use super::KeySource;

/// Line buffer size; one slot is reserved, so 254 characters are usable.
pub const MAX_LINE: usize = 255;

const BACKSPACE: u8 = 0x08;

pub struct LineEditor {
    buf: [u8; MAX_LINE],
    len: usize,
}

impl LineEditor {
    pub const fn new() -> Self {
        Self {
            buf: [0u8; MAX_LINE],
            len: 0,
        }
    }

    /// Read one line, blocking on the key source. Echo and erase go
    /// through the console one key at a time, so the screen never lags
    /// the buffer. Returns on Enter; overlong input is truncated, never
    /// an error.
    pub fn read_line<'a, S: Surface, K: KeySource>(
        &'a mut self,
        con: &mut Console<S>,
        keys: &mut K,
    ) -> &'a str {
        self.len = 0;

        loop {
            let byte = keys.read_key();

            match byte {
                b'\n' => {
                    con.put_char(b'\n');
                    break;
                }

                BACKSPACE => {
                    if self.len > 0 {
                        self.len -= 1;
                        con.backspace();
                    }
                }

                0x20.. => {
                    if self.len < MAX_LINE - 1 {
                        self.buf[self.len] = byte;
                        self.len += 1;
                        con.put_char(byte);
                    }
                }

                // Remaining control bytes carry no meaning here
                _ => {}
            }
        }

        core::str::from_utf8(&self.buf[..self.len]).unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::RamSurface;

    /// Queue-backed key source for host tests.
    struct ScriptedKeys<'a> {
        bytes: &'a [u8],
        pos: usize,
    }

    impl<'a> ScriptedKeys<'a> {
        fn new(bytes: &'a [u8]) -> Self {
            Self { bytes, pos: 0 }
        }
    }

    impl KeySource for ScriptedKeys<'_> {
        fn read_key(&mut self) -> u8 {
            let byte = self.bytes[self.pos];
            self.pos += 1;
            byte
        }
    }

    fn console() -> Console<RamSurface> {
        let mut con = Console::new(RamSurface::new());
        con.clear();
        con
    }

    #[test]
    fn returns_typed_line() {
        let mut con = console();
        let mut keys = ScriptedKeys::new(b"!help\n");
        let mut editor = LineEditor::new();
        let line = editor.read_line(&mut con, &mut keys);
        assert_eq!(line, "!help");
    }

    #[test]
    fn echoes_while_typing() {
        let mut con = console();
        let mut keys = ScriptedKeys::new(b"abc\n");
        let mut editor = LineEditor::new();
        editor.read_line(&mut con, &mut keys);
        let glyphs = con.surface().row_glyphs(0);
        assert_eq!(&glyphs[..3], b"abc");
        // Newline echoed: cursor moved to the next row
        assert_eq!(con.cursor(), (1, 0));
    }

    #[test]
    fn empty_line_is_returned_empty() {
        let mut con = console();
        let mut keys = ScriptedKeys::new(b"\n");
        let mut editor = LineEditor::new();
        let line = editor.read_line(&mut con, &mut keys);
        assert_eq!(line, "");
    }

    #[test]
    fn backspace_edits_buffer_and_screen() {
        let mut con = console();
        let mut keys = ScriptedKeys::new(b"hex\x08llo\n");
        let mut editor = LineEditor::new();
        let line = editor.read_line(&mut con, &mut keys);
        assert_eq!(line, "hello");
        let glyphs = con.surface().row_glyphs(0);
        assert_eq!(&glyphs[..6], b"hello ");
    }

    #[test]
    fn backspace_on_empty_buffer_is_dropped() {
        let mut con = console();
        let mut keys = ScriptedKeys::new(b"\x08\x08ok\n");
        let mut editor = LineEditor::new();
        let line = editor.read_line(&mut con, &mut keys);
        assert_eq!(line, "ok");
        assert_eq!(con.cursor(), (1, 0));
    }

    #[test]
    fn control_bytes_are_dropped() {
        let mut con = console();
        let mut keys = ScriptedKeys::new(b"a\x01b\x1bc\n");
        let mut editor = LineEditor::new();
        let line = editor.read_line(&mut con, &mut keys);
        assert_eq!(line, "abc");
    }

    #[test]
    fn overlong_input_truncates_to_254() {
        let mut script = [b'a'; 300];
        script[299] = b'\n';
        let mut con = console();
        let mut keys = ScriptedKeys::new(&script);
        let mut editor = LineEditor::new();
        let line = editor.read_line(&mut con, &mut keys);
        assert_eq!(line.len(), MAX_LINE - 1);
        assert!(line.bytes().all(|b| b == b'a'));
    }

    #[test]
    fn exact_capacity_line_survives() {
        let mut script = [b'b'; MAX_LINE];
        script[MAX_LINE - 1] = b'\n';
        let mut con = console();
        let mut keys = ScriptedKeys::new(&script);
        let mut editor = LineEditor::new();
        let line = editor.read_line(&mut con, &mut keys);
        assert_eq!(line.len(), MAX_LINE - 1);
    }
}
