/// Scancode set 1 translation — US layout.
///
/// Maps PS/2 make codes to the byte alphabet the console understands:
/// `\n` for Enter, 0x08 for Backspace, printable ASCII for the rest.
/// Keys with no reportable byte (Esc, Tab, modifiers, function keys)
/// translate to None and are never surfaced to the line editor.
use bitflags::bitflags;

bitflags! {
    /// Modifier state tracked across make/break codes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const LSHIFT = 1 << 0;
        const RSHIFT = 1 << 1;
        const CAPS   = 1 << 2;
    }
}

impl Modifiers {
    pub fn shift(self) -> bool {
        self.intersects(Self::LSHIFT | Self::RSHIFT)
    }

    pub fn caps(self) -> bool {
        self.contains(Self::CAPS)
    }
}

/// Highest make code with a translation entry.
const MAX_CODE: usize = 0x39;

// 0 marks keys that produce no byte.
#[rustfmt::skip]
static PLAIN: [u8; MAX_CODE + 1] = [
    0, 0, b'1', b'2', b'3', b'4', b'5', b'6', b'7', b'8',     // 0x00-0x09
    b'9', b'0', b'-', b'=', 0x08, 0, b'q', b'w', b'e', b'r',  // 0x0A-0x13
    b't', b'y', b'u', b'i', b'o', b'p', b'[', b']', b'\n', 0, // 0x14-0x1D
    b'a', b's', b'd', b'f', b'g', b'h', b'j', b'k', b'l', b';', // 0x1E-0x27
    b'\'', b'`', 0, b'\\', b'z', b'x', b'c', b'v', b'b', b'n', // 0x28-0x31
    b'm', b',', b'.', b'/', 0, b'*', 0, b' ',                 // 0x32-0x39
];

#[rustfmt::skip]
static SHIFTED: [u8; MAX_CODE + 1] = [
    0, 0, b'!', b'@', b'#', b'$', b'%', b'^', b'&', b'*',     // 0x00-0x09
    b'(', b')', b'_', b'+', 0x08, 0, b'Q', b'W', b'E', b'R',  // 0x0A-0x13
    b'T', b'Y', b'U', b'I', b'O', b'P', b'{', b'}', b'\n', 0, // 0x14-0x1D
    b'A', b'S', b'D', b'F', b'G', b'H', b'J', b'K', b'L', b':', // 0x1E-0x27
    b'"', b'~', 0, b'|', b'Z', b'X', b'C', b'V', b'B', b'N',  // 0x28-0x31
    b'M', b'<', b'>', b'?', 0, b'*', 0, b' ',                 // 0x32-0x39
];

/// Translate a make code under the given modifier state.
pub fn translate(scancode: u8, mods: Modifiers) -> Option<u8> {
    let idx = scancode as usize;
    if idx > MAX_CODE {
        return None;
    }
    let plain = PLAIN[idx];
    if plain == 0 {
        return None;
    }
    let byte = if plain.is_ascii_lowercase() {
        // Caps Lock inverts the shift sense for letters only
        if mods.shift() != mods.caps() {
            plain.to_ascii_uppercase()
        } else {
            plain
        }
    } else if mods.shift() {
        SHIFTED[idx]
    } else {
        plain
    };
    Some(byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_letters_and_digits() {
        assert_eq!(translate(0x10, Modifiers::empty()), Some(b'q'));
        assert_eq!(translate(0x1E, Modifiers::empty()), Some(b'a'));
        assert_eq!(translate(0x02, Modifiers::empty()), Some(b'1'));
        assert_eq!(translate(0x39, Modifiers::empty()), Some(b' '));
    }

    #[test]
    fn enter_and_backspace_map_to_console_bytes() {
        assert_eq!(translate(0x1C, Modifiers::empty()), Some(b'\n'));
        assert_eq!(translate(0x0E, Modifiers::empty()), Some(0x08));
    }

    #[test]
    fn shift_uppercases_letters_and_swaps_symbols() {
        assert_eq!(translate(0x10, Modifiers::LSHIFT), Some(b'Q'));
        assert_eq!(translate(0x02, Modifiers::RSHIFT), Some(b'!'));
        assert_eq!(translate(0x0D, Modifiers::LSHIFT), Some(b'+'));
    }

    #[test]
    fn caps_lock_affects_letters_only() {
        assert_eq!(translate(0x10, Modifiers::CAPS), Some(b'Q'));
        assert_eq!(translate(0x02, Modifiers::CAPS), Some(b'1'));
        // Shift under Caps Lock gives lowercase again
        assert_eq!(translate(0x10, Modifiers::CAPS | Modifiers::LSHIFT), Some(b'q'));
    }

    #[test]
    fn unmapped_keys_produce_nothing() {
        assert_eq!(translate(0x01, Modifiers::empty()), None); // Esc
        assert_eq!(translate(0x0F, Modifiers::empty()), None); // Tab
        assert_eq!(translate(0x2A, Modifiers::empty()), None); // LShift itself
        assert_eq!(translate(0x3B, Modifiers::empty()), None); // F1
    }
}
