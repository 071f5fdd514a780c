/// Polled PS/2 keyboard driver (ports 0x60/0x64).
///
/// No interrupts: the shell is the only consumer and it blocks on input
/// anyway, so the driver spins on the controller's output-buffer-full bit.
/// Tracks shift and Caps Lock across make/break codes and feeds translated
/// bytes to the shell through the `KeySource` seam.
use crate::arch::x86_64::inb;
use crate::shell::KeySource;

use super::keymap::{self, Modifiers};

const DATA_PORT: u16 = 0x60;
const STATUS_PORT: u16 = 0x64;

const STATUS_OUTPUT_FULL: u8 = 0x01;
const BREAK_BIT: u8 = 0x80;

const SC_LSHIFT: u8 = 0x2A;
const SC_RSHIFT: u8 = 0x36;
const SC_CAPS: u8 = 0x3A;
const SC_EXTENDED: u8 = 0xE0;

pub struct Ps2Keyboard {
    mods: Modifiers,
}

impl Ps2Keyboard {
    pub const fn new() -> Self {
        Self {
            mods: Modifiers::empty(),
        }
    }

    /// Block until the controller has a scancode, then read it.
    fn read_scancode(&self) -> u8 {
        while inb(STATUS_PORT) & STATUS_OUTPUT_FULL == 0 {
            core::hint::spin_loop();
        }
        inb(DATA_PORT)
    }
}

impl KeySource for Ps2Keyboard {
    /// Block until a key press translates to a console byte.
    /// Modifier and release codes update state and keep waiting.
    fn read_key(&mut self) -> u8 {
        loop {
            let scancode = self.read_scancode();
            match scancode {
                SC_LSHIFT => self.mods.insert(Modifiers::LSHIFT),
                SC_RSHIFT => self.mods.insert(Modifiers::RSHIFT),
                sc if sc == (SC_LSHIFT | BREAK_BIT) => self.mods.remove(Modifiers::LSHIFT),
                sc if sc == (SC_RSHIFT | BREAK_BIT) => self.mods.remove(Modifiers::RSHIFT),
                SC_CAPS => self.mods.toggle(Modifiers::CAPS),
                // Extended prefix (arrows, numpad enter, ...) — swallow the
                // byte that follows and report nothing
                SC_EXTENDED => {
                    let _ = self.read_scancode();
                }
                sc if sc & BREAK_BIT != 0 => {}
                sc => {
                    if let Some(byte) = keymap::translate(sc, self.mods) {
                        return byte;
                    }
                }
            }
        }
    }
}
