/// VGA text memory surface — the hardware backing store for the console.
///
/// Text memory lives at physical 0xB8000, reached through the Limine HHDM.
/// Writes are volatile two-byte stores so they hit the screen immediately.
use core::ptr::{read_volatile, write_volatile};

use crate::console::{ScreenCell, Surface, WIDTH};
use crate::mem;

const VGA_TEXT_PHYS: u64 = 0xB8000;

pub struct VgaText;

impl VgaText {
    pub const fn new() -> Self {
        Self
    }

    fn base(&self) -> *mut ScreenCell {
        mem::phys_to_virt::<ScreenCell>(VGA_TEXT_PHYS)
    }
}

impl Surface for VgaText {
    fn put(&mut self, cell: ScreenCell, row: usize, col: usize) {
        // Callers pre-validate coordinates; row-major 80-wide layout.
        unsafe {
            write_volatile(self.base().add(row * WIDTH + col), cell);
        }
    }

    fn get(&self, row: usize, col: usize) -> ScreenCell {
        unsafe { read_volatile(self.base().add(row * WIDTH + col)) }
    }
}
