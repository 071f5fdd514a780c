//! ZenOS kernel — entry point.
//!
//! Booted by the Limine bootloader. Limine sets up long mode, page tables
//! (kernel in upper 2 GiB + HHDM for all physical memory), and jumps to
//! kmain, which brings up the console and hands over to the shell forever.
#![no_std]
#![no_main]

use limine::request::{HhdmRequest, RequestsEndMarker, RequestsStartMarker};
use limine::BaseRevision;

use zenos_kernel::arch::x86_64::serial;
use zenos_kernel::console::Console;
use zenos_kernel::drivers::keyboard::Ps2Keyboard;
use zenos_kernel::drivers::vga::VgaText;
use zenos_kernel::serial_println;
use zenos_kernel::{arch, mem, shell};

use core::panic::PanicInfo;

// ---- Limine requests ----
// Must be #[used] and in .requests section for Limine to discover them.

#[used]
#[link_section = ".requests"]
static BASE_REVISION: BaseRevision = BaseRevision::new();

#[used]
#[link_section = ".requests"]
static HHDM_REQUEST: HhdmRequest = HhdmRequest::new();

#[used]
#[link_section = ".requests_start_marker"]
static _START_MARKER: RequestsStartMarker = RequestsStartMarker::new();

#[used]
#[link_section = ".requests_end_marker"]
static _END_MARKER: RequestsEndMarker = RequestsEndMarker::new();

/// Kernel entry point — called by Limine after setting up long mode,
/// page tables (HHDM + kernel higher-half), and a stack.
#[no_mangle]
pub extern "C" fn kmain() -> ! {
    // 1. Serial log first — everything after this can report progress
    serial::SERIAL.lock().init();
    serial_println!("ZenOS v0.1.0 — booting...");

    // 2. Verify Limine boot protocol
    assert!(
        BASE_REVISION.is_supported(),
        "Limine base revision not supported"
    );
    serial_println!("[boot] Limine protocol OK");

    // 3. HHDM offset from Limine — VGA text memory is reached through it
    let hhdm_response = HHDM_REQUEST
        .get_response()
        .expect("Limine HHDM response missing");
    mem::set_hhdm_offset(hhdm_response.offset());
    serial_println!("[boot] HHDM offset: {:#x}", hhdm_response.offset());

    // 4. Console on VGA text memory, keyboard on the PS/2 controller.
    // Both are exclusively owned by this one flow of control; the shell
    // borrows them for the lifetime of the machine.
    let mut console = Console::new(VgaText::new());
    console.clear();
    serial_println!("[console] 80x25 VGA text mode ready");

    let mut keyboard = Ps2Keyboard::new();
    serial_println!("[kbd] PS/2 polling driver ready");

    serial_println!("[shell] entering interactive loop");
    shell::run(&mut console, &mut keyboard)
}

#[panic_handler]
fn panic(info: &PanicInfo) -> ! {
    serial_println!("!!! KERNEL PANIC !!!");
    serial_println!("{}", info);
    loop {
        arch::x86_64::hlt();
    }
}
