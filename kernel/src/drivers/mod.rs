/// Device drivers: VGA text memory and the polled PS/2 keyboard.
///
/// The scancode translation tables are pure data and compile on the host
/// for unit testing; the port-I/O drivers are kernel-target only.
pub mod keymap;

#[cfg(not(test))]
pub mod keyboard;
#[cfg(not(test))]
pub mod vga;
