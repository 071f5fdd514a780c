#![no_std]
#![allow(dead_code)]

// Hardware-dependent modules — only compiled for the kernel target, not
// host-target tests (cargo test --target x86_64-unknown-linux-gnu --lib).
#[cfg(not(test))]
pub mod arch;
#[cfg(not(test))]
pub mod mem;

pub mod console;
pub mod drivers;
pub mod shell;
