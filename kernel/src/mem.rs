/// Physical address translation via the Higher-Half Direct Map.
///
/// ZenOS has no allocator and no paging of its own; Limine maps all
/// physical memory at virt = phys + HHDM offset, which is all the kernel
/// needs to reach MMIO regions like VGA text memory.
use core::sync::atomic::{AtomicU64, Ordering};

/// HHDM offset, set once at boot from Limine's HHDM response.
static HHDM_OFFSET: AtomicU64 = AtomicU64::new(0);

/// Set the HHDM offset. Must be called once during early boot before any
/// phys_to_virt() calls.
pub fn set_hhdm_offset(offset: u64) {
    HHDM_OFFSET.store(offset, Ordering::Relaxed);
}

/// Convert a physical address to a virtual pointer via the HHDM.
pub fn phys_to_virt<T>(phys: u64) -> *mut T {
    let offset = HHDM_OFFSET.load(Ordering::Relaxed);
    (phys + offset) as *mut T
}
