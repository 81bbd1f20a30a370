//! Volatile access to the physical address space.

use crate::bus::{BusKind, RegisterBus};
use k70_chip::reg::RegWidth;
use std::sync::atomic::{fence, Ordering};

/// Bus that performs volatile loads/stores at absolute physical addresses.
///
/// Register memory is hardware state: every access has side effects, so all
/// loads and stores are volatile — never reordered against each other on
/// the same address, never cached, never elided.
///
/// Read-modify-write sequences built on this bus are not atomic. Two
/// contexts (say, an interrupt handler and the main loop) updating the same
/// register must bring their own mutual exclusion — masking the interrupt,
/// or a lock; the bus itself takes none.
#[derive(Debug, Clone, Copy)]
pub struct DirectBus {
    _priv: (),
}

impl DirectBus {
    /// Create a direct bus.
    ///
    /// # Safety
    ///
    /// Every address subsequently derived from validated definition data
    /// must be mapped and accessible in this context: on the target itself,
    /// or through an identity mapping of the peripheral windows. Constructing
    /// a `DirectBus` on a host where those addresses are unmapped and then
    /// using it is undefined behavior.
    #[must_use]
    pub const unsafe fn new() -> Self {
        Self { _priv: () }
    }
}

impl RegisterBus for DirectBus {
    fn load(&self, addr: u32, width: RegWidth) -> u32 {
        // SAFETY: read_volatile necessary for MMIO - hardware can change the
        // value between loads. Invariants: (1) addr comes from a validated
        // map (offset in-window, aligned to width); (2) the constructor's
        // contract guarantees the address is mapped; (3) registers are
        // naturally aligned, so the typed casts are sound.
        unsafe {
            match width {
                RegWidth::W8 => u32::from(std::ptr::read_volatile(addr as usize as *const u8)),
                RegWidth::W16 => u32::from(std::ptr::read_volatile(addr as usize as *const u16)),
                RegWidth::W32 => std::ptr::read_volatile(addr as usize as *const u32),
            }
        }
    }

    #[allow(clippy::cast_possible_truncation)] // stores narrow by design
    fn store(&self, addr: u32, width: RegWidth, value: u32) {
        // SAFETY: write_volatile necessary for MMIO - the store triggers
        // hardware side effects and must not merge with neighbours.
        // Invariants as in `load`.
        unsafe {
            match width {
                RegWidth::W8 => std::ptr::write_volatile(addr as usize as *mut u8, value as u8),
                RegWidth::W16 => {
                    std::ptr::write_volatile(addr as usize as *mut u16, value as u16);
                }
                RegWidth::W32 => std::ptr::write_volatile(addr as usize as *mut u32, value),
            }
        }
    }

    fn barrier(&self) {
        fence(Ordering::SeqCst);
    }

    fn kind(&self) -> BusKind {
        BusKind::Direct
    }
}
