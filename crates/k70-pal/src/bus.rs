//! Bus abstraction over register storage.
//!
//! The accessor layer never dereferences addresses itself; every load and
//! store goes through a [`RegisterBus`]. That keeps the volatility contract
//! in one place and lets the same definition data drive real silicon
//! ([`crate::buses::DirectBus`]) and hostside tests
//! ([`crate::buses::SimBus`]).

use k70_chip::reg::RegWidth;
use std::fmt::Debug;

/// Register storage behind the accessor layer.
///
/// # Ordering contract
///
/// Implementations must give program-order visibility for accesses to the
/// same address (a `load` observes every earlier `store` from the same
/// context). No ordering is promised *across* addresses: callers that need
/// cross-register ordering — DMA descriptor handshakes, doorbell writes —
/// must call [`RegisterBus::barrier`] themselves. The layer never inserts
/// barriers implicitly.
pub trait RegisterBus: Debug + Send + Sync {
    /// Load `width` bytes at `addr`, zero-extended to 32 bits.
    fn load(&self, addr: u32, width: RegWidth) -> u32;

    /// Store the low `width` bytes of `value` at `addr`.
    fn store(&self, addr: u32, width: RegWidth, value: u32);

    /// Order all earlier accesses before all later ones.
    fn barrier(&self);

    /// Which kind of bus this is, for diagnostics.
    fn kind(&self) -> BusKind;
}

/// Bus implementation identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BusKind {
    /// Volatile access to physical addresses.
    Direct,
    /// In-memory simulation, no hardware required.
    Sim,
}

impl std::fmt::Display for BusKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Direct => write!(f, "Direct (memory-mapped hardware)"),
            Self::Sim => write!(f, "Sim (in-memory latch model)"),
        }
    }
}
