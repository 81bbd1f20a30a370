//! In-memory register simulation.

use crate::bus::{BusKind, RegisterBus};
use crate::registry::PeripheralRegistry;
use k70_chip::reg::RegWidth;
use std::collections::HashMap;
use std::sync::Mutex;

/// Byte-granular latch model of the register address space.
///
/// Stores exactly what was written and returns it on load; unwritten bytes
/// read as zero. Storage is per-byte so the 8-bit UART/FTFE register files
/// and the 32-bit peripherals coexist at adjacent addresses.
///
/// This is a latch model only: side-effecting hardware semantics —
/// read-to-clear status flags, write-1-to-clear, FIFO pops — are
/// intentionally not modelled. Tests that need a status flag set use
/// [`SimBus::poke`] to plant it.
pub struct SimBus {
    mem: Mutex<HashMap<u32, u8>>,
}

impl SimBus {
    /// Create an all-zeros simulation.
    #[must_use]
    pub fn new() -> Self {
        Self { mem: Mutex::new(HashMap::new()) }
    }

    /// Create a simulation preloaded with the documented reset value of
    /// every register in the registry.
    #[must_use]
    pub fn with_reset(registry: &PeripheralRegistry) -> Self {
        let bus = Self::new();
        for entry in registry.entries() {
            for reg in entry.map.registers {
                if reg.reset != 0 {
                    bus.poke(entry.base + reg.offset, reg.width, reg.reset);
                }
            }
        }
        tracing::debug!("SimBus preloaded with reset values for {} instances", registry.len());
        bus
    }

    /// Raw store, bypassing access-mode checks. Test scaffolding: plants
    /// read-only status register contents.
    pub fn poke(&self, addr: u32, width: RegWidth, value: u32) {
        self.store(addr, width, value);
    }

    /// Raw load, bypassing access-mode checks.
    #[must_use]
    pub fn peek(&self, addr: u32, width: RegWidth) -> u32 {
        self.load(addr, width)
    }
}

impl Default for SimBus {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SimBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let touched = self.mem.lock().map(|m| m.len()).unwrap_or(0);
        f.debug_struct("SimBus").field("touched_bytes", &touched).finish()
    }
}

impl RegisterBus for SimBus {
    fn load(&self, addr: u32, width: RegWidth) -> u32 {
        let mem = self.mem.lock().expect("sim bus poisoned");
        let mut value = 0u32;
        for i in 0..width.bytes() {
            let byte = mem.get(&(addr + i)).copied().unwrap_or(0);
            value |= u32::from(byte) << (8 * i);
        }
        value
    }

    #[allow(clippy::cast_possible_truncation)] // byte decomposition
    fn store(&self, addr: u32, width: RegWidth, value: u32) {
        let mut mem = self.mem.lock().expect("sim bus poisoned");
        for i in 0..width.bytes() {
            mem.insert(addr + i, (value >> (8 * i)) as u8);
        }
    }

    fn barrier(&self) {
        // A mutex-serialised store is already visible to the next load.
    }

    fn kind(&self) -> BusKind {
        BusKind::Sim
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bytes_are_little_endian() {
        let bus = SimBus::new();
        bus.store(0x1000, RegWidth::W32, 0xAABB_CCDD);
        assert_eq!(bus.load(0x1000, RegWidth::W8), 0xDD);
        assert_eq!(bus.load(0x1003, RegWidth::W8), 0xAA);
        assert_eq!(bus.load(0x1000, RegWidth::W16), 0xCCDD);
    }

    #[test]
    fn unwritten_memory_reads_zero() {
        let bus = SimBus::new();
        assert_eq!(bus.load(0xFFFF_0000, RegWidth::W32), 0);
    }

    #[test]
    fn adjacent_byte_registers_do_not_alias() {
        let bus = SimBus::new();
        bus.store(0x4006_C003, RegWidth::W8, 0x2C); // UART2 C2
        bus.store(0x4006_C004, RegWidth::W8, 0xC0); // UART2 S1
        assert_eq!(bus.load(0x4006_C003, RegWidth::W8), 0x2C);
        assert_eq!(bus.load(0x4006_C004, RegWidth::W8), 0xC0);
    }
}
