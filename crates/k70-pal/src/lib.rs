//! Peripheral access layer for the Kinetis K70 (MK70F12).
//!
//! Sits on top of the `k70-chip` silicon model and turns its constant
//! tables into safe, typed register access: volatile whole-register and
//! bitfield operations, definition-time memory-map validation, a fixed
//! interrupt vector table, and a registry of the chip's peripheral
//! instances.
//!
//! # Quick start
//!
//! ```
//! use k70_chip::periph::{gpio, sim};
//! use k70_pal::{ChipVariant, PeripheralRegistry, SimBus};
//!
//! # fn main() -> k70_pal::Result<()> {
//! let registry = PeripheralRegistry::new(ChipVariant::TWR_K70F120M)?;
//! let bus = SimBus::with_reset(&registry);
//!
//! // Gate the PORTA clock on, then drive the LED pins.
//! let sysint = registry.lookup("SIM", 0)?.bind(&bus);
//! sysint.set_bits(&sim::SCGC5, &sim::SCGC5_PORTA)?;
//!
//! let gpioa = registry.lookup("GPIO", 0)?.bind(&bus);
//! gpioa.write(&gpio::PDDR, 1 << 11)?;
//! assert_eq!(gpioa.read(&gpio::PDDR)?, 1 << 11);
//! # Ok(())
//! # }
//! ```
//!
//! On the target the same code binds a [`DirectBus`] instead and the loads
//! and stores become volatile accesses to the physical addresses.
//!
//! # What this layer does not do
//!
//! No locking (read-modify-write needs caller-supplied exclusion, see
//! [`access`]), no implicit barriers (call [`Peripheral::barrier`] for
//! cross-register ordering), no peripheral protocol logic — this is the
//! layer drivers are built on, not the drivers.

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod access;
pub mod bus;
pub mod buses;
mod error;
pub mod map;
pub mod registry;
pub mod vectors;

pub use access::{FieldValue, Peripheral, RegisterSnapshot};
pub use bus::{BusKind, RegisterBus};
pub use buses::{DirectBus, SimBus};
pub use error::{PalError, Result};
pub use registry::{PeripheralEntry, PeripheralRegistry};
pub use vectors::{Handler, VectorTable};

/// Chip definition data, re-exported for callers that only depend on this
/// crate.
pub use k70_chip::{variant::ChipVariant, Interrupt, IRQ_COUNT, VECTOR_COUNT};

/// Commonly used types.
pub mod prelude {
    pub use crate::{
        BusKind, ChipVariant, DirectBus, Interrupt, PalError, Peripheral, PeripheralEntry,
        PeripheralRegistry, RegisterBus, Result, SimBus, VectorTable,
    };
}
