//! Silicon model for the NXP/Freescale Kinetis K70 (MK70F12).
//!
//! This crate has **no dependencies** and **no hardware access** — it is a
//! pure model of the silicon: register layouts, bitfield positions, base
//! addresses, interrupt numbering, chip variants, and board pin allocation.
//! All tables are taken from the MK70F12 reference manual and are
//! reproducible bit-exactly per part number.
//!
//! The access machinery (volatile loads/stores, map validation, the
//! peripheral registry) lives in `k70-pal`; this crate is the constant data
//! it consumes.
//!
//! # Crate organisation
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`reg`] | Descriptor types: registers, bitfields, memory maps |
//! | [`memmap`] | Global address space: flash, SRAM, AIPS bridges |
//! | [`irq`] | Interrupt numbering — all 106 MK70F12 IRQ sources |
//! | [`variant`] | Part numbers and their flash/SRAM/clock limits |
//! | [`pins`] | TWR-K70F120M board signal allocation |
//! | [`periph`] | Per-peripheral register and bitfield tables |
//! | [`peripherals`] | The flat instance table the registry is built from |

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod irq;
pub mod memmap;
pub mod periph;
pub mod peripherals;
pub mod pins;
pub mod reg;
pub mod variant;

pub use irq::{Interrupt, IRQ_COUNT, VECTOR_COUNT};
pub use peripherals::{PeripheralDef, PERIPHERALS};
pub use reg::{Access, FieldDef, MemoryMap, RegWidth, RegisterDef};
pub use variant::ChipVariant;
