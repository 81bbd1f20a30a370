//! Per-peripheral register and bitfield tables.
//!
//! One module per peripheral type the tower firmware exercises. Each module
//! carries the instance base addresses, a `FieldDef` constant per documented
//! bitfield (the vendor's `_MASK`/`_SHIFT` macro pairs, as data), the
//! `RegisterDef` constants, and a `MAP` tying the register file together.
//!
//! Offsets, widths, access modes, and reset values follow the MK70F12
//! reference manual. The tables are deliberately repetitive — they are
//! definition data, not logic.

pub mod ftfe;
pub mod ftm;
pub mod gpio;
pub mod pit;
pub mod port;
pub mod rtc;
pub mod sim;
pub mod spi;
pub mod uart;
