//! PIT (periodic interrupt timer) register file.
//!
//! Four identical down-counting channels behind a shared module control
//! register. Channel n's registers sit at `0x100 + 0x10 * n`.

use crate::memmap::{aips0_slot, AIPS_SLOT_SIZE};
use crate::reg::{FieldDef, MemoryMap, RegisterDef};

/// PIT base address.
pub const PIT: u32 = aips0_slot(0x37);

/// Number of timer channels.
pub const CHANNELS: usize = 4;

/// Module disable (1 = PIT clocks gated off).
pub const MCR_MDIS: FieldDef = FieldDef::bit("MDIS", 1);
/// Freeze timers in debug mode.
pub const MCR_FRZ: FieldDef = FieldDef::bit("FRZ", 0);

/// Timer start value.
pub const LDVAL_TSV: FieldDef = FieldDef::new("TSV", 0, 32);
/// Current timer value.
pub const CVAL_TVL: FieldDef = FieldDef::new("TVL", 0, 32);
/// Timer interrupt enable.
pub const TCTRL_TIE: FieldDef = FieldDef::bit("TIE", 1);
/// Timer enable.
pub const TCTRL_TEN: FieldDef = FieldDef::bit("TEN", 0);
/// Timer interrupt flag (write 1 to clear).
pub const TFLG_TIF: FieldDef = FieldDef::bit("TIF", 0);

const LDVAL_FIELDS: &[FieldDef] = &[LDVAL_TSV];
const CVAL_FIELDS: &[FieldDef] = &[CVAL_TVL];
const TCTRL_FIELDS: &[FieldDef] = &[TCTRL_TIE, TCTRL_TEN];
const TFLG_FIELDS: &[FieldDef] = &[TFLG_TIF];

/// Module control register. MDIS comes out of reset set; clearing it is the
/// first thing PIT bring-up does.
pub const MCR: RegisterDef = RegisterDef::rw32("MCR", 0x00, 0x0000_0002, &[MCR_MDIS, MCR_FRZ]);

/// Channel 0 load value.
pub const LDVAL0: RegisterDef = RegisterDef::rw32("LDVAL0", 0x100, 0, LDVAL_FIELDS);
/// Channel 0 current value.
pub const CVAL0: RegisterDef = RegisterDef::ro32("CVAL0", 0x104, 0, CVAL_FIELDS);
/// Channel 0 control.
pub const TCTRL0: RegisterDef = RegisterDef::rw32("TCTRL0", 0x108, 0, TCTRL_FIELDS);
/// Channel 0 flag.
pub const TFLG0: RegisterDef = RegisterDef::rw32("TFLG0", 0x10C, 0, TFLG_FIELDS);

/// Channel 1 load value.
pub const LDVAL1: RegisterDef = RegisterDef::rw32("LDVAL1", 0x110, 0, LDVAL_FIELDS);
/// Channel 1 current value.
pub const CVAL1: RegisterDef = RegisterDef::ro32("CVAL1", 0x114, 0, CVAL_FIELDS);
/// Channel 1 control.
pub const TCTRL1: RegisterDef = RegisterDef::rw32("TCTRL1", 0x118, 0, TCTRL_FIELDS);
/// Channel 1 flag.
pub const TFLG1: RegisterDef = RegisterDef::rw32("TFLG1", 0x11C, 0, TFLG_FIELDS);

/// Channel 2 load value.
pub const LDVAL2: RegisterDef = RegisterDef::rw32("LDVAL2", 0x120, 0, LDVAL_FIELDS);
/// Channel 2 current value.
pub const CVAL2: RegisterDef = RegisterDef::ro32("CVAL2", 0x124, 0, CVAL_FIELDS);
/// Channel 2 control.
pub const TCTRL2: RegisterDef = RegisterDef::rw32("TCTRL2", 0x128, 0, TCTRL_FIELDS);
/// Channel 2 flag.
pub const TFLG2: RegisterDef = RegisterDef::rw32("TFLG2", 0x12C, 0, TFLG_FIELDS);

/// Channel 3 load value.
pub const LDVAL3: RegisterDef = RegisterDef::rw32("LDVAL3", 0x130, 0, LDVAL_FIELDS);
/// Channel 3 current value.
pub const CVAL3: RegisterDef = RegisterDef::ro32("CVAL3", 0x134, 0, CVAL_FIELDS);
/// Channel 3 control.
pub const TCTRL3: RegisterDef = RegisterDef::rw32("TCTRL3", 0x138, 0, TCTRL_FIELDS);
/// Channel 3 flag.
pub const TFLG3: RegisterDef = RegisterDef::rw32("TFLG3", 0x13C, 0, TFLG_FIELDS);

/// Per-channel register quads, indexed by channel.
pub const CHANNEL_REGS: [[RegisterDef; 4]; CHANNELS] = [
    [LDVAL0, CVAL0, TCTRL0, TFLG0],
    [LDVAL1, CVAL1, TCTRL1, TFLG1],
    [LDVAL2, CVAL2, TCTRL2, TFLG2],
    [LDVAL3, CVAL3, TCTRL3, TFLG3],
];

/// PIT memory map.
pub static MAP: MemoryMap = MemoryMap {
    peripheral: "PIT",
    align: AIPS_SLOT_SIZE,
    window: AIPS_SLOT_SIZE,
    registers: &[
        MCR, LDVAL0, CVAL0, TCTRL0, TFLG0, LDVAL1, CVAL1, TCTRL1, TFLG1, LDVAL2, CVAL2,
        TCTRL2, TFLG2, LDVAL3, CVAL3, TCTRL3, TFLG3,
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Access;

    #[test]
    fn channel_layout() {
        for (n, regs) in CHANNEL_REGS.iter().enumerate() {
            let base = 0x100 + 0x10 * n as u32;
            assert_eq!(regs[0].offset, base);
            assert_eq!(regs[3].offset, base + 0xC);
        }
    }

    #[test]
    fn cval_is_read_only() {
        assert_eq!(CVAL0.access, Access::ReadOnly);
        assert_eq!(MCR.reset, 0x2, "PIT comes out of reset disabled");
    }
}
