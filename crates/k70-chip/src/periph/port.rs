//! PORT (pin control and interrupt) register file.
//!
//! One PCR per pin selects the pad function (MUX), pull, drive strength,
//! and pin-interrupt configuration. GPCLR/GPCHR are write-only global
//! update strobes; ISFR collects the per-pin interrupt flags.

use crate::memmap::{aips0_slot, AIPS_SLOT_SIZE};
use crate::reg::{FieldDef, MemoryMap, RegisterDef};

/// PORTA base address.
pub const PORTA: u32 = aips0_slot(0x49);
/// PORTB base address.
pub const PORTB: u32 = aips0_slot(0x4A);
/// PORTC base address.
pub const PORTC: u32 = aips0_slot(0x4B);
/// PORTD base address.
pub const PORTD: u32 = aips0_slot(0x4C);
/// PORTE base address.
pub const PORTE: u32 = aips0_slot(0x4D);
/// PORTF base address.
pub const PORTF: u32 = aips0_slot(0x4E);

/// Instance base addresses in instance order.
pub const BASES: [u32; 6] = [PORTA, PORTB, PORTC, PORTD, PORTE, PORTF];

/// Interrupt status flag (write 1 to clear).
pub const PCR_ISF: FieldDef = FieldDef::bit("ISF", 24);
/// Interrupt configuration (disabled, DMA edge, logic level, edge).
pub const PCR_IRQC: FieldDef = FieldDef::new("IRQC", 16, 4);
/// Lock register (fields 0..15 are write-once until reset).
pub const PCR_LK: FieldDef = FieldDef::bit("LK", 15);
/// Pin mux control (0 = disabled, 1 = GPIO, 2.. = peripheral functions).
pub const PCR_MUX: FieldDef = FieldDef::new("MUX", 8, 3);
/// Drive strength enable.
pub const PCR_DSE: FieldDef = FieldDef::bit("DSE", 6);
/// Open drain enable.
pub const PCR_ODE: FieldDef = FieldDef::bit("ODE", 5);
/// Passive filter enable.
pub const PCR_PFE: FieldDef = FieldDef::bit("PFE", 4);
/// Slew rate enable (1 = slow).
pub const PCR_SRE: FieldDef = FieldDef::bit("SRE", 2);
/// Pull enable.
pub const PCR_PE: FieldDef = FieldDef::bit("PE", 1);
/// Pull select (1 = pull-up).
pub const PCR_PS: FieldDef = FieldDef::bit("PS", 0);

const PCR_FIELDS: &[FieldDef] = &[
    PCR_ISF, PCR_IRQC, PCR_LK, PCR_MUX, PCR_DSE, PCR_ODE, PCR_PFE, PCR_SRE, PCR_PE, PCR_PS,
];

/// Global pin control low: GPWE selects pins 0–15, GPWD is written to them.
pub const GPCLR_GPWE: FieldDef = FieldDef::new("GPWE", 16, 16);
/// Write data for the selected pins.
pub const GPCLR_GPWD: FieldDef = FieldDef::new("GPWD", 0, 16);

/// Pin control register, one per pin.
pub const PCR0: RegisterDef = RegisterDef::rw32("PCR0", 0x00, 0, PCR_FIELDS);
/// Pin control register 1.
pub const PCR1: RegisterDef = RegisterDef::rw32("PCR1", 0x04, 0, PCR_FIELDS);
/// Pin control register 2.
pub const PCR2: RegisterDef = RegisterDef::rw32("PCR2", 0x08, 0, PCR_FIELDS);
/// Pin control register 3.
pub const PCR3: RegisterDef = RegisterDef::rw32("PCR3", 0x0C, 0, PCR_FIELDS);
/// Pin control register 4.
pub const PCR4: RegisterDef = RegisterDef::rw32("PCR4", 0x10, 0, PCR_FIELDS);
/// Pin control register 5.
pub const PCR5: RegisterDef = RegisterDef::rw32("PCR5", 0x14, 0, PCR_FIELDS);
/// Pin control register 6.
pub const PCR6: RegisterDef = RegisterDef::rw32("PCR6", 0x18, 0, PCR_FIELDS);
/// Pin control register 7.
pub const PCR7: RegisterDef = RegisterDef::rw32("PCR7", 0x1C, 0, PCR_FIELDS);
/// Pin control register 8.
pub const PCR8: RegisterDef = RegisterDef::rw32("PCR8", 0x20, 0, PCR_FIELDS);
/// Pin control register 9.
pub const PCR9: RegisterDef = RegisterDef::rw32("PCR9", 0x24, 0, PCR_FIELDS);
/// Pin control register 10.
pub const PCR10: RegisterDef = RegisterDef::rw32("PCR10", 0x28, 0, PCR_FIELDS);
/// Pin control register 11.
pub const PCR11: RegisterDef = RegisterDef::rw32("PCR11", 0x2C, 0, PCR_FIELDS);
/// Pin control register 12.
pub const PCR12: RegisterDef = RegisterDef::rw32("PCR12", 0x30, 0, PCR_FIELDS);
/// Pin control register 13.
pub const PCR13: RegisterDef = RegisterDef::rw32("PCR13", 0x34, 0, PCR_FIELDS);
/// Pin control register 14.
pub const PCR14: RegisterDef = RegisterDef::rw32("PCR14", 0x38, 0, PCR_FIELDS);
/// Pin control register 15.
pub const PCR15: RegisterDef = RegisterDef::rw32("PCR15", 0x3C, 0, PCR_FIELDS);
/// Pin control register 16.
pub const PCR16: RegisterDef = RegisterDef::rw32("PCR16", 0x40, 0, PCR_FIELDS);
/// Pin control register 17.
pub const PCR17: RegisterDef = RegisterDef::rw32("PCR17", 0x44, 0, PCR_FIELDS);
/// Pin control register 18.
pub const PCR18: RegisterDef = RegisterDef::rw32("PCR18", 0x48, 0, PCR_FIELDS);
/// Pin control register 19.
pub const PCR19: RegisterDef = RegisterDef::rw32("PCR19", 0x4C, 0, PCR_FIELDS);
/// Pin control register 20.
pub const PCR20: RegisterDef = RegisterDef::rw32("PCR20", 0x50, 0, PCR_FIELDS);
/// Pin control register 21.
pub const PCR21: RegisterDef = RegisterDef::rw32("PCR21", 0x54, 0, PCR_FIELDS);
/// Pin control register 22.
pub const PCR22: RegisterDef = RegisterDef::rw32("PCR22", 0x58, 0, PCR_FIELDS);
/// Pin control register 23.
pub const PCR23: RegisterDef = RegisterDef::rw32("PCR23", 0x5C, 0, PCR_FIELDS);
/// Pin control register 24.
pub const PCR24: RegisterDef = RegisterDef::rw32("PCR24", 0x60, 0, PCR_FIELDS);
/// Pin control register 25.
pub const PCR25: RegisterDef = RegisterDef::rw32("PCR25", 0x64, 0, PCR_FIELDS);
/// Pin control register 26.
pub const PCR26: RegisterDef = RegisterDef::rw32("PCR26", 0x68, 0, PCR_FIELDS);
/// Pin control register 27.
pub const PCR27: RegisterDef = RegisterDef::rw32("PCR27", 0x6C, 0, PCR_FIELDS);
/// Pin control register 28.
pub const PCR28: RegisterDef = RegisterDef::rw32("PCR28", 0x70, 0, PCR_FIELDS);
/// Pin control register 29.
pub const PCR29: RegisterDef = RegisterDef::rw32("PCR29", 0x74, 0, PCR_FIELDS);
/// Pin control register 30.
pub const PCR30: RegisterDef = RegisterDef::rw32("PCR30", 0x78, 0, PCR_FIELDS);
/// Pin control register 31.
pub const PCR31: RegisterDef = RegisterDef::rw32("PCR31", 0x7C, 0, PCR_FIELDS);

/// All 32 pin control registers in pin order.
pub const PCR: [RegisterDef; 32] = [
    PCR0, PCR1, PCR2, PCR3, PCR4, PCR5, PCR6, PCR7, PCR8, PCR9, PCR10, PCR11, PCR12, PCR13,
    PCR14, PCR15, PCR16, PCR17, PCR18, PCR19, PCR20, PCR21, PCR22, PCR23, PCR24, PCR25,
    PCR26, PCR27, PCR28, PCR29, PCR30, PCR31,
];

/// Global pin control low register (pins 0–15).
pub const GPCLR: RegisterDef = RegisterDef::wo32("GPCLR", 0x80, &[GPCLR_GPWE, GPCLR_GPWD]);
/// Global pin control high register (pins 16–31).
pub const GPCHR: RegisterDef = RegisterDef::wo32("GPCHR", 0x84, &[GPCLR_GPWE, GPCLR_GPWD]);
/// Interrupt status flag register (write 1 to clear).
pub const ISFR: RegisterDef =
    RegisterDef::rw32("ISFR", 0xA0, 0, &[FieldDef::new("ISF", 0, 32)]);
/// Digital filter enable register.
pub const DFER: RegisterDef =
    RegisterDef::rw32("DFER", 0xC0, 0, &[FieldDef::new("DFE", 0, 32)]);
/// Digital filter clock register.
pub const DFCR: RegisterDef = RegisterDef::rw32("DFCR", 0xC4, 0, &[FieldDef::bit("CS", 0)]);
/// Digital filter width register.
pub const DFWR: RegisterDef =
    RegisterDef::rw32("DFWR", 0xC8, 0, &[FieldDef::new("FILT", 0, 5)]);

/// PORT memory map.
pub static MAP: MemoryMap = MemoryMap {
    peripheral: "PORT",
    align: AIPS_SLOT_SIZE,
    window: AIPS_SLOT_SIZE,
    registers: &[
        PCR0, PCR1, PCR2, PCR3, PCR4, PCR5, PCR6, PCR7, PCR8, PCR9, PCR10, PCR11, PCR12,
        PCR13, PCR14, PCR15, PCR16, PCR17, PCR18, PCR19, PCR20, PCR21, PCR22, PCR23, PCR24,
        PCR25, PCR26, PCR27, PCR28, PCR29, PCR30, PCR31, GPCLR, GPCHR, ISFR, DFER, DFCR,
        DFWR,
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pcr_stride() {
        for (pin, pcr) in PCR.iter().enumerate() {
            assert_eq!(pcr.offset, 4 * pin as u32);
        }
    }

    #[test]
    fn mux_field_selects_gpio() {
        // MUX = 1 is the GPIO function the LED setup code selects.
        assert_eq!(PCR_MUX.insert(0, 1), 0x0000_0100);
    }
}
