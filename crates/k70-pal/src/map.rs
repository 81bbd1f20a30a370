//! Definition-time validation of memory maps.
//!
//! A map is checked once, when the registry is populated. Failures here are
//! definition bugs — overlapping registers, a register hanging out of the
//! peripheral's window, a field wider than its register — and abort
//! registry construction rather than surface per-access.

use crate::error::{PalError, Result};
use k70_chip::reg::{MemoryMap, RegisterDef};

/// Validate one memory map: register alignment, window containment,
/// register disjointness, and per-register field invariants.
///
/// # Errors
///
/// `Misaligned` if a register offset is not aligned to its width,
/// `OutOfRange` if a register or field exceeds its container, `Overlap` if
/// two registers or two fields claim the same bits.
pub fn validate_map(map: &MemoryMap) -> Result<()> {
    for reg in map.registers {
        if reg.offset % reg.width.bytes() != 0 {
            return Err(PalError::Misaligned {
                peripheral: map.peripheral,
                subject: reg.name,
                value: u64::from(reg.offset),
                align: u64::from(reg.width.bytes()),
            });
        }
        if reg.end_offset() > map.window {
            return Err(PalError::out_of_range(
                reg.name,
                u64::from(reg.end_offset()),
                u64::from(map.window),
            ));
        }
        validate_fields(reg)?;
    }

    // Pairwise [offset, end) disjointness. Maps are tens of registers, so
    // the quadratic scan stays cheap and keeps the table order free.
    for (i, a) in map.registers.iter().enumerate() {
        for b in &map.registers[i + 1..] {
            if a.offset < b.end_offset() && b.offset < a.end_offset() {
                return Err(PalError::Overlap {
                    peripheral: map.peripheral,
                    first: a.name,
                    second: b.name,
                });
            }
        }
    }

    tracing::debug!(
        peripheral = map.peripheral,
        registers = map.registers.len(),
        window = map.window,
        "memory map validated"
    );
    Ok(())
}

/// Validate an instance base address against the map's alignment rule.
///
/// # Errors
///
/// `Misaligned` if the base does not satisfy the map's required alignment.
pub fn validate_base(label: &'static str, base: u32, map: &MemoryMap) -> Result<()> {
    if map.align == 0 || base % map.align != 0 {
        return Err(PalError::Misaligned {
            peripheral: label,
            subject: "base address",
            value: u64::from(base),
            align: u64::from(map.align),
        });
    }
    Ok(())
}

fn validate_fields(reg: &RegisterDef) -> Result<()> {
    for field in reg.fields {
        if field.width == 0 {
            return Err(PalError::out_of_range(field.name, 0, 0));
        }
        let end = field.shift + field.width;
        if end > reg.width.bits() {
            return Err(PalError::out_of_range(
                field.name,
                u64::from(end),
                u64::from(reg.width.bits()),
            ));
        }
    }
    for (i, a) in reg.fields.iter().enumerate() {
        for b in &reg.fields[i + 1..] {
            if a.mask() & b.mask() != 0 {
                return Err(PalError::Overlap {
                    peripheral: reg.name,
                    first: a.name,
                    second: b.name,
                });
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use k70_chip::reg::{Access, FieldDef, RegWidth};

    fn map_of(registers: &'static [RegisterDef]) -> MemoryMap {
        MemoryMap { peripheral: "TEST", align: 0x1000, window: 0x100, registers }
    }

    #[test]
    fn overlapping_registers_are_rejected() {
        // A 32-bit register at 0x0 collides with a 8-bit one at 0x2.
        static REGS: [RegisterDef; 2] = [
            RegisterDef::rw32("A", 0x0, 0, &[]),
            RegisterDef::rw8("B", 0x2, 0, &[]),
        ];
        let err = validate_map(&map_of(&REGS)).unwrap_err();
        assert!(matches!(err, PalError::Overlap { first: "A", second: "B", .. }));
    }

    #[test]
    fn misaligned_offset_is_rejected() {
        static REGS: [RegisterDef; 1] = [RegisterDef::rw32("A", 0x2, 0, &[])];
        let err = validate_map(&map_of(&REGS)).unwrap_err();
        assert!(matches!(err, PalError::Misaligned { subject: "A", .. }));
    }

    #[test]
    fn register_outside_window_is_rejected() {
        static REGS: [RegisterDef; 1] = [RegisterDef::rw32("A", 0x100, 0, &[])];
        let err = validate_map(&map_of(&REGS)).unwrap_err();
        assert!(matches!(err, PalError::OutOfRange { subject: "A", .. }));
    }

    #[test]
    fn field_wider_than_register_is_rejected() {
        static REGS: [RegisterDef; 1] =
            [RegisterDef::rw8("A", 0x0, 0, &[FieldDef::new("F", 4, 5)])];
        let err = validate_map(&map_of(&REGS)).unwrap_err();
        assert!(matches!(err, PalError::OutOfRange { subject: "F", .. }));
    }

    #[test]
    fn overlapping_fields_are_rejected() {
        static REGS: [RegisterDef; 1] = [RegisterDef::rw32(
            "A",
            0x0,
            0,
            &[FieldDef::new("LO", 0, 8), FieldDef::new("HI", 6, 8)],
        )];
        let err = validate_map(&map_of(&REGS)).unwrap_err();
        assert!(matches!(err, PalError::Overlap { first: "LO", second: "HI", .. }));
    }

    #[test]
    fn adjacent_registers_and_fields_pass() {
        static REGS: [RegisterDef; 3] = [
            RegisterDef::rw8("B0", 0x0, 0, &[FieldDef::new("LO", 0, 4), FieldDef::new("HI", 4, 4)]),
            RegisterDef::rw8("B1", 0x1, 0, &[]),
            RegisterDef::new("W", 0x2, RegWidth::W16, Access::ReadWrite, 0, &[]),
        ];
        validate_map(&map_of(&REGS)).unwrap();
    }

    #[test]
    fn misaligned_base_is_rejected() {
        static REGS: [RegisterDef; 0] = [];
        let map = map_of(&REGS);
        assert!(validate_base("TEST", 0x4000_0800, &map).is_err());
        validate_base("TEST", 0x4000_1000, &map).unwrap();
    }
}
