//! GPIO register file.
//!
//! All six ports share one 4 KiB slot at `0x400F_F000`, 0x40 bytes apart,
//! so GPIO instance bases are aligned to the block stride rather than the
//! AIPS slot size. PSOR/PCOR/PTOR are write-only (reads return
//! indeterminate data); pin state comes back through PDIR.

use crate::memmap::GPIO_BASE;
use crate::reg::{FieldDef, MemoryMap, RegisterDef};

/// Byte stride between port instances.
pub const INSTANCE_STRIDE: u32 = 0x40;

/// GPIOA (PTA) base address.
pub const GPIOA: u32 = GPIO_BASE;
/// GPIOB (PTB) base address.
pub const GPIOB: u32 = GPIO_BASE + INSTANCE_STRIDE;
/// GPIOC (PTC) base address.
pub const GPIOC: u32 = GPIO_BASE + 2 * INSTANCE_STRIDE;
/// GPIOD (PTD) base address.
pub const GPIOD: u32 = GPIO_BASE + 3 * INSTANCE_STRIDE;
/// GPIOE (PTE) base address.
pub const GPIOE: u32 = GPIO_BASE + 4 * INSTANCE_STRIDE;
/// GPIOF (PTF) base address.
pub const GPIOF: u32 = GPIO_BASE + 5 * INSTANCE_STRIDE;

/// Instance base addresses in instance order.
pub const BASES: [u32; 6] = [GPIOA, GPIOB, GPIOC, GPIOD, GPIOE, GPIOF];

/// Port data output.
pub const PDOR_PDO: FieldDef = FieldDef::new("PDO", 0, 32);
/// Port set output (write-only strobe).
pub const PSOR_PTSO: FieldDef = FieldDef::new("PTSO", 0, 32);
/// Port clear output (write-only strobe).
pub const PCOR_PTCO: FieldDef = FieldDef::new("PTCO", 0, 32);
/// Port toggle output (write-only strobe).
pub const PTOR_PTTO: FieldDef = FieldDef::new("PTTO", 0, 32);
/// Port data input.
pub const PDIR_PDI: FieldDef = FieldDef::new("PDI", 0, 32);
/// Port data direction (1 = output).
pub const PDDR_PDD: FieldDef = FieldDef::new("PDD", 0, 32);

/// Port data output register.
pub const PDOR: RegisterDef = RegisterDef::rw32("PDOR", 0x00, 0, &[PDOR_PDO]);
/// Port set output register.
pub const PSOR: RegisterDef = RegisterDef::wo32("PSOR", 0x04, &[PSOR_PTSO]);
/// Port clear output register.
pub const PCOR: RegisterDef = RegisterDef::wo32("PCOR", 0x08, &[PCOR_PTCO]);
/// Port toggle output register.
pub const PTOR: RegisterDef = RegisterDef::wo32("PTOR", 0x0C, &[PTOR_PTTO]);
/// Port data input register.
pub const PDIR: RegisterDef = RegisterDef::ro32("PDIR", 0x10, 0, &[PDIR_PDI]);
/// Port data direction register.
pub const PDDR: RegisterDef = RegisterDef::rw32("PDDR", 0x14, 0, &[PDDR_PDD]);

/// GPIO memory map.
pub static MAP: MemoryMap = MemoryMap {
    peripheral: "GPIO",
    align: INSTANCE_STRIDE,
    window: INSTANCE_STRIDE,
    registers: &[PDOR, PSOR, PCOR, PTOR, PDIR, PDDR],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn instances_tile_the_block() {
        assert_eq!(GPIOA, 0x400F_F000);
        assert_eq!(GPIOF, 0x400F_F140);
        for pair in BASES.windows(2) {
            assert_eq!(pair[1] - pair[0], INSTANCE_STRIDE);
        }
    }
}
