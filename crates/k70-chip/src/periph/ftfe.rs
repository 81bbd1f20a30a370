//! FTFE (flash memory controller) register file.
//!
//! An 8-bit register file: command status, the twelve-byte FCCOB command
//! object, and the protection registers. Command sequences write FCCOB then
//! clear FSTAT[CCIF] to launch; completion is CCIF returning high.

use crate::memmap::{aips0_slot, AIPS_SLOT_SIZE};
use crate::reg::{FieldDef, MemoryMap, RegisterDef};

/// FTFE base address.
pub const FTFE: u32 = aips0_slot(0x20);

// FSTAT — flash status
/// Command complete interrupt flag (1 = ready; write 1 to launch).
pub const FSTAT_CCIF: FieldDef = FieldDef::bit("CCIF", 7);
/// Read collision error (write 1 to clear).
pub const FSTAT_RDCOLERR: FieldDef = FieldDef::bit("RDCOLERR", 6);
/// Access error (write 1 to clear).
pub const FSTAT_ACCERR: FieldDef = FieldDef::bit("ACCERR", 5);
/// Protection violation (write 1 to clear).
pub const FSTAT_FPVIOL: FieldDef = FieldDef::bit("FPVIOL", 4);
/// Command completion status.
pub const FSTAT_MGSTAT0: FieldDef = FieldDef::bit("MGSTAT0", 0);

// FCNFG — flash configuration
/// Command complete interrupt enable.
pub const FCNFG_CCIE: FieldDef = FieldDef::bit("CCIE", 7);
/// Read collision error interrupt enable.
pub const FCNFG_RDCOLLIE: FieldDef = FieldDef::bit("RDCOLLIE", 6);
/// Erase all request.
pub const FCNFG_ERSAREQ: FieldDef = FieldDef::bit("ERSAREQ", 5);
/// Erase suspend.
pub const FCNFG_ERSSUSP: FieldDef = FieldDef::bit("ERSSUSP", 4);
/// Swap in progress.
pub const FCNFG_SWAP: FieldDef = FieldDef::bit("SWAP", 3);
/// Program flash only (no FlexNVM).
pub const FCNFG_PFLSH: FieldDef = FieldDef::bit("PFLSH", 2);
/// FlexRAM is available as traditional RAM.
pub const FCNFG_RAMRDY: FieldDef = FieldDef::bit("RAMRDY", 1);
/// FlexRAM is available for EEPROM.
pub const FCNFG_EEERDY: FieldDef = FieldDef::bit("EEERDY", 0);

// FSEC — flash security (read-only)
/// Backdoor key enable.
pub const FSEC_KEYEN: FieldDef = FieldDef::new("KEYEN", 6, 2);
/// Mass erase enable.
pub const FSEC_MEEN: FieldDef = FieldDef::new("MEEN", 4, 2);
/// Failure analysis access.
pub const FSEC_FSLACC: FieldDef = FieldDef::new("FSLACC", 2, 2);
/// Flash security state.
pub const FSEC_SEC: FieldDef = FieldDef::new("SEC", 0, 2);

const CCOB: &[FieldDef] = &[FieldDef::new("CCOB", 0, 8)];
const PROT: &[FieldDef] = &[FieldDef::new("PROT", 0, 8)];

/// Flash status register. CCIF is high when the controller is idle.
pub const FSTAT: RegisterDef = RegisterDef::rw8(
    "FSTAT",
    0x00,
    0x80,
    &[FSTAT_CCIF, FSTAT_RDCOLERR, FSTAT_ACCERR, FSTAT_FPVIOL, FSTAT_MGSTAT0],
);
/// Flash configuration register.
pub const FCNFG: RegisterDef = RegisterDef::rw8(
    "FCNFG",
    0x01,
    0x00,
    &[
        FCNFG_CCIE, FCNFG_RDCOLLIE, FCNFG_ERSAREQ, FCNFG_ERSSUSP, FCNFG_SWAP, FCNFG_PFLSH,
        FCNFG_RAMRDY, FCNFG_EEERDY,
    ],
);
/// Flash security register (loaded from the flash configuration field).
pub const FSEC: RegisterDef =
    RegisterDef::ro8("FSEC", 0x02, 0x00, &[FSEC_KEYEN, FSEC_MEEN, FSEC_FSLACC, FSEC_SEC]);
/// Flash option register.
pub const FOPT: RegisterDef = RegisterDef::ro8("FOPT", 0x03, 0x00, &[FieldDef::new("OPT", 0, 8)]);

/// Command object byte 3 (command code).
pub const FCCOB3: RegisterDef = RegisterDef::rw8("FCCOB3", 0x04, 0, CCOB);
/// Command object byte 2.
pub const FCCOB2: RegisterDef = RegisterDef::rw8("FCCOB2", 0x05, 0, CCOB);
/// Command object byte 1.
pub const FCCOB1: RegisterDef = RegisterDef::rw8("FCCOB1", 0x06, 0, CCOB);
/// Command object byte 0.
pub const FCCOB0: RegisterDef = RegisterDef::rw8("FCCOB0", 0x07, 0, CCOB);
/// Command object byte 7.
pub const FCCOB7: RegisterDef = RegisterDef::rw8("FCCOB7", 0x08, 0, CCOB);
/// Command object byte 6.
pub const FCCOB6: RegisterDef = RegisterDef::rw8("FCCOB6", 0x09, 0, CCOB);
/// Command object byte 5.
pub const FCCOB5: RegisterDef = RegisterDef::rw8("FCCOB5", 0x0A, 0, CCOB);
/// Command object byte 4.
pub const FCCOB4: RegisterDef = RegisterDef::rw8("FCCOB4", 0x0B, 0, CCOB);
/// Command object byte B.
pub const FCCOBB: RegisterDef = RegisterDef::rw8("FCCOBB", 0x0C, 0, CCOB);
/// Command object byte A.
pub const FCCOBA: RegisterDef = RegisterDef::rw8("FCCOBA", 0x0D, 0, CCOB);
/// Command object byte 9.
pub const FCCOB9: RegisterDef = RegisterDef::rw8("FCCOB9", 0x0E, 0, CCOB);
/// Command object byte 8.
pub const FCCOB8: RegisterDef = RegisterDef::rw8("FCCOB8", 0x0F, 0, CCOB);

/// Program flash protection, bytes 3..0.
pub const FPROT3: RegisterDef = RegisterDef::rw8("FPROT3", 0x10, 0xFF, PROT);
/// Program flash protection byte 2.
pub const FPROT2: RegisterDef = RegisterDef::rw8("FPROT2", 0x11, 0xFF, PROT);
/// Program flash protection byte 1.
pub const FPROT1: RegisterDef = RegisterDef::rw8("FPROT1", 0x12, 0xFF, PROT);
/// Program flash protection byte 0.
pub const FPROT0: RegisterDef = RegisterDef::rw8("FPROT0", 0x13, 0xFF, PROT);
/// EEPROM protection.
pub const FEPROT: RegisterDef =
    RegisterDef::rw8("FEPROT", 0x16, 0xFF, &[FieldDef::new("EPROT", 0, 8)]);
/// Data flash protection.
pub const FDPROT: RegisterDef =
    RegisterDef::rw8("FDPROT", 0x17, 0xFF, &[FieldDef::new("DPROT", 0, 8)]);

/// FTFE memory map.
pub static MAP: MemoryMap = MemoryMap {
    peripheral: "FTFE",
    align: AIPS_SLOT_SIZE,
    window: AIPS_SLOT_SIZE,
    registers: &[
        FSTAT, FCNFG, FSEC, FOPT, FCCOB3, FCCOB2, FCCOB1, FCCOB0, FCCOB7, FCCOB6, FCCOB5,
        FCCOB4, FCCOBB, FCCOBA, FCCOB9, FCCOB8, FPROT3, FPROT2, FPROT1, FPROT0, FEPROT,
        FDPROT,
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controller_idle_out_of_reset() {
        assert_eq!(FSTAT.reset, FSTAT_CCIF.mask());
    }

    #[test]
    fn error_flags_share_fstat() {
        let errors = FSTAT_ACCERR.mask() | FSTAT_FPVIOL.mask();
        assert_eq!(errors, 0x30);
    }
}
