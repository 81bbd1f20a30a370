//! FTM (FlexTimer) register file.
//!
//! Eight capture/compare channels around a 16-bit counter, plus the fault,
//! synchronization, and quadrature-decoder machinery. CnSC/CnV pairs sit at
//! `0x0C + 8 * n`. Several configuration registers are guarded by the
//! write-protection bits in MODE/FMS.

use crate::memmap::{aips0_slot, aips1_slot, AIPS_SLOT_SIZE};
use crate::reg::{FieldDef, MemoryMap, RegisterDef};

/// FTM0 base address.
pub const FTM0: u32 = aips0_slot(0x38);
/// FTM1 base address.
pub const FTM1: u32 = aips0_slot(0x39);
/// FTM2 base address.
pub const FTM2: u32 = aips1_slot(0x38);
/// FTM3 base address.
pub const FTM3: u32 = aips1_slot(0x39);

/// Instance base addresses in instance order.
pub const BASES: [u32; 4] = [FTM0, FTM1, FTM2, FTM3];

/// Number of capture/compare channels.
pub const CHANNELS: usize = 8;

// SC — status and control
/// Timer overflow flag.
pub const SC_TOF: FieldDef = FieldDef::bit("TOF", 7);
/// Timer overflow interrupt enable.
pub const SC_TOIE: FieldDef = FieldDef::bit("TOIE", 6);
/// Center-aligned PWM select.
pub const SC_CPWMS: FieldDef = FieldDef::bit("CPWMS", 5);
/// Clock source (0 = none, 1 = system, 2 = fixed frequency, 3 = external).
pub const SC_CLKS: FieldDef = FieldDef::new("CLKS", 3, 2);
/// Prescale factor (divide by 2^PS).
pub const SC_PS: FieldDef = FieldDef::new("PS", 0, 3);

/// Counter value.
pub const CNT_COUNT: FieldDef = FieldDef::new("COUNT", 0, 16);
/// Modulo value.
pub const MOD_MOD: FieldDef = FieldDef::new("MOD", 0, 16);
/// Counter initial value.
pub const CNTIN_INIT: FieldDef = FieldDef::new("INIT", 0, 16);

// CnSC — channel status and control
/// Channel event flag.
pub const CNSC_CHF: FieldDef = FieldDef::bit("CHF", 7);
/// Channel interrupt enable.
pub const CNSC_CHIE: FieldDef = FieldDef::bit("CHIE", 6);
/// Mode select B.
pub const CNSC_MSB: FieldDef = FieldDef::bit("MSB", 5);
/// Mode select A.
pub const CNSC_MSA: FieldDef = FieldDef::bit("MSA", 4);
/// Edge/level select B.
pub const CNSC_ELSB: FieldDef = FieldDef::bit("ELSB", 3);
/// Edge/level select A.
pub const CNSC_ELSA: FieldDef = FieldDef::bit("ELSA", 2);
/// DMA transfer enable.
pub const CNSC_DMA: FieldDef = FieldDef::bit("DMA", 0);

/// Channel match/capture value.
pub const CNV_VAL: FieldDef = FieldDef::new("VAL", 0, 16);

// MODE
/// Fault interrupt enable.
pub const MODE_FAULTIE: FieldDef = FieldDef::bit("FAULTIE", 7);
/// Fault control mode.
pub const MODE_FAULTM: FieldDef = FieldDef::new("FAULTM", 5, 2);
/// Capture test mode.
pub const MODE_CAPTEST: FieldDef = FieldDef::bit("CAPTEST", 4);
/// PWM synchronization mode.
pub const MODE_PWMSYNC: FieldDef = FieldDef::bit("PWMSYNC", 3);
/// Write protection disable.
pub const MODE_WPDIS: FieldDef = FieldDef::bit("WPDIS", 2);
/// Initialize channel outputs.
pub const MODE_INIT: FieldDef = FieldDef::bit("INIT", 1);
/// FTM enable (0 = TPM-compatible mode).
pub const MODE_FTMEN: FieldDef = FieldDef::bit("FTMEN", 0);

// FMS — fault mode status
/// Logic-OR of the fault inputs.
pub const FMS_FAULTF: FieldDef = FieldDef::bit("FAULTF", 7);
/// Write protection enable (set only; cleared via MODE[WPDIS]).
pub const FMS_WPEN: FieldDef = FieldDef::bit("WPEN", 6);
/// Fault inputs value.
pub const FMS_FAULTIN: FieldDef = FieldDef::bit("FAULTIN", 5);
/// Fault flag, input 3.
pub const FMS_FAULTF3: FieldDef = FieldDef::bit("FAULTF3", 3);
/// Fault flag, input 2.
pub const FMS_FAULTF2: FieldDef = FieldDef::bit("FAULTF2", 2);
/// Fault flag, input 1.
pub const FMS_FAULTF1: FieldDef = FieldDef::bit("FAULTF1", 1);
/// Fault flag, input 0.
pub const FMS_FAULTF0: FieldDef = FieldDef::bit("FAULTF0", 0);

// QDCTRL — quadrature decoder
/// Phase A filter enable.
pub const QDCTRL_PHAFLTREN: FieldDef = FieldDef::bit("PHAFLTREN", 7);
/// Phase B filter enable.
pub const QDCTRL_PHBFLTREN: FieldDef = FieldDef::bit("PHBFLTREN", 6);
/// Phase A polarity.
pub const QDCTRL_PHAPOL: FieldDef = FieldDef::bit("PHAPOL", 5);
/// Phase B polarity.
pub const QDCTRL_PHBPOL: FieldDef = FieldDef::bit("PHBPOL", 4);
/// Quadrature mode (count-direction vs phase).
pub const QDCTRL_QUADMODE: FieldDef = FieldDef::bit("QUADMODE", 3);
/// Counting direction.
pub const QDCTRL_QUADIR: FieldDef = FieldDef::bit("QUADIR", 2);
/// Overflow direction.
pub const QDCTRL_TOFDIR: FieldDef = FieldDef::bit("TOFDIR", 1);
/// Quadrature decoder enable.
pub const QDCTRL_QUADEN: FieldDef = FieldDef::bit("QUADEN", 0);

// SYNC
/// Software trigger.
pub const SYNC_SWSYNC: FieldDef = FieldDef::bit("SWSYNC", 7);
/// Hardware trigger 2 enable.
pub const SYNC_TRIG2: FieldDef = FieldDef::bit("TRIG2", 6);
/// Hardware trigger 1 enable.
pub const SYNC_TRIG1: FieldDef = FieldDef::bit("TRIG1", 5);
/// Hardware trigger 0 enable.
pub const SYNC_TRIG0: FieldDef = FieldDef::bit("TRIG0", 4);
/// Output mask synchronization.
pub const SYNC_SYNCHOM: FieldDef = FieldDef::bit("SYNCHOM", 3);
/// FTM counter reinitialization by synchronization.
pub const SYNC_REINIT: FieldDef = FieldDef::bit("REINIT", 2);
/// Maximum loading point enable.
pub const SYNC_CNTMAX: FieldDef = FieldDef::bit("CNTMAX", 1);
/// Minimum loading point enable.
pub const SYNC_CNTMIN: FieldDef = FieldDef::bit("CNTMIN", 0);

// DEADTIME
/// Deadtime prescaler.
pub const DEADTIME_DTPS: FieldDef = FieldDef::new("DTPS", 6, 2);
/// Deadtime value.
pub const DEADTIME_DTVAL: FieldDef = FieldDef::new("DTVAL", 0, 6);

const CNSC_FIELDS: &[FieldDef] =
    &[CNSC_CHF, CNSC_CHIE, CNSC_MSB, CNSC_MSA, CNSC_ELSB, CNSC_ELSA, CNSC_DMA];
const CNV_FIELDS: &[FieldDef] = &[CNV_VAL];

/// Status and control.
pub const SC: RegisterDef =
    RegisterDef::rw32("SC", 0x00, 0, &[SC_TOF, SC_TOIE, SC_CPWMS, SC_CLKS, SC_PS]);
/// Counter.
pub const CNT: RegisterDef = RegisterDef::rw32("CNT", 0x04, 0, &[CNT_COUNT]);
/// Modulo.
pub const MOD: RegisterDef = RegisterDef::rw32("MOD", 0x08, 0, &[MOD_MOD]);

/// Channel 0 status and control.
pub const C0SC: RegisterDef = RegisterDef::rw32("C0SC", 0x0C, 0, CNSC_FIELDS);
/// Channel 0 value.
pub const C0V: RegisterDef = RegisterDef::rw32("C0V", 0x10, 0, CNV_FIELDS);
/// Channel 1 status and control.
pub const C1SC: RegisterDef = RegisterDef::rw32("C1SC", 0x14, 0, CNSC_FIELDS);
/// Channel 1 value.
pub const C1V: RegisterDef = RegisterDef::rw32("C1V", 0x18, 0, CNV_FIELDS);
/// Channel 2 status and control.
pub const C2SC: RegisterDef = RegisterDef::rw32("C2SC", 0x1C, 0, CNSC_FIELDS);
/// Channel 2 value.
pub const C2V: RegisterDef = RegisterDef::rw32("C2V", 0x20, 0, CNV_FIELDS);
/// Channel 3 status and control.
pub const C3SC: RegisterDef = RegisterDef::rw32("C3SC", 0x24, 0, CNSC_FIELDS);
/// Channel 3 value.
pub const C3V: RegisterDef = RegisterDef::rw32("C3V", 0x28, 0, CNV_FIELDS);
/// Channel 4 status and control.
pub const C4SC: RegisterDef = RegisterDef::rw32("C4SC", 0x2C, 0, CNSC_FIELDS);
/// Channel 4 value.
pub const C4V: RegisterDef = RegisterDef::rw32("C4V", 0x30, 0, CNV_FIELDS);
/// Channel 5 status and control.
pub const C5SC: RegisterDef = RegisterDef::rw32("C5SC", 0x34, 0, CNSC_FIELDS);
/// Channel 5 value.
pub const C5V: RegisterDef = RegisterDef::rw32("C5V", 0x38, 0, CNV_FIELDS);
/// Channel 6 status and control.
pub const C6SC: RegisterDef = RegisterDef::rw32("C6SC", 0x3C, 0, CNSC_FIELDS);
/// Channel 6 value.
pub const C6V: RegisterDef = RegisterDef::rw32("C6V", 0x40, 0, CNV_FIELDS);
/// Channel 7 status and control.
pub const C7SC: RegisterDef = RegisterDef::rw32("C7SC", 0x44, 0, CNSC_FIELDS);
/// Channel 7 value.
pub const C7V: RegisterDef = RegisterDef::rw32("C7V", 0x48, 0, CNV_FIELDS);

/// Channel (CnSC, CnV) pairs in channel order.
pub const CHANNEL_REGS: [[RegisterDef; 2]; CHANNELS] = [
    [C0SC, C0V],
    [C1SC, C1V],
    [C2SC, C2V],
    [C3SC, C3V],
    [C4SC, C4V],
    [C5SC, C5V],
    [C6SC, C6V],
    [C7SC, C7V],
];

/// Counter initial value.
pub const CNTIN: RegisterDef = RegisterDef::rw32("CNTIN", 0x4C, 0, &[CNTIN_INIT]);
/// Capture and compare status (CHnF mirror).
pub const STATUS: RegisterDef = RegisterDef::rw32(
    "STATUS",
    0x50,
    0,
    &[
        FieldDef::bit("CH7F", 7),
        FieldDef::bit("CH6F", 6),
        FieldDef::bit("CH5F", 5),
        FieldDef::bit("CH4F", 4),
        FieldDef::bit("CH3F", 3),
        FieldDef::bit("CH2F", 2),
        FieldDef::bit("CH1F", 1),
        FieldDef::bit("CH0F", 0),
    ],
);
/// Features mode selection.
pub const MODE: RegisterDef = RegisterDef::rw32(
    "MODE",
    0x54,
    0x0000_0004,
    &[MODE_FAULTIE, MODE_FAULTM, MODE_CAPTEST, MODE_PWMSYNC, MODE_WPDIS, MODE_INIT, MODE_FTMEN],
);
/// Synchronization.
pub const SYNC: RegisterDef = RegisterDef::rw32(
    "SYNC",
    0x58,
    0,
    &[
        SYNC_SWSYNC, SYNC_TRIG2, SYNC_TRIG1, SYNC_TRIG0, SYNC_SYNCHOM, SYNC_REINIT,
        SYNC_CNTMAX, SYNC_CNTMIN,
    ],
);
/// Initial state for channel outputs.
pub const OUTINIT: RegisterDef = RegisterDef::rw32(
    "OUTINIT",
    0x5C,
    0,
    &[FieldDef::new("CHOI", 0, 8)],
);
/// Output mask.
pub const OUTMASK: RegisterDef = RegisterDef::rw32(
    "OUTMASK",
    0x60,
    0,
    &[FieldDef::new("CHOM", 0, 8)],
);
/// Function for linked channels.
pub const COMBINE: RegisterDef = RegisterDef::rw32(
    "COMBINE",
    0x64,
    0,
    &[
        FieldDef::new("PAIR0", 0, 7),
        FieldDef::new("PAIR1", 8, 7),
        FieldDef::new("PAIR2", 16, 7),
        FieldDef::new("PAIR3", 24, 7),
    ],
);
/// Deadtime insertion control.
pub const DEADTIME: RegisterDef =
    RegisterDef::rw32("DEADTIME", 0x68, 0, &[DEADTIME_DTPS, DEADTIME_DTVAL]);
/// External trigger.
pub const EXTTRIG: RegisterDef = RegisterDef::rw32(
    "EXTTRIG",
    0x6C,
    0,
    &[
        FieldDef::bit("TRIGF", 7),
        FieldDef::bit("INITTRIGEN", 6),
        FieldDef::bit("CH1TRIG", 5),
        FieldDef::bit("CH0TRIG", 4),
        FieldDef::bit("CH5TRIG", 3),
        FieldDef::bit("CH4TRIG", 2),
        FieldDef::bit("CH3TRIG", 1),
        FieldDef::bit("CH2TRIG", 0),
    ],
);
/// Channel polarity.
pub const POL: RegisterDef =
    RegisterDef::rw32("POL", 0x70, 0, &[FieldDef::new("POL", 0, 8)]);
/// Fault mode status.
pub const FMS: RegisterDef = RegisterDef::rw32(
    "FMS",
    0x74,
    0,
    &[FMS_FAULTF, FMS_WPEN, FMS_FAULTIN, FMS_FAULTF3, FMS_FAULTF2, FMS_FAULTF1, FMS_FAULTF0],
);
/// Input capture filter control.
pub const FILTER: RegisterDef = RegisterDef::rw32(
    "FILTER",
    0x78,
    0,
    &[
        FieldDef::new("CH3FVAL", 12, 4),
        FieldDef::new("CH2FVAL", 8, 4),
        FieldDef::new("CH1FVAL", 4, 4),
        FieldDef::new("CH0FVAL", 0, 4),
    ],
);
/// Fault control.
pub const FLTCTRL: RegisterDef = RegisterDef::rw32(
    "FLTCTRL",
    0x7C,
    0,
    &[
        FieldDef::new("FFVAL", 8, 4),
        FieldDef::bit("FFLTR3EN", 7),
        FieldDef::bit("FFLTR2EN", 6),
        FieldDef::bit("FFLTR1EN", 5),
        FieldDef::bit("FFLTR0EN", 4),
        FieldDef::bit("FAULT3EN", 3),
        FieldDef::bit("FAULT2EN", 2),
        FieldDef::bit("FAULT1EN", 1),
        FieldDef::bit("FAULT0EN", 0),
    ],
);
/// Quadrature decoder control and status.
pub const QDCTRL: RegisterDef = RegisterDef::rw32(
    "QDCTRL",
    0x80,
    0,
    &[
        QDCTRL_PHAFLTREN, QDCTRL_PHBFLTREN, QDCTRL_PHAPOL, QDCTRL_PHBPOL, QDCTRL_QUADMODE,
        QDCTRL_QUADIR, QDCTRL_TOFDIR, QDCTRL_QUADEN,
    ],
);
/// Configuration.
pub const CONF: RegisterDef = RegisterDef::rw32(
    "CONF",
    0x84,
    0,
    &[
        FieldDef::bit("GTBEOUT", 10),
        FieldDef::bit("GTBEEN", 9),
        FieldDef::new("BDMMODE", 6, 2),
        FieldDef::new("NUMTOF", 0, 5),
    ],
);
/// Fault input polarity.
pub const FLTPOL: RegisterDef =
    RegisterDef::rw32("FLTPOL", 0x88, 0, &[FieldDef::new("FLTPOL", 0, 4)]);
/// Synchronization configuration.
pub const SYNCONF: RegisterDef = RegisterDef::rw32(
    "SYNCONF",
    0x8C,
    0,
    &[
        FieldDef::bit("HWSOC", 20),
        FieldDef::bit("HWINVC", 19),
        FieldDef::bit("HWOM", 18),
        FieldDef::bit("HWWRBUF", 17),
        FieldDef::bit("HWRSTCNT", 16),
        FieldDef::bit("SWSOC", 12),
        FieldDef::bit("SWINVC", 11),
        FieldDef::bit("SWOM", 10),
        FieldDef::bit("SWWRBUF", 9),
        FieldDef::bit("SWRSTCNT", 8),
        FieldDef::bit("SYNCMODE", 7),
        FieldDef::bit("SWOC", 5),
        FieldDef::bit("INVC", 4),
        FieldDef::bit("CNTINC", 2),
        FieldDef::bit("HWTRIGMODE", 0),
    ],
);
/// Inverting control.
pub const INVCTRL: RegisterDef =
    RegisterDef::rw32("INVCTRL", 0x90, 0, &[FieldDef::new("INV", 0, 4)]);
/// Software output control.
pub const SWOCTRL: RegisterDef = RegisterDef::rw32(
    "SWOCTRL",
    0x94,
    0,
    &[FieldDef::new("CHOCV", 8, 8), FieldDef::new("CHOC", 0, 8)],
);
/// PWM load control.
pub const PWMLOAD: RegisterDef = RegisterDef::rw32(
    "PWMLOAD",
    0x98,
    0,
    &[FieldDef::bit("LDOK", 9), FieldDef::new("CHSEL", 0, 8)],
);

/// FTM memory map.
pub static MAP: MemoryMap = MemoryMap {
    peripheral: "FTM",
    align: AIPS_SLOT_SIZE,
    window: AIPS_SLOT_SIZE,
    registers: &[
        SC, CNT, MOD, C0SC, C0V, C1SC, C1V, C2SC, C2V, C3SC, C3V, C4SC, C4V, C5SC, C5V,
        C6SC, C6V, C7SC, C7V, CNTIN, STATUS, MODE, SYNC, OUTINIT, OUTMASK, COMBINE,
        DEADTIME, EXTTRIG, POL, FMS, FILTER, FLTCTRL, QDCTRL, CONF, FLTPOL, SYNCONF,
        INVCTRL, SWOCTRL, PWMLOAD,
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_pairs_at_8_byte_stride() {
        for (n, pair) in CHANNEL_REGS.iter().enumerate() {
            assert_eq!(pair[0].offset, 0x0C + 8 * n as u32);
            assert_eq!(pair[1].offset, pair[0].offset + 4);
        }
    }

    #[test]
    fn output_compare_mode_bits() {
        // MSA set, MSB/ELSB/ELSA clear selects output compare, pin untouched.
        let cnsc = CNSC_MSA.insert(0, 1);
        assert_eq!(cnsc, 0x10);
        assert_eq!(CNSC_MSB.extract(cnsc), 0);
    }
}
