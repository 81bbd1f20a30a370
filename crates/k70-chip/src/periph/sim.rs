//! SIM (system integration module) register file.
//!
//! The SIM spans two AIPS slots: SOPT1/SOPT1CFG sit in the first, the rest
//! of the register file starts at `0x1004` in the second. The SCGC clock
//! gate registers are shared by every driver on the chip, so they are
//! marked read-modify-write: a blind store would gate clocks other code
//! still depends on.

use crate::memmap::{aips0_slot, AIPS_SLOT_SIZE};
use crate::reg::{FieldDef, MemoryMap, RegisterDef};

/// SIM base address.
pub const SIM: u32 = aips0_slot(0x47);

// SOPT1
/// USB voltage regulator enable.
pub const SOPT1_USBREGEN: FieldDef = FieldDef::bit("USBREGEN", 31);
/// USB regulator standby in stop modes.
pub const SOPT1_USBSSTBY: FieldDef = FieldDef::bit("USBSSTBY", 30);
/// USB regulator standby in VLPR.
pub const SOPT1_USBVSTBY: FieldDef = FieldDef::bit("USBVSTBY", 29);
/// 32 kHz oscillator clock select.
pub const SOPT1_OSC32KSEL: FieldDef = FieldDef::bit("OSC32KSEL", 19);
/// RAM size (read-only encoding).
pub const SOPT1_RAMSIZE: FieldDef = FieldDef::new("RAMSIZE", 12, 4);

// SOPT2
/// USB FS clock source.
pub const SOPT2_USBFSRC: FieldDef = FieldDef::new("USBFSRC", 22, 2);
/// USB FS fractional divider source.
pub const SOPT2_USBF_CLKSEL: FieldDef = FieldDef::bit("USBF_CLKSEL", 18);
/// PLL/FLL clock select.
pub const SOPT2_PLLFLLSEL: FieldDef = FieldDef::new("PLLFLLSEL", 16, 2);
/// Debug trace clock select.
pub const SOPT2_TRACECLKSEL: FieldDef = FieldDef::bit("TRACECLKSEL", 12);
/// PTD7 pad drive strength.
pub const SOPT2_PTD7PAD: FieldDef = FieldDef::bit("PTD7PAD", 11);
/// FlexBus security level.
pub const SOPT2_FBSL: FieldDef = FieldDef::new("FBSL", 8, 2);
/// CLKOUT pin select.
pub const SOPT2_CLKOUTSEL: FieldDef = FieldDef::new("CLKOUTSEL", 5, 3);
/// RTC clock out select.
pub const SOPT2_RTCCLKOUTSEL: FieldDef = FieldDef::bit("RTCCLKOUTSEL", 4);

// SCGC3
/// RNGA clock gate.
pub const SCGC3_RNGA: FieldDef = FieldDef::bit("RNGA", 0);
/// FlexCAN1 clock gate.
pub const SCGC3_FLEXCAN1: FieldDef = FieldDef::bit("FLEXCAN1", 4);
/// NAND flash controller clock gate.
pub const SCGC3_NFC: FieldDef = FieldDef::bit("NFC", 8);
/// DSPI2 clock gate.
pub const SCGC3_DSPI2: FieldDef = FieldDef::bit("DSPI2", 12);
/// DDR controller clock gate.
pub const SCGC3_DDR: FieldDef = FieldDef::bit("DDR", 14);
/// SAI1 clock gate.
pub const SCGC3_SAI1: FieldDef = FieldDef::bit("SAI1", 15);
/// SDHC clock gate.
pub const SCGC3_SDHC: FieldDef = FieldDef::bit("SDHC", 17);
/// FTM2 clock gate.
pub const SCGC3_FTM2: FieldDef = FieldDef::bit("FTM2", 24);
/// FTM3 clock gate.
pub const SCGC3_FTM3: FieldDef = FieldDef::bit("FTM3", 25);
/// ADC1 clock gate.
pub const SCGC3_ADC1: FieldDef = FieldDef::bit("ADC1", 27);
/// ADC3 clock gate.
pub const SCGC3_ADC3: FieldDef = FieldDef::bit("ADC3", 28);

// SCGC4
/// EWM clock gate.
pub const SCGC4_EWM: FieldDef = FieldDef::bit("EWM", 1);
/// CMT clock gate.
pub const SCGC4_CMT: FieldDef = FieldDef::bit("CMT", 2);
/// I2C0 clock gate.
pub const SCGC4_IIC0: FieldDef = FieldDef::bit("IIC0", 6);
/// I2C1 clock gate.
pub const SCGC4_IIC1: FieldDef = FieldDef::bit("IIC1", 7);
/// UART0 clock gate.
pub const SCGC4_UART0: FieldDef = FieldDef::bit("UART0", 10);
/// UART1 clock gate.
pub const SCGC4_UART1: FieldDef = FieldDef::bit("UART1", 11);
/// UART2 clock gate.
pub const SCGC4_UART2: FieldDef = FieldDef::bit("UART2", 12);
/// UART3 clock gate.
pub const SCGC4_UART3: FieldDef = FieldDef::bit("UART3", 13);
/// USB FS OTG clock gate.
pub const SCGC4_USBFS: FieldDef = FieldDef::bit("USBFS", 18);
/// Comparator clock gate.
pub const SCGC4_CMP: FieldDef = FieldDef::bit("CMP", 19);
/// Voltage reference clock gate.
pub const SCGC4_VREF: FieldDef = FieldDef::bit("VREF", 20);
/// LLWU clock gate.
pub const SCGC4_LLWU: FieldDef = FieldDef::bit("LLWU", 28);

// SCGC5
/// Low-power timer clock gate.
pub const SCGC5_LPTIMER: FieldDef = FieldDef::bit("LPTIMER", 0);
/// TSI clock gate.
pub const SCGC5_TSI: FieldDef = FieldDef::bit("TSI", 5);
/// PORTA clock gate.
pub const SCGC5_PORTA: FieldDef = FieldDef::bit("PORTA", 9);
/// PORTB clock gate.
pub const SCGC5_PORTB: FieldDef = FieldDef::bit("PORTB", 10);
/// PORTC clock gate.
pub const SCGC5_PORTC: FieldDef = FieldDef::bit("PORTC", 11);
/// PORTD clock gate.
pub const SCGC5_PORTD: FieldDef = FieldDef::bit("PORTD", 12);
/// PORTE clock gate.
pub const SCGC5_PORTE: FieldDef = FieldDef::bit("PORTE", 13);
/// PORTF clock gate.
pub const SCGC5_PORTF: FieldDef = FieldDef::bit("PORTF", 14);

// SCGC6
/// Flash memory controller clock gate.
pub const SCGC6_FTFL: FieldDef = FieldDef::bit("FTFL", 0);
/// DMAMUX0 clock gate.
pub const SCGC6_DMAMUX0: FieldDef = FieldDef::bit("DMAMUX0", 1);
/// DMAMUX1 clock gate.
pub const SCGC6_DMAMUX1: FieldDef = FieldDef::bit("DMAMUX1", 2);
/// FlexCAN0 clock gate.
pub const SCGC6_FLEXCAN0: FieldDef = FieldDef::bit("FLEXCAN0", 4);
/// DSPI0 clock gate.
pub const SCGC6_DSPI0: FieldDef = FieldDef::bit("DSPI0", 12);
/// DSPI1 clock gate.
pub const SCGC6_DSPI1: FieldDef = FieldDef::bit("DSPI1", 13);
/// SAI0 clock gate.
pub const SCGC6_SAI0: FieldDef = FieldDef::bit("SAI0", 15);
/// CRC clock gate.
pub const SCGC6_CRC: FieldDef = FieldDef::bit("CRC", 18);
/// USB HS clock gate.
pub const SCGC6_USBHS: FieldDef = FieldDef::bit("USBHS", 20);
/// USB DCD clock gate.
pub const SCGC6_USBDCD: FieldDef = FieldDef::bit("USBDCD", 21);
/// PDB clock gate.
pub const SCGC6_PDB: FieldDef = FieldDef::bit("PDB", 22);
/// PIT clock gate.
pub const SCGC6_PIT: FieldDef = FieldDef::bit("PIT", 23);
/// FTM0 clock gate.
pub const SCGC6_FTM0: FieldDef = FieldDef::bit("FTM0", 24);
/// FTM1 clock gate.
pub const SCGC6_FTM1: FieldDef = FieldDef::bit("FTM1", 25);
/// ADC0 clock gate.
pub const SCGC6_ADC0: FieldDef = FieldDef::bit("ADC0", 27);
/// RTC access clock gate.
pub const SCGC6_RTC: FieldDef = FieldDef::bit("RTC", 29);

// SCGC7
/// FlexBus clock gate.
pub const SCGC7_FLEXBUS: FieldDef = FieldDef::bit("FLEXBUS", 0);
/// DMA controller clock gate.
pub const SCGC7_DMA: FieldDef = FieldDef::bit("DMA", 1);
/// MPU clock gate.
pub const SCGC7_MPU: FieldDef = FieldDef::bit("MPU", 2);

// CLKDIV1
/// Core/system clock divider (divide by OUTDIV1 + 1).
pub const CLKDIV1_OUTDIV1: FieldDef = FieldDef::new("OUTDIV1", 28, 4);
/// Peripheral clock divider.
pub const CLKDIV1_OUTDIV2: FieldDef = FieldDef::new("OUTDIV2", 24, 4);
/// FlexBus clock divider.
pub const CLKDIV1_OUTDIV3: FieldDef = FieldDef::new("OUTDIV3", 20, 4);
/// Flash clock divider.
pub const CLKDIV1_OUTDIV4: FieldDef = FieldDef::new("OUTDIV4", 16, 4);

// SDID — device identification (read-only)
/// Revision id.
pub const SDID_REVID: FieldDef = FieldDef::new("REVID", 12, 4);
/// Die id.
pub const SDID_DIEID: FieldDef = FieldDef::new("DIEID", 7, 5);
/// Family id.
pub const SDID_FAMID: FieldDef = FieldDef::new("FAMID", 4, 3);
/// Pincount id.
pub const SDID_PINID: FieldDef = FieldDef::new("PINID", 0, 4);

/// System options register 1.
pub const SOPT1: RegisterDef = RegisterDef::rw32(
    "SOPT1",
    0x0000,
    0,
    &[SOPT1_USBREGEN, SOPT1_USBSSTBY, SOPT1_USBVSTBY, SOPT1_OSC32KSEL, SOPT1_RAMSIZE],
);
/// SOPT1 configuration register.
pub const SOPT1CFG: RegisterDef = RegisterDef::rw32(
    "SOPT1CFG",
    0x0004,
    0,
    &[FieldDef::bit("USSWE", 26), FieldDef::bit("UVSWE", 25), FieldDef::bit("URWE", 24)],
);
/// System options register 2.
pub const SOPT2: RegisterDef = RegisterDef::rw32(
    "SOPT2",
    0x1004,
    0,
    &[
        SOPT2_USBFSRC, SOPT2_USBF_CLKSEL, SOPT2_PLLFLLSEL, SOPT2_TRACECLKSEL, SOPT2_PTD7PAD,
        SOPT2_FBSL, SOPT2_CLKOUTSEL, SOPT2_RTCCLKOUTSEL,
    ],
);
/// System options register 4 (FTM triggers and faults).
pub const SOPT4: RegisterDef = RegisterDef::rw32(
    "SOPT4",
    0x100C,
    0,
    &[
        FieldDef::bit("FTM0TRG1SRC", 29),
        FieldDef::bit("FTM0TRG0SRC", 28),
        FieldDef::bit("FTM2CLKSEL", 26),
        FieldDef::bit("FTM1CLKSEL", 25),
        FieldDef::bit("FTM0CLKSEL", 24),
        FieldDef::new("FTM2CH0SRC", 20, 2),
        FieldDef::new("FTM1CH0SRC", 18, 2),
        FieldDef::bit("FTM2FLT0", 8),
        FieldDef::bit("FTM1FLT0", 4),
        FieldDef::bit("FTM0FLT2", 2),
        FieldDef::bit("FTM0FLT1", 1),
        FieldDef::bit("FTM0FLT0", 0),
    ],
);
/// System options register 5 (UART modulation/source selects).
pub const SOPT5: RegisterDef = RegisterDef::rw32(
    "SOPT5",
    0x1010,
    0,
    &[
        FieldDef::new("UART1RXSRC", 6, 2),
        FieldDef::new("UART1TXSRC", 4, 2),
        FieldDef::new("UART0RXSRC", 2, 2),
        FieldDef::new("UART0TXSRC", 0, 2),
    ],
);
/// System options register 7 (ADC trigger selects).
pub const SOPT7: RegisterDef = RegisterDef::rw32(
    "SOPT7",
    0x1018,
    0,
    &[
        FieldDef::bit("ADC0ALTTRGEN", 7),
        FieldDef::bit("ADC0PRETRGSEL", 4),
        FieldDef::new("ADC0TRGSEL", 0, 4),
    ],
);
/// System device identification register.
pub const SDID: RegisterDef =
    RegisterDef::ro32("SDID", 0x1024, 0, &[SDID_REVID, SDID_DIEID, SDID_FAMID, SDID_PINID]);
/// Clock gating control register 1.
pub const SCGC1: RegisterDef = RegisterDef::rmw32(
    "SCGC1",
    0x1028,
    0,
    &[FieldDef::bit("UART5", 11), FieldDef::bit("UART4", 10), FieldDef::bit("OSC1", 5)],
);
/// Clock gating control register 2.
pub const SCGC2: RegisterDef = RegisterDef::rmw32(
    "SCGC2",
    0x102C,
    0,
    &[FieldDef::bit("DAC1", 13), FieldDef::bit("DAC0", 12), FieldDef::bit("ENET", 0)],
);
/// Clock gating control register 3.
pub const SCGC3: RegisterDef = RegisterDef::rmw32(
    "SCGC3",
    0x1030,
    0,
    &[
        SCGC3_RNGA, SCGC3_FLEXCAN1, SCGC3_NFC, SCGC3_DSPI2, SCGC3_DDR, SCGC3_SAI1,
        SCGC3_SDHC, SCGC3_FTM2, SCGC3_FTM3, SCGC3_ADC1, SCGC3_ADC3,
    ],
);
/// Clock gating control register 4.
pub const SCGC4: RegisterDef = RegisterDef::rmw32(
    "SCGC4",
    0x1034,
    0,
    &[
        SCGC4_EWM, SCGC4_CMT, SCGC4_IIC0, SCGC4_IIC1, SCGC4_UART0, SCGC4_UART1, SCGC4_UART2,
        SCGC4_UART3, SCGC4_USBFS, SCGC4_CMP, SCGC4_VREF, SCGC4_LLWU,
    ],
);
/// Clock gating control register 5.
pub const SCGC5: RegisterDef = RegisterDef::rmw32(
    "SCGC5",
    0x1038,
    0,
    &[
        SCGC5_LPTIMER, SCGC5_TSI, SCGC5_PORTA, SCGC5_PORTB, SCGC5_PORTC, SCGC5_PORTD,
        SCGC5_PORTE, SCGC5_PORTF,
    ],
);
/// Clock gating control register 6. The flash controller gate comes out of
/// reset enabled.
pub const SCGC6: RegisterDef = RegisterDef::rmw32(
    "SCGC6",
    0x103C,
    0x4000_0001,
    &[
        SCGC6_FTFL, SCGC6_DMAMUX0, SCGC6_DMAMUX1, SCGC6_FLEXCAN0, SCGC6_DSPI0, SCGC6_DSPI1,
        SCGC6_SAI0, SCGC6_CRC, SCGC6_USBHS, SCGC6_USBDCD, SCGC6_PDB, SCGC6_PIT, SCGC6_FTM0,
        SCGC6_FTM1, SCGC6_ADC0, SCGC6_RTC,
    ],
);
/// Clock gating control register 7.
pub const SCGC7: RegisterDef = RegisterDef::rmw32(
    "SCGC7",
    0x1040,
    0x0000_0007,
    &[SCGC7_FLEXBUS, SCGC7_DMA, SCGC7_MPU],
);
/// System clock divider register 1.
pub const CLKDIV1: RegisterDef = RegisterDef::rw32(
    "CLKDIV1",
    0x1044,
    0x0001_0000,
    &[CLKDIV1_OUTDIV1, CLKDIV1_OUTDIV2, CLKDIV1_OUTDIV3, CLKDIV1_OUTDIV4],
);
/// System clock divider register 2 (USB).
pub const CLKDIV2: RegisterDef = RegisterDef::rw32(
    "CLKDIV2",
    0x1048,
    0,
    &[
        FieldDef::new("USBHSDIV", 9, 3),
        FieldDef::bit("USBHSFRAC", 8),
        FieldDef::new("USBFSDIV", 1, 3),
        FieldDef::bit("USBFSFRAC", 0),
    ],
);
/// Flash configuration register 1.
pub const FCFG1: RegisterDef = RegisterDef::rw32(
    "FCFG1",
    0x104C,
    0,
    &[
        FieldDef::new("NVMSIZE", 28, 4),
        FieldDef::new("PFSIZE", 24, 4),
        FieldDef::new("EESIZE", 16, 4),
        FieldDef::new("DEPART", 8, 4),
        FieldDef::bit("FLASHDOZE", 1),
        FieldDef::bit("FLASHDIS", 0),
    ],
);
/// Flash configuration register 2.
pub const FCFG2: RegisterDef = RegisterDef::ro32(
    "FCFG2",
    0x1050,
    0,
    &[
        FieldDef::bit("SWAPPFLSH", 31),
        FieldDef::new("MAXADDR0", 24, 7),
        FieldDef::bit("PFLSH", 23),
        FieldDef::new("MAXADDR1", 16, 7),
    ],
);
/// Unique identification register, bits 127:96.
pub const UIDH: RegisterDef = RegisterDef::ro32("UIDH", 0x1054, 0, &[FieldDef::new("UID", 0, 32)]);
/// Unique identification register, bits 95:64.
pub const UIDMH: RegisterDef =
    RegisterDef::ro32("UIDMH", 0x1058, 0, &[FieldDef::new("UID", 0, 32)]);
/// Unique identification register, bits 63:32.
pub const UIDML: RegisterDef =
    RegisterDef::ro32("UIDML", 0x105C, 0, &[FieldDef::new("UID", 0, 32)]);
/// Unique identification register, bits 31:0.
pub const UIDL: RegisterDef = RegisterDef::ro32("UIDL", 0x1060, 0, &[FieldDef::new("UID", 0, 32)]);
/// System clock divider register 4 (trace, NFC).
pub const CLKDIV4: RegisterDef = RegisterDef::rw32(
    "CLKDIV4",
    0x1068,
    0x0000_0002,
    &[
        FieldDef::new("NFCDIV", 27, 3),
        FieldDef::new("NFCFRAC", 24, 3),
        FieldDef::new("TRACEDIV", 1, 3),
        FieldDef::bit("TRACEFRAC", 0),
    ],
);
/// Misc control register (DDR, trace).
pub const MCR: RegisterDef = RegisterDef::rw32(
    "MCR",
    0x106C,
    0,
    &[FieldDef::bit("PDBLOOP", 29), FieldDef::bit("DDRS", 1), FieldDef::bit("DDRSREN", 0)],
);

/// SIM memory map. Two AIPS slots.
pub static MAP: MemoryMap = MemoryMap {
    peripheral: "SIM",
    align: AIPS_SLOT_SIZE,
    window: 2 * AIPS_SLOT_SIZE,
    registers: &[
        SOPT1, SOPT1CFG, SOPT2, SOPT4, SOPT5, SOPT7, SDID, SCGC1, SCGC2, SCGC3, SCGC4,
        SCGC5, SCGC6, SCGC7, CLKDIV1, CLKDIV2, FCFG1, FCFG2, UIDH, UIDMH, UIDML, UIDL,
        CLKDIV4, MCR,
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reg::Access;

    #[test]
    fn clock_gates_require_rmw() {
        for scgc in [&SCGC1, &SCGC2, &SCGC3, &SCGC4, &SCGC5, &SCGC6, &SCGC7] {
            assert_eq!(scgc.access, Access::ReadModifyWrite, "{}", scgc.name);
        }
    }

    #[test]
    fn lab_clock_gate_positions() {
        // Masks the tower firmware relies on.
        assert_eq!(SCGC4_UART2.mask(), 0x0000_1000);
        assert_eq!(SCGC5_PORTA.mask(), 0x0000_0200);
        assert_eq!(SCGC6_PIT.mask(), 0x0080_0000);
        assert_eq!(SCGC6_RTC.mask(), 0x2000_0000);
        assert_eq!(SCGC3_DSPI2.mask(), 0x0000_1000);
        assert_eq!(SCGC6_FTM0.mask(), 0x0100_0000);
    }

    #[test]
    fn second_slot_offsets() {
        assert_eq!(SOPT2.offset, 0x1004);
        assert_eq!(SCGC6.offset, 0x103C);
        assert!(MCR.end_offset() <= MAP.window);
    }
}
