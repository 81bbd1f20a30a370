//! Interrupt numbering for the MK70F12.
//!
//! The vendor's vector table puts the 16 Cortex-M4 system exceptions first;
//! peripheral IRQ `n` therefore dispatches through vector `n + 16`. The
//! numbering below must match the silicon exactly — a one-off here breaks
//! hardware dispatch — so reserved slots are kept as explicit variants to
//! hold the range contiguous.

/// Number of Cortex-M4 system exception vectors preceding IRQ 0.
pub const SYSTEM_VECTOR_COUNT: usize = 16;

/// Number of peripheral interrupt request sources.
pub const IRQ_COUNT: usize = 106;

/// Total vector table size (system exceptions + IRQs).
pub const VECTOR_COUNT: usize = SYSTEM_VECTOR_COUNT + IRQ_COUNT;

/// Cortex-M4 system exception vector numbers.
pub mod exception {
    /// Initial stack pointer slot.
    pub const INITIAL_SP: usize = 0;
    /// Reset handler.
    pub const RESET: usize = 1;
    /// Non-maskable interrupt.
    pub const NMI: usize = 2;
    /// Hard fault.
    pub const HARD_FAULT: usize = 3;
    /// Memory management fault.
    pub const MEM_MANAGE: usize = 4;
    /// Bus fault.
    pub const BUS_FAULT: usize = 5;
    /// Usage fault.
    pub const USAGE_FAULT: usize = 6;
    /// Supervisor call.
    pub const SVCALL: usize = 11;
    /// Debug monitor.
    pub const DEBUG_MONITOR: usize = 12;
    /// Pendable service request.
    pub const PENDSV: usize = 14;
    /// System tick timer.
    pub const SYSTICK: usize = 15;
}

/// Peripheral interrupt sources, numbered exactly as the reference manual's
/// vector assignment table (IRQ number, not vector number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
#[allow(missing_docs)] // names mirror the vendor table one-for-one
pub enum Interrupt {
    Dma0 = 0,
    Dma1 = 1,
    Dma2 = 2,
    Dma3 = 3,
    Dma4 = 4,
    Dma5 = 5,
    Dma6 = 6,
    Dma7 = 7,
    Dma8 = 8,
    Dma9 = 9,
    Dma10 = 10,
    Dma11 = 11,
    Dma12 = 12,
    Dma13 = 13,
    Dma14 = 14,
    Dma15 = 15,
    DmaError = 16,
    Mcm = 17,
    FlashCommand = 18,
    FlashReadCollision = 19,
    LowVoltage = 20,
    LowLeakageWakeup = 21,
    Watchdog = 22,
    Rng = 23,
    I2c0 = 24,
    I2c1 = 25,
    Spi0 = 26,
    Spi1 = 27,
    Spi2 = 28,
    Can0OredMessageBuffer = 29,
    Can0BusOff = 30,
    Can0Error = 31,
    Can0TxWarning = 32,
    Can0RxWarning = 33,
    Can0WakeUp = 34,
    Sai0Tx = 35,
    Sai0Rx = 36,
    Can1OredMessageBuffer = 37,
    Can1BusOff = 38,
    Can1Error = 39,
    Can1TxWarning = 40,
    Can1RxWarning = 41,
    Can1WakeUp = 42,
    Reserved59 = 43,
    Uart0Lon = 44,
    Uart0RxTx = 45,
    Uart0Error = 46,
    Uart1RxTx = 47,
    Uart1Error = 48,
    Uart2RxTx = 49,
    Uart2Error = 50,
    Uart3RxTx = 51,
    Uart3Error = 52,
    Uart4RxTx = 53,
    Uart4Error = 54,
    Uart5RxTx = 55,
    Uart5Error = 56,
    Adc0 = 57,
    Adc1 = 58,
    Cmp0 = 59,
    Cmp1 = 60,
    Cmp2 = 61,
    Ftm0 = 62,
    Ftm1 = 63,
    Ftm2 = 64,
    Cmt = 65,
    RtcAlarm = 66,
    RtcSeconds = 67,
    Pit0 = 68,
    Pit1 = 69,
    Pit2 = 70,
    Pit3 = 71,
    Pdb0 = 72,
    Usb0 = 73,
    UsbDcd = 74,
    Enet1588Timer = 75,
    EnetTransmit = 76,
    EnetReceive = 77,
    EnetError = 78,
    Reserved95 = 79,
    Sdhc = 80,
    Dac0 = 81,
    Dac1 = 82,
    Tsi0 = 83,
    Mcg = 84,
    LowPowerTimer = 85,
    Reserved102 = 86,
    PortA = 87,
    PortB = 88,
    PortC = 89,
    PortD = 90,
    PortE = 91,
    PortF = 92,
    Ddr = 93,
    Software = 94,
    Nfc = 95,
    UsbHs = 96,
    Lcd = 97,
    Cmp3 = 98,
    Tamper = 99,
    Reserved116 = 100,
    Ftm3 = 101,
    Adc2 = 102,
    Adc3 = 103,
    Sai1Tx = 104,
    Sai1Rx = 105,
}

/// Every IRQ source in numeric order; `ALL[n]` has IRQ number `n`.
pub const ALL: [Interrupt; IRQ_COUNT] = [
    Interrupt::Dma0,
    Interrupt::Dma1,
    Interrupt::Dma2,
    Interrupt::Dma3,
    Interrupt::Dma4,
    Interrupt::Dma5,
    Interrupt::Dma6,
    Interrupt::Dma7,
    Interrupt::Dma8,
    Interrupt::Dma9,
    Interrupt::Dma10,
    Interrupt::Dma11,
    Interrupt::Dma12,
    Interrupt::Dma13,
    Interrupt::Dma14,
    Interrupt::Dma15,
    Interrupt::DmaError,
    Interrupt::Mcm,
    Interrupt::FlashCommand,
    Interrupt::FlashReadCollision,
    Interrupt::LowVoltage,
    Interrupt::LowLeakageWakeup,
    Interrupt::Watchdog,
    Interrupt::Rng,
    Interrupt::I2c0,
    Interrupt::I2c1,
    Interrupt::Spi0,
    Interrupt::Spi1,
    Interrupt::Spi2,
    Interrupt::Can0OredMessageBuffer,
    Interrupt::Can0BusOff,
    Interrupt::Can0Error,
    Interrupt::Can0TxWarning,
    Interrupt::Can0RxWarning,
    Interrupt::Can0WakeUp,
    Interrupt::Sai0Tx,
    Interrupt::Sai0Rx,
    Interrupt::Can1OredMessageBuffer,
    Interrupt::Can1BusOff,
    Interrupt::Can1Error,
    Interrupt::Can1TxWarning,
    Interrupt::Can1RxWarning,
    Interrupt::Can1WakeUp,
    Interrupt::Reserved59,
    Interrupt::Uart0Lon,
    Interrupt::Uart0RxTx,
    Interrupt::Uart0Error,
    Interrupt::Uart1RxTx,
    Interrupt::Uart1Error,
    Interrupt::Uart2RxTx,
    Interrupt::Uart2Error,
    Interrupt::Uart3RxTx,
    Interrupt::Uart3Error,
    Interrupt::Uart4RxTx,
    Interrupt::Uart4Error,
    Interrupt::Uart5RxTx,
    Interrupt::Uart5Error,
    Interrupt::Adc0,
    Interrupt::Adc1,
    Interrupt::Cmp0,
    Interrupt::Cmp1,
    Interrupt::Cmp2,
    Interrupt::Ftm0,
    Interrupt::Ftm1,
    Interrupt::Ftm2,
    Interrupt::Cmt,
    Interrupt::RtcAlarm,
    Interrupt::RtcSeconds,
    Interrupt::Pit0,
    Interrupt::Pit1,
    Interrupt::Pit2,
    Interrupt::Pit3,
    Interrupt::Pdb0,
    Interrupt::Usb0,
    Interrupt::UsbDcd,
    Interrupt::Enet1588Timer,
    Interrupt::EnetTransmit,
    Interrupt::EnetReceive,
    Interrupt::EnetError,
    Interrupt::Reserved95,
    Interrupt::Sdhc,
    Interrupt::Dac0,
    Interrupt::Dac1,
    Interrupt::Tsi0,
    Interrupt::Mcg,
    Interrupt::LowPowerTimer,
    Interrupt::Reserved102,
    Interrupt::PortA,
    Interrupt::PortB,
    Interrupt::PortC,
    Interrupt::PortD,
    Interrupt::PortE,
    Interrupt::PortF,
    Interrupt::Ddr,
    Interrupt::Software,
    Interrupt::Nfc,
    Interrupt::UsbHs,
    Interrupt::Lcd,
    Interrupt::Cmp3,
    Interrupt::Tamper,
    Interrupt::Reserved116,
    Interrupt::Ftm3,
    Interrupt::Adc2,
    Interrupt::Adc3,
    Interrupt::Sai1Tx,
    Interrupt::Sai1Rx,
];

impl Interrupt {
    /// IRQ number (position in the NVIC, 0-based).
    #[must_use]
    pub const fn irq(self) -> usize {
        self as usize
    }

    /// Vector table index this source dispatches through.
    #[must_use]
    pub const fn vector(self) -> usize {
        self.irq() + SYSTEM_VECTOR_COUNT
    }

    /// Source for an IRQ number, if one exists.
    #[must_use]
    pub fn from_irq(irq: usize) -> Option<Self> {
        ALL.get(irq).copied()
    }

    /// Source for a vector table index, if it is a peripheral vector.
    #[must_use]
    pub fn from_vector(vector: usize) -> Option<Self> {
        vector.checked_sub(SYSTEM_VECTOR_COUNT).and_then(Self::from_irq)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_table_is_in_numeric_order() {
        for (n, irq) in ALL.iter().enumerate() {
            assert_eq!(irq.irq(), n, "{irq:?} out of place");
        }
    }

    #[test]
    fn lab_board_sources_have_vendor_numbers() {
        // Anchors from the reference manual's vector assignment table.
        assert_eq!(Interrupt::Uart2RxTx.irq(), 49);
        assert_eq!(Interrupt::Ftm0.irq(), 62);
        assert_eq!(Interrupt::RtcSeconds.irq(), 67);
        assert_eq!(Interrupt::Pit0.irq(), 68);
        assert_eq!(Interrupt::FlashCommand.irq(), 18);
    }

    #[test]
    fn vector_offset() {
        assert_eq!(Interrupt::Dma0.vector(), 16);
        assert_eq!(Interrupt::Pit0.vector(), 84);
        assert_eq!(Interrupt::Sai1Rx.vector(), VECTOR_COUNT - 1);
    }

    #[test]
    fn vector_roundtrip() {
        assert_eq!(Interrupt::from_vector(65), Some(Interrupt::Uart2RxTx));
        assert_eq!(Interrupt::from_vector(15), None);
        assert_eq!(Interrupt::from_irq(IRQ_COUNT), None);
    }
}
