//! UART register file.
//!
//! The K70 UART exposes an 8-bit register file, so this table is the one
//! that exercises sub-word access widths. Baud rate is split across
//! BDH[SBR:4..0] (high) and BDL (low); the fine-adjust divisor lives in
//! C4[BRFA].

use crate::memmap::{aips0_slot, aips1_slot, AIPS_SLOT_SIZE};
use crate::reg::{FieldDef, MemoryMap, RegisterDef};

/// UART0 base address.
pub const UART0: u32 = aips0_slot(0x6A);
/// UART1 base address.
pub const UART1: u32 = aips0_slot(0x6B);
/// UART2 base address (tower serial bridge).
pub const UART2: u32 = aips0_slot(0x6C);
/// UART3 base address.
pub const UART3: u32 = aips0_slot(0x6D);
/// UART4 base address.
pub const UART4: u32 = aips1_slot(0x6A);
/// UART5 base address.
pub const UART5: u32 = aips1_slot(0x6B);

/// Instance base addresses in instance order.
pub const BASES: [u32; 6] = [UART0, UART1, UART2, UART3, UART4, UART5];

// BDH — baud rate high
/// LIN break detect interrupt enable.
pub const BDH_LBKDIE: FieldDef = FieldDef::bit("LBKDIE", 7);
/// RxD input active edge interrupt enable.
pub const BDH_RXEDGIE: FieldDef = FieldDef::bit("RXEDGIE", 6);
/// Baud rate modulo divisor, upper 5 bits.
pub const BDH_SBR: FieldDef = FieldDef::new("SBR", 0, 5);

// BDL — baud rate low
/// Baud rate modulo divisor, lower 8 bits.
pub const BDL_SBR: FieldDef = FieldDef::new("SBR", 0, 8);

// C1 — control 1
/// Loop mode select.
pub const C1_LOOPS: FieldDef = FieldDef::bit("LOOPS", 7);
/// UART stops in wait mode.
pub const C1_UARTSWAI: FieldDef = FieldDef::bit("UARTSWAI", 6);
/// Receiver source select (loop mode).
pub const C1_RSRC: FieldDef = FieldDef::bit("RSRC", 5);
/// 9-bit mode select.
pub const C1_M: FieldDef = FieldDef::bit("M", 4);
/// Receiver wakeup method.
pub const C1_WAKE: FieldDef = FieldDef::bit("WAKE", 3);
/// Idle line type.
pub const C1_ILT: FieldDef = FieldDef::bit("ILT", 2);
/// Parity enable.
pub const C1_PE: FieldDef = FieldDef::bit("PE", 1);
/// Parity type.
pub const C1_PT: FieldDef = FieldDef::bit("PT", 0);

// C2 — control 2
/// Transmitter interrupt enable (TDRE).
pub const C2_TIE: FieldDef = FieldDef::bit("TIE", 7);
/// Transmission complete interrupt enable.
pub const C2_TCIE: FieldDef = FieldDef::bit("TCIE", 6);
/// Receiver full interrupt enable (RDRF).
pub const C2_RIE: FieldDef = FieldDef::bit("RIE", 5);
/// Idle line interrupt enable.
pub const C2_ILIE: FieldDef = FieldDef::bit("ILIE", 4);
/// Transmitter enable.
pub const C2_TE: FieldDef = FieldDef::bit("TE", 3);
/// Receiver enable.
pub const C2_RE: FieldDef = FieldDef::bit("RE", 2);
/// Receiver wakeup control.
pub const C2_RWU: FieldDef = FieldDef::bit("RWU", 1);
/// Send break.
pub const C2_SBK: FieldDef = FieldDef::bit("SBK", 0);

// S1 — status 1 (read-only)
/// Transmit data register empty.
pub const S1_TDRE: FieldDef = FieldDef::bit("TDRE", 7);
/// Transmission complete.
pub const S1_TC: FieldDef = FieldDef::bit("TC", 6);
/// Receive data register full.
pub const S1_RDRF: FieldDef = FieldDef::bit("RDRF", 5);
/// Idle line flag.
pub const S1_IDLE: FieldDef = FieldDef::bit("IDLE", 4);
/// Receiver overrun.
pub const S1_OR: FieldDef = FieldDef::bit("OR", 3);
/// Noise flag.
pub const S1_NF: FieldDef = FieldDef::bit("NF", 2);
/// Framing error.
pub const S1_FE: FieldDef = FieldDef::bit("FE", 1);
/// Parity error.
pub const S1_PF: FieldDef = FieldDef::bit("PF", 0);

// S2 — status 2
/// LIN break detect interrupt flag.
pub const S2_LBKDIF: FieldDef = FieldDef::bit("LBKDIF", 7);
/// RxD active edge interrupt flag.
pub const S2_RXEDGIF: FieldDef = FieldDef::bit("RXEDGIF", 6);
/// MSB first.
pub const S2_MSBF: FieldDef = FieldDef::bit("MSBF", 5);
/// Receive data inversion.
pub const S2_RXINV: FieldDef = FieldDef::bit("RXINV", 4);
/// Receive wakeup idle detect.
pub const S2_RWUID: FieldDef = FieldDef::bit("RWUID", 3);
/// 13-bit break.
pub const S2_BRK13: FieldDef = FieldDef::bit("BRK13", 2);
/// LIN break detection enable.
pub const S2_LBKDE: FieldDef = FieldDef::bit("LBKDE", 1);
/// Receiver active flag.
pub const S2_RAF: FieldDef = FieldDef::bit("RAF", 0);

// C3 — control 3
/// Ninth receive bit.
pub const C3_R8: FieldDef = FieldDef::bit("R8", 7);
/// Ninth transmit bit.
pub const C3_T8: FieldDef = FieldDef::bit("T8", 6);
/// TxD pin direction (single-wire mode).
pub const C3_TXDIR: FieldDef = FieldDef::bit("TXDIR", 5);
/// Transmit data inversion.
pub const C3_TXINV: FieldDef = FieldDef::bit("TXINV", 4);
/// Overrun error interrupt enable.
pub const C3_ORIE: FieldDef = FieldDef::bit("ORIE", 3);
/// Noise error interrupt enable.
pub const C3_NEIE: FieldDef = FieldDef::bit("NEIE", 2);
/// Framing error interrupt enable.
pub const C3_FEIE: FieldDef = FieldDef::bit("FEIE", 1);
/// Parity error interrupt enable.
pub const C3_PEIE: FieldDef = FieldDef::bit("PEIE", 0);

// D — data
/// Read/transmit data buffer.
pub const D_RT: FieldDef = FieldDef::new("RT", 0, 8);

// C4 — control 4
/// Match address mode enable 1.
pub const C4_MAEN1: FieldDef = FieldDef::bit("MAEN1", 7);
/// Match address mode enable 2.
pub const C4_MAEN2: FieldDef = FieldDef::bit("MAEN2", 6);
/// 10-bit mode select.
pub const C4_M10: FieldDef = FieldDef::bit("M10", 5);
/// Baud rate fine adjust (1/32 increments).
pub const C4_BRFA: FieldDef = FieldDef::new("BRFA", 0, 5);

// C5 — control 5
/// Transmitter DMA select.
pub const C5_TDMAS: FieldDef = FieldDef::bit("TDMAS", 7);
/// Receiver DMA select.
pub const C5_RDMAS: FieldDef = FieldDef::bit("RDMAS", 5);

// ED — extended data (read-only)
/// Last byte was received with noise.
pub const ED_NOISY: FieldDef = FieldDef::bit("NOISY", 7);
/// Last byte was received with a parity error.
pub const ED_PARITYE: FieldDef = FieldDef::bit("PARITYE", 6);

// MODEM
/// Receiver RTS enable.
pub const MODEM_RXRTSE: FieldDef = FieldDef::bit("RXRTSE", 3);
/// Transmitter RTS polarity.
pub const MODEM_TXRTSPOL: FieldDef = FieldDef::bit("TXRTSPOL", 2);
/// Transmitter RTS enable.
pub const MODEM_TXRTSE: FieldDef = FieldDef::bit("TXRTSE", 1);
/// Transmitter CTS enable.
pub const MODEM_TXCTSE: FieldDef = FieldDef::bit("TXCTSE", 0);

// IR — infrared
/// Infrared enable.
pub const IR_IREN: FieldDef = FieldDef::bit("IREN", 2);
/// Transmitter narrow pulse.
pub const IR_TNP: FieldDef = FieldDef::new("TNP", 0, 2);

// PFIFO
/// Transmit FIFO enable.
pub const PFIFO_TXFE: FieldDef = FieldDef::bit("TXFE", 7);
/// Transmit FIFO depth (read-only encoding).
pub const PFIFO_TXFIFOSIZE: FieldDef = FieldDef::new("TXFIFOSIZE", 4, 3);
/// Receive FIFO enable.
pub const PFIFO_RXFE: FieldDef = FieldDef::bit("RXFE", 3);
/// Receive FIFO depth (read-only encoding).
pub const PFIFO_RXFIFOSIZE: FieldDef = FieldDef::new("RXFIFOSIZE", 0, 3);

// CFIFO
/// Transmit FIFO flush.
pub const CFIFO_TXFLUSH: FieldDef = FieldDef::bit("TXFLUSH", 7);
/// Receive FIFO flush.
pub const CFIFO_RXFLUSH: FieldDef = FieldDef::bit("RXFLUSH", 6);
/// Receive FIFO overflow interrupt enable.
pub const CFIFO_RXOFE: FieldDef = FieldDef::bit("RXOFE", 2);
/// Transmit FIFO overflow interrupt enable.
pub const CFIFO_TXOFE: FieldDef = FieldDef::bit("TXOFE", 1);
/// Receive FIFO underflow interrupt enable.
pub const CFIFO_RXUFE: FieldDef = FieldDef::bit("RXUFE", 0);

// SFIFO
/// Transmit buffer empty.
pub const SFIFO_TXEMPT: FieldDef = FieldDef::bit("TXEMPT", 7);
/// Receive buffer empty.
pub const SFIFO_RXEMPT: FieldDef = FieldDef::bit("RXEMPT", 6);
/// Receive FIFO overflow flag.
pub const SFIFO_RXOF: FieldDef = FieldDef::bit("RXOF", 2);
/// Transmit FIFO overflow flag.
pub const SFIFO_TXOF: FieldDef = FieldDef::bit("TXOF", 1);
/// Receive FIFO underflow flag.
pub const SFIFO_RXUF: FieldDef = FieldDef::bit("RXUF", 0);

/// Baud rate register high.
pub const BDH: RegisterDef =
    RegisterDef::rw8("BDH", 0x00, 0x00, &[BDH_LBKDIE, BDH_RXEDGIE, BDH_SBR]);
/// Baud rate register low.
pub const BDL: RegisterDef = RegisterDef::rw8("BDL", 0x01, 0x04, &[BDL_SBR]);
/// Control register 1.
pub const C1: RegisterDef = RegisterDef::rw8(
    "C1",
    0x02,
    0x00,
    &[C1_LOOPS, C1_UARTSWAI, C1_RSRC, C1_M, C1_WAKE, C1_ILT, C1_PE, C1_PT],
);
/// Control register 2.
pub const C2: RegisterDef = RegisterDef::rw8(
    "C2",
    0x03,
    0x00,
    &[C2_TIE, C2_TCIE, C2_RIE, C2_ILIE, C2_TE, C2_RE, C2_RWU, C2_SBK],
);
/// Status register 1. Read-only; flags clear on defined read sequences.
pub const S1: RegisterDef = RegisterDef::ro8(
    "S1",
    0x04,
    0xC0,
    &[S1_TDRE, S1_TC, S1_RDRF, S1_IDLE, S1_OR, S1_NF, S1_FE, S1_PF],
);
/// Status register 2.
pub const S2: RegisterDef = RegisterDef::rw8(
    "S2",
    0x05,
    0x00,
    &[S2_LBKDIF, S2_RXEDGIF, S2_MSBF, S2_RXINV, S2_RWUID, S2_BRK13, S2_LBKDE, S2_RAF],
);
/// Control register 3.
pub const C3: RegisterDef = RegisterDef::rw8(
    "C3",
    0x06,
    0x00,
    &[C3_R8, C3_T8, C3_TXDIR, C3_TXINV, C3_ORIE, C3_NEIE, C3_FEIE, C3_PEIE],
);
/// Data register. Reads pop the receive buffer, writes push transmit.
pub const D: RegisterDef = RegisterDef::rw8("D", 0x07, 0x00, &[D_RT]);
/// Match address register 1.
pub const MA1: RegisterDef = RegisterDef::rw8("MA1", 0x08, 0x00, &[FieldDef::new("MA", 0, 8)]);
/// Match address register 2.
pub const MA2: RegisterDef = RegisterDef::rw8("MA2", 0x09, 0x00, &[FieldDef::new("MA", 0, 8)]);
/// Control register 4.
pub const C4: RegisterDef =
    RegisterDef::rw8("C4", 0x0A, 0x00, &[C4_MAEN1, C4_MAEN2, C4_M10, C4_BRFA]);
/// Control register 5.
pub const C5: RegisterDef = RegisterDef::rw8("C5", 0x0B, 0x00, &[C5_TDMAS, C5_RDMAS]);
/// Extended data register.
pub const ED: RegisterDef = RegisterDef::ro8("ED", 0x0C, 0x00, &[ED_NOISY, ED_PARITYE]);
/// Modem register.
pub const MODEM: RegisterDef = RegisterDef::rw8(
    "MODEM",
    0x0D,
    0x00,
    &[MODEM_RXRTSE, MODEM_TXRTSPOL, MODEM_TXRTSE, MODEM_TXCTSE],
);
/// Infrared register.
pub const IR: RegisterDef = RegisterDef::rw8("IR", 0x0E, 0x00, &[IR_IREN, IR_TNP]);
/// FIFO parameters.
pub const PFIFO: RegisterDef = RegisterDef::rw8(
    "PFIFO",
    0x10,
    0x00,
    &[PFIFO_TXFE, PFIFO_TXFIFOSIZE, PFIFO_RXFE, PFIFO_RXFIFOSIZE],
);
/// FIFO control.
pub const CFIFO: RegisterDef = RegisterDef::rw8(
    "CFIFO",
    0x11,
    0x00,
    &[CFIFO_TXFLUSH, CFIFO_RXFLUSH, CFIFO_RXOFE, CFIFO_TXOFE, CFIFO_RXUFE],
);
/// FIFO status.
pub const SFIFO: RegisterDef = RegisterDef::rw8(
    "SFIFO",
    0x12,
    0xC0,
    &[SFIFO_TXEMPT, SFIFO_RXEMPT, SFIFO_RXOF, SFIFO_TXOF, SFIFO_RXUF],
);
/// Transmit FIFO watermark.
pub const TWFIFO: RegisterDef =
    RegisterDef::rw8("TWFIFO", 0x13, 0x00, &[FieldDef::new("TXWATER", 0, 8)]);
/// Transmit FIFO fill count.
pub const TCFIFO: RegisterDef =
    RegisterDef::ro8("TCFIFO", 0x14, 0x00, &[FieldDef::new("TXCOUNT", 0, 8)]);
/// Receive FIFO watermark.
pub const RWFIFO: RegisterDef =
    RegisterDef::rw8("RWFIFO", 0x15, 0x01, &[FieldDef::new("RXWATER", 0, 8)]);
/// Receive FIFO fill count.
pub const RCFIFO: RegisterDef =
    RegisterDef::ro8("RCFIFO", 0x16, 0x00, &[FieldDef::new("RXCOUNT", 0, 8)]);

/// UART memory map.
pub static MAP: MemoryMap = MemoryMap {
    peripheral: "UART",
    align: AIPS_SLOT_SIZE,
    window: AIPS_SLOT_SIZE,
    registers: &[
        BDH, BDL, C1, C2, S1, S2, C3, D, MA1, MA2, C4, C5, ED, MODEM, IR, PFIFO, CFIFO,
        SFIFO, TWFIFO, TCFIFO, RWFIFO, RCFIFO,
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn baud_divisor_split() {
        // 13-bit SBR: 5 high bits in BDH, 8 low bits in BDL.
        assert_eq!(BDH_SBR.mask(), 0x1F);
        assert_eq!(BDL_SBR.mask(), 0xFF);
        assert_eq!(C4_BRFA.mask(), 0x1F);
    }

    #[test]
    fn instance_bases() {
        assert_eq!(UART2, 0x4006_C000);
        assert_eq!(UART4, 0x400E_A000);
    }
}
