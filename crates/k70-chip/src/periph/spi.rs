//! DSPI register file.
//!
//! Queued SPI with four-deep TX/RX FIFOs. PUSHR carries command bits
//! (chip-select, CTAR select, continuous) alongside the data halfword;
//! POPR pops the receive FIFO on read, which is why it is read-only here
//! and excluded from read-modify-write use.

use crate::memmap::{aips0_slot, aips1_slot, AIPS_SLOT_SIZE};
use crate::reg::{FieldDef, MemoryMap, RegisterDef};

/// SPI0 base address.
pub const SPI0: u32 = aips0_slot(0x2C);
/// SPI1 base address.
pub const SPI1: u32 = aips0_slot(0x2D);
/// SPI2 base address (tower ADC/DAC card).
pub const SPI2: u32 = aips1_slot(0x2C);

/// Instance base addresses in instance order.
pub const BASES: [u32; 3] = [SPI0, SPI1, SPI2];

// MCR — module configuration
/// Master/slave mode select.
pub const MCR_MSTR: FieldDef = FieldDef::bit("MSTR", 31);
/// Continuous SCK enable.
pub const MCR_CONT_SCKE: FieldDef = FieldDef::bit("CONT_SCKE", 30);
/// DSPI configuration (0 = SPI).
pub const MCR_DCONF: FieldDef = FieldDef::new("DCONF", 28, 2);
/// Freeze in debug mode.
pub const MCR_FRZ: FieldDef = FieldDef::bit("FRZ", 27);
/// Modified transfer format enable.
pub const MCR_MTFE: FieldDef = FieldDef::bit("MTFE", 26);
/// Peripheral chip select strobe enable.
pub const MCR_PCSSE: FieldDef = FieldDef::bit("PCSSE", 25);
/// Receive FIFO overflow overwrite enable.
pub const MCR_ROOE: FieldDef = FieldDef::bit("ROOE", 24);
/// Chip select inactive states.
pub const MCR_PCSIS: FieldDef = FieldDef::new("PCSIS", 16, 6);
/// Doze enable.
pub const MCR_DOZE: FieldDef = FieldDef::bit("DOZE", 15);
/// Module disable.
pub const MCR_MDIS: FieldDef = FieldDef::bit("MDIS", 14);
/// Disable transmit FIFO.
pub const MCR_DIS_TXF: FieldDef = FieldDef::bit("DIS_TXF", 13);
/// Disable receive FIFO.
pub const MCR_DIS_RXF: FieldDef = FieldDef::bit("DIS_RXF", 12);
/// Clear transmit FIFO (self-clearing strobe).
pub const MCR_CLR_TXF: FieldDef = FieldDef::bit("CLR_TXF", 11);
/// Clear receive FIFO (self-clearing strobe).
pub const MCR_CLR_RXF: FieldDef = FieldDef::bit("CLR_RXF", 10);
/// Sample point (master mode).
pub const MCR_SMPL_PT: FieldDef = FieldDef::new("SMPL_PT", 8, 2);
/// Halt transfers.
pub const MCR_HALT: FieldDef = FieldDef::bit("HALT", 0);

/// Transfer counter.
pub const TCR_SPI_TCNT: FieldDef = FieldDef::new("SPI_TCNT", 16, 16);

// CTARn — clock and transfer attributes
/// Double baud rate.
pub const CTAR_DBR: FieldDef = FieldDef::bit("DBR", 31);
/// Frame size minus one.
pub const CTAR_FMSZ: FieldDef = FieldDef::new("FMSZ", 27, 4);
/// Clock polarity.
pub const CTAR_CPOL: FieldDef = FieldDef::bit("CPOL", 26);
/// Clock phase.
pub const CTAR_CPHA: FieldDef = FieldDef::bit("CPHA", 25);
/// LSB first.
pub const CTAR_LSBFE: FieldDef = FieldDef::bit("LSBFE", 24);
/// PCS-to-SCK delay prescaler.
pub const CTAR_PCSSCK: FieldDef = FieldDef::new("PCSSCK", 22, 2);
/// After-SCK delay prescaler.
pub const CTAR_PASC: FieldDef = FieldDef::new("PASC", 20, 2);
/// Delay-after-transfer prescaler.
pub const CTAR_PDT: FieldDef = FieldDef::new("PDT", 18, 2);
/// Baud rate prescaler.
pub const CTAR_PBR: FieldDef = FieldDef::new("PBR", 16, 2);
/// PCS-to-SCK delay scaler.
pub const CTAR_CSSCK: FieldDef = FieldDef::new("CSSCK", 12, 4);
/// After-SCK delay scaler.
pub const CTAR_ASC: FieldDef = FieldDef::new("ASC", 8, 4);
/// Delay-after-transfer scaler.
pub const CTAR_DT: FieldDef = FieldDef::new("DT", 4, 4);
/// Baud rate scaler.
pub const CTAR_BR: FieldDef = FieldDef::new("BR", 0, 4);

// SR — status
/// Transfer complete flag.
pub const SR_TCF: FieldDef = FieldDef::bit("TCF", 31);
/// TX and RX status (run state).
pub const SR_TXRXS: FieldDef = FieldDef::bit("TXRXS", 30);
/// End of queue flag.
pub const SR_EOQF: FieldDef = FieldDef::bit("EOQF", 28);
/// Transmit FIFO underflow flag.
pub const SR_TFUF: FieldDef = FieldDef::bit("TFUF", 27);
/// Transmit FIFO fill flag (room for another command).
pub const SR_TFFF: FieldDef = FieldDef::bit("TFFF", 25);
/// Receive FIFO overflow flag.
pub const SR_RFOF: FieldDef = FieldDef::bit("RFOF", 19);
/// Receive FIFO drain flag (data available).
pub const SR_RFDF: FieldDef = FieldDef::bit("RFDF", 17);
/// Transmit FIFO counter.
pub const SR_TXCTR: FieldDef = FieldDef::new("TXCTR", 12, 4);
/// Transmit next pointer.
pub const SR_TXNXTPTR: FieldDef = FieldDef::new("TXNXTPTR", 8, 4);
/// Receive FIFO counter.
pub const SR_RXCTR: FieldDef = FieldDef::new("RXCTR", 4, 4);
/// Pop next pointer.
pub const SR_POPNXTPTR: FieldDef = FieldDef::new("POPNXTPTR", 0, 4);

// PUSHR — TX FIFO push (master format)
/// Continuous chip select.
pub const PUSHR_CONT: FieldDef = FieldDef::bit("CONT", 31);
/// CTAR select.
pub const PUSHR_CTAS: FieldDef = FieldDef::new("CTAS", 28, 3);
/// End of queue.
pub const PUSHR_EOQ: FieldDef = FieldDef::bit("EOQ", 27);
/// Clear transfer counter.
pub const PUSHR_CTCNT: FieldDef = FieldDef::bit("CTCNT", 26);
/// Chip select assertion.
pub const PUSHR_PCS: FieldDef = FieldDef::new("PCS", 16, 6);
/// Transmit data.
pub const PUSHR_TXDATA: FieldDef = FieldDef::new("TXDATA", 0, 16);

/// Received data.
pub const POPR_RXDATA: FieldDef = FieldDef::new("RXDATA", 0, 32);

const CTAR_FIELDS: &[FieldDef] = &[
    CTAR_DBR, CTAR_FMSZ, CTAR_CPOL, CTAR_CPHA, CTAR_LSBFE, CTAR_PCSSCK, CTAR_PASC,
    CTAR_PDT, CTAR_PBR, CTAR_CSSCK, CTAR_ASC, CTAR_DT, CTAR_BR,
];
const TXFR_FIELDS: &[FieldDef] =
    &[FieldDef::new("TXCMD_TXDATA", 16, 16), FieldDef::new("TXDATA", 0, 16)];
const RXFR_FIELDS: &[FieldDef] = &[FieldDef::new("RXDATA", 0, 32)];

/// Module configuration register. Resets halted with the module clock off.
pub const MCR: RegisterDef = RegisterDef::rw32(
    "MCR",
    0x00,
    0x0000_4001,
    &[
        MCR_MSTR, MCR_CONT_SCKE, MCR_DCONF, MCR_FRZ, MCR_MTFE, MCR_PCSSE, MCR_ROOE,
        MCR_PCSIS, MCR_DOZE, MCR_MDIS, MCR_DIS_TXF, MCR_DIS_RXF, MCR_CLR_TXF, MCR_CLR_RXF,
        MCR_SMPL_PT, MCR_HALT,
    ],
);
/// Transfer count register.
pub const TCR: RegisterDef = RegisterDef::rw32("TCR", 0x08, 0, &[TCR_SPI_TCNT]);
/// Clock and transfer attributes register 0.
pub const CTAR0: RegisterDef = RegisterDef::rw32("CTAR0", 0x0C, 0x7800_0000, CTAR_FIELDS);
/// Clock and transfer attributes register 1.
pub const CTAR1: RegisterDef = RegisterDef::rw32("CTAR1", 0x10, 0x7800_0000, CTAR_FIELDS);
/// Status register. TFFF is set while the TX FIFO has room.
pub const SR: RegisterDef = RegisterDef::rw32(
    "SR",
    0x2C,
    0x0200_0000,
    &[
        SR_TCF, SR_TXRXS, SR_EOQF, SR_TFUF, SR_TFFF, SR_RFOF, SR_RFDF, SR_TXCTR,
        SR_TXNXTPTR, SR_RXCTR, SR_POPNXTPTR,
    ],
);
/// DMA/interrupt request select and enable register.
pub const RSER: RegisterDef = RegisterDef::rw32(
    "RSER",
    0x30,
    0,
    &[
        FieldDef::bit("TCF_RE", 31),
        FieldDef::bit("EOQF_RE", 28),
        FieldDef::bit("TFUF_RE", 27),
        FieldDef::bit("TFFF_RE", 25),
        FieldDef::bit("TFFF_DIRS", 24),
        FieldDef::bit("RFOF_RE", 19),
        FieldDef::bit("RFDF_RE", 17),
        FieldDef::bit("RFDF_DIRS", 16),
    ],
);
/// TX FIFO push register.
pub const PUSHR: RegisterDef = RegisterDef::rw32(
    "PUSHR",
    0x34,
    0,
    &[PUSHR_CONT, PUSHR_CTAS, PUSHR_EOQ, PUSHR_CTCNT, PUSHR_PCS, PUSHR_TXDATA],
);
/// RX FIFO pop register. Reading pops the FIFO.
pub const POPR: RegisterDef = RegisterDef::ro32("POPR", 0x38, 0, &[POPR_RXDATA]);
/// TX FIFO debug view, entry 0.
pub const TXFR0: RegisterDef = RegisterDef::ro32("TXFR0", 0x3C, 0, TXFR_FIELDS);
/// TX FIFO debug view, entry 1.
pub const TXFR1: RegisterDef = RegisterDef::ro32("TXFR1", 0x40, 0, TXFR_FIELDS);
/// TX FIFO debug view, entry 2.
pub const TXFR2: RegisterDef = RegisterDef::ro32("TXFR2", 0x44, 0, TXFR_FIELDS);
/// TX FIFO debug view, entry 3.
pub const TXFR3: RegisterDef = RegisterDef::ro32("TXFR3", 0x48, 0, TXFR_FIELDS);
/// RX FIFO debug view, entry 0.
pub const RXFR0: RegisterDef = RegisterDef::ro32("RXFR0", 0x7C, 0, RXFR_FIELDS);
/// RX FIFO debug view, entry 1.
pub const RXFR1: RegisterDef = RegisterDef::ro32("RXFR1", 0x80, 0, RXFR_FIELDS);
/// RX FIFO debug view, entry 2.
pub const RXFR2: RegisterDef = RegisterDef::ro32("RXFR2", 0x84, 0, RXFR_FIELDS);
/// RX FIFO debug view, entry 3.
pub const RXFR3: RegisterDef = RegisterDef::ro32("RXFR3", 0x88, 0, RXFR_FIELDS);

/// DSPI memory map.
pub static MAP: MemoryMap = MemoryMap {
    peripheral: "SPI",
    align: AIPS_SLOT_SIZE,
    window: AIPS_SLOT_SIZE,
    registers: &[
        MCR, TCR, CTAR0, CTAR1, SR, RSER, PUSHR, POPR, TXFR0, TXFR1, TXFR2, TXFR3, RXFR0,
        RXFR1, RXFR2, RXFR3,
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reset_state_is_halted() {
        assert_eq!(MCR.reset & MCR_MDIS.mask(), MCR_MDIS.mask());
        assert_eq!(MCR.reset & MCR_HALT.mask(), MCR_HALT.mask());
    }

    #[test]
    fn default_frame_size_is_16_bits() {
        // CTAR reset 0x7800_0000: FMSZ = 15.
        assert_eq!(CTAR_FMSZ.extract(CTAR0.reset), 15);
    }

    #[test]
    fn spi2_lives_on_aips1() {
        assert_eq!(SPI2, 0x400A_C000);
    }
}
