//! Accessor semantics against the simulated bus.
//!
//! Everything here runs hostside: the SimBus latch model stands in for the
//! silicon, so these tests exercise access modes, field round-trips, and
//! the overflow policy without hardware.

use k70_chip::periph::{gpio, pit, sim, spi, uart};
use k70_chip::reg::RegWidth;
use k70_pal::{ChipVariant, PalError, PeripheralRegistry, SimBus};

fn registry() -> PeripheralRegistry {
    PeripheralRegistry::new(ChipVariant::TWR_K70F120M).expect("definition data is valid")
}

#[test]
fn whole_register_roundtrip() {
    let registry = registry();
    let bus = SimBus::new();
    let pit0 = registry.lookup("PIT", 0).unwrap().bind(&bus);

    pit0.write(&pit::LDVAL0, 47_999).unwrap();
    assert_eq!(pit0.read(&pit::LDVAL0).unwrap(), 47_999);
}

#[test]
fn field_roundtrip_law() {
    let registry = registry();
    let bus = SimBus::new();
    let uart2 = registry.lookup("UART", 2).unwrap().bind(&bus);

    // Every representable value survives write_field → read_field.
    for v in 0..=uart::BDH_SBR.max_value() {
        uart2.write_field(&uart::BDH, &uart::BDH_SBR, v).unwrap();
        assert_eq!(uart2.read_field(&uart::BDH, &uart::BDH_SBR).unwrap(), v);
    }
}

#[test]
fn field_update_preserves_neighbours() {
    let registry = registry();
    let bus = SimBus::new();
    let uart2 = registry.lookup("UART", 2).unwrap().bind(&bus);

    uart2.set_bits(&uart::C2, &uart::C2_TE).unwrap();
    uart2.set_bits(&uart::C2, &uart::C2_RE).unwrap();
    uart2.set_bits(&uart::C2, &uart::C2_RIE).unwrap();
    // TE set first must survive the later RMW updates.
    assert_eq!(uart2.read(&uart::C2).unwrap(), 0x2C);

    uart2.clear_bits(&uart::C2, &uart::C2_RIE).unwrap();
    assert_eq!(uart2.read(&uart::C2).unwrap(), 0x0C);
}

#[test]
fn oversized_field_write_is_rejected() {
    let registry = registry();
    let bus = SimBus::new();
    let porta = registry.lookup("PORT", 0).unwrap().bind(&bus);
    use k70_chip::periph::port;

    // MUX is 3 bits wide: 7 fits, 8 (= 2^width, the boundary) must not.
    porta.write_field(&port::PCR10, &port::PCR_MUX, 7).unwrap();
    let err = porta.write_field(&port::PCR10, &port::PCR_MUX, 8).unwrap_err();
    assert!(matches!(err, PalError::OutOfRange { subject: "MUX", value: 8, limit: 7 }));

    // The failed write left the register untouched.
    assert_eq!(porta.read_field(&port::PCR10, &port::PCR_MUX).unwrap(), 7);
}

#[test]
fn oversized_register_write_is_rejected() {
    let registry = registry();
    let bus = SimBus::new();
    let uart2 = registry.lookup("UART", 2).unwrap().bind(&bus);

    let err = uart2.write(&uart::BDL, 0x100).unwrap_err();
    assert!(matches!(err, PalError::OutOfRange { .. }));
}

#[test]
fn write_only_register_refuses_reads() {
    let registry = registry();
    let bus = SimBus::new();
    let gpioa = registry.lookup("GPIO", 0).unwrap().bind(&bus);

    let err = gpioa.read(&gpio::PSOR).unwrap_err();
    assert!(matches!(err, PalError::UnsupportedAccess { register: "PSOR", .. }));

    // Writes are the supported direction.
    gpioa.write(&gpio::PSOR, 1 << 10).unwrap();
}

#[test]
fn read_only_register_refuses_writes() {
    let registry = registry();
    let bus = SimBus::new();
    let gpioa = registry.lookup("GPIO", 0).unwrap().bind(&bus);

    let err = gpioa.write(&gpio::PDIR, 0xFFFF).unwrap_err();
    assert!(matches!(err, PalError::UnsupportedAccess { register: "PDIR", .. }));

    // Reads work; the input state is planted through the raw bus.
    bus.poke(gpioa.base() + gpio::PDIR.offset, RegWidth::W32, 0x0000_0C00);
    assert_eq!(gpioa.read(&gpio::PDIR).unwrap(), 0x0C00);
}

#[test]
fn clock_gates_refuse_blind_stores() {
    let registry = registry();
    let bus = SimBus::with_reset(&registry);
    let sysint = registry.lookup("SIM", 0).unwrap().bind(&bus);

    // SCGC6 is shared state; whole-register stores are refused...
    let err = sysint.write(&sim::SCGC6, 0).unwrap_err();
    assert!(matches!(err, PalError::UnsupportedAccess { register: "SCGC6", .. }));

    // ...while field-level read-modify-write goes through and preserves the
    // flash gate that was set at reset.
    sysint.set_bits(&sim::SCGC6, &sim::SCGC6_PIT).unwrap();
    let scgc6 = sysint.read(&sim::SCGC6).unwrap();
    assert_eq!(scgc6 & sim::SCGC6_PIT.mask(), sim::SCGC6_PIT.mask());
    assert_eq!(scgc6 & sim::SCGC6_FTFL.mask(), sim::SCGC6_FTFL.mask());
}

#[test]
fn reset_preload_matches_documentation() {
    let registry = registry();
    let bus = SimBus::with_reset(&registry);

    let uart2 = registry.lookup("UART", 2).unwrap().bind(&bus);
    // Transmitter idle flags are set out of reset.
    assert_eq!(uart2.read(&uart::S1).unwrap(), 0xC0);
    assert_eq!(uart2.read_field(&uart::S1, &uart::S1_TDRE).unwrap(), 1);

    let spi2 = registry.lookup("SPI", 2).unwrap().bind(&bus);
    // DSPI resets halted with a 16-bit frame in CTAR0.
    assert_eq!(spi2.read_field(&spi::MCR, &spi::MCR_HALT).unwrap(), 1);
    assert_eq!(spi2.read_field(&spi::CTAR0, &spi::CTAR_FMSZ).unwrap(), 15);

    let pit0 = registry.lookup("PIT", 0).unwrap().bind(&bus);
    assert_eq!(pit0.read_field(&pit::MCR, &pit::MCR_MDIS).unwrap(), 1);
}

#[test]
fn eight_bit_registers_do_not_clobber_neighbours() {
    let registry = registry();
    let bus = SimBus::new();
    let uart2 = registry.lookup("UART", 2).unwrap().bind(&bus);

    uart2.write(&uart::BDH, 0x1F).unwrap();
    uart2.write(&uart::BDL, 0x38).unwrap();
    uart2.write(&uart::C1, 0x00).unwrap();

    // Each 8-bit register keeps its own byte.
    assert_eq!(uart2.read(&uart::BDH).unwrap(), 0x1F);
    assert_eq!(uart2.read(&uart::BDL).unwrap(), 0x38);
    assert_eq!(uart2.read(&uart::C1).unwrap(), 0x00);
}

#[test]
fn decode_breaks_a_register_into_fields() {
    let registry = registry();
    let bus = SimBus::new();
    let uart2 = registry.lookup("UART", 2).unwrap().bind(&bus);

    uart2.write(&uart::C2, 0x2C).unwrap(); // RIE | TE | RE
    let snap = uart2.decode(&uart::C2).unwrap();
    assert_eq!(snap.raw, 0x2C);

    let value_of = |name: &str| snap.fields.iter().find(|f| f.name == name).unwrap().value;
    assert_eq!(value_of("RIE"), 1);
    assert_eq!(value_of("TE"), 1);
    assert_eq!(value_of("RE"), 1);
    assert_eq!(value_of("TIE"), 0);
}

#[test]
fn lab_bring_up_sequence_through_the_accessor() {
    // The LED init sequence the tower firmware performs, expressed through
    // the typed layer: gate PORTA, mux the pins to GPIO, set direction,
    // then switch the (active-low) LEDs off via PSOR.
    use k70_chip::periph::port;

    let registry = registry();
    let bus = SimBus::with_reset(&registry);

    let sysint = registry.lookup("SIM", 0).unwrap().bind(&bus);
    sysint.set_bits(&sim::SCGC5, &sim::SCGC5_PORTA).unwrap();

    let porta = registry.lookup("PORT", 0).unwrap().bind(&bus);
    let leds: u32 = (1 << 11) | (1 << 28) | (1 << 29) | (1 << 10);
    for pcr in [&port::PCR11, &port::PCR28, &port::PCR29, &port::PCR10] {
        porta.write_field(pcr, &port::PCR_MUX, 1).unwrap();
    }

    let gpioa = registry.lookup("GPIO", 0).unwrap().bind(&bus);
    gpioa.modify(&gpio::PDDR, |pddr| pddr | leds).unwrap();
    gpioa.write(&gpio::PSOR, leds).unwrap();

    assert_eq!(gpioa.read(&gpio::PDDR).unwrap(), leds);
    assert_eq!(porta.read_field(&port::PCR11, &port::PCR_MUX).unwrap(), 1);
}
