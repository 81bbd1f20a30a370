//! Registry population and lookup.

use k70_chip::periph::{gpio, uart};
use k70_pal::{BusKind, ChipVariant, PalError, PeripheralRegistry, RegisterBus, SimBus};

#[test]
fn registry_builds_for_every_variant() {
    for variant in [
        ChipVariant::Mk70Fn1M0Vmj12,
        ChipVariant::Mk70Fx512Vmj12,
        ChipVariant::Mk70Fn1M0Vmj15,
        ChipVariant::Mk70Fx512Vmj15,
    ] {
        let registry = PeripheralRegistry::new(variant).unwrap();
        assert_eq!(registry.variant(), variant);
        assert!(!registry.is_empty());
    }
}

#[test]
fn lookup_returns_the_defined_base_address() {
    let registry = PeripheralRegistry::new(ChipVariant::TWR_K70F120M).unwrap();

    let uart0 = registry.lookup("UART", 0).unwrap();
    assert_eq!(uart0.base, uart::UART0);
    assert_eq!(uart0.base, 0x4006_A000);

    let uart2 = registry.lookup("UART", 2).unwrap();
    assert_eq!(uart2.base, 0x4006_C000);
    assert_eq!(uart2.label, "UART2");
}

#[test]
fn unknown_lookups_fail_with_not_found() {
    let registry = PeripheralRegistry::new(ChipVariant::TWR_K70F120M).unwrap();

    let err = registry.lookup("UART", 99).unwrap_err();
    assert!(matches!(err, PalError::NotFound { instance: 99, .. }));

    let err = registry.lookup("ENET", 0).unwrap_err();
    assert!(matches!(err, PalError::NotFound { .. }));

    assert!(registry.by_label("PORTA").is_ok());
    assert!(registry.by_label("PORTG").is_err());
}

#[test]
fn every_entry_binds_and_reads() {
    let registry = PeripheralRegistry::new(ChipVariant::TWR_K70F120M).unwrap();
    let bus = SimBus::with_reset(&registry);
    assert_eq!(bus.kind(), BusKind::Sim);

    for entry in registry.entries() {
        let periph = entry.bind(&bus);
        for reg in entry.map.registers {
            if reg.access.is_readable() {
                let raw = periph.read(reg).unwrap();
                assert_eq!(raw, reg.reset, "{}.{} reset mismatch", entry.label, reg.name);
            }
        }
    }
}

#[test]
fn register_lookup_by_name() {
    let registry = PeripheralRegistry::new(ChipVariant::TWR_K70F120M).unwrap();
    let gpioa = registry.lookup("GPIO", 0).unwrap();

    let pddr = gpioa.register("PDDR").unwrap();
    assert_eq!(pddr.offset, gpio::PDDR.offset);
    assert!(gpioa.register("NOPE").is_none());
}

#[test]
fn maps_are_shared_between_instances() {
    let registry = PeripheralRegistry::new(ChipVariant::TWR_K70F120M).unwrap();
    let a = registry.lookup("UART", 0).unwrap();
    let b = registry.lookup("UART", 5).unwrap();
    assert!(std::ptr::eq(a.map, b.map));
    assert_ne!(a.base, b.base);
}
