//! The flat peripheral instance table.
//!
//! One row per addressable peripheral instance: lookup name, instance
//! index, the conventional label, base address, and the shared memory map.
//! `k70-pal`'s registry is populated from this table and nothing else.

use crate::periph::{ftfe, ftm, gpio, pit, port, rtc, sim, spi, uart};
use crate::reg::MemoryMap;

/// A peripheral instance definition.
#[derive(Debug, Clone, Copy)]
pub struct PeripheralDef {
    /// Lookup name shared by all instances of the type ("UART", "GPIO", ...).
    pub name: &'static str,
    /// Instance index within the type.
    pub instance: usize,
    /// Conventional instance label ("UART2", "PORTA", ...).
    pub label: &'static str,
    /// Base address.
    pub base: u32,
    /// Register layout shared by all instances of the type.
    pub map: &'static MemoryMap,
}

impl PeripheralDef {
    const fn new(
        name: &'static str,
        instance: usize,
        label: &'static str,
        base: u32,
        map: &'static MemoryMap,
    ) -> Self {
        Self { name, instance, label, base, map }
    }
}

/// Every peripheral instance this model covers, in address order within
/// each type.
pub static PERIPHERALS: &[PeripheralDef] = &[
    PeripheralDef::new("SIM", 0, "SIM", sim::SIM, &sim::MAP),
    PeripheralDef::new("PORT", 0, "PORTA", port::PORTA, &port::MAP),
    PeripheralDef::new("PORT", 1, "PORTB", port::PORTB, &port::MAP),
    PeripheralDef::new("PORT", 2, "PORTC", port::PORTC, &port::MAP),
    PeripheralDef::new("PORT", 3, "PORTD", port::PORTD, &port::MAP),
    PeripheralDef::new("PORT", 4, "PORTE", port::PORTE, &port::MAP),
    PeripheralDef::new("PORT", 5, "PORTF", port::PORTF, &port::MAP),
    PeripheralDef::new("GPIO", 0, "GPIOA", gpio::GPIOA, &gpio::MAP),
    PeripheralDef::new("GPIO", 1, "GPIOB", gpio::GPIOB, &gpio::MAP),
    PeripheralDef::new("GPIO", 2, "GPIOC", gpio::GPIOC, &gpio::MAP),
    PeripheralDef::new("GPIO", 3, "GPIOD", gpio::GPIOD, &gpio::MAP),
    PeripheralDef::new("GPIO", 4, "GPIOE", gpio::GPIOE, &gpio::MAP),
    PeripheralDef::new("GPIO", 5, "GPIOF", gpio::GPIOF, &gpio::MAP),
    PeripheralDef::new("UART", 0, "UART0", uart::UART0, &uart::MAP),
    PeripheralDef::new("UART", 1, "UART1", uart::UART1, &uart::MAP),
    PeripheralDef::new("UART", 2, "UART2", uart::UART2, &uart::MAP),
    PeripheralDef::new("UART", 3, "UART3", uart::UART3, &uart::MAP),
    PeripheralDef::new("UART", 4, "UART4", uart::UART4, &uart::MAP),
    PeripheralDef::new("UART", 5, "UART5", uart::UART5, &uart::MAP),
    PeripheralDef::new("SPI", 0, "SPI0", spi::SPI0, &spi::MAP),
    PeripheralDef::new("SPI", 1, "SPI1", spi::SPI1, &spi::MAP),
    PeripheralDef::new("SPI", 2, "SPI2", spi::SPI2, &spi::MAP),
    PeripheralDef::new("FTM", 0, "FTM0", ftm::FTM0, &ftm::MAP),
    PeripheralDef::new("FTM", 1, "FTM1", ftm::FTM1, &ftm::MAP),
    PeripheralDef::new("FTM", 2, "FTM2", ftm::FTM2, &ftm::MAP),
    PeripheralDef::new("FTM", 3, "FTM3", ftm::FTM3, &ftm::MAP),
    PeripheralDef::new("PIT", 0, "PIT", pit::PIT, &pit::MAP),
    PeripheralDef::new("RTC", 0, "RTC", rtc::RTC, &rtc::MAP),
    PeripheralDef::new("FTFE", 0, "FTFE", ftfe::FTFE, &ftfe::MAP),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_unique() {
        for (i, a) in PERIPHERALS.iter().enumerate() {
            for b in &PERIPHERALS[i + 1..] {
                assert_ne!(a.label, b.label);
                assert!(
                    a.name != b.name || a.instance != b.instance,
                    "duplicate {}[{}]",
                    a.name,
                    a.instance
                );
            }
        }
    }

    #[test]
    fn instance_windows_do_not_collide() {
        for (i, a) in PERIPHERALS.iter().enumerate() {
            for b in &PERIPHERALS[i + 1..] {
                let a_end = a.base + a.map.window;
                let b_end = b.base + b.map.window;
                assert!(
                    a_end <= b.base || b_end <= a.base,
                    "{} and {} overlap",
                    a.label,
                    b.label
                );
            }
        }
    }
}
