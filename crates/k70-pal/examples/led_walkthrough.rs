//! Walk the tower board's LED bring-up through the typed accessor.
//!
//! Runs against the simulated bus, so it works anywhere; on the target the
//! same sequence over a `DirectBus` lights actual LEDs.

use anyhow::Result;
use k70_chip::periph::{gpio, port, sim};
use k70_chip::pins;
use k70_pal::{ChipVariant, PeripheralRegistry, SimBus};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("k70_pal=debug")
        .init();

    let registry = PeripheralRegistry::new(ChipVariant::TWR_K70F120M)?;
    let bus = SimBus::with_reset(&registry);

    // Clock gate first; a PORT access with the gate closed hard-faults on
    // real silicon.
    let sysint = registry.lookup("SIM", 0)?.bind(&bus);
    sysint.set_bits(&sim::SCGC5, &sim::SCGC5_PORTA)?;

    let porta = registry.lookup("PORT", 0)?.bind(&bus);
    let gpioa = registry.lookup("GPIO", 0)?.bind(&bus);

    let mut led_mask = 0u32;
    for name in ["LED_ORANGE", "LED_YELLOW", "LED_GREEN", "LED_BLUE"] {
        let pin = pins::signal(name).expect("board table");
        porta.write_field(&port::PCR[pin.pin as usize], &port::PCR_MUX, pin.mux)?;
        led_mask |= 1 << pin.pin;
        println!("{name}: PTA{} muxed to GPIO", pin.pin);
    }

    // Outputs, then all off (LEDs are active low, PSOR turns them off).
    gpioa.modify(&gpio::PDDR, |pddr| pddr | led_mask)?;
    gpioa.write(&gpio::PSOR, led_mask)?;

    println!();
    println!("{}", porta.decode(&port::PCR11)?);
    println!("{}", gpioa.decode(&gpio::PDDR)?);
    println!("LED mask {led_mask:#010x} configured as outputs, all off");

    Ok(())
}
