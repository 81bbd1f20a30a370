//! Enumerate the chip's peripheral instances.
//!
//! Prints the registry the way `lspci`-style tools print a bus: label,
//! base address, window, register count.

use anyhow::Result;
use k70_pal::{ChipVariant, PeripheralRegistry};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter("k70_pal=info")
        .init();

    let variant = ChipVariant::TWR_K70F120M;
    let registry = PeripheralRegistry::new(variant)?;

    println!(
        "{variant:?}: {} KB flash, {} KB SRAM, {} MHz max",
        variant.program_flash_kb(),
        variant.sram_kb(),
        variant.max_core_hz() / 1_000_000
    );
    println!();
    println!("{:<8} {:>12} {:>8} {:>10}", "LABEL", "BASE", "WINDOW", "REGISTERS");

    for entry in registry.entries() {
        println!(
            "{:<8} {:#012x} {:>8} {:>10}",
            entry.label,
            entry.base,
            entry.map.window,
            entry.map.registers.len()
        );
    }

    println!();
    println!("{} instances registered", registry.len());

    Ok(())
}
