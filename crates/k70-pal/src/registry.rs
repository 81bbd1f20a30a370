//! Peripheral registry.
//!
//! Populated once, at initialization, from the static definition tables in
//! `k70-chip`; read-only afterwards. There is no dynamic registration —
//! the peripheral population of a chip does not change at runtime, and
//! keeping the registry immutable keeps lookups allocation-free and
//! deterministic.

use crate::access::Peripheral;
use crate::bus::RegisterBus;
use crate::error::{PalError, Result};
use crate::map::{validate_base, validate_map};
use k70_chip::peripherals::PERIPHERALS;
use k70_chip::reg::{MemoryMap, RegisterDef};
use k70_chip::variant::ChipVariant;

/// One registered peripheral instance.
#[derive(Debug, Clone, Copy)]
pub struct PeripheralEntry {
    /// Lookup name shared by instances of the type.
    pub name: &'static str,
    /// Instance index within the type.
    pub instance: usize,
    /// Conventional label ("UART2", "PORTA", ...).
    pub label: &'static str,
    /// Base address.
    pub base: u32,
    /// Validated register layout.
    pub map: &'static MemoryMap,
}

impl PeripheralEntry {
    /// Bind this instance to a bus for typed access.
    #[must_use]
    pub fn bind<'b, B: RegisterBus + ?Sized>(&self, bus: &'b B) -> Peripheral<'b, B> {
        Peripheral::new(self.label, self.base, self.map, bus)
    }

    /// Look up one of this instance's registers by name (diagnostics;
    /// typed code uses the `RegisterDef` constants).
    #[must_use]
    pub fn register(&self, name: &str) -> Option<&'static RegisterDef> {
        self.map.register(name)
    }
}

/// The chip's peripheral population.
#[derive(Debug)]
pub struct PeripheralRegistry {
    variant: ChipVariant,
    entries: Vec<PeripheralEntry>,
}

impl PeripheralRegistry {
    /// Populate and validate the registry for a chip variant.
    ///
    /// Every memory map and every instance base address is checked here,
    /// once. A failure is a definition bug: the registry does not come up,
    /// and nothing can be looked up through it.
    ///
    /// # Errors
    ///
    /// `Overlap`, `Misaligned`, or `OutOfRange` from map validation.
    pub fn new(variant: ChipVariant) -> Result<Self> {
        tracing::info!(?variant, "populating peripheral registry");

        let mut entries = Vec::with_capacity(PERIPHERALS.len());
        let mut validated: Vec<*const MemoryMap> = Vec::new();

        for def in PERIPHERALS {
            // Maps are shared between instances; validate each one once.
            let map_ptr: *const MemoryMap = def.map;
            if !validated.contains(&map_ptr) {
                validate_map(def.map)?;
                validated.push(map_ptr);
            }
            validate_base(def.label, def.base, def.map)?;

            entries.push(PeripheralEntry {
                name: def.name,
                instance: def.instance,
                label: def.label,
                base: def.base,
                map: def.map,
            });
        }

        tracing::info!(
            instances = entries.len(),
            maps = validated.len(),
            "peripheral registry ready"
        );

        Ok(Self { variant, entries })
    }

    /// The variant this registry was built for.
    #[must_use]
    pub const fn variant(&self) -> ChipVariant {
        self.variant
    }

    /// Look up a peripheral instance by name and index.
    ///
    /// # Errors
    ///
    /// `NotFound` for unknown name/index pairs.
    pub fn lookup(&self, name: &str, instance: usize) -> Result<&PeripheralEntry> {
        self.entries
            .iter()
            .find(|e| e.name == name && e.instance == instance)
            .ok_or_else(|| PalError::not_found(name, instance))
    }

    /// Look up a peripheral instance by its conventional label.
    ///
    /// # Errors
    ///
    /// `NotFound` if no instance carries the label.
    pub fn by_label(&self, label: &str) -> Result<&PeripheralEntry> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .ok_or_else(|| PalError::not_found(label, 0))
    }

    /// All registered instances.
    #[must_use]
    pub fn entries(&self) -> &[PeripheralEntry] {
        &self.entries
    }

    /// Number of registered instances.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry is empty (it never is after `new` succeeds).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
