//! Typed register access bound to a peripheral instance.
//!
//! A [`Peripheral`] ties a base address and a validated memory map to a
//! bus. All operations take the `RegisterDef`/`FieldDef` constants from
//! `k70-chip`, so an access site reads like the reference manual:
//!
//! ```
//! use k70_chip::periph::uart;
//! use k70_pal::{Peripheral, SimBus};
//!
//! let bus = SimBus::new();
//! let uart2 = Peripheral::new("UART2", uart::UART2, &uart::MAP, &bus);
//! uart2.set_bits(&uart::C2, &uart::C2_TE).unwrap();
//! assert_eq!(uart2.read_field(&uart::C2, &uart::C2_TE).unwrap(), 1);
//! ```
//!
//! # Concurrency
//!
//! Every operation is a handful of volatile accesses — synchronous,
//! non-blocking, no allocation. The field update operations are
//! read-modify-write sequences and are **not** atomic: concurrent updates
//! of one register from two execution contexts need caller-supplied mutual
//! exclusion (mask the interrupt, or hold a lock). The layer cannot solve
//! this internally because the available primitives differ per target.

use crate::bus::RegisterBus;
use crate::error::{PalError, Result};
use k70_chip::reg::{FieldDef, MemoryMap, RegisterDef};

/// One peripheral instance, bound to a bus.
#[derive(Debug)]
pub struct Peripheral<'b, B: RegisterBus + ?Sized> {
    label: &'static str,
    base: u32,
    map: &'static MemoryMap,
    bus: &'b B,
}

impl<B: RegisterBus + ?Sized> Clone for Peripheral<'_, B> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<B: RegisterBus + ?Sized> Copy for Peripheral<'_, B> {}

impl<'b, B: RegisterBus + ?Sized> Peripheral<'b, B> {
    /// Bind a base address and map to a bus.
    ///
    /// Usually reached through `PeripheralRegistry::lookup` followed by
    /// `PeripheralEntry::bind`, which guarantees the map was validated.
    pub fn new(label: &'static str, base: u32, map: &'static MemoryMap, bus: &'b B) -> Self {
        Self { label, base, map, bus }
    }

    /// Instance label ("UART2", "PORTA", ...).
    #[must_use]
    pub const fn label(&self) -> &'static str {
        self.label
    }

    /// Instance base address.
    #[must_use]
    pub const fn base(&self) -> u32 {
        self.base
    }

    /// The instance's register layout.
    #[must_use]
    pub const fn map(&self) -> &'static MemoryMap {
        self.map
    }

    /// Absolute address of a register.
    #[must_use]
    pub fn addr(&self, reg: &RegisterDef) -> u32 {
        debug_assert!(
            reg.end_offset() <= self.map.window,
            "{}.{} outside the {} window",
            self.label,
            reg.name,
            self.map.peripheral
        );
        self.base + reg.offset
    }

    /// Volatile load of a whole register.
    ///
    /// # Errors
    ///
    /// `UnsupportedAccess` for write-only registers: a load from true
    /// write-only hardware returns stale data or faults, so it is refused
    /// before touching the bus.
    pub fn read(&self, reg: &RegisterDef) -> Result<u32> {
        if !reg.access.is_readable() {
            return Err(PalError::unsupported(reg.name, reg.access, "read"));
        }
        Ok(self.bus.load(self.addr(reg), reg.width))
    }

    /// Volatile store of a whole register. No read-back, no merge.
    ///
    /// # Errors
    ///
    /// `UnsupportedAccess` for read-only registers and for registers marked
    /// read-modify-write (use [`Peripheral::modify`] or the field
    /// operations); `OutOfRange` if `value` does not fit the register
    /// width.
    pub fn write(&self, reg: &RegisterDef, value: u32) -> Result<()> {
        if !reg.access.allows_direct_write() {
            return Err(PalError::unsupported(reg.name, reg.access, "write"));
        }
        self.check_register_value(reg, value)?;
        self.bus.store(self.addr(reg), reg.width, value);
        Ok(())
    }

    /// General read-modify-write: load, apply `f`, store back.
    ///
    /// # Errors
    ///
    /// `UnsupportedAccess` unless the register is both readable and
    /// writable; `OutOfRange` if `f` produces a value wider than the
    /// register.
    pub fn modify(&self, reg: &RegisterDef, f: impl FnOnce(u32) -> u32) -> Result<u32> {
        if !reg.access.is_readable() || !reg.access.is_writable() {
            return Err(PalError::unsupported(reg.name, reg.access, "read-modify-write"));
        }
        let addr = self.addr(reg);
        let updated = f(self.bus.load(addr, reg.width));
        self.check_register_value(reg, updated)?;
        self.bus.store(addr, reg.width, updated);
        Ok(updated)
    }

    /// Read a bitfield: load the register, mask, shift down.
    ///
    /// # Errors
    ///
    /// `UnsupportedAccess` for write-only registers.
    pub fn read_field(&self, reg: &RegisterDef, field: &FieldDef) -> Result<u32> {
        Ok(field.extract(self.read(reg)?))
    }

    /// Update a bitfield: load the register, clear the field's mask, OR in
    /// the shifted value, store back.
    ///
    /// Values wider than the field are rejected, never silently truncated —
    /// including the boundary value `2^width`.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `value` exceeds the field's representable range;
    /// `UnsupportedAccess` unless the register is readable and writable.
    pub fn write_field(&self, reg: &RegisterDef, field: &FieldDef, value: u32) -> Result<()> {
        if value > field.max_value() {
            return Err(PalError::out_of_range(
                field.name,
                u64::from(value),
                u64::from(field.max_value()),
            ));
        }
        self.modify(reg, |raw| field.insert(raw, value))?;
        Ok(())
    }

    /// Set every bit of a field (write the all-ones value).
    ///
    /// # Errors
    ///
    /// As for [`Peripheral::write_field`].
    pub fn set_bits(&self, reg: &RegisterDef, field: &FieldDef) -> Result<()> {
        self.write_field(reg, field, field.max_value())
    }

    /// Clear every bit of a field (write zero).
    ///
    /// # Errors
    ///
    /// As for [`Peripheral::write_field`].
    pub fn clear_bits(&self, reg: &RegisterDef, field: &FieldDef) -> Result<()> {
        self.write_field(reg, field, 0)
    }

    /// Explicit ordering barrier for cross-register sequencing.
    pub fn barrier(&self) {
        self.bus.barrier();
    }

    /// Read a register and split it into named field values.
    ///
    /// # Errors
    ///
    /// `UnsupportedAccess` for write-only registers.
    pub fn decode(&self, reg: &RegisterDef) -> Result<RegisterSnapshot> {
        let raw = self.read(reg)?;
        Ok(RegisterSnapshot {
            register: reg.name,
            raw,
            fields: reg
                .fields
                .iter()
                .map(|f| FieldValue { name: f.name, value: f.extract(raw) })
                .collect(),
        })
    }

    fn check_register_value(&self, reg: &RegisterDef, value: u32) -> Result<()> {
        if value > reg.width.max_value() {
            return Err(PalError::out_of_range(
                reg.name,
                u64::from(value),
                u64::from(reg.width.max_value()),
            ));
        }
        Ok(())
    }
}

/// A decoded register read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterSnapshot {
    /// Register name.
    pub register: &'static str,
    /// Raw value as read.
    pub raw: u32,
    /// Per-field breakdown.
    pub fields: Vec<FieldValue>,
}

/// One field's value within a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldValue {
    /// Field name.
    pub name: &'static str,
    /// Extracted value.
    pub value: u32,
}

impl std::fmt::Display for RegisterSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {:#010x} [", self.register, self.raw)?;
        for (i, field) in self.fields.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}={:#x}", field.name, field.value)?;
        }
        write!(f, "]")
    }
}
