//! Interrupt vector table.
//!
//! A fixed table of [`VECTOR_COUNT`] handler slots, sized at construction
//! to the hardware's vector count and never resized — install and
//! uninstall flip a slot between empty and occupied without allocating.
//!
//! Replacement policy: installing over an occupied slot fails with
//! `AlreadyInstalled`. Handler swaps are deliberate two-step operations
//! (`uninstall`, then `install`), which keeps interrupt setup auditable.

use crate::error::{PalError, Result};
use k70_chip::irq::{Interrupt, VECTOR_COUNT};

/// An installed interrupt handler.
pub type Handler = fn();

/// Fixed-size interrupt vector table.
///
/// Slot `n` corresponds to hardware vector `n`: slots 0–15 are the
/// Cortex-M4 system exceptions, peripheral IRQ `i` dispatches through slot
/// `i + 16` (see [`Interrupt::vector`]).
pub struct VectorTable {
    slots: [Option<Handler>; VECTOR_COUNT],
}

impl VectorTable {
    /// Create a table with every slot unassigned.
    #[must_use]
    pub const fn new() -> Self {
        Self { slots: [None; VECTOR_COUNT] }
    }

    /// Number of vector slots (fixed by the hardware).
    #[must_use]
    pub const fn capacity(&self) -> usize {
        VECTOR_COUNT
    }

    /// Install a handler in an empty slot.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `vector` is outside the table; `AlreadyInstalled` if
    /// the slot is occupied (uninstall first to replace).
    pub fn install(&mut self, vector: usize, handler: Handler) -> Result<()> {
        let slot = self.slot_mut(vector)?;
        if slot.is_some() {
            return Err(PalError::AlreadyInstalled { vector });
        }
        *slot = Some(handler);
        tracing::debug!(vector, "handler installed");
        Ok(())
    }

    /// Install a handler for a peripheral interrupt source.
    ///
    /// # Errors
    ///
    /// `AlreadyInstalled` if the source's slot is occupied.
    pub fn install_irq(&mut self, irq: Interrupt, handler: Handler) -> Result<()> {
        self.install(irq.vector(), handler)
    }

    /// Empty a slot. Idempotent: uninstalling an empty slot is a no-op.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `vector` is outside the table.
    pub fn uninstall(&mut self, vector: usize) -> Result<()> {
        *self.slot_mut(vector)? = None;
        Ok(())
    }

    /// The handler in a slot, if any.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `vector` is outside the table.
    pub fn handler(&self, vector: usize) -> Result<Option<Handler>> {
        self.slots
            .get(vector)
            .copied()
            .ok_or_else(|| Self::out_of_range(vector))
    }

    /// Whether a slot holds a handler. Out-of-range vectors report `false`.
    #[must_use]
    pub fn is_installed(&self, vector: usize) -> bool {
        matches!(self.slots.get(vector), Some(Some(_)))
    }

    /// Invoke the handler for a vector. Returns whether one was installed.
    ///
    /// # Errors
    ///
    /// `OutOfRange` if `vector` is outside the table.
    pub fn dispatch(&self, vector: usize) -> Result<bool> {
        match self.handler(vector)? {
            Some(handler) => {
                handler();
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn installed_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    fn slot_mut(&mut self, vector: usize) -> Result<&mut Option<Handler>> {
        self.slots
            .get_mut(vector)
            .ok_or_else(|| Self::out_of_range(vector))
    }

    fn out_of_range(vector: usize) -> PalError {
        PalError::out_of_range("vector", vector as u64, (VECTOR_COUNT - 1) as u64)
    }
}

impl Default for VectorTable {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for VectorTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let installed: Vec<usize> = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(n, s)| s.map(|_| n))
            .collect();
        f.debug_struct("VectorTable")
            .field("capacity", &VECTOR_COUNT)
            .field("installed", &installed)
            .finish()
    }
}
