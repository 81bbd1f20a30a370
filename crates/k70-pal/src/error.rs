//! Error types for peripheral access operations.

use k70_chip::reg::Access;
use thiserror::Error;

/// Result type alias for access-layer operations.
pub type Result<T> = std::result::Result<T, PalError>;

/// Errors surfaced by the access layer.
///
/// The definition-time errors (`Overlap`, `Misaligned`) are fatal: they
/// abort registry construction, since a bad map is a definition bug, not a
/// runtime condition. The access errors are recoverable results — they are
/// never swallowed, because continuing past a hardware-access violation
/// leaves the peripheral in an undefined state.
#[derive(Debug, Error)]
pub enum PalError {
    /// No such peripheral name/instance pair in the registry.
    #[error("No peripheral {name}[{instance}] in the registry")]
    NotFound {
        /// Requested peripheral name.
        name: String,
        /// Requested instance index.
        instance: usize,
    },

    /// A value or index exceeds its representable range.
    #[error("{subject}: value {value:#x} out of range (limit {limit:#x})")]
    OutOfRange {
        /// What overflowed (field name, register name, or "vector").
        subject: &'static str,
        /// The offending value.
        value: u64,
        /// Largest acceptable value.
        limit: u64,
    },

    /// Two registers or two bitfields claim the same bits.
    #[error("{peripheral}: {first} and {second} overlap")]
    Overlap {
        /// Peripheral or register the conflict is inside.
        peripheral: &'static str,
        /// First conflicting definition.
        first: &'static str,
        /// Second conflicting definition.
        second: &'static str,
    },

    /// A base address or register offset violates its alignment rule.
    #[error("{peripheral}: {subject} {value:#x} violates {align}-byte alignment")]
    Misaligned {
        /// Peripheral the definition belongs to.
        peripheral: &'static str,
        /// What is misaligned (register name or "base address").
        subject: &'static str,
        /// The misaligned value.
        value: u64,
        /// Required alignment in bytes.
        align: u64,
    },

    /// The register's access mode forbids the attempted operation.
    #[error("Register {register} is {access:?}; {attempted} refused")]
    UnsupportedAccess {
        /// Register name.
        register: &'static str,
        /// The register's declared access mode.
        access: Access,
        /// What was attempted ("read", "write", "read-modify-write").
        attempted: &'static str,
    },

    /// The vector slot already holds a handler.
    #[error("Vector {vector} already has a handler installed")]
    AlreadyInstalled {
        /// Vector table index.
        vector: usize,
    },
}

impl PalError {
    /// Create a lookup-failure error.
    pub fn not_found(name: impl Into<String>, instance: usize) -> Self {
        Self::NotFound { name: name.into(), instance }
    }

    /// Create a range error.
    #[must_use]
    pub fn out_of_range(subject: &'static str, value: u64, limit: u64) -> Self {
        Self::OutOfRange { subject, value, limit }
    }

    /// Create an access-mode violation error.
    #[must_use]
    pub fn unsupported(register: &'static str, access: Access, attempted: &'static str) -> Self {
        Self::UnsupportedAccess { register, access, attempted }
    }
}
