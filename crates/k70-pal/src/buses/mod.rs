//! Bus implementations.
//!
//! Two backends:
//! - **Direct**: volatile loads/stores at physical addresses, for code
//!   running on (or debugging against) the real memory map.
//! - **Sim**: an in-memory latch model so everything above the bus seam
//!   runs hostside — CI needs no silicon.

pub mod direct;
pub mod sim;

pub use direct::DirectBus;
pub use sim::SimBus;
