use crate::core::component::BusMasterComponent;

/// Generic CPU interface.
pub trait Cpu: BusMasterComponent + CpuStateTrait {
    /// Drive the reset sequence (loads PC from the reset vector).
    fn reset(&mut self);

    /// Query if the CPU is halted internally (unused by the 6510; kept for
    /// parity with the wider CPU family this trait was generalized from).
    fn is_sleeping(&self) -> bool;
}

pub mod state;
pub use state::{CpuStateTrait, Mos6510State};

pub mod m6510;
pub use m6510::Mos6510;
