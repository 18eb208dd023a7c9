pub mod c64_emu;
pub mod core;
pub mod cpu;
pub mod error;
pub mod sid;
pub mod system;

pub use error::CoreError;
pub use system::{C64CiaModel, C64Model, System};

pub mod prelude {
    pub use crate::core::{Bus, BusMaster, BusMasterComponent, Component, bus::InterruptState};
    pub use crate::cpu::Cpu;
    pub use crate::system::{C64CiaModel, C64Model, System};
}
