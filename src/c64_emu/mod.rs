//! Commodore 64 chip and memory-bank building blocks.
//!
//! Originates from a libsidplayfp-style C64 core; the top-level wiring
//! (`SystemBus`/`System`) lives in [`crate::system`], which owns these chips
//! directly instead of delegating the CPU to an external crate.

pub mod banks;
pub mod cia;
pub mod event;
pub mod mmu;
pub mod vic_ii;
