use super::bus::BusMaster;

/// Anything that advances by discrete time units (CPU, VIC, CIA, SID).
pub trait Component {
    /// Advance one clock cycle in this component's clock domain.
    /// Returns true if a "significant event" occurred (frame ready, etc).
    fn tick(&mut self) -> bool;
}

/// Extension for components that act as bus masters (the CPU).
pub trait BusMasterComponent: Component {
    type Bus: super::bus::Bus + ?Sized;

    /// Execute one cycle with bus access. Returns true at instruction boundary.
    fn tick_with_bus(&mut self, bus: &mut Self::Bus, master_id: BusMaster) -> bool;
}
