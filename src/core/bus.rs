/// Identifies who is accessing the bus (for multi-CPU/DMA arbitration).
///
/// The C64 only ever has one real bus master (the CPU), but the trait
/// carries the distinction so the same `Bus` interface can be reused by a
/// multi-master machine without widening the signature later.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum BusMaster {
    Cpu(usize),
    /// VIC-II accessing memory directly during a badline character/data fetch.
    Vic,
}

/// Generic bus interface. A call to `read`/`write` is the system's only time
/// base: each call advances the shared tick exactly once.
pub trait Bus {
    type Address: Copy + Into<u64>;
    type Data;

    fn read(&mut self, master: BusMaster, addr: Self::Address) -> Self::Data;
    fn write(&mut self, master: BusMaster, addr: Self::Address, data: Self::Data);

    /// True if `master` must pause before its next bus cycle (VIC BA line).
    fn is_halted_for(&self, master: BusMaster) -> bool;

    /// Generic interrupt query. CPUs pick what they need.
    fn check_interrupts(&self, target: BusMaster) -> InterruptState;
}

#[derive(Default, Clone, Copy, Debug)]
pub struct InterruptState {
    pub nmi: bool,
    pub irq: bool,
}
