//! CIA Timer-A / ICR pipeline (spec §8 universal invariants + the Lorenz
//! `cia1tab` scenario): old-CIA interrupt delivery lags the underflow by
//! exactly one cycle, and a destructive read clears the pending flags.

mod common;
use c64_core::c64_emu::cia::{CRA, ICR, TAH, TAL};
use common::new_system;

#[test]
fn timer_a_underflow_then_delayed_irq_bit_then_clear() {
    let mut system = new_system();
    system.reset();

    system.bus.cia1.write(TAL, 8);
    system.bus.cia1.write(TAH, 0);
    system.bus.cia1.write(ICR, 0x81); // unmask Timer-A underflow
    system.bus.cia1.write(CRA, 0x09); // START | ONESHOT

    // Tick until the source flag (bit 0) first appears in a non-destructive
    // snapshot — this is the tick the timer underflows.
    let mut underflow_tick = None;
    for t in 0..64u32 {
        system.bus.cia1.tick();
        let snap = system.bus.cia1.icr_snapshot();
        if snap & 0x01 != 0 {
            underflow_tick = Some(t);
            assert_eq!(snap & 0x80, 0, "bit 7 must not appear the same cycle as bit 0 (old CIA)");
            break;
        }
    }
    let underflow_tick = underflow_tick.expect("timer must underflow within 64 cycles");

    // One cycle later, bit 7 (IRQ request) joins bit 0.
    system.bus.cia1.tick();
    let snap = system.bus.cia1.icr_snapshot();
    assert_eq!(snap, 0x81, "bit 7 becomes visible exactly one cycle after bit 0");
    let _ = underflow_tick;

    // A real (destructive) read acknowledges both bits.
    let (value, irq_delta) = system.bus.cia1.read(ICR);
    assert_eq!(value, 0x81);
    assert_eq!(irq_delta, Some(false));

    // Without a new source, the next snapshot (and a second real read) is 0.
    assert_eq!(system.bus.cia1.icr_snapshot(), 0);
    let (second, _) = system.bus.cia1.read(ICR);
    assert_eq!(second, 0);
}

#[test]
fn border_color_round_trips_low_nibble() {
    use c64_core::core::{Bus, BusMaster};
    let mut system = new_system();
    system.reset();

    system.bus.write(BusMaster::Cpu(0), 0xD020, 0x3E);
    assert_eq!(system.bus.read(BusMaster::Cpu(0), 0xD020) & 0x0F, 0x3E & 0x0F);
}
