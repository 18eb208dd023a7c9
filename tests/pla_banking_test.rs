//! Scenario 5 (spec §8): PLA banking, plus the $D800-$DBFF color-RAM and
//! CIA ICR read-clears invariants.
//!
//! The DDR ($00) must be configured before a $01 write can move the PLA
//! lines at all — with DDR=0 (power-on default) every port bit floats
//! high regardless of what's written to $01. The literal scenario values
//! only make sense with the conventional KERNAL boot DDR of $2F, matching
//! the universal invariant a few lines above it in spec §8 ("reading $01
//! with DDR=$2F ...").

mod common;
use c64_core::c64_emu::banks::Bank;
use c64_core::core::{Bus, BusMaster};
use common::new_system;

fn write(system: &mut c64_core::System, addr: u16, value: u8) {
    system.bus.write(BusMaster::Cpu(0), addr, value);
}

fn read(system: &mut c64_core::System, addr: u16) -> u8 {
    system.bus.read(BusMaster::Cpu(0), addr)
}

#[test]
fn pla_banking_switches_basic_kernal_char_and_io() {
    let mut system = new_system();
    system.reset();

    write(&mut system, 0x0000, 0x2F); // DDR: bits 0-3,5 are outputs
    write(&mut system, 0x0001, 0x36); // LORAM=0 HIRAM=1 CHAREN=1

    assert_eq!(read(&mut system, 0xA000), system.bus.ram.peek(0xA000), "LORAM=0: BASIC must not be mapped in");
    assert_eq!(read(&mut system, 0xE000), system.bus.kernal_rom.peek(0xE000), "HIRAM=1 maps KERNAL at $E000");
    // $D000 with CHAREN=1 routes to I/O; VIC sprite-0-X ($D000) defaults to 0.
    assert_eq!(read(&mut system, 0xD000), 0);

    write(&mut system, 0x0001, 0x34); // LORAM=0 HIRAM=1 CHAREN=0
    assert_eq!(read(&mut system, 0xD000), system.bus.char_rom.peek(0xD000));
}

#[test]
fn color_ram_masks_to_low_nibble() {
    let mut system = new_system();
    system.reset();
    write(&mut system, 0x0000, 0x2F);
    write(&mut system, 0x0001, 0x37); // normal config: BASIC+KERNAL+IO visible

    for addr in [0xD800u16, 0xD900, 0xDBFF] {
        write(&mut system, addr, 0xA7);
        assert_eq!(read(&mut system, addr), 0xF7);
    }
}

#[test]
fn cia_icr_read_clears() {
    use c64_core::c64_emu::cia::{CRA, ICR, TAH, TAL};
    let mut system = new_system();
    system.reset();

    system.bus.cia1.write(ICR, 0x81); // enable Timer-A IRQ
    system.bus.cia1.write(TAL, 0x01);
    system.bus.cia1.write(TAH, 0x00);
    system.bus.cia1.write(CRA, 0x09); // start, one-shot

    let mut fired = false;
    for _ in 0..32 {
        system.bus.cia1.tick();
        if system.bus.cia1.icr_snapshot() & 0x80 != 0 {
            fired = true;
            break;
        }
    }
    assert!(fired, "timer-A underflow with IRQ enabled must assert bit 7");

    let (first, _) = system.bus.cia1.read(ICR);
    assert_ne!(first & 0x80, 0);
    let (second, _) = system.bus.cia1.read(ICR);
    assert_eq!(second, 0, "a second read without a new source must return 0");
}
