use c64_core::c64_emu::banks::Bank;
use c64_core::{C64Model, System};

/// 8 KB KERNAL image that is all-RTS except for a caller-supplied reset
/// vector at $FFFC/$FFFD, and matching-size BASIC/CHAR placeholders.
/// Mirrors `tests/common::TestBus` in the teacher's CPU suites, but for the
/// whole machine: build once, load ROMs, reset, drive with `tick`/`run_cycles`.
pub fn new_system() -> System {
    System::new(C64Model::PalB, 44100, 4096)
}

/// Load a KERNAL image whose only meaningful bytes are the reset vector;
/// BASIC and CHAR stay all-RTS / all-zero placeholders.
pub fn load_kernal_with_reset_vector(system: &mut System, vector: u16) {
    let basic = [0u8; 0x2000];
    let mut kernal = [0x60u8; 0x2000]; // RTS filler
    let char_rom = [0u8; 0x1000];

    kernal[0x1FFC] = (vector & 0xFF) as u8;
    kernal[0x1FFD] = (vector >> 8) as u8;

    system.load_roms(&basic, &kernal, &char_rom).expect("fixed-size ROMs must load");
}

/// Run the 7-cycle power-on sequence to completion, leaving the CPU
/// positioned at its first opcode fetch (whatever the reset vector pointed
/// at). Call this once right after `System::reset`.
pub fn boot_to_first_fetch(system: &mut System) {
    system.step_instruction();
}

/// Write a small test program directly into low RAM (always RAM regardless
/// of PLA banking) and redirect the CPU's next fetch to it. The CPU must
/// already be sitting at an instruction boundary (e.g. via
/// `boot_to_first_fetch`) for the redirect to take effect immediately.
pub fn load_program(system: &mut System, addr: u16, program: &[u8]) {
    for (i, &byte) in program.iter().enumerate() {
        system.bus.ram.poke(addr.wrapping_add(i as u16), byte);
    }
    system.cpu.pc = addr;
}
