//! CPU scenarios from spec §8: the JMP-indirect page-crossing bug, decimal
//! ADC, and the PHP/PLP and JSR/RTS invariants.

mod common;
use c64_core::cpu::m6510::StatusFlag;
use common::{boot_to_first_fetch, load_kernal_with_reset_vector, load_program, new_system};

fn booted() -> c64_core::System {
    let mut system = new_system();
    load_kernal_with_reset_vector(&mut system, 0x0800);
    system.reset();
    boot_to_first_fetch(&mut system);
    system
}

#[test]
fn jmp_indirect_page_boundary_bug() {
    let mut system = booted();
    // $10FF = $34, $1000 = $12 (NOT $1100) — the famous 6502 JMP ($xxFF) bug:
    // the high byte is fetched from the start of the same page, not the next.
    load_program(&mut system, 0x0800, &[0x6C, 0xFF, 0x10]);
    system.bus.ram.poke(0x10FF, 0x34);
    system.bus.ram.poke(0x1000, 0x12);
    system.bus.ram.poke(0x1100, 0x99); // decoy: must NOT be read as the high byte

    system.step_instruction();

    assert_eq!(system.cpu.pc, 0x1234);
}

#[test]
fn decimal_mode_adc() {
    let mut system = booted();
    // SED; LDA #$15; CLC; ADC #$27
    load_program(&mut system, 0x0800, &[0xF8, 0xA9, 0x15, 0x18, 0x69, 0x27]);

    system.step_instruction(); // SED
    system.step_instruction(); // LDA #$15
    system.step_instruction(); // CLC
    system.step_instruction(); // ADC #$27

    assert_eq!(system.cpu.a, 0x42);
    assert_eq!(system.cpu.p & StatusFlag::C as u8, 0);
    assert_eq!(system.cpu.p & StatusFlag::Z as u8, 0);
    assert_eq!(system.cpu.p & StatusFlag::N as u8, 0);
}

#[test]
fn php_plp_round_trip_preserves_a_and_flags() {
    let mut system = booted();
    // LDA #$99 (sets N); SEC; PHP; CLC; LDA #$00 (sets Z, clears N); PLP
    load_program(
        &mut system,
        0x0800,
        &[0xA9, 0x99, 0x38, 0x08, 0x18, 0xA9, 0x00, 0x28],
    );

    system.step_instruction(); // LDA #$99
    system.step_instruction(); // SEC
    system.step_instruction(); // PHP
    let p_before = system.cpu.p;
    let a_before = system.cpu.a;
    system.step_instruction(); // CLC
    system.step_instruction(); // LDA #$00
    system.step_instruction(); // PLP

    const IGNORED: u8 = StatusFlag::B as u8 | StatusFlag::U as u8;
    assert_eq!(system.cpu.p | IGNORED, p_before | IGNORED);
    assert_eq!(system.cpu.a, a_before, "PLP must not touch the accumulator");
}

#[test]
fn jsr_rts_returns_to_operand_plus_one() {
    let mut system = booted();
    // JSR $0900; subroutine at $0900 just RTS.
    load_program(&mut system, 0x0800, &[0x20, 0x00, 0x09]);
    system.bus.ram.poke(0x0900, 0x60); // RTS

    system.step_instruction(); // JSR
    assert_eq!(system.cpu.pc, 0x0900);
    system.step_instruction(); // RTS

    assert_eq!(system.cpu.pc, 0x0803, "RTS returns to (JSR operand) + 1");
}
