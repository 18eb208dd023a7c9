//! Scenario 1 (spec §8): reset-vector boot.

mod common;
use c64_core::cpu::m6510::StatusFlag;
use common::{load_kernal_with_reset_vector, new_system};

#[test]
fn reset_vector_boot() {
    let mut system = new_system();
    load_kernal_with_reset_vector(&mut system, 0xFCE2);
    system.reset();

    // Drain the 7-cycle power-on sequence; it ends the moment the CPU
    // reaches Fetch, before the first real opcode fetch happens.
    system.step_instruction();

    assert_eq!(system.cpu.pc, 0xFCE2);
    assert_ne!(system.cpu.p & StatusFlag::I as u8, 0);
    assert_ne!(system.cpu.p & StatusFlag::U as u8, 0, "reserved bit must read as 1");
    assert_eq!(system.cpu.sp, 0xFD, "three phantom stack decrements land on the well-known post-reset $FD");
}
