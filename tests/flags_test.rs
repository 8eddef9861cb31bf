//! Tests for the status flag instructions CLC, SEC, CLI, SEI, CLV, CLD,
//! and SED. Each costs 2 cycles and touches exactly one flag.

use mos6502::{Memory, MemoryBus, CPU};

fn setup() -> (CPU, Memory) {
    let mut memory = Memory::new();
    let mut cpu = CPU::new();
    cpu.reset(&mut memory);
    (cpu, memory)
}

#[test]
fn test_clc() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0x18);
    cpu.set_flag_c(true);

    let consumed = cpu.execute(2, &mut memory).unwrap();

    assert!(!cpu.flag_c());
    assert_eq!(consumed, 2);
}

#[test]
fn test_sec() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0x38);

    let consumed = cpu.execute(2, &mut memory).unwrap();

    assert!(cpu.flag_c());
    assert_eq!(consumed, 2);
}

#[test]
fn test_cli() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0x58);
    cpu.set_flag_i(true);

    cpu.execute(2, &mut memory).unwrap();

    assert!(!cpu.flag_i());
}

#[test]
fn test_sei() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0x78);

    cpu.execute(2, &mut memory).unwrap();

    assert!(cpu.flag_i());
}

#[test]
fn test_clv() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xB8);
    cpu.set_flag_v(true);

    cpu.execute(2, &mut memory).unwrap();

    assert!(!cpu.flag_v());
}

#[test]
fn test_cld() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xD8);
    cpu.set_flag_d(true);

    cpu.execute(2, &mut memory).unwrap();

    assert!(!cpu.flag_d());
}

#[test]
fn test_sed() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xF8);

    cpu.execute(2, &mut memory).unwrap();

    assert!(cpu.flag_d());
}

#[test]
fn test_flag_ops_leave_other_flags_alone() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0x38); // SEC
    cpu.set_flag_z(true);
    cpu.set_flag_n(true);
    cpu.set_flag_v(true);

    cpu.execute(2, &mut memory).unwrap();

    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(cpu.flag_n());
    assert!(cpu.flag_v());
}
