//! Tests for the system instructions NOP, BRK, and RTI, plus the
//! illegal-opcode fail-fast contract.

use mos6502::{ExecutionError, Memory, MemoryBus, CPU};

fn setup() -> (CPU, Memory) {
    let mut memory = Memory::new();
    let mut cpu = CPU::new();
    cpu.reset(&mut memory);
    (cpu, memory)
}

#[test]
fn test_nop() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xEA);

    let consumed = cpu.execute(2, &mut memory).unwrap();

    assert_eq!(cpu.pc(), 0xFFFD);
    assert_eq!(cpu.a(), 0x00);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(consumed, 2);
}

#[test]
fn test_brk_jumps_through_interrupt_vector() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0x00); // BRK
    memory.write(0xFFFE, 0x20); // Vector -> 0x3020
    memory.write(0xFFFF, 0x30);

    let consumed = cpu.execute(7, &mut memory).unwrap();

    assert_eq!(cpu.pc(), 0x3020);
    assert!(cpu.flag_b());
    assert_eq!(consumed, 7);
}

#[test]
fn test_brk_pushes_pc_and_status() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0x00); // BRK
    memory.write(0xFFFE, 0x20);
    memory.write(0xFFFF, 0x30);
    cpu.set_flag_c(true);

    cpu.execute(7, &mut memory).unwrap();

    // PC after the opcode fetch (0xFFFD) pushed high byte first
    assert_eq!(memory.read(0x01FF), 0xFF);
    assert_eq!(memory.read(0x01FE), 0xFD);
    // Status pushed before B is set: C plus the always-set bit 5
    assert_eq!(memory.read(0x01FD), 0b0010_0001);
    assert_eq!(cpu.sp(), 0xFC);
}

#[test]
fn test_brk_rti_round_trip() {
    let (mut cpu, mut memory) = setup();

    cpu.set_flag_c(true);
    cpu.set_flag_z(true);
    cpu.set_flag_i(true);
    cpu.set_flag_d(true);
    cpu.set_flag_b(true);
    cpu.set_flag_v(true);
    cpu.set_flag_n(true);

    cpu.set_pc(0xFFF0);
    memory.write(0xFFF0, 0x00); // BRK
    memory.write(0xFFFE, 0x20); // Vector -> 0x3020
    memory.write(0xFFFF, 0x30);
    memory.write(0x3020, 0x40); // RTI

    let consumed = cpu.execute(7 + 6, &mut memory).unwrap();

    // RTI restores the PC pushed by BRK (after its opcode fetch)
    assert_eq!(cpu.pc(), 0xFFF1);
    assert_eq!(cpu.sp(), 0xFF);

    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
    assert!(cpu.flag_i());
    assert!(cpu.flag_d());
    assert!(cpu.flag_b());
    assert!(cpu.flag_v());
    assert!(cpu.flag_n());
    assert_eq!(consumed, 13);
}

#[test]
fn test_illegal_opcode_is_fatal() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0x02); // Undocumented slot

    match cpu.execute(2, &mut memory) {
        Err(ExecutionError::IllegalOpcode(0x02)) => {}
        other => panic!("Expected IllegalOpcode(0x02), got {:?}", other),
    }
}

#[test]
fn test_illegal_opcode_display_carries_byte() {
    let error = ExecutionError::IllegalOpcode(0xAB);
    assert_eq!(error.to_string(), "Illegal opcode 0xAB");
}

#[test]
fn test_illegal_opcode_mid_program() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xE8); // INX
    memory.write(0xFFFD, 0x12); // Undocumented slot

    let result = cpu.execute(4, &mut memory);

    // The leading instruction still ran before the fault
    assert_eq!(cpu.x(), 1);
    assert_eq!(result, Err(ExecutionError::IllegalOpcode(0x12)));
}
