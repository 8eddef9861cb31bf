//! Tests for the register transfer instructions TAX, TAY, TXA, and TYA.

use mos6502::{Memory, MemoryBus, CPU};

fn setup() -> (CPU, Memory) {
    let mut memory = Memory::new();
    let mut cpu = CPU::new();
    cpu.reset(&mut memory);
    (cpu, memory)
}

#[test]
fn test_tax() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xAA); // TAX
    cpu.set_a(0x42);

    let consumed = cpu.execute(2, &mut memory).unwrap();

    assert_eq!(cpu.x(), 0x42);
    assert_eq!(cpu.a(), 0x42); // Source unchanged
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(consumed, 2);
}

#[test]
fn test_tax_zero_flag() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xAA); // TAX with A = 0
    cpu.set_x(0x10);

    cpu.execute(2, &mut memory).unwrap();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_tay_negative_flag() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xA8); // TAY
    cpu.set_a(0x80);

    let consumed = cpu.execute(2, &mut memory).unwrap();

    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag_n());
    assert_eq!(consumed, 2);
}

#[test]
fn test_txa() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0x8A); // TXA
    cpu.set_x(0x3C);

    let consumed = cpu.execute(2, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0x3C);
    assert_eq!(cpu.x(), 0x3C);
    assert_eq!(consumed, 2);
}

#[test]
fn test_tya() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0x98); // TYA
    cpu.set_y(0xF0);

    let consumed = cpu.execute(2, &mut memory).unwrap();

    assert_eq!(cpu.a(), 0xF0);
    assert!(cpu.flag_n());
    assert_eq!(consumed, 2);
}
