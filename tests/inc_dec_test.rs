//! Tests for the increment/decrement instructions INC, DEC, INX, INY,
//! DEX, and DEY.

use mos6502::{Memory, MemoryBus, CPU};

fn setup() -> (CPU, Memory) {
    let mut memory = Memory::new();
    let mut cpu = CPU::new();
    cpu.reset(&mut memory);
    (cpu, memory)
}

#[test]
fn test_inc_zero_page() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xE6); // INC $42
    memory.write(0xFFFD, 0x42);
    memory.write(0x0042, 0x41);

    let consumed = cpu.execute(5, &mut memory).unwrap();

    assert_eq!(memory.read(0x0042), 0x42);
    assert!(!cpu.flag_z());
    assert!(!cpu.flag_n());
    assert_eq!(consumed, 5);
}

#[test]
fn test_inc_wraps_to_zero() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xE6); // INC $42 with the cell at 0xFF
    memory.write(0xFFFD, 0x42);
    memory.write(0x0042, 0xFF);

    cpu.execute(5, &mut memory).unwrap();

    assert_eq!(memory.read(0x0042), 0x00);
    assert!(cpu.flag_z());
    assert!(!cpu.flag_n());
}

#[test]
fn test_inc_absolute() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xEE); // INC $1234
    memory.write(0xFFFD, 0x34);
    memory.write(0xFFFE, 0x12);
    memory.write(0x1234, 0x7F);

    let consumed = cpu.execute(6, &mut memory).unwrap();

    assert_eq!(memory.read(0x1234), 0x80);
    assert!(cpu.flag_n());
    assert_eq!(consumed, 6);
}

#[test]
fn test_inc_absolute_x_fixed_cycles() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xFE); // INC $12FF,X crosses a page, still 7 cycles
    memory.write(0xFFFD, 0xFF);
    memory.write(0xFFFE, 0x12);
    memory.write(0x1304, 0x10);
    cpu.set_x(0x05);

    let consumed = cpu.execute(7, &mut memory).unwrap();

    assert_eq!(memory.read(0x1304), 0x11);
    assert_eq!(consumed, 7);
}

#[test]
fn test_dec_zero_page() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xC6); // DEC $42
    memory.write(0xFFFD, 0x42);
    memory.write(0x0042, 0x43);

    let consumed = cpu.execute(5, &mut memory).unwrap();

    assert_eq!(memory.read(0x0042), 0x42);
    assert_eq!(consumed, 5);
}

#[test]
fn test_dec_wraps_below_zero() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xC6); // DEC $42 with the cell at 0x00
    memory.write(0xFFFD, 0x42);
    memory.write(0x0042, 0x00);

    cpu.execute(5, &mut memory).unwrap();

    assert_eq!(memory.read(0x0042), 0xFF);
    assert!(cpu.flag_n());
    assert!(!cpu.flag_z());
}

#[test]
fn test_dec_to_zero_sets_zero_flag() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xC6); // DEC $42 with the cell at 0x01
    memory.write(0xFFFD, 0x42);
    memory.write(0x0042, 0x01);

    cpu.execute(5, &mut memory).unwrap();

    assert_eq!(memory.read(0x0042), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_inx() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xE8); // INX
    cpu.set_x(0x41);

    let consumed = cpu.execute(2, &mut memory).unwrap();

    assert_eq!(cpu.x(), 0x42);
    assert_eq!(consumed, 2);
}

#[test]
fn test_inx_wraps() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xE8); // INX from 0xFF
    cpu.set_x(0xFF);

    cpu.execute(2, &mut memory).unwrap();

    assert_eq!(cpu.x(), 0x00);
    assert!(cpu.flag_z());
}

#[test]
fn test_iny() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xC8); // INY
    cpu.set_y(0x7F);

    let consumed = cpu.execute(2, &mut memory).unwrap();

    assert_eq!(cpu.y(), 0x80);
    assert!(cpu.flag_n());
    assert_eq!(consumed, 2);
}

#[test]
fn test_dex_wraps() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0xCA); // DEX from 0x00
    cpu.set_x(0x00);

    let consumed = cpu.execute(2, &mut memory).unwrap();

    assert_eq!(cpu.x(), 0xFF);
    assert!(cpu.flag_n());
    assert_eq!(consumed, 2);
}

#[test]
fn test_dey() {
    let (mut cpu, mut memory) = setup();

    memory.write(0xFFFC, 0x88); // DEY
    cpu.set_y(0x01);

    let consumed = cpu.execute(2, &mut memory).unwrap();

    assert_eq!(cpu.y(), 0x00);
    assert!(cpu.flag_z());
    assert_eq!(consumed, 2);
}
