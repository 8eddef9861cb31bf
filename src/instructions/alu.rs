//! # Logical and Arithmetic Instructions
//!
//! - AND, EOR, ORA: bitwise operations on the accumulator; update Z and N
//! - BIT: non-destructive test of a memory operand against A
//! - ADC, SBC: binary add/subtract with carry; update C, Z, N, V
//! - CMP, CPX, CPY: register/memory comparison; update C, Z, N
//!
//! Arithmetic is always binary: the D flag is storable and testable but has
//! no effect on ADC/SBC.

use crate::{MemoryBus, CPU};

/// AND - Logical AND with the accumulator.
pub(crate) fn and<M: MemoryBus>(cpu: &mut CPU, memory: &M, address: u16) {
    cpu.a &= memory.read(address);
    cpu.set_zn(cpu.a);
}

/// EOR - Exclusive OR with the accumulator.
pub(crate) fn eor<M: MemoryBus>(cpu: &mut CPU, memory: &M, address: u16) {
    cpu.a ^= memory.read(address);
    cpu.set_zn(cpu.a);
}

/// ORA - Inclusive OR with the accumulator.
pub(crate) fn ora<M: MemoryBus>(cpu: &mut CPU, memory: &M, address: u16) {
    cpu.a |= memory.read(address);
    cpu.set_zn(cpu.a);
}

/// BIT - Bit Test.
///
/// Z is set when `A & m` is zero. V and N are both taken from bit 6 of the
/// masked result rather than from the operand byte, which diverges from
/// data-sheet behavior whenever masking clears the operand's upper bits.
pub(crate) fn bit<M: MemoryBus>(cpu: &mut CPU, memory: &M, address: u16) {
    let result = cpu.a & memory.read(address);

    cpu.flag_z = result == 0;
    cpu.flag_v = (result & 0b0100_0000) != 0;
    cpu.flag_n = (result & 0b0100_0000) != 0;
}

/// Adds `value` plus the carry flag into A, updating C, Z, N, and V.
///
/// V reports signed overflow: set when both inputs share a sign bit that
/// the result does not.
fn add_with_carry(cpu: &mut CPU, value: u8) {
    let a = cpu.a;
    let carry_in = cpu.flag_c as u16;

    let sum = a as u16 + value as u16 + carry_in;
    let result = sum as u8;

    cpu.flag_c = sum > 0xFF;
    cpu.flag_v = ((a ^ result) & (value ^ result) & 0x80) != 0;

    cpu.a = result;
    cpu.set_zn(result);
}

/// ADC - Add with Carry (binary mode).
pub(crate) fn adc<M: MemoryBus>(cpu: &mut CPU, memory: &M, address: u16) {
    let value = memory.read(address);
    add_with_carry(cpu, value);
}

/// SBC - Subtract with Carry.
///
/// Identical to ADC with the operand inverted, which carries the standard
/// borrow-as-inverted-carry semantics.
pub(crate) fn sbc<M: MemoryBus>(cpu: &mut CPU, memory: &M, address: u16) {
    let value = memory.read(address);
    add_with_carry(cpu, !value);
}

/// Compares a register against a memory operand: C when register >= m,
/// Z when equal, N from bit 7 of the difference.
fn compare(cpu: &mut CPU, register: u8, value: u8) {
    cpu.flag_c = register >= value;
    cpu.set_zn(register.wrapping_sub(value));
}

/// CMP - Compare Accumulator.
pub(crate) fn cmp<M: MemoryBus>(cpu: &mut CPU, memory: &M, address: u16) {
    let value = memory.read(address);
    let register = cpu.a;
    compare(cpu, register, value);
}

/// CPX - Compare X Register.
pub(crate) fn cpx<M: MemoryBus>(cpu: &mut CPU, memory: &M, address: u16) {
    let value = memory.read(address);
    let register = cpu.x;
    compare(cpu, register, value);
}

/// CPY - Compare Y Register.
pub(crate) fn cpy<M: MemoryBus>(cpu: &mut CPU, memory: &M, address: u16) {
    let value = memory.read(address);
    let register = cpu.y;
    compare(cpu, register, value);
}
