//! # Shift and Rotate Instructions
//!
//! ASL, LSR, ROL, ROR in accumulator and memory (read-modify-write) forms.
//! All update Z and N from the result and load C with the bit shifted out;
//! the rotates feed the old carry into the vacated bit.

use crate::addressing::AddressingMode;
use crate::{MemoryBus, CPU};

/// Reads the shift operand: the accumulator for the accumulator form, the
/// addressed memory cell otherwise.
fn read_operand<M: MemoryBus>(cpu: &CPU, memory: &M, mode: AddressingMode, address: u16) -> u8 {
    if mode == AddressingMode::Accumulator {
        cpu.a
    } else {
        memory.read(address)
    }
}

/// Writes the shift result back to wherever the operand came from.
fn write_operand<M: MemoryBus>(
    cpu: &mut CPU,
    memory: &mut M,
    mode: AddressingMode,
    address: u16,
    value: u8,
) {
    if mode == AddressingMode::Accumulator {
        cpu.a = value;
    } else {
        memory.write(address, value);
    }
}

/// ASL - Arithmetic Shift Left. Bit 7 moves into C, bit 0 becomes 0.
pub(crate) fn asl<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode, address: u16) {
    let value = read_operand(cpu, memory, mode, address);

    cpu.flag_c = (value & 0x80) != 0;
    let result = value << 1;

    write_operand(cpu, memory, mode, address, result);
    cpu.set_zn(result);
}

/// LSR - Logical Shift Right. Bit 0 moves into C, bit 7 becomes 0.
pub(crate) fn lsr<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode, address: u16) {
    let value = read_operand(cpu, memory, mode, address);

    cpu.flag_c = (value & 0x01) != 0;
    let result = value >> 1;

    write_operand(cpu, memory, mode, address, result);
    cpu.set_zn(result);
}

/// ROL - Rotate Left through carry. Bit 7 moves into C, the old carry
/// becomes bit 0.
pub(crate) fn rol<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode, address: u16) {
    let value = read_operand(cpu, memory, mode, address);
    let carry_in = cpu.flag_c as u8;

    cpu.flag_c = (value & 0x80) != 0;
    let result = (value << 1) | carry_in;

    write_operand(cpu, memory, mode, address, result);
    cpu.set_zn(result);
}

/// ROR - Rotate Right through carry. Bit 0 moves into C, the old carry
/// becomes bit 7.
pub(crate) fn ror<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, mode: AddressingMode, address: u16) {
    let value = read_operand(cpu, memory, mode, address);
    let carry_in = cpu.flag_c as u8;

    cpu.flag_c = (value & 0x01) != 0;
    let result = (value >> 1) | (carry_in << 7);

    write_operand(cpu, memory, mode, address, result);
    cpu.set_zn(result);
}
