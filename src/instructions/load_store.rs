//! # Load and Store Instructions
//!
//! - LDA, LDX, LDY: load a register from memory; update Z and N
//! - STA, STX, STY: store a register to memory; no flag updates

use crate::{MemoryBus, CPU};

/// LDA - Load Accumulator.
pub(crate) fn lda<M: MemoryBus>(cpu: &mut CPU, memory: &M, address: u16) {
    cpu.a = memory.read(address);
    cpu.set_zn(cpu.a);
}

/// LDX - Load X Register.
pub(crate) fn ldx<M: MemoryBus>(cpu: &mut CPU, memory: &M, address: u16) {
    cpu.x = memory.read(address);
    cpu.set_zn(cpu.x);
}

/// LDY - Load Y Register.
pub(crate) fn ldy<M: MemoryBus>(cpu: &mut CPU, memory: &M, address: u16) {
    cpu.y = memory.read(address);
    cpu.set_zn(cpu.y);
}

/// STA - Store Accumulator.
pub(crate) fn sta<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, address: u16) {
    memory.write(address, cpu.a);
}

/// STX - Store X Register.
pub(crate) fn stx<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, address: u16) {
    memory.write(address, cpu.x);
}

/// STY - Store Y Register.
pub(crate) fn sty<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, address: u16) {
    memory.write(address, cpu.y);
}
