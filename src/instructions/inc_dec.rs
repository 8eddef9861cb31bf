//! # Increment and Decrement Instructions
//!
//! - INC, DEC: read-modify-write on a memory cell
//! - INX, INY, DEX, DEY: register forms
//!
//! All wrap at the byte boundary and update Z and N from the result.

use crate::{MemoryBus, CPU};

/// INC - Increment Memory.
pub(crate) fn inc<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, address: u16) {
    let result = memory.read(address).wrapping_add(1);
    memory.write(address, result);
    cpu.set_zn(result);
}

/// DEC - Decrement Memory.
pub(crate) fn dec<M: MemoryBus>(cpu: &mut CPU, memory: &mut M, address: u16) {
    let result = memory.read(address).wrapping_sub(1);
    memory.write(address, result);
    cpu.set_zn(result);
}

/// INX - Increment X Register.
pub(crate) fn inx(cpu: &mut CPU) {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.set_zn(cpu.x);
}

/// INY - Increment Y Register.
pub(crate) fn iny(cpu: &mut CPU) {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.set_zn(cpu.y);
}

/// DEX - Decrement X Register.
pub(crate) fn dex(cpu: &mut CPU) {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.set_zn(cpu.x);
}

/// DEY - Decrement Y Register.
pub(crate) fn dey(cpu: &mut CPU) {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.set_zn(cpu.y);
}
