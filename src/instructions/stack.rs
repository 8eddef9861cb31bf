//! # Stack Operations
//!
//! The stack occupies page one (0x0100-0x01FF) and grows downward; a push
//! stores at 0x0100 + SP and then decrements SP, a pull increments SP first.
//!
//! - TSX: X <- SP, updating Z and N
//! - TXS: SP <- X, no flag updates
//! - PHA/PLA: push/pull the accumulator
//! - PHP/PLP: push/pull the packed status byte

use crate::{MemoryBus, CPU};

/// TSX - Transfer Stack Pointer to X.
pub(crate) fn tsx(cpu: &mut CPU) {
    cpu.x = cpu.sp;
    cpu.set_zn(cpu.x);
}

/// TXS - Transfer X to Stack Pointer. No flags are affected.
pub(crate) fn txs(cpu: &mut CPU) {
    cpu.sp = cpu.x;
}

/// PHA - Push Accumulator.
pub(crate) fn pha<M: MemoryBus>(cpu: &mut CPU, memory: &mut M) {
    cpu.push_byte(memory, cpu.a);
}

/// PHP - Push Processor Status.
///
/// The pushed byte always carries bits 4 and 5 set, regardless of the
/// stored B flag.
pub(crate) fn php<M: MemoryBus>(cpu: &mut CPU, memory: &mut M) {
    let status = cpu.status() | 0b0011_0000;
    cpu.push_byte(memory, status);
}

/// PLA - Pull Accumulator; updates Z and N.
pub(crate) fn pla<M: MemoryBus>(cpu: &mut CPU, memory: &M) {
    cpu.a = cpu.pull_byte(memory);
    cpu.set_zn(cpu.a);
}

/// PLP - Pull Processor Status.
pub(crate) fn plp<M: MemoryBus>(cpu: &mut CPU, memory: &M) {
    let status = cpu.pull_byte(memory);
    cpu.set_status(status);
}
