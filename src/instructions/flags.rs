//! # Status Flag Instructions
//!
//! CLC, SEC, CLI, SEI, CLV, CLD, SED set or clear a single flag. There is
//! no SEV on the 6502; overflow can only be cleared.

use crate::CPU;

/// CLC - Clear Carry Flag.
pub(crate) fn clc(cpu: &mut CPU) {
    cpu.flag_c = false;
}

/// SEC - Set Carry Flag.
pub(crate) fn sec(cpu: &mut CPU) {
    cpu.flag_c = true;
}

/// CLI - Clear Interrupt Disable.
pub(crate) fn cli(cpu: &mut CPU) {
    cpu.flag_i = false;
}

/// SEI - Set Interrupt Disable.
pub(crate) fn sei(cpu: &mut CPU) {
    cpu.flag_i = true;
}

/// CLV - Clear Overflow Flag.
pub(crate) fn clv(cpu: &mut CPU) {
    cpu.flag_v = false;
}

/// CLD - Clear Decimal Mode.
pub(crate) fn cld(cpu: &mut CPU) {
    cpu.flag_d = false;
}

/// SED - Set Decimal Mode. The flag is stored but arithmetic stays binary.
pub(crate) fn sed(cpu: &mut CPU) {
    cpu.flag_d = true;
}
