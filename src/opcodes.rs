//! # Opcode Metadata Table
//!
//! The 256-entry dispatch table that serves as the single source of truth
//! for instruction decoding: every opcode byte maps to an addressing mode,
//! an operation, and a base cycle count.
//!
//! The table covers the 151 documented NMOS 6502 opcodes. The remaining 105
//! slots hold the illegal marker; fetching one of them aborts execution with
//! a diagnostic carrying the opcode byte.
//!
//! Base cycle counts exclude the dynamic penalties (page crossing on the
//! penalised indexed modes, taken branches); those are charged by the
//! execution loop. Stores and read-modify-write instructions use the
//! fixed-cycle addressing variants with the indexing cycle already included.

use crate::addressing::AddressingMode;

/// Operation selector for the dispatch table.
///
/// One variant per documented instruction mnemonic, plus `Illegal` for the
/// 105 undocumented slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mnemonic {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Undocumented opcode slot.
    Illegal,
}

/// Metadata for a single opcode byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// The operation this opcode performs.
    pub mnemonic: Mnemonic,

    /// How the operand bytes are interpreted.
    pub mode: AddressingMode,

    /// Base cycle cost before dynamic penalties. Illegal slots carry 0.
    pub base_cycles: u8,
}

const ILLEGAL: OpcodeMetadata = OpcodeMetadata {
    mnemonic: Mnemonic::Illegal,
    mode: AddressingMode::Implied,
    base_cycles: 0,
};

const fn entry(mnemonic: Mnemonic, mode: AddressingMode, base_cycles: u8) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic,
        mode,
        base_cycles,
    }
}

/// Complete 256-entry opcode table indexed by the opcode byte.
///
/// Every slot starts as the illegal marker and the documented opcodes
/// overwrite theirs, so the undocumented gaps can never fall through to a
/// stale entry.
///
/// # Examples
///
/// ```
/// use mos6502::{AddressingMode, Mnemonic, OPCODE_TABLE};
///
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, Mnemonic::Lda);
/// assert_eq!(lda_imm.mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
///
/// assert_eq!(OPCODE_TABLE[0x02].mnemonic, Mnemonic::Illegal);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = {
    use crate::addressing::AddressingMode::*;
    use Mnemonic::*;

    let mut table = [ILLEGAL; 256];

    // Load
    table[0xA9] = entry(Lda, Immediate, 2);
    table[0xA5] = entry(Lda, ZeroPage, 3);
    table[0xB5] = entry(Lda, ZeroPageX, 4);
    table[0xAD] = entry(Lda, Absolute, 4);
    table[0xBD] = entry(Lda, AbsoluteX, 4);
    table[0xB9] = entry(Lda, AbsoluteY, 4);
    table[0xA1] = entry(Lda, IndirectX, 6);
    table[0xB1] = entry(Lda, IndirectY, 5);

    table[0xA2] = entry(Ldx, Immediate, 2);
    table[0xA6] = entry(Ldx, ZeroPage, 3);
    table[0xB6] = entry(Ldx, ZeroPageY, 4);
    table[0xAE] = entry(Ldx, Absolute, 4);
    table[0xBE] = entry(Ldx, AbsoluteY, 4);

    table[0xA0] = entry(Ldy, Immediate, 2);
    table[0xA4] = entry(Ldy, ZeroPage, 3);
    table[0xB4] = entry(Ldy, ZeroPageX, 4);
    table[0xAC] = entry(Ldy, Absolute, 4);
    table[0xBC] = entry(Ldy, AbsoluteX, 4);

    // Store
    table[0x85] = entry(Sta, ZeroPage, 3);
    table[0x95] = entry(Sta, ZeroPageX, 4);
    table[0x8D] = entry(Sta, Absolute, 4);
    table[0x9D] = entry(Sta, AbsoluteXFixed, 5);
    table[0x99] = entry(Sta, AbsoluteYFixed, 5);
    table[0x81] = entry(Sta, IndirectX, 6);
    table[0x91] = entry(Sta, IndirectYFixed, 6);

    table[0x86] = entry(Stx, ZeroPage, 3);
    table[0x96] = entry(Stx, ZeroPageY, 4);
    table[0x8E] = entry(Stx, Absolute, 4);

    table[0x84] = entry(Sty, ZeroPage, 3);
    table[0x94] = entry(Sty, ZeroPageX, 4);
    table[0x8C] = entry(Sty, Absolute, 4);

    // Register transfers
    table[0xAA] = entry(Tax, Implied, 2);
    table[0xA8] = entry(Tay, Implied, 2);
    table[0x8A] = entry(Txa, Implied, 2);
    table[0x98] = entry(Tya, Implied, 2);

    // Stack
    table[0xBA] = entry(Tsx, Implied, 2);
    table[0x9A] = entry(Txs, Implied, 2);
    table[0x48] = entry(Pha, Implied, 3);
    table[0x08] = entry(Php, Implied, 3);
    table[0x68] = entry(Pla, Implied, 4);
    table[0x28] = entry(Plp, Implied, 4);

    // Logical
    table[0x29] = entry(And, Immediate, 2);
    table[0x25] = entry(And, ZeroPage, 3);
    table[0x35] = entry(And, ZeroPageX, 4);
    table[0x2D] = entry(And, Absolute, 4);
    table[0x3D] = entry(And, AbsoluteX, 4);
    table[0x39] = entry(And, AbsoluteY, 4);
    table[0x21] = entry(And, IndirectX, 6);
    table[0x31] = entry(And, IndirectY, 5);

    table[0x49] = entry(Eor, Immediate, 2);
    table[0x45] = entry(Eor, ZeroPage, 3);
    table[0x55] = entry(Eor, ZeroPageX, 4);
    table[0x4D] = entry(Eor, Absolute, 4);
    table[0x5D] = entry(Eor, AbsoluteX, 4);
    table[0x59] = entry(Eor, AbsoluteY, 4);
    table[0x41] = entry(Eor, IndirectX, 6);
    table[0x51] = entry(Eor, IndirectY, 5);

    table[0x09] = entry(Ora, Immediate, 2);
    table[0x05] = entry(Ora, ZeroPage, 3);
    table[0x15] = entry(Ora, ZeroPageX, 4);
    table[0x0D] = entry(Ora, Absolute, 4);
    table[0x1D] = entry(Ora, AbsoluteX, 4);
    table[0x19] = entry(Ora, AbsoluteY, 4);
    table[0x01] = entry(Ora, IndirectX, 6);
    table[0x11] = entry(Ora, IndirectY, 5);

    table[0x24] = entry(Bit, ZeroPage, 3);
    table[0x2C] = entry(Bit, Absolute, 4);

    // Arithmetic
    table[0x69] = entry(Adc, Immediate, 2);
    table[0x65] = entry(Adc, ZeroPage, 3);
    table[0x75] = entry(Adc, ZeroPageX, 4);
    table[0x6D] = entry(Adc, Absolute, 4);
    table[0x7D] = entry(Adc, AbsoluteX, 4);
    table[0x79] = entry(Adc, AbsoluteY, 4);
    table[0x61] = entry(Adc, IndirectX, 6);
    table[0x71] = entry(Adc, IndirectY, 5);

    table[0xE9] = entry(Sbc, Immediate, 2);
    table[0xE5] = entry(Sbc, ZeroPage, 3);
    table[0xF5] = entry(Sbc, ZeroPageX, 4);
    table[0xED] = entry(Sbc, Absolute, 4);
    table[0xFD] = entry(Sbc, AbsoluteX, 4);
    table[0xF9] = entry(Sbc, AbsoluteY, 4);
    table[0xE1] = entry(Sbc, IndirectX, 6);
    table[0xF1] = entry(Sbc, IndirectY, 5);

    table[0xC9] = entry(Cmp, Immediate, 2);
    table[0xC5] = entry(Cmp, ZeroPage, 3);
    table[0xD5] = entry(Cmp, ZeroPageX, 4);
    table[0xCD] = entry(Cmp, Absolute, 4);
    table[0xDD] = entry(Cmp, AbsoluteX, 4);
    table[0xD9] = entry(Cmp, AbsoluteY, 4);
    table[0xC1] = entry(Cmp, IndirectX, 6);
    table[0xD1] = entry(Cmp, IndirectY, 5);

    table[0xE0] = entry(Cpx, Immediate, 2);
    table[0xE4] = entry(Cpx, ZeroPage, 3);
    table[0xEC] = entry(Cpx, Absolute, 4);

    table[0xC0] = entry(Cpy, Immediate, 2);
    table[0xC4] = entry(Cpy, ZeroPage, 3);
    table[0xCC] = entry(Cpy, Absolute, 4);

    // Increments and decrements
    table[0xE6] = entry(Inc, ZeroPage, 5);
    table[0xF6] = entry(Inc, ZeroPageX, 6);
    table[0xEE] = entry(Inc, Absolute, 6);
    table[0xFE] = entry(Inc, AbsoluteXFixed, 7);
    table[0xE8] = entry(Inx, Implied, 2);
    table[0xC8] = entry(Iny, Implied, 2);

    table[0xC6] = entry(Dec, ZeroPage, 5);
    table[0xD6] = entry(Dec, ZeroPageX, 6);
    table[0xCE] = entry(Dec, Absolute, 6);
    table[0xDE] = entry(Dec, AbsoluteXFixed, 7);
    table[0xCA] = entry(Dex, Implied, 2);
    table[0x88] = entry(Dey, Implied, 2);

    // Shifts and rotates
    table[0x0A] = entry(Asl, Accumulator, 2);
    table[0x06] = entry(Asl, ZeroPage, 5);
    table[0x16] = entry(Asl, ZeroPageX, 6);
    table[0x0E] = entry(Asl, Absolute, 6);
    table[0x1E] = entry(Asl, AbsoluteXFixed, 7);

    table[0x4A] = entry(Lsr, Accumulator, 2);
    table[0x46] = entry(Lsr, ZeroPage, 5);
    table[0x56] = entry(Lsr, ZeroPageX, 6);
    table[0x4E] = entry(Lsr, Absolute, 6);
    table[0x5E] = entry(Lsr, AbsoluteXFixed, 7);

    table[0x2A] = entry(Rol, Accumulator, 2);
    table[0x26] = entry(Rol, ZeroPage, 5);
    table[0x36] = entry(Rol, ZeroPageX, 6);
    table[0x2E] = entry(Rol, Absolute, 6);
    table[0x3E] = entry(Rol, AbsoluteXFixed, 7);

    table[0x6A] = entry(Ror, Accumulator, 2);
    table[0x66] = entry(Ror, ZeroPage, 5);
    table[0x76] = entry(Ror, ZeroPageX, 6);
    table[0x6E] = entry(Ror, Absolute, 6);
    table[0x7E] = entry(Ror, AbsoluteXFixed, 7);

    // Jumps and calls
    table[0x4C] = entry(Jmp, Absolute, 3);
    table[0x6C] = entry(Jmp, Indirect, 5);
    table[0x20] = entry(Jsr, Absolute, 6);
    table[0x60] = entry(Rts, Implied, 6);

    // Branches
    table[0x10] = entry(Bpl, Relative, 2);
    table[0x30] = entry(Bmi, Relative, 2);
    table[0x50] = entry(Bvc, Relative, 2);
    table[0x70] = entry(Bvs, Relative, 2);
    table[0x90] = entry(Bcc, Relative, 2);
    table[0xB0] = entry(Bcs, Relative, 2);
    table[0xD0] = entry(Bne, Relative, 2);
    table[0xF0] = entry(Beq, Relative, 2);

    // Status flags
    table[0x18] = entry(Clc, Implied, 2);
    table[0x38] = entry(Sec, Implied, 2);
    table[0x58] = entry(Cli, Implied, 2);
    table[0x78] = entry(Sei, Implied, 2);
    table[0xB8] = entry(Clv, Implied, 2);
    table[0xD8] = entry(Cld, Implied, 2);
    table[0xF8] = entry(Sed, Implied, 2);

    // System
    table[0x00] = entry(Brk, Implied, 7);
    table[0xEA] = entry(Nop, Implied, 2);
    table[0x40] = entry(Rti, Implied, 6);

    table
};
