//! # Addressing Modes
//!
//! This module defines the addressing modes of the 6502 plus the fixed-cycle
//! variants used by stores and read-modify-write instructions.
//!
//! On real hardware, stores and read-modify-write instructions always spend
//! the indexing cycle (a dummy read), so their opcode table entries carry the
//! cost in the base cycle count and use the `*Fixed` variants, which never
//! report a page crossing.

/// 6502 addressing mode enumeration.
///
/// The addressing mode determines how many operand bytes follow an opcode
/// and how the effective address is computed from them.
///
/// # Operand sizes
///
/// - **0 bytes**: Implied, Accumulator
/// - **1 byte**: Immediate, Relative, ZeroPage, ZeroPageX, ZeroPageY,
///   IndirectX, IndirectY, IndirectYFixed
/// - **2 bytes**: Absolute, AbsoluteX(Fixed), AbsoluteY(Fixed), Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressingMode {
    /// No operand; the operation is implied by the instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implied,

    /// The operation targets the accumulator register.
    ///
    /// Examples: ASL A, LSR A, ROL A
    Accumulator,

    /// 8-bit constant embedded in the instruction. The resolver yields the
    /// address of the operand byte itself.
    ///
    /// Example: LDA #$10
    Immediate,

    /// Signed 8-bit branch displacement. The resolver yields the raw
    /// zero-extended displacement byte; sign interpretation is left to the
    /// branch operation.
    ///
    /// Example: BEQ label
    Relative,

    /// 8-bit address within page zero (0x0000-0x00FF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wrapping within page zero.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within page zero.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Full little-endian 16-bit address.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X. Crossing a page boundary costs one
    /// extra cycle.
    AbsoluteX,

    /// 16-bit address indexed by X with the indexing cycle baked into the
    /// base cost; never reports a page crossing. Used by STA and
    /// read-modify-write instructions.
    AbsoluteXFixed,

    /// 16-bit address indexed by Y. Crossing a page boundary costs one
    /// extra cycle.
    AbsoluteY,

    /// 16-bit address indexed by Y, fixed-cost variant used by STA.
    AbsoluteYFixed,

    /// Indirect jump through a 16-bit pointer; JMP only.
    ///
    /// A pointer whose low byte is 0xFF reads its target high byte from the
    /// start of the same page rather than the next one, reproducing the
    /// NMOS silicon defect.
    Indirect,

    /// Indexed indirect: the operand plus X selects a zero-page location
    /// holding the 16-bit target; both pointer bytes wrap within page zero.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: the operand selects a zero-page pointer, then Y is
    /// added to the loaded word. Crossing a page boundary costs one extra
    /// cycle.
    ///
    /// Example: LDA ($40),Y
    IndirectY,

    /// Indirect indexed, fixed-cost variant used by STA.
    IndirectYFixed,
}
