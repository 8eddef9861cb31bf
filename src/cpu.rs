//! # CPU State and Execution
//!
//! The CPU struct holds the architectural state of the 6502 and drives the
//! fetch-decode-execute loop against a caller-supplied memory bus.
//!
//! ## Execution model
//!
//! - [`CPU::execute`] runs instructions until a cycle budget is exhausted
//!   and returns the cycles actually consumed.
//! - [`CPU::step`] executes exactly one instruction and returns its cost.
//!
//! Each instruction flows through three stages: the opcode byte is fetched
//! at PC, its addressing mode resolver computes an effective address
//! (possibly flagging a page crossing), and the operation handler mutates
//! registers, flags, and memory. The dispatcher then charges the base cycle
//! count from the opcode table plus one cycle for each transient penalty
//! flag, clearing both before the next fetch.

use crate::addressing::AddressingMode;
use crate::opcodes::{Mnemonic, OPCODE_TABLE};
use crate::{ExecutionError, MemoryBus};

/// 6502 CPU state.
///
/// Contains registers, status flags, and the two transient penalty flags
/// used to communicate cycle costs between resolvers, operations, and the
/// dispatcher. The CPU does not own its memory: every reset/execute call
/// takes the bus by reference.
///
/// # Examples
///
/// ```
/// use mos6502::{CPU, Memory, MemoryBus};
///
/// let mut memory = Memory::new();
/// let mut cpu = CPU::new();
/// cpu.reset(&mut memory);
///
/// assert_eq!(cpu.pc(), 0xFFFC);
/// assert_eq!(cpu.sp(), 0xFF);
/// assert_eq!(cpu.a(), 0x00);
/// ```
pub struct CPU {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of the next byte to fetch)
    pub(crate) pc: u16,

    /// Stack pointer; the stack lives at 0x0100 + SP and grows downward
    pub(crate) sp: u8,

    /// Carry flag
    pub(crate) flag_c: bool,

    /// Zero flag
    pub(crate) flag_z: bool,

    /// Interrupt disable flag
    pub(crate) flag_i: bool,

    /// Decimal mode flag (settable but arithmetic stays binary)
    pub(crate) flag_d: bool,

    /// Break flag
    pub(crate) flag_b: bool,

    /// Overflow flag
    pub(crate) flag_v: bool,

    /// Negative flag
    pub(crate) flag_n: bool,

    /// Set by the penalised indexed resolvers when the effective address
    /// lands on a different page than its base; worth one cycle
    pub(crate) page_crossed: bool,

    /// Set by taken branches; worth one cycle
    pub(crate) extra_cycle: bool,
}

impl CPU {
    /// Creates a CPU in the post-reset register state.
    ///
    /// Memory is not touched here; call [`CPU::reset`] to clear it together
    /// with the processor state.
    pub fn new() -> Self {
        Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0xFFFC,
            sp: 0xFF,
            flag_c: false,
            flag_z: false,
            flag_i: false,
            flag_d: false,
            flag_b: false,
            flag_v: false,
            flag_n: false,
            page_crossed: false,
            extra_cycle: false,
        }
    }

    /// Resets the processor and zeroes the supplied memory.
    ///
    /// Reset is a state-clearing convention, not a vector fetch: PC is set
    /// to 0xFFFC itself, SP to 0xFF, the registers and all status flags to
    /// zero. The first fetch therefore reads from 0xFFFC, which holds zero
    /// unless the caller loads program bytes there afterwards.
    ///
    /// Resetting twice in a row leaves the same state as resetting once.
    pub fn reset<M: MemoryBus>(&mut self, memory: &mut M) {
        self.pc = 0xFFFC;
        self.sp = 0xFF;

        self.a = 0;
        self.x = 0;
        self.y = 0;

        self.flag_c = false;
        self.flag_z = false;
        self.flag_i = false;
        self.flag_d = false;
        self.flag_b = false;
        self.flag_v = false;
        self.flag_n = false;

        self.page_crossed = false;
        self.extra_cycle = false;

        memory.initialize();
    }

    /// Runs instructions until the cycle budget is exhausted.
    ///
    /// Cycle accounting is post-hoc: whatever instruction is mid-stream
    /// when the budget runs out completes, so the returned consumption may
    /// exceed `budget` by up to the cost of one instruction. Callers must
    /// request at least the cost of the longest single instruction.
    ///
    /// # Returns
    ///
    /// - `Ok(cycles_consumed)` once the budget is spent
    /// - `Err(ExecutionError::IllegalOpcode(_))` if an undocumented opcode
    ///   byte is fetched; execution halts at that point
    ///
    /// # Examples
    ///
    /// ```
    /// use mos6502::{CPU, Memory, MemoryBus};
    ///
    /// let mut memory = Memory::new();
    /// let mut cpu = CPU::new();
    /// cpu.reset(&mut memory);
    ///
    /// memory.write(0xFFFC, 0xE8); // INX
    /// memory.write(0xFFFD, 0xE8); // INX
    ///
    /// let consumed = cpu.execute(4, &mut memory).unwrap();
    /// assert_eq!(consumed, 4);
    /// assert_eq!(cpu.x(), 2);
    /// ```
    pub fn execute<M: MemoryBus>(
        &mut self,
        budget: u32,
        memory: &mut M,
    ) -> Result<u32, ExecutionError> {
        // Signed so the final instruction may overshoot without wrapping.
        let mut remaining = budget as i64;

        while remaining > 0 {
            remaining -= self.step(memory)? as i64;
        }

        Ok((budget as i64 - remaining) as u32)
    }

    /// Executes a single instruction and returns its cycle cost, including
    /// any page-crossing or branch penalties.
    pub fn step<M: MemoryBus>(&mut self, memory: &mut M) -> Result<u32, ExecutionError> {
        let opcode = self.fetch_byte(memory);
        let metadata = OPCODE_TABLE[opcode as usize];

        let address = self.resolve(metadata.mode, memory);
        self.dispatch(metadata.mnemonic, metadata.mode, opcode, address, memory)?;

        let mut cycles = metadata.base_cycles as u32;
        if self.extra_cycle {
            cycles += 1;
        }
        if self.page_crossed {
            cycles += 1;
        }

        // Penalty flags never leak between instructions.
        self.extra_cycle = false;
        self.page_crossed = false;

        Ok(cycles)
    }

    fn dispatch<M: MemoryBus>(
        &mut self,
        mnemonic: Mnemonic,
        mode: AddressingMode,
        opcode: u8,
        address: u16,
        memory: &mut M,
    ) -> Result<(), ExecutionError> {
        use crate::instructions::*;

        match mnemonic {
            // Load/store
            Mnemonic::Lda => load_store::lda(self, memory, address),
            Mnemonic::Ldx => load_store::ldx(self, memory, address),
            Mnemonic::Ldy => load_store::ldy(self, memory, address),
            Mnemonic::Sta => load_store::sta(self, memory, address),
            Mnemonic::Stx => load_store::stx(self, memory, address),
            Mnemonic::Sty => load_store::sty(self, memory, address),

            // Register transfers
            Mnemonic::Tax => transfer::tax(self),
            Mnemonic::Tay => transfer::tay(self),
            Mnemonic::Txa => transfer::txa(self),
            Mnemonic::Tya => transfer::tya(self),

            // Stack
            Mnemonic::Tsx => stack::tsx(self),
            Mnemonic::Txs => stack::txs(self),
            Mnemonic::Pha => stack::pha(self, memory),
            Mnemonic::Php => stack::php(self, memory),
            Mnemonic::Pla => stack::pla(self, memory),
            Mnemonic::Plp => stack::plp(self, memory),

            // Logical
            Mnemonic::And => alu::and(self, memory, address),
            Mnemonic::Eor => alu::eor(self, memory, address),
            Mnemonic::Ora => alu::ora(self, memory, address),
            Mnemonic::Bit => alu::bit(self, memory, address),

            // Arithmetic
            Mnemonic::Adc => alu::adc(self, memory, address),
            Mnemonic::Sbc => alu::sbc(self, memory, address),
            Mnemonic::Cmp => alu::cmp(self, memory, address),
            Mnemonic::Cpx => alu::cpx(self, memory, address),
            Mnemonic::Cpy => alu::cpy(self, memory, address),

            // Increments and decrements
            Mnemonic::Inc => inc_dec::inc(self, memory, address),
            Mnemonic::Inx => inc_dec::inx(self),
            Mnemonic::Iny => inc_dec::iny(self),
            Mnemonic::Dec => inc_dec::dec(self, memory, address),
            Mnemonic::Dex => inc_dec::dex(self),
            Mnemonic::Dey => inc_dec::dey(self),

            // Shifts and rotates
            Mnemonic::Asl => shifts::asl(self, memory, mode, address),
            Mnemonic::Lsr => shifts::lsr(self, memory, mode, address),
            Mnemonic::Rol => shifts::rol(self, memory, mode, address),
            Mnemonic::Ror => shifts::ror(self, memory, mode, address),

            // Jumps and calls
            Mnemonic::Jmp => control::jmp(self, address),
            Mnemonic::Jsr => control::jsr(self, memory, address),
            Mnemonic::Rts => control::rts(self, memory),

            // Branches
            Mnemonic::Bcc => branches::bcc(self, address),
            Mnemonic::Bcs => branches::bcs(self, address),
            Mnemonic::Beq => branches::beq(self, address),
            Mnemonic::Bne => branches::bne(self, address),
            Mnemonic::Bmi => branches::bmi(self, address),
            Mnemonic::Bpl => branches::bpl(self, address),
            Mnemonic::Bvs => branches::bvs(self, address),
            Mnemonic::Bvc => branches::bvc(self, address),

            // Status flags
            Mnemonic::Clc => flags::clc(self),
            Mnemonic::Sec => flags::sec(self),
            Mnemonic::Cli => flags::cli(self),
            Mnemonic::Sei => flags::sei(self),
            Mnemonic::Clv => flags::clv(self),
            Mnemonic::Cld => flags::cld(self),
            Mnemonic::Sed => flags::sed(self),

            // System
            Mnemonic::Brk => control::brk(self, memory),
            Mnemonic::Rti => control::rti(self, memory),
            Mnemonic::Nop => control::nop(),

            Mnemonic::Illegal => return Err(ExecutionError::IllegalOpcode(opcode)),
        }

        Ok(())
    }

    // ========== Addressing-mode resolvers ==========

    /// Resolves the effective address for `mode`, advancing PC past any
    /// operand bytes.
    ///
    /// The returned value is mode-dependent: an effective memory address
    /// for the memory-operand modes, the operand's own PC for Immediate,
    /// the zero-extended displacement byte for Relative, the current A for
    /// Accumulator, and zero for Implied. The penalised indexed modes set
    /// `page_crossed` when the index pushes the address onto a new page.
    fn resolve<M: MemoryBus>(&mut self, mode: AddressingMode, memory: &M) -> u16 {
        match mode {
            AddressingMode::Implied => 0,
            AddressingMode::Accumulator => self.a as u16,
            AddressingMode::Immediate => {
                let address = self.pc;
                self.pc = self.pc.wrapping_add(1);
                address
            }
            AddressingMode::Relative => self.fetch_byte(memory) as u16,
            AddressingMode::ZeroPage => self.fetch_byte(memory) as u16,
            AddressingMode::ZeroPageX => {
                // Indexing wraps within page zero.
                self.fetch_byte(memory).wrapping_add(self.x) as u16
            }
            AddressingMode::ZeroPageY => self.fetch_byte(memory).wrapping_add(self.y) as u16,
            AddressingMode::Absolute => self.fetch_word(memory),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word(memory);
                let sum = base.wrapping_add(self.x as u16);
                if (base ^ sum) & 0xFF00 != 0 {
                    self.page_crossed = true;
                }
                sum
            }
            AddressingMode::AbsoluteXFixed => {
                self.fetch_word(memory).wrapping_add(self.x as u16)
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word(memory);
                let sum = base.wrapping_add(self.y as u16);
                if (base ^ sum) & 0xFF00 != 0 {
                    self.page_crossed = true;
                }
                sum
            }
            AddressingMode::AbsoluteYFixed => {
                self.fetch_word(memory).wrapping_add(self.y as u16)
            }
            AddressingMode::Indirect => {
                let pointer = self.fetch_word(memory);
                let low = memory.read(pointer) as u16;

                // A pointer ending in 0xFF wraps within its own page for
                // the high byte instead of crossing into the next page.
                let high_address = (pointer & 0xFF00) | (pointer.wrapping_add(1) & 0x00FF);
                let high = memory.read(high_address) as u16;

                (high << 8) | low
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch_byte(memory).wrapping_add(self.x);
                let low = memory.read(zp as u16) as u16;
                let high = memory.read(zp.wrapping_add(1) as u16) as u16;
                (high << 8) | low
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch_byte(memory);
                let base = self.read_word(memory, zp as u16);
                let sum = base.wrapping_add(self.y as u16);
                if (base ^ sum) & 0xFF00 != 0 {
                    self.page_crossed = true;
                }
                sum
            }
            AddressingMode::IndirectYFixed => {
                let zp = self.fetch_byte(memory);
                self.read_word(memory, zp as u16).wrapping_add(self.y as u16)
            }
        }
    }

    // ========== Fetch and read helpers ==========

    /// Fetches the byte at PC and advances PC.
    fn fetch_byte<M: MemoryBus>(&mut self, memory: &M) -> u8 {
        let byte = memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        byte
    }

    /// Fetches a little-endian word at PC and advances PC by two.
    fn fetch_word<M: MemoryBus>(&mut self, memory: &M) -> u16 {
        let low = self.fetch_byte(memory) as u16;
        let high = self.fetch_byte(memory) as u16;
        (high << 8) | low
    }

    /// Reads a little-endian word at `address` without touching PC.
    pub(crate) fn read_word<M: MemoryBus>(&self, memory: &M, address: u16) -> u16 {
        let low = memory.read(address) as u16;
        let high = memory.read(address.wrapping_add(1)) as u16;
        (high << 8) | low
    }

    // ========== Stack helpers ==========

    pub(crate) fn push_byte<M: MemoryBus>(&mut self, memory: &mut M, value: u8) {
        memory.write(0x0100 | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    pub(crate) fn pull_byte<M: MemoryBus>(&mut self, memory: &M) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        memory.read(0x0100 | self.sp as u16)
    }

    /// Pushes a word high byte first, so the low byte ends up at the lower
    /// stack address.
    pub(crate) fn push_word<M: MemoryBus>(&mut self, memory: &mut M, value: u16) {
        self.push_byte(memory, (value >> 8) as u8);
        self.push_byte(memory, (value & 0xFF) as u8);
    }

    pub(crate) fn pull_word<M: MemoryBus>(&mut self, memory: &M) -> u16 {
        let low = self.pull_byte(memory) as u16;
        let high = self.pull_byte(memory) as u16;
        (high << 8) | low
    }

    /// Sets Z and N from a result byte.
    pub(crate) fn set_zn(&mut self, value: u8) {
        self.flag_z = value == 0;
        self.flag_n = (value & 0x80) != 0;
    }

    // ========== Register getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 + SP; the stack grows downward.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register packed into a byte.
    ///
    /// Bit layout (NV-BDIZC): N=0x80, V=0x40, unused=0x20 (always reads 1),
    /// B=0x10, D=0x08, I=0x04, Z=0x02, C=0x01.
    pub fn status(&self) -> u8 {
        let mut status: u8 = 0b0010_0000;

        if self.flag_n {
            status |= 0b1000_0000;
        }
        if self.flag_v {
            status |= 0b0100_0000;
        }
        if self.flag_b {
            status |= 0b0001_0000;
        }
        if self.flag_d {
            status |= 0b0000_1000;
        }
        if self.flag_i {
            status |= 0b0000_0100;
        }
        if self.flag_z {
            status |= 0b0000_0010;
        }
        if self.flag_c {
            status |= 0b0000_0001;
        }

        status
    }

    /// Unpacks a status byte into the named flags. The unused bit is not
    /// stored; it always reads back as 1 from [`CPU::status`].
    pub fn set_status(&mut self, value: u8) {
        self.flag_n = value & 0b1000_0000 != 0;
        self.flag_v = value & 0b0100_0000 != 0;
        self.flag_b = value & 0b0001_0000 != 0;
        self.flag_d = value & 0b0000_1000 != 0;
        self.flag_i = value & 0b0000_0100 != 0;
        self.flag_z = value & 0b0000_0010 != 0;
        self.flag_c = value & 0b0000_0001 != 0;
    }

    // ========== Status flag getters ==========

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flag_c
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flag_z
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flag_i
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flag_d
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flag_b
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flag_v
    }

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flag_n
    }

    // ========== Register setters (for test setup) ==========

    /// Sets the accumulator register value.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register value.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register value.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter value.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer value.
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flag_c = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flag_z = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flag_i = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flag_d = value;
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flag_b = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flag_v = value;
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flag_n = value;
    }
}

impl Default for CPU {
    fn default() -> Self {
        Self::new()
    }
}
