//! Fuzz target for the execution loop.
//!
//! Builds arbitrary register/flag state and memory contents, then runs a
//! bounded cycle budget. Illegal opcodes are an expected error; anything
//! that panics is a bug.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mos6502::{Memory, MemoryBus, CPU};

/// Arbitrary CPU state for fuzzing.
#[derive(Debug, Arbitrary)]
struct FuzzState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    flag_c: bool,
    flag_z: bool,
    flag_i: bool,
    flag_d: bool,
    flag_b: bool,
    flag_v: bool,
    flag_n: bool,
}

/// Memory regions seeded from fuzz input.
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Program bytes starting at the reset PC (0xFFFC, wrapping)
    program: [u8; 16],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
}

#[derive(Debug, Arbitrary)]
struct FuzzInput {
    state: FuzzState,
    memory: FuzzMemory,
    budget: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = Memory::new();
    let mut cpu = CPU::new();
    cpu.reset(&mut memory);

    for (i, &byte) in input.memory.program.iter().enumerate() {
        memory.write(0xFFFC_u16.wrapping_add(i as u16), byte);
    }
    for (i, &byte) in input.memory.zero_page.iter().enumerate() {
        memory.write(i as u16, byte);
    }
    for (i, &byte) in input.memory.stack_page.iter().enumerate() {
        memory.write(0x0100 + i as u16, byte);
    }

    cpu.set_a(input.state.a);
    cpu.set_x(input.state.x);
    cpu.set_y(input.state.y);
    cpu.set_sp(input.state.sp);
    cpu.set_flag_c(input.state.flag_c);
    cpu.set_flag_z(input.state.flag_z);
    cpu.set_flag_i(input.state.flag_i);
    cpu.set_flag_d(input.state.flag_d);
    cpu.set_flag_b(input.state.flag_b);
    cpu.set_flag_v(input.state.flag_v);
    cpu.set_flag_n(input.state.flag_n);

    // Illegal opcodes abort with an error; no input may panic.
    match cpu.execute(input.budget as u32, &mut memory) {
        Ok(consumed) => {
            // Post-hoc accounting overshoots by at most one instruction.
            assert!(consumed <= input.budget as u32 + 7);
        }
        Err(_) => {}
    }
});
