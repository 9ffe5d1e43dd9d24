//! Fuzz target for CPU slot execution.
//!
//! This target creates arbitrary CPU states, memory contents and interrupt
//! requests, then runs a handful of slots to find panics and broken
//! invariants.

#![no_main]

use arbitrary::Arbitrary;
use nes6502::{FlatMemory, MemoryBus, CPU, OPCODE_TABLE};
use libfuzzer_sys::fuzz_target;

/// Arbitrary CPU initial state for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzCpuState {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    /// Packed NV-BDIZC byte
    status: u8,
}

/// Memory region for fuzzing
#[derive(Debug, Arbitrary)]
struct FuzzMemory {
    /// Bytes at the PC location (a few instructions with operands)
    instruction_bytes: [u8; 16],
    /// Zero page contents
    zero_page: [u8; 256],
    /// Stack page contents
    stack_page: [u8; 256],
    /// Small region of memory for absolute addressing
    main_memory: [u8; 256],
}

/// Complete fuzz input
#[derive(Debug, Arbitrary)]
struct FuzzInput {
    cpu_state: FuzzCpuState,
    memory: FuzzMemory,
    trigger_nmi: bool,
    trigger_irq: bool,
    /// Slots to run, kept small
    slots: u8,
}

fuzz_target!(|input: FuzzInput| {
    let mut memory = FlatMemory::new();

    // Reset vector -> 0x8000, NMI -> 0x9000, IRQ/BRK -> 0x9100
    memory.load(0xFFFA, &[0x00, 0x90, 0x00, 0x80, 0x00, 0x91]);

    memory.load(0x8000, &input.memory.instruction_bytes);
    memory.load(0x0000, &input.memory.zero_page);
    memory.load(0x0100, &input.memory.stack_page);
    memory.load(0x4000, &input.memory.main_memory);

    let mut cpu = CPU::new(memory);

    cpu.set_a(input.cpu_state.a);
    cpu.set_x(input.cpu_state.x);
    cpu.set_y(input.cpu_state.y);
    cpu.set_sp(input.cpu_state.sp);
    cpu.set_status(input.cpu_state.status);

    if input.trigger_nmi {
        cpu.trigger_nmi();
    }
    if input.trigger_irq {
        cpu.trigger_irq();
    }

    for _ in 0..(input.slots % 8) + 1 {
        let opcode = cpu.memory().read(cpu.pc());
        let cycles_before = cpu.cycles();

        let cycles = cpu.step();

        // Every slot costs at least one cycle and the counter agrees
        assert!(cycles >= 1);
        assert_eq!(cpu.cycles() - cycles_before, cycles as u64);

        // Documented opcodes never cost less than their base cycles.
        // Interrupt slots cost 8, above every base cost.
        let metadata = &OPCODE_TABLE[opcode as usize];
        if metadata.implemented {
            assert!(cycles >= metadata.base_cycles as u32);
        }
    }
});
