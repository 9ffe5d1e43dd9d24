//! # NES 6502 CPU Core
//!
//! A cycle-counting MOS 6502 CPU emulator as found in the NES (the 2A03's CPU
//! half), designed to be driven by a host that owns the rest of the machine.
//!
//! This crate provides the processor state, a trait-based memory bus
//! abstraction, the table-driven opcode set, interrupt sequencing, and an
//! iNES / NES 2.0 cartridge loader for getting PRG ROM onto the bus.
//!
//! ## Quick Start
//!
//! ```rust
//! use nes6502::{CPU, FlatMemory, MemoryBus};
//!
//! // Create 64KB flat memory
//! let mut memory = FlatMemory::new();
//!
//! // Set reset vector to point to program start at 0x8000
//! memory.write(0xFFFC, 0x00); // Low byte
//! memory.write(0xFFFD, 0x80); // High byte
//!
//! // LDA #$05; ADC #$03
//! memory.load(0x8000, &[0xA9, 0x05, 0x69, 0x03]);
//!
//! // Initialize CPU - it will load PC from the reset vector
//! let mut cpu = CPU::new(memory);
//! assert_eq!(cpu.pc(), 0x8000);
//!
//! let cycles = cpu.run(2);
//! assert_eq!(cycles, 4);
//! assert_eq!(cpu.a(), 0x08);
//! ```
//!
//! ## Architecture
//!
//! - **Modularity**: CPU state is separated from memory implementation via the `MemoryBus` trait
//! - **Slot-based execution**: each step services one interrupt or executes one instruction
//! - **Cycle Counting**: every slot reports its cost, including page-crossing and branch penalties
//! - **Table-Driven Design**: all opcode metadata lives in a single 256-entry table
//! - **Portability**: no OS dependencies in the core; WebAssembly bindings behind the `wasm` feature
//!
//! ## Modules
//!
//! - `cpu` - CPU state and execution logic
//! - `memory` - MemoryBus trait and a flat 64KB implementation
//! - `flags` - Status register
//! - `opcodes` - Opcode metadata table
//! - `addressing` - Addressing modes and their resolvers
//! - `interrupts` - RESET / NMI / IRQ latches and sequences
//! - `config` - Behavior switches for hardware quirks
//! - `cartridge` - iNES / NES 2.0 image parsing
//!
//! ## Logging
//!
//! Diagnostics go through the `log` facade. Unknown opcodes are reported at
//! `warn`, interrupt sequencing at `debug` and every executed instruction at
//! `trace`. Install any logger in the host to see them.

pub mod addressing;
pub mod cartridge;
pub mod config;
pub mod cpu;
pub mod flags;
pub mod interrupts;
pub mod memory;
pub mod opcodes;
pub mod wasm;

// Internal instruction implementations (not part of public API)
mod instructions;

// Re-export public API
pub use addressing::{AddressingMode, Operand};
pub use cartridge::{Cartridge, CartridgeError, Mirroring, RomFormat};
pub use config::{CpuConfig, LatchPolicy};
pub use cpu::{InstructionProgress, Slot, CPU};
pub use flags::StatusFlags;
pub use interrupts::{Interrupt, PendingInterrupts};
pub use memory::{FlatMemory, MemoryBus};
pub use opcodes::{OpcodeMetadata, Operation, OPCODE_TABLE};

/// Errors that can occur during CPU execution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionError {
    /// The fetched opcode is not one of the 151 documented instructions.
    ///
    /// The CPU has already skipped it and charged one cycle.
    UnimplementedOpcode {
        /// The opcode byte.
        opcode: u8,
        /// Address it was fetched from.
        address: u16,
    },
}

impl std::fmt::Display for ExecutionError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ExecutionError::UnimplementedOpcode { opcode, address } => {
                write!(
                    f,
                    "Opcode 0x{:02X} at 0x{:04X} is not implemented",
                    opcode, address
                )
            }
        }
    }
}

impl std::error::Error for ExecutionError {}
