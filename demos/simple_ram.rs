//! Simple RAM example
//!
//! Demonstrates basic CPU initialization and execution with FlatMemory.
//!
//! This example shows:
//! - Creating a 64KB flat memory instance
//! - Setting up the reset vector
//! - Loading a small program, including one illegal opcode
//! - Executing it slot by slot and inspecting state
//! - Raising an NMI from the host

use nes6502::{ExecutionError, FlatMemory, MemoryBus, CPU, OPCODE_TABLE};

fn print_state(cpu: &CPU<FlatMemory>) {
    println!("  PC: 0x{:04X}", cpu.pc());
    println!("  SP: 0x{:02X} (Stack: 0x01{:02X})", cpu.sp(), cpu.sp());
    println!("  A:  0x{:02X}", cpu.a());
    println!("  X:  0x{:02X}", cpu.x());
    println!("  Y:  0x{:02X}", cpu.y());
    println!(
        "  Status: 0x{:02X} (NV-BDIZC: {:08b})",
        cpu.status(),
        cpu.status()
    );
    println!("  Cycles: {}\n", cpu.cycles());
}

fn main() {
    println!("NES 6502 Core - Simple RAM Example");
    println!("==================================\n");

    // Create 64KB flat memory (all addresses mapped to RAM)
    let mut memory = FlatMemory::new();

    // Reset vector at 0xFFFC/0xFFFD (little-endian) -> 0x8000
    // NMI vector at 0xFFFA/0xFFFB -> 0x9000
    memory.load(0xFFFA, &[0x00, 0x90, 0x00, 0x80]);

    memory.load(
        0x8000,
        &[
            0xA9, 0x42, // LDA #$42
            0xA2, 0x10, // LDX #$10
            0x9D, 0xF8, 0x02, // STA $02F8,X
            0x02, // illegal, skipped
            0xE8, // INX
            0x4C, 0x08, 0x80, // JMP $8008
        ],
    );

    // NMI handler: INC $00; RTI
    memory.load(0x9000, &[0xE6, 0x00, 0x40]);

    println!("Loaded program at 0x8000 and NMI handler at 0x9000\n");

    // Initialize CPU - runs the reset sequence
    let mut cpu = CPU::new(memory);

    println!("CPU Initial State:");
    println!("-----------------");
    print_state(&cpu);

    println!("Executing:");
    println!("----------");

    for step in 1..=8 {
        if step == 6 {
            println!("        (host raises NMI)");
            cpu.trigger_nmi();
        }

        let pc_before = cpu.pc();
        let opcode = cpu.memory().read(pc_before);
        let had_nmi = cpu.pending_interrupts().nmi;

        match cpu.try_step() {
            Ok(cycles) if had_nmi => {
                println!(
                    "Step {}: NMI at 0x{:04X} -> 0x{:04X} ({} cycles)",
                    step,
                    pc_before,
                    cpu.pc(),
                    cycles
                );
            }
            Ok(cycles) => {
                let metadata = &OPCODE_TABLE[opcode as usize];
                println!(
                    "Step {}: {} {:?} at 0x{:04X} ({} cycles)",
                    step, metadata.mnemonic, metadata.addressing_mode, pc_before, cycles
                );
            }
            Err(ExecutionError::UnimplementedOpcode { opcode, address }) => {
                println!(
                    "Step {}: Opcode 0x{:02X} at 0x{:04X} is illegal, skipped (1 cycle)",
                    step, opcode, address
                );
            }
        }
    }

    println!("\nCPU Final State:");
    println!("---------------");
    print_state(&cpu);

    println!("Memory:");
    println!("  0x0308: 0x{:02X} (written by STA)", cpu.memory().read(0x0308));
    println!("  0x0000: 0x{:02X} (NMI count)", cpu.memory().read(0x0000));
}
