//! Tests for the single-flag set/clear instructions.

use nes6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_set_instructions() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x38, 0x78, 0xF8]); // SEC; SEI; SED

    assert_eq!(cpu.run(3), 6);
    assert_eq!(cpu.status(), 0b0000_1101);
}

#[test]
fn test_clear_instructions() {
    let mut cpu = setup_cpu();
    cpu.set_status(0b0100_1101);
    cpu.memory_mut().load(0x8000, &[0x18, 0x58, 0xD8, 0xB8]); // CLC; CLI; CLD; CLV

    assert_eq!(cpu.run(4), 8);
    assert_eq!(cpu.status(), 0x00);
}

#[test]
fn test_flag_instruction_touches_one_bit() {
    let mut cpu = setup_cpu();
    cpu.set_status(0b1100_0010);
    cpu.memory_mut().write(0x8000, 0x38); // SEC

    cpu.step();

    assert_eq!(cpu.status(), 0b1100_0011);
}
