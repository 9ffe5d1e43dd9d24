//! Tests for the run loop: multi-instruction programs, cycle accounting and
//! unknown-opcode handling.

use nes6502::{ExecutionError, FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_run_zero_instructions() {
    let mut cpu = setup_cpu();
    assert_eq!(cpu.run(0), 0);
    assert_eq!(cpu.pc(), 0x8000);
}

#[test]
fn test_counting_loop() {
    let mut cpu = setup_cpu();
    // LDX #$05
    // loop: DEX
    //       BNE loop
    //       STX $00
    cpu.memory_mut()
        .load(0x8000, &[0xA2, 0x05, 0xCA, 0xD0, 0xFD, 0x86, 0x00]);
    cpu.memory_mut().write(0x0000, 0xFF);

    // LDX + 5 * DEX + 5 * BNE + STX
    let cycles = cpu.run(1 + 5 + 5 + 1);

    // LDX 2, DEX 2 each, BNE taken 3 x4 then 2, STX zp 3
    assert_eq!(cycles, 2 + 5 * 2 + 4 * 3 + 2 + 3);
    assert_eq!(cpu.x(), 0);
    assert_eq!(cpu.memory().read(0x0000), 0x00);
    assert_eq!(cpu.pc(), 0x8007);
    assert_eq!(cpu.instructions(), 12);
}

#[test]
fn test_memory_copy_loop() {
    let mut cpu = setup_cpu();
    // LDY #$00
    // loop: LDA $0300,Y
    //       STA $0400,Y
    //       INY
    //       CPY #$04
    //       BNE loop
    cpu.memory_mut().load(
        0x8000,
        &[
            0xA0, 0x00, 0xB9, 0x00, 0x03, 0x99, 0x00, 0x04, 0xC8, 0xC0, 0x04, 0xD0, 0xF5,
        ],
    );
    cpu.memory_mut().load(0x0300, &[0xDE, 0xAD, 0xBE, 0xEF]);

    cpu.run(1 + 4 * 5);

    for i in 0..4u16 {
        assert_eq!(cpu.memory().read(0x0400 + i), cpu.memory().read(0x0300 + i));
    }
    assert_eq!(cpu.pc(), 0x800D);
}

#[test]
fn test_unknown_opcode_is_skipped() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x02, 0xA9, 0x33]);

    let cycles = cpu.run(2);

    assert_eq!(cycles, 1 + 2);
    assert_eq!(cpu.a(), 0x33);
}

#[test]
fn test_try_step_reports_unknown_opcode() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0xEA, 0x80]);

    assert_eq!(cpu.try_step(), Ok(2));
    assert_eq!(
        cpu.try_step(),
        Err(ExecutionError::UnimplementedOpcode {
            opcode: 0x80,
            address: 0x8001
        })
    );
    assert_eq!(cpu.cycles(), 3);
    assert_eq!(cpu.pc(), 0x8002);
}

#[test]
fn test_pc_wraps_at_top_of_memory() {
    let mut cpu = setup_cpu();
    cpu.set_pc(0xFFFF);
    cpu.memory_mut().write(0xFFFF, 0xE8); // INX

    cpu.step();

    assert_eq!(cpu.pc(), 0x0000);
    assert_eq!(cpu.x(), 1);
}
