//! Tests for the eight conditional branches.
//!
//! Tests cover:
//! - Taken / not taken for every condition
//! - Forward and backward displacements
//! - Cycle costs: 2 not taken, 3 taken, 4 taken across a page

use nes6502::{FlatMemory, MemoryBus, CPU};

type Cpu = CPU<FlatMemory>;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

/// CPU with zeroed memory, so PC starts at 0x0000.
fn setup_cpu_at_zero() -> CPU<FlatMemory> {
    CPU::new(FlatMemory::new())
}

#[test]
fn test_bcc_taken_same_page() {
    let mut cpu = setup_cpu_at_zero();
    cpu.set_flag_c(false);
    cpu.memory_mut().load(0x0000, &[0x90, 0x78]);

    let cycles = cpu.run(1);

    assert_eq!(cpu.pc(), 0x0002 + 0x78);
    assert_eq!(cycles, 3);
}

#[test]
fn test_bcc_taken_page_cross() {
    let mut cpu = setup_cpu_at_zero();
    cpu.set_pc(0x00FD);
    cpu.set_flag_c(false);
    cpu.memory_mut().load(0x00FD, &[0x90, 0x78]);

    let cycles = cpu.run(1);

    assert_eq!(cpu.pc(), 0x00FF + 0x78);
    assert_eq!(cycles, 4);
}

#[test]
fn test_bcc_not_taken() {
    let mut cpu = setup_cpu_at_zero();
    cpu.set_flag_c(true);
    cpu.memory_mut().load(0x0000, &[0x90, 0x78]);

    assert_eq!(cpu.run(1), 2);
    assert_eq!(cpu.pc(), 0x0002);
}

#[test]
fn test_bvs_taken_page_cross() {
    let mut cpu = setup_cpu_at_zero();
    cpu.set_pc(0x00FD);
    cpu.set_flag_v(true);
    cpu.memory_mut().load(0x00FD, &[0x70, 0x78]);

    assert_eq!(cpu.run(1), 4);
    assert_eq!(cpu.pc(), 0x00FF + 0x78);
}

#[test]
fn test_bne_backward_same_page() {
    let mut cpu = setup_cpu_at_zero();
    cpu.set_pc(0x00FD);
    cpu.set_flag_z(false);
    cpu.memory_mut().load(0x00FD, &[0xD0, 0x88]); // -120

    assert_eq!(cpu.run(1), 3);
    assert_eq!(cpu.pc(), 0x00FF - 0x78);
}

#[test]
fn test_beq_backward_page_cross() {
    let mut cpu = setup_cpu();
    cpu.set_flag_z(true);
    cpu.memory_mut().load(0x8000, &[0xF0, 0xFC]); // -4

    assert_eq!(cpu.step(), 4);
    assert_eq!(cpu.pc(), 0x7FFE);
}

#[test]
fn test_branch_conditions() {
    // (opcode, flag setter, flag value that takes the branch)
    let cases: [(u8, fn(&mut Cpu, bool), bool); 8] = [
        (0x10, Cpu::set_flag_n, false), // BPL
        (0x30, Cpu::set_flag_n, true),  // BMI
        (0x50, Cpu::set_flag_v, false), // BVC
        (0x70, Cpu::set_flag_v, true),  // BVS
        (0x90, Cpu::set_flag_c, false), // BCC
        (0xB0, Cpu::set_flag_c, true),  // BCS
        (0xD0, Cpu::set_flag_z, false), // BNE
        (0xF0, Cpu::set_flag_z, true),  // BEQ
    ];

    for (opcode, set_flag, taken_when) in cases {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[opcode, 0x10]);
        set_flag(&mut cpu, taken_when);
        assert_eq!(cpu.step(), 3, "opcode 0x{:02X} should branch", opcode);
        assert_eq!(cpu.pc(), 0x8012);

        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[opcode, 0x10]);
        set_flag(&mut cpu, !taken_when);
        assert_eq!(cpu.step(), 2, "opcode 0x{:02X} should fall through", opcode);
        assert_eq!(cpu.pc(), 0x8002);
    }
}

#[test]
fn test_branches_do_not_touch_flags() {
    let mut cpu = setup_cpu();
    cpu.set_status(0b1100_0011);
    cpu.memory_mut().load(0x8000, &[0xB0, 0x02]); // BCS +2

    cpu.step();

    assert_eq!(cpu.status(), 0b1100_0011);
}
