//! Tests for ASL, LSR, ROL and ROR in accumulator and memory forms.

use nes6502::{FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_asl_accumulator() {
    let mut cpu = setup_cpu();
    cpu.set_a(0b1100_0001);
    cpu.memory_mut().write(0x8000, 0x0A);

    assert_eq!(cpu.step(), 2);
    assert_eq!(cpu.a(), 0b1000_0010);
    assert!(cpu.flag_c());
    assert!(cpu.flag_n());
    assert_eq!(cpu.pc(), 0x8001);
}

#[test]
fn test_asl_zero_page() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x06, 0x20]);
    cpu.memory_mut().write(0x0020, 0x80);

    assert_eq!(cpu.step(), 5);
    assert_eq!(cpu.memory().read(0x0020), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}

#[test]
fn test_asl_absolute_x_fixed_cost() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x01);
    cpu.memory_mut().load(0x8000, &[0x1E, 0xFF, 0x02]);
    cpu.memory_mut().write(0x0300, 0x01);

    assert_eq!(cpu.step(), 7);
    assert_eq!(cpu.memory().read(0x0300), 0x02);
}

#[test]
fn test_lsr_accumulator_clears_negative() {
    let mut cpu = setup_cpu();
    cpu.set_a(0xFF);
    cpu.set_flag_n(true);
    cpu.memory_mut().write(0x8000, 0x4A);

    cpu.step();

    assert_eq!(cpu.a(), 0x7F);
    assert!(cpu.flag_c());
    assert!(!cpu.flag_n());
}

#[test]
fn test_lsr_absolute() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().load(0x8000, &[0x4E, 0x00, 0x04]);
    cpu.memory_mut().write(0x0400, 0x02);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.memory().read(0x0400), 0x01);
    assert!(!cpu.flag_c());
}

#[test]
fn test_rol_feeds_old_carry() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x40);
    cpu.set_flag_c(true);
    cpu.memory_mut().write(0x8000, 0x2A);

    cpu.step();

    assert_eq!(cpu.a(), 0x81);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_ror_feeds_old_carry() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x02);
    cpu.set_flag_c(true);
    cpu.memory_mut().write(0x8000, 0x6A);

    cpu.step();

    assert_eq!(cpu.a(), 0x81);
    assert!(!cpu.flag_c());
    assert!(cpu.flag_n());
}

#[test]
fn test_ror_zero_page_x() {
    let mut cpu = setup_cpu();
    cpu.set_x(0x02);
    cpu.memory_mut().load(0x8000, &[0x76, 0x10]);
    cpu.memory_mut().write(0x0012, 0x01);

    assert_eq!(cpu.step(), 6);
    assert_eq!(cpu.memory().read(0x0012), 0x00);
    assert!(cpu.flag_c());
    assert!(cpu.flag_z());
}
