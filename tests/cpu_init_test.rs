//! Tests for CPU construction, the RESET sequence and the register API.

use nes6502::{CpuConfig, FlatMemory, MemoryBus, CPU};

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

#[test]
fn test_new_loads_reset_vector() {
    let cpu = setup_cpu();

    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.a(), 0);
    assert_eq!(cpu.x(), 0);
    assert_eq!(cpu.y(), 0);
    assert_eq!(cpu.status(), 0x00);
    assert_eq!(cpu.cycles(), 0);
}

#[test]
fn test_zeroed_memory_starts_at_zero() {
    let cpu = CPU::new(FlatMemory::new());
    assert_eq!(cpu.pc(), 0x0000);
}

#[test]
fn test_reset_clears_registers_and_costs_8_cycles() {
    let mut cpu = setup_cpu();
    cpu.set_a(0x11);
    cpu.set_x(0x22);
    cpu.set_y(0x33);
    cpu.set_sp(0x80);
    cpu.set_status(0xFF);
    cpu.set_pc(0x1234);

    let cycles = cpu.reset();

    assert_eq!(cycles, 8);
    assert_eq!(cpu.cycles(), 8);
    assert_eq!(cpu.pc(), 0x8000);
    assert_eq!(cpu.sp(), 0xFF);
    assert_eq!(cpu.a(), 0);
    assert_eq!(cpu.x(), 0);
    assert_eq!(cpu.y(), 0);
    assert_eq!(cpu.status(), 0x00);
}

#[test]
fn test_reset_does_not_touch_stack() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x01FF, 0xAA);
    cpu.memory_mut().write(0x01FE, 0xBB);

    cpu.reset();

    assert_eq!(cpu.memory().read(0x01FF), 0xAA);
    assert_eq!(cpu.memory().read(0x01FE), 0xBB);
}

#[test]
fn test_flag_setters_round_trip_status_byte() {
    let mut cpu = setup_cpu();

    cpu.set_flag_n(true);
    cpu.set_flag_v(true);
    cpu.set_flag_c(true);
    assert_eq!(cpu.status(), 0b1100_0001);

    cpu.set_status(0b0011_0100);
    assert!(cpu.flag_u());
    assert!(cpu.flag_b());
    assert!(cpu.flag_i());
    assert!(!cpu.flag_n());
    assert!(!cpu.flag_c());
}

#[test]
fn test_default_config() {
    let cpu = setup_cpu();
    assert_eq!(*cpu.config(), CpuConfig::default());
    assert!(cpu.config().jmp_indirect_page_wrap);
}

#[test]
fn test_into_memory_returns_bus() {
    let mut cpu = setup_cpu();
    cpu.memory_mut().write(0x0400, 0x99);

    let memory = cpu.into_memory();
    assert_eq!(memory.read(0x0400), 0x99);
}

#[test]
fn test_cpu_over_borrowed_memory() {
    let mut memory = FlatMemory::new();
    memory.load(0x0000, &[0xA9, 0x5A, 0x85, 0x10]); // LDA #$5A; STA $10

    {
        let mut cpu = CPU::new(&mut memory);
        cpu.run(2);
    }

    assert_eq!(memory.read(0x0010), 0x5A);
}
