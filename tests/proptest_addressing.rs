//! Property-based tests for addressing modes.
//!
//! These tests verify zero-page wrapping and the page-crossing cycle
//! penalty across arbitrary base addresses and index values.

use nes6502::{FlatMemory, MemoryBus, CPU};
use proptest::prelude::*;

/// Helper function to create a CPU with reset vector at 0x8000
fn setup_cpu() -> CPU<FlatMemory> {
    let mut memory = FlatMemory::new();
    memory.write(0xFFFC, 0x00);
    memory.write(0xFFFD, 0x80);
    CPU::new(memory)
}

proptest! {
    #[test]
    fn prop_zero_page_x_wraps(base in any::<u8>(), x in any::<u8>(), value in 1u8..) {
        let mut cpu = setup_cpu();
        cpu.set_x(x);
        let effective = base.wrapping_add(x) as u16;
        cpu.memory_mut().load(0x8000, &[0xB5, base]); // LDA zp,X
        cpu.memory_mut().write(effective, value);

        let cycles = cpu.step();

        prop_assert_eq!(cpu.a(), value);
        prop_assert_eq!(cycles, 4);
    }

    #[test]
    fn prop_zero_page_y_wraps(base in any::<u8>(), y in any::<u8>(), value in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_y(y);
        cpu.set_x(value);
        cpu.memory_mut().load(0x8000, &[0x96, base]); // STX zp,Y

        cpu.step();

        prop_assert_eq!(cpu.memory().read(base.wrapping_add(y) as u16), value);
    }

    #[test]
    fn prop_absolute_x_penalty_iff_page_crossed(base in 0x0200u16..0x7F00, x in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_x(x);
        cpu.memory_mut().load(0x8000, &[0xBD, base as u8, (base >> 8) as u8]); // LDA abs,X

        let cycles = cpu.step();

        let effective = base.wrapping_add(x as u16);
        let crossed = (base ^ effective) >> 8 != 0;
        prop_assert_eq!(cycles, 4 + crossed as u32);
    }

    #[test]
    fn prop_absolute_y_penalty_iff_page_crossed(base in 0x0200u16..0x7F00, y in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_y(y);
        cpu.memory_mut().load(0x8000, &[0x59, base as u8, (base >> 8) as u8]); // EOR abs,Y

        let cycles = cpu.step();

        let crossed = base & 0xFF00 != base.wrapping_add(y as u16) & 0xFF00;
        prop_assert_eq!(cycles, 4 + crossed as u32);
    }

    #[test]
    fn prop_indirect_y_penalty_iff_page_crossed(zp in 0x10u8..0xF0, base in 0x0200u16..0x7F00, y in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_y(y);
        cpu.memory_mut().load(0x8000, &[0xB1, zp]); // LDA (zp),Y
        cpu.memory_mut().load(zp as u16, &[base as u8, (base >> 8) as u8]);
        let effective = base.wrapping_add(y as u16);
        cpu.memory_mut().write(effective, 0x5A);

        let cycles = cpu.step();

        let crossed = (base ^ effective) >> 8 != 0;
        prop_assert_eq!(cycles, 5 + crossed as u32);
        prop_assert_eq!(cpu.a(), 0x5A);
    }

    #[test]
    fn prop_store_never_pays_penalty(base in 0x0200u16..0x7F00, x in any::<u8>()) {
        let mut cpu = setup_cpu();
        cpu.set_x(x);
        cpu.memory_mut().load(0x8000, &[0x9D, base as u8, (base >> 8) as u8]); // STA abs,X

        prop_assert_eq!(cpu.step(), 5);
    }
}
