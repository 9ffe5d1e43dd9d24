//! # Control Flow Instructions
//!
//! This module implements control flow operations:
//! - JMP: Jump to address
//! - JSR: Jump to Subroutine
//! - RTS: Return from Subroutine
//! - BRK: Force Interrupt
//! - RTI: Return from Interrupt
//! - NOP: No Operation
//!
//! BRK is a software interrupt that:
//! 1. Skips the signature byte after the opcode
//! 2. Sets B and bit 5, then pushes PC (high byte first) and the status byte
//! 3. Loads PC from the IRQ vector at $FFFE/F
//! 4. Sets the I (interrupt disable) flag

use crate::cpu::IRQ_VECTOR;
use crate::{AddressingMode, MemoryBus, StatusFlags, CPU};

/// Executes the JMP (Jump) instruction.
///
/// Addressing modes:
/// - Absolute (0x4C): JMP $1234, 3 cycles
/// - Indirect (0x6C): JMP ($1234), 5 cycles
///
/// With `CpuConfig::jmp_indirect_page_wrap` on, a pointer at $xxFF takes its
/// high byte from $xx00.
pub(crate) fn execute_jmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let (target, _) = cpu.resolve_address(mode);
    cpu.pc = target;
    0
}

/// Executes the JSR (Jump to Subroutine) instruction.
///
/// Pushes the address of the last byte of the JSR instruction (return
/// address minus one), high byte first, then jumps.
pub(crate) fn execute_jsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let (target, _) = cpu.resolve_address(mode);
    cpu.push_word(cpu.pc.wrapping_sub(1));
    cpu.pc = target;
    0
}

/// Executes the RTS (Return from Subroutine) instruction.
///
/// Pulls the address pushed by JSR and resumes at the byte after it.
pub(crate) fn execute_rts<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.pc = cpu.pull_word().wrapping_add(1);
    0
}

/// Executes the BRK (Force Interrupt) instruction.
///
/// Cycle timing: 7 cycles (fixed)
///
/// Flags affected:
/// - B, bit 5: Set to 1 before the status byte is pushed
/// - I: Set to 1
pub(crate) fn execute_brk<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    // signature byte
    cpu.pc = cpu.pc.wrapping_add(1);

    cpu.flags.break_command = true;
    cpu.flags.unused = true;
    cpu.push_word(cpu.pc);
    cpu.push_byte(cpu.flags.to_byte());

    cpu.pc = cpu.read_word(IRQ_VECTOR);
    cpu.flags.interrupt_disable = true;
    0
}

/// Executes the RTI (Return from Interrupt) instruction.
///
/// Pulls the status byte, then PC. B and bit 5 are cleared after the pull.
pub(crate) fn execute_rti<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let mut flags = StatusFlags::from_byte(cpu.pull_byte());
    flags.clear_synthetic();
    cpu.flags = flags;
    cpu.pc = cpu.pull_word();
    0
}

/// Executes the NOP (No Operation) instruction. 2 cycles.
pub(crate) fn execute_nop<M: MemoryBus>(_cpu: &mut CPU<M>) -> u8 {
    0
}
