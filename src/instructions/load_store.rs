//! # Load and Store Instructions
//!
//! This module implements load and store operations:
//! - LDA: Load Accumulator
//! - LDX: Load X Register
//! - LDY: Load Y Register
//! - STA: Store Accumulator
//! - STX: Store X Register
//! - STY: Store Y Register
//!
//! Loads set Z and N from the loaded value and pay the page-crossing penalty of
//! the indexed modes. Stores touch no flags and never pay it: their indexed
//! forms already carry the extra cycle in the opcode's base cost.

use crate::{AddressingMode, MemoryBus, CPU};

/// Executes the LDA (Load Accumulator) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if A = 0
/// - Negative (N): Set if bit 7 of A is set
/// - Other flags: Not affected
pub(crate) fn execute_lda<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let operand = cpu.resolve_operand(mode);
    cpu.a = operand.value;
    cpu.flags.set_zero_negative(cpu.a);
    operand.extra_cycles
}

/// Executes the LDX (Load X Register) instruction.
///
/// Updates Z and N from the loaded value.
pub(crate) fn execute_ldx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let operand = cpu.resolve_operand(mode);
    cpu.x = operand.value;
    cpu.flags.set_zero_negative(cpu.x);
    operand.extra_cycles
}

/// Executes the LDY (Load Y Register) instruction.
///
/// Updates Z and N from the loaded value.
pub(crate) fn execute_ldy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let operand = cpu.resolve_operand(mode);
    cpu.y = operand.value;
    cpu.flags.set_zero_negative(cpu.y);
    operand.extra_cycles
}

/// Executes the STA (Store Accumulator) instruction.
///
/// Writes A to the effective address. No flags affected.
pub(crate) fn execute_sta<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let (address, _) = cpu.resolve_address(mode);
    cpu.memory.write(address, cpu.a);
    0
}

/// Executes the STX (Store X Register) instruction.
pub(crate) fn execute_stx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let (address, _) = cpu.resolve_address(mode);
    cpu.memory.write(address, cpu.x);
    0
}

/// Executes the STY (Store Y Register) instruction.
pub(crate) fn execute_sty<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let (address, _) = cpu.resolve_address(mode);
    cpu.memory.write(address, cpu.y);
    0
}
