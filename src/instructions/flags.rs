//! # Flag Manipulation Instructions
//!
//! This module implements the instructions that set or clear a single
//! status flag: CLC, SEC, CLI, SEI, CLD, SED, CLV. Each takes 2 cycles and
//! touches nothing but its flag.

use crate::{MemoryBus, CPU};

/// Executes the CLC (Clear Carry Flag) instruction.
pub(crate) fn execute_clc<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.flags.carry = false;
    0
}

/// Executes the SEC (Set Carry Flag) instruction.
pub(crate) fn execute_sec<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.flags.carry = true;
    0
}

/// Executes the CLI (Clear Interrupt Disable) instruction.
pub(crate) fn execute_cli<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.flags.interrupt_disable = false;
    0
}

/// Executes the SEI (Set Interrupt Disable) instruction.
pub(crate) fn execute_sei<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.flags.interrupt_disable = true;
    0
}

/// Executes the CLD (Clear Decimal Mode) instruction.
pub(crate) fn execute_cld<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.flags.decimal = false;
    0
}

/// Executes the SED (Set Decimal Mode) instruction.
///
/// The flag is stored only; arithmetic stays binary.
pub(crate) fn execute_sed<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.flags.decimal = true;
    0
}

/// Executes the CLV (Clear Overflow Flag) instruction.
pub(crate) fn execute_clv<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.flags.overflow = false;
    0
}
