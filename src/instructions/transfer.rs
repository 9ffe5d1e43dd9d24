//! # Register Transfer Instructions
//!
//! This module implements register-to-register transfers:
//! - TAX, TAY: Accumulator to X / Y
//! - TXA, TYA: X / Y to Accumulator
//! - TSX: Stack Pointer to X
//! - TXS: X to Stack Pointer
//!
//! Every transfer except TXS updates Z and N from the copied value.

use crate::{MemoryBus, CPU};

/// Executes the TAX (Transfer Accumulator to X) instruction.
pub(crate) fn execute_tax<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.x = cpu.a;
    cpu.flags.set_zero_negative(cpu.x);
    0
}

/// Executes the TAY (Transfer Accumulator to Y) instruction.
pub(crate) fn execute_tay<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.y = cpu.a;
    cpu.flags.set_zero_negative(cpu.y);
    0
}

/// Executes the TXA (Transfer X to Accumulator) instruction.
pub(crate) fn execute_txa<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.a = cpu.x;
    cpu.flags.set_zero_negative(cpu.a);
    0
}

/// Executes the TYA (Transfer Y to Accumulator) instruction.
pub(crate) fn execute_tya<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.a = cpu.y;
    cpu.flags.set_zero_negative(cpu.a);
    0
}

/// Executes the TSX (Transfer Stack Pointer to X) instruction.
pub(crate) fn execute_tsx<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.x = cpu.sp;
    cpu.flags.set_zero_negative(cpu.x);
    0
}

/// Executes the TXS (Transfer X to Stack Pointer) instruction.
///
/// The only transfer that leaves the flags alone.
pub(crate) fn execute_txs<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.sp = cpu.x;
    0
}
