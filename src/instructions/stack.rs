//! # Stack Instructions
//!
//! This module implements stack operations:
//! - PHA: Push Accumulator
//! - PHP: Push Processor Status
//! - PLA: Pull Accumulator
//! - PLP: Pull Processor Status
//!
//! The stack lives at $0100-$01FF and grows downward. SP wraps at both ends.

use crate::{MemoryBus, StatusFlags, CPU};

/// Executes the PHA (Push Accumulator) instruction. 3 cycles, no flags.
pub(crate) fn execute_pha<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.push_byte(cpu.a);
    0
}

/// Executes the PHP (Push Processor Status) instruction.
///
/// The pushed copy has B and bit 5 set. The live flags are not changed.
pub(crate) fn execute_php<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.push_byte(cpu.flags.pushed_by_software());
    0
}

/// Executes the PLA (Pull Accumulator) instruction.
///
/// Updates Z and N from the pulled value.
pub(crate) fn execute_pla<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.a = cpu.pull_byte();
    cpu.flags.set_zero_negative(cpu.a);
    0
}

/// Executes the PLP (Pull Processor Status) instruction.
///
/// Restores every flag from the pulled byte, then clears B and bit 5.
pub(crate) fn execute_plp<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    let mut flags = StatusFlags::from_byte(cpu.pull_byte());
    flags.clear_synthetic();
    cpu.flags = flags;
    0
}
