//! # Branch Instructions
//!
//! This module implements all 8 conditional branch instructions:
//! - BCC: Branch if Carry Clear
//! - BCS: Branch if Carry Set
//! - BEQ: Branch if Equal (Zero Set)
//! - BMI: Branch if Minus (Negative Set)
//! - BNE: Branch if Not Equal (Zero Clear)
//! - BPL: Branch if Plus (Negative Clear)
//! - BVC: Branch if Overflow Clear
//! - BVS: Branch if Overflow Set
//!
//! All branches use relative addressing with a signed 8-bit offset, measured
//! from the address of the next instruction.
//!
//! ## Cycle Costs
//!
//! - 2 cycles if the branch is not taken
//! - 3 cycles if taken, same page
//! - 4 cycles if taken and the target is on another page
//!
//! None of the branches modify any flag.

use crate::addressing::page_crossed;
use crate::{AddressingMode, MemoryBus, CPU};

/// Reads the displacement and jumps if `condition` holds.
///
/// Returns the extra cycles: 0 not taken, 1 taken, 2 taken across a page.
fn branch<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode, condition: bool) -> u8 {
    let displacement = cpu.resolve_operand(mode).value as i8;
    if !condition {
        return 0;
    }

    let origin = cpu.pc;
    let target = origin.wrapping_add(displacement as u16);
    let crossed = page_crossed(origin, target);
    cpu.pc = target;
    cpu.latch_operand(target, crossed);

    if crossed {
        2
    } else {
        1
    }
}

/// Executes the BCC (Branch if Carry Clear) instruction.
pub(crate) fn execute_bcc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let condition = !cpu.flags.carry;
    branch(cpu, mode, condition)
}

/// Executes the BCS (Branch if Carry Set) instruction.
pub(crate) fn execute_bcs<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let condition = cpu.flags.carry;
    branch(cpu, mode, condition)
}

/// Executes the BEQ (Branch if Equal) instruction.
pub(crate) fn execute_beq<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let condition = cpu.flags.zero;
    branch(cpu, mode, condition)
}

/// Executes the BMI (Branch if Minus) instruction.
pub(crate) fn execute_bmi<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let condition = cpu.flags.negative;
    branch(cpu, mode, condition)
}

/// Executes the BNE (Branch if Not Equal) instruction.
pub(crate) fn execute_bne<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let condition = !cpu.flags.zero;
    branch(cpu, mode, condition)
}

/// Executes the BPL (Branch if Plus) instruction.
pub(crate) fn execute_bpl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let condition = !cpu.flags.negative;
    branch(cpu, mode, condition)
}

/// Executes the BVC (Branch if Overflow Clear) instruction.
pub(crate) fn execute_bvc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let condition = !cpu.flags.overflow;
    branch(cpu, mode, condition)
}

/// Executes the BVS (Branch if Overflow Set) instruction.
pub(crate) fn execute_bvs<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let condition = cpu.flags.overflow;
    branch(cpu, mode, condition)
}
