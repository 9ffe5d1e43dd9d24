//! # Shift and Rotate Instructions
//!
//! This module implements bit shift and rotate operations:
//! - ASL: Arithmetic Shift Left
//! - LSR: Logical Shift Right
//! - ROL: Rotate Left through carry
//! - ROR: Rotate Right through carry
//!
//! Each operates either on the accumulator or read-modify-write on memory.
//! None of them pay a page-crossing penalty; ASL/LSR/ROL/ROR abs,X always
//! take 7 cycles.

use crate::{AddressingMode, MemoryBus, StatusFlags, CPU};

/// Applies `op` to the accumulator or to the byte at the effective address,
/// then updates Z and N from the result.
fn shift_in_place<M: MemoryBus>(
    cpu: &mut CPU<M>,
    mode: AddressingMode,
    op: impl FnOnce(&mut StatusFlags, u8) -> u8,
) -> u8 {
    let result = if mode == AddressingMode::Accumulator {
        let result = op(&mut cpu.flags, cpu.a);
        cpu.a = result;
        result
    } else {
        let (address, _) = cpu.resolve_address(mode);
        let value = cpu.memory.read(address);
        let result = op(&mut cpu.flags, value);
        cpu.memory.write(address, result);
        result
    };

    cpu.flags.set_zero_negative(result);
    0
}

/// Executes the ASL (Arithmetic Shift Left) instruction.
///
/// Bit 7 goes to the carry flag and bit 0 becomes 0. Updates C, Z, N.
pub(crate) fn execute_asl<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    shift_in_place(cpu, mode, |flags, value| {
        flags.carry = value & 0x80 != 0;
        value << 1
    })
}

/// Executes the LSR (Logical Shift Right) instruction.
///
/// Bit 0 goes to the carry flag and bit 7 becomes 0, so N is always cleared.
pub(crate) fn execute_lsr<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    shift_in_place(cpu, mode, |flags, value| {
        flags.carry = value & 0x01 != 0;
        value >> 1
    })
}

/// Executes the ROL (Rotate Left) instruction.
///
/// The old carry enters bit 0; bit 7 becomes the new carry.
pub(crate) fn execute_rol<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    shift_in_place(cpu, mode, |flags, value| {
        let carry_in = flags.carry as u8;
        flags.carry = value & 0x80 != 0;
        (value << 1) | carry_in
    })
}

/// Executes the ROR (Rotate Right) instruction.
///
/// The old carry enters bit 7; bit 0 becomes the new carry.
pub(crate) fn execute_ror<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    shift_in_place(cpu, mode, |flags, value| {
        let carry_in = (flags.carry as u8) << 7;
        flags.carry = value & 0x01 != 0;
        (value >> 1) | carry_in
    })
}
