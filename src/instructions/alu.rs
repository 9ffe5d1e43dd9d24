//! # ALU (Arithmetic Logic Unit) Instructions
//!
//! This module implements arithmetic and logical operations:
//! - ADC: Add with Carry
//! - SBC: Subtract with Carry
//! - AND, ORA, EOR: Bitwise logic into the accumulator
//! - BIT: Bit test
//! - CMP, CPX, CPY: Register comparisons
//!
//! Decimal mode is not implemented: the D flag is stored, but ADC and SBC are
//! always binary, as on the NES's 2A03.

use crate::{AddressingMode, MemoryBus, StatusFlags, CPU};

/// Binary add with carry.
///
/// Computes `a + b + C` in nine bits. C is set from bit 8, and V is set when
/// both operands share a sign that the result does not.
///
/// Returns the 8-bit result. Only C and V are written; callers set Z and N.
pub(crate) fn add_with_carry(flags: &mut StatusFlags, a: u8, b: u8) -> u8 {
    let total = a as u16 + b as u16 + flags.carry as u16;
    let result = total as u8;

    let same_sign_before = !(a ^ b) & 0x80 != 0;
    let same_sign_after = !(result ^ b) & 0x80 != 0;

    flags.carry = total > 0xFF;
    flags.overflow = same_sign_before && !same_sign_after;

    result
}

/// Binary subtract with borrow: `a - b - (1 - C)`.
///
/// Two's complement subtraction is addition of the one's complement with the
/// carry acting as the inverted borrow, so this is ADC with `!b`.
pub(crate) fn subtract_with_carry(flags: &mut StatusFlags, a: u8, b: u8) -> u8 {
    add_with_carry(flags, a, !b)
}

/// Executes the ADC (Add with Carry) instruction.
///
/// Adds the operand plus the carry flag to the accumulator. Updates C, Z, V, N.
pub(crate) fn execute_adc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let operand = cpu.resolve_operand(mode);
    cpu.a = add_with_carry(&mut cpu.flags, cpu.a, operand.value);
    cpu.flags.set_zero_negative(cpu.a);
    operand.extra_cycles
}

/// Executes the SBC (Subtract with Carry) instruction.
///
/// Subtracts the operand and the inverted carry from the accumulator.
/// Updates C (clear on borrow), Z, V, N.
pub(crate) fn execute_sbc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let operand = cpu.resolve_operand(mode);
    cpu.a = subtract_with_carry(&mut cpu.flags, cpu.a, operand.value);
    cpu.flags.set_zero_negative(cpu.a);
    operand.extra_cycles
}

/// Executes the AND (Logical AND) instruction.
pub(crate) fn execute_and<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let operand = cpu.resolve_operand(mode);
    cpu.a &= operand.value;
    cpu.flags.set_zero_negative(cpu.a);
    operand.extra_cycles
}

/// Executes the EOR (Exclusive OR) instruction.
pub(crate) fn execute_eor<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let operand = cpu.resolve_operand(mode);
    cpu.a ^= operand.value;
    cpu.flags.set_zero_negative(cpu.a);
    operand.extra_cycles
}

/// Executes the ORA (Logical Inclusive OR) instruction.
pub(crate) fn execute_ora<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let operand = cpu.resolve_operand(mode);
    cpu.a |= operand.value;
    cpu.flags.set_zero_negative(cpu.a);
    operand.extra_cycles
}

/// Executes the BIT (Bit Test) instruction.
///
/// # Flag Behavior
///
/// - Zero (Z): Set if `A & M` is 0
/// - Overflow (V): Bit 6 of M
/// - Negative (N): Bit 7 of M
///
/// The accumulator is not modified.
pub(crate) fn execute_bit<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let operand = cpu.resolve_operand(mode);
    cpu.flags.zero = cpu.a & operand.value == 0;
    cpu.flags.overflow = operand.value & 0x40 != 0;
    cpu.flags.negative = operand.value & 0x80 != 0;
    operand.extra_cycles
}

/// Shared flag logic of CMP, CPX and CPY.
///
/// C = register >= operand, Z = register == operand, N = bit 7 of the
/// wrapped difference. Nothing else changes.
fn compare(flags: &mut StatusFlags, register: u8, value: u8) {
    flags.carry = register >= value;
    flags.zero = register == value;
    flags.negative = register.wrapping_sub(value) & 0x80 != 0;
}

/// Executes the CMP (Compare Accumulator) instruction.
pub(crate) fn execute_cmp<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let operand = cpu.resolve_operand(mode);
    compare(&mut cpu.flags, cpu.a, operand.value);
    operand.extra_cycles
}

/// Executes the CPX (Compare X Register) instruction.
pub(crate) fn execute_cpx<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let operand = cpu.resolve_operand(mode);
    compare(&mut cpu.flags, cpu.x, operand.value);
    operand.extra_cycles
}

/// Executes the CPY (Compare Y Register) instruction.
pub(crate) fn execute_cpy<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let operand = cpu.resolve_operand(mode);
    compare(&mut cpu.flags, cpu.y, operand.value);
    operand.extra_cycles
}
