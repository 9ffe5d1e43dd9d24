//! # Increment and Decrement Instructions
//!
//! INC and DEC are read-modify-write on memory; INX, INY, DEX and DEY work on
//! the index registers. All wrap modulo 256 and update Z and N.

use crate::{AddressingMode, MemoryBus, CPU};

/// Executes the INC (Increment Memory) instruction.
pub(crate) fn execute_inc<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let (address, _) = cpu.resolve_address(mode);
    let result = cpu.memory.read(address).wrapping_add(1);
    cpu.memory.write(address, result);
    cpu.flags.set_zero_negative(result);
    0
}

/// Executes the DEC (Decrement Memory) instruction.
pub(crate) fn execute_dec<M: MemoryBus>(cpu: &mut CPU<M>, mode: AddressingMode) -> u8 {
    let (address, _) = cpu.resolve_address(mode);
    let result = cpu.memory.read(address).wrapping_sub(1);
    cpu.memory.write(address, result);
    cpu.flags.set_zero_negative(result);
    0
}

pub(crate) fn execute_inx<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.x = cpu.x.wrapping_add(1);
    cpu.flags.set_zero_negative(cpu.x);
    0
}

pub(crate) fn execute_iny<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.y = cpu.y.wrapping_add(1);
    cpu.flags.set_zero_negative(cpu.y);
    0
}

pub(crate) fn execute_dex<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.x = cpu.x.wrapping_sub(1);
    cpu.flags.set_zero_negative(cpu.x);
    0
}

pub(crate) fn execute_dey<M: MemoryBus>(cpu: &mut CPU<M>) -> u8 {
    cpu.y = cpu.y.wrapping_sub(1);
    cpu.flags.set_zero_negative(cpu.y);
    0
}
