//! # Addressing Modes
//!
//! This module defines the 13 addressing modes of the 6502 and the resolvers
//! that turn the operand bytes following an opcode into an effective address
//! and value.
//!
//! Resolvers fetch their operand bytes through the CPU's program counter, so
//! by the time a handler sees the `Operand` the PC already points at the next
//! instruction.

use crate::{MemoryBus, CPU};

/// 6502 addressing mode enumeration.
///
/// # Operand Sizes
///
/// - **0 bytes**: Implicit, Accumulator
/// - **1 byte**: Immediate, ZeroPage, ZeroPageX, ZeroPageY, Relative, IndirectX, IndirectY
/// - **2 bytes**: Absolute, AbsoluteX, AbsoluteY, Indirect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressingMode {
    /// No operand, operation implied by instruction.
    ///
    /// Examples: CLC, RTS, NOP
    Implicit,

    /// Operates directly on the accumulator register.
    ///
    /// Examples: LSR A, ROL A, ASL A
    Accumulator,

    /// 8-bit constant operand in instruction.
    ///
    /// Example: LDA #$10
    Immediate,

    /// 8-bit address in zero page (0x00-0xFF).
    ///
    /// Example: LDA $80
    ZeroPage,

    /// Zero page address indexed by X, wrapping within zero page.
    ///
    /// Example: LDA $80,X
    ZeroPageX,

    /// Zero page address indexed by Y, wrapping within zero page.
    ///
    /// Example: LDX $80,Y
    ZeroPageY,

    /// Signed 8-bit offset for branch instructions.
    ///
    /// Example: BEQ label
    Relative,

    /// Full 16-bit address, little-endian.
    ///
    /// Example: JMP $1234
    Absolute,

    /// 16-bit address indexed by X register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteX,

    /// 16-bit address indexed by Y register.
    ///
    /// May incur +1 cycle penalty if page boundary is crossed.
    AbsoluteY,

    /// Indirect jump through 16-bit pointer. Only used by JMP.
    ///
    /// Example: JMP ($FFFC)
    Indirect,

    /// Indexed indirect: (ZP + X) then dereference.
    ///
    /// Example: LDA ($40,X)
    IndirectX,

    /// Indirect indexed: ZP dereference then + Y.
    ///
    /// Example: LDA ($40),Y
    /// May incur +1 cycle penalty if page boundary is crossed.
    IndirectY,
}

impl AddressingMode {
    /// Number of operand bytes that follow the opcode.
    pub const fn operand_bytes(self) -> u8 {
        match self {
            AddressingMode::Implicit | AddressingMode::Accumulator => 0,
            AddressingMode::Immediate
            | AddressingMode::ZeroPage
            | AddressingMode::ZeroPageX
            | AddressingMode::ZeroPageY
            | AddressingMode::Relative
            | AddressingMode::IndirectX
            | AddressingMode::IndirectY => 1,
            AddressingMode::Absolute
            | AddressingMode::AbsoluteX
            | AddressingMode::AbsoluteY
            | AddressingMode::Indirect => 2,
        }
    }
}

/// Result of resolving an addressing mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Operand {
    /// Byte at the effective address.
    pub value: u8,

    /// Effective address. For Immediate this is the address of the operand
    /// byte itself.
    pub address: u16,

    /// 1 when an indexed mode crossed a page boundary, else 0.
    pub extra_cycles: u8,
}

/// True when `base` and `target` lie in different 256-byte pages.
///
/// ```
/// use nes6502::addressing::page_crossed;
///
/// assert!(!page_crossed(0x1200, 0x12FF));
/// assert!(page_crossed(0x12FF, 0x1300));
/// assert!(page_crossed(0xFFFF, 0x0000));
/// ```
pub const fn page_crossed(base: u16, target: u16) -> bool {
    (base ^ target) >> 8 != 0
}

impl<M: MemoryBus> CPU<M> {
    /// Resolves `mode` to an effective address, consuming its operand bytes.
    ///
    /// Returns the address and the page-crossing cycle penalty. The result is
    /// also latched for the per-cycle continuation (see `CPU::progress`).
    pub(crate) fn resolve_address(&mut self, mode: AddressingMode) -> (u16, u8) {
        let (address, crossed) = match mode {
            AddressingMode::Immediate | AddressingMode::Relative => {
                let address = self.pc;
                self.pc = self.pc.wrapping_add(1);
                (address, false)
            }
            AddressingMode::ZeroPage => (self.fetch_byte() as u16, false),
            AddressingMode::ZeroPageX => (self.fetch_byte().wrapping_add(self.x) as u16, false),
            AddressingMode::ZeroPageY => (self.fetch_byte().wrapping_add(self.y) as u16, false),
            AddressingMode::Absolute => (self.fetch_word(), false),
            AddressingMode::AbsoluteX => {
                let base = self.fetch_word();
                let address = base.wrapping_add(self.x as u16);
                (address, page_crossed(base, address))
            }
            AddressingMode::AbsoluteY => {
                let base = self.fetch_word();
                let address = base.wrapping_add(self.y as u16);
                (address, page_crossed(base, address))
            }
            AddressingMode::Indirect => {
                let pointer = self.fetch_word();
                (self.read_indirect_vector(pointer), false)
            }
            AddressingMode::IndirectX => {
                let zp = self.fetch_byte().wrapping_add(self.x);
                (self.read_word_zero_page(zp), false)
            }
            AddressingMode::IndirectY => {
                let zp = self.fetch_byte();
                let base = self.read_word_zero_page(zp);
                let address = base.wrapping_add(self.y as u16);
                (address, page_crossed(base, address))
            }
            AddressingMode::Implicit | AddressingMode::Accumulator => {
                unreachable!("{:?} has no effective address", mode)
            }
        };

        self.latch_operand(address, crossed);
        (address, crossed as u8)
    }

    /// Resolves `mode` and reads the byte at the effective address.
    pub(crate) fn resolve_operand(&mut self, mode: AddressingMode) -> Operand {
        let (address, extra_cycles) = self.resolve_address(mode);
        Operand {
            value: self.memory.read(address),
            address,
            extra_cycles,
        }
    }

    /// Little-endian word at a zero-page pointer. The high byte comes from
    /// `(zp + 1) & 0xFF`, so a pointer at 0xFF wraps to 0x00.
    fn read_word_zero_page(&self, zp: u8) -> u16 {
        let lo = self.memory.read(zp as u16) as u16;
        let hi = self.memory.read(zp.wrapping_add(1) as u16) as u16;
        (hi << 8) | lo
    }

    /// Target of `JMP (pointer)`.
    fn read_indirect_vector(&self, pointer: u16) -> u16 {
        if self.config.jmp_indirect_page_wrap && pointer & 0x00FF == 0x00FF {
            let lo = self.memory.read(pointer) as u16;
            let hi = self.memory.read(pointer & 0xFF00) as u16;
            (hi << 8) | lo
        } else {
            self.read_word(pointer)
        }
    }
}
