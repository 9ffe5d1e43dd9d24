//! # Opcode Metadata Table
//!
//! The complete 256-entry opcode table, indexed by the opcode byte. It is a
//! `const` array, so lookup is a plain index with no runtime initialization.
//!
//! The table covers:
//! - **151 documented instructions** - Official NMOS 6502 opcodes
//! - **105 illegal/undocumented opcodes** - Marked with "???" mnemonic and
//!   never executed (the CPU reports them and charges one cycle)
//!
//! Each entry names the operation to dispatch to, its addressing mode, base
//! cycle cost and encoded size. Page-crossing and branch penalties are added
//! on top of `base_cycles` by the instruction handlers.

use crate::addressing::AddressingMode;

/// The instruction an opcode decodes to, independent of addressing mode.
///
/// The CPU dispatches on this with a `match`; see `instructions::execute`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Adc,
    And,
    Asl,
    Bcc,
    Bcs,
    Beq,
    Bit,
    Bmi,
    Bne,
    Bpl,
    Brk,
    Bvc,
    Bvs,
    Clc,
    Cld,
    Cli,
    Clv,
    Cmp,
    Cpx,
    Cpy,
    Dec,
    Dex,
    Dey,
    Eor,
    Inc,
    Inx,
    Iny,
    Jmp,
    Jsr,
    Lda,
    Ldx,
    Ldy,
    Lsr,
    Nop,
    Ora,
    Pha,
    Php,
    Pla,
    Plp,
    Rol,
    Ror,
    Rti,
    Rts,
    Sbc,
    Sec,
    Sed,
    Sei,
    Sta,
    Stx,
    Sty,
    Tax,
    Tay,
    Tsx,
    Txa,
    Txs,
    Tya,
    /// Undocumented opcode. Not implemented.
    Illegal,
}

impl Operation {
    /// Three-letter assembler mnemonic, or "???" for illegal opcodes.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Operation::Adc => "ADC",
            Operation::And => "AND",
            Operation::Asl => "ASL",
            Operation::Bcc => "BCC",
            Operation::Bcs => "BCS",
            Operation::Beq => "BEQ",
            Operation::Bit => "BIT",
            Operation::Bmi => "BMI",
            Operation::Bne => "BNE",
            Operation::Bpl => "BPL",
            Operation::Brk => "BRK",
            Operation::Bvc => "BVC",
            Operation::Bvs => "BVS",
            Operation::Clc => "CLC",
            Operation::Cld => "CLD",
            Operation::Cli => "CLI",
            Operation::Clv => "CLV",
            Operation::Cmp => "CMP",
            Operation::Cpx => "CPX",
            Operation::Cpy => "CPY",
            Operation::Dec => "DEC",
            Operation::Dex => "DEX",
            Operation::Dey => "DEY",
            Operation::Eor => "EOR",
            Operation::Inc => "INC",
            Operation::Inx => "INX",
            Operation::Iny => "INY",
            Operation::Jmp => "JMP",
            Operation::Jsr => "JSR",
            Operation::Lda => "LDA",
            Operation::Ldx => "LDX",
            Operation::Ldy => "LDY",
            Operation::Lsr => "LSR",
            Operation::Nop => "NOP",
            Operation::Ora => "ORA",
            Operation::Pha => "PHA",
            Operation::Php => "PHP",
            Operation::Pla => "PLA",
            Operation::Plp => "PLP",
            Operation::Rol => "ROL",
            Operation::Ror => "ROR",
            Operation::Rti => "RTI",
            Operation::Rts => "RTS",
            Operation::Sbc => "SBC",
            Operation::Sec => "SEC",
            Operation::Sed => "SED",
            Operation::Sei => "SEI",
            Operation::Sta => "STA",
            Operation::Stx => "STX",
            Operation::Sty => "STY",
            Operation::Tax => "TAX",
            Operation::Tay => "TAY",
            Operation::Tsx => "TSX",
            Operation::Txa => "TXA",
            Operation::Txs => "TXS",
            Operation::Tya => "TYA",
            Operation::Illegal => "???",
        }
    }
}

/// Metadata for a single 6502 opcode.
///
/// # Examples
///
/// ```
/// use nes6502::{AddressingMode, Operation, OPCODE_TABLE};
///
/// // Look up LDA immediate (opcode 0xA9)
/// let lda_imm = &OPCODE_TABLE[0xA9];
/// assert_eq!(lda_imm.mnemonic, "LDA");
/// assert_eq!(lda_imm.operation, Operation::Lda);
/// assert_eq!(lda_imm.addressing_mode, AddressingMode::Immediate);
/// assert_eq!(lda_imm.base_cycles, 2);
/// assert_eq!(lda_imm.size_bytes, 2);
/// assert!(lda_imm.implemented);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpcodeMetadata {
    /// Instruction mnemonic (e.g., "LDA", "STA", "???" for illegal opcodes).
    pub mnemonic: &'static str,

    /// Operation the CPU dispatches to.
    pub operation: Operation,

    /// Addressing mode for this instruction.
    pub addressing_mode: AddressingMode,

    /// Base cycle cost (before page crossing and branch penalties).
    ///
    /// Illegal opcodes are marked with 0 cycles.
    pub base_cycles: u8,

    /// Total instruction size in bytes (opcode + operands).
    pub size_bytes: u8,

    /// Whether the CPU executes this opcode. False only for illegal opcodes.
    pub implemented: bool,
}

const fn op(
    operation: Operation,
    addressing_mode: AddressingMode,
    base_cycles: u8,
) -> OpcodeMetadata {
    OpcodeMetadata {
        mnemonic: operation.mnemonic(),
        operation,
        addressing_mode,
        base_cycles,
        size_bytes: 1 + addressing_mode.operand_bytes(),
        implemented: true,
    }
}

const ILLEGAL: OpcodeMetadata = OpcodeMetadata {
    mnemonic: "???",
    operation: Operation::Illegal,
    addressing_mode: AddressingMode::Implicit,
    base_cycles: 0,
    size_bytes: 1,
    implemented: false,
};

/// Returns the metadata for `opcode`.
///
/// ```
/// use nes6502::opcodes::lookup;
///
/// assert_eq!(lookup(0x00).mnemonic, "BRK");
/// assert!(!lookup(0x02).implemented);
/// ```
pub fn lookup(opcode: u8) -> &'static OpcodeMetadata {
    &OPCODE_TABLE[opcode as usize]
}

/// Complete 256-entry opcode metadata table indexed by opcode byte value.
///
/// # Examples
///
/// ```
/// use nes6502::OPCODE_TABLE;
///
/// let brk = &OPCODE_TABLE[0x00];
/// assert_eq!(brk.base_cycles, 7);
///
/// let illegal = &OPCODE_TABLE[0x02];
/// assert_eq!(illegal.mnemonic, "???");
/// assert_eq!(illegal.base_cycles, 0);
/// ```
pub const OPCODE_TABLE: [OpcodeMetadata; 256] = [
    // 0x00 - 0x0F
    op(Operation::Brk, AddressingMode::Implicit, 7),
    op(Operation::Ora, AddressingMode::IndirectX, 6),
    ILLEGAL,
    ILLEGAL,
    ILLEGAL,
    op(Operation::Ora, AddressingMode::ZeroPage, 3),
    op(Operation::Asl, AddressingMode::ZeroPage, 5),
    ILLEGAL,
    op(Operation::Php, AddressingMode::Implicit, 3),
    op(Operation::Ora, AddressingMode::Immediate, 2),
    op(Operation::Asl, AddressingMode::Accumulator, 2),
    ILLEGAL,
    ILLEGAL,
    op(Operation::Ora, AddressingMode::Absolute, 4),
    op(Operation::Asl, AddressingMode::Absolute, 6),
    ILLEGAL,
    // 0x10 - 0x1F
    op(Operation::Bpl, AddressingMode::Relative, 2),
    op(Operation::Ora, AddressingMode::IndirectY, 5),
    ILLEGAL,
    ILLEGAL,
    ILLEGAL,
    op(Operation::Ora, AddressingMode::ZeroPageX, 4),
    op(Operation::Asl, AddressingMode::ZeroPageX, 6),
    ILLEGAL,
    op(Operation::Clc, AddressingMode::Implicit, 2),
    op(Operation::Ora, AddressingMode::AbsoluteY, 4),
    ILLEGAL,
    ILLEGAL,
    ILLEGAL,
    op(Operation::Ora, AddressingMode::AbsoluteX, 4),
    op(Operation::Asl, AddressingMode::AbsoluteX, 7),
    ILLEGAL,
    // 0x20 - 0x2F
    op(Operation::Jsr, AddressingMode::Absolute, 6),
    op(Operation::And, AddressingMode::IndirectX, 6),
    ILLEGAL,
    ILLEGAL,
    op(Operation::Bit, AddressingMode::ZeroPage, 3),
    op(Operation::And, AddressingMode::ZeroPage, 3),
    op(Operation::Rol, AddressingMode::ZeroPage, 5),
    ILLEGAL,
    op(Operation::Plp, AddressingMode::Implicit, 4),
    op(Operation::And, AddressingMode::Immediate, 2),
    op(Operation::Rol, AddressingMode::Accumulator, 2),
    ILLEGAL,
    op(Operation::Bit, AddressingMode::Absolute, 4),
    op(Operation::And, AddressingMode::Absolute, 4),
    op(Operation::Rol, AddressingMode::Absolute, 6),
    ILLEGAL,
    // 0x30 - 0x3F
    op(Operation::Bmi, AddressingMode::Relative, 2),
    op(Operation::And, AddressingMode::IndirectY, 5),
    ILLEGAL,
    ILLEGAL,
    ILLEGAL,
    op(Operation::And, AddressingMode::ZeroPageX, 4),
    op(Operation::Rol, AddressingMode::ZeroPageX, 6),
    ILLEGAL,
    op(Operation::Sec, AddressingMode::Implicit, 2),
    op(Operation::And, AddressingMode::AbsoluteY, 4),
    ILLEGAL,
    ILLEGAL,
    ILLEGAL,
    op(Operation::And, AddressingMode::AbsoluteX, 4),
    op(Operation::Rol, AddressingMode::AbsoluteX, 7),
    ILLEGAL,
    // 0x40 - 0x4F
    op(Operation::Rti, AddressingMode::Implicit, 6),
    op(Operation::Eor, AddressingMode::IndirectX, 6),
    ILLEGAL,
    ILLEGAL,
    ILLEGAL,
    op(Operation::Eor, AddressingMode::ZeroPage, 3),
    op(Operation::Lsr, AddressingMode::ZeroPage, 5),
    ILLEGAL,
    op(Operation::Pha, AddressingMode::Implicit, 3),
    op(Operation::Eor, AddressingMode::Immediate, 2),
    op(Operation::Lsr, AddressingMode::Accumulator, 2),
    ILLEGAL,
    op(Operation::Jmp, AddressingMode::Absolute, 3),
    op(Operation::Eor, AddressingMode::Absolute, 4),
    op(Operation::Lsr, AddressingMode::Absolute, 6),
    ILLEGAL,
    // 0x50 - 0x5F
    op(Operation::Bvc, AddressingMode::Relative, 2),
    op(Operation::Eor, AddressingMode::IndirectY, 5),
    ILLEGAL,
    ILLEGAL,
    ILLEGAL,
    op(Operation::Eor, AddressingMode::ZeroPageX, 4),
    op(Operation::Lsr, AddressingMode::ZeroPageX, 6),
    ILLEGAL,
    op(Operation::Cli, AddressingMode::Implicit, 2),
    op(Operation::Eor, AddressingMode::AbsoluteY, 4),
    ILLEGAL,
    ILLEGAL,
    ILLEGAL,
    op(Operation::Eor, AddressingMode::AbsoluteX, 4),
    op(Operation::Lsr, AddressingMode::AbsoluteX, 7),
    ILLEGAL,
    // 0x60 - 0x6F
    op(Operation::Rts, AddressingMode::Implicit, 6),
    op(Operation::Adc, AddressingMode::IndirectX, 6),
    ILLEGAL,
    ILLEGAL,
    ILLEGAL,
    op(Operation::Adc, AddressingMode::ZeroPage, 3),
    op(Operation::Ror, AddressingMode::ZeroPage, 5),
    ILLEGAL,
    op(Operation::Pla, AddressingMode::Implicit, 4),
    op(Operation::Adc, AddressingMode::Immediate, 2),
    op(Operation::Ror, AddressingMode::Accumulator, 2),
    ILLEGAL,
    op(Operation::Jmp, AddressingMode::Indirect, 5),
    op(Operation::Adc, AddressingMode::Absolute, 4),
    op(Operation::Ror, AddressingMode::Absolute, 6),
    ILLEGAL,
    // 0x70 - 0x7F
    op(Operation::Bvs, AddressingMode::Relative, 2),
    op(Operation::Adc, AddressingMode::IndirectY, 5),
    ILLEGAL,
    ILLEGAL,
    ILLEGAL,
    op(Operation::Adc, AddressingMode::ZeroPageX, 4),
    op(Operation::Ror, AddressingMode::ZeroPageX, 6),
    ILLEGAL,
    op(Operation::Sei, AddressingMode::Implicit, 2),
    op(Operation::Adc, AddressingMode::AbsoluteY, 4),
    ILLEGAL,
    ILLEGAL,
    ILLEGAL,
    op(Operation::Adc, AddressingMode::AbsoluteX, 4),
    op(Operation::Ror, AddressingMode::AbsoluteX, 7),
    ILLEGAL,
    // 0x80 - 0x8F
    ILLEGAL,
    op(Operation::Sta, AddressingMode::IndirectX, 6),
    ILLEGAL,
    ILLEGAL,
    op(Operation::Sty, AddressingMode::ZeroPage, 3),
    op(Operation::Sta, AddressingMode::ZeroPage, 3),
    op(Operation::Stx, AddressingMode::ZeroPage, 3),
    ILLEGAL,
    op(Operation::Dey, AddressingMode::Implicit, 2),
    ILLEGAL,
    op(Operation::Txa, AddressingMode::Implicit, 2),
    ILLEGAL,
    op(Operation::Sty, AddressingMode::Absolute, 4),
    op(Operation::Sta, AddressingMode::Absolute, 4),
    op(Operation::Stx, AddressingMode::Absolute, 4),
    ILLEGAL,
    // 0x90 - 0x9F
    op(Operation::Bcc, AddressingMode::Relative, 2),
    op(Operation::Sta, AddressingMode::IndirectY, 6),
    ILLEGAL,
    ILLEGAL,
    op(Operation::Sty, AddressingMode::ZeroPageX, 4),
    op(Operation::Sta, AddressingMode::ZeroPageX, 4),
    op(Operation::Stx, AddressingMode::ZeroPageY, 4),
    ILLEGAL,
    op(Operation::Tya, AddressingMode::Implicit, 2),
    op(Operation::Sta, AddressingMode::AbsoluteY, 5),
    op(Operation::Txs, AddressingMode::Implicit, 2),
    ILLEGAL,
    ILLEGAL,
    op(Operation::Sta, AddressingMode::AbsoluteX, 5),
    ILLEGAL,
    ILLEGAL,
    // 0xA0 - 0xAF
    op(Operation::Ldy, AddressingMode::Immediate, 2),
    op(Operation::Lda, AddressingMode::IndirectX, 6),
    op(Operation::Ldx, AddressingMode::Immediate, 2),
    ILLEGAL,
    op(Operation::Ldy, AddressingMode::ZeroPage, 3),
    op(Operation::Lda, AddressingMode::ZeroPage, 3),
    op(Operation::Ldx, AddressingMode::ZeroPage, 3),
    ILLEGAL,
    op(Operation::Tay, AddressingMode::Implicit, 2),
    op(Operation::Lda, AddressingMode::Immediate, 2),
    op(Operation::Tax, AddressingMode::Implicit, 2),
    ILLEGAL,
    op(Operation::Ldy, AddressingMode::Absolute, 4),
    op(Operation::Lda, AddressingMode::Absolute, 4),
    op(Operation::Ldx, AddressingMode::Absolute, 4),
    ILLEGAL,
    // 0xB0 - 0xBF
    op(Operation::Bcs, AddressingMode::Relative, 2),
    op(Operation::Lda, AddressingMode::IndirectY, 5),
    ILLEGAL,
    ILLEGAL,
    op(Operation::Ldy, AddressingMode::ZeroPageX, 4),
    op(Operation::Lda, AddressingMode::ZeroPageX, 4),
    op(Operation::Ldx, AddressingMode::ZeroPageY, 4),
    ILLEGAL,
    op(Operation::Clv, AddressingMode::Implicit, 2),
    op(Operation::Lda, AddressingMode::AbsoluteY, 4),
    op(Operation::Tsx, AddressingMode::Implicit, 2),
    ILLEGAL,
    op(Operation::Ldy, AddressingMode::AbsoluteX, 4),
    op(Operation::Lda, AddressingMode::AbsoluteX, 4),
    op(Operation::Ldx, AddressingMode::AbsoluteY, 4),
    ILLEGAL,
    // 0xC0 - 0xCF
    op(Operation::Cpy, AddressingMode::Immediate, 2),
    op(Operation::Cmp, AddressingMode::IndirectX, 6),
    ILLEGAL,
    ILLEGAL,
    op(Operation::Cpy, AddressingMode::ZeroPage, 3),
    op(Operation::Cmp, AddressingMode::ZeroPage, 3),
    op(Operation::Dec, AddressingMode::ZeroPage, 5),
    ILLEGAL,
    op(Operation::Iny, AddressingMode::Implicit, 2),
    op(Operation::Cmp, AddressingMode::Immediate, 2),
    op(Operation::Dex, AddressingMode::Implicit, 2),
    ILLEGAL,
    op(Operation::Cpy, AddressingMode::Absolute, 4),
    op(Operation::Cmp, AddressingMode::Absolute, 4),
    op(Operation::Dec, AddressingMode::Absolute, 6),
    ILLEGAL,
    // 0xD0 - 0xDF
    op(Operation::Bne, AddressingMode::Relative, 2),
    op(Operation::Cmp, AddressingMode::IndirectY, 5),
    ILLEGAL,
    ILLEGAL,
    ILLEGAL,
    op(Operation::Cmp, AddressingMode::ZeroPageX, 4),
    op(Operation::Dec, AddressingMode::ZeroPageX, 6),
    ILLEGAL,
    op(Operation::Cld, AddressingMode::Implicit, 2),
    op(Operation::Cmp, AddressingMode::AbsoluteY, 4),
    ILLEGAL,
    ILLEGAL,
    ILLEGAL,
    op(Operation::Cmp, AddressingMode::AbsoluteX, 4),
    op(Operation::Dec, AddressingMode::AbsoluteX, 7),
    ILLEGAL,
    // 0xE0 - 0xEF
    op(Operation::Cpx, AddressingMode::Immediate, 2),
    op(Operation::Sbc, AddressingMode::IndirectX, 6),
    ILLEGAL,
    ILLEGAL,
    op(Operation::Cpx, AddressingMode::ZeroPage, 3),
    op(Operation::Sbc, AddressingMode::ZeroPage, 3),
    op(Operation::Inc, AddressingMode::ZeroPage, 5),
    ILLEGAL,
    op(Operation::Inx, AddressingMode::Implicit, 2),
    op(Operation::Sbc, AddressingMode::Immediate, 2),
    op(Operation::Nop, AddressingMode::Implicit, 2),
    ILLEGAL,
    op(Operation::Cpx, AddressingMode::Absolute, 4),
    op(Operation::Sbc, AddressingMode::Absolute, 4),
    op(Operation::Inc, AddressingMode::Absolute, 6),
    ILLEGAL,
    // 0xF0 - 0xFF
    op(Operation::Beq, AddressingMode::Relative, 2),
    op(Operation::Sbc, AddressingMode::IndirectY, 5),
    ILLEGAL,
    ILLEGAL,
    ILLEGAL,
    op(Operation::Sbc, AddressingMode::ZeroPageX, 4),
    op(Operation::Inc, AddressingMode::ZeroPageX, 6),
    ILLEGAL,
    op(Operation::Sed, AddressingMode::Implicit, 2),
    op(Operation::Sbc, AddressingMode::AbsoluteY, 4),
    ILLEGAL,
    ILLEGAL,
    ILLEGAL,
    op(Operation::Sbc, AddressingMode::AbsoluteX, 4),
    op(Operation::Inc, AddressingMode::AbsoluteX, 7),
    ILLEGAL,
];
