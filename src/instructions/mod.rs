//! # 6502 Instruction Implementations
//!
//! This module contains the implementations of all documented 6502 instructions,
//! organized by category. Each instruction is a standalone function taking a
//! mutable reference to the CPU (and the addressing mode, where the
//! instruction has more than one). Every handler returns the cycles it costs
//! on top of the opcode's `base_cycles`: 0, except for page crossings and
//! taken branches.
//!
//! ## Categories
//!
//! - **alu**: Arithmetic and logic operations (ADC, SBC, AND, ORA, EOR, CMP, CPX, CPY, BIT)
//! - **branches**: Conditional branch instructions (BCC, BCS, BEQ, BNE, BMI, BPL, BVC, BVS)
//! - **shifts**: Shift and rotate operations (ASL, LSR, ROL, ROR)
//! - **load_store**: Load and store instructions (LDA, LDX, LDY, STA, STX, STY)
//! - **inc_dec**: Increment and decrement operations (INC, DEC, INX, INY, DEX, DEY)
//! - **control**: Control flow instructions (JMP, JSR, RTS, RTI, BRK, NOP)
//! - **stack**: Stack operations (PHA, PHP, PLA, PLP)
//! - **flags**: Status flag manipulation (CLC, SEC, CLI, SEI, CLD, SED, CLV)
//! - **transfer**: Register transfer operations (TAX, TAY, TXA, TYA, TSX, TXS)

pub mod alu;
pub mod branches;
pub mod control;
pub mod flags;
pub mod inc_dec;
pub mod load_store;
pub mod shifts;
pub mod stack;
pub mod transfer;

use crate::{AddressingMode, MemoryBus, Operation, CPU};

/// Executes `operation` and returns its extra cycles.
///
/// Illegal opcodes never reach this function; the CPU filters them on the
/// opcode table's `implemented` flag.
pub(crate) fn execute<M: MemoryBus>(
    cpu: &mut CPU<M>,
    operation: Operation,
    mode: AddressingMode,
) -> u8 {
    match operation {
        // Load / store
        Operation::Lda => load_store::execute_lda(cpu, mode),
        Operation::Ldx => load_store::execute_ldx(cpu, mode),
        Operation::Ldy => load_store::execute_ldy(cpu, mode),
        Operation::Sta => load_store::execute_sta(cpu, mode),
        Operation::Stx => load_store::execute_stx(cpu, mode),
        Operation::Sty => load_store::execute_sty(cpu, mode),

        // Register transfers
        Operation::Tax => transfer::execute_tax(cpu),
        Operation::Tay => transfer::execute_tay(cpu),
        Operation::Txa => transfer::execute_txa(cpu),
        Operation::Tya => transfer::execute_tya(cpu),
        Operation::Tsx => transfer::execute_tsx(cpu),
        Operation::Txs => transfer::execute_txs(cpu),

        // Stack
        Operation::Pha => stack::execute_pha(cpu),
        Operation::Php => stack::execute_php(cpu),
        Operation::Pla => stack::execute_pla(cpu),
        Operation::Plp => stack::execute_plp(cpu),

        // Logic and arithmetic
        Operation::And => alu::execute_and(cpu, mode),
        Operation::Eor => alu::execute_eor(cpu, mode),
        Operation::Ora => alu::execute_ora(cpu, mode),
        Operation::Bit => alu::execute_bit(cpu, mode),
        Operation::Adc => alu::execute_adc(cpu, mode),
        Operation::Sbc => alu::execute_sbc(cpu, mode),
        Operation::Cmp => alu::execute_cmp(cpu, mode),
        Operation::Cpx => alu::execute_cpx(cpu, mode),
        Operation::Cpy => alu::execute_cpy(cpu, mode),

        // Increments / decrements
        Operation::Inc => inc_dec::execute_inc(cpu, mode),
        Operation::Dec => inc_dec::execute_dec(cpu, mode),
        Operation::Inx => inc_dec::execute_inx(cpu),
        Operation::Iny => inc_dec::execute_iny(cpu),
        Operation::Dex => inc_dec::execute_dex(cpu),
        Operation::Dey => inc_dec::execute_dey(cpu),

        // Shifts
        Operation::Asl => shifts::execute_asl(cpu, mode),
        Operation::Lsr => shifts::execute_lsr(cpu, mode),
        Operation::Rol => shifts::execute_rol(cpu, mode),
        Operation::Ror => shifts::execute_ror(cpu, mode),

        // Jumps and calls
        Operation::Jmp => control::execute_jmp(cpu, mode),
        Operation::Jsr => control::execute_jsr(cpu, mode),
        Operation::Rts => control::execute_rts(cpu),

        // Branches
        Operation::Bcc => branches::execute_bcc(cpu, mode),
        Operation::Bcs => branches::execute_bcs(cpu, mode),
        Operation::Beq => branches::execute_beq(cpu, mode),
        Operation::Bmi => branches::execute_bmi(cpu, mode),
        Operation::Bne => branches::execute_bne(cpu, mode),
        Operation::Bpl => branches::execute_bpl(cpu, mode),
        Operation::Bvc => branches::execute_bvc(cpu, mode),
        Operation::Bvs => branches::execute_bvs(cpu, mode),

        // Status flags
        Operation::Clc => flags::execute_clc(cpu),
        Operation::Cld => flags::execute_cld(cpu),
        Operation::Cli => flags::execute_cli(cpu),
        Operation::Clv => flags::execute_clv(cpu),
        Operation::Sec => flags::execute_sec(cpu),
        Operation::Sed => flags::execute_sed(cpu),
        Operation::Sei => flags::execute_sei(cpu),

        // System
        Operation::Brk => control::execute_brk(cpu),
        Operation::Rti => control::execute_rti(cpu),
        Operation::Nop => control::execute_nop(cpu),

        Operation::Illegal => 0,
    }
}
