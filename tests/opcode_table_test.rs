//! Tests for the opcode metadata table.

use nes6502::opcodes::lookup;
use nes6502::{AddressingMode, Operation, OPCODE_TABLE};

#[test]
fn test_table_has_256_entries() {
    assert_eq!(OPCODE_TABLE.len(), 256);
}

#[test]
fn test_documented_opcode_count() {
    let implemented = OPCODE_TABLE.iter().filter(|m| m.implemented).count();
    assert_eq!(implemented, 151);
}

#[test]
fn test_size_matches_addressing_mode() {
    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        if !metadata.implemented {
            continue;
        }
        assert_eq!(
            metadata.size_bytes,
            1 + metadata.addressing_mode.operand_bytes(),
            "opcode 0x{:02X}",
            opcode
        );
    }
}

#[test]
fn test_base_cycles_in_range() {
    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        if metadata.implemented {
            assert!(
                (2..=7).contains(&metadata.base_cycles),
                "opcode 0x{:02X} has {} cycles",
                opcode,
                metadata.base_cycles
            );
        }
    }
}

#[test]
fn test_spot_checks() {
    let lda = lookup(0xA9);
    assert_eq!(lda.operation, Operation::Lda);
    assert_eq!(lda.mnemonic, "LDA");
    assert_eq!(lda.addressing_mode, AddressingMode::Immediate);
    assert_eq!(lda.base_cycles, 2);

    let sta = lookup(0x85);
    assert_eq!(sta.operation, Operation::Sta);
    assert_eq!(sta.addressing_mode, AddressingMode::ZeroPage);
    assert_eq!(sta.base_cycles, 3);

    let jmp = lookup(0x6C);
    assert_eq!(jmp.operation, Operation::Jmp);
    assert_eq!(jmp.addressing_mode, AddressingMode::Indirect);
    assert_eq!(jmp.base_cycles, 5);

    let brk = lookup(0x00);
    assert_eq!(brk.operation, Operation::Brk);
    assert_eq!(brk.base_cycles, 7);

    let asl = lookup(0x0A);
    assert_eq!(asl.addressing_mode, AddressingMode::Accumulator);
    assert_eq!(asl.size_bytes, 1);
}

#[test]
fn test_illegal_opcodes() {
    for opcode in [0x02, 0x1A, 0x80, 0x82, 0xEB, 0xFF] {
        let metadata = lookup(opcode);
        assert!(!metadata.implemented, "0x{:02X}", opcode);
        assert_eq!(metadata.operation, Operation::Illegal);
    }
}
