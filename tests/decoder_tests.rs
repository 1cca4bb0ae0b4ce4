//! Integration tests for the linear-sweep decoder

use dis6502::{disassemble, AddressingMode, Mnemonic, OpcodeCategory, OPCODE_TABLE};

const BRANCH_OPCODES: [u8; 8] = [0x10, 0x30, 0x50, 0x70, 0x90, 0xB0, 0xD0, 0xF0];

#[test]
fn test_every_opcode_decodes() {
    for opcode in 0..=255u8 {
        let instructions = disassemble(&[opcode, 0x34, 0x12], 0x4000);
        assert!(!instructions.is_empty(), "opcode ${:02X} produced nothing", opcode);

        let instr = &instructions[0];
        let entry = &OPCODE_TABLE[opcode as usize];
        assert_eq!(instr.address, 0x4000);
        assert_eq!(instr.mnemonic, entry.mnemonic);
        assert_eq!(instr.category, entry.mnemonic.category());
        assert_eq!(instr.base_cycles, entry.base_cycles);
        assert_eq!(instr.page_penalty, entry.page_penalty);
        assert_eq!(instr.label_eligible, entry.addressing_mode.label_eligible());
    }
}

#[test]
fn test_branch_forward_boundary() {
    // BEQ +127 at $1000
    let instructions = disassemble(&[0xF0, 0x7F], 0x1000);
    assert_eq!(instructions.len(), 1);
    assert_eq!(instructions[0].target, Some(0x1000 + 2 + 127));
}

#[test]
fn test_branch_backward_boundary() {
    // BEQ -128 at $1000
    let instructions = disassemble(&[0xF0, 0x80], 0x1000);
    assert_eq!(instructions[0].target, Some(0x1000 + 2 + 128 - 256));
}

#[test]
fn test_branch_to_itself() {
    let instructions = disassemble(&[0xD0, 0xFE], 0x0900);
    assert_eq!(instructions[0].target, Some(0x0900));
}

#[test]
fn test_branch_target_wraps_around_memory() {
    let backwards = disassemble(&[0x90, 0xF0], 0x0002);
    assert_eq!(backwards[0].target, Some(0xFFF4));

    let forwards = disassemble(&[0xB0, 0x10], 0xFFF0);
    assert_eq!(forwards[0].target, Some(0x0002));
}

#[test]
fn test_branch_length_is_two() {
    for opcode in BRANCH_OPCODES {
        let instructions = disassemble(&[opcode, 0x00, 0xEA], 0x2000);

        assert_eq!(instructions.len(), 2, "opcode ${:02X}", opcode);
        assert_eq!(instructions[0].size_bytes, 2);
        assert_eq!(instructions[0].category, OpcodeCategory::Branch);
        assert_eq!(instructions[0].addressing_mode, AddressingMode::Absolute);
        assert!(instructions[0].label_eligible);
        assert_eq!(instructions[1].address, 0x2002);
        assert_eq!(instructions[1].mnemonic, Mnemonic::Nop);
    }
}

#[test]
fn test_zero_page_target_is_one_byte() {
    let instructions = disassemble(&[0x85, 0xFB], 0x2000);
    assert_eq!(instructions[0].target, Some(0x00FB));
    assert_eq!(instructions[0].addressing_mode, AddressingMode::ZeroPage);
}

#[test]
fn test_absolute_target_is_little_endian() {
    let instructions = disassemble(&[0x6C, 0xFC, 0xFF], 0x2000);
    assert_eq!(instructions[0].target, Some(0xFFFC));
    assert_eq!(instructions[0].addressing_mode, AddressingMode::Indirect);
}

#[test]
fn test_data_is_swept_as_code() {
    // RTS followed by the text "HI" decodes "H" (PHA) and "I" (EOR #imm)
    let instructions = disassemble(&[0x60, 0x48, 0x49, 0x00], 0x3000);
    let mnemonics: Vec<Mnemonic> = instructions.iter().map(|i| i.mnemonic).collect();
    assert_eq!(mnemonics, vec![Mnemonic::Rts, Mnemonic::Pha, Mnemonic::Eor]);
}

#[test]
fn test_trailing_partial_instruction_is_emitted() {
    // LDA #$01 then STA with a single operand byte
    let instructions = disassemble(&[0xA9, 0x01, 0x8D, 0x20], 0xC000);

    assert_eq!(instructions.len(), 2);
    let last = &instructions[1];
    assert_eq!(last.mnemonic, Mnemonic::Sta);
    assert_eq!(last.size_bytes, 3);
    assert_eq!(last.operand_bytes, vec![0x20]);
    assert_eq!(last.target, Some(0x0020));
    assert!(last.is_truncated());
}

#[test]
fn test_single_byte_instructions_run_to_end() {
    let instructions = disassemble(&[0xEA, 0xEA, 0xEA], 0xC000);
    assert_eq!(instructions.len(), 3);
    assert!(instructions.iter().all(|i| !i.is_truncated()));
}

#[test]
fn test_illegal_opcodes_decode_with_their_operands() {
    // SLO ($20,X) ; KIL
    let instructions = disassemble(&[0x03, 0x20, 0x02], 0x1000);

    assert_eq!(instructions.len(), 2);
    assert_eq!(instructions[0].mnemonic, Mnemonic::Slo);
    assert_eq!(instructions[0].category, OpcodeCategory::Illegal);
    assert_eq!(instructions[0].addressing_mode, AddressingMode::IndirectX);
    assert_eq!(instructions[0].size_bytes, 2);
    assert_eq!(instructions[1].mnemonic, Mnemonic::Kil);
}

#[test]
fn test_address_wraps_past_ffff() {
    let instructions = disassemble(&[0xEA, 0xEA, 0xEA], 0xFFFF);
    let addresses: Vec<u16> = instructions.iter().map(|i| i.address).collect();
    assert_eq!(addresses, vec![0xFFFF, 0x0000, 0x0001]);
}

#[test]
fn test_complete_instructions_at_end_are_kept() {
    // Two NOPs: the second has no operand bytes after it but needs none
    let nops = disassemble(&[0xEA, 0xEA], 0x1000);
    assert_eq!(nops.len(), 2);

    // LDA #$01 ; LDX #$02 ends exactly at the buffer end
    let loads = disassemble(&[0xA9, 0x01, 0xA2, 0x02], 0x1000);
    assert_eq!(loads.len(), 2);
    assert_eq!(loads[1].mnemonic, Mnemonic::Ldx);
    assert_eq!(loads[1].operand_bytes, vec![0x02]);
    assert!(!loads[1].is_truncated());
}
