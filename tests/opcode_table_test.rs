//! Opcode table validation tests
//!
//! Verifies that the opcode, mnemonic and addressing-mode tables are complete and
//! agree entry for entry with the reference 6502 opcode matrix.

use dis6502::{AddressingMode, OpcodeCategory, MNEMONIC_TABLE, MODE_TABLE, OPCODE_TABLE};

/// (mnemonic id, mode id, base cycles, page penalty) for opcodes $00-$FF.
#[rustfmt::skip]
const REFERENCE: [(u8, u8, u8, u8); 256] = [
    (10, 0,7,0), (34, 5,6,0), (64, 0,0,0), (56, 5,8,0), (33, 2,3,0), (34, 2,3,0), ( 2, 2,5,0), (56, 2,5,0), // $00
    (36, 0,3,0), (34, 1,2,0), ( 2, 0,2,0), (65, 1,2,0), (33, 7,4,0), (34, 7,4,0), ( 2, 7,6,0), (56, 7,6,0), // $08
    ( 9,11,2,1), (34, 6,5,1), (64, 0,0,0), (56, 6,8,0), (33, 3,4,0), (34, 3,4,0), ( 2, 3,6,0), (56, 3,6,0), // $10
    (13, 0,2,0), (34, 9,4,1), (33, 0,2,0), (56, 9,7,0), (33, 8,4,1), (34, 8,4,1), ( 2, 8,7,0), (56, 8,7,0), // $18
    (28, 7,6,0), ( 1, 5,6,0), (64, 0,0,0), (57, 5,8,0), ( 6, 2,3,0), ( 1, 2,3,0), (39, 2,5,0), (57, 2,5,0), // $20
    (38, 0,4,0), ( 1, 1,2,0), (39, 0,2,0), (65, 1,2,0), ( 6, 7,4,0), ( 1, 7,4,0), (39, 7,6,0), (57, 7,6,0), // $28
    ( 7,11,2,1), ( 1, 6,5,1), (64, 0,0,0), (57, 6,8,0), (33, 3,4,0), ( 1, 3,4,0), (39, 3,6,0), (57, 3,6,0), // $30
    (44, 0,2,0), ( 1, 9,4,1), (33, 0,2,0), (57, 9,7,0), (33, 8,4,1), ( 1, 8,4,1), (39, 8,7,0), (57, 8,7,0), // $38
    (41, 0,6,0), (23, 5,6,0), (64, 0,0,0), (58, 5,8,0), (33, 2,3,0), (23, 2,3,0), (32, 2,5,0), (58, 2,5,0), // $40
    (35, 0,3,0), (23, 1,2,0), (32, 0,2,0), (66, 1,2,0), (27, 7,3,0), (23, 7,4,0), (32, 7,6,0), (58, 7,6,0), // $48
    (11,11,2,1), (23, 6,5,1), (64, 0,0,0), (58, 6,8,0), (33, 3,4,0), (23, 3,4,0), (32, 3,6,0), (58, 3,6,0), // $50
    (15, 0,2,0), (23, 9,4,1), (33, 0,2,0), (58, 9,7,0), (33, 8,4,1), (23, 8,4,1), (32, 8,7,0), (58, 8,7,0), // $58
    (42, 0,6,0), ( 0, 5,6,0), (64, 0,0,0), (59, 5,8,0), (33, 2,3,0), ( 0, 2,3,0), (40, 2,5,0), (59, 2,5,0), // $60
    (37, 0,4,0), ( 0, 1,2,0), (40, 0,2,0), (67, 1,2,0), (27,10,5,0), ( 0, 7,4,0), (40, 7,6,0), (59, 7,6,0), // $68
    (12,11,2,1), ( 0, 6,5,1), (64, 0,0,0), (59, 6,8,0), (33, 3,4,0), ( 0, 3,4,0), (40, 3,6,0), (59, 3,6,0), // $70
    (46, 0,2,0), ( 0, 9,4,1), (33, 0,2,0), (59, 9,7,0), (33, 8,4,1), ( 0, 8,4,1), (40, 8,7,0), (59, 8,7,0), // $78
    (33, 1,2,0), (47, 5,6,0), (33, 1,2,0), (60, 5,6,0), (49, 2,3,0), (47, 2,3,0), (48, 2,3,0), (60, 2,3,0), // $80
    (22, 0,2,0), (33, 1,2,0), (53, 0,2,0), (68, 1,2,0), (49, 7,4,0), (47, 7,4,0), (48, 7,4,0), (60, 7,4,0), // $88
    ( 3,11,2,1), (47, 6,6,0), (64, 0,0,0), (71, 6,6,0), (49, 3,4,0), (47, 3,4,0), (48, 4,4,0), (60, 4,4,0), // $90
    (55, 0,2,0), (47, 9,5,0), (54, 0,2,0), (74, 9,5,0), (72, 8,5,0), (47, 8,5,0), (73, 9,5,0), (71, 9,5,0), // $98
    (31, 1,2,0), (29, 5,6,0), (30, 1,2,0), (61, 5,6,0), (31, 2,3,0), (29, 2,3,0), (30, 2,3,0), (61, 2,3,0), // $A0
    (51, 0,2,0), (29, 1,2,0), (50, 0,2,0), (61, 1,2,0), (31, 7,4,0), (29, 7,4,0), (30, 7,4,0), (61, 7,4,0), // $A8
    ( 4,11,2,1), (29, 6,5,1), (64, 0,0,0), (61, 6,5,1), (31, 3,4,0), (29, 3,4,0), (30, 4,4,0), (61, 4,4,0), // $B0
    (16, 0,2,0), (29, 9,4,1), (52, 0,2,0), (75, 9,4,1), (31, 8,4,1), (29, 8,4,1), (30, 9,4,1), (61, 9,4,1), // $B8
    (19, 1,2,0), (17, 5,6,0), (33, 1,2,0), (62, 5,8,0), (19, 2,3,0), (17, 2,3,0), (20, 2,5,0), (62, 2,5,0), // $C0
    (26, 0,2,0), (17, 1,2,0), (21, 0,2,0), (69, 1,2,0), (19, 7,4,0), (17, 7,4,0), (20, 7,6,0), (62, 7,6,0), // $C8
    ( 8,11,2,1), (17, 6,5,1), (64, 0,0,0), (62, 6,8,0), (33, 3,4,0), (17, 3,4,0), (20, 3,6,0), (62, 3,6,0), // $D0
    (14, 0,2,0), (17, 9,4,1), (33, 0,2,0), (62, 9,7,0), (33, 8,4,1), (17, 8,4,1), (20, 8,7,0), (62, 8,7,0), // $D8
    (18, 1,2,0), (43, 5,6,0), (33, 1,2,0), (63, 5,8,0), (18, 2,3,0), (43, 2,3,0), (24, 2,5,0), (63, 2,5,0), // $E0
    (25, 0,2,0), (43, 1,2,0), (33, 0,2,0), (43, 1,2,0), (18, 7,4,0), (43, 7,4,0), (24, 7,6,0), (63, 7,6,0), // $E8
    ( 5,11,2,1), (43, 6,5,1), (64, 0,0,0), (63, 6,8,0), (33, 3,4,0), (43, 3,4,0), (24, 3,6,0), (63, 3,6,0), // $F0
    (45, 0,2,0), (43, 9,4,1), (33, 0,2,0), (63, 9,7,0), (33, 8,4,1), (43, 8,4,1), (24, 8,7,0), (63, 8,7,0), // $F8
];

#[test]
fn test_opcode_table_matches_reference() {
    for (opcode, (entry, reference)) in OPCODE_TABLE.iter().zip(REFERENCE.iter()).enumerate() {
        let (mnemonic, mode, cycles, penalty) = *reference;
        assert_eq!(entry.mnemonic as u8, mnemonic, "mnemonic of ${:02X}", opcode);
        assert_eq!(entry.addressing_mode as u8, mode, "mode of ${:02X}", opcode);
        assert_eq!(entry.base_cycles, cycles, "cycles of ${:02X}", opcode);
        assert_eq!(entry.page_penalty, penalty == 1, "penalty of ${:02X}", opcode);
    }
}

#[test]
fn test_mode_distribution() {
    let count = |mode: AddressingMode| {
        OPCODE_TABLE
            .iter()
            .filter(|m| m.addressing_mode == mode)
            .count()
    };

    assert_eq!(count(AddressingMode::Implied), 47);
    assert_eq!(count(AddressingMode::Immediate), 24);
    assert_eq!(count(AddressingMode::ZeroPage), 32);
    assert_eq!(count(AddressingMode::ZeroPageX), 28);
    assert_eq!(count(AddressingMode::ZeroPageY), 4);
    assert_eq!(count(AddressingMode::IndirectX), 16);
    assert_eq!(count(AddressingMode::IndirectY), 16);
    assert_eq!(count(AddressingMode::Absolute), 32);
    assert_eq!(count(AddressingMode::AbsoluteX), 28);
    assert_eq!(count(AddressingMode::AbsoluteY), 20);
    assert_eq!(count(AddressingMode::Indirect), 1);
    assert_eq!(count(AddressingMode::Relative), 8);
}

#[test]
fn test_category_distribution() {
    let count = |category: OpcodeCategory| {
        OPCODE_TABLE
            .iter()
            .filter(|m| m.mnemonic.category() == category)
            .count()
    };

    assert_eq!(count(OpcodeCategory::Normal), 45);
    assert_eq!(count(OpcodeCategory::Subroutine), 1);
    assert_eq!(count(OpcodeCategory::Jump), 2);
    assert_eq!(count(OpcodeCategory::Return), 3);
    assert_eq!(count(OpcodeCategory::Illegal), 77);
    assert_eq!(count(OpcodeCategory::Branch), 8);
    assert_eq!(count(OpcodeCategory::Load), 75);
    assert_eq!(count(OpcodeCategory::Store), 45);
}

#[test]
fn test_page_penalty_count() {
    let penalties = OPCODE_TABLE.iter().filter(|m| m.page_penalty).count();
    assert_eq!(penalties, 40);
}

#[test]
fn test_documented_opcodes_have_nonzero_cycles() {
    for (opcode, metadata) in OPCODE_TABLE.iter().enumerate() {
        if metadata.mnemonic.category() != OpcodeCategory::Illegal {
            assert!(
                metadata.base_cycles > 0,
                "Documented opcode 0x{:02X} ({}) has zero cycles",
                opcode,
                metadata.mnemonic.name()
            );
        }
    }
}

#[test]
fn test_mnemonic_table() {
    assert_eq!(MNEMONIC_TABLE.len(), 76);
    assert!(MNEMONIC_TABLE
        .iter()
        .all(|m| m.name.len() == 3 && m.name.chars().all(|c| c.is_ascii_lowercase())));

    let illegal = MNEMONIC_TABLE
        .iter()
        .filter(|m| m.category == OpcodeCategory::Illegal)
        .count();
    assert_eq!(illegal, 20);
}

#[test]
fn test_mode_table() {
    let sizes: Vec<u8> = MODE_TABLE.iter().map(|m| m.size_bytes).collect();
    assert_eq!(sizes, vec![1, 2, 2, 2, 2, 2, 2, 3, 3, 3, 3, 3]);

    let eligible = MODE_TABLE.iter().filter(|m| m.label_eligible).count();
    assert_eq!(eligible, 10);
}
