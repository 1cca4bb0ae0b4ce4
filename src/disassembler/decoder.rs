//! Instruction decoder for the 6502 disassembler

use crate::addressing::AddressingMode;
use crate::disassembler::Instruction;
use crate::opcodes::OPCODE_TABLE;

/// Decode a single instruction from a byte slice
///
/// # Arguments
///
/// * `bytes` - The byte slice starting at the instruction to decode
/// * `address` - The memory address of this instruction
///
/// # Returns
///
/// `None` only when `bytes` is empty. Every opcode byte has a table entry, so an
/// undocumented opcode decodes like any other. When the slice ends before the
/// operand does, the missing bytes read as zero for the target computation and
/// are left out of `operand_bytes`.
pub fn decode_instruction(bytes: &[u8], address: u16) -> Option<Instruction> {
    let (&opcode, rest) = bytes.split_first()?;
    let metadata = &OPCODE_TABLE[opcode as usize];
    let lo = rest.first().copied().unwrap_or(0);
    let hi = rest.get(1).copied().unwrap_or(0);

    let (addressing_mode, size_bytes, target) = match metadata.addressing_mode {
        AddressingMode::Relative => {
            // Signed displacement from the byte after the 2-byte branch.
            let target = address.wrapping_add(2).wrapping_add(lo as i8 as u16);
            (AddressingMode::Absolute, 2, Some(target))
        }
        mode => {
            let target = match mode.size_bytes() {
                3 => Some(u16::from_le_bytes([lo, hi])),
                2 => Some(lo as u16),
                _ => None,
            };
            (mode, mode.size_bytes(), target)
        }
    };

    let operand_bytes: Vec<u8> = rest
        .iter()
        .take((size_bytes - 1) as usize)
        .copied()
        .collect();

    Some(Instruction {
        address,
        opcode,
        mnemonic: metadata.mnemonic,
        category: metadata.mnemonic.category(),
        addressing_mode,
        operand_bytes,
        size_bytes,
        label_eligible: metadata.addressing_mode.label_eligible(),
        target,
        base_cycles: metadata.base_cycles,
        page_penalty: metadata.page_penalty,
    })
}
