//! 6502 Disassembler Module
//!
//! Converts binary machine code into an annotated assembler listing.
//!
//! The work happens in three passes, each finished before the next starts:
//!
//! 1. [`disassemble`] sweeps the bytes linearly into [`Instruction`]s.
//! 2. [`labels::synthesize_labels`] names the addresses those instructions refer to.
//! 3. [`formatter::render`] writes the listing text.
//!
//! [`dissect`] runs all three.

pub mod decoder;
pub mod formatter;
pub mod labels;

use log::{debug, info};

use crate::addressing::AddressingMode;
use crate::opcodes::{Mnemonic, OpcodeCategory};

use formatter::{RenderOptions, SourceInfo};
use labels::{LabelDefinition, LabelSet};

/// A single disassembled instruction with full metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Instruction {
    /// Memory address where this instruction starts
    pub address: u16,

    /// The opcode byte value (0x00-0xFF)
    pub opcode: u8,

    pub mnemonic: Mnemonic,

    /// Behavioral class of the mnemonic
    pub category: OpcodeCategory,

    /// Addressing mode used for rendering. Branches are reported as
    /// [`AddressingMode::Absolute`] with their resolved target.
    pub addressing_mode: AddressingMode,

    /// Operand bytes present in the input (fewer than `size_bytes - 1` only for a
    /// trailing instruction cut off by the end of input)
    pub operand_bytes: Vec<u8>,

    /// Total size in bytes (1-3 bytes: opcode + operands)
    pub size_bytes: u8,

    /// Whether the operand may be replaced by a label
    pub label_eligible: bool,

    /// Operand value: the 16-bit address, the 8-bit zero page address or
    /// immediate, or the resolved branch destination. `None` for 1-byte
    /// instructions.
    pub target: Option<u16>,

    /// Base cycle cost (excluding page-crossing penalties)
    pub base_cycles: u8,

    /// Whether a page crossing may add a cycle
    pub page_penalty: bool,
}

impl Instruction {
    /// Opcode followed by the operand bytes present in the input.
    pub fn bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.size_bytes as usize);
        bytes.push(self.opcode);
        bytes.extend_from_slice(&self.operand_bytes);
        bytes
    }

    /// Whether the input ended inside this instruction.
    pub fn is_truncated(&self) -> bool {
        self.operand_bytes.len() + 1 < self.size_bytes as usize
    }
}

/// Disassemble a byte slice into a vector of instructions
///
/// # Arguments
///
/// * `bytes` - The machine code to disassemble
/// * `start_address` - Address the first byte is loaded at
///
/// # Returns
///
/// One `Instruction` per decoded instruction, in address order. The sweep is
/// linear: data embedded in code is decoded as instructions too. A final
/// instruction cut off by the end of input is still returned.
pub fn disassemble(bytes: &[u8], start_address: u16) -> Vec<Instruction> {
    let mut instructions = Vec::new();
    let mut pc = 0;

    while pc < bytes.len() {
        let address = start_address.wrapping_add(pc as u16);
        let Some(instr) = decoder::decode_instruction(&bytes[pc..], address) else {
            break;
        };
        let truncated = instr.is_truncated();
        pc += instr.size_bytes as usize;
        instructions.push(instr);
        if truncated {
            break;
        }
    }

    instructions
}

/// Everything needed to turn one binary into a listing.
#[derive(Debug, Clone, Default)]
pub struct DissectConfig {
    /// Header facts; `length` is taken from the input.
    pub source: SourceInfo,

    pub render: RenderOptions,
}

/// Result of [`dissect`].
#[derive(Debug, Clone)]
pub struct Dissection {
    pub instructions: Vec<Instruction>,
    pub labels: LabelSet,

    /// The complete listing.
    pub text: String,
}

/// Run the whole pipeline over `bytes`.
///
/// `definitions` are consulted in order; a `code` range covering the input itself
/// is appended after them. Alignment problems are reported through
/// [`LabelSet::warnings`] and never abort the run.
pub fn dissect(
    bytes: &[u8],
    definitions: &[LabelDefinition],
    config: &DissectConfig,
) -> Dissection {
    let load_address = config.source.load_address;

    let instructions = disassemble(bytes, load_address);
    debug!(
        "decoded {} instructions from {} bytes at ${:04x}",
        instructions.len(),
        bytes.len(),
        load_address
    );

    let mut definitions = definitions.to_vec();
    definitions.extend(LabelDefinition::user_program(load_address, bytes.len()));
    let labels = labels::synthesize_labels(&instructions, &definitions);
    debug!(
        "synthesized {} labels ({} unaligned)",
        labels.len(),
        labels.warnings().len()
    );

    if config.render.allow_illegal {
        info!("Using illegal opcodes");
    }
    let source = SourceInfo {
        length: bytes.len(),
        ..config.source.clone()
    };
    let text = formatter::render(bytes, &instructions, &labels, &source, &config.render);

    Dissection {
        instructions,
        labels,
        text,
    }
}
