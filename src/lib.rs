//! # 6502 Disassembler
//!
//! A table-driven disassembler that turns NMOS 6502 machine code into an annotated,
//! re-assemblable listing for the ACME or Kick Assembler syntax, replacing numeric
//! addresses with names taken from a memory map.
//!
//! ## Quick Start
//!
//! ```rust
//! use dis6502::{dissect, DissectConfig, LabelDefinition};
//!
//! // JSR $FFD2 ; RTS
//! let code = [0x20, 0xD2, 0xFF, 0x60];
//! let kernal = vec![LabelDefinition::new(0xFF81, 0xFFF5, "kernal", 4, "", "KERNAL jump table")];
//!
//! let mut config = DissectConfig::default();
//! config.source.load_address = 0xC000;
//!
//! let result = dissect(&code, &kernal, &config);
//! assert_eq!(result.labels.get(0xFFD2).unwrap().name, "kernal_000");
//! assert!(result.text.contains("jsr kernal_000"));
//! ```
//!
//! ## Architecture
//!
//! - **Table-Driven Design**: opcode, mnemonic and addressing-mode metadata live in
//!   static tables covering all 256 opcode bytes, undocumented ones included
//! - **Staged Pipeline**: decoding, label synthesis and rendering each finish before
//!   the next starts and exchange plain values
//! - **No Hidden State**: dialect tokens and flags are passed in, the listing is
//!   returned, so independent runs never interfere
//!
//! ## Modules
//!
//! - `opcodes` - Opcode and mnemonic metadata tables
//! - `addressing` - Addressing mode enumeration and table
//! - `disassembler` - Decoder, label synthesizer and listing formatter
//! - `loader` - Binary and label file loading, numeric argument parsing

pub mod addressing;
pub mod disassembler;
pub mod loader;
pub mod opcodes;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export public API
pub use addressing::{AddressingMode, ModeMetadata, MODE_TABLE};
pub use disassembler::formatter::{
    format_instruction, render, Dialect, DialectTokens, RenderOptions, SourceInfo,
};
pub use disassembler::labels::{
    synthesize_labels, Label, LabelDefinition, LabelSet, LabelWarning,
};
pub use disassembler::{disassemble, dissect, DissectConfig, Dissection, Instruction};
pub use opcodes::{
    Mnemonic, MnemonicMetadata, OpcodeCategory, OpcodeMetadata, MNEMONIC_TABLE, OPCODE_TABLE,
};

use std::path::PathBuf;

/// Errors that abort a disassembly run before any output is produced.
///
/// Decoding itself cannot fail; these all come from reading or validating inputs.
#[derive(Debug, thiserror::Error)]
pub enum DissectError {
    /// A file could not be read.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The label file is not valid JSON or does not match the definition format.
    #[error("invalid label file {origin}: {source}")]
    LabelFile {
        origin: String,
        #[source]
        source: serde_json::Error,
    },

    /// A label definition uses a category outside 0-19.
    #[error("label area \"{area}\" has area_type {area_type}, expected 0-19")]
    InvalidCategory { area: String, area_type: u8 },

    /// A label definition ends before it starts.
    #[error("label area \"{area}\" has from ${from:04x} after to ${to:04x}")]
    InvalidRange { area: String, from: u16, to: u16 },

    /// A numeric argument is not a hexadecimal number in range.
    #[error("{field} \"{value}\" is not a valid hex number")]
    InvalidNumber { field: &'static str, value: String },

    /// The assembler dialect name is not recognised.
    #[error("unknown assembler type \"{0}\" (expected acme or kickass)")]
    UnknownDialect(String),
}
