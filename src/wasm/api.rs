//! WASM API for the 6502 disassembler.
//!
//! Provides JavaScript-callable interfaces for configuring a disassembly run,
//! producing the full listing and inspecting decoded instructions.

use wasm_bindgen::prelude::*;

use crate::disassembler::formatter::format_instruction;
use crate::loader::{c64_defaults, parse_label_definitions};
use crate::{
    disassemble, dissect, Dialect, DissectConfig, LabelDefinition, RenderOptions, SourceInfo,
};

/// JavaScript-compatible error wrapper
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct JsError {
    message: String,
}

#[wasm_bindgen]
impl JsError {
    #[wasm_bindgen(constructor)]
    pub fn new(message: &str) -> JsError {
        JsError {
            message: message.to_string(),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn message(&self) -> String {
        self.message.clone()
    }
}

impl From<crate::DissectError> for JsError {
    fn from(err: crate::DissectError) -> Self {
        JsError {
            message: err.to_string(),
        }
    }
}

/// One decoded instruction
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct DisassemblyLine {
    address: u16,
    bytes: Vec<u8>,
    text: String,
    cycles: u8,
}

#[wasm_bindgen]
impl DisassemblyLine {
    #[wasm_bindgen(getter)]
    pub fn address(&self) -> u16 {
        self.address
    }

    #[wasm_bindgen(getter)]
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.clone()
    }

    /// Mnemonic and operand without labels, e.g. `lda $d020`
    #[wasm_bindgen(getter)]
    pub fn text(&self) -> String {
        self.text.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> u8 {
        self.cycles
    }
}

/// Main disassembler interface for JavaScript
#[wasm_bindgen]
pub struct Dissector {
    definitions: Vec<LabelDefinition>,
    options: RenderOptions,
}

#[wasm_bindgen]
impl Dissector {
    /// Create a disassembler using the built-in C64 memory map and ACME syntax
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<Dissector, JsError> {
        Ok(Dissector {
            definitions: c64_defaults()?,
            options: RenderOptions::default(),
        })
    }

    /// Replace the label definitions with the contents of a JSON label file
    pub fn set_labels(&mut self, json: &str) -> Result<(), JsError> {
        self.definitions = parse_label_definitions("<js>", json)?;
        Ok(())
    }

    /// Select the assembler syntax ("acme" or "kickass")
    pub fn set_dialect(&mut self, name: &str) -> Result<(), JsError> {
        self.options.dialect = name.parse::<Dialect>()?;
        Ok(())
    }

    pub fn set_memory_dump(&mut self, enabled: bool) {
        self.options.show_memory_dump = enabled;
    }

    pub fn set_label_list(&mut self, enabled: bool) {
        self.options.show_label_list = enabled;
    }

    pub fn set_cycles(&mut self, enabled: bool) {
        self.options.show_cycles = enabled;
    }

    pub fn set_illegals(&mut self, enabled: bool) {
        self.options.allow_illegal = enabled;
    }

    /// Produce the complete listing for `bytes` loaded at `start_address`
    pub fn dissect(&self, bytes: &[u8], start_address: u16, name: &str) -> String {
        let config = DissectConfig {
            source: SourceInfo {
                name: name.to_string(),
                load_address: start_address,
                offset: 0,
                length: bytes.len(),
            },
            render: self.options,
        };
        dissect(bytes, &self.definitions, &config).text
    }

    /// Decode `bytes` into an array of `DisassemblyLine`
    pub fn decode(&self, bytes: &[u8], start_address: u16) -> js_sys::Array {
        disassemble(bytes, start_address)
            .iter()
            .map(|instr| {
                JsValue::from(DisassemblyLine {
                    address: instr.address,
                    bytes: instr.bytes(),
                    text: format_instruction(instr, None),
                    cycles: instr.base_cycles,
                })
            })
            .collect()
    }
}
