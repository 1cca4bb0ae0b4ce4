//! WebAssembly bindings for the dis6502 disassembler.
//!
//! This module provides JavaScript-callable interfaces to the disassembly
//! pipeline, enabling browser-based listing generation.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Dissector;
