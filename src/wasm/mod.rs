//! WebAssembly bindings for the nes6502 core.
//!
//! This module provides JavaScript-callable interfaces to the CPU, enabling
//! browser-based execution of 6502 programs and NES PRG ROMs.

#[cfg(feature = "wasm")]
pub mod api;

#[cfg(feature = "wasm")]
pub use api::Emulator6502;
