//! WASM API for the 6502 emulator.
//!
//! Provides JavaScript-callable interfaces for CPU control, interrupt lines,
//! state inspection and memory access.

use crate::{Cartridge, FlatMemory, MemoryBus, CPU};
use wasm_bindgen::prelude::*;

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

/// A CPU over 64KB of flat memory.
#[wasm_bindgen]
pub struct Emulator6502 {
    cpu: CPU<FlatMemory>,
}

#[wasm_bindgen]
impl Emulator6502 {
    /// Create a new emulator with zeroed memory (PC starts at 0x0000)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Emulator6502 {
            cpu: CPU::new(FlatMemory::new()),
        }
    }

    /// Execute a single slot and return its cycle cost
    pub fn step(&mut self) -> u32 {
        self.cpu.step()
    }

    /// Execute `instructions` slots and return the cycles consumed
    pub fn run(&mut self, instructions: u32) -> u32 {
        self.cpu.run(instructions)
    }

    /// Run the RESET sequence now
    pub fn reset(&mut self) -> u32 {
        self.cpu.reset()
    }

    /// Request an NMI for the next slot
    pub fn trigger_nmi(&mut self) {
        self.cpu.trigger_nmi();
    }

    /// Request an IRQ for the next slot (ignored while I is set)
    pub fn trigger_irq(&mut self) {
        self.cpu.trigger_irq();
    }

    // Register getters

    #[wasm_bindgen(getter)]
    pub fn a(&self) -> u8 {
        self.cpu.a()
    }

    #[wasm_bindgen(getter)]
    pub fn x(&self) -> u8 {
        self.cpu.x()
    }

    #[wasm_bindgen(getter)]
    pub fn y(&self) -> u8 {
        self.cpu.y()
    }

    #[wasm_bindgen(getter)]
    pub fn pc(&self) -> u16 {
        self.cpu.pc()
    }

    #[wasm_bindgen(getter)]
    pub fn sp(&self) -> u8 {
        self.cpu.sp()
    }

    #[wasm_bindgen(getter)]
    pub fn status(&self) -> u8 {
        self.cpu.status()
    }

    /// Total cycles as f64 (JavaScript numbers are exact up to 2^53)
    #[wasm_bindgen(getter)]
    pub fn cycles(&self) -> f64 {
        self.cpu.cycles() as f64
    }

    /// Set the program counter
    pub fn set_pc(&mut self, addr: u16) {
        self.cpu.set_pc(addr);
    }

    // Memory access methods

    /// Copy `len` bytes starting at `start` (wrapping at 0xFFFF)
    pub fn read_memory(&self, start: u16, len: u32) -> js_sys::Uint8Array {
        let bytes: Vec<u8> = (0..len.min(0x10000))
            .map(|i| self.cpu.memory().read(start.wrapping_add(i as u16)))
            .collect();
        js_sys::Uint8Array::from(bytes.as_slice())
    }

    /// Write a single byte to memory
    pub fn write_memory(&mut self, addr: u16, value: u8) {
        self.cpu.memory_mut().write(addr, value);
    }

    /// Load a program into memory and set PC
    pub fn load_program(&mut self, program: &[u8], start_addr: u16) {
        self.cpu.memory_mut().load(start_addr, program);
        self.cpu.set_pc(start_addr);
    }

    /// Parse an iNES / NES 2.0 image, install its PRG ROM at 0x8000 and reset
    pub fn load_cartridge(&mut self, image: &[u8]) -> Result<(), JsError> {
        let cartridge =
            Cartridge::from_bytes(image).map_err(|e| JsError::new(&e.to_string()))?;
        cartridge.install_prg(self.cpu.memory_mut());
        self.cpu.reset();
        Ok(())
    }
}

impl Default for Emulator6502 {
    fn default() -> Self {
        Self::new()
    }
}
