//! # Memory Bus Abstraction
//!
//! The CPU core never owns a memory layout of its own. Every fetch, operand
//! read, stack push and vector load goes through the `MemoryBus` trait, so the
//! same core can run against:
//!
//! - Flat 64KB RAM (`FlatMemory`, provided here)
//! - A cartridge image installed into RAM (see `cartridge`)
//! - Any host-defined bus that decodes addresses itself
//!
//! The contract mirrors the hardware: there are no bus errors. A read of an
//! unmapped address returns whatever the implementation chooses, and writes to
//! read-only regions may be dropped silently.

use std::fs;
use std::io;
use std::path::Path;

/// Number of addressable bytes.
const ADDRESS_SPACE: usize = 0x10000;

/// Memory bus trait for CPU to read/write bytes.
///
/// The address space is exactly 64KB and addressed by a `u16`, so every
/// address is valid and neither method has an error path.
///
/// # Examples
///
/// ```
/// use nes6502::{MemoryBus, FlatMemory};
///
/// let mut mem = FlatMemory::new();
/// mem.write(0x1234, 0x42);
/// assert_eq!(mem.read(0x1234), 0x42);
/// ```
///
/// ## Implementing Custom Memory
///
/// ```
/// use nes6502::MemoryBus;
///
/// struct RomRamMemory {
///     ram: [u8; 0x8000],  // 32KB RAM (0x0000-0x7FFF)
///     rom: [u8; 0x8000],  // 32KB ROM (0x8000-0xFFFF)
/// }
///
/// impl MemoryBus for RomRamMemory {
///     fn read(&self, addr: u16) -> u8 {
///         if addr < 0x8000 {
///             self.ram[addr as usize]
///         } else {
///             self.rom[(addr - 0x8000) as usize]
///         }
///     }
///
///     fn write(&mut self, addr: u16, value: u8) {
///         if addr < 0x8000 {
///             self.ram[addr as usize] = value;
///         }
///         // Writes to ROM are ignored
///     }
/// }
/// ```
pub trait MemoryBus {
    /// Reads a byte from the specified 16-bit address.
    ///
    /// Must never panic.
    fn read(&self, addr: u16) -> u8;

    /// Writes a byte to the specified 16-bit address.
    ///
    /// Must never panic. Read-only or unmapped addresses may ignore the write.
    fn write(&mut self, addr: u16, value: u8);
}

/// Lets a CPU borrow an address space that the host keeps ownership of.
///
/// ```
/// use nes6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0x0000, 0xE8); // INX
/// {
///     let mut cpu = CPU::new(&mut memory);
///     cpu.run(1);
///     assert_eq!(cpu.x(), 1);
/// }
/// // The host still owns the memory after the CPU is gone.
/// assert_eq!(memory.read(0x0000), 0xE8);
/// ```
impl<M: MemoryBus + ?Sized> MemoryBus for &mut M {
    fn read(&self, addr: u16) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: u16, value: u8) {
        (**self).write(addr, value)
    }
}

/// Simple 64KB flat memory implementation.
///
/// All 65536 addresses map to one contiguous RAM array initialized to 0x00.
/// This is the address space used by the tests and the demos.
///
/// # Examples
///
/// ```
/// use nes6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00); // Reset vector low byte
/// memory.write(0xFFFD, 0x80); // Reset vector high byte
///
/// let cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// ```
pub struct FlatMemory {
    /// 64KB contiguous memory array
    data: Box<[u8; ADDRESS_SPACE]>,
}

impl FlatMemory {
    /// Creates a new FlatMemory instance with all bytes initialized to zero.
    pub fn new() -> Self {
        Self {
            data: Box::new([0; ADDRESS_SPACE]),
        }
    }

    /// Copies `bytes` into memory starting at `start`.
    ///
    /// Addresses wrap from 0xFFFF back to 0x0000, the same way the CPU's
    /// program counter does.
    ///
    /// ```
    /// use nes6502::{FlatMemory, MemoryBus};
    ///
    /// let mut mem = FlatMemory::new();
    /// mem.load(0xFFFF, &[0x11, 0x22]);
    /// assert_eq!(mem.read(0xFFFF), 0x11);
    /// assert_eq!(mem.read(0x0000), 0x22);
    /// ```
    pub fn load(&mut self, start: u16, bytes: &[u8]) {
        let mut addr = start;
        for &byte in bytes {
            self.data[addr as usize] = byte;
            addr = addr.wrapping_add(1);
        }
    }

    /// Reads a raw binary image from disk and copies it to `start`.
    ///
    /// Images larger than the 64KB address space are rejected with
    /// `ErrorKind::InvalidData` and leave memory untouched.
    pub fn load_file<P: AsRef<Path>>(&mut self, path: P, start: u16) -> io::Result<()> {
        let bytes = fs::read(path)?;
        if bytes.len() > ADDRESS_SPACE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "image is {} bytes, address space is {}",
                    bytes.len(),
                    ADDRESS_SPACE
                ),
            ));
        }
        self.load(start, &bytes);
        Ok(())
    }
}

impl Default for FlatMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryBus for FlatMemory {
    fn read(&self, addr: u16) -> u8 {
        self.data[addr as usize]
    }

    fn write(&mut self, addr: u16, value: u8) {
        self.data[addr as usize] = value;
    }
}
