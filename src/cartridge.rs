//! # Cartridge Images
//!
//! Parses iNES and NES 2.0 ROM images and places their PRG ROM on a
//! `MemoryBus`.
//!
//! ## Layout
//!
//! ```text
//! +--------+-----------------+----------------+----------------+
//! | header | trainer (512 B) | PRG ROM        | CHR ROM        |
//! | 16 B   | if flag 6 bit 2 | 16 KiB units   | 8 KiB units    |
//! +--------+-----------------+----------------+----------------+
//! ```
//!
//! A CHR size of zero means the board carries 8 KiB of CHR RAM instead; no
//! CHR data is stored in the file in that case.
//!
//! Only static PRG placement is provided. Mappers and bank switching belong
//! to the host.

use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

use log::info;

use crate::MemoryBus;

/// Size of the iNES header.
pub const HEADER_SIZE: usize = 16;

/// Size of the optional trainer block.
pub const TRAINER_SIZE: usize = 512;

/// PRG ROM unit size.
pub const PRG_UNIT: usize = 16 * 1024;

/// CHR ROM unit size, and the CHR RAM size of boards without CHR ROM.
pub const CHR_UNIT: usize = 8 * 1024;

const MAGIC: &[u8; 4] = b"NES\x1A";

/// Errors produced while loading a cartridge image.
#[derive(Debug)]
pub enum CartridgeError {
    /// Reading the image file failed.
    Io(io::Error),

    /// The image does not start with the `NES\x1A` magic.
    UnknownFormat,

    /// The image is shorter than its header says.
    Truncated { expected: usize, actual: usize },
}

impl fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            CartridgeError::Io(e) => write!(f, "Failed to read cartridge: {}", e),
            CartridgeError::UnknownFormat => write!(f, "Unknown cartridge format"),
            CartridgeError::Truncated { expected, actual } => write!(
                f,
                "Cartridge image truncated: expected {} bytes, got {}",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for CartridgeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CartridgeError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for CartridgeError {
    fn from(e: io::Error) -> Self {
        CartridgeError::Io(e)
    }
}

/// Header dialect of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RomFormat {
    /// Archaic and standard iNES.
    INes,
    /// NES 2.0, with extended size and mapper fields.
    Nes20,
}

/// Nametable mirroring wired on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mirroring {
    Horizontal,
    Vertical,
    FourScreen,
}

/// A parsed cartridge image.
#[derive(Debug, Clone)]
pub struct Cartridge {
    format: RomFormat,
    mapper: u16,
    mirroring: Mirroring,
    battery: bool,
    trainer: Option<Vec<u8>>,
    prg_rom: Vec<u8>,
    chr: Vec<u8>,
    chr_is_ram: bool,
}

impl Cartridge {
    /// Reads and parses an image file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CartridgeError> {
        let data = fs::read(path)?;
        Self::from_bytes(&data)
    }

    /// Parses an in-memory image.
    ///
    /// ```
    /// use nes6502::{Cartridge, RomFormat};
    ///
    /// let mut image = vec![b'N', b'E', b'S', 0x1A, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0];
    /// image.extend(std::iter::repeat(0xEA).take(16 * 1024));
    ///
    /// let cart = Cartridge::from_bytes(&image).unwrap();
    /// assert_eq!(cart.format(), RomFormat::INes);
    /// assert_eq!(cart.prg_rom().len(), 16 * 1024);
    /// assert!(cart.chr_is_ram());
    /// ```
    pub fn from_bytes(data: &[u8]) -> Result<Self, CartridgeError> {
        if !data.starts_with(MAGIC) {
            return Err(CartridgeError::UnknownFormat);
        }
        if data.len() < HEADER_SIZE {
            return Err(CartridgeError::Truncated {
                expected: HEADER_SIZE,
                actual: data.len(),
            });
        }

        let header = &data[..HEADER_SIZE];

        let flags6 = header[6];
        let flags7 = header[7];

        let format = if flags7 & 0x0C == 0x08 {
            RomFormat::Nes20
        } else {
            RomFormat::INes
        };

        let mut mapper = ((flags7 & 0xF0) | (flags6 >> 4)) as u16;
        if format == RomFormat::Nes20 {
            mapper |= ((header[8] & 0x0F) as u16) << 8;
        }

        let mirroring = if flags6 & 0b0000_1000 != 0 {
            Mirroring::FourScreen
        } else if flags6 & 0b0000_0001 != 0 {
            Mirroring::Vertical
        } else {
            Mirroring::Horizontal
        };
        let battery = flags6 & 0b0000_0010 != 0;
        let has_trainer = flags6 & 0b0000_0100 != 0;

        let (prg_len, chr_len) = match format {
            RomFormat::INes => (header[4] as usize * PRG_UNIT, header[5] as usize * CHR_UNIT),
            RomFormat::Nes20 => (
                nes20_rom_size(header[4], header[9] & 0x0F, PRG_UNIT),
                nes20_rom_size(header[5], header[9] >> 4, CHR_UNIT),
            ),
        };

        let trainer_len = if has_trainer { TRAINER_SIZE } else { 0 };
        let expected = HEADER_SIZE
            .saturating_add(trainer_len)
            .saturating_add(prg_len)
            .saturating_add(chr_len);
        if data.len() < expected {
            return Err(CartridgeError::Truncated {
                expected,
                actual: data.len(),
            });
        }

        let mut offset = HEADER_SIZE;
        let trainer = if has_trainer {
            let block = data[offset..offset + TRAINER_SIZE].to_vec();
            offset += TRAINER_SIZE;
            Some(block)
        } else {
            None
        };

        let prg_rom = data[offset..offset + prg_len].to_vec();
        offset += prg_len;

        let chr_is_ram = chr_len == 0;
        let chr = if chr_is_ram {
            vec![0; CHR_UNIT]
        } else {
            data[offset..offset + chr_len].to_vec()
        };

        info!(
            "cartridge loaded: {:?}, mapper {}, PRG {} bytes, CHR {} {} bytes, trainer {}, {:?} mirroring{}",
            format,
            mapper,
            prg_rom.len(),
            if chr_is_ram { "RAM" } else { "ROM" },
            chr.len(),
            trainer.as_ref().map_or(0, Vec::len),
            mirroring,
            if battery { ", battery" } else { "" }
        );

        Ok(Self {
            format,
            mapper,
            mirroring,
            battery,
            trainer,
            prg_rom,
            chr,
            chr_is_ram,
        })
    }

    /// Copies PRG ROM into $8000-$FFFF.
    ///
    /// A 16 KiB image is mirrored into both halves. Larger images place
    /// their first bank at $8000 and their last at $C000, the power-on
    /// arrangement of the common bank-switching boards.
    pub fn install_prg<M: MemoryBus + ?Sized>(&self, memory: &mut M) {
        let banks = self.prg_rom.chunks(PRG_UNIT).collect::<Vec<_>>();
        let (low, high) = match banks.as_slice() {
            [] => return,
            [only] => (*only, *only),
            [first, .., last] => (*first, *last),
        };

        for (base, bank) in [(0x8000u16, low), (0xC000u16, high)] {
            for (i, &byte) in bank.iter().enumerate() {
                memory.write(base.wrapping_add(i as u16), byte);
            }
        }
    }

    /// Header dialect the image was parsed as.
    pub fn format(&self) -> RomFormat {
        self.format
    }

    /// iNES mapper number. NES 2.0 images contribute bits 8-11.
    pub fn mapper(&self) -> u16 {
        self.mapper
    }

    /// Nametable mirroring from flag 6.
    pub fn mirroring(&self) -> Mirroring {
        self.mirroring
    }

    /// Whether the board has battery-backed PRG RAM.
    pub fn has_battery(&self) -> bool {
        self.battery
    }

    /// The 512-byte trainer, if the image carries one.
    pub fn trainer(&self) -> Option<&[u8]> {
        self.trainer.as_deref()
    }

    /// PRG ROM contents.
    pub fn prg_rom(&self) -> &[u8] {
        &self.prg_rom
    }

    /// CHR ROM contents, or zeroed CHR RAM when the image has none.
    pub fn chr(&self) -> &[u8] {
        &self.chr
    }

    /// Whether `chr()` is RAM because the header declared no CHR ROM.
    pub fn chr_is_ram(&self) -> bool {
        self.chr_is_ram
    }
}

/// NES 2.0 ROM size from its LSB byte and 4-bit MSB nibble.
///
/// An MSB nibble of 0xF switches the LSB to exponent-multiplier notation,
/// `EEEEEEMM`, giving `2^E * (MM * 2 + 1)` bytes. Otherwise the 12-bit value
/// counts `unit`-sized blocks. Sizes that overflow saturate, which the
/// caller reports as truncation.
fn nes20_rom_size(lsb: u8, msb: u8, unit: usize) -> usize {
    if msb == 0x0F {
        let exponent = (lsb >> 2) as u32;
        let multiplier = ((lsb & 0x03) as usize) * 2 + 1;
        1usize
            .checked_shl(exponent)
            .and_then(|size| size.checked_mul(multiplier))
            .unwrap_or(usize::MAX)
    } else {
        (((msb as usize) << 8) | lsb as usize) * unit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nes20_unit_count() {
        assert_eq!(nes20_rom_size(0x02, 0x00, PRG_UNIT), 2 * PRG_UNIT);
        assert_eq!(nes20_rom_size(0x00, 0x01, CHR_UNIT), 256 * CHR_UNIT);
    }

    #[test]
    fn test_nes20_exponent_multiplier() {
        // E = 10, MM = 1 -> 1024 * 3
        assert_eq!(nes20_rom_size(0b0010_1001, 0x0F, PRG_UNIT), 3072);
        // E = 0, MM = 0 -> 1
        assert_eq!(nes20_rom_size(0x00, 0x0F, PRG_UNIT), 1);
    }

    #[test]
    fn test_nes20_exponent_overflow_saturates() {
        assert_eq!(nes20_rom_size(0xFF, 0x0F, PRG_UNIT), usize::MAX);
    }
}
