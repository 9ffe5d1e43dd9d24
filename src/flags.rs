//! # Processor Status Register
//!
//! The 6502 status register (P) as eight independent flags that can be packed
//! into and unpacked from the byte the CPU pushes to the stack.
//!
//! Bit layout (NV-BDIZC):
//!
//! | Bit | Flag | Meaning              |
//! |-----|------|----------------------|
//! | 7   | N    | Negative             |
//! | 6   | V    | Overflow             |
//! | 5   | U    | Unused               |
//! | 4   | B    | Break                |
//! | 3   | D    | Decimal (stored only)|
//! | 2   | I    | Interrupt disable    |
//! | 1   | Z    | Zero                 |
//! | 0   | C    | Carry                |
//!
//! B and U are not latched by real silicon. They only have meaning inside the
//! pushed byte: PHP and BRK push them as 1, NMI and IRQ push U as 1, and PLP and
//! RTI clear both after restoring the rest of the register.

/// Carry flag bit (bit 0)
pub const FLAG_CARRY: u8 = 0b0000_0001;
/// Zero flag bit (bit 1)
pub const FLAG_ZERO: u8 = 0b0000_0010;
/// Interrupt disable flag bit (bit 2)
pub const FLAG_INTERRUPT_DISABLE: u8 = 0b0000_0100;
/// Decimal flag bit (bit 3)
pub const FLAG_DECIMAL: u8 = 0b0000_1000;
/// Break flag bit (bit 4)
pub const FLAG_BREAK: u8 = 0b0001_0000;
/// Unused flag bit (bit 5)
pub const FLAG_UNUSED: u8 = 0b0010_0000;
/// Overflow flag bit (bit 6)
pub const FLAG_OVERFLOW: u8 = 0b0100_0000;
/// Negative flag bit (bit 7)
pub const FLAG_NEGATIVE: u8 = 0b1000_0000;

/// Processor status flags.
///
/// The packed byte form and the field form always agree: `from_byte` followed
/// by `to_byte` returns the original byte for all 256 values.
///
/// # Examples
///
/// ```
/// use nes6502::StatusFlags;
///
/// let flags = StatusFlags::from_byte(0b1100_0001);
/// assert!(flags.negative);
/// assert!(flags.overflow);
/// assert!(flags.carry);
/// assert!(!flags.zero);
/// assert_eq!(flags.to_byte(), 0b1100_0001);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusFlags {
    /// Carry (bit 0): unsigned overflow out of bit 7, or no borrow.
    pub carry: bool,

    /// Zero (bit 1): the last result was zero.
    pub zero: bool,

    /// Interrupt disable (bit 2): IRQ requests are dropped while set.
    pub interrupt_disable: bool,

    /// Stored and restored, but arithmetic is always binary.
    pub decimal: bool,

    /// Break (bit 4): only meaningful in a byte pushed by PHP or BRK.
    pub break_command: bool,

    /// Unused (bit 5): only meaningful in a pushed byte.
    pub unused: bool,

    /// Overflow (bit 6): signed overflow from ADC/SBC, or bit 6 from BIT.
    pub overflow: bool,

    /// Negative (bit 7): bit 7 of the last result.
    pub negative: bool,
}

impl StatusFlags {
    /// All flags clear, the state RESET leaves behind.
    pub const fn new() -> Self {
        Self {
            carry: false,
            zero: false,
            interrupt_disable: false,
            decimal: false,
            break_command: false,
            unused: false,
            overflow: false,
            negative: false,
        }
    }

    /// Unpacks a status byte into individual flags.
    pub const fn from_byte(byte: u8) -> Self {
        Self {
            carry: byte & FLAG_CARRY != 0,
            zero: byte & FLAG_ZERO != 0,
            interrupt_disable: byte & FLAG_INTERRUPT_DISABLE != 0,
            decimal: byte & FLAG_DECIMAL != 0,
            break_command: byte & FLAG_BREAK != 0,
            unused: byte & FLAG_UNUSED != 0,
            overflow: byte & FLAG_OVERFLOW != 0,
            negative: byte & FLAG_NEGATIVE != 0,
        }
    }

    /// Packs the flags into a status byte.
    pub const fn to_byte(self) -> u8 {
        let mut byte = 0;
        if self.carry {
            byte |= FLAG_CARRY;
        }
        if self.zero {
            byte |= FLAG_ZERO;
        }
        if self.interrupt_disable {
            byte |= FLAG_INTERRUPT_DISABLE;
        }
        if self.decimal {
            byte |= FLAG_DECIMAL;
        }
        if self.break_command {
            byte |= FLAG_BREAK;
        }
        if self.unused {
            byte |= FLAG_UNUSED;
        }
        if self.overflow {
            byte |= FLAG_OVERFLOW;
        }
        if self.negative {
            byte |= FLAG_NEGATIVE;
        }
        byte
    }

    /// Sets Z if `value` is zero and N from bit 7 of `value`.
    ///
    /// Nearly every instruction that produces a value ends with this.
    pub fn set_zero_negative(&mut self, value: u8) {
        self.zero = value == 0;
        self.negative = value & 0x80 != 0;
    }

    /// Clears B and U, as PLP and RTI do after pulling the register.
    pub fn clear_synthetic(&mut self) {
        self.break_command = false;
        self.unused = false;
    }

    /// The byte PHP and BRK push: B and U forced to 1.
    pub const fn pushed_by_software(self) -> u8 {
        self.to_byte() | FLAG_BREAK | FLAG_UNUSED
    }
}

impl From<u8> for StatusFlags {
    fn from(byte: u8) -> Self {
        Self::from_byte(byte)
    }
}

impl From<StatusFlags> for u8 {
    fn from(flags: StatusFlags) -> Self {
        flags.to_byte()
    }
}
