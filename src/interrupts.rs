//! # Interrupt Sequencing
//!
//! The CPU has three external interrupt inputs, each modeled as a latch that
//! the host sets with `CPU::trigger_reset`, `CPU::trigger_nmi` or
//! `CPU::trigger_irq`. Latches are checked at the start of every instruction
//! slot, and at most one is serviced per slot:
//!
//! ```text
//! RESET  >  NMI  >  IRQ  >  normal fetch
//! ```
//!
//! ## Sequences
//!
//! | Interrupt | Vector  | Stack                        | Cycles |
//! |-----------|---------|------------------------------|--------|
//! | RESET     | $FFFC   | untouched, SP = $FF          | 8      |
//! | NMI       | $FFFA   | PC (hi, lo), status with U=1 | 8      |
//! | IRQ       | $FFFE   | PC (hi, lo), status with U=1 | 8      |
//!
//! NMI and IRQ leave B as it is in the pushed status byte, which is how an
//! interrupt handler tells them apart from BRK. Both set I afterwards.
//!
//! ## Masking
//!
//! IRQ is masked by the I flag at trigger time: a request raised while I is
//! set is dropped, not queued. NMI and RESET cannot be masked.
//!
//! ## Unserviced requests
//!
//! With the default `LatchPolicy::ClearAll` every latch is cleared at the end
//! of each slot, so a request that loses the priority race is lost. Use
//! `LatchPolicy::KeepUnserviced` to have it serviced on the following slot.

use log::debug;

use crate::cpu::{IRQ_VECTOR, NMI_VECTOR, RESET_VECTOR};
use crate::{MemoryBus, StatusFlags, CPU};

/// Cycles charged for each interrupt sequence.
pub const INTERRUPT_CYCLES: u32 = 8;

/// An external interrupt input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Interrupt {
    /// Power-on or reset line; does not touch the stack.
    Reset,
    /// Non-maskable interrupt, vectored through 0xFFFA.
    Nmi,
    /// Maskable interrupt request, vectored through 0xFFFE.
    Irq,
}

impl Interrupt {
    /// Address of the vector the sequence loads PC from.
    pub const fn vector(self) -> u16 {
        match self {
            Interrupt::Reset => RESET_VECTOR,
            Interrupt::Nmi => NMI_VECTOR,
            Interrupt::Irq => IRQ_VECTOR,
        }
    }
}

/// The three interrupt request latches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PendingInterrupts {
    /// RESET requested.
    pub reset: bool,
    /// NMI requested.
    pub nmi: bool,
    /// IRQ requested while interrupts were enabled.
    pub irq: bool,
}

impl PendingInterrupts {
    /// Highest-priority pending request, if any.
    pub fn highest(&self) -> Option<Interrupt> {
        if self.reset {
            Some(Interrupt::Reset)
        } else if self.nmi {
            Some(Interrupt::Nmi)
        } else if self.irq {
            Some(Interrupt::Irq)
        } else {
            None
        }
    }

    /// Whether any request is latched.
    pub fn any(&self) -> bool {
        self.reset || self.nmi || self.irq
    }

    pub(crate) fn clear(&mut self, interrupt: Interrupt) {
        match interrupt {
            Interrupt::Reset => self.reset = false,
            Interrupt::Nmi => self.nmi = false,
            Interrupt::Irq => self.irq = false,
        }
    }

    pub(crate) fn clear_all(&mut self) {
        *self = Self::default();
    }
}

impl<M: MemoryBus> CPU<M> {
    /// Runs the sequence for `interrupt` and returns its cycle cost.
    pub(crate) fn service_interrupt(&mut self, interrupt: Interrupt) -> u32 {
        debug!("servicing {:?} at PC=0x{:04X}", interrupt, self.pc);
        match interrupt {
            Interrupt::Reset => self.reset_sequence(),
            Interrupt::Nmi | Interrupt::Irq => self.push_interrupt_frame(interrupt.vector()),
        }
        INTERRUPT_CYCLES
    }

    /// Loads PC from the reset vector and clears every register and flag.
    /// The stack is not touched.
    pub(crate) fn reset_sequence(&mut self) {
        self.pc = self.read_word(RESET_VECTOR);
        self.sp = 0xFF;
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.flags = StatusFlags::new();
    }

    /// NMI/IRQ frame: PC then status (U forced on, B as-is), then jump.
    fn push_interrupt_frame(&mut self, vector: u16) {
        self.flags.unused = true;
        self.push_word(self.pc);
        self.push_byte(self.flags.to_byte());
        self.pc = self.read_word(vector);
        self.flags.interrupt_disable = true;
    }
}
