//! # CPU Configuration
//!
//! Runtime switches for the two behaviors where the reference core and
//! original silicon can disagree. Defaults reproduce the reference core's
//! interrupt handling and the silicon's `JMP ($xxFF)` quirk.

/// What happens to interrupt latches that were pending but not serviced.
///
/// At most one interrupt is serviced per instruction slot, chosen by priority
/// RESET > NMI > IRQ.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LatchPolicy {
    /// Every latch is cleared at the end of every slot, so a lower-priority
    /// request raised alongside a higher one is lost.
    #[default]
    ClearAll,

    /// Only the serviced latch is cleared. The others stay pending and are
    /// serviced on following slots, in priority order.
    KeepUnserviced,
}

/// CPU behavior switches.
///
/// # Examples
///
/// ```
/// use nes6502::{CpuConfig, LatchPolicy};
///
/// let config = CpuConfig::default()
///     .with_jmp_indirect_page_wrap(false)
///     .with_interrupt_latches(LatchPolicy::KeepUnserviced);
///
/// assert!(!config.jmp_indirect_page_wrap);
/// assert_eq!(config.interrupt_latches, LatchPolicy::KeepUnserviced);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CpuConfig {
    /// Reproduce the NMOS page-wrap on `JMP (indirect)`: when the pointer's
    /// low byte is 0xFF, the target's high byte is read from the start of the
    /// same page rather than the next one.
    pub jmp_indirect_page_wrap: bool,

    /// Handling of interrupt requests that lose the priority race.
    pub interrupt_latches: LatchPolicy,
}

impl CpuConfig {
    /// Silicon-compatible defaults: page-wrapping `JMP ($xxFF)` and
    /// [`LatchPolicy::ClearAll`].
    pub const fn new() -> Self {
        Self {
            jmp_indirect_page_wrap: true,
            interrupt_latches: LatchPolicy::ClearAll,
        }
    }

    /// Sets whether `JMP ($xxFF)` wraps within the page.
    pub const fn with_jmp_indirect_page_wrap(mut self, enabled: bool) -> Self {
        self.jmp_indirect_page_wrap = enabled;
        self
    }

    /// Sets what happens to requests that were not serviced in a slot.
    pub const fn with_interrupt_latches(mut self, policy: LatchPolicy) -> Self {
        self.interrupt_latches = policy;
        self
    }
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self::new()
    }
}
