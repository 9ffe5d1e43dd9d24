//! # CPU State and Execution
//!
//! This module contains the CPU struct representing the 6502 processor state and
//! the fetch-decode-execute loop.
//!
//! ## CPU State
//!
//! The CPU maintains:
//! - **Registers**: Accumulator (A), index registers (X, Y)
//! - **Program counter** (PC): 16-bit address of next instruction
//! - **Stack pointer** (SP): 8-bit offset into stack page (0x0100-0x01FF)
//! - **Status flags**: `StatusFlags`, packable to the NV-BDIZC byte
//! - **Interrupt latches**: RESET, NMI, IRQ
//! - **Cycle counter**: u64 monotonically increasing cycle count
//!
//! ## Execution Model
//!
//! Execution is divided into *slots*. A slot either services one pending
//! interrupt or fetches and executes one instruction:
//!
//! - `run(n)`: Execute `n` slots, returning the cycles they cost
//! - `step()`: Execute one slot
//! - `try_step()`: Same as `step()`, but reports unknown opcodes as errors
//! - `tick()`: Advance a single clock cycle
//!
//! Unknown (illegal) opcodes are never fatal: they cost one cycle, are logged
//! at `warn` level, and execution continues with the next byte.

use log::{debug, trace, warn};

use crate::instructions;
use crate::interrupts::{Interrupt, PendingInterrupts};
use crate::{CpuConfig, ExecutionError, LatchPolicy, MemoryBus, StatusFlags, OPCODE_TABLE};

/// Base address of the hardware stack page.
pub const STACK_BASE: u16 = 0x0100;

/// NMI vector address.
pub const NMI_VECTOR: u16 = 0xFFFA;

/// RESET vector address.
pub const RESET_VECTOR: u16 = 0xFFFC;

/// IRQ and BRK vector address.
pub const IRQ_VECTOR: u16 = 0xFFFE;

/// Cycles charged for an opcode the CPU does not implement.
pub const UNIMPLEMENTED_OPCODE_CYCLES: u32 = 1;

/// What an instruction slot did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Fetched and executed (or skipped, if illegal) this opcode.
    Instruction(u8),
    /// Serviced this interrupt instead of fetching.
    Interrupt(Interrupt),
}

/// Continuation of a slot being executed one clock at a time by `CPU::tick`.
///
/// The slot's effects are applied on its first tick. The remaining ticks only
/// burn the cycles the slot costs, so the timing seen by a host clocking the
/// CPU matches the cycle counts `step` reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InstructionProgress {
    /// What the slot is executing.
    pub slot: Slot,

    /// Address of the opcode (or PC when the interrupt was taken).
    pub pc: u16,

    /// Effective address the instruction resolved, if it used one.
    pub address: Option<u16>,

    /// Whether resolving the address crossed a page boundary.
    pub page_crossed: bool,

    /// Total cycles the slot costs.
    pub total_cycles: u32,

    /// Cycles already ticked, including the first.
    pub elapsed: u32,
}

impl InstructionProgress {
    /// Ticks still needed to complete the slot.
    ///
    /// ```
    /// use nes6502::{CPU, FlatMemory};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x0000, &[0xEE, 0x00, 0x02]); // INC $0200, 6 cycles
    ///
    /// let mut cpu = CPU::new(memory);
    /// cpu.tick();
    /// assert_eq!(cpu.progress().map(|p| p.remaining()), Some(5));
    /// ```
    pub fn remaining(&self) -> u32 {
        self.total_cycles - self.elapsed
    }
}

/// 6502 CPU state and execution context.
///
/// Generic over the memory implementation via the `MemoryBus` trait.
///
/// # Examples
///
/// ```
/// use nes6502::{CPU, FlatMemory, MemoryBus};
///
/// let mut memory = FlatMemory::new();
/// memory.write(0xFFFC, 0x00);
/// memory.write(0xFFFD, 0x80); // PC = 0x8000
/// memory.load(0x8000, &[0xA9, 0x42]); // LDA #$42
///
/// let mut cpu = CPU::new(memory);
/// assert_eq!(cpu.pc(), 0x8000);
/// assert_eq!(cpu.sp(), 0xFF);
///
/// let cycles = cpu.run(1);
/// assert_eq!(cycles, 2);
/// assert_eq!(cpu.a(), 0x42);
/// ```
pub struct CPU<M: MemoryBus> {
    /// Accumulator register
    pub(crate) a: u8,

    /// X index register
    pub(crate) x: u8,

    /// Y index register
    pub(crate) y: u8,

    /// Program counter (address of next instruction)
    pub(crate) pc: u16,

    /// Stack pointer (0x0100 + sp gives full stack address)
    pub(crate) sp: u8,

    /// Processor status
    pub(crate) flags: StatusFlags,

    /// Interrupt request latches
    pub(crate) pending: PendingInterrupts,

    pub(crate) config: CpuConfig,

    /// Total CPU cycles executed
    pub(crate) cycles: u64,

    /// Total slots executed
    pub(crate) instructions: u64,

    /// Slot being executed by `tick`
    pub(crate) progress: Option<InstructionProgress>,

    /// Effective address resolved by the current slot
    operand_address: Option<u16>,
    operand_page_crossed: bool,

    /// Memory bus implementation
    pub(crate) memory: M,
}

impl<M: MemoryBus> CPU<M> {
    /// Creates a new CPU with the given memory bus and default configuration.
    ///
    /// The RESET sequence runs immediately, without charging cycles:
    /// - PC is loaded from the reset vector at 0xFFFC/0xFFFD (little-endian)
    /// - SP is set to 0xFF
    /// - A, X, Y and every status flag are cleared
    pub fn new(memory: M) -> Self {
        Self::with_config(memory, CpuConfig::default())
    }

    /// Creates a new CPU with an explicit configuration.
    pub fn with_config(memory: M, config: CpuConfig) -> Self {
        let mut cpu = Self {
            a: 0x00,
            x: 0x00,
            y: 0x00,
            pc: 0x0000,
            sp: 0xFF,
            flags: StatusFlags::new(),
            pending: PendingInterrupts::default(),
            config,
            cycles: 0,
            instructions: 0,
            progress: None,
            operand_address: None,
            operand_page_crossed: false,
            memory,
        };
        cpu.reset_sequence();
        cpu
    }

    /// Executes `instructions_to_execute` slots and returns the cycles consumed.
    ///
    /// Each slot services the highest-priority pending interrupt or, if none
    /// is pending, executes one instruction. The call always completes every
    /// slot; unknown opcodes are logged and skipped.
    ///
    /// ```
    /// use nes6502::{CPU, FlatMemory};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x0000, &[0xEA; 9]); // 9 x NOP
    ///
    /// let mut cpu = CPU::new(memory);
    /// assert_eq!(cpu.run(9), 18);
    /// ```
    pub fn run(&mut self, instructions_to_execute: u32) -> u32 {
        let mut total_cycles: u32 = 0;
        for _ in 0..instructions_to_execute {
            total_cycles = total_cycles.saturating_add(self.step());
        }
        total_cycles
    }

    /// Executes one slot and returns its cycle cost.
    ///
    /// An unknown opcode is logged and costs `UNIMPLEMENTED_OPCODE_CYCLES`.
    /// If a slot started by `tick` is still in flight, this finishes it
    /// instead and returns the cycles it had left.
    pub fn step(&mut self) -> u32 {
        match self.try_step() {
            Ok(cycles) => cycles,
            Err(error) => {
                warn!("{}", error);
                UNIMPLEMENTED_OPCODE_CYCLES
            }
        }
    }

    /// Executes one slot, reporting unknown opcodes as errors.
    ///
    /// The CPU state is identical to what `step` leaves behind: the unknown
    /// opcode has already been consumed and its cycle charged when the error
    /// is returned, so execution can simply continue.
    ///
    /// ```
    /// use nes6502::{CPU, ExecutionError, FlatMemory, MemoryBus};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.write(0x0000, 0x02); // illegal
    ///
    /// let mut cpu = CPU::new(memory);
    /// match cpu.try_step() {
    ///     Err(ExecutionError::UnimplementedOpcode { opcode, address }) => {
    ///         assert_eq!(opcode, 0x02);
    ///         assert_eq!(address, 0x0000);
    ///     }
    ///     other => panic!("expected unimplemented opcode, got {:?}", other),
    /// }
    /// assert_eq!(cpu.pc(), 0x0001);
    /// assert_eq!(cpu.cycles(), 1);
    /// ```
    pub fn try_step(&mut self) -> Result<u32, ExecutionError> {
        if let Some(progress) = self.progress.take() {
            let remaining = progress.remaining();
            self.cycles += remaining as u64;
            return Ok(remaining);
        }

        let (_, cycles, outcome) = self.begin_slot();
        self.cycles += cycles as u64;
        outcome.map(|()| cycles)
    }

    /// Advances the CPU by one clock cycle.
    ///
    /// The first tick of a slot executes it; following ticks count down its
    /// cost. Returns `true` on the tick that completes the slot.
    ///
    /// ```
    /// use nes6502::{CPU, FlatMemory};
    ///
    /// let mut memory = FlatMemory::new();
    /// memory.load(0x0000, &[0xA9, 0x07]); // LDA #$07, 2 cycles
    ///
    /// let mut cpu = CPU::new(memory);
    /// assert!(!cpu.tick());
    /// assert_eq!(cpu.a(), 0x07); // effects land on the first tick
    /// assert!(cpu.tick());
    /// assert_eq!(cpu.cycles(), 2);
    /// ```
    pub fn tick(&mut self) -> bool {
        let mut progress = match self.progress.take() {
            Some(progress) => progress,
            None => {
                let pc = self.pc;
                let (slot, total_cycles, outcome) = self.begin_slot();
                if let Err(error) = outcome {
                    warn!("{}", error);
                }
                InstructionProgress {
                    slot,
                    pc,
                    address: self.operand_address,
                    page_crossed: self.operand_page_crossed,
                    total_cycles,
                    elapsed: 0,
                }
            }
        };

        progress.elapsed += 1;
        self.cycles += 1;

        if progress.elapsed >= progress.total_cycles {
            true
        } else {
            self.progress = Some(progress);
            false
        }
    }

    /// Slot currently being executed by `tick`, if it has cycles left.
    pub fn progress(&self) -> Option<&InstructionProgress> {
        self.progress.as_ref()
    }

    /// Runs the RESET sequence now and returns its cycle cost.
    ///
    /// Any in-flight `tick` slot is abandoned and every interrupt latch is
    /// cleared.
    pub fn reset(&mut self) -> u32 {
        self.progress = None;
        self.pending.clear_all();
        let cycles = self.service_interrupt(Interrupt::Reset);
        self.cycles += cycles as u64;
        cycles
    }

    /// Requests a RESET at the start of the next slot.
    pub fn trigger_reset(&mut self) {
        self.pending.reset = true;
    }

    /// Requests a non-maskable interrupt at the start of the next slot.
    pub fn trigger_nmi(&mut self) {
        self.pending.nmi = true;
    }

    /// Requests an IRQ at the start of the next slot.
    ///
    /// Dropped (not queued) if the interrupt disable flag is set.
    pub fn trigger_irq(&mut self) {
        if self.flags.interrupt_disable {
            debug!("IRQ dropped: interrupt disable set");
        } else {
            self.pending.irq = true;
        }
    }

    /// Interrupt requests waiting for the next slot.
    pub fn pending_interrupts(&self) -> PendingInterrupts {
        self.pending
    }

    /// Executes one slot without charging its cycles.
    fn begin_slot(&mut self) -> (Slot, u32, Result<(), ExecutionError>) {
        self.operand_address = None;
        self.operand_page_crossed = false;
        self.instructions += 1;

        let serviced = self.pending.highest();
        let (slot, cycles, outcome) = match serviced {
            Some(interrupt) => (
                Slot::Interrupt(interrupt),
                self.service_interrupt(interrupt),
                Ok(()),
            ),
            None => {
                let opcode_address = self.pc;
                let opcode = self.fetch_byte();
                match self.execute_opcode(opcode) {
                    Some(cycles) => (Slot::Instruction(opcode), cycles, Ok(())),
                    None => (
                        Slot::Instruction(opcode),
                        UNIMPLEMENTED_OPCODE_CYCLES,
                        Err(ExecutionError::UnimplementedOpcode {
                            opcode,
                            address: opcode_address,
                        }),
                    ),
                }
            }
        };

        match (self.config.interrupt_latches, serviced) {
            (LatchPolicy::ClearAll, _) => self.pending.clear_all(),
            (LatchPolicy::KeepUnserviced, Some(interrupt)) => self.pending.clear(interrupt),
            (LatchPolicy::KeepUnserviced, None) => {}
        }

        (slot, cycles, outcome)
    }

    /// Dispatches an already-fetched opcode. Returns `None` for illegal opcodes.
    fn execute_opcode(&mut self, opcode: u8) -> Option<u32> {
        let metadata = &OPCODE_TABLE[opcode as usize];
        if !metadata.implemented {
            return None;
        }

        let extra = instructions::execute(self, metadata.operation, metadata.addressing_mode);
        let cycles = metadata.base_cycles as u32 + extra as u32;
        trace!(
            "{:02X} {} {:?} -> PC=0x{:04X} ({} cycles)",
            opcode,
            metadata.mnemonic,
            metadata.addressing_mode,
            self.pc,
            cycles
        );
        Some(cycles)
    }

    // ========== Bus Helpers ==========

    /// Reads the byte at PC and advances PC.
    pub(crate) fn fetch_byte(&mut self) -> u8 {
        let value = self.memory.read(self.pc);
        self.pc = self.pc.wrapping_add(1);
        value
    }

    /// Reads a little-endian word at PC and advances PC by two.
    pub(crate) fn fetch_word(&mut self) -> u16 {
        let lo = self.fetch_byte() as u16;
        let hi = self.fetch_byte() as u16;
        (hi << 8) | lo
    }

    /// Reads a little-endian word at `addr`.
    pub(crate) fn read_word(&self, addr: u16) -> u16 {
        let lo = self.memory.read(addr) as u16;
        let hi = self.memory.read(addr.wrapping_add(1)) as u16;
        (hi << 8) | lo
    }

    pub(crate) fn latch_operand(&mut self, address: u16, page_crossed: bool) {
        self.operand_address = Some(address);
        self.operand_page_crossed = page_crossed;
    }

    // ========== Stack Helpers ==========

    /// Writes to 0x0100 + SP, then decrements SP (wrapping).
    pub(crate) fn push_byte(&mut self, value: u8) {
        self.memory.write(STACK_BASE | self.sp as u16, value);
        self.sp = self.sp.wrapping_sub(1);
    }

    /// Pushes the high byte, then the low byte.
    pub(crate) fn push_word(&mut self, value: u16) {
        self.push_byte((value >> 8) as u8);
        self.push_byte(value as u8);
    }

    /// Increments SP (wrapping), then reads 0x0100 + SP.
    pub(crate) fn pull_byte(&mut self) -> u8 {
        self.sp = self.sp.wrapping_add(1);
        self.memory.read(STACK_BASE | self.sp as u16)
    }

    /// Pulls the low byte, then the high byte.
    pub(crate) fn pull_word(&mut self) -> u16 {
        let lo = self.pull_byte() as u16;
        let hi = self.pull_byte() as u16;
        (hi << 8) | lo
    }

    // ========== Register Getters ==========

    /// Returns the accumulator register value.
    pub fn a(&self) -> u8 {
        self.a
    }

    /// Returns the X index register value.
    pub fn x(&self) -> u8 {
        self.x
    }

    /// Returns the Y index register value.
    pub fn y(&self) -> u8 {
        self.y
    }

    /// Returns the program counter value.
    pub fn pc(&self) -> u16 {
        self.pc
    }

    /// Returns the stack pointer value.
    ///
    /// The full stack address is 0x0100 + SP. The stack grows downward.
    pub fn sp(&self) -> u8 {
        self.sp
    }

    /// Returns the status register as a packed byte (NV-BDIZC).
    ///
    /// Bits 4 and 5 are reported as they currently stand; they are only
    /// forced on in the copies pushed to the stack.
    pub fn status(&self) -> u8 {
        self.flags.to_byte()
    }

    /// Returns the status flags.
    pub fn flags(&self) -> StatusFlags {
        self.flags
    }

    /// Returns the total number of CPU cycles executed since construction.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Returns the number of slots (instructions and serviced interrupts)
    /// executed since construction.
    pub fn instructions(&self) -> u64 {
        self.instructions
    }

    /// Returns the configuration the CPU was built with.
    pub fn config(&self) -> &CpuConfig {
        &self.config
    }

    // ========== Status Flag Getters ==========

    /// Returns true if the Negative flag is set.
    pub fn flag_n(&self) -> bool {
        self.flags.negative
    }

    /// Returns true if the Overflow flag is set.
    pub fn flag_v(&self) -> bool {
        self.flags.overflow
    }

    /// Returns true if the Unused flag is set.
    pub fn flag_u(&self) -> bool {
        self.flags.unused
    }

    /// Returns true if the Break flag is set.
    pub fn flag_b(&self) -> bool {
        self.flags.break_command
    }

    /// Returns true if the Decimal mode flag is set.
    pub fn flag_d(&self) -> bool {
        self.flags.decimal
    }

    /// Returns true if the Interrupt Disable flag is set.
    pub fn flag_i(&self) -> bool {
        self.flags.interrupt_disable
    }

    /// Returns true if the Zero flag is set.
    pub fn flag_z(&self) -> bool {
        self.flags.zero
    }

    /// Returns true if the Carry flag is set.
    pub fn flag_c(&self) -> bool {
        self.flags.carry
    }

    // ========== Setters (test setup and debugging) ==========

    /// Sets the accumulator.
    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    /// Sets the X index register.
    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    /// Sets the Y index register.
    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    /// Sets the program counter.
    pub fn set_pc(&mut self, value: u16) {
        self.pc = value;
    }

    /// Sets the stack pointer (offset into page 0x01).
    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    /// Replaces all eight flags from a packed status byte.
    pub fn set_status(&mut self, value: u8) {
        self.flags = StatusFlags::from_byte(value);
    }

    /// Returns the status register for in-place edits.
    pub fn flags_mut(&mut self) -> &mut StatusFlags {
        &mut self.flags
    }

    /// Sets the Negative flag.
    pub fn set_flag_n(&mut self, value: bool) {
        self.flags.negative = value;
    }

    /// Sets the Overflow flag.
    pub fn set_flag_v(&mut self, value: bool) {
        self.flags.overflow = value;
    }

    /// Sets the Unused flag.
    pub fn set_flag_u(&mut self, value: bool) {
        self.flags.unused = value;
    }

    /// Sets the Break flag.
    pub fn set_flag_b(&mut self, value: bool) {
        self.flags.break_command = value;
    }

    /// Sets the Decimal mode flag.
    pub fn set_flag_d(&mut self, value: bool) {
        self.flags.decimal = value;
    }

    /// Sets the Interrupt Disable flag.
    pub fn set_flag_i(&mut self, value: bool) {
        self.flags.interrupt_disable = value;
    }

    /// Sets the Zero flag.
    pub fn set_flag_z(&mut self, value: bool) {
        self.flags.zero = value;
    }

    /// Sets the Carry flag.
    pub fn set_flag_c(&mut self, value: bool) {
        self.flags.carry = value;
    }

    // ========== Memory Access ==========

    /// Returns a reference to the address space.
    pub fn memory(&self) -> &M {
        &self.memory
    }

    /// Returns a mutable reference to the address space.
    pub fn memory_mut(&mut self) -> &mut M {
        &mut self.memory
    }

    /// Consumes the CPU and hands back its memory.
    pub fn into_memory(self) -> M {
        self.memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FlatMemory;

    fn setup_cpu() -> CPU<FlatMemory> {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFC, 0x00);
        mem.write(0xFFFD, 0x80);
        CPU::new(mem)
    }

    #[test]
    fn test_cpu_initialization() {
        let cpu = setup_cpu();

        assert_eq!(cpu.pc(), 0x8000);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.a(), 0x00);
        assert_eq!(cpu.x(), 0x00);
        assert_eq!(cpu.y(), 0x00);
        assert_eq!(cpu.status(), 0x00);
        assert_eq!(cpu.cycles(), 0);
        assert_eq!(cpu.instructions(), 0);
    }

    #[test]
    fn test_stack_push_pull_word() {
        let mut cpu = setup_cpu();

        cpu.push_word(0xABCD);
        assert_eq!(cpu.sp(), 0xFD);
        assert_eq!(cpu.memory().read(0x01FF), 0xAB);
        assert_eq!(cpu.memory().read(0x01FE), 0xCD);

        assert_eq!(cpu.pull_word(), 0xABCD);
        assert_eq!(cpu.sp(), 0xFF);
    }

    #[test]
    fn test_stack_pointer_wraps() {
        let mut cpu = setup_cpu();
        cpu.set_sp(0x00);

        cpu.push_byte(0x11);
        assert_eq!(cpu.sp(), 0xFF);
        assert_eq!(cpu.memory().read(0x0100), 0x11);

        assert_eq!(cpu.pull_byte(), 0x11);
        assert_eq!(cpu.sp(), 0x00);
    }

    #[test]
    fn test_unimplemented_opcode_is_one_cycle_noop() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().write(0x8000, 0xFF); // illegal
        cpu.memory_mut().write(0x8001, 0xE8); // INX

        let cycles = cpu.run(2);

        assert_eq!(cycles, 1 + 2);
        assert_eq!(cpu.x(), 1);
        assert_eq!(cpu.pc(), 0x8002);
    }

    #[test]
    fn test_tick_records_progress() {
        let mut cpu = setup_cpu();
        cpu.set_y(0x01);
        // LDA $12FF,Y -> crosses into 0x1300, 5 cycles
        cpu.memory_mut().load(0x8000, &[0xB9, 0xFF, 0x12]);

        assert!(!cpu.tick());
        let progress = *cpu.progress().unwrap();
        assert_eq!(progress.slot, Slot::Instruction(0xB9));
        assert_eq!(progress.pc, 0x8000);
        assert_eq!(progress.address, Some(0x1300));
        assert!(progress.page_crossed);
        assert_eq!(progress.total_cycles, 5);
        assert_eq!(progress.elapsed, 1);

        let mut ticks = 1;
        while !cpu.tick() {
            ticks += 1;
        }
        assert_eq!(ticks + 1, 5);
        assert!(cpu.progress().is_none());
        assert_eq!(cpu.cycles(), 5);
    }

    #[test]
    fn test_step_finishes_in_flight_tick() {
        let mut cpu = setup_cpu();
        cpu.memory_mut().load(0x8000, &[0xEA, 0xEA]);

        cpu.tick();
        assert_eq!(cpu.step(), 1); // NOP had one cycle left
        assert_eq!(cpu.pc(), 0x8001);
        assert_eq!(cpu.step(), 2);
        assert_eq!(cpu.cycles(), 4);
    }

    #[test]
    fn test_keep_unserviced_latch_policy() {
        let mut mem = FlatMemory::new();
        mem.write(0xFFFA, 0x00);
        mem.write(0xFFFB, 0x90);
        mem.write(0xFFFE, 0x00);
        mem.write(0xFFFF, 0xA0);
        let config = CpuConfig::default().with_interrupt_latches(LatchPolicy::KeepUnserviced);
        let mut cpu = CPU::with_config(mem, config);

        cpu.trigger_irq();
        cpu.trigger_nmi();

        cpu.step();
        assert_eq!(cpu.pc(), 0x9000);
        assert!(cpu.pending_interrupts().irq);

        cpu.step();
        assert_eq!(cpu.pc(), 0xA000);
        assert!(!cpu.pending_interrupts().any());
    }
}
