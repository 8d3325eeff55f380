/// Bootloader → kernel handoff contract.
///
/// The stage-2 bootloader loads the flat kernel image at `LOAD_ADDR` and
/// jumps there blind. The instruction pointer is the only piece of
/// processor context the contract pins; registers, flags, and privilege are
/// whatever the bootloader left behind. `EntryState` records that context
/// explicitly so a harness can model any bootloader, conforming or broken.
use bitflags::bitflags;
use static_assertions::const_assert;

/// Physical address the kernel image is loaded at. The first instruction of
/// `kernel_entry` must land exactly here: `linker.ld` pins `.text.entry` to
/// this address, and the simulator loads its entry image at it.
pub const LOAD_ADDR: u64 = 0x10000;

// The load address must stay below 1 MiB (the bootloader copies the image
// while it can still reach low memory) and stay 16-byte aligned as a jump
// target.
const_assert!(LOAD_ADDR < 0x10_0000);
const_assert!(LOAD_ADDR % 16 == 0);

bitflags! {
    /// Flags-register bits tracked in the handoff record.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct CpuFlags: u64 {
        const CARRY     = 1 << 0;
        const ZERO      = 1 << 6;
        const SIGN      = 1 << 7;
        const TRAP      = 1 << 8;
        /// Maskable interrupts enabled. Clear in a conforming handoff; the
        /// contract itself does not require it either way.
        const INTERRUPT = 1 << 9;
        const DIRECTION = 1 << 10;
        const OVERFLOW  = 1 << 11;
    }
}

/// Processor privilege level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Privilege {
    Supervisor,
    User,
}

/// Processor context at the moment the bootloader jumps to the kernel.
///
/// Only `instruction_pointer` is part of the contract. Flags and privilege
/// are carried so tests can state their assumptions instead of relying on
/// hidden hardware state.
#[derive(Debug, Clone, Copy)]
pub struct EntryState {
    pub instruction_pointer: u64,
    pub flags: CpuFlags,
    pub privilege: Privilege,
}

impl EntryState {
    /// The context a conforming bootloader hands over: execution starts at
    /// `LOAD_ADDR`, interrupts disabled, supervisor privilege.
    pub const fn at_handoff() -> Self {
        Self {
            instruction_pointer: LOAD_ADDR,
            flags: CpuFlags::empty(),
            privilege: Privilege::Supervisor,
        }
    }

    /// Whether this context satisfies the handoff contract. The contract
    /// pins the instruction pointer and nothing else.
    pub fn honors_contract(&self) -> bool {
        self.instruction_pointer == LOAD_ADDR
    }
}
