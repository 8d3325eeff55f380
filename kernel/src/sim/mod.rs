/// Single-stepping processor model for testing the entry contract.
///
/// The real entry routine runs on hardware the unit tests never see. This
/// module stands in for that hardware the same way a RAM disk stands in for
/// a block device: a deterministic machine with explicit state, driven one
/// instruction at a time. No allocation, so it builds for the kernel target
/// and the host alike.
mod inst;
mod machine;

pub use inst::Inst;
pub use machine::{Fault, Image, Machine};

use crate::handoff;

/// The entry routine rendered in the abstract instruction set: the loop
/// head (empty body) followed by the back-edge jump. Nothing observable,
/// nothing privileged, nothing that can fault.
pub const ENTRY_LOOP: [Inst; 2] = [Inst::Nop, Inst::Jmp(handoff::LOAD_ADDR)];

/// The entry image as the bootloader sees it: `ENTRY_LOOP` loaded at
/// `handoff::LOAD_ADDR`.
pub const ENTRY_IMAGE: Image<'static> = Image::new(handoff::LOAD_ADDR, &ENTRY_LOOP);
