/// Idle loop — the kernel's terminal state at phase 0.
///
/// `park()` is where control goes after handoff and never comes back from.
/// The loop body is deliberately not baked in: later bring-up phases install
/// one through `IDLE`, and until then each iteration is a bare pause hint.
/// A pure busy-wait is used instead of a privileged halt instruction so the
/// loop cannot fault regardless of privilege level or processor variant.
use core::hint;
use spin::Once;

/// A loop body installed by a later bring-up phase. Runs once per idle
/// iteration and must return so the loop keeps control.
pub type IdleStep = fn();

/// Write-once slot for the idle-loop body.
///
/// The first installation wins; later calls are ignored, so a misbehaving
/// phase cannot swap the body out from under a running loop.
pub struct IdleCell {
    step: Once<IdleStep>,
}

impl IdleCell {
    pub const fn new() -> Self {
        Self { step: Once::new() }
    }

    /// Install `step` as the loop body. Returns false if a body was already
    /// installed (the existing one stays).
    pub fn install(&self, step: IdleStep) -> bool {
        let mut installed = false;
        self.step.call_once(|| {
            installed = true;
            step
        });
        installed
    }

    /// The installed body, if any.
    pub fn get(&self) -> Option<IdleStep> {
        self.step.get().copied()
    }
}

/// The kernel-wide idle configuration. Phases install into this cell;
/// `park` only ever reads it.
pub static IDLE: IdleCell = IdleCell::new();

/// Park the processor forever.
///
/// Each iteration runs the installed step, or a spin hint when none is
/// installed yet. Nothing in here performs I/O or touches memory outside
/// the kernel image, so nothing can fault, and the `!` return type
/// guarantees no caller ever sees control again.
pub fn park() -> ! {
    loop {
        match IDLE.get() {
            Some(step) => step(),
            None => hint::spin_loop(),
        }
    }
}
