/// Capability seams for the phases that come after phase 0.
///
/// Console output and interrupt-table installation are external
/// collaborators at this point — no hardware implementation exists in the
/// kernel yet. Modeling them as traits keeps the entry path minimal while
/// letting a later phase (or a test) run real bring-up work from inside the
/// idle loop, without the entry point ever returning.

/// Byte-oriented console output.
pub trait Console {
    fn write_bytes(&mut self, bytes: &[u8]);

    fn write_str(&mut self, s: &str) {
        self.write_bytes(s.as_bytes());
    }
}

/// Interrupt plumbing: table installation and the global interrupt mask.
///
/// Unmasking without an installed table is the undefined-behavior case the
/// handoff contract warns about; implementations must refuse it.
pub trait InterruptController {
    /// Install the interrupt/exception table. Must precede `enable`.
    fn install_table(&mut self);

    /// Unmask interrupts. Returns false (and stays masked) if no table has
    /// been installed.
    fn enable(&mut self) -> bool;

    /// Mask interrupts.
    fn disable(&mut self);

    fn enabled(&self) -> bool;
}
