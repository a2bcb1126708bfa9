/// Byte-granular system bus as seen by the CPU core.
///
/// The environment assembles RAM, ROM, and peripheral regions behind this
/// interface; the core routes every operand fetch and effective-address
/// dereference through it exactly once per architectural access. Write
/// suppression for read-only regions is the implementation's policy, not
/// the core's.
pub trait Bus {
    fn read(&mut self, addr: u16) -> u8;
    fn write(&mut self, addr: u16, data: u8);

    /// Current level of the interrupt request lines. The CPU samples these
    /// only at instruction boundaries (and in its SYNC/CWAI wait states),
    /// so a peripheral must hold a line asserted until it is observed.
    fn interrupt_lines(&self) -> InterruptLines;
}

#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub struct InterruptLines {
    pub nmi: bool,
    pub firq: bool,
    pub irq: bool,
}
