//! Interrupt arbitration and entry sequences.
//!
//! Lines are sampled only at instruction boundaries and in the SYNC/CWAI
//! wait states. IRQ and FIRQ are level-sensitive and gated by the I and F
//! masks; NMI is edge-latched and gated by the one-time armed latch, which
//! is set the first time an instruction loads the hardware stack pointer
//! after reset. Priority when several sources are pending: NMI, FIRQ, IRQ.

use log::trace;

use super::{CcFlag, Mc6809, stack};
use crate::core::bus::{Bus, InterruptLines};

pub(crate) mod vectors {
    pub const SWI3: u16 = 0xFFF2;
    pub const SWI2: u16 = 0xFFF4;
    pub const FIRQ: u16 = 0xFFF6;
    pub const IRQ: u16 = 0xFFF8;
    pub const SWI: u16 = 0xFFFA;
    pub const NMI: u16 = 0xFFFC;
    pub const RESET: u16 = 0xFFFE;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InterruptKind {
    Nmi,
    Firq,
    Irq,
    Swi,
    Swi2,
    Swi3,
}

impl InterruptKind {
    pub fn vector(self) -> u16 {
        match self {
            InterruptKind::Nmi => vectors::NMI,
            InterruptKind::Firq => vectors::FIRQ,
            InterruptKind::Irq => vectors::IRQ,
            InterruptKind::Swi => vectors::SWI,
            InterruptKind::Swi2 => vectors::SWI2,
            InterruptKind::Swi3 => vectors::SWI3,
        }
    }
}

impl Mc6809 {
    /// Edge-detect NMI. A rising edge latches a request even before the
    /// latch is armed; it is only honored once armed. A line held high
    /// never re-triggers without a new rising edge.
    pub(crate) fn latch_nmi(&mut self, lines: InterruptLines) {
        if lines.nmi && !self.nmi_line_seen {
            self.nmi_pending = true;
        }
        self.nmi_line_seen = lines.nmi;
    }

    pub(crate) fn pending_interrupt(&self, lines: InterruptLines) -> Option<InterruptKind> {
        if self.nmi_pending && self.nmi_armed {
            Some(InterruptKind::Nmi)
        } else if lines.firq && !self.flag(CcFlag::F) {
            Some(InterruptKind::Firq)
        } else if lines.irq && !self.flag(CcFlag::I) {
            Some(InterruptKind::Irq)
        } else {
            None
        }
    }

    /// Hardware-interrupt entry from a fetch boundary or SYNC release.
    /// Stacks state, applies the masks, loads the vector, and returns the
    /// cycles still to burn after the detection cycle.
    pub(crate) fn take_interrupt<B: Bus + ?Sized>(&mut self, bus: &mut B, kind: InterruptKind) -> u8 {
        let remaining = match kind {
            InterruptKind::Firq => {
                stack::push_pc_cc(self, bus);
                9
            }
            _ => {
                stack::push_entire(self, bus);
                18
            }
        };
        self.apply_masks(kind);
        self.pc = self.read_word(bus, kind.vector());
        trace!("interrupt entry: {kind:?} -> {:#06x}", self.pc);
        remaining
    }

    /// CWAI wake-up: the frame was already pushed by CWAI itself, so only
    /// the masks and the vector fetch remain.
    pub(crate) fn wake_from_cwai<B: Bus + ?Sized>(&mut self, bus: &mut B, kind: InterruptKind) {
        self.apply_masks(kind);
        self.pc = self.read_word(bus, kind.vector());
        trace!("cwai wake: {kind:?} -> {:#06x}", self.pc);
    }

    /// SWI/SWI2/SWI3: same stacking as IRQ entry, triggered by an opcode.
    pub(crate) fn software_interrupt<B: Bus + ?Sized>(&mut self, bus: &mut B, kind: InterruptKind) {
        stack::push_entire(self, bus);
        self.apply_masks(kind);
        self.pc = self.read_word(bus, kind.vector());
    }

    fn apply_masks(&mut self, kind: InterruptKind) {
        match kind {
            InterruptKind::Irq => {
                self.set_flag(CcFlag::I, true);
            }
            InterruptKind::Nmi | InterruptKind::Firq | InterruptKind::Swi => {
                self.set_flag(CcFlag::I, true);
                self.set_flag(CcFlag::F, true);
            }
            // SWI2/SWI3 do not mask anything
            InterruptKind::Swi2 | InterruptKind::Swi3 => {}
        }
        if kind == InterruptKind::Nmi {
            self.nmi_pending = false;
        }
    }
}
