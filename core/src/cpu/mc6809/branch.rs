//! Branch predicate evaluation.

use super::opcodes::Cond;
use super::{CcFlag, Mc6809};

pub(crate) fn condition(cpu: &Mc6809, cond: Cond) -> bool {
    let c = cpu.flag(CcFlag::C);
    let v = cpu.flag(CcFlag::V);
    let z = cpu.flag(CcFlag::Z);
    let n = cpu.flag(CcFlag::N);
    match cond {
        Cond::Always => true,
        Cond::Never => false,
        Cond::Hi => !c && !z,
        Cond::Ls => c || z,
        Cond::Cc => !c,
        Cond::Cs => c,
        Cond::Ne => !z,
        Cond::Eq => z,
        Cond::Vc => !v,
        Cond::Vs => v,
        Cond::Pl => !n,
        Cond::Mi => n,
        Cond::Ge => n == v,
        Cond::Lt => n != v,
        Cond::Gt => !z && n == v,
        Cond::Le => z || n != v,
    }
}
