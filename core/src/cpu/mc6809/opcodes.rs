//! Static opcode dispatch tables.
//!
//! One entry per defined opcode: semantic operation, addressing mode, and
//! base cycle count. Page 2/3 tables are reached through the 0x10/0x11
//! prefix bytes; their listed cycle counts include the prefix fetch.
//! Undefined opcodes have no entry and decode to a fault.

/// Addressing mode tag for a table entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddrMode {
    Inherent,
    Immediate,
    Direct,
    Indexed,
    Extended,
    Relative,
    LongRelative,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Acc {
    A,
    B,
}

/// 16-bit register operand of a load/store/compare.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Word {
    D,
    X,
    Y,
    U,
    S,
}

/// Operand of a read-modify-write op: an accumulator or the addressed byte.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    A,
    B,
    Mem,
}

/// Branch predicates, indexed by the opcode's low nibble.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cond {
    Always,
    Never,
    Hi,
    Ls,
    Cc,
    Cs,
    Ne,
    Eq,
    Vc,
    Vs,
    Pl,
    Mi,
    Ge,
    Lt,
    Gt,
    Le,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StackReg {
    S,
    U,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Op {
    Nop,
    Sync,
    Daa,
    Sex,
    Abx,
    Mul,
    Rts,
    Rti,
    Cwai,
    Swi,
    Swi2,
    Swi3,
    Andcc,
    Orcc,
    Tfr,
    Exg,
    Neg(Target),
    Com(Target),
    Lsr(Target),
    Ror(Target),
    Asr(Target),
    Lsl(Target),
    Rol(Target),
    Dec(Target),
    Inc(Target),
    Tst(Target),
    Clr(Target),
    Sub(Acc),
    Cmp(Acc),
    Sbc(Acc),
    And(Acc),
    Bit(Acc),
    Ld(Acc),
    St(Acc),
    Eor(Acc),
    Adc(Acc),
    Or(Acc),
    Add(Acc),
    Addd,
    Subd,
    Cmp16(Word),
    Ld16(Word),
    St16(Word),
    Lea(Word),
    Jmp,
    Jsr,
    Bsr,
    Lbsr,
    Bra(Cond),
    Lbra(Cond),
    Psh(StackReg),
    Pul(StackReg),
}

#[derive(Clone, Copy, Debug)]
pub struct OpEntry {
    pub op: Op,
    pub mode: AddrMode,
    pub cycles: u8,
}

pub(crate) fn lookup(page: u8, opcode: u8) -> Option<&'static OpEntry> {
    let table: &[Option<OpEntry>; 256] = match page {
        1 => &PAGE1,
        2 => &PAGE2,
        _ => &PAGE3,
    };
    table[opcode as usize].as_ref()
}

const fn e(op: Op, mode: AddrMode, cycles: u8) -> Option<OpEntry> {
    Some(OpEntry { op, mode, cycles })
}

pub(crate) static PAGE1: [Option<OpEntry>; 256] = page1();
pub(crate) static PAGE2: [Option<OpEntry>; 256] = page2();
pub(crate) static PAGE3: [Option<OpEntry>; 256] = page3();

const fn page1() -> [Option<OpEntry>; 256] {
    use AddrMode::*;
    use Op::*;
    let mut t = [None; 256];

    // 0x00-0x0F: direct-page read-modify-write, JMP
    t[0x00] = e(Neg(Target::Mem), Direct, 6);
    t[0x03] = e(Com(Target::Mem), Direct, 6);
    t[0x04] = e(Lsr(Target::Mem), Direct, 6);
    t[0x06] = e(Ror(Target::Mem), Direct, 6);
    t[0x07] = e(Asr(Target::Mem), Direct, 6);
    t[0x08] = e(Lsl(Target::Mem), Direct, 6);
    t[0x09] = e(Rol(Target::Mem), Direct, 6);
    t[0x0A] = e(Dec(Target::Mem), Direct, 6);
    t[0x0C] = e(Inc(Target::Mem), Direct, 6);
    t[0x0D] = e(Tst(Target::Mem), Direct, 6);
    t[0x0E] = e(Jmp, Direct, 3);
    t[0x0F] = e(Clr(Target::Mem), Direct, 6);

    // 0x12-0x1F: inherent / immediate miscellany
    t[0x12] = e(Nop, Inherent, 2);
    t[0x13] = e(Sync, Inherent, 2);
    t[0x16] = e(Lbra(Cond::Always), LongRelative, 5);
    t[0x17] = e(Lbsr, LongRelative, 9);
    t[0x19] = e(Daa, Inherent, 2);
    t[0x1A] = e(Orcc, Immediate, 3);
    t[0x1C] = e(Andcc, Immediate, 3);
    t[0x1D] = e(Sex, Inherent, 2);
    t[0x1E] = e(Exg, Immediate, 8);
    t[0x1F] = e(Tfr, Immediate, 6);

    // 0x20-0x2F: short branches
    t[0x20] = e(Bra(Cond::Always), Relative, 3);
    t[0x21] = e(Bra(Cond::Never), Relative, 3);
    t[0x22] = e(Bra(Cond::Hi), Relative, 3);
    t[0x23] = e(Bra(Cond::Ls), Relative, 3);
    t[0x24] = e(Bra(Cond::Cc), Relative, 3);
    t[0x25] = e(Bra(Cond::Cs), Relative, 3);
    t[0x26] = e(Bra(Cond::Ne), Relative, 3);
    t[0x27] = e(Bra(Cond::Eq), Relative, 3);
    t[0x28] = e(Bra(Cond::Vc), Relative, 3);
    t[0x29] = e(Bra(Cond::Vs), Relative, 3);
    t[0x2A] = e(Bra(Cond::Pl), Relative, 3);
    t[0x2B] = e(Bra(Cond::Mi), Relative, 3);
    t[0x2C] = e(Bra(Cond::Ge), Relative, 3);
    t[0x2D] = e(Bra(Cond::Lt), Relative, 3);
    t[0x2E] = e(Bra(Cond::Gt), Relative, 3);
    t[0x2F] = e(Bra(Cond::Le), Relative, 3);

    // 0x30-0x3F: LEA, stack, returns, software interrupt
    t[0x30] = e(Lea(Word::X), Indexed, 4);
    t[0x31] = e(Lea(Word::Y), Indexed, 4);
    t[0x32] = e(Lea(Word::S), Indexed, 4);
    t[0x33] = e(Lea(Word::U), Indexed, 4);
    t[0x34] = e(Psh(StackReg::S), Immediate, 5);
    t[0x35] = e(Pul(StackReg::S), Immediate, 5);
    t[0x36] = e(Psh(StackReg::U), Immediate, 5);
    t[0x37] = e(Pul(StackReg::U), Immediate, 5);
    t[0x39] = e(Rts, Inherent, 5);
    t[0x3A] = e(Abx, Inherent, 3);
    t[0x3B] = e(Rti, Inherent, 6);
    t[0x3C] = e(Cwai, Immediate, 14);
    t[0x3D] = e(Mul, Inherent, 11);
    t[0x3F] = e(Swi, Inherent, 19);

    // 0x40-0x4F: accumulator A read-modify-write
    t[0x40] = e(Neg(Target::A), Inherent, 2);
    t[0x43] = e(Com(Target::A), Inherent, 2);
    t[0x44] = e(Lsr(Target::A), Inherent, 2);
    t[0x46] = e(Ror(Target::A), Inherent, 2);
    t[0x47] = e(Asr(Target::A), Inherent, 2);
    t[0x48] = e(Lsl(Target::A), Inherent, 2);
    t[0x49] = e(Rol(Target::A), Inherent, 2);
    t[0x4A] = e(Dec(Target::A), Inherent, 2);
    t[0x4C] = e(Inc(Target::A), Inherent, 2);
    t[0x4D] = e(Tst(Target::A), Inherent, 2);
    t[0x4F] = e(Clr(Target::A), Inherent, 2);

    // 0x50-0x5F: accumulator B read-modify-write
    t[0x50] = e(Neg(Target::B), Inherent, 2);
    t[0x53] = e(Com(Target::B), Inherent, 2);
    t[0x54] = e(Lsr(Target::B), Inherent, 2);
    t[0x56] = e(Ror(Target::B), Inherent, 2);
    t[0x57] = e(Asr(Target::B), Inherent, 2);
    t[0x58] = e(Lsl(Target::B), Inherent, 2);
    t[0x59] = e(Rol(Target::B), Inherent, 2);
    t[0x5A] = e(Dec(Target::B), Inherent, 2);
    t[0x5C] = e(Inc(Target::B), Inherent, 2);
    t[0x5D] = e(Tst(Target::B), Inherent, 2);
    t[0x5F] = e(Clr(Target::B), Inherent, 2);

    // 0x60-0x6F: indexed read-modify-write, JMP
    t[0x60] = e(Neg(Target::Mem), Indexed, 6);
    t[0x63] = e(Com(Target::Mem), Indexed, 6);
    t[0x64] = e(Lsr(Target::Mem), Indexed, 6);
    t[0x66] = e(Ror(Target::Mem), Indexed, 6);
    t[0x67] = e(Asr(Target::Mem), Indexed, 6);
    t[0x68] = e(Lsl(Target::Mem), Indexed, 6);
    t[0x69] = e(Rol(Target::Mem), Indexed, 6);
    t[0x6A] = e(Dec(Target::Mem), Indexed, 6);
    t[0x6C] = e(Inc(Target::Mem), Indexed, 6);
    t[0x6D] = e(Tst(Target::Mem), Indexed, 6);
    t[0x6E] = e(Jmp, Indexed, 3);
    t[0x6F] = e(Clr(Target::Mem), Indexed, 6);

    // 0x70-0x7F: extended read-modify-write, JMP
    t[0x70] = e(Neg(Target::Mem), Extended, 7);
    t[0x73] = e(Com(Target::Mem), Extended, 7);
    t[0x74] = e(Lsr(Target::Mem), Extended, 7);
    t[0x76] = e(Ror(Target::Mem), Extended, 7);
    t[0x77] = e(Asr(Target::Mem), Extended, 7);
    t[0x78] = e(Lsl(Target::Mem), Extended, 7);
    t[0x79] = e(Rol(Target::Mem), Extended, 7);
    t[0x7A] = e(Dec(Target::Mem), Extended, 7);
    t[0x7C] = e(Inc(Target::Mem), Extended, 7);
    t[0x7D] = e(Tst(Target::Mem), Extended, 7);
    t[0x7E] = e(Jmp, Extended, 4);
    t[0x7F] = e(Clr(Target::Mem), Extended, 7);

    // 0x80-0xBF: accumulator A column
    t[0x80] = e(Sub(Acc::A), Immediate, 2);
    t[0x81] = e(Cmp(Acc::A), Immediate, 2);
    t[0x82] = e(Sbc(Acc::A), Immediate, 2);
    t[0x83] = e(Subd, Immediate, 4);
    t[0x84] = e(And(Acc::A), Immediate, 2);
    t[0x85] = e(Bit(Acc::A), Immediate, 2);
    t[0x86] = e(Ld(Acc::A), Immediate, 2);
    t[0x88] = e(Eor(Acc::A), Immediate, 2);
    t[0x89] = e(Adc(Acc::A), Immediate, 2);
    t[0x8A] = e(Or(Acc::A), Immediate, 2);
    t[0x8B] = e(Add(Acc::A), Immediate, 2);
    t[0x8C] = e(Cmp16(Word::X), Immediate, 4);
    t[0x8D] = e(Bsr, Relative, 7);
    t[0x8E] = e(Ld16(Word::X), Immediate, 3);

    t[0x90] = e(Sub(Acc::A), Direct, 4);
    t[0x91] = e(Cmp(Acc::A), Direct, 4);
    t[0x92] = e(Sbc(Acc::A), Direct, 4);
    t[0x93] = e(Subd, Direct, 6);
    t[0x94] = e(And(Acc::A), Direct, 4);
    t[0x95] = e(Bit(Acc::A), Direct, 4);
    t[0x96] = e(Ld(Acc::A), Direct, 4);
    t[0x97] = e(St(Acc::A), Direct, 4);
    t[0x98] = e(Eor(Acc::A), Direct, 4);
    t[0x99] = e(Adc(Acc::A), Direct, 4);
    t[0x9A] = e(Or(Acc::A), Direct, 4);
    t[0x9B] = e(Add(Acc::A), Direct, 4);
    t[0x9C] = e(Cmp16(Word::X), Direct, 6);
    t[0x9D] = e(Jsr, Direct, 7);
    t[0x9E] = e(Ld16(Word::X), Direct, 5);
    t[0x9F] = e(St16(Word::X), Direct, 5);

    t[0xA0] = e(Sub(Acc::A), Indexed, 4);
    t[0xA1] = e(Cmp(Acc::A), Indexed, 4);
    t[0xA2] = e(Sbc(Acc::A), Indexed, 4);
    t[0xA3] = e(Subd, Indexed, 6);
    t[0xA4] = e(And(Acc::A), Indexed, 4);
    t[0xA5] = e(Bit(Acc::A), Indexed, 4);
    t[0xA6] = e(Ld(Acc::A), Indexed, 4);
    t[0xA7] = e(St(Acc::A), Indexed, 4);
    t[0xA8] = e(Eor(Acc::A), Indexed, 4);
    t[0xA9] = e(Adc(Acc::A), Indexed, 4);
    t[0xAA] = e(Or(Acc::A), Indexed, 4);
    t[0xAB] = e(Add(Acc::A), Indexed, 4);
    t[0xAC] = e(Cmp16(Word::X), Indexed, 6);
    t[0xAD] = e(Jsr, Indexed, 7);
    t[0xAE] = e(Ld16(Word::X), Indexed, 5);
    t[0xAF] = e(St16(Word::X), Indexed, 5);

    t[0xB0] = e(Sub(Acc::A), Extended, 5);
    t[0xB1] = e(Cmp(Acc::A), Extended, 5);
    t[0xB2] = e(Sbc(Acc::A), Extended, 5);
    t[0xB3] = e(Subd, Extended, 7);
    t[0xB4] = e(And(Acc::A), Extended, 5);
    t[0xB5] = e(Bit(Acc::A), Extended, 5);
    t[0xB6] = e(Ld(Acc::A), Extended, 5);
    t[0xB7] = e(St(Acc::A), Extended, 5);
    t[0xB8] = e(Eor(Acc::A), Extended, 5);
    t[0xB9] = e(Adc(Acc::A), Extended, 5);
    t[0xBA] = e(Or(Acc::A), Extended, 5);
    t[0xBB] = e(Add(Acc::A), Extended, 5);
    t[0xBC] = e(Cmp16(Word::X), Extended, 7);
    t[0xBD] = e(Jsr, Extended, 8);
    t[0xBE] = e(Ld16(Word::X), Extended, 6);
    t[0xBF] = e(St16(Word::X), Extended, 6);

    // 0xC0-0xFF: accumulator B column
    t[0xC0] = e(Sub(Acc::B), Immediate, 2);
    t[0xC1] = e(Cmp(Acc::B), Immediate, 2);
    t[0xC2] = e(Sbc(Acc::B), Immediate, 2);
    t[0xC3] = e(Addd, Immediate, 4);
    t[0xC4] = e(And(Acc::B), Immediate, 2);
    t[0xC5] = e(Bit(Acc::B), Immediate, 2);
    t[0xC6] = e(Ld(Acc::B), Immediate, 2);
    t[0xC8] = e(Eor(Acc::B), Immediate, 2);
    t[0xC9] = e(Adc(Acc::B), Immediate, 2);
    t[0xCA] = e(Or(Acc::B), Immediate, 2);
    t[0xCB] = e(Add(Acc::B), Immediate, 2);
    t[0xCC] = e(Ld16(Word::D), Immediate, 3);
    t[0xCE] = e(Ld16(Word::U), Immediate, 3);

    t[0xD0] = e(Sub(Acc::B), Direct, 4);
    t[0xD1] = e(Cmp(Acc::B), Direct, 4);
    t[0xD2] = e(Sbc(Acc::B), Direct, 4);
    t[0xD3] = e(Addd, Direct, 6);
    t[0xD4] = e(And(Acc::B), Direct, 4);
    t[0xD5] = e(Bit(Acc::B), Direct, 4);
    t[0xD6] = e(Ld(Acc::B), Direct, 4);
    t[0xD7] = e(St(Acc::B), Direct, 4);
    t[0xD8] = e(Eor(Acc::B), Direct, 4);
    t[0xD9] = e(Adc(Acc::B), Direct, 4);
    t[0xDA] = e(Or(Acc::B), Direct, 4);
    t[0xDB] = e(Add(Acc::B), Direct, 4);
    t[0xDC] = e(Ld16(Word::D), Direct, 5);
    t[0xDD] = e(St16(Word::D), Direct, 5);
    t[0xDE] = e(Ld16(Word::U), Direct, 5);
    t[0xDF] = e(St16(Word::U), Direct, 5);

    t[0xE0] = e(Sub(Acc::B), Indexed, 4);
    t[0xE1] = e(Cmp(Acc::B), Indexed, 4);
    t[0xE2] = e(Sbc(Acc::B), Indexed, 4);
    t[0xE3] = e(Addd, Indexed, 6);
    t[0xE4] = e(And(Acc::B), Indexed, 4);
    t[0xE5] = e(Bit(Acc::B), Indexed, 4);
    t[0xE6] = e(Ld(Acc::B), Indexed, 4);
    t[0xE7] = e(St(Acc::B), Indexed, 4);
    t[0xE8] = e(Eor(Acc::B), Indexed, 4);
    t[0xE9] = e(Adc(Acc::B), Indexed, 4);
    t[0xEA] = e(Or(Acc::B), Indexed, 4);
    t[0xEB] = e(Add(Acc::B), Indexed, 4);
    t[0xEC] = e(Ld16(Word::D), Indexed, 5);
    t[0xED] = e(St16(Word::D), Indexed, 5);
    t[0xEE] = e(Ld16(Word::U), Indexed, 5);
    t[0xEF] = e(St16(Word::U), Indexed, 5);

    t[0xF0] = e(Sub(Acc::B), Extended, 5);
    t[0xF1] = e(Cmp(Acc::B), Extended, 5);
    t[0xF2] = e(Sbc(Acc::B), Extended, 5);
    t[0xF3] = e(Addd, Extended, 7);
    t[0xF4] = e(And(Acc::B), Extended, 5);
    t[0xF5] = e(Bit(Acc::B), Extended, 5);
    t[0xF6] = e(Ld(Acc::B), Extended, 5);
    t[0xF7] = e(St(Acc::B), Extended, 5);
    t[0xF8] = e(Eor(Acc::B), Extended, 5);
    t[0xF9] = e(Adc(Acc::B), Extended, 5);
    t[0xFA] = e(Or(Acc::B), Extended, 5);
    t[0xFB] = e(Add(Acc::B), Extended, 5);
    t[0xFC] = e(Ld16(Word::D), Extended, 6);
    t[0xFD] = e(St16(Word::D), Extended, 6);
    t[0xFE] = e(Ld16(Word::U), Extended, 6);
    t[0xFF] = e(St16(Word::U), Extended, 6);

    t
}

const fn page2() -> [Option<OpEntry>; 256] {
    use AddrMode::*;
    use Op::*;
    let mut t = [None; 256];

    // Long conditional branches. The corpus this core is validated against
    // charges 5 cycles taken or not.
    t[0x21] = e(Lbra(Cond::Never), LongRelative, 5);
    t[0x22] = e(Lbra(Cond::Hi), LongRelative, 5);
    t[0x23] = e(Lbra(Cond::Ls), LongRelative, 5);
    t[0x24] = e(Lbra(Cond::Cc), LongRelative, 5);
    t[0x25] = e(Lbra(Cond::Cs), LongRelative, 5);
    t[0x26] = e(Lbra(Cond::Ne), LongRelative, 5);
    t[0x27] = e(Lbra(Cond::Eq), LongRelative, 5);
    t[0x28] = e(Lbra(Cond::Vc), LongRelative, 5);
    t[0x29] = e(Lbra(Cond::Vs), LongRelative, 5);
    t[0x2A] = e(Lbra(Cond::Pl), LongRelative, 5);
    t[0x2B] = e(Lbra(Cond::Mi), LongRelative, 5);
    t[0x2C] = e(Lbra(Cond::Ge), LongRelative, 5);
    t[0x2D] = e(Lbra(Cond::Lt), LongRelative, 5);
    t[0x2E] = e(Lbra(Cond::Gt), LongRelative, 5);
    t[0x2F] = e(Lbra(Cond::Le), LongRelative, 5);

    t[0x3F] = e(Swi2, Inherent, 20);

    t[0x83] = e(Cmp16(Word::D), Immediate, 5);
    t[0x8C] = e(Cmp16(Word::Y), Immediate, 5);
    t[0x8E] = e(Ld16(Word::Y), Immediate, 4);
    t[0x93] = e(Cmp16(Word::D), Direct, 7);
    t[0x9C] = e(Cmp16(Word::Y), Direct, 7);
    t[0x9E] = e(Ld16(Word::Y), Direct, 6);
    t[0x9F] = e(St16(Word::Y), Direct, 6);
    t[0xA3] = e(Cmp16(Word::D), Indexed, 7);
    t[0xAC] = e(Cmp16(Word::Y), Indexed, 7);
    t[0xAE] = e(Ld16(Word::Y), Indexed, 6);
    t[0xAF] = e(St16(Word::Y), Indexed, 6);
    t[0xB3] = e(Cmp16(Word::D), Extended, 8);
    t[0xBC] = e(Cmp16(Word::Y), Extended, 8);
    t[0xBE] = e(Ld16(Word::Y), Extended, 7);
    t[0xBF] = e(St16(Word::Y), Extended, 7);

    t[0xCE] = e(Ld16(Word::S), Immediate, 4);
    t[0xDE] = e(Ld16(Word::S), Direct, 6);
    t[0xDF] = e(St16(Word::S), Direct, 6);
    t[0xEE] = e(Ld16(Word::S), Indexed, 6);
    t[0xEF] = e(St16(Word::S), Indexed, 6);
    t[0xFE] = e(Ld16(Word::S), Extended, 7);
    t[0xFF] = e(St16(Word::S), Extended, 7);

    t
}

const fn page3() -> [Option<OpEntry>; 256] {
    use AddrMode::*;
    use Op::*;
    let mut t = [None; 256];

    t[0x3F] = e(Swi3, Inherent, 20);

    t[0x83] = e(Cmp16(Word::U), Immediate, 5);
    t[0x8C] = e(Cmp16(Word::S), Immediate, 5);
    t[0x93] = e(Cmp16(Word::U), Direct, 7);
    t[0x9C] = e(Cmp16(Word::S), Direct, 7);
    t[0xA3] = e(Cmp16(Word::U), Indexed, 7);
    t[0xAC] = e(Cmp16(Word::S), Indexed, 7);
    t[0xB3] = e(Cmp16(Word::U), Extended, 8);
    t[0xBC] = e(Cmp16(Word::S), Extended, 8);

    t
}
