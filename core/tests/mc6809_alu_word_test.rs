mod common;

use common::{TestBus, step};
use ember_core::cpu::mc6809::{CcFlag, Mc6809};

#[test]
fn test_addd_immediate() {
    let mut cpu = Mc6809::new();
    let mut bus = TestBus::new();
    cpu.set_d(0x0405);
    bus.load(0, &[0xC3, 0x02, 0xB0]); // ADDD #$02B0

    let cycles = step(&mut cpu, &mut bus);

    assert_eq!(cycles, 4);
    assert_eq!(cpu.d(), 0x06B5);
    assert_eq!(cpu.a, 0x06);
    assert_eq!(cpu.b, 0xB5);
    assert_eq!(cpu.cc & 0x0F, 0, "N/Z/V/C all clear");
}

#[test]
fn test_addd_carry_and_negative() {
    let mut cpu = Mc6809::new();
    let mut bus = TestBus::new();
    cpu.set_d(0xE000);
    bus.load(0, &[0xC3, 0xD0, 0x00]); // ADDD #$D000

    step(&mut cpu, &mut bus);

    assert_eq!(cpu.d(), 0xB000);
    assert!(cpu.flag(CcFlag::C));
    assert!(cpu.flag(CcFlag::N));
    assert!(!cpu.flag(CcFlag::V), "negative + negative = negative");
}

#[test]
fn test_addd_signed_overflow() {
    let mut cpu = Mc6809::new();
    let mut bus = TestBus::new();
    cpu.set_d(0x63B5);
    bus.load(0, &[0xC3, 0x03, 0x00]); // ADDD #$0300

    step(&mut cpu, &mut bus);

    assert_eq!(cpu.d(), 0x66B5);
    assert!(!cpu.flag(CcFlag::V));
    assert!(!cpu.flag(CcFlag::C));

    // 0x7FFF + 1 flips the sign
    cpu.set_d(0x7FFF);
    cpu.pc = 0;
    bus.load(0, &[0xC3, 0x00, 0x01]);
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.d(), 0x8000);
    assert!(cpu.flag(CcFlag::V));
    assert!(cpu.flag(CcFlag::N));
}

#[test]
fn test_subd_immediate() {
    let mut cpu = Mc6809::new();
    let mut bus = TestBus::new();
    cpu.set_d(0x06B5);
    bus.load(0, &[0x83, 0x02, 0xB0]); // SUBD #$02B0

    let cycles = step(&mut cpu, &mut bus);

    assert_eq!(cycles, 4);
    assert_eq!(cpu.d(), 0x0405);
    assert!(!cpu.flag(CcFlag::C));
    assert!(!cpu.flag(CcFlag::N));
}

#[test]
fn test_subd_borrow() {
    let mut cpu = Mc6809::new();
    let mut bus = TestBus::new();
    cpu.set_d(0x0100);
    bus.load(0, &[0x83, 0x02, 0x00]); // SUBD #$0200

    step(&mut cpu, &mut bus);

    assert_eq!(cpu.d(), 0xFF00);
    assert!(cpu.flag(CcFlag::C), "borrow sets carry");
    assert!(cpu.flag(CcFlag::N));
}

#[test]
fn test_addd_direct() {
    let mut cpu = Mc6809::new();
    let mut bus = TestBus::new();
    cpu.set_d(0x0001);
    cpu.dp = 0x20;
    bus.write_word(0x2040, 0x1234);
    bus.load(0, &[0xD3, 0x40]); // ADDD <$40

    let cycles = step(&mut cpu, &mut bus);

    assert_eq!(cycles, 6);
    assert_eq!(cpu.d(), 0x1235);
}

#[test]
fn test_cmpx_immediate() {
    let mut cpu = Mc6809::new();
    let mut bus = TestBus::new();
    cpu.x = 0x1E20;
    bus.load(0, &[0x8C, 0x1E, 0x20]); // CMPX #$1E20

    let cycles = step(&mut cpu, &mut bus);

    assert_eq!(cycles, 4);
    assert_eq!(cpu.x, 0x1E20, "CMPX must not modify X");
    assert!(cpu.flag(CcFlag::Z));
    assert!(!cpu.flag(CcFlag::C));
}

#[test]
fn test_cmpd_immediate_page2() {
    let mut cpu = Mc6809::new();
    let mut bus = TestBus::new();
    cpu.set_d(0x0100);
    bus.load(0, &[0x10, 0x83, 0x02, 0x00]); // CMPD #$0200

    let cycles = step(&mut cpu, &mut bus);

    assert_eq!(cycles, 5);
    assert_eq!(cpu.d(), 0x0100);
    assert!(cpu.flag(CcFlag::C), "D < operand borrows");
    assert!(cpu.flag(CcFlag::N));
    assert_eq!(cpu.instruction_register(), 0x1083);
}

#[test]
fn test_cmpu_immediate_page3() {
    let mut cpu = Mc6809::new();
    let mut bus = TestBus::new();
    cpu.u = 0x8000;
    bus.load(0, &[0x11, 0x83, 0x80, 0x00]); // CMPU #$8000

    let cycles = step(&mut cpu, &mut bus);

    assert_eq!(cycles, 5);
    assert!(cpu.flag(CcFlag::Z));
}

#[test]
fn test_cmps_immediate_page3() {
    let mut cpu = Mc6809::new();
    let mut bus = TestBus::new();
    cpu.s = 0x0200;
    bus.load(0, &[0x11, 0x8C, 0x01, 0x00]); // CMPS #$0100

    step(&mut cpu, &mut bus);

    assert!(!cpu.flag(CcFlag::Z));
    assert!(!cpu.flag(CcFlag::C));
    assert!(!cpu.flag(CcFlag::N));
}

#[test]
fn test_mul() {
    let mut cpu = Mc6809::new();
    let mut bus = TestBus::new();
    cpu.a = 0x0C;
    cpu.b = 0x64;
    cpu.cc = CcFlag::Z as u8;
    bus.load(0, &[0x3D]); // MUL

    let cycles = step(&mut cpu, &mut bus);

    assert_eq!(cycles, 11);
    assert_eq!(cpu.d(), 0x04B0);
    assert_eq!(cpu.a, 0x04);
    assert_eq!(cpu.b, 0xB0);
    assert!(!cpu.flag(CcFlag::Z));
    assert!(cpu.flag(CcFlag::C), "bit 7 of the low byte");
}

#[test]
fn test_mul_zero() {
    let mut cpu = Mc6809::new();
    let mut bus = TestBus::new();
    cpu.a = 0x0C;
    cpu.b = 0x00;
    bus.load(0, &[0x3D]); // MUL

    step(&mut cpu, &mut bus);

    assert_eq!(cpu.d(), 0x0000);
    assert!(cpu.flag(CcFlag::Z));
    assert!(!cpu.flag(CcFlag::C));
}

#[test]
fn test_sex_positive_and_negative() {
    let mut cpu = Mc6809::new();
    let mut bus = TestBus::new();
    cpu.a = 0xEE;
    cpu.b = 0x76;
    bus.load(0, &[0x1D, 0x1D]); // SEX; SEX

    let cycles = step(&mut cpu, &mut bus);
    assert_eq!(cycles, 2);
    assert_eq!(cpu.d(), 0x0076);
    assert!(!cpu.flag(CcFlag::N));

    cpu.b = 0xE6;
    step(&mut cpu, &mut bus);
    assert_eq!(cpu.d(), 0xFFE6);
    assert!(cpu.flag(CcFlag::N));
}

#[test]
fn test_abx_is_unsigned_and_flagless() {
    let mut cpu = Mc6809::new();
    let mut bus = TestBus::new();
    cpu.x = 0x1000;
    cpu.b = 0xFF;
    cpu.cc = 0x00;
    bus.load(0, &[0x3A]); // ABX

    let cycles = step(&mut cpu, &mut bus);

    assert_eq!(cycles, 3);
    assert_eq!(cpu.x, 0x10FF, "B is added unsigned");
    assert_eq!(cpu.cc, 0x00, "ABX touches no flags");
}

#[test]
fn test_daa_after_bcd_add() {
    let mut cpu = Mc6809::new();
    let mut bus = TestBus::new();
    cpu.a = 0x7F;
    cpu.cc = 0x00;
    bus.load(0, &[0x19]); // DAA

    let cycles = step(&mut cpu, &mut bus);

    assert_eq!(cycles, 2);
    assert_eq!(cpu.a, 0x85);
    assert!(cpu.flag(CcFlag::N));
    assert!(!cpu.flag(CcFlag::Z));
    assert!(!cpu.flag(CcFlag::C));
}

#[test]
fn test_daa_generates_carry() {
    // 0x99 + 0x01 = 0x9A; DAA corrects to 0x00 with carry: 99 + 1 = 100 BCD
    let mut cpu = Mc6809::new();
    let mut bus = TestBus::new();
    cpu.a = 0x99;
    bus.load(0, &[0x8B, 0x01, 0x19]); // ADDA #$01; DAA

    step(&mut cpu, &mut bus);
    assert_eq!(cpu.a, 0x9A);
    step(&mut cpu, &mut bus);

    assert_eq!(cpu.a, 0x00);
    assert!(cpu.flag(CcFlag::C));
    assert!(cpu.flag(CcFlag::Z));
}
