//! Property tests for the register file's pair/half and flag invariants.

use proptest::prelude::*;

use dotmatrix_core::game_boy::cpu::{Cpu, Register8, Register16};

const PAIRS: [(Register16, Register8, Register8); 3] = [
    (Register16::Bc, Register8::B, Register8::C),
    (Register16::De, Register8::D, Register8::E),
    (Register16::Hl, Register8::H, Register8::L),
];

proptest! {
    #[test]
    fn pair_writes_split_into_the_named_halves(value in any::<u16>()) {
        for (pair, high, low) in PAIRS {
            let mut cpu = Cpu::new();
            cpu.set_register16(pair, value);
            prop_assert_eq!(cpu.get_register8(high), (value >> 8) as u8);
            prop_assert_eq!(cpu.get_register8(low), value as u8);
            prop_assert_eq!(cpu.get_register16(pair), value);
        }
    }

    #[test]
    fn half_writes_reconstruct_the_pair(high in any::<u8>(), low in any::<u8>()) {
        for (pair, high_register, low_register) in PAIRS {
            let mut cpu = Cpu::new();
            cpu.set_register8(high_register, high);
            cpu.set_register8(low_register, low);
            prop_assert_eq!(cpu.get_register16(pair), u16::from_be_bytes([high, low]));
        }
    }

    #[test]
    fn af_always_reads_back_with_a_clear_low_nibble(value in any::<u16>()) {
        let mut cpu = Cpu::new();
        cpu.set_register16(Register16::Af, value);
        prop_assert_eq!(cpu.get_register16(Register16::Af), value & 0xfff0);
        prop_assert_eq!(cpu.f() & 0x0f, 0);
    }

    #[test]
    fn f_masks_every_direct_write(value in any::<u8>()) {
        let mut cpu = Cpu::new();
        cpu.set_f(value);
        prop_assert_eq!(cpu.f(), value & 0xf0);
    }
}
