use bitflags::bitflags;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flag {
    Zero,
    Negative,
    HalfCarry,
    Carry,
}

impl From<Flag> for Flags {
    fn from(flag: Flag) -> Self {
        match flag {
            Flag::Zero => Flags::ZERO,
            Flag::Negative => Flags::NEGATIVE,
            Flag::HalfCarry => Flags::HALF_CARRY,
            Flag::Carry => Flags::CARRY,
        }
    }
}

bitflags! {
    // Only the four high bits exist in hardware. The low nibble of F always
    // reads back as zero, so no catch-all bit is defined here: constructing
    // through from_bits_truncate masks it off.
    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    pub struct Flags: u8 {
        const ZERO = 0b1000_0000;
        const NEGATIVE = 0b0100_0000;
        const HALF_CARRY = 0b0010_0000;
        const CARRY = 0b0001_0000;
    }
}
