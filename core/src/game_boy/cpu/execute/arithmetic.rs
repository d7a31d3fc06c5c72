use super::OpResult;
use crate::game_boy::{
    MemoryMapped,
    cpu::{
        Cpu, Register16,
        flags::Flags,
        instructions::{Arithmetic, Arithmetic8, Arithmetic16},
    },
};

impl Cpu {
    pub fn execute_arithmetic(
        &mut self,
        instruction: Arithmetic,
        memory: &MemoryMapped,
    ) -> OpResult {
        match instruction {
            Arithmetic::Arithmetic8(instruction) => match instruction {
                Arithmetic8::Increment(target) => {
                    let value = self.fetch8(target.to_source(), memory);
                    let result = value.wrapping_add(1);

                    self.flags.set(Flags::ZERO, result == 0);
                    self.flags.remove(Flags::NEGATIVE);
                    self.flags.set(Flags::HALF_CARRY, value & 0xf == 0xf);

                    self.set8(target, result, memory)
                }

                Arithmetic8::Decrement(target) => {
                    let value = self.fetch8(target.to_source(), memory);
                    let result = value.wrapping_sub(1);

                    self.flags.set(Flags::ZERO, result == 0);
                    self.flags.insert(Flags::NEGATIVE);
                    self.flags.set(Flags::HALF_CARRY, value & 0xf == 0);

                    self.set8(target, result, memory)
                }

                Arithmetic8::AddA(source) => {
                    let value = self.fetch8(source, memory);
                    self.add_to_a(value, false);
                    OpResult::none()
                }

                Arithmetic8::AddACarry(source) => {
                    let value = self.fetch8(source, memory);
                    self.add_to_a(value, true);
                    OpResult::none()
                }

                Arithmetic8::SubtractA(source) => {
                    let value = self.fetch8(source, memory);
                    self.a = self.subtract_from_a(value, false);
                    OpResult::none()
                }

                Arithmetic8::SubtractACarry(source) => {
                    let value = self.fetch8(source, memory);
                    self.a = self.subtract_from_a(value, true);
                    OpResult::none()
                }

                Arithmetic8::CompareA(source) => {
                    let value = self.fetch8(source, memory);
                    self.subtract_from_a(value, false);
                    OpResult::none()
                }
            },

            Arithmetic::Arithmetic16(instruction) => match instruction {
                Arithmetic16::Increment(register) => {
                    let value = self.get_register16(register);
                    self.set_register16(register, value.wrapping_add(1));
                    OpResult::none()
                }

                Arithmetic16::Decrement(register) => {
                    let value = self.get_register16(register);
                    self.set_register16(register, value.wrapping_sub(1));
                    OpResult::none()
                }

                Arithmetic16::AddHl(register) => {
                    let hl = self.get_register16(Register16::Hl);
                    let value = self.get_register16(register);
                    let result = hl.wrapping_add(value);

                    // Z is untouched; half-carry is across bit 11 here.
                    self.flags.remove(Flags::NEGATIVE);
                    self.flags
                        .set(Flags::HALF_CARRY, (hl & 0xfff) + (value & 0xfff) > 0xfff);
                    self.flags
                        .set(Flags::CARRY, hl as u32 + value as u32 > 0xffff);

                    self.set_register16(Register16::Hl, result);
                    OpResult::none()
                }

                Arithmetic16::AddStackPointer => {
                    let sp = self.stack_pointer;
                    let offset = self.imm8(memory);
                    let result = sp.wrapping_add(offset as i8 as u16);

                    self.flags.remove(Flags::ZERO);
                    self.flags.remove(Flags::NEGATIVE);
                    self.flags
                        .set(Flags::HALF_CARRY, (sp & 0xf) + (offset as u16 & 0xf) > 0xf);
                    self.flags
                        .set(Flags::CARRY, (sp & 0xff) + (offset as u16 & 0xff) > 0xff);

                    self.stack_pointer = result;
                    OpResult::none()
                }
            },
        }
    }

    /// Z/N/H/C from the true result; H is the carry out of the low nibble,
    /// C the carry out of the byte.
    fn add_to_a(&mut self, value: u8, with_carry: bool) {
        let carry = (with_carry && self.flags.contains(Flags::CARRY)) as u8;
        let result = self.a.wrapping_add(value).wrapping_add(carry);

        self.flags.set(Flags::ZERO, result == 0);
        self.flags.remove(Flags::NEGATIVE);
        self.flags.set(
            Flags::HALF_CARRY,
            (self.a & 0xf) + (value & 0xf) + carry > 0xf,
        );
        self.flags.set(
            Flags::CARRY,
            self.a as u16 + value as u16 + carry as u16 > 0xff,
        );

        self.a = result;
    }

    /// Flag computation shared by sub/sbc/cp; cp discards the returned
    /// result.
    fn subtract_from_a(&mut self, value: u8, with_carry: bool) -> u8 {
        let carry = (with_carry && self.flags.contains(Flags::CARRY)) as u8;
        let result = self.a.wrapping_sub(value).wrapping_sub(carry);

        self.flags.set(Flags::ZERO, result == 0);
        self.flags.insert(Flags::NEGATIVE);
        self.flags
            .set(Flags::HALF_CARRY, (self.a & 0xf) < (value & 0xf) + carry);
        self.flags
            .set(Flags::CARRY, (self.a as u16) < value as u16 + carry as u16);

        result
    }
}
