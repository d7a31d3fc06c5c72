use super::OpResult;
use crate::game_boy::{
    MemoryMapped,
    cpu::{Cpu, flags::Flags, instructions::Bitwise},
};

impl Cpu {
    pub fn execute_bitwise(&mut self, instruction: Bitwise, memory: &MemoryMapped) -> OpResult {
        match instruction {
            Bitwise::AndA(source) => {
                let value = self.fetch8(source, memory);
                self.a &= value;

                // AND forces half-carry set; OR and XOR clear it.
                self.flags = if self.a == 0 {
                    Flags::ZERO | Flags::HALF_CARRY
                } else {
                    Flags::HALF_CARRY
                };

                OpResult::none()
            }

            Bitwise::OrA(source) => {
                let value = self.fetch8(source, memory);
                self.a |= value;

                self.flags = if self.a == 0 {
                    Flags::ZERO
                } else {
                    Flags::empty()
                };

                OpResult::none()
            }

            Bitwise::XorA(source) => {
                let value = self.fetch8(source, memory);
                self.a ^= value;

                self.flags = if self.a == 0 {
                    Flags::ZERO
                } else {
                    Flags::empty()
                };

                OpResult::none()
            }

            Bitwise::ComplementA => {
                self.a = !self.a;
                self.flags.insert(Flags::NEGATIVE | Flags::HALF_CARRY);
                OpResult::none()
            }
        }
    }
}
