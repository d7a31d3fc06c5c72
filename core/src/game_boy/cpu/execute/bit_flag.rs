use super::OpResult;
use crate::game_boy::{
    MemoryMapped,
    cpu::{Cpu, flags::Flags, instructions::BitFlag},
};

impl Cpu {
    pub fn execute_bit_flag(&mut self, instruction: BitFlag, memory: &MemoryMapped) -> OpResult {
        match instruction {
            BitFlag::Check(bit, source) => {
                let value = self.fetch8(source, memory);

                self.flags.set(Flags::ZERO, value & (1 << bit) == 0);
                self.flags.remove(Flags::NEGATIVE);
                self.flags.insert(Flags::HALF_CARRY);

                OpResult::none()
            }

            BitFlag::Set(bit, target) => {
                let value = self.fetch8(target.to_source(), memory);
                self.set8(target, value | (1 << bit), memory)
            }

            BitFlag::Unset(bit, target) => {
                let value = self.fetch8(target.to_source(), memory);
                self.set8(target, value & !(1 << bit), memory)
            }
        }
    }
}
