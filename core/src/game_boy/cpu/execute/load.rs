use super::OpResult;
use crate::game_boy::{
    MemoryMapped,
    cpu::{Cpu, instructions::Load},
};

impl Cpu {
    pub fn execute_load(&mut self, instruction: Load, memory: &MemoryMapped) -> OpResult {
        match instruction {
            Load::Load8(target, source) => {
                let value = self.fetch8(source, memory);
                self.set8(target, value, memory)
            }

            Load::Load16(target, source) => {
                let value = self.fetch16(source, memory);
                self.set16(target, value, memory)
            }
        }
    }
}
