use super::OpResult;
use crate::game_boy::{
    MemoryMapped,
    cpu::{Cpu, instructions::Stack},
};

impl Cpu {
    pub fn execute_stack(&mut self, instruction: Stack, memory: &MemoryMapped) -> OpResult {
        match instruction {
            Stack::Push(register) => {
                let write = self.push16(self.get_register16(register));
                OpResult {
                    write: Some(write),
                    branch_taken: false,
                }
            }

            Stack::Pop(register) => {
                let value = self.pop16(memory);
                // Popping into AF still masks the low nibble of F.
                self.set_register16(register, value);
                OpResult::none()
            }
        }
    }
}
