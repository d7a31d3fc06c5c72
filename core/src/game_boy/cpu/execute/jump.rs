use super::OpResult;
use crate::game_boy::{
    MemoryMapped,
    cpu::{
        Cpu, InterruptMasterEnable, Register16,
        instructions::{Jump, Location},
    },
};

impl Cpu {
    pub fn execute_jump(&mut self, instruction: Jump, memory: &MemoryMapped) -> OpResult {
        match instruction {
            Jump::Jump(condition, location) => {
                // Operand bytes are consumed whether or not the branch is
                // taken.
                let address = match location {
                    Location::Immediate => self.imm16(memory),
                    Location::Relative => {
                        let offset = self.imm8(memory) as i8;
                        self.program_counter.wrapping_add(offset as u16)
                    }
                    Location::RegisterHl => self.get_register16(Register16::Hl),
                };

                if self.condition_met(condition) {
                    self.program_counter = address;
                    OpResult::branch(true)
                } else {
                    OpResult::branch(false)
                }
            }

            Jump::Call(condition) => {
                let address = self.imm16(memory);

                if self.condition_met(condition) {
                    let write = self.push16(self.program_counter);
                    self.program_counter = address;
                    OpResult {
                        write: Some(write),
                        branch_taken: true,
                    }
                } else {
                    OpResult::branch(false)
                }
            }

            Jump::Return(condition) => {
                if self.condition_met(condition) {
                    self.program_counter = self.pop16(memory);
                    OpResult::branch(true)
                } else {
                    OpResult::branch(false)
                }
            }

            // Unlike `ei`, returning from a handler re-enables interrupts
            // with no delay.
            Jump::ReturnAndEnableInterrupts => {
                self.program_counter = self.pop16(memory);
                self.interrupt_master_enable = InterruptMasterEnable::Enabled;
                OpResult::branch(true)
            }

            Jump::Restart(vector) => {
                let write = self.push16(self.program_counter);
                self.program_counter = vector as u16;
                OpResult {
                    write: Some(write),
                    branch_taken: true,
                }
            }
        }
    }
}
