use super::OpResult;
use crate::game_boy::cpu::{Cpu, InterruptMasterEnable, instructions::Interrupt};

impl Cpu {
    pub fn execute_interrupt(&mut self, instruction: Interrupt) -> OpResult {
        match instruction {
            Interrupt::Enable => {
                if self.interrupt_master_enable != InterruptMasterEnable::Enabled {
                    self.interrupt_master_enable =
                        InterruptMasterEnable::EnableAfterNextInstruction;
                }
                OpResult::none()
            }

            Interrupt::Disable => {
                self.interrupt_master_enable = InterruptMasterEnable::Disabled;
                OpResult::none()
            }

            // The step loop turns this into the halt bug instead when an
            // interrupt is already pending with the master enable clear.
            Interrupt::Await => {
                self.halted = true;
                OpResult::none()
            }
        }
    }
}
