use super::{
    GameBoy,
    cpu::{
        InterruptMasterEnable,
        cycles::Cycles,
        instructions::{self, Instruction},
        opcodes::{CB_OPCODES, OPCODES},
    },
    interrupts::Interrupt,
};

/// Servicing an interrupt replaces the fetch for that step.
const INTERRUPT_DISPATCH_CYCLES: Cycles = Cycles(5);

/// Cost of one step while halted or stopped; nothing is mutated.
const IDLE_CYCLES: Cycles = Cycles(1);

impl GameBoy {
    /// One fetch-decode-execute, interrupt dispatch, or idle tick. Returns
    /// the machine cycles consumed so the host can pace its peripherals.
    pub fn step(&mut self) -> Cycles {
        if self.cpu.stopped {
            return IDLE_CYCLES;
        }

        if let Some(interrupt) = self.check_for_interrupt() {
            self.cpu.halted = false;
            self.cpu.interrupt_master_enable = InterruptMasterEnable::Disabled;
            self.mapped.interrupts_mut().clear(interrupt);
            return self.dispatch_interrupt(interrupt);
        }

        if self.cpu.halted {
            return IDLE_CYCLES;
        }

        let byte = self.fetch_byte();
        let opcode = if byte == 0xcb {
            &CB_OPCODES[self.fetch_byte() as usize]
        } else {
            &OPCODES[byte as usize]
        };

        let result = self.cpu.execute(opcode.instruction, &self.mapped);
        if let Some(write) = result.write {
            self.mapped.write(write);
        }

        // Halt with the master enable clear and an interrupt already
        // pending does not halt: the next fetch re-reads this PC instead.
        if matches!(
            opcode.instruction,
            Instruction::Interrupt(instructions::Interrupt::Await)
        ) && self.cpu.interrupt_master_enable != InterruptMasterEnable::Enabled
            && self.mapped.interrupts().triggered().is_some()
        {
            self.cpu.halted = false;
            self.cpu.halt_bug = true;
        }

        match (result.branch_taken, opcode.cycles_taken) {
            (true, Some(taken)) => Cycles(taken as u32),
            _ => Cycles(opcode.cycles as u32),
        }
    }

    fn fetch_byte(&mut self) -> u8 {
        let value = self.mapped.read(self.cpu.program_counter);
        if self.cpu.halt_bug {
            self.cpu.halt_bug = false;
        } else {
            self.cpu.program_counter = self.cpu.program_counter.wrapping_add(1);
        }
        value
    }

    fn check_for_interrupt(&mut self) -> Option<Interrupt> {
        match self.cpu.interrupt_master_enable {
            InterruptMasterEnable::EnableAfterNextInstruction => {
                self.cpu.interrupt_master_enable = InterruptMasterEnable::Enabled;
                None
            }
            InterruptMasterEnable::Enabled => self.mapped.interrupts().triggered(),
            InterruptMasterEnable::Disabled => {
                // A pending interrupt wakes a halted CPU even when it will
                // not be serviced.
                if self.cpu.halted && self.mapped.interrupts().triggered().is_some() {
                    self.cpu.halted = false;
                }
                None
            }
        }
    }

    fn dispatch_interrupt(&mut self, interrupt: Interrupt) -> Cycles {
        self.cpu.stack_pointer = self.cpu.stack_pointer.wrapping_sub(2);
        self.mapped.write16(self.cpu.stack_pointer, self.cpu.program_counter);
        self.cpu.program_counter = interrupt.vector();
        INTERRUPT_DISPATCH_CYCLES
    }
}
