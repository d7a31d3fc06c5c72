use crate::game_boy::memory::{MemoryMapped, MemoryWrite};

use super::{
    Cpu, Flags, Register16,
    instructions::{Address, Condition, Instruction, Source8, Source16, Target8, Target16},
};

mod arithmetic;
mod bit_flag;
mod bit_shift;
mod bitwise;
mod carry_flag;
mod interrupt;
mod jump;
mod load;
mod stack;

/// What executing one instruction produced: at most one memory write for
/// the step loop to apply, and whether a conditional branch was taken (the
/// step loop charges the descriptor's taken cost when it was).
pub struct OpResult {
    pub write: Option<MemoryWrite>,
    pub branch_taken: bool,
}

impl OpResult {
    pub fn none() -> Self {
        OpResult {
            write: None,
            branch_taken: false,
        }
    }

    pub fn write8(address: u16, value: u8) -> Self {
        OpResult {
            write: Some(MemoryWrite::Write8(address, value)),
            branch_taken: false,
        }
    }

    pub fn write16(address: u16, value: u16) -> Self {
        OpResult {
            write: Some(MemoryWrite::Write16(address, value)),
            branch_taken: false,
        }
    }

    pub fn branch(taken: bool) -> Self {
        OpResult {
            write: None,
            branch_taken: taken,
        }
    }
}

impl Cpu {
    pub fn execute(&mut self, instruction: Instruction, memory: &MemoryMapped) -> OpResult {
        match instruction {
            Instruction::Load(instruction) => self.execute_load(instruction, memory),
            Instruction::Arithmetic(instruction) => self.execute_arithmetic(instruction, memory),
            Instruction::Bitwise(instruction) => self.execute_bitwise(instruction, memory),
            Instruction::BitFlag(instruction) => self.execute_bit_flag(instruction, memory),
            Instruction::BitShift(instruction) => self.execute_bit_shift(instruction, memory),
            Instruction::Jump(instruction) => self.execute_jump(instruction, memory),
            Instruction::CarryFlag(instruction) => self.execute_carry_flag(instruction),
            Instruction::Stack(instruction) => self.execute_stack(instruction, memory),
            Instruction::Interrupt(instruction) => self.execute_interrupt(instruction),

            Instruction::DecimalAdjustAccumulator => {
                let value = if self.flags.contains(Flags::NEGATIVE) {
                    let mut adjustment = 0;
                    if self.flags.contains(Flags::HALF_CARRY) {
                        adjustment += 0x6;
                    }
                    if self.flags.contains(Flags::CARRY) {
                        adjustment += 0x60;
                    }

                    self.a.wrapping_sub(adjustment)
                } else {
                    let mut adjustment = 0;
                    if self.flags.contains(Flags::HALF_CARRY) || self.a & 0xf > 0x9 {
                        adjustment += 0x6;
                    }
                    if self.flags.contains(Flags::CARRY) || self.a > 0x99 {
                        adjustment += 0x60;
                        self.flags.insert(Flags::CARRY);
                    }

                    self.a.wrapping_add(adjustment)
                };

                self.flags.set(Flags::ZERO, value == 0);
                self.flags.remove(Flags::HALF_CARRY);
                self.a = value;

                OpResult::none()
            }

            Instruction::NoOperation => OpResult::none(),
            Instruction::Stop => {
                // The padding byte after the opcode is consumed unexecuted.
                let _ = self.imm8(memory);
                self.stopped = true;
                OpResult::none()
            }
            // The reserved opcodes stall the core; hardware has nothing to
            // raise.
            Instruction::Invalid(_) => {
                self.stopped = true;
                OpResult::none()
            }
            // 0xCB never reaches the executor; the fetch loop redirects it
            // into the extended table.
            Instruction::Prefix => OpResult::none(),
        }
    }

    /// Consume one immediate byte from the instruction stream.
    fn imm8(&mut self, memory: &MemoryMapped) -> u8 {
        let value = memory.read(self.program_counter);
        self.program_counter = self.program_counter.wrapping_add(1);
        value
    }

    /// Consume a 16-bit immediate, low byte first.
    fn imm16(&mut self, memory: &MemoryMapped) -> u16 {
        let low = self.imm8(memory);
        let high = self.imm8(memory);
        u16::from_le_bytes([low, high])
    }

    fn resolve_address(&mut self, address: Address, memory: &MemoryMapped) -> u16 {
        match address {
            Address::Dereference(register) => self.get_register16(register),
            Address::HlIncrement => {
                let address = self.get_register16(Register16::Hl);
                self.set_register16(Register16::Hl, address.wrapping_add(1));
                address
            }
            Address::HlDecrement => {
                let address = self.get_register16(Register16::Hl);
                self.set_register16(Register16::Hl, address.wrapping_sub(1));
                address
            }
            Address::High => 0xff00 + self.imm8(memory) as u16,
            Address::HighPlusC => 0xff00 + self.c as u16,
            Address::Absolute => self.imm16(memory),
        }
    }

    fn fetch8(&mut self, source: Source8, memory: &MemoryMapped) -> u8 {
        match source {
            Source8::Register(register) => self.get_register8(register),
            Source8::Immediate => self.imm8(memory),
            Source8::Memory(address) => {
                let address = self.resolve_address(address, memory);
                memory.read(address)
            }
        }
    }

    fn set8(&mut self, target: Target8, value: u8, memory: &MemoryMapped) -> OpResult {
        match target {
            Target8::Register(register) => {
                self.set_register8(register, value);
                OpResult::none()
            }
            Target8::Memory(address) => {
                let address = self.resolve_address(address, memory);
                OpResult::write8(address, value)
            }
        }
    }

    fn fetch16(&mut self, source: Source16, memory: &MemoryMapped) -> u16 {
        match source {
            Source16::Immediate => self.imm16(memory),
            Source16::Register(register) => self.get_register16(register),
            Source16::StackPointerWithOffset => {
                let sp = self.stack_pointer;
                let offset = self.imm8(memory);
                let result = sp.wrapping_add(offset as i8 as u16);

                self.flags.remove(Flags::ZERO);
                self.flags.remove(Flags::NEGATIVE);
                self.flags
                    .set(Flags::HALF_CARRY, (sp & 0xf) + (offset as u16 & 0xf) > 0xf);
                self.flags
                    .set(Flags::CARRY, (sp & 0xff) + (offset as u16 & 0xff) > 0xff);

                result
            }
        }
    }

    fn set16(&mut self, target: Target16, value: u16, memory: &MemoryMapped) -> OpResult {
        match target {
            Target16::Register(register) => {
                self.set_register16(register, value);
                OpResult::none()
            }
            Target16::Absolute => {
                let address = self.imm16(memory);
                OpResult::write16(address, value)
            }
        }
    }

    /// Decrement SP by two and stage the little-endian word write.
    fn push16(&mut self, value: u16) -> MemoryWrite {
        self.stack_pointer = self.stack_pointer.wrapping_sub(2);
        MemoryWrite::Write16(self.stack_pointer, value)
    }

    fn pop16(&mut self, memory: &MemoryMapped) -> u16 {
        let value = memory.read16(self.stack_pointer);
        self.stack_pointer = self.stack_pointer.wrapping_add(2);
        value
    }

    fn condition_met(&self, condition: Option<Condition>) -> bool {
        match condition {
            Some(Condition(flag, value)) => self.flags.contains(flag.into()) == value,
            None => true,
        }
    }
}
