//! Renders instructions at a bus address without mutating anything. The
//! opcode tables carry operand placeholders (n8/n16/e8/a8/a16) in their
//! mnemonics; this substitutes the live bytes.

use crate::game_boy::{
    cpu::opcodes::{CB_OPCODES, OPCODES},
    memory::MemoryMapped,
};

pub struct DisassembledInstruction {
    pub address: u16,
    pub text: String,
    /// Total encoded length, including prefix and operand bytes.
    pub length: u16,
}

impl DisassembledInstruction {
    pub fn next_address(&self) -> u16 {
        self.address.wrapping_add(self.length)
    }
}

/// Walks successive instructions from an address. The cartridge header at
/// 0x104-0x14f is data, not opcodes, so the walk hops over it; reaching
/// the top of the address space ends the iteration.
pub struct InstructionsIterator<'a> {
    address: Option<u16>,
    memory: &'a MemoryMapped,
}

impl<'a> InstructionsIterator<'a> {
    pub fn new(address: u16, memory: &'a MemoryMapped) -> Self {
        InstructionsIterator {
            address: Some(address),
            memory,
        }
    }
}

impl Iterator for InstructionsIterator<'_> {
    type Item = DisassembledInstruction;

    fn next(&mut self) -> Option<Self::Item> {
        let address = self.address?;
        let instruction = disassemble(self.memory, address);

        let mut next = instruction.next_address();
        if (0x104..0x150).contains(&next) {
            next = 0x150;
        }
        self.address = if next > address { Some(next) } else { None };

        Some(instruction)
    }
}

pub fn disassemble(memory: &MemoryMapped, address: u16) -> DisassembledInstruction {
    let byte = memory.read(address);
    let (opcode, mut length) = if byte == 0xcb {
        let extended = memory.read(address.wrapping_add(1));
        (&CB_OPCODES[extended as usize], 2u16)
    } else {
        (&OPCODES[byte as usize], 1u16)
    };

    let mnemonic = opcode.mnemonic;
    if byte == 0x10 {
        // stop carries a padding byte that is consumed unexecuted.
        length += 1;
    }
    let text = if let Some(position) = mnemonic.find("n16").or_else(|| mnemonic.find("a16")) {
        let value = memory.read16(address.wrapping_add(length));
        length += 2;
        format!(
            "{}${:04x}{}",
            &mnemonic[..position],
            value,
            &mnemonic[position + 3..]
        )
    } else if let Some(position) = mnemonic.find("e8") {
        let offset = memory.read(address.wrapping_add(length)) as i8;
        length += 1;
        if mnemonic.starts_with("jr") {
            // Relative branches read better as their resolved target.
            let target = address.wrapping_add(length).wrapping_add(offset as u16);
            format!("{}${:04x}", &mnemonic[..position], target)
        } else {
            // "sp+e8" renders as sp+5 / sp-5.
            let start = if mnemonic.as_bytes()[position - 1] == b'+' {
                position - 1
            } else {
                position
            };
            format!(
                "{}{:+}{}",
                &mnemonic[..start],
                offset,
                &mnemonic[position + 2..]
            )
        }
    } else if let Some(position) = mnemonic.find("n8").or_else(|| mnemonic.find("a8")) {
        let value = memory.read(address.wrapping_add(length));
        length += 1;
        format!(
            "{}${:02x}{}",
            &mnemonic[..position],
            value,
            &mnemonic[position + 2..]
        )
    } else {
        mnemonic.to_string()
    };

    DisassembledInstruction {
        address,
        text,
        length,
    }
}
