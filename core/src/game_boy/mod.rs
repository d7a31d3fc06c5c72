use cartridge::Cartridge;
use cpu::{Cpu, ExecutionState};

pub mod cartridge;
pub mod cpu;
pub mod execute;
pub mod interrupts;
pub mod memory;

pub use memory::MemoryMapped;

pub struct GameBoy {
    cpu: Cpu,
    mapped: MemoryMapped,
}

impl GameBoy {
    pub fn new(cartridge: Cartridge) -> GameBoy {
        GameBoy {
            cpu: Cpu::new(),
            mapped: MemoryMapped::new(cartridge),
        }
    }

    /// Power cycle: registers and on-board RAM return to the documented
    /// baseline. Cartridge contents are untouched.
    pub fn reset(&mut self) {
        self.cpu = Cpu::new();
        self.mapped.reset();
    }

    pub fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    pub fn execution_state(&self) -> ExecutionState {
        self.cpu.execution_state()
    }

    pub fn memory_mapped(&self) -> &MemoryMapped {
        &self.mapped
    }

    /// Mutable bus access for the peripheral subsystems that own the I/O
    /// register window. This is their sole integration seam.
    pub fn memory_mapped_mut(&mut self) -> &mut MemoryMapped {
        &mut self.mapped
    }

    pub fn cartridge(&self) -> &Cartridge {
        self.mapped.cartridge()
    }

    pub fn interrupts(&self) -> &interrupts::Registers {
        self.mapped.interrupts()
    }

    /// Raise an interrupt request bit, as a peripheral would through the
    /// bus.
    pub fn request_interrupt(&mut self, interrupt: interrupts::Interrupt) {
        self.mapped.interrupts_mut().request(interrupt);
    }

    /// External button-style signal that ends the stopped state.
    pub fn wake(&mut self) {
        self.cpu.stopped = false;
    }
}
