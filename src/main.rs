use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use dotmatrix_core::debugger::instructions::disassemble;
use dotmatrix_core::game_boy::GameBoy;
use dotmatrix_core::game_boy::cartridge::{Cartridge, ChecksumPolicy};
use dotmatrix_core::game_boy::cpu::cycles::Cycles;

/// Headless Game Boy core runner: validates a cartridge image and steps
/// the processor, printing a register snapshot at the end.
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Path to a .gb or .gbc ROM image
    rom: PathBuf,

    /// Number of instructions to execute
    #[arg(long, default_value_t = 100)]
    steps: u64,

    /// Disassemble each instruction before executing it
    #[arg(long)]
    trace: bool,

    /// Load even if the header checksum fails
    #[arg(long)]
    permissive: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.rom.extension().and_then(|extension| extension.to_str()) {
        Some("gb") | Some("gbc") => {}
        _ => {
            eprintln!("expected a .gb or .gbc ROM image");
            return ExitCode::FAILURE;
        }
    }

    let rom = match std::fs::read(&cli.rom) {
        Ok(rom) => rom,
        Err(error) => {
            eprintln!("failed to read {}: {error}", cli.rom.display());
            return ExitCode::FAILURE;
        }
    };

    let policy = if cli.permissive {
        ChecksumPolicy::Permissive
    } else {
        ChecksumPolicy::Strict
    };

    let cartridge = match Cartridge::parse(rom, policy) {
        Ok(cartridge) => cartridge,
        Err(error) => {
            eprintln!("failed to load {}: {error}", cli.rom.display());
            return ExitCode::FAILURE;
        }
    };

    for warning in cartridge.warnings() {
        eprintln!("warning: {warning}");
    }

    println!(
        "{}: {} / {} KiB / {} banks",
        cartridge.title(),
        cartridge.kind(),
        cartridge.rom_size() / 1024,
        cartridge.bank_count()
    );

    let mut game_boy = GameBoy::new(cartridge);
    let mut total_cycles = Cycles(0);

    for _ in 0..cli.steps {
        if cli.trace {
            let pc = game_boy.cpu().program_counter;
            let instruction = disassemble(game_boy.memory_mapped(), pc);
            println!("{pc:04x}  {}", instruction.text);
        }
        total_cycles += game_boy.step();
    }

    let cpu = game_boy.cpu();
    println!(
        "af={:04x} bc={:04x} de={:04x} hl={:04x} sp={:04x} pc={:04x}",
        cpu.get_register16(dotmatrix_core::game_boy::cpu::Register16::Af),
        cpu.get_register16(dotmatrix_core::game_boy::cpu::Register16::Bc),
        cpu.get_register16(dotmatrix_core::game_boy::cpu::Register16::De),
        cpu.get_register16(dotmatrix_core::game_boy::cpu::Register16::Hl),
        cpu.stack_pointer,
        cpu.program_counter,
    );
    println!(
        "state={:?} cycles={}",
        game_boy.execution_state(),
        total_cycles.0
    );

    ExitCode::SUCCESS
}
