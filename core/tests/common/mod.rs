#![allow(dead_code)]

use dotmatrix_core::game_boy::{
    GameBoy,
    cartridge::{Cartridge, ChecksumPolicy},
};

pub const LOGO: [u8; 48] = [
    0xce, 0xed, 0x66, 0x66, 0xcc, 0x0d, 0x00, 0x0b, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0c, 0x00, 0x0d,
    0x00, 0x08, 0x11, 0x1f, 0x88, 0x89, 0x00, 0x0e, 0xdc, 0xcc, 0x6e, 0xe6, 0xdd, 0xdd, 0xd9, 0x99,
    0xbb, 0xbb, 0x67, 0x63, 0x6e, 0x0e, 0xec, 0xcc, 0xdd, 0xdc, 0x99, 0x9f, 0xbb, 0xb9, 0x33, 0x3e,
];

/// Program entry once the header jump has run.
pub const PROGRAM_START: u16 = 0x0150;

/// Synthesize a valid image: logo, type and size bytes, a jump from the
/// 0x100 entry point to the program at 0x150, and both checksums fixed up.
pub fn rom_image(program: &[u8], cartridge_type: u8, size_code: u8) -> Vec<u8> {
    let mut rom = vec![0u8; 0x8000 << size_code];
    rom[0x104..0x134].copy_from_slice(&LOGO);
    rom[0x147] = cartridge_type;
    rom[0x148] = size_code;

    rom[0x100..0x103].copy_from_slice(&[0xc3, 0x50, 0x01]);
    rom[0x150..0x150 + program.len()].copy_from_slice(program);

    finish_checksums(&mut rom);
    rom
}

/// Recompute the header and global checksum fields after any edit.
pub fn finish_checksums(rom: &mut [u8]) {
    let header = rom[0x134..0x14d]
        .iter()
        .fold(0u8, |checksum, byte| checksum.wrapping_sub(*byte).wrapping_sub(1));
    rom[0x14d] = header;

    rom[0x14e] = 0;
    rom[0x14f] = 0;
    let global = rom
        .iter()
        .fold(0u16, |checksum, byte| checksum.wrapping_add(*byte as u16));
    rom[0x14e..0x150].copy_from_slice(&global.to_be_bytes());
}

/// A machine paused at the start of the given program: the entry-point
/// jump has already executed, so the program counter sits at 0x150.
pub fn game_boy_with_program(program: &[u8]) -> GameBoy {
    let rom = rom_image(program, 0x00, 0x00);
    let mut game_boy = GameBoy::new(Cartridge::parse(rom, ChecksumPolicy::Strict).unwrap());
    game_boy.step();
    assert_eq!(game_boy.cpu().program_counter, PROGRAM_START);
    game_boy
}

/// A 128 KiB MBC1+RAM image whose banks 1-7 are filled with their own
/// bank number; bank 0 keeps the header and program.
pub fn mbc1_game_boy(program: &[u8]) -> GameBoy {
    let mut rom = rom_image(program, 0x03, 0x02);
    rom[0x149] = 0x02; // 8 KiB external RAM
    for bank in 1..8 {
        rom[bank * 0x4000..(bank + 1) * 0x4000].fill(bank as u8);
    }
    finish_checksums(&mut rom);

    let mut game_boy = GameBoy::new(Cartridge::parse(rom, ChecksumPolicy::Strict).unwrap());
    game_boy.step();
    game_boy
}
