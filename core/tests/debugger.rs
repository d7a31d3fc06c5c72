mod common;

use common::{PROGRAM_START, game_boy_with_program};
use dotmatrix_core::debugger::instructions::{InstructionsIterator, disassemble};

#[test]
fn renders_operand_values_from_the_bus() {
    // nop ; ld a, $42 ; ld hl, $c123 ; jp $0150 ; ldh ($80), a
    let mut gb = game_boy_with_program(&[
        0x00, 0x3e, 0x42, 0x21, 0x23, 0xc1, 0xc3, 0x50, 0x01, 0xe0, 0x80,
    ]);

    let memory = gb.memory_mapped();
    let nop = disassemble(memory, PROGRAM_START);
    assert_eq!(nop.text, "nop");
    assert_eq!(nop.length, 1);

    let ld_a = disassemble(memory, nop.next_address());
    assert_eq!(ld_a.text, "ld a, $42");
    assert_eq!(ld_a.length, 2);

    let ld_hl = disassemble(memory, ld_a.next_address());
    assert_eq!(ld_hl.text, "ld hl, $c123");
    assert_eq!(ld_hl.length, 3);

    let jp = disassemble(memory, ld_hl.next_address());
    assert_eq!(jp.text, "jp $0150");
    assert_eq!(jp.length, 3);

    let ldh = disassemble(memory, jp.next_address());
    assert_eq!(ldh.text, "ldh ($80), a");
    assert_eq!(ldh.length, 2);

    // Rendering mutates nothing.
    gb.step();
    assert_eq!(gb.cpu().program_counter, PROGRAM_START + 1);
}

#[test]
fn relative_jumps_show_their_resolved_target() {
    // jr -2 loops back onto itself.
    let gb = game_boy_with_program(&[0x18, 0xfe]);
    let jr = disassemble(gb.memory_mapped(), PROGRAM_START);
    assert_eq!(jr.text, "jr $0150");
    assert_eq!(jr.length, 2);
}

#[test]
fn stack_relative_load_shows_a_signed_offset() {
    let gb = game_boy_with_program(&[0xf8, 0xfb, 0xe8, 0x05]);
    let ld = disassemble(gb.memory_mapped(), PROGRAM_START);
    assert_eq!(ld.text, "ld hl, sp-5");

    let add = disassemble(gb.memory_mapped(), ld.next_address());
    assert_eq!(add.text, "add sp, +5");
}

#[test]
fn extended_table_instructions_include_the_prefix_length() {
    let gb = game_boy_with_program(&[0xcb, 0x7e]);
    let bit = disassemble(gb.memory_mapped(), PROGRAM_START);
    assert_eq!(bit.text, "bit 7, (hl)");
    assert_eq!(bit.length, 2);
}

#[test]
fn instruction_walk_hops_over_the_header() {
    let gb = game_boy_with_program(&[0x3e, 0x42]);

    // The entry-point jump at 0x100 is followed by header data, which is
    // not opcodes; the walk resumes at 0x150.
    let addresses: Vec<u16> = InstructionsIterator::new(0x100, gb.memory_mapped())
        .take(3)
        .map(|instruction| instruction.address)
        .collect();
    assert_eq!(addresses, [0x0100, 0x0103, 0x0150]);

    let ld = InstructionsIterator::new(0x100, gb.memory_mapped())
        .nth(2)
        .unwrap();
    assert_eq!(ld.text, "ld a, $42");
}
