mod common;

use common::{PROGRAM_START, game_boy_with_program};
use dotmatrix_core::game_boy::cpu::{ExecutionState, Register16, cycles::Cycles};

#[test]
fn nop_advances_pc_by_one_and_nothing_else() {
    let mut gb = game_boy_with_program(&[0x00]);
    let before_af = gb.cpu().get_register16(Register16::Af);
    let before_bc = gb.cpu().get_register16(Register16::Bc);
    let before_sp = gb.cpu().stack_pointer;

    let cycles = gb.step();

    assert_eq!(cycles, Cycles(1));
    assert_eq!(gb.cpu().program_counter, PROGRAM_START + 1);
    assert_eq!(gb.cpu().get_register16(Register16::Af), before_af);
    assert_eq!(gb.cpu().get_register16(Register16::Bc), before_bc);
    assert_eq!(gb.cpu().stack_pointer, before_sp);
}

#[test]
fn immediate_loads_consume_their_operands() {
    // ld a, $42 ; ld hl, $c123
    let mut gb = game_boy_with_program(&[0x3e, 0x42, 0x21, 0x23, 0xc1]);

    assert_eq!(gb.step(), Cycles(2));
    assert_eq!(gb.cpu().a, 0x42);
    assert_eq!(gb.cpu().program_counter, PROGRAM_START + 2);

    assert_eq!(gb.step(), Cycles(3));
    assert_eq!(gb.cpu().get_register16(Register16::Hl), 0xc123);
    assert_eq!(gb.cpu().program_counter, PROGRAM_START + 5);
}

#[test]
fn loads_through_hl_hit_the_bus() {
    // ld hl, $c000 ; ld (hl), $5a ; ld b, (hl)
    let mut gb = game_boy_with_program(&[0x21, 0x00, 0xc0, 0x36, 0x5a, 0x46]);
    gb.step();
    gb.step();
    assert_eq!(gb.memory_mapped().read(0xc000), 0x5a);
    gb.step();
    assert_eq!(gb.cpu().b, 0x5a);
}

#[test]
fn push_and_pop_are_little_endian_through_the_stack() {
    // ld bc, $beef ; push bc ; pop de
    let mut gb = game_boy_with_program(&[0x01, 0xef, 0xbe, 0xc5, 0xd1]);
    let initial_sp = gb.cpu().stack_pointer;

    gb.step();
    assert_eq!(gb.step(), Cycles(4));

    assert_eq!(gb.cpu().stack_pointer, initial_sp - 2);
    assert_eq!(gb.memory_mapped().read(initial_sp - 2), 0xef);
    assert_eq!(gb.memory_mapped().read(initial_sp - 1), 0xbe);

    assert_eq!(gb.step(), Cycles(3));
    assert_eq!(gb.cpu().get_register16(Register16::De), 0xbeef);
    assert_eq!(gb.cpu().stack_pointer, initial_sp);
}

#[test]
fn pop_af_masks_the_flag_low_nibble() {
    // ld bc, $beef ; push bc ; pop af
    let mut gb = game_boy_with_program(&[0x01, 0xef, 0xbe, 0xc5, 0xf1]);
    gb.step();
    gb.step();
    gb.step();
    assert_eq!(gb.cpu().get_register16(Register16::Af), 0xbee0);
}

#[test]
fn arithmetic_sets_the_carry_chain_flags() {
    // ld a, $0f ; add a, $01 (half-carry) ; ld a, $ff ; add a, $01 (both)
    let mut gb = game_boy_with_program(&[0x3e, 0x0f, 0xc6, 0x01, 0x3e, 0xff, 0xc6, 0x01]);

    gb.step();
    gb.step();
    assert_eq!(gb.cpu().a, 0x10);
    assert_eq!(gb.cpu().f(), 0b0010_0000);

    gb.step();
    gb.step();
    assert_eq!(gb.cpu().a, 0x00);
    assert_eq!(gb.cpu().f(), 0b1011_0000);
}

#[test]
fn subtraction_borrows_across_the_nibble() {
    // ld a, $10 ; sub a, $01
    let mut gb = game_boy_with_program(&[0x3e, 0x10, 0xd6, 0x01]);
    gb.step();
    gb.step();
    assert_eq!(gb.cpu().a, 0x0f);
    // N and H set, no full borrow.
    assert_eq!(gb.cpu().f(), 0b0110_0000);
}

#[test]
fn conditional_branch_charges_the_taken_cost_only_when_taken() {
    // xor a, a (sets Z) ; jr nz, +2 (not taken) ; jr z, +2 (taken)
    let mut gb = game_boy_with_program(&[0xaf, 0x20, 0x02, 0x28, 0x02, 0x00, 0x00, 0x00]);

    gb.step();
    let not_taken = gb.step();
    assert_eq!(not_taken, Cycles(2));
    assert_eq!(gb.cpu().program_counter, PROGRAM_START + 3);

    let taken = gb.step();
    assert_eq!(taken, Cycles(3));
    assert_eq!(gb.cpu().program_counter, PROGRAM_START + 7);
}

#[test]
fn relative_jumps_go_backwards_too() {
    // nop ; jr -3 (back to the nop)
    let mut gb = game_boy_with_program(&[0x00, 0x18, 0xfd]);
    gb.step();
    gb.step();
    assert_eq!(gb.cpu().program_counter, PROGRAM_START);
}

#[test]
fn call_and_return_round_trip_through_the_stack() {
    // call $0160 ; (at $0160) ret
    let mut program = [0u8; 0x20];
    program[0] = 0xcd;
    program[1] = 0x60;
    program[2] = 0x01;
    program[0x10] = 0xc9;
    let mut gb = game_boy_with_program(&program);
    let initial_sp = gb.cpu().stack_pointer;

    assert_eq!(gb.step(), Cycles(6));
    assert_eq!(gb.cpu().program_counter, 0x0160);
    assert_eq!(gb.cpu().stack_pointer, initial_sp - 2);

    assert_eq!(gb.step(), Cycles(4));
    assert_eq!(gb.cpu().program_counter, PROGRAM_START + 3);
    assert_eq!(gb.cpu().stack_pointer, initial_sp);
}

#[test]
fn restart_jumps_through_the_fixed_vector() {
    let mut gb = game_boy_with_program(&[0xdf]); // rst $18
    let initial_sp = gb.cpu().stack_pointer;
    assert_eq!(gb.step(), Cycles(4));
    assert_eq!(gb.cpu().program_counter, 0x0018);
    assert_eq!(gb.memory_mapped().read16(initial_sp - 2), PROGRAM_START + 1);
}

#[test]
fn extended_table_instructions_dispatch_through_the_prefix() {
    // ld a, $81 ; rlc a (cb 07) -> $03 with carry
    let mut gb = game_boy_with_program(&[0x3e, 0x81, 0xcb, 0x07]);
    gb.step();
    assert_eq!(gb.step(), Cycles(2));
    assert_eq!(gb.cpu().a, 0x03);
    assert_eq!(gb.cpu().f(), 0b0001_0000);
    assert_eq!(gb.cpu().program_counter, PROGRAM_START + 4);
}

#[test]
fn bit_test_reports_into_zero_flag() {
    // ld a, $08 ; bit 3, a ; bit 4, a
    let mut gb = game_boy_with_program(&[0x3e, 0x08, 0xcb, 0x5f, 0xcb, 0x67]);
    gb.step();
    gb.step();
    assert_eq!(gb.cpu().f() & 0b1000_0000, 0);
    gb.step();
    assert_eq!(gb.cpu().f() & 0b1000_0000, 0b1000_0000);
}

#[test]
fn stop_suspends_until_an_external_wake() {
    let mut gb = game_boy_with_program(&[0x10, 0x00, 0x3c]); // stop ; inc a
    let a = gb.cpu().a;

    gb.step();
    assert_eq!(gb.execution_state(), ExecutionState::Stopped);

    // Steps while stopped mutate nothing.
    gb.step();
    gb.step();
    assert_eq!(gb.cpu().a, a);
    assert_eq!(gb.cpu().program_counter, PROGRAM_START + 2);

    gb.wake();
    gb.step();
    assert_eq!(gb.execution_state(), ExecutionState::Running);
    assert_eq!(gb.cpu().a, a + 1);
}

#[test]
fn reserved_opcodes_stall_like_stop() {
    let mut gb = game_boy_with_program(&[0xd3]);
    gb.step();
    assert_eq!(gb.execution_state(), ExecutionState::Stopped);
}
