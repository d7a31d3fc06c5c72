//! The two 256-entry instruction descriptor tables, indexed directly by
//! opcode byte. Each entry names the instruction, its addressing, its base
//! machine-cycle cost, and the taken cost where a condition applies. The
//! mnemonic uses n8/n16/e8/a8/a16 for operands consumed from the
//! instruction stream; the debugger substitutes live values.

use super::flags::Flag;
use super::instructions::{
    Address, Arithmetic, Arithmetic8, Arithmetic16, BitFlag, BitShift, Bitwise, Carry, CarryFlag,
    Condition, Direction, Instruction, Interrupt, Jump, Load, Location, Source8, Source16, Stack,
    Target8, Target16,
};
use super::registers::{
    Register8::{self, A, B, C, D, E, H, L},
    Register16,
};

pub struct Opcode {
    pub mnemonic: &'static str,
    pub instruction: Instruction,
    /// Machine cycles charged when no condition applies or the condition
    /// fails.
    pub cycles: u8,
    /// Machine cycles charged instead when a conditional branch is taken.
    pub cycles_taken: Option<u8>,
}

const fn op(mnemonic: &'static str, instruction: Instruction, cycles: u8) -> Opcode {
    Opcode {
        mnemonic,
        instruction,
        cycles,
        cycles_taken: None,
    }
}

const fn branch(
    mnemonic: &'static str,
    instruction: Instruction,
    cycles: u8,
    cycles_taken: u8,
) -> Opcode {
    Opcode {
        mnemonic,
        instruction,
        cycles,
        cycles_taken: Some(cycles_taken),
    }
}

const fn r(register: Register8) -> Source8 {
    Source8::Register(register)
}

const fn w(register: Register8) -> Target8 {
    Target8::Register(register)
}

const MHL: Source8 = Source8::Memory(Address::Dereference(Register16::Hl));
const WHL: Target8 = Target8::Memory(Address::Dereference(Register16::Hl));
const IMM: Source8 = Source8::Immediate;

const CC_NZ: Option<Condition> = Some(Condition(Flag::Zero, false));
const CC_Z: Option<Condition> = Some(Condition(Flag::Zero, true));
const CC_NC: Option<Condition> = Some(Condition(Flag::Carry, false));
const CC_C: Option<Condition> = Some(Condition(Flag::Carry, true));

const fn ld8(target: Target8, source: Source8) -> Instruction {
    Instruction::Load(Load::Load8(target, source))
}

const fn ld16(target: Target16, source: Source16) -> Instruction {
    Instruction::Load(Load::Load16(target, source))
}

const fn inc8(target: Target8) -> Instruction {
    Instruction::Arithmetic(Arithmetic::Arithmetic8(Arithmetic8::Increment(target)))
}

const fn dec8(target: Target8) -> Instruction {
    Instruction::Arithmetic(Arithmetic::Arithmetic8(Arithmetic8::Decrement(target)))
}

const fn add_a(source: Source8) -> Instruction {
    Instruction::Arithmetic(Arithmetic::Arithmetic8(Arithmetic8::AddA(source)))
}

const fn adc_a(source: Source8) -> Instruction {
    Instruction::Arithmetic(Arithmetic::Arithmetic8(Arithmetic8::AddACarry(source)))
}

const fn sub_a(source: Source8) -> Instruction {
    Instruction::Arithmetic(Arithmetic::Arithmetic8(Arithmetic8::SubtractA(source)))
}

const fn sbc_a(source: Source8) -> Instruction {
    Instruction::Arithmetic(Arithmetic::Arithmetic8(Arithmetic8::SubtractACarry(source)))
}

const fn cp_a(source: Source8) -> Instruction {
    Instruction::Arithmetic(Arithmetic::Arithmetic8(Arithmetic8::CompareA(source)))
}

const fn inc16(register: Register16) -> Instruction {
    Instruction::Arithmetic(Arithmetic::Arithmetic16(Arithmetic16::Increment(register)))
}

const fn dec16(register: Register16) -> Instruction {
    Instruction::Arithmetic(Arithmetic::Arithmetic16(Arithmetic16::Decrement(register)))
}

const fn add_hl(register: Register16) -> Instruction {
    Instruction::Arithmetic(Arithmetic::Arithmetic16(Arithmetic16::AddHl(register)))
}

const fn and_a(source: Source8) -> Instruction {
    Instruction::Bitwise(Bitwise::AndA(source))
}

const fn or_a(source: Source8) -> Instruction {
    Instruction::Bitwise(Bitwise::OrA(source))
}

const fn xor_a(source: Source8) -> Instruction {
    Instruction::Bitwise(Bitwise::XorA(source))
}

const fn jp(condition: Option<Condition>, location: Location) -> Instruction {
    Instruction::Jump(Jump::Jump(condition, location))
}

const fn call(condition: Option<Condition>) -> Instruction {
    Instruction::Jump(Jump::Call(condition))
}

const fn ret(condition: Option<Condition>) -> Instruction {
    Instruction::Jump(Jump::Return(condition))
}

const fn rst(vector: u8) -> Instruction {
    Instruction::Jump(Jump::Restart(vector))
}

const fn push(register: Register16) -> Instruction {
    Instruction::Stack(Stack::Push(register))
}

const fn pop(register: Register16) -> Instruction {
    Instruction::Stack(Stack::Pop(register))
}

const fn rotate(direction: Direction, carry: Carry, target: Target8) -> Instruction {
    Instruction::BitShift(BitShift::Rotate(direction, carry, target))
}

const fn shift(direction: Direction, target: Target8) -> Instruction {
    Instruction::BitShift(BitShift::ShiftArithmetical(direction, target))
}

const fn srl(target: Target8) -> Instruction {
    Instruction::BitShift(BitShift::ShiftRightLogical(target))
}

const fn swap(target: Target8) -> Instruction {
    Instruction::BitShift(BitShift::Swap(target))
}

const fn bit(index: u8, source: Source8) -> Instruction {
    Instruction::BitFlag(BitFlag::Check(index, source))
}

const fn set(index: u8, target: Target8) -> Instruction {
    Instruction::BitFlag(BitFlag::Set(index, target))
}

const fn res(index: u8, target: Target8) -> Instruction {
    Instruction::BitFlag(BitFlag::Unset(index, target))
}

const fn invalid(opcode: u8) -> Opcode {
    Opcode {
        mnemonic: "??",
        instruction: Instruction::Invalid(opcode),
        cycles: 1,
        cycles_taken: None,
    }
}

#[rustfmt::skip]
pub static OPCODES: [Opcode; 256] = [
    // 0x00 - 0x0f
    op("nop", Instruction::NoOperation, 1),
    op("ld bc, n16", ld16(Target16::Register(Register16::Bc), Source16::Immediate), 3),
    op("ld (bc), a", ld8(Target8::Memory(Address::Dereference(Register16::Bc)), r(A)), 2),
    op("inc bc", inc16(Register16::Bc), 2),
    op("inc b", inc8(w(B)), 1),
    op("dec b", dec8(w(B)), 1),
    op("ld b, n8", ld8(w(B), IMM), 2),
    op("rlca", Instruction::BitShift(BitShift::RotateA(Direction::Left, Carry::SetOnly)), 1),
    op("ld (a16), sp", ld16(Target16::Absolute, Source16::Register(Register16::StackPointer)), 5),
    op("add hl, bc", add_hl(Register16::Bc), 2),
    op("ld a, (bc)", ld8(w(A), Source8::Memory(Address::Dereference(Register16::Bc))), 2),
    op("dec bc", dec16(Register16::Bc), 2),
    op("inc c", inc8(w(C)), 1),
    op("dec c", dec8(w(C)), 1),
    op("ld c, n8", ld8(w(C), IMM), 2),
    op("rrca", Instruction::BitShift(BitShift::RotateA(Direction::Right, Carry::SetOnly)), 1),
    // 0x10 - 0x1f
    op("stop", Instruction::Stop, 1),
    op("ld de, n16", ld16(Target16::Register(Register16::De), Source16::Immediate), 3),
    op("ld (de), a", ld8(Target8::Memory(Address::Dereference(Register16::De)), r(A)), 2),
    op("inc de", inc16(Register16::De), 2),
    op("inc d", inc8(w(D)), 1),
    op("dec d", dec8(w(D)), 1),
    op("ld d, n8", ld8(w(D), IMM), 2),
    op("rla", Instruction::BitShift(BitShift::RotateA(Direction::Left, Carry::Through)), 1),
    op("jr e8", jp(None, Location::Relative), 3),
    op("add hl, de", add_hl(Register16::De), 2),
    op("ld a, (de)", ld8(w(A), Source8::Memory(Address::Dereference(Register16::De))), 2),
    op("dec de", dec16(Register16::De), 2),
    op("inc e", inc8(w(E)), 1),
    op("dec e", dec8(w(E)), 1),
    op("ld e, n8", ld8(w(E), IMM), 2),
    op("rra", Instruction::BitShift(BitShift::RotateA(Direction::Right, Carry::Through)), 1),
    // 0x20 - 0x2f
    branch("jr nz, e8", jp(CC_NZ, Location::Relative), 2, 3),
    op("ld hl, n16", ld16(Target16::Register(Register16::Hl), Source16::Immediate), 3),
    op("ld (hl+), a", ld8(Target8::Memory(Address::HlIncrement), r(A)), 2),
    op("inc hl", inc16(Register16::Hl), 2),
    op("inc h", inc8(w(H)), 1),
    op("dec h", dec8(w(H)), 1),
    op("ld h, n8", ld8(w(H), IMM), 2),
    op("daa", Instruction::DecimalAdjustAccumulator, 1),
    branch("jr z, e8", jp(CC_Z, Location::Relative), 2, 3),
    op("add hl, hl", add_hl(Register16::Hl), 2),
    op("ld a, (hl+)", ld8(w(A), Source8::Memory(Address::HlIncrement)), 2),
    op("dec hl", dec16(Register16::Hl), 2),
    op("inc l", inc8(w(L)), 1),
    op("dec l", dec8(w(L)), 1),
    op("ld l, n8", ld8(w(L), IMM), 2),
    op("cpl", Instruction::Bitwise(Bitwise::ComplementA), 1),
    // 0x30 - 0x3f
    branch("jr nc, e8", jp(CC_NC, Location::Relative), 2, 3),
    op("ld sp, n16", ld16(Target16::Register(Register16::StackPointer), Source16::Immediate), 3),
    op("ld (hl-), a", ld8(Target8::Memory(Address::HlDecrement), r(A)), 2),
    op("inc sp", inc16(Register16::StackPointer), 2),
    op("inc (hl)", inc8(WHL), 3),
    op("dec (hl)", dec8(WHL), 3),
    op("ld (hl), n8", ld8(WHL, IMM), 3),
    op("scf", Instruction::CarryFlag(CarryFlag::Set), 1),
    branch("jr c, e8", jp(CC_C, Location::Relative), 2, 3),
    op("add hl, sp", add_hl(Register16::StackPointer), 2),
    op("ld a, (hl-)", ld8(w(A), Source8::Memory(Address::HlDecrement)), 2),
    op("dec sp", dec16(Register16::StackPointer), 2),
    op("inc a", inc8(w(A)), 1),
    op("dec a", dec8(w(A)), 1),
    op("ld a, n8", ld8(w(A), IMM), 2),
    op("ccf", Instruction::CarryFlag(CarryFlag::Complement), 1),
    // 0x40 - 0x4f
    op("ld b, b", ld8(w(B), r(B)), 1),
    op("ld b, c", ld8(w(B), r(C)), 1),
    op("ld b, d", ld8(w(B), r(D)), 1),
    op("ld b, e", ld8(w(B), r(E)), 1),
    op("ld b, h", ld8(w(B), r(H)), 1),
    op("ld b, l", ld8(w(B), r(L)), 1),
    op("ld b, (hl)", ld8(w(B), MHL), 2),
    op("ld b, a", ld8(w(B), r(A)), 1),
    op("ld c, b", ld8(w(C), r(B)), 1),
    op("ld c, c", ld8(w(C), r(C)), 1),
    op("ld c, d", ld8(w(C), r(D)), 1),
    op("ld c, e", ld8(w(C), r(E)), 1),
    op("ld c, h", ld8(w(C), r(H)), 1),
    op("ld c, l", ld8(w(C), r(L)), 1),
    op("ld c, (hl)", ld8(w(C), MHL), 2),
    op("ld c, a", ld8(w(C), r(A)), 1),
    // 0x50 - 0x5f
    op("ld d, b", ld8(w(D), r(B)), 1),
    op("ld d, c", ld8(w(D), r(C)), 1),
    op("ld d, d", ld8(w(D), r(D)), 1),
    op("ld d, e", ld8(w(D), r(E)), 1),
    op("ld d, h", ld8(w(D), r(H)), 1),
    op("ld d, l", ld8(w(D), r(L)), 1),
    op("ld d, (hl)", ld8(w(D), MHL), 2),
    op("ld d, a", ld8(w(D), r(A)), 1),
    op("ld e, b", ld8(w(E), r(B)), 1),
    op("ld e, c", ld8(w(E), r(C)), 1),
    op("ld e, d", ld8(w(E), r(D)), 1),
    op("ld e, e", ld8(w(E), r(E)), 1),
    op("ld e, h", ld8(w(E), r(H)), 1),
    op("ld e, l", ld8(w(E), r(L)), 1),
    op("ld e, (hl)", ld8(w(E), MHL), 2),
    op("ld e, a", ld8(w(E), r(A)), 1),
    // 0x60 - 0x6f
    op("ld h, b", ld8(w(H), r(B)), 1),
    op("ld h, c", ld8(w(H), r(C)), 1),
    op("ld h, d", ld8(w(H), r(D)), 1),
    op("ld h, e", ld8(w(H), r(E)), 1),
    op("ld h, h", ld8(w(H), r(H)), 1),
    op("ld h, l", ld8(w(H), r(L)), 1),
    op("ld h, (hl)", ld8(w(H), MHL), 2),
    op("ld h, a", ld8(w(H), r(A)), 1),
    op("ld l, b", ld8(w(L), r(B)), 1),
    op("ld l, c", ld8(w(L), r(C)), 1),
    op("ld l, d", ld8(w(L), r(D)), 1),
    op("ld l, e", ld8(w(L), r(E)), 1),
    op("ld l, h", ld8(w(L), r(H)), 1),
    op("ld l, l", ld8(w(L), r(L)), 1),
    op("ld l, (hl)", ld8(w(L), MHL), 2),
    op("ld l, a", ld8(w(L), r(A)), 1),
    // 0x70 - 0x7f
    op("ld (hl), b", ld8(WHL, r(B)), 2),
    op("ld (hl), c", ld8(WHL, r(C)), 2),
    op("ld (hl), d", ld8(WHL, r(D)), 2),
    op("ld (hl), e", ld8(WHL, r(E)), 2),
    op("ld (hl), h", ld8(WHL, r(H)), 2),
    op("ld (hl), l", ld8(WHL, r(L)), 2),
    op("halt", Instruction::Interrupt(Interrupt::Await), 1),
    op("ld (hl), a", ld8(WHL, r(A)), 2),
    op("ld a, b", ld8(w(A), r(B)), 1),
    op("ld a, c", ld8(w(A), r(C)), 1),
    op("ld a, d", ld8(w(A), r(D)), 1),
    op("ld a, e", ld8(w(A), r(E)), 1),
    op("ld a, h", ld8(w(A), r(H)), 1),
    op("ld a, l", ld8(w(A), r(L)), 1),
    op("ld a, (hl)", ld8(w(A), MHL), 2),
    op("ld a, a", ld8(w(A), r(A)), 1),
    // 0x80 - 0x8f
    op("add a, b", add_a(r(B)), 1),
    op("add a, c", add_a(r(C)), 1),
    op("add a, d", add_a(r(D)), 1),
    op("add a, e", add_a(r(E)), 1),
    op("add a, h", add_a(r(H)), 1),
    op("add a, l", add_a(r(L)), 1),
    op("add a, (hl)", add_a(MHL), 2),
    op("add a, a", add_a(r(A)), 1),
    op("adc a, b", adc_a(r(B)), 1),
    op("adc a, c", adc_a(r(C)), 1),
    op("adc a, d", adc_a(r(D)), 1),
    op("adc a, e", adc_a(r(E)), 1),
    op("adc a, h", adc_a(r(H)), 1),
    op("adc a, l", adc_a(r(L)), 1),
    op("adc a, (hl)", adc_a(MHL), 2),
    op("adc a, a", adc_a(r(A)), 1),
    // 0x90 - 0x9f
    op("sub a, b", sub_a(r(B)), 1),
    op("sub a, c", sub_a(r(C)), 1),
    op("sub a, d", sub_a(r(D)), 1),
    op("sub a, e", sub_a(r(E)), 1),
    op("sub a, h", sub_a(r(H)), 1),
    op("sub a, l", sub_a(r(L)), 1),
    op("sub a, (hl)", sub_a(MHL), 2),
    op("sub a, a", sub_a(r(A)), 1),
    op("sbc a, b", sbc_a(r(B)), 1),
    op("sbc a, c", sbc_a(r(C)), 1),
    op("sbc a, d", sbc_a(r(D)), 1),
    op("sbc a, e", sbc_a(r(E)), 1),
    op("sbc a, h", sbc_a(r(H)), 1),
    op("sbc a, l", sbc_a(r(L)), 1),
    op("sbc a, (hl)", sbc_a(MHL), 2),
    op("sbc a, a", sbc_a(r(A)), 1),
    // 0xa0 - 0xaf
    op("and a, b", and_a(r(B)), 1),
    op("and a, c", and_a(r(C)), 1),
    op("and a, d", and_a(r(D)), 1),
    op("and a, e", and_a(r(E)), 1),
    op("and a, h", and_a(r(H)), 1),
    op("and a, l", and_a(r(L)), 1),
    op("and a, (hl)", and_a(MHL), 2),
    op("and a, a", and_a(r(A)), 1),
    op("xor a, b", xor_a(r(B)), 1),
    op("xor a, c", xor_a(r(C)), 1),
    op("xor a, d", xor_a(r(D)), 1),
    op("xor a, e", xor_a(r(E)), 1),
    op("xor a, h", xor_a(r(H)), 1),
    op("xor a, l", xor_a(r(L)), 1),
    op("xor a, (hl)", xor_a(MHL), 2),
    op("xor a, a", xor_a(r(A)), 1),
    // 0xb0 - 0xbf
    op("or a, b", or_a(r(B)), 1),
    op("or a, c", or_a(r(C)), 1),
    op("or a, d", or_a(r(D)), 1),
    op("or a, e", or_a(r(E)), 1),
    op("or a, h", or_a(r(H)), 1),
    op("or a, l", or_a(r(L)), 1),
    op("or a, (hl)", or_a(MHL), 2),
    op("or a, a", or_a(r(A)), 1),
    op("cp a, b", cp_a(r(B)), 1),
    op("cp a, c", cp_a(r(C)), 1),
    op("cp a, d", cp_a(r(D)), 1),
    op("cp a, e", cp_a(r(E)), 1),
    op("cp a, h", cp_a(r(H)), 1),
    op("cp a, l", cp_a(r(L)), 1),
    op("cp a, (hl)", cp_a(MHL), 2),
    op("cp a, a", cp_a(r(A)), 1),
    // 0xc0 - 0xcf
    branch("ret nz", ret(CC_NZ), 2, 5),
    op("pop bc", pop(Register16::Bc), 3),
    branch("jp nz, a16", jp(CC_NZ, Location::Immediate), 3, 4),
    op("jp a16", jp(None, Location::Immediate), 4),
    branch("call nz, a16", call(CC_NZ), 3, 6),
    op("push bc", push(Register16::Bc), 4),
    op("add a, n8", add_a(IMM), 2),
    op("rst $00", rst(0x00), 4),
    branch("ret z", ret(CC_Z), 2, 5),
    op("ret", ret(None), 4),
    branch("jp z, a16", jp(CC_Z, Location::Immediate), 3, 4),
    op("prefix cb", Instruction::Prefix, 1),
    branch("call z, a16", call(CC_Z), 3, 6),
    op("call a16", call(None), 6),
    op("adc a, n8", adc_a(IMM), 2),
    op("rst $08", rst(0x08), 4),
    // 0xd0 - 0xdf
    branch("ret nc", ret(CC_NC), 2, 5),
    op("pop de", pop(Register16::De), 3),
    branch("jp nc, a16", jp(CC_NC, Location::Immediate), 3, 4),
    invalid(0xd3),
    branch("call nc, a16", call(CC_NC), 3, 6),
    op("push de", push(Register16::De), 4),
    op("sub a, n8", sub_a(IMM), 2),
    op("rst $10", rst(0x10), 4),
    branch("ret c", ret(CC_C), 2, 5),
    op("reti", Instruction::Jump(Jump::ReturnAndEnableInterrupts), 4),
    branch("jp c, a16", jp(CC_C, Location::Immediate), 3, 4),
    invalid(0xdb),
    branch("call c, a16", call(CC_C), 3, 6),
    invalid(0xdd),
    op("sbc a, n8", sbc_a(IMM), 2),
    op("rst $18", rst(0x18), 4),
    // 0xe0 - 0xef
    op("ldh (a8), a", ld8(Target8::Memory(Address::High), r(A)), 3),
    op("pop hl", pop(Register16::Hl), 3),
    op("ldh (c), a", ld8(Target8::Memory(Address::HighPlusC), r(A)), 2),
    invalid(0xe3),
    invalid(0xe4),
    op("push hl", push(Register16::Hl), 4),
    op("and a, n8", and_a(IMM), 2),
    op("rst $20", rst(0x20), 4),
    op("add sp, e8", Instruction::Arithmetic(Arithmetic::Arithmetic16(Arithmetic16::AddStackPointer)), 4),
    op("jp hl", jp(None, Location::RegisterHl), 1),
    op("ld (a16), a", ld8(Target8::Memory(Address::Absolute), r(A)), 4),
    invalid(0xeb),
    invalid(0xec),
    invalid(0xed),
    op("xor a, n8", xor_a(IMM), 2),
    op("rst $28", rst(0x28), 4),
    // 0xf0 - 0xff
    op("ldh a, (a8)", ld8(w(A), Source8::Memory(Address::High)), 3),
    op("pop af", pop(Register16::Af), 3),
    op("ldh a, (c)", ld8(w(A), Source8::Memory(Address::HighPlusC)), 2),
    op("di", Instruction::Interrupt(Interrupt::Disable), 1),
    invalid(0xf4),
    op("push af", push(Register16::Af), 4),
    op("or a, n8", or_a(IMM), 2),
    op("rst $30", rst(0x30), 4),
    op("ld hl, sp+e8", ld16(Target16::Register(Register16::Hl), Source16::StackPointerWithOffset), 3),
    op("ld sp, hl", ld16(Target16::Register(Register16::StackPointer), Source16::Register(Register16::Hl)), 2),
    op("ld a, (a16)", ld8(w(A), Source8::Memory(Address::Absolute)), 4),
    op("ei", Instruction::Interrupt(Interrupt::Enable), 1),
    invalid(0xfc),
    invalid(0xfd),
    op("cp a, n8", cp_a(IMM), 2),
    op("rst $38", rst(0x38), 4),
];

#[rustfmt::skip]
pub static CB_OPCODES: [Opcode; 256] = [
    // 0x00 - 0x0f
    op("rlc b", rotate(Direction::Left, Carry::SetOnly, w(B)), 2),
    op("rlc c", rotate(Direction::Left, Carry::SetOnly, w(C)), 2),
    op("rlc d", rotate(Direction::Left, Carry::SetOnly, w(D)), 2),
    op("rlc e", rotate(Direction::Left, Carry::SetOnly, w(E)), 2),
    op("rlc h", rotate(Direction::Left, Carry::SetOnly, w(H)), 2),
    op("rlc l", rotate(Direction::Left, Carry::SetOnly, w(L)), 2),
    op("rlc (hl)", rotate(Direction::Left, Carry::SetOnly, WHL), 4),
    op("rlc a", rotate(Direction::Left, Carry::SetOnly, w(A)), 2),
    op("rrc b", rotate(Direction::Right, Carry::SetOnly, w(B)), 2),
    op("rrc c", rotate(Direction::Right, Carry::SetOnly, w(C)), 2),
    op("rrc d", rotate(Direction::Right, Carry::SetOnly, w(D)), 2),
    op("rrc e", rotate(Direction::Right, Carry::SetOnly, w(E)), 2),
    op("rrc h", rotate(Direction::Right, Carry::SetOnly, w(H)), 2),
    op("rrc l", rotate(Direction::Right, Carry::SetOnly, w(L)), 2),
    op("rrc (hl)", rotate(Direction::Right, Carry::SetOnly, WHL), 4),
    op("rrc a", rotate(Direction::Right, Carry::SetOnly, w(A)), 2),
    // 0x10 - 0x1f
    op("rl b", rotate(Direction::Left, Carry::Through, w(B)), 2),
    op("rl c", rotate(Direction::Left, Carry::Through, w(C)), 2),
    op("rl d", rotate(Direction::Left, Carry::Through, w(D)), 2),
    op("rl e", rotate(Direction::Left, Carry::Through, w(E)), 2),
    op("rl h", rotate(Direction::Left, Carry::Through, w(H)), 2),
    op("rl l", rotate(Direction::Left, Carry::Through, w(L)), 2),
    op("rl (hl)", rotate(Direction::Left, Carry::Through, WHL), 4),
    op("rl a", rotate(Direction::Left, Carry::Through, w(A)), 2),
    op("rr b", rotate(Direction::Right, Carry::Through, w(B)), 2),
    op("rr c", rotate(Direction::Right, Carry::Through, w(C)), 2),
    op("rr d", rotate(Direction::Right, Carry::Through, w(D)), 2),
    op("rr e", rotate(Direction::Right, Carry::Through, w(E)), 2),
    op("rr h", rotate(Direction::Right, Carry::Through, w(H)), 2),
    op("rr l", rotate(Direction::Right, Carry::Through, w(L)), 2),
    op("rr (hl)", rotate(Direction::Right, Carry::Through, WHL), 4),
    op("rr a", rotate(Direction::Right, Carry::Through, w(A)), 2),
    // 0x20 - 0x2f
    op("sla b", shift(Direction::Left, w(B)), 2),
    op("sla c", shift(Direction::Left, w(C)), 2),
    op("sla d", shift(Direction::Left, w(D)), 2),
    op("sla e", shift(Direction::Left, w(E)), 2),
    op("sla h", shift(Direction::Left, w(H)), 2),
    op("sla l", shift(Direction::Left, w(L)), 2),
    op("sla (hl)", shift(Direction::Left, WHL), 4),
    op("sla a", shift(Direction::Left, w(A)), 2),
    op("sra b", shift(Direction::Right, w(B)), 2),
    op("sra c", shift(Direction::Right, w(C)), 2),
    op("sra d", shift(Direction::Right, w(D)), 2),
    op("sra e", shift(Direction::Right, w(E)), 2),
    op("sra h", shift(Direction::Right, w(H)), 2),
    op("sra l", shift(Direction::Right, w(L)), 2),
    op("sra (hl)", shift(Direction::Right, WHL), 4),
    op("sra a", shift(Direction::Right, w(A)), 2),
    // 0x30 - 0x3f
    op("swap b", swap(w(B)), 2),
    op("swap c", swap(w(C)), 2),
    op("swap d", swap(w(D)), 2),
    op("swap e", swap(w(E)), 2),
    op("swap h", swap(w(H)), 2),
    op("swap l", swap(w(L)), 2),
    op("swap (hl)", swap(WHL), 4),
    op("swap a", swap(w(A)), 2),
    op("srl b", srl(w(B)), 2),
    op("srl c", srl(w(C)), 2),
    op("srl d", srl(w(D)), 2),
    op("srl e", srl(w(E)), 2),
    op("srl h", srl(w(H)), 2),
    op("srl l", srl(w(L)), 2),
    op("srl (hl)", srl(WHL), 4),
    op("srl a", srl(w(A)), 2),
    // 0x40 - 0x4f
    op("bit 0, b", bit(0, r(B)), 2),
    op("bit 0, c", bit(0, r(C)), 2),
    op("bit 0, d", bit(0, r(D)), 2),
    op("bit 0, e", bit(0, r(E)), 2),
    op("bit 0, h", bit(0, r(H)), 2),
    op("bit 0, l", bit(0, r(L)), 2),
    op("bit 0, (hl)", bit(0, MHL), 3),
    op("bit 0, a", bit(0, r(A)), 2),
    op("bit 1, b", bit(1, r(B)), 2),
    op("bit 1, c", bit(1, r(C)), 2),
    op("bit 1, d", bit(1, r(D)), 2),
    op("bit 1, e", bit(1, r(E)), 2),
    op("bit 1, h", bit(1, r(H)), 2),
    op("bit 1, l", bit(1, r(L)), 2),
    op("bit 1, (hl)", bit(1, MHL), 3),
    op("bit 1, a", bit(1, r(A)), 2),
    // 0x50 - 0x5f
    op("bit 2, b", bit(2, r(B)), 2),
    op("bit 2, c", bit(2, r(C)), 2),
    op("bit 2, d", bit(2, r(D)), 2),
    op("bit 2, e", bit(2, r(E)), 2),
    op("bit 2, h", bit(2, r(H)), 2),
    op("bit 2, l", bit(2, r(L)), 2),
    op("bit 2, (hl)", bit(2, MHL), 3),
    op("bit 2, a", bit(2, r(A)), 2),
    op("bit 3, b", bit(3, r(B)), 2),
    op("bit 3, c", bit(3, r(C)), 2),
    op("bit 3, d", bit(3, r(D)), 2),
    op("bit 3, e", bit(3, r(E)), 2),
    op("bit 3, h", bit(3, r(H)), 2),
    op("bit 3, l", bit(3, r(L)), 2),
    op("bit 3, (hl)", bit(3, MHL), 3),
    op("bit 3, a", bit(3, r(A)), 2),
    // 0x60 - 0x6f
    op("bit 4, b", bit(4, r(B)), 2),
    op("bit 4, c", bit(4, r(C)), 2),
    op("bit 4, d", bit(4, r(D)), 2),
    op("bit 4, e", bit(4, r(E)), 2),
    op("bit 4, h", bit(4, r(H)), 2),
    op("bit 4, l", bit(4, r(L)), 2),
    op("bit 4, (hl)", bit(4, MHL), 3),
    op("bit 4, a", bit(4, r(A)), 2),
    op("bit 5, b", bit(5, r(B)), 2),
    op("bit 5, c", bit(5, r(C)), 2),
    op("bit 5, d", bit(5, r(D)), 2),
    op("bit 5, e", bit(5, r(E)), 2),
    op("bit 5, h", bit(5, r(H)), 2),
    op("bit 5, l", bit(5, r(L)), 2),
    op("bit 5, (hl)", bit(5, MHL), 3),
    op("bit 5, a", bit(5, r(A)), 2),
    // 0x70 - 0x7f
    op("bit 6, b", bit(6, r(B)), 2),
    op("bit 6, c", bit(6, r(C)), 2),
    op("bit 6, d", bit(6, r(D)), 2),
    op("bit 6, e", bit(6, r(E)), 2),
    op("bit 6, h", bit(6, r(H)), 2),
    op("bit 6, l", bit(6, r(L)), 2),
    op("bit 6, (hl)", bit(6, MHL), 3),
    op("bit 6, a", bit(6, r(A)), 2),
    op("bit 7, b", bit(7, r(B)), 2),
    op("bit 7, c", bit(7, r(C)), 2),
    op("bit 7, d", bit(7, r(D)), 2),
    op("bit 7, e", bit(7, r(E)), 2),
    op("bit 7, h", bit(7, r(H)), 2),
    op("bit 7, l", bit(7, r(L)), 2),
    op("bit 7, (hl)", bit(7, MHL), 3),
    op("bit 7, a", bit(7, r(A)), 2),
    // 0x80 - 0x8f
    op("res 0, b", res(0, w(B)), 2),
    op("res 0, c", res(0, w(C)), 2),
    op("res 0, d", res(0, w(D)), 2),
    op("res 0, e", res(0, w(E)), 2),
    op("res 0, h", res(0, w(H)), 2),
    op("res 0, l", res(0, w(L)), 2),
    op("res 0, (hl)", res(0, WHL), 4),
    op("res 0, a", res(0, w(A)), 2),
    op("res 1, b", res(1, w(B)), 2),
    op("res 1, c", res(1, w(C)), 2),
    op("res 1, d", res(1, w(D)), 2),
    op("res 1, e", res(1, w(E)), 2),
    op("res 1, h", res(1, w(H)), 2),
    op("res 1, l", res(1, w(L)), 2),
    op("res 1, (hl)", res(1, WHL), 4),
    op("res 1, a", res(1, w(A)), 2),
    // 0x90 - 0x9f
    op("res 2, b", res(2, w(B)), 2),
    op("res 2, c", res(2, w(C)), 2),
    op("res 2, d", res(2, w(D)), 2),
    op("res 2, e", res(2, w(E)), 2),
    op("res 2, h", res(2, w(H)), 2),
    op("res 2, l", res(2, w(L)), 2),
    op("res 2, (hl)", res(2, WHL), 4),
    op("res 2, a", res(2, w(A)), 2),
    op("res 3, b", res(3, w(B)), 2),
    op("res 3, c", res(3, w(C)), 2),
    op("res 3, d", res(3, w(D)), 2),
    op("res 3, e", res(3, w(E)), 2),
    op("res 3, h", res(3, w(H)), 2),
    op("res 3, l", res(3, w(L)), 2),
    op("res 3, (hl)", res(3, WHL), 4),
    op("res 3, a", res(3, w(A)), 2),
    // 0xa0 - 0xaf
    op("res 4, b", res(4, w(B)), 2),
    op("res 4, c", res(4, w(C)), 2),
    op("res 4, d", res(4, w(D)), 2),
    op("res 4, e", res(4, w(E)), 2),
    op("res 4, h", res(4, w(H)), 2),
    op("res 4, l", res(4, w(L)), 2),
    op("res 4, (hl)", res(4, WHL), 4),
    op("res 4, a", res(4, w(A)), 2),
    op("res 5, b", res(5, w(B)), 2),
    op("res 5, c", res(5, w(C)), 2),
    op("res 5, d", res(5, w(D)), 2),
    op("res 5, e", res(5, w(E)), 2),
    op("res 5, h", res(5, w(H)), 2),
    op("res 5, l", res(5, w(L)), 2),
    op("res 5, (hl)", res(5, WHL), 4),
    op("res 5, a", res(5, w(A)), 2),
    // 0xb0 - 0xbf
    op("res 6, b", res(6, w(B)), 2),
    op("res 6, c", res(6, w(C)), 2),
    op("res 6, d", res(6, w(D)), 2),
    op("res 6, e", res(6, w(E)), 2),
    op("res 6, h", res(6, w(H)), 2),
    op("res 6, l", res(6, w(L)), 2),
    op("res 6, (hl)", res(6, WHL), 4),
    op("res 6, a", res(6, w(A)), 2),
    op("res 7, b", res(7, w(B)), 2),
    op("res 7, c", res(7, w(C)), 2),
    op("res 7, d", res(7, w(D)), 2),
    op("res 7, e", res(7, w(E)), 2),
    op("res 7, h", res(7, w(H)), 2),
    op("res 7, l", res(7, w(L)), 2),
    op("res 7, (hl)", res(7, WHL), 4),
    op("res 7, a", res(7, w(A)), 2),
    // 0xc0 - 0xcf
    op("set 0, b", set(0, w(B)), 2),
    op("set 0, c", set(0, w(C)), 2),
    op("set 0, d", set(0, w(D)), 2),
    op("set 0, e", set(0, w(E)), 2),
    op("set 0, h", set(0, w(H)), 2),
    op("set 0, l", set(0, w(L)), 2),
    op("set 0, (hl)", set(0, WHL), 4),
    op("set 0, a", set(0, w(A)), 2),
    op("set 1, b", set(1, w(B)), 2),
    op("set 1, c", set(1, w(C)), 2),
    op("set 1, d", set(1, w(D)), 2),
    op("set 1, e", set(1, w(E)), 2),
    op("set 1, h", set(1, w(H)), 2),
    op("set 1, l", set(1, w(L)), 2),
    op("set 1, (hl)", set(1, WHL), 4),
    op("set 1, a", set(1, w(A)), 2),
    // 0xd0 - 0xdf
    op("set 2, b", set(2, w(B)), 2),
    op("set 2, c", set(2, w(C)), 2),
    op("set 2, d", set(2, w(D)), 2),
    op("set 2, e", set(2, w(E)), 2),
    op("set 2, h", set(2, w(H)), 2),
    op("set 2, l", set(2, w(L)), 2),
    op("set 2, (hl)", set(2, WHL), 4),
    op("set 2, a", set(2, w(A)), 2),
    op("set 3, b", set(3, w(B)), 2),
    op("set 3, c", set(3, w(C)), 2),
    op("set 3, d", set(3, w(D)), 2),
    op("set 3, e", set(3, w(E)), 2),
    op("set 3, h", set(3, w(H)), 2),
    op("set 3, l", set(3, w(L)), 2),
    op("set 3, (hl)", set(3, WHL), 4),
    op("set 3, a", set(3, w(A)), 2),
    // 0xe0 - 0xef
    op("set 4, b", set(4, w(B)), 2),
    op("set 4, c", set(4, w(C)), 2),
    op("set 4, d", set(4, w(D)), 2),
    op("set 4, e", set(4, w(E)), 2),
    op("set 4, h", set(4, w(H)), 2),
    op("set 4, l", set(4, w(L)), 2),
    op("set 4, (hl)", set(4, WHL), 4),
    op("set 4, a", set(4, w(A)), 2),
    op("set 5, b", set(5, w(B)), 2),
    op("set 5, c", set(5, w(C)), 2),
    op("set 5, d", set(5, w(D)), 2),
    op("set 5, e", set(5, w(E)), 2),
    op("set 5, h", set(5, w(H)), 2),
    op("set 5, l", set(5, w(L)), 2),
    op("set 5, (hl)", set(5, WHL), 4),
    op("set 5, a", set(5, w(A)), 2),
    // 0xf0 - 0xff
    op("set 6, b", set(6, w(B)), 2),
    op("set 6, c", set(6, w(C)), 2),
    op("set 6, d", set(6, w(D)), 2),
    op("set 6, e", set(6, w(E)), 2),
    op("set 6, h", set(6, w(H)), 2),
    op("set 6, l", set(6, w(L)), 2),
    op("set 6, (hl)", set(6, WHL), 4),
    op("set 6, a", set(6, w(A)), 2),
    op("set 7, b", set(7, w(B)), 2),
    op("set 7, c", set(7, w(C)), 2),
    op("set 7, d", set(7, w(D)), 2),
    op("set 7, e", set(7, w(E)), 2),
    op("set 7, h", set(7, w(H)), 2),
    op("set 7, l", set(7, w(L)), 2),
    op("set 7, (hl)", set(7, WHL), 4),
    op("set 7, a", set(7, w(A)), 2),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nop_is_a_one_cycle_no_operation() {
        let descriptor = &OPCODES[0x00];
        assert_eq!(descriptor.mnemonic, "nop");
        assert!(matches!(descriptor.instruction, Instruction::NoOperation));
        assert_eq!(descriptor.cycles, 1);
        assert_eq!(descriptor.cycles_taken, None);
    }

    #[test]
    fn conditional_branches_carry_a_taken_cost() {
        assert_eq!(OPCODES[0x20].cycles, 2);
        assert_eq!(OPCODES[0x20].cycles_taken, Some(3));
        assert_eq!(OPCODES[0xc4].cycles, 3);
        assert_eq!(OPCODES[0xc4].cycles_taken, Some(6));
        assert_eq!(OPCODES[0xc0].cycles_taken, Some(5));
        // Unconditional transfers have a single cost.
        assert_eq!(OPCODES[0xc3].cycles_taken, None);
        assert_eq!(OPCODES[0xcd].cycles_taken, None);
    }

    #[test]
    fn reserved_opcodes_are_marked_invalid() {
        for opcode in [0xd3, 0xdb, 0xdd, 0xe3, 0xe4, 0xeb, 0xec, 0xed, 0xf4, 0xfc, 0xfd] {
            assert!(
                matches!(OPCODES[opcode].instruction, Instruction::Invalid(code) if code == opcode as u8),
                "opcode {opcode:#04x} should be reserved"
            );
        }
    }

    #[test]
    fn the_extended_table_prefix_sits_at_0xcb() {
        assert!(matches!(OPCODES[0xcb].instruction, Instruction::Prefix));
    }

    #[test]
    fn extended_table_costs_follow_the_operand_column() {
        // Registers cost 2; the (hl) column costs 4 except bit-test's 3.
        for row in 0..32 {
            let opcode = row * 8 + 6;
            let expected = if (0x40..0x80).contains(&opcode) { 3 } else { 4 };
            assert_eq!(
                CB_OPCODES[opcode].cycles, expected,
                "(hl) cost wrong at {opcode:#04x}"
            );
            assert_eq!(CB_OPCODES[row * 8 + 7].cycles, 2);
        }
    }

    #[test]
    fn bit_indices_walk_the_table() {
        for index in 0u8..8 {
            let base = 0x40 + index as usize * 8;
            assert!(matches!(
                CB_OPCODES[base].instruction,
                Instruction::BitFlag(BitFlag::Check(bit, _)) if bit == index
            ));
            assert!(matches!(
                CB_OPCODES[base + 0x40].instruction,
                Instruction::BitFlag(BitFlag::Unset(bit, _)) if bit == index
            ));
            assert!(matches!(
                CB_OPCODES[base + 0x80].instruction,
                Instruction::BitFlag(BitFlag::Set(bit, _)) if bit == index
            ));
        }
    }
}
