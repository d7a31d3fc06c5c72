#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Register8 {
    A,
    B,
    C,
    D,
    E,
    H,
    L,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Register16 {
    Af,
    Bc,
    De,
    Hl,
    StackPointer,
}
