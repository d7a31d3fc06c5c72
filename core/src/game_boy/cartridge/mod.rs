mod mbc;

use core::fmt;

use crate::bytes::{self, Endianness};
use mbc::{Mbc, mbc1::Mbc1, mbc2::Mbc2, mbc3::Mbc3, mbc5::Mbc5, no_mbc::NoMbc};

const LOGO_OFFSET: usize = 0x104;
const LOGO: [u8; 48] = [
    0xce, 0xed, 0x66, 0x66, 0xcc, 0x0d, 0x00, 0x0b, 0x03, 0x73, 0x00, 0x83, 0x00, 0x0c, 0x00, 0x0d,
    0x00, 0x08, 0x11, 0x1f, 0x88, 0x89, 0x00, 0x0e, 0xdc, 0xcc, 0x6e, 0xe6, 0xdd, 0xdd, 0xd9, 0x99,
    0xbb, 0xbb, 0x67, 0x63, 0x6e, 0x0e, 0xec, 0xcc, 0xdd, 0xdc, 0x99, 0x9f, 0xbb, 0xb9, 0x33, 0x3e,
];

const TITLE_OFFSET: usize = 0x134;
const CARTRIDGE_TYPE_OFFSET: usize = 0x147;
const ROM_SIZE_OFFSET: usize = 0x148;
const HEADER_CHECKSUM_OFFSET: usize = 0x14d;
const GLOBAL_CHECKSUM_OFFSET: usize = 0x14e;

/// Everything up to and including the header.
const HEADER_END: usize = 0x150;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MbcKind {
    RomOnly,
    Mbc1,
    Mbc2,
    Mmm01,
    Mbc3,
    Mbc5,
    Mbc6,
    Mbc7,
    HuC1,
    HuC3,
}

impl fmt::Display for MbcKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::RomOnly => "ROM only",
                Self::Mbc1 => "MBC1",
                Self::Mbc2 => "MBC2",
                Self::Mmm01 => "MMM01",
                Self::Mbc3 => "MBC3",
                Self::Mbc5 => "MBC5",
                Self::Mbc6 => "MBC6",
                Self::Mbc7 => "MBC7",
                Self::HuC1 => "HuC1",
                Self::HuC3 => "HuC3",
            }
        )
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CartridgeError {
    /// The image ends before the header does.
    RomTooShort { len: usize },
    /// The logo bytes at 0x104 diverge from the reference pattern.
    CorruptHeader { offset: usize },
    /// The size-code byte maps to no known capacity.
    InvalidSizeCode { code: u8 },
    /// Declared capacity differs from the actual image length.
    SizeMismatch { declared: usize, actual: usize },
    /// The cartridge-type byte names no controller this core drives.
    UnsupportedController { code: u8 },
    /// Header checksum failure under the strict policy.
    ChecksumMismatch { stored: u8, computed: u8 },
}

impl fmt::Display for CartridgeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RomTooShort { len } => {
                write!(f, "image is {len} bytes, shorter than the cartridge header")
            }
            Self::CorruptHeader { offset } => {
                write!(f, "header logo mismatch at offset {offset:#06x}")
            }
            Self::InvalidSizeCode { code } => write!(f, "unknown ROM size code {code:#04x}"),
            Self::SizeMismatch { declared, actual } => {
                write!(f, "header declares {declared} bytes but image is {actual}")
            }
            Self::UnsupportedController { code } => {
                write!(f, "unsupported cartridge type {code:#04x}")
            }
            Self::ChecksumMismatch { stored, computed } => {
                write!(
                    f,
                    "header checksum {stored:#04x} does not match computed {computed:#04x}"
                )
            }
        }
    }
}

impl std::error::Error for CartridgeError {}

/// Advisory findings recorded during a successful load.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadWarning {
    HeaderChecksumMismatch { stored: u8, computed: u8 },
    GlobalChecksumMismatch { stored: u16, computed: u16 },
}

impl fmt::Display for LoadWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::HeaderChecksumMismatch { stored, computed } => {
                write!(
                    f,
                    "header checksum {stored:#04x} does not match computed {computed:#04x}"
                )
            }
            Self::GlobalChecksumMismatch { stored, computed } => {
                write!(
                    f,
                    "global checksum {stored:#06x} does not match computed {computed:#06x}"
                )
            }
        }
    }
}

/// Hardware refuses to boot a cartridge whose header checksum fails, so
/// strict is the default; permissive mirrors emulators that load anyway.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ChecksumPolicy {
    #[default]
    Strict,
    Permissive,
}

/// Capacity in bytes from the header's size-code byte.
pub fn rom_size(rom: &[u8]) -> Result<usize, CartridgeError> {
    let code = rom[ROM_SIZE_OFFSET];
    match code {
        0x00..=0x08 => Ok(0x8000 << code),
        _ => Err(CartridgeError::InvalidSizeCode { code }),
    }
}

/// 16 KiB bank count from the same size-code byte.
pub fn bank_count(rom: &[u8]) -> Result<usize, CartridgeError> {
    Ok(rom_size(rom)? / 0x4000)
}

pub fn controller_kind(rom: &[u8]) -> Result<MbcKind, CartridgeError> {
    let code = rom[CARTRIDGE_TYPE_OFFSET];
    match code {
        0x00 | 0x08 | 0x09 => Ok(MbcKind::RomOnly),
        0x01..=0x03 => Ok(MbcKind::Mbc1),
        0x05 | 0x06 => Ok(MbcKind::Mbc2),
        0x0b..=0x0d => Ok(MbcKind::Mmm01),
        0x0f..=0x13 => Ok(MbcKind::Mbc3),
        0x19..=0x1e => Ok(MbcKind::Mbc5),
        0x20 => Ok(MbcKind::Mbc6),
        0x22 => Ok(MbcKind::Mbc7),
        0xfe => Ok(MbcKind::HuC3),
        0xff => Ok(MbcKind::HuC1),
        _ => Err(CartridgeError::UnsupportedController { code }),
    }
}

/// Byte-for-byte equality against the reference logo pattern. Returns the
/// offset of the first divergent byte on failure.
fn verify_logo(rom: &[u8]) -> Result<(), usize> {
    for (index, expected) in LOGO.iter().enumerate() {
        if rom[LOGO_OFFSET + index] != *expected {
            return Err(LOGO_OFFSET + index);
        }
    }
    Ok(())
}

/// Fold `x = x - byte - 1` over the title/cartridge-info range.
pub fn header_checksum(rom: &[u8]) -> u8 {
    rom[TITLE_OFFSET..HEADER_CHECKSUM_OFFSET]
        .iter()
        .fold(0u8, |checksum, byte| {
            checksum.wrapping_sub(*byte).wrapping_sub(1)
        })
}

pub fn verify_header_checksum(rom: &[u8]) -> bool {
    header_checksum(rom) == rom[HEADER_CHECKSUM_OFFSET]
}

/// 16-bit wraparound sum of the whole image, excluding the two checksum
/// bytes themselves.
pub fn global_checksum(rom: &[u8]) -> u16 {
    rom.iter().enumerate().fold(0u16, |checksum, (index, byte)| {
        if index == GLOBAL_CHECKSUM_OFFSET || index == GLOBAL_CHECKSUM_OFFSET + 1 {
            checksum
        } else {
            checksum.wrapping_add(*byte as u16)
        }
    })
}

/// The stored global checksum is the one big-endian field in the header.
pub fn stored_global_checksum(rom: &[u8]) -> u16 {
    bytes::read_u16(rom, GLOBAL_CHECKSUM_OFFSET, Endianness::Big)
}

pub fn verify_global_checksum(rom: &[u8]) -> bool {
    global_checksum(rom) == stored_global_checksum(rom)
}

fn parse_title(rom: &[u8]) -> String {
    let mut title = String::new();
    for character in rom[TITLE_OFFSET..TITLE_OFFSET + 0x10].iter() {
        if *character == 0u8 {
            break;
        }
        title.push(*character as char)
    }
    title
}

pub struct Cartridge {
    title: String,
    kind: MbcKind,
    has_battery: bool,
    bank_count: usize,
    warnings: Vec<LoadWarning>,
    rom: Vec<u8>,
    mbc: Mbc,
}

impl Cartridge {
    /// Validate a raw image and wire up its bank controller. All failures
    /// here are load-time; nothing on the cartridge errors after this.
    pub fn parse(rom: Vec<u8>, policy: ChecksumPolicy) -> Result<Cartridge, CartridgeError> {
        if rom.len() < HEADER_END {
            return Err(CartridgeError::RomTooShort { len: rom.len() });
        }

        if let Err(offset) = verify_logo(&rom) {
            return Err(CartridgeError::CorruptHeader { offset });
        }

        let declared = rom_size(&rom)?;
        if declared != rom.len() {
            return Err(CartridgeError::SizeMismatch {
                declared,
                actual: rom.len(),
            });
        }
        let bank_count = bank_count(&rom)?;

        let kind = controller_kind(&rom)?;
        let cartridge_type = rom[CARTRIDGE_TYPE_OFFSET];

        let mut warnings = Vec::new();

        let computed = header_checksum(&rom);
        let stored = rom[HEADER_CHECKSUM_OFFSET];
        if computed != stored {
            match policy {
                ChecksumPolicy::Strict => {
                    return Err(CartridgeError::ChecksumMismatch { stored, computed });
                }
                ChecksumPolicy::Permissive => {
                    warnings.push(LoadWarning::HeaderChecksumMismatch { stored, computed });
                }
            }
        }

        // Advisory only: hardware never gates on the global checksum.
        if !verify_global_checksum(&rom) {
            warnings.push(LoadWarning::GlobalChecksumMismatch {
                stored: stored_global_checksum(&rom),
                computed: global_checksum(&rom),
            });
        }

        let mbc = match kind {
            MbcKind::RomOnly => Mbc::NoMbc(NoMbc::new()),
            MbcKind::Mbc1 => Mbc::Mbc1(Mbc1::new(&rom, bank_count)),
            MbcKind::Mbc2 => Mbc::Mbc2(Mbc2::new(&rom, bank_count)),
            MbcKind::Mbc3 => Mbc::Mbc3(Mbc3::new(&rom, bank_count)),
            MbcKind::Mbc5 => Mbc::Mbc5(Mbc5::new(&rom, bank_count)),
            // Recognized in the header table, but this core drives no
            // banking hardware for them.
            MbcKind::Mmm01 | MbcKind::Mbc6 | MbcKind::Mbc7 | MbcKind::HuC1 | MbcKind::HuC3 => {
                return Err(CartridgeError::UnsupportedController {
                    code: cartridge_type,
                });
            }
        };

        let has_battery = matches!(
            cartridge_type,
            0x03 | 0x06 | 0x09 | 0x10 | 0x13 | 0x1b | 0x1e | 0x22 | 0xfe | 0xff
        );

        Ok(Cartridge {
            title: parse_title(&rom),
            kind,
            has_battery,
            bank_count,
            warnings,
            rom,
            mbc,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn kind(&self) -> MbcKind {
        self.kind
    }

    pub fn rom_size(&self) -> usize {
        self.rom.len()
    }

    pub fn bank_count(&self) -> usize {
        self.bank_count
    }

    pub fn has_battery(&self) -> bool {
        self.has_battery
    }

    pub fn warnings(&self) -> &[LoadWarning] {
        &self.warnings
    }

    pub fn header_checksum(&self) -> u8 {
        self.rom[HEADER_CHECKSUM_OFFSET]
    }

    pub fn global_checksum(&self) -> u16 {
        stored_global_checksum(&self.rom)
    }

    /// External RAM contents for battery-backed cartridges; the host owns
    /// persistence.
    pub fn ram(&self) -> Option<Vec<u8>> {
        if self.has_battery { self.mbc.ram() } else { None }
    }

    pub fn read(&self, address: u16) -> u8 {
        self.mbc.read(&self.rom, address)
    }

    pub fn write(&mut self, address: u16, value: u8) {
        self.mbc.write(address, value);
    }
}
