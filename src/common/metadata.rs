use std::fmt::{Display, Formatter};
use std::ops::{Deref, Not};
use std::str::FromStr;

use super::error::{QRError, QRResult};
use super::mask::MaskPattern;

// Color
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    pub fn select<T>(self, dark: T, light: T) -> T {
        match self {
            Color::Dark => dark,
            Color::Light => light,
        }
    }
}

impl Not for Color {
    type Output = Self;
    fn not(self) -> Self::Output {
        match self {
            Color::Dark => Color::Light,
            Color::Light => Color::Dark,
        }
    }
}

impl From<bool> for Color {
    fn from(dark: bool) -> Self {
        if dark {
            Color::Dark
        } else {
            Color::Light
        }
    }
}

// Version
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash)]
pub struct Version(u8);

impl Version {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 40;

    pub fn new(v: u8) -> QRResult<Self> {
        if !(Self::MIN..=Self::MAX).contains(&v) {
            return Err(QRError::InvalidVersion(v));
        }
        Ok(Self(v))
    }

    pub const fn width(self) -> usize {
        self.0 as usize * 4 + 17
    }

    pub fn block_layout(self, ecl: ECLevel) -> BlockLayout {
        let (block1_count, block2_count, data_per_block, ecc_per_block) =
            EC_BLOCKS[self.0 as usize - 1][ecl as usize];
        BlockLayout { block1_count, block2_count, data_per_block, ecc_per_block }
    }

    // Bits taken by the byte mode character count field
    pub const fn char_cnt_bits(self) -> usize {
        if self.0 <= 9 {
            8
        } else {
            16
        }
    }

    // Mode indicator, character count and terminator rounded up to whole bytes
    pub const fn header_len(self) -> usize {
        if self.0 <= 9 {
            2
        } else {
            3
        }
    }

    /// Number of payload bytes that fit at this version and level.
    pub fn data_capacity(self, ecl: ECLevel) -> usize {
        self.block_layout(ecl).data_codewords() - self.header_len()
    }

    pub fn alignment_pattern(self) -> &'static [i16] {
        ALIGNMENT_PATTERN_POSITIONS[self.0 as usize - 1]
    }

    pub fn info(self) -> u32 {
        debug_assert!(self.0 >= 7, "Version info is only defined from version 7");
        VERSION_INFOS[self.0 as usize - 7]
    }

    /// Smallest version whose capacity holds `len` payload bytes.
    pub fn find(len: usize, ecl: ECLevel) -> Option<Self> {
        (Self::MIN..=Self::MAX).map(Self).find(|v| len <= v.data_capacity(ecl))
    }
}

impl Deref for Version {
    type Target = u8;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Display for Version {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Error correction level
//------------------------------------------------------------------------------

#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, PartialOrd, Ord, Hash)]
pub enum ECLevel {
    #[default]
    L = 0,
    M = 1,
    Q = 2,
    H = 3,
}

impl ECLevel {
    // 2 bit indicator used in the format info
    pub fn format_bits(self) -> u32 {
        match self {
            ECLevel::L => 0b01,
            ECLevel::M => 0b00,
            ECLevel::Q => 0b11,
            ECLevel::H => 0b10,
        }
    }
}

impl FromStr for ECLevel {
    type Err = QRError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "L" => Ok(ECLevel::L),
            "M" => Ok(ECLevel::M),
            "Q" => Ok(ECLevel::Q),
            "H" => Ok(ECLevel::H),
            _ => Err(QRError::InvalidECLevel(s.to_string())),
        }
    }
}

// Error correction block layout
//------------------------------------------------------------------------------

/// Group 1 holds `block1_count` blocks of `data_per_block` codewords, group 2
/// holds `block2_count` blocks with one extra codeword each. Every block gets
/// `ecc_per_block` error correction codewords.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct BlockLayout {
    pub block1_count: usize,
    pub block2_count: usize,
    pub data_per_block: usize,
    pub ecc_per_block: usize,
}

impl BlockLayout {
    pub fn block_count(&self) -> usize {
        self.block1_count + self.block2_count
    }

    pub fn data_codewords(&self) -> usize {
        self.data_per_block * self.block_count() + self.block2_count
    }

    pub fn ecc_codewords(&self) -> usize {
        self.ecc_per_block * self.block_count()
    }

    pub fn total_codewords(&self) -> usize {
        self.data_codewords() + self.ecc_codewords()
    }
}

// Metadata
//------------------------------------------------------------------------------

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Metadata {
    version: Version,
    ec_level: ECLevel,
    mask: Option<MaskPattern>,
}

impl Metadata {
    pub fn new(version: Version, ec_level: ECLevel, mask: Option<MaskPattern>) -> Self {
        Self { version, ec_level, mask }
    }

    pub fn version(&self) -> Version {
        self.version
    }

    pub fn ec_level(&self) -> ECLevel {
        self.ec_level
    }

    pub fn mask(&self) -> Option<MaskPattern> {
        self.mask
    }
}

impl Display for Metadata {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.mask {
            Some(m) => write!(
                f,
                "{{ Version: {}, Ec level: {:?}, Mask: {} }}",
                self.version, self.ec_level, *m
            ),
            None => {
                write!(f, "{{ Version: {}, Ec level: {:?}, Mask: None }}", self.version, self.ec_level)
            }
        }
    }
}

// Format info
//------------------------------------------------------------------------------

pub fn format_info(ecl: ECLevel, mask: MaskPattern) -> u32 {
    FORMAT_INFOS[((ecl as usize) << 3) + *mask as usize]
}


// Global constants
//------------------------------------------------------------------------------

pub static FORMAT_INFO_BIT_LEN: usize = 15;

pub static VERSION_INFO_BIT_LEN: usize = 18;

// Most significant bit first, negative indices wrap around the width
pub static FORMAT_INFO_COORDS_QR_MAIN: [(i16, i16); 15] = [
    (8, 0),
    (8, 1),
    (8, 2),
    (8, 3),
    (8, 4),
    (8, 5),
    (8, 7),
    (8, 8),
    (7, 8),
    (5, 8),
    (4, 8),
    (3, 8),
    (2, 8),
    (1, 8),
    (0, 8),
];

pub static FORMAT_INFO_COORDS_QR_SIDE: [(i16, i16); 15] = [
    (-1, 8),
    (-2, 8),
    (-3, 8),
    (-4, 8),
    (-5, 8),
    (-6, 8),
    (-7, 8),
    (8, -8),
    (8, -7),
    (8, -6),
    (8, -5),
    (8, -4),
    (8, -3),
    (8, -2),
    (8, -1),
];

pub static VERSION_INFO_COORDS_BL: [(i16, i16); 18] = [
    (-9, 5),
    (-10, 5),
    (-11, 5),
    (-9, 4),
    (-10, 4),
    (-11, 4),
    (-9, 3),
    (-10, 3),
    (-11, 3),
    (-9, 2),
    (-10, 2),
    (-11, 2),
    (-9, 1),
    (-10, 1),
    (-11, 1),
    (-9, 0),
    (-10, 0),
    (-11, 0),
];

pub static VERSION_INFO_COORDS_TR: [(i16, i16); 18] = [
    (5, -9),
    (5, -10),
    (5, -11),
    (4, -9),
    (4, -10),
    (4, -11),
    (3, -9),
    (3, -10),
    (3, -11),
    (2, -9),
    (2, -10),
    (2, -11),
    (1, -9),
    (1, -10),
    (1, -11),
    (0, -9),
    (0, -10),
    (0, -11),
];

// Format info for each (level, mask), level major in L, M, Q, H order
static FORMAT_INFOS: [u32; 32] = [
    0x77C4, 0x72F3, 0x7DAA, 0x789D, 0x662F, 0x6318, 0x6C41, 0x6976, // L
    0x5412, 0x5125, 0x5E7C, 0x5B4B, 0x45F9, 0x40CE, 0x4F97, 0x4AA0, // M
    0x355F, 0x3068, 0x3F31, 0x3A06, 0x24B4, 0x2183, 0x2EDA, 0x2BED, // Q
    0x1689, 0x13BE, 0x1CE7, 0x19D0, 0x0762, 0x0255, 0x0D0C, 0x083B, // H
];

// 6 version bits followed by 12 BCH bits, versions 7 to 40
static VERSION_INFOS: [u32; 34] = [
    0x07C94, 0x085BC, 0x09A99, 0x0A4D3, 0x0BBF6, 0x0C762,
    0x0D847, 0x0E60D, 0x0F928, 0x10B78, 0x1145D, 0x12A17,
    0x13532, 0x149A6, 0x15683, 0x168C9, 0x177EC, 0x18EC4,
    0x191E1, 0x1AFAB, 0x1B08E, 0x1CC1A, 0x1D33F, 0x1ED75,
    0x1F250, 0x209D5, 0x216F0, 0x228BA, 0x2379F, 0x24B0B,
    0x2542E, 0x26A64, 0x27541, 0x28C69,
];

// Row and column centers of alignment patterns
static ALIGNMENT_PATTERN_POSITIONS: [&[i16]; 40] = [
    &[],
    &[6, 18],
    &[6, 22],
    &[6, 26],
    &[6, 30],
    &[6, 34],
    &[6, 22, 38],
    &[6, 24, 42],
    &[6, 26, 46],
    &[6, 28, 50],
    &[6, 30, 54],
    &[6, 32, 58],
    &[6, 34, 62],
    &[6, 26, 46, 66],
    &[6, 26, 48, 70],
    &[6, 26, 50, 74],
    &[6, 30, 54, 78],
    &[6, 30, 56, 82],
    &[6, 30, 58, 86],
    &[6, 34, 62, 90],
    &[6, 28, 50, 72, 94],
    &[6, 26, 50, 74, 98],
    &[6, 30, 54, 78, 102],
    &[6, 28, 54, 80, 106],
    &[6, 32, 58, 84, 110],
    &[6, 30, 58, 86, 114],
    &[6, 34, 62, 90, 118],
    &[6, 26, 50, 74, 98, 122],
    &[6, 30, 54, 78, 102, 126],
    &[6, 26, 52, 78, 104, 130],
    &[6, 30, 56, 82, 108, 134],
    &[6, 34, 60, 86, 112, 138],
    &[6, 30, 58, 86, 114, 142],
    &[6, 34, 62, 90, 118, 146],
    &[6, 30, 54, 78, 102, 126, 150],
    &[6, 24, 50, 76, 102, 128, 154],
    &[6, 28, 54, 80, 106, 132, 158],
    &[6, 32, 58, 84, 110, 136, 162],
    &[6, 26, 54, 82, 110, 138, 166],
    &[6, 30, 58, 86, 114, 142, 170],
];

// (group 1 blocks, group 2 blocks, data codewords per group 1 block, ecc per block)
// indexed by version and then level in L, M, Q, H order
#[rustfmt::skip]
static EC_BLOCKS: [[(usize, usize, usize, usize); 4]; 40] = [
    [(1, 0, 19, 7), (1, 0, 16, 10), (1, 0, 13, 13), (1, 0, 9, 17)], // 1
    [(1, 0, 34, 10), (1, 0, 28, 16), (1, 0, 22, 22), (1, 0, 16, 28)], // 2
    [(1, 0, 55, 15), (1, 0, 44, 26), (2, 0, 17, 18), (2, 0, 13, 22)], // 3
    [(1, 0, 80, 20), (2, 0, 32, 18), (2, 0, 24, 26), (4, 0, 9, 16)], // 4
    [(1, 0, 108, 26), (2, 0, 43, 24), (2, 2, 15, 18), (2, 2, 11, 22)], // 5
    [(2, 0, 68, 18), (4, 0, 27, 16), (4, 0, 19, 24), (4, 0, 15, 28)], // 6
    [(2, 0, 78, 20), (4, 0, 31, 18), (2, 4, 14, 18), (4, 1, 13, 26)], // 7
    [(2, 0, 97, 24), (2, 2, 38, 22), (4, 2, 18, 22), (4, 2, 14, 26)], // 8
    [(2, 0, 116, 30), (3, 2, 36, 22), (4, 4, 16, 20), (4, 4, 12, 24)], // 9
    [(2, 2, 68, 18), (4, 1, 43, 26), (6, 2, 19, 24), (6, 2, 15, 28)], // 10
    [(4, 0, 81, 20), (1, 4, 50, 30), (4, 4, 22, 28), (3, 8, 12, 24)], // 11
    [(2, 2, 92, 24), (6, 2, 36, 22), (4, 6, 20, 26), (7, 4, 14, 28)], // 12
    [(4, 0, 107, 26), (8, 1, 37, 22), (8, 4, 20, 24), (12, 4, 11, 22)], // 13
    [(3, 1, 115, 30), (4, 5, 40, 24), (11, 5, 16, 20), (11, 5, 12, 24)], // 14
    [(5, 1, 87, 22), (5, 5, 41, 24), (5, 7, 24, 30), (11, 7, 12, 24)], // 15
    [(5, 1, 98, 24), (7, 3, 45, 28), (15, 2, 19, 24), (3, 13, 15, 30)], // 16
    [(1, 5, 107, 28), (10, 1, 46, 28), (1, 15, 22, 28), (2, 17, 14, 28)], // 17
    [(5, 1, 120, 30), (9, 4, 43, 26), (17, 1, 22, 28), (2, 19, 14, 28)], // 18
    [(3, 4, 113, 28), (3, 11, 44, 26), (17, 4, 21, 26), (9, 16, 13, 26)], // 19
    [(3, 5, 107, 28), (3, 13, 41, 26), (15, 5, 24, 30), (15, 10, 15, 28)], // 20
    [(4, 4, 116, 28), (17, 0, 42, 26), (17, 6, 22, 28), (19, 6, 16, 30)], // 21
    [(2, 7, 111, 28), (17, 0, 46, 28), (7, 16, 24, 30), (34, 0, 13, 24)], // 22
    [(4, 5, 121, 30), (4, 14, 47, 28), (11, 14, 24, 30), (16, 14, 15, 30)], // 23
    [(6, 4, 117, 30), (6, 14, 45, 28), (11, 16, 24, 30), (30, 2, 16, 30)], // 24
    [(8, 4, 106, 26), (8, 13, 47, 28), (7, 22, 24, 30), (22, 13, 15, 30)], // 25
    [(10, 2, 114, 28), (19, 4, 46, 28), (28, 6, 22, 28), (33, 4, 16, 30)], // 26
    [(8, 4, 122, 30), (22, 3, 45, 28), (8, 26, 23, 30), (12, 28, 15, 30)], // 27
    [(3, 10, 117, 30), (3, 23, 45, 28), (4, 31, 24, 30), (11, 31, 15, 30)], // 28
    [(7, 7, 116, 30), (21, 7, 45, 28), (1, 37, 23, 30), (19, 26, 15, 30)], // 29
    [(5, 10, 115, 30), (19, 10, 47, 28), (15, 25, 24, 30), (23, 25, 15, 30)], // 30
    [(13, 3, 115, 30), (2, 29, 46, 28), (42, 1, 24, 30), (23, 28, 15, 30)], // 31
    [(17, 0, 115, 30), (10, 23, 46, 28), (10, 35, 24, 30), (19, 35, 15, 30)], // 32
    [(17, 1, 115, 30), (14, 21, 46, 28), (29, 19, 24, 30), (11, 46, 15, 30)], // 33
    [(13, 6, 115, 30), (14, 23, 46, 28), (44, 7, 24, 30), (59, 1, 16, 30)], // 34
    [(12, 7, 121, 30), (12, 26, 47, 28), (39, 14, 24, 30), (22, 41, 15, 30)], // 35
    [(6, 14, 121, 30), (6, 34, 47, 28), (46, 10, 24, 30), (2, 64, 15, 30)], // 36
    [(17, 4, 122, 30), (29, 14, 46, 28), (49, 10, 24, 30), (24, 46, 15, 30)], // 37
    [(4, 18, 122, 30), (13, 32, 46, 28), (48, 14, 24, 30), (42, 32, 15, 30)], // 38
    [(20, 4, 117, 30), (40, 7, 47, 28), (43, 22, 24, 30), (10, 67, 15, 30)], // 39
    [(19, 6, 118, 30), (18, 31, 47, 28), (34, 34, 24, 30), (20, 61, 15, 30)], // 40
];
