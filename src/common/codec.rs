use tracing::{debug, warn};

use super::bitstream::BitStream;
use super::error::{QRError, QRResult};
use super::metadata::{ECLevel, Version};

// Overflow policy
//------------------------------------------------------------------------------

/// What to do with a payload longer than the symbol can hold.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy)]
pub enum OverflowPolicy {
    /// Fail with [`QRError::DataTooLong`].
    #[default]
    Reject,
    /// Keep as many leading bytes as fit and drop the rest.
    Truncate,
}

/// Keeps the low 8 bits of every char, so Latin-1 text maps onto single bytes.
pub fn to_latin1(value: &str) -> Vec<u8> {
    value.chars().map(|c| c as u32 as u8).collect()
}

// Encoder
//------------------------------------------------------------------------------

/// Picks the smallest version that fits `data` and returns the padded data
/// codewords for it.
pub fn encode(data: &[u8], ecl: ECLevel, policy: OverflowPolicy) -> QRResult<(Vec<u8>, Version)> {
    let ver = match Version::find(data.len(), ecl) {
        Some(v) => v,
        None => Version::new(Version::MAX)?,
    };
    debug!(version = *ver, len = data.len(), "Selected version");
    let codewords = encode_with_version(data, ver, ecl, policy)?;
    Ok((codewords, ver))
}

pub fn encode_with_version(
    data: &[u8],
    ver: Version,
    ecl: ECLevel,
    policy: OverflowPolicy,
) -> QRResult<Vec<u8>> {
    let capacity = ver.data_capacity(ecl);
    let len = if data.len() > capacity {
        match policy {
            OverflowPolicy::Reject => {
                return Err(QRError::DataTooLong { len: data.len(), capacity })
            }
            OverflowPolicy::Truncate => {
                warn!(len = data.len(), capacity, "Payload truncated to fit version {ver}");
                capacity
            }
        }
    } else {
        data.len()
    };

    let bcap = ver.block_layout(ecl).data_codewords() << 3;
    let mut bs = BitStream::new(bcap);
    push_byte_segment(&data[..len], ver, &mut bs);
    push_terminator(&mut bs);
    pad_remaining_capacity(&mut bs);

    debug_assert_eq!(bs.len(), bcap, "Encoded data doesn't fill data capacity");
    Ok(bs.into_bytes())
}

// Writer
//------------------------------------------------------------------------------

fn push_byte_segment(data: &[u8], ver: Version, bs: &mut BitStream) {
    bs.push_bits(BYTE_MODE_INDICATOR, 4);
    bs.push_bits(data.len() as u16, ver.char_cnt_bits());
    bs.extend(data);
}

fn push_terminator(bs: &mut BitStream) {
    let term_len = (bs.capacity() - bs.len()).min(4);
    bs.push_bits(0, term_len);
}

fn pad_remaining_capacity(bs: &mut BitStream) {
    let align_len = (8 - (bs.len() & 7)) & 7;
    bs.push_bits(0, align_len.min(bs.capacity() - bs.len()));

    let remaining = (bs.capacity() - bs.len()) >> 3;
    for pad in PAD_CODEWORDS.iter().cycle().take(remaining) {
        bs.push_bits(*pad as u16, 8);
    }
}

#[cfg(test)]
mod encoder_tests {
    use super::{encode, encode_with_version, to_latin1, OverflowPolicy};
    use crate::common::error::QRError;
    use crate::common::metadata::{ECLevel, Version};

    #[test]
    fn test_encode_empty() {
        let (codewords, ver) = encode(b"", ECLevel::L, OverflowPolicy::Reject).unwrap();
        assert_eq!(*ver, 1);
        let mut exp = vec![0x40, 0x00];
        exp.extend([0xEC, 0x11].iter().cycle().take(17));
        assert_eq!(codewords, exp);
    }

    #[test]
    fn test_encode_url() {
        let (codewords, ver) =
            encode(b"https://example.com", ECLevel::L, OverflowPolicy::Reject).unwrap();
        assert_eq!(*ver, 2);
        assert_eq!(codewords.len(), 34);
        assert_eq!(
            codewords[..21],
            [
                0x41, 0x36, 0x87, 0x47, 0x47, 0x07, 0x33, 0xA2, 0xF2, 0xF6, 0x57, 0x86, 0x16, 0xD7,
                0x06, 0xC6, 0x52, 0xE6, 0x36, 0xF6, 0xD0
            ]
        );
        assert_eq!(codewords[21..], [0xEC, 0x11].repeat(7)[..13]);
    }

    #[test]
    fn test_encode_16_bit_length() {
        let data = (0..231).map(|i| i as u8).collect::<Vec<_>>();
        let (codewords, ver) = encode(&data, ECLevel::L, OverflowPolicy::Reject).unwrap();
        assert_eq!(*ver, 10);
        assert_eq!(codewords[..6], [0x40, 0x0E, 0x70, 0x00, 0x10, 0x20]);
    }

    #[test]
    fn test_encode_full_capacity_has_no_pad() {
        let data = vec![0xFF; 17];
        let (codewords, ver) = encode(&data, ECLevel::L, OverflowPolicy::Reject).unwrap();
        assert_eq!(*ver, 1);
        assert_eq!(codewords.len(), 19);
        assert_eq!(codewords[0], 0x41);
        assert_eq!(codewords[1], 0x1F);
        assert_eq!(codewords[18], 0xF0);
    }

    #[test]
    fn test_encode_overflow_rejected() {
        let data = vec![b'a'; 1274];
        let res = encode(&data, ECLevel::H, OverflowPolicy::Reject);
        assert_eq!(res, Err(QRError::DataTooLong { len: 1274, capacity: 1273 }));
    }

    #[test]
    fn test_encode_overflow_truncated() {
        let data = vec![b'a'; 1300];
        let (codewords, ver) = encode(&data, ECLevel::H, OverflowPolicy::Truncate).unwrap();
        let (exp, _) = encode(&data[..1273], ECLevel::H, OverflowPolicy::Reject).unwrap();
        assert_eq!(*ver, 40);
        assert_eq!(codewords, exp);
    }

    #[test]
    fn test_encode_with_small_version() {
        let ver = Version::new(1).unwrap();
        let res = encode_with_version(b"Hello, world!!!", ver, ECLevel::M, OverflowPolicy::Reject);
        assert_eq!(res, Err(QRError::DataTooLong { len: 15, capacity: 14 }));
        let ver = Version::new(3).unwrap();
        let codewords =
            encode_with_version(b"Hello, world!!!", ver, ECLevel::M, OverflowPolicy::Reject)
                .unwrap();
        assert_eq!(codewords.len(), 44);
    }

    #[test]
    fn test_to_latin1() {
        assert_eq!(to_latin1("abc"), b"abc");
        assert_eq!(to_latin1("caf\u{e9}"), b"caf\xe9");
        assert_eq!(to_latin1("\u{20ac}"), [0xAC]);
    }
}

// Global constants
//------------------------------------------------------------------------------

pub static BYTE_MODE_INDICATOR: u16 = 0b0100;

pub static PAD_CODEWORDS: [u8; 2] = [0xEC, 0x11];
