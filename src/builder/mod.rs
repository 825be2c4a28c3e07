mod qr;

pub use qr::{Frame, Module, QR};

use std::borrow::Cow;
use std::ops::Deref;

use tracing::debug;

use crate::common::{
    bitstream::BitStream,
    codec::{encode, encode_with_version, to_latin1, OverflowPolicy},
    ec::{generator_polynomial, Block},
    error::QRResult,
    mask::{apply_best_mask, MaskPattern},
    metadata::{BlockLayout, ECLevel, Version},
};

/// Configures and runs symbol generation.
///
/// ```
/// use qrframe::{ECLevel, QRBuilder};
///
/// let frame = QRBuilder::new(b"https://example.com").ec_level(ECLevel::L).build_frame().unwrap();
/// assert_eq!(frame.width, 25);
/// ```
pub struct QRBuilder<'a> {
    data: Cow<'a, [u8]>,
    version: Option<Version>,
    ec_level: ECLevel,
    mask: Option<MaskPattern>,
    overflow: OverflowPolicy,
}

impl<'a> QRBuilder<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data: Cow::Borrowed(data),
            version: None,
            ec_level: ECLevel::L,
            mask: None,
            overflow: OverflowPolicy::Reject,
        }
    }

    /// Text is reduced to Latin-1, one byte per char.
    pub fn from_text(text: &str) -> QRBuilder<'static> {
        QRBuilder {
            data: Cow::Owned(to_latin1(text)),
            version: None,
            ec_level: ECLevel::L,
            mask: None,
            overflow: OverflowPolicy::Reject,
        }
    }

    pub fn data(&mut self, data: &'a [u8]) -> &mut Self {
        self.data = Cow::Borrowed(data);
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = Some(version);
        self
    }

    pub fn unset_version(&mut self) -> &mut Self {
        self.version = None;
        self
    }

    pub fn ec_level(&mut self, ec_level: ECLevel) -> &mut Self {
        self.ec_level = ec_level;
        self
    }

    pub fn mask(&mut self, mask: MaskPattern) -> &mut Self {
        self.mask = Some(mask);
        self
    }

    pub fn unset_mask(&mut self) -> &mut Self {
        self.mask = None;
        self
    }

    pub fn overflow(&mut self, overflow: OverflowPolicy) -> &mut Self {
        self.overflow = overflow;
        self
    }

    pub fn metadata(&self) -> String {
        let version = self.version.map_or("None".to_string(), |v| v.to_string());
        let mask = self.mask.map_or("None".to_string(), |m| (*m).to_string());
        format!("{{ Version: {version}, Ec level: {:?}, Mask: {mask} }}", self.ec_level)
    }
}


impl QRBuilder<'_> {
    pub fn build(&self) -> QRResult<QR> {
        let mut qr = self.build_unmasked()?;

        let mask = match self.mask {
            Some(m) => {
                debug!("Applying mask {}...", *m);
                qr.apply_mask(m);
                m
            }
            None => {
                debug!("Finding & applying best mask...");
                apply_best_mask(&mut qr)
            }
        };

        debug!("Drawing format info for mask {}...", *mask);
        qr.draw_format_info();

        debug!(
            metadata = %qr.metadata(),
            dark_modules = qr.count_dark_modules(),
            "QR generated"
        );

        Ok(qr)
    }

    pub fn build_frame(&self) -> QRResult<Frame> {
        self.build().map(|qr| qr.to_frame())
    }

    // Everything up to and including data placement
    pub(crate) fn build_unmasked(&self) -> QRResult<QR> {
        debug!("Generating QR {}...", self.metadata());

        // Encode data
        let (encoded_data, version) = match self.version {
            Some(v) => {
                (encode_with_version(&self.data, v, self.ec_level, self.overflow)?, v)
            }
            None => {
                debug!("Finding best version...");
                encode(&self.data, self.ec_level, self.overflow)?
            }
        };

        let layout = version.block_layout(self.ec_level);

        debug!("Constructing payload with ecc & interleaving...");
        let blocks = Self::compute_ecc(&encoded_data, layout);
        let mut payload = BitStream::new(layout.total_codewords() << 3);
        payload.extend(&Self::interleave(&blocks.iter().map(Block::data).collect::<Vec<_>>()));
        payload.extend(&Self::interleave(&blocks.iter().map(Block::ecc).collect::<Vec<_>>()));

        debug!("Constructing QR...");
        let mut qr = QR::new(version, self.ec_level);

        debug!("Drawing functional patterns...");
        qr.draw_all_function_patterns();

        debug!("Drawing encoding region...");
        qr.draw_encoding_region(payload);

        Ok(qr)
    }

    // ECC: Error Correction Codeword generator
    fn compute_ecc(data: &[u8], layout: BlockLayout) -> Vec<Block> {
        let gen_poly = generator_polynomial(layout.ecc_per_block);
        Self::blockify(data, layout)
            .into_iter()
            .map(|b| Block::new(b, layout.ecc_per_block, &gen_poly))
            .collect()
    }

    pub(crate) fn blockify(data: &[u8], layout: BlockLayout) -> Vec<&[u8]> {
        let block1_size = layout.data_per_block;
        let block2_size = block1_size + 1;
        let total_block1_size = block1_size * layout.block1_count;
        let total_size = total_block1_size + block2_size * layout.block2_count;

        debug_assert!(
            total_size == data.len(),
            "Data len doesn't match total size of blocks: Data len {}, Total block size {}",
            data.len(),
            total_size
        );

        let mut data_blocks = Vec::with_capacity(layout.block_count());
        data_blocks.extend(data[..total_block1_size].chunks(block1_size));
        if layout.block2_count > 0 {
            data_blocks.extend(data[total_block1_size..].chunks(block2_size));
        }
        data_blocks
    }

    pub fn interleave<T: Copy, V: Deref<Target = [T]>>(blocks: &[V]) -> Vec<T> {
        let max_block_size = blocks.iter().map(|b| b.len()).max().unwrap_or(0);
        let total_size = blocks.iter().map(|b| b.len()).sum::<usize>();
        let mut res = Vec::with_capacity(total_size);
        for i in 0..max_block_size {
            for b in blocks {
                if i < b.len() {
                    res.push(b[i]);
                }
            }
        }
        res
    }
}
