//! # qrframe
//!
//! A Rust library that computes the module matrix of a byte mode QR Code
//! symbol, with Reed-Solomon error correction and automatic mask selection.
//!
//! ## Features
//!
//! - **Frame Generation**: Smallest fitting version (1-40) for a payload at error correction level L, M, Q or H
//! - **Reed-Solomon Error Correction**: Per block ecc over GF(2^8) with block interleaving
//! - **Mask Selection**: All eight masks scored with the four penalty rules, lowest score wins
//! - **Rendering**: Plain text, two tone terminal text and raster images of the produced frame
//!
//! ## Quick Start
//!
//! ### Simple Frame Generation
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! // Mirrors the `{ value, level }` interface
//! let frame = qrframe::generate("https://example.com", "L")?;
//!
//! assert_eq!(frame.width, 25);
//! assert_eq!(frame.buffer.len(), 25 * 25);
//! println!("{}", frame.to_two_tone());
//! # Ok(())
//! # }
//! ```
//!
//! ### Full Configuration
//!
//! ```rust
//! use qrframe::{ECLevel, ImageOptions, MaskPattern, OverflowPolicy, QRBuilder, Version};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let data = "Hello, World!";
//! let qr = QRBuilder::new(data.as_bytes())
//!     .version(Version::new(2)?)             // if not provided, finds smallest version to fit data
//!     .ec_level(ECLevel::M)                  // if not provided, defaults to ECLevel::L
//!     .mask(MaskPattern::new(3))             // if not provided, finds best mask based on penalty score
//!     .overflow(OverflowPolicy::Truncate)    // if not provided, oversized data is an error
//!     .build()?;
//!
//! let img = qr.to_frame().to_image(&ImageOptions { size: 200, ..Default::default() });
//! assert_eq!(img.dimensions(), (200, 200));
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Correction Levels
//! - **L (Low)**: ~7% error correction
//! - **M (Medium)**: ~15% error correction
//! - **Q (Quartile)**: ~25% error correction
//! - **H (High)**: ~30% error correction
//!
//! ## Logging
//!
//! Pipeline phases are reported through `tracing` at debug level, per mask
//! penalties at trace level. No subscriber is installed by the library.

#![allow(clippy::items_after_test_module)]

pub mod builder;
pub(crate) mod common;
pub mod render;

pub use builder::{Frame, QRBuilder, QR};
pub use common::codec::OverflowPolicy;
pub use common::error::{QRError, QRResult};
pub use common::mask::MaskPattern;
pub use common::metadata::{ECLevel, Metadata, Version};
pub use render::ImageOptions;

/// Builds the frame for `value` at the textual error correction `level`.
///
/// Chars are reduced to their low 8 bits. The level is validated before any
/// version search, and a value too long for version 40 is an error.
pub fn generate(value: &str, level: &str) -> QRResult<Frame> {
    let ec_level = level.parse::<ECLevel>()?;
    QRBuilder::from_text(value).ec_level(ec_level).build_frame()
}
