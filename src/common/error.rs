use thiserror::Error;

// Error
//------------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum QRError {
    #[error("Data too long: {len} bytes, capacity {capacity} bytes")]
    DataTooLong { len: usize, capacity: usize },

    #[error("Invalid version: {0}")]
    InvalidVersion(u8),

    #[error("Invalid error correction level: {0:?}")]
    InvalidECLevel(String),

    #[error("Invalid masking pattern: {0}")]
    InvalidMaskingPattern(u8),
}

pub type QRResult<T> = Result<T, QRError>;
