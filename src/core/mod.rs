// webpdrop/src/core/mod.rs
use thiserror::Error;

pub mod converter;
pub mod store;

/// The two fixed lossy WebP quality levels, selected by the optimize toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeQuality {
    /// Quality 95: larger files, better fidelity. The default.
    Fidelity,
    /// Quality 80: what the optimize toggle selects.
    Optimized,
}

impl EncodeQuality {
    pub fn from_optimize(optimize: bool) -> Self {
        if optimize {
            EncodeQuality::Optimized
        } else {
            EncodeQuality::Fidelity
        }
    }

    pub fn value(self) -> f32 {
        match self {
            EncodeQuality::Fidelity => 95.0,
            EncodeQuality::Optimized => 80.0,
        }
    }
}

/// A finished conversion, ready to be handed to the result store.
#[derive(Debug, Clone)]
pub struct ConversionResult {
    pub output_name: String,
    pub data: Vec<u8>,
    pub original_size: u64,
    pub converted_size: u64,
}

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("zip error: {0}")]
    Zip(#[from] zip::result::ZipError),

    #[error("decode failed: {0}")]
    Decode(String),

    #[error("encode failed: {0}")]
    Encode(String),

    #[error("unsupported media type: {0}")]
    UnsupportedType(String),

    #[error("duplicate output name: {0}")]
    DuplicateName(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
