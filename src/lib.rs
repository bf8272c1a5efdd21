pub mod app;
pub mod cli;
pub mod core;
pub mod processors;
pub mod utils;

pub use crate::core::converter::{convert_file, ConversionJob};
pub use crate::core::store::{ResultStore, StoredEntry};
pub use crate::core::{ConversionResult, ConvertError, EncodeQuality, Result};
pub use crate::processors::{BundleWriter, FileIntake, WebpEncoder, BUNDLE_FILE_NAME, SUPPORTED_MEDIA_TYPES};
pub use crate::utils::{format_size_kb, media_type_for, webp_output_name, INPUT_EXTENSIONS};

pub mod prelude {
    pub use crate::{
        BundleWriter, ConversionResult, EncodeQuality, FileIntake, ResultStore, WebpEncoder,
    };
}

// Re-export commonly used types
pub use image::RgbaImage;
