// webpdrop/src/processors/intake.rs
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::core::converter::ConversionJob;
use crate::core::store::ResultStore;
use crate::core::{ConvertError, Result};
use crate::utils::{media_type_for, webp_output_name};

/// Exact allow-list of accepted input media types.
pub const SUPPORTED_MEDIA_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/png",
    "image/gif",
    "image/bmp",
    "image/avif",
];

/// Screens dropped or picked paths down to convertible jobs.
#[derive(Debug, Default, Clone)]
pub struct FileIntake;

impl FileIntake {
    pub fn new() -> Self {
        Self
    }

    /// Flattens a drop or picker selection: plain files pass through,
    /// directories are walked recursively. No filtering happens here; every
    /// collected file still goes through `screen`.
    pub fn expand(&self, candidates: &[PathBuf]) -> Vec<PathBuf> {
        let mut files = Vec::new();
        for candidate in candidates {
            if candidate.is_dir() {
                for entry in WalkDir::new(candidate).into_iter().filter_map(|e| e.ok()) {
                    if entry.file_type().is_file() {
                        files.push(entry.into_path());
                    }
                }
            } else {
                files.push(candidate.clone());
            }
        }
        files
    }

    /// Decides whether a single candidate file is converted. Rejections are
    /// typed so the caller can log them, but none of them is ever surfaced
    /// to the user.
    ///
    /// The duplicate check runs against the store as it is *now*; files
    /// already in flight are not guarded, so two conversions can still race
    /// to the same key (the store resolves that as last-writer-wins).
    pub fn screen(&self, path: &Path, store: &ResultStore) -> Result<ConversionJob> {
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                ConvertError::InvalidInput(format!("unusable file name: {}", path.display()))
            })?;

        let media_type = media_type_for(path).unwrap_or("application/octet-stream");
        if !media_type.starts_with("image/") {
            return Err(ConvertError::UnsupportedType(media_type.to_string()));
        }
        if !SUPPORTED_MEDIA_TYPES.contains(&media_type) {
            return Err(ConvertError::UnsupportedType(media_type.to_string()));
        }

        let output_name = webp_output_name(file_name);
        if store.contains(&output_name) {
            return Err(ConvertError::DuplicateName(output_name));
        }

        Ok(ConversionJob {
            path: path.to_path_buf(),
            output_name,
        })
    }
}
