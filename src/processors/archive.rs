// webpdrop/src/processors/archive.rs
use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::core::store::ResultStore;
use crate::core::Result;

/// Fixed name offered for the bundle download.
pub const BUNDLE_FILE_NAME: &str = "converted_images.zip";

/// Serializes every current result into a single in-memory zip.
#[derive(Debug, Clone)]
pub struct BundleWriter {
    method: CompressionMethod,
}

impl BundleWriter {
    pub fn new() -> Self {
        Self {
            method: CompressionMethod::Deflated,
        }
    }

    /// Returns `None` for an empty store: requesting the bundle with nothing
    /// converted does nothing at all. Entries are written in the store's
    /// insertion order, one per result, named by output filename.
    pub fn bundle(&self, store: &ResultStore) -> Result<Option<Vec<u8>>> {
        if store.is_empty() {
            return Ok(None);
        }

        let mut buffer = Vec::new();
        let mut writer = ZipWriter::new(Cursor::new(&mut buffer));
        let options = SimpleFileOptions::default().compression_method(self.method);

        for (name, entry) in store.iter() {
            writer.start_file(name.as_str(), options)?;
            writer.write_all(&entry.data)?;
        }
        writer.finish()?;

        log::debug!("bundled {} results ({} bytes)", store.len(), buffer.len());

        Ok(Some(buffer))
    }
}

impl Default for BundleWriter {
    fn default() -> Self {
        Self::new()
    }
}
