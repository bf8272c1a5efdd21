// webpdrop/src/core/converter.rs
use std::path::PathBuf;

use crossbeam_channel::Sender;
use image::{GenericImage, GenericImageView, RgbaImage};

use super::{ConversionResult, ConvertError, EncodeQuality, Result};
use crate::processors::WebpEncoder;

/// An accepted file together with the output name intake computed for it.
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub path: PathBuf,
    pub output_name: String,
}

/// Runs one conversion synchronously: read, decode, redraw onto an RGBA
/// surface of the natural dimensions, encode to lossy WebP.
pub fn convert_file(job: &ConversionJob, quality: EncodeQuality) -> Result<ConversionResult> {
    let data = std::fs::read(&job.path)?;
    let original_size = data.len() as u64;

    let decoded = image::load_from_memory(&data)
        .map_err(|e| ConvertError::Decode(format!("{}: {}", job.path.display(), e)))?;

    // Fresh surface at the decoded image's natural size, drawn at the origin.
    // No scaling, cropping, or color transformation.
    let (width, height) = decoded.dimensions();
    let mut surface = RgbaImage::new(width, height);
    surface.copy_from(&decoded.to_rgba8(), 0, 0)?;

    let encoded = WebpEncoder::new(quality).encode(&surface)?;

    log::debug!(
        "converted {} -> {} ({} -> {} bytes)",
        job.path.display(),
        job.output_name,
        original_size,
        encoded.len()
    );

    Ok(ConversionResult {
        output_name: job.output_name.clone(),
        original_size,
        converted_size: encoded.len() as u64,
        data: encoded,
    })
}

/// Dispatches a job onto the rayon pool, fire-and-forget. The outcome comes
/// back over `tx` so the UI thread can balance its in-flight count; a failed
/// conversion produces no result and is only visible in the debug log.
/// No retry, no cancellation.
pub fn spawn(job: ConversionJob, quality: EncodeQuality, tx: Sender<Result<ConversionResult>>) {
    rayon::spawn(move || {
        let outcome = convert_file(&job, quality);
        if let Err(err) = &outcome {
            log::debug!("conversion of {} dropped: {}", job.path.display(), err);
        }
        let _ = tx.send(outcome);
    });
}
