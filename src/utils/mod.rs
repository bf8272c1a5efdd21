// webpdrop/src/utils/mod.rs
use std::path::Path;

/// Extensions the output-name rule recognizes (and the picker filter offers).
pub const INPUT_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "gif", "bmp", "avif"];

/// Media type a file declares through its extension. `None` for unknown
/// extensions (including none at all).
pub fn media_type_for(path: &Path) -> Option<&'static str> {
    let ext = path.extension().and_then(|e| e.to_str())?.to_ascii_lowercase();
    match ext.as_str() {
        "jpg" | "jpeg" => Some("image/jpeg"),
        "png" => Some("image/png"),
        "gif" => Some("image/gif"),
        "bmp" => Some("image/bmp"),
        "avif" => Some("image/avif"),
        "webp" => Some("image/webp"),
        "svg" => Some("image/svg+xml"),
        "tif" | "tiff" => Some("image/tiff"),
        "ico" => Some("image/x-icon"),
        "txt" => Some("text/plain"),
        "pdf" => Some("application/pdf"),
        _ => None,
    }
}

/// Replaces a trailing jpg/jpeg/png/gif/bmp/avif suffix (case-insensitive)
/// with `.webp`. A name without such a suffix is returned unchanged, so a
/// file named `noext` keeps its name. That no-op is deliberate, not a bug.
pub fn webp_output_name(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, ext))
            if INPUT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known)) =>
        {
            format!("{}.webp", stem)
        }
        _ => name.to_string(),
    }
}

/// Byte count as kibibytes with one decimal, the way the preview card
/// displays sizes.
pub fn format_size_kb(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}
