//! Local photo loading
//!
//! Photo capture reads an image file from disk into an in-memory data URI
//! for display. Nothing is uploaded anywhere.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::{PhotoError, Result};

/// Supported image MIME types for recipe photos
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ImageMimeType {
    Jpeg,
    Png,
    Gif,
    WebP,
}

impl ImageMimeType {
    /// Detect MIME type from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "png" => Some(Self::Png),
            "gif" => Some(Self::Gif),
            "webp" => Some(Self::WebP),
            _ => None,
        }
    }

    /// The MIME string used in the data URI
    pub fn mime_str(&self) -> &'static str {
        match self {
            Self::Jpeg => "image/jpeg",
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::WebP => "image/webp",
        }
    }
}

/// A loaded recipe photo, held only in memory.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Photo {
    /// Embeddable `data:<mime>;base64,...` representation.
    pub data_uri: String,
    pub mime: ImageMimeType,
    pub byte_len: usize,
}

/// Read an image file and convert it to a displayable data URI.
///
/// The extension must name a supported image type; the file contents are
/// not sniffed.
pub fn load(path: &Path) -> Result<Photo> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .ok_or_else(|| PhotoError::MissingExtension(path.display().to_string()))?;

    let mime = ImageMimeType::from_extension(ext)
        .ok_or_else(|| PhotoError::UnsupportedType(ext.to_string()))?;

    let bytes = std::fs::read(path).map_err(PhotoError::Read)?;
    let byte_len = bytes.len();

    tracing::debug!(path = %path.display(), bytes = byte_len, "photo loaded");

    Ok(Photo {
        data_uri: format!("data:{};base64,{}", mime.mime_str(), STANDARD.encode(&bytes)),
        mime,
        byte_len,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_mime_from_extension() {
        assert_eq!(ImageMimeType::from_extension("jpg"), Some(ImageMimeType::Jpeg));
        assert_eq!(ImageMimeType::from_extension("jpeg"), Some(ImageMimeType::Jpeg));
        assert_eq!(ImageMimeType::from_extension("png"), Some(ImageMimeType::Png));
        assert_eq!(ImageMimeType::from_extension("gif"), Some(ImageMimeType::Gif));
        assert_eq!(ImageMimeType::from_extension("webp"), Some(ImageMimeType::WebP));
        assert_eq!(ImageMimeType::from_extension("bmp"), None);
    }

    #[test]
    fn test_mime_from_extension_is_case_insensitive() {
        assert_eq!(ImageMimeType::from_extension("PNG"), Some(ImageMimeType::Png));
        assert_eq!(ImageMimeType::from_extension("JpEg"), Some(ImageMimeType::Jpeg));
    }

    #[test]
    fn test_load_builds_data_uri() {
        let mut file = tempfile::Builder::new()
            .suffix(".png")
            .tempfile()
            .expect("temp file");
        file.write_all(&[0x89, 0x50, 0x4E, 0x47]).expect("write");

        let photo = load(file.path()).expect("load photo");

        assert!(photo.data_uri.starts_with("data:image/png;base64,"));
        assert_eq!(photo.mime, ImageMimeType::Png);
        assert_eq!(photo.byte_len, 4);
    }

    #[test]
    fn test_load_rejects_unknown_extension() {
        let file = tempfile::Builder::new()
            .suffix(".txt")
            .tempfile()
            .expect("temp file");

        let result = load(file.path());
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Unsupported image type"));
    }

    #[test]
    fn test_load_rejects_missing_extension() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("photo");
        std::fs::write(&path, b"data").expect("write");

        let result = load(&path);
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("no extension"));
    }

    #[test]
    fn test_load_reports_read_failure() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("missing.jpg");

        let result = load(&path);
        assert!(result.is_err());
        assert!(format!("{}", result.unwrap_err()).contains("Failed to read photo file"));
    }
}
