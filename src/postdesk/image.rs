//! Image attachment encoding.
//!
//! A selected image is stored inline with the post as a data URI
//! (`data:<mime>;base64,<bytes>`), so a post stays a single self-contained
//! document. Nothing is resized or recompressed.

use crate::error::EncodingError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use std::path::{Path, PathBuf};
use tokio::fs;

/// What the file picker handed us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageSource {
    /// The picker was dismissed or emptied.
    None,
    File(PathBuf),
}

impl ImageSource {
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => ImageSource::File(path),
            None => ImageSource::None,
        }
    }
}

/// Reads the selected file and encodes it.
///
/// `Ok(None)` means no file was selected, which clears the attachment.
pub async fn encode(source: &ImageSource) -> Result<Option<String>, EncodingError> {
    let path = match source {
        ImageSource::None => return Ok(None),
        ImageSource::File(path) => path,
    };

    let bytes = fs::read(path)
        .await
        .map_err(|source| EncodingError::Unreadable {
            path: path.clone(),
            source,
        })?;
    if bytes.is_empty() {
        return Err(EncodingError::Empty(path.clone()));
    }

    let mime = mime_for_path(path);
    tracing::debug!(path = %path.display(), mime, bytes = bytes.len(), "encoded image");
    Ok(Some(to_data_uri(mime, &bytes)))
}

pub fn to_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// Guesses the MIME type from the file extension.
pub fn mime_for_path(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "avif" => "image/avif",
        "bmp" => "image/bmp",
        "svg" => "image/svg+xml",
        "tif" | "tiff" => "image/tiff",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn no_file_selected_resolves_to_none() {
        assert_eq!(encode(&ImageSource::None).await.unwrap(), None);
    }

    #[tokio::test]
    async fn encodes_file_as_data_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pixel.PNG");
        std::fs::write(&path, [0x89, b'P', b'N', b'G']).unwrap();

        let payload = encode(&ImageSource::File(path)).await.unwrap().unwrap();
        assert_eq!(payload, "data:image/png;base64,iVBORw==");
    }

    #[tokio::test]
    async fn missing_file_is_an_encoding_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.jpg");

        let err = encode(&ImageSource::File(path.clone())).await.unwrap_err();
        match err {
            EncodingError::Unreadable { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[tokio::test]
    async fn empty_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.gif");
        std::fs::write(&path, b"").unwrap();

        assert!(matches!(
            encode(&ImageSource::File(path)).await,
            Err(EncodingError::Empty(_))
        ));
    }

    #[test]
    fn mime_lookup() {
        assert_eq!(mime_for_path(Path::new("a.jpeg")), "image/jpeg");
        assert_eq!(mime_for_path(Path::new("a.webp")), "image/webp");
        assert_eq!(mime_for_path(Path::new("noext")), "application/octet-stream");
    }

    #[test]
    fn source_from_optional_path() {
        assert_eq!(ImageSource::from_path(None), ImageSource::None);
        assert_eq!(
            ImageSource::from_path(Some(PathBuf::from("x.png"))),
            ImageSource::File(PathBuf::from("x.png"))
        );
    }
}
