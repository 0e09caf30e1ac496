use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::anyhow;
use base64::{engine::general_purpose, Engine as _};
use once_cell::sync::Lazy;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::error::{CardForgeError, Result};

/// Encoded-image cache: avoids re-reading and re-encoding the same file.
static IMAGE_CACHE: Lazy<Arc<RwLock<HashMap<String, ImageAttachment>>>> =
    Lazy::new(|| Arc::new(RwLock::new(HashMap::new())));

const CACHE_CAPACITY: usize = 100;
const LARGE_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// A base64-encoded image riding along with an LLM request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttachment {
    pub mime: String,
    pub base64: String,
}

impl ImageAttachment {
    pub fn new(mime: impl Into<String>, base64: impl Into<String>) -> Self {
        Self {
            mime: mime.into(),
            base64: base64.into(),
        }
    }

    /// Reads an image file, sniffs its format and encodes it as base64.
    pub fn from_path(path: &str) -> Result<Self> {
        {
            let cache = IMAGE_CACHE.read();
            if let Some(cached) = cache.get(path) {
                tracing::debug!(path = %path, "using cached image attachment");
                return Ok(cached.clone());
            }
        }

        if !Path::new(path).exists() {
            return Err(CardForgeError::Other(anyhow!("image file not found: {}", path)));
        }

        let data = std::fs::read(path)
            .map_err(|e| CardForgeError::Other(anyhow!("failed to read image file {}: {}", path, e)))?;

        if data.len() > LARGE_IMAGE_BYTES {
            tracing::warn!(
                path = %path,
                size_mb = data.len() / (1024 * 1024),
                "image file is large; consider compressing it before attaching"
            );
        }

        let format = image::guess_format(&data)
            .map_err(|e| CardForgeError::Other(anyhow!("unrecognized image format for {}: {}", path, e)))?;

        let attachment = Self {
            mime: format.to_mime_type().to_string(),
            base64: general_purpose::STANDARD.encode(&data),
        };

        {
            let mut cache = IMAGE_CACHE.write();
            if cache.len() >= CACHE_CAPACITY {
                if let Some(key) = cache.keys().next().cloned() {
                    cache.remove(&key);
                }
            }
            cache.insert(path.to_string(), attachment.clone());
        }

        Ok(attachment)
    }

    /// Parses a `data:<mime>;base64,<payload>` URL.
    pub fn from_data_url(url: &str) -> Result<Self> {
        let rest = url
            .strip_prefix("data:")
            .ok_or_else(|| CardForgeError::Other(anyhow!("not a data URL: {}", url)))?;
        let (mime, payload) = rest
            .split_once(";base64,")
            .ok_or_else(|| CardForgeError::Other(anyhow!("data URL is not base64-encoded")))?;
        if mime.is_empty() {
            return Err(CardForgeError::Other(anyhow!("data URL has no media type")));
        }
        Ok(Self::new(mime, payload))
    }

    pub fn data_url(&self) -> String {
        format!("data:{};base64,{}", self.mime, self.base64)
    }

    pub fn clear_cache() {
        IMAGE_CACHE.write().clear();
    }

    pub fn cache_size() -> usize {
        IMAGE_CACHE.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_data_url_round_trip() {
        let attachment = ImageAttachment::new("image/png", "aGVsbG8=");
        let url = attachment.data_url();
        assert_eq!(url, "data:image/png;base64,aGVsbG8=");
        assert_eq!(ImageAttachment::from_data_url(&url).unwrap(), attachment);
    }

    #[test]
    fn test_from_data_url_rejects_plain_text() {
        assert!(ImageAttachment::from_data_url("hello world").is_err());
        assert!(ImageAttachment::from_data_url("data:image/png,plain").is_err());
    }

    #[test]
    fn test_from_path_sniffs_png() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        // PNG magic followed by filler; format sniffing only reads the magic.
        file.write_all(b"\x89PNG\r\n\x1a\nrest-of-file").unwrap();

        let path = file.path().to_str().unwrap().to_string();
        let attachment = ImageAttachment::from_path(&path).unwrap();
        assert_eq!(attachment.mime, "image/png");
        assert!(!attachment.base64.is_empty());
    }

    #[test]
    fn test_from_path_missing_file() {
        assert!(ImageAttachment::from_path("/definitely/not/here.png").is_err());
    }
}
