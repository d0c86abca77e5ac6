//! File attachments for assistant queries.

use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;
use base64::Engine;
use std::path::Path;
use syd_core::error::Result;

/// A file attached to a single assistant query.
///
/// At most one attachment travels with a query; it is cleared after being
/// sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    pub file_name: String,
    pub mime_type: String,
    pub data: Vec<u8>,
}

impl Attachment {
    /// Loads an attachment from disk, guessing the mime type from the
    /// extension.
    pub async fn from_path(path: &Path) -> Result<Self> {
        let data = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "attachment".to_string());
        let mime_type = mime_guess::from_path(path)
            .first_raw()
            .unwrap_or("application/octet-stream")
            .to_string();
        Ok(Self {
            file_name,
            mime_type,
            data,
        })
    }

    /// The base64 form sent inline to the model API.
    pub fn to_base64(&self) -> String {
        BASE64_STANDARD.encode(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_encoding() {
        let attachment = Attachment {
            file_name: "nota.txt".to_string(),
            mime_type: "text/plain".to_string(),
            data: b"ciao".to_vec(),
        };
        assert_eq!(attachment.to_base64(), "Y2lhbw==");
    }
}
