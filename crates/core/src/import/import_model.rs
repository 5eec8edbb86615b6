//! Inbound batch payloads.

use serde::{Deserialize, Serialize};

/// One uploaded screenshot, as received from the UI layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenshotFile {
    /// Client-side file name, used for log context and spool naming.
    pub file_name: String,
    /// Raw image bytes.
    pub content: Vec<u8>,
}

impl ScreenshotFile {
    pub fn new(file_name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            content,
        }
    }
}
