//! Remote OCR engine backed by a PaddleOCR-style serving endpoint.
//!
//! The endpoint is expected to speak the PaddleOCR `hub serving`
//! protocol:
//!
//! - Request: `{"images": ["<base64>"]}`
//! - Response: `{"status": "000", "results": [[{"text", "confidence",
//!   "text_region"}, ...]]}` with one token list per submitted image
//!
//! Transport-level failures (connect refused, timeout) map to
//! [`OcrError::EngineUnavailable`]; everything the engine itself reports
//! maps to [`OcrError::RecognitionFailed`].

use std::path::Path;
use std::time::Duration;

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::engine::{OcrEngine, RawToken};
use crate::errors::OcrError;

const ENGINE_ID: &str = "PADDLE_REMOTE";

/// Default HTTP request timeout. Recognizing a full-resolution phone
/// screenshot routinely takes a few seconds on CPU-only servers.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Status code the serving protocol uses for success.
const STATUS_OK: &str = "000";

/// Connection settings for [`RemoteOcrEngine`].
#[derive(Debug, Clone)]
pub struct RemoteOcrConfig {
    /// Full URL of the recognition endpoint, e.g.
    /// `http://127.0.0.1:8868/predict/ocr_system`.
    pub endpoint: String,
    /// Per-request timeout.
    pub timeout: Duration,
    /// Tokens scoring below this confidence are dropped before they reach
    /// the caller. Zero keeps everything the engine returns.
    pub min_score: f64,
}

impl RemoteOcrConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout: REQUEST_TIMEOUT,
            min_score: 0.0,
        }
    }
}

#[derive(Debug, Serialize)]
struct ServingRequest {
    images: Vec<String>,
}

/// Response envelope of the serving protocol.
#[derive(Debug, Deserialize)]
struct ServingResponse {
    /// `"000"` on success, an engine-specific code otherwise.
    status: String,
    /// Human-readable message accompanying a non-success status.
    #[serde(default)]
    msg: String,
    /// One token list per submitted image.
    #[serde(default)]
    results: Vec<Vec<ServingToken>>,
}

#[derive(Debug, Deserialize)]
struct ServingToken {
    text: String,
    #[serde(default)]
    confidence: f64,
    /// Four `[x, y]` corners of the detected box.
    text_region: [[f64; 2]; 4],
}

/// OCR engine client for a remote PaddleOCR serving endpoint.
///
/// # Example
///
/// ```ignore
/// let config = RemoteOcrConfig::new("http://127.0.0.1:8868/predict/ocr_system");
/// let engine = RemoteOcrEngine::new(config);
/// let tokens = engine.recognize(Path::new("/tmp/shot.png")).await?;
/// ```
pub struct RemoteOcrEngine {
    client: Client,
    config: RemoteOcrConfig,
}

impl RemoteOcrEngine {
    /// Create a client for the given endpoint configuration.
    pub fn new(config: RemoteOcrConfig) -> Self {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self { client, config }
    }

    /// Post one base64-encoded image and decode the response envelope.
    async fn post_image(&self, encoded: String) -> Result<ServingResponse, OcrError> {
        let request = ServingRequest {
            images: vec![encoded],
        };

        let response = self
            .client
            .post(&self.config.endpoint)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    OcrError::EngineUnavailable {
                        message: e.to_string(),
                    }
                } else {
                    OcrError::RecognitionFailed {
                        message: e.to_string(),
                    }
                }
            })?;

        if !response.status().is_success() {
            return Err(OcrError::RecognitionFailed {
                message: format!("HTTP error: {}", response.status()),
            });
        }

        response
            .json::<ServingResponse>()
            .await
            .map_err(|e| OcrError::RecognitionFailed {
                message: format!("Failed to parse response: {}", e),
            })
    }

    /// Flatten the response envelope into tokens, enforcing the score
    /// floor.
    fn collect_tokens(&self, response: ServingResponse) -> Result<Vec<RawToken>, OcrError> {
        if response.status != STATUS_OK {
            return Err(OcrError::RecognitionFailed {
                message: format!("Engine status {}: {}", response.status, response.msg),
            });
        }

        let tokens = response
            .results
            .into_iter()
            .flatten()
            .filter(|token| token.confidence >= self.config.min_score)
            .map(|token| RawToken {
                text: token.text,
                quad: token.text_region,
                score: token.confidence,
            })
            .collect();

        Ok(tokens)
    }
}

#[async_trait]
impl OcrEngine for RemoteOcrEngine {
    fn id(&self) -> &'static str {
        ENGINE_ID
    }

    async fn recognize(&self, image_path: &Path) -> Result<Vec<RawToken>, OcrError> {
        let bytes = std::fs::read(image_path)?;
        if bytes.is_empty() {
            return Err(OcrError::InvalidImage(format!(
                "{} is empty",
                image_path.display()
            )));
        }

        let response = self.post_image(BASE64.encode(&bytes)).await?;
        let tokens = self.collect_tokens(response)?;

        debug!(
            "Engine {} recognized {} tokens in {}",
            ENGINE_ID,
            tokens.len(),
            image_path.display()
        );

        Ok(tokens)
    }
}
