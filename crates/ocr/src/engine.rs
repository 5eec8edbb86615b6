//! Engine-agnostic recognition contract.

use std::path::Path;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::OcrError;

/// One recognized text fragment with its bounding quadrilateral.
///
/// The quad holds the four corner points reported by the engine in image
/// pixel coordinates, ordered top-left, top-right, bottom-right,
/// bottom-left. Engines detect rotated or skewed text, so the quad is not
/// necessarily axis-aligned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawToken {
    /// Recognized text, exactly as reported (not trimmed).
    pub text: String,
    /// Corner points `[x, y]` of the detected text box.
    pub quad: [[f64; 2]; 4],
    /// Engine confidence in `0.0..=1.0`.
    pub score: f64,
}

impl RawToken {
    /// Center of the bounding quad: the arithmetic mean of the corners.
    pub fn center(&self) -> (f64, f64) {
        let cx = self.quad.iter().map(|p| p[0]).sum::<f64>() / 4.0;
        let cy = self.quad.iter().map(|p| p[1]).sum::<f64>() / 4.0;
        (cx, cy)
    }
}

/// A text recognition engine.
///
/// Engines read an image already staged on disk and return every text
/// fragment they locate, in the engine's reading order (top to bottom for
/// the layouts this pipeline handles). Implementations wrap external
/// engines; everything downstream of this trait is engine-agnostic.
#[async_trait]
pub trait OcrEngine: Send + Sync {
    /// Stable identifier used in logs, e.g. `"PADDLE_REMOTE"`.
    fn id(&self) -> &'static str;

    /// Recognize all text fragments in the image at `image_path`.
    async fn recognize(&self, image_path: &Path) -> Result<Vec<RawToken>, OcrError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_is_mean_of_corners() {
        let token = RawToken {
            text: "腾讯控股".to_string(),
            quad: [[10.0, 20.0], [110.0, 20.0], [110.0, 48.0], [10.0, 48.0]],
            score: 0.98,
        };
        assert_eq!(token.center(), (60.0, 34.0));
    }

    #[test]
    fn test_center_of_skewed_quad() {
        let token = RawToken {
            text: "1,234".to_string(),
            quad: [[0.0, 0.0], [10.0, 2.0], [12.0, 10.0], [2.0, 8.0]],
            score: 0.9,
        };
        assert_eq!(token.center(), (6.0, 5.0));
    }

    #[test]
    fn test_raw_token_round_trips_through_json() {
        let token = RawToken {
            text: "市值".to_string(),
            quad: [[780.0, 90.0], [820.0, 90.0], [820.0, 112.0], [780.0, 112.0]],
            score: 0.97,
        };
        let json = serde_json::to_string(&token).unwrap();
        let back: RawToken = serde_json::from_str(&json).unwrap();
        assert_eq!(back, token);
    }
}
