//! Image preparation ahead of recognition.

use std::path::{Path, PathBuf};

use crate::errors::OcrError;

/// Prepares an image for recognition.
///
/// Production implementations upscale small captures and boost contrast
/// before the engine sees them. A preprocessor may return the input path
/// unchanged or the path of a derived file it wrote; the caller deletes a
/// derived file once recognition is done.
pub trait ImagePreprocessor: Send + Sync {
    /// Produce the image the engine should read, given the staged input.
    fn prepare(&self, image_path: &Path) -> Result<PathBuf, OcrError>;
}

/// No-op preprocessor: hands the staged image to the engine as-is.
///
/// Used when the serving endpoint does its own preprocessing, and in
/// tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct PassthroughPreprocessor;

impl ImagePreprocessor for PassthroughPreprocessor {
    fn prepare(&self, image_path: &Path) -> Result<PathBuf, OcrError> {
        Ok(image_path.to_path_buf())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passthrough_returns_input_path() {
        let preprocessor = PassthroughPreprocessor;
        let path = Path::new("/tmp/shot.png");
        assert_eq!(preprocessor.prepare(path).unwrap(), path.to_path_buf());
    }
}
