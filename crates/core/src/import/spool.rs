//! On-disk staging for uploaded images.
//!
//! Engines read files, not byte buffers, so each upload is written to
//! the spool directory for the duration of recognition. A staged file is
//! deleted when its guard drops, whichever way the import exits.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::warn;
use uuid::Uuid;

use crate::constants::SPOOL_FILE_PREFIX;

/// A staged image, deleted on drop.
#[derive(Debug)]
pub struct SpooledImage {
    path: PathBuf,
}

impl SpooledImage {
    /// Write `content` into `dir` under a collision-free name derived
    /// from `file_name`. Directory components in `file_name` are
    /// discarded, so uploads cannot escape the spool directory.
    pub fn write(dir: &Path, file_name: &str, content: &[u8]) -> io::Result<Self> {
        fs::create_dir_all(dir)?;

        let base = Path::new(file_name)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "screenshot".to_string());
        let path = dir.join(format!("{}{}-{}", SPOOL_FILE_PREFIX, Uuid::new_v4(), base));
        fs::write(&path, content)?;

        Ok(Self { path })
    }

    /// Adopt an existing file, e.g. a preprocessor's derived image, so it
    /// is deleted along the same path as staged uploads.
    pub fn adopt(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for SpooledImage {
    fn drop(&mut self) {
        if let Err(err) = fs::remove_file(&self.path) {
            if err.kind() != io::ErrorKind::NotFound {
                warn!(
                    "Failed to remove spooled image {}: {}",
                    self.path.display(),
                    err
                );
            }
        }
    }
}
