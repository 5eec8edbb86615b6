//! Screenshot import orchestration.

use std::path::PathBuf;
use std::sync::Arc;

use chrono::{Local, NaiveDate};
use log::{error, info, warn};
use rust_decimal::Decimal;
use uuid::Uuid;

use snapfolio_ocr::{ImagePreprocessor, OcrEngine, OcrError, PassthroughPreprocessor};

use crate::constants::DEFAULT_SPOOL_DIR_NAME;
use crate::errors::Result;
use crate::holdings::{Holding, HoldingsSnapshot, SnapshotAggregator};
use crate::screenshot::{TableConfig, TableParser};

use super::import_model::ScreenshotFile;
use super::spool::SpooledImage;

/// Orchestrates one screenshot batch: stage, recognize, parse, merge.
///
/// Files are processed sequentially in upload order. A recognition
/// failure on one file only costs that file's holdings; an unreachable
/// engine aborts the whole batch.
pub struct ScreenshotImportService {
    engine: Arc<dyn OcrEngine>,
    preprocessor: Arc<dyn ImagePreprocessor>,
    parser: TableParser,
    spool_dir: PathBuf,
}

impl ScreenshotImportService {
    pub fn new(
        engine: Arc<dyn OcrEngine>,
        preprocessor: Arc<dyn ImagePreprocessor>,
        config: TableConfig,
        spool_dir: PathBuf,
    ) -> Self {
        Self {
            engine,
            preprocessor,
            parser: TableParser::new(config),
            spool_dir,
        }
    }

    /// Service with passthrough preprocessing, default table tuning and
    /// a spool under the system temp directory.
    pub fn with_defaults(engine: Arc<dyn OcrEngine>) -> Self {
        Self::new(
            engine,
            Arc::new(PassthroughPreprocessor),
            TableConfig::default(),
            std::env::temp_dir().join(DEFAULT_SPOOL_DIR_NAME),
        )
    }

    /// Import a batch of screenshots into one holdings snapshot.
    ///
    /// `as_of` defaults to today in local time. When no file in the
    /// batch yields a single holding, the import fails with
    /// [`crate::holdings::HoldingsError::NoHoldingsRecognized`].
    pub async fn import_screenshots(
        &self,
        files: &[ScreenshotFile],
        as_of: Option<NaiveDate>,
    ) -> Result<HoldingsSnapshot> {
        let import_run_id = Uuid::new_v4().to_string();
        info!(
            "Starting screenshot import {} with {} files via engine {}",
            import_run_id,
            files.len(),
            self.engine.id()
        );

        let mut aggregator = SnapshotAggregator::new();
        for file in files {
            match self.process_file(file).await {
                Ok(holdings) => aggregator.extend(holdings),
                Err(err @ OcrError::EngineUnavailable { .. }) => {
                    error!(
                        "OCR engine unavailable, aborting import {}: {}",
                        import_run_id, err
                    );
                    return Err(err.into());
                }
                Err(err) => {
                    warn!("Skipping {}: {}", file.file_name, err);
                }
            }
        }

        let holdings = aggregator.finish()?;
        let total_market_value: Decimal = holdings.iter().map(|h| h.market_value).sum();

        info!(
            "Import {} produced {} holdings worth {}",
            import_run_id,
            holdings.len(),
            total_market_value
        );

        Ok(HoldingsSnapshot {
            as_of: as_of.unwrap_or_else(|| Local::now().date_naive()),
            holdings,
            total_market_value,
            files_processed: files.len(),
            import_run_id,
        })
    }

    /// Stage, preprocess and recognize one file, then parse its table.
    ///
    /// The staged copy (and a derived preprocessor output, if any) is
    /// removed before this returns, on success and on error alike.
    async fn process_file(&self, file: &ScreenshotFile) -> std::result::Result<Vec<Holding>, OcrError> {
        let staged = SpooledImage::write(&self.spool_dir, &file.file_name, &file.content)?;

        let prepared = self.preprocessor.prepare(staged.path())?;
        let _derived = if prepared != staged.path() {
            Some(SpooledImage::adopt(prepared.clone()))
        } else {
            None
        };

        let raw = self.engine.recognize(&prepared).await?;
        Ok(self.parser.parse_raw(&file.file_name, &raw))
    }
}
