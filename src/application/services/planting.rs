//! Planting dataset service
//!
//! Loads the raw `block.varietal.clone` dataset and derives the dashboard views from it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::ValueEnum;
use serde::Serialize;
use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{
    build_block_tree, build_varietal_tree, calculate_stats, export_to_csv, parse_entries,
    BlockNode, PlantingEntry, VarietalNode, VineyardStats,
};
use crate::infrastructure::traits::FileSystem;

/// Everything the dashboard shows, each part computed independently from the entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard {
    pub stats: VineyardStats,
    pub block_tree: Vec<BlockNode>,
    pub varietal_tree: Vec<VarietalNode>,
}

/// Page a CSV export originates from; only selects the default file name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportView {
    Plantings,
    Blocks,
    Varietals,
}

/// Service for loading planting data and deriving views from it.
pub struct PlantingService {
    fs: Arc<dyn FileSystem>,
}

impl PlantingService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Load a JSON array of raw entry strings and parse it.
    ///
    /// Fails on the first malformed entry; nothing is returned for a partial batch.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<Vec<PlantingEntry>> {
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read dataset", path)?;
        let raws: Vec<String> =
            serde_json::from_str(&content).map_err(|e| ApplicationError::InvalidData {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let entries = parse_entries(&raws)?;
        debug!("load: parsed {} entries", entries.len());
        Ok(entries)
    }

    pub fn dashboard(&self, entries: &[PlantingEntry]) -> Dashboard {
        Dashboard {
            stats: calculate_stats(entries),
            block_tree: build_block_tree(entries),
            varietal_tree: build_varietal_tree(entries),
        }
    }

    /// Write the CSV export of `entries` to `path`, creating parent directories.
    #[instrument(level = "debug", skip(self, entries), fields(entries = entries.len()))]
    pub fn export_csv(&self, entries: &[PlantingEntry], path: &Path) -> ApplicationResult<PathBuf> {
        let csv = export_to_csv(entries);
        self.fs
            .ensure_parent(path)
            .with_path_context("create export directory", path)?;
        self.fs
            .write(path, &csv)
            .with_path_context("write csv", path)?;
        debug!("export_csv: wrote {} bytes", csv.len());
        Ok(path.to_path_buf())
    }
}
