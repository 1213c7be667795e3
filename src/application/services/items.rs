//! Item list service

use std::path::Path;
use std::sync::Arc;

use tracing::{debug, instrument};

use crate::application::{ApplicationError, ApplicationResult, IoResultExt};
use crate::domain::{order_items, Item};
use crate::infrastructure::traits::FileSystem;

pub struct ItemService {
    fs: Arc<dyn FileSystem>,
}

impl ItemService {
    pub fn new(fs: Arc<dyn FileSystem>) -> Self {
        Self { fs }
    }

    /// Load items from a JSON array, active items first.
    #[instrument(level = "debug", skip(self))]
    pub fn load(&self, path: &Path) -> ApplicationResult<Vec<Item>> {
        let content = self
            .fs
            .read_to_string(path)
            .with_path_context("read items", path)?;
        let items: Vec<Item> =
            serde_json::from_str(&content).map_err(|e| ApplicationError::InvalidData {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;
        debug!("load: {} items", items.len());
        Ok(order_items(items))
    }
}
