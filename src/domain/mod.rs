//! Domain layer: entities and pure transformations
//!
//! This layer is independent of external concerns (no I/O, no CLI, no config loading).

pub mod entities;
pub mod error;
pub mod export;
pub mod items;
pub mod stats;
pub mod tree;
pub mod view;

pub use entities::*;
pub use error::DomainError;
pub use export::{export_to_csv, CSV_HEADER};
pub use items::{order_items, Item};
pub use stats::{calculate_stats, chart_series, ChartPoint, VineyardStats};
pub use tree::{build_block_tree, build_varietal_tree};
pub use view::{filter_block_tree, filter_varietal_tree, sort_block_tree, sort_varietal_tree};
