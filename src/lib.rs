//! Vineyard planting data: parsing, block/varietal groupings, statistics and CSV export.
//!
//! Layers:
//! - [`domain`]: pure transformations over `block.varietal.clone` entries
//! - [`application`]: services loading datasets through the [`infrastructure`] filesystem trait
//! - [`cli`]: argument parsing, command dispatch and terminal rendering

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod infrastructure;
pub mod util;

pub use domain::{
    build_block_tree, build_varietal_tree, calculate_stats, export_to_csv, parse_entries,
    parse_entry, DomainError, PlantingEntry, VineyardStats,
};
