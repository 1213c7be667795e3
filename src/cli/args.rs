//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::application::services::ExportView;

/// Vineyard planting dataset: block/varietal trees, planting statistics and CSV export
#[derive(Parser, Debug)]
#[command(name = "vineyard")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub debug: u8,

    /// Planting dataset (overrides config)
    #[arg(short = 'f', long, global = true, env = "VINEYARD_DATASET", value_hint = ValueHint::FilePath)]
    pub dataset: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show planting statistics
    Stats {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Show plantings grouped by block: block -> varietal -> clone
    Blocks {
        /// Only blocks matching this term (case-insensitive, any level)
        #[arg(short, long)]
        search: Option<String>,
        /// Emit JSON instead of a tree
        #[arg(long)]
        json: bool,
    },

    /// Show plantings grouped by varietal: varietal -> clone -> blocks
    Varietals {
        /// Only varietals matching this term (case-insensitive, any level)
        #[arg(short, long)]
        search: Option<String>,
        /// Emit JSON instead of a tree
        #[arg(long)]
        json: bool,
    },

    /// Write plantings as CSV
    Export {
        /// Page the export belongs to (selects the default file name)
        #[arg(long, value_enum, default_value_t = ExportView::Plantings)]
        view: ExportView,
        /// Output file (default: <export_dir>/<file name for view>)
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Show an item list, active items first
    Items {
        /// Items file (default: from config)
        #[arg(value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
    },

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Print a commented config template
    Template,
    /// Show config file locations
    Path,
}
