//! Command dispatch: load settings, wire services, render results.

use std::io;
use std::path::{Path, PathBuf};

use clap::CommandFactory;
use serde::Serialize;
use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::services::ExportView;
use crate::cli::args::{Cli, Commands, ConfigCommands};
use crate::cli::output;
use crate::cli::{CliError, CliResult};
use crate::config::{global_config_path, local_config_path, Settings};
use crate::domain::{
    build_block_tree, build_varietal_tree, calculate_stats, chart_series, filter_block_tree,
    filter_varietal_tree, sort_block_tree, sort_varietal_tree, BlockNode, VarietalNode,
    VineyardStats,
};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraError;

pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let command = match &cli.command {
        Some(command) => command,
        None => {
            return Err(CliError::Usage(
                "no command given, see --help".to_string(),
            ))
        }
    };

    if let Commands::Completion { shell } = command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(*shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    let cwd = std::env::current_dir().ok();
    let mut settings = Settings::load(cwd.as_deref())?;
    if let Some(dataset) = &cli.dataset {
        settings.dataset = dataset.clone();
    }
    debug!("settings: {:?}", settings);
    let container = ServiceContainer::new(settings);

    match command {
        Commands::Stats { json } => cmd_stats(&container, *json),
        Commands::Blocks { search, json } => cmd_blocks(&container, search.as_deref(), *json),
        Commands::Varietals { search, json } => {
            cmd_varietals(&container, search.as_deref(), *json)
        }
        Commands::Export { view, output } => cmd_export(&container, *view, output.as_deref()),
        Commands::Items { file } => cmd_items(&container, file.as_deref()),
        Commands::Config { command } => cmd_config(&container, command, cwd.as_deref()),
        Commands::Completion { .. } => Ok(()),
    }
}

fn print_json<T: Serialize>(what: &str, value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value).map_err(|e| InfraError::serialize(what, e))?;
    output::info(&json);
    Ok(())
}

#[instrument(skip(container))]
fn cmd_stats(container: &ServiceContainer, json: bool) -> CliResult<()> {
    let entries = container.plantings.load(&container.settings.dataset)?;
    let stats = calculate_stats(&entries);
    if json {
        return print_json("stats", &stats);
    }
    render_stats(&stats);
    Ok(())
}

fn render_stats(stats: &VineyardStats) {
    output::header("Vineyard");
    output::action("Total blocks", &stats.total_blocks);
    output::action("Total varietals", &stats.total_varietals);
    output::action("Total clones", &stats.total_clones);
    output::action("Most planted", &stats.most_planted_varietal);

    output::header("Varietal distribution");
    for point in chart_series(&stats.varietal_distribution) {
        output::detail(&format!("{}: {}", point.name, point.value));
    }
    output::header("Clone count per varietal");
    for point in chart_series(&stats.clone_count_per_varietal) {
        output::detail(&format!("{}: {}", point.name, point.value));
    }
}

#[instrument(skip(container))]
fn cmd_blocks(container: &ServiceContainer, search: Option<&str>, json: bool) -> CliResult<()> {
    let entries = container.plantings.load(&container.settings.dataset)?;
    let mut blocks = filter_block_tree(&build_block_tree(&entries), search.unwrap_or_default());
    sort_block_tree(&mut blocks);
    if json {
        return print_json("block tree", &blocks);
    }
    if blocks.is_empty() {
        output::warning("no matching blocks");
        return Ok(());
    }
    output::info(&block_tree_display(&blocks));
    Ok(())
}

#[instrument(skip(container))]
fn cmd_varietals(container: &ServiceContainer, search: Option<&str>, json: bool) -> CliResult<()> {
    let entries = container.plantings.load(&container.settings.dataset)?;
    let mut varietals =
        filter_varietal_tree(&build_varietal_tree(&entries), search.unwrap_or_default());
    sort_varietal_tree(&mut varietals);
    if json {
        return print_json("varietal tree", &varietals);
    }
    if varietals.is_empty() {
        output::warning("no matching varietals");
        return Ok(());
    }
    output::info(&varietal_tree_display(&varietals));
    Ok(())
}

/// Render block nodes under a single "Blocks" root.
pub fn block_tree_display(blocks: &[BlockNode]) -> Tree<String> {
    let leaves = blocks.iter().map(|b| {
        Tree::new(format!("Block {}", b.block)).with_leaves(b.varietals.iter().map(|v| {
            Tree::new(v.varietal.clone())
                .with_leaves(v.clones.iter().map(|c| format!("Clone {}", c.clone)))
        }))
    });
    Tree::new("Blocks".to_string()).with_leaves(leaves)
}

/// Render varietal nodes under a single "Varietals" root.
pub fn varietal_tree_display(varietals: &[VarietalNode]) -> Tree<String> {
    let leaves = varietals.iter().map(|v| {
        Tree::new(v.varietal.clone()).with_leaves(v.clones.iter().map(|c| {
            Tree::new(format!("Clone {}", c.clone))
                .with_leaves(c.blocks.iter().map(|b| format!("Block {}", b)))
        }))
    });
    Tree::new("Varietals".to_string()).with_leaves(leaves)
}

#[instrument(skip(container))]
fn cmd_export(
    container: &ServiceContainer,
    view: ExportView,
    output_path: Option<&Path>,
) -> CliResult<()> {
    let entries = container.plantings.load(&container.settings.dataset)?;
    let path: PathBuf = output_path
        .map(Path::to_path_buf)
        .unwrap_or_else(|| container.settings.export_path(view));
    let written = container.plantings.export_csv(&entries, &path)?;
    output::success(&format!(
        "exported {} plantings to {}",
        entries.len(),
        written.display()
    ));
    Ok(())
}

#[instrument(skip(container))]
fn cmd_items(container: &ServiceContainer, file: Option<&Path>) -> CliResult<()> {
    let path = file.unwrap_or(container.settings.items.as_path());
    let items = container.items.load(path)?;
    for item in &items {
        if item.is_expired {
            output::expired(&item.label());
        } else {
            output::info(&item.label());
        }
    }
    Ok(())
}

fn cmd_config(
    container: &ServiceContainer,
    command: &ConfigCommands,
    cwd: Option<&Path>,
) -> CliResult<()> {
    match command {
        ConfigCommands::Show => output::info(&container.settings.to_toml()?),
        ConfigCommands::Template => output::info(&Settings::template()),
        ConfigCommands::Path => {
            match global_config_path() {
                Some(path) => output::action("global", &path.display()),
                None => output::warning("no global config directory on this platform"),
            }
            if let Some(dir) = cwd {
                output::action("local", &local_config_path(dir).display());
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_entries;

    #[test]
    fn given_block_tree_when_rendering_then_nests_varietals_and_clones() {
        let entries = parse_entries(["A.Cab.1", "A.Cab.2"]).unwrap();
        let rendered = block_tree_display(&build_block_tree(&entries)).to_string();

        let lines: Vec<_> = rendered.lines().collect();
        assert_eq!(lines[0], "Blocks");
        assert!(lines[1].ends_with("Block A"));
        assert!(lines[2].ends_with("Cab"));
        assert!(lines[3].ends_with("Clone 1"));
        assert!(lines[4].ends_with("Clone 2"));
    }

    #[test]
    fn given_varietal_tree_when_rendering_then_lists_blocks_under_clones() {
        let entries = parse_entries(["A.Cab.1", "B.Cab.1"]).unwrap();
        let rendered = varietal_tree_display(&build_varietal_tree(&entries)).to_string();

        assert!(rendered.contains("Clone 1"));
        assert!(rendered.contains("Block A"));
        assert!(rendered.contains("Block B"));
    }
}
