//! Planting statistics: distinct counts, per-varietal occurrence counts and chart series.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde::Serialize;
use tracing::instrument;

use crate::domain::entities::PlantingEntry;

/// Summary statistics, recomputed from scratch for every input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VineyardStats {
    pub total_blocks: usize,
    pub total_varietals: usize,
    pub total_clones: usize,
    /// Varietal with the highest entry count; ties go to the first seen. Empty for no input.
    pub most_planted_varietal: String,
    /// Entry count per varietal, in first-seen order.
    pub varietal_distribution: IndexMap<String, usize>,
    /// Same counter as `varietal_distribution`: entries per varietal, not distinct clones.
    pub clone_count_per_varietal: IndexMap<String, usize>,
}

/// One named value of a chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: usize,
}

#[instrument(level = "trace", skip_all, fields(entries = entries.len()))]
pub fn calculate_stats(entries: &[PlantingEntry]) -> VineyardStats {
    let mut blocks = HashSet::new();
    let mut varietals = HashSet::new();
    let mut clones = HashSet::new();
    let mut varietal_count: IndexMap<String, usize> = IndexMap::new();

    for entry in entries {
        blocks.insert(entry.block.as_str());
        varietals.insert(entry.varietal.as_str());
        clones.insert(entry.clone.as_str());
        *varietal_count.entry(entry.varietal.clone()).or_insert(0) += 1;
    }

    let mut most_planted_varietal = String::new();
    let mut max_count = 0;
    for (varietal, &count) in &varietal_count {
        if count > max_count {
            max_count = count;
            most_planted_varietal = varietal.clone();
        }
    }

    VineyardStats {
        total_blocks: blocks.len(),
        total_varietals: varietals.len(),
        total_clones: clones.len(),
        most_planted_varietal,
        clone_count_per_varietal: varietal_count.clone(),
        varietal_distribution: varietal_count,
    }
}

/// Turn a per-varietal count map into a chart series, keeping map order.
pub fn chart_series(counts: &IndexMap<String, usize>) -> Vec<ChartPoint> {
    counts
        .iter()
        .map(|(name, &value)| ChartPoint {
            name: name.clone(),
            value,
        })
        .collect()
}
