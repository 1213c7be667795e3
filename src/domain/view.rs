//! Display helpers over built trees: search filtering and sorting by top-level key.
//!
//! These never touch the builders' output order beyond the top level.

use crate::domain::entities::{BlockNode, VarietalNode};

fn matches(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

/// Keep blocks whose name, or any nested varietal or clone, contains `term` (case-insensitive).
///
/// An empty term keeps everything. Matching nodes are kept whole.
pub fn filter_block_tree(nodes: &[BlockNode], term: &str) -> Vec<BlockNode> {
    if term.is_empty() {
        return nodes.to_vec();
    }
    let needle = term.to_lowercase();
    nodes
        .iter()
        .filter(|node| {
            matches(&node.block, &needle)
                || node.varietals.iter().any(|v| {
                    matches(&v.varietal, &needle)
                        || v.clones.iter().any(|c| matches(&c.clone, &needle))
                })
        })
        .cloned()
        .collect()
}

/// Keep varietals whose name, or any nested clone or block, contains `term` (case-insensitive).
pub fn filter_varietal_tree(nodes: &[VarietalNode], term: &str) -> Vec<VarietalNode> {
    if term.is_empty() {
        return nodes.to_vec();
    }
    let needle = term.to_lowercase();
    nodes
        .iter()
        .filter(|node| {
            matches(&node.varietal, &needle)
                || node.clones.iter().any(|c| {
                    matches(&c.clone, &needle) || c.blocks.iter().any(|b| matches(b, &needle))
                })
        })
        .cloned()
        .collect()
}

pub fn sort_block_tree(nodes: &mut [BlockNode]) {
    nodes.sort_by(|a, b| a.block.cmp(&b.block));
}

pub fn sort_varietal_tree(nodes: &mut [VarietalNode]) {
    nodes.sort_by(|a, b| a.varietal.cmp(&b.varietal));
}
