//! Hierarchical groupings over planting entries.
//!
//! Both builders make a single pass into nested insertion-ordered maps and
//! emit every level in first-seen order. Leaves are deduplicated.

use indexmap::{IndexMap, IndexSet};
use tracing::instrument;

use crate::domain::entities::{
    BlockNode, BlockVarietalNode, CloneNode, PlantingEntry, VarietalCloneNode, VarietalNode,
};

/// outer key -> middle key -> set of leaf names
type Grouping<'a> = IndexMap<&'a str, IndexMap<&'a str, IndexSet<&'a str>>>;

fn group<'a, F>(entries: &'a [PlantingEntry], key: F) -> Grouping<'a>
where
    F: Fn(&'a PlantingEntry) -> (&'a str, &'a str, &'a str),
{
    let mut grouping: Grouping<'a> = IndexMap::new();
    for entry in entries {
        let (outer, middle, leaf) = key(entry);
        grouping
            .entry(outer)
            .or_default()
            .entry(middle)
            .or_default()
            .insert(leaf);
    }
    grouping
}

/// Group entries as Block -> Varietal -> Clone.
#[instrument(level = "trace", skip_all, fields(entries = entries.len()))]
pub fn build_block_tree(entries: &[PlantingEntry]) -> Vec<BlockNode> {
    group(entries, |e| (e.block.as_str(), e.varietal.as_str(), e.clone.as_str()))
        .into_iter()
        .map(|(block, varietals)| BlockNode {
            block: block.to_string(),
            varietals: varietals
                .into_iter()
                .map(|(varietal, clones)| BlockVarietalNode {
                    varietal: varietal.to_string(),
                    clones: clones
                        .into_iter()
                        .map(|clone| CloneNode {
                            clone: clone.to_string(),
                        })
                        .collect(),
                })
                .collect(),
        })
        .collect()
}

/// Group entries as Varietal -> Clone -> Blocks.
#[instrument(level = "trace", skip_all, fields(entries = entries.len()))]
pub fn build_varietal_tree(entries: &[PlantingEntry]) -> Vec<VarietalNode> {
    group(entries, |e| (e.varietal.as_str(), e.clone.as_str(), e.block.as_str()))
        .into_iter()
        .map(|(varietal, clones)| VarietalNode {
            varietal: varietal.to_string(),
            clones: clones
                .into_iter()
                .map(|(clone, blocks)| VarietalCloneNode {
                    clone: clone.to_string(),
                    blocks: blocks.into_iter().map(str::to_string).collect(),
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::parse_entries;

    #[test]
    fn given_empty_input_when_building_then_returns_empty_trees() {
        assert!(build_block_tree(&[]).is_empty());
        assert!(build_varietal_tree(&[]).is_empty());
    }

    #[test]
    fn given_unsorted_input_when_building_then_keeps_first_seen_order() {
        let entries = parse_entries(["C.Syrah.1", "A.Cab.2", "C.Cab.3", "A.Cab.1"]).unwrap();

        let blocks = build_block_tree(&entries);
        let names: Vec<_> = blocks.iter().map(|b| b.block.as_str()).collect();
        assert_eq!(names, ["C", "A"]);
        let c_varietals: Vec<_> = blocks[0].varietals.iter().map(|v| v.varietal.as_str()).collect();
        assert_eq!(c_varietals, ["Syrah", "Cab"]);
        let a_clones: Vec<_> = blocks[1].varietals[0].clones.iter().map(|c| c.clone.as_str()).collect();
        assert_eq!(a_clones, ["2", "1"]);

        let varietals = build_varietal_tree(&entries);
        let names: Vec<_> = varietals.iter().map(|v| v.varietal.as_str()).collect();
        assert_eq!(names, ["Syrah", "Cab"]);
    }

    #[test]
    fn given_same_clone_in_two_blocks_when_building_varietal_tree_then_lists_both_blocks_once() {
        let entries = parse_entries(["A.Cab.1", "B.Cab.1", "A.Cab.1"]).unwrap();

        let varietals = build_varietal_tree(&entries);

        assert_eq!(
            varietals,
            vec![VarietalNode {
                varietal: "Cab".into(),
                clones: vec![VarietalCloneNode {
                    clone: "1".into(),
                    blocks: vec!["A".into(), "B".into()],
                }],
            }]
        );
    }
}
