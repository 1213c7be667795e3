//! Domain entities: core data structures

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::DomainError;

/// Separator between the segments of a raw planting entry.
pub const ENTRY_SEPARATOR: char = '.';

/// One planting: a clone of a varietal planted in a block.
///
/// Duplicates are meaningful, each occurrence counts as one planting.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PlantingEntry {
    pub block: String,
    pub varietal: String,
    pub clone: String,
}

impl PlantingEntry {
    pub fn new(
        block: impl Into<String>,
        varietal: impl Into<String>,
        clone: impl Into<String>,
    ) -> Self {
        Self {
            block: block.into(),
            varietal: varietal.into(),
            clone: clone.into(),
        }
    }
}

impl fmt::Display for PlantingEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{sep}{}{sep}{}",
            self.block,
            self.varietal,
            self.clone,
            sep = ENTRY_SEPARATOR
        )
    }
}

impl FromStr for PlantingEntry {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_entry(s)
    }
}

/// Parse a raw `block.varietal.clone` string.
///
/// Segments are taken verbatim: no trimming, no case folding, empty segments allowed.
/// Anything other than exactly three segments is a `MalformedEntry`.
pub fn parse_entry(raw: &str) -> Result<PlantingEntry, DomainError> {
    let parts: Vec<&str> = raw.split(ENTRY_SEPARATOR).collect();
    match parts.as_slice() {
        [block, varietal, clone] => Ok(PlantingEntry::new(*block, *varietal, *clone)),
        _ => Err(DomainError::MalformedEntry(raw.to_string())),
    }
}

/// Parse a batch of raw entries, stopping at the first malformed one.
pub fn parse_entries<I, S>(raws: I) -> Result<Vec<PlantingEntry>, DomainError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raws.into_iter().map(|raw| parse_entry(raw.as_ref())).collect()
}

/// Block-keyed grouping: block -> varietal -> clone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockNode {
    pub block: String,
    pub varietals: Vec<BlockVarietalNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockVarietalNode {
    pub varietal: String,
    pub clones: Vec<CloneNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CloneNode {
    pub clone: String,
}

/// Varietal-keyed grouping: varietal -> clone -> blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarietalNode {
    pub varietal: String,
    pub clones: Vec<VarietalCloneNode>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VarietalCloneNode {
    pub clone: String,
    pub blocks: Vec<String>,
}

/// Expand shell variables and tilde in a path string.
///
/// Returns the input unchanged if expansion fails (e.g. undefined variable).
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}
