//! CSV serialization of the flat planting list.

use crate::domain::entities::PlantingEntry;

pub const CSV_HEADER: [&str; 3] = ["Block", "Varietal", "Clone"];

/// Header row plus one row per entry, in input order, newline separated.
///
/// Fields are written as-is; no quoting and no trailing newline.
pub fn export_to_csv(entries: &[PlantingEntry]) -> String {
    std::iter::once(CSV_HEADER.join(","))
        .chain(
            entries
                .iter()
                .map(|e| [e.block.as_str(), e.varietal.as_str(), e.clone.as_str()].join(",")),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_single_entry_when_exporting_then_header_and_row() {
        let csv = export_to_csv(&[PlantingEntry::new("A", "Cab", "1")]);
        assert_eq!(csv, "Block,Varietal,Clone\nA,Cab,1");
    }

    #[test]
    fn given_no_entries_when_exporting_then_header_only() {
        assert_eq!(export_to_csv(&[]), "Block,Varietal,Clone");
    }

    #[test]
    fn given_duplicates_when_exporting_then_one_row_per_entry() {
        let entry = PlantingEntry::new("A", "Cab", "1");
        let csv = export_to_csv(&[entry.clone(), entry]);
        assert_eq!(csv.lines().count(), 3);
    }
}
