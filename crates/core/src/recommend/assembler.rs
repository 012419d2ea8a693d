//! Attaching display metadata to ranked categories

use tracing::debug;

use super::ranking::{rank_label, RankedCategory};
use super::types::Recommendation;
use crate::domain::category::CategoryTable;

/// Decorate ranked categories with their metadata.
///
/// A category missing from the table is dropped, not surfaced half-filled.
/// Ranks and labels are assigned after dropping, so the first surfaced entry
/// is always the top match.
pub fn assemble(ranked: &[RankedCategory], table: &CategoryTable) -> Vec<Recommendation> {
    ranked
        .iter()
        .filter_map(|entry| {
            let metadata = table.get(entry.category.as_str());
            if metadata.is_none() {
                debug!(
                    event_name = "recommend.assembler.metadata_missing",
                    category = %entry.category,
                    score = entry.score,
                    "no metadata for category; dropped from recommendations"
                );
            }
            metadata.map(|metadata| (entry, metadata))
        })
        .enumerate()
        .map(|(position, (entry, metadata))| {
            let rank = position + 1;
            Recommendation {
                rank,
                label: rank_label(rank),
                category: entry.category.clone(),
                score: entry.score,
                metadata: metadata.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use crate::domain::catalogue::CategoryKey;
    use crate::domain::category::{CategoryMetadata, CategoryTable};
    use crate::recommend::ranking::RankedCategory;

    use super::assemble;

    fn ranked(entries: &[(&str, u64)]) -> Vec<RankedCategory> {
        entries
            .iter()
            .map(|(key, score)| RankedCategory { category: CategoryKey::from(*key), score: *score })
            .collect()
    }

    #[test]
    fn attaches_metadata_in_rank_order() {
        let table = CategoryTable::new(vec![
            CategoryMetadata::new("growth", "Growth").with_icon("📈"),
            CategoryMetadata::new("starter", "Starter"),
        ]);

        let recommendations = assemble(&ranked(&[("starter", 6), ("growth", 4)]), &table);

        assert_eq!(recommendations.len(), 2);
        assert_eq!(recommendations[0].metadata.name, "Starter");
        assert_eq!(recommendations[0].label, "Top match");
        assert_eq!(recommendations[1].metadata.icon, "📈");
        assert_eq!(recommendations[1].label, "#2");
    }

    #[test]
    fn missing_metadata_is_dropped_and_ranks_close_up() {
        let table = CategoryTable::new(vec![CategoryMetadata::new("growth", "Growth")]);

        let recommendations = assemble(&ranked(&[("legacy", 9), ("growth", 4)]), &table);

        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].category.as_str(), "growth");
        assert_eq!(recommendations[0].rank, 1);
        assert_eq!(recommendations[0].score, 4);
    }

    #[test]
    fn empty_table_yields_nothing() {
        assert!(assemble(&ranked(&[("growth", 4)]), &CategoryTable::default()).is_empty());
    }
}
