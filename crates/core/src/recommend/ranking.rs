//! Top-N selection over accumulated totals

use serde::{Deserialize, Serialize};

use super::scoring::ScoreTotals;
use crate::domain::catalogue::CategoryKey;

/// A category that made the cut, with its accumulated score.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedCategory {
    pub category: CategoryKey,
    pub score: u64,
}

/// Keep categories scoring above zero, highest first, at most `max_results`.
///
/// Equal scores keep the order in which the categories were first met while
/// folding the catalogue; the sort is stable over the insertion-ordered
/// totals. The list is never padded with zero-score categories.
pub fn rank_categories(totals: &ScoreTotals, max_results: usize) -> Vec<RankedCategory> {
    if max_results == 0 {
        return Vec::new();
    }

    let mut ranked: Vec<RankedCategory> = totals
        .iter()
        .filter(|(_, score)| **score > 0)
        .map(|(category, score)| RankedCategory { category: category.clone(), score: *score })
        .collect();

    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(max_results);
    ranked
}

/// Caller-facing label for a 1-based rank.
pub fn rank_label(rank: usize) -> String {
    if rank <= 1 {
        "Top match".to_string()
    } else {
        format!("#{rank}")
    }
}
