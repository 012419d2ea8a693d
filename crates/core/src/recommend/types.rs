//! Types for the Recommendation Engine

use serde::{Deserialize, Serialize};

use crate::domain::catalogue::CategoryKey;
use crate::domain::category::CategoryMetadata;

/// A ranked category decorated with its display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// 1-based position in the surfaced list
    pub rank: usize,
    /// "Top match" for the first entry, "#n" afterwards
    pub label: String,
    /// Category key
    pub category: CategoryKey,
    /// Accumulated score (always > 0)
    pub score: u64,
    /// Display metadata from the quiz's category table
    pub metadata: CategoryMetadata,
}

/// Assembled output for one quiz and one answer set, complete or partial
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationReport {
    /// Quiz identifier
    pub quiz_id: String,
    /// Catalogue questions with an in-range answer
    pub answered: usize,
    /// Catalogue size
    pub total: usize,
    /// Whether every catalogue question is answered
    pub complete: bool,
    /// Highest score first
    pub recommendations: Vec<Recommendation>,
}

impl RecommendationReport {
    pub fn top(&self) -> Option<&Recommendation> {
        self.recommendations.first()
    }
}
