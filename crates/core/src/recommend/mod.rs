//! Quiz Recommendation Engine
//!
//! Folds a user's answers against a question catalogue into per-category
//! totals, then ranks the categories to surface the best fits. The same
//! engine serves every quiz flow; only the catalogue differs.

mod assembler;
mod engine;
mod ranking;
mod scoring;
mod types;

pub use assembler::assemble;
pub use engine::{answered_count, RecommendationEngine};
pub use ranking::{rank_categories, rank_label, RankedCategory};
pub use scoring::{accumulate_scores, ScoreTotals};
pub use types::*;

use crate::domain::answers::Answers;
use crate::domain::catalogue::Catalogue;

/// Number of recommendations surfaced when the caller does not say otherwise
pub const DEFAULT_MAX_RECOMMENDATIONS: usize = 3;

/// Score `answers` against `catalogue` and return the best `max_results`
/// categories, highest score first.
///
/// Pure and infallible: stale or missing answers contribute nothing, zero
/// scores are never returned, and ties keep first-encountered order.
pub fn compute_recommendations(
    catalogue: &Catalogue,
    answers: &Answers,
    max_results: usize,
) -> Vec<RankedCategory> {
    let totals = accumulate_scores(catalogue, answers);
    rank_categories(&totals, max_results)
}

#[cfg(test)]
mod tests {
    use crate::domain::answers::Answers;
    use crate::domain::catalogue::{Catalogue, Question, QuizOption};

    use super::{accumulate_scores, compute_recommendations, RankedCategory};

    fn scenario_catalogue() -> Catalogue {
        Catalogue::new(vec![
            Question::new("q1", "First")
                .with_option(QuizOption::new("A").with_score("tierX", 3))
                .with_option(QuizOption::new("other").with_score("tierY", 1)),
            Question::new("q2", "Second")
                .with_option(QuizOption::new("other").with_score("tierZ", 1))
                .with_option(QuizOption::new("B").with_score("tierX", 2).with_score("tierY", 5)),
        ])
    }

    fn pairs(ranked: &[RankedCategory]) -> Vec<(&str, u64)> {
        ranked.iter().map(|entry| (entry.category.as_str(), entry.score)).collect()
    }

    #[test]
    fn tie_between_two_categories_keeps_first_encountered() {
        let answers = Answers::new().with("q1", 0).with("q2", 1);

        let ranked = compute_recommendations(&scenario_catalogue(), &answers, 2);

        assert_eq!(pairs(&ranked), vec![("tierX", 5), ("tierY", 5)]);
    }

    #[test]
    fn nothing_answered_gives_nothing() {
        for max_results in [0, 1, 3, 10] {
            assert!(compute_recommendations(&scenario_catalogue(), &Answers::new(), max_results)
                .is_empty());
        }
    }

    #[test]
    fn index_one_past_the_end_is_skipped() {
        let answers = Answers::new().with("q1", 2).with("q2", 1);

        let ranked = compute_recommendations(&scenario_catalogue(), &answers, 3);

        assert_eq!(pairs(&ranked), vec![("tierY", 5), ("tierX", 2)]);
    }

    #[test]
    fn fewer_eligible_than_requested_is_not_padded() {
        let answers = Answers::new().with("q1", 0).with("q2", 1);

        let ranked = compute_recommendations(&scenario_catalogue(), &answers, 3);

        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|entry| entry.score > 0));
    }

    #[test]
    fn four_way_tie_returns_first_three_in_catalogue_order() {
        let catalogue = Catalogue::new(vec![
            Question::new("q1", "First").with_option(
                QuizOption::new("split").with_score("mind", 2).with_score("body", 2),
            ),
            Question::new("q2", "Second").with_option(
                QuizOption::new("split").with_score("spirit", 2).with_score("heart", 2),
            ),
            Question::new("q3", "Third").with_option(QuizOption::new("none").with_score("void", 0)),
        ]);
        let answers = Answers::new().with("q3", 0).with("q2", 0).with("q1", 0);

        let ranked = compute_recommendations(&catalogue, &answers, 3);

        assert_eq!(pairs(&ranked), vec![("mind", 2), ("body", 2), ("spirit", 2)]);
    }

    #[test]
    fn output_length_is_min_of_limit_and_eligible() {
        let answers = Answers::new().with("q1", 1).with("q2", 0);
        let eligible = accumulate_scores(&scenario_catalogue(), &answers)
            .values()
            .filter(|score| **score > 0)
            .count();

        for max_results in 0..5 {
            let ranked = compute_recommendations(&scenario_catalogue(), &answers, max_results);
            assert_eq!(ranked.len(), max_results.min(eligible));
        }
    }

    #[test]
    fn adding_an_unknown_answer_keeps_existing_totals() {
        let catalogue = scenario_catalogue();
        let answers = Answers::new().with("q1", 0);
        let widened = answers.clone().with("not-in-catalogue", 0);

        assert_eq!(
            compute_recommendations(&catalogue, &answers, 3),
            compute_recommendations(&catalogue, &widened, 3)
        );
    }

    #[test]
    fn engine_types_are_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Catalogue>();
        assert_send_sync::<Answers>();
        assert_send_sync::<super::RecommendationEngine>();
    }
}
