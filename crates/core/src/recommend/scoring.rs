//! Folding answers into per-category totals

use indexmap::IndexMap;
use tracing::debug;

use crate::domain::answers::Answers;
use crate::domain::catalogue::{Catalogue, CategoryKey};

/// Category totals in the order each category was first met while walking
/// the catalogue. Ranking relies on this order to break ties.
pub type ScoreTotals = IndexMap<CategoryKey, u64>;

/// Sum the weights of every answered option across the catalogue.
///
/// Questions are visited in catalogue order. An unanswered question adds
/// nothing. An answer whose index is past the last option is skipped as a
/// whole. Answers for questions that are no longer in the catalogue are never
/// looked at. A category appears in the result only if some selected option
/// mentions it, even with weight zero.
pub fn accumulate_scores(catalogue: &Catalogue, answers: &Answers) -> ScoreTotals {
    let mut totals = ScoreTotals::new();

    for question in catalogue.questions() {
        let Some(index) = answers.get(question.id.as_str()) else {
            continue;
        };

        let Some(option) = question.option(index) else {
            debug!(
                event_name = "recommend.scoring.stale_answer_skipped",
                question_id = %question.id,
                option_index = index,
                option_count = question.options.len(),
                "answer index out of range; question skipped"
            );
            continue;
        };

        for (category, weight) in &option.scores {
            let total = totals.entry(category.clone()).or_insert(0);
            *total = total.saturating_add(u64::from(*weight));
        }
    }

    totals
}

#[cfg(test)]
mod tests {
    use crate::domain::answers::Answers;
    use crate::domain::catalogue::{Catalogue, Question, QuizOption};

    use super::accumulate_scores;

    fn catalogue() -> Catalogue {
        Catalogue::new(vec![
            Question::new("q1", "First")
                .with_option(QuizOption::new("A").with_score("tierX", 3))
                .with_option(QuizOption::new("B").with_score("tierZ", 1)),
            Question::new("q2", "Second")
                .with_option(QuizOption::new("A").with_score("tierZ", 4))
                .with_option(QuizOption::new("B").with_score("tierX", 2).with_score("tierY", 5)),
        ])
    }

    #[test]
    fn sums_weights_across_questions() {
        let totals = accumulate_scores(&catalogue(), &Answers::new().with("q1", 0).with("q2", 1));

        assert_eq!(totals.get("tierX"), Some(&5));
        assert_eq!(totals.get("tierY"), Some(&5));
        assert_eq!(totals.get("tierZ"), None);
    }

    #[test]
    fn empty_answers_give_empty_totals() {
        assert!(accumulate_scores(&catalogue(), &Answers::new()).is_empty());
        assert!(accumulate_scores(&Catalogue::default(), &Answers::new().with("q1", 0)).is_empty());
    }

    #[test]
    fn out_of_range_index_skips_only_that_question() {
        let totals = accumulate_scores(&catalogue(), &Answers::new().with("q1", 2).with("q2", 1));

        assert_eq!(totals.get("tierX"), Some(&2));
        assert_eq!(totals.get("tierY"), Some(&5));
        assert_eq!(totals.len(), 2);
    }

    #[test]
    fn answers_for_unknown_questions_are_ignored() {
        let totals =
            accumulate_scores(&catalogue(), &Answers::new().with("removed", 0).with("q1", 1));

        assert_eq!(totals.get("tierZ"), Some(&1));
        assert_eq!(totals.len(), 1);
    }

    #[test]
    fn zero_weight_category_is_present_but_zero() {
        let catalogue = Catalogue::new(vec![Question::new("q1", "Only")
            .with_option(QuizOption::new("A").with_score("quiet", 0).with_score("loud", 2))]);

        let totals = accumulate_scores(&catalogue, &Answers::new().with("q1", 0));

        assert_eq!(totals.get("quiet"), Some(&0));
        assert_eq!(totals.get("loud"), Some(&2));
    }

    #[test]
    fn totals_keep_first_encountered_order() {
        let totals = accumulate_scores(&catalogue(), &Answers::new().with("q1", 1).with("q2", 1));
        let keys: Vec<&str> = totals.keys().map(|key| key.as_str()).collect();

        assert_eq!(keys, vec!["tierZ", "tierX", "tierY"]);
    }

    #[test]
    fn adding_an_answer_never_lowers_a_total() {
        let catalogue = catalogue();
        let partial = Answers::new().with("q1", 0);
        let before = accumulate_scores(&catalogue, &partial);
        let after = accumulate_scores(&catalogue, &partial.clone().with("q2", 0));

        for (category, score) in &before {
            assert!(after.get(category).copied().unwrap_or(0) >= *score);
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let catalogue = catalogue();
        let answers = Answers::new().with("q2", 1).with("q1", 0);

        assert_eq!(accumulate_scores(&catalogue, &answers), accumulate_scores(&catalogue, &answers));
    }

    #[test]
    fn answer_insertion_order_does_not_change_totals() {
        let catalogue = catalogue();
        let forward = accumulate_scores(&catalogue, &Answers::new().with("q1", 0).with("q2", 1));
        let backward = accumulate_scores(&catalogue, &Answers::new().with("q2", 1).with("q1", 0));

        assert_eq!(forward, backward);
        assert!(forward.keys().eq(backward.keys()));
    }
}
