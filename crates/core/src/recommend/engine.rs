//! Recommendation Engine implementation

use super::assembler::assemble;
use super::ranking::RankedCategory;
use super::types::RecommendationReport;
use crate::domain::answers::Answers;
use crate::domain::catalogue::Catalogue;
use crate::quizzes::QuizDefinition;

/// Stateless front door over scoring, ranking and assembly.
///
/// Holds only the result limit; every call reads the catalogue and answers
/// fresh, so one engine can serve any number of quizzes and threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationEngine {
    max_results: usize,
}

impl RecommendationEngine {
    /// Create an engine returning the default number of recommendations
    pub fn new() -> Self {
        Self { max_results: super::DEFAULT_MAX_RECOMMENDATIONS }
    }

    pub fn with_max_results(max_results: usize) -> Self {
        Self { max_results }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn rank(&self, catalogue: &Catalogue, answers: &Answers) -> Vec<RankedCategory> {
        super::compute_recommendations(catalogue, answers, self.max_results)
    }

    /// Build the decorated report. Works for partial answer sets, which is
    /// what live previews use while the quiz is still in progress.
    pub fn report(&self, quiz: &QuizDefinition, answers: &Answers) -> RecommendationReport {
        let ranked = self.rank(&quiz.catalogue, answers);
        let recommendations = assemble(&ranked, &quiz.categories);

        let total = quiz.catalogue.len();
        let answered = answered_count(&quiz.catalogue, answers);

        RecommendationReport {
            quiz_id: quiz.id.clone(),
            answered,
            total,
            complete: answered == total,
            recommendations,
        }
    }
}

impl Default for RecommendationEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Catalogue questions whose answer resolves to a real option.
pub fn answered_count(catalogue: &Catalogue, answers: &Answers) -> usize {
    catalogue
        .questions()
        .iter()
        .filter(|question| {
            answers.get(question.id.as_str()).and_then(|index| question.option(index)).is_some()
        })
        .count()
}
