//! Caller-owned quiz progress: answers plus a navigation cursor.

use crate::domain::answers::Answers;
use crate::domain::catalogue::{Catalogue, Question};
use crate::errors::DomainError;
use crate::recommend::answered_count;

/// Progress through one catalogue.
///
/// Selections are checked against the catalogue here, at the point of user
/// interaction. Rehydrated answers are accepted as-is via [`QuizProgress::resume`].
#[derive(Clone, Debug)]
pub struct QuizProgress<'a> {
    catalogue: &'a Catalogue,
    answers: Answers,
    cursor: usize,
}

impl<'a> QuizProgress<'a> {
    pub fn new(catalogue: &'a Catalogue) -> Self {
        Self { catalogue, answers: Answers::new(), cursor: 0 }
    }

    /// Continue from previously saved answers, positioned on the first
    /// question that still lacks a usable answer.
    pub fn resume(catalogue: &'a Catalogue, answers: Answers) -> Self {
        let cursor = catalogue
            .questions()
            .iter()
            .position(|question| {
                answers.get(question.id.as_str()).and_then(|index| question.option(index)).is_none()
            })
            .unwrap_or_else(|| catalogue.len().saturating_sub(1));
        Self { catalogue, answers, cursor }
    }

    pub fn select(&mut self, question_id: &str, option_index: usize) -> Result<(), DomainError> {
        let question = self
            .catalogue
            .question(question_id)
            .ok_or_else(|| DomainError::UnknownQuestion(question_id.to_string()))?;

        if question.option(option_index).is_none() {
            return Err(DomainError::OptionOutOfRange {
                question_id: question.id.clone(),
                index: option_index,
                option_count: question.options.len(),
            });
        }

        self.answers.select(question.id.clone(), option_index);
        Ok(())
    }

    /// Answer the current question and move on.
    pub fn answer_current(&mut self, option_index: usize) -> Result<(), DomainError> {
        let question = self.current().ok_or(DomainError::EmptyQuiz)?;
        self.select(question.id.as_str(), option_index)?;
        self.next();
        Ok(())
    }

    pub fn clear(&mut self, question_id: &str) -> Option<usize> {
        self.answers.clear(question_id)
    }

    pub fn current(&self) -> Option<&'a Question> {
        self.catalogue.questions().get(self.cursor)
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Advance one question; stays on the last one.
    pub fn next(&mut self) -> Option<&'a Question> {
        if self.cursor + 1 < self.catalogue.len() {
            self.cursor += 1;
        }
        self.current()
    }

    /// Step back one question; stays on the first one.
    pub fn previous(&mut self) -> Option<&'a Question> {
        self.cursor = self.cursor.saturating_sub(1);
        self.current()
    }

    pub fn answered_count(&self) -> usize {
        answered_count(self.catalogue, &self.answers)
    }

    pub fn progress_ratio(&self) -> f64 {
        if self.catalogue.is_empty() {
            return 1.0;
        }
        self.answered_count() as f64 / self.catalogue.len() as f64
    }

    pub fn is_complete(&self) -> bool {
        self.answered_count() == self.catalogue.len()
    }

    pub fn answers(&self) -> &Answers {
        &self.answers
    }

    pub fn into_answers(self) -> Answers {
        self.answers
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::answers::Answers;
    use crate::domain::catalogue::{Catalogue, Question, QuizOption};
    use crate::errors::DomainError;

    use super::QuizProgress;

    fn catalogue() -> Catalogue {
        Catalogue::new(vec![
            Question::new("q1", "First")
                .with_option(QuizOption::new("a").with_score("x", 1))
                .with_option(QuizOption::new("b").with_score("y", 1)),
            Question::new("q2", "Second").with_option(QuizOption::new("a").with_score("x", 2)),
            Question::new("q3", "Third").with_option(QuizOption::new("a").with_score("y", 2)),
        ])
    }

    #[test]
    fn navigation_clamps_at_both_ends() {
        let catalogue = catalogue();
        let mut progress = QuizProgress::new(&catalogue);

        assert_eq!(progress.previous().map(|q| q.id.as_str()), Some("q1"));
        progress.next();
        progress.next();
        assert_eq!(progress.next().map(|q| q.id.as_str()), Some("q3"));
        assert_eq!(progress.cursor(), 2);
    }

    #[test]
    fn select_rejects_unknown_question_and_bad_index() {
        let catalogue = catalogue();
        let mut progress = QuizProgress::new(&catalogue);

        assert_eq!(
            progress.select("q9", 0),
            Err(DomainError::UnknownQuestion("q9".to_string()))
        );
        assert!(matches!(
            progress.select("q1", 2),
            Err(DomainError::OptionOutOfRange { index: 2, option_count: 2, .. })
        ));
        assert!(progress.answers().is_empty());
    }

    #[test]
    fn answer_current_advances_and_tracks_completion() {
        let catalogue = catalogue();
        let mut progress = QuizProgress::new(&catalogue);

        progress.answer_current(1).expect("answer q1");
        assert_eq!(progress.current().map(|q| q.id.as_str()), Some("q2"));
        assert!((progress.progress_ratio() - 1.0 / 3.0).abs() < 1e-9);

        progress.answer_current(0).expect("answer q2");
        progress.answer_current(0).expect("answer q3");
        assert!(progress.is_complete());
        assert_eq!(progress.into_answers().get("q1"), Some(1));
    }

    #[test]
    fn resume_lands_on_first_unanswered_question() {
        let catalogue = catalogue();
        let saved = Answers::new().with("q1", 0).with("q2", 5);

        let progress = QuizProgress::resume(&catalogue, saved);

        assert_eq!(progress.current().map(|q| q.id.as_str()), Some("q2"));
        assert_eq!(progress.answered_count(), 1);
        assert!(!progress.is_complete());
    }

    #[test]
    fn clearing_an_answer_reopens_the_quiz() {
        let catalogue = catalogue();
        let mut progress =
            QuizProgress::resume(&catalogue, Answers::new().with("q1", 0).with("q2", 0).with("q3", 0));
        assert!(progress.is_complete());

        assert_eq!(progress.clear("q2"), Some(0));
        assert!(!progress.is_complete());
    }

    #[test]
    fn empty_catalogue_is_trivially_complete() {
        let catalogue = Catalogue::default();
        let progress = QuizProgress::new(&catalogue);

        assert!(progress.is_complete());
        assert!(progress.current().is_none());
        assert_eq!(progress.progress_ratio(), 1.0);
    }
}
