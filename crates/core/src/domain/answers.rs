use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::domain::catalogue::QuestionId;

/// The user's selections so far: question id to zero-based option index.
///
/// Owned by the caller and passed into scoring on every computation. Entries
/// are not checked against any catalogue here, so a map rehydrated after the
/// question data changed may hold stale indices; scoring skips those.
/// Serialises as a flat `{ "question-id": index }` object.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    selections: IndexMap<QuestionId, usize>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a selection, replacing any earlier choice for the same question.
    pub fn select(&mut self, question_id: impl Into<QuestionId>, option_index: usize) {
        self.selections.insert(question_id.into(), option_index);
    }

    pub fn with(mut self, question_id: impl Into<QuestionId>, option_index: usize) -> Self {
        self.select(question_id, option_index);
        self
    }

    pub fn clear(&mut self, question_id: &str) -> Option<usize> {
        self.selections.shift_remove(question_id)
    }

    pub fn get(&self, question_id: &str) -> Option<usize> {
        self.selections.get(question_id).copied()
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.selections.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.selections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&QuestionId, usize)> {
        self.selections.iter().map(|(id, index)| (id, *index))
    }
}

impl<K: Into<QuestionId>> FromIterator<(K, usize)> for Answers {
    fn from_iter<T: IntoIterator<Item = (K, usize)>>(iter: T) -> Self {
        let mut answers = Self::new();
        for (question_id, index) in iter {
            answers.select(question_id, index);
        }
        answers
    }
}
