use std::borrow::Borrow;
use std::collections::HashSet;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::CatalogueError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub String);

#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryKey(pub String);

macro_rules! string_key {
    ($name:ident) => {
        impl $name {
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self(value.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }

        impl Borrow<str> for $name {
            fn borrow(&self) -> &str {
                &self.0
            }
        }
    };
}

string_key!(QuestionId);
string_key!(CategoryKey);

/// Per-option weights. Key order is the order the catalogue author wrote them in.
pub type ScoreMap = IndexMap<CategoryKey, u32>;

/// One selectable answer to a question.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Categories missing from the map score zero for this option.
    #[serde(default)]
    pub scores: ScoreMap,
}

impl QuizOption {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into(), description: None, scores: ScoreMap::new() }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_score(mut self, category: impl Into<CategoryKey>, weight: u32) -> Self {
        self.scores.insert(category.into(), weight);
        self
    }

    pub fn weight(&self, category: &str) -> u32 {
        self.scores.get(category).copied().unwrap_or(0)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: QuestionId,
    pub prompt: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub options: Vec<QuizOption>,
}

impl Question {
    pub fn new(id: impl Into<QuestionId>, prompt: impl Into<String>) -> Self {
        Self { id: id.into(), prompt: prompt.into(), subtitle: None, options: Vec::new() }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_option(mut self, option: QuizOption) -> Self {
        self.options.push(option);
        self
    }

    /// Resolve an answer index, `None` when it points past the last option.
    pub fn option(&self, index: usize) -> Option<&QuizOption> {
        self.options.get(index)
    }
}

/// The fixed, ordered question set for one quiz flow.
///
/// Order drives navigation only; scoring is order-independent apart from the
/// first-encountered tie-break applied when ranking.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalogue {
    questions: Vec<Question>,
}

impl Catalogue {
    pub fn new(questions: Vec<Question>) -> Self {
        Self { questions }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn question(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|question| question.id.as_str() == id)
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.questions.iter().position(|question| question.id.as_str() == id)
    }

    /// Every category key mentioned by any option, in first-encountered order.
    pub fn categories(&self) -> Vec<CategoryKey> {
        let mut seen = HashSet::new();
        self.questions
            .iter()
            .flat_map(|question| question.options.iter())
            .flat_map(|option| option.scores.keys())
            .filter(|key| seen.insert(key.as_str()))
            .cloned()
            .collect()
    }

    /// Catch authoring mistakes at load time. Scoring itself never fails.
    pub fn validate(&self) -> Result<(), CatalogueError> {
        let mut ids = HashSet::new();

        for question in &self.questions {
            if question.id.as_str().trim().is_empty() {
                return Err(CatalogueError::EmptyQuestionId);
            }
            if !ids.insert(question.id.as_str()) {
                return Err(CatalogueError::DuplicateQuestionId(question.id.clone()));
            }
            if question.options.is_empty() {
                return Err(CatalogueError::NoOptions(question.id.clone()));
            }

            let blank_category = question
                .options
                .iter()
                .flat_map(|option| option.scores.keys())
                .any(|key| key.as_str().trim().is_empty());
            if blank_category {
                return Err(CatalogueError::EmptyCategoryKey(question.id.clone()));
            }
        }

        Ok(())
    }
}

impl FromIterator<Question> for Catalogue {
    fn from_iter<T: IntoIterator<Item = Question>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
