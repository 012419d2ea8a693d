use std::path::PathBuf;

use thiserror::Error;

use crate::domain::catalogue::QuestionId;

/// Problems with catalogue data, found when a quiz is loaded or validated.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("question id must not be empty")]
    EmptyQuestionId,
    #[error("duplicate question id `{0}`")]
    DuplicateQuestionId(QuestionId),
    #[error("question `{0}` has no options")]
    NoOptions(QuestionId),
    #[error("question `{0}` scores an empty category key")]
    EmptyCategoryKey(QuestionId),
    #[error("unknown quiz `{0}`")]
    UnknownQuiz(String),
    #[error("could not read catalogue file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse catalogue file `{path}`: {source}")]
    ParseToml { path: PathBuf, source: toml::de::Error },
    #[error("could not parse catalogue file `{path}`: {source}")]
    ParseJson { path: PathBuf, source: serde_json::Error },
}

/// Rejected interactive selections. Scoring never produces these.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("quiz has no questions")]
    EmptyQuiz,
    #[error("question `{0}` is not part of this quiz")]
    UnknownQuestion(String),
    #[error("option {index} is out of range for question `{question_id}` ({option_count} options)")]
    OptionOutOfRange { question_id: QuestionId, index: usize, option_count: usize },
}

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),
    #[error("answers could not be loaded: {0}")]
    Answers(String),
    #[error("configuration failure: {0}")]
    Configuration(String),
}

impl ApplicationError {
    /// Stable machine-readable class used in command output.
    pub fn error_class(&self) -> &'static str {
        match self {
            Self::Domain(_) => "invalid_answer",
            Self::Catalogue(CatalogueError::UnknownQuiz(_)) => "unknown_quiz",
            Self::Catalogue(_) => "catalogue",
            Self::Answers(_) => "answers",
            Self::Configuration(_) => "config_validation",
        }
    }

    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Configuration(_) => 2,
            Self::Catalogue(_) => 3,
            Self::Domain(_) | Self::Answers(_) => 4,
        }
    }
}
