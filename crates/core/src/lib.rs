pub mod config;
pub mod domain;
pub mod errors;
pub mod progress;
pub mod quizzes;
pub mod recommend;

pub use domain::answers::Answers;
pub use domain::catalogue::{Catalogue, CategoryKey, Question, QuestionId, QuizOption, ScoreMap};
pub use domain::category::{CategoryMetadata, CategoryTable};
pub use errors::{ApplicationError, CatalogueError, DomainError};
pub use progress::QuizProgress;
pub use quizzes::{QuizDefinition, QuizRegistry};
pub use recommend::{
    compute_recommendations, RankedCategory, Recommendation, RecommendationEngine,
    RecommendationReport, DEFAULT_MAX_RECOMMENDATIONS,
};
