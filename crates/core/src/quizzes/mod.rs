//! Quiz definitions: built-in catalogues and file-backed ones.

mod seeds;

use std::fs;
use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::catalogue::Catalogue;
use crate::domain::category::CategoryTable;
use crate::errors::CatalogueError;

/// A catalogue together with the metadata table for the categories it scores.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizDefinition {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "questions")]
    pub catalogue: Catalogue,
    #[serde(default)]
    pub categories: CategoryTable,
}

impl QuizDefinition {
    pub fn from_toml_str(raw: &str, origin: &Path) -> Result<Self, CatalogueError> {
        let quiz = toml::from_str::<Self>(raw)
            .map_err(|source| CatalogueError::ParseToml { path: origin.to_path_buf(), source })?;
        quiz.finish(origin)
    }

    pub fn from_json_str(raw: &str, origin: &Path) -> Result<Self, CatalogueError> {
        let quiz = serde_json::from_str::<Self>(raw)
            .map_err(|source| CatalogueError::ParseJson { path: origin.to_path_buf(), source })?;
        quiz.finish(origin)
    }

    /// Load a quiz file. `.json` files are read as JSON, anything else as TOML.
    pub fn from_path(path: &Path) -> Result<Self, CatalogueError> {
        let raw = fs::read_to_string(path)
            .map_err(|source| CatalogueError::ReadFile { path: path.to_path_buf(), source })?;

        let quiz = if is_json(path) {
            Self::from_json_str(&raw, path)?
        } else {
            Self::from_toml_str(&raw, path)?
        };

        info!(
            event_name = "quizzes.catalogue.loaded",
            quiz_id = %quiz.id,
            path = %path.display(),
            questions = quiz.catalogue.len(),
            categories = quiz.categories.len(),
            "quiz catalogue loaded from file"
        );
        Ok(quiz)
    }

    fn finish(mut self, origin: &Path) -> Result<Self, CatalogueError> {
        let stem = origin.file_stem().and_then(|stem| stem.to_str()).unwrap_or("quiz").to_string();
        if self.id.trim().is_empty() {
            self.id = stem;
        }
        if self.title.trim().is_empty() {
            self.title = self.id.clone();
        }
        self.catalogue.validate()?;
        Ok(self)
    }
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|ext| ext.to_str()).is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn is_quiz_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json") || ext.eq_ignore_ascii_case("toml"))
}

/// Known quizzes by id, in registration order.
#[derive(Clone, Debug, Default)]
pub struct QuizRegistry {
    quizzes: IndexMap<String, QuizDefinition>,
}

impl QuizRegistry {
    /// The four quiz flows shipped with the application.
    pub fn builtin() -> Self {
        let mut registry = Self::default();
        for quiz in seeds::builtin_quizzes() {
            registry.insert(quiz);
        }
        registry
    }

    /// Add a quiz, replacing any earlier one with the same id.
    pub fn insert(&mut self, quiz: QuizDefinition) {
        self.quizzes.insert(quiz.id.clone(), quiz);
    }

    /// Load every `.toml` / `.json` file in `dir`, sorted by file name.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize, CatalogueError> {
        let entries = fs::read_dir(dir)
            .map_err(|source| CatalogueError::ReadFile { path: dir.to_path_buf(), source })?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry =
                entry.map_err(|source| CatalogueError::ReadFile { path: dir.to_path_buf(), source })?;
            let path: PathBuf = entry.path();
            if path.is_file() && is_quiz_file(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        for path in &paths {
            self.insert(QuizDefinition::from_path(path)?);
        }
        Ok(paths.len())
    }

    pub fn get(&self, id: &str) -> Result<&QuizDefinition, CatalogueError> {
        self.quizzes.get(id).ok_or_else(|| CatalogueError::UnknownQuiz(id.to_string()))
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.quizzes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &QuizDefinition> {
        self.quizzes.values()
    }

    pub fn len(&self) -> usize {
        self.quizzes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quizzes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::Path;

    use tempfile::TempDir;

    use crate::errors::CatalogueError;

    use super::{QuizDefinition, QuizRegistry};

    const TOML_QUIZ: &str = r#"
title = "Coffee finder"

[[questions]]
id = "roast"
prompt = "How do you like your roast?"

[[questions.options]]
text = "Light"
scores = { fruity = 3, balanced = 1 }

[[questions.options]]
text = "Dark"
description = "Bold and smoky"
scores = { bold = 3 }

[[categories]]
key = "fruity"
name = "Fruity single origin"
features = ["Washed process"]
"#;

    #[test]
    fn builtin_registry_has_every_flow() {
        let registry = QuizRegistry::builtin();
        let ids: Vec<&str> = registry.ids().collect();

        assert_eq!(
            ids,
            vec!["creative-tiers", "landing-services", "festival-match", "wellness-systems"]
        );
    }

    #[test]
    fn builtin_catalogues_are_valid_and_fully_described() {
        for quiz in QuizRegistry::builtin().iter() {
            assert!(quiz.catalogue.validate().is_ok(), "{} should validate", quiz.id);
            assert!(!quiz.catalogue.is_empty(), "{} should have questions", quiz.id);
            for category in quiz.catalogue.categories() {
                assert!(
                    quiz.categories.get(category.as_str()).is_some(),
                    "{} is missing metadata for {category}",
                    quiz.id
                );
            }
        }
    }

    #[test]
    fn unknown_quiz_is_reported() {
        let registry = QuizRegistry::builtin();

        assert!(matches!(
            registry.get("tarot"),
            Err(CatalogueError::UnknownQuiz(ref id)) if id == "tarot"
        ));
    }

    #[test]
    fn toml_quiz_takes_id_from_file_stem() {
        let quiz = QuizDefinition::from_toml_str(TOML_QUIZ, Path::new("coffee.toml"))
            .expect("parse toml quiz");

        assert_eq!(quiz.id, "coffee");
        assert_eq!(quiz.title, "Coffee finder");
        assert_eq!(quiz.catalogue.len(), 1);
        let keys: Vec<&str> = quiz.catalogue.questions()[0].options[0]
            .scores
            .keys()
            .map(|key| key.as_str())
            .collect();
        assert_eq!(keys, vec!["fruity", "balanced"]);
        assert_eq!(quiz.categories.get("fruity").map(|entry| entry.features.len()), Some(1));
    }

    #[test]
    fn json_quiz_is_parsed_and_validated() {
        let raw = r#"{
            "id": "dupes",
            "questions": [
                {"id": "q", "prompt": "?", "options": [{"text": "a"}]},
                {"id": "q", "prompt": "?", "options": [{"text": "b"}]}
            ]
        }"#;

        let error = QuizDefinition::from_json_str(raw, Path::new("dupes.json"))
            .expect_err("duplicate ids should fail validation");

        assert!(matches!(error, CatalogueError::DuplicateQuestionId(_)));
    }

    #[test]
    fn malformed_toml_reports_path() {
        let error = QuizDefinition::from_toml_str("[[questions]\n", Path::new("broken.toml"))
            .expect_err("malformed toml should fail");

        assert!(error.to_string().contains("broken.toml"));
    }

    #[test]
    fn load_dir_registers_quiz_files_only() {
        let dir = TempDir::new().expect("temp dir");
        fs::write(dir.path().join("coffee.toml"), TOML_QUIZ).expect("write toml");
        fs::write(
            dir.path().join("tea.json"),
            r#"{"questions":[{"id":"leaf","prompt":"?","options":[{"text":"green","scores":{"green":1}}]}]}"#,
        )
        .expect("write json");
        fs::write(dir.path().join("notes.txt"), "ignored").expect("write txt");

        let mut registry = QuizRegistry::default();
        let loaded = registry.load_dir(dir.path()).expect("load dir");

        assert_eq!(loaded, 2);
        assert_eq!(registry.ids().collect::<Vec<_>>(), vec!["coffee", "tea"]);
    }

    #[test]
    fn load_dir_on_missing_directory_fails() {
        let mut registry = QuizRegistry::default();

        assert!(matches!(
            registry.load_dir(Path::new("/definitely/not/here")),
            Err(CatalogueError::ReadFile { .. })
        ));
    }
}
