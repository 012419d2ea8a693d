pub mod config;
pub mod doctor;
pub mod quizzes;
pub mod recommend;
pub mod show;

use fitquiz_core::config::{AppConfig, ConfigOverrides, LoadOptions};
use fitquiz_core::{ApplicationError, QuizRegistry};
use serde::Serialize;

#[derive(Debug, Clone)]
pub struct CommandResult {
    pub exit_code: u8,
    pub output: String,
}

#[derive(Debug, Serialize)]
struct CommandOutcome {
    command: String,
    status: String,
    error_class: Option<String>,
    message: String,
}

impl CommandResult {
    pub fn text(output: impl Into<String>) -> Self {
        Self { exit_code: 0, output: output.into() }
    }

    pub fn failure(
        command: &str,
        error_class: &str,
        message: impl Into<String>,
        exit_code: u8,
    ) -> Self {
        let payload = CommandOutcome {
            command: command.to_string(),
            status: "error".to_string(),
            error_class: Some(error_class.to_string()),
            message: message.into(),
        };
        Self { exit_code, output: serialize_payload(payload) }
    }

    pub fn from_error(command: &str, error: &ApplicationError) -> Self {
        Self::failure(command, error.error_class(), error.to_string(), error.exit_code())
    }
}

fn serialize_payload(payload: CommandOutcome) -> String {
    serde_json::to_string(&payload).unwrap_or_else(|error| {
        format!(
            "{{\"command\":\"unknown\",\"status\":\"error\",\"error_class\":\"serialization\",\"message\":\"{}\"}}",
            error.to_string().replace('\\', "\\\\").replace('"', "\\\"")
        )
    })
}

pub(crate) fn load_config(overrides: ConfigOverrides) -> Result<AppConfig, ApplicationError> {
    AppConfig::load(LoadOptions { overrides, ..LoadOptions::default() })
        .map_err(|error| ApplicationError::Configuration(error.to_string()))
}

/// Built-in quizzes plus any found in `recommend.catalogue_dir`.
pub(crate) fn load_registry(config: &AppConfig) -> Result<QuizRegistry, ApplicationError> {
    let mut registry = QuizRegistry::builtin();
    if let Some(dir) = &config.recommend.catalogue_dir {
        registry.load_dir(dir)?;
    }
    Ok(registry)
}
