use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::recommend::DEFAULT_MAX_RECOMMENDATIONS;

/// Upper bound on how many recommendations a caller may ask for.
pub const MAX_RESULTS_LIMIT: usize = 50;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub recommend: RecommendConfig,
    pub logging: LoggingConfig,
}

#[derive(Clone, Debug)]
pub struct RecommendConfig {
    pub max_results: usize,
    pub default_quiz: String,
    pub catalogue_dir: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, Default)]
pub struct ConfigOverrides {
    pub max_results: Option<usize>,
    pub default_quiz: Option<String>,
    pub catalogue_dir: Option<PathBuf>,
    pub log_level: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct LoadOptions {
    pub config_path: Option<PathBuf>,
    pub require_file: bool,
    pub overrides: ConfigOverrides,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file `{path}`: {source}")]
    ReadFile { path: PathBuf, source: std::io::Error },
    #[error("could not parse config file `{path}`: {source}")]
    ParseFile { path: PathBuf, source: toml::de::Error },
    #[error("required config file was not found: `{0}`")]
    MissingConfigFile(PathBuf),
    #[error("environment variable interpolation failed for `{var}`")]
    MissingEnvInterpolation { var: String },
    #[error("unterminated environment interpolation expression")]
    UnterminatedInterpolation,
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recommend: RecommendConfig {
                max_results: DEFAULT_MAX_RECOMMENDATIONS,
                default_quiz: "creative-tiers".to_string(),
                catalogue_dir: None,
            },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

impl std::str::FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl AppConfig {
    pub fn load(options: LoadOptions) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let maybe_path = resolve_config_path(options.config_path.as_deref());

        if let Some(path) = maybe_path {
            let patch = read_patch(&path)?;
            config.apply_patch(patch);
        } else if options.require_file {
            let expected = options.config_path.unwrap_or_else(|| PathBuf::from("fitquiz.toml"));
            return Err(ConfigError::MissingConfigFile(expected));
        }

        config.apply_env_overrides()?;
        config.apply_overrides(options.overrides);
        config.validate()?;

        Ok(config)
    }

    fn apply_patch(&mut self, patch: ConfigPatch) {
        if let Some(recommend) = patch.recommend {
            if let Some(max_results) = recommend.max_results {
                self.recommend.max_results = max_results;
            }
            if let Some(default_quiz) = recommend.default_quiz {
                self.recommend.default_quiz = default_quiz;
            }
            if let Some(catalogue_dir) = recommend.catalogue_dir {
                self.recommend.catalogue_dir = Some(catalogue_dir);
            }
        }

        if let Some(logging) = patch.logging {
            if let Some(level) = logging.level {
                self.logging.level = level;
            }
            if let Some(format) = logging.format {
                self.logging.format = format;
            }
        }
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = read_env("FITQUIZ_RECOMMEND_MAX_RESULTS") {
            self.recommend.max_results = parse_usize("FITQUIZ_RECOMMEND_MAX_RESULTS", &value)?;
        }
        if let Some(value) = read_env("FITQUIZ_RECOMMEND_DEFAULT_QUIZ") {
            self.recommend.default_quiz = value;
        }
        if let Some(value) = read_env("FITQUIZ_RECOMMEND_CATALOGUE_DIR") {
            self.recommend.catalogue_dir = Some(PathBuf::from(value));
        }

        let log_level =
            read_env("FITQUIZ_LOGGING_LEVEL").or_else(|| read_env("FITQUIZ_LOG_LEVEL"));
        if let Some(value) = log_level {
            self.logging.level = value;
        }
        let log_format =
            read_env("FITQUIZ_LOGGING_FORMAT").or_else(|| read_env("FITQUIZ_LOG_FORMAT"));
        if let Some(value) = log_format {
            self.logging.format = value.parse()?;
        }

        Ok(())
    }

    fn apply_overrides(&mut self, overrides: ConfigOverrides) {
        if let Some(max_results) = overrides.max_results {
            self.recommend.max_results = max_results;
        }
        if let Some(default_quiz) = overrides.default_quiz {
            self.recommend.default_quiz = default_quiz;
        }
        if let Some(catalogue_dir) = overrides.catalogue_dir {
            self.recommend.catalogue_dir = Some(catalogue_dir);
        }
        if let Some(log_level) = overrides.log_level {
            self.logging.level = log_level;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_recommend(&self.recommend)?;
        validate_logging(&self.logging)?;
        Ok(())
    }
}

/// Config file that would be read for `explicit_path`, if any exists.
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        return path.exists().then_some(path.to_path_buf());
    }

    [PathBuf::from("fitquiz.toml"), PathBuf::from("config/fitquiz.toml")]
        .into_iter()
        .find(|path| path.exists())
}

fn read_patch(path: &Path) -> Result<ConfigPatch, ConfigError> {
    let raw = fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadFile { path: path.to_path_buf(), source })?;

    let interpolated = interpolate_env_vars(&raw)?;
    toml::from_str::<ConfigPatch>(&interpolated)
        .map_err(|source| ConfigError::ParseFile { path: path.to_path_buf(), source })
}

fn interpolate_env_vars(input: &str) -> Result<String, ConfigError> {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '$' && matches!(chars.peek(), Some('{')) {
            chars.next();
            let mut key = String::new();

            loop {
                match chars.next() {
                    Some('}') => break,
                    Some(next) => key.push(next),
                    None => return Err(ConfigError::UnterminatedInterpolation),
                }
            }

            let value = env::var(&key)
                .map_err(|_| ConfigError::MissingEnvInterpolation { var: key.clone() })?;
            output.push_str(&value);
            continue;
        }

        output.push(ch);
    }

    Ok(output)
}

fn validate_recommend(recommend: &RecommendConfig) -> Result<(), ConfigError> {
    if recommend.max_results == 0 || recommend.max_results > MAX_RESULTS_LIMIT {
        return Err(ConfigError::Validation(format!(
            "recommend.max_results must be in range 1..={MAX_RESULTS_LIMIT}"
        )));
    }

    if recommend.default_quiz.trim().is_empty() {
        return Err(ConfigError::Validation(
            "recommend.default_quiz must not be empty".to_string(),
        ));
    }

    if let Some(dir) = &recommend.catalogue_dir {
        if !dir.is_dir() {
            return Err(ConfigError::Validation(format!(
                "recommend.catalogue_dir `{}` is not a directory",
                dir.display()
            )));
        }
    }

    Ok(())
}

fn validate_logging(logging: &LoggingConfig) -> Result<(), ConfigError> {
    let level = logging.level.trim().to_ascii_lowercase();
    match level.as_str() {
        "trace" | "debug" | "info" | "warn" | "error" => Ok(()),
        _ => Err(ConfigError::Validation(
            "logging.level must be one of trace|debug|info|warn|error".to_string(),
        )),
    }
}

fn read_env(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

fn parse_usize(key: &str, value: &str) -> Result<usize, ConfigError> {
    value.trim().parse::<usize>().map_err(|_| ConfigError::InvalidEnvOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

#[derive(Debug, Default, Deserialize)]
struct ConfigPatch {
    recommend: Option<RecommendPatch>,
    logging: Option<LoggingPatch>,
}

#[derive(Debug, Default, Deserialize)]
struct RecommendPatch {
    max_results: Option<usize>,
    default_quiz: Option<String>,
    catalogue_dir: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
struct LoggingPatch {
    level: Option<String>,
    format: Option<LogFormat>,
}
