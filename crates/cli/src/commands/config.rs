use std::env;
use std::fs;
use std::path::Path;

use fitquiz_core::config::{resolve_config_path, AppConfig, LoadOptions};
use toml::Value;

pub fn run() -> String {
    let config = match AppConfig::load(LoadOptions::default()) {
        Ok(config) => config,
        Err(error) => return format!("config validation failed: {error}"),
    };

    let config_file_path = resolve_config_path(None);
    let config_file_doc = load_config_file_doc(config_file_path.as_deref());
    let source = |key_path: &str, env_keys: &[&str]| {
        field_source(key_path, env_keys, config_file_doc.as_ref(), config_file_path.as_deref())
    };

    let catalogue_dir = config
        .recommend
        .catalogue_dir
        .as_ref()
        .map(|dir| dir.display().to_string())
        .unwrap_or_else(|| "<unset>".to_string());

    let lines = vec![
        "effective config (source precedence: env > file > default):".to_string(),
        render_line(
            "recommend.max_results",
            &config.recommend.max_results.to_string(),
            source("recommend.max_results", &["FITQUIZ_RECOMMEND_MAX_RESULTS"]),
        ),
        render_line(
            "recommend.default_quiz",
            &config.recommend.default_quiz,
            source("recommend.default_quiz", &["FITQUIZ_RECOMMEND_DEFAULT_QUIZ"]),
        ),
        render_line(
            "recommend.catalogue_dir",
            &catalogue_dir,
            source("recommend.catalogue_dir", &["FITQUIZ_RECOMMEND_CATALOGUE_DIR"]),
        ),
        render_line(
            "logging.level",
            &config.logging.level,
            source("logging.level", &["FITQUIZ_LOGGING_LEVEL", "FITQUIZ_LOG_LEVEL"]),
        ),
        render_line(
            "logging.format",
            &format!("{:?}", config.logging.format),
            source("logging.format", &["FITQUIZ_LOGGING_FORMAT", "FITQUIZ_LOG_FORMAT"]),
        ),
    ];

    lines.join("\n")
}

fn load_config_file_doc(path: Option<&Path>) -> Option<Value> {
    let path = path?;
    let raw = fs::read_to_string(path).ok()?;
    raw.parse::<Value>().ok()
}

fn field_source(
    key_path: &str,
    env_keys: &[&str],
    config_file_doc: Option<&Value>,
    config_file_path: Option<&Path>,
) -> String {
    let set_env = env_keys
        .iter()
        .find(|key| env::var(key).is_ok_and(|value| !value.trim().is_empty()));
    if let Some(env_key) = set_env {
        return format!("env ({env_key})");
    }

    if let Some(doc) = config_file_doc {
        if contains_path(doc, key_path) {
            let file_path = config_file_path
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "config file".to_string());
            return format!("file ({file_path})");
        }
    }

    "default".to_string()
}

fn contains_path(root: &Value, key_path: &str) -> bool {
    let mut current = root;
    for key in key_path.split('.') {
        let Some(next) = current.get(key) else {
            return false;
        };
        current = next;
    }
    true
}

fn render_line(key: &str, value: &str, source: String) -> String {
    format!("- {key} = {value} (source: {source})")
}
