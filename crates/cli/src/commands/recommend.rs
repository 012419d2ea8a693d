use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Args;
use fitquiz_core::config::{AppConfig, ConfigOverrides};
use fitquiz_core::{
    Answers, ApplicationError, QuizDefinition, QuizProgress, RecommendationEngine,
    RecommendationReport,
};

use crate::commands::{load_config, load_registry, CommandResult};

#[derive(Debug, Clone, Default, Args)]
pub struct RecommendArgs {
    #[arg(long, conflicts_with = "catalogue", help = "Quiz id (defaults to recommend.default_quiz)")]
    pub quiz: Option<String>,
    #[arg(long, value_name = "PATH", help = "Score against a TOML or JSON quiz file instead")]
    pub catalogue: Option<PathBuf>,
    #[arg(
        long = "answers",
        value_name = "PATH",
        help = "Saved answers: JSON object of question id to option index"
    )]
    pub answers_file: Option<PathBuf>,
    #[arg(
        long = "answer",
        value_name = "QUESTION=INDEX",
        help = "Select an option; repeatable, applied after --answers"
    )]
    pub answer: Vec<String>,
    #[arg(long, value_name = "N", help = "Maximum recommendations to print")]
    pub max: Option<usize>,
    #[arg(long, help = "Emit machine-readable JSON output")]
    pub json: bool,
}

pub fn run(args: &RecommendArgs) -> CommandResult {
    let (quiz, report) = match execute(args) {
        Ok(outcome) => outcome,
        Err(error) => return CommandResult::from_error("recommend", &error),
    };

    if args.json {
        return match serde_json::to_string_pretty(&report) {
            Ok(output) => CommandResult::text(output),
            Err(error) => {
                CommandResult::failure("recommend", "serialization", error.to_string(), 5)
            }
        };
    }

    CommandResult::text(render_human(&quiz, &report))
}

fn execute(args: &RecommendArgs) -> Result<(QuizDefinition, RecommendationReport), ApplicationError> {
    let config =
        load_config(ConfigOverrides { max_results: args.max, ..ConfigOverrides::default() })?;
    let quiz = resolve_quiz(args, &config)?;

    let saved = match &args.answers_file {
        Some(path) => {
            read_answers(path).map_err(|error| ApplicationError::Answers(format!("{error:#}")))?
        }
        None => Answers::new(),
    };

    // Saved answers may be stale and are scored leniently; flags are user input and checked.
    let mut progress = QuizProgress::resume(&quiz.catalogue, saved);
    for raw in &args.answer {
        let (question_id, index) = parse_answer_flag(raw)?;
        progress.select(question_id, index)?;
    }

    let engine = RecommendationEngine::with_max_results(config.recommend.max_results);
    let report = engine.report(&quiz, progress.answers());
    Ok((quiz, report))
}

fn resolve_quiz(args: &RecommendArgs, config: &AppConfig) -> Result<QuizDefinition, ApplicationError> {
    if let Some(path) = &args.catalogue {
        return Ok(QuizDefinition::from_path(path)?);
    }

    let registry = load_registry(config)?;
    let quiz_id = args.quiz.as_deref().unwrap_or(&config.recommend.default_quiz);
    Ok(registry.get(quiz_id)?.clone())
}

fn read_answers(path: &Path) -> anyhow::Result<Answers> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read answers file `{}`", path.display()))?;
    let answers = serde_json::from_str::<Answers>(&raw).with_context(|| {
        format!("`{}` must be a JSON object of question ids to option indexes", path.display())
    })?;
    Ok(answers)
}

fn parse_answer_flag(raw: &str) -> Result<(&str, usize), ApplicationError> {
    let invalid = || ApplicationError::Answers(format!("expected QUESTION=INDEX, got `{raw}`"));

    let (question_id, index) = raw.split_once('=').ok_or_else(invalid)?;
    let question_id = question_id.trim();
    if question_id.is_empty() {
        return Err(invalid());
    }
    let index = index.trim().parse::<usize>().map_err(|_| invalid())?;
    Ok((question_id, index))
}

fn render_human(quiz: &QuizDefinition, report: &RecommendationReport) -> String {
    let mut lines =
        vec![format!("{} ({}/{} answered)", quiz.title, report.answered, report.total)];

    if report.recommendations.is_empty() {
        lines.push("no recommendations yet: answer more questions".to_string());
        return lines.join("\n");
    }

    for recommendation in &report.recommendations {
        let metadata = &recommendation.metadata;
        let icon = if metadata.icon.is_empty() { String::new() } else { format!("{} ", metadata.icon) };
        lines.push(format!(
            "- {}: {icon}{} (score {})",
            recommendation.label, metadata.name, recommendation.score
        ));
        if !metadata.description.is_empty() {
            lines.push(format!("  {}", metadata.description));
        }
        if !metadata.features.is_empty() {
            lines.push(format!("  includes: {}", metadata.features.join(", ")));
        }
    }

    if !report.complete {
        lines.push("(preview: some questions are still unanswered)".to_string());
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::parse_answer_flag;

    #[test]
    fn parses_question_and_index() {
        let (question_id, index) = parse_answer_flag("budget=2").expect("valid flag");

        assert_eq!(question_id, "budget");
        assert_eq!(index, 2);
    }

    #[test]
    fn trims_whitespace_around_parts() {
        assert_eq!(parse_answer_flag(" budget = 1 ").ok(), Some(("budget", 1)));
    }

    #[test]
    fn rejects_malformed_flags() {
        for raw in ["budget", "=1", "budget=-1", "budget=two"] {
            let error = parse_answer_flag(raw).expect_err("flag should be rejected");
            assert_eq!(error.error_class(), "answers");
        }
    }
}
