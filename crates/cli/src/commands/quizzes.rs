use fitquiz_core::config::ConfigOverrides;
use serde::Serialize;

use crate::commands::{load_config, load_registry, CommandResult};

#[derive(Debug, Serialize)]
struct QuizSummary<'a> {
    id: &'a str,
    title: &'a str,
    questions: usize,
    categories: usize,
}

pub fn run(json_output: bool) -> CommandResult {
    let registry = match load_config(ConfigOverrides::default())
        .and_then(|config| load_registry(&config))
    {
        Ok(registry) => registry,
        Err(error) => return CommandResult::from_error("quizzes", &error),
    };

    let summaries: Vec<QuizSummary<'_>> = registry
        .iter()
        .map(|quiz| QuizSummary {
            id: &quiz.id,
            title: &quiz.title,
            questions: quiz.catalogue.len(),
            categories: quiz.categories.len(),
        })
        .collect();

    if json_output {
        return match serde_json::to_string_pretty(&summaries) {
            Ok(output) => CommandResult::text(output),
            Err(error) => CommandResult::failure("quizzes", "serialization", error.to_string(), 5),
        };
    }

    let mut lines = vec![format!("{} quizzes available:", summaries.len())];
    for summary in &summaries {
        lines.push(format!(
            "- {}: {} ({} questions, {} categories)",
            summary.id, summary.title, summary.questions, summary.categories
        ));
    }
    CommandResult::text(lines.join("\n"))
}
