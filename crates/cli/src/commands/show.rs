use fitquiz_core::config::ConfigOverrides;
use fitquiz_core::{ApplicationError, QuizDefinition};

use crate::commands::{load_config, load_registry, CommandResult};

pub fn run(quiz_id: Option<&str>) -> CommandResult {
    let config = match load_config(ConfigOverrides::default()) {
        Ok(config) => config,
        Err(error) => return CommandResult::from_error("show", &error),
    };
    let registry = match load_registry(&config) {
        Ok(registry) => registry,
        Err(error) => return CommandResult::from_error("show", &error),
    };

    let quiz_id = quiz_id.unwrap_or(&config.recommend.default_quiz);
    match registry.get(quiz_id) {
        Ok(quiz) => CommandResult::text(render_quiz(quiz)),
        Err(error) => CommandResult::from_error("show", &ApplicationError::from(error)),
    }
}

fn render_quiz(quiz: &QuizDefinition) -> String {
    let mut lines = vec![format!("{} ({})", quiz.title, quiz.id)];

    for (position, question) in quiz.catalogue.questions().iter().enumerate() {
        lines.push(String::new());
        lines.push(format!("{}. {} [{}]", position + 1, question.prompt, question.id));
        if let Some(subtitle) = &question.subtitle {
            lines.push(format!("   {subtitle}"));
        }
        for (index, option) in question.options.iter().enumerate() {
            match &option.description {
                Some(description) => {
                    lines.push(format!("   [{index}] {}: {description}", option.text))
                }
                None => lines.push(format!("   [{index}] {}", option.text)),
            }
        }
    }

    lines.join("\n")
}
