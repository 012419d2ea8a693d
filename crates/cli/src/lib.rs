pub mod commands;

use clap::{Parser, Subcommand};
use fitquiz_core::config::{AppConfig, LoadOptions, LogFormat};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(
    name = "fitquiz",
    about = "Fitquiz recommendation CLI",
    long_about = "Score quiz answers against a question catalogue and print the best-fit categories.",
    after_help = "Examples:\n  fitquiz quizzes\n  fitquiz show festival-match\n  fitquiz recommend --quiz creative-tiers --answer budget=3 --answer turnaround=2\n  fitquiz recommend --catalogue my-quiz.toml --answers saved.json --json\n  fitquiz doctor --json"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "List the available quizzes")]
    Quizzes {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
    #[command(about = "Print a quiz's questions and options in order")]
    Show {
        #[arg(help = "Quiz id (defaults to recommend.default_quiz)")]
        quiz: Option<String>,
    },
    #[command(about = "Score answers and print ranked recommendations")]
    Recommend(commands::recommend::RecommendArgs),
    #[command(
        about = "Inspect effective configuration values with source attribution"
    )]
    Config,
    #[command(about = "Validate config and every known quiz catalogue")]
    Doctor {
        #[arg(long, help = "Emit machine-readable JSON output")]
        json: bool,
    },
}

fn init_logging(config: &AppConfig) {
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let builder = tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(log_level)
        .with_writer(std::io::stderr);

    let _ = match config.logging.format {
        LogFormat::Compact => builder.compact().try_init(),
        LogFormat::Pretty => builder.pretty().try_init(),
        LogFormat::Json => builder.json().try_init(),
    };
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    // Commands report config failures themselves; logging just falls back to off.
    if let Ok(config) = AppConfig::load(LoadOptions::default()) {
        init_logging(&config);
    }

    let result = match cli.command {
        Command::Quizzes { json } => commands::quizzes::run(json),
        Command::Show { quiz } => commands::show::run(quiz.as_deref()),
        Command::Recommend(args) => commands::recommend::run(&args),
        Command::Config => commands::CommandResult::text(commands::config::run()),
        Command::Doctor { json } => commands::doctor::run(json),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
