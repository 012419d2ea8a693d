use fitquiz_core::config::{AppConfig, LoadOptions};
use fitquiz_core::QuizRegistry;
use serde::Serialize;

use crate::commands::CommandResult;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
    Skipped,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> CommandResult {
    let report = build_report();
    let exit_code = if report.overall_status == CheckStatus::Pass { 0 } else { 1 };

    let output = if json_output {
        serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        })
    } else {
        render_human(&report)
    };

    CommandResult { exit_code, output }
}

fn build_report() -> DoctorReport {
    let mut checks = Vec::new();

    match AppConfig::load(LoadOptions::default()) {
        Ok(config) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Pass,
                details: "configuration loaded and validated".to_string(),
            });
            let mut registry = QuizRegistry::builtin();
            checks.push(check_builtin_catalogues(&registry));
            checks.push(check_catalogue_dir(&config, &mut registry));
            checks.push(check_default_quiz(&config, &registry));
        }
        Err(error) => {
            checks.push(DoctorCheck {
                name: "config_validation",
                status: CheckStatus::Fail,
                details: error.to_string(),
            });
            for name in ["builtin_catalogues", "catalogue_dir", "default_quiz"] {
                checks.push(DoctorCheck {
                    name,
                    status: CheckStatus::Skipped,
                    details: "skipped because configuration did not load".to_string(),
                });
            }
        }
    }

    let any_fail = checks.iter().any(|check| check.status == CheckStatus::Fail);
    let overall_status = if any_fail { CheckStatus::Fail } else { CheckStatus::Pass };
    let summary = if any_fail {
        "doctor: one or more readiness checks failed".to_string()
    } else {
        "doctor: all readiness checks passed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_builtin_catalogues(registry: &QuizRegistry) -> DoctorCheck {
    let mut problems = Vec::new();

    for quiz in registry.iter() {
        if let Err(error) = quiz.catalogue.validate() {
            problems.push(format!("{}: {error}", quiz.id));
        }
        for category in quiz.catalogue.categories() {
            if quiz.categories.get(category.as_str()).is_none() {
                problems.push(format!("{}: no metadata for category `{category}`", quiz.id));
            }
        }
    }

    if problems.is_empty() {
        DoctorCheck {
            name: "builtin_catalogues",
            status: CheckStatus::Pass,
            details: format!("{} built-in quizzes validated", registry.len()),
        }
    } else {
        DoctorCheck {
            name: "builtin_catalogues",
            status: CheckStatus::Fail,
            details: problems.join("; "),
        }
    }
}

fn check_catalogue_dir(config: &AppConfig, registry: &mut QuizRegistry) -> DoctorCheck {
    let Some(dir) = &config.recommend.catalogue_dir else {
        return DoctorCheck {
            name: "catalogue_dir",
            status: CheckStatus::Skipped,
            details: "recommend.catalogue_dir is not set".to_string(),
        };
    };

    match registry.load_dir(dir) {
        Ok(count) => DoctorCheck {
            name: "catalogue_dir",
            status: CheckStatus::Pass,
            details: format!("loaded {count} quiz files from `{}`", dir.display()),
        },
        Err(error) => {
            DoctorCheck { name: "catalogue_dir", status: CheckStatus::Fail, details: error.to_string() }
        }
    }
}

fn check_default_quiz(config: &AppConfig, registry: &QuizRegistry) -> DoctorCheck {
    match registry.get(&config.recommend.default_quiz) {
        Ok(quiz) => DoctorCheck {
            name: "default_quiz",
            status: CheckStatus::Pass,
            details: format!("`{}` resolves to \"{}\"", quiz.id, quiz.title),
        },
        Err(error) => {
            DoctorCheck { name: "default_quiz", status: CheckStatus::Fail, details: error.to_string() }
        }
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
            CheckStatus::Skipped => "skip",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
