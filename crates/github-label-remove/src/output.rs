use crate::cli::OutputFormat;
use crate::config::ConfigError;
use colored::Colorize;
use label_core::{BatchResult, DeletionOutcome, LabelResult, NoProgress, Progress, RepositoryId};
use serde::Serialize;

/// Header used for every deletion failure
pub const FAILURE_HEADER: &str = "UNABLE TO DELETE";

/// Per-label progress lines on stderr
pub struct TextProgress;

impl Progress for TextProgress {
    fn begin(&self, repository: &RepositoryId, total: usize) {
        let noun = if total == 1 { "label" } else { "labels" };
        eprintln!(
            "{} {} {} from {}…",
            "DELETING".yellow(),
            total,
            noun,
            repository.to_string().cyan()
        );
    }

    fn finished(&self, name: &str, outcome: &DeletionOutcome) {
        match outcome {
            DeletionOutcome::Deleted => eprintln!("  {} {}", "✔".green(), name),
            DeletionOutcome::NotFound => {
                eprintln!("  {} {} {}", "ℹ".blue(), name, "(not found)".dimmed())
            }
            DeletionOutcome::Failed { reason } => {
                eprintln!("  {} {}: {}", "✖".red(), name, reason.red())
            }
        }
    }
}

/// Progress reporter for the chosen output format; JSON output stays silent
pub fn progress_for(format: OutputFormat) -> Box<dyn Progress> {
    match format {
        OutputFormat::Text => Box::new(TextProgress),
        OutputFormat::Json => Box::new(NoProgress),
    }
}

#[derive(Serialize)]
struct JsonBatch<'a> {
    repository: String,
    success: bool,
    deleted: usize,
    not_found: usize,
    failed: usize,
    results: &'a [LabelResult],
}

pub fn output_batch(batch: &BatchResult, repository: &RepositoryId, format: OutputFormat) {
    match format {
        OutputFormat::Json => {
            let report = JsonBatch {
                repository: repository.to_string(),
                success: batch.success(),
                deleted: batch.deleted().count(),
                not_found: batch.not_found().count(),
                failed: batch.failures().count(),
                results: &batch.results,
            };
            if let Ok(json) = serde_json::to_string_pretty(&report) {
                println!("{}", json);
            }
        }
        OutputFormat::Text => {
            let counts = format!(
                "{} deleted, {} not found, {} failed",
                batch.deleted().count(),
                batch.not_found().count(),
                batch.failures().count()
            );
            if batch.success() {
                println!("{} labels from {} ({})", "DELETED".green().bold(), repository, counts);
            } else {
                println!("{} ({})", repository, counts.dimmed());
            }
        }
    }
}

/// One-line summary of every failed label, used in the final error message
pub fn describe_failures(batch: &BatchResult) -> String {
    batch
        .failures()
        .map(|r| match &r.outcome {
            DeletionOutcome::Failed { reason } => format!("'{}' ({})", r.name, reason),
            _ => format!("'{}'", r.name),
        })
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Serialize)]
pub struct JsonError {
    pub error: bool,
    pub code: String,
    pub message: String,
}

pub fn output_error(err: &anyhow::Error, format: OutputFormat) {
    let message = match format {
        OutputFormat::Json => {
            let code = if err.downcast_ref::<ConfigError>().is_some() {
                "config_error"
            } else {
                "delete_failed"
            };
            let json_err = JsonError {
                error: true,
                code: code.to_string(),
                message: format!("{:#}", err),
            };
            serde_json::to_string_pretty(&json_err).unwrap_or_else(|_| {
                format!(r#"{{"error": true, "message": "{}"}}"#, err)
            })
        }
        OutputFormat::Text => format!("{}: {:#}", "Error".red().bold(), err),
    };
    eprintln!("{}", message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe_failures_lists_each_label() {
        let mut batch = BatchResult::default();
        batch.push("bug", DeletionOutcome::Deleted);
        batch.push(
            "duplicate",
            DeletionOutcome::Failed {
                reason: "API error (500): Server Error".to_string(),
            },
        );
        batch.push(
            "question",
            DeletionOutcome::Failed {
                reason: "Authentication failed".to_string(),
            },
        );

        assert_eq!(
            describe_failures(&batch),
            "'duplicate' (API error (500): Server Error), 'question' (Authentication failed)"
        );
    }
}
