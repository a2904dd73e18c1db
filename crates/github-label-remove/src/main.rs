mod cli;
mod color;
mod config;
mod output;

use anyhow::{anyhow, Result};
use clap::{CommandFactory, Parser};
use cli::Cli;
use config::{Config, ConfigError};
use github_backend::GitHubClient;
use label_core::{remove_labels, select_labels, RemoveError};
use output::{describe_failures, output_batch, output_error, progress_for, FAILURE_HEADER};
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Exit code for configuration problems, matching clap's usage errors
const CONFIG_ERROR_EXIT: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();

    color::init(cli.color);
    init_tracing();

    if cli.wants_help() {
        if let Err(e) = write_help(&mut std::io::stdout()) {
            error!("failed to print help: {e}");
            return ExitCode::from(1);
        }
        return ExitCode::SUCCESS;
    }

    if let Err(e) = run(&cli) {
        output_error(&e, cli.format);
        if e.downcast_ref::<ConfigError>().is_some() {
            return ExitCode::from(CONFIG_ERROR_EXIT);
        }
        return ExitCode::from(1);
    }

    ExitCode::SUCCESS
}

fn write_help(out: &mut impl Write) -> io::Result<()> {
    Cli::command().write_help(out)?;
    writeln!(out)?;
    out.flush()
}

/// Logs go to stderr, filtered by LABEL_REMOVE_LOG (e.g. `debug`)
fn init_tracing() {
    let filter =
        EnvFilter::try_from_env("LABEL_REMOVE_LOG").unwrap_or_else(|_| EnvFilter::new("error"));

    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal())
                .with_target(false),
        )
        .with(filter)
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let mut config = Config::load(cli.config.clone())?;
    config.merge_with_cli(cli.api.clone(), cli.token.clone(), cli.repo.clone());
    let connection = config.validate()?;

    let labels = select_labels(cli.defaults, cli.label.as_deref())
        .map_err(|_| ConfigError::NoLabelSelected)?;

    info!(
        repo = %connection.repository,
        api = %connection.api_base_url,
        count = labels.len(),
        "removing labels"
    );

    let client = GitHubClient::with_base_url(
        connection.api_base_url.as_str(),
        connection.repository,
        &connection.token,
    );
    let progress = progress_for(cli.format);

    let batch = match remove_labels(&client, &labels, progress.as_ref()) {
        Ok(batch) => batch,
        Err(RemoveError::Fatal { partial, message }) => {
            output_batch(&partial, client.repository(), cli.format);
            return Err(anyhow!(message).context(FAILURE_HEADER));
        }
        Err(e) => return Err(anyhow::Error::new(e).context(FAILURE_HEADER)),
    };

    output_batch(&batch, client.repository(), cli.format);

    if !batch.success() {
        let failed = batch.failures().count();
        return Err(anyhow!(
            "{} of {} labels could not be deleted: {}",
            failed,
            batch.len(),
            describe_failures(&batch)
        )
        .context(FAILURE_HEADER));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    #[test]
    fn test_write_help_output() {
        let mut out = Vec::new();
        write_help(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Usage"));
        assert!(text.contains("--defaults"));
    }

    #[test]
    fn test_write_help_reports_write_failure() {
        let err = write_help(&mut ClosedPipe).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
