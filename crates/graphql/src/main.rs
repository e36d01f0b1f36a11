mod cli;
mod command;
mod command_result;
mod commands;
mod input_files;
mod output_utils;

use clap::Parser;
pub(crate) use cli::Cli;
pub(crate) use command::RunnableCommand;
pub(crate) use command_result::CommandResult;

const DEFAULT_LOG_LEVEL: tracing::Level = tracing::Level::INFO;

#[tokio::main(flavor = "multi_thread", worker_threads = 10)]
async fn main() -> std::process::ExitCode {
    let mut cli = Cli::parse();
    setup_logger(&cli);

    let Some(command) = cli.cmd.take() else {
        return match cli.run_default().await {
            Ok(()) => std::process::ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{} {e:#}", output_utils::RED_X);
                std::process::ExitCode::FAILURE
            },
        };
    };

    let result = command.run(cli).await;
    if let Some(stdout) = result.stdout {
        println!("{stdout}");
    }
    if let Some(stderr) = result.stderr {
        eprintln!("{stderr}")
    }
    result.exit_code
}

/// Picks the log level: `--verbose` wins, then `LOG_LEVEL`, then the
/// default. An unrecognized `LOG_LEVEL` yields a warning to report once
/// logging is up.
fn resolve_log_level(
    verbose: bool,
    env_val: Option<&str>,
) -> (tracing::Level, Option<String>) {
    if verbose {
        return (tracing::Level::DEBUG, None);
    }
    match env_val.map(str::trim) {
        Some("DEBUG" | "debug" | "VERBOSE" | "verbose") => (tracing::Level::DEBUG, None),
        Some("INFO" | "info") => (tracing::Level::INFO, None),
        Some("TRACE" | "trace") => (tracing::Level::TRACE, None),
        Some("WARN" | "warn") => (tracing::Level::WARN, None),
        Some(other) => (
            DEFAULT_LOG_LEVEL,
            Some(format!("Invalid `LOG_LEVEL` environment variable value: `{other}`")),
        ),
        None => (DEFAULT_LOG_LEVEL, None),
    }
}

fn setup_logger(cli: &Cli) {
    let env_val = std::env::var("LOG_LEVEL").ok();
    let (log_level, warning) = resolve_log_level(cli.verbose, env_val.as_deref());

    // Diagnostics go to stderr so `fmt` output stays pipeable.
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .init();
    log::trace!("Initial logging level set to `{log_level}`.");

    if let Some(warning) = warning {
        log::warn!("{warning}");
    }
}

#[cfg(test)]
mod tests {
    use super::DEFAULT_LOG_LEVEL;
    use super::resolve_log_level;

    #[test]
    fn verbose_overrides_the_environment() {
        assert_eq!(
            resolve_log_level(true, Some("trace")),
            (tracing::Level::DEBUG, None),
        );
    }

    #[test]
    fn environment_values() {
        assert_eq!(resolve_log_level(false, None), (DEFAULT_LOG_LEVEL, None));
        assert_eq!(
            resolve_log_level(false, Some(" TRACE ")),
            (tracing::Level::TRACE, None),
        );
        assert_eq!(
            resolve_log_level(false, Some("verbose")),
            (tracing::Level::DEBUG, None),
        );
        let (level, warning) = resolve_log_level(false, Some("loud"));
        assert_eq!(level, DEFAULT_LOG_LEVEL);
        assert_eq!(
            warning.as_deref(),
            Some("Invalid `LOG_LEVEL` environment variable value: `loud`"),
        );
    }
}
