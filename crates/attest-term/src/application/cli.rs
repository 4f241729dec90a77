use std::path;

use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::Arg;
use clap::Command;
use strum::IntoEnumIterator;
use tracing_appender::non_blocking::WorkerGuard;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ExecutorName;

pub fn build() -> Command {
    return Command::new("attest-term")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Interactive command console for the attest workspace")
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .long(ConfigKey::ConfigFile.to_string())
                .help(format!(
                    "Path to the configuration file [default: {}]",
                    Config::default(ConfigKey::ConfigFile)
                )),
        )
        .arg(
            Arg::new(ConfigKey::Executor.to_string())
                .long(ConfigKey::Executor.to_string())
                .value_parser(PossibleValuesParser::new(
                    ExecutorName::iter()
                        .map(|e| return e.to_string())
                        .collect::<Vec<String>>(),
                ))
                .help(format!(
                    "Which executor runs submitted commands [default: {}]",
                    Config::default(ConfigKey::Executor)
                )),
        )
        .arg(
            Arg::new(ConfigKey::ShellServiceUrl.to_string())
                .long(ConfigKey::ShellServiceUrl.to_string())
                .help(format!(
                    "Base URL of the shell service [default: {}]",
                    Config::default(ConfigKey::ShellServiceUrl)
                )),
        )
        .arg(
            Arg::new(ConfigKey::LogFile.to_string())
                .long(ConfigKey::LogFile.to_string())
                .help(format!(
                    "File logs are written to, keeping the console clean [default: {}]",
                    Config::default(ConfigKey::LogFile)
                )),
        )
        .arg(
            Arg::new(ConfigKey::LogLevel.to_string())
                .long(ConfigKey::LogLevel.to_string())
                .value_parser(PossibleValuesParser::new([
                    "error", "warn", "info", "debug", "trace",
                ]))
                .help(format!(
                    "Log verbosity [default: {}]",
                    Config::default(ConfigKey::LogLevel)
                )),
        )
        .subcommand(Command::new("config").about("Print the default configuration file"));
}

/// Sends logs to the configured file so the raw-mode screen stays clean.
/// The returned guard must live as long as the process; dropping it stops
/// the background writer.
pub fn setup_tracing() -> Result<WorkerGuard> {
    let log_file = path::PathBuf::from(Config::get(ConfigKey::LogFile));
    let directory = log_file
        .parent()
        .map(path::Path::to_path_buf)
        .unwrap_or_else(|| path::PathBuf::from("."));
    let file_name = log_file
        .file_name()
        .map(|name| return name.to_string_lossy().to_string())
        .unwrap_or_else(|| "attest-term.log".to_string());

    std::fs::create_dir_all(&directory)?;
    let appender = tracing_appender::rolling::never(&directory, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let level = Config::get(ConfigKey::LogLevel)
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(writer)
        .with_ansi(false)
        .init();

    return Ok(guard);
}
