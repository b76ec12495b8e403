//! Command-line interface for the caddie engine.
//!
//! Two subcommands read JSON from disk and print JSON to stdout:
//! `recommend` answers a single shot request and `stats` summarises a
//! player's round history. Arguments are layered with configuration files
//! and `CADDIE_`-prefixed environment variables.

#![forbid(unsafe_code)]

use std::io::{BufReader, Write};

use camino::Utf8Path;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde::de::DeserializeOwned;

mod error;
mod fs;
mod logging;
mod recommend;
mod stats;

pub use error::CliError;
pub use logging::init as init_logging;

use recommend::{RecommendArgs, run_recommend};
use stats::{StatsArgs, run_stats};

pub(crate) const ARG_RECOMMEND_REQUEST: &str = "request";
pub(crate) const ENV_RECOMMEND_REQUEST: &str = "CADDIE_CMDS_RECOMMEND_REQUEST_PATH";
pub(crate) const ARG_STATS_ROUNDS: &str = "rounds";
pub(crate) const ENV_STATS_ROUNDS: &str = "CADDIE_CMDS_STATS_ROUNDS_PATH";
pub(crate) const ARG_STATS_COURSE: &str = "course-id";
pub(crate) const ENV_STATS_COURSE: &str = "CADDIE_CMDS_STATS_COURSE_ID";
pub(crate) const ARG_STATS_HOLE: &str = "hole";
pub(crate) const ENV_STATS_HOLE: &str = "CADDIE_CMDS_STATS_HOLE";

/// Parse arguments, install logging, and run the selected command.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse().map_err(CliError::ArgumentParsing)?;
    if !init_logging() {
        log::debug!("log subscriber already installed");
    }
    match cli.command {
        Command::Recommend(args) => run_recommend(args),
        Command::Stats(args) => run_stats(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "caddie",
    about = "Golf caddie recommendations and statistics",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Recommend a club and target for one shot.
    Recommend(RecommendArgs),
    /// Summarise a player's round history.
    Stats(StatsArgs),
}

/// Fail unless `path` names an existing regular file.
pub(crate) fn require_file(field: &'static str, path: &Utf8Path) -> Result<(), CliError> {
    match fs::file_is_file(path) {
        Ok(true) => Ok(()),
        Ok(false) => Err(CliError::SourcePathNotFile {
            field,
            path: path.to_path_buf(),
        }),
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            Err(CliError::MissingSourceFile {
                field,
                path: path.to_path_buf(),
            })
        }
        Err(source) => Err(CliError::InspectSourcePath {
            field,
            path: path.to_path_buf(),
            source,
        }),
    }
}

pub(crate) fn read_json<T: DeserializeOwned>(path: &Utf8Path) -> Result<T, CliError> {
    let file = fs::open_utf8_file(path).map_err(|source| CliError::OpenInput {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_reader(BufReader::new(file)).map_err(|source| CliError::ParseInput {
        path: path.to_path_buf(),
        source,
    })
}

pub(crate) fn write_json<T: Serialize + ?Sized>(
    writer: &mut dyn Write,
    value: &T,
) -> Result<(), CliError> {
    let payload = serde_json::to_string_pretty(value).map_err(CliError::SerialiseOutput)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WriteOutput)?;
    writer.write_all(b"\n").map_err(CliError::WriteOutput)?;
    Ok(())
}

#[cfg(test)]
mod tests;
