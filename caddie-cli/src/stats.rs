//! Stats command: summarise a player's rounds.

use std::io::{self, Write};

use caddie_core::{HoleHistory, PlayerStatistics};
use caddie_stats::{RoundRecord, analyze_rounds, hole_history};
use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_STATS_COURSE, ARG_STATS_HOLE, ARG_STATS_ROUNDS, CliError, ENV_STATS_COURSE, ENV_STATS_HOLE,
    ENV_STATS_ROUNDS, read_json, require_file, write_json,
};

#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    about = "Summarise a player's round history",
    long_about = "Read a JSON array of rounds and print scoring statistics as JSON. \
                  Pass --course-id and --hole together to include that hole's history."
)]
#[ortho_config(prefix = "CADDIE")]
pub(crate) struct StatsArgs {
    /// Path to a JSON file containing an array of rounds.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) rounds_path: Option<Utf8PathBuf>,
    /// Player handicap index.
    #[arg(long, value_name = "index")]
    #[serde(default)]
    pub(crate) handicap: Option<f64>,
    /// Course to report hole history for.
    #[arg(long = ARG_STATS_COURSE, value_name = "id")]
    #[serde(default)]
    pub(crate) course_id: Option<String>,
    /// Hole number to report history for.
    #[arg(long = ARG_STATS_HOLE, value_name = "number")]
    #[serde(default)]
    pub(crate) hole: Option<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StatsConfig {
    pub(crate) rounds_path: Utf8PathBuf,
    pub(crate) handicap: Option<f64>,
    pub(crate) hole_query: Option<HoleQuery>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HoleQuery {
    pub(crate) course_id: String,
    pub(crate) hole: u8,
}

impl StatsArgs {
    pub(crate) fn into_config(self) -> Result<StatsConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        StatsConfig::try_from(merged)
    }
}

impl TryFrom<StatsArgs> for StatsConfig {
    type Error = CliError;

    fn try_from(args: StatsArgs) -> Result<Self, Self::Error> {
        let rounds_path = args.rounds_path.ok_or(CliError::MissingArgument {
            field: ARG_STATS_ROUNDS,
            env: ENV_STATS_ROUNDS,
        })?;
        let hole_query = match (args.course_id, args.hole) {
            (Some(course_id), Some(hole)) => Some(HoleQuery { course_id, hole }),
            (None, None) => None,
            (Some(_), None) => {
                return Err(CliError::MissingArgument {
                    field: ARG_STATS_HOLE,
                    env: ENV_STATS_HOLE,
                });
            }
            (None, Some(_)) => {
                return Err(CliError::MissingArgument {
                    field: ARG_STATS_COURSE,
                    env: ENV_STATS_COURSE,
                });
            }
        };
        Ok(Self {
            rounds_path,
            handicap: args.handicap,
            hole_query,
        })
    }
}

/// Output of the stats command.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct StatsReport {
    pub(crate) statistics: PlayerStatistics,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) hole_history: Option<HoleHistory>,
}

pub(crate) fn run_stats(args: StatsArgs) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_stats_with(args, &mut handle)
}

pub(crate) fn run_stats_with(args: StatsArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_stats(&config, writer)
}

pub(crate) fn execute_stats(config: &StatsConfig, writer: &mut dyn Write) -> Result<(), CliError> {
    require_file(ARG_STATS_ROUNDS, &config.rounds_path)?;
    let rounds: Vec<RoundRecord> = read_json(&config.rounds_path)?;
    log::info!("analysing {} rounds", rounds.len());
    let report = StatsReport {
        statistics: analyze_rounds(&rounds, config.handicap),
        hole_history: config
            .hole_query
            .as_ref()
            .and_then(|query| hole_history(&rounds, &query.course_id, query.hole)),
    };
    write_json(writer, &report)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<StatsConfig, CliError> {
    let merged = StatsArgs::merge_from_layers(layers).map_err(CliError::from)?;
    StatsConfig::try_from(merged)
}
