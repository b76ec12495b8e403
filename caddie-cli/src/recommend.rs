//! Recommend command: read a shot request and print the caddie's advice.

use std::io::{self, Write};

use caddie_advisor::CaddieAdvisor;
use caddie_core::{Advisor, ShotRequest};
use camino::Utf8PathBuf;
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};

use crate::{
    ARG_RECOMMEND_REQUEST, CliError, ENV_RECOMMEND_REQUEST, read_json, require_file, write_json,
};

#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    about = "Recommend a club and target for one shot",
    long_about = "Read a JSON shot request and print the recommendation as JSON."
)]
#[ortho_config(prefix = "CADDIE")]
pub(crate) struct RecommendArgs {
    /// Path to a JSON file containing the shot request.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RecommendConfig {
    pub(crate) request_path: Utf8PathBuf,
}

impl RecommendArgs {
    pub(crate) fn into_config(self) -> Result<RecommendConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        RecommendConfig::try_from(merged)
    }
}

impl TryFrom<RecommendArgs> for RecommendConfig {
    type Error = CliError;

    fn try_from(args: RecommendArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_RECOMMEND_REQUEST,
            env: ENV_RECOMMEND_REQUEST,
        })?;
        Ok(Self { request_path })
    }
}

pub(crate) fn run_recommend(args: RecommendArgs) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_recommend_with(args, &CaddieAdvisor::new(), &mut handle)
}

pub(crate) fn run_recommend_with(
    args: RecommendArgs,
    advisor: &dyn Advisor,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let config = args.into_config()?;
    execute_recommend(&config, advisor, writer)
}

pub(crate) fn execute_recommend(
    config: &RecommendConfig,
    advisor: &dyn Advisor,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    require_file(ARG_RECOMMEND_REQUEST, &config.request_path)?;
    let request: ShotRequest = read_json(&config.request_path)?;
    log::info!(
        "recommending hole {} from {} yards",
        request.hole.hole_number,
        request.raw_distance()
    );
    let recommendation = advisor.recommend(&request);
    write_json(writer, &recommendation)
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<RecommendConfig, CliError> {
    let merged = RecommendArgs::merge_from_layers(layers).map_err(CliError::from)?;
    RecommendConfig::try_from(merged)
}
