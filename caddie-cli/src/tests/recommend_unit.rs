//! Recommend command configuration and output.

use super::helpers::{Workspace, parse_output};
use super::*;
use crate::recommend::{
    RecommendArgs, RecommendConfig, config_from_layers_for_test, execute_recommend,
    run_recommend_with,
};
use caddie_advisor::CaddieAdvisor;
use caddie_core::{Advisor, CaddieRecommendation, ShotRequest};
use rstest::rstest;

const BARE_REQUEST: &str = r#"{
    "hole": { "hole_number": 1, "par": 4, "yards": 400 },
    "distance": 150
}"#;

#[rstest]
fn converting_without_request_errors() {
    let err = RecommendConfig::try_from(RecommendArgs::default())
        .expect_err("missing request should error");
    match err {
        CliError::MissingArgument { field, env } => {
            assert_eq!(field, ARG_RECOMMEND_REQUEST);
            assert_eq!(env, ENV_RECOMMEND_REQUEST);
        }
        other => panic!("expected MissingArgument, found {other:?}"),
    }
}

#[rstest]
fn parsed_args_survive_configuration_merge() {
    let workspace = Workspace::new();
    let request_path = workspace.write("request.json", BARE_REQUEST);
    let args = RecommendArgs {
        request_path: Some(request_path.clone()),
    };

    let config = args.into_config().expect("merged config");
    assert_eq!(config.request_path, request_path);
}

#[rstest]
fn recommends_from_a_request_file() {
    let workspace = Workspace::new();
    let request_path = workspace.write("request.json", BARE_REQUEST);
    let config = RecommendConfig { request_path };

    let mut buffer = Vec::new();
    execute_recommend(&config, &CaddieAdvisor::new(), &mut buffer).expect("recommend succeeds");

    let output = parse_output(&buffer);
    assert_eq!(output["club"], "7iron");
    assert_eq!(output["target_yards"], 150);
    assert_eq!(output["raw_yards"], 150);
    assert_eq!(output["pin_light"], "green");
}

#[rstest]
fn run_uses_the_supplied_advisor() {
    struct Fixed(CaddieRecommendation);

    impl Advisor for Fixed {
        fn recommend(&self, _request: &ShotRequest) -> CaddieRecommendation {
            self.0.clone()
        }
    }

    let workspace = Workspace::new();
    let request_path = workspace.write("request.json", BARE_REQUEST);
    let canned = CaddieAdvisor::new().recommend(
        &ShotRequest::new(caddie_core::HoleContext::new(9, 3, 120)).with_distance(120),
    );
    let args = RecommendArgs {
        request_path: Some(request_path),
    };

    let mut buffer = Vec::new();
    run_recommend_with(args, &Fixed(canned), &mut buffer).expect("recommend succeeds");
    assert_eq!(parse_output(&buffer)["raw_yards"], 120);
}

#[rstest]
fn missing_request_file_is_reported() {
    let workspace = Workspace::new();
    let config = RecommendConfig {
        request_path: workspace.root().join("absent.json"),
    };
    let err = execute_recommend(&config, &CaddieAdvisor::new(), &mut Vec::new())
        .expect_err("absent file should fail");
    match err {
        CliError::MissingSourceFile { field, .. } => assert_eq!(field, ARG_RECOMMEND_REQUEST),
        other => panic!("expected MissingSourceFile, found {other:?}"),
    }
}

#[rstest]
fn directory_request_is_not_a_file() {
    let workspace = Workspace::new();
    let request_path = workspace.root().join("request.json");
    std::fs::create_dir(&request_path).expect("request directory");
    let err = execute_recommend(
        &RecommendConfig { request_path },
        &CaddieAdvisor::new(),
        &mut Vec::new(),
    )
    .expect_err("directory should fail");
    match err {
        CliError::SourcePathNotFile { field, .. } => assert_eq!(field, ARG_RECOMMEND_REQUEST),
        other => panic!("expected SourcePathNotFile, found {other:?}"),
    }
}

#[rstest]
fn malformed_request_reports_parse_error() {
    let workspace = Workspace::new();
    let request_path = workspace.write("request.json", r#"{ "distance": 150 }"#);
    let err = execute_recommend(
        &RecommendConfig {
            request_path: request_path.clone(),
        },
        &CaddieAdvisor::new(),
        &mut Vec::new(),
    )
    .expect_err("request without a hole should fail");
    match err {
        CliError::ParseInput { path, .. } => assert_eq!(path, request_path),
        other => panic!("expected ParseInput, found {other:?}"),
    }
}

#[rstest]
fn merge_layers_maps_configuration_errors() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let mut composer = MergeComposer::new();
    composer.push_cli(json!({ "request_path": 42 }));

    let err = config_from_layers_for_test(composer.layers())
        .expect_err("invalid config layer should map to CliError::Configuration");
    match err {
        CliError::Configuration(_) => {}
        other => panic!("expected CliError::Configuration, found {other:?}"),
    }
}

#[rstest]
fn cli_layer_overrides_environment() {
    use ortho_config::MergeComposer;
    use serde_json::json;

    let workspace = Workspace::new();
    let from_env = workspace.root().join("env.json");
    let from_cli = workspace.root().join("cli.json");
    let mut composer = MergeComposer::new();
    composer.push_environment(json!({ "request_path": from_env.as_str() }));
    composer.push_cli(json!({ "request_path": from_cli.as_str() }));

    let config = config_from_layers_for_test(composer.layers()).expect("merged config");
    assert_eq!(config.request_path, from_cli);
}
