use clap::{Arg, ArgAction, Command};

use crate::internal::config::AppConfig;
use crate::internal::suite::SuiteReport;

/// Every selected case passed
pub const EXIT_OK: i32 = 0;
/// At least one case failed, errored or hit a setup problem
pub const EXIT_FAILURES: i32 = 1;
/// Configuration, logging or client setup failed before any case ran
pub const EXIT_CONFIG: i32 = 2;

pub fn exit_code(report: &SuiteReport) -> i32 {
    if report.is_success() {
        EXIT_OK
    } else {
        EXIT_FAILURES
    }
}

pub fn build_cli() -> Command {
    // Leak the version string to get a 'static lifetime
    let version: &'static str =
        Box::leak(crate::internal::config::get_version_info().into_boxed_str());

    Command::new("reqres-suite")
        .version(version)
        .about("Schema-validated black-box API suite for the reqres mock service")
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Path to config file (default: ./reqres-suite.yaml, /etc/reqres-suite/config.yaml)"),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .help("Base URL of the service under test (e.g., https://reqres.in/api)"),
        )
        .arg(
            Arg::new("schemas-dir")
                .long("schemas-dir")
                .help("Directory holding the JSON Schema files"),
        )
        .arg(
            Arg::new("filter")
                .long("filter")
                .short('f')
                .help("Only run cases whose name contains this text"),
        )
        .arg(
            Arg::new("concurrency")
                .long("concurrency")
                .short('j')
                .value_parser(clap::value_parser!(usize))
                .help("Number of cases to run at once"),
        )
        .arg(
            Arg::new("header")
                .long("header")
                .short('H')
                .action(ArgAction::Append)
                .help("Extra request header as NAME:VALUE, may be repeated"),
        )
        .arg(
            Arg::new("list")
                .long("list")
                .action(ArgAction::SetTrue)
                .help("Print the case names and exit"),
        )
}

/// Load the config file layers, then apply command line overrides
pub fn parse_config(matches: &clap::ArgMatches) -> anyhow::Result<AppConfig> {
    let config_file = matches.get_one::<String>("config").map(String::as_str);
    let config = AppConfig::load_with(config_file)?;
    apply_overrides(config, matches)
}

/// Command line values win over whatever the config layers produced
pub fn apply_overrides(
    mut config: AppConfig,
    matches: &clap::ArgMatches,
) -> anyhow::Result<AppConfig> {
    if let Some(url) = matches.get_one::<String>("base-url") {
        config.endpoint.base_url = url.clone();
    }
    if let Some(dir) = matches.get_one::<String>("schemas-dir") {
        config.schemas.dir = dir.clone();
    }
    if let Some(filter) = matches.get_one::<String>("filter") {
        config.runner.filter = Some(filter.clone());
    }
    if let Some(concurrency) = matches.get_one::<usize>("concurrency") {
        if *concurrency == 0 {
            anyhow::bail!("--concurrency must be at least 1");
        }
        config.runner.concurrency = *concurrency;
    }
    if let Some(headers) = matches.get_many::<String>("header") {
        for raw in headers {
            let (name, value) = raw
                .split_once(':')
                .ok_or_else(|| anyhow::anyhow!("header '{}' is not NAME:VALUE", raw))?;
            config
                .endpoint
                .headers
                .insert(name.trim().to_string(), value.trim().to_string());
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::internal::assertions::{AssertionError, CaseFailure};
    use crate::internal::suite::CaseReport;
    use std::time::Duration;

    fn report(outcomes: Vec<Result<(), CaseFailure>>) -> SuiteReport {
        SuiteReport {
            cases: outcomes
                .into_iter()
                .enumerate()
                .map(|(i, outcome)| CaseReport {
                    name: format!("case_{i}"),
                    elapsed: Duration::ZERO,
                    outcome,
                })
                .collect(),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_overrides_apply() {
        let matches = build_cli().get_matches_from([
            "reqres-suite",
            "--base-url",
            "http://127.0.0.1:8080/api",
            "-j",
            "4",
            "-H",
            "x-api-key: reqres-free-v1",
        ]);

        let config = apply_overrides(AppConfig::default(), &matches).unwrap();

        assert_eq!(config.endpoint.base_url, "http://127.0.0.1:8080/api");
        assert_eq!(config.runner.concurrency, 4);
        assert_eq!(config.endpoint.headers["x-api-key"], "reqres-free-v1");
        assert_eq!(config.schemas.dir, "json_schemas");
    }

    #[test]
    fn test_malformed_header_is_rejected() {
        let matches = build_cli().get_matches_from(["reqres-suite", "-H", "no-colon"]);

        assert!(apply_overrides(AppConfig::default(), &matches).is_err());
    }

    #[test]
    fn test_zero_concurrency_flag_is_rejected() {
        let matches = build_cli().get_matches_from(["reqres-suite", "-j", "0"]);

        assert!(apply_overrides(AppConfig::default(), &matches).is_err());
    }

    #[test]
    fn test_exit_code_follows_report() {
        assert_eq!(exit_code(&report(vec![Ok(()), Ok(())])), EXIT_OK);
        assert_eq!(exit_code(&report(vec![])), EXIT_OK);
        assert_eq!(
            exit_code(&report(vec![
                Ok(()),
                Err(CaseFailure::Assertion(AssertionError::Status {
                    expected: 200,
                    actual: 500,
                })),
            ])),
            EXIT_FAILURES
        );
    }
}
