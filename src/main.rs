use tracing::{error, info};

use reqres_suite::cli::{build_cli, exit_code, parse_config, EXIT_CONFIG, EXIT_OK};
use reqres_suite::internal::requester::HttpRequester;
use reqres_suite::internal::schema::SchemaLoader;
use reqres_suite::internal::suite::{catalog, run_suite, select};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let matches = build_cli().get_matches();
    let config = match parse_config(&matches) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    let cases = select(catalog(&config.fixtures), config.runner.filter.as_deref());

    if matches.get_flag("list") {
        for case in &cases {
            println!("{}  {} {}", case.name, case.request.method, case.request.path);
        }
        return Ok(());
    }

    if let Err(e) = reqres_suite::internal::logger::init_logger(&config.logging) {
        eprintln!("Failed to initialize logger: {}", e);
        std::process::exit(EXIT_CONFIG);
    }

    info!("Starting reqres suite");
    info!("Version: {}", reqres_suite::internal::config::get_version_info());
    info!("Base URL: {}", config.endpoint.base_url);
    info!("Schemas: {}", config.schemas.dir);

    let requester = match HttpRequester::new(&config.endpoint) {
        Ok(requester) => requester,
        Err(e) => {
            error!("Failed to create requester: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    let loader = SchemaLoader::new(&config.schemas.dir);

    let report = run_suite(&requester, &loader, &cases, config.runner.concurrency).await;

    for case in &report.cases {
        println!(
            "{:<32} {:<6} {:>6}ms",
            case.name,
            case.status_label(),
            case.elapsed.as_millis()
        );
    }
    for (name, failure) in report.failures() {
        println!("\n---- {} ----\n{}", name, failure);
    }
    println!(
        "\nresult: {} passed; {} failed; {} total",
        report.passed(),
        report.failed(),
        report.cases.len()
    );

    let code = exit_code(&report);
    if code != EXIT_OK {
        std::process::exit(code);
    }
    Ok(())
}
