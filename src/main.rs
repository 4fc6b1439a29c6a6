mod render;

use std::env;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use log::{debug, info};
use seolens_core::{
    FetchConfig, HttpFetcher, InMemoryRequestLog, RequestLog, SeoError, SeoService,
};

use crate::render::render_inspection;

const APP_NAME: &str = "seolens";
const VERSION: &str = env!("CARGO_PKG_VERSION");
const TIMEOUT_ENV: &str = "SEOLENS_TIMEOUT_SECS";

#[derive(Clone, Copy, Debug, PartialEq)]
enum OutputMode {
    Text,
    Json,
}

#[derive(Debug)]
struct CliOptions {
    urls: Vec<String>,
    mode: OutputMode,
    extended: bool,
    verbose: bool,
    timeout: Option<Duration>,
    user_agent: Option<String>,
}

#[derive(Debug)]
enum CliCommand {
    Run(CliOptions),
    Help,
    Version,
}

fn parse_arguments(args: &[String]) -> Result<CliCommand> {
    if args.is_empty() {
        return Ok(CliCommand::Help);
    }

    let mut urls = Vec::new();
    let mut mode = OutputMode::Text;
    let mut extended = false;
    let mut verbose = false;
    let mut timeout = None;
    let mut user_agent = None;

    for arg in args {
        if matches!(arg.as_str(), "-h" | "--help") {
            return Ok(CliCommand::Help);
        }

        if matches!(arg.as_str(), "-v" | "--version") {
            return Ok(CliCommand::Version);
        }

        if matches!(arg.as_str(), "-j" | "--json") {
            mode = OutputMode::Json;
            continue;
        }

        if matches!(arg.as_str(), "-e" | "--extended") {
            extended = true;
            continue;
        }

        if matches!(arg.as_str(), "-V" | "--verbose") {
            verbose = true;
            continue;
        }

        if let Some(value) = arg.strip_prefix("--timeout=") {
            if timeout.is_some() {
                return Err(anyhow!("--timeout specified multiple times"));
            }
            timeout = Some(parse_timeout(value)?);
            continue;
        }

        if let Some(value) = arg.strip_prefix("--user-agent=") {
            if value.trim().is_empty() {
                return Err(anyhow!("--user-agent requires a value"));
            }
            user_agent = Some(value.to_string());
            continue;
        }

        if arg.starts_with('-') {
            return Err(anyhow!("unknown flag: {arg}"));
        }

        urls.push(arg.clone());
    }

    if urls.is_empty() {
        return Err(anyhow!("missing <url> argument"));
    }

    Ok(CliCommand::Run(CliOptions {
        urls,
        mode,
        extended,
        verbose,
        timeout,
        user_agent,
    }))
}

fn parse_timeout(value: &str) -> Result<Duration> {
    let secs: u64 = value
        .trim()
        .parse()
        .with_context(|| format!("invalid timeout: {value:?}"))?;
    if secs == 0 {
        return Err(anyhow!("timeout must be at least one second"));
    }
    Ok(Duration::from_secs(secs))
}

/// Flags win over the environment, the environment over built-in defaults
fn fetch_config(options: &CliOptions) -> Result<FetchConfig> {
    let mut config = FetchConfig::default();

    if let Some(timeout) = options.timeout {
        config.timeout = timeout;
    } else if let Ok(value) = env::var(TIMEOUT_ENV) {
        config.timeout = parse_timeout(&value).with_context(|| format!("reading {TIMEOUT_ENV}"))?;
    }

    if let Some(user_agent) = options.user_agent.as_ref() {
        config.user_agent = user_agent.clone();
    }

    Ok(config)
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn print_help() {
    println!("{APP_NAME} — SEO meta tag inspector");
    println!("Usage: {APP_NAME} [OPTIONS] <URL>...\n");
    println!("Options:");
    println!("  -j, --json              Output the report as JSON");
    println!("  -e, --extended          Also grade tags outside the report categories");
    println!("      --timeout=<SECS>    Fetch timeout in seconds (env: {TIMEOUT_ENV})");
    println!("      --user-agent=<UA>   User agent sent when fetching pages");
    println!("  -V, --verbose           Log each classification (RUST_LOG overrides)");
    println!("  -v, --version           Show version information");
    println!("  -h, --help              Show this help message");
}

fn print_version() {
    println!("{APP_NAME} {VERSION}");
}

#[tokio::main]
async fn main() -> Result<()> {
    let raw_args = env::args().skip(1).collect::<Vec<_>>();
    let options = match parse_arguments(&raw_args)? {
        CliCommand::Help => {
            print_help();
            return Ok(());
        }
        CliCommand::Version => {
            print_version();
            return Ok(());
        }
        CliCommand::Run(options) => options,
    };

    init_logging(options.verbose);

    let fetcher = HttpFetcher::new(&fetch_config(&options)?)?;
    let service = Arc::new(SeoService::new(fetcher, InMemoryRequestLog::new()));

    // Each page is independent, so every analysis runs as its own task.
    let handles: Vec<_> = options
        .urls
        .iter()
        .map(|url| {
            let service = Arc::clone(&service);
            let url = url.clone();
            tokio::spawn(async move { service.inspect_url(&url).await })
        })
        .collect();

    let mut failures = 0usize;
    let mut reports = Vec::new();
    for (url, handle) in options.urls.iter().zip(handles) {
        match handle.await.context("analysis task panicked")? {
            Ok(inspection) => reports.push(inspection),
            Err(err) => {
                failures += 1;
                eprintln!("{}", failure_message(url, &err));
            }
        }
    }

    match options.mode {
        OutputMode::Json => {
            let requested = options.urls.len();
            let json = if options.extended {
                serialize_many(&reports, requested, |inspection| {
                    serde_json::to_value(inspection)
                })?
            } else {
                serialize_many(&reports, requested, |inspection| {
                    serde_json::to_value(&inspection.report)
                })?
            };
            if let Some(json) = json {
                println!("{}", serde_json::to_string_pretty(&json)?);
            }
        }
        OutputMode::Text => {
            let mut output = String::new();
            for inspection in &reports {
                render_inspection(&mut output, inspection, options.extended);
            }
            print!("{output}");
        }
    }

    let records = service.request_log().all();
    for record in &records {
        debug!("request {} for {} at {}", record.id, record.url, record.request_date);
    }
    info!("{} analysis request(s) recorded", records.len());

    if failures > 0 {
        return Err(anyhow!(
            "{failures} of {} analyses failed",
            options.urls.len()
        ));
    }

    Ok(())
}

/// Single stderr line reported for a failed analysis
fn failure_message(url: &str, err: &SeoError) -> String {
    format!("Error: {url}: {err} (status {})", err.http_status())
}

/// The output shape follows the number of requested URLs: one URL prints a
/// bare object (nothing when it failed), several always print an array.
fn serialize_many<T>(
    items: &[T],
    requested: usize,
    to_value: impl Fn(&T) -> serde_json::Result<serde_json::Value>,
) -> Result<Option<serde_json::Value>> {
    let mut values = items
        .iter()
        .map(to_value)
        .collect::<serde_json::Result<Vec<_>>>()?;

    if requested == 1 {
        Ok(values.pop())
    } else {
        Ok(Some(serde_json::Value::Array(values)))
    }
}
