pub mod cli;
pub mod config;
pub mod filter;
pub mod report;

use anyhow::Context;
use std::io::BufRead;

pub use cli::{Commands, OutputFormat, cli_parse};
pub use config::{ConfigError, FilterConfig, FilterRules, load_config};
pub use filter::{Filter, FilterError, NameFilter, new_component_filter, new_kind_filter};
pub use report::FilterReport;

/// Install the stderr log subscriber. `RUST_LOG` wins over `verbose`.
pub fn init_tracing(verbose: u8) {
    use tracing_subscriber::EnvFilter;

    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Candidate names from the command line, or stdin when none were given
fn read_candidates(names: &[String]) -> std::io::Result<Vec<String>> {
    if !names.is_empty() {
        return Ok(names.to_vec());
    }
    candidates_from_lines(std::io::stdin().lock())
}

/// One candidate per line, kept verbatim; blank lines are skipped
fn candidates_from_lines(reader: impl BufRead) -> std::io::Result<Vec<String>> {
    let mut candidates = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.trim().is_empty() {
            candidates.push(line);
        }
    }
    Ok(candidates)
}

fn print_report(
    filter: &NameFilter,
    names: &[String],
    format: OutputFormat,
) -> anyhow::Result<()> {
    let candidates = read_candidates(names).context("Failed to read candidate names")?;
    let report = FilterReport::evaluate(filter.kind(), filter, &candidates);

    tracing::debug!(
        kind = %report.kind,
        included = report.included.len(),
        excluded = report.excluded.len(),
        "filtered candidates"
    );

    match format {
        OutputFormat::Text => print!("{}", report.to_text()),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(())
}

pub fn run() -> anyhow::Result<()> {
    let cli = cli_parse();
    init_tracing(cli.verbose);

    let config = load_config(cli.config.as_deref()).context("Failed to load config")?;

    match cli.command {
        Commands::Components { rules, names } => {
            let config = FilterConfig {
                components: config
                    .components
                    .overridden_by(&rules.include, &rules.exclude),
                ..config
            };
            print_report(&config.component_filter()?, &names, cli.format)?;
        }
        Commands::Kinds { rules, names } => {
            let config = FilterConfig {
                kinds: config.kinds.overridden_by(&rules.include, &rules.exclude),
                ..config
            };
            print_report(&config.kind_filter()?, &names, cli.format)?;
        }
        Commands::Show => {
            let components = config.component_filter()?;
            let kinds = config.kind_filter()?;
            match cli.format {
                OutputFormat::Text => print!("{}", report::format_rules(&[&components, &kinds])),
                OutputFormat::Json => {
                    println!("{}", report::rules_json(&[&components, &kinds])?)
                }
            }
        }
    }

    Ok(())
}
