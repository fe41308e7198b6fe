//! Contact book CLI.
//!
//! # Responsibility
//! - Run one or both pipeline scenarios and print their reports.
//! - Wire optional file logging and dataset loading from flags.

use clap::Parser;
use contactbook_core::{
    builtin_contacts, default_log_level, init_logging, load_contacts, Contact, ContactPipeline,
    DatasetError, Scenario, ScenarioParseError,
};
use log::info;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const EXIT_FAILURE: u8 = 1;
const ALL_SCENARIOS: &str = "all";

/// Scenarios chosen by `--scenario`, in run order.
#[derive(Debug, Clone, PartialEq, Eq)]
struct ScenarioSelection(Vec<Scenario>);

fn parse_scenario_selection(value: &str) -> Result<ScenarioSelection, ScenarioParseError> {
    if value.trim() == ALL_SCENARIOS {
        return Ok(ScenarioSelection(Scenario::ALL.to_vec()));
    }
    Scenario::parse(value).map(|scenario| ScenarioSelection(vec![scenario]))
}

#[derive(Debug, Parser)]
#[command(name = "contactbook")]
#[command(about = "Sort, partition and print a contact list")]
#[command(version)]
struct Cli {
    /// Scenario to run: variant-aware, variant-partitioned or all
    #[arg(long, default_value = ALL_SCENARIOS, value_parser = parse_scenario_selection)]
    scenario: ScenarioSelection,

    /// JSON array of contacts to use instead of the built-in list
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Absolute directory for log files; logging stays off when omitted
    #[arg(long)]
    log_dir: Option<String>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, requires = "log_dir")]
    log_level: Option<String>,
}

fn main() -> ExitCode {
    match run(&Cli::parse()) {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(message) => {
            eprintln!("error: {message}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

/// Runs the selected scenarios and returns the text to print.
fn run(cli: &Cli) -> Result<String, String> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        init_logging(level, log_dir)?;
    }

    let contacts = read_contacts(cli.dataset.as_deref()).map_err(|err| err.to_string())?;

    let scenarios = &cli.scenario.0;
    let show_banner = scenarios.len() > 1;
    let mut blocks = Vec::with_capacity(scenarios.len());
    for &scenario in scenarios {
        let pipeline = ContactPipeline::new(scenario.config());
        info!(
            "event=scenario_run module=cli status=start scenario={scenario} descending={}",
            pipeline.config().descending
        );
        let rendered = pipeline.run(contacts.clone()).render();
        blocks.push(if show_banner {
            format!("# {scenario}\n\n{rendered}")
        } else {
            rendered
        });
    }

    Ok(blocks.join("\n"))
}

fn read_contacts(dataset: Option<&Path>) -> Result<Vec<Contact>, DatasetError> {
    match dataset {
        Some(path) => load_contacts(path),
        None => Ok(builtin_contacts()),
    }
}
