//! Scanprep CLI
//!
//! Usage: scanprep [--workspace DIR] [--main-config FILE] [--dry-run] [--json]
//!
//! Stages: workspace, load-config, merge, bind, prune, remote-clean, copy.

use anyhow::Result;
use clap::Parser;

use scanprep::logging::init_logging;
use scanprep::presentation::{factory, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_config());

    let use_case = factory::create_prepare_use_case();
    let events = factory::create_event_sink(cli.json, cli.verbose > 0);
    let report = use_case.execute_with_events(&cli.prepare_options(), events)?;

    tracing::info!(
        project = %report.params.project_name,
        pruned = report.pruned.len(),
        dry_run = report.dry_run,
        "prepare finished"
    );
    Ok(())
}
