//! Main entry point for the metron-advisor binary
//!
//! Invoked by the cluster manager the same way as its stack advisor script:
//! an action followed by the hosts and services documents.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use metron_advisor::{
    AdvisorConfig, AmbariStackAdvisor, MetronServiceAdvisor, RequestFiles, services::write_response,
};
use shared::{AdvisorAction, advisor_debug, logging};

/// Service advisor validating and recommending Metron cluster configuration
#[derive(Parser)]
#[command(name = "metron-advisor")]
#[command(about = "Validates Metron component layout and storm-site configuration")]
pub struct Args {
    /// Action to run (validate-component-layout, validate-configurations, recommend-configurations)
    pub action: AdvisorAction,

    /// Path to the hosts document
    pub hosts: PathBuf,

    /// Path to the services document (services and current configurations)
    pub services: PathBuf,

    /// Recommended defaults used when validating configurations
    #[arg(long)]
    pub recommendations: Option<PathBuf>,

    /// Write the response here instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error); overrides METRON_ADVISOR_LOG_LEVEL
    #[arg(long)]
    pub log_level: Option<String>,

    /// Minimum Storm slots across the cluster; overrides METRON_ADVISOR_MIN_SLOTS
    #[arg(long)]
    pub min_slots: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    let mut config = AdvisorConfig::from_env()?;
    if let Some(level) = &args.log_level {
        config = config.with_log_level(level)?;
    }
    if let Some(slots) = args.min_slots {
        config = config.with_min_storm_slots(slots)?;
    }

    logging::init_tracing_with_level(Some(&config.log_level));
    logging::log_startup(args.action, "Metron service advisor");
    advisor_debug!(args.action, "Minimum Storm slots: {}", config.min_storm_slots);

    let mut files = RequestFiles::new(&args.hosts, &args.services);
    if let Some(path) = &args.recommendations {
        files = files.with_recommendations(path);
    }

    let result = files
        .load(args.action)
        .and_then(|request| {
            MetronServiceAdvisor::with_config(AmbariStackAdvisor::new(), config).run_action(args.action, &request)
        })
        .and_then(|response| write_response(args.output.as_deref(), &response));

    match result {
        Ok(()) => {
            logging::log_success(args.action, "Advisor run completed");
            Ok(())
        }
        Err(err) => {
            logging::log_error(args.action, "Advisor run", &err);
            Err(err).with_context(|| format!("{} on {}", args.action, args.services.display()))
        }
    }
}
