//! Report command implementation.
//!
//! The report command:
//! 1. Builds one subgraph client per configured chain
//! 2. Fetches and assembles the referral report
//! 3. Writes the report document as JSON (file or stdout)

use crate::output::{report_to_string, write_report, ReportDocument};
use crate::report::ReportAssembler;
use crate::utils::config::{ChainEndpoints, ARBITRUM_CHAIN_ID};
use anyhow::{Context, Result};
use log::info;
use std::path::PathBuf;
use std::time::Instant;

/// Arguments for the report command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct ReportArgs {
    /// Chain to report on
    pub chain_id: u64,

    /// Account address (any case)
    pub account: String,

    /// Chain id to subgraph endpoint mapping
    pub endpoints: ChainEndpoints,

    /// Output path for the JSON report (stdout when absent)
    pub output: Option<PathBuf>,

    /// Pretty-print JSON written to stdout
    pub pretty: bool,
}

impl Default for ReportArgs {
    fn default() -> Self {
        Self {
            chain_id: ARBITRUM_CHAIN_ID,
            account: String::new(),
            endpoints: ChainEndpoints::default(),
            output: None,
            pretty: false,
        }
    }
}

/// Execute the report command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unsupported chain
/// * Subgraph request failures or malformed data
/// * File write errors
pub fn execute_report(args: ReportArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting report for account: {}", args.account);

    let assembler = ReportAssembler::from_endpoints(&args.endpoints)
        .context("Failed to create subgraph clients")?;

    let report = assembler
        .fetch_report(args.chain_id, &args.account)
        .with_context(|| {
            format!(
                "Failed to fetch referral report for {} on chain {}",
                args.account, args.chain_id
            )
        })?;

    let document = ReportDocument::new(args.chain_id, &args.account, &report);

    match &args.output {
        Some(path) => {
            write_report(&document, path).context("Failed to write report JSON")?;
            info!("✓ Report written to: {}", path.display());
        }
        None => {
            let json = report_to_string(&document, args.pretty)
                .context("Failed to serialize report")?;
            println!("{}", json);
        }
    }

    let elapsed = start_time.elapsed();
    info!("Report completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate report arguments
///
/// **Public** - can be called before execute_report for early validation
pub fn validate_args(args: &ReportArgs) -> Result<()> {
    // Validate account address
    if args.account.is_empty() {
        anyhow::bail!("Account cannot be empty");
    }

    let account = args
        .account
        .strip_prefix("0x")
        .ok_or_else(|| anyhow::anyhow!("Account must start with 0x"))?;

    if account.len() != 40 {
        anyhow::bail!("Account must be 20 bytes (40 hex characters)");
    }

    if !account.chars().all(|c| c.is_ascii_hexdigit()) {
        anyhow::bail!("Account contains invalid characters");
    }

    // Validate endpoint URLs
    if args.endpoints.is_empty() {
        anyhow::bail!("No subgraph endpoints configured");
    }

    for (chain_id, url) in args.endpoints.iter() {
        if !url.starts_with("http://") && !url.starts_with("https://") {
            anyhow::bail!(
                "Endpoint for chain {} must start with http:// or https://",
                chain_id
            );
        }
    }

    Ok(())
}
