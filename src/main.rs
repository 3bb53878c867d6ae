//! Referral Report CLI
//!
//! Fetches referral program reports from a referrals subgraph and
//! encodes/decodes on-chain referral codes.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use referral_report::codec::DecodedCode;
use referral_report::commands::{
    execute_decode, execute_encode, execute_report, validate_args, ReportArgs,
};
use referral_report::utils::config::{parse_endpoint_override, ChainEndpoints, SCHEMA_VERSION};

/// Referral Report - referral program reporting for DEX accounts
#[derive(Parser, Debug)]
#[command(name = "referral-report")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Fetch the referral report for an account
    Report {
        /// Chain id
        #[arg(short, long, default_value = "42161")]
        chain: u64,

        /// Account address
        #[arg(short, long)]
        account: String,

        /// Subgraph endpoint override as <CHAIN_ID>=<URL> (repeatable)
        #[arg(
            short,
            long = "endpoint",
            env = "REFERRAL_REPORT_ENDPOINTS",
            value_delimiter = ',',
            value_parser = parse_endpoint_override
        )]
        endpoints: Vec<(u64, String)>,

        /// Output path for the JSON report (prints to stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print JSON on stdout
        #[arg(long)]
        pretty: bool,
    },

    /// Encode a referral code into its 32-byte hex form
    Encode {
        /// Referral code (at most 31 characters)
        code: String,
    },

    /// Decode a 32-byte hex value into a referral code
    Decode {
        /// 0x-prefixed 32-byte hex value
        hex: String,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Report {
            chain,
            account,
            endpoints,
            output,
            pretty,
        } => {
            let args = ReportArgs {
                chain_id: chain,
                account,
                endpoints: ChainEndpoints::default().with_overrides(endpoints),
                output,
                pretty,
            };

            // Validate args first
            validate_args(&args)?;

            execute_report(args)?;
        }

        Commands::Encode { code } => {
            println!("{}", execute_encode(&code)?);
        }

        Commands::Decode { hex } => match execute_decode(&hex)? {
            DecodedCode::Utf8(code) => println!("{}", code),
            DecodedCode::Bytewise(code) => {
                println!("{}", code);
                log::warn!("Value is not valid UTF-8; decoded byte by byte");
            }
        },

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Display version information
///
/// **Private** - internal command implementation
fn display_version() {
    println!("Referral Report v{}", env!("CARGO_PKG_VERSION"));
    println!("Report Schema: v{}", SCHEMA_VERSION);
}
