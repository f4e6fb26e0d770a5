//! gauntlet - adversarial test harness for OIDC token validation
//!
//! Drives a mischief-capable token service through a fixed catalog of
//! token attacks and verifies that client-side validation refuses each
//! hostile token while still accepting an honest one.

use clap::Parser;

use gauntlet_cli::config::Config;
use gauntlet_cli::error::CliResult;
use gauntlet_cli::{harness, logging};

/// Adversarial token-validation harness
#[derive(Parser)]
#[command(name = "gauntlet")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the token service under test
    #[arg(long)]
    issuer_url: Option<String>,

    /// OAuth client id for the token endpoint
    #[arg(long)]
    client_id: Option<String>,

    /// OAuth client secret for the token endpoint
    #[arg(long)]
    client_secret: Option<String>,

    /// HTTP timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Require each attack to trip its preferred defense, not just any
    #[arg(long)]
    strict: bool,

    /// Emit the report as JSON on stdout
    #[arg(long)]
    json: bool,

    /// Enable debug logging on stderr
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    logging::init(cli.verbose);

    match run(cli).await {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            e.print();
            std::process::exit(e.exit_code());
        }
    }
}

async fn run(cli: Cli) -> CliResult<()> {
    let config = Config::from_args_and_env(
        cli.issuer_url,
        cli.client_id,
        cli.client_secret,
        cli.timeout_secs,
        cli.strict,
    )?;

    harness::execute(&config, cli.json).await
}
