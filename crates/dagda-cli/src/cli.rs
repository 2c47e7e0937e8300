//! Argument surface and command dispatch for the Dagda CLI.

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::client::{AppContext, CliResult};
use crate::commands::{check, history, monitor, start, vuln};

/// Parses CLI arguments, executes the requested command, and returns the
/// process exit code.
pub async fn run() -> i32 {
    init_tracing();
    let cli = Cli::parse();
    match dispatch(cli).await {
        Ok(()) => 0,
        Err(err) => {
            eprintln!("dagda: error: {}", err.display_message());
            err.exit_code()
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Route the parsed command to its handler. Every remote command resolves the
/// server location once, here, and issues exactly one HTTP request; `start`
/// issues none and hands off to the server bootstrap instead.
async fn dispatch(cli: Cli) -> CliResult<()> {
    match cli.command {
        Command::Start(args) => start::handle_start(&args),
        Command::Vuln(args) => vuln::handle_vuln(&AppContext::from_env()?, args).await,
        Command::Check(args) => check::handle_check(&AppContext::from_env()?, args).await,
        Command::History(args) => history::handle_history(&AppContext::from_env()?, args).await,
        Command::Monitor(args) => monitor::handle_monitor(&AppContext::from_env()?, args).await,
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "dagda",
    about = "Command-line client for a Dagda vulnerability-analysis server"
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub(crate) command: Command,
}

#[derive(Debug, Subcommand)]
pub(crate) enum Command {
    /// Start the Dagda server.
    Start(StartArgs),
    /// Query the vulnerability database.
    Vuln(VulnArgs),
    /// Run a static analysis of a docker image or container.
    Check(CheckArgs),
    /// Retrieve the analysis history of a docker image.
    History(HistoryArgs),
    /// Start or stop runtime monitoring of a docker container.
    Monitor(MonitorArgs),
}

#[derive(Debug, Args, Default)]
pub(crate) struct StartArgs {
    /// Address/interface where the server binds itself.
    #[arg(short = 's', long = "server_host")]
    pub(crate) server_host: Option<String>,
    /// Port where the server binds itself.
    #[arg(short = 'p', long = "server_port")]
    pub(crate) server_port: Option<u32>,
    /// Address/interface where `MongoDB` is listening.
    #[arg(short = 'm', long = "mongodb_host")]
    pub(crate) mongodb_host: Option<String>,
    /// Port where `MongoDB` is listening.
    #[arg(long = "mongodb_port", alias = "mp")]
    pub(crate) mongodb_port: Option<u32>,
}

#[derive(Debug, Args, Default)]
pub(crate) struct VulnArgs {
    /// Initialize the vulnerability database.
    #[arg(long)]
    pub(crate) init: bool,
    /// Retrieve the database initialization status.
    #[arg(long = "init_status", alias = "init-status")]
    pub(crate) init_status: bool,
    /// Look up products affected by this CVE identifier.
    #[arg(long)]
    pub(crate) cve: Option<String>,
    /// Look up products affected by this BID identifier.
    #[arg(long)]
    pub(crate) bid: Option<u32>,
    /// Look up products affected by this `ExploitDB` identifier.
    #[arg(long = "exploit_db", alias = "exploit-db")]
    pub(crate) exploit_db: Option<u32>,
    /// Look up known vulnerabilities for this product.
    #[arg(long)]
    pub(crate) product: Option<String>,
    /// Restrict the product lookup to a specific version.
    #[arg(long = "product_version", alias = "product-version")]
    pub(crate) product_version: Option<String>,
}

#[derive(Debug, Args, Default)]
pub(crate) struct CheckArgs {
    /// Docker image to analyze.
    #[arg(short = 'i', long = "docker_image")]
    pub(crate) docker_image: Option<String>,
    /// Docker container to analyze.
    #[arg(short = 'c', long = "container_id")]
    pub(crate) container_id: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct HistoryArgs {
    /// Docker image whose analysis history is requested.
    pub(crate) docker_image: String,
    /// Restrict the history to a single report.
    #[arg(long)]
    pub(crate) id: Option<String>,
}

#[derive(Debug, Args)]
pub(crate) struct MonitorArgs {
    /// Docker container to monitor.
    #[arg(short = 'c', long = "container_id")]
    pub(crate) container_id: String,
    /// Start monitoring the container.
    #[arg(long)]
    pub(crate) start: bool,
    /// Stop monitoring the container.
    #[arg(long)]
    pub(crate) stop: bool,
}
