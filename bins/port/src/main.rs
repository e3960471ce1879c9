//! port command - switch port status and control.

mod commands;
mod config;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use portctl::output::{OutputFormat, OutputOptions};
use portctl::port::PortCommands;
use portctl::rpc::{Agent, Connection, Qsfp};

use crate::config::{FileConfig, Overrides, Settings};

#[derive(Parser)]
#[command(name = "port", version, about = "Switch port status and control")]
struct Cli {
    /// Switch host to connect to [default: ::1].
    #[arg(long)]
    host: Option<String>,

    /// Switch agent port [default: 5909].
    #[arg(long)]
    agent_port: Option<u16>,

    /// Transceiver service port [default: 5910].
    #[arg(long)]
    qsfp_port: Option<u16>,

    /// Per-request timeout in seconds [default: 10].
    #[arg(long, value_name = "SECS")]
    timeout: Option<u64>,

    /// YAML file with connection settings.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Output JSON.
    #[arg(short = 'j', long)]
    json: bool,

    /// Pretty print JSON.
    #[arg(short = 'p', long)]
    pretty: bool,

    /// Disable colored output.
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Show port status.
    Status(commands::status::StatusCmd),

    /// Show port configuration details.
    Details(commands::details::DetailsCmd),

    /// Show port counters.
    Stats(commands::stats::StatsCmd),

    /// Disable and re-enable ports.
    Flap(commands::control::FlapCmd),

    /// Enable or disable ports.
    SetStatus(commands::control::SetStatusCmd),
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            host: self.host.clone(),
            agent_port: self.agent_port,
            qsfp_port: self.qsfp_port,
            timeout_secs: self.timeout,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let file = match &cli.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let settings = Settings::resolve(file, cli.overrides());

    // Determine output format
    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let opts = OutputOptions {
        color: !cli.no_color && atty::is(atty::Stream::Stdout),
        pretty: cli.pretty,
    };

    tracing::debug!(
        host = %settings.host,
        agent_port = settings.agent_port,
        qsfp_port = settings.qsfp_port,
        "connecting"
    );
    let agent =
        Connection::<Agent>::connect_timeout(&settings.host, settings.agent_port, settings.timeout)
            .await?;

    // Only the status command reads transceiver telemetry.
    let qsfp = match &cli.command {
        Command::Status(_) => Some(
            Connection::<Qsfp>::connect_timeout(
                &settings.host,
                settings.qsfp_port,
                settings.timeout,
            )
            .await?,
        ),
        _ => None,
    };

    let cmds = PortCommands::new(&agent, &qsfp, opts).with_format(format);

    // Execute command
    match &cli.command {
        Command::Status(cmd) => cmd.run(&cmds).await?,
        Command::Details(cmd) => cmd.run(&cmds).await?,
        Command::Stats(cmd) => cmd.run(&cmds).await?,
        Command::Flap(cmd) => cmd.run(&cmds).await?,
        Command::SetStatus(cmd) => cmd.run(&cmds).await?,
    }

    Ok(())
}
