//! port status command implementation.

use clap::Args;
use portctl::Result;
use portctl::port::PortCommands;
use portctl::rpc::types::PortId;
use portctl::rpc::{SwitchAgent, TransceiverService};
use std::io;

#[derive(Args)]
pub struct StatusCmd {
    /// Show transceiver and channel details.
    #[arg(short, long)]
    detail: bool,

    /// Show thresholds and alarm flags (implies --detail).
    #[arg(short, long)]
    verbose: bool,

    /// List every port with its internal id.
    #[arg(short, long)]
    internal: bool,

    /// Ports to show (default: all).
    ports: Vec<PortId>,
}

impl StatusCmd {
    pub async fn run<A, Q>(&self, cmds: &PortCommands<'_, A, Q>) -> Result<()>
    where
        A: SwitchAgent,
        Q: TransceiverService,
    {
        let mut stdout = io::stdout().lock();

        if self.detail || self.verbose {
            cmds.detail_status(&mut stdout, &self.ports, self.verbose)
                .await
        } else {
            cmds.list_ports(&mut stdout, &self.ports, self.internal)
                .await
        }
    }
}
