//! port stats command implementation.

use clap::Args;
use portctl::Result;
use portctl::port::PortCommands;
use portctl::rpc::types::PortId;
use portctl::rpc::{SwitchAgent, TransceiverService};
use std::io;

#[derive(Args)]
pub struct StatsCmd {
    /// Also show LLDP neighbor host names.
    #[arg(short, long)]
    details: bool,

    /// Ports to show (default: all).
    ports: Vec<PortId>,
}

impl StatsCmd {
    pub async fn run<A, Q>(&self, cmds: &PortCommands<'_, A, Q>) -> Result<()>
    where
        A: SwitchAgent,
        Q: TransceiverService,
    {
        cmds.show_stats(&mut io::stdout().lock(), &self.ports, self.details)
            .await
    }
}
