//! port details command implementation.

use clap::Args;
use portctl::Result;
use portctl::port::PortCommands;
use portctl::rpc::types::PortId;
use portctl::rpc::{SwitchAgent, TransceiverService};
use std::io;

#[derive(Args)]
pub struct DetailsCmd {
    /// Ports to show (default: every port with link up).
    ports: Vec<PortId>,
}

impl DetailsCmd {
    pub async fn run<A, Q>(&self, cmds: &PortCommands<'_, A, Q>) -> Result<()>
    where
        A: SwitchAgent,
        Q: TransceiverService,
    {
        cmds.port_details(&mut io::stdout().lock(), &self.ports)
            .await
    }
}
