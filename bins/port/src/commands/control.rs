//! port flap and set-status command implementations.

use clap::{Args, ValueEnum};
use portctl::Result;
use portctl::port::{FLAP_DELAY, PortCommands};
use portctl::rpc::types::PortId;
use portctl::rpc::{SwitchAgent, TransceiverService};
use std::io;

#[derive(Args)]
pub struct FlapCmd {
    /// Ports to flap.
    #[arg(required = true)]
    ports: Vec<PortId>,
}

impl FlapCmd {
    pub async fn run<A, Q>(&self, cmds: &PortCommands<'_, A, Q>) -> Result<()>
    where
        A: SwitchAgent,
        Q: TransceiverService,
    {
        cmds.flap_ports(&mut io::stdout().lock(), &self.ports, FLAP_DELAY)
            .await
    }
}

/// Requested administrative state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum AdminAction {
    Enable,
    Disable,
}

#[derive(Args)]
pub struct SetStatusCmd {
    /// New administrative state.
    #[arg(value_enum)]
    state: AdminAction,

    /// Ports to change.
    #[arg(required = true)]
    ports: Vec<PortId>,
}

impl SetStatusCmd {
    pub async fn run<A, Q>(&self, cmds: &PortCommands<'_, A, Q>) -> Result<()>
    where
        A: SwitchAgent,
        Q: TransceiverService,
    {
        let enable = self.state == AdminAction::Enable;
        cmds.set_status(&mut io::stdout().lock(), &self.ports, enable)
            .await
    }
}
