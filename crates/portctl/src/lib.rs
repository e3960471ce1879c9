//! Async RPC client and report rendering for switch port status.
//!
//! This crate talks to two remote services on a switch: the switch agent
//! (port status, port configuration, counters, LLDP neighbors, admin state
//! changes) and the transceiver service (optical telemetry). Responses are
//! joined and rendered as aligned text tables or JSON.
//!
//! # Modules
//!
//! - [`rpc`] - typed connections, wire data model and errors
//! - [`port`] - channel resolution, status strings, reports and commands
//! - [`output`] - output options, the [`output::Printable`] trait and
//!   value formatting helpers
//!
//! # Example
//!
//! ```ignore
//! use portctl::rpc::{Agent, Connection, Qsfp, Service};
//! use portctl::port::PortCommands;
//! use portctl::output::OutputOptions;
//!
//! #[tokio::main]
//! async fn main() -> portctl::Result<()> {
//!     let agent = Connection::<Agent>::connect("::1", Agent::DEFAULT_PORT).await?;
//!     let qsfp = Connection::<Qsfp>::connect("::1", Qsfp::DEFAULT_PORT).await?;
//!
//!     let cmds = PortCommands::new(&agent, &qsfp, OutputOptions::default());
//!     let mut stdout = std::io::stdout().lock();
//!     cmds.detail_status(&mut stdout, &[1, 2], false).await?;
//!     Ok(())
//! }
//! ```

pub mod output;
pub mod port;
pub mod rpc;

pub use rpc::{Agent, Connection, Error, Qsfp, Result};
