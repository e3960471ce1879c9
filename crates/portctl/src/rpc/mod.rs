//! RPC client for the switch services.
//!
//! # Example
//!
//! ```ignore
//! use portctl::rpc::{Agent, Connection, Service, SwitchAgent};
//!
//! let agent = Connection::<Agent>::connect("::1", Agent::DEFAULT_PORT).await?;
//! for (port, status) in agent.get_port_status(&[]).await? {
//!     println!("{}: {}", port, if status.up { "up" } else { "down" });
//! }
//! ```

pub mod agent;
pub mod connection;
pub mod error;
pub mod protocol;
pub mod qsfp;
pub mod types;

pub use agent::SwitchAgent;
pub use connection::{Connection, DEFAULT_TIMEOUT};
pub use error::{Error, Result};
pub use protocol::{Agent, Qsfp, Service};
pub use qsfp::TransceiverService;
