//! Port status reporting and control.
//!
//! - [`channel`]: which transceiver channels each port occupies
//! - [`status`]: display strings for a port's state
//! - [`report`]: the detailed per-transceiver report
//! - [`commands`]: the user-facing port commands

pub mod channel;
pub mod commands;
pub mod report;
pub mod status;

#[cfg(test)]
pub(crate) mod mock;

pub use channel::ChannelMap;
pub use commands::{FLAP_DELAY, PortCommands};
pub use report::DetailReport;
pub use status::{Presence, StatusStrings};
