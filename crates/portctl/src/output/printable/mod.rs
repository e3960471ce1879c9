//! Printable implementations for port reports.

mod port;
mod stats;

pub use port::{PortDetailsList, PortRow, PortTable};
pub use stats::StatsTable;
