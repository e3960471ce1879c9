//! port command implementations.

pub mod control;
pub mod details;
pub mod stats;
pub mod status;
