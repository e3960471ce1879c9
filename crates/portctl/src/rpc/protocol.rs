//! Service state types for strongly-typed connections.
//!
//! Each remote service on the switch has a zero-sized marker type that
//! selects which operations are available on a [`Connection`]:
//!
//! - [`Agent`]: the switch agent (ports, counters, neighbors)
//! - [`Qsfp`]: the transceiver service (optical telemetry)
//!
//! The [`Service`] trait is sealed to prevent external implementations.
//!
//! [`Connection`]: super::Connection

/// Sealed trait module to prevent external implementations.
mod private {
    pub trait Sealed {}
}

/// Service marker trait for typed connections.
pub trait Service: private::Sealed + Default {
    /// Name used in log lines and error messages.
    const NAME: &'static str;
    /// TCP port the service listens on by default.
    const DEFAULT_PORT: u16;
}

/// Switch agent service.
#[derive(Debug, Default, Clone, Copy)]
pub struct Agent;

impl private::Sealed for Agent {}

impl Service for Agent {
    const NAME: &'static str = "agent";
    const DEFAULT_PORT: u16 = 5909;
}

/// Transceiver (QSFP) telemetry service.
#[derive(Debug, Default, Clone, Copy)]
pub struct Qsfp;

impl private::Sealed for Qsfp {}

impl Service for Qsfp {
    const NAME: &'static str = "qsfp_service";
    const DEFAULT_PORT: u16 = 5910;
}
