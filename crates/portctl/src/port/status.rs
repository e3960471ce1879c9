//! Display strings for port status fields.

use crate::output::OutputOptions;
use crate::output::formatting::{Color, format_speed, paint_right};
use crate::rpc::types::PortStatus;

/// Whether a transceiver is plugged into a port's cage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Presence {
    Present,
    Absent,
    /// Telemetry could not be fetched.
    #[default]
    Unknown,
}

impl Presence {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Absent => "Absent",
            Self::Unknown => "-",
        }
    }
}

impl From<bool> for Presence {
    fn from(present: bool) -> Self {
        if present { Self::Present } else { Self::Absent }
    }
}

impl From<Option<bool>> for Presence {
    fn from(present: Option<bool>) -> Self {
        present.map(Self::from).unwrap_or(Self::Unknown)
    }
}

/// Display strings for one port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusStrings {
    pub admin: &'static str,
    pub link: &'static str,
    /// Color hint for the link cell.
    pub link_color: Option<Color>,
    pub present: &'static str,
    pub speed: String,
}

impl StatusStrings {
    /// Build the display strings for `status`.
    pub fn new(status: &PortStatus, presence: Presence) -> Self {
        let link_color = match (status.up, status.enabled) {
            (true, _) => Some(Color::Green),
            (false, true) => Some(Color::Red),
            (false, false) => None,
        };

        Self {
            admin: if status.enabled { "Enabled" } else { "Disabled" },
            link: if status.up { "Up" } else { "Down" },
            link_color,
            present: presence.label(),
            speed: format_speed(status.speed_mbps),
        }
    }

    /// Link cell right-aligned in `width` columns, colored if enabled.
    pub fn link_cell(&self, width: usize, opts: &OutputOptions) -> String {
        paint_right(self.link, width, self.link_color, opts.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(enabled: bool, up: bool, speed: Option<u32>) -> PortStatus {
        PortStatus {
            enabled,
            up,
            speed_mbps: speed,
            ..Default::default()
        }
    }

    #[test]
    fn test_labels() {
        let s = StatusStrings::new(&status(true, true, Some(100_000)), Presence::Present);
        assert_eq!(s.admin, "Enabled");
        assert_eq!(s.link, "Up");
        assert_eq!(s.present, "Present");
        assert_eq!(s.speed, "100 Gbps");

        let s = StatusStrings::new(&status(false, false, None), Presence::Absent);
        assert_eq!(s.admin, "Disabled");
        assert_eq!(s.link, "Down");
        assert_eq!(s.present, "Absent");
        assert_eq!(s.speed, "-");
    }

    #[test]
    fn test_presence() {
        assert_eq!(Presence::from(Some(true)), Presence::Present);
        assert_eq!(Presence::from(Some(false)), Presence::Absent);
        assert_eq!(Presence::from(None), Presence::Unknown);
        assert_eq!(Presence::Unknown.label(), "-");
    }

    #[test]
    fn test_link_color() {
        let up = StatusStrings::new(&status(true, true, None), Presence::Unknown);
        assert_eq!(up.link_color, Some(Color::Green));

        let down = StatusStrings::new(&status(true, false, None), Presence::Unknown);
        assert_eq!(down.link_color, Some(Color::Red));

        let disabled = StatusStrings::new(&status(false, false, None), Presence::Unknown);
        assert_eq!(disabled.link_color, None);
    }

    #[test]
    fn test_link_cell() {
        let down = StatusStrings::new(&status(true, false, None), Presence::Unknown);
        let plain = OutputOptions::default();
        let color = OutputOptions {
            color: true,
            ..Default::default()
        };

        assert_eq!(down.link_cell(10, &plain), "      Down");
        assert_eq!(down.link_cell(10, &color), "\x1b[31m      Down\x1b[0m");
    }
}
