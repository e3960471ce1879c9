//! Printable implementations for port configuration and status listings.

use std::io::Write;

use crate::output::formatting::convert_bps;
use crate::output::{OutputOptions, Printable, PrintableList};
use crate::port::status::{Presence, StatusStrings};
use crate::rpc::types::{PortId, PortInfo, PortStatus};

impl Printable for PortInfo {
    fn print_text<W: Write>(&self, w: &mut W, _opts: &OutputOptions) -> std::io::Result<()> {
        let (speed, suffix) = convert_bps(f64::from(self.speed_mbps) * 1e6);
        let vlans: Vec<String> = self.vlans.iter().map(|v| v.to_string()).collect();
        let fec = match self.fec_enabled {
            Some(true) => "ENABLED",
            Some(false) => "DISABLED",
            None => "N/A",
        };

        let lines = [
            ("Name", self.name.trim().to_string()),
            ("Port ID", self.port_id.to_string()),
            ("Admin State", self.admin_state.name().to_string()),
            ("Link State", self.oper_state.name().to_string()),
            ("Speed", format!("{:.0} {}", speed, suffix)),
            ("VLANs", vlans.join(" ")),
            ("Forward Error Correction", fec.to_string()),
        ];

        writeln!(w)?;
        for (key, value) in lines {
            writeln!(w, "{:.<50}{}", key, value)?;
        }
        writeln!(
            w,
            "{:.<20}{}",
            "Description",
            self.description.as_deref().unwrap_or("")
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "port_id": self.port_id,
            "name": self.name.trim(),
            "admin_state": self.admin_state.name(),
            "link_state": self.oper_state.name(),
            "speed_mbps": self.speed_mbps,
            "vlans": self.vlans,
            "fec": self.fec_enabled,
            "description": self.description,
        })
    }
}

/// Detail blocks for a set of ports.
#[derive(Debug, Clone, Default)]
pub struct PortDetailsList(pub Vec<PortInfo>);

impl PrintableList for PortDetailsList {
    type Item = PortInfo;

    fn items(&self) -> &[PortInfo] {
        &self.0
    }
}

/// One row of the port status table.
#[derive(Debug, Clone)]
pub struct PortRow {
    pub port_id: PortId,
    pub name: String,
    pub status: PortStatus,
    pub presence: Presence,
}

impl PortRow {
    /// Name shown in the short listing; falls back to the id.
    fn label(&self) -> String {
        if self.name.is_empty() {
            self.port_id.to_string()
        } else {
            self.name.clone()
        }
    }
}

/// Port status table.
///
/// The short form lists enabled ports only. The internal form lists every
/// port together with its id.
#[derive(Debug, Clone, Default)]
pub struct PortTable {
    pub rows: Vec<PortRow>,
    /// Requested ports the agent returned no status for.
    pub missing: Vec<PortId>,
    pub internal: bool,
}

impl PortTable {
    fn visible(&self) -> impl Iterator<Item = &PortRow> {
        let internal = self.internal;
        self.rows.iter().filter(move |r| internal || r.status.enabled)
    }
}

impl Printable for PortTable {
    fn print_text<W: Write>(&self, w: &mut W, opts: &OutputOptions) -> std::io::Result<()> {
        if self.internal {
            writeln!(
                w,
                "{:>6} {:<11} {:>12}  {:>10}  {:>12}  {:>6}",
                "Port ID", "Port Name", "Admin State", "Link State", "Transceiver", "Speed"
            )?;
            writeln!(w, "{}", "-".repeat(68))?;
        } else {
            writeln!(
                w,
                "{:<11} {:>12}  {:>10}  {:>12}  {:>6}",
                "Port", "Admin State", "Link State", "Transceiver", "Speed"
            )?;
            writeln!(w, "{}", "-".repeat(59))?;
        }

        for row in self.visible() {
            let attrs = StatusStrings::new(&row.status, row.presence);
            let link = attrs.link_cell(10, opts);
            if self.internal {
                writeln!(
                    w,
                    "{:>6} {:<11} {:>12}  {}  {:>12}  {:>6}",
                    row.port_id, row.name, attrs.admin, link, attrs.present, attrs.speed
                )?;
            } else {
                writeln!(
                    w,
                    "{:<11} {:>12}  {}  {:>12}  {:>6}",
                    row.label(),
                    attrs.admin,
                    link,
                    attrs.present,
                    attrs.speed
                )?;
            }
        }

        if !self.missing.is_empty() {
            writeln!(w, "Could not get status of ports {:?}", self.missing)?;
        }
        Ok(())
    }

    fn to_json(&self) -> serde_json::Value {
        let ports: Vec<serde_json::Value> = self
            .visible()
            .map(|row| {
                let attrs = StatusStrings::new(&row.status, row.presence);
                serde_json::json!({
                    "port_id": row.port_id,
                    "name": row.name,
                    "admin": attrs.admin,
                    "link": attrs.link,
                    "transceiver": attrs.present,
                    "speed": attrs.speed,
                })
            })
            .collect();

        serde_json::json!({
            "ports": ports,
            "missing": self.missing,
        })
    }
}
