//! Printable implementation for port counters.

use std::collections::BTreeMap;
use std::io::Write;

use crate::output::{OutputOptions, Printable};
use crate::rpc::types::{LinkNeighbor, PortCounters, PortId, PortStats};

/// Counter table, one row per port.
#[derive(Debug, Clone, Default)]
pub struct StatsTable {
    pub stats: BTreeMap<PortId, PortStats>,
    /// Neighbor system names by local port.
    pub hosts: BTreeMap<PortId, Vec<String>>,
    /// Show the neighbor column.
    pub details: bool,
}

impl StatsTable {
    pub fn new(
        stats: BTreeMap<PortId, PortStats>,
        neighbors: &[LinkNeighbor],
        details: bool,
    ) -> Self {
        let mut hosts: BTreeMap<PortId, Vec<String>> = BTreeMap::new();
        for neighbor in neighbors {
            if let Some(name) = &neighbor.system_name {
                hosts
                    .entry(neighbor.local_port)
                    .or_default()
                    .push(name.clone());
            }
        }

        Self {
            stats,
            hosts,
            details,
        }
    }

    fn hosts_cell(&self, port: PortId) -> String {
        if !self.details {
            return String::new();
        }
        self.hosts
            .get(&port)
            .map(|names| names.iter().map(|n| format!(" {}", n)).collect())
            .unwrap_or_default()
    }
}

fn counters_header() -> String {
    format!(
        "{:>15} {:>15} {:>10} {:>10} {:>10} {:>10}",
        "bytes", "uPkts", "mcPkts", "bcPkts", "errs", "disc"
    )
}

fn counters_cell(c: &PortCounters) -> String {
    format!(
        "{:>15} {:>15} {:>10} {:>10} {:>10} {:>10}",
        c.bytes,
        c.ucast_pkts,
        c.multicast_pkts,
        c.broadcast_pkts,
        c.errors.errors,
        c.errors.discards
    )
}

impl Printable for StatsTable {
    fn print_text<W: Write>(&self, w: &mut W, _opts: &OutputOptions) -> std::io::Result<()> {
        let counters = counters_header();
        let hosts = if self.details { "Hosts" } else { "" };
        let line = format!(
            "{:<11} {:>3} {} {} {} {} {}",
            "Port Name", "+Id", "In", counters, "Out", counters, hosts
        );
        writeln!(w, "{}", line.trim_end())?;

        for (port, stats) in &self.stats {
            let line = format!(
                "{:<11} {:>3} {} {} {} {} {}",
                stats.name,
                port,
                "In",
                counters_cell(&stats.input),
                "Out",
                counters_cell(&stats.output),
                self.hosts_cell(*port)
            );
            writeln!(w, "{}", line.trim_end())?;
        }
        Ok(())
    }

    fn to_json(&self) -> serde_json::Value {
        let ports: Vec<serde_json::Value> = self
            .stats
            .iter()
            .map(|(port, stats)| {
                let mut obj = serde_json::json!({
                    "port_id": port,
                    "name": stats.name,
                    "input": stats.input,
                    "output": stats.output,
                });
                if self.details {
                    let hosts = self.hosts.get(port).cloned().unwrap_or_default();
                    obj["hosts"] = serde_json::json!(hosts);
                }
                obj
            })
            .collect();
        serde_json::Value::Array(ports)
    }
}
