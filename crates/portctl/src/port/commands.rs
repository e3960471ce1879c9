//! Port commands.
//!
//! Every command talks to the switch services through the injected
//! [`SwitchAgent`] and [`TransceiverService`] and writes its report to a
//! caller-supplied writer.

use std::collections::BTreeMap;
use std::io::Write;
use std::time::Duration;

use crate::output::{
    OutputFormat, OutputOptions, PortDetailsList, PortRow, PortTable, Printable, PrintableList,
    StatsTable,
};
use crate::rpc::types::{PortId, PortStatus, TransceiverId, TransceiverInfo};
use crate::rpc::{Error, Result, SwitchAgent, TransceiverService};

use super::report::DetailReport;
use super::status::Presence;

/// Time a flapped port stays down.
pub const FLAP_DELAY: Duration = Duration::from_secs(1);

/// Why a requested port is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Skip {
    NotFound,
    DisabledByConfig,
}

fn skip_notice<W: Write>(w: &mut W, port: PortId, reason: Skip) -> std::io::Result<()> {
    match reason {
        Skip::NotFound => {
            tracing::warn!(port, "port not reported by agent");
            writeln!(w, "Port {} not found, skipping", port)
        }
        Skip::DisabledByConfig => {
            tracing::warn!(port, "port disabled by configuration");
            writeln!(w, "Port {} is disabled by configuration, skipping", port)
        }
    }
}

/// Port commands bound to a pair of service clients.
pub struct PortCommands<'a, A, Q> {
    agent: &'a A,
    qsfp: &'a Q,
    format: OutputFormat,
    opts: OutputOptions,
}

impl<'a, A, Q> PortCommands<'a, A, Q>
where
    A: SwitchAgent,
    Q: TransceiverService,
{
    pub fn new(agent: &'a A, qsfp: &'a Q, opts: OutputOptions) -> Self {
        Self {
            agent,
            qsfp,
            format: OutputFormat::Text,
            opts,
        }
    }

    /// Set the output format for reports.
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Print the port status table.
    ///
    /// `ports` restricts the listing; an empty slice lists every port.
    pub async fn list_ports<W: Write>(
        &self,
        w: &mut W,
        ports: &[PortId],
        internal: bool,
    ) -> Result<()> {
        let statuses = self.agent.get_port_status(ports).await?;
        let telemetry = self.presence_telemetry(&statuses).await;
        let infos = self.agent.get_all_port_info().await?;

        let mut table = PortTable {
            internal,
            ..Default::default()
        };
        for (id, info) in infos {
            if !ports.is_empty() && !ports.contains(&id) {
                continue;
            }
            let Some(status) = statuses.get(&id) else {
                table.missing.push(id);
                continue;
            };

            // Telemetry wins; the agent's own view of the cage is the fallback.
            let presence = match (&status.transceiver_idx, &telemetry) {
                (Some(idx), Some(infos)) => infos
                    .get(&idx.transceiver_id)
                    .map(|t| Presence::from(t.present))
                    .unwrap_or(Presence::Absent),
                _ => Presence::from(status.present),
            };
            let mut status = status.clone();
            // Older agents leave the speed out of the status.
            if status.speed_mbps.is_none() {
                status.speed_mbps = Some(info.speed_mbps);
            }
            table.rows.push(PortRow {
                port_id: id,
                name: info.name,
                status,
                presence,
            });
        }

        table.print(w, self.format, &self.opts)?;
        Ok(())
    }

    /// Print the detailed status report, grouped by transceiver.
    pub async fn detail_status<W: Write>(
        &self,
        w: &mut W,
        ports: &[PortId],
        verbose: bool,
    ) -> Result<()> {
        let report = DetailReport::fetch(self.agent, self.qsfp, ports, verbose).await?;
        report.print(w, self.format, &self.opts)?;
        Ok(())
    }

    /// Print configuration details for `ports`.
    ///
    /// With no ports given, every port whose link is up is shown.
    pub async fn port_details<W: Write>(&self, w: &mut W, ports: &[PortId]) -> Result<()> {
        let details = if ports.is_empty() {
            self.agent
                .get_all_port_info()
                .await?
                .into_values()
                .filter(|info| info.oper_state.is_up())
                .collect()
        } else {
            let mut details = Vec::with_capacity(ports.len());
            for port in ports {
                details.push(self.agent.get_port_info(*port).await?);
            }
            details
        };

        if details.is_empty() && self.format == OutputFormat::Text {
            writeln!(w, "No Ports Found")?;
            return Ok(());
        }
        PortDetailsList(details).print(w, self.format, &self.opts)?;
        Ok(())
    }

    /// Print traffic counters, optionally with LLDP neighbor names.
    pub async fn show_stats<W: Write>(
        &self,
        w: &mut W,
        ports: &[PortId],
        details: bool,
    ) -> Result<()> {
        let stats = if ports.is_empty() {
            self.agent.get_all_port_stats().await?
        } else {
            let mut stats = BTreeMap::new();
            for port in ports {
                stats.insert(*port, self.agent.get_port_stats(*port).await?);
            }
            stats
        };
        let neighbors = self.agent.get_lldp_neighbors().await?;

        StatsTable::new(stats, &neighbors, details).print(w, self.format, &self.opts)?;
        Ok(())
    }

    /// Disable and re-enable `ports`.
    ///
    /// All ports go down, in ascending order, before any comes back up.
    pub async fn flap_ports<W: Write>(
        &self,
        w: &mut W,
        ports: &[PortId],
        delay: Duration,
    ) -> Result<()> {
        if ports.is_empty() {
            return Err(Error::InvalidArgument("no ports to flap".into()));
        }

        let mut targets = Vec::with_capacity(ports.len());
        for (port, skip) in self.classify(ports).await? {
            match skip {
                Some(reason) => skip_notice(w, port, reason)?,
                None => targets.push(port),
            }
        }
        targets.sort_unstable();
        if targets.is_empty() {
            return Ok(());
        }

        for port in &targets {
            writeln!(w, "Disabling port {}", port)?;
            self.agent.set_port_state(*port, false).await?;
        }
        tracing::debug!(?delay, "waiting before re-enabling ports");
        tokio::time::sleep(delay).await;
        for port in &targets {
            writeln!(w, "Enabling port {}", port)?;
            self.agent.set_port_state(*port, true).await?;
        }
        Ok(())
    }

    /// Enable or disable `ports`.
    pub async fn set_status<W: Write>(
        &self,
        w: &mut W,
        ports: &[PortId],
        enable: bool,
    ) -> Result<()> {
        let action = if enable { "Enabling" } else { "Disabling" };
        for (port, skip) in self.classify(ports).await? {
            match skip {
                Some(reason) => skip_notice(w, port, reason)?,
                None => {
                    writeln!(w, "{} port {}", action, port)?;
                    self.agent.set_port_state(port, enable).await?;
                }
            }
        }
        Ok(())
    }

    /// Requested ports in request order, duplicates dropped, each paired
    /// with the reason it must be left alone, if any.
    async fn classify(&self, ports: &[PortId]) -> Result<Vec<(PortId, Option<Skip>)>> {
        let statuses = self.agent.get_port_status(ports).await?;

        let mut classified: Vec<(PortId, Option<Skip>)> = Vec::with_capacity(ports.len());
        for port in ports {
            if classified.iter().any(|(p, _)| p == port) {
                continue;
            }
            let skip = match statuses.get(port) {
                None => Some(Skip::NotFound),
                Some(status) if !status.enabled => Some(Skip::DisabledByConfig),
                Some(_) => None,
            };
            classified.push((*port, skip));
        }
        Ok(classified)
    }

    /// Best-effort telemetry for presence reporting; `None` on any error.
    async fn presence_telemetry(
        &self,
        statuses: &BTreeMap<PortId, PortStatus>,
    ) -> Option<BTreeMap<TransceiverId, TransceiverInfo>> {
        let mut ids: Vec<TransceiverId> = statuses
            .values()
            .filter_map(|s| s.transceiver_idx.as_ref().map(|idx| idx.transceiver_id))
            .collect();
        ids.sort_unstable();
        ids.dedup();
        if ids.is_empty() {
            return None;
        }

        match self.qsfp.get_transceiver_info(&ids).await {
            Ok(infos) => Some(infos),
            Err(e) => {
                tracing::warn!(error = %e, "transceiver presence unavailable");
                None
            }
        }
    }
}
