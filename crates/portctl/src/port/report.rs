//! Detailed port and transceiver status report.
//!
//! The report joins port status from the switch agent with optical
//! telemetry from the transceiver service. Ports are grouped by the
//! transceiver they sit on; each transceiver is printed once, at its
//! lowest-numbered requested port, followed by one block per optical
//! channel naming the port that owns it.
//!
//! Telemetry is optional. When the transceiver service does not implement
//! the telemetry call, every port gets a single status line instead.

use std::collections::{BTreeMap, BTreeSet};
use std::io::{self, Write};

use crate::output::formatting::{format_general, mw_to_dbm};
use crate::output::{OutputOptions, Printable};
use crate::rpc::types::{
    AlarmThresholds, Cable, Channel, FlagLevels, GlobalSensors, PortId, PortStatus,
    ThresholdLevels, TransceiverId, TransceiverInfo, TransceiverSettings, Vendor,
};
use crate::rpc::{Result, SwitchAgent, TransceiverService};

use super::channel::ChannelMap;
use super::status::{Presence, StatusStrings};

/// Significant digits for sensor readings.
const DIGITS: usize = 4;

/// Joined port status and transceiver telemetry.
#[derive(Debug, Clone)]
pub struct DetailReport {
    statuses: BTreeMap<PortId, PortStatus>,
    channels: ChannelMap,
    /// `None` when the transceiver service cannot report telemetry.
    transceivers: Option<BTreeMap<TransceiverId, TransceiverInfo>>,
    verbose: bool,
}

impl DetailReport {
    /// Fetch everything needed to report on `ports` (all ports if empty).
    ///
    /// A transceiver service that does not support telemetry queries
    /// degrades the report to basic status lines; any other error is
    /// returned.
    pub async fn fetch<A, Q>(agent: &A, qsfp: &Q, ports: &[PortId], verbose: bool) -> Result<Self>
    where
        A: SwitchAgent,
        Q: TransceiverService,
    {
        let speeds: BTreeMap<PortId, u32> = agent
            .get_all_port_info()
            .await?
            .into_iter()
            .map(|(id, info)| (id, info.speed_mbps))
            .collect();
        let statuses = agent.get_port_status(ports).await?;

        let channels = map_channels(&statuses, &speeds);
        let ids = channels.transceivers();

        let transceivers = if ids.is_empty() {
            Some(BTreeMap::new())
        } else {
            match qsfp.get_transceiver_info(&ids).await {
                Ok(mut infos) => {
                    for id in &ids {
                        infos
                            .entry(*id)
                            .or_insert_with(|| TransceiverInfo::absent(*id));
                    }
                    Some(infos)
                }
                Err(e) if e.is_not_supported() => {
                    tracing::warn!(error = %e, "transceiver telemetry unavailable");
                    None
                }
                Err(e) => return Err(e),
            }
        };

        Ok(Self::new(statuses, channels, transceivers, verbose))
    }

    /// Assemble a report from already fetched data.
    pub fn new(
        statuses: BTreeMap<PortId, PortStatus>,
        channels: ChannelMap,
        transceivers: Option<BTreeMap<TransceiverId, TransceiverInfo>>,
        verbose: bool,
    ) -> Self {
        Self {
            statuses,
            channels,
            transceivers,
            verbose,
        }
    }

    /// Whether transceiver telemetry could be fetched.
    pub fn has_telemetry(&self) -> bool {
        self.transceivers.is_some()
    }

    pub fn statuses(&self) -> &BTreeMap<PortId, PortStatus> {
        &self.statuses
    }

    pub fn channels(&self) -> &ChannelMap {
        &self.channels
    }

    fn print_port_line<W: Write>(
        &self,
        w: &mut W,
        port: PortId,
        status: &PortStatus,
        presence: Presence,
    ) -> io::Result<()> {
        let attrs = StatusStrings::new(status, presence);
        writeln!(
            w,
            "Port: {:>2}  Status: {:<8}  Link: {:<4}  Transceiver: {}",
            port, attrs.admin, attrs.link, attrs.present
        )
    }

    /// One line per port the transceiver serves.
    fn print_transceiver_ports<W: Write>(
        &self,
        w: &mut W,
        tid: TransceiverId,
        info: &TransceiverInfo,
    ) -> io::Result<()> {
        for port in self.channels.ports(tid) {
            if let Some(status) = self.statuses.get(&port) {
                self.print_port_line(w, port, status, Presence::from(info.present))?;
            }
        }
        Ok(())
    }

    fn print_transceiver<W: Write>(
        &self,
        w: &mut W,
        tid: TransceiverId,
        info: &TransceiverInfo,
    ) -> io::Result<()> {
        if !info.present {
            return self.print_transceiver_ports(w, tid, info);
        }

        writeln!(w, "Transceiver:  {:>2}", info.port)?;
        if let Some(vendor) = &info.vendor {
            print_vendor(w, vendor)?;
        }
        if let Some(cable) = &info.cable {
            print_cable(w, cable)?;
        }
        if let Some(settings) = &info.settings {
            print_settings(w, settings)?;
        }

        let thresholds = info.thresholds.as_ref().filter(|_| self.verbose);
        if info.sensor.is_some() || thresholds.is_some() || !info.channels.is_empty() {
            writeln!(w, "Monitoring Information:")?;
        }

        if let Some(sensor) = &info.sensor {
            writeln!(
                w,
                "  {:<15} {}   {:<4} {}",
                "Temperature",
                format_general(sensor.temp.value, DIGITS),
                "Vcc",
                format_general(sensor.vcc.value, DIGITS)
            )?;
        }
        if let Some(thresholds) = thresholds {
            print_thresholds(w, thresholds)?;
        }
        if self.verbose
            && let Some(sensor) = &info.sensor
        {
            print_sensor_flags(w, sensor)?;
        }

        for channel in &info.channels {
            let owner = self
                .channels
                .port_for(tid, channel.channel)
                .and_then(|port| self.statuses.get(&port).map(|s| (port, s)));
            match owner {
                Some((port, status)) => {
                    let attrs = StatusStrings::new(status, Presence::Unknown);
                    writeln!(
                        w,
                        "  Channel: {}  Port: {:>2}  Status: {:<8}  Link: {:<4}",
                        channel.channel, port, attrs.admin, attrs.link
                    )?;
                }
                // Channel of a port outside the requested set.
                None => writeln!(w, "  Channel: {}", channel.channel)?,
            }
            self.print_channel(w, channel)?;
        }

        if info.channels.is_empty() {
            self.print_transceiver_ports(w, tid, info)?;
        }
        Ok(())
    }

    fn print_channel<W: Write>(&self, w: &mut W, channel: &Channel) -> io::Result<()> {
        let sensors = &channel.sensors;

        let mut line = reading("Tx Bias(mA)", sensors.tx_bias.value);
        if let Some(tx_pwr) = &sensors.tx_pwr {
            line.push_str(&reading("Tx Power(dBm)", mw_to_dbm(tx_pwr.value)));
            line.push_str(&reading("Tx Power(mW)", tx_pwr.value));
        }
        writeln!(w, "{}", line.trim_end())?;

        let mut line = reading("Rx Power(dBm)", mw_to_dbm(sensors.rx_pwr.value));
        line.push_str(&reading("Rx Power(mW)", sensors.rx_pwr.value));
        writeln!(w, "{}", line.trim_end())?;

        if !self.verbose {
            return Ok(());
        }

        let rows = [
            ("Tx Bias(mA):", sensors.tx_bias.flags),
            ("Tx Power(mW):", sensors.tx_pwr.and_then(|s| s.flags)),
            ("Rx Power(mW):", sensors.rx_pwr.flags),
        ];
        if rows.iter().all(|(_, flags)| flags.is_none()) {
            return Ok(());
        }
        print_flags_header(w, 14)?;
        for (label, flags) in rows {
            if let Some(flags) = flags {
                print_flags_row(w, label, 14, &flags)?;
            }
        }
        Ok(())
    }
}

impl Printable for DetailReport {
    fn print_text<W: Write>(&self, w: &mut W, _opts: &OutputOptions) -> io::Result<()> {
        let Some(transceivers) = &self.transceivers else {
            for (port, status) in &self.statuses {
                self.print_port_line(w, *port, status, Presence::from(status.present))?;
            }
            return Ok(());
        };

        let mut printed = BTreeSet::new();
        for (port, status) in &self.statuses {
            match &status.transceiver_idx {
                Some(idx) => {
                    let tid = idx.transceiver_id;
                    if printed.insert(tid) {
                        match transceivers.get(&tid) {
                            Some(info) => self.print_transceiver(w, tid, info)?,
                            None => {
                                self.print_transceiver(w, tid, &TransceiverInfo::absent(tid))?
                            }
                        }
                    }
                }
                None => self.print_port_line(w, *port, status, Presence::from(status.present))?,
            }
        }
        Ok(())
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "ports": self.statuses,
            "transceivers": self.transceivers,
        })
    }
}

/// Derive the channel map from port statuses.
///
/// The configured speed from the port info wins over the speed in the
/// status response.
fn map_channels(
    statuses: &BTreeMap<PortId, PortStatus>,
    speeds: &BTreeMap<PortId, u32>,
) -> ChannelMap {
    let mut channels = ChannelMap::new();
    for (port, status) in statuses {
        if let Some(idx) = &status.transceiver_idx {
            let speed = speeds.get(port).copied().or(status.speed_mbps);
            channels.insert_port(*port, idx, speed);
        }
    }
    channels
}

fn reading(label: &str, value: f64) -> String {
    format!("  {:<15} {:<8}", label, format_general(value, DIGITS))
}

fn print_vendor<W: Write>(w: &mut W, vendor: &Vendor) -> io::Result<()> {
    writeln!(
        w,
        "Vendor:  {:<16}  Part Number:  {:<16}",
        vendor.name, vendor.part_number
    )?;
    writeln!(
        w,
        "Serial:  {:<16}  Date Code:  {:<8}  Revision: {:<2}",
        vendor.serial_number, vendor.date_code, vendor.rev
    )
}

fn print_cable<W: Write>(w: &mut W, cable: &Cable) -> io::Result<()> {
    let lengths = [
        ("Single Mode", cable.single_mode_km, "km"),
        ("Single Mode", cable.single_mode, "m"),
        ("OM3", cable.om3, "m"),
        ("OM2", cable.om2, "m"),
        ("OM1", cable.om1, "m"),
        ("Copper", cable.copper, "m"),
    ];

    write!(w, "Cable:")?;
    for (media, length, unit) in lengths {
        if let Some(length) = length.filter(|l| *l > 0) {
            write!(w, "  {}:  {}{}", media, length, unit)?;
        }
    }
    writeln!(w)
}

fn print_settings<W: Write>(w: &mut W, settings: &TransceiverSettings) -> io::Result<()> {
    writeln!(
        w,
        "CDR Tx: {}\tCDR Rx: {}",
        settings.cdr_tx.name(),
        settings.cdr_rx.name()
    )?;
    writeln!(w, "Rate select: {}", settings.rate_select.name())?;
    writeln!(w, "\tOptimised for: {}", settings.rate_select_setting.name())?;
    writeln!(w, "Power measurement: {}", settings.power_measurement.name())?;
    writeln!(w, "Power control: {}", settings.power_control.name())
}

fn print_threshold_row<W: Write>(
    w: &mut W,
    label: &str,
    levels: &ThresholdLevels,
    convert: fn(f64) -> f64,
) -> io::Result<()> {
    let g = |v: f64| format_general(convert(v), DIGITS);
    writeln!(
        w,
        "    {:<14} {:>10} {:>15} {:>15} {:>10}",
        label,
        g(levels.alarm.low),
        g(levels.warn.low),
        g(levels.warn.high),
        g(levels.alarm.high)
    )
}

fn print_thresholds<W: Write>(w: &mut W, thresh: &AlarmThresholds) -> io::Result<()> {
    let same = |v: f64| v;
    writeln!(
        w,
        "  {:<16}   {:>10} {:>15} {:>15} {:>10}",
        "Thresholds:", "Alarm Low", "Warning Low", "Warning High", "Alarm High"
    )?;

    let t = &thresh.temp;
    let g = |v: f64| format!("{}C", format_general(v, DIGITS));
    writeln!(
        w,
        "    {:<14} {:>10} {:>15} {:>15} {:>10}",
        "Temp:",
        g(t.alarm.low),
        g(t.warn.low),
        g(t.warn.high),
        g(t.alarm.high)
    )?;
    print_threshold_row(w, "Vcc:", &thresh.vcc, same)?;
    print_threshold_row(w, "Tx Bias:", &thresh.tx_bias, same)?;
    if let Some(tx_pwr) = &thresh.tx_pwr {
        print_threshold_row(w, "Tx Power(dBm):", tx_pwr, mw_to_dbm)?;
        print_threshold_row(w, "Tx Power(mW):", tx_pwr, same)?;
    }
    print_threshold_row(w, "Rx Power(dBm):", &thresh.rx_pwr, mw_to_dbm)?;
    print_threshold_row(w, "Rx Power(mW):", &thresh.rx_pwr, same)
}

fn print_flags_header<W: Write>(w: &mut W, label_width: usize) -> io::Result<()> {
    writeln!(
        w,
        "  {:<lw$}   {:>10} {:>15} {:>15} {:>10}",
        "Flags:",
        "Alarm Low",
        "Warning Low",
        "Warning High",
        "Alarm High",
        lw = label_width
    )
}

fn print_flags_row<W: Write>(
    w: &mut W,
    label: &str,
    label_width: usize,
    flags: &FlagLevels,
) -> io::Result<()> {
    writeln!(
        w,
        "    {:<lw$} {:>10} {:>15} {:>15} {:>10}",
        label,
        flags.alarm.low,
        flags.warn.low,
        flags.warn.high,
        flags.alarm.high,
        lw = label_width
    )
}

fn print_sensor_flags<W: Write>(w: &mut W, sensor: &GlobalSensors) -> io::Result<()> {
    let (Some(temp), Some(vcc)) = (sensor.temp.flags, sensor.vcc.flags) else {
        return Ok(());
    };
    print_flags_header(w, 12)?;
    print_flags_row(w, "Temp:", 12, &temp)?;
    print_flags_row(w, "Vcc:", 12, &vcc)
}
