//! Transceiver telemetry types.

use serde::{Deserialize, Serialize};

/// Transceiver identifier (cage index).
pub type TransceiverId = i32;

/// Vendor identification read from the module EEPROM.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    pub name: String,
    pub part_number: String,
    pub serial_number: String,
    pub date_code: String,
    pub rev: String,
}

/// Supported cable length per media type.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cable {
    #[serde(default)]
    pub single_mode_km: Option<u32>,
    #[serde(default)]
    pub single_mode: Option<u32>,
    #[serde(default)]
    pub om3: Option<u32>,
    #[serde(default)]
    pub om2: Option<u32>,
    #[serde(default)]
    pub om1: Option<u32>,
    #[serde(default)]
    pub copper: Option<u32>,
}

/// State of an optional module feature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeatureState {
    #[default]
    Unsupported,
    Enabled,
    Disabled,
}

impl FeatureState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unsupported => "UNSUPPORTED",
            Self::Enabled => "ENABLED",
            Self::Disabled => "DISABLED",
        }
    }
}

/// Rate-select mechanism the module implements.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateSelectState {
    #[default]
    Unsupported,
    ApplicationRateSelect,
    ExtendedRateSelectV1,
    ExtendedRateSelectV2,
}

impl RateSelectState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unsupported => "UNSUPPORTED",
            Self::ApplicationRateSelect => "APPLICATION_RATE_SELECT",
            Self::ExtendedRateSelectV1 => "EXTENDED_RATE_SELECT_V1",
            Self::ExtendedRateSelectV2 => "EXTENDED_RATE_SELECT_V2",
        }
    }
}

/// Data rate the module is optimised for.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateSelectSetting {
    #[serde(rename = "LESS_THAN_2_2GB")]
    LessThan2_2Gb,
    #[serde(rename = "FROM_2_2GB_TO_6_6GB")]
    From2_2GbTo6_6Gb,
    #[serde(rename = "FROM_6_6GB_AND_ABOVE")]
    From6_6GbAndAbove,
    #[serde(rename = "LESS_THAN_12GB")]
    LessThan12Gb,
    #[serde(rename = "FROM_12GB_TO_24GB")]
    From12GbTo24Gb,
    #[serde(rename = "FROM_24GB_TO_26GB")]
    From24GbTo26Gb,
    #[serde(rename = "FROM_26GB_AND_ABOVE")]
    From26GbAndAbove,
    Unsupported,
    #[default]
    Unspecified,
}

impl RateSelectSetting {
    pub fn name(&self) -> &'static str {
        match self {
            Self::LessThan2_2Gb => "LESS_THAN_2_2GB",
            Self::From2_2GbTo6_6Gb => "FROM_2_2GB_TO_6_6GB",
            Self::From6_6GbAndAbove => "FROM_6_6GB_AND_ABOVE",
            Self::LessThan12Gb => "LESS_THAN_12GB",
            Self::From12GbTo24Gb => "FROM_12GB_TO_24GB",
            Self::From24GbTo26Gb => "FROM_24GB_TO_26GB",
            Self::From26GbAndAbove => "FROM_26GB_AND_ABOVE",
            Self::Unsupported => "UNSUPPORTED",
            Self::Unspecified => "UNSPECIFIED",
        }
    }
}

/// Module power mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PowerControlState {
    #[default]
    PowerLpmode,
    PowerOverride,
    PowerSet,
    HighPowerOverride,
}

impl PowerControlState {
    pub fn name(&self) -> &'static str {
        match self {
            Self::PowerLpmode => "POWER_LPMODE",
            Self::PowerOverride => "POWER_OVERRIDE",
            Self::PowerSet => "POWER_SET",
            Self::HighPowerOverride => "HIGH_POWER_OVERRIDE",
        }
    }
}

/// Module feature settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransceiverSettings {
    pub cdr_tx: FeatureState,
    pub cdr_rx: FeatureState,
    pub rate_select: RateSelectState,
    pub rate_select_setting: RateSelectSetting,
    pub power_measurement: FeatureState,
    pub power_control: PowerControlState,
}

/// High/low flag pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    pub low: bool,
    pub high: bool,
}

/// Alarm and warning flags of a sensor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagLevels {
    pub alarm: Flags,
    pub warn: Flags,
}

/// One sensor reading.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Sensor {
    pub value: f64,
    #[serde(default)]
    pub flags: Option<FlagLevels>,
}

/// Module-wide sensors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GlobalSensors {
    pub temp: Sensor,
    pub vcc: Sensor,
}

/// Low/high threshold pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Thresholds {
    pub low: f64,
    pub high: f64,
}

/// Alarm and warning thresholds of a sensor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ThresholdLevels {
    pub alarm: Thresholds,
    pub warn: Thresholds,
}

/// Thresholds for every monitored sensor. Power values are in mW.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AlarmThresholds {
    pub temp: ThresholdLevels,
    pub vcc: ThresholdLevels,
    pub rx_pwr: ThresholdLevels,
    pub tx_bias: ThresholdLevels,
    #[serde(default)]
    pub tx_pwr: Option<ThresholdLevels>,
}

/// Per-channel optics readings. Power values are in mW, bias in mA.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelSensors {
    pub rx_pwr: Sensor,
    pub tx_bias: Sensor,
    #[serde(default)]
    pub tx_pwr: Option<Sensor>,
}

/// Telemetry of one optical channel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub channel: i32,
    pub sensors: ChannelSensors,
}

/// Telemetry of one transceiver.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TransceiverInfo {
    /// Transceiver id.
    pub port: TransceiverId,
    pub present: bool,
    #[serde(default)]
    pub vendor: Option<Vendor>,
    #[serde(default)]
    pub cable: Option<Cable>,
    #[serde(default)]
    pub settings: Option<TransceiverSettings>,
    #[serde(default)]
    pub sensor: Option<GlobalSensors>,
    #[serde(default)]
    pub thresholds: Option<AlarmThresholds>,
    #[serde(default)]
    pub channels: Vec<Channel>,
}

impl TransceiverInfo {
    /// Placeholder for a cage the service returned nothing for.
    pub fn absent(id: TransceiverId) -> Self {
        Self {
            port: id,
            present: false,
            ..Default::default()
        }
    }
}
