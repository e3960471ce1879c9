//! Wire data model shared by both services.

pub mod lldp;
pub mod port;
pub mod transceiver;

pub use lldp::LinkNeighbor;
pub use port::{
    AdminState, OperState, PortCounters, PortErrors, PortId, PortInfo, PortStats, PortStatus,
    TransceiverIdx,
};
pub use transceiver::{
    AlarmThresholds, Cable, Channel, ChannelSensors, FeatureState, FlagLevels, Flags,
    GlobalSensors, PowerControlState, RateSelectSetting, RateSelectState, Sensor,
    ThresholdLevels, Thresholds, TransceiverId, TransceiverInfo, TransceiverSettings, Vendor,
};
