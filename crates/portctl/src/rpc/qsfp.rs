//! Transceiver service operations.

use std::collections::BTreeMap;

use serde::Serialize;

use super::connection::Connection;
use super::error::{Error, Result};
use super::protocol::{Qsfp, Service};
use super::types::{TransceiverId, TransceiverInfo};

/// Operations consumed from the transceiver service.
#[allow(async_fn_in_trait)]
pub trait TransceiverService {
    /// Telemetry for the given transceivers.
    ///
    /// Transceivers the service knows nothing about are missing from the
    /// returned map. Services predating this call fail with
    /// [`Error::NotSupported`](super::Error::NotSupported).
    async fn get_transceiver_info(
        &self,
        ids: &[TransceiverId],
    ) -> Result<BTreeMap<TransceiverId, TransceiverInfo>>;
}

#[derive(Serialize)]
struct IdsParams<'a> {
    ids: &'a [TransceiverId],
}

impl TransceiverService for Connection<Qsfp> {
    async fn get_transceiver_info(
        &self,
        ids: &[TransceiverId],
    ) -> Result<BTreeMap<TransceiverId, TransceiverInfo>> {
        self.request("get_transceiver_info", IdsParams { ids }).await
    }
}

/// A transceiver service that may not have been connected.
///
/// Commands that never need telemetry run without a transceiver service
/// connection; a missing one answers like a service without telemetry
/// support.
impl<T: TransceiverService> TransceiverService for Option<T> {
    async fn get_transceiver_info(
        &self,
        ids: &[TransceiverId],
    ) -> Result<BTreeMap<TransceiverId, TransceiverInfo>> {
        match self {
            Some(service) => service.get_transceiver_info(ids).await,
            None => Err(Error::NotSupported(format!(
                "get_transceiver_info on {}: not connected",
                Qsfp::NAME
            ))),
        }
    }
}
