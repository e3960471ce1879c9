//! High-level RPC connection with request/response handling.
//!
//! Requests are JSON-RPC 2.0 objects, one per line, over a TCP stream.
//! A connection serialises requests: each call writes its request and
//! reads exactly one response line before the next call may start.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpStream;
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::sync::Mutex;

use super::error::{Error, Result};
use super::protocol::Service;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Serialize)]
struct RpcRequest<'a, P> {
    jsonrpc: &'static str,
    id: u64,
    method: &'a str,
    params: P,
}

#[derive(Deserialize)]
struct RpcResponse {
    id: Option<u64>,
    #[serde(default)]
    result: serde_json::Value,
    error: Option<RpcErrorObject>,
}

#[derive(Deserialize)]
struct RpcErrorObject {
    code: i64,
    #[serde(default)]
    message: String,
}

struct Io {
    reader: BufReader<OwnedReadHalf>,
    writer: OwnedWriteHalf,
}

/// Connection to one switch service.
///
/// The type parameter selects the service and with it the set of
/// available operations (see [`Agent`](super::Agent) and
/// [`Qsfp`](super::Qsfp)).
pub struct Connection<S: Service> {
    io: Mutex<Io>,
    seq: AtomicU64,
    timeout: Duration,
    peer: String,
    _service: PhantomData<S>,
}

impl<S: Service> Connection<S> {
    /// Connect to the service at `host:port` with the default timeout.
    pub async fn connect(host: &str, port: u16) -> Result<Self> {
        Self::connect_timeout(host, port, DEFAULT_TIMEOUT).await
    }

    /// Connect to the service at `host:port`.
    ///
    /// `timeout` bounds both connection setup and every later request.
    pub async fn connect_timeout(host: &str, port: u16, timeout: Duration) -> Result<Self> {
        let stream = tokio::time::timeout(timeout, TcpStream::connect((host, port)))
            .await
            .map_err(|_| Error::Timeout {
                service: S::NAME,
                timeout,
            })??;
        stream.set_nodelay(true)?;

        let peer = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| format!("{}:{}", host, port));
        tracing::debug!(service = S::NAME, %peer, "connected");

        let (read, write) = stream.into_split();
        Ok(Self {
            io: Mutex::new(Io {
                reader: BufReader::new(read),
                writer: write,
            }),
            seq: AtomicU64::new(1),
            timeout,
            peer,
            _service: PhantomData,
        })
    }

    /// Address of the remote service.
    pub fn peer(&self) -> &str {
        &self.peer
    }

    /// Request timeout in effect for this connection.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed)
    }

    /// Send a request and wait for its response.
    pub async fn request<P, R>(&self, method: &str, params: P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let id = self.next_seq();
        let mut msg = serde_json::to_vec(&RpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        })?;
        msg.push(b'\n');

        tracing::debug!(service = S::NAME, method, id, "request");

        let line = tokio::time::timeout(self.timeout, self.exchange(&msg))
            .await
            .map_err(|_| Error::Timeout {
                service: S::NAME,
                timeout: self.timeout,
            })??;

        let response: RpcResponse = serde_json::from_str(&line)?;
        match response.id {
            Some(actual) if actual != id => {
                return Err(Error::SequenceMismatch {
                    expected: id,
                    actual,
                });
            }
            Some(_) => {}
            None => {
                return Err(Error::InvalidResponse(format!(
                    "{}: response to {} has no id",
                    S::NAME,
                    method
                )));
            }
        }

        if let Some(err) = response.error {
            tracing::debug!(service = S::NAME, method, id, code = err.code, "error response");
            return Err(Error::from_rpc(S::NAME, method, err.code, err.message));
        }

        Ok(serde_json::from_value(response.result)?)
    }

    async fn exchange(&self, msg: &[u8]) -> Result<String> {
        let mut io = self.io.lock().await;
        io.writer.write_all(msg).await?;
        io.writer.flush().await?;

        let mut line = String::new();
        if io.reader.read_line(&mut line).await? == 0 {
            return Err(Error::ConnectionClosed { service: S::NAME });
        }
        Ok(line)
    }
}

impl<S: Service> std::fmt::Debug for Connection<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Connection")
            .field("service", &S::NAME)
            .field("peer", &self.peer)
            .field("timeout", &self.timeout)
            .finish()
    }
}
