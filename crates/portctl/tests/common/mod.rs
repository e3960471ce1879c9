//! Common test utilities for integration tests.
//!
//! Provides `FakeService`, a JSON-RPC server answering from canned results
//! keyed by method name.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::net::TcpListener;

/// A request received by a fake service.
#[derive(Debug, Clone)]
pub struct Received {
    pub method: String,
    pub params: Value,
}

/// An in-process JSON-RPC service.
///
/// Methods without a canned result answer with "method not found".
pub struct FakeService {
    port: u16,
    received: Arc<Mutex<Vec<Received>>>,
}

impl FakeService {
    /// Start serving `results` on an ephemeral local port.
    pub async fn start(results: HashMap<&'static str, Value>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        let received = Arc::new(Mutex::new(Vec::new()));
        let results: Arc<HashMap<String, Value>> = Arc::new(
            results
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        );

        let log = received.clone();
        tokio::spawn(async move {
            while let Ok((stream, _)) = listener.accept().await {
                let results = results.clone();
                let log = log.clone();
                tokio::spawn(async move {
                    let (read, mut write) = stream.into_split();
                    let mut lines = BufReader::new(read).lines();
                    while let Ok(Some(line)) = lines.next_line().await {
                        let req: Value = serde_json::from_str(&line).unwrap();
                        let method = req["method"].as_str().unwrap_or_default().to_string();
                        log.lock().unwrap().push(Received {
                            method: method.clone(),
                            params: req["params"].clone(),
                        });

                        let resp = match results.get(&method) {
                            Some(result) => {
                                json!({"jsonrpc": "2.0", "id": req["id"], "result": result})
                            }
                            None => json!({
                                "jsonrpc": "2.0",
                                "id": req["id"],
                                "error": {"code": -32601, "message": "Method not found"},
                            }),
                        };
                        let mut out = resp.to_string();
                        out.push('\n');
                        if write.write_all(out.as_bytes()).await.is_err() {
                            return;
                        }
                    }
                });
            }
        });

        Self { port, received }
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Requests received so far, in order.
    pub fn received(&self) -> Vec<Received> {
        self.received.lock().unwrap().clone()
    }

    /// Methods called so far, in order.
    pub fn methods(&self) -> Vec<String> {
        self.received().into_iter().map(|r| r.method).collect()
    }
}

/// Port info as the agent reports it.
pub fn port_info(id: i32, name: &str, speed_mbps: u32, up: bool) -> Value {
    json!({
        "port_id": id,
        "name": name,
        "speed_mbps": speed_mbps,
        "admin_state": "enabled",
        "oper_state": if up { "up" } else { "down" },
        "vlans": [100],
    })
}

/// Port status as an older agent reports it: first channel only.
pub fn port_status(enabled: bool, up: bool, transceiver: i32, channel: i32) -> Value {
    json!({
        "enabled": enabled,
        "up": up,
        "transceiver_idx": {"transceiver_id": transceiver, "channel_id": channel},
    })
}

/// A switch with two 20G ports on transceiver 0 and a disabled 10G port
/// on transceiver 1.
pub fn agent_results() -> HashMap<&'static str, Value> {
    let mut results = HashMap::new();
    results.insert(
        "get_all_port_info",
        json!({
            "1": port_info(1, "eth1/1/1", 20_000, true),
            "3": port_info(3, "eth1/1/3", 20_000, false),
            "5": port_info(5, "eth1/2/1", 10_000, false),
        }),
    );
    results.insert(
        "get_port_status",
        json!({
            "1": port_status(true, true, 0, 0),
            "3": port_status(true, false, 0, 2),
            "5": port_status(false, false, 1, 0),
        }),
    );
    results.insert("set_port_state", Value::Null);
    results
}

/// Telemetry for transceiver 0 only.
pub fn qsfp_results() -> HashMap<&'static str, Value> {
    let channel = |ch: i32| {
        json!({
            "channel": ch,
            "sensors": {
                "rx_pwr": {"value": 1.0},
                "tx_bias": {"value": 6.5},
                "tx_pwr": {"value": 0.5},
            },
        })
    };

    let mut results = HashMap::new();
    results.insert(
        "get_transceiver_info",
        json!({
            "0": {
                "port": 0,
                "present": true,
                "channels": [channel(0), channel(1), channel(2), channel(3)],
            },
        }),
    );
    results
}
