//! Admin state change tests.

use std::time::Duration;

use portctl::output::OutputOptions;
use portctl::port::PortCommands;
use portctl::rpc::{Agent, Connection, Qsfp};
use serde_json::json;

use crate::common::{FakeService, agent_results, qsfp_results};

#[tokio::test]
async fn test_flap_over_rpc() {
    let agent = FakeService::start(agent_results()).await;
    let qsfp = FakeService::start(qsfp_results()).await;
    let a = Connection::<Agent>::connect("127.0.0.1", agent.port())
        .await
        .unwrap();
    let q = Connection::<Qsfp>::connect("127.0.0.1", qsfp.port())
        .await
        .unwrap();

    let cmds = PortCommands::new(&a, &q, OutputOptions::default());
    let mut out = Vec::new();
    cmds.flap_ports(&mut out, &[5, 3, 1], Duration::from_millis(10))
        .await
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Port 5 is disabled by configuration, skipping\n\
         Disabling port 1\n\
         Disabling port 3\n\
         Enabling port 1\n\
         Enabling port 3\n"
    );

    let changes: Vec<serde_json::Value> = agent
        .received()
        .into_iter()
        .filter(|r| r.method == "set_port_state")
        .map(|r| r.params)
        .collect();
    assert_eq!(
        changes,
        vec![
            json!({"port": 1, "enable": false}),
            json!({"port": 3, "enable": false}),
            json!({"port": 1, "enable": true}),
            json!({"port": 3, "enable": true}),
        ]
    );
    assert!(qsfp.received().is_empty());
}

#[tokio::test]
async fn test_set_status_over_rpc() {
    let agent = FakeService::start(agent_results()).await;
    let qsfp = FakeService::start(qsfp_results()).await;
    let a = Connection::<Agent>::connect("127.0.0.1", agent.port())
        .await
        .unwrap();
    let q = Connection::<Qsfp>::connect("127.0.0.1", qsfp.port())
        .await
        .unwrap();

    let cmds = PortCommands::new(&a, &q, OutputOptions::default());
    let mut out = Vec::new();
    cmds.set_status(&mut out, &[3, 8], false).await.unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Disabling port 3\nPort 8 not found, skipping\n"
    );
    assert_eq!(agent.methods(), vec!["get_port_status", "set_port_state"]);
}
