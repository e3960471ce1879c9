//! Status listing and detail report tests.

use std::collections::HashMap;

use portctl::output::{OutputFormat, OutputOptions};
use portctl::port::PortCommands;
use portctl::rpc::{Agent, Connection, Qsfp};

use crate::common::{FakeService, agent_results, qsfp_results};

async fn connect(
    agent: &FakeService,
    qsfp: &FakeService,
) -> (Connection<Agent>, Connection<Qsfp>) {
    let a = Connection::<Agent>::connect("127.0.0.1", agent.port())
        .await
        .unwrap();
    let q = Connection::<Qsfp>::connect("127.0.0.1", qsfp.port())
        .await
        .unwrap();
    (a, q)
}

#[tokio::test]
async fn test_detail_report_over_rpc() {
    let agent = FakeService::start(agent_results()).await;
    let qsfp = FakeService::start(qsfp_results()).await;
    let (a, q) = connect(&agent, &qsfp).await;

    let cmds = PortCommands::new(&a, &q, OutputOptions::default());
    let mut out = Vec::new();
    cmds.detail_status(&mut out, &[], false).await.unwrap();
    let out = String::from_utf8(out).unwrap();

    assert!(out.contains("Transceiver:   0"));
    assert!(out.contains("  Channel: 1  Port:  1  Status: Enabled   Link: Up"));
    assert!(out.contains("  Channel: 3  Port:  3  Status: Enabled   Link: Down"));
    assert!(out.contains("Port:  5  Status: Disabled  Link: Down  Transceiver: Absent"));

    let requested = qsfp.received();
    assert_eq!(requested.len(), 1);
    assert_eq!(requested[0].params["ids"], serde_json::json!([0, 1]));
    assert_eq!(agent.methods(), vec!["get_all_port_info", "get_port_status"]);
}

#[tokio::test]
async fn test_detail_report_without_telemetry_support() {
    let agent = FakeService::start(agent_results()).await;
    let qsfp = FakeService::start(HashMap::new()).await;
    let (a, q) = connect(&agent, &qsfp).await;

    let cmds = PortCommands::new(&a, &q, OutputOptions::default());
    let mut out = Vec::new();
    cmds.detail_status(&mut out, &[], true).await.unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "Port:  1  Status: Enabled   Link: Up    Transceiver: -\n\
         Port:  3  Status: Enabled   Link: Down  Transceiver: -\n\
         Port:  5  Status: Disabled  Link: Down  Transceiver: -\n"
    );
}

#[tokio::test]
async fn test_detail_report_json() {
    let agent = FakeService::start(agent_results()).await;
    let qsfp = FakeService::start(qsfp_results()).await;
    let (a, q) = connect(&agent, &qsfp).await;

    let cmds =
        PortCommands::new(&a, &q, OutputOptions::default()).with_format(OutputFormat::Json);
    let mut out = Vec::new();
    cmds.detail_status(&mut out, &[], false).await.unwrap();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(json["ports"]["3"]["up"], false);
    assert_eq!(json["transceivers"]["0"]["present"], true);
    assert_eq!(json["transceivers"]["1"]["present"], false);
}

#[tokio::test]
async fn test_list_ports_over_rpc() {
    let agent = FakeService::start(agent_results()).await;
    let qsfp = FakeService::start(qsfp_results()).await;
    let (a, q) = connect(&agent, &qsfp).await;

    let cmds = PortCommands::new(&a, &q, OutputOptions::default());
    let mut out = Vec::new();
    cmds.list_ports(&mut out, &[], false).await.unwrap();
    let out = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = out.lines().collect();

    assert_eq!(lines.len(), 4);
    assert!(lines[2].starts_with("eth1/1/1"));
    assert!(lines[2].contains("Present"));
    // The status carries no speed; the configured one is shown.
    assert!(lines[2].ends_with("20 Gbps"));
    assert!(lines[3].starts_with("eth1/1/3"));
}

#[tokio::test]
async fn test_port_details_over_rpc() {
    let agent = FakeService::start(agent_results()).await;
    let qsfp = FakeService::start(HashMap::new()).await;
    let (a, q) = connect(&agent, &qsfp).await;

    let cmds = PortCommands::new(&a, &q, OutputOptions::default());
    let mut out = Vec::new();
    cmds.port_details(&mut out, &[]).await.unwrap();
    let out = String::from_utf8(out).unwrap();

    // Only port 1 has its link up.
    assert!(out.contains(&format!("{:.<50}eth1/1/1", "Name")));
    assert!(out.contains(&format!("{:.<50}20 Gbps", "Speed")));
    assert!(out.contains(&format!("{:.<50}100", "VLANs")));
    assert!(!out.contains("eth1/1/3"));
    assert!(qsfp.received().is_empty());
}
