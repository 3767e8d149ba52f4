//! Tests for client configuration loading.

use othello_tui::{AgentKind, ClientConfig};
use std::fs;
use std::str::FromStr;
use tempfile::TempDir;

fn write_config(dir: &TempDir, filename: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(filename);
    fs::write(&path, content).expect("Failed to write config");
    path
}

#[test]
fn test_load_full_config() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(
        &dir,
        "client.toml",
        r#"server_url = "http://engine.local:9000"
agent = "mcts"
ai_time_budget = 3.0
"#,
    );

    let config = ClientConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.server_url().as_str(), "http://engine.local:9000");
    assert_eq!(*config.agent(), AgentKind::Mcts);
    assert_eq!(*config.ai_time_budget(), 3.0);
}

#[test]
fn test_defaults_for_missing_fields() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "client.toml", "");

    let config = ClientConfig::from_file(&path).expect("Load failed");
    assert_eq!(config.server_url().as_str(), "http://127.0.0.1:8000");
    assert_eq!(*config.agent(), AgentKind::Minimax);
    assert_eq!(*config.ai_time_budget(), 1.5);
}

#[test]
fn test_invalid_toml_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = write_config(&dir, "client.toml", "this is not valid toml !!!@@@");

    let err = ClientConfig::from_file(&path).expect_err("should reject");
    assert!(err.to_string().contains("parse"));
}

#[test]
fn test_missing_file_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = ClientConfig::from_file(dir.path().join("absent.toml")).expect_err("should reject");
    assert!(err.to_string().contains("read"));
}

#[test]
fn test_overrides_replace_fields() {
    let config = ClientConfig::default()
        .with_server_url("http://other:8080")
        .with_agent(AgentKind::Hybrid);
    assert_eq!(config.server_url().as_str(), "http://other:8080");
    assert_eq!(*config.agent(), AgentKind::Hybrid);
    assert_eq!(*config.ai_time_budget(), 1.5);
}

#[test]
fn test_agent_identifier_roundtrip() {
    // Every agent parses back from its wire identifier.
    for agent in AgentKind::all() {
        let parsed = AgentKind::from_str(&agent.to_string()).expect("roundtrip");
        assert_eq!(parsed, agent);
    }
    assert_eq!(
        AgentKind::from_str("minimax_ga").expect("known id"),
        AgentKind::MinimaxGa
    );
    assert!(AgentKind::from_str("alphazero").is_err());
}
