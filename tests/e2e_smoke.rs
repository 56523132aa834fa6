//! E2E smoke tests for the qlv binary
//!
//! These tests verify basic end-to-end functionality by executing the compiled binary.
//! They are gated behind the `e2e-tests` feature flag.
//!
//! Run with: `cargo test --features e2e-tests`

#![cfg(feature = "e2e-tests")]

use std::path::PathBuf;
use std::time::Duration;

use expectrl::{spawn, Eof, Regex};

fn binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_qlv"))
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn smoke_help_flag() {
    let mut session =
        spawn(format!("{} --help", binary().display())).expect("Failed to spawn qlv");

    let _ = session
        .expect(Regex("TUI application for browsing a test's question list"))
        .expect("Failed to find description");
    let _ = session
        .expect(Regex("Usage:"))
        .expect("Failed to find help output");
    let _ = session.expect(Eof).expect("Process should exit");
}

#[test]
fn smoke_version_flag() {
    let mut session =
        spawn(format!("{} --version", binary().display())).expect("Failed to spawn qlv");

    let _ = session
        .expect(Regex(r"qlv \d+\.\d+\.\d+"))
        .expect("Failed to find version output");
    let _ = session.expect(Eof).expect("Process should exit");
}

/// App starts on the built-in sample set and quits on `q`.
#[test]
fn smoke_app_starts_and_quits() {
    let mut session = spawn(binary().display().to_string()).expect("Failed to spawn qlv");

    std::thread::sleep(Duration::from_millis(500));
    let is_alive = session.is_alive().expect("Failed to check process status");
    assert!(is_alive, "Process should be running after startup");

    session.send("q").expect("Failed to send quit command");
    let _ = session.expect(Eof).expect("Process should exit");
}

/// Search, select, page and toggle full view without crashing.
#[test]
fn smoke_interaction_does_not_crash() {
    let mut session = spawn(format!(
        "{} --questions {}",
        binary().display(),
        fixture("questions.toml").display()
    ))
    .expect("Failed to spawn qlv");

    std::thread::sleep(Duration::from_millis(500));

    for keys in ["/", "planet", "\r", " ", "a", "f", "f", "m", "v", "j", " ", "\r", "?", "?"] {
        session.send(keys).expect("Failed to send keys");
        std::thread::sleep(Duration::from_millis(50));
    }

    let is_alive = session.is_alive().expect("Failed to check process status");
    assert!(is_alive, "Process should be running after interaction");

    session.send("q").expect("Failed to send quit command");
    let _ = session.expect(Eof).expect("Process should exit");
}
