//! Shared test utilities for integration tests.
//!
//! Provides helpers for writing transcript fixtures and running the
//! chatmark binary against them.

#![allow(dead_code)]

use anyhow::Result;
use chatmark::Message;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Writes messages as a JSON transcript file.
///
/// # Errors
///
/// Returns error if serialization or the file write fails
pub fn write_transcript(dir: &Path, name: &str, messages: &[Message]) -> Result<PathBuf> {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string_pretty(messages)?)?;
    Ok(path)
}

/// Runs the chatmark binary with arguments and optional stdin content.
///
/// # Errors
///
/// Returns error if the process cannot be spawned or waited on
pub fn run_chatmark(args: &[&str], stdin: Option<&str>) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_chatmark"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    if let Some(mut handle) = child.stdin.take() {
        if let Some(input) = stdin {
            handle.write_all(input.as_bytes())?;
        }
    }

    Ok(child.wait_with_output()?)
}
