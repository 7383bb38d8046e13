use std::fs;
use std::process::Command;

use anyhow::{Context, Result, anyhow};

/// Reads a raw graph document. A plain path is read from disk; a `cmd:`
/// prefix shells out and captures stdout, which covers sources that are
/// really an HTTP endpoint behind a small fetch script.
pub fn fetch_document(source: &str) -> Result<String> {
    if let Some(command_line) = source.strip_prefix("cmd:") {
        return run_fetch_command(command_line);
    }

    fs::read_to_string(source).with_context(|| format!("failed to read graph document {source}"))
}

fn run_fetch_command(command_line: &str) -> Result<String> {
    let mut parts = command_line.split_whitespace();
    let program = parts
        .next()
        .ok_or_else(|| anyhow!("empty fetch command"))?;

    let output = Command::new(program)
        .args(parts)
        .output()
        .with_context(|| format!("failed to spawn fetch command: {command_line}"))?;

    if output.status.success() {
        String::from_utf8(output.stdout).context("fetch command output was not valid UTF-8")
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(anyhow!("fetch command failed ({command_line}): {stderr}"))
    }
}
