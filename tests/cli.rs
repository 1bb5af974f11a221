//! Integration tests for the gridmean binary.

use std::fs;
use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!(
        "gridmean_{}_{:?}_{}",
        std::process::id(),
        std::thread::current().id(),
        name,
    ))
}

struct Cleanup(PathBuf);

impl Drop for Cleanup {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.0);
    }
}

fn write_config(name: &str, content: &str) -> (PathBuf, Cleanup) {
    let path = temp_path(name);
    fs::write(&path, content).expect("failed to write config fixture");
    let cleanup = Cleanup(path.clone());
    (path, cleanup)
}

fn gridmean() -> Command {
    Command::new(env!("CARGO_BIN_EXE_gridmean"))
}

#[test]
fn configured_grid_runs_once() {
    let (config, _cleanup) = write_config("fixed.toml", "grid = [[1, 2], [3, 4]]\n");

    let output = gridmean()
        .arg("--config")
        .arg(&config)
        .output()
        .expect("failed to run gridmean");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    // Source grid, transposed and bottom-to-top.
    assert!(stdout.contains("         2         4"));
    assert!(stdout.contains("         1         3"));
    // Expressions and averages.
    assert!(stdout.contains("(3 + 2 + 1) / 3"));
    assert!(stdout.contains("2.33"));
    assert!(stdout.contains("3.00"));
}

#[test]
fn jagged_configured_grid_fails() {
    let (config, _cleanup) = write_config("jagged.toml", "grid = [[1, 2], [3]]\n");

    let output = gridmean()
        .arg("--config")
        .arg(&config)
        .output()
        .expect("failed to run gridmean");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("unequal heights"));
}

#[test]
fn non_numeric_configured_grid_fails() {
    let (config, _cleanup) = write_config("text.toml", "grid = [[1, \"a\"]]\n");

    let output = gridmean()
        .arg("--config")
        .arg(&config)
        .output()
        .expect("failed to run gridmean");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("not numeric"));
}

#[test]
fn stop_response_exits_cleanly() {
    let mut child = gridmean()
        .arg("--no-config")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn gridmean");

    child
        .stdin
        .as_mut()
        .expect("stdin piped")
        .write_all(b"N\n")
        .expect("failed to write response");

    let output = child.wait_with_output().expect("failed to wait");
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("[Y/M/N]"));
}

#[test]
fn unrecognised_response_stops() {
    let mut child = gridmean()
        .arg("--no-config")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("failed to spawn gridmean");

    child
        .stdin
        .as_mut()
        .expect("stdin piped")
        .write_all(b"whatever\n")
        .expect("failed to write response");

    let output = child.wait_with_output().expect("failed to wait");
    assert!(output.status.success());
}

#[test]
fn closed_stdin_stops_the_prompt() {
    let output = gridmean()
        .arg("--no-config")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .output()
        .expect("failed to run gridmean");

    assert!(output.status.success());
}

#[test]
fn markdown_export_writes_tables() {
    let (config, _cleanup) = write_config("export.toml", "grid = [[1, 2], [3, 4]]\n");
    let out_path = temp_path("export.md");
    let _out_cleanup = Cleanup(out_path.clone());

    let output = gridmean()
        .arg("--config")
        .arg(&config)
        .arg("-o")
        .arg(&out_path)
        .output()
        .expect("failed to run gridmean");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Exported to"));

    let exported = fs::read_to_string(&out_path).expect("export file missing");
    assert!(exported.contains("|---|"));
    assert!(exported.contains("(3 + 2 + 1) / 3"));
    assert!(exported.contains("| 0 | 2.33 | 3.00 |"));
}

#[test]
fn help_prints_usage() {
    let output = gridmean().arg("--help").output().expect("failed to run gridmean");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Usage: gridmean"));
}
