//! Runs the e1002-convert binary.

mod common;

use std::process::Command;

use common::*;
use pretty_assertions::assert_eq;

fn cli() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_e1002-convert"));
    cmd.env_remove("DEVICES_FILE").env("RUST_LOG", "off");
    cmd
}

#[test]
fn test_list_devices() {
    let output = cli().arg("--list-devices").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let mut lines = stdout.lines();
    assert_eq!(lines.next(), Some("Available device profiles:"));
    assert!(stdout.contains("  reterminal-e1002          Seeed reTerminal E1002"));
}

#[test]
fn test_converts_file() {
    let dir = scratch_dir();
    let input = write_gradient(&dir.path().join("ramp.png"), 20, 10);
    let output = dir.path().join("out.png");

    let status = cli()
        .arg(&input)
        .args(["-o", output.to_str().unwrap()])
        .args(["--dither", "atkinson", "--no-resize", "--brightness", "-10"])
        .status()
        .unwrap();
    assert!(status.success());
    assert_eq!(assert_indexed_png(&output), (20, 10));
}

#[test]
fn test_invalid_method_exits_with_error() {
    let dir = scratch_dir();
    let input = write_gradient(&dir.path().join("ramp.png"), 4, 4);

    let output = cli()
        .arg(&input)
        .args(["--dither", "bayer"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("invalid dithering method: bayer"));
}

#[test]
fn test_missing_input_is_an_error() {
    let output = cli().output().unwrap();
    assert_eq!(output.status.code(), Some(1));
}
