#![allow(missing_docs, clippy::tests_outside_test_module)]

use std::{fs, path::Path, process::Command};

use assert_cmd::{
    Command as CargoCommand,
    assert::{Assert, OutputAssertExt},
    cargo::CommandCargoExt,
};
use tempfile::tempdir;

const POINTS: &str = r#"[{"x": 0, "y": 0}, {"x": 1, "y": 1}, {"x": 2, "y": null}, {"x": 3, "y": 3}]"#;

fn write(path: &Path, json: &str) {
    fs::write(path, json).expect("write input");
}

#[allow(deprecated)]
fn cpath() -> Command {
    Command::cargo_bin("cpath").expect("binary exists")
}

fn render(input: &Path, args: &[&str]) -> Assert {
    let mut cmd = cpath();
    cmd.arg("render").args(args).arg(input);
    cmd.assert()
}

fn stdout(assert: &Assert) -> String {
    String::from_utf8(assert.get_output().stdout.clone()).expect("utf8 output")
}

#[test]
fn renders_line_with_gap() {
    let td = tempdir().expect("tmp");
    let input = td.path().join("points.json");
    write(&input, POINTS);

    let out = render(&input, &[]).success();
    assert_eq!(stdout(&out).trim(), "M0,0L1,1M3,3Z");
}

#[test]
fn connect_nulls_bridges_gap() {
    let td = tempdir().expect("tmp");
    let input = td.path().join("points.json");
    write(&input, POINTS);

    let out = render(&input, &["--connect-nulls"]).success();
    assert_eq!(stdout(&out).trim(), "M0,0L1,1L3,3");
}

#[test]
fn scalar_baseline_draws_area() {
    let td = tempdir().expect("tmp");
    let input = td.path().join("points.json");
    write(&input, r#"[{"x": 0, "y": 3}, {"x": 1, "y": 4}]"#);

    let out = render(&input, &["--baseline", "0"]).success();
    assert_eq!(stdout(&out).trim(), "M0,3L1,4L1,0L0,0Z");
}

#[test]
fn baseline_file_draws_area() {
    let td = tempdir().expect("tmp");
    let input = td.path().join("points.json");
    let base = td.path().join("base.json");
    write(&input, r#"[{"x": 0, "y": 3}, {"x": 1, "y": 4}]"#);
    write(&base, r#"[{"x": 0, "y": 1}, {"x": 1, "y": 2}]"#);

    let out = render(&input, &["--baseline-file", base.to_str().expect("path")]).success();
    assert_eq!(stdout(&out).trim(), "M0,3L1,4L1,2L0,1Z");
}

#[test]
fn short_baseline_file_fails() {
    let td = tempdir().expect("tmp");
    let input = td.path().join("points.json");
    let base = td.path().join("base.json");
    write(&input, r#"[{"x": 0, "y": 3}, {"x": 1, "y": 4}]"#);
    write(&base, r#"[{"x": 0, "y": 1}]"#);

    render(&input, &["--baseline-file", base.to_str().expect("path")]).failure();
}

#[test]
fn unknown_type_draws_linear_unless_strict() {
    let td = tempdir().expect("tmp");
    let input = td.path().join("points.json");
    write(&input, POINTS);

    let loose = render(&input, &["-t", "wiggly"]).success();
    assert_eq!(stdout(&loose).trim(), "M0,0L1,1M3,3Z");
    render(&input, &["-t", "wiggly", "--strict"]).failure();
}

#[test]
fn digits_round_coordinates() {
    let td = tempdir().expect("tmp");
    let input = td.path().join("points.json");
    write(&input, r#"[{"x": 0.123, "y": 1.987}, {"x": 2.5, "y": 3.25}]"#);

    let out = render(&input, &["--digits", "1"]).success();
    assert_eq!(stdout(&out).trim(), "M0.1,2L2.5,3.3");
}

#[test]
fn empty_input_prints_nothing_or_fallback() {
    let td = tempdir().expect("tmp");
    let input = td.path().join("empty.json");
    write(&input, "[]");

    let out = render(&input, &[]).success();
    assert!(stdout(&out).is_empty());

    let out = render(&input, &["--fallback", "M0,0"]).success();
    assert_eq!(stdout(&out).trim(), "M0,0");
}

#[test]
#[allow(deprecated)]
fn reads_stdin() {
    let mut cmd = CargoCommand::cargo_bin("cpath").expect("binary exists");
    let out = cmd
        .args(["render", "-t", "step"])
        .write_stdin(r#"[{"x": 0, "y": 0}, {"x": 2, "y": 2}]"#)
        .assert()
        .success();
    assert_eq!(stdout(&out).trim(), "M0,0L1,0L1,2L2,2");
}

#[test]
fn malformed_input_fails() {
    let td = tempdir().expect("tmp");
    let input = td.path().join("bad.json");
    write(&input, r#"{"x": 1}"#);

    render(&input, &[]).failure();
    render(&td.path().join("missing.json"), &[]).failure();
}

#[test]
fn lists_curves() {
    let out = cpath().arg("list-curves").assert().success();
    let text = stdout(&out);
    for key in ["linear", "monotone", "stepAfter", "basisClosed"] {
        assert!(text.contains(&format!("- {key} — ")), "missing {key}");
    }
}
