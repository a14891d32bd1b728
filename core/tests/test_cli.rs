use assert_cmd::cargo::cargo_bin_cmd;
use blepower_core::PowerReport;
use std::path::PathBuf;

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/session.log")
}

#[test]
fn json_output_is_a_power_report() {
    let mut cmd = cargo_bin_cmd!("blepower");
    cmd.arg(fixture()).arg("--json");
    let out = cmd.assert().success().get_output().stdout.clone();

    let report: PowerReport = serde_json::from_slice(&out).expect("valid JSON report");
    assert_eq!(report.seconds, vec![1, 1, 2, 3]);
    assert_eq!(report.rolling.len(), 3);
}

#[test]
fn writes_csv_and_summary() {
    let dir = tempfile::tempdir().unwrap();
    let csv_path = dir.path().join("out.csv");

    let mut cmd = cargo_bin_cmd!("blepower");
    cmd.arg(fixture()).arg("--csv").arg(&csv_path);
    let out = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(out).unwrap();
    assert!(text.contains("--- Power Report ---"));
    assert!(text.contains("3 Second Power"));

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 5);
}

#[test]
fn missing_log_fails() {
    let mut cmd = cargo_bin_cmd!("blepower");
    cmd.arg("tests/data/nope.log");
    cmd.assert().failure();
}

#[test]
fn plot_and_metrics_flags() {
    let dir = tempfile::tempdir().unwrap();
    let png = dir.path().join("out.png");

    let mut cmd = cargo_bin_cmd!("blepower");
    cmd.arg(fixture()).arg("--plot").arg(&png).arg("--metrics");
    let out = cmd.assert().success().get_output().stderr.clone();
    let stderr = String::from_utf8(out).unwrap();

    assert!(stderr.contains("blepower_lines_total 15"));
    assert!(std::fs::metadata(&png).unwrap().len() > 0);
}
