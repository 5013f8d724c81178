//! Runs the compiled binary against the bundled scenario files.

use std::path::PathBuf;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_hvac-cost"))
        .args(args)
        .current_dir(env!("CARGO_MANIFEST_DIR"))
        .output()
        .expect("failed to spawn hvac-cost")
}

fn dollars(stdout: &str, prefix: &str) -> f64 {
    let line = stdout
        .lines()
        .find(|l| l.starts_with(prefix))
        .unwrap_or_else(|| panic!("no line starting with {prefix:?} in:\n{stdout}"));
    line.rsplit('$').next().unwrap().trim().parse().unwrap()
}

#[test]
fn baseline_scenario_prints_regression_cost() {
    let out = run(&["--scenario", "scenarios/baseline.toml"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert!(stdout.contains("--- Calculation Trace ---"));
    assert!(stdout.contains("Cost per hour:        $7.88"));
    assert!(stdout.contains("Cost per tenant-hour: $7.88"));
}

#[test]
fn retail_miami_scenario_matches_preset() {
    let file = run(&["--scenario", "scenarios/retail_miami.toml"]);
    let preset = run(&["--preset", "retail_miami"]);
    assert!(file.status.success());
    assert!(preset.status.success());

    let stdout = String::from_utf8(file.stdout).unwrap();
    assert_eq!(dollars(&stdout, "Cost per hour:"), 3.99);
    assert_eq!(dollars(&stdout, "Cost per tenant-hour:"), 1.00);
    assert_eq!(stdout, String::from_utf8(preset.stdout).unwrap());
}

#[test]
fn custom_cfm_scenario_overrides_preset() {
    let out = run(&["--scenario", "scenarios/leaky_warehouse_custom_cfm.toml"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();

    assert!(stdout.contains("4000.0"));
    assert_eq!(dollars(&stdout, "Cost per hour:"), 89.67);
    assert_eq!(dollars(&stdout, "Cost per tenant-hour:"), 29.89);
}

#[test]
fn json_output_parses() {
    let out = run(&["--preset", "data_center_phoenix", "--json"]);
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();

    let cost = json["cost_per_hour"].as_f64().unwrap();
    assert!((cost - 8.776_002_772_915_362).abs() < 1e-9);
    assert_eq!(json["breakdown"]["mode"], "Cooling");
}

#[test]
fn unknown_preset_fails() {
    let out = run(&["--preset", "bogus"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8(out.stderr).unwrap();
    assert!(stderr.contains("bogus"));
}

#[test]
fn scenario_and_preset_are_exclusive() {
    let out = run(&["--scenario", "scenarios/baseline.toml", "--preset", "baseline"]);
    assert!(!out.status.success());
}

#[test]
fn missing_scenario_file_fails() {
    let out = run(&["--scenario", "scenarios/does_not_exist.toml"]);
    assert!(!out.status.success());
}

#[test]
fn trace_out_writes_csv() {
    let path: PathBuf = std::env::temp_dir().join(format!(
        "hvac-cost-trace-{}.csv",
        std::process::id()
    ));
    let out = run(&["--trace-out", path.to_str().unwrap()]);
    assert!(out.status.success());

    let csv = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).ok();

    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("label,value"));
    assert_eq!(csv.lines().count(), 37);
    assert!(csv.contains("Total Cost/hr ($),7.88"));
}

#[test]
fn list_prints_reference_tables() {
    let out = run(&["--list"]);
    assert!(out.status.success());
    let stdout = String::from_utf8(out.stdout).unwrap();
    assert!(stdout.contains("Cities:"));
    assert!(stdout.contains("San Francisco"));
    assert!(stdout.contains("Geothermal HP"));
}
