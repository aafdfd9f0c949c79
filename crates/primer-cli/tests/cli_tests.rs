//! End-to-end tests for the `primer` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Runs `primer` in an empty directory so no stray `primer.toml` is picked up.
fn primer(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("primer").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("PRIMER_CONFIG")
        .env_remove("RUST_LOG");
    cmd
}

// =============================================================================
// FORMULAS
// =============================================================================

#[test]
fn test_pd_minimal() {
    let dir = TempDir::new().unwrap();
    primer(&dir)
        .args(["pd", "--score", "700", "--format", "minimal"])
        .assert()
        .success()
        .stdout("5.0000\n");
}

#[test]
fn test_pd_with_expected_loss_json() {
    let dir = TempDir::new().unwrap();
    primer(&dir)
        .args(["pd", "--score", "700", "--lgd", "50", "--exposure", "1000", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"expected_loss\": 25"))
        .stdout(predicate::str::contains("\"band\": \"Good\""));
}

#[test]
fn test_pd_lgd_requires_exposure() {
    let dir = TempDir::new().unwrap();
    primer(&dir)
        .args(["pd", "--score", "700", "--lgd", "40"])
        .assert()
        .failure();
}

#[test]
fn test_bond_price_change() {
    let dir = TempDir::new().unwrap();
    primer(&dir)
        .args(["bond", "--duration", "7", "--current", "4", "--new", "6", "-f", "minimal"])
        .assert()
        .success()
        .stdout("-12.943787\n");
}

#[test]
fn test_bond_table() {
    let dir = TempDir::new().unwrap();
    primer(&dir)
        .args(["bond", "--duration", "7", "--current", "4", "--new", "6"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Modified Duration"))
        .stdout(predicate::str::contains("6.7308"))
        .stdout(predicate::str::contains("-12.9438%"));
}

#[test]
fn test_bond_rejects_impossible_rate() {
    let dir = TempDir::new().unwrap();
    primer(&dir)
        .args(["bond", "--duration", "7", "--current", "-150", "--new", "6"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid current yield"));
}

#[test]
fn test_frontier_point() {
    let dir = TempDir::new().unwrap();
    primer(&dir)
        .args(["frontier", "--risk", "45", "--format", "minimal"])
        .assert()
        .success()
        .stdout("10.537384\n");
}

#[test]
fn test_frontier_sample_csv() {
    let dir = TempDir::new().unwrap();
    primer(&dir)
        .args(["frontier", "--points", "3", "--format", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("risk,expected_return,risk_premium\n0.0,4.5,0.0\n"));
}

#[test]
fn test_frontier_rejects_out_of_scale_risk() {
    let dir = TempDir::new().unwrap();
    primer(&dir)
        .args(["frontier", "--risk", "150"])
        .assert()
        .failure();
}

#[test]
fn test_var_lookup() {
    let dir = TempDir::new().unwrap();
    primer(&dir)
        .args([
            "var",
            "--confidence",
            "99",
            "--mode",
            "fat-tailed",
            "--value",
            "1000000",
            "--volatility",
            "1",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"threshold\": 2.8"))
        .stdout(predicate::str::contains("\"confidence\": \"99\""))
        .stdout(predicate::str::contains("\"mode\": \"fat-tailed\""));
}

#[test]
fn test_var_curve_has_default_grid() {
    let dir = TempDir::new().unwrap();
    let output = primer(&dir)
        .args(["var", "--curve", "--format", "minimal"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.lines().count(), 100);
    assert!(stdout.starts_with("-4.000000\t"));
}

#[test]
fn test_var_rejects_unknown_confidence() {
    let dir = TempDir::new().unwrap();
    primer(&dir)
        .args(["var", "--confidence", "90"])
        .assert()
        .failure();
}

// =============================================================================
// PROFILES AND SCENARIOS
// =============================================================================

#[test]
fn test_gap_money_center() {
    let dir = TempDir::new().unwrap();
    primer(&dir)
        .args(["gap", "--profile", "money-center", "--format", "minimal"])
        .assert()
        .success()
        .stdout("12.57825\n");
}

#[test]
fn test_equity_standard_shocks() {
    let dir = TempDir::new().unwrap();
    primer(&dir)
        .args(["equity", "--profile", "regional"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rates +300bp"))
        .stdout(predicate::str::contains("Rates -200bp"));
}

#[test]
fn test_equity_negative_shock() {
    let dir = TempDir::new().unwrap();
    primer(&dir)
        .args(["equity", "--shock", "-100", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"basis_points\": -100"));
}

#[test]
fn test_unknown_profile() {
    let dir = TempDir::new().unwrap();
    primer(&dir)
        .args(["gap", "--profile", "credit-union"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown bank profile: credit-union"));
}

#[test]
fn test_profiles_list() {
    let dir = TempDir::new().unwrap();
    primer(&dir)
        .args(["profiles", "--format", "minimal"])
        .assert()
        .success()
        .stdout("money-center\nregional\ncommunity\n");
}

#[test]
fn test_camels_composite() {
    let dir = TempDir::new().unwrap();
    primer(&dir)
        .args(["camels", "--profile", "regional", "--format", "minimal"])
        .assert()
        .success()
        .stdout("3\n");
}

#[test]
fn test_scenario_step_clamps() {
    let dir = TempDir::new().unwrap();
    primer(&dir)
        .args(["scenario", "liquidity", "--step", "99", "--format", "minimal"])
        .assert()
        .success()
        .stdout("Stabilization\n");

    primer(&dir)
        .args(["scenario", "supervision", "--step", "0", "--format", "minimal"])
        .assert()
        .success()
        .stdout("Off-site monitoring\n");
}

#[test]
fn test_scenario_all() {
    let dir = TempDir::new().unwrap();
    let output = primer(&dir)
        .args(["scenario", "liquidity", "--all", "--format", "minimal"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(String::from_utf8(output.stdout).unwrap().lines().count(), 6);
}

// =============================================================================
// CONFIGURATION
// =============================================================================

#[test]
fn test_local_config_is_picked_up() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("primer.toml"), "[credit]\npd_cap = 20.0\n").unwrap();

    primer(&dir)
        .args(["pd", "--score", "300", "--format", "minimal"])
        .assert()
        .success()
        .stdout("20.0000\n");
}

#[test]
fn test_explicit_config_missing() {
    let dir = TempDir::new().unwrap();
    primer(&dir)
        .args(["pd", "--score", "700", "--config", "nope.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_config_validate_reports_every_problem() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[frontier]\nslope = 0.0\n\n[var]\ngrid_points = 1\n").unwrap();

    primer(&dir)
        .args(["config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("frontier.slope"))
        .stderr(predicate::str::contains("var.grid_points"));
}

#[test]
fn test_config_init_then_show() {
    let dir = TempDir::new().unwrap();
    primer(&dir).args(["config", "init"]).assert().success();
    assert!(dir.path().join("primer.toml").exists());

    primer(&dir)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    primer(&dir)
        .args(["config", "show", "--format", "minimal"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[frontier]"))
        .stdout(predicate::str::contains("risk_free_rate = 4.5"));

    primer(&dir)
        .args(["config", "validate"])
        .assert()
        .success();
}

#[test]
fn test_quiet_suppresses_status_lines() {
    let dir = TempDir::new().unwrap();
    primer(&dir)
        .args(["-q", "config", "init"])
        .assert()
        .success()
        .stdout("");
    assert!(dir.path().join("primer.toml").exists());

    primer(&dir)
        .args(["config", "validate", "--quiet"])
        .assert()
        .success()
        .stdout("");

    primer(&dir)
        .args(["-q", "pd", "--score", "700", "--format", "minimal"])
        .assert()
        .success()
        .stdout("5.0000\n");
}

#[test]
fn test_quiet_keeps_errors() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.toml");
    std::fs::write(&path, "[frontier]\nslope = 0.0\n").unwrap();

    primer(&dir)
        .args(["-q", "config", "validate", "--config"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("frontier.slope"));
}
