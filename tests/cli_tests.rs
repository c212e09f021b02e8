//! Integration tests for the campusnet CLI

mod common;

use campusnet_core::config::{NetworkConfig, RegistryConfig};
use common::{campusnet, write_campus};
use predicates::prelude::*;
use std::fs;
use tempfile::tempdir;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn test_help_flag() {
    campusnet()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: campusnet"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("zone"));
}

#[test]
fn test_version_flag() {
    campusnet()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("campusnet"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    campusnet()
        .assert()
        .success()
        .stdout(predicate::str::contains("campusnet --help"));
}

// ============================================================================
// Exit codes
// ============================================================================

#[test]
fn test_unknown_format_exit_code_2() {
    campusnet()
        .args(["--format", "xml", "info"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("possible values: human, json"));
}

#[test]
fn test_bad_node_id_exit_code_2_json_envelope() {
    campusnet()
        .args(["--format", "json", "path", "1", "abc"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_missing_data_files_exit_code_1() {
    let dir = tempdir().unwrap();
    campusnet()
        .current_dir(dir.path())
        .arg("info")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to open"));
}

#[test]
fn test_missing_explicit_config_exit_code_3() {
    let dir = tempdir().unwrap();
    campusnet()
        .current_dir(dir.path())
        .args(["--config", "absent.toml", "info"])
        .assert()
        .code(3);
}

#[test]
fn test_invalid_config_exit_code_3() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());
    fs::write(
        dir.path().join("campusnet.toml"),
        "[registry]\nmin_classes = 4\nmax_classes = 2\n",
    )
    .unwrap();
    campusnet()
        .current_dir(dir.path())
        .arg("info")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("invalid config"));
}

// ============================================================================
// Queries
// ============================================================================

#[test]
fn test_path_human() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());
    campusnet()
        .current_dir(dir.path())
        .args(["path", "16", "49"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("12\n"))
        .stdout(predicate::str::contains(
            "16 (Hume Hall) -> 5 (Reitz Union) -> 14 (Marston Library) -> 49 (Turlington Hall)",
        ));
}

#[test]
fn test_path_unreachable_json() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());
    let output = campusnet()
        .current_dir(dir.path())
        .args(["--format", "json", "path", "16", "999"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["cost"], -1);
    assert_eq!(json["reachable"], false);
    assert_eq!(json["path"].as_array().unwrap().len(), 0);
}

#[test]
fn test_connected_and_status() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());
    campusnet()
        .current_dir(dir.path())
        .args(["connected", "50", "55"])
        .assert()
        .success()
        .stdout("successful\n");
    campusnet()
        .current_dir(dir.path())
        .args(["status", "5", "16"])
        .assert()
        .success()
        .stdout("open\n");
    campusnet()
        .current_dir(dir.path())
        .args(["status", "16", "55"])
        .assert()
        .success()
        .stdout("DNE\n");
}

#[test]
fn test_status_with_negative_location_id() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());
    campusnet()
        .current_dir(dir.path())
        .args(["status", "-1", "2"])
        .assert()
        .success()
        .stdout("DNE\n");
}

#[test]
fn test_zone_with_classes_and_locations() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());
    campusnet()
        .current_dir(dir.path())
        .args([
            "--quiet", "zone", "16", "--class", "COP3530", "--class", "MAC2311", "--location", "5",
        ])
        .assert()
        .success()
        .stdout("Zone cost for 16: 22\n");
}

#[test]
fn test_zone_class_with_global_classes_override() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());
    let alt = dir.path().join("alt-classes.csv");
    fs::write(&alt, "code,location,start,end\nPHY2048,50,08:30,09:20\n").unwrap();
    campusnet()
        .current_dir(dir.path())
        .arg("--classes")
        .arg(&alt)
        .args(["--quiet", "zone", "16", "--class", "PHY2048"])
        .assert()
        .success()
        .stdout("Zone cost for 16: 13\n");
}

#[test]
fn test_zone_unknown_class_exit_code_3() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());
    campusnet()
        .current_dir(dir.path())
        .args(["zone", "16", "--class", "PHY2048"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("class not found: PHY2048"));
}

#[test]
fn test_zone_json_reports_unreachable() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());
    let output = campusnet()
        .current_dir(dir.path())
        .args(["--format", "json", "zone", "16", "--location", "14", "--location", "777"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["cost"], 9);
    assert_eq!(json["partial"], false);
    assert_eq!(json["unreachable"], serde_json::json!([777]));
}

#[test]
fn test_info_counts() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());
    campusnet()
        .current_dir(dir.path())
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains("Locations: 7"))
        .stdout(predicate::str::contains("Edges: 6 (6 open)"))
        .stdout(predicate::str::contains("Classes: 4"))
        .stdout(predicate::str::contains("Config: defaults"));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_file_relative_paths() {
    let dir = tempdir().unwrap();
    let net = dir.path().join("net");
    fs::create_dir_all(&net).unwrap();
    fs::write(net.join("e.csv"), common::EDGES).unwrap();
    fs::write(net.join("c.csv"), common::CLASSES).unwrap();
    fs::write(
        net.join("campus.toml"),
        "[data]\nedges = \"e.csv\"\nclasses = \"c.csv\"\n",
    )
    .unwrap();

    campusnet()
        .current_dir(dir.path())
        .args(["--config", "net/campus.toml", "status", "40", "50"])
        .assert()
        .success()
        .stdout("open\n");
}

#[test]
fn test_edges_flag_overrides_config() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());
    fs::write(dir.path().join("tiny.csv"), "a,b,c,d,t\n1,2,One,Two,9\n").unwrap();

    campusnet()
        .current_dir(dir.path())
        .args(["--edges", "tiny.csv", "path", "1", "2"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("9\n"));
}

#[test]
fn test_saved_config_limits_apply() {
    let dir = tempdir().unwrap();
    write_campus(dir.path());
    let config = NetworkConfig {
        registry: RegistryConfig {
            min_classes: 2,
            max_classes: 3,
        },
        ..Default::default()
    };
    config.save(&dir.path().join("campusnet.toml")).unwrap();

    campusnet()
        .current_dir(dir.path())
        .args(["run"])
        .write_stdin("2\ninsert \"Solo\" 12345678 16 1 COP3530\ninsert \"Duo\" 87654321 16 2 COP3530 CDA3101\n")
        .assert()
        .success()
        .stdout("unsuccessful\nsuccessful\n");
}
