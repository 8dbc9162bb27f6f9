//! CLI integration tests for every `moodcast` subcommand.
//!
//! Uses `assert_cmd` to spawn the `moodcast` binary and verify exit codes,
//! stdout content, and stderr content. Each test points `MOODCAST_STORE`
//! at its own temp directory so the last-result pointer never leaks
//! between tests.

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use moodcast_core::{build_card_spec, encode, Energy, InputState, Pressure, Social};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Locate the workspace root by walking up from CARGO_MANIFEST_DIR.
fn workspace_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    // crates/cli -> workspace root is two levels up
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("workspace root")
        .to_path_buf()
}

/// Helper: a `moodcast` command with an isolated store and a fixed site URL.
fn moodcast(store_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("moodcast");
    cmd.current_dir(workspace_root());
    cmd.env("MOODCAST_STORE", store_dir.path().join("last.json"));
    cmd.env("MOODCAST_SITE_URL", "https://moodcast.test");
    cmd.env_remove("MOODCAST_KAKAO_JS_KEY");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn sample_token() -> String {
    encode(&build_card_spec(InputState::new(
        Energy::Low,
        Social::Off,
        Pressure::Overload,
    )))
}

// ──────────────────────────────────────────────
// 1. Help and version
// ──────────────────────────────────────────────

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    moodcast(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("create"))
        .stdout(predicate::str::contains("decode"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn version_exits_0() {
    let dir = TempDir::new().unwrap();
    moodcast(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("moodcast"));
}

// ──────────────────────────────────────────────
// 2. create
// ──────────────────────────────────────────────

#[test]
fn create_prints_card_and_share_link() {
    let dir = TempDir::new().unwrap();
    moodcast(&dir)
        .args(["create", "--energy", "low", "--social", "off", "--pressure", "overload"])
        .assert()
        .success()
        .stdout(predicate::str::contains("turbulence 84% (typhoon)"))
        .stdout(predicate::str::contains("share: https://moodcast.test/result?s="));
}

#[test]
fn create_json_output_has_spec_token_and_url() {
    let dir = TempDir::new().unwrap();
    let output = moodcast(&dir)
        .args([
            "--output", "json", "create", "--energy", "high", "--social", "open", "--pressure",
            "calm",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["spec"]["turbulence"], 17);
    assert_eq!(json["spec"]["weather"], "clear");
    assert_eq!(json["spec"]["v"], 1);
    let token = json["token"].as_str().unwrap();
    assert!(token
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    assert_eq!(
        json["share_url"],
        format!("https://moodcast.test/result?s={}", token)
    );
}

#[test]
fn create_rejects_unknown_choice() {
    let dir = TempDir::new().unwrap();
    moodcast(&dir)
        .args(["create", "--energy", "max"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown energy 'max'"));
}

#[test]
fn create_random_succeeds() {
    let dir = TempDir::new().unwrap();
    moodcast(&dir)
        .args(["--quiet", "create", "--random"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("https://moodcast.test/result?s="));
}

// ──────────────────────────────────────────────
// 3. last
// ──────────────────────────────────────────────

#[test]
fn last_fails_before_any_create() {
    let dir = TempDir::new().unwrap();
    moodcast(&dir)
        .arg("last")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no recent result"));
}

#[test]
fn last_points_at_most_recent_create() {
    let dir = TempDir::new().unwrap();
    let output = moodcast(&dir)
        .args([
            "--output", "json", "create", "--energy", "mid", "--social", "neutral",
            "--pressure", "normal",
        ])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let token = json["token"].as_str().unwrap().to_string();

    moodcast(&dir)
        .arg("last")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "https://moodcast.test/result?s={}\n",
            token
        )));
}

#[test]
fn store_flag_overrides_env() {
    let dir = TempDir::new().unwrap();
    let other = dir.path().join("elsewhere.json");
    moodcast(&dir)
        .arg("--store")
        .arg(&other)
        .args(["create", "--random"])
        .assert()
        .success();

    assert!(other.exists());
    assert!(!dir.path().join("last.json").exists());
}

// ──────────────────────────────────────────────
// 4. decode
// ──────────────────────────────────────────────

#[test]
fn decode_valid_token() {
    let dir = TempDir::new().unwrap();
    moodcast(&dir)
        .args(["--output", "json", "decode", &sample_token()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"turbulence\": 84"))
        .stdout(predicate::str::contains("\"weather\": \"typhoon\""));
}

#[test]
fn decode_garbage_token_exits_1() {
    let dir = TempDir::new().unwrap();
    moodcast(&dir)
        .args(["decode", "not-a-valid-token"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid token"));
}

#[test]
fn decode_error_json_output() {
    let dir = TempDir::new().unwrap();
    let output = moodcast(&dir)
        .args(["--output", "json", "decode", "%%%"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert!(json["error"].as_str().unwrap().starts_with("invalid token"));
}

#[test]
fn decode_quiet_suppresses_error() {
    let dir = TempDir::new().unwrap();
    moodcast(&dir)
        .args(["--quiet", "decode", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::is_empty());
}

// ──────────────────────────────────────────────
// 5. validate
// ──────────────────────────────────────────────

fn write_record(dir: &TempDir, name: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

#[test]
fn validate_scored_record() {
    let dir = TempDir::new().unwrap();
    let spec = build_card_spec(InputState::default());
    let path = write_record(&dir, "ok.json", &spec.to_json_value());

    moodcast(&dir)
        .arg("validate")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("valid"));
}

#[test]
fn validate_reports_out_of_range_turbulence() {
    let dir = TempDir::new().unwrap();
    let mut value = build_card_spec(InputState::default()).to_json_value();
    value["turbulence"] = serde_json::json!(140);
    let path = write_record(&dir, "bad.json", &value);

    moodcast(&dir)
        .arg("validate")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid record"));
}

#[test]
fn validate_rejects_bad_timestamp() {
    let dir = TempDir::new().unwrap();
    let mut value = build_card_spec(InputState::default()).to_json_value();
    value["createdAt"] = serde_json::json!("yesterday");
    let path = write_record(&dir, "when.json", &value);

    let output = moodcast(&dir)
        .args(["--output", "json", "validate"])
        .arg(&path)
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["valid"], false);
    assert!(!json["errors"].as_array().unwrap().is_empty());
}

#[test]
fn validate_missing_file() {
    let dir = TempDir::new().unwrap();
    moodcast(&dir)
        .args(["validate", "does/not/exist.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error reading file"));
}

// ──────────────────────────────────────────────
// 6. share
// ──────────────────────────────────────────────

#[test]
fn share_plan_json() {
    let dir = TempDir::new().unwrap();
    let token = sample_token();
    let output = moodcast(&dir)
        .args(["--output", "json", "share", &token])
        .output()
        .unwrap();
    assert!(output.status.success());

    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        plan["share_url"],
        format!("https://moodcast.test/result?s={}", token)
    );
    assert_eq!(
        plan["og_image_url"],
        format!("https://moodcast.test/api/og?s={}", token)
    );
    assert!(plan["title"].as_str().unwrap().contains("84%"));
    assert!(plan.get("kakao_feed").is_none());
}

#[test]
fn share_with_kakao_key_includes_feed() {
    let dir = TempDir::new().unwrap();
    let output = moodcast(&dir)
        .env("MOODCAST_KAKAO_JS_KEY", "test-key")
        .args(["--output", "json", "share", &sample_token()])
        .output()
        .unwrap();
    let plan: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(plan["kakao_feed"]["objectType"], "feed");
}

#[test]
fn share_invalid_token_exits_1() {
    let dir = TempDir::new().unwrap();
    moodcast(&dir)
        .args(["share", "bogus"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid token"));
}
