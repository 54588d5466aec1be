//! CLI end-to-end tests
//!
//! Tests for the dlnaprofile command-line interface.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

/// Get a command for the dlnaprofile binary
#[allow(deprecated)]
fn dlnaprofile_cmd() -> Command {
    Command::cargo_bin("dlnaprofile").unwrap()
}

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

#[test]
fn test_cli_no_args_shows_help() {
    let mut cmd = dlnaprofile_cmd();
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_version_command() {
    let mut cmd = dlnaprofile_cmd();
    cmd.arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("dlnaprofile"));
}

#[test]
fn test_cli_identify_descriptor() {
    let mut cmd = dlnaprofile_cmd();
    cmd.args(["identify"])
        .arg(fixture("hd_na_broadcast.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile: MPEG_TS_HD_NA_T"))
        .stdout(predicate::str::contains(
            "protocolInfo: http-get:*:video/vnd.dlna.mpeg-tts:DLNA.ORG_PN=MPEG_TS_HD_NA_T",
        ))
        .stdout(predicate::str::contains("object.item.videoItem.movie"));
}

#[test]
fn test_cli_identify_json() {
    let output = dlnaprofile_cmd()
        .args(["identify", "--json"])
        .arg(fixture("hd_na_broadcast.json"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["profile"]["id"], "MPEG_TS_HD_NA_T");
    assert_eq!(json["profile"]["media_class"], "av");
    assert_eq!(json["upnp_class"], "object.item.videoItem.movie");
}

#[test]
fn test_cli_identify_no_match() {
    let mut cmd = dlnaprofile_cmd();
    cmd.arg("identify")
        .arg(fixture("unsupported_720p.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No compliant DLNA profile"));
}

#[test]
fn test_cli_identify_ffprobe_report() {
    let mut cmd = dlnaprofile_cmd();
    cmd.args(["identify", "--ffprobe"])
        .arg(fixture("ffprobe_aac.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile: AAC_ADTS_320"));
}

#[test]
fn test_cli_identify_missing_file() {
    let mut cmd = dlnaprofile_cmd();
    cmd.args(["identify", "/nonexistent/descriptor.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not exist"));
}

#[test]
fn test_cli_identify_with_upnp_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[output]\ncapability = \"upnp-av\"\n").unwrap();

    let mut cmd = dlnaprofile_cmd();
    cmd.arg("--config")
        .arg(&config_path)
        .arg("identify")
        .arg(fixture("hd_na_broadcast.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "protocolInfo: http-get:*:video/vnd.dlna.mpeg-tts:*",
        ));
}

#[test]
fn test_cli_catalog_filter() {
    let mut cmd = dlnaprofile_cmd();
    cmd.args(["catalog", "--class", "image"])
        .assert()
        .success()
        .stdout(predicate::str::contains("JPEG_SM"))
        .stdout(predicate::str::contains("PNG_LRG"))
        .stdout(predicate::str::contains("MPEG_TS").not());
}

#[test]
fn test_cli_catalog_bad_class() {
    let mut cmd = dlnaprofile_cmd();
    cmd.args(["catalog", "--class", "hologram"]).assert().failure();
}

#[test]
fn test_cli_validate_valid_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(
        &config_path,
        "[engine]\nfamilies = [\"AV_MPEG2\"]\nextension_check = true\n",
    )
    .unwrap();

    let mut cmd = dlnaprofile_cmd();
    cmd.arg("validate")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("AV_MPEG2"));
}

#[test]
fn test_cli_validate_invalid_config() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.toml");
    fs::write(&config_path, "[engine]\nfamilies = [\"AV_THEORA\"]\n").unwrap();

    let mut cmd = dlnaprofile_cmd();
    cmd.arg("validate").arg(&config_path).assert().failure();
}
