//! CLI integration tests

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

/// Build command for the engnote-cli binary (finds it in target/debug when run via cargo test).
fn engnote_cli() -> Command {
    cargo_bin_cmd!("engnote-cli")
}

/// Path to the built-in table JSON shipped with the library.
fn builtin_tables() -> std::path::PathBuf {
    std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("engnote")
        .join("tables")
        .join("default.json")
}

#[test]
fn test_cli_help() {
    let mut cmd = engnote_cli();

    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Engineering-notation"));
}

#[test]
fn test_cli_version() {
    let mut cmd = engnote_cli();

    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_parse_resistor_notation() {
    let mut cmd = engnote_cli();

    cmd.arg("parse").arg("1kR").arg("1R2").arg("2mV");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1000 R"))
        .stdout(predicate::str::contains("1.2 R"))
        .stdout(predicate::str::contains("0.002 V"));
}

#[test]
fn test_cli_parse_with_kind() {
    let mut cmd = engnote_cli();

    cmd.arg("parse").arg("--kind").arg("4k7Ohm");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("4700 Ohm (ohm)"));
}

#[test]
fn test_cli_parse_kind_requires_unit() {
    let mut cmd = engnote_cli();

    cmd.arg("parse").arg("--kind").arg("4k7");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown unit"));
}

#[test]
fn test_cli_parse_json_output() {
    let mut cmd = engnote_cli();

    cmd.arg("parse").arg("--format").arg("json").arg("10kHz");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"results\""))
        .stdout(predicate::str::contains("\"unit\": \"Hz\""))
        .stdout(predicate::str::contains("10000"));
}

#[test]
fn test_cli_parse_ambiguous_suffix_fails() {
    let mut cmd = engnote_cli();

    cmd.arg("parse").arg("1k2m");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Error"))
        .stderr(predicate::str::contains("More than one SI suffix"));
}

#[test]
fn test_cli_split() {
    let mut cmd = engnote_cli();

    cmd.arg("split").arg("1R2");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Number: 1.2"))
        .stdout(predicate::str::contains("Suffix: R"))
        .stdout(predicate::str::contains("Unit:   R"));
}

#[test]
fn test_cli_format() {
    let mut cmd = engnote_cli();
    cmd.arg("format").arg("0.0025");
    cmd.assert().success().stdout("2.50 m\n");

    let mut cmd = engnote_cli();
    cmd.arg("format").arg("--unit").arg("V").arg("-1234.5");
    cmd.assert().success().stdout("-1.23 kV\n");
}

#[test]
fn test_cli_format_out_of_range() {
    let mut cmd = engnote_cli();

    cmd.arg("format").arg("1e30");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("out of range"));
}

#[test]
fn test_cli_scale() {
    let mut cmd = engnote_cli();

    cmd.arg("scale").arg("1mA").arg("2mA").arg("1.5mA");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Suffix:     m"))
        .stdout(predicate::str::contains("Multiplier: 1000"))
        .stdout(predicate::str::contains("1.50 mA"));
}

#[test]
fn test_cli_tables() {
    let mut cmd = engnote_cli();

    cmd.arg("tables").arg("--aliases");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("SI suffixes"))
        .stdout(predicate::str::contains("Hz"))
        .stdout(predicate::str::contains("Ohm"));
}

#[test]
fn test_cli_custom_tables_file() {
    let mut cmd = engnote_cli();

    cmd.arg("--tables").arg(builtin_tables()).arg("parse").arg("4k7");
    cmd.assert().success().stdout("4700\n");
}

#[test]
fn test_cli_malformed_tables_fail_fast() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"suffixes": [{{"exponent": 0, "aliases": ["", "R"]}}], "units": []}}"#
    )
    .unwrap();

    let mut cmd = engnote_cli();
    cmd.arg("--tables").arg(file.path()).arg("parse").arg("1k");
    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Expected 17 suffix buckets"));
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    let mut cmd = engnote_cli();

    cmd.arg("--verbose").arg("parse").arg("2mV");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("0.002 V"))
        .stderr(predicate::str::contains("Parsed"));
}
