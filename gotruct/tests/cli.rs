use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

const MIXED_OUTPUT: &str = "package converter

// @autowire(set=converter)
type WidgetsConverter struct {
\tOrderConverter    OrderConverter
\tLineItemConverter LineItemConverter
}

// @autowire(set=converter)
type unknownConverter struct {
\tUserConverter UserConverter
}
";

#[test]
fn generates_to_stdout() {
    let mut cmd = cargo_bin_cmd!("gotruct");
    cmd.arg(fixture_path("mixed")).arg("--no-header");

    cmd.assert().success().stdout(MIXED_OUTPUT);
}

#[test]
fn nested_directories_are_not_scanned() {
    let mut cmd = cargo_bin_cmd!("gotruct");
    cmd.arg(fixture_path("mixed"));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("// Code generated by gotruct. DO NOT EDIT."))
        .stdout(predicate::str::contains("NestedConverter").not());
}

#[test]
fn writes_output_file_with_overrides() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("converter.go");

    let mut cmd = cargo_bin_cmd!("gotruct");
    cmd.arg(fixture_path("mixed"))
        .args(["--package", "mapping", "--comment", "+wire", "--prefix", "Legacy"])
        .arg("--output")
        .arg(&output);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("2 converters (3 fields) from 2 files"));

    let generated = fs::read_to_string(&output).unwrap();
    assert!(generated.contains("package mapping\n"));
    assert!(generated.contains("// +wire\ntype LegacyConverter struct {\n\tUserConverter UserConverter\n}"));
    assert!(!generated.contains("unknownConverter"));
}

#[test]
fn unannotated_input_emits_no_types() {
    let mut cmd = cargo_bin_cmd!("gotruct");
    cmd.arg(fixture_path("plain")).arg("--no-header");

    cmd.assert().success().stdout("package converter\n");
}

#[test]
fn missing_directory_is_empty_input() {
    let temp = TempDir::new().unwrap();

    let mut cmd = cargo_bin_cmd!("gotruct");
    cmd.arg(temp.path().join("missing")).arg("--no-header");

    cmd.assert().success().stdout("package converter\n");
}

#[test]
fn parse_failure_aborts_without_output() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("converter.go");

    let mut cmd = cargo_bin_cmd!("gotruct");
    cmd.arg(fixture_path("broken")).arg("-o").arg(&output);

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("b_broken.go"))
        .stderr(predicate::str::contains("syntax error"));

    assert!(!output.exists());
}

#[test]
fn malformed_struct_aborts_without_output() {
    let input = TempDir::new().unwrap();
    let output = input.path().join("out").join("converter.go");
    fs::create_dir(input.path().join("out")).unwrap();
    fs::write(
        input.path().join("models.go"),
        "package models\n\n// converter:converter\ntype A struct { a int b int }\n",
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("gotruct");
    cmd.arg(input.path()).arg("-o").arg(&output);

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("models.go"))
        .stderr(predicate::str::contains("syntax error"));

    assert!(!output.exists());
}

#[test]
fn unwritable_destination_fails() {
    let temp = TempDir::new().unwrap();
    let output = temp.path().join("no-such-dir").join("converter.go");

    let mut cmd = cargo_bin_cmd!("gotruct");
    cmd.arg(fixture_path("mixed")).arg("-o").arg(&output);

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to create output"));
}

#[test]
fn dry_run_reports_groups_as_json() {
    let mut cmd = cargo_bin_cmd!("gotruct");
    cmd.arg(fixture_path("mixed"))
        .args(["--dry-run", "--format", "json"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(r#""files_scanned":2"#))
        .stdout(predicate::str::contains(
            r#""Widgets":[{"name":"OrderConverter","type":"OrderConverter"},{"name":"LineItemConverter","type":"LineItemConverter"}]"#,
        ));
}

#[test]
fn config_file_supplies_settings() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("gotruct.toml");
    let output = temp.path().join("wire.go");
    fs::write(
        &config,
        format!(
            "package = \"wire\"\ndefault_group = \"Base\"\nheader = false\npath = {:?}\noutput = {:?}\n",
            fixture_path("mixed").display().to_string(),
            output.display().to_string()
        ),
    )
    .unwrap();

    let mut cmd = cargo_bin_cmd!("gotruct");
    cmd.arg("--config").arg(&config);

    cmd.assert().success();

    let generated = fs::read_to_string(&output).unwrap();
    assert!(generated.starts_with("package wire\n"));
    assert!(generated.contains("// @autowire(set=wire)\ntype BaseConverter struct {"));
}

#[test]
fn invalid_config_is_reported() {
    let temp = TempDir::new().unwrap();
    let config = temp.path().join("gotruct.toml");
    fs::write(&config, "package = [").unwrap();

    let mut cmd = cargo_bin_cmd!("gotruct");
    cmd.arg("--config").arg(&config);

    cmd.assert()
        .code(2)
        .stderr(predicate::str::contains("Invalid config"));
}
