//! Tests of the `zarrocrate` binary.

use assert_cmd::Command;
use assert_fs::NamedTempFile;
use assert_fs::prelude::*;
use predicates::prelude::*;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../lib/zarrocrate/tests/fixtures")
        .join(name)
}

fn cli_command() -> Command {
    Command::cargo_bin("zarrocrate").unwrap()
}

#[test]
fn cli_help() {
    cli_command()
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Usage: zarrocrate"));
}

#[test]
fn cli_validate_valid_crate() {
    cli_command()
        .arg("validate")
        .arg(fixture("valid/example_production_crate.json"))
        .assert()
        .success()
        .stdout("Crate passed minimal checks.\n");
}

#[test]
fn cli_validate_invalid_crate() {
    cli_command()
        .arg("validate")
        .arg(fixture("invalid/missing_root.json"))
        .assert()
        .failure()
        .stdout("Errors:\n - metadata.json missing root dataset './'\n");
}

#[test]
fn cli_validate_prints_warnings_first() {
    let input = NamedTempFile::new("ro-crate-metadata.json").unwrap();
    let mut document: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(fixture("invalid/missing_metadata.json")).unwrap(),
    )
    .unwrap();
    document["@graph"]
        .as_array_mut()
        .unwrap()
        .iter_mut()
        .find(|entity| entity["@id"] == "./")
        .unwrap()
        .as_object_mut()
        .unwrap()
        .remove("conformsTo");
    input.write_str(&document.to_string()).unwrap();

    cli_command()
        .arg("validate")
        .arg(input.path())
        .assert()
        .failure()
        .stdout(
            "Warnings:\n - root dataset missing profile conformsTo (SHOULD)\n\
             Errors:\n - metadata descriptor 'ro-crate-metadata.json' not found\n",
        );
}

#[test]
fn cli_validate_stdin_json() {
    cli_command()
        .arg("validate")
        .arg("--format")
        .arg("json")
        .pipe_stdin(fixture("invalid/broken_chain.json"))
        .unwrap()
        .assert()
        .failure()
        .stdout(predicate::str::contains(r#""conforms": false"#))
        .stdout(predicate::str::contains("biosample not found"));
}

#[test]
fn cli_validate_missing_file() {
    cli_command()
        .arg("validate")
        .arg("does-not-exist.json")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains(
            "Failed to load crate metadata from does-not-exist.json",
        ));
}

#[test]
fn cli_validate_invalid_json() {
    cli_command()
        .arg("validate")
        .write_stdin("{\"@graph\": [")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid JSON"));
}

#[test]
fn cli_summarize() {
    cli_command()
        .arg("summarize")
        .arg(fixture("valid/example_production_crate.json"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Datasets:\n - ./: Drosophila wing disc, confocal z-stack\n",
        ))
        .stdout(predicate::str::contains(
            "Files:\n - wing_disc.ome.zarr/: application/vnd.ome.zarr\n",
        ));
}

#[test]
fn cli_summarize_json() {
    cli_command()
        .arg("summarize")
        .arg("--format")
        .arg("json")
        .arg(fixture("valid/example_production_crate.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""encoding_format": "application/vnd.ome.zarr""#));
}

#[test]
fn cli_verbose_logs_to_stderr() {
    cli_command()
        .arg("-vv")
        .arg("validate")
        .arg(fixture("valid/example_production_crate.json"))
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout("Crate passed minimal checks.\n")
        .stderr(predicate::str::contains("validation finished"));
}
