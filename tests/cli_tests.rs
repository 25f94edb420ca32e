//! End-to-end tests of the pergola-quote binary.

use pretty_assertions::assert_eq;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pergola-quote"))
        .args(args)
        .output()
        .expect("failed to run pergola-quote")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_families_lists_every_product() {
    let output = run(&["families"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().count(), 20);
}

#[test]
fn test_quote_json() {
    let output = run(&["quote", "-p", "18", "-w", "300", "--projection", "200", "--json"]);
    assert!(output.status.success());

    let quote: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(quote["product_id"], 18);
    assert_eq!(quote["breakdown"]["base_price"], 3170.0);
    assert_eq!(quote["breakdown"]["total"], 3930.8);
}

#[test]
fn test_quote_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("balloon.json");
    std::fs::write(
        &path,
        r#"{"width": 200, "projection": 150, "motorized": true}"#,
    )
    .unwrap();

    let output = run(&["quote", "-p", "29", "-c", path.to_str().unwrap()]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("Motor"));
    assert!(text.contains("2165.00€"));
}

#[test]
fn test_save_fails_on_validation_errors() {
    let output = run(&["quote", "-p", "18", "-w", "300", "--projection", "900", "--save"]);
    assert!(!output.status.success());
}

#[test]
fn test_save_succeeds_for_valid_quote() {
    let output = run(&["quote", "-p", "18", "-w", "300", "--projection", "200", "--save"]);
    assert!(output.status.success());
}

#[test]
fn test_unknown_product_fails() {
    let output = run(&["quote", "-p", "99"]);
    assert!(!output.status.success());
}

#[test]
fn test_export_then_load_tables() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tables.json");
    let path = path.to_str().unwrap();

    assert!(run(&["export-tables", "-o", path]).status.success());

    let output = run(&[
        "--tables", path, "quote", "-p", "18", "-w", "300", "--projection", "200", "--json",
    ]);
    assert!(output.status.success());
    let quote: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(quote["breakdown"]["base_price"], 3170.0);
}

#[test]
fn test_invalid_vat_rejected() {
    let output = run(&["--vat", "24", "families"]);
    assert!(!output.status.success());
}

#[test]
fn test_range() {
    let output = run(&["range", "-p", "33"]);
    assert!(output.status.success());
    let text = stdout(&output);
    assert!(text.contains("projection: 150-300cm"));
    assert!(text.contains("accepted:   100-300cm x 150-300cm"));
}
