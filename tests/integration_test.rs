//! Integration tests for reskey.

use reskey::{generate, GenerateError};
use std::fs;
use tempfile::TempDir;

/// Create a temp directory with a resources.toml
fn setup_catalog(content: &str) -> (TempDir, std::path::PathBuf) {
    let dir = TempDir::new().unwrap();
    let catalog_path = dir.path().join("resources.toml");
    fs::write(&catalog_path, content).unwrap();
    (dir, catalog_path)
}

const FULL_CATALOG: &str = r#"
[[resources.color]]
name = "primaryRed"
value = "FF0000"

[[resources.color]]
name = "accent-blue"
value = "0000FF"

[[resources.dimension]]
name = "gutterWidth"
value = "12.5"

[[resources.value]]
name = "fooBar"
value = "1.5"

[[resources.value]]
name = "baz"
value = "2"

[[resources.text]]
name = "appTitle"
value = "My App"

[[languages]]
name = "English"
values = ["Hi", "Bye"]

[[languages]]
name = "French"
values = ["Salut"]
"#;

#[test]
fn generate_writes_all_three_artifacts() {
    let (dir, catalog_path) = setup_catalog(FULL_CATALOG);
    let keys_path = dir.path().join("keys.js");
    let data_path = dir.path().join("data.js");
    let languages_path = dir.path().join("languages.js");

    generate(&catalog_path, &keys_path, &data_path, &languages_path).unwrap();

    assert!(keys_path.exists());
    assert!(data_path.exists());
    assert!(languages_path.exists());
}

#[test]
fn keys_artifact_has_sorted_exports() {
    let (dir, catalog_path) = setup_catalog(FULL_CATALOG);
    let keys_path = dir.path().join("keys.js");
    let data_path = dir.path().join("data.js");
    let languages_path = dir.path().join("languages.js");

    generate(&catalog_path, &keys_path, &data_path, &languages_path).unwrap();

    let keys = fs::read_to_string(&keys_path).unwrap();

    assert!(keys.contains("export let Color = {ACCENT_BLUE:1,PRIMARY_RED:0};"));
    assert!(keys.contains("export let Dimension = {GUTTER_WIDTH:256};"));
    assert!(keys.contains("export let Value = {BAZ:513,FOO_BAR:512};"));
    assert!(keys.contains("export let Text = {APP_TITLE:768};"));
    // Exports follow taxonomy order.
    let color_at = keys.find("export let Color").unwrap();
    let text_at = keys.find("export let Text").unwrap();
    assert!(color_at < text_at);
}

#[test]
fn data_artifact_resolves_every_key() {
    let (dir, catalog_path) = setup_catalog(FULL_CATALOG);
    let keys_path = dir.path().join("keys.js");
    let data_path = dir.path().join("data.js");
    let languages_path = dir.path().join("languages.js");

    generate(&catalog_path, &keys_path, &data_path, &languages_path).unwrap();

    let data = fs::read_to_string(&data_path).unwrap();

    assert!(data.contains("// Color\ndata[0] = {'0':16711680,'1':255};"));
    assert!(data.contains("// Dimension\ndata[1] = {'256':12.5};"));
    assert!(data.contains("// Value\ndata[2] = {'512':1.5,'513':2};"));
    assert!(data.contains("// Text\ndata[3] = {'768':\"My App\"};"));
    assert!(data.contains("// Language: English\n// Language: French\n"));
    assert!(data.contains("data[4] = {'0':\"Hi\",'1':\"Bye\",'4096':\"Salut\"}"));
}

#[test]
fn languages_artifact_is_standalone() {
    let (dir, catalog_path) = setup_catalog(FULL_CATALOG);
    let keys_path = dir.path().join("keys.js");
    let data_path = dir.path().join("data.js");
    let languages_path = dir.path().join("languages.js");

    generate(&catalog_path, &keys_path, &data_path, &languages_path).unwrap();

    let languages = fs::read_to_string(&languages_path).unwrap();
    assert!(languages.contains("let languages = {\"english\":0,\"french\":1};"));

    // The vocabulary is its own artifact, not part of the data table.
    let data = fs::read_to_string(&data_path).unwrap();
    assert!(!data.contains("let languages"));
}

#[test]
fn artifacts_carry_a_generated_banner() {
    let (dir, catalog_path) = setup_catalog(FULL_CATALOG);
    let keys_path = dir.path().join("keys.js");
    let data_path = dir.path().join("data.js");
    let languages_path = dir.path().join("languages.js");

    generate(&catalog_path, &keys_path, &data_path, &languages_path).unwrap();

    for path in [&keys_path, &data_path, &languages_path] {
        let content = fs::read_to_string(path).unwrap();
        assert!(
            content.starts_with("// Generated by reskey"),
            "{} is missing the banner",
            path.display()
        );
    }
}

#[test]
fn regenerating_after_reorder_reassigns_ids() {
    let (dir, catalog_path) = setup_catalog(FULL_CATALOG);
    let keys_path = dir.path().join("keys.js");
    let data_path = dir.path().join("data.js");
    let languages_path = dir.path().join("languages.js");

    generate(&catalog_path, &keys_path, &data_path, &languages_path).unwrap();
    let before = fs::read_to_string(&keys_path).unwrap();
    assert!(before.contains("PRIMARY_RED:0"));

    // Swap the two colors; IDs are declaration-order-derived, so they move.
    fs::write(
        &catalog_path,
        r#"
[[resources.color]]
name = "accent-blue"
value = "0000FF"

[[resources.color]]
name = "primaryRed"
value = "FF0000"
"#,
    )
    .unwrap();

    generate(&catalog_path, &keys_path, &data_path, &languages_path).unwrap();
    let after = fs::read_to_string(&keys_path).unwrap();
    assert!(after.contains("ACCENT_BLUE:0"));
    assert!(after.contains("PRIMARY_RED:1"));
}

#[test]
fn missing_catalog_is_an_error() {
    let dir = TempDir::new().unwrap();
    let result = generate(
        dir.path().join("nope.toml"),
        dir.path().join("keys.js"),
        dir.path().join("data.js"),
        dir.path().join("languages.js"),
    );

    match result.unwrap_err() {
        GenerateError::Catalog(_) => {}
        other => panic!("expected Catalog error, got: {:?}", other),
    }
}

#[test]
fn invalid_catalog_reports_validation_error() {
    let (dir, catalog_path) = setup_catalog(
        r#"
[[resources.text]]
name = "fooBar"
value = "a"

[[resources.text]]
name = "foo-bar"
value = "b"
"#,
    );
    let result = generate(
        &catalog_path,
        dir.path().join("keys.js"),
        dir.path().join("data.js"),
        dir.path().join("languages.js"),
    );

    let err = result.unwrap_err();
    assert!(err.to_string().contains("FOO_BAR"), "got: {}", err);
}

#[test]
fn empty_catalog_generates_empty_tables() {
    let (dir, catalog_path) = setup_catalog("");
    let keys_path = dir.path().join("keys.js");
    let data_path = dir.path().join("data.js");
    let languages_path = dir.path().join("languages.js");

    generate(&catalog_path, &keys_path, &data_path, &languages_path).unwrap();

    let keys = fs::read_to_string(&keys_path).unwrap();
    assert!(keys.contains("export let Color = {};"));
    let data = fs::read_to_string(&data_path).unwrap();
    assert!(data.contains("data[4] = {}"));
    let languages = fs::read_to_string(&languages_path).unwrap();
    assert!(languages.contains("let languages = {};"));
}
