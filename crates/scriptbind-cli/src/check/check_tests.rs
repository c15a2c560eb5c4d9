#![allow(non_snake_case)]

use super::*;
use scriptbind::SignatureTable;
use std::fs;
use tempfile::TempDir;

fn write_config(dir: &TempDir, contents: &str) -> String {
    let path = dir.path().join("scriptbind.toml");
    fs::write(&path, contents).unwrap();
    path.to_string_lossy().into_owned()
}

#[test]
fn check___valid_config___ok() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "base_class = \"Component\"\n");

    assert!(check(Some(path)).is_ok());
}

#[test]
fn check___missing_file___error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("absent.toml").to_string_lossy().into_owned();

    assert!(check(Some(path)).is_err());
}

#[test]
fn check___malformed_toml___error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "base_class = [\n");

    assert!(check(Some(path)).is_err());
}

#[test]
fn check___invalid_values___error_names_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[markers]\nmessage = \"NOT AN IDENT\"\n");

    let err = check(Some(path.clone())).unwrap_err();

    assert_eq!(err.to_string(), format!("Invalid config: {path}"));
}

#[test]
fn describe___defaults___summarizes_config() {
    let config = ScriptbindConfig::default();
    let engine = SignatureTable::engine_default().len();

    assert_eq!(
        describe(&config),
        format!(
            "✓ Base class: ScriptBehaviour\n\
             ✓ Scripts: Scripts (h, hpp, hh, hxx)\n\
             ✓ Generated file: ScriptRegistration.gen.cpp\n\
             ✓ Signatures: {engine} (0 custom)\n"
        )
    );
}

#[test]
fn describe___custom_signatures___counted() {
    let config = ScriptbindConfig::from_toml(
        "[[signatures]]\nname = \"OnDamage\"\nparams = [\"float\"]\n",
    )
    .unwrap();

    assert!(describe(&config).contains("(1 custom)"));
}
