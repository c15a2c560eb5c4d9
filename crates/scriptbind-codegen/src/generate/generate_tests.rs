#![allow(non_snake_case)]

use super::*;
use test_case::test_case;
use tempfile::TempDir;

fn project_with(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (name, contents) in files {
        let path = dir.path().join("Scripts").join(name);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }
    dir
}

fn generator() -> Generator {
    Generator::new(ScriptbindConfig::default()).unwrap()
}

#[test_case(SkipReason::Inaccessible("denied".into()), "inaccessible: denied")]
#[test_case(SkipReason::Unreadable("gone".into()), "unreadable: gone")]
#[test_case(
    SkipReason::Malformed(ScanError::UnbalancedBraces { class: "A".into() }),
    "malformed: class A has unbalanced braces"
)]
#[test_case(SkipReason::RewriteFailed("busy".into()), "rewrite failed: busy")]
fn SkipReason___display___describes_reason(reason: SkipReason, expected: &str) {
    assert_eq!(reason.to_string(), expected);
}

#[test]
fn Generator___new___rejects_invalid_config() {
    let mut config = ScriptbindConfig::default();
    config.base_class = String::new();

    assert!(matches!(Generator::new(config), Err(ConfigError::Invalid(_))));
}

#[test]
fn Generator___collect_headers___filters_extensions_in_name_order() {
    let project = project_with(&[
        ("b.h", ""),
        ("a.hpp", ""),
        ("notes.txt", ""),
        ("Player.cpp", ""),
        ("Nested/c.hh", ""),
        ("a.h.bak", ""),
    ]);
    let scripts = project.path().join("Scripts");
    let mut skipped = Vec::new();

    let headers = generator().collect_headers(&scripts, &mut skipped);

    let names: Vec<PathBuf> = headers
        .iter()
        .map(|p| p.strip_prefix(&scripts).unwrap().to_path_buf())
        .collect();
    assert_eq!(
        names,
        vec![
            PathBuf::from("Nested").join("c.hh"),
            PathBuf::from("a.hpp"),
            PathBuf::from("b.h"),
        ]
    );
    assert!(skipped.is_empty());
}

#[test]
fn Generator___collect_headers___skips_generated_file_even_with_header_extension() {
    let mut config = ScriptbindConfig::default();
    config.generated_file = "Registration.gen.h".to_string();
    let generator = Generator::new(config).unwrap();
    let project = project_with(&[("Registration.gen.h", ""), ("Door.h", "")]);
    let scripts = project.path().join("Scripts");

    let headers = generator.collect_headers(&scripts, &mut Vec::new());

    assert_eq!(headers, vec![scripts.join("Door.h")]);
}

#[test]
fn Generator___scan___records_paths_relative_to_scripts_root() {
    let project = project_with(&[(
        "Enemies/Boss.h",
        "class Boss : public ScriptBehaviour { void Update(); };",
    )]);

    let report = generator().scan(project.path());

    assert_eq!(report.headers_scanned, 1);
    assert_eq!(
        report.records[0].header_path,
        PathBuf::from("Enemies").join("Boss.h")
    );
    assert_eq!(report.records[0].include_path(), "Enemies/Boss.h");
}

#[test]
fn Generator___scan___malformed_header_recorded_as_skip() {
    let project = project_with(&[(
        "Broken.h",
        "class Broken : public ScriptBehaviour { void Update() {",
    )]);

    let report = generator().scan(project.path());

    assert!(report.records.is_empty());
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].class.as_deref(), Some("Broken"));
    assert!(matches!(
        report.skipped[0].reason,
        SkipReason::Malformed(ScanError::UnbalancedBraces { .. })
    ));
}

#[test]
fn Generator___scan___no_scripts_dir___empty_report() {
    let dir = TempDir::new().unwrap();

    let report = generator().scan(dir.path());

    assert!(report.scripts_root.is_none());
    assert_eq!(report.headers_scanned, 0);
}

#[test]
fn Generator___generate___no_default_constructor___listed_not_skipped() {
    let project = project_with(&[(
        "Door.h",
        "class Door : public ScriptBehaviour {\n    void Start();\n};\n",
    )]);

    let summary = generator().generate(project.path()).unwrap();

    assert!(summary.rewritten.is_empty());
    assert_eq!(summary.skipped().count(), 0);
    assert_eq!(summary.without_constructor, vec!["Door".to_string()]);
}

#[test]
fn generate_project___reads_project_config() {
    let project = project_with(&[(
        "Door.h",
        "class Door : public Component {\n    Door() {}\n    void Start();\n};\n",
    )]);
    fs::write(
        project.path().join("scriptbind.toml"),
        "base_class = \"Component\"\ngenerated_file = \"Reflect.gen.cpp\"\n",
    )
    .unwrap();

    let summary = generate_project(project.path()).unwrap();

    assert_eq!(summary.scan.records.len(), 1);
    assert_eq!(
        summary.generated_file,
        Some(project.path().join("Scripts").join("Reflect.gen.cpp"))
    );
    assert_eq!(summary.rewritten.len(), 1);
}

#[test]
fn generate_project___invalid_config___config_error() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("scriptbind.toml"), "base_class = \"\"\n").unwrap();

    let result = generate_project(dir.path());

    assert!(matches!(result, Err(GenerateError::Config(_))));
}
