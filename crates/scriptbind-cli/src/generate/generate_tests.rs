#![allow(non_snake_case)]

use super::*;
use scriptbind::{ScanError, ScanReport, ScriptClassRecord, SkipNotice, SkipReason};
use std::path::PathBuf;

fn notice(path: &str, class: Option<&str>, reason: SkipReason) -> SkipNotice {
    SkipNotice {
        path: PathBuf::from(path),
        class: class.map(str::to_string),
        reason,
    }
}

#[test]
fn render_summary___no_scripts_dir___reports_noop() {
    let summary = GenerateSummary::default();

    assert_eq!(
        render_summary(&summary),
        "No scripts directory, nothing generated\n"
    );
}

#[test]
fn render_summary___clean_run___lists_counts_and_rewrites() {
    let summary = GenerateSummary {
        scan: ScanReport {
            scripts_root: Some(PathBuf::from("Scripts")),
            headers_scanned: 2,
            records: vec![ScriptClassRecord::new("Player", "Player.h")],
            skipped: vec![],
        },
        generated_file: Some(PathBuf::from("Scripts/ScriptRegistration.gen.cpp")),
        rewritten: vec![PathBuf::from("Scripts/Player.h")],
        without_constructor: vec![],
    };

    let output = render_summary(&summary);

    assert_eq!(
        output,
        "✓ Headers scanned: 2\n\
         ✓ Script classes: 1\n\
         ✓ Generated: Scripts/ScriptRegistration.gen.cpp\n\
         ✓ Constructors updated: 1\n    Scripts/Player.h\n"
    );
}

#[test]
fn render_summary___skips___listed_with_class_when_known() {
    let summary = GenerateSummary {
        scan: ScanReport {
            scripts_root: Some(PathBuf::from("Scripts")),
            headers_scanned: 2,
            records: vec![],
            skipped: vec![
                notice(
                    "Scripts/Broken.h",
                    Some("Broken"),
                    SkipReason::Malformed(ScanError::UnbalancedBraces {
                        class: "Broken".to_string(),
                    }),
                ),
                notice(
                    "Scripts/Locked.h",
                    None,
                    SkipReason::Unreadable("permission denied".to_string()),
                ),
            ],
        },
        generated_file: Some(PathBuf::from("Scripts/ScriptRegistration.gen.cpp")),
        rewritten: vec![],
        without_constructor: vec![],
    };

    let output = render_summary(&summary);

    assert!(output.contains("! Skipped: 2\n"));
    assert!(output.contains(
        "    Scripts/Broken.h (Broken): malformed: class Broken has unbalanced braces\n"
    ));
    assert!(output.contains("    Scripts/Locked.h: unreadable: permission denied\n"));
}

#[test]
fn render_summary___classes_without_constructor___listed_apart_from_skips() {
    let summary = GenerateSummary {
        scan: ScanReport {
            scripts_root: Some(PathBuf::from("Scripts")),
            headers_scanned: 2,
            records: vec![],
            skipped: vec![],
        },
        generated_file: Some(PathBuf::from("Scripts/ScriptRegistration.gen.cpp")),
        rewritten: vec![],
        without_constructor: vec!["Door".to_string(), "Lamp".to_string()],
    };

    let output = render_summary(&summary);

    assert!(output.contains("- No default constructor: Door, Lamp\n"));
    assert!(!output.contains("Skipped"));
}
