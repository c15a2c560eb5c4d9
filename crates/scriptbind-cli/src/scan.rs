//! Scan command implementation

use crate::project::{load_config, resolve_root};
use anyhow::{Context, Result};
use scriptbind::{DiscoveryRule, Generator, ScanReport, ScriptClassRecord};
use serde::Serialize;
use std::path::Path;

/// JSON shape of a scan report
#[derive(Debug, Serialize)]
pub struct ScanOutput<'a> {
    pub scripts_root: Option<&'a Path>,
    pub headers_scanned: usize,
    pub classes: &'a [ScriptClassRecord],
    pub skipped: Vec<SkippedEntry<'a>>,
}

#[derive(Debug, Serialize)]
pub struct SkippedEntry<'a> {
    pub path: &'a Path,
    pub class: Option<&'a str>,
    pub reason: String,
}

impl<'a> From<&'a ScanReport> for ScanOutput<'a> {
    fn from(report: &'a ScanReport) -> Self {
        Self {
            scripts_root: report.scripts_root.as_deref(),
            headers_scanned: report.headers_scanned,
            classes: &report.records,
            skipped: report
                .skipped
                .iter()
                .map(|notice| SkippedEntry {
                    path: &notice.path,
                    class: notice.class.as_deref(),
                    reason: notice.reason.to_string(),
                })
                .collect(),
        }
    }
}

/// Scan a project and print what generation would register
pub fn run(project: Option<String>, config: Option<String>, json: bool) -> Result<()> {
    let project_root = resolve_root(project);
    let config = load_config(&project_root, config.as_deref())?;
    let generator = Generator::new(config)?;

    let report = generator.scan(&project_root);

    if json {
        println!("{}", render_json(&report)?);
    } else {
        print!("{}", render_text(&report));
    }
    Ok(())
}

/// Pretty-printed JSON report
pub fn render_json(report: &ScanReport) -> Result<String> {
    serde_json::to_string_pretty(&ScanOutput::from(report)).context("Failed to serialize scan report")
}

/// Human-readable report, one block per class
pub fn render_text(report: &ScanReport) -> String {
    let Some(root) = &report.scripts_root else {
        return "No scripts directory found\n".to_string();
    };

    let mut output = String::new();
    output.push_str(&format!("Scripts: {}\n", root.display()));
    output.push_str(&format!("Headers scanned: {}\n", report.headers_scanned));

    for record in &report.records {
        output.push_str(&format!(
            "\n{} ({})\n",
            record.class_name,
            record.include_path()
        ));
        if record.exclude {
            output.push_str("    excluded from generation\n");
            continue;
        }

        for message in &record.messages {
            output.push_str(&format!(
                "    message {} -> {}::{}({}) [{}]\n",
                message.message_name,
                record.class_name,
                message.function_name,
                message.param_types.join(", "),
                rule_label(message.rule)
            ));
        }
        for property in &record.properties {
            output.push_str(&format!(
                "    property {}: {}\n",
                property.name, property.type_name
            ));
        }
    }

    for notice in &report.skipped {
        output.push_str(&format!(
            "\nskipped {}: {}\n",
            notice.path.display(),
            notice.reason
        ));
    }

    output
}

fn rule_label(rule: DiscoveryRule) -> &'static str {
    match rule {
        DiscoveryRule::Marker => "marker",
        DiscoveryRule::NamedMarker => "named marker",
        DiscoveryRule::Signature => "signature",
    }
}
