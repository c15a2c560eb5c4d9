//! Generate command implementation

use crate::project::{load_config, resolve_root};
use anyhow::{Context, Result};
use scriptbind::{GenerateSummary, Generator};

/// Run a generation pass and print a summary
pub fn run(project: Option<String>, config: Option<String>) -> Result<()> {
    let project_root = resolve_root(project);
    let config = load_config(&project_root, config.as_deref())?;
    let generator = Generator::new(config)?;

    println!(
        "Scanning scripts: {}",
        generator.scripts_root(&project_root).display()
    );

    let summary = generator
        .generate(&project_root)
        .context("Failed to generate registration code")?;

    print!("{}", render_summary(&summary));
    Ok(())
}

/// Human-readable report of a generation run
pub fn render_summary(summary: &GenerateSummary) -> String {
    let Some(generated) = &summary.generated_file else {
        return "No scripts directory, nothing generated\n".to_string();
    };

    let mut output = String::new();
    output.push_str(&format!("✓ Headers scanned: {}\n", summary.scan.headers_scanned));
    output.push_str(&format!("✓ Script classes: {}\n", summary.scan.records.len()));
    output.push_str(&format!("✓ Generated: {}\n", generated.display()));
    output.push_str(&format!("✓ Constructors updated: {}\n", summary.rewritten.len()));
    for path in &summary.rewritten {
        output.push_str(&format!("    {}\n", path.display()));
    }
    if !summary.without_constructor.is_empty() {
        output.push_str(&format!(
            "- No default constructor: {}\n",
            summary.without_constructor.join(", ")
        ));
    }

    let skipped: Vec<_> = summary.skipped().collect();
    if !skipped.is_empty() {
        output.push_str(&format!("! Skipped: {}\n", skipped.len()));
        for notice in skipped {
            match &notice.class {
                Some(class) => output.push_str(&format!(
                    "    {} ({class}): {}\n",
                    notice.path.display(),
                    notice.reason
                )),
                None => output.push_str(&format!(
                    "    {}: {}\n",
                    notice.path.display(),
                    notice.reason
                )),
            }
        }
    }

    output
}

#[cfg(test)]
#[path = "generate/generate_tests.rs"]
mod generate_tests;
