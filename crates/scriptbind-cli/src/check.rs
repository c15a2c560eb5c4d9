//! Check command implementation

use anyhow::{Context, Result};
use scriptbind::{CONFIG_FILE_NAME, ScriptbindConfig};

/// Validate a configuration file and print what it configures
pub fn check(config_path: Option<String>) -> Result<()> {
    let path = config_path.unwrap_or_else(|| CONFIG_FILE_NAME.to_string());

    println!("Checking config: {}", path);

    let config = ScriptbindConfig::from_file(&path)?;
    config
        .validate()
        .with_context(|| format!("Invalid config: {path}"))?;

    print!("{}", describe(&config));
    println!("\nConfig is valid!");

    Ok(())
}

/// Summary lines for a valid configuration
pub fn describe(config: &ScriptbindConfig) -> String {
    let mut output = String::new();
    output.push_str(&format!("✓ Base class: {}\n", config.base_class));
    output.push_str(&format!(
        "✓ Scripts: {} ({})\n",
        config.scripts_dir,
        config.header_extensions.join(", ")
    ));
    output.push_str(&format!("✓ Generated file: {}\n", config.generated_file));
    output.push_str(&format!(
        "✓ Signatures: {} ({} custom)\n",
        config.signature_table().len(),
        config.signatures.len()
    ));
    output
}

#[cfg(test)]
#[path = "check/check_tests.rs"]
mod check_tests;
