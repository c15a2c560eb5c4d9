//! Aggregated registration file generation
//!
//! Renders one translation unit that registers every script class with the
//! reflection runtime. Output order follows discovery order, so unchanged
//! input produces byte-identical output.

use scriptbind_core::{ScriptClassRecord, ScriptbindConfig};
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// Whether a class is already registered by hand in its sibling implementation file.
///
/// The sibling is the header path with the configured source extension. It
/// counts when it contains the registration block marker and a `class_<Name>`
/// registration call.
pub fn has_hand_written_registration(
    scripts_root: &Path,
    record: &ScriptClassRecord,
    config: &ScriptbindConfig,
) -> bool {
    let source = scripts_root
        .join(&record.header_path)
        .with_extension(&config.source_extension);

    match fs::read_to_string(&source) {
        Ok(text) => {
            text.contains(&config.registration.block)
                && text.contains(&format!("class_<{}>", record.class_name))
        }
        Err(_) => false,
    }
}

/// Render the aggregated registration file.
///
/// Classes flagged `exclude` are left out entirely. Classes for which
/// `is_hand_registered` returns true keep their include and wrapper handle
/// but get no property chain.
pub fn emit_registration<F>(
    records: &[ScriptClassRecord],
    config: &ScriptbindConfig,
    is_hand_registered: F,
) -> String
where
    F: Fn(&ScriptClassRecord) -> bool,
{
    let registration = &config.registration;
    let included: Vec<&ScriptClassRecord> = records.iter().filter(|r| !r.exclude).collect();

    let mut output = String::new();
    output.push_str("// Auto-generated by scriptbind generate\n");
    output.push_str("// DO NOT EDIT - regenerate with: scriptbind generate\n\n");

    for include in &registration.includes {
        output.push_str(&format!("#include {include}\n"));
    }

    let mut seen_headers = HashSet::new();
    for record in &included {
        let header = record.include_path();
        if seen_headers.insert(header.clone()) {
            output.push_str(&format!("#include \"{header}\"\n"));
        }
    }
    output.push('\n');

    output.push_str(&format!("{}\n{{\n", registration.block));
    output.push_str("    using namespace rttr;\n");

    for record in included {
        let class = &record.class_name;

        if !is_hand_registered(record) {
            output.push('\n');
            output.push_str(&format!("    registration::class_<{class}>(\"{class}\")"));
            for property in &record.properties {
                output.push_str(&format!(
                    "\n        .property(\"{name}\", &{class}::{name})(metadata(\"type\", \"{ty}\"))",
                    name = property.name,
                    ty = property.type_name
                ));
            }
            output.push_str(";\n");
        }

        let handle = format!("{}<{class}>", registration.handle_type);
        output.push('\n');
        output.push_str(&format!("    registration::class_<{handle}>(\"{handle}\")\n"));
        output.push_str("        .constructor<>()(policy::ctor::as_object)\n");
        output.push_str(&format!(
            "        .method(\"{method}\", &{handle}::{method});\n",
            method = registration.inject_method
        ));
    }

    output.push_str("}\n");
    output
}

#[cfg(test)]
#[path = "emitter/emitter_tests.rs"]
mod emitter_tests;
