#![allow(non_snake_case)]

use super::*;
use scriptbind_core::PropertyDescriptor;
use std::path::PathBuf;
use tempfile::TempDir;

fn record(name: &str, header: &str) -> ScriptClassRecord {
    ScriptClassRecord::new(name, PathBuf::from(header))
}

#[test]
fn emit_registration___single_class___renders_full_file() {
    let mut player = record("Player", "Player.h");
    player.properties = vec![
        PropertyDescriptor::new("speed", "float"),
        PropertyDescriptor::new("label", "std::string"),
    ];

    let output = emit_registration(&[player], &ScriptbindConfig::default(), |_| false);

    let expected = r#"// Auto-generated by scriptbind generate
// DO NOT EDIT - regenerate with: scriptbind generate

#include <rttr/registration>
#include "Scripting/ScriptBehaviour.h"
#include "Scripting/ScriptHandle.h"
#include "Player.h"

RTTR_REGISTRATION
{
    using namespace rttr;

    registration::class_<Player>("Player")
        .property("speed", &Player::speed)(metadata("type", "float"))
        .property("label", &Player::label)(metadata("type", "std::string"));

    registration::class_<ScriptHandle<Player>>("ScriptHandle<Player>")
        .constructor<>()(policy::ctor::as_object)
        .method("Inject", &ScriptHandle<Player>::Inject);
}
"#;
    assert_eq!(output, expected);
}

#[test]
fn emit_registration___no_records___renders_empty_block() {
    let output = emit_registration(&[], &ScriptbindConfig::default(), |_| false);

    assert!(output.ends_with("RTTR_REGISTRATION\n{\n    using namespace rttr;\n}\n"));
    assert!(!output.contains("registration::class_"));
}

#[test]
fn emit_registration___no_properties___emits_bare_chain() {
    let output = emit_registration(
        &[record("Door", "Door.h")],
        &ScriptbindConfig::default(),
        |_| false,
    );

    assert!(output.contains("    registration::class_<Door>(\"Door\");\n"));
}

#[test]
fn emit_registration___excluded_class___omitted_entirely() {
    let mut manual = record("Manual", "Manual.h");
    manual.exclude = true;

    let output = emit_registration(
        &[manual, record("Door", "Door.h")],
        &ScriptbindConfig::default(),
        |_| false,
    );

    assert!(!output.contains("Manual"));
    assert!(output.contains("#include \"Door.h\""));
}

#[test]
fn emit_registration___hand_registered___keeps_include_and_handle_only() {
    let mut player = record("Player", "Player.h");
    player.properties = vec![PropertyDescriptor::new("speed", "float")];

    let output = emit_registration(&[player], &ScriptbindConfig::default(), |r| {
        r.class_name == "Player"
    });

    assert!(output.contains("#include \"Player.h\""));
    assert!(!output.contains("registration::class_<Player>"));
    assert!(!output.contains(".property("));
    assert!(output.contains("registration::class_<ScriptHandle<Player>>"));
}

#[test]
fn emit_registration___shared_header___included_once_in_discovery_order() {
    let records = vec![
        record("Zeta", "Enemies/Pack.h"),
        record("Alpha", "Enemies/Pack.h"),
        record("Beta", "Beta.h"),
    ];

    let output = emit_registration(&records, &ScriptbindConfig::default(), |_| false);

    assert_eq!(output.matches("#include \"Enemies/Pack.h\"").count(), 1);
    let zeta = output.find("class_<Zeta>").unwrap();
    let alpha = output.find("class_<Alpha>").unwrap();
    assert!(zeta < alpha);
    assert!(output.find("Enemies/Pack.h").unwrap() < output.find("Beta.h").unwrap());
}

#[test]
fn emit_registration___same_input___identical_output() {
    let mut player = record("Player", "Player.h");
    player.properties = vec![PropertyDescriptor::new("speed", "float")];
    let records = vec![player, record("Door", "World/Door.h")];
    let config = ScriptbindConfig::default();

    let first = emit_registration(&records, &config, |_| false);
    let second = emit_registration(&records, &config, |_| false);

    assert_eq!(first, second);
}

#[test]
fn emit_registration___custom_registration_config___used() {
    let mut config = ScriptbindConfig::default();
    config.registration.block = "REFLECT_BLOCK".to_string();
    config.registration.handle_type = "Handle".to_string();
    config.registration.inject_method = "Attach".to_string();
    config.registration.includes = vec!["\"Reflect.h\"".to_string()];

    let output = emit_registration(&[record("Door", "Door.h")], &config, |_| false);

    assert!(output.contains("#include \"Reflect.h\"\n#include \"Door.h\"\n"));
    assert!(output.contains("REFLECT_BLOCK\n{"));
    assert!(output.contains(".method(\"Attach\", &Handle<Door>::Attach);"));
}

// ============================================================================
// has_hand_written_registration
// ============================================================================

#[test]
fn has_hand_written_registration___sibling_with_block_and_class___true() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("Player.cpp"),
        "RTTR_REGISTRATION\n{\n    registration::class_<Player>(\"Player\");\n}\n",
    )
    .unwrap();

    let result = has_hand_written_registration(
        dir.path(),
        &record("Player", "Player.h"),
        &ScriptbindConfig::default(),
    );

    assert!(result);
}

#[test]
fn has_hand_written_registration___block_without_class___false() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("Player.cpp"),
        "RTTR_REGISTRATION\n{\n    registration::class_<Enemy>(\"Enemy\");\n}\n",
    )
    .unwrap();

    let result = has_hand_written_registration(
        dir.path(),
        &record("Player", "Player.h"),
        &ScriptbindConfig::default(),
    );

    assert!(!result);
}

#[test]
fn has_hand_written_registration___class_without_block___false() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("Player.cpp"), "// class_<Player>\n").unwrap();

    let result = has_hand_written_registration(
        dir.path(),
        &record("Player", "Player.h"),
        &ScriptbindConfig::default(),
    );

    assert!(!result);
}

#[test]
fn has_hand_written_registration___no_sibling___false() {
    let dir = TempDir::new().unwrap();

    let result = has_hand_written_registration(
        dir.path(),
        &record("Player", "Player.h"),
        &ScriptbindConfig::default(),
    );

    assert!(!result);
}
