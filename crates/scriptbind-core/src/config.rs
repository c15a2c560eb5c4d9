//! Project configuration
//!
//! Loaded from `scriptbind.toml` in the project root. Every field has a
//! default, so a project without the file still generates.

use crate::error::ConfigError;
use crate::signature::{SignatureEntry, SignatureTable};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// File name looked up in the project root
pub const CONFIG_FILE_NAME: &str = "scriptbind.toml";

/// Top-level generator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptbindConfig {
    /// Scripts directory, relative to the project root
    #[serde(default = "default_scripts_dir")]
    pub scripts_dir: String,

    /// Name of the aggregated registration file written at the scripts root
    #[serde(default = "default_generated_file")]
    pub generated_file: String,

    /// Base class that marks a class as a script
    #[serde(default = "default_base_class")]
    pub base_class: String,

    /// File extensions (without the dot) scanned as headers
    #[serde(default = "default_header_extensions")]
    pub header_extensions: Vec<String>,

    /// Extension of the sibling implementation file checked for hand-written registration
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    #[serde(default)]
    pub markers: MarkerConfig,

    #[serde(default)]
    pub registration: RegistrationConfig,

    /// Extra engine signatures appended to the built-in table
    #[serde(default)]
    pub signatures: Vec<SignatureEntry>,
}

/// Annotation tokens recognised inside class bodies
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkerConfig {
    /// Zero-argument message marker
    #[serde(default = "default_message_marker")]
    pub message: String,

    /// Message marker carrying an explicit message name
    #[serde(default = "default_named_message_marker")]
    pub named_message: String,

    /// Property marker
    #[serde(default = "default_property_marker")]
    pub property: String,

    /// Token that opts a class out of generation entirely
    #[serde(default = "default_suppress_marker")]
    pub suppress: String,
}

/// Shape of the generated registration code
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegistrationConfig {
    /// Registration block macro opening the generated block
    #[serde(default = "default_block")]
    pub block: String,

    /// Function called by injected constructor statements
    #[serde(default = "default_statement")]
    pub statement: String,

    /// Wrapper handle template registered for every class
    #[serde(default = "default_handle_type")]
    pub handle_type: String,

    /// Method on the wrapper handle exposed for injection
    #[serde(default = "default_inject_method")]
    pub inject_method: String,

    /// Fixed include lines emitted before the per-class includes
    #[serde(default = "default_includes")]
    pub includes: Vec<String>,
}

fn default_scripts_dir() -> String {
    "Scripts".to_string()
}

fn default_generated_file() -> String {
    "ScriptRegistration.gen.cpp".to_string()
}

fn default_base_class() -> String {
    "ScriptBehaviour".to_string()
}

fn default_header_extensions() -> Vec<String> {
    ["h", "hpp", "hh", "hxx"]
        .iter()
        .map(|e| (*e).to_string())
        .collect()
}

fn default_source_extension() -> String {
    "cpp".to_string()
}

fn default_message_marker() -> String {
    "SCRIPT_MESSAGE".to_string()
}

fn default_named_message_marker() -> String {
    "SCRIPT_MESSAGE_NAMED".to_string()
}

fn default_property_marker() -> String {
    "SCRIPT_PROPERTY".to_string()
}

fn default_suppress_marker() -> String {
    "SCRIPT_NO_AUTOGEN".to_string()
}

fn default_block() -> String {
    "RTTR_REGISTRATION".to_string()
}

fn default_statement() -> String {
    "RegisterMessage".to_string()
}

fn default_handle_type() -> String {
    "ScriptHandle".to_string()
}

fn default_inject_method() -> String {
    "Inject".to_string()
}

fn default_includes() -> Vec<String> {
    [
        "<rttr/registration>",
        "\"Scripting/ScriptBehaviour.h\"",
        "\"Scripting/ScriptHandle.h\"",
    ]
    .iter()
    .map(|i| (*i).to_string())
    .collect()
}

impl Default for MarkerConfig {
    fn default() -> Self {
        Self {
            message: default_message_marker(),
            named_message: default_named_message_marker(),
            property: default_property_marker(),
            suppress: default_suppress_marker(),
        }
    }
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            block: default_block(),
            statement: default_statement(),
            handle_type: default_handle_type(),
            inject_method: default_inject_method(),
            includes: default_includes(),
        }
    }
}

impl Default for ScriptbindConfig {
    fn default() -> Self {
        Self {
            scripts_dir: default_scripts_dir(),
            generated_file: default_generated_file(),
            base_class: default_base_class(),
            header_extensions: default_header_extensions(),
            source_extension: default_source_extension(),
            markers: MarkerConfig::default(),
            registration: RegistrationConfig::default(),
            signatures: Vec::new(),
        }
    }
}

impl ScriptbindConfig {
    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from a file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_toml(&content)
    }

    /// Load `scriptbind.toml` from the project root, or defaults if it is absent
    pub fn load_for_project(project_root: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = project_root.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            Self::from_file(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let identifiers = [
            ("base_class", &self.base_class),
            ("markers.message", &self.markers.message),
            ("markers.named_message", &self.markers.named_message),
            ("markers.property", &self.markers.property),
            ("markers.suppress", &self.markers.suppress),
            ("registration.block", &self.registration.block),
            ("registration.statement", &self.registration.statement),
            ("registration.handle_type", &self.registration.handle_type),
            ("registration.inject_method", &self.registration.inject_method),
        ];

        for (key, value) in identifiers {
            if !is_identifier(value) {
                return Err(ConfigError::Invalid(format!(
                    "{key} must be an identifier, got '{value}'"
                )));
            }
        }

        if self.markers.message == self.markers.named_message {
            return Err(ConfigError::Invalid(
                "markers.message and markers.named_message must differ".to_string(),
            ));
        }

        if self.scripts_dir.trim().is_empty() {
            return Err(ConfigError::Invalid("scripts_dir cannot be empty".to_string()));
        }

        if self.generated_file.trim().is_empty() || self.generated_file.contains(['/', '\\']) {
            return Err(ConfigError::Invalid(format!(
                "generated_file must be a plain file name, got '{}'",
                self.generated_file
            )));
        }

        if self.header_extensions.is_empty() {
            return Err(ConfigError::Invalid(
                "header_extensions cannot be empty".to_string(),
            ));
        }

        for signature in &self.signatures {
            if !is_identifier(&signature.name) {
                return Err(ConfigError::Invalid(format!(
                    "signature name must be an identifier, got '{}'",
                    signature.name
                )));
            }
        }

        Ok(())
    }

    /// Built-in engine signatures plus any configured extras
    pub fn signature_table(&self) -> SignatureTable {
        SignatureTable::engine_default().with_entries(self.signatures.iter().cloned())
    }

    /// Whether `ext` (without the dot) is a configured header extension
    pub fn is_header_extension(&self, ext: &str) -> bool {
        self.header_extensions
            .iter()
            .any(|e| e.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

fn is_identifier(value: &str) -> bool {
    let mut chars = value.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {
            chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
        }
        _ => false,
    }
}
