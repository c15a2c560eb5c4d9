//! Descriptors produced by scanning a script header

use serde::Serialize;
use std::path::PathBuf;

/// Which discovery rule registered a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryRule {
    /// `SCRIPT_MESSAGE()` marker; message name equals the function name
    Marker,
    /// `SCRIPT_MESSAGE_NAMED("...")` marker carrying an explicit message name
    NamedMarker,
    /// Bare declaration matching an engine signature
    Signature,
}

/// A message handler declared on a script class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageDescriptor {
    /// Name the engine dispatches under
    pub message_name: String,

    /// Name of the member function that handles it
    pub function_name: String,

    /// Normalized parameter types, in declaration order
    pub param_types: Vec<String>,

    /// Rule that discovered this message
    pub rule: DiscoveryRule,
}

impl MessageDescriptor {
    pub fn new(
        message_name: impl Into<String>,
        function_name: impl Into<String>,
        param_types: Vec<String>,
        rule: DiscoveryRule,
    ) -> Self {
        Self {
            message_name: message_name.into(),
            function_name: function_name.into(),
            param_types,
            rule,
        }
    }
}

/// A reflected data member declared on a script class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PropertyDescriptor {
    /// Member name
    pub name: String,

    /// Normalized declared type
    pub type_name: String,
}

impl PropertyDescriptor {
    pub fn new(name: impl Into<String>, type_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
        }
    }
}

/// Everything discovered about one script class declaration
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScriptClassRecord {
    /// Declared class name
    pub class_name: String,

    /// Header path relative to the scripts root
    pub header_path: PathBuf,

    /// Set when the body carries the suppress-autogeneration token
    pub exclude: bool,

    /// Messages in discovery order, unique by function name
    pub messages: Vec<MessageDescriptor>,

    /// Properties in declaration order (not de-duplicated)
    pub properties: Vec<PropertyDescriptor>,
}

impl ScriptClassRecord {
    /// Create an empty record for a class found in `header_path`
    pub fn new(class_name: impl Into<String>, header_path: impl Into<PathBuf>) -> Self {
        Self {
            class_name: class_name.into(),
            header_path: header_path.into(),
            exclude: false,
            messages: Vec::new(),
            properties: Vec::new(),
        }
    }

    /// Header path rendered with forward slashes, as used in `#include` lines
    pub fn include_path(&self) -> String {
        self.header_path
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/")
    }

    /// Whether the constructor of this class should receive registration statements
    pub fn wants_injection(&self) -> bool {
        !self.exclude && !self.messages.is_empty()
    }
}
