//! Engine-broadcast message signatures
//!
//! The table lets common lifecycle and collision callbacks be registered
//! without a marker macro: a bare `void Update();` in a script class is a
//! message because `Update` with no parameters appears here.

use serde::{Deserialize, Serialize};

/// One engine message: its name and expected parameter types
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureEntry {
    /// Message name, which is also the handler function name
    pub name: String,

    /// Parameter types in order
    #[serde(default)]
    pub params: Vec<String>,
}

impl SignatureEntry {
    pub fn new(name: impl Into<String>, params: &[&str]) -> Self {
        Self {
            name: name.into(),
            params: params.iter().map(|p| (*p).to_string()).collect(),
        }
    }
}

const LIFECYCLE_MESSAGES: &[&str] = &[
    "Awake",
    "Start",
    "Update",
    "LateUpdate",
    "FixedUpdate",
    "OnEnable",
    "OnDisable",
    "OnDestroy",
];

const COLLISION_MESSAGES: &[&str] = &["OnCollisionEnter", "OnCollisionStay", "OnCollisionExit"];

const TRIGGER_MESSAGES: &[&str] = &["OnTriggerEnter", "OnTriggerStay", "OnTriggerExit"];

/// Read-only table of engine message signatures
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignatureTable {
    entries: Vec<SignatureEntry>,
}

impl SignatureTable {
    /// Create a table from explicit entries
    pub fn new(entries: Vec<SignatureEntry>) -> Self {
        Self { entries }
    }

    /// The signatures the engine runtime broadcasts to every script
    pub fn engine_default() -> Self {
        let lifecycle = LIFECYCLE_MESSAGES
            .iter()
            .map(|name| SignatureEntry::new(*name, &[]));
        let collision = COLLISION_MESSAGES
            .iter()
            .map(|name| SignatureEntry::new(*name, &["CollisionInfo"]));
        let trigger = TRIGGER_MESSAGES
            .iter()
            .map(|name| SignatureEntry::new(*name, &["TriggerInfo"]));

        Self {
            entries: lifecycle.chain(collision).chain(trigger).collect(),
        }
    }

    /// Return a copy of this table with `extra` entries appended
    pub fn with_entries(mut self, extra: impl IntoIterator<Item = SignatureEntry>) -> Self {
        self.entries.extend(extra);
        self
    }

    /// All entries with the given name (overloads may share a name)
    pub fn entries_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a SignatureEntry> {
        self.entries.iter().filter(move |e| e.name == name)
    }

    pub fn entries(&self) -> &[SignatureEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
