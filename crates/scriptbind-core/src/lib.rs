//! scriptbind-core - Data model, signature table, and configuration
//!
//! This crate provides the foundational types shared by the scanner and the
//! code generator:
//! - [`ScriptClassRecord`] and its [`MessageDescriptor`] / [`PropertyDescriptor`] entries
//! - [`SignatureTable`] of engine-broadcast message signatures
//! - [`ScriptbindConfig`] for project configuration
//! - [`ScanError`], [`ConfigError`], and [`GenerateError`] for error handling

mod config;
mod error;
mod model;
mod signature;

pub use config::{
    CONFIG_FILE_NAME, MarkerConfig, RegistrationConfig, ScriptbindConfig,
};
pub use error::{ConfigError, GenerateError, GenerateResult, ScanError};
pub use model::{DiscoveryRule, MessageDescriptor, PropertyDescriptor, ScriptClassRecord};
pub use signature::{SignatureEntry, SignatureTable};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ConfigError, DiscoveryRule, GenerateError, GenerateResult, MessageDescriptor,
        PropertyDescriptor, ScanError, ScriptClassRecord, ScriptbindConfig, SignatureEntry,
        SignatureTable,
    };
}
