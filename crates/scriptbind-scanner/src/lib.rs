//! scriptbind-scanner - Structural scanner for script headers
//!
//! This is not a C++ parser. It recognises a narrow, conventional subset of
//! declarations with regular expressions plus brace-depth scanning:
//! - [`ClassDetector`] / [`extract_body`] find `class X : public Base { ... }`
//! - [`MemberScanner`] finds marked and engine-shaped message handlers and marked properties
//! - [`normalize_type`] / [`parse_parameter_list`] canonicalize parameter types
//! - [`matches_signature`] checks a declaration against the engine signature table
//!
//! Includes, macros, comments and string literals are not interpreted.

mod class;
mod members;
mod signature;
mod types;

pub use class::{ClassBody, ClassDeclaration, ClassDetector, extract_body, find_matching_brace};
pub use members::{MemberScanner, ScannedMembers};
pub use signature::matches_signature;
pub use types::{normalize_type, parse_parameter_list};

use scriptbind_core::{ConfigError, ScanError, ScriptClassRecord, ScriptbindConfig, SignatureTable};
use std::path::Path;

/// Result of scanning one header
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeaderScan {
    /// One record per class successfully extracted, in file order
    pub records: Vec<ScriptClassRecord>,

    /// Extraction failure that ended scanning of this header, if any
    pub failure: Option<ScanError>,
}

/// Scanner configured for one project
#[derive(Debug, Clone)]
pub struct ScriptScanner {
    detector: ClassDetector,
    members: MemberScanner,
    table: SignatureTable,
}

impl ScriptScanner {
    /// Build a scanner using the config's markers, base class and signature table
    pub fn new(config: &ScriptbindConfig) -> Result<Self, ConfigError> {
        Self::with_table(config, config.signature_table())
    }

    /// Build a scanner with an explicit signature table
    pub fn with_table(
        config: &ScriptbindConfig,
        table: SignatureTable,
    ) -> Result<Self, ConfigError> {
        let detector = ClassDetector::new(&config.base_class)
            .map_err(|e| ConfigError::Invalid(format!("base_class pattern: {e}")))?;
        let members = MemberScanner::new(&config.markers)
            .map_err(|e| ConfigError::Invalid(format!("marker pattern: {e}")))?;

        Ok(Self {
            detector,
            members,
            table,
        })
    }

    pub fn table(&self) -> &SignatureTable {
        &self.table
    }

    /// Scan header text for every script class it declares.
    ///
    /// Classes are found one after another; detection resumes after each
    /// extracted body. A class whose body cannot be extracted stops the scan
    /// of this header, keeping the records found before it.
    pub fn scan_header(&self, text: &str, header_path: &Path) -> HeaderScan {
        let mut scan = HeaderScan::default();
        let mut offset = 0;

        while let Some(decl) = self.detector.find_next(text, offset) {
            let body = match extract_body(text, &decl.name, decl.end) {
                Ok(body) => body,
                Err(err) => {
                    tracing::debug!(
                        header = %header_path.display(),
                        class = %decl.name,
                        "class body extraction failed: {err}"
                    );
                    scan.failure = Some(err);
                    break;
                }
            };

            let members = self.members.scan(body.text, &self.table);
            tracing::debug!(
                header = %header_path.display(),
                class = %decl.name,
                messages = members.messages.len(),
                properties = members.properties.len(),
                suppressed = members.suppressed,
                "found script class"
            );

            let mut record = ScriptClassRecord::new(decl.name, header_path);
            record.exclude = members.suppressed;
            record.messages = members.messages;
            record.properties = members.properties;
            scan.records.push(record);

            offset = body.end;
        }

        scan
    }
}
