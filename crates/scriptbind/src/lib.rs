//! # scriptbind
//!
//! Build-time registration code generator for engine script classes.
//!
//! scriptbind scans the headers of a project's scripts directory for classes
//! deriving from the script base class and:
//! - writes one aggregated registration file covering every script class
//! - injects message registration statements into each class's default constructor
//!
//! ## Quick Start
//!
//! ```no_run
//! use scriptbind::prelude::*;
//! use std::path::Path;
//!
//! let summary = scriptbind::generate_project(Path::new("MyGame"))?;
//! for notice in summary.skipped() {
//!     eprintln!("skipped {}: {}", notice.path.display(), notice.reason);
//! }
//! # Ok::<(), GenerateError>(())
//! ```
//!
//! ## Marking Messages
//!
//! ```text
//! class Player : public ScriptBehaviour
//! {
//! public:
//!     Player() {}
//!
//!     void Update();                                  // engine signature
//!     SCRIPT_MESSAGE() void Jump();                   // explicit marker
//!     SCRIPT_MESSAGE_NAMED("Hit") void OnHit(int d);  // custom message name
//!     SCRIPT_PROPERTY() float speed = 4.0f;
//! };
//! ```

pub use scriptbind_codegen::{
    GenerateSummary, Generator, ScanReport, SkipNotice, SkipReason, generate_project,
};
pub use scriptbind_core::{
    CONFIG_FILE_NAME, ConfigError, DiscoveryRule, GenerateError, GenerateResult,
    MessageDescriptor, PropertyDescriptor, ScanError, ScriptClassRecord, ScriptbindConfig,
    SignatureEntry, SignatureTable,
};
pub use scriptbind_scanner::{HeaderScan, ScriptScanner, normalize_type, parse_parameter_list};

// Lower-level pieces for custom pipelines
pub use scriptbind_codegen::{emit_registration, inject_registrations, replace_file};

/// Prelude module for convenient imports
pub mod prelude {
    pub use scriptbind_core::prelude::*;

    pub use scriptbind_codegen::{GenerateSummary, Generator, ScanReport, SkipNotice, SkipReason};
    pub use scriptbind_scanner::ScriptScanner;
}
