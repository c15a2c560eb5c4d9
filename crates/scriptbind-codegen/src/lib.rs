//! scriptbind-codegen - Registration code generation for script classes
//!
//! Turns scanned [`ScriptClassRecord`](scriptbind_core::ScriptClassRecord)s into:
//! - one aggregated registration translation unit ([`emit_registration`])
//! - registration statements inside each class's default constructor ([`inject_registrations`])
//!
//! Header rewrites go through [`replace_file`], which keeps a backup until the
//! new content is on disk. [`Generator`] drives a full pass over a project.

mod emitter;
mod generate;
mod injector;
mod replace;

pub use emitter::{emit_registration, has_hand_written_registration};
pub use generate::{
    GenerateSummary, Generator, ScanReport, SkipNotice, SkipReason, generate_project,
};
pub use injector::{inject_registrations, try_inject_registrations};
pub use replace::{BACKUP_SUFFIX, ReplaceError, backup_path, replace_file, replace_file_with};
