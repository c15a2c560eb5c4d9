//! Generation driver
//!
//! One run walks the scripts directory, scans every header, writes the
//! aggregated registration file, and rewrites the default constructor of
//! each script class that has messages. Only failure to write the aggregate
//! file is returned as an error. Everything else that goes wrong with a
//! single file or class is recorded as a [`SkipNotice`] and the run carries on.
//! A class without a default constructor is not a failure; it is listed in
//! [`GenerateSummary::without_constructor`] and left untouched.

use crate::emitter::{emit_registration, has_hand_written_registration};
use crate::injector::try_inject_registrations;
use crate::replace::replace_file;
use scriptbind_core::{
    ConfigError, GenerateError, GenerateResult, ScanError, ScriptClassRecord, ScriptbindConfig,
    SignatureTable,
};
use scriptbind_scanner::ScriptScanner;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Why a file or class was left out of a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    /// A directory entry could not be read during traversal
    Inaccessible(String),
    /// A header could not be read
    Unreadable(String),
    /// Class body extraction failed
    Malformed(ScanError),
    /// The header rewrite failed; the original content was kept
    RewriteFailed(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SkipReason::Inaccessible(err) => write!(f, "inaccessible: {err}"),
            SkipReason::Unreadable(err) => write!(f, "unreadable: {err}"),
            SkipReason::Malformed(err) => write!(f, "malformed: {err}"),
            SkipReason::RewriteFailed(err) => write!(f, "rewrite failed: {err}"),
        }
    }
}

/// A file or class skipped during a run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipNotice {
    pub path: PathBuf,
    pub class: Option<String>,
    pub reason: SkipReason,
}

impl SkipNotice {
    fn new(path: impl Into<PathBuf>, class: Option<&str>, reason: SkipReason) -> Self {
        let notice = Self {
            path: path.into(),
            class: class.map(str::to_string),
            reason,
        };
        tracing::warn!(
            path = %notice.path.display(),
            class = notice.class.as_deref().unwrap_or("-"),
            "skipped: {}",
            notice.reason
        );
        notice
    }
}

/// Result of scanning a project without writing anything
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    /// Scripts root, or `None` when the project has no scripts directory
    pub scripts_root: Option<PathBuf>,
    pub headers_scanned: usize,
    pub records: Vec<ScriptClassRecord>,
    pub skipped: Vec<SkipNotice>,
}

/// Outcome of a generation run
#[derive(Debug, Clone, Default)]
pub struct GenerateSummary {
    pub scan: ScanReport,
    /// Path of the aggregated file, when one was written
    pub generated_file: Option<PathBuf>,
    /// Headers whose constructor was rewritten
    pub rewritten: Vec<PathBuf>,
    /// Classes with messages but no `ClassName() {` constructor to inject into
    pub without_constructor: Vec<String>,
}

/// What happened to one class's constructor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Injection {
    Rewritten,
    UpToDate,
    NoConstructor,
}

impl GenerateSummary {
    pub fn skipped(&self) -> impl Iterator<Item = &SkipNotice> {
        self.scan.skipped.iter()
    }
}

/// Scans script headers and generates registration code for one configuration
#[derive(Debug, Clone)]
pub struct Generator {
    config: ScriptbindConfig,
    scanner: ScriptScanner,
}

impl Generator {
    /// Create a generator using the configured signature table
    pub fn new(config: ScriptbindConfig) -> Result<Self, ConfigError> {
        let table = config.signature_table();
        Self::with_table(config, table)
    }

    /// Create a generator with an explicit signature table
    pub fn with_table(config: ScriptbindConfig, table: SignatureTable) -> Result<Self, ConfigError> {
        config.validate()?;
        let scanner = ScriptScanner::with_table(&config, table)?;
        Ok(Self { config, scanner })
    }

    pub fn config(&self) -> &ScriptbindConfig {
        &self.config
    }

    /// Scripts directory for `project_root`
    pub fn scripts_root(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.config.scripts_dir)
    }

    /// Scan every header under the project's scripts directory
    pub fn scan(&self, project_root: &Path) -> ScanReport {
        let scripts_root = self.scripts_root(project_root);
        if !scripts_root.is_dir() {
            tracing::info!(
                scripts = %scripts_root.display(),
                "no scripts directory, nothing to generate"
            );
            return ScanReport::default();
        }

        let mut report = ScanReport {
            scripts_root: Some(scripts_root.clone()),
            ..ScanReport::default()
        };

        for path in self.collect_headers(&scripts_root, &mut report.skipped) {
            let relative = path
                .strip_prefix(&scripts_root)
                .unwrap_or(&path)
                .to_path_buf();

            let text = match fs::read(&path) {
                Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
                Err(err) => {
                    report.skipped.push(SkipNotice::new(
                        &path,
                        None,
                        SkipReason::Unreadable(err.to_string()),
                    ));
                    continue;
                }
            };

            report.headers_scanned += 1;
            let scan = self.scanner.scan_header(&text, &relative);
            if let Some(err) = scan.failure {
                let class = err.class_name().to_string();
                report.skipped.push(SkipNotice::new(
                    &path,
                    Some(class.as_str()),
                    SkipReason::Malformed(err),
                ));
            }
            report.records.extend(scan.records);
        }

        report
    }

    /// Run a full generation pass for `project_root`
    pub fn generate(&self, project_root: &Path) -> GenerateResult<GenerateSummary> {
        let scan = self.scan(project_root);
        let Some(scripts_root) = scan.scripts_root.clone() else {
            return Ok(GenerateSummary {
                scan,
                ..GenerateSummary::default()
            });
        };

        let mut summary = GenerateSummary {
            scan,
            ..GenerateSummary::default()
        };

        let generated_path = scripts_root.join(&self.config.generated_file);
        let contents = emit_registration(&summary.scan.records, &self.config, |record| {
            has_hand_written_registration(&scripts_root, record, &self.config)
        });
        fs::write(&generated_path, contents).map_err(|source| GenerateError::AggregateWrite {
            path: generated_path.clone(),
            source,
        })?;
        summary.generated_file = Some(generated_path);

        let mut skipped = Vec::new();
        for record in summary.scan.records.iter().filter(|r| r.wants_injection()) {
            let path = scripts_root.join(&record.header_path);
            match self.inject_into_header(&path, record) {
                Ok(Injection::Rewritten) => summary.rewritten.push(path),
                Ok(Injection::UpToDate) => {}
                Ok(Injection::NoConstructor) => {
                    summary.without_constructor.push(record.class_name.clone());
                }
                Err(reason) => {
                    skipped.push(SkipNotice::new(
                        path,
                        Some(record.class_name.as_str()),
                        reason,
                    ));
                }
            }
        }
        summary.scan.skipped.extend(skipped);

        tracing::info!(
            headers = summary.scan.headers_scanned,
            classes = summary.scan.records.len(),
            rewritten = summary.rewritten.len(),
            without_constructor = summary.without_constructor.len(),
            skipped = summary.scan.skipped.len(),
            "generation finished"
        );

        Ok(summary)
    }

    /// Reread `path` and rewrite it if its constructor is out of date
    fn inject_into_header(
        &self,
        path: &Path,
        record: &ScriptClassRecord,
    ) -> Result<Injection, SkipReason> {
        let text = fs::read_to_string(path).map_err(|e| SkipReason::Unreadable(e.to_string()))?;

        let Some(new_text) = try_inject_registrations(
            &text,
            &record.class_name,
            &record.messages,
            &self.config.registration.statement,
        ) else {
            tracing::debug!(path = %path.display(), class = %record.class_name, "no default constructor");
            return Ok(Injection::NoConstructor);
        };

        if new_text == text {
            tracing::debug!(path = %path.display(), class = %record.class_name, "constructor up to date");
            return Ok(Injection::UpToDate);
        }

        replace_file(path, &new_text).map_err(|e| SkipReason::RewriteFailed(e.to_string()))?;
        tracing::debug!(path = %path.display(), class = %record.class_name, "constructor rewritten");
        Ok(Injection::Rewritten)
    }

    /// Header files under `scripts_root`, in stable file-name order
    fn collect_headers(&self, scripts_root: &Path, skipped: &mut Vec<SkipNotice>) -> Vec<PathBuf> {
        let generated = scripts_root.join(&self.config.generated_file);
        let mut headers = Vec::new();

        for entry in WalkDir::new(scripts_root).sort_by_file_name() {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    let path = err
                        .path()
                        .map_or_else(|| scripts_root.to_path_buf(), Path::to_path_buf);
                    skipped.push(SkipNotice::new(
                        path,
                        None,
                        SkipReason::Inaccessible(err.to_string()),
                    ));
                    continue;
                }
            };

            if !entry.file_type().is_file() || entry.path() == generated {
                continue;
            }

            let is_header = entry
                .path()
                .extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| self.config.is_header_extension(ext));
            if is_header {
                headers.push(entry.into_path());
            }
        }

        headers
    }
}

/// Load the project's configuration and run a generation pass
pub fn generate_project(project_root: &Path) -> GenerateResult<GenerateSummary> {
    let config = ScriptbindConfig::load_for_project(project_root)?;
    let generator = Generator::new(config)?;
    generator.generate(project_root)
}

#[cfg(test)]
#[path = "generate/generate_tests.rs"]
mod generate_tests;
