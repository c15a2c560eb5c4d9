//! Constructor body rewriting
//!
//! Message registration happens in the script's default constructor. The
//! injector rewrites only the byte range between that constructor's braces:
//! previously injected statements are dropped, every other non-empty line is
//! kept (trimmed and re-indented), and one statement per message is appended.
//! Running it twice with the same messages gives the same text as running it
//! once.

use regex::Regex;
use scriptbind_core::MessageDescriptor;
use scriptbind_scanner::find_matching_brace;
use std::collections::HashSet;

/// Location of a `ClassName() {` constructor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ConstructorSite {
    /// Byte offset where the constructor name starts
    start: usize,
    /// Byte offset of the opening `{`
    open: usize,
}

/// Rewrite the default constructor of `class_name` to register `messages`.
///
/// Returns the input unchanged when the class has no `ClassName() {` constructor.
/// A `noexcept` specifier is accepted; constructors with a member initializer
/// list are not recognised.
pub fn inject_registrations(
    text: &str,
    class_name: &str,
    messages: &[MessageDescriptor],
    statement: &str,
) -> String {
    try_inject_registrations(text, class_name, messages, statement)
        .unwrap_or_else(|| text.to_string())
}

/// Like [`inject_registrations`], but `None` when no default constructor body was found
pub fn try_inject_registrations(
    text: &str,
    class_name: &str,
    messages: &[MessageDescriptor],
    statement: &str,
) -> Option<String> {
    let site = find_default_constructor(text, class_name)?;
    let close = find_matching_brace(text, site.open)?;

    let newline = if text.contains("\r\n") { "\r\n" } else { "\n" };
    let indent = line_indent(text, site.start);
    let inner = format!("{indent}    ");

    let mut body = String::from(newline);
    for line in text[site.open + 1..close]
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.contains(statement))
    {
        body.push_str(&inner);
        body.push_str(line);
        body.push_str(newline);
    }

    let mut registered = HashSet::new();
    for message in messages {
        if registered.insert(message.function_name.as_str()) {
            body.push_str(&format!(
                "{inner}{statement}(\"{}\", &{class_name}::{});{newline}",
                message.message_name, message.function_name
            ));
        }
    }
    body.push_str(indent);

    let mut output = String::with_capacity(text.len() + body.len());
    output.push_str(&text[..=site.open]);
    output.push_str(&body);
    output.push_str(&text[close..]);
    Some(output)
}

/// First `ClassName() {` (optionally `noexcept`) that is not a destructor
fn find_default_constructor(text: &str, class_name: &str) -> Option<ConstructorSite> {
    let pattern = Regex::new(&format!(
        r"\b{}\s*\(\s*\)\s*(?:noexcept\s*(?:\(\s*\w*\s*\)\s*)?)?\{{",
        regex::escape(class_name)
    ))
    .ok()?;

    pattern
        .find_iter(text)
        .find(|m| !text[..m.start()].trim_end().ends_with('~'))
        .map(|m| ConstructorSite {
            start: m.start(),
            open: m.end() - 1,
        })
}

/// Leading whitespace of the line containing byte offset `at`
fn line_indent(text: &str, at: usize) -> &str {
    let line_start = text[..at].rfind('\n').map_or(0, |idx| idx + 1);
    let line = &text[line_start..at];
    let width = line.len() - line.trim_start().len();
    &line[..width]
}
