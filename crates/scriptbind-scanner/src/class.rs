//! Script class detection and body extraction
//!
//! Detection is a single regular expression for
//! `class <MACROS...> Name [final] : public <Base>`; body extraction is a
//! brace-depth scan from the first `{` after the declaration. Neither step
//! understands comments or string literals.

use regex::Regex;
use scriptbind_core::ScanError;

/// A script class declaration located in header text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    pub name: String,

    /// Byte offset where the declaration match starts
    pub start: usize,

    /// Byte offset immediately after the declaration match
    pub end: usize,
}

/// Brace-delimited class body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassBody<'a> {
    /// Text between the braces, exclusive
    pub text: &'a str,

    /// Byte offset of the opening `{`
    pub open: usize,

    /// Byte offset just past the closing `}`
    pub end: usize,
}

/// Finds declarations of classes deriving publicly from one base class
#[derive(Debug, Clone)]
pub struct ClassDetector {
    pattern: Regex,
}

impl ClassDetector {
    pub fn new(base_class: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            r"\b(?:class|struct)\s+(?:\w+\s+)*?(\w+)\s*(?:final\s*)?:\s*public\s+{}\b",
            regex::escape(base_class)
        ))?;

        Ok(Self { pattern })
    }

    /// Find the first declaration starting at or after byte offset `from`
    pub fn find_next(&self, text: &str, from: usize) -> Option<ClassDeclaration> {
        if from > text.len() {
            return None;
        }

        let captures = self.pattern.captures_at(text, from)?;
        let whole = captures.get(0)?;
        let name = captures.get(1)?;

        Some(ClassDeclaration {
            name: name.as_str().to_string(),
            start: whole.start(),
            end: whole.end(),
        })
    }
}

/// Byte offset of the `}` matching the `{` at `open`
///
/// Returns `None` when `open` is not a `{` or the text ends first.
pub fn find_matching_brace(text: &str, open: usize) -> Option<usize> {
    find_matching(text, open, b'{', b'}')
}

/// Byte offset of the `)` matching the `(` at `open`
pub(crate) fn find_matching_paren(text: &str, open: usize) -> Option<usize> {
    find_matching(text, open, b'(', b')')
}

fn find_matching(text: &str, open: usize, opener: u8, closer: u8) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(open) != Some(&opener) {
        return None;
    }

    let mut depth = 0usize;
    for (idx, &byte) in bytes.iter().enumerate().skip(open) {
        if byte == opener {
            depth += 1;
        } else if byte == closer {
            depth -= 1;
            if depth == 0 {
                return Some(idx);
            }
        }
    }
    None
}

/// Extract the body of `class_name`, scanning for its `{` from byte offset `from`
pub fn extract_body<'a>(
    text: &'a str,
    class_name: &str,
    from: usize,
) -> Result<ClassBody<'a>, ScanError> {
    let open = text
        .get(from..)
        .and_then(|rest| rest.find('{'))
        .map(|idx| from + idx)
        .ok_or_else(|| ScanError::MissingBody {
            class: class_name.to_string(),
        })?;

    let close = find_matching_brace(text, open).ok_or_else(|| ScanError::UnbalancedBraces {
        class: class_name.to_string(),
    })?;

    Ok(ClassBody {
        text: &text[open + 1..close],
        open,
        end: close + 1,
    })
}
