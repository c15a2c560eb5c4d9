//! Parameter type normalization and parameter-list splitting
//!
//! Types are compared as text. Normalization removes the parts of a
//! declaration that do not change which message a handler answers to:
//! `const`, references, pointers, and incidental whitespace. After
//! normalization `const CollisionInfo&`, `CollisionInfo *` and
//! `CollisionInfo` are the same string.

const QUALIFIER: &str = "const";

/// Builtin type words that never name a parameter
const BUILTIN_TYPE_WORDS: &[&str] = &[
    "bool", "char", "short", "int", "long", "float", "double", "unsigned", "signed", "void",
];

/// Canonicalize a type fragment for comparison.
///
/// Idempotent: `normalize_type(&normalize_type(x)) == normalize_type(x)`.
pub fn normalize_type(raw: &str) -> String {
    let without_decorations: String = raw
        .trim()
        .chars()
        .filter(|c| *c != '&' && *c != '*')
        .collect();
    let without_qualifier = strip_keyword(without_decorations.trim(), QUALIFIER);

    canonical_whitespace(without_qualifier.trim())
}

/// Split the text between a function's parentheses into normalized parameter types.
///
/// Commas nested inside `<>`, `()` or `[]` do not separate parameters. An
/// empty list or a lone `void` yields no parameters.
pub fn parse_parameter_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "void" {
        return Vec::new();
    }

    split_top_level(trimmed, ',')
        .into_iter()
        .filter_map(parameter_type)
        .collect()
}

/// Type of a single parameter declaration, with its name and default value dropped
fn parameter_type(chunk: &str) -> Option<String> {
    let declaration = match find_top_level(chunk, '=') {
        Some(idx) => &chunk[..idx],
        None => chunk,
    }
    .trim();

    if declaration.is_empty() {
        return None;
    }

    let type_text = match last_top_level_space(declaration) {
        Some(idx) => {
            let (head, tail) = declaration.split_at(idx);
            if names_parameter(tail.trim()) && !normalize_type(head).is_empty() {
                head
            } else {
                declaration
            }
        }
        None => declaration,
    };

    Some(normalize_type(type_text))
}

/// Whether the trailing token of a parameter declaration is its name
fn names_parameter(tail: &str) -> bool {
    let name = tail.trim_start_matches(['&', '*']);
    let name = match name.find('[') {
        Some(idx) if name.ends_with(']') => &name[..idx],
        _ => name,
    };

    is_identifier(name) && !BUILTIN_TYPE_WORDS.contains(&name) && name != QUALIFIER
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

fn is_ident_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

/// Replace every standalone occurrence of `keyword` with a space
fn strip_keyword(text: &str, keyword: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    let mut prev: Option<char> = None;

    while let Some(idx) = rest.find(keyword) {
        let before = rest[..idx].chars().next_back().or(prev);
        let after = rest[idx + keyword.len()..].chars().next();
        let standalone =
            !before.is_some_and(is_ident_char) && !after.is_some_and(is_ident_char);

        out.push_str(&rest[..idx]);
        if standalone {
            out.push(' ');
        } else {
            out.push_str(keyword);
        }

        prev = keyword.chars().next_back();
        rest = &rest[idx + keyword.len()..];
    }
    out.push_str(rest);
    out
}

/// Collapse whitespace runs and drop whitespace next to punctuation
fn canonical_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut pending_space = false;

    for c in text.chars() {
        if c.is_whitespace() {
            pending_space = true;
            continue;
        }
        if pending_space && !out.is_empty() {
            let last = out.chars().next_back();
            if !is_tight_punct(c) && !last.is_some_and(is_tight_punct) {
                out.push(' ');
            }
        }
        pending_space = false;
        out.push(c);
    }
    out
}

fn is_tight_punct(c: char) -> bool {
    matches!(c, '<' | '>' | ',' | ':' | '(' | ')' | '[' | ']')
}

/// Bracket nesting while walking a parameter list.
///
/// `<` opens a template argument list in a type. Once a top-level `=` starts a
/// default value, `<` only counts when it directly follows an identifier, so a
/// comparison such as `0 < 1` does not swallow the parameters after it.
#[derive(Debug, Default)]
struct DepthScan {
    brackets: u32,
    angles: u32,
    in_default: bool,
    prev: Option<char>,
}

impl DepthScan {
    fn at_top(&self) -> bool {
        self.brackets == 0 && self.angles == 0
    }

    fn step(&mut self, c: char) {
        match c {
            '(' | '[' | '{' => self.brackets += 1,
            ')' | ']' | '}' => self.brackets = self.brackets.saturating_sub(1),
            '<' if !self.in_default || self.prev.is_some_and(is_ident_char) => self.angles += 1,
            '>' => self.angles = self.angles.saturating_sub(1),
            '=' if self.at_top() => self.in_default = true,
            _ => {}
        }
        self.prev = Some(c);
    }
}

/// Split on `separator` wherever it appears outside any brackets
fn split_top_level(text: &str, separator: char) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut scan = DepthScan::default();
    let mut start = 0;

    for (idx, c) in text.char_indices() {
        if c == separator && scan.at_top() {
            parts.push(&text[start..idx]);
            start = idx + c.len_utf8();
            scan = DepthScan::default();
        } else {
            scan.step(c);
        }
    }
    parts.push(&text[start..]);
    parts
}

fn find_top_level(text: &str, needle: char) -> Option<usize> {
    let mut scan = DepthScan::default();
    for (idx, c) in text.char_indices() {
        if c == needle && scan.at_top() {
            return Some(idx);
        }
        scan.step(c);
    }
    None
}

fn last_top_level_space(text: &str) -> Option<usize> {
    let mut scan = DepthScan::default();
    let mut last = None;
    for (idx, c) in text.char_indices() {
        if c.is_whitespace() && scan.at_top() {
            last = Some(idx);
        }
        scan.step(c);
    }
    last
}
