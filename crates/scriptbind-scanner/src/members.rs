//! Message and property discovery inside a class body
//!
//! Messages are collected by three passes over the body, in precedence order:
//!
//! 1. `SCRIPT_MESSAGE()` before `void Name(params);`
//! 2. `SCRIPT_MESSAGE_NAMED("Msg")` before `void Name(params);`
//! 3. bare `void Name(params);` whose shape matches the engine signature table
//!
//! A function name claimed by an earlier pass is skipped by later ones, so a
//! marker always wins over shape matching. Properties come from a single
//! `SCRIPT_PROPERTY()` pass and are not de-duplicated.

use crate::class::find_matching_paren;
use crate::signature::matches_signature;
use crate::types::{normalize_type, parse_parameter_list};
use regex::Regex;
use scriptbind_core::{
    DiscoveryRule, MarkerConfig, MessageDescriptor, PropertyDescriptor, SignatureTable,
};
use std::collections::HashSet;

/// `void Name(` with optional `virtual`; the parameter list is closed by paren depth
const VOID_DECLARATION_HEAD: &str = r"(?:virtual\s+)?void\s+(\w+)\s*\(";

/// What may follow a declaration's closing `)`
const DECLARATION_TAIL: &str = r"\A\s*(?:const\s*)?(?:override\s*)?(?:final\s*)?;";

/// A `void Name(params);` declaration found in a class body
struct Declaration<'a> {
    function: &'a str,
    params: &'a str,
}

/// Members found in one class body
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScannedMembers {
    /// The body carried the suppress token; nothing else was collected
    pub suppressed: bool,
    pub messages: Vec<MessageDescriptor>,
    pub properties: Vec<PropertyDescriptor>,
}

/// Compiled marker patterns for one configuration
#[derive(Debug, Clone)]
pub struct MemberScanner {
    message: Regex,
    named_message: Regex,
    bare_declaration: Regex,
    declaration_tail: Regex,
    property: Regex,
    suppress: Regex,
}

impl MemberScanner {
    pub fn new(markers: &MarkerConfig) -> Result<Self, regex::Error> {
        let message = Regex::new(&format!(
            r"\b{}\s*\(\s*\)\s*{VOID_DECLARATION_HEAD}",
            regex::escape(&markers.message)
        ))?;
        let named_message = Regex::new(&format!(
            r#"\b{}\s*\(\s*"([^"]*)"\s*\)\s*{VOID_DECLARATION_HEAD}"#,
            regex::escape(&markers.named_message)
        ))?;
        let bare_declaration = Regex::new(&format!(r"\b{VOID_DECLARATION_HEAD}"))?;
        let declaration_tail = Regex::new(DECLARATION_TAIL)?;
        let property = Regex::new(&format!(
            r"\b{}\s*\(\s*\)\s*([A-Za-z_][\w:<>,\s*&]*?)\s*\b(\w+)\s*(?:=[^;]*|\{{[^}}]*\}})?;",
            regex::escape(&markers.property)
        ))?;
        let suppress = Regex::new(&format!(r"\b{}\b", regex::escape(&markers.suppress)))?;

        Ok(Self {
            message,
            named_message,
            bare_declaration,
            declaration_tail,
            property,
            suppress,
        })
    }

    /// Whether the body carries the suppress-autogeneration token
    pub fn is_suppressed(&self, body: &str) -> bool {
        self.suppress.is_match(body)
    }

    /// Collect messages and properties from a class body
    pub fn scan(&self, body: &str, table: &SignatureTable) -> ScannedMembers {
        if self.is_suppressed(body) {
            return ScannedMembers {
                suppressed: true,
                ..ScannedMembers::default()
            };
        }

        ScannedMembers {
            suppressed: false,
            messages: self.scan_messages(body, table),
            properties: self.scan_properties(body),
        }
    }

    fn scan_messages(&self, body: &str, table: &SignatureTable) -> Vec<MessageDescriptor> {
        let mut claimed = HashSet::new();
        let mut messages = Vec::new();

        for caps in self.message.captures_iter(body) {
            let Some(decl) = self.declaration(body, &caps, 1) else {
                continue;
            };
            if claimed.insert(decl.function.to_string()) {
                messages.push(MessageDescriptor::new(
                    decl.function,
                    decl.function,
                    parse_parameter_list(decl.params),
                    DiscoveryRule::Marker,
                ));
            }
        }

        for caps in self.named_message.captures_iter(body) {
            let Some(decl) = self.declaration(body, &caps, 2) else {
                continue;
            };
            let message = match caps[1].trim() {
                "" => decl.function,
                named => named,
            };
            if claimed.insert(decl.function.to_string()) {
                messages.push(MessageDescriptor::new(
                    message,
                    decl.function,
                    parse_parameter_list(decl.params),
                    DiscoveryRule::NamedMarker,
                ));
            }
        }

        for caps in self.bare_declaration.captures_iter(body) {
            let Some(decl) = self.declaration(body, &caps, 1) else {
                continue;
            };
            if claimed.contains(decl.function) {
                continue;
            }

            let params = parse_parameter_list(decl.params);
            if matches_signature(decl.function, &params, table) {
                claimed.insert(decl.function.to_string());
                messages.push(MessageDescriptor::new(
                    decl.function,
                    decl.function,
                    params,
                    DiscoveryRule::Signature,
                ));
            }
        }

        messages
    }

    /// Complete a `void Name(` match into a declaration.
    ///
    /// The match must end on the opening `(`; the parameter list runs to the
    /// matching `)`, which must be followed by optional specifiers and `;`.
    fn declaration<'a>(
        &self,
        body: &'a str,
        caps: &regex::Captures<'a>,
        function_group: usize,
    ) -> Option<Declaration<'a>> {
        let function = caps.get(function_group)?.as_str();
        let open = caps.get(0)?.end().checked_sub(1)?;
        let close = find_matching_paren(body, open)?;

        if !self.declaration_tail.is_match(&body[close + 1..]) {
            tracing::trace!(function, "not a plain declaration, ignored");
            return None;
        }

        Some(Declaration {
            function,
            params: &body[open + 1..close],
        })
    }

    fn scan_properties(&self, body: &str) -> Vec<PropertyDescriptor> {
        self.property
            .captures_iter(body)
            .map(|caps| PropertyDescriptor::new(&caps[2], normalize_type(&caps[1])))
            .collect()
    }
}
