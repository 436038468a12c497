// SPDX-License-Identifier: MIT

//! Token substitution for string comparison
//!
//! String operands configured on a condition may contain runtime tokens like
//! `{player}` that the embedding game expands when rendering text. The same
//! expansion has to run before a string compare, so the comparison sees what
//! the player sees. The expander is injected at the call seam; this crate
//! ships an identity implementation and a flat-table one.

use std::collections::HashMap;

/// Expands runtime tokens in text before string comparison.
pub trait TokenExpander {
    fn expand(&self, text: &str) -> String;
}

/// Identity expander for embedders without a token system.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopExpander;

impl TokenExpander for NoopExpander {
    fn expand(&self, text: &str) -> String {
        text.to_string()
    }
}

/// Expands `{tag}` occurrences from a flat token table.
///
/// Unknown tags are left untouched, including their braces.
#[derive(Debug, Clone, Default)]
pub struct MapExpander {
    tokens: HashMap<String, String>,
}

impl MapExpander {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a token; `expand` replaces `{tag}` with `value`.
    pub fn insert(&mut self, tag: impl Into<String>, value: impl Into<String>) {
        self.tokens.insert(tag.into(), value.into());
    }
}

impl TokenExpander for MapExpander {
    fn expand(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;

        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            match rest[open..].find('}') {
                Some(close) => {
                    let tag = &rest[open + 1..open + close];
                    match self.tokens.get(tag) {
                        Some(value) => out.push_str(value),
                        None => out.push_str(&rest[open..open + close + 1]),
                    }
                    rest = &rest[open + close + 1..];
                }
                None => {
                    // Unterminated brace, emit as-is
                    out.push_str(&rest[open..]);
                    rest = "";
                }
            }
        }
        out.push_str(rest);
        out
    }
}
