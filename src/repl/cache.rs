//! Parsed-expression cache keyed by source text
//!
//! Re-entering an expression reuses its tree instead of parsing again. The
//! cache is flushed wholesale once it reaches capacity.

use crate::parser::ast::Expr;
use crate::parser::parse::{parse, ParseError};
use rustc_hash::FxHashMap;
use tracing::debug;

pub struct ParseCache {
    entries: FxHashMap<String, Expr>,
    capacity: usize,
    hits: usize,
}

impl ParseCache {
    pub fn new(capacity: usize) -> Self {
        ParseCache {
            entries: FxHashMap::default(),
            capacity,
            hits: 0,
        }
    }

    /// Return the tree for `source`, parsing it on first use.
    ///
    /// Failed parses are not cached.
    pub fn get_or_parse(&mut self, source: &str) -> Result<&Expr, ParseError> {
        if self.entries.contains_key(source) {
            self.hits += 1;
        } else {
            let expr = parse(source)?;
            if self.entries.len() >= self.capacity {
                debug!(capacity = self.capacity, "flushing parse cache");
                self.entries.clear();
            }
            self.entries.insert(source.to_string(), expr);
        }

        Ok(&self.entries[source])
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Lookups answered without parsing
    pub fn hits(&self) -> usize {
        self.hits
    }
}
