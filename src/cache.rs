//! Memoised [`CompiledFormat`]s.
//!
//! A template is compiled once per distinct list of argument kinds. Entries
//! are handed out as `Arc`, so a compiled format can outlive the cache and be
//! rendered from several threads.

use std::sync::Arc;

use log::debug;

use crate::FastHashMap;
use crate::Result;
use crate::argument::ArgKind;
use crate::format::{CompiledFormat, compile_with_options};
use crate::options::FormatOptions;

/// Cache of compiled templates, keyed by template text and argument kinds.
#[derive(Debug, Default)]
pub struct FormatCache {
    entries: FastHashMap<Box<str>, Vec<Arc<CompiledFormat>>>,
    options: FormatOptions,
}

impl FormatCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cache that compiles every entry with `options`.
    pub fn with_options(options: FormatOptions) -> Self {
        Self {
            entries: FastHashMap::default(),
            options,
        }
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Returns the compiled format for `template` and `kinds`, compiling it
    /// on first use.
    ///
    /// Compilation errors are returned and not cached.
    pub fn get_or_compile(&mut self, template: &str, kinds: &[ArgKind]) -> Result<Arc<CompiledFormat>> {
        if let Some(hit) = self
            .entries
            .get(template)
            .and_then(|variants| variants.iter().find(|c| c.kinds() == kinds))
        {
            return Ok(Arc::clone(hit));
        }

        debug!("format cache miss: {template:?} with {} argument kinds", kinds.len());
        let compiled = Arc::new(compile_with_options(template, kinds, &self.options)?);
        self.entries
            .entry(template.into())
            .or_default()
            .push(Arc::clone(&compiled));
        Ok(compiled)
    }

    /// Number of compiled (template, kinds) entries.
    pub fn len(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
