//! Cached output of the last successful generation

use parking_lot::RwLock;
use std::sync::Arc;

/// Rendered JSON of the most recent successful generation.
///
/// Clones share the same slot. Writes are last-writer-wins.
#[derive(Debug, Clone, Default)]
pub struct CachedOutput {
    inner: Arc<RwLock<Option<String>>>,
}

impl CachedOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the cached text
    pub fn store(&self, text: String) {
        *self.inner.write() = Some(text);
    }

    /// Copy of the cached text, if any generation has succeeded
    pub fn get(&self) -> Option<String> {
        self.inner.read().clone()
    }

    pub fn is_present(&self) -> bool {
        self.inner.read().is_some()
    }
}
