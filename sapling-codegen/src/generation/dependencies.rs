//! Dependency collection for a single render call.

use indexmap::IndexSet;

/// Tracks external module/package references and deduplicates them.
///
/// Maintains insertion order for deterministic output.
///
/// # Example
///
/// ```
/// use sapling_codegen::generation::DependencyCollector;
///
/// let mut deps = DependencyCollector::new();
/// deps.add("time");
/// deps.add("encoding/json");
/// deps.add("time");
///
/// assert_eq!(deps.into_vec(), ["time", "encoding/json"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DependencyCollector {
    deps: IndexSet<String>,
}

impl DependencyCollector {
    /// Create a new empty dependency collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dependency. Returns `false` if it was already present.
    pub fn add(&mut self, identifier: impl Into<String>) -> bool {
        self.deps.insert(identifier.into())
    }

    /// Check if the collector is empty.
    pub fn is_empty(&self) -> bool {
        self.deps.is_empty()
    }

    /// Get the number of dependencies.
    pub fn len(&self) -> usize {
        self.deps.len()
    }

    /// Consume the collector, returning dependencies in insertion order.
    pub fn into_vec(self) -> Vec<String> {
        self.deps.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut deps = DependencyCollector::new();
        assert!(deps.add("time"));
        assert!(!deps.add("time"));
        assert!(deps.add("fmt"));
        assert_eq!(deps.len(), 2);
        assert_eq!(deps.into_vec(), ["time", "fmt"]);
    }

    #[test]
    fn test_empty() {
        let deps = DependencyCollector::new();
        assert!(deps.is_empty());
        assert!(deps.into_vec().is_empty());
    }
}
