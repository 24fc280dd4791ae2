//! Variable binding table sent with every recognition request.
//!
//! Assignment items from a response (`x = 5`) are recorded here and passed
//! back to the service on the next request so later expressions can use them.
//! The table lives for the whole session and is cleared only by reset.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::recognize::ResultItem;

/// Variable name → last evaluated value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableBindings(BTreeMap<String, String>);

impl VariableBindings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `value`, returning the value it replaced.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.0.insert(name.into(), value.into())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Record every assignment item, in order; a repeated name keeps the last value.
    ///
    /// Returns how many items were assignments.
    pub fn apply_assignments(&mut self, items: &[ResultItem]) -> usize {
        let mut applied = 0;
        for item in items.iter().filter(|i| i.is_assignment) {
            self.set(item.expression.as_str(), item.result.as_str());
            applied += 1;
        }
        applied
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Bindings in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

#[cfg(test)]
#[path = "bindings_test.rs"]
mod tests;
