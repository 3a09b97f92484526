//! Surrogate data fetched for a single memento.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Mapping from surrogate field name to its fetched value.
///
/// Returned by a surrogate data client for one resource URI and one requested
/// field set. Ephemeral: scoped to a single element's rendering. Fields the
/// service could not supply are simply absent.
///
/// # Examples
///
/// ```
/// use raintale_core::MementoData;
/// use serde_json::json;
///
/// let mut data = MementoData::default();
/// data.insert("title", json!("An Archived Page"));
/// assert_eq!(data.get("title"), Some(&json!("An Archived Page")));
/// assert_eq!(data.get("archive-favicon"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, derive_more::From)]
pub struct MementoData(HashMap<String, serde_json::Value>);

impl MementoData {
    /// Insert a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: serde_json::Value) {
        self.0.insert(field.into(), value);
    }

    /// Look up a field value.
    pub fn get(&self, field: &str) -> Option<&serde_json::Value> {
        self.0.get(field)
    }

    /// True when the service supplied no fields at all.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of supplied fields.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Borrow the underlying field map.
    pub fn fields(&self) -> &HashMap<String, serde_json::Value> {
        &self.0
    }
}
