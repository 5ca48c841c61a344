//! Query parameter construction for the content service.
//!
//! # Conventions
//! ```text
//! filter[field]=value            equality filter
//! filter[rel][field]=value       filter through a relation (any depth)
//! sort=field / sort=-field       ascending / descending
//! fields=*,rel.*                 field selection, including nested records
//! ```
//!
//! Parameters keep insertion order so the outbound query string is
//! deterministic for a given route.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A sort expression: a field name, optionally descending.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Sort {
    field: String,
    descending: bool,
}

impl Sort {
    pub fn ascending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: false,
        }
    }

    pub fn descending(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            descending: true,
        }
    }

    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn is_descending(&self) -> bool {
        self.descending
    }
}

impl fmt::Display for Sort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.descending {
            write!(f, "-{}", self.field)
        } else {
            write!(f, "{}", self.field)
        }
    }
}

/// Error returned when a sort expression has no field name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid sort expression '{0}'")]
pub struct InvalidSort(pub String);

impl TryFrom<String> for Sort {
    type Error = InvalidSort;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        let (field, descending) = match trimmed.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (trimmed, false),
        };
        if field.is_empty() || field.starts_with('-') || field.contains(char::is_whitespace) {
            return Err(InvalidSort(value));
        }
        Ok(Self {
            field: field.to_string(),
            descending,
        })
    }
}

impl From<Sort> for String {
    fn from(sort: Sort) -> Self {
        sort.to_string()
    }
}

/// Ordered set of query parameters for one collection request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, String)>,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the `sort` parameter.
    pub fn sort(mut self, sort: &Sort) -> Self {
        self.set("sort", sort.to_string());
        self
    }

    /// Set the `fields` selector.
    pub fn fields(mut self, selector: impl Into<String>) -> Self {
        self.set("fields", selector.into());
        self
    }

    /// Add an equality filter on a (possibly nested) field path.
    ///
    /// `filter(&["squads", "squad_id", "name"], "1I")` becomes
    /// `filter[squads][squad_id][name]=1I`.
    pub fn filter(mut self, path: &[&str], value: impl Into<String>) -> Self {
        let key = path.iter().fold(String::from("filter"), |mut key, segment| {
            key.push('[');
            key.push_str(segment);
            key.push(']');
            key
        });
        self.set(&key, value.into());
        self
    }

    /// Look up a parameter value by its full key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.params
    }

    // Later values for the same key replace earlier ones in place.
    fn set(&mut self, key: &str, value: String) {
        match self.params.iter_mut().find(|(k, _)| k == key) {
            Some(slot) => slot.1 = value,
            None => self.params.push((key.to_string(), value)),
        }
    }
}
