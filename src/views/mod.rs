//! View layer.
//!
//! Route handlers hand a `Template` and a `ViewModel` (named values) to a
//! `Renderer`, which produces the HTML body. The renderer is a seam: the
//! site ships `HtmlRenderer`, tests swap in one that records what it was
//! given.

pub mod html;

use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;
use thiserror::Error;

pub use html::HtmlRenderer;

/// Pages the site can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// Person overview (all listing routes).
    Index,
    /// Single person detail.
    Student,
    /// Message board.
    Messages,
}

impl Template {
    pub fn name(self) -> &'static str {
        match self {
            Template::Index => "index",
            Template::Student => "student",
            Template::Messages => "messages",
        }
    }
}

impl fmt::Display for Template {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors raised while building a view-model or rendering it.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to serialize view-model value '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("template '{0}' failed: {1}")]
    Template(Template, String),
}

/// Named values passed from a route handler to the renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ViewModel(Map<String, Value>);

impl ViewModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `key` to the serialized form of `value`.
    pub fn with<T: Serialize + ?Sized>(mut self, key: &str, value: &T) -> Result<Self, RenderError> {
        let value = serde_json::to_value(value).map_err(|source| RenderError::Serialize {
            key: key.to_string(),
            source,
        })?;
        self.0.insert(key.to_string(), value);
        Ok(self)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }
}

/// Turns a view-model into an HTML document.
pub trait Renderer: Send + Sync + 'static {
    fn render(&self, template: Template, model: &ViewModel) -> Result<String, RenderError>;
}
