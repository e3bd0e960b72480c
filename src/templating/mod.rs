//! Template-driven descriptor rendering.
//!
//! This module owns everything between the resolved build model and the
//! bytes of a descriptor file:
//!
//! - [`context`] - the [`DataModel`](context::DataModel) aggregate and its
//!   builder
//! - [`engine`] - the [`TemplateEngine`](engine::TemplateEngine) capability
//!   and the Tera-backed implementation
//! - [`builtins`] - embedded descriptor templates, namespaced by packaging
//!   kind
//! - [`error`] - structured render errors with location context

pub mod builtins;
pub mod context;
pub mod engine;
pub mod error;

pub use context::DataModel;
pub use engine::{TemplateEngine, TeraEngine};
pub use error::{ErrorLocation, TemplateError};
