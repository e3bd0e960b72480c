//! Error handling for descriptor generation.
//!
//! Two layers, following the same split the rest of the crate's error
//! handling uses:
//! 1. [`GeneratorError`] - strongly typed failure cases for the host to
//!    match on
//! 2. [`ErrorContext`] - a display wrapper adding suggestions for the
//!    developer running the build
//!
//! Template-level failures carry their own structured type
//! ([`crate::templating::TemplateError`]) and are wrapped into
//! [`GeneratorError::RenderFailed`] at the generation boundary.

use colored::Colorize;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

use crate::templating::TemplateError;

/// The main error type for descriptor generation.
///
/// Input absence (missing source directories, missing entry point) never
/// produces an error; those degrade to empty values during data model
/// construction. Everything here is fatal to the generation run.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// No built-in template is registered for this packaging and filename.
    #[error("No '{name}' template registered for packaging '{kind}'")]
    TemplateNotFound {
        /// Packaging namespace that was searched (e.g. "swc")
        kind: String,
        /// Destination filename the template maps to (e.g. ".project")
        name: String,
    },

    /// The template engine rejected a template or the data model.
    #[error("Failed to render template '{name}'")]
    RenderFailed {
        /// Destination filename of the failing template
        name: String,
        #[source]
        source: TemplateError,
    },

    /// A rendered descriptor could not be written to the module directory.
    #[error("Failed to write descriptor: {}", path.display())]
    DescriptorWrite {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// A qualifying external dependency carried no backing file.
    ///
    /// The host contract guarantees externally resolved artifacts have a
    /// file location; hitting this means the dependency list handed over by
    /// the host is inconsistent.
    #[error("Artifact '{id}' was resolved without a backing file")]
    MissingArtifactFile {
        /// `group:artifact:version` of the offending dependency
        id: String,
    },

    /// Generator configuration could not be read.
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Wraps a [`GeneratorError`] with user-facing guidance.
#[derive(Debug)]
pub struct ErrorContext {
    pub error: GeneratorError,
    pub suggestion: Option<String>,
    pub details: Option<String>,
}

impl ErrorContext {
    #[must_use]
    pub fn new(error: GeneratorError) -> Self {
        Self {
            error,
            suggestion: None,
            details: None,
        }
    }

    #[must_use]
    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }

    #[must_use]
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Prints the error to stderr with colored sections.
    pub fn display(&self) {
        eprintln!("{} {}", "error:".red().bold(), self.error);

        if let Some(details) = &self.details {
            eprintln!("\n{details}");
        }

        if let Some(suggestion) = &self.suggestion {
            eprintln!("\n{} {}", "suggestion:".yellow().bold(), suggestion);
        }
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\n{details}")?;
        }
        if let Some(suggestion) = &self.suggestion {
            write!(f, "\nSuggestion: {suggestion}")?;
        }
        Ok(())
    }
}

/// Converts a [`GeneratorError`] into an [`ErrorContext`] with an
/// actionable suggestion where one exists.
#[must_use]
pub fn user_friendly_error(error: GeneratorError) -> ErrorContext {
    let (suggestion, details) = match &error {
        GeneratorError::RenderFailed { source, .. } => (
            Some("Fix the template or the variable reference and rerun the build".to_string()),
            Some(source.format_with_context()),
        ),
        GeneratorError::DescriptorWrite { path, .. } => (
            Some(format!(
                "Check write permissions for {}",
                path.parent().map_or_else(|| path.display().to_string(), |p| p.display().to_string())
            )),
            None,
        ),
        GeneratorError::MissingArtifactFile { .. } => (
            Some(
                "The host resolved this dependency without a file location; rerun the build with dependency resolution enabled"
                    .to_string(),
            ),
            None,
        ),
        GeneratorError::Config { .. } | GeneratorError::Toml(_) => {
            (Some("Check the generator configuration file for syntax errors".to_string()), None)
        }
        _ => (None, None),
    };

    let mut context = ErrorContext::new(error);
    if let Some(suggestion) = suggestion {
        context = context.with_suggestion(suggestion);
    }
    if let Some(details) = details {
        context = context.with_details(details);
    }
    context
}
