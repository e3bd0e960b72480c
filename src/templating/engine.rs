//! Template engine abstraction and the Tera implementation.
//!
//! The generation driver only depends on [`TemplateEngine`], a single-method
//! capability, so it can be exercised in tests with a stub that records
//! calls instead of rendering.

use regex::Regex;
use std::io::Write;
use strsim::levenshtein;
use tera::Tera;

use super::context::DataModel;
use super::error::{ErrorLocation, TemplateError};

/// Maximum Levenshtein distance, as a percentage of the misspelled name's
/// length, for a variable to be offered as a suggestion.
const SIMILARITY_THRESHOLD_PERCENT: usize = 50;

/// The closed variable contract descriptor templates bind to.
const TEMPLATE_VARIABLES: &[&str] = &[
    "project.groupId",
    "project.artifactId",
    "project.version",
    "project.packaging",
    "project.basedir",
    "project.build.directory",
    "project.build.finalName",
    "dependencies",
    "sources",
    "mainApplication",
    "configXml",
];

/// Renders one named template against a data model into an output sink.
pub trait TemplateEngine {
    /// Renders `content` (the template mapping to destination `name`)
    /// against `model`, writing the result to `sink`.
    ///
    /// # Errors
    ///
    /// Returns a [`TemplateError`] when the template is malformed,
    /// references an unknown variable, or the sink rejects the output.
    fn render(
        &self,
        name: &str,
        content: &str,
        model: &DataModel,
        sink: &mut dyn Write,
    ) -> Result<(), TemplateError>;
}

/// Tera-backed engine.
///
/// A fresh `Tera` instance is created per render; the instances are empty
/// and cheap, and descriptor sets are three templates per run.
#[derive(Debug, Default)]
pub struct TeraEngine;

impl TeraEngine {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl TemplateEngine for TeraEngine {
    fn render(
        &self,
        name: &str,
        content: &str,
        model: &DataModel,
        sink: &mut dyn Write,
    ) -> Result<(), TemplateError> {
        let context = model
            .to_context()
            .map_err(|err| TemplateError::Serialize { message: err.to_string() })?;

        tracing::debug!(template = name, "rendering descriptor template");
        log_model_as_kv(model);

        let mut tera = Tera::default();
        let rendered = tera
            .render_str(content, &context)
            .map_err(|err| parse_tera_error(&err, name, content))?;

        sink.write_all(rendered.as_bytes()).map_err(|source| TemplateError::Sink { source })?;
        Ok(())
    }
}

/// Logs the data model at trace level, one line per entry.
fn log_model_as_kv(model: &DataModel) {
    if !tracing::enabled!(tracing::Level::TRACE) {
        return;
    }
    if let Ok(json) = serde_json::to_string_pretty(model) {
        for line in json.lines() {
            tracing::trace!("{line}");
        }
    }
}

/// Parses a Tera error into a structured [`TemplateError`].
fn parse_tera_error(error: &tera::Error, template: &str, content: &str) -> TemplateError {
    let line_number = extract_line_from_tera_error(error);
    let context_lines = line_number.and_then(|line| {
        let lines = extract_context_lines(content, line, 2);
        if lines.is_empty() { None } else { Some(lines) }
    });

    let location = ErrorLocation {
        template: template.to_string(),
        line_number,
        context_lines,
    };

    let message = format_tera_error(error);
    if let Some(variable) = extract_variable_name(&message) {
        let available_variables: Vec<String> =
            TEMPLATE_VARIABLES.iter().map(ToString::to_string).collect();
        let suggestions = find_similar_variables(&variable, &available_variables);
        return TemplateError::VariableNotFound {
            variable,
            available_variables,
            suggestions,
            location,
        };
    }

    TemplateError::SyntaxError { message, location }
}

/// Extracts a variable name from a "Variable `foo` not found" message.
fn extract_variable_name(error_msg: &str) -> Option<String> {
    let re = Regex::new(r"Variable `([^`]+)` not found").ok()?;
    if let Some(caps) = re.captures(error_msg) {
        return caps.get(1).map(|m| m.as_str().to_string());
    }
    None
}

/// Finds contract variables close to a misspelled name.
fn find_similar_variables(target: &str, available: &[String]) -> Vec<String> {
    let mut scored: Vec<_> =
        available.iter().map(|var| (var.clone(), levenshtein(target, var))).collect();

    scored.sort_by_key(|(_, dist)| *dist);

    scored
        .into_iter()
        .filter(|(_, dist)| *dist <= target.len() * SIMILARITY_THRESHOLD_PERCENT / 100)
        .take(3)
        .map(|(var, _)| var)
        .collect()
}

/// Extracts the lines surrounding an error location (1-indexed).
fn extract_context_lines(content: &str, error_line: usize, context_size: usize) -> Vec<(usize, String)> {
    let lines: Vec<&str> = content.lines().collect();
    let total_lines = lines.len();

    if error_line == 0 || error_line > total_lines {
        return Vec::new();
    }

    let start = error_line.saturating_sub(context_size + 1);
    let end = (error_line + context_size).min(total_lines);

    lines[start..end]
        .iter()
        .enumerate()
        .map(|(idx, line)| (start + idx + 1, (*line).to_string()))
        .collect()
}

/// Extracts a line number from a Tera error message (Tera embeds `line:col`
/// positions in parse errors).
fn extract_line_from_tera_error(error: &tera::Error) -> Option<usize> {
    let error_msg = format!("{error:?}");

    let re = Regex::new(r"(\d+):(\d+)").ok()?;
    if let Some(caps) = re.captures(&error_msg) {
        return caps.get(1)?.as_str().parse::<usize>().ok();
    }
    None
}

/// Walks the Tera error chain and joins the useful messages, filtering out
/// the internal `__tera_one_off` template name.
fn format_tera_error(error: &tera::Error) -> String {
    use std::error::Error;

    let mut messages = Vec::new();

    let mut all_messages = vec![error.to_string()];
    let mut current: Option<&dyn Error> = error.source();
    while let Some(err) = current {
        all_messages.push(err.to_string());
        current = err.source();
    }

    for msg in all_messages {
        let cleaned = msg
            .replace("while rendering '__tera_one_off'", "")
            .replace("Failed to render '__tera_one_off'", "Template rendering failed")
            .replace("Failed to parse '__tera_one_off'", "Template syntax error")
            .replace("'__tera_one_off'", "template")
            .trim()
            .to_string();

        if !cleaned.is_empty()
            && cleaned != "Template rendering failed"
            && cleaned != "Template syntax error"
        {
            messages.push(cleaned);
        }
    }

    if messages.is_empty() {
        "Template syntax error".to_string()
    } else {
        messages.join("\n  -> ")
    }
}
