//! Structured template error handling.
//!
//! Render failures abort the whole generation run, so the error carries
//! enough context (template, line, surrounding lines, suggestions) for the
//! developer to fix the template without re-running under a debugger.

/// Template errors with detailed context.
#[derive(Debug)]
pub enum TemplateError {
    /// The template referenced a variable the data model does not expose.
    VariableNotFound {
        variable: String,
        available_variables: Vec<String>,
        suggestions: Vec<String>,
        location: ErrorLocation,
    },

    /// The template itself is malformed.
    SyntaxError {
        message: String,
        location: ErrorLocation,
    },

    /// The data model could not be serialized into a render context.
    Serialize { message: String },

    /// Writing rendered output into the sink failed.
    Sink { source: std::io::Error },
}

/// Location information for template errors.
#[derive(Debug, Clone, Default)]
pub struct ErrorLocation {
    /// Destination filename of the template being rendered
    pub template: String,
    /// Line number if available from the engine
    pub line_number: Option<usize>,
    /// Lines surrounding the error, with 1-indexed line numbers
    pub context_lines: Option<Vec<(usize, String)>>,
}

impl std::fmt::Display for TemplateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::VariableNotFound { variable, .. } => {
                write!(f, "Template variable not found: '{variable}'")
            }
            Self::SyntaxError { message, .. } => {
                write!(f, "Template syntax error: {message}")
            }
            Self::Serialize { message } => {
                write!(f, "Failed to build template context: {message}")
            }
            Self::Sink { source } => {
                write!(f, "Failed to write rendered output: {source}")
            }
        }
    }
}

impl std::error::Error for TemplateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Sink { source } => Some(source),
            _ => None,
        }
    }
}

impl TemplateError {
    /// Generates a multi-line message with context and suggestions.
    #[must_use]
    pub fn format_with_context(&self) -> String {
        match self {
            Self::VariableNotFound {
                variable,
                available_variables,
                suggestions,
                location,
            } => format_variable_not_found(variable, available_variables, suggestions, location),
            Self::SyntaxError { message, location } => format_syntax_error(message, location),
            Self::Serialize { message } => {
                format!("ERROR: Failed to build template context\n\n{message}\n")
            }
            Self::Sink { source } => {
                format!("ERROR: Failed to write rendered output\n\n{source}\n")
            }
        }
    }
}

fn format_variable_not_found(
    variable: &str,
    available_variables: &[String],
    suggestions: &[String],
    location: &ErrorLocation,
) -> String {
    let mut msg = String::new();

    msg.push_str("ERROR: Template Variable Not Found\n\n");
    msg.push_str(&format!("Variable: {variable}\n"));
    msg.push_str(&format!("Template: {}\n", location.template));

    if let Some(line) = location.line_number {
        msg.push_str(&format!("Line: {line}\n"));
    }
    msg.push('\n');

    push_context_lines(&mut msg, location);

    if !suggestions.is_empty() {
        msg.push_str("Did you mean one of these?\n");
        for suggestion in suggestions {
            msg.push_str(&format!("  - {suggestion}\n"));
        }
        msg.push('\n');
    }

    if !available_variables.is_empty() {
        msg.push_str("Variables available to descriptor templates:\n");
        for var in available_variables {
            msg.push_str(&format!("  {var}\n"));
        }
        msg.push('\n');
    }

    msg
}

fn format_syntax_error(message: &str, location: &ErrorLocation) -> String {
    let mut msg = String::new();

    msg.push_str("ERROR: Template Syntax Error\n\n");
    msg.push_str(&format!("Error: {message}\n"));
    msg.push_str(&format!("Template: {}\n", location.template));

    if let Some(line) = location.line_number {
        msg.push_str(&format!("Line: {line}\n"));
    }
    msg.push('\n');

    push_context_lines(&mut msg, location);

    msg.push_str("SUGGESTION: Check template syntax for unclosed tags or invalid expressions.\n");
    msg.push_str("Common issues:\n");
    msg.push_str("  - Unclosed {{ }} or {% %} delimiters\n");
    msg.push_str("  - Invalid filter names\n");
    msg.push_str("  - Missing quotes around string values\n\n");

    msg
}

fn push_context_lines(msg: &mut String, location: &ErrorLocation) {
    let Some(lines) = &location.context_lines else {
        return;
    };
    let error_line = location.line_number.unwrap_or(0);

    for (number, line) in lines {
        let marker = if *number == error_line { ">" } else { " " };
        msg.push_str(&format!("{marker} {number:>4} | {line}\n"));
    }
    msg.push('\n');
}
