//! Built-in descriptor templates.
//!
//! Templates are embedded in the binary and namespaced by packaging kind,
//! one template per destination filename. `swc` and `swf` modules share the
//! `.project` and `.actionScriptProperties` shapes but differ in natures and
//! in the third descriptor (`.flexLibProperties` vs `.flexProperties`).

const SWC_ACTION_SCRIPT_PROPERTIES: &str = include_str!("../../templates/swc/actionScriptProperties.tera");
const SWC_FLEX_LIB_PROPERTIES: &str = include_str!("../../templates/swc/flexLibProperties.tera");
const SWC_PROJECT: &str = include_str!("../../templates/swc/project.tera");

const SWF_ACTION_SCRIPT_PROPERTIES: &str = include_str!("../../templates/swf/actionScriptProperties.tera");
const SWF_FLEX_PROPERTIES: &str = include_str!("../../templates/swf/flexProperties.tera");
const SWF_PROJECT: &str = include_str!("../../templates/swf/project.tera");

/// Looks up the built-in template for a packaging namespace and destination
/// filename.
#[must_use]
pub fn builtin(kind: &str, destination: &str) -> Option<&'static str> {
    match (kind, destination) {
        ("swc", ".actionScriptProperties") => Some(SWC_ACTION_SCRIPT_PROPERTIES),
        ("swc", ".flexLibProperties") => Some(SWC_FLEX_LIB_PROPERTIES),
        ("swc", ".project") => Some(SWC_PROJECT),
        ("swf", ".actionScriptProperties") => Some(SWF_ACTION_SCRIPT_PROPERTIES),
        ("swf", ".flexProperties") => Some(SWF_FLEX_PROPERTIES),
        ("swf", ".project") => Some(SWF_PROJECT),
        _ => None,
    }
}
