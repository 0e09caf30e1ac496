//! Template rendering module.
//!
//! The deterministic half of the pipeline: compile a user-authored pattern
//! with named capture groups, run it against the character data block and
//! substitute every `$<Name>` placeholder in the HTML template with the
//! captured value. All failure modes (bad pattern, no match) are reported as
//! flags on the outcome rather than errors, so callers can keep showing the
//! untouched template.

pub mod cleaner;
pub mod renderer;

pub use cleaner::{extract_json_object, strip_code_fences};
pub use renderer::{placeholder_keys, render, substitute, RenderError, RenderOutcome};
