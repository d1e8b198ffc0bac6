//! # Lacquer Tokens - Design-Token Generation Pipeline
//!
//! `lacquer-tokens` turns two JSON documents - a palette of primitive
//! values and a semantic token document with light/dark variants - into a
//! single generated stylesheet of CSS custom properties.
//!
//! ## Core Concepts
//!
//! - [`Palette`]: primitive, context-free values grouped by category
//! - [`SemanticDoc`]: named design values, each a literal or a
//!   `{palette.<group>.<token>}` reference, in `light` and `dark` variants
//! - [`Resolver`]: turns references into `var(...)` expressions, failing
//!   loudly on dangling references
//! - [`flatten`]: depth-first conversion of a variant tree into ordered
//!   [`FlatToken`]s
//! - [`render_stylesheet`] / [`generate_to_disk`]: the emitted artifact
//!
//! Emission order always mirrors source document order, so regenerating
//! from unchanged input is byte-identical.
//!
//! ## Quick Start
//!
//! ```rust
//! use lacquer_tokens::{flatten, Palette, Resolver, SemanticDoc};
//!
//! let palette = Palette::from_json(r##"{ "grey": { "50": "#fafafa" } }"##).unwrap();
//! let doc = SemanticDoc::from_json(
//!     r#"{ "light": { "surface": { "base": "{palette.grey.50}" } } }"#,
//! ).unwrap();
//!
//! let resolver = Resolver::new(&palette);
//! let tokens = flatten(doc.light(), &resolver).unwrap();
//!
//! assert_eq!(tokens[0].name, "--surface-base");
//! assert_eq!(tokens[0].value, "var(--grey-50)");
//! ```

pub mod emit;
pub mod error;
pub mod flatten;
pub mod palette;
pub mod pipeline;
pub mod resolve;
pub mod semantic;

pub use emit::{render_stylesheet, write_stylesheet};
pub use error::{Result, TokenError};
pub use flatten::{flatten, FlatToken};
pub use palette::{Palette, PaletteGroup};
pub use pipeline::{generate, generate_to_disk, GeneratedStylesheet, PipelineConfig};
pub use resolve::Resolver;
pub use semantic::{SemanticDoc, TokenNode, TokenValue};

/// Keys carrying authoring notes rather than tokens.
///
/// Applies at every nesting level of both documents; metadata keys are
/// never descended into and never emitted.
pub(crate) fn is_metadata_key(key: &str) -> bool {
    key.starts_with('_') || key.ends_with("_comment")
}

/// Human-readable JSON value kind for error messages.
pub(crate) fn value_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}
