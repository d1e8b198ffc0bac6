//! The palette store: primitive, context-free color and number values.
//!
//! A palette document is a two-level JSON object mapping group names to
//! token names to literals:
//!
//! ```json
//! {
//!   "grey": { "50": "#fafafa", "900": "#212121" },
//!   "brand": { "primary": "#6200ee" }
//! }
//! ```
//!
//! Group and token order is preserved from the source document and governs
//! the order of emitted declarations. Keys starting with `_` or ending in
//! `_comment` are authoring metadata and are dropped at load time.

use std::collections::HashSet;
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, TokenError};
use crate::{is_metadata_key, value_kind};

/// One named group of primitive tokens, in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteGroup {
    name: String,
    entries: Vec<(String, String)>,
}

impl PaletteGroup {
    /// The group's key in the source document, e.g. `grey`.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Token name/value pairs in source order. Numeric literals have been
    /// stringified.
    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }
}

/// The full palette document.
///
/// Loaded once per generation run and never mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Palette {
    groups: Vec<PaletteGroup>,
}

impl Palette {
    /// Loads a palette from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TokenError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Loads a palette from in-memory JSON.
    pub fn from_json(content: &str) -> Result<Self> {
        Self::parse(content, "palette document")
    }

    fn parse(content: &str, origin: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(content).map_err(|e| TokenError::Parse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;

        let Value::Object(groups) = root else {
            return Err(TokenError::Structure {
                origin: origin.to_string(),
                message: "expected a top-level object of palette groups".to_string(),
            });
        };

        let mut out = Vec::new();
        for (group_name, group_value) in groups {
            if is_metadata_key(&group_name) {
                continue;
            }
            let Value::Object(tokens) = group_value else {
                return Err(TokenError::Structure {
                    origin: origin.to_string(),
                    message: format!("palette group '{}' must be an object", group_name),
                });
            };

            let mut entries = Vec::new();
            for (token_name, value) in tokens {
                if is_metadata_key(&token_name) {
                    continue;
                }
                let literal = match value {
                    Value::String(s) => s,
                    Value::Number(n) => n.to_string(),
                    other => {
                        return Err(TokenError::InvalidValue {
                            path: format!("{}.{}", group_name, token_name),
                            kind: value_kind(&other),
                        })
                    }
                };
                entries.push((token_name, literal));
            }
            out.push(PaletteGroup {
                name: group_name,
                entries,
            });
        }

        Ok(Self { groups: out })
    }

    /// Palette groups in source order.
    pub fn groups(&self) -> &[PaletteGroup] {
        &self.groups
    }

    /// Total number of palette entries across all groups.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.entries.len()).sum()
    }

    /// True when the palette defines no entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The set of valid `group.token` keys, used by the resolver.
    pub fn key_set(&self) -> HashSet<String> {
        self.groups
            .iter()
            .flat_map(|g| {
                g.entries
                    .iter()
                    .map(move |(token, _)| format!("{}.{}", g.name, token))
            })
            .collect()
    }

    /// The custom-property name generated for a palette entry.
    pub fn var_name(group: &str, token: &str) -> String {
        format!("--{}-{}", group, token)
    }
}
