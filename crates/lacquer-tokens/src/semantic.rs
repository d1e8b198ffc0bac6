//! The semantic token document: light and dark theme variants.
//!
//! A semantic document declares up to two top-level variants. `light` is
//! required and defines the full default token set; `dark` is optional and
//! only overrides the variables it declares (the override happens at
//! consumption time in the browser, never by merging here).
//!
//! ```json
//! {
//!   "light": {
//!     "surface": { "base": "{palette.grey.50}" },
//!     "overlay": "rgba(0, 0, 0, 0.4)"
//!   },
//!   "dark": {
//!     "surface": { "base": "{palette.grey.900}" }
//!   }
//! }
//! ```
//!
//! Each variant is validated at load into a typed tree of groups and
//! leaves, so the rest of the pipeline never touches raw JSON. Leaf values
//! are classified once: strings matching `{palette.<group>.<token>}` become
//! references, all other strings stay literal CSS values, numbers keep
//! their textual form. Anything else (booleans, arrays, null) is a load
//! error naming the offending path.

use std::path::Path;

use serde_json::Value;

use crate::error::{Result, TokenError};
use crate::resolve::parse_reference;
use crate::{is_metadata_key, value_kind};

/// A leaf value, classified at load time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenValue {
    /// A literal CSS value, emitted verbatim (e.g. `transparent`).
    Literal(String),
    /// A numeric literal, kept in its source textual form.
    Number(String),
    /// A symbolic reference into the palette.
    Reference { group: String, token: String },
}

/// One node of a variant's token tree.
///
/// Groups keep their children as ordered pairs; nothing in the pipeline
/// sorts them, so source order flows through to the stylesheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenNode {
    Group(Vec<(String, TokenNode)>),
    Value(TokenValue),
}

/// A parsed semantic token document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SemanticDoc {
    light: TokenNode,
    dark: Option<TokenNode>,
}

impl SemanticDoc {
    /// Loads a semantic document from a JSON file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| TokenError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Loads a semantic document from in-memory JSON.
    pub fn from_json(content: &str) -> Result<Self> {
        Self::parse(content, "semantic document")
    }

    fn parse(content: &str, origin: &str) -> Result<Self> {
        let root: Value = serde_json::from_str(content).map_err(|e| TokenError::Parse {
            origin: origin.to_string(),
            message: e.to_string(),
        })?;

        let Value::Object(variants) = root else {
            return Err(TokenError::Structure {
                origin: origin.to_string(),
                message: "expected a top-level object of theme variants".to_string(),
            });
        };

        let mut light = None;
        let mut dark = None;
        for (name, value) in variants {
            if is_metadata_key(&name) {
                continue;
            }
            let tree = Self::build_variant(&name, value, origin)?;
            match name.as_str() {
                "light" => light = Some(tree),
                "dark" => dark = Some(tree),
                _ => return Err(TokenError::UnknownVariant(name)),
            }
        }

        let light = light.ok_or(TokenError::MissingVariant("light"))?;
        Ok(Self { light, dark })
    }

    fn build_variant(name: &str, value: Value, origin: &str) -> Result<TokenNode> {
        if !value.is_object() {
            return Err(TokenError::Structure {
                origin: origin.to_string(),
                message: format!("variant \"{}\" must be an object", name),
            });
        }
        let mut path = Vec::new();
        build_node(value, &mut path)
    }

    /// The required default variant.
    pub fn light(&self) -> &TokenNode {
        &self.light
    }

    /// The optional override variant.
    pub fn dark(&self) -> Option<&TokenNode> {
        self.dark.as_ref()
    }
}

fn build_node(value: Value, path: &mut Vec<String>) -> Result<TokenNode> {
    match value {
        Value::Object(map) => {
            let mut children = Vec::new();
            for (key, child) in map {
                if is_metadata_key(&key) {
                    continue;
                }
                path.push(key);
                let node = build_node(child, path)?;
                let key = path.pop().unwrap_or_default();
                children.push((key, node));
            }
            Ok(TokenNode::Group(children))
        }
        Value::String(s) => {
            let value = match parse_reference(&s) {
                Some((group, token)) => TokenValue::Reference { group, token },
                None => TokenValue::Literal(s),
            };
            Ok(TokenNode::Value(value))
        }
        Value::Number(n) => Ok(TokenNode::Value(TokenValue::Number(n.to_string()))),
        other => Err(TokenError::InvalidValue {
            path: path.join("."),
            kind: value_kind(&other),
        }),
    }
}
