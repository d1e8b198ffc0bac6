//! Flattening a token tree into ordered custom-property declarations.

use crate::error::Result;
use crate::resolve::Resolver;
use crate::semantic::TokenNode;

/// One emitted custom property, e.g. `--surface-base: var(--grey-50);`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatToken {
    /// Dash-joined name with the `--` prefix.
    pub name: String,
    /// Resolved CSS value.
    pub value: String,
}

/// Flattens a variant tree depth-first, resolving each leaf through
/// `resolver`.
///
/// Output order follows the source document's key order exactly; this is
/// part of the generator's contract (regeneration from unchanged input is
/// byte-identical).
///
/// # Errors
///
/// Fails on the first unresolvable palette reference, identifying the
/// offending semantic path.
pub fn flatten(root: &TokenNode, resolver: &Resolver) -> Result<Vec<FlatToken>> {
    let mut out = Vec::new();
    let mut segments = Vec::new();
    flatten_into(root, resolver, &mut segments, &mut out)?;
    Ok(out)
}

fn flatten_into<'a>(
    node: &'a TokenNode,
    resolver: &Resolver,
    segments: &mut Vec<&'a str>,
    out: &mut Vec<FlatToken>,
) -> Result<()> {
    match node {
        TokenNode::Group(children) => {
            for (key, child) in children {
                segments.push(key);
                flatten_into(child, resolver, segments, out)?;
                segments.pop();
            }
            Ok(())
        }
        TokenNode::Value(value) => {
            let value = resolver.resolve(value, &segments.join("."))?;
            out.push(FlatToken {
                name: format!("--{}", segments.join("-")),
                value,
            });
            Ok(())
        }
    }
}
