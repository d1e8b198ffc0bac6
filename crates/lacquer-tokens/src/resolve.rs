//! Resolving semantic token values against the palette.
//!
//! References use the grammar `{palette.<group>.<token>}`. A reference to
//! an entry the palette actually defines resolves to a `var(...)`
//! expression pointing at the generated palette variable; a reference to a
//! missing entry is a fatal error carrying the semantic path it came from.
//! Strings that do not match the grammar are plain CSS values and pass
//! through untouched.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, TokenError};
use crate::palette::Palette;
use crate::semantic::TokenValue;

static REFERENCE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\{palette\.([A-Za-z0-9_-]+)\.([A-Za-z0-9_-]+)\}$").expect("valid pattern")
});

/// Parses a string against the reference grammar.
pub(crate) fn parse_reference(value: &str) -> Option<(String, String)> {
    REFERENCE
        .captures(value)
        .map(|caps| (caps[1].to_string(), caps[2].to_string()))
}

/// Resolves token values using the palette's precomputed key set.
#[derive(Debug, Clone)]
pub struct Resolver {
    keys: HashSet<String>,
}

impl Resolver {
    /// Builds a resolver over the given palette.
    pub fn new(palette: &Palette) -> Self {
        Self {
            keys: palette.key_set(),
        }
    }

    /// Returns the CSS value for a leaf token.
    ///
    /// `path` is the dot-joined semantic path of the leaf, used only for
    /// error reporting.
    ///
    /// # Errors
    ///
    /// [`TokenError::UnresolvedReference`] when a reference names a palette
    /// entry that does not exist.
    pub fn resolve(&self, value: &TokenValue, path: &str) -> Result<String> {
        match value {
            TokenValue::Literal(s) => Ok(s.clone()),
            TokenValue::Number(n) => Ok(n.clone()),
            TokenValue::Reference { group, token } => {
                let key = format!("{}.{}", group, token);
                if self.keys.contains(&key) {
                    Ok(format!("var({})", Palette::var_name(group, token)))
                } else {
                    Err(TokenError::UnresolvedReference {
                        path: path.to_string(),
                        reference: key,
                    })
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn test_palette() -> Palette {
        Palette::from_json(r##"{ "grey": { "50": "#fafafa", "900": "#212121" } }"##).unwrap()
    }

    #[test]
    fn test_parse_reference_accepts_grammar() {
        assert_eq!(
            parse_reference("{palette.grey.50}"),
            Some(("grey".to_string(), "50".to_string()))
        );
        assert_eq!(
            parse_reference("{palette.brand-x.primary_light}"),
            Some(("brand-x".to_string(), "primary_light".to_string()))
        );
    }

    #[test]
    fn test_parse_reference_rejects_non_references() {
        assert_eq!(parse_reference("transparent"), None);
        assert_eq!(parse_reference("rgba(0,0,0,0.4)"), None);
        assert_eq!(parse_reference("{palette.grey}"), None);
        assert_eq!(parse_reference("{theme.grey.50}"), None);
        assert_eq!(parse_reference("x{palette.grey.50}"), None);
    }

    #[test]
    fn test_resolve_reference_to_var_expression() {
        let resolver = Resolver::new(&test_palette());
        let value = TokenValue::Reference {
            group: "grey".to_string(),
            token: "50".to_string(),
        };
        assert_eq!(
            resolver.resolve(&value, "surface.base").unwrap(),
            "var(--grey-50)"
        );
    }

    #[test]
    fn test_resolve_missing_reference_names_path() {
        let resolver = Resolver::new(&test_palette());
        let value = TokenValue::Reference {
            group: "grey".to_string(),
            token: "950".to_string(),
        };
        let err = resolver.resolve(&value, "surface.base.container").unwrap_err();
        match err {
            TokenError::UnresolvedReference { path, reference } => {
                assert_eq!(path, "surface.base.container");
                assert_eq!(reference, "grey.950");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_literals_and_numbers_pass_through() {
        let resolver = Resolver::new(&test_palette());
        assert_eq!(
            resolver
                .resolve(&TokenValue::Literal("transparent".to_string()), "x")
                .unwrap(),
            "transparent"
        );
        assert_eq!(
            resolver
                .resolve(&TokenValue::Number("1300".to_string()), "x")
                .unwrap(),
            "1300"
        );
    }

    proptest! {
        /// Any literal survives resolution byte-for-byte.
        #[test]
        fn prop_literals_are_untouched(s in ".*") {
            let resolver = Resolver::new(&test_palette());
            let out = resolver
                .resolve(&TokenValue::Literal(s.clone()), "any.path")
                .unwrap();
            prop_assert_eq!(out, s);
        }

        /// Strings without braces never parse as references.
        #[test]
        fn prop_brace_free_strings_are_not_references(s in "[^{}]*") {
            prop_assert_eq!(parse_reference(&s), None);
        }
    }
}
