//! Rendering and writing the generated stylesheet.
//!
//! The artifact has three sections: a banner naming the two source
//! documents, a `:root` block carrying every palette variable (grouped and
//! commented by origin) followed by the flattened `light` variables, and an
//! override block under the dark selector carrying only the flattened
//! `dark` variables. The file is always fully rewritten, never patched.

use std::fmt::Write as _;
use std::path::Path;

use crate::error::{Result, TokenError};
use crate::flatten::FlatToken;
use crate::palette::Palette;
use crate::pipeline::PipelineConfig;

/// Renders the complete stylesheet text.
///
/// Pass `dark: None` when the semantic document has no dark variant; the
/// override block is then omitted entirely.
pub fn render_stylesheet(
    palette: &Palette,
    light: &[FlatToken],
    dark: Option<&[FlatToken]>,
    config: &PipelineConfig,
) -> String {
    let mut css = String::new();
    let _ = writeln!(css, "/*");
    let _ = writeln!(css, " * Generated file - do not edit by hand.");
    let _ = writeln!(
        css,
        " * Built from {} and {}.",
        config.palette_path.display(),
        config.semantic_path.display()
    );
    let _ = writeln!(css, " */");
    css.push('\n');

    css.push_str(":root {\n");
    for (i, group) in palette.groups().iter().enumerate() {
        if i > 0 {
            css.push('\n');
        }
        let _ = writeln!(css, "  /* {} */", group.name());
        for (token, value) in group.entries() {
            let _ = writeln!(css, "  {}: {};", Palette::var_name(group.name(), token), value);
        }
    }
    if !light.is_empty() {
        css.push('\n');
        for token in light {
            let _ = writeln!(css, "  {}: {};", token.name, token.value);
        }
    }
    css.push_str("}\n");

    if let Some(dark) = dark {
        css.push('\n');
        let _ = writeln!(css, "{} {{", config.dark_selector);
        for token in dark {
            let _ = writeln!(css, "  {}: {};", token.name, token.value);
        }
        css.push_str("}\n");
    }

    css
}

/// Writes the stylesheet to `path`, creating intermediate directories.
///
/// This is the pipeline's only write side effect.
pub fn write_stylesheet(path: &Path, css: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| TokenError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }
    }
    std::fs::write(path, css).map_err(|e| TokenError::Io {
        path: path.to_path_buf(),
        source: e,
    })
}
