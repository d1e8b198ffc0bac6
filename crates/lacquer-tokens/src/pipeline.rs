//! One-shot pipeline configuration and orchestration.
//!
//! Generation is a batch build step: read two documents, resolve, flatten,
//! render, write one artifact. There is no ambient state; everything the
//! run needs travels in a [`PipelineConfig`].

use std::path::PathBuf;

use crate::emit::{render_stylesheet, write_stylesheet};
use crate::error::Result;
use crate::flatten::flatten;
use crate::palette::Palette;
use crate::resolve::Resolver;
use crate::semantic::SemanticDoc;

/// Explicit configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    /// Palette document, conventionally `tokens/palette.json`.
    pub palette_path: PathBuf,
    /// Semantic token document, conventionally `tokens/semantic.json`.
    pub semantic_path: PathBuf,
    /// Generated stylesheet, conventionally `styles/tokens.css`.
    pub output_path: PathBuf,
    /// Selector keying the dark override block.
    pub dark_selector: String,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            palette_path: PathBuf::from("tokens/palette.json"),
            semantic_path: PathBuf::from("tokens/semantic.json"),
            output_path: PathBuf::from("styles/tokens.css"),
            dark_selector: "[data-theme=\"dark\"]".to_string(),
        }
    }
}

/// The rendered artifact plus counts for reporting.
#[derive(Debug, Clone)]
pub struct GeneratedStylesheet {
    /// Full stylesheet text.
    pub css: String,
    /// Number of palette variables emitted.
    pub palette_count: usize,
    /// Number of light semantic variables emitted.
    pub light_count: usize,
    /// Number of dark semantic variables emitted.
    pub dark_count: usize,
}

/// Runs the pipeline without touching the output path.
///
/// # Errors
///
/// Any load, validation, or reference-resolution failure aborts the run;
/// nothing is written.
pub fn generate(config: &PipelineConfig) -> Result<GeneratedStylesheet> {
    let palette = Palette::from_file(&config.palette_path)?;
    let semantic = SemanticDoc::from_file(&config.semantic_path)?;
    let resolver = Resolver::new(&palette);

    let light = flatten(semantic.light(), &resolver)?;
    let dark = semantic
        .dark()
        .map(|tree| flatten(tree, &resolver))
        .transpose()?;

    let css = render_stylesheet(&palette, &light, dark.as_deref(), config);
    Ok(GeneratedStylesheet {
        css,
        palette_count: palette.len(),
        light_count: light.len(),
        dark_count: dark.map_or(0, |d| d.len()),
    })
}

/// Runs the pipeline and writes the artifact to the configured path.
pub fn generate_to_disk(config: &PipelineConfig) -> Result<GeneratedStylesheet> {
    let generated = generate(config)?;
    write_stylesheet(&config.output_path, &generated.css)?;
    Ok(generated)
}
