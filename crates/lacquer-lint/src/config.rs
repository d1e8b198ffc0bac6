//! Scan configuration.

use std::path::PathBuf;

/// Explicit configuration for one scan run.
///
/// Defaults match the repository conventions: scan the component source
/// trees, look only at style/markup sources, and exempt the generated
/// stylesheet plus the external-brand constant table (third-party logo
/// colors are not theme-driven and may hold literals).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Root directories to walk. Missing roots are skipped.
    pub roots: Vec<PathBuf>,
    /// File extensions eligible for scanning (with the leading dot).
    pub extensions: Vec<String>,
    /// File names never scanned, wherever they appear.
    pub exempt_files: Vec<String>,
    /// Directory names never descended into.
    pub skip_dirs: Vec<String>,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            roots: vec![PathBuf::from("src"), PathBuf::from("components")],
            extensions: [
                ".css", ".scss", ".sass", ".less", ".html", ".js", ".jsx", ".ts", ".tsx",
                ".svelte", ".vue",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            exempt_files: vec!["tokens.css".to_string(), "brand-colors.ts".to_string()],
            skip_dirs: [".git", "node_modules", "dist", "build", "target"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}
