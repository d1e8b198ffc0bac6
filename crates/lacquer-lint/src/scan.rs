//! Recursive scan for raw color literals.
//!
//! The scan is intentionally conservative: any `#rgb`-style hex run or
//! `rgb(`/`rgba(`/`hsl(`/`hsla(` call in an eligible file is a finding.
//! False positives (hex-like identifiers) are accepted in exchange for
//! never missing a real literal; intentional literals belong in the
//! exempt file set.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

use crate::config::ScanConfig;
use crate::error::{LintError, Result};

static HEX_LITERAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"#[0-9a-fA-F]{3,8}\b").expect("valid pattern"));

static COLOR_FUNCTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:rgb|rgba|hsl|hsla)\(").expect("valid pattern"));

/// One raw color literal found in a scanned file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Path as walked from the scan root (relative when the root is).
    pub path: PathBuf,
    /// 1-based line number.
    pub line: usize,
    /// The matched literal text.
    pub literal: String,
}

/// Aggregate result of one scan run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanReport {
    /// Every finding, in walk order.
    pub findings: Vec<Finding>,
    /// Number of files whose contents were scanned.
    pub files_scanned: usize,
}

impl ScanReport {
    /// True when no raw literals were found.
    pub fn clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Walks every configured root and scans eligible files line by line.
///
/// Missing roots are skipped (not every checkout has every conventional
/// directory); unreadable entries below an existing root are fatal.
pub fn scan(config: &ScanConfig) -> Result<ScanReport> {
    let mut report = ScanReport::default();
    for root in &config.roots {
        if !root.is_dir() {
            continue;
        }
        scan_dir(root, config, &mut report)?;
    }
    Ok(report)
}

fn scan_dir(dir: &Path, config: &ScanConfig, report: &mut ScanReport) -> Result<()> {
    let entries = std::fs::read_dir(dir).map_err(|e| LintError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| LintError::Io {
            path: dir.to_path_buf(),
            source: e,
        })?;
        paths.push(entry.path());
    }
    // read_dir order is platform-dependent; sort for stable reports
    paths.sort();

    for path in paths {
        if path.is_dir() {
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                if config.skip_dirs.iter().any(|d| d == name) {
                    continue;
                }
            }
            scan_dir(&path, config, report)?;
        } else if path.is_file() && is_eligible(&path, config) {
            scan_file(&path, report)?;
        }
    }

    Ok(())
}

fn is_eligible(path: &Path, config: &ScanConfig) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    if config.exempt_files.iter().any(|f| f == name) {
        return false;
    }
    config.extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

fn scan_file(path: &Path, report: &mut ScanReport) -> Result<()> {
    let content = std::fs::read_to_string(path).map_err(|e| LintError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    for (index, line) in content.lines().enumerate() {
        for m in HEX_LITERAL.find_iter(line) {
            report.findings.push(Finding {
                path: path.to_path_buf(),
                line: index + 1,
                literal: m.as_str().to_string(),
            });
        }
        for m in COLOR_FUNCTION.find_iter(line) {
            report.findings.push(Finding {
                path: path.to_path_buf(),
                line: index + 1,
                literal: m.as_str().to_string(),
            });
        }
    }
    report.files_scanned += 1;

    Ok(())
}
