//! # Lacquer Lint - Raw Color Literal Guard
//!
//! Components in a token-driven design system must take their colors from
//! the generated custom properties, never from inline literals. This crate
//! walks the source trees and reports every hex color or
//! `rgb(`/`rgba(`/`hsl(`/`hsla(` call found outside the exempt set.
//!
//! The scan is a pure validation pass: it reads files, collects findings,
//! and leaves exit-code policy to the caller (a CI gate or pre-commit
//! hook fails when the report is not clean).
//!
//! ```rust,no_run
//! use lacquer_lint::{scan, ScanConfig};
//!
//! let report = scan(&ScanConfig::default()).unwrap();
//! for finding in &report.findings {
//!     eprintln!("{}:{}  {}", finding.path.display(), finding.line, finding.literal);
//! }
//! assert!(report.clean());
//! ```

pub mod config;
pub mod error;
pub mod scan;

pub use config::ScanConfig;
pub use error::{LintError, Result};
pub use scan::{scan, Finding, ScanReport};
