//! Report rendering for the classified forest.
//!
//! Two renderings share one preamble:
//!
//! - [`csv`]: the hierarchical CSV topology export
//! - [`json`]: the same forest as nested JSON (requires the `serde` feature)
//!
//! # Example
//!
//! ```
//! use hyperbyte::report::{export, ExportOptions, Format};
//! use hyperbyte::{classify_all, Tree};
//!
//! let tree = Tree::build(classify_all().unwrap());
//! let mut out = Vec::new();
//! export(&tree, Format::Csv, &ExportOptions::default(), &mut out).unwrap();
//! let text = String::from_utf8(out).unwrap();
//! assert!(text.contains("value,hex,bin"));
//! ```

pub mod csv;
#[cfg(feature = "serde")]
pub mod json;

use crate::error::Result;
use crate::tree::Tree;
use core::fmt;
use core::str::FromStr;
use std::io::Write;

/// Line comment marker for non-data lines.
pub const COMMENT: &str = "//";

/// Title of the export.
pub const TITLE: &str = "HYPER-BYTE TOPOLOGY EXPORT";

/// Geometry summary.
pub const GEOMETRY: &str = "16x16 Matrix (0..255) mapped to 4 Attractor Basins.";

/// Hierarchy summary.
pub const HIERARCHY: &str = "ROOT(4) -> DOMAIN(12) -> SECTION(48) -> LEAF(192)";

/// Parent derivation rule.
pub const LOGIC: &str = "Parent = ((Child << 1) & 0xF0) | ((Child >>> 1) & 0x0F)";

const RULE_WIDTH: usize = 77;

/// Output format.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Format {
    /// Hierarchical CSV with comment banners.
    #[default]
    Csv,
    /// Nested JSON.
    Json,
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Csv => "csv",
            Self::Json => "json",
        })
    }
}

impl FromStr for Format {
    type Err = String;

    fn from_str(s: &str) -> core::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Ok(Self::Csv),
            "json" => Ok(Self::Json),
            other => Err(format!("unknown format '{other}' (expected csv or json)")),
        }
    }
}

/// Options shared by all renderings.
#[derive(Clone, Debug, Default)]
pub struct ExportOptions {
    /// Generation timestamp. Omitted from the output when `None`.
    pub generated: Option<String>,
}

impl ExportOptions {
    /// Options stamped with the given timestamp.
    #[must_use]
    pub fn stamped(generated: impl Into<String>) -> Self {
        Self {
            generated: Some(generated.into()),
        }
    }
}

/// Writes the `//` preamble describing the export.
///
/// # Errors
///
/// Returns [`crate::TaxonomyError::Io`] if writing fails.
pub fn write_banner<W: Write>(out: &mut W, options: &ExportOptions) -> Result<()> {
    let rule = format!("{COMMENT} {}", "-".repeat(RULE_WIDTH));
    writeln!(out, "{rule}")?;
    writeln!(out, "{COMMENT} {TITLE}")?;
    writeln!(out, "{rule}")?;
    if let Some(generated) = &options.generated {
        writeln!(out, "{COMMENT} Generated: {generated}")?;
    }
    writeln!(out, "{COMMENT} Geometry:  {GEOMETRY}")?;
    writeln!(out, "{COMMENT} Hierarchy: {HIERARCHY}")?;
    writeln!(out, "{COMMENT} Logic:     {LOGIC}")?;
    writeln!(out, "{rule}")?;
    Ok(())
}

/// Renders the forest in the requested format.
///
/// # Errors
///
/// Returns [`crate::TaxonomyError::Io`] on write failure, or
/// [`crate::TaxonomyError::Json`] if JSON serialization fails.
pub fn export<W: Write>(tree: &Tree, format: Format, options: &ExportOptions, out: W) -> Result<()> {
    log::info!("exporting {} records as {format}", tree.len());
    match format {
        Format::Csv => csv::write(tree, options, out),
        #[cfg(feature = "serde")]
        Format::Json => json::write(tree, options, out),
        #[cfg(not(feature = "serde"))]
        Format::Json => Err(crate::error::TaxonomyError::Io(std::io::Error::new(
            std::io::ErrorKind::Unsupported,
            "JSON export requires the `serde` feature",
        ))),
    }
}
