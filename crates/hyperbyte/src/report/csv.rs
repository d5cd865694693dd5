//! Hierarchical CSV rendering.
//!
//! One data row per record, in tree pre-order. Each quadrant opens with a
//! `//` comment line naming the root; quadrants are separated by a blank
//! line. Comment and blank lines are not CSV data.

use super::{write_banner, ExportOptions, COMMENT};
use crate::classify::{Record, COLUMNS};
use crate::error::Result;
use crate::tree::Tree;
use std::borrow::Cow;
use std::io::Write;

/// Quotes a field when it contains a comma, quote or newline.
///
/// ```
/// use hyperbyte::report::csv::escape;
///
/// assert_eq!(escape("ROOT|TWIN"), "ROOT|TWIN");
/// assert_eq!(escape("a,b"), "\"a,b\"");
/// assert_eq!(escape("say \"hi\""), "\"say \"\"hi\"\"\"");
/// ```
#[must_use]
pub fn escape(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Renders a ratio with eight fractional digits, trailing zeros trimmed.
///
/// ```
/// use hyperbyte::report::csv::format_ratio;
///
/// assert_eq!(format_ratio(0.375), "0.375");
/// assert_eq!(format_ratio(1.0), "1");
/// assert_eq!(format_ratio(0.0), "0");
/// assert_eq!(format_ratio(0.5435644431995964), "0.54356444");
/// ```
#[must_use]
pub fn format_ratio(x: f64) -> String {
    let fixed = format!("{x:.8}");
    if fixed.contains('.') {
        fixed.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        fixed
    }
}

/// The header row.
#[must_use]
pub fn header() -> String {
    COLUMNS.join(",")
}

/// One data row, fields in [`COLUMNS`] order.
#[must_use]
pub fn row(record: &Record) -> String {
    let fields: [String; COLUMNS.len()] = [
        record.value.value().to_string(),
        record.value.hex(),
        record.value.bin(),
        record.classes.join("|"),
        record.symmetry.join("|"),
        record.center.value().to_string(),
        record.root.octet().value().to_string(),
        record.depth.to_string(),
        record.inverse.value().to_string(),
        record.reverse.value().to_string(),
        record.opposite.value().to_string(),
        record.ones.to_string(),
        record.zeros.to_string(),
        format_ratio(record.entropy),
        format_ratio(record.balance),
    ];
    fields
        .iter()
        .map(|f| escape(f))
        .collect::<Vec<_>>()
        .join(",")
}

/// The comment line opening a quadrant.
#[must_use]
pub fn quadrant_banner(index: usize, total: usize, root: &Record) -> String {
    format!(
        "{COMMENT} [QUADRANT {index}/{total}] ROOT: {} ({})",
        root.value.hex(),
        root.classes.join("|")
    )
}

/// Writes the full CSV report.
///
/// # Errors
///
/// Returns [`crate::TaxonomyError::Io`] if writing fails.
pub fn write<W: Write>(tree: &Tree, options: &ExportOptions, mut out: W) -> Result<()> {
    write_banner(&mut out, options)?;
    writeln!(out, "{}", header())?;

    let total = tree.roots().count();
    let mut rows = 0usize;
    for (i, root) in tree.roots().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        writeln!(out, "{}", quadrant_banner(i + 1, total, root))?;
        for record in tree.subtree(root.value) {
            writeln!(out, "{}", row(record))?;
            rows += 1;
        }
    }
    out.flush()?;
    log::debug!("wrote {rows} csv rows across {total} quadrants");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::core::octet::Octet;

    #[test]
    fn test_escape_plain() {
        assert!(matches!(escape("0x0f"), Cow::Borrowed(_)));
        assert_eq!(escape("line\nbreak"), "\"line\nbreak\"");
    }

    #[test]
    fn test_format_ratio() {
        assert_eq!(format_ratio(0.125), "0.125");
        assert_eq!(format_ratio(0.954_434_002_924_965), "0.954434");
        assert_eq!(format_ratio(0.811_278_124_459_132_8), "0.81127812");
    }

    #[test]
    fn test_header() {
        assert_eq!(
            header(),
            "value,hex,bin,classes,symmetry,center,root,depth,inverse,reverse,opposite,ones,zeros,entropy,balance"
        );
    }

    #[test]
    fn test_rows() {
        let r = classify(Octet::new(0x00)).unwrap();
        assert_eq!(
            row(&r),
            "0,0x00,00000000,UNBALANCED|ABSTRACT|TWIN|MIRROR|ROOT|RESERVED,UNBALANCED_ROOT,0,0,0,255,0,0,0,8,0,0"
        );
        let r = classify(Octet::new(0x01)).unwrap();
        assert_eq!(
            row(&r),
            "1,0x01,00000001,UNBALANCED|DOMAIN|RESERVED,UNBALANCED_EDGE,0,0,1,254,128,16,1,7,0.54356444,0.125"
        );
    }

    #[test]
    fn test_quadrant_banner() {
        let r = classify(Octet::new(0xAA)).unwrap();
        assert_eq!(
            quadrant_banner(3, 4, &r),
            "// [QUADRANT 3/4] ROOT: 0xaa (BALANCED|MOVING|TWIN|ROOT)"
        );
    }
}
