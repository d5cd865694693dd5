//! Error-code catalog: quadrant themes and one named code per octet.
//!
//! The taxonomy is used to allocate error codes. Each quadrant (root basin)
//! groups one family of failures, each of its three domains one subsystem,
//! and every section and leaf below a domain carries its own named code.

mod codes;

use crate::core::octet::Octet;
use crate::core::root::Root;
use crate::error::Result;
use crate::hierarchy::{ancestry, Level};
use crate::tags::Symmetry;
use codes::CODES;

/// A named error code.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Code {
    /// The octet carrying this code.
    pub octet: Octet,
    /// Symbolic name, e.g. `ERR_HEAP_OOM`.
    pub name: &'static str,
    /// Hierarchy level of the octet.
    pub level: Level,
    /// Symmetry category of the octet.
    pub symmetry: Symmetry,
    /// Short description.
    pub describe: &'static str,
}

/// The named code of an octet.
///
/// ```
/// use hyperbyte::{catalog::code, Level, Octet};
///
/// let c = code(Octet::new(0x20));
/// assert_eq!(c.name, "ERR_HEAP_OOM");
/// assert_eq!(c.level, Level::Leaf);
/// ```
#[must_use]
pub fn code(octet: Octet) -> &'static Code {
    &CODES[usize::from(octet.value())]
}

/// Every code, ascending by octet.
pub fn codes() -> impl Iterator<Item = &'static Code> {
    CODES.iter()
}

/// A quadrant and its family theme.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct QuadrantTheme {
    /// The root heading the quadrant.
    pub root: Root,
    /// Family name.
    pub name: &'static str,
    /// Epithet of the root sentinel.
    pub epithet: &'static str,
    /// The three domains, ascending.
    pub domains: [Octet; 3],
}

/// Themes of the four quadrants, in report order.
pub const QUADRANTS: [QuadrantTheme; 4] = [
    QuadrantTheme {
        root: Root::Init,
        name: "INIT / LIFECYCLE / SYSTEM STATE",
        epithet: "The Void / Success / Origins",
        domains: [Octet::new(0x01), Octet::new(0x80), Octet::new(0x81)],
    },
    QuadrantTheme {
        root: Root::Before,
        name: "BEFORE / EXTERNAL I/O / HARDWARE",
        epithet: "The Oscillation / The Wave / The Wire",
        domains: [Octet::new(0x2A), Octet::new(0x2B), Octet::new(0xAB)],
    },
    QuadrantTheme {
        root: Root::After,
        name: "AFTER / DATA / LOGIC",
        epithet: "The Pattern / The Math / Internal",
        domains: [Octet::new(0x54), Octet::new(0xD4), Octet::new(0xD5)],
    },
    QuadrantTheme {
        root: Root::Run,
        name: "RUN / FATAL / SECURITY / CRITICAL",
        epithet: "The End / Saturation / Panic",
        domains: [Octet::new(0x7E), Octet::new(0x7F), Octet::new(0xFE)],
    },
];

/// Theme of the quadrant headed by `root`.
#[must_use]
pub fn quadrant(root: Root) -> &'static QuadrantTheme {
    &QUADRANTS[root.quadrant() - 1]
}

/// Resolved theme of any octet.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Theme {
    /// Quadrant the octet converges into.
    pub quadrant: &'static QuadrantTheme,
    /// The octet's own code.
    pub code: &'static Code,
    /// Domain code above (or equal to) the octet; `None` for roots.
    pub domain: Option<&'static Code>,
    /// Section code above (or equal to) the octet; `None` above depth 2.
    pub section: Option<&'static Code>,
}

/// Resolves the quadrant, domain and section codes of an octet.
///
/// # Errors
///
/// Propagates [`crate::TaxonomyError::NoConvergence`] from descent.
///
/// ```
/// use hyperbyte::{catalog::theme_of, Octet};
///
/// let t = theme_of(Octet::new(0x20)).unwrap();
/// assert_eq!(t.quadrant.name, "INIT / LIFECYCLE / SYSTEM STATE");
/// assert_eq!(t.domain.map(|d| d.describe), Some("Memory Subsystem"));
/// assert_eq!(t.section.map(|s| s.name), Some("ERR_MEM_ALLOC"));
/// assert_eq!(t.code.describe, "Out of Memory");
/// ```
pub fn theme_of(octet: Octet) -> Result<Theme> {
    let chain = ancestry(octet)?;
    // chain = [octet, ..., section, domain, root]
    let from_root = |depth: usize| {
        chain
            .len()
            .checked_sub(depth + 1)
            .and_then(|i| chain.get(i))
            .map(|&o| code(o))
    };
    let root = chain
        .last()
        .copied()
        .and_then(Root::from_octet)
        .unwrap_or(Root::Init);
    Ok(Theme {
        quadrant: quadrant(root),
        code: code(octet),
        domain: from_root(1),
        section: from_root(2),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify;
    use crate::hierarchy::is_domain;

    #[test]
    fn test_codes_indexed_by_value() {
        assert_eq!(codes().count(), 256);
        for (i, c) in codes().enumerate() {
            assert_eq!(usize::from(c.octet.value()), i);
        }
    }

    #[test]
    fn test_codes_agree_with_classification() {
        for c in codes() {
            let r = classify(c.octet).unwrap();
            assert_eq!(r.level(), Some(c.level), "{} {}", c.octet, c.name);
            assert!(r.symmetry.contains(c.symmetry), "{} {}", c.octet, c.name);
        }
    }

    #[test]
    fn test_code_names_unique() {
        let mut names: Vec<&str> = codes().map(|c| c.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 256);
        assert!(names.iter().all(|n| n.starts_with("ERR_")));
    }

    #[test]
    fn test_quadrant_order() {
        for (i, q) in QUADRANTS.iter().enumerate() {
            assert_eq!(q.root.quadrant(), i + 1);
        }
    }

    #[test]
    fn test_domains_belong_to_root() {
        for q in &QUADRANTS {
            for &d in &q.domains {
                assert!(is_domain(d), "{d}");
                assert_eq!(d.center(), q.root.octet());
                assert_eq!(code(d).level, Level::Domain);
            }
        }
        let listed: usize = QUADRANTS.iter().map(|q| q.domains.len()).sum();
        assert_eq!(listed, Octet::all().filter(|&o| is_domain(o)).count());
    }

    #[test]
    fn test_theme_resolution() {
        let root = theme_of(Octet::new(0xFF)).unwrap();
        assert_eq!(root.quadrant.root, Root::Run);
        assert_eq!(root.code.name, "ERR_FATAL");
        assert_eq!(root.domain, None);
        assert_eq!(root.section, None);

        let domain = theme_of(Octet::new(0x2B)).unwrap();
        assert_eq!(domain.code.describe, "Timing & Signals");
        assert_eq!(domain.domain, Some(domain.code));
        assert_eq!(domain.section, None);

        let leaf = theme_of(Octet::new(0x0F)).unwrap();
        assert_eq!(leaf.code.name, "ERR_CLK_JITTER");
        assert_eq!(leaf.section.map(|s| s.name), Some("ERR_TIME_CLOCK"));
        assert_eq!(leaf.domain.map(|d| d.name), Some("ERR_TIME_DOM"));

        for o in Octet::all() {
            let t = theme_of(o).unwrap();
            if !crate::core::root::is_root(o) {
                let d = t.domain.unwrap();
                assert!(t.quadrant.domains.contains(&d.octet), "{o}");
            }
        }
    }
}
