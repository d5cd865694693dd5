//! Hyper-byte taxonomy
//!
//! Classifies every byte value (0..=255) into a four-level convergence
//! hierarchy and tags each one with structural and symmetry classes.
//!
//! # Geometry
//!
//! A byte is a coordinate in a 16x16 matrix: high nibble is the row, low
//! nibble the column. The parent of a byte is its *center*:
//!
//! ```text
//! center(b) = ((b << 1) & 0xF0) | ((b >> 1) & 0x0F)
//! ```
//!
//! Repeated application reaches one of four sentinels within three steps.
//!
//! | Root | Value | Bits | Quadrant |
//! |------|-------|------|----------|
//! | INIT | 0x00 | 00000000 | 1 |
//! | BEFORE | 0x55 | 01010101 | 2 |
//! | AFTER | 0xAA | 10101010 | 3 |
//! | RUN | 0xFF | 11111111 | 4 |
//!
//! # Hierarchy
//!
//! | Level | Depth | Count |
//! |-------|-------|-------|
//! | ROOT | 0 | 4 |
//! | DOMAIN | 1 | 12 |
//! | SECTION | 2 | 48 |
//! | LEAF | 3 | 192 |
//!
//! # Example
//!
//! ```
//! use hyperbyte::{classify, Octet, Root};
//!
//! let r = classify(Octet::new(0x01)).unwrap();
//! assert_eq!(r.root, Root::Init);
//! assert_eq!(r.depth, 1);
//! assert_eq!(r.classes.to_string(), "UNBALANCED|DOMAIN|RESERVED");
//! assert_eq!(r.symmetry.to_string(), "UNBALANCED_EDGE");
//! ```
//!
//! # Example: Topology Export
//!
//! ```
//! use hyperbyte::report::{export, ExportOptions, Format};
//! use hyperbyte::{classify_all, Tree};
//!
//! let tree = Tree::build(classify_all().unwrap());
//! let mut csv = Vec::new();
//! export(&tree, Format::Csv, &ExportOptions::default(), &mut csv).unwrap();
//! assert_eq!(String::from_utf8(csv).unwrap().lines().count(), 271);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

// Core data types (octet, root, reserved codes, constants)
mod core;

pub mod error;

// Descent and levels
pub mod hierarchy;

// Class and symmetry tags
pub mod tags;

// Per-octet records
pub mod classify;

// Pairwise relations
pub mod relation;

// Ordered convergence forest
pub mod tree;

// Quadrant and domain themes
pub mod catalog;

// Per-octet explanation
pub mod explain;

// Structural self-check
pub mod audit;

// CSV and JSON rendering
pub mod report;

// Re-export submodules for external access
pub use core::constants;
pub use core::octet;
pub use core::reserved;
pub use core::root;

// Re-export core types at crate root
pub use classify::{classify, classify_all, Record, COLUMNS};
pub use core::constants::{BYTE_CARDINALITY, LEVEL_CARDINALITIES, MAX_DEPTH};
pub use core::octet::Octet;
pub use core::reserved::{is_reserved, Reserved};
pub use core::root::{is_root, Root};
pub use error::{ParseOctetError, Result, TaxonomyError};
pub use hierarchy::{ancestry, descend, Descent, Level};
pub use relation::{relation, Relation};
pub use tags::{Class, Symmetry, Tag, TagSet};
pub use tree::Tree;

/// Prelude module for convenient imports.
///
/// ```
/// use hyperbyte::prelude::*;
///
/// assert_eq!(Octet::new(0x0F).center(), Octet::new(0x17));
/// ```
pub mod prelude {
    pub use crate::audit::{AuditReport, CheckResult, Severity};
    pub use crate::classify::{classify, classify_all, Record, COLUMNS};
    pub use crate::core::constants::{BYTE_CARDINALITY, LEVEL_CARDINALITIES, MAX_DEPTH};
    pub use crate::core::octet::Octet;
    pub use crate::core::reserved::Reserved;
    pub use crate::core::root::Root;
    pub use crate::error::{Result, TaxonomyError};
    pub use crate::explain::{explain, Explanation};
    pub use crate::hierarchy::{ancestry, descend, Level};
    pub use crate::relation::{relation, Relation};
    pub use crate::report::{export, ExportOptions, Format};
    pub use crate::tags::{Class, Symmetry, TagSet};
    pub use crate::tree::Tree;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_octet_classifies() {
        for o in Octet::all() {
            let r = classify(o).unwrap();
            assert_eq!(r.value, o);
            assert_eq!(Some(r.root), Root::from_octet(*ancestry(o).unwrap().last().unwrap()));
        }
    }

    #[test]
    fn test_quadrant_sizes() {
        let mut sizes = [0usize; 4];
        for r in classify_all().unwrap() {
            sizes[r.root.quadrant() - 1] += 1;
        }
        assert_eq!(sizes, [64; 4]);
    }

    #[test]
    fn test_key_values() {
        // INIT: the void
        let r = classify(Octet::new(0x00)).unwrap();
        assert_eq!(r.inverse, Octet::new(0xFF));
        assert_eq!(r.entropy, 0.0);

        // RUN: saturation, abstract like INIT
        let r = classify(Octet::new(0xFF)).unwrap();
        assert!(r.classes.contains(Class::Abstract));
        assert!(!r.classes.contains(Class::Reserved));

        // BEFORE: balanced root whose parent is AFTER
        let r = classify(Octet::new(0x55)).unwrap();
        assert_eq!(r.symmetry.to_string(), "BALANCED_ROOT");
        assert_eq!(r.center, Octet::new(0xAA));

        // 0x0F: balanced shadow leaf under BEFORE
        let r = classify(Octet::new(0x0F)).unwrap();
        assert_eq!(r.symmetry.to_string(), "BALANCED_SHADOW");
        assert_eq!(r.level(), Some(Level::Leaf));
    }

    #[test]
    fn test_audit_clean() {
        let tree = Tree::build(classify_all().unwrap());
        assert!(audit::run(&tree).all_passed());
    }
}
