//! Convergence hierarchy: roots, domains, sections and leaves.
//!
//! The parent of an octet is its [`Octet::center`]. Following parents from
//! any octet reaches a root in at most three steps, which yields four levels:
//!
//! ```text
//! depth 0  ROOT      4
//! depth 1  DOMAIN   12   (3 per root)
//! depth 2  SECTION  48   (4 per domain)
//! depth 3  LEAF    192   (4 per section)
//! ```
//!
//! Levels are assigned by counting descent steps, not by a structural test.

use crate::core::constants::{DESCENT_CAP, MAX_DEPTH};
use crate::core::octet::Octet;
use crate::core::root::{is_root, Root};
use crate::error::{Result, TaxonomyError};
use core::fmt;

/// A level of the hierarchy.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Level {
    /// Depth 0.
    Root,
    /// Depth 1.
    Domain,
    /// Depth 2.
    Section,
    /// Depth 3.
    Leaf,
}

impl Level {
    /// All levels from the top down.
    pub const ALL: [Self; MAX_DEPTH as usize + 1] =
        [Self::Root, Self::Domain, Self::Section, Self::Leaf];

    /// The level at `depth`, if it exists.
    #[must_use]
    pub const fn from_depth(depth: u8) -> Option<Self> {
        match depth {
            0 => Some(Self::Root),
            1 => Some(Self::Domain),
            2 => Some(Self::Section),
            3 => Some(Self::Leaf),
            _ => None,
        }
    }

    /// Depth of this level.
    #[must_use]
    pub const fn depth(self) -> u8 {
        self as u8
    }

    /// Upper-case label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Root => "ROOT",
            Self::Domain => "DOMAIN",
            Self::Section => "SECTION",
            Self::Leaf => "LEAF",
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of descending from an octet to its root.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Descent {
    /// The octet the descent started from.
    pub origin: Octet,
    /// The root reached.
    pub root: Root,
    /// Number of `center` applications taken (0 for roots).
    pub depth: u8,
}

impl Descent {
    /// The hierarchy level implied by the depth.
    ///
    /// # Errors
    ///
    /// Returns [`TaxonomyError::NoConvergence`] if the depth exceeds the
    /// leaf level, which only a broken `center` transform can produce.
    pub fn level(self) -> Result<Level> {
        Level::from_depth(self.depth).ok_or(TaxonomyError::NoConvergence {
            value: self.origin,
            iterations: self.depth,
        })
    }
}

/// Descends from `octet` through `center` until a root is hit.
///
/// # Errors
///
/// Returns [`TaxonomyError::NoConvergence`] if no root is reached within
/// [`DESCENT_CAP`] steps.
///
/// # Example
///
/// ```
/// use hyperbyte::{descend, Octet, Root};
///
/// let d = descend(Octet::new(0x0F)).unwrap();
/// assert_eq!(d.root, Root::Before);
/// assert_eq!(d.depth, 3);
/// ```
pub fn descend(octet: Octet) -> Result<Descent> {
    descend_with(octet, Octet::center)
}

/// Descent through an arbitrary parent function, bounded by [`DESCENT_CAP`].
pub(crate) fn descend_with(octet: Octet, parent: impl Fn(Octet) -> Octet) -> Result<Descent> {
    let mut current = octet;
    let mut depth = 0u8;
    loop {
        if let Some(root) = Root::from_octet(current) {
            return Ok(Descent {
                origin: octet,
                root,
                depth,
            });
        }
        if depth == DESCENT_CAP {
            log::error!("descent from {octet} exceeded {DESCENT_CAP} steps");
            return Err(TaxonomyError::NoConvergence {
                value: octet,
                iterations: depth,
            });
        }
        current = parent(current);
        depth += 1;
    }
}

/// The chain `octet, center(octet), ...` ending at (and including) its root.
///
/// # Errors
///
/// Same as [`descend`].
///
/// ```
/// use hyperbyte::{ancestry, Octet};
///
/// let chain: Vec<u8> = ancestry(Octet::new(0x40)).unwrap().iter().map(|o| o.value()).collect();
/// assert_eq!(chain, vec![0x40, 0x80, 0x00]);
/// ```
pub fn ancestry(octet: Octet) -> Result<Vec<Octet>> {
    let descent = descend(octet)?;
    let mut chain = Vec::with_capacity(usize::from(descent.depth) + 1);
    let mut current = octet;
    chain.push(current);
    for _ in 0..descent.depth {
        current = current.center();
        chain.push(current);
    }
    Ok(chain)
}

/// True iff the octet is not a root and its parent is.
#[inline]
#[must_use]
pub const fn is_domain(octet: Octet) -> bool {
    !is_root(octet) && is_root(octet.center())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::constants::LEVEL_CARDINALITIES;

    #[test]
    fn test_roots_have_depth_zero() {
        for r in Root::ALL {
            let d = descend(r.octet()).unwrap();
            assert_eq!(d.depth, 0);
            assert_eq!(d.root, r);
        }
    }

    #[test]
    fn test_depth_bounded_and_reaches_root() {
        for o in Octet::all() {
            let d = descend(o).unwrap();
            assert!(d.depth <= MAX_DEPTH);
            let mut cur = o;
            for _ in 0..d.depth {
                assert!(!is_root(cur));
                cur = cur.center();
            }
            assert_eq!(cur, d.root.octet());
        }
    }

    #[test]
    fn test_level_cardinalities() {
        let mut counts = [0usize; 4];
        for o in Octet::all() {
            counts[usize::from(descend(o).unwrap().depth)] += 1;
        }
        assert_eq!(counts, LEVEL_CARDINALITIES);
    }

    #[test]
    fn test_root_basins_equal() {
        let mut basins = [0usize; 4];
        for o in Octet::all() {
            basins[descend(o).unwrap().root.quadrant() - 1] += 1;
        }
        assert_eq!(basins, [64, 64, 64, 64]);
    }

    #[test]
    fn test_domain_matches_depth_one() {
        for o in Octet::all() {
            assert_eq!(is_domain(o), descend(o).unwrap().depth == 1);
        }
    }

    #[test]
    fn test_known_descents() {
        let d = descend(Octet::new(0xAA)).unwrap();
        assert_eq!((d.root, d.depth), (Root::After, 0));
        let d = descend(Octet::new(0x01)).unwrap();
        assert_eq!((d.root, d.depth), (Root::Init, 1));
        let d = descend(Octet::new(0x02)).unwrap();
        assert_eq!((d.root, d.depth), (Root::Init, 2));
        let d = descend(Octet::new(0x0F)).unwrap();
        assert_eq!((d.root, d.depth), (Root::Before, 3));
    }

    #[test]
    fn test_cap_reports_no_convergence() {
        // Identity never moves a non-root octet.
        let err = descend_with(Octet::new(0x01), |o| o).unwrap_err();
        match err {
            TaxonomyError::NoConvergence { value, iterations } => {
                assert_eq!(value, Octet::new(0x01));
                assert_eq!(iterations, DESCENT_CAP);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_ancestry_chain() {
        for o in Octet::all() {
            let chain = ancestry(o).unwrap();
            let d = descend(o).unwrap();
            assert_eq!(chain.len(), usize::from(d.depth) + 1);
            assert_eq!(chain.first(), Some(&o));
            assert_eq!(chain.last(), Some(&d.root.octet()));
        }
    }

    #[test]
    fn test_level_from_depth() {
        for l in Level::ALL {
            assert_eq!(Level::from_depth(l.depth()), Some(l));
        }
        assert_eq!(Level::from_depth(4), None);
    }
}
