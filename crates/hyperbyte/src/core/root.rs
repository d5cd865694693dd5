//! The four root sentinels.
//!
//! Every octet converges under repeated `center` to exactly one of four
//! fixed points of the root set. The roots split into two pairs:
//!
//! - **Abstract**: INIT (0x00) and RUN (0xFF), the unbalanced endpoints
//! - **Movement**: BEFORE (0x55) and AFTER (0xAA), the balanced oscillation
//!
//! Note that BEFORE and AFTER are not fixed points of `center` on their own:
//! `center` swaps them. Descent stops on the first root it meets.

use super::constants::{ROOT_AFTER, ROOT_BEFORE, ROOT_COUNT, ROOT_INIT, ROOT_RUN};
use super::octet::Octet;
use core::fmt;

/// One of the four root sentinels.
///
/// Declared in ascending value order, which is also the quadrant order of
/// the report.
///
/// # Example
///
/// ```
/// use hyperbyte::{Octet, Root};
///
/// let r = Root::from_octet(Octet::new(0x55));
/// assert_eq!(r, Some(Root::Before));
/// assert!(Root::Before.is_movement());
/// assert_eq!(Root::Before.quadrant(), 2);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
#[repr(u8)]
pub enum Root {
    /// 0x00 (00000000): genesis, the void.
    Init = ROOT_INIT,

    /// 0x55 (01010101): oscillation origin.
    Before = ROOT_BEFORE,

    /// 0xAA (10101010): oscillation inversion.
    After = ROOT_AFTER,

    /// 0xFF (11111111): saturation, terminal.
    Run = ROOT_RUN,
}

impl Root {
    /// All roots in ascending value order.
    pub const ALL: [Self; ROOT_COUNT] = [Self::Init, Self::Before, Self::After, Self::Run];

    /// Returns the root whose value equals `octet`, if any.
    #[inline]
    #[must_use]
    pub const fn from_octet(octet: Octet) -> Option<Self> {
        match octet.value() {
            ROOT_INIT => Some(Self::Init),
            ROOT_BEFORE => Some(Self::Before),
            ROOT_AFTER => Some(Self::After),
            ROOT_RUN => Some(Self::Run),
            _ => None,
        }
    }

    /// The root as an octet.
    #[inline]
    #[must_use]
    pub const fn octet(self) -> Octet {
        Octet::new(self as u8)
    }

    /// True for INIT and RUN.
    #[inline]
    #[must_use]
    pub const fn is_abstract(self) -> bool {
        matches!(self, Self::Init | Self::Run)
    }

    /// True for BEFORE and AFTER.
    #[inline]
    #[must_use]
    pub const fn is_movement(self) -> bool {
        matches!(self, Self::Before | Self::After)
    }

    /// 1-based quadrant index in report order.
    #[inline]
    #[must_use]
    pub const fn quadrant(self) -> usize {
        match self {
            Self::Init => 1,
            Self::Before => 2,
            Self::After => 3,
            Self::Run => 4,
        }
    }

    /// Sentinel name.
    #[inline]
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Init => "INIT",
            Self::Before => "BEFORE",
            Self::After => "AFTER",
            Self::Run => "RUN",
        }
    }
}

impl fmt::Debug for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.name(), self.octet())
    }
}

impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// True iff the octet is INIT or RUN.
#[inline]
#[must_use]
pub const fn is_abstract(octet: Octet) -> bool {
    matches!(octet.value(), ROOT_INIT | ROOT_RUN)
}

/// True iff the octet is BEFORE or AFTER.
#[inline]
#[must_use]
pub const fn is_movement(octet: Octet) -> bool {
    matches!(octet.value(), ROOT_BEFORE | ROOT_AFTER)
}

/// True iff the octet is one of the four roots.
#[inline]
#[must_use]
pub const fn is_root(octet: Octet) -> bool {
    is_abstract(octet) || is_movement(octet)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_roots_ascending() {
        for pair in Root::ALL.windows(2) {
            assert!(pair[0].octet() < pair[1].octet());
        }
    }

    #[test]
    fn test_from_octet_roundtrip() {
        for r in Root::ALL {
            assert_eq!(Root::from_octet(r.octet()), Some(r));
        }
    }

    #[test]
    fn test_is_root_exact_set() {
        let roots: Vec<u8> = Octet::all()
            .filter(|&o| is_root(o))
            .map(Octet::value)
            .collect();
        assert_eq!(roots, vec![0x00, 0x55, 0xAA, 0xFF]);
    }

    #[test]
    fn test_pairs() {
        assert!(Root::Init.is_abstract());
        assert!(Root::Run.is_abstract());
        assert!(Root::Before.is_movement());
        assert!(Root::After.is_movement());
        for r in Root::ALL {
            assert_ne!(r.is_abstract(), r.is_movement());
        }
    }

    #[test]
    fn test_quadrants() {
        let q: Vec<usize> = Root::ALL.iter().map(|r| r.quadrant()).collect();
        assert_eq!(q, vec![1, 2, 3, 4]);
    }
}
