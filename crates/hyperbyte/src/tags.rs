//! Class and symmetry tags, and the bitmask sets that hold them.
//!
//! Tags form two closed enumerations. A record's tags are computed once as
//! a bitmask, never accumulated into a shared collection. Iteration and
//! serialization follow declaration order.

use crate::core::octet::Octet;
use crate::core::reserved::is_reserved;
use crate::core::root::{is_abstract, is_movement, is_root};
use crate::hierarchy::{is_domain, Level};
use core::fmt;
use core::marker::PhantomData;

/// A closed enumeration that can live in a [`TagSet`].
pub trait Tag: Copy + 'static {
    /// Every tag, in declaration order.
    const ALL: &'static [Self];

    /// Bit position of this tag.
    fn index(self) -> u32;

    /// Upper-case label used in reports.
    fn label(self) -> &'static str;
}

/// Hierarchy and category tags.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Class {
    /// Exactly four bits set.
    Balanced,
    /// Not exactly four bits set.
    Unbalanced,
    /// INIT or RUN.
    Abstract,
    /// BEFORE or AFTER.
    Moving,
    /// Both nibbles equal.
    Twin,
    /// Left nibble is the complement of the right nibble.
    Shadow,
    /// Palindromic bit pattern.
    Mirror,
    /// Depth 0.
    Root,
    /// Depth 1.
    Domain,
    /// Depth 2.
    Section,
    /// Depth 3.
    Leaf,
    /// Lifecycle kernel code.
    Reserved,
}

impl Tag for Class {
    const ALL: &'static [Self] = &[
        Self::Balanced,
        Self::Unbalanced,
        Self::Abstract,
        Self::Moving,
        Self::Twin,
        Self::Shadow,
        Self::Mirror,
        Self::Root,
        Self::Domain,
        Self::Section,
        Self::Leaf,
        Self::Reserved,
    ];

    fn index(self) -> u32 {
        self as u32
    }

    fn label(self) -> &'static str {
        match self {
            Self::Balanced => "BALANCED",
            Self::Unbalanced => "UNBALANCED",
            Self::Abstract => "ABSTRACT",
            Self::Moving => "MOVING",
            Self::Twin => "TWIN",
            Self::Shadow => "SHADOW",
            Self::Mirror => "MIRROR",
            Self::Root => "ROOT",
            Self::Domain => "DOMAIN",
            Self::Section => "SECTION",
            Self::Leaf => "LEAF",
            Self::Reserved => "RESERVED",
        }
    }
}

/// Finer symmetry categories within the balanced/unbalanced split.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Symmetry {
    /// `center(b) == invert(b)`.
    BalancedRoot,
    /// Balanced and shadow.
    BalancedShadow,
    /// Balanced, neither balanced root nor shadow.
    BalancedEdge,
    /// INIT or RUN.
    UnbalancedRoot,
    /// Unbalanced twin other than INIT and RUN.
    UnbalancedTwin,
    /// One or seven bits set.
    UnbalancedEdge,
    /// Every other unbalanced octet.
    UnbalancedOther,
}

impl Tag for Symmetry {
    const ALL: &'static [Self] = &[
        Self::BalancedRoot,
        Self::BalancedShadow,
        Self::BalancedEdge,
        Self::UnbalancedRoot,
        Self::UnbalancedTwin,
        Self::UnbalancedEdge,
        Self::UnbalancedOther,
    ];

    fn index(self) -> u32 {
        self as u32
    }

    fn label(self) -> &'static str {
        match self {
            Self::BalancedRoot => "BALANCED_ROOT",
            Self::BalancedShadow => "BALANCED_SHADOW",
            Self::BalancedEdge => "BALANCED_EDGE",
            Self::UnbalancedRoot => "UNBALANCED_ROOT",
            Self::UnbalancedTwin => "UNBALANCED_TWIN",
            Self::UnbalancedEdge => "UNBALANCED_EDGE",
            Self::UnbalancedOther => "UNBALANCED_OTHER",
        }
    }
}

/// A set of tags stored as a bitmask.
pub struct TagSet<T: Tag> {
    bits: u16,
    _tag: PhantomData<T>,
}

impl<T: Tag> TagSet<T> {
    /// The empty set.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            bits: 0,
            _tag: PhantomData,
        }
    }

    /// Returns the set with `tag` added when `present` holds.
    #[must_use]
    pub fn with(self, tag: T, present: bool) -> Self {
        if present {
            Self {
                bits: self.bits | (1 << tag.index()),
                _tag: PhantomData,
            }
        } else {
            self
        }
    }

    /// Membership test.
    #[must_use]
    pub fn contains(&self, tag: T) -> bool {
        self.bits & (1 << tag.index()) != 0
    }

    /// Number of tags present.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// True when no tag is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Raw bitmask.
    #[must_use]
    pub const fn bits(&self) -> u16 {
        self.bits
    }

    /// Present tags in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        T::ALL.iter().copied().filter(move |t| self.contains(*t))
    }

    /// Present labels in declaration order.
    pub fn labels(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.iter().map(Tag::label)
    }

    /// Labels joined with `sep`, e.g. `BALANCED|SHADOW`.
    #[must_use]
    pub fn join(&self, sep: &str) -> String {
        self.labels().collect::<Vec<_>>().join(sep)
    }
}

impl<T: Tag> Clone for TagSet<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Tag> Copy for TagSet<T> {}

impl<T: Tag> PartialEq for TagSet<T> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits
    }
}

impl<T: Tag> Eq for TagSet<T> {}

impl<T: Tag> Default for TagSet<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Tag> FromIterator<T> for TagSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, t| set.with(t, true))
    }
}

impl<T: Tag> fmt::Debug for TagSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.labels()).finish()
    }
}

impl<T: Tag> fmt::Display for TagSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.join("|"))
    }
}

#[cfg(feature = "serde")]
impl<T: Tag> serde::Serialize for TagSet<T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.labels())
    }
}

// ---------------------------------------------------------------------------
// Symmetry predicates
// ---------------------------------------------------------------------------

/// `center(b) == invert(b)`; holds only for BEFORE and AFTER.
#[must_use]
pub const fn is_balanced_root(o: Octet) -> bool {
    o.center().value() == o.invert().value()
}

/// Balanced shadow.
#[must_use]
pub const fn is_balanced_shadow(o: Octet) -> bool {
    o.is_balanced() && o.is_shadow()
}

/// Balanced, neither a balanced root nor a shadow.
#[must_use]
pub const fn is_balanced_edge(o: Octet) -> bool {
    !is_balanced_root(o) && o.is_balanced() && !o.is_shadow()
}

/// INIT or RUN.
#[must_use]
pub const fn is_unbalanced_root(o: Octet) -> bool {
    is_abstract(o)
}

/// Unbalanced twin other than INIT and RUN.
#[must_use]
pub const fn is_unbalanced_twin(o: Octet) -> bool {
    !is_abstract(o) && !o.is_balanced() && o.is_twin()
}

/// Extreme imbalance: one or seven bits set.
#[must_use]
pub const fn is_unbalanced_edge(o: Octet) -> bool {
    matches!(o.ones(), 1 | 7)
}

/// Every remaining unbalanced octet.
#[must_use]
pub const fn is_unbalanced_other(o: Octet) -> bool {
    !o.is_balanced() && !o.is_twin() && !is_unbalanced_edge(o)
}

/// Symmetry tags of an octet.
#[must_use]
pub fn symmetry_of(o: Octet) -> TagSet<Symmetry> {
    TagSet::empty()
        .with(Symmetry::BalancedRoot, is_balanced_root(o))
        .with(Symmetry::BalancedShadow, is_balanced_shadow(o))
        .with(Symmetry::BalancedEdge, is_balanced_edge(o))
        .with(Symmetry::UnbalancedRoot, is_unbalanced_root(o))
        .with(Symmetry::UnbalancedTwin, is_unbalanced_twin(o))
        .with(Symmetry::UnbalancedEdge, is_unbalanced_edge(o))
        .with(Symmetry::UnbalancedOther, is_unbalanced_other(o))
}

/// Class tags of an octet at the given hierarchy level.
#[must_use]
pub fn classes_of(o: Octet, level: Level) -> TagSet<Class> {
    TagSet::empty()
        .with(Class::Balanced, o.is_balanced())
        .with(Class::Unbalanced, !o.is_balanced())
        .with(Class::Abstract, is_abstract(o))
        .with(Class::Moving, is_movement(o))
        .with(Class::Twin, o.is_twin())
        .with(Class::Shadow, o.is_shadow())
        .with(Class::Mirror, o.is_mirror())
        .with(Class::Root, is_root(o))
        .with(Class::Domain, is_domain(o))
        .with(Class::Section, level == Level::Section)
        .with(Class::Leaf, level == Level::Leaf)
        .with(Class::Reserved, is_reserved(o))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::descend;

    fn level(o: Octet) -> Level {
        descend(o).unwrap().level().unwrap()
    }

    #[test]
    fn test_tag_indices_fit() {
        assert!(Class::ALL.len() <= 16);
        for (i, c) in Class::ALL.iter().enumerate() {
            assert_eq!(c.index() as usize, i);
        }
        for (i, s) in Symmetry::ALL.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn test_set_ops() {
        let set: TagSet<Class> = [Class::Twin, Class::Balanced].into_iter().collect();
        assert_eq!(set.len(), 2);
        assert!(set.contains(Class::Twin));
        assert!(!set.contains(Class::Leaf));
        // Declaration order, not insertion order.
        assert_eq!(set.join("|"), "BALANCED|TWIN");
        assert!(TagSet::<Symmetry>::empty().is_empty());
    }

    #[test]
    fn test_root_classes() {
        assert_eq!(
            classes_of(Octet::new(0x00), Level::Root).join("|"),
            "UNBALANCED|ABSTRACT|TWIN|MIRROR|ROOT|RESERVED"
        );
        assert_eq!(
            classes_of(Octet::new(0x55), Level::Root).join("|"),
            "BALANCED|MOVING|TWIN|ROOT"
        );
        assert_eq!(
            classes_of(Octet::new(0xFF), Level::Root).join("|"),
            "UNBALANCED|ABSTRACT|TWIN|MIRROR|ROOT"
        );
    }

    #[test]
    fn test_root_symmetry() {
        assert_eq!(symmetry_of(Octet::new(0x00)).join("|"), "UNBALANCED_ROOT");
        assert_eq!(symmetry_of(Octet::new(0x55)).join("|"), "BALANCED_ROOT");
        assert_eq!(symmetry_of(Octet::new(0xAA)).join("|"), "BALANCED_ROOT");
    }

    #[test]
    fn test_known_symmetry() {
        assert_eq!(symmetry_of(Octet::new(0x87)).join("|"), "BALANCED_SHADOW");
        assert_eq!(symmetry_of(Octet::new(0x44)).join("|"), "UNBALANCED_TWIN");
        assert_eq!(symmetry_of(Octet::new(0xC5)).join("|"), "BALANCED_EDGE");
        assert_eq!(symmetry_of(Octet::new(0x04)).join("|"), "UNBALANCED_EDGE");
        assert_eq!(symmetry_of(Octet::new(0x05)).join("|"), "UNBALANCED_OTHER");
        assert_eq!(symmetry_of(Octet::new(0x7F)).join("|"), "UNBALANCED_EDGE");
    }

    #[test]
    fn test_exactly_one_symmetry_tag() {
        for o in Octet::all() {
            assert_eq!(symmetry_of(o).len(), 1, "{o:?}");
        }
    }

    #[test]
    fn test_symmetry_census() {
        let count = |tag: Symmetry| Octet::all().filter(|&o| symmetry_of(o).contains(tag)).count();
        assert_eq!(count(Symmetry::BalancedRoot), 2);
        assert_eq!(count(Symmetry::BalancedShadow), 16);
        assert_eq!(count(Symmetry::BalancedEdge), 52);
        assert_eq!(count(Symmetry::UnbalancedRoot), 2);
        assert_eq!(count(Symmetry::UnbalancedTwin), 8);
        assert_eq!(count(Symmetry::UnbalancedEdge), 16);
        assert_eq!(count(Symmetry::UnbalancedOther), 160);
    }

    #[test]
    fn test_exactly_one_level_class() {
        for o in Octet::all() {
            let c = classes_of(o, level(o));
            let n = [Class::Root, Class::Domain, Class::Section, Class::Leaf]
                .iter()
                .filter(|t| c.contains(**t))
                .count();
            assert_eq!(n, 1, "{o:?}");
            assert_ne!(c.contains(Class::Balanced), c.contains(Class::Unbalanced));
        }
    }
}
