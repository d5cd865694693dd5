//! Named structural relations between two octets.

use crate::core::octet::Octet;
use core::fmt;

/// The relation connecting a left octet to a right octet.
///
/// Several equalities can hold at once (e.g. `center` and `opposite`
/// coincide for some octets); [`relation`] resolves them by a fixed
/// priority: CENTER, OPPOSITE, REVERSED, INVERTED, DEFAULT.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum Relation {
    /// No named relation.
    Default,
    /// Right is the parent of left.
    Center,
    /// Right is left with its nibbles swapped.
    Opposite,
    /// Right is left bit-reversed, left being a twin.
    ReversedTwins,
    /// Right is left bit-reversed.
    Reversed,
    /// Right is the complement of left, left being a twin.
    InvertedTwins,
    /// Right is the complement of left.
    Inverted,
}

impl Relation {
    /// Upper-case label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Default => "DEFAULT",
            Self::Center => "CENTER",
            Self::Opposite => "OPPOSITE",
            Self::ReversedTwins => "REVERSED_TWINS",
            Self::Reversed => "REVERSED",
            Self::InvertedTwins => "INVERTED_TWINS",
            Self::Inverted => "INVERTED",
        }
    }
}

impl fmt::Display for Relation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Determines the relation from `left` to `right`. First match wins.
///
/// ```
/// use hyperbyte::{relation, Octet, Relation};
///
/// let b = Octet::new(0x2B);
/// assert_eq!(relation(b, b.center()), Relation::Center);
/// assert_eq!(relation(b, b.opposite()), Relation::Opposite);
/// assert_eq!(relation(Octet::new(0x11), Octet::new(0xEE)), Relation::InvertedTwins);
/// assert_eq!(relation(b, Octet::new(0x00)), Relation::Default);
/// ```
#[must_use]
pub const fn relation(left: Octet, right: Octet) -> Relation {
    let r = right.value();
    if left.center().value() == r {
        Relation::Center
    } else if left.opposite().value() == r {
        Relation::Opposite
    } else if left.reverse().value() == r {
        if left.is_twin() {
            Relation::ReversedTwins
        } else {
            Relation::Reversed
        }
    } else if left.invert().value() == r {
        if left.is_twin() {
            Relation::InvertedTwins
        } else {
            Relation::Inverted
        }
    } else {
        Relation::Default
    }
}
