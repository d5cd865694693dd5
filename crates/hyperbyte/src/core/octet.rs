//! Core Octet type - one cell of the 16x16 byte matrix.
//!
//! An Octet is a transparent wrapper around `u8`. The high nibble is the
//! "left" half and the low nibble the "right" half; every transform in this
//! module is defined in terms of those two halves.
//!
//! All operations are total over the 256 values and require no allocation,
//! except the textual renderings [`Octet::hex`] and [`Octet::bin`].

use super::constants::{BYTE_CARDINALITY, HIGH_MASK, NIBBLE_BITS, NIBBLE_MASK};
use crate::error::ParseOctetError;
use core::fmt;
use core::str::FromStr;

/// A single byte value of the taxonomy.
///
/// # Example
///
/// ```
/// use hyperbyte::Octet;
///
/// let o = Octet::new(0x2B);
/// assert_eq!(o.nibble_left(), 0x2);
/// assert_eq!(o.nibble_right(), 0xB);
/// assert_eq!(o.opposite(), Octet::new(0xB2));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Octet(u8);

impl Octet {
    /// The all-zero octet (00000000).
    pub const MIN: Self = Self(0x00);

    /// The all-one octet (11111111).
    pub const MAX: Self = Self(0xFF);

    /// Creates an octet from a byte value. Total over `u8`.
    #[inline]
    #[must_use]
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Returns the raw byte value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Iterates all 256 octets in ascending order.
    ///
    /// ```
    /// use hyperbyte::Octet;
    ///
    /// assert_eq!(Octet::all().count(), 256);
    /// assert_eq!(Octet::all().last(), Some(Octet::MAX));
    /// ```
    pub fn all() -> impl DoubleEndedIterator<Item = Self> + ExactSizeIterator {
        (0..BYTE_CARDINALITY).map(|v| Self(v as u8))
    }

    /// High nibble (bits 7-4), shifted down.
    #[inline]
    #[must_use]
    pub const fn nibble_left(self) -> u8 {
        (self.0 >> NIBBLE_BITS) & NIBBLE_MASK
    }

    /// Low nibble (bits 3-0).
    #[inline]
    #[must_use]
    pub const fn nibble_right(self) -> u8 {
        self.0 & NIBBLE_MASK
    }

    /// Bitwise complement. Self-inverse.
    ///
    /// ```
    /// use hyperbyte::Octet;
    ///
    /// assert_eq!(Octet::new(0x55).invert(), Octet::new(0xAA));
    /// assert_eq!(Octet::new(0x0F).invert(), Octet::new(0xF0));
    /// ```
    #[inline]
    #[must_use]
    pub const fn invert(self) -> Self {
        Self(!self.0)
    }

    /// Reverses the bit order (bit 0 ↔ bit 7).
    ///
    /// Swaps nibbles, then bit pairs, then adjacent bits.
    ///
    /// ```
    /// use hyperbyte::Octet;
    ///
    /// assert_eq!(Octet::new(0b0000_0001).reverse(), Octet::new(0b1000_0000));
    /// assert_eq!(Octet::new(0b0010_1100).reverse(), Octet::new(0b0011_0100));
    /// ```
    #[inline]
    #[must_use]
    pub const fn reverse(self) -> Self {
        let mut b = self.0;
        b = ((b & 0xF0) >> 4) | ((b & 0x0F) << 4);
        b = ((b & 0xCC) >> 2) | ((b & 0x33) << 2);
        b = ((b & 0xAA) >> 1) | ((b & 0x55) << 1);
        Self(b)
    }

    /// Swaps the two nibbles: `LLLL RRRR` becomes `RRRR LLLL`.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        Self((self.nibble_right() << NIBBLE_BITS) | self.nibble_left())
    }

    /// The parent of this octet in the convergence hierarchy.
    ///
    /// The high nibble takes bits 6-3 and the low nibble takes bits 4-1,
    /// i.e. `((b << 1) & 0xF0) | ((b >> 1) & 0x0F)`. This is a sliding
    /// window, not a rotation: bit 7 and bit 0 fall off.
    ///
    /// ```
    /// use hyperbyte::Octet;
    ///
    /// assert_eq!(Octet::new(0x0F).center(), Octet::new(0x17));
    /// assert_eq!(Octet::new(0x55).center(), Octet::new(0xAA));
    /// assert_eq!(Octet::new(0x80).center(), Octet::new(0x00));
    /// ```
    #[inline]
    #[must_use]
    pub const fn center(self) -> Self {
        Self(((self.0 << 1) & HIGH_MASK) | ((self.0 >> 1) & NIBBLE_MASK))
    }

    /// Number of set bits.
    #[inline]
    #[must_use]
    pub const fn ones(self) -> u8 {
        self.0.count_ones() as u8
    }

    /// Number of clear bits. `ones() + zeros() == 8`.
    #[inline]
    #[must_use]
    pub const fn zeros(self) -> u8 {
        self.0.count_zeros() as u8
    }

    /// Hamming distance to another octet.
    ///
    /// ```
    /// use hyperbyte::Octet;
    ///
    /// assert_eq!(Octet::new(0x00).distance(Octet::new(0xFF)), 8);
    /// assert_eq!(Octet::new(0x55).distance(Octet::new(0x54)), 1);
    /// ```
    #[inline]
    #[must_use]
    pub const fn distance(self, other: Self) -> u8 {
        (self.0 ^ other.0).count_ones() as u8
    }

    /// Binary Shannon entropy of the bit distribution, in `[0, 1]`.
    ///
    /// ```
    /// use hyperbyte::Octet;
    ///
    /// assert_eq!(Octet::new(0x00).entropy(), 0.0);
    /// assert_eq!(Octet::new(0x0F).entropy(), 1.0);
    /// ```
    #[must_use]
    pub fn entropy(self) -> f64 {
        let ones = self.ones();
        if ones == 0 || self.zeros() == 0 {
            return 0.0;
        }
        let p1 = f64::from(ones) / 8.0;
        let p0 = f64::from(self.zeros()) / 8.0;
        -(p1 * p1.log2() + p0 * p0.log2())
    }

    /// Fraction of set bits, in `[0, 1]`.
    #[must_use]
    pub fn balance(self) -> f64 {
        f64::from(self.ones()) / 8.0
    }

    /// True when exactly half of the bits are set.
    #[inline]
    #[must_use]
    pub const fn is_balanced(self) -> bool {
        self.ones() == 4
    }

    /// True when the octet reads the same bit-reversed.
    #[inline]
    #[must_use]
    pub const fn is_mirror(self) -> bool {
        self.0 == self.reverse().0
    }

    /// True when the left nibble is the 4-bit complement of the right nibble.
    #[inline]
    #[must_use]
    pub const fn is_shadow(self) -> bool {
        self.nibble_left() == (!self.nibble_right() & NIBBLE_MASK)
    }

    /// True when both nibbles are equal (0x00, 0x11, ..., 0xFF).
    #[inline]
    #[must_use]
    pub const fn is_twin(self) -> bool {
        self.nibble_left() == self.nibble_right()
    }

    /// Lowercase hex rendering, e.g. `0x0f`.
    #[must_use]
    pub fn hex(self) -> String {
        format!("{:#04x}", self.0)
    }

    /// Eight zero-padded binary digits, e.g. `00001111`.
    #[must_use]
    pub fn bin(self) -> String {
        format!("{:08b}", self.0)
    }
}

impl fmt::Debug for Octet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Octet({:#04x}, {:08b})", self.0, self.0)
    }
}

impl fmt::Display for Octet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

impl From<u8> for Octet {
    #[inline]
    fn from(value: u8) -> Self {
        Self::new(value)
    }
}

impl From<Octet> for u8 {
    #[inline]
    fn from(octet: Octet) -> Self {
        octet.value()
    }
}

impl FromStr for Octet {
    type Err = ParseOctetError;

    /// Parses decimal (`15`), hex (`0x0F`) or binary (`0b00001111`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (digits, radix) = if let Some(rest) = strip_prefix_ci(trimmed, "0x") {
            (rest, 16)
        } else if let Some(rest) = strip_prefix_ci(trimmed, "0b") {
            (rest, 2)
        } else {
            (trimmed, 10)
        };
        let digits = digits.replace('_', "");
        if digits.is_empty() {
            return Err(ParseOctetError::Empty);
        }
        // from_str_radix accepts a leading sign; only bare digits are valid.
        if !digits.chars().all(|c| c.is_digit(radix)) {
            return Err(ParseOctetError::Invalid {
                input: s.to_owned(),
            });
        }
        let wide = u32::from_str_radix(&digits, radix).map_err(|_| ParseOctetError::Invalid {
            input: s.to_owned(),
        })?;
        u8::try_from(wide)
            .map(Self)
            .map_err(|_| ParseOctetError::OutOfRange { value: wide })
    }
}

fn strip_prefix_ci<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    match (s.get(..prefix.len()), s.get(prefix.len()..)) {
        (Some(head), Some(rest)) if head.eq_ignore_ascii_case(prefix) => Some(rest),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_reverse(b: u8) -> u8 {
        let mut out = 0u8;
        for i in 0..8 {
            if b & (1 << i) != 0 {
                out |= 1 << (7 - i);
            }
        }
        out
    }

    #[test]
    fn test_reverse_matches_naive() {
        for o in Octet::all() {
            assert_eq!(o.reverse().value(), naive_reverse(o.value()));
            assert_eq!(o.reverse().value(), o.value().reverse_bits());
        }
    }

    #[test]
    fn test_involutions() {
        for o in Octet::all() {
            assert_eq!(o.invert().invert(), o);
            assert_eq!(o.reverse().reverse(), o);
            assert_eq!(o.opposite().opposite(), o);
        }
    }

    #[test]
    fn test_ones_zeros_sum() {
        for o in Octet::all() {
            assert_eq!(o.ones() + o.zeros(), 8);
        }
    }

    #[test]
    fn test_opposite_is_rotation_by_four() {
        for o in Octet::all() {
            assert_eq!(o.opposite().value(), o.value().rotate_left(4));
        }
    }

    #[test]
    fn test_center_formula() {
        assert_eq!(Octet::new(0x0F).center(), Octet::new(0x10 | 0x07));
        assert_eq!(Octet::new(0xAA).center(), Octet::new(0x55));
        assert_eq!(Octet::new(0x00).center(), Octet::new(0x00));
        assert_eq!(Octet::new(0xFF).center(), Octet::new(0xFF));
        assert_eq!(Octet::new(0x01).center(), Octet::new(0x00));
        assert_eq!(Octet::new(0x40).center(), Octet::new(0x80));
    }

    #[test]
    fn test_twin_shadow_mirror() {
        let twins: Vec<u8> = Octet::all()
            .filter(|o| o.is_twin())
            .map(Octet::value)
            .collect();
        assert_eq!(twins.len(), 16);
        assert!(twins.iter().all(|t| t % 0x11 == 0));

        assert!(Octet::new(0x87).is_shadow());
        assert!(Octet::new(0x0F).is_shadow());
        assert!(!Octet::new(0x00).is_shadow());
        assert_eq!(Octet::all().filter(|o| o.is_shadow()).count(), 16);

        assert!(Octet::new(0x81).is_mirror());
        assert!(Octet::new(0x18).is_mirror());
        assert!(!Octet::new(0x01).is_mirror());
        assert_eq!(Octet::all().filter(|o| o.is_mirror()).count(), 16);
    }

    #[test]
    fn test_entropy() {
        assert_eq!(Octet::new(0x00).entropy(), 0.0);
        assert_eq!(Octet::new(0xFF).entropy(), 0.0);
        for o in Octet::all().filter(|o| o.is_balanced()) {
            assert_eq!(o.entropy(), 1.0);
        }
        let e = Octet::new(0x01).entropy();
        assert!((e - 0.543_564_443_199_596_4).abs() < 1e-12);
        for o in Octet::all() {
            assert!((0.0..=1.0).contains(&o.entropy()));
        }
    }

    #[test]
    fn test_balance() {
        assert_eq!(Octet::new(0x00).balance(), 0.0);
        assert_eq!(Octet::new(0x0F).balance(), 0.5);
        assert_eq!(Octet::new(0x07).balance(), 0.375);
        assert_eq!(Octet::new(0xFF).balance(), 1.0);
    }

    #[test]
    fn test_distance() {
        for o in Octet::all() {
            assert_eq!(o.distance(o), 0);
            assert_eq!(o.distance(o.invert()), 8);
        }
    }

    #[test]
    fn test_text_renderings() {
        assert_eq!(Octet::new(0x0F).hex(), "0x0f");
        assert_eq!(Octet::new(0xAA).hex(), "0xaa");
        assert_eq!(Octet::new(0x00).hex(), "0x00");
        assert_eq!(Octet::new(0x0F).bin(), "00001111");
        assert_eq!(Octet::new(0x80).bin(), "10000000");
        assert_eq!(format!("{}", Octet::new(5)), "0x05");
    }

    #[test]
    fn test_parse() {
        assert_eq!("15".parse::<Octet>(), Ok(Octet::new(15)));
        assert_eq!("0x0F".parse::<Octet>(), Ok(Octet::new(15)));
        assert_eq!("0XaA".parse::<Octet>(), Ok(Octet::new(0xAA)));
        assert_eq!("0b0000_1111".parse::<Octet>(), Ok(Octet::new(15)));
        assert_eq!(" 255 ".parse::<Octet>(), Ok(Octet::MAX));
        assert_eq!(
            "256".parse::<Octet>(),
            Err(ParseOctetError::OutOfRange { value: 256 })
        );
        assert_eq!("0x".parse::<Octet>(), Err(ParseOctetError::Empty));
        assert!(matches!(
            "zz".parse::<Octet>(),
            Err(ParseOctetError::Invalid { .. })
        ));
        assert!(matches!(
            "€1".parse::<Octet>(),
            Err(ParseOctetError::Invalid { .. })
        ));
        for signed in ["+5", "-0", "0x+5", "0b+1"] {
            assert!(
                matches!(signed.parse::<Octet>(), Err(ParseOctetError::Invalid { .. })),
                "{signed}"
            );
        }
    }
}
