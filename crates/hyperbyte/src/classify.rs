//! Per-octet classification records.
//!
//! A [`Record`] gathers every predicate, transform and numeric summary for
//! one octet. Records are built once and never mutated.

use crate::core::constants::BYTE_CARDINALITY;
use crate::core::octet::Octet;
use crate::core::root::Root;
use crate::error::Result;
use crate::hierarchy::{descend, Level};
use crate::tags::{classes_of, symmetry_of, Class, Symmetry, TagSet};

/// Report columns, in output order.
pub const COLUMNS: [&str; 15] = [
    "value", "hex", "bin", "classes", "symmetry", "center", "root", "depth", "inverse", "reverse",
    "opposite", "ones", "zeros", "entropy", "balance",
];

/// Classification of a single octet.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    /// The octet itself.
    pub value: Octet,
    /// Hierarchy and category tags.
    pub classes: TagSet<Class>,
    /// Symmetry tags.
    pub symmetry: TagSet<Symmetry>,
    /// Parent in the hierarchy.
    pub center: Octet,
    /// Root reached by descent.
    pub root: Root,
    /// Steps from `value` to `root`.
    pub depth: u8,
    /// Bitwise complement.
    pub inverse: Octet,
    /// Bit reversal.
    pub reverse: Octet,
    /// Nibble swap.
    pub opposite: Octet,
    /// Set bits.
    pub ones: u8,
    /// Clear bits.
    pub zeros: u8,
    /// Binary Shannon entropy.
    pub entropy: f64,
    /// `ones / 8`.
    pub balance: f64,
}

impl Record {
    /// Hierarchy level of this record, `None` if `depth` is out of range.
    #[must_use]
    pub fn level(&self) -> Option<Level> {
        Level::from_depth(self.depth)
    }

    /// True for the four root records.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.classes.contains(Class::Root)
    }
}

/// Classifies one octet.
///
/// # Errors
///
/// Returns [`crate::TaxonomyError::NoConvergence`] if the octet does not
/// descend to a root within the leaf depth.
///
/// # Example
///
/// ```
/// use hyperbyte::{classify, Octet, Root};
///
/// let r = classify(Octet::new(0x0F)).unwrap();
/// assert_eq!(r.ones, 4);
/// assert_eq!(r.center, Octet::new(0x17));
/// assert_eq!(r.root, Root::Before);
/// assert_eq!(r.depth, 3);
/// assert_eq!(r.classes.to_string(), "BALANCED|SHADOW|LEAF");
/// ```
pub fn classify(value: Octet) -> Result<Record> {
    let descent = descend(value)?;
    let level = descent.level()?;
    Ok(Record {
        value,
        classes: classes_of(value, level),
        symmetry: symmetry_of(value),
        center: value.center(),
        root: descent.root,
        depth: descent.depth,
        inverse: value.invert(),
        reverse: value.reverse(),
        opposite: value.opposite(),
        ones: value.ones(),
        zeros: value.zeros(),
        entropy: value.entropy(),
        balance: value.balance(),
    })
}

/// Classifies all 256 octets in ascending order.
///
/// # Errors
///
/// Propagates the first [`classify`] failure.
pub fn classify_all() -> Result<Vec<Record>> {
    let records = Octet::all().map(classify).collect::<Result<Vec<_>>>()?;
    debug_assert_eq!(records.len(), BYTE_CARDINALITY);
    log::debug!("classified {} octets", records.len());
    Ok(records)
}

#[cfg(feature = "serde")]
impl serde::Serialize for Record {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut s = serializer.serialize_struct("Record", COLUMNS.len())?;
        s.serialize_field("value", &self.value)?;
        s.serialize_field("hex", &self.value.hex())?;
        s.serialize_field("bin", &self.value.bin())?;
        s.serialize_field("classes", &self.classes)?;
        s.serialize_field("symmetry", &self.symmetry)?;
        s.serialize_field("center", &self.center)?;
        s.serialize_field("root", &self.root.octet())?;
        s.serialize_field("depth", &self.depth)?;
        s.serialize_field("inverse", &self.inverse)?;
        s.serialize_field("reverse", &self.reverse)?;
        s.serialize_field("opposite", &self.opposite)?;
        s.serialize_field("ones", &self.ones)?;
        s.serialize_field("zeros", &self.zeros)?;
        s.serialize_field("entropy", &self.entropy)?;
        s.serialize_field("balance", &self.balance)?;
        s.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_all_covers_domain() {
        let records = classify_all().unwrap();
        assert_eq!(records.len(), 256);
        for (i, r) in records.iter().enumerate() {
            assert_eq!(usize::from(r.value.value()), i);
        }
    }

    #[test]
    fn test_record_invariants() {
        for r in classify_all().unwrap() {
            assert_eq!(r.ones + r.zeros, 8);
            assert!(r.depth <= 3);
            assert!((0.0..=1.0).contains(&r.entropy));
            assert!((0.0..=1.0).contains(&r.balance));
            assert_eq!(r.is_root(), r.depth == 0);
            assert_eq!(r.level().map(Level::depth), Some(r.depth));
        }
    }

    #[test]
    fn test_scenario_0x0f() {
        let r = classify(Octet::new(0x0F)).unwrap();
        assert_eq!(r.ones, 4);
        assert!(r.classes.contains(Class::Balanced));
        assert_eq!(r.center, Octet::new(0x17));
        assert_eq!(r.depth, 3);
        assert_eq!(r.root, Root::Before);
        assert_eq!(r.inverse, Octet::new(0xF0));
        assert_eq!(r.reverse, Octet::new(0xF0));
        assert_eq!(r.opposite, Octet::new(0xF0));
        assert_eq!(r.entropy, 1.0);
        assert_eq!(r.balance, 0.5);
    }

    #[test]
    fn test_scenario_0xaa() {
        let r = classify(Octet::new(0xAA)).unwrap();
        assert!(r.is_root());
        assert!(r.classes.contains(Class::Moving));
        assert_eq!(r.depth, 0);
        assert_eq!(r.root, Root::After);
        // AFTER's parent is BEFORE, itself a root.
        assert_eq!(r.center, Octet::new(0x55));
        assert_eq!(classify(r.center).unwrap().depth, 0);
    }

    #[test]
    fn test_reserved_records() {
        let reserved: Vec<u8> = classify_all()
            .unwrap()
            .iter()
            .filter(|r| r.classes.contains(Class::Reserved))
            .map(|r| r.value.value())
            .collect();
        assert_eq!(reserved, vec![0, 1, 2, 3]);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serialize_fields() {
        let r = classify(Octet::new(0x01)).unwrap();
        let json = serde_json::to_value(&r).unwrap();
        let keys: Vec<&str> = json
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        let mut expected = COLUMNS.to_vec();
        // serde_json maps are sorted unless preserve_order is enabled.
        expected.sort_unstable();
        let mut sorted = keys.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, expected);
        assert_eq!(json["hex"], "0x01");
        assert_eq!(json["root"], 0);
        assert_eq!(json["classes"][0], "UNBALANCED");
    }
}
