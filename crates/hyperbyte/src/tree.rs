//! The ordered convergence forest.
//!
//! Records are grouped under their parent (`center`) value. The four roots
//! head the forest in ascending order and every child list is ascending,
//! which makes a pre-order walk fully deterministic.

use crate::classify::Record;
use crate::core::octet::Octet;
use crate::hierarchy::Level;
use std::collections::BTreeMap;

/// Parent → children adjacency over classification records.
#[derive(Clone, Debug)]
pub struct Tree {
    records: BTreeMap<Octet, Record>,
    roots: Vec<Octet>,
    children: BTreeMap<Octet, Vec<Octet>>,
}

impl Tree {
    /// Builds the forest from classification records.
    ///
    /// Root records head the forest; every other record is placed under its
    /// `center`. Roots are never placed under a parent, even where `center`
    /// of a root is another root (BEFORE ↔ AFTER).
    ///
    /// # Example
    ///
    /// ```
    /// use hyperbyte::{classify_all, Octet, Tree};
    ///
    /// let tree = Tree::build(classify_all().unwrap());
    /// let roots: Vec<u8> = tree.roots().map(|r| r.value.value()).collect();
    /// assert_eq!(roots, vec![0x00, 0x55, 0xAA, 0xFF]);
    /// assert_eq!(tree.children(Octet::new(0x00)).count(), 3);
    /// ```
    #[must_use]
    pub fn build(records: impl IntoIterator<Item = Record>) -> Self {
        let mut roots = Vec::new();
        let mut children: BTreeMap<Octet, Vec<Octet>> = BTreeMap::new();
        let mut by_value = BTreeMap::new();

        for record in records {
            if record.is_root() {
                roots.push(record.value);
            } else {
                children.entry(record.center).or_default().push(record.value);
            }
            by_value.insert(record.value, record);
        }

        roots.sort_unstable();
        for bucket in children.values_mut() {
            bucket.sort_unstable();
        }

        log::debug!(
            "built tree: {} records, {} roots, {} parents",
            by_value.len(),
            roots.len(),
            children.len()
        );

        Self {
            records: by_value,
            roots,
            children,
        }
    }

    /// Number of records in the forest.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when the forest holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up the record for an octet.
    #[must_use]
    pub fn record(&self, octet: Octet) -> Option<&Record> {
        self.records.get(&octet)
    }

    /// Root records in ascending order.
    pub fn roots(&self) -> impl Iterator<Item = &Record> + '_ {
        self.roots.iter().filter_map(|o| self.records.get(o))
    }

    /// Children of `parent` in ascending order.
    pub fn children(&self, parent: Octet) -> impl Iterator<Item = &Record> + '_ {
        self.children
            .get(&parent)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .filter_map(|o| self.records.get(o))
    }

    /// Pre-order walk of the subtree headed by `head`, head first.
    #[must_use]
    pub fn subtree(&self, head: Octet) -> Vec<&Record> {
        let mut out = Vec::new();
        let mut stack = vec![head];
        while let Some(octet) = stack.pop() {
            if let Some(record) = self.records.get(&octet) {
                out.push(record);
            }
            if let Some(kids) = self.children.get(&octet) {
                stack.extend(kids.iter().rev());
            }
        }
        out
    }

    /// Pre-order walk of the whole forest, quadrant by quadrant.
    #[must_use]
    pub fn walk(&self) -> Vec<&Record> {
        self.roots.iter().flat_map(|&r| self.subtree(r)).collect()
    }

    /// Number of records at each level, indexed by depth.
    ///
    /// Records whose depth lies outside the hierarchy are not counted.
    #[must_use]
    pub fn level_counts(&self) -> [usize; 4] {
        let mut counts = [0usize; 4];
        for level in self.records.values().filter_map(Record::level) {
            counts[usize::from(level.depth())] += 1;
        }
        counts
    }

    /// Records at a given level, ascending.
    pub fn at_level(&self, level: Level) -> impl Iterator<Item = &Record> + '_ {
        self.records.values().filter(move |r| r.level() == Some(level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::classify_all;
    use crate::core::constants::LEVEL_CARDINALITIES;

    fn tree() -> Tree {
        Tree::build(classify_all().unwrap())
    }

    #[test]
    fn test_cardinalities() {
        let t = tree();
        assert_eq!(t.len(), 256);
        assert_eq!(t.level_counts(), LEVEL_CARDINALITIES);
        assert_eq!(t.roots().count(), 4);
    }

    #[test]
    fn test_out_of_range_depth_not_counted() {
        let mut records = classify_all().unwrap();
        records[0x20].depth = 7;
        let t = Tree::build(records);
        assert_eq!(t.level_counts(), [4, 12, 48, 191]);
        assert_eq!(t.at_level(Level::Leaf).count(), 191);
        assert_eq!(t.record(Octet::new(0x20)).and_then(Record::level), None);
    }

    #[test]
    fn test_fan_out() {
        let t = tree();
        for root in t.roots() {
            let domains: Vec<_> = t.children(root.value).collect();
            assert_eq!(domains.len(), 3, "root {}", root.value);
            for domain in domains {
                assert_eq!(domain.level(), Some(Level::Domain));
                let sections: Vec<_> = t.children(domain.value).collect();
                assert_eq!(sections.len(), 4, "domain {}", domain.value);
                for section in sections {
                    assert_eq!(section.level(), Some(Level::Section));
                    let leaves: Vec<_> = t.children(section.value).collect();
                    assert_eq!(leaves.len(), 4, "section {}", section.value);
                    for leaf in leaves {
                        assert_eq!(leaf.level(), Some(Level::Leaf));
                        assert_eq!(t.children(leaf.value).count(), 0);
                    }
                }
            }
        }
    }

    #[test]
    fn test_children_sorted() {
        let t = tree();
        for o in Octet::all() {
            let kids: Vec<Octet> = t.children(o).map(|r| r.value).collect();
            let mut sorted = kids.clone();
            sorted.sort();
            assert_eq!(kids, sorted);
        }
    }

    #[test]
    fn test_walk_visits_each_once() {
        let t = tree();
        let walk = t.walk();
        assert_eq!(walk.len(), 256);
        let mut seen = [false; 256];
        for r in &walk {
            let i = usize::from(r.value.value());
            assert!(!seen[i]);
            seen[i] = true;
        }
    }

    #[test]
    fn test_walk_is_preorder() {
        let t = tree();
        let walk: Vec<u8> = t.walk().iter().map(|r| r.value.value()).collect();
        // Quadrant 1 opens with INIT, its first domain and that domain's
        // first section followed by its leaves.
        assert_eq!(&walk[..8], &[0x00, 0x01, 0x02, 0x04, 0x05, 0x84, 0x85, 0x03]);
        // Every record appears after its parent.
        let pos = |v: Octet| walk.iter().position(|&w| w == v.value());
        for r in t.walk().iter().filter(|r| !r.is_root()) {
            assert!(pos(r.center) < pos(r.value));
        }
    }

    #[test]
    fn test_domains_by_root() {
        let t = tree();
        let domains = |v: u8| -> Vec<u8> {
            t.children(Octet::new(v)).map(|r| r.value.value()).collect()
        };
        assert_eq!(domains(0x00), vec![0x01, 0x80, 0x81]);
        assert_eq!(domains(0x55), vec![0x2A, 0x2B, 0xAB]);
        assert_eq!(domains(0xAA), vec![0x54, 0xD4, 0xD5]);
        assert_eq!(domains(0xFF), vec![0x7E, 0x7F, 0xFE]);
    }
}
