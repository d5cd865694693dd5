//! Per-octet explanation: record, ancestor chain, themes and relations.

use crate::catalog::{theme_of, Theme};
use crate::classify::{classify, Record};
use crate::core::octet::Octet;
use crate::core::reserved::Reserved;
use crate::error::Result;
use crate::hierarchy::ancestry;
use crate::relation::{relation, Relation};
use core::fmt;

/// Everything known about one octet.
#[derive(Clone, Debug)]
pub struct Explanation {
    /// The classification record.
    pub record: Record,
    /// `octet, center(octet), ..., root`.
    pub ancestry: Vec<Octet>,
    /// Catalog code with its quadrant, domain and section.
    pub theme: Theme,
    /// Lifecycle kernel code, for reserved octets.
    pub reserved: Option<Reserved>,
    /// Relation from the octet to each of its transforms.
    pub relations: [(&'static str, Octet, Relation); 4],
}

/// Builds the explanation of an octet.
///
/// # Errors
///
/// Propagates [`crate::TaxonomyError::NoConvergence`] from descent.
///
/// ```
/// use hyperbyte::explain::explain;
/// use hyperbyte::{Octet, Relation};
///
/// let e = explain(Octet::new(0x0F)).unwrap();
/// assert_eq!(e.ancestry.len(), 4);
/// assert_eq!(e.relations[0].2, Relation::Center);
/// ```
pub fn explain(octet: Octet) -> Result<Explanation> {
    let record = classify(octet)?;
    let chain = ancestry(octet)?;
    let theme = theme_of(octet)?;
    let relations = [
        ("center", octet.center()),
        ("opposite", octet.opposite()),
        ("reverse", octet.reverse()),
        ("inverse", octet.invert()),
    ]
    .map(|(name, other)| (name, other, relation(octet, other)));
    Ok(Explanation {
        record,
        ancestry: chain,
        theme,
        reserved: Reserved::from_octet(octet),
        relations,
    })
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = &self.record;
        writeln!(f, "{} ({}, {})", r.value.hex(), r.value.value(), r.value.bin())?;
        let code = self.theme.code;
        writeln!(f, "  code:     {} - {}", code.name, code.describe)?;
        match r.level() {
            Some(level) => writeln!(f, "  level:    {level} (depth {})", r.depth)?,
            None => writeln!(f, "  level:    depth {}", r.depth)?,
        }
        writeln!(f, "  root:     {} {}", r.root, r.root.octet().hex())?;
        writeln!(f, "  classes:  {}", r.classes)?;
        writeln!(f, "  symmetry: {}", r.symmetry)?;
        let chain: Vec<String> = self.ancestry.iter().map(|o| o.hex()).collect();
        writeln!(f, "  path:     {}", chain.join(" -> "))?;
        writeln!(f, "  quadrant: {}", self.theme.quadrant.name)?;
        if let Some(domain) = self.theme.domain {
            writeln!(
                f,
                "  domain:   {} {} ({})",
                domain.octet.hex(),
                domain.name,
                domain.describe
            )?;
        }
        if let Some(section) = self.theme.section {
            writeln!(
                f,
                "  section:  {} {} ({})",
                section.octet.hex(),
                section.name,
                section.describe
            )?;
        }
        if let Some(code) = self.reserved {
            writeln!(f, "  reserved: {} - {}", code.name(), code.describe())?;
        }
        writeln!(
            f,
            "  bits:     ones={} zeros={} entropy={:.4} balance={}",
            r.ones, r.zeros, r.entropy, r.balance
        )?;
        for (name, other, rel) in &self.relations {
            writeln!(f, "  {name:<9} {} {rel}", other.hex())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::root::Root;

    #[test]
    fn test_explain_leaf() {
        let e = explain(Octet::new(0x0F)).unwrap();
        let chain: Vec<u8> = e.ancestry.iter().map(|o| o.value()).collect();
        assert_eq!(chain, vec![0x0F, 0x17, 0x2B, 0x55]);
        assert_eq!(e.theme.quadrant.root, Root::Before);
        assert_eq!(e.theme.domain.map(|d| d.describe), Some("Timing & Signals"));
        assert_eq!(e.theme.code.name, "ERR_CLK_JITTER");
        assert_eq!(e.reserved, None);
        // 0x0F is a shadow: its opposite, reverse and inverse all coincide.
        assert_eq!(e.relations[1], ("opposite", Octet::new(0xF0), Relation::Opposite));
        assert_eq!(e.relations[2].2, Relation::Opposite);
        assert_eq!(e.relations[3].2, Relation::Opposite);
    }

    #[test]
    fn test_explain_names_codes() {
        let text = explain(Octet::new(0x20)).unwrap().to_string();
        assert!(text.contains("code:     ERR_HEAP_OOM - Out of Memory"));
        assert!(text.contains("section:  0x40 ERR_MEM_ALLOC (Allocation Failure)"));
        assert!(text.contains("domain:   0x80 ERR_MEM_DOM (Memory Subsystem)"));
        assert!(text.contains("path:     0x20 -> 0x40 -> 0x80 -> 0x00"));
    }

    #[test]
    fn test_explain_reserved() {
        let e = explain(Octet::new(0x02)).unwrap();
        assert_eq!(e.reserved, Some(Reserved::Exiting));
        let text = e.to_string();
        assert!(text.starts_with("0x02 (2, 00000010)"));
        assert!(text.contains("reserved: "));
        assert!(text.contains("path:     0x02 -> 0x01 -> 0x00"));
    }

    #[test]
    fn test_explain_root_has_no_domain() {
        let e = explain(Octet::new(0xAA)).unwrap();
        assert_eq!(e.ancestry, vec![Octet::new(0xAA)]);
        assert!(e.theme.domain.is_none());
        assert!(!e.to_string().contains("domain:"));
        // AFTER's center is BEFORE.
        assert_eq!(e.relations[0], ("center", Octet::new(0x55), Relation::Center));
    }
}
