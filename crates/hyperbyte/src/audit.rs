//! Structural audit of the classified forest.
//!
//! Each check inspects the full record set and appends one [`CheckResult`]
//! to an [`AuditReport`]. A clean taxonomy yields only passes.
//!
//! ```
//! use hyperbyte::{audit, classify_all, Tree};
//!
//! let tree = Tree::build(classify_all().unwrap());
//! let report = audit::run(&tree);
//! assert!(report.all_passed());
//! ```

use crate::core::constants::{BYTE_CARDINALITY, LEVEL_CARDINALITIES, MAX_DEPTH};
use crate::core::octet::Octet;
use crate::core::root::{is_root, Root};
use crate::tags::{Symmetry, Tag};
use crate::tree::Tree;
use std::collections::BTreeSet;

/// Severity level of a check result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The check passed.
    Pass,
    /// The taxonomy is broken.
    Failure,
}

/// Outcome of a single check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Short identifier of the check.
    pub check: &'static str,
    /// Human-readable outcome.
    pub message: String,
    /// Severity of the outcome.
    pub severity: Severity,
    /// Offending octets or extra detail lines.
    pub details: Vec<String>,
}

impl CheckResult {
    /// A passing result.
    pub fn pass(check: &'static str, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
            severity: Severity::Pass,
            details: Vec::new(),
        }
    }

    /// A failing result.
    pub fn fail(check: &'static str, message: impl Into<String>) -> Self {
        Self {
            check,
            message: message.into(),
            severity: Severity::Failure,
            details: Vec::new(),
        }
    }

    /// A failing result with detail lines.
    pub fn fail_with_details(
        check: &'static str,
        message: impl Into<String>,
        details: Vec<String>,
    ) -> Self {
        Self {
            details,
            ..Self::fail(check, message)
        }
    }

    /// True if this result is a failure.
    pub fn is_failure(&self) -> bool {
        self.severity == Severity::Failure
    }
}

/// Aggregated results of all checks.
#[derive(Debug, Default)]
pub struct AuditReport {
    /// Individual results in check order.
    pub results: Vec<CheckResult>,
}

impl AuditReport {
    /// An empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a result.
    pub fn push(&mut self, result: CheckResult) {
        self.results.push(result);
    }

    /// Number of failed checks.
    pub fn failure_count(&self) -> usize {
        self.results.iter().filter(|r| r.is_failure()).count()
    }

    /// True when no check failed.
    pub fn all_passed(&self) -> bool {
        self.failure_count() == 0
    }
}

/// Runs every check against the forest.
pub fn run(tree: &Tree) -> AuditReport {
    let mut report = AuditReport::new();
    check_unique_rows(tree, &mut report);
    check_root_set(tree, &mut report);
    check_cardinalities(tree, &mut report);
    check_depth_bound(tree, &mut report);
    check_single_parent(tree, &mut report);
    check_symmetry_partition(tree, &mut report);
    log::info!(
        "audit finished: {} checks, {} failures",
        report.results.len(),
        report.failure_count()
    );
    report
}

fn hexes(octets: impl IntoIterator<Item = Octet>) -> Vec<String> {
    octets.into_iter().map(Octet::hex).collect()
}

fn check_unique_rows(tree: &Tree, report: &mut AuditReport) {
    let walk = tree.walk();
    let distinct: BTreeSet<Octet> = walk.iter().map(|r| r.value).collect();
    if walk.len() == BYTE_CARDINALITY && distinct.len() == BYTE_CARDINALITY {
        report.push(CheckResult::pass(
            "rows",
            format!("walk emits {BYTE_CARDINALITY} distinct rows"),
        ));
    } else {
        let missing = Octet::all().filter(|o| !distinct.contains(o));
        report.push(CheckResult::fail_with_details(
            "rows",
            format!(
                "walk emits {} rows, {} distinct (expected {BYTE_CARDINALITY})",
                walk.len(),
                distinct.len()
            ),
            hexes(missing),
        ));
    }
}

fn check_root_set(tree: &Tree, report: &mut AuditReport) {
    let roots: Vec<Octet> = tree.roots().map(|r| r.value).collect();
    let expected: Vec<Octet> = Root::ALL.iter().map(|r| r.octet()).collect();
    if roots == expected {
        report.push(CheckResult::pass("roots", "roots are INIT, BEFORE, AFTER and RUN"));
    } else {
        report.push(CheckResult::fail_with_details(
            "roots",
            "root set differs from the four sentinels",
            hexes(roots),
        ));
    }
    let fixed = Octet::all()
        .filter(|&o| o.center() == o && !is_root(o))
        .collect::<Vec<_>>();
    if !fixed.is_empty() {
        report.push(CheckResult::fail_with_details(
            "roots",
            "non-root fixed points of center",
            hexes(fixed),
        ));
    }
}

fn check_cardinalities(tree: &Tree, report: &mut AuditReport) {
    let counts = tree.level_counts();
    if counts == LEVEL_CARDINALITIES {
        report.push(CheckResult::pass(
            "levels",
            format!("level cardinalities {counts:?}"),
        ));
    } else {
        report.push(CheckResult::fail(
            "levels",
            format!("level cardinalities {counts:?}, expected {LEVEL_CARDINALITIES:?}"),
        ));
    }
}

fn check_depth_bound(tree: &Tree, report: &mut AuditReport) {
    let deep: Vec<Octet> = tree
        .walk()
        .into_iter()
        .filter(|r| r.depth > MAX_DEPTH)
        .map(|r| r.value)
        .collect();
    if deep.is_empty() {
        report.push(CheckResult::pass(
            "depth",
            format!("every octet reaches a root within {MAX_DEPTH} steps"),
        ));
    } else {
        report.push(CheckResult::fail_with_details(
            "depth",
            format!("{} octets exceed depth {MAX_DEPTH}", deep.len()),
            hexes(deep),
        ));
    }
}

fn check_single_parent(tree: &Tree, report: &mut AuditReport) {
    let mut seen = BTreeSet::new();
    let mut repeated = Vec::new();
    for root in tree.roots() {
        for record in tree.subtree(root.value) {
            if !seen.insert(record.value) {
                repeated.push(record.value);
            }
        }
    }
    if repeated.is_empty() {
        report.push(CheckResult::pass("parents", "every octet has exactly one parent"));
    } else {
        report.push(CheckResult::fail_with_details(
            "parents",
            "octets reachable from more than one root",
            hexes(repeated),
        ));
    }
}

fn check_symmetry_partition(tree: &Tree, report: &mut AuditReport) {
    let bad: Vec<Octet> = tree
        .walk()
        .into_iter()
        .filter(|r| r.symmetry.len() != 1)
        .map(|r| r.value)
        .collect();
    if bad.is_empty() {
        let mut census = [0usize; Symmetry::ALL.len()];
        for record in tree.walk() {
            for tag in record.symmetry.iter() {
                census[tag.index() as usize] += 1;
            }
        }
        report.push(CheckResult::pass(
            "symmetry",
            format!("each octet carries one symmetry tag {census:?}"),
        ));
    } else {
        report.push(CheckResult::fail_with_details(
            "symmetry",
            "octets without exactly one symmetry tag",
            hexes(bad),
        ));
    }
}
