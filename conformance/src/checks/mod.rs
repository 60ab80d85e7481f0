//! Conformance checks, grouped by category.
//!
//! Checks are behavioral: they DO things through the shim and verify the
//! actual outcome, not just that a call returned zero.

pub mod fs;
pub mod mm;
pub mod process;
pub mod time;

use anyhow::Result;

/// A single named check.
pub struct Check {
    /// Short check name.
    pub name: &'static str,
    /// Category for grouping and filtering.
    pub category: &'static str,
    /// What this check ensures for a kernel under test.
    pub ensures: &'static str,
    /// The check body.
    pub run: fn() -> Result<()>,
}

/// Collect every check.
pub fn all_checks() -> Vec<Check> {
    let mut checks = Vec::new();
    checks.extend(fs::checks());
    checks.extend(process::checks());
    checks.extend(time::checks());
    checks.extend(mm::checks());
    checks
}

/// A /tmp path unique to this process.
pub(crate) fn tmp_path(tag: &str) -> String {
    format!("/tmp/conformance-{}-{}", tag, std::process::id())
}
