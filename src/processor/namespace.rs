//! Classification of error codes into SBML package namespaces.
//!
//! Every package owns the codes whose value, rounded down to a multiple of
//! 100000, equals the package's start value.

use std::fmt;

/// Width of the block a single range start covers.
pub const RANGE_WIDTH: u32 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Namespace {
    pub label: &'static str,
    pub start: u32,
}

/// Package ranges, ascending by start value.
pub const PACKAGES: [Namespace; 13] = [
    Namespace::new("core", 0),
    Namespace::new("comp", 1_000_000),
    Namespace::new("req", 1_100_000),
    Namespace::new("spatial", 1_200_000),
    Namespace::new("render", 1_300_000),
    Namespace::new("fbc", 2_000_000),
    Namespace::new("qual", 3_000_000),
    Namespace::new("groups", 4_000_000),
    Namespace::new("distrib", 5_000_000),
    Namespace::new("layout", 6_000_000),
    Namespace::new("multi", 7_000_000),
    Namespace::new("arrays", 8_000_000),
    Namespace::new("dyn", 9_000_000),
];

/// Returned for codes outside every package range.
pub const NOT_FOUND: Namespace = Namespace::new("PACKAGE_NOT_FOUND", 0);

impl Namespace {
    pub const fn new(label: &'static str, start: u32) -> Self {
        Self { label, start }
    }

    pub fn is_found(&self) -> bool {
        *self != NOT_FOUND
    }

    /// Upper-cased label used as constant-name prefix.
    pub fn prefix(&self) -> String {
        self.label.to_ascii_uppercase()
    }

    /// Name of the Java constant for `code`, e.g. `COMP_10100`.
    pub fn constant_name(&self, code: u32) -> String {
        format!("{}_{:05}", self.prefix(), code - self.start)
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Find the package namespace `code` belongs to.
pub fn classify(code: u32) -> Namespace {
    let block = code / RANGE_WIDTH * RANGE_WIDTH;
    PACKAGES
        .iter()
        .copied()
        .find(|ns| ns.start == block)
        .unwrap_or(NOT_FOUND)
}
