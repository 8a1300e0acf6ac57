//! Builds error-table records from a validation-library severity dump.

use std::collections::BTreeMap;

use tracing::debug;

use crate::model::{DumpEntry, ErrorRecord, ErrorTable, LEVEL_VERSIONS, Severity, SeverityDump};
use crate::processor::namespace;

/// Codes that are never documented.
pub const IGNORED_CODES: [u32; 13] = [
    9999, 10599, 20905, 21112, 29999, 90000, 90501, 99502, 99503, 99504, 99994, 99995, 99999,
];

/// Codes at or above this value are internal to the library.
pub const MAX_CODE: u32 = 9_999_999;

const BY_RANK: [Severity; 4] = [Severity::Na, Severity::Warning, Severity::Error, Severity::Fatal];

/// Turn every documented entry of `dump` into an error record.
pub fn extract(dump: &SeverityDump) -> ErrorTable {
    let mut table = ErrorTable::default();

    for (&code, entry) in &dump.entries {
        if code >= MAX_CODE || IGNORED_CODES.contains(&code) {
            debug!("skipping error {code}");
            continue;
        }
        table.records.insert(code, normalize(code, entry));
    }

    table
}

/// Compute `Available`, `DefaultSeverity` and the per-level/version
/// overrides of one entry.
///
/// The default is the most frequent severity over the level/versions where
/// the error exists; a later class only replaces an earlier one when it is
/// strictly more frequent. Overrides are recorded for every level/version
/// whose severity differs from the default.
pub fn normalize(code: u32, entry: &DumpEntry) -> ErrorRecord {
    let severities: Vec<Severity> = LEVEL_VERSIONS
        .iter()
        .map(|&lv| Severity::from_code(entry.severity_code(lv)))
        .collect();

    let since = severities
        .iter()
        .position(|s| *s != Severity::Na)
        .unwrap_or(0);
    let available = (since > 0).then(|| LEVEL_VERSIONS[since].to_string());

    let mut counter = [0usize; 4];
    for severity in &severities[since..] {
        counter[severity.rank()] += 1;
    }

    let mut default_rank = 0;
    for rank in 1..counter.len() {
        if counter[rank] > counter[default_rank] {
            default_rank = rank;
        }
    }
    let default_severity = BY_RANK[default_rank];

    let severity_overrides: BTreeMap<String, Severity> = LEVEL_VERSIONS
        .iter()
        .zip(&severities)
        .filter(|(_, s)| **s != default_severity)
        .map(|(lv, s)| (lv.severity_key(), *s))
        .collect();

    ErrorRecord {
        message: entry.message.clone(),
        short_message: entry.short_message.clone(),
        category: entry.category.clone(),
        default_severity,
        package: namespace::classify(code).label.to_string(),
        available,
        severity_overrides,
    }
}
