use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::processor::namespace::Namespace;

/// Severity class of an error in a given SBML level/version.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Fatal,
    Error,
    Warning,
    #[default]
    Na,
}

impl Severity {
    /// Map the numeric severity reported by the validation library.
    pub fn from_code(code: i64) -> Self {
        match code {
            3 => Severity::Fatal,
            2 => Severity::Error,
            1 => Severity::Warning,
            _ => Severity::Na,
        }
    }

    /// Index into a `[na, warning, error, fatal]` counter.
    pub fn rank(self) -> usize {
        match self {
            Severity::Na => 0,
            Severity::Warning => 1,
            Severity::Error => 2,
            Severity::Fatal => 3,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Fatal => "fatal",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Na => "na",
        }
    }
}

impl From<&str> for Severity {
    fn from(s: &str) -> Self {
        match s {
            "fatal" => Severity::Fatal,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Na,
        }
    }
}

impl From<String> for Severity {
    fn from(s: String) -> Self {
        Severity::from(s.as_str())
    }
}

impl From<Severity> for String {
    fn from(s: Severity) -> Self {
        s.as_str().to_string()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An SBML level/version pair, printed as `L3V1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LevelVersion {
    pub level: u8,
    pub version: u8,
}

impl LevelVersion {
    pub const fn new(level: u8, version: u8) -> Self {
        Self { level, version }
    }

    /// Key of the per-level/version override inside an error record.
    pub fn severity_key(self) -> String {
        format!("Severity{self}")
    }
}

/// Every SBML level/version the error table knows about, oldest first.
pub const LEVEL_VERSIONS: [LevelVersion; 9] = [
    LevelVersion::new(1, 1),
    LevelVersion::new(1, 2),
    LevelVersion::new(2, 1),
    LevelVersion::new(2, 2),
    LevelVersion::new(2, 3),
    LevelVersion::new(2, 4),
    LevelVersion::new(2, 5),
    LevelVersion::new(3, 1),
    LevelVersion::new(3, 2),
];

impl fmt::Display for LevelVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L{}V{}", self.level, self.version)
    }
}

impl FromStr for LevelVersion {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rest = s
            .strip_prefix('L')
            .ok_or_else(|| format!("`{s}` does not start with `L`"))?;
        let (level, version) = rest
            .split_once('V')
            .ok_or_else(|| format!("`{s}` has no `V` separator"))?;
        let level = level
            .parse()
            .map_err(|e| format!("bad level in `{s}`: {e}"))?;
        let version = version
            .parse()
            .map_err(|e| format!("bad version in `{s}`: {e}"))?;
        Ok(Self { level, version })
    }
}

/// One entry of the error table.
///
/// Serializes with the JSON key names (`Message`, `DefaultSeverity`, ...),
/// `severity_overrides` flattened as `SeverityLxVy` keys.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ErrorRecord {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub short_message: Option<String>,
    pub category: String,
    pub default_severity: Severity,
    pub package: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available: Option<String>,
    #[serde(flatten)]
    pub severity_overrides: BTreeMap<String, Severity>,
}

/// An error record as it appears in the JSON, 1-to-1 with the object.
///
/// Every key that is not a named field lands in `extra`, whatever its type.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RawRecord {
    pub message: String,
    #[serde(default)]
    pub short_message: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub default_severity: Severity,
    #[serde(default)]
    pub package: String,
    #[serde(default)]
    pub available: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

impl RawRecord {
    /// Keep the `SeverityLxVy` string entries for known level/versions and
    /// drop everything else from `extra` with a warning.
    pub fn into_record(self, code: u32) -> ErrorRecord {
        let mut severity_overrides = BTreeMap::new();

        for (key, value) in self.extra {
            let lv = key
                .strip_prefix("Severity")
                .and_then(|lv| lv.parse::<LevelVersion>().ok())
                .filter(|lv| LEVEL_VERSIONS.contains(lv));
            match (lv, value) {
                (Some(_), serde_json::Value::String(s)) => {
                    severity_overrides.insert(key, Severity::from(s));
                }
                (Some(_), other) => {
                    warn!("record {code}: `{key}` is not a severity string: {other}");
                }
                (None, _) => warn!("record {code}: ignoring unknown field `{key}`"),
            }
        }

        ErrorRecord {
            message: self.message,
            short_message: self.short_message,
            category: self.category,
            default_severity: self.default_severity,
            package: self.package,
            available: self.available,
            severity_overrides,
        }
    }
}

impl ErrorRecord {
    /// Severity of this error in `lv`, falling back to the default.
    pub fn severity_in(&self, lv: LevelVersion) -> Severity {
        self.severity_overrides
            .get(&lv.severity_key())
            .copied()
            .unwrap_or(self.default_severity)
    }
}

/// The whole error table, ordered by numeric code.
#[derive(Debug, Clone, Default)]
pub struct ErrorTable {
    pub records: BTreeMap<u32, ErrorRecord>,
}

/// One entry of a severity dump taken from the validation library.
///
/// `Severities` holds the raw numeric severity per `LxVy`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct DumpEntry {
    pub message: String,
    #[serde(default)]
    pub short_message: Option<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub severities: BTreeMap<String, i64>,
}

impl DumpEntry {
    pub fn severity_code(&self, lv: LevelVersion) -> i64 {
        self.severities.get(&lv.to_string()).copied().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SeverityDump {
    pub entries: BTreeMap<u32, DumpEntry>,
}

/// A single generated constant, ready for the writers.
#[derive(Debug, Clone, PartialEq)]
pub struct ErrorConstant {
    pub code: u32,
    pub name: String,
    pub namespace: Namespace,
    /// Wrapped, comment-escaped message lines.
    pub comment: Vec<String>,
    /// Message escaped for a Java string literal.
    pub message: String,
    pub short_message: Option<String>,
}

/// Fully processed table handed to `writer`.
#[derive(Debug, Clone, Default)]
pub struct ProcessedTable {
    pub constants: Vec<ErrorConstant>,
}
