use std::collections::{BTreeMap, HashMap};

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use crate::error::TableError;
use crate::model::{DumpEntry, ErrorTable, RawRecord, SeverityDump};

/// Parse the error table JSON into an `ErrorTable`.
///
/// The file is a single object whose keys are decimal error codes and whose
/// values are error records:
///
/// ```json
/// { "10212": { "Message": "...", "Package": "core", "SeverityL2V1": "warning" } }
/// ```
///
/// Non-numeric keys, two keys naming the same code and records without a
/// `Message` are reported as errors.
pub fn load_from_json(json: &str) -> Result<ErrorTable, TableError> {
    let root: Value = serde_json::from_str(json)?;
    let object = root.as_object().ok_or(TableError::NotAnObject)?;

    debug!("Found {} error records", object.len());

    let records = parse_entries::<RawRecord>(object)?
        .into_iter()
        .map(|(code, raw)| (code, raw.into_record(code)))
        .collect();

    Ok(ErrorTable { records })
}

/// Parse a severity dump taken from the validation library.
///
/// Same layout as the error table, but every entry carries a `Severities`
/// object with the raw numeric severity for each `LxVy`.
pub fn load_severity_dump(json: &str) -> Result<SeverityDump, TableError> {
    let root: Value = serde_json::from_str(json)?;
    let object = root.as_object().ok_or(TableError::NotAnObject)?;

    debug!("Found {} dump entries", object.len());

    Ok(SeverityDump {
        entries: parse_entries::<DumpEntry>(object)?,
    })
}

fn parse_entries<T: DeserializeOwned>(
    object: &Map<String, Value>,
) -> Result<BTreeMap<u32, T>, TableError> {
    let mut entries = BTreeMap::new();
    let mut keys = HashMap::<u32, &str>::with_capacity(object.len());

    for (key, value) in object {
        let code = parse_code(key)?;
        if let Some(first_key) = keys.insert(code, key) {
            return Err(TableError::DuplicateCode {
                code,
                first_key: first_key.to_string(),
                second_key: key.clone(),
            });
        }

        let entry = serde_json::from_value(value.clone()).map_err(|source| TableError::Record {
            code: key.clone(),
            source,
        })?;
        entries.insert(code, entry);
    }

    Ok(entries)
}

fn parse_code(key: &str) -> Result<u32, TableError> {
    let trimmed = key.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TableError::InvalidCode(key.to_string()));
    }
    trimmed
        .parse()
        .map_err(|_| TableError::InvalidCode(key.to_string()))
}
