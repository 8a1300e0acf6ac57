//! Serialize an error table back to its JSON form.

use std::collections::BTreeMap;
use std::io::{self, Write};

use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::model::{ErrorRecord, ErrorTable};

/// Default file name used when writing into a directory.
pub const TABLE_FILE: &str = "SBMLErrors.json";

/// Write `table` as a 4-space indented object with sorted keys.
///
/// Codes are ordered numerically and record fields alphabetically, so the
/// output is stable across runs.
pub fn write_table<W: Write + ?Sized>(w: &mut W, table: &ErrorTable) -> io::Result<()> {
    let mut sorted = BTreeMap::<u32, serde_json::Value>::new();
    for (&code, record) in &table.records {
        sorted.insert(code, record_value(record)?);
    }

    let mut ser = Serializer::with_formatter(&mut *w, PrettyFormatter::with_indent(b"    "));
    sorted.serialize(&mut ser).map_err(io::Error::from)?;
    writeln!(w)?;
    Ok(())
}

// `Value::Object` keeps keys in a `BTreeMap`, which gives alphabetical fields.
fn record_value(record: &ErrorRecord) -> io::Result<serde_json::Value> {
    serde_json::to_value(record).map_err(io::Error::from)
}
