//! Turns a loaded error table into constants ready for the writers.
pub mod namespace;
pub mod severity;
pub mod text;

use tracing::{debug, warn};

use crate::config::GeneratorConfig;
use crate::model::{ErrorConstant, ErrorTable, ProcessedTable};

/// Classify, name and format every record, in ascending code order.
///
/// Codes are unique in an `ErrorTable` and `constant_name` is injective, so
/// every constant name is unique too.
pub fn run(table: &ErrorTable, config: &GeneratorConfig) -> ProcessedTable {
    let mut constants = Vec::with_capacity(table.records.len());

    for (&code, record) in &table.records {
        let namespace = namespace::classify(code);
        if !namespace.is_found() {
            warn!("error {code} is outside every package range");
        } else if !record.package.is_empty() && record.package != namespace.label {
            warn!(
                "error {code} is tagged `{}` but its code belongs to `{namespace}`",
                record.package
            );
        }

        let name = namespace.constant_name(code);

        let comment = text::wrap(&text::escape_comment(&record.message), config.wrap_width);

        constants.push(ErrorConstant {
            code,
            name,
            namespace,
            comment,
            message: text::escape_java_string(&record.message),
            short_message: record
                .short_message
                .as_deref()
                .map(text::escape_java_string)
                .filter(|s| !s.is_empty()),
        });
    }

    debug!("Processed {} constants", constants.len());
    ProcessedTable { constants }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::load_from_json;

    fn process(json: &str) -> ProcessedTable {
        let table = load_from_json(json).expect("valid table");
        run(&table, &GeneratorConfig::default())
    }

    #[test]
    fn test_constants_follow_code_order() {
        let processed = process(
            r#"{
                "6021704": { "Message": "layout", "Package": "layout" },
                "0": { "Message": "Unrecognized error encountered internally." },
                "1010100": { "Message": "comp", "Package": "comp" }
            }"#,
        );

        let names: Vec<&str> = processed.constants.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["CORE_00000", "COMP_10100", "LAYOUT_21704"]);
    }

    #[test]
    fn test_message_formatting() {
        let processed = process(
            r#"{
                "10201": {
                    "Message": "All MathML content must appear within a <math> element in namespace \"http://www.w3.org/1998/Math/MathML\".\n",
                    "ShortMessage": "  "
                }
            }"#,
        );
        let constant = &processed.constants[0];

        assert_eq!(
            constant.comment,
            vec![
                "All MathML content must appear within a &lt;math&gt; element in namespace",
                "\"http://www.w3.org/1998/Math/MathML\".",
            ]
        );
        assert_eq!(
            constant.message,
            "All MathML content must appear within a <math> element in namespace \\\"http://www.w3.org/1998/Math/MathML\\\"."
        );
        assert_eq!(constant.short_message, None);
    }

    #[test]
    fn test_wrap_width_is_configurable() {
        let table = load_from_json(r#"{ "1": { "Message": "Out of memory." } }"#).expect("valid");
        let config = GeneratorConfig {
            wrap_width: 6,
            ..GeneratorConfig::default()
        };
        let processed = run(&table, &config);

        assert_eq!(processed.constants[0].comment, vec!["Out of", "memory."]);
    }

    #[test]
    fn test_unclassified_code_uses_sentinel_prefix() {
        let processed = process(r#"{ "1400001": { "Message": "orphan" } }"#);
        let constant = &processed.constants[0];

        assert!(!constant.namespace.is_found());
        assert_eq!(constant.name, "PACKAGE_NOT_FOUND_1400001");
    }

    #[test]
    fn test_names_are_unique_and_deterministic() {
        let json = r#"{
            "10101": { "Message": "a" },
            "1010101": { "Message": "b" },
            "2010101": { "Message": "c" },
            "3010101": { "Message": "d" }
        }"#;
        let first = process(json);
        let second = process(json);

        let names: Vec<&str> = first.constants.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["CORE_10101", "COMP_10101", "FBC_10101", "QUAL_10101"]);
        assert_eq!(first.constants, second.constants);
    }
}
