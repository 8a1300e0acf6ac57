//! End-to-end generation from the sample error table.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use sbml_errgen::config::GeneratorConfig;
use sbml_errgen::writer::Artifact;
use sbml_errgen::{extract, generate};

const TABLE: &str = "tests/error_table.json";

fn generate_all(out: &Path) {
    generate(Path::new(TABLE), &Artifact::ALL, Some(out), &GeneratorConfig::default())
        .expect("generation ok");
}

/// Names declared as `public static final int NAME = ...;`.
fn declared_constants(interface: &str) -> HashSet<String> {
    interface
        .lines()
        .filter_map(|l| l.trim().strip_prefix("public static final int "))
        .filter_map(|l| l.split_whitespace().next())
        .map(str::to_string)
        .collect()
}

/// Names used as `SBMLErrorCodes.NAME` bundle keys.
fn bundle_keys(bundle: &str) -> Vec<String> {
    bundle
        .lines()
        .filter_map(|l| l.split("Integer.toString(SBMLErrorCodes.").nth(1))
        .filter_map(|l| l.split(')').next())
        .map(str::to_string)
        .collect()
}

#[test]
fn writes_every_artifact() {
    let dir = tempfile::tempdir().unwrap();
    generate_all(dir.path());

    for name in ["SBMLErrorCodes.java", "SBMLErrorMessage.java", "SBMLErrorShortMessage.java"] {
        assert!(dir.path().join(name).is_file(), "{name} missing");
    }
}

#[test]
fn interface_contains_wrapped_comments() {
    let dir = tempfile::tempdir().unwrap();
    generate_all(dir.path());
    let interface = fs::read_to_string(dir.path().join("SBMLErrorCodes.java")).unwrap();

    let expected = "\t /**\n\
                    \t  * Error code 6021704:\n\
                    \t  * The attributes 'layout:width', 'layout:height' and 'layout:depth' of a \n\
                    \t  * &lt;dimensions&gt; element must be of the data type 'double'. Reference: L3V1 \n\
                    \t  * Layout V1 Section 3.4.2 \n\
                    \t  */\n \t public static final int LAYOUT_21704 = 6021704; \n\
                    }\n";
    assert!(interface.ends_with(expected), "got:\n{interface}");

    let names = declared_constants(&interface);
    let expected_names: HashSet<String> = [
        "CORE_00000",
        "CORE_10101",
        "CORE_10212",
        "COMP_10100",
        "LAYOUT_21704",
    ]
    .into_iter()
    .map(str::to_string)
    .collect();
    assert_eq!(names, expected_names);

    for line in interface.lines().filter(|l| l.starts_with("\t  * ")) {
        // prefix + at most 80 columns + trailing blank
        assert!(line.chars().count() <= "\t  * ".len() + 80 + 1, "too long: {line}");
    }
}

#[test]
fn bundle_keys_match_interface_constants() {
    let dir = tempfile::tempdir().unwrap();
    generate_all(dir.path());

    let interface = fs::read_to_string(dir.path().join("SBMLErrorCodes.java")).unwrap();
    let constants = declared_constants(&interface);

    let messages = fs::read_to_string(dir.path().join("SBMLErrorMessage.java")).unwrap();
    let message_keys = bundle_keys(&messages);
    assert_eq!(message_keys.len(), constants.len());
    for key in &message_keys {
        assert!(constants.contains(key), "{key} not declared");
    }

    let short = fs::read_to_string(dir.path().join("SBMLErrorShortMessage.java")).unwrap();
    let short_keys = bundle_keys(&short);
    // 10212 has no short message
    assert_eq!(short_keys.len(), 4);
    assert!(!short_keys.iter().any(|k| k == "CORE_10212"));
    for key in &short_keys {
        assert!(constants.contains(key), "{key} not declared");
    }
}

#[test]
fn message_bundle_escapes_quotes() {
    let dir = tempfile::tempdir().unwrap();
    generate_all(dir.path());
    let messages = fs::read_to_string(dir.path().join("SBMLErrorMessage.java")).unwrap();

    assert!(messages.contains(
        "An example valid declaration is '<?xml version=\\\"1.0\\\" encoding=\\\"UTF-8\\\"?>'. Reference: L3V1 Section 4.1\");  \n"
    ));
    assert!(messages.starts_with("/*\n * ----"));
    assert!(messages.contains("import org.sbml.jsbml.validator.offline.factory.SBMLErrorCodes;"));
}

#[test]
fn regeneration_is_byte_identical() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    generate_all(first.path());
    generate_all(second.path());

    for artifact in Artifact::ALL {
        let name = artifact.file_name();
        let a = fs::read(first.path().join(&name)).unwrap();
        let b = fs::read(second.path().join(&name)).unwrap();
        assert_eq!(a, b, "{name} differs between runs");
    }
}

#[test]
fn creates_missing_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("src").join("generated");
    generate(
        Path::new(TABLE),
        &[Artifact::Codes],
        Some(nested.as_path()),
        &GeneratorConfig::default(),
    )
    .expect("generation ok");

    assert!(nested.join("SBMLErrorCodes.java").is_file());
    assert!(!nested.join("SBMLErrorMessage.java").exists());
}

#[test]
fn missing_input_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let err = generate(
        Path::new("tests/does_not_exist.json"),
        &Artifact::ALL,
        Some(dir.path()),
        &GeneratorConfig::default(),
    )
    .unwrap_err();

    assert!(err.to_string().starts_with("Reading tests/does_not_exist.json"), "got {err}");
}

#[test]
fn non_numeric_key_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("bad.json");
    fs::write(&input, r#"{ "core-1": { "Message": "x" } }"#).unwrap();

    let err = generate(&input, &Artifact::ALL, Some(dir.path()), &GeneratorConfig::default())
        .unwrap_err();
    let chain = format!("{err:#}");
    assert!(chain.contains("`core-1` is not a non-negative integer"), "got {chain}");
}

#[test]
fn extract_writes_normalized_table() {
    let dir = tempfile::tempdir().unwrap();
    extract(Path::new("tests/severity_dump.json"), Some(dir.path())).expect("extract ok");

    let json = fs::read_to_string(dir.path().join("SBMLErrors.json")).unwrap();
    let table = sbml_errgen::parser::load_from_json(&json).expect("round trip");

    // 99999 is an ignored code
    assert_eq!(table.records.keys().copied().collect::<Vec<_>>(), vec![10101, 10212]);

    let piecewise = &table.records[&10212];
    assert_eq!(piecewise.available.as_deref(), Some("L2V1"));
    assert_eq!(piecewise.package, "core");
    assert_eq!(piecewise.severity_overrides.len(), 3);

    assert!(json.starts_with(
        "{\n    \"10101\": {\n        \"Category\": \"General SBML conformance\",\n"
    ));
}
