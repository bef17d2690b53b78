use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;
use wingconv::conversion::{ConversionConfig, ConversionEngine};
use wingconv::ConversionError;

#[test]
fn test_heron_example() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("birds.csv");
    let output = tmp.path().join("birds.json");
    fs::write(&input, "Name,Cost\nCrow,1\n\"Heron, Great Blue\",3\n").unwrap();

    let metadata = wingconv::convert(&input, &output, false).unwrap();
    assert_eq!(metadata.rows, 2);

    let expected = r#"[
    {
        "Name": "Crow",
        "Cost": "1"
    },
    {
        "Name": "Heron, Great Blue",
        "Cost": "3"
    }
]"#;
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn test_missing_input_leaves_output_untouched() {
    let tmp = tempdir().unwrap();
    let output = tmp.path().join("out.json");
    fs::write(&output, "[\"keep me\"]").unwrap();

    let err = wingconv::convert(&tmp.path().join("absent.csv"), &output, false).unwrap_err();

    assert_matches!(err, ConversionError::NotFound { .. });
    assert_eq!(fs::read_to_string(&output).unwrap(), "[\"keep me\"]");
}

#[test]
fn test_windows_1252_text_becomes_utf8() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("cp1252.csv");
    let output = tmp.path().join("cp1252.json");
    // "Bewick’s Wren" with a right single quote (0x92), "Café" (0xE9)
    fs::write(&input, b"Common name,Note\nBewick\x92s Wren,Caf\xE9\n").unwrap();

    wingconv::convert(&input, &output, false).unwrap();

    let bytes = fs::read(&output).unwrap();
    let text = String::from_utf8(bytes).expect("output is UTF-8");
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(parsed[0]["Common name"], "Bewick\u{2019}s Wren");
    assert_eq!(parsed[0]["Note"], "Caf\u{e9}");
}

#[test]
fn test_undefined_byte_is_a_decode_error() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("bad.csv");
    let output = tmp.path().join("bad.json");
    fs::write(&input, b"Name\nOw\x81l\n").unwrap();

    let err = wingconv::convert(&input, &output, false).unwrap_err();

    assert_matches!(err, ConversionError::Decode { offset: 7, byte: 0x81, .. });
    assert!(!output.exists());
}

#[test]
fn test_conversion_is_idempotent() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("goals.csv");
    let output = tmp.path().join("goals.json");
    fs::write(&input, "Name,Round\n[egg] in [bowl] nest,1\nBirds with no eggs,\"2, 3\"\n").unwrap();

    wingconv::convert(&input, &output, false).unwrap();
    let first = fs::read(&output).unwrap();
    wingconv::convert(&input, &output, false).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_short_rows_are_padded() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("bonus.csv");
    let output = tmp.path().join("bonus.json");
    fs::write(&input, "Name,VP,Note\nAnatomist,2\n").unwrap();

    wingconv::convert(&input, &output, false).unwrap();

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();
    assert_eq!(
        parsed,
        serde_json::json!([{ "Name": "Anatomist", "VP": "2", "Note": "" }])
    );
}

#[test]
fn test_long_rows_are_rejected() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("bonus.csv");
    fs::write(&input, "Name\nAnatomist\nCartographer,extra\n").unwrap();

    let err = wingconv::convert(&input, &tmp.path().join("bonus.json"), false).unwrap_err();
    assert_matches!(
        err,
        ConversionError::Format {
            row: 2,
            expected: 1,
            found: 2
        }
    );
}

#[test]
fn test_header_only_file_writes_empty_array() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("empty.csv");
    let output = tmp.path().join("empty.json");
    fs::write(&input, "Name,Cost\n").unwrap();

    let metadata = wingconv::convert(&input, &output, false).unwrap();
    assert_eq!(metadata.rows, 0);
    assert_eq!(metadata.columns, 2);
    assert_eq!(fs::read_to_string(&output).unwrap(), "[]");
}

#[test]
fn test_echo_count_matches_rows() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("birds.csv");
    let output = tmp.path().join("birds.json");
    fs::write(&input, "Name,Cost\nCrow,1\nJay,2\nOwl,3\n").unwrap();

    let engine = ConversionEngine::new(ConversionConfig::default().with_echo(true));
    let mut echoed = Vec::new();
    engine.convert_with_echo(&input, &output, &mut echoed).unwrap();

    let echoed = String::from_utf8(echoed).unwrap();
    let blocks: Vec<serde_json::Value> = echoed
        .split("\n\n")
        .filter(|b| !b.trim().is_empty())
        .map(|b| serde_json::from_str(b).unwrap())
        .collect();
    let written: Vec<serde_json::Value> =
        serde_json::from_str(&fs::read_to_string(&output).unwrap()).unwrap();

    assert_eq!(blocks.len(), 3);
    assert_eq!(blocks, written);
}

#[test]
fn test_unwritable_output_is_an_io_error() {
    let tmp = tempdir().unwrap();
    let input = tmp.path().join("birds.csv");
    fs::write(&input, "Name\nCrow\n").unwrap();
    // a regular file cannot be used as the output's parent directory
    let blocker = tmp.path().join("blocker");
    fs::write(&blocker, "").unwrap();

    let err = wingconv::convert(&input, &blocker.join("out.json"), false).unwrap_err();
    assert_matches!(err, ConversionError::Io { .. });
}
