use super::*;
use std::io::Write;

#[test]
fn test_defaults() {
    let options = ObjCNameOptions::default();
    assert!(!options.exact_method_names);
    assert!(options.cache_type_names);
}

#[test]
fn test_from_json_partial() {
    let options = ObjCNameOptions::from_json(r#"{ "exactMethodNames": true }"#).expect("parses");
    assert!(options.exact_method_names);
    assert!(options.cache_type_names);
}

#[test]
fn test_from_json_empty_object() {
    let options = ObjCNameOptions::from_json("{}").expect("parses");
    assert_eq!(options, ObjCNameOptions::default());
}

#[test]
fn test_from_json_rejects_unknown_fields() {
    let err = ObjCNameOptions::from_json(r#"{ "exactNames": true }"#).unwrap_err();
    assert!(matches!(err, OptionsError::Parse(_)));
    assert!(err.to_string().starts_with("invalid naming options"));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(file, r#"{{ "cacheTypeNames": false }}"#).expect("write options");

    let options = ObjCNameOptions::from_file(file.path()).expect("loads");
    assert!(!options.cache_type_names);
    assert!(!options.exact_method_names);
}

#[test]
fn test_from_missing_file() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("missing.json");
    let err = ObjCNameOptions::from_file(&path).unwrap_err();
    assert!(matches!(err, OptionsError::Io { .. }));
    assert!(err.to_string().contains("missing.json"));
}
