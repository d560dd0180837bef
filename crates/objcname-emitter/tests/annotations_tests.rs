use super::*;

#[test]
fn test_file_opt_in() {
    assert_eq!(
        FileOptInAnnotation.to_string(),
        "@file:kotlin.OptIn(kotlin.experimental.ExperimentalObjCName::class)"
    );
}

#[test]
fn test_name_without_exact() {
    assert_eq!(
        ObjCNameAnnotation::new("ComAcmeWidget").to_string(),
        "@kotlin.native.ObjCName(\"ComAcmeWidget\")"
    );
}

#[test]
fn test_name_with_exact() {
    assert_eq!(
        ObjCNameAnnotation::new("pro").with_exact(false).to_string(),
        "@kotlin.native.ObjCName(\"pro\", exact = false)"
    );
    assert_eq!(
        ObjCNameAnnotation::new("NSString").with_exact(true).to_string(),
        "@kotlin.native.ObjCName(\"NSString\", exact = true)"
    );
}

#[test]
fn test_name_is_escaped() {
    assert_eq!(
        ObjCNameAnnotation::new("a\"b\\c$d").to_string(),
        "@kotlin.native.ObjCName(\"a\\\"b\\\\c\\$d\")"
    );
}

#[test]
fn test_method_annotations_from_decomposition() {
    let decomposition = Decomposition {
        method_name: Some("pro".to_string()),
        parameter_names: vec!["cess".to_string(), "flag".to_string()],
    };
    let annotations = MethodAnnotations::from_decomposition(&decomposition, false);
    assert_eq!(annotations.method, ObjCNameAnnotation::new("pro").with_exact(false));
    assert_eq!(
        annotations.parameters,
        vec![ObjCNameAnnotation::new("cess"), ObjCNameAnnotation::new("flag")]
    );
}

#[test]
fn test_method_annotations_without_override_use_empty_name() {
    let decomposition = Decomposition {
        method_name: None,
        parameter_names: vec!["withInt".to_string()],
    };
    let annotations = MethodAnnotations::from_decomposition(&decomposition, true);
    assert_eq!(
        annotations.method.to_string(),
        "@kotlin.native.ObjCName(\"\", exact = true)"
    );
    assert_eq!(
        annotations.parameters[0].to_string(),
        "@kotlin.native.ObjCName(\"withInt\")"
    );
}
