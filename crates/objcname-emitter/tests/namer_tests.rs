use super::*;
use crate::type_names::resolve_type_name;
use objcname_common::{Parameter, PrimitiveKind, Visibility, well_known};
use rayon::prelude::*;
use std::sync::Arc;

fn nested_chain() -> TypeSymbol {
    let outer = Arc::new(TypeSymbol::top_level("com.acme.Outer"));
    let middle = Arc::new(TypeSymbol::nested(outer, "Middle"));
    TypeSymbol::nested(middle, "Inner$1")
}

#[test]
fn test_cached_and_direct_names_agree() {
    let namer = ObjCNamer::default();
    let inner = nested_chain();
    assert_eq!(namer.type_name(&inner), "ComAcmeOuter_Middle_Inner_1");
    assert_eq!(namer.type_name(&inner), resolve_type_name(&inner));
}

#[test]
fn test_cache_holds_every_level_of_the_chain() {
    let namer = ObjCNamer::default();
    namer.type_name(&nested_chain());
    assert_eq!(namer.cached_type_names(), 3);

    // A second lookup is served from the cache.
    namer.type_name(&nested_chain());
    assert_eq!(namer.cached_type_names(), 3);
}

#[test]
fn test_cache_disabled() {
    let namer = ObjCNamer::new(ObjCNameOptions {
        cache_type_names: false,
        ..ObjCNameOptions::default()
    });
    assert!(!namer.options().cache_type_names);
    assert!(!namer.options().exact_method_names);
    assert_eq!(namer.type_name(&nested_chain()), "ComAcmeOuter_Middle_Inner_1");
    assert_eq!(namer.cached_type_names(), 0);
}

#[test]
fn test_type_name_cache_clear() {
    let cache = TypeNameCache::new();
    assert!(cache.is_empty());
    assert_eq!(cache.type_name(&TypeSymbol::top_level(well_known::STRING)), "NSString");
    assert_eq!(cache.len(), 1);
    cache.clear();
    assert!(cache.is_empty());
}

#[test]
fn test_type_reference_name() {
    let namer = ObjCNamer::default();
    let array = TypeReference::array(TypeSymbol::top_level("p.Widget").into(), 2);
    assert_eq!(namer.type_reference_name(&array, true).as_deref(), Ok("PWidgetArray2"));
    assert!(namer.type_reference_name(&PrimitiveKind::Void.into(), false).is_err());
}

#[test]
fn test_type_annotation() {
    let namer = ObjCNamer::default();
    let symbol = TypeSymbol::top_level("p.q.Widget");
    assert_eq!(
        namer.type_annotation(&symbol).to_string(),
        "@kotlin.native.ObjCName(\"PQWidget\")"
    );
    assert_eq!(
        namer.file_annotation().to_string(),
        "@file:kotlin.OptIn(kotlin.experimental.ExperimentalObjCName::class)"
    );
}

#[test]
fn test_method_annotations_follow_options() {
    let method = MethodSymbol::method("processItem")
        .with_objc_name("process:flag")
        .with_parameter(Parameter::new("item", TypeSymbol::top_level(well_known::OBJECT)))
        .with_parameter(Parameter::new("flag", PrimitiveKind::Boolean));

    let namer = ObjCNamer::new(ObjCNameOptions {
        exact_method_names: true,
        ..ObjCNameOptions::default()
    });
    let annotations = namer
        .method_annotations(&method)
        .expect("naming succeeds")
        .expect("method is annotated");
    assert_eq!(
        annotations.method.to_string(),
        "@kotlin.native.ObjCName(\"pro\", exact = true)"
    );
    let parameters: Vec<String> = annotations.parameters.iter().map(|a| a.to_string()).collect();
    assert_eq!(
        parameters,
        vec![
            "@kotlin.native.ObjCName(\"cess\")",
            "@kotlin.native.ObjCName(\"flag\")"
        ]
    );
}

#[test]
fn test_method_annotations_skip_private_methods() {
    let namer = ObjCNamer::default();
    let method = MethodSymbol::method("run").with_visibility(Visibility::Private);
    assert_eq!(namer.method_annotations(&method), Ok(None));
}

#[test]
fn test_method_names_use_cached_type_names() {
    let namer = ObjCNamer::default();
    let widget = TypeSymbol::nested(Arc::new(TypeSymbol::top_level("p.Outer")), "Widget");
    let method = MethodSymbol::method("accept").with_parameter(Parameter::new("w", widget));
    assert_eq!(
        namer.method_names(&method),
        Ok(Some(Decomposition {
            method_name: None,
            parameter_names: vec!["withPOuter_Widget".to_string()],
        }))
    );
    assert_eq!(namer.cached_type_names(), 2);
}

#[test]
fn test_parallel_naming_is_deterministic() {
    let namer = ObjCNamer::default();
    let symbols: Vec<TypeSymbol> = (0..64)
        .map(|i| {
            let outer = Arc::new(TypeSymbol::top_level(&format!("p{}.Outer", i % 4)));
            TypeSymbol::nested(outer, &format!("Inner{i}"))
        })
        .collect();

    let parallel: Vec<String> = symbols.par_iter().map(|s| namer.type_name(s)).collect();
    let sequential: Vec<String> = symbols.iter().map(resolve_type_name).collect();
    assert_eq!(parallel, sequential);
    assert_eq!(parallel[5], "P1Outer_Inner5");
    assert_eq!(namer.cached_type_names(), 64 + 4);
}
