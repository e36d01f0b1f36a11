//! Tests for [`crate::ast::TypeAnnotation`].

use crate::ast::ListType;
use crate::ast::NodeKind;
use crate::ast::NonNullType;
use crate::ast::NullableTypeAnnotation;
use crate::ast::TypeAnnotation;
use crate::ast::tests::ast_test_utils::make_named_type;
use std::sync::Arc;

/// `[[Int!]]!`
fn nested_list_type() -> TypeAnnotation {
    let int = NullableTypeAnnotation::Named(make_named_type("Int"));
    let non_null_int = TypeAnnotation::NonNull(Arc::new(NonNullType {
        inner_type: int,
        location: None,
    }));
    let inner_list = TypeAnnotation::List(Arc::new(ListType {
        item_type: non_null_int,
        location: None,
    }));
    let outer_list = Arc::new(ListType {
        item_type: inner_list,
        location: None,
    });
    TypeAnnotation::NonNull(Arc::new(NonNullType {
        inner_type: NullableTypeAnnotation::List(outer_list),
        location: None,
    }))
}

#[test]
fn innermost_name_unwraps_every_wrapper() {
    assert_eq!(TypeAnnotation::Named(make_named_type("ID")).innermost_name(), "ID");
    assert_eq!(nested_list_type().innermost_name(), "Int");
}

#[test]
fn non_null_and_kind() {
    let annotation = nested_list_type();
    assert!(annotation.is_non_null());
    assert_eq!(annotation.kind(), NodeKind::NonNullType);
    assert!(!TypeAnnotation::Named(make_named_type("ID")).is_non_null());
}

#[test]
fn nullable_annotation_converts_without_copying() {
    let named = make_named_type("ID");
    let annotation = TypeAnnotation::from(NullableTypeAnnotation::Named(named.clone()));
    let TypeAnnotation::Named(converted) = annotation else {
        panic!("expected a named type");
    };
    assert!(Arc::ptr_eq(&converted, &named));
}
