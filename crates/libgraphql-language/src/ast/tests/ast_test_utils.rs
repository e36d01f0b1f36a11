//! Helpers for building nodes by hand in unit tests.

use crate::GraphQLSource;
use crate::Location;
use crate::ast::Field;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::Selection;
use std::sync::Arc;

/// A location over `[start, end)` of `source`.
pub fn make_location(source: &GraphQLSource, start: u32, end: u32) -> Option<Location> {
    Some(Location::new(start, end, Some(source.clone())))
}

pub fn make_name(value: &str) -> Arc<Name> {
    Arc::new(Name::new(value))
}

pub fn make_named_type(name: &str) -> Arc<NamedType> {
    Arc::new(NamedType {
        name: make_name(name),
        location: None,
    })
}

/// A leaf field with no alias, arguments or directives.
pub fn make_field(name: &str) -> Arc<Field> {
    Arc::new(Field {
        alias: None,
        name: make_name(name),
        arguments: vec![],
        directives: vec![],
        selection_set: None,
        location: None,
    })
}

pub fn make_selection(name: &str) -> Selection {
    Selection::Field(make_field(name))
}
