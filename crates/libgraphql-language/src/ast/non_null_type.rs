use crate::Location;
use crate::ast::NodeIdentity;
use crate::ast::NullableTypeAnnotation;
use std::sync::Arc;

/// `Type!`. The wrapped type is never itself non-null.
#[derive(Clone, Debug, PartialEq)]
pub struct NonNullType {
    pub inner_type: NullableTypeAnnotation,
    pub location: Option<Location>,
}

impl NonNullType {
    pub fn update(self: &Arc<Self>, inner_type: NullableTypeAnnotation) -> Arc<Self> {
        if self.inner_type.is_same_node(&inner_type) {
            return self.clone();
        }
        Arc::new(Self {
            inner_type,
            location: self.location.clone(),
        })
    }
}
