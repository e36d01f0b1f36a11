use crate::Location;
use crate::ast::NodeIdentity;
use crate::ast::TypeAnnotation;
use std::sync::Arc;

/// `[Type]`
#[derive(Clone, Debug, PartialEq)]
pub struct ListType {
    pub item_type: TypeAnnotation,
    pub location: Option<Location>,
}

impl ListType {
    pub fn update(self: &Arc<Self>, item_type: TypeAnnotation) -> Arc<Self> {
        if self.item_type.is_same_node(&item_type) {
            return self.clone();
        }
        Arc::new(Self {
            item_type,
            location: self.location.clone(),
        })
    }
}
