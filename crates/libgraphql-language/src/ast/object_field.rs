use crate::Location;
use crate::ast::Name;
use crate::ast::NodeIdentity;
use crate::ast::Value;
use std::sync::Arc;

/// `name: value` inside an object value.
#[derive(Clone, Debug, PartialEq)]
pub struct ObjectField {
    pub name: Arc<Name>,
    pub value: Value,
    pub location: Option<Location>,
}

impl ObjectField {
    pub fn update(self: &Arc<Self>, name: Arc<Name>, value: Value) -> Arc<Self> {
        if self.name.is_same_node(&name) && self.value.is_same_node(&value) {
            return self.clone();
        }
        Arc::new(Self {
            name,
            value,
            location: self.location.clone(),
        })
    }
}
