use crate::Location;
use crate::ast::Name;
use crate::ast::NodeIdentity;
use std::sync::Arc;

/// `scalar Name`
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarDefinition {
    pub name: Arc<Name>,
    pub location: Option<Location>,
}

impl ScalarDefinition {
    pub fn update(self: &Arc<Self>, name: Arc<Name>) -> Arc<Self> {
        if self.name.is_same_node(&name) {
            return self.clone();
        }
        Arc::new(Self {
            name,
            location: self.location.clone(),
        })
    }
}
