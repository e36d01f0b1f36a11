use crate::Location;
use crate::ast::FieldDefinition;
use crate::ast::Name;
use crate::ast::NodeIdentity;
use crate::ast::ast_node::list_unchanged;
use std::sync::Arc;

/// `interface Name { field: Type }`
#[derive(Clone, Debug, PartialEq)]
pub struct InterfaceDefinition {
    pub name: Arc<Name>,
    pub fields: Vec<Arc<FieldDefinition>>,
    pub location: Option<Location>,
}

impl InterfaceDefinition {
    pub fn update(
        self: &Arc<Self>,
        name: Arc<Name>,
        fields: Option<Vec<Arc<FieldDefinition>>>,
    ) -> Arc<Self> {
        if self.name.is_same_node(&name) && list_unchanged(&self.fields, &fields) {
            return self.clone();
        }
        Arc::new(Self {
            name,
            fields: fields.unwrap_or_else(|| self.fields.clone()),
            location: self.location.clone(),
        })
    }
}
