use crate::Location;
use crate::ast::InputFieldDefinition;
use crate::ast::Name;
use crate::ast::NodeIdentity;
use crate::ast::ast_node::list_unchanged;
use std::sync::Arc;

/// `input Name { field: Type = default }`
#[derive(Clone, Debug, PartialEq)]
pub struct InputObjectDefinition {
    pub name: Arc<Name>,
    pub fields: Vec<Arc<InputFieldDefinition>>,
    pub location: Option<Location>,
}

impl InputObjectDefinition {
    pub fn update(
        self: &Arc<Self>,
        name: Arc<Name>,
        fields: Option<Vec<Arc<InputFieldDefinition>>>,
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
