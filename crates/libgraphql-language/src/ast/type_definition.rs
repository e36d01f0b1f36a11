use crate::Location;
use crate::ast::FieldDefinition;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NodeIdentity;
use crate::ast::ast_node::list_unchanged;
use std::sync::Arc;

/// `type Name implements Interface { field: Type }`
#[derive(Clone, Debug, PartialEq)]
pub struct TypeDefinition {
    pub name: Arc<Name>,
    pub interfaces: Vec<Arc<NamedType>>,
    pub fields: Vec<Arc<FieldDefinition>>,
    pub location: Option<Location>,
}

impl TypeDefinition {
    pub fn update(
        self: &Arc<Self>,
        name: Arc<Name>,
        interfaces: Option<Vec<Arc<NamedType>>>,
        fields: Option<Vec<Arc<FieldDefinition>>>,
    ) -> Arc<Self> {
        if self.name.is_same_node(&name)
            && list_unchanged(&self.interfaces, &interfaces)
            && list_unchanged(&self.fields, &fields)
        {
            return self.clone();
        }
        Arc::new(Self {
            name,
            interfaces: interfaces.unwrap_or_else(|| self.interfaces.clone()),
            fields: fields.unwrap_or_else(|| self.fields.clone()),
            location: self.location.clone(),
        })
    }
}
