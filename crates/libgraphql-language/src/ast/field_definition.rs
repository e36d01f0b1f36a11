use crate::Location;
use crate::ast::ArgumentDefinition;
use crate::ast::Name;
use crate::ast::NodeIdentity;
use crate::ast::TypeAnnotation;
use crate::ast::ast_node::list_unchanged;
use std::sync::Arc;

/// `name(arg: Type): Type` inside a type or interface definition.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDefinition {
    pub name: Arc<Name>,
    pub arguments: Vec<Arc<ArgumentDefinition>>,
    pub field_type: TypeAnnotation,
    pub location: Option<Location>,
}

impl FieldDefinition {
    pub fn update(
        self: &Arc<Self>,
        name: Arc<Name>,
        arguments: Option<Vec<Arc<ArgumentDefinition>>>,
        field_type: TypeAnnotation,
    ) -> Arc<Self> {
        if self.name.is_same_node(&name)
            && list_unchanged(&self.arguments, &arguments)
            && self.field_type.is_same_node(&field_type)
        {
            return self.clone();
        }
        Arc::new(Self {
            name,
            arguments: arguments.unwrap_or_else(|| self.arguments.clone()),
            field_type,
            location: self.location.clone(),
        })
    }
}
