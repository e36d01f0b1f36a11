use crate::Location;
use crate::ast::Name;
use crate::ast::NodeIdentity;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use std::sync::Arc;

/// `name: Type = default` inside an input object definition. The default
/// value is always constant.
#[derive(Clone, Debug, PartialEq)]
pub struct InputFieldDefinition {
    pub name: Arc<Name>,
    pub field_type: TypeAnnotation,
    pub default_value: Option<Value>,
    pub location: Option<Location>,
}

impl InputFieldDefinition {
    pub fn update(
        self: &Arc<Self>,
        name: Arc<Name>,
        field_type: TypeAnnotation,
        default_value: Option<Value>,
    ) -> Arc<Self> {
        if self.name.is_same_node(&name)
            && self.field_type.is_same_node(&field_type)
            && self.default_value.is_same_node(&default_value)
        {
            return self.clone();
        }
        Arc::new(Self {
            name,
            field_type,
            default_value,
            location: self.location.clone(),
        })
    }
}
