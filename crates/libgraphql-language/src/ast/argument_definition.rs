use crate::Location;
use crate::ast::Name;
use crate::ast::NodeIdentity;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use std::sync::Arc;

/// `name: Type = default` in a field definition's argument list. The
/// default value is always constant.
#[derive(Clone, Debug, PartialEq)]
pub struct ArgumentDefinition {
    pub name: Arc<Name>,
    pub arg_type: TypeAnnotation,
    pub default_value: Option<Value>,
    pub location: Option<Location>,
}

impl ArgumentDefinition {
    pub fn update(
        self: &Arc<Self>,
        name: Arc<Name>,
        arg_type: TypeAnnotation,
        default_value: Option<Value>,
    ) -> Arc<Self> {
        if self.name.is_same_node(&name)
            && self.arg_type.is_same_node(&arg_type)
            && self.default_value.is_same_node(&default_value)
        {
            return self.clone();
        }
        Arc::new(Self {
            name,
            arg_type,
            default_value,
            location: self.location.clone(),
        })
    }
}
