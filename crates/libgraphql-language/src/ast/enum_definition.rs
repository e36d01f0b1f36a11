use crate::Location;
use crate::ast::EnumValueDefinition;
use crate::ast::Name;
use crate::ast::NodeIdentity;
use crate::ast::ast_node::list_unchanged;
use std::sync::Arc;

/// `enum Name { A B }`, with at least one value when parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct EnumDefinition {
    pub name: Arc<Name>,
    pub values: Vec<Arc<EnumValueDefinition>>,
    pub location: Option<Location>,
}

impl EnumDefinition {
    pub fn update(
        self: &Arc<Self>,
        name: Arc<Name>,
        values: Option<Vec<Arc<EnumValueDefinition>>>,
    ) -> Arc<Self> {
        if self.name.is_same_node(&name) && list_unchanged(&self.values, &values) {
            return self.clone();
        }
        Arc::new(Self {
            name,
            values: values.unwrap_or_else(|| self.values.clone()),
            location: self.location.clone(),
        })
    }
}
