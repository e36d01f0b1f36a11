use crate::Location;
use crate::ast::SchemaDefinition;
use crate::ast::ast_node::list_unchanged;
use std::sync::Arc;

/// A parsed schema document: one or more type-system definitions.
#[derive(Clone, Debug, PartialEq)]
pub struct SchemaDocument {
    pub definitions: Vec<SchemaDefinition>,
    pub location: Option<Location>,
}

impl SchemaDocument {
    pub fn update(self: &Arc<Self>, definitions: Option<Vec<SchemaDefinition>>) -> Arc<Self> {
        if list_unchanged(&self.definitions, &definitions) {
            return self.clone();
        }
        Arc::new(Self {
            definitions: definitions.unwrap_or_else(|| self.definitions.clone()),
            location: self.location.clone(),
        })
    }
}
