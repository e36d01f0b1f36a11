use crate::Location;
use crate::ast::Definition;
use crate::ast::ast_node::list_unchanged;
use std::sync::Arc;

/// A parsed executable document: one or more operations and fragments.
#[derive(Clone, Debug, PartialEq)]
pub struct Document {
    pub definitions: Vec<Definition>,
    pub location: Option<Location>,
}

impl Document {
    /// Returns a document with `definitions` replaced, or this same
    /// document when nothing changed.
    pub fn update(self: &Arc<Self>, definitions: Option<Vec<Definition>>) -> Arc<Self> {
        if list_unchanged(&self.definitions, &definitions) {
            return self.clone();
        }
        Arc::new(Self {
            definitions: definitions.unwrap_or_else(|| self.definitions.clone()),
            location: self.location.clone(),
        })
    }
}
