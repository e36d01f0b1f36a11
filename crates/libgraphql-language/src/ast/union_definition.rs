use crate::Location;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NodeIdentity;
use crate::ast::ast_node::list_unchanged;
use std::sync::Arc;

/// `union Name = A | B`, with at least one member when parsed.
#[derive(Clone, Debug, PartialEq)]
pub struct UnionDefinition {
    pub name: Arc<Name>,
    pub types: Vec<Arc<NamedType>>,
    pub location: Option<Location>,
}

impl UnionDefinition {
    pub fn update(
        self: &Arc<Self>,
        name: Arc<Name>,
        types: Option<Vec<Arc<NamedType>>>,
    ) -> Arc<Self> {
        if self.name.is_same_node(&name) && list_unchanged(&self.types, &types) {
            return self.clone();
        }
        Arc::new(Self {
            name,
            types: types.unwrap_or_else(|| self.types.clone()),
            location: self.location.clone(),
        })
    }
}
