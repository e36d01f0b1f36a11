use crate::Location;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NodeIdentity;
use crate::ast::OperationType;
use crate::ast::SelectionSet;
use crate::ast::VariableDefinition;
use crate::ast::ast_node::list_unchanged;
use std::sync::Arc;

/// `query Name($var: Type) @directive { ... }`, or the anonymous `{ ... }`
/// shorthand, which is a query with no name, variables or directives.
#[derive(Clone, Debug, PartialEq)]
pub struct OperationDefinition {
    pub operation: OperationType,
    pub name: Option<Arc<Name>>,
    pub variable_definitions: Vec<Arc<VariableDefinition>>,
    pub directives: Vec<Arc<Directive>>,
    pub selection_set: Arc<SelectionSet>,
    pub location: Option<Location>,
}

impl OperationDefinition {
    pub fn update(
        self: &Arc<Self>,
        name: Option<Arc<Name>>,
        variable_definitions: Option<Vec<Arc<VariableDefinition>>>,
        directives: Option<Vec<Arc<Directive>>>,
        selection_set: Arc<SelectionSet>,
    ) -> Arc<Self> {
        if self.name.is_same_node(&name)
            && list_unchanged(&self.variable_definitions, &variable_definitions)
            && list_unchanged(&self.directives, &directives)
            && self.selection_set.is_same_node(&selection_set)
        {
            return self.clone();
        }
        Arc::new(Self {
            operation: self.operation,
            name,
            variable_definitions: variable_definitions
                .unwrap_or_else(|| self.variable_definitions.clone()),
            directives: directives.unwrap_or_else(|| self.directives.clone()),
            selection_set,
            location: self.location.clone(),
        })
    }
}
