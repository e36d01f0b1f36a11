use crate::Location;
use crate::ast::Argument;
use crate::ast::Name;
use crate::ast::NodeIdentity;
use crate::ast::ast_node::list_unchanged;
use std::sync::Arc;

/// `@name(arg: value)`
#[derive(Clone, Debug, PartialEq)]
pub struct Directive {
    pub name: Arc<Name>,
    pub arguments: Vec<Arc<Argument>>,
    pub location: Option<Location>,
}

impl Directive {
    pub fn update(
        self: &Arc<Self>,
        name: Arc<Name>,
        arguments: Option<Vec<Arc<Argument>>>,
    ) -> Arc<Self> {
        if self.name.is_same_node(&name) && list_unchanged(&self.arguments, &arguments) {
            return self.clone();
        }
        Arc::new(Self {
            name,
            arguments: arguments.unwrap_or_else(|| self.arguments.clone()),
            location: self.location.clone(),
        })
    }
}
