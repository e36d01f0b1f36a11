use crate::Location;
use crate::ast::Directive;
use crate::ast::Name;
use crate::ast::NodeIdentity;
use crate::ast::ast_node::list_unchanged;
use std::sync::Arc;

/// `...FragmentName @directive`
#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub name: Arc<Name>,
    pub directives: Vec<Arc<Directive>>,
    pub location: Option<Location>,
}

impl FragmentSpread {
    pub fn update(
        self: &Arc<Self>,
        name: Arc<Name>,
        directives: Option<Vec<Arc<Directive>>>,
    ) -> Arc<Self> {
        if self.name.is_same_node(&name) && list_unchanged(&self.directives, &directives) {
            return self.clone();
        }
        Arc::new(Self {
            name,
            directives: directives.unwrap_or_else(|| self.directives.clone()),
            location: self.location.clone(),
        })
    }
}
