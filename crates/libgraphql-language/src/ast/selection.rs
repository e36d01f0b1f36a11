use crate::Location;
use crate::ast::AstNode;
use crate::ast::Field;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::Node;
use crate::ast::NodeIdentity;
use crate::ast::NodeKind;
use crate::visitor::Visitor;
use inherent::inherent;
use std::sync::Arc;

/// An entry of a selection set.
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(Arc<Field>),
    FragmentSpread(Arc<FragmentSpread>),
    InlineFragment(Arc<InlineFragment>),
}

#[inherent]
impl AstNode for Selection {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Field(node) => visitor.visit_field(node),
            Self::FragmentSpread(node) => visitor.visit_fragment_spread(node),
            Self::InlineFragment(node) => visitor.visit_inline_fragment(node),
        }
    }

    pub fn to_node(&self) -> Node {
        match self {
            Self::Field(node) => Node::Field(node.clone()),
            Self::FragmentSpread(node) => Node::FragmentSpread(node.clone()),
            Self::InlineFragment(node) => Node::InlineFragment(node.clone()),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Field(_) => NodeKind::Field,
            Self::FragmentSpread(_) => NodeKind::FragmentSpread,
            Self::InlineFragment(_) => NodeKind::InlineFragment,
        }
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::Field(node) => node.location.as_ref(),
            Self::FragmentSpread(node) => node.location.as_ref(),
            Self::InlineFragment(node) => node.location.as_ref(),
        }
    }
}

impl NodeIdentity for Selection {
    fn is_same_node(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Field(current), Self::Field(other)) => Arc::ptr_eq(current, other),
            (Self::FragmentSpread(current), Self::FragmentSpread(other)) => {
                Arc::ptr_eq(current, other)
            },
            (Self::InlineFragment(current), Self::InlineFragment(other)) => {
                Arc::ptr_eq(current, other)
            },
            _ => false,
        }
    }
}
