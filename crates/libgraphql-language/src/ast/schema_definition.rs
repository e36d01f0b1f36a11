use crate::Location;
use crate::ast::AstNode;
use crate::ast::EnumDefinition;
use crate::ast::InputObjectDefinition;
use crate::ast::InterfaceDefinition;
use crate::ast::Name;
use crate::ast::Node;
use crate::ast::NodeIdentity;
use crate::ast::NodeKind;
use crate::ast::ScalarDefinition;
use crate::ast::TypeDefinition;
use crate::ast::UnionDefinition;
use crate::visitor::Visitor;
use inherent::inherent;
use std::sync::Arc;

/// A top-level definition of a schema document.
#[derive(Clone, Debug, PartialEq)]
pub enum SchemaDefinition {
    Type(Arc<TypeDefinition>),
    Interface(Arc<InterfaceDefinition>),
    Union(Arc<UnionDefinition>),
    Scalar(Arc<ScalarDefinition>),
    Enum(Arc<EnumDefinition>),
    InputObject(Arc<InputObjectDefinition>),
}

impl SchemaDefinition {
    /// The name of the defined type.
    pub fn name(&self) -> &Arc<Name> {
        match self {
            Self::Type(node) => &node.name,
            Self::Interface(node) => &node.name,
            Self::Union(node) => &node.name,
            Self::Scalar(node) => &node.name,
            Self::Enum(node) => &node.name,
            Self::InputObject(node) => &node.name,
        }
    }
}

#[inherent]
impl AstNode for SchemaDefinition {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Type(node) => visitor.visit_type_definition(node),
            Self::Interface(node) => visitor.visit_interface_definition(node),
            Self::Union(node) => visitor.visit_union_definition(node),
            Self::Scalar(node) => visitor.visit_scalar_definition(node),
            Self::Enum(node) => visitor.visit_enum_definition(node),
            Self::InputObject(node) => visitor.visit_input_object_definition(node),
        }
    }

    pub fn to_node(&self) -> Node {
        match self {
            Self::Type(node) => Node::TypeDefinition(node.clone()),
            Self::Interface(node) => Node::InterfaceDefinition(node.clone()),
            Self::Union(node) => Node::UnionDefinition(node.clone()),
            Self::Scalar(node) => Node::ScalarDefinition(node.clone()),
            Self::Enum(node) => Node::EnumDefinition(node.clone()),
            Self::InputObject(node) => Node::InputObjectDefinition(node.clone()),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Type(_) => NodeKind::TypeDefinition,
            Self::Interface(_) => NodeKind::InterfaceDefinition,
            Self::Union(_) => NodeKind::UnionDefinition,
            Self::Scalar(_) => NodeKind::ScalarDefinition,
            Self::Enum(_) => NodeKind::EnumDefinition,
            Self::InputObject(_) => NodeKind::InputObjectDefinition,
        }
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::Type(node) => node.location.as_ref(),
            Self::Interface(node) => node.location.as_ref(),
            Self::Union(node) => node.location.as_ref(),
            Self::Scalar(node) => node.location.as_ref(),
            Self::Enum(node) => node.location.as_ref(),
            Self::InputObject(node) => node.location.as_ref(),
        }
    }
}

impl NodeIdentity for SchemaDefinition {
    fn is_same_node(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Type(current), Self::Type(other)) => Arc::ptr_eq(current, other),
            (Self::Interface(current), Self::Interface(other)) => Arc::ptr_eq(current, other),
            (Self::Union(current), Self::Union(other)) => Arc::ptr_eq(current, other),
            (Self::Scalar(current), Self::Scalar(other)) => Arc::ptr_eq(current, other),
            (Self::Enum(current), Self::Enum(other)) => Arc::ptr_eq(current, other),
            (Self::InputObject(current), Self::InputObject(other)) => Arc::ptr_eq(current, other),
            _ => false,
        }
    }
}
