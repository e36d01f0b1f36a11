use crate::Location;
use crate::ast::AstNode;
use crate::ast::BooleanValue;
use crate::ast::EnumValue;
use crate::ast::FloatValue;
use crate::ast::IntValue;
use crate::ast::ListValue;
use crate::ast::Node;
use crate::ast::NodeIdentity;
use crate::ast::NodeKind;
use crate::ast::ObjectValue;
use crate::ast::StringValue;
use crate::ast::Variable;
use crate::visitor::Visitor;
use inherent::inherent;
use std::sync::Arc;

/// A value literal, or a variable reference outside constant contexts.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Variable(Arc<Variable>),
    Int(Arc<IntValue>),
    Float(Arc<FloatValue>),
    String(Arc<StringValue>),
    Boolean(Arc<BooleanValue>),
    Enum(Arc<EnumValue>),
    List(Arc<ListValue>),
    Object(Arc<ObjectValue>),
}

impl Value {
    /// Returns `true` if no variable appears anywhere in this value.
    pub fn is_const(&self) -> bool {
        match self {
            Self::Variable(_) => false,
            Self::List(list) => list.values.iter().all(Value::is_const),
            Self::Object(object) => object.fields.iter().all(|field| field.value.is_const()),
            _ => true,
        }
    }
}

#[inherent]
impl AstNode for Value {
    pub fn accept<V: Visitor + ?Sized>(&self, visitor: &mut V) -> V::Output {
        match self {
            Self::Variable(node) => visitor.visit_variable(node),
            Self::Int(node) => visitor.visit_int_value(node),
            Self::Float(node) => visitor.visit_float_value(node),
            Self::String(node) => visitor.visit_string_value(node),
            Self::Boolean(node) => visitor.visit_boolean_value(node),
            Self::Enum(node) => visitor.visit_enum_value(node),
            Self::List(node) => visitor.visit_list_value(node),
            Self::Object(node) => visitor.visit_object_value(node),
        }
    }

    pub fn to_node(&self) -> Node {
        match self {
            Self::Variable(node) => Node::Variable(node.clone()),
            Self::Int(node) => Node::IntValue(node.clone()),
            Self::Float(node) => Node::FloatValue(node.clone()),
            Self::String(node) => Node::StringValue(node.clone()),
            Self::Boolean(node) => Node::BooleanValue(node.clone()),
            Self::Enum(node) => Node::EnumValue(node.clone()),
            Self::List(node) => Node::ListValue(node.clone()),
            Self::Object(node) => Node::ObjectValue(node.clone()),
        }
    }

    pub fn kind(&self) -> NodeKind {
        match self {
            Self::Variable(_) => NodeKind::Variable,
            Self::Int(_) => NodeKind::IntValue,
            Self::Float(_) => NodeKind::FloatValue,
            Self::String(_) => NodeKind::StringValue,
            Self::Boolean(_) => NodeKind::BooleanValue,
            Self::Enum(_) => NodeKind::EnumValue,
            Self::List(_) => NodeKind::ListValue,
            Self::Object(_) => NodeKind::ObjectValue,
        }
    }

    pub fn location(&self) -> Option<&Location> {
        match self {
            Self::Variable(node) => node.location.as_ref(),
            Self::Int(node) => node.location.as_ref(),
            Self::Float(node) => node.location.as_ref(),
            Self::String(node) => node.location.as_ref(),
            Self::Boolean(node) => node.location.as_ref(),
            Self::Enum(node) => node.location.as_ref(),
            Self::List(node) => node.location.as_ref(),
            Self::Object(node) => node.location.as_ref(),
        }
    }
}

impl NodeIdentity for Value {
    fn is_same_node(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Variable(current), Self::Variable(other)) => Arc::ptr_eq(current, other),
            (Self::Int(current), Self::Int(other)) => Arc::ptr_eq(current, other),
            (Self::Float(current), Self::Float(other)) => Arc::ptr_eq(current, other),
            (Self::String(current), Self::String(other)) => Arc::ptr_eq(current, other),
            (Self::Boolean(current), Self::Boolean(other)) => Arc::ptr_eq(current, other),
            (Self::Enum(current), Self::Enum(other)) => Arc::ptr_eq(current, other),
            (Self::List(current), Self::List(other)) => Arc::ptr_eq(current, other),
            (Self::Object(current), Self::Object(other)) => Arc::ptr_eq(current, other),
            _ => false,
        }
    }
}
