use crate::ast::*;
use std::sync::Arc;

/// Double dispatch over the closed set of node kinds.
///
/// Each `visit_*` method defaults to [`Visitor::visit_default`], so an
/// implementation only overrides the kinds it cares about. Call
/// [`AstNode::accept`] on any node handle to dispatch to the right method.
///
/// Visitors that need to stop early use an `Output` of
/// [`VisitFlow`](crate::visitor::VisitFlow) and return
/// `ControlFlow::Break(VisitBreak)`.
pub trait Visitor {
    type Output;

    /// Fallback for every kind without a dedicated override.
    fn visit_default(&mut self, node: &Node) -> Self::Output;

    fn visit_name(&mut self, node: &Arc<Name>) -> Self::Output {
        self.visit_default(&Node::Name(node.clone()))
    }

    fn visit_document(&mut self, node: &Arc<Document>) -> Self::Output {
        self.visit_default(&Node::Document(node.clone()))
    }

    fn visit_operation_definition(&mut self, node: &Arc<OperationDefinition>) -> Self::Output {
        self.visit_default(&Node::OperationDefinition(node.clone()))
    }

    fn visit_variable_definition(&mut self, node: &Arc<VariableDefinition>) -> Self::Output {
        self.visit_default(&Node::VariableDefinition(node.clone()))
    }

    fn visit_variable(&mut self, node: &Arc<Variable>) -> Self::Output {
        self.visit_default(&Node::Variable(node.clone()))
    }

    fn visit_selection_set(&mut self, node: &Arc<SelectionSet>) -> Self::Output {
        self.visit_default(&Node::SelectionSet(node.clone()))
    }

    fn visit_field(&mut self, node: &Arc<Field>) -> Self::Output {
        self.visit_default(&Node::Field(node.clone()))
    }

    fn visit_argument(&mut self, node: &Arc<Argument>) -> Self::Output {
        self.visit_default(&Node::Argument(node.clone()))
    }

    fn visit_fragment_spread(&mut self, node: &Arc<FragmentSpread>) -> Self::Output {
        self.visit_default(&Node::FragmentSpread(node.clone()))
    }

    fn visit_inline_fragment(&mut self, node: &Arc<InlineFragment>) -> Self::Output {
        self.visit_default(&Node::InlineFragment(node.clone()))
    }

    fn visit_fragment_definition(&mut self, node: &Arc<FragmentDefinition>) -> Self::Output {
        self.visit_default(&Node::FragmentDefinition(node.clone()))
    }

    fn visit_int_value(&mut self, node: &Arc<IntValue>) -> Self::Output {
        self.visit_default(&Node::IntValue(node.clone()))
    }

    fn visit_float_value(&mut self, node: &Arc<FloatValue>) -> Self::Output {
        self.visit_default(&Node::FloatValue(node.clone()))
    }

    fn visit_string_value(&mut self, node: &Arc<StringValue>) -> Self::Output {
        self.visit_default(&Node::StringValue(node.clone()))
    }

    fn visit_boolean_value(&mut self, node: &Arc<BooleanValue>) -> Self::Output {
        self.visit_default(&Node::BooleanValue(node.clone()))
    }

    fn visit_enum_value(&mut self, node: &Arc<EnumValue>) -> Self::Output {
        self.visit_default(&Node::EnumValue(node.clone()))
    }

    fn visit_list_value(&mut self, node: &Arc<ListValue>) -> Self::Output {
        self.visit_default(&Node::ListValue(node.clone()))
    }

    fn visit_object_value(&mut self, node: &Arc<ObjectValue>) -> Self::Output {
        self.visit_default(&Node::ObjectValue(node.clone()))
    }

    fn visit_object_field(&mut self, node: &Arc<ObjectField>) -> Self::Output {
        self.visit_default(&Node::ObjectField(node.clone()))
    }

    fn visit_directive(&mut self, node: &Arc<Directive>) -> Self::Output {
        self.visit_default(&Node::Directive(node.clone()))
    }

    fn visit_named_type(&mut self, node: &Arc<NamedType>) -> Self::Output {
        self.visit_default(&Node::NamedType(node.clone()))
    }

    fn visit_list_type(&mut self, node: &Arc<ListType>) -> Self::Output {
        self.visit_default(&Node::ListType(node.clone()))
    }

    fn visit_non_null_type(&mut self, node: &Arc<NonNullType>) -> Self::Output {
        self.visit_default(&Node::NonNullType(node.clone()))
    }

    fn visit_schema_document(&mut self, node: &Arc<SchemaDocument>) -> Self::Output {
        self.visit_default(&Node::SchemaDocument(node.clone()))
    }

    fn visit_type_definition(&mut self, node: &Arc<TypeDefinition>) -> Self::Output {
        self.visit_default(&Node::TypeDefinition(node.clone()))
    }

    fn visit_field_definition(&mut self, node: &Arc<FieldDefinition>) -> Self::Output {
        self.visit_default(&Node::FieldDefinition(node.clone()))
    }

    fn visit_argument_definition(&mut self, node: &Arc<ArgumentDefinition>) -> Self::Output {
        self.visit_default(&Node::ArgumentDefinition(node.clone()))
    }

    fn visit_interface_definition(&mut self, node: &Arc<InterfaceDefinition>) -> Self::Output {
        self.visit_default(&Node::InterfaceDefinition(node.clone()))
    }

    fn visit_union_definition(&mut self, node: &Arc<UnionDefinition>) -> Self::Output {
        self.visit_default(&Node::UnionDefinition(node.clone()))
    }

    fn visit_scalar_definition(&mut self, node: &Arc<ScalarDefinition>) -> Self::Output {
        self.visit_default(&Node::ScalarDefinition(node.clone()))
    }

    fn visit_enum_definition(&mut self, node: &Arc<EnumDefinition>) -> Self::Output {
        self.visit_default(&Node::EnumDefinition(node.clone()))
    }

    fn visit_enum_value_definition(&mut self, node: &Arc<EnumValueDefinition>) -> Self::Output {
        self.visit_default(&Node::EnumValueDefinition(node.clone()))
    }

    fn visit_input_object_definition(&mut self, node: &Arc<InputObjectDefinition>) -> Self::Output {
        self.visit_default(&Node::InputObjectDefinition(node.clone()))
    }

    fn visit_input_field_definition(&mut self, node: &Arc<InputFieldDefinition>) -> Self::Output {
        self.visit_default(&Node::InputFieldDefinition(node.clone()))
    }
}
