use crate::ast::*;
use crate::visitor::VisitFlow;
use crate::visitor::Visitor;
use std::ops::ControlFlow;
use std::sync::Arc;

/// Read-only traversal hooks.
///
/// [`walk`] calls `enter` before a node's children and `leave` after them,
/// visiting children in declaration order. Returning `Break` from either
/// hook ends the traversal immediately.
pub trait Walker {
    fn enter(&mut self, _node: &Node) -> VisitFlow {
        ControlFlow::Continue(())
    }

    fn leave(&mut self, _node: &Node) -> VisitFlow {
        ControlFlow::Continue(())
    }
}

/// Walks `node` and every node beneath it.
pub fn walk<N, W>(node: &N, walker: &mut W) -> VisitFlow
where
    N: AstNode,
    W: Walker + ?Sized,
{
    node.accept(&mut Walk::new(walker))
}

/// [`Visitor`] adapter that drives a [`Walker`] through a tree.
pub struct Walk<'w, W: Walker + ?Sized> {
    walker: &'w mut W,
}

impl<'w, W: Walker + ?Sized> Walk<'w, W> {
    pub fn new(walker: &'w mut W) -> Self {
        Self { walker }
    }

    fn around(
        &mut self,
        node: Node,
        children: impl FnOnce(&mut Self) -> VisitFlow,
    ) -> VisitFlow {
        self.walker.enter(&node)?;
        children(self)?;
        self.walker.leave(&node)
    }

    fn each<N: AstNode>(&mut self, nodes: &[N]) -> VisitFlow {
        for node in nodes {
            node.accept(self)?;
        }
        ControlFlow::Continue(())
    }

    fn optional<N: AstNode>(&mut self, node: &Option<N>) -> VisitFlow {
        match node {
            Some(node) => node.accept(self),
            None => ControlFlow::Continue(()),
        }
    }

    fn leaf(&mut self, node: Node) -> VisitFlow {
        self.around(node, |_| ControlFlow::Continue(()))
    }
}

impl<W: Walker + ?Sized> Visitor for Walk<'_, W> {
    type Output = VisitFlow;

    fn visit_default(&mut self, node: &Node) -> VisitFlow {
        node.accept(self)
    }

    fn visit_name(&mut self, node: &Arc<Name>) -> VisitFlow {
        self.leaf(Node::Name(node.clone()))
    }

    fn visit_document(&mut self, node: &Arc<Document>) -> VisitFlow {
        self.around(Node::Document(node.clone()), |walk| {
            walk.each(&node.definitions)
        })
    }

    fn visit_operation_definition(&mut self, node: &Arc<OperationDefinition>) -> VisitFlow {
        self.around(Node::OperationDefinition(node.clone()), |walk| {
            walk.optional(&node.name)?;
            walk.each(&node.variable_definitions)?;
            walk.each(&node.directives)?;
            node.selection_set.accept(walk)
        })
    }

    fn visit_variable_definition(&mut self, node: &Arc<VariableDefinition>) -> VisitFlow {
        self.around(Node::VariableDefinition(node.clone()), |walk| {
            node.variable.accept(walk)?;
            node.var_type.accept(walk)?;
            walk.optional(&node.default_value)
        })
    }

    fn visit_variable(&mut self, node: &Arc<Variable>) -> VisitFlow {
        self.around(Node::Variable(node.clone()), |walk| node.name.accept(walk))
    }

    fn visit_selection_set(&mut self, node: &Arc<SelectionSet>) -> VisitFlow {
        self.around(Node::SelectionSet(node.clone()), |walk| {
            walk.each(&node.selections)
        })
    }

    fn visit_field(&mut self, node: &Arc<Field>) -> VisitFlow {
        self.around(Node::Field(node.clone()), |walk| {
            walk.optional(&node.alias)?;
            node.name.accept(walk)?;
            walk.each(&node.arguments)?;
            walk.each(&node.directives)?;
            walk.optional(&node.selection_set)
        })
    }

    fn visit_argument(&mut self, node: &Arc<Argument>) -> VisitFlow {
        self.around(Node::Argument(node.clone()), |walk| {
            node.name.accept(walk)?;
            node.value.accept(walk)
        })
    }

    fn visit_fragment_spread(&mut self, node: &Arc<FragmentSpread>) -> VisitFlow {
        self.around(Node::FragmentSpread(node.clone()), |walk| {
            node.name.accept(walk)?;
            walk.each(&node.directives)
        })
    }

    fn visit_inline_fragment(&mut self, node: &Arc<InlineFragment>) -> VisitFlow {
        self.around(Node::InlineFragment(node.clone()), |walk| {
            node.type_condition.accept(walk)?;
            walk.each(&node.directives)?;
            node.selection_set.accept(walk)
        })
    }

    fn visit_fragment_definition(&mut self, node: &Arc<FragmentDefinition>) -> VisitFlow {
        self.around(Node::FragmentDefinition(node.clone()), |walk| {
            node.name.accept(walk)?;
            node.type_condition.accept(walk)?;
            walk.each(&node.directives)?;
            node.selection_set.accept(walk)
        })
    }

    fn visit_int_value(&mut self, node: &Arc<IntValue>) -> VisitFlow {
        self.leaf(Node::IntValue(node.clone()))
    }

    fn visit_float_value(&mut self, node: &Arc<FloatValue>) -> VisitFlow {
        self.leaf(Node::FloatValue(node.clone()))
    }

    fn visit_string_value(&mut self, node: &Arc<StringValue>) -> VisitFlow {
        self.leaf(Node::StringValue(node.clone()))
    }

    fn visit_boolean_value(&mut self, node: &Arc<BooleanValue>) -> VisitFlow {
        self.leaf(Node::BooleanValue(node.clone()))
    }

    fn visit_enum_value(&mut self, node: &Arc<EnumValue>) -> VisitFlow {
        self.leaf(Node::EnumValue(node.clone()))
    }

    fn visit_list_value(&mut self, node: &Arc<ListValue>) -> VisitFlow {
        self.around(Node::ListValue(node.clone()), |walk| walk.each(&node.values))
    }

    fn visit_object_value(&mut self, node: &Arc<ObjectValue>) -> VisitFlow {
        self.around(Node::ObjectValue(node.clone()), |walk| walk.each(&node.fields))
    }

    fn visit_object_field(&mut self, node: &Arc<ObjectField>) -> VisitFlow {
        self.around(Node::ObjectField(node.clone()), |walk| {
            node.name.accept(walk)?;
            node.value.accept(walk)
        })
    }

    fn visit_directive(&mut self, node: &Arc<Directive>) -> VisitFlow {
        self.around(Node::Directive(node.clone()), |walk| {
            node.name.accept(walk)?;
            walk.each(&node.arguments)
        })
    }

    fn visit_named_type(&mut self, node: &Arc<NamedType>) -> VisitFlow {
        self.around(Node::NamedType(node.clone()), |walk| node.name.accept(walk))
    }

    fn visit_list_type(&mut self, node: &Arc<ListType>) -> VisitFlow {
        self.around(Node::ListType(node.clone()), |walk| node.item_type.accept(walk))
    }

    fn visit_non_null_type(&mut self, node: &Arc<NonNullType>) -> VisitFlow {
        self.around(Node::NonNullType(node.clone()), |walk| {
            node.inner_type.accept(walk)
        })
    }

    fn visit_schema_document(&mut self, node: &Arc<SchemaDocument>) -> VisitFlow {
        self.around(Node::SchemaDocument(node.clone()), |walk| {
            walk.each(&node.definitions)
        })
    }

    fn visit_type_definition(&mut self, node: &Arc<TypeDefinition>) -> VisitFlow {
        self.around(Node::TypeDefinition(node.clone()), |walk| {
            node.name.accept(walk)?;
            walk.each(&node.interfaces)?;
            walk.each(&node.fields)
        })
    }

    fn visit_field_definition(&mut self, node: &Arc<FieldDefinition>) -> VisitFlow {
        self.around(Node::FieldDefinition(node.clone()), |walk| {
            node.name.accept(walk)?;
            walk.each(&node.arguments)?;
            node.field_type.accept(walk)
        })
    }

    fn visit_argument_definition(&mut self, node: &Arc<ArgumentDefinition>) -> VisitFlow {
        self.around(Node::ArgumentDefinition(node.clone()), |walk| {
            node.name.accept(walk)?;
            node.arg_type.accept(walk)?;
            walk.optional(&node.default_value)
        })
    }

    fn visit_interface_definition(&mut self, node: &Arc<InterfaceDefinition>) -> VisitFlow {
        self.around(Node::InterfaceDefinition(node.clone()), |walk| {
            node.name.accept(walk)?;
            walk.each(&node.fields)
        })
    }

    fn visit_union_definition(&mut self, node: &Arc<UnionDefinition>) -> VisitFlow {
        self.around(Node::UnionDefinition(node.clone()), |walk| {
            node.name.accept(walk)?;
            walk.each(&node.types)
        })
    }

    fn visit_scalar_definition(&mut self, node: &Arc<ScalarDefinition>) -> VisitFlow {
        self.around(Node::ScalarDefinition(node.clone()), |walk| node.name.accept(walk))
    }

    fn visit_enum_definition(&mut self, node: &Arc<EnumDefinition>) -> VisitFlow {
        self.around(Node::EnumDefinition(node.clone()), |walk| {
            node.name.accept(walk)?;
            walk.each(&node.values)
        })
    }

    fn visit_enum_value_definition(&mut self, node: &Arc<EnumValueDefinition>) -> VisitFlow {
        self.around(Node::EnumValueDefinition(node.clone()), |walk| {
            node.name.accept(walk)
        })
    }

    fn visit_input_object_definition(&mut self, node: &Arc<InputObjectDefinition>) -> VisitFlow {
        self.around(Node::InputObjectDefinition(node.clone()), |walk| {
            node.name.accept(walk)?;
            walk.each(&node.fields)
        })
    }

    fn visit_input_field_definition(&mut self, node: &Arc<InputFieldDefinition>) -> VisitFlow {
        self.around(Node::InputFieldDefinition(node.clone()), |walk| {
            node.name.accept(walk)?;
            node.field_type.accept(walk)?;
            walk.optional(&node.default_value)
        })
    }
}
