use crate::GraphQLParser;
use crate::GraphQLSource;
use crate::ParseOptions;
use crate::ParseResult;
use crate::ast::ArgumentDefinition;
use crate::ast::EnumDefinition;
use crate::ast::EnumValueDefinition;
use crate::ast::FieldDefinition;
use crate::ast::InputFieldDefinition;
use crate::ast::InputObjectDefinition;
use crate::ast::InterfaceDefinition;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::ScalarDefinition;
use crate::ast::SchemaDefinition;
use crate::ast::SchemaDocument;
use crate::ast::TypeAnnotation;
use crate::ast::TypeDefinition;
use crate::ast::UnionDefinition;
use crate::ast::Value;
use crate::parser_core::ParserCore;
use crate::parser_core::ParserState;
use crate::token::GraphQLTokenKind;
use std::sync::Arc;

/// Parses a schema document of `type`, `interface`, `union`, `scalar`,
/// `enum` and `input` definitions.
///
/// ```
/// use libgraphql_language::ParseOptions;
/// use libgraphql_language::parse_schema;
///
/// let schema = parse_schema("scalar Date", ParseOptions::default()).unwrap();
/// assert_eq!(schema.definitions[0].name().value, "Date");
/// ```
pub fn parse_schema(
    source: impl Into<GraphQLSource>,
    options: ParseOptions,
) -> ParseResult<Arc<SchemaDocument>> {
    let source = source.into();
    log::trace!(
        "parsing schema document `{}` ({} bytes)",
        source.name(),
        source.len(),
    );
    let result = GraphQLSchemaParser::new(&source, options)
        .and_then(GraphQLSchemaParser::parse_schema_document);
    if let Err(error) = &result {
        log::debug!("{}", error.format_oneline());
    }
    result
}

/// Recursive-descent parser for schema documents.
///
/// Names, type references and constant values are parsed by the wrapped
/// [`GraphQLParser`], so they follow exactly the executable grammar.
/// Executable definitions (`query`, `mutation`, `fragment`, `{`) are
/// rejected.
pub struct GraphQLSchemaParser<'src> {
    query_parser: GraphQLParser<'src>,
}

impl<'src> ParserCore<'src> for GraphQLSchemaParser<'src> {
    fn state(&self) -> &ParserState<'src> {
        self.query_parser.state()
    }

    fn state_mut(&mut self) -> &mut ParserState<'src> {
        self.query_parser.state_mut()
    }
}

impl<'src> GraphQLSchemaParser<'src> {
    pub fn new(source: &'src GraphQLSource, options: ParseOptions) -> ParseResult<Self> {
        Ok(Self {
            query_parser: GraphQLParser::new(source, options)?,
        })
    }

    /// SchemaDocument : SchemaDefinition+
    pub fn parse_schema_document(mut self) -> ParseResult<Arc<SchemaDocument>> {
        let start = self.token().start;
        let mut definitions = Vec::new();
        loop {
            definitions.push(self.parse_schema_definition()?);
            if self.skip(GraphQLTokenKind::Eof)? {
                break;
            }
        }
        Ok(Arc::new(SchemaDocument {
            definitions,
            location: self.location(start),
        }))
    }

    fn parse_schema_definition(&mut self) -> ParseResult<SchemaDefinition> {
        Ok(if self.peek_keyword("type") {
            SchemaDefinition::Type(self.parse_type_definition()?)
        } else if self.peek_keyword("interface") {
            SchemaDefinition::Interface(self.parse_interface_definition()?)
        } else if self.peek_keyword("union") {
            SchemaDefinition::Union(self.parse_union_definition()?)
        } else if self.peek_keyword("scalar") {
            SchemaDefinition::Scalar(self.parse_scalar_definition()?)
        } else if self.peek_keyword("enum") {
            SchemaDefinition::Enum(self.parse_enum_definition()?)
        } else if self.peek_keyword("input") {
            SchemaDefinition::InputObject(self.parse_input_object_definition()?)
        } else {
            return Err(self.unexpected());
        })
    }

    // =========================================================================
    // Object types and interfaces
    // =========================================================================

    /// TypeDefinition : type Name ImplementsInterfaces? { FieldDefinition* }
    fn parse_type_definition(&mut self) -> ParseResult<Arc<TypeDefinition>> {
        let start = self.token().start;
        self.expect_keyword("type")?;
        let name = self.parse_name()?;
        let interfaces = self.parse_implements_interfaces()?;
        let fields = self.any(
            GraphQLTokenKind::BraceOpen,
            Self::parse_field_definition,
            GraphQLTokenKind::BraceClose,
        )?;
        Ok(Arc::new(TypeDefinition {
            name,
            interfaces,
            fields,
            location: self.location(start),
        }))
    }

    /// ImplementsInterfaces : implements NamedType+
    ///
    /// Interface names are read up to the opening `{` of the field list.
    fn parse_implements_interfaces(&mut self) -> ParseResult<Vec<Arc<NamedType>>> {
        let mut interfaces = Vec::new();
        if !self.peek_keyword("implements") {
            return Ok(interfaces);
        }
        self.advance()?;
        loop {
            interfaces.push(self.parse_named_type()?);
            if self.peek(GraphQLTokenKind::BraceOpen) {
                break;
            }
        }
        Ok(interfaces)
    }

    /// FieldDefinition : Name ArgumentDefinitions? : Type
    fn parse_field_definition(&mut self) -> ParseResult<Arc<FieldDefinition>> {
        let start = self.token().start;
        let name = self.parse_name()?;
        let arguments = if self.peek(GraphQLTokenKind::ParenOpen) {
            self.many(
                GraphQLTokenKind::ParenOpen,
                Self::parse_argument_definition,
                GraphQLTokenKind::ParenClose,
            )?
        } else {
            Vec::new()
        };
        self.expect(GraphQLTokenKind::Colon)?;
        let field_type = self.parse_type()?;
        Ok(Arc::new(FieldDefinition {
            name,
            arguments,
            field_type,
            location: self.location(start),
        }))
    }

    /// ArgumentDefinition : Name : Type DefaultValue?
    fn parse_argument_definition(&mut self) -> ParseResult<Arc<ArgumentDefinition>> {
        let start = self.token().start;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let arg_type = self.parse_type()?;
        let default_value = self.parse_default_value()?;
        Ok(Arc::new(ArgumentDefinition {
            name,
            arg_type,
            default_value,
            location: self.location(start),
        }))
    }

    /// InterfaceDefinition : interface Name { FieldDefinition* }
    fn parse_interface_definition(&mut self) -> ParseResult<Arc<InterfaceDefinition>> {
        let start = self.token().start;
        self.expect_keyword("interface")?;
        let name = self.parse_name()?;
        let fields = self.any(
            GraphQLTokenKind::BraceOpen,
            Self::parse_field_definition,
            GraphQLTokenKind::BraceClose,
        )?;
        Ok(Arc::new(InterfaceDefinition {
            name,
            fields,
            location: self.location(start),
        }))
    }

    // =========================================================================
    // Unions, scalars and enums
    // =========================================================================

    /// UnionDefinition : union Name = NamedType ( | NamedType )*
    fn parse_union_definition(&mut self) -> ParseResult<Arc<UnionDefinition>> {
        let start = self.token().start;
        self.expect_keyword("union")?;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Equals)?;
        let mut types = vec![self.parse_named_type()?];
        while self.skip(GraphQLTokenKind::Pipe)? {
            types.push(self.parse_named_type()?);
        }
        Ok(Arc::new(UnionDefinition {
            name,
            types,
            location: self.location(start),
        }))
    }

    /// ScalarDefinition : scalar Name
    fn parse_scalar_definition(&mut self) -> ParseResult<Arc<ScalarDefinition>> {
        let start = self.token().start;
        self.expect_keyword("scalar")?;
        let name = self.parse_name()?;
        Ok(Arc::new(ScalarDefinition {
            name,
            location: self.location(start),
        }))
    }

    /// EnumDefinition : enum Name { EnumValueDefinition+ }
    fn parse_enum_definition(&mut self) -> ParseResult<Arc<EnumDefinition>> {
        let start = self.token().start;
        self.expect_keyword("enum")?;
        let name = self.parse_name()?;
        let values = self.many(
            GraphQLTokenKind::BraceOpen,
            Self::parse_enum_value_definition,
            GraphQLTokenKind::BraceClose,
        )?;
        Ok(Arc::new(EnumDefinition {
            name,
            values,
            location: self.location(start),
        }))
    }

    fn parse_enum_value_definition(&mut self) -> ParseResult<Arc<EnumValueDefinition>> {
        let start = self.token().start;
        let name = self.parse_name()?;
        Ok(Arc::new(EnumValueDefinition {
            name,
            location: self.location(start),
        }))
    }

    // =========================================================================
    // Input objects
    // =========================================================================

    /// InputObjectDefinition : input Name { InputFieldDefinition* }
    fn parse_input_object_definition(&mut self) -> ParseResult<Arc<InputObjectDefinition>> {
        let start = self.token().start;
        self.expect_keyword("input")?;
        let name = self.parse_name()?;
        let fields = self.any(
            GraphQLTokenKind::BraceOpen,
            Self::parse_input_field_definition,
            GraphQLTokenKind::BraceClose,
        )?;
        Ok(Arc::new(InputObjectDefinition {
            name,
            fields,
            location: self.location(start),
        }))
    }

    /// InputFieldDefinition : Name : Type DefaultValue?
    fn parse_input_field_definition(&mut self) -> ParseResult<Arc<InputFieldDefinition>> {
        let start = self.token().start;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let field_type = self.parse_type()?;
        let default_value = self.parse_default_value()?;
        Ok(Arc::new(InputFieldDefinition {
            name,
            field_type,
            default_value,
            location: self.location(start),
        }))
    }

    // =========================================================================
    // Shared productions
    // =========================================================================

    fn parse_name(&mut self) -> ParseResult<Arc<Name>> {
        self.query_parser.parse_name()
    }

    fn parse_named_type(&mut self) -> ParseResult<Arc<NamedType>> {
        self.query_parser.parse_named_type()
    }

    fn parse_type(&mut self) -> ParseResult<TypeAnnotation> {
        self.query_parser.parse_type()
    }

    fn parse_default_value(&mut self) -> ParseResult<Option<Value>> {
        self.query_parser.parse_default_value()
    }
}
