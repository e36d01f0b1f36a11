use crate::GraphQLSource;
use crate::GraphQLSyntaxErrorKind;
use crate::ParseOptions;
use crate::ParseResult;
use crate::ast::Argument;
use crate::ast::BooleanValue;
use crate::ast::Definition;
use crate::ast::Directive;
use crate::ast::Document;
use crate::ast::EnumValue;
use crate::ast::Field;
use crate::ast::FloatValue;
use crate::ast::FragmentDefinition;
use crate::ast::FragmentSpread;
use crate::ast::InlineFragment;
use crate::ast::IntValue;
use crate::ast::ListType;
use crate::ast::ListValue;
use crate::ast::Name;
use crate::ast::NamedType;
use crate::ast::NonNullType;
use crate::ast::NullableTypeAnnotation;
use crate::ast::ObjectField;
use crate::ast::ObjectValue;
use crate::ast::OperationDefinition;
use crate::ast::OperationType;
use crate::ast::Selection;
use crate::ast::SelectionSet;
use crate::ast::StringValue;
use crate::ast::TypeAnnotation;
use crate::ast::Value;
use crate::ast::Variable;
use crate::ast::VariableDefinition;
use crate::parser_core::ParserCore;
use crate::parser_core::ParserState;
use crate::token::GraphQLToken;
use crate::token::GraphQLTokenKind;
use std::sync::Arc;

/// Parses an executable document.
///
/// ```
/// use libgraphql_language::ParseOptions;
/// use libgraphql_language::parse;
///
/// let document = parse("{ hero { name } }", ParseOptions::default()).unwrap();
/// assert_eq!(document.definitions.len(), 1);
/// ```
pub fn parse(
    source: impl Into<GraphQLSource>,
    options: ParseOptions,
) -> ParseResult<Arc<Document>> {
    let source = source.into();
    log::trace!(
        "parsing executable document `{}` ({} bytes)",
        source.name(),
        source.len(),
    );
    let result = GraphQLParser::new(&source, options).and_then(GraphQLParser::parse_document);
    if let Err(error) = &result {
        log::debug!("{}", error.format_oneline());
    }
    result
}

/// Recursive-descent parser for executable documents (operations and
/// fragments).
///
/// Parsing stops at the first error. The name, type and value productions
/// are shared with [`GraphQLSchemaParser`](crate::GraphQLSchemaParser).
pub struct GraphQLParser<'src> {
    state: ParserState<'src>,
}

impl<'src> ParserCore<'src> for GraphQLParser<'src> {
    fn state(&self) -> &ParserState<'src> {
        &self.state
    }

    fn state_mut(&mut self) -> &mut ParserState<'src> {
        &mut self.state
    }
}

impl<'src> GraphQLParser<'src> {
    /// Creates a parser positioned on the first token of `source`. Fails if
    /// that token cannot be lexed.
    pub fn new(source: &'src GraphQLSource, options: ParseOptions) -> ParseResult<Self> {
        Ok(Self {
            state: ParserState::new(source, options)?,
        })
    }

    // =========================================================================
    // Document
    // =========================================================================

    /// Document : Definition+
    pub fn parse_document(mut self) -> ParseResult<Arc<Document>> {
        let start = self.token().start;
        let mut definitions = Vec::new();
        loop {
            definitions.push(self.parse_definition()?);
            if self.skip(GraphQLTokenKind::Eof)? {
                break;
            }
        }
        Ok(Arc::new(Document {
            definitions,
            location: self.location(start),
        }))
    }

    fn parse_definition(&mut self) -> ParseResult<Definition> {
        if self.peek(GraphQLTokenKind::BraceOpen)
            || self.peek_keyword("query")
            || self.peek_keyword("mutation")
        {
            return Ok(Definition::Operation(self.parse_operation_definition()?));
        }
        if self.peek_keyword("fragment") {
            return Ok(Definition::Fragment(self.parse_fragment_definition()?));
        }
        Err(self.unexpected())
    }

    // =========================================================================
    // Operations
    // =========================================================================

    /// OperationDefinition :
    ///   - SelectionSet
    ///   - OperationType Name VariableDefinitions? Directives? SelectionSet
    fn parse_operation_definition(&mut self) -> ParseResult<Arc<OperationDefinition>> {
        let start = self.token().start;
        if self.peek(GraphQLTokenKind::BraceOpen) {
            let selection_set = self.parse_selection_set()?;
            return Ok(Arc::new(OperationDefinition {
                operation: OperationType::Query,
                name: None,
                variable_definitions: Vec::new(),
                directives: Vec::new(),
                selection_set,
                location: self.location(start),
            }));
        }

        let Some(operation) = self.token().value().and_then(OperationType::from_keyword) else {
            return Err(self.unexpected());
        };
        self.advance()?;
        let name = self.parse_name()?;
        let variable_definitions = self.parse_variable_definitions()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(Arc::new(OperationDefinition {
            operation,
            name: Some(name),
            variable_definitions,
            directives,
            selection_set,
            location: self.location(start),
        }))
    }

    fn parse_variable_definitions(&mut self) -> ParseResult<Vec<Arc<VariableDefinition>>> {
        if !self.peek(GraphQLTokenKind::ParenOpen) {
            return Ok(Vec::new());
        }
        self.many(
            GraphQLTokenKind::ParenOpen,
            Self::parse_variable_definition,
            GraphQLTokenKind::ParenClose,
        )
    }

    /// VariableDefinition : Variable : Type DefaultValue?
    fn parse_variable_definition(&mut self) -> ParseResult<Arc<VariableDefinition>> {
        let start = self.token().start;
        let variable = self.parse_variable()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let var_type = self.parse_type()?;
        let default_value = self.parse_default_value()?;
        Ok(Arc::new(VariableDefinition {
            variable,
            var_type,
            default_value,
            location: self.location(start),
        }))
    }

    /// DefaultValue : = ConstValue
    pub(crate) fn parse_default_value(&mut self) -> ParseResult<Option<Value>> {
        if !self.skip(GraphQLTokenKind::Equals)? {
            return Ok(None);
        }
        Ok(Some(self.parse_value_literal(true)?))
    }

    /// Variable : $ Name
    fn parse_variable(&mut self) -> ParseResult<Arc<Variable>> {
        let start = self.token().start;
        self.expect(GraphQLTokenKind::Dollar)?;
        let name = self.parse_name()?;
        Ok(Arc::new(Variable {
            name,
            location: self.location(start),
        }))
    }

    // =========================================================================
    // Selections
    // =========================================================================

    fn parse_selection_set(&mut self) -> ParseResult<Arc<SelectionSet>> {
        let start = self.token().start;
        let selections = self.many(
            GraphQLTokenKind::BraceOpen,
            Self::parse_selection,
            GraphQLTokenKind::BraceClose,
        )?;
        Ok(Arc::new(SelectionSet {
            selections,
            location: self.location(start),
        }))
    }

    fn parse_selection(&mut self) -> ParseResult<Selection> {
        if self.peek(GraphQLTokenKind::Spread) {
            self.parse_fragment()
        } else {
            Ok(Selection::Field(self.parse_field()?))
        }
    }

    /// Field : Alias? Name Arguments? Directives? SelectionSet?
    fn parse_field(&mut self) -> ParseResult<Arc<Field>> {
        let start = self.token().start;
        let name_or_alias = self.parse_name()?;
        let (alias, name) = if self.skip(GraphQLTokenKind::Colon)? {
            (Some(name_or_alias), self.parse_name()?)
        } else {
            (None, name_or_alias)
        };
        let arguments = self.parse_arguments()?;
        let directives = self.parse_directives()?;
        let selection_set = if self.peek(GraphQLTokenKind::BraceOpen) {
            Some(self.parse_selection_set()?)
        } else {
            None
        };
        Ok(Arc::new(Field {
            alias,
            name,
            arguments,
            directives,
            selection_set,
            location: self.location(start),
        }))
    }

    fn parse_arguments(&mut self) -> ParseResult<Vec<Arc<Argument>>> {
        if !self.peek(GraphQLTokenKind::ParenOpen) {
            return Ok(Vec::new());
        }
        self.many(
            GraphQLTokenKind::ParenOpen,
            Self::parse_argument,
            GraphQLTokenKind::ParenClose,
        )
    }

    /// Argument : Name : Value
    fn parse_argument(&mut self) -> ParseResult<Arc<Argument>> {
        let start = self.token().start;
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value = self.parse_value_literal(false)?;
        Ok(Arc::new(Argument {
            name,
            value,
            location: self.location(start),
        }))
    }

    // =========================================================================
    // Fragments
    // =========================================================================

    /// Parses what follows `...`: an inline fragment when the next token is
    /// the name `on`, a fragment spread otherwise.
    fn parse_fragment(&mut self) -> ParseResult<Selection> {
        let start = self.token().start;
        self.expect(GraphQLTokenKind::Spread)?;

        if self.peek_keyword("on") {
            self.advance()?;
            let type_condition = self.parse_named_type()?;
            let directives = self.parse_directives()?;
            let selection_set = self.parse_selection_set()?;
            return Ok(Selection::InlineFragment(Arc::new(InlineFragment {
                type_condition,
                directives,
                selection_set,
                location: self.location(start),
            })));
        }

        let name = self.parse_fragment_name()?;
        let directives = self.parse_directives()?;
        Ok(Selection::FragmentSpread(Arc::new(FragmentSpread {
            name,
            directives,
            location: self.location(start),
        })))
    }

    /// FragmentDefinition :
    ///   fragment FragmentName on NamedType Directives? SelectionSet
    fn parse_fragment_definition(&mut self) -> ParseResult<Arc<FragmentDefinition>> {
        let start = self.token().start;
        self.expect_keyword("fragment")?;
        let name = self.parse_fragment_name()?;
        self.expect_keyword("on")?;
        let type_condition = self.parse_named_type()?;
        let directives = self.parse_directives()?;
        let selection_set = self.parse_selection_set()?;
        Ok(Arc::new(FragmentDefinition {
            name,
            type_condition,
            directives,
            selection_set,
            location: self.location(start),
        }))
    }

    /// FragmentName : Name but not `on`
    fn parse_fragment_name(&mut self) -> ParseResult<Arc<Name>> {
        if self.peek_keyword("on") {
            return Err(self.syntax_error(
                GraphQLSyntaxErrorKind::ReservedName {
                    name: "on".to_string(),
                },
                format!("Unexpected {}", self.token()),
            ));
        }
        self.parse_name()
    }

    // =========================================================================
    // Values
    // =========================================================================

    /// Parses a value. In constant contexts (`is_const`) variables are
    /// rejected at their `$`.
    pub(crate) fn parse_value_literal(&mut self, is_const: bool) -> ParseResult<Value> {
        let start = self.token().start;
        match self.token().kind {
            GraphQLTokenKind::BracketOpen => self.parse_list(is_const),
            GraphQLTokenKind::BraceOpen => self.parse_object(is_const),
            GraphQLTokenKind::Int => {
                let value = token_text(self.advance()?);
                Ok(Value::Int(Arc::new(IntValue {
                    value,
                    location: self.location(start),
                })))
            },
            GraphQLTokenKind::Float => {
                let value = token_text(self.advance()?);
                Ok(Value::Float(Arc::new(FloatValue {
                    value,
                    location: self.location(start),
                })))
            },
            GraphQLTokenKind::String => {
                let value = token_text(self.advance()?);
                Ok(Value::String(Arc::new(StringValue {
                    value,
                    location: self.location(start),
                })))
            },
            GraphQLTokenKind::Name => {
                let value = token_text(self.advance()?);
                let location = self.location(start);
                Ok(match value.as_str() {
                    "true" => Value::Boolean(Arc::new(BooleanValue {
                        value: true,
                        location,
                    })),
                    "false" => Value::Boolean(Arc::new(BooleanValue {
                        value: false,
                        location,
                    })),
                    _ => Value::Enum(Arc::new(EnumValue { value, location })),
                })
            },
            GraphQLTokenKind::Dollar if !is_const => Ok(Value::Variable(self.parse_variable()?)),
            _ => Err(self.unexpected()),
        }
    }

    fn parse_list(&mut self, is_const: bool) -> ParseResult<Value> {
        let start = self.token().start;
        let values = self.any(
            GraphQLTokenKind::BracketOpen,
            |parser| parser.parse_value_literal(is_const),
            GraphQLTokenKind::BracketClose,
        )?;
        Ok(Value::List(Arc::new(ListValue {
            values,
            location: self.location(start),
        })))
    }

    fn parse_object(&mut self, is_const: bool) -> ParseResult<Value> {
        let start = self.token().start;
        self.expect(GraphQLTokenKind::BraceOpen)?;
        let mut fields = Vec::new();
        while !self.skip(GraphQLTokenKind::BraceClose)? {
            let field = self.parse_object_field(is_const, &fields)?;
            fields.push(field);
        }
        Ok(Value::Object(Arc::new(ObjectValue {
            fields,
            location: self.location(start),
        })))
    }

    /// ObjectField : Name : Value, with `Name` unique among `preceding`.
    fn parse_object_field(
        &mut self,
        is_const: bool,
        preceding: &[Arc<ObjectField>],
    ) -> ParseResult<Arc<ObjectField>> {
        let start = self.token().start;
        if self.peek(GraphQLTokenKind::Name)
            && let Some(name) = self.token().value()
            && preceding.iter().any(|field| field.name.value == name)
        {
            let name = name.to_string();
            return Err(self.syntax_error(
                GraphQLSyntaxErrorKind::DuplicateInputObjectField { name: name.clone() },
                format!("Duplicate input object field {name}."),
            ));
        }
        let name = self.parse_name()?;
        self.expect(GraphQLTokenKind::Colon)?;
        let value = self.parse_value_literal(is_const)?;
        Ok(Arc::new(ObjectField {
            name,
            value,
            location: self.location(start),
        }))
    }

    // =========================================================================
    // Directives
    // =========================================================================

    fn parse_directives(&mut self) -> ParseResult<Vec<Arc<Directive>>> {
        let mut directives = Vec::new();
        while self.peek(GraphQLTokenKind::At) {
            directives.push(self.parse_directive()?);
        }
        Ok(directives)
    }

    /// Directive : @ Name Arguments?
    fn parse_directive(&mut self) -> ParseResult<Arc<Directive>> {
        let start = self.token().start;
        self.expect(GraphQLTokenKind::At)?;
        let name = self.parse_name()?;
        let arguments = self.parse_arguments()?;
        Ok(Arc::new(Directive {
            name,
            arguments,
            location: self.location(start),
        }))
    }

    // =========================================================================
    // Types and names
    // =========================================================================

    /// Type : NamedType | ListType | NonNullType
    pub(crate) fn parse_type(&mut self) -> ParseResult<TypeAnnotation> {
        let start = self.token().start;
        let nullable = if self.skip(GraphQLTokenKind::BracketOpen)? {
            let item_type = self.parse_type()?;
            self.expect(GraphQLTokenKind::BracketClose)?;
            NullableTypeAnnotation::List(Arc::new(ListType {
                item_type,
                location: self.location(start),
            }))
        } else {
            NullableTypeAnnotation::Named(self.parse_named_type()?)
        };

        if self.skip(GraphQLTokenKind::Bang)? {
            return Ok(TypeAnnotation::NonNull(Arc::new(NonNullType {
                inner_type: nullable,
                location: self.location(start),
            })));
        }
        Ok(nullable.into())
    }

    pub(crate) fn parse_named_type(&mut self) -> ParseResult<Arc<NamedType>> {
        let start = self.token().start;
        let name = self.parse_name()?;
        Ok(Arc::new(NamedType {
            name,
            location: self.location(start),
        }))
    }

    pub(crate) fn parse_name(&mut self) -> ParseResult<Arc<Name>> {
        let token = self.expect(GraphQLTokenKind::Name)?;
        let start = token.start;
        Ok(Arc::new(Name {
            value: token_text(token),
            location: self.location(start),
        }))
    }
}

/// Takes ownership of a consumed token's value.
fn token_text(token: GraphQLToken<'_>) -> String {
    token.value.map(|value| value.into_owned()).unwrap_or_default()
}
