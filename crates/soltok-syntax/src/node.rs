use text_size::TextRange;

use crate::ast::*;

/// Borrowed view over every node kind the highlighter understands.
///
/// Nodes that deserialized into an `Other` variant have no `NodeRef` and are
/// invisible to traversal.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    SourceUnit(&'a SourceUnit),
    PragmaDirective(&'a PragmaDirective),
    ContractDefinition(&'a ContractDefinition),
    InheritanceSpecifier(&'a InheritanceSpecifier),
    StructDefinition(&'a StructDefinition),
    EnumDefinition(&'a EnumDefinition),
    EnumValue(&'a EnumValue),
    ErrorDefinition(&'a ErrorDefinition),
    EventDefinition(&'a EventDefinition),
    FunctionDefinition(&'a FunctionDefinition),
    ModifierDefinition(&'a ModifierDefinition),
    ModifierInvocation(&'a ModifierInvocation),
    OverrideSpecifier(&'a OverrideSpecifier),
    ParameterList(&'a ParameterList),
    VariableDeclaration(&'a VariableDeclaration),
    UsingForDirective(&'a UsingForDirective),
    UserDefinedValueTypeDefinition(&'a UserDefinedValueTypeDefinition),
    StructuredDocumentation(&'a StructuredDocumentation),
    IdentifierPath(&'a IdentifierPath),
    ElementaryTypeName(&'a ElementaryTypeName),
    UserDefinedTypeName(&'a UserDefinedTypeName),
    Mapping(&'a Mapping),
    ArrayTypeName(&'a ArrayTypeName),
    FunctionTypeName(&'a FunctionTypeName),
    Block(&'a Block),
    BareStatement(&'a BareStatement),
    ExpressionStatement(&'a ExpressionStatement),
    VariableDeclarationStatement(&'a VariableDeclarationStatement),
    Return(&'a Return),
    IfStatement(&'a IfStatement),
    ForStatement(&'a ForStatement),
    WhileStatement(&'a WhileStatement),
    EmitStatement(&'a EmitStatement),
    RevertStatement(&'a RevertStatement),
    TryStatement(&'a TryStatement),
    TryCatchClause(&'a TryCatchClause),
    Assignment(&'a Assignment),
    BinaryOperation(&'a BinaryOperation),
    UnaryOperation(&'a UnaryOperation),
    Conditional(&'a Conditional),
    FunctionCall(&'a FunctionCall),
    FunctionCallOptions(&'a FunctionCallOptions),
    MemberAccess(&'a MemberAccess),
    IndexAccess(&'a IndexAccess),
    IndexRangeAccess(&'a IndexRangeAccess),
    TupleExpression(&'a TupleExpression),
    NewExpression(&'a NewExpression),
    ElementaryTypeNameExpression(&'a ElementaryTypeNameExpression),
    Identifier(&'a Identifier),
    Literal(&'a Literal),
}

macro_rules! each_node {
    ($node:expr, $it:ident => $body:expr) => {
        match $node {
            NodeRef::SourceUnit($it) => $body,
            NodeRef::PragmaDirective($it) => $body,
            NodeRef::ContractDefinition($it) => $body,
            NodeRef::InheritanceSpecifier($it) => $body,
            NodeRef::StructDefinition($it) => $body,
            NodeRef::EnumDefinition($it) => $body,
            NodeRef::EnumValue($it) => $body,
            NodeRef::ErrorDefinition($it) => $body,
            NodeRef::EventDefinition($it) => $body,
            NodeRef::FunctionDefinition($it) => $body,
            NodeRef::ModifierDefinition($it) => $body,
            NodeRef::ModifierInvocation($it) => $body,
            NodeRef::OverrideSpecifier($it) => $body,
            NodeRef::ParameterList($it) => $body,
            NodeRef::VariableDeclaration($it) => $body,
            NodeRef::UsingForDirective($it) => $body,
            NodeRef::UserDefinedValueTypeDefinition($it) => $body,
            NodeRef::StructuredDocumentation($it) => $body,
            NodeRef::IdentifierPath($it) => $body,
            NodeRef::ElementaryTypeName($it) => $body,
            NodeRef::UserDefinedTypeName($it) => $body,
            NodeRef::Mapping($it) => $body,
            NodeRef::ArrayTypeName($it) => $body,
            NodeRef::FunctionTypeName($it) => $body,
            NodeRef::Block($it) => $body,
            NodeRef::BareStatement($it) => $body,
            NodeRef::ExpressionStatement($it) => $body,
            NodeRef::VariableDeclarationStatement($it) => $body,
            NodeRef::Return($it) => $body,
            NodeRef::IfStatement($it) => $body,
            NodeRef::ForStatement($it) => $body,
            NodeRef::WhileStatement($it) => $body,
            NodeRef::EmitStatement($it) => $body,
            NodeRef::RevertStatement($it) => $body,
            NodeRef::TryStatement($it) => $body,
            NodeRef::TryCatchClause($it) => $body,
            NodeRef::Assignment($it) => $body,
            NodeRef::BinaryOperation($it) => $body,
            NodeRef::UnaryOperation($it) => $body,
            NodeRef::Conditional($it) => $body,
            NodeRef::FunctionCall($it) => $body,
            NodeRef::FunctionCallOptions($it) => $body,
            NodeRef::MemberAccess($it) => $body,
            NodeRef::IndexAccess($it) => $body,
            NodeRef::IndexRangeAccess($it) => $body,
            NodeRef::TupleExpression($it) => $body,
            NodeRef::NewExpression($it) => $body,
            NodeRef::ElementaryTypeNameExpression($it) => $body,
            NodeRef::Identifier($it) => $body,
            NodeRef::Literal($it) => $body,
        }
    };
}

impl<'a> NodeRef<'a> {
    pub fn item(item: &'a Item) -> Option<Self> {
        Some(match item {
            Item::PragmaDirective(it) => Self::PragmaDirective(it),
            Item::ContractDefinition(it) => Self::ContractDefinition(it),
            Item::StructDefinition(it) => Self::StructDefinition(it),
            Item::EnumDefinition(it) => Self::EnumDefinition(it),
            Item::ErrorDefinition(it) => Self::ErrorDefinition(it),
            Item::EventDefinition(it) => Self::EventDefinition(it),
            Item::FunctionDefinition(it) => Self::FunctionDefinition(it),
            Item::ModifierDefinition(it) => Self::ModifierDefinition(it),
            Item::VariableDeclaration(it) => Self::VariableDeclaration(it),
            Item::UsingForDirective(it) => Self::UsingForDirective(it),
            Item::UserDefinedValueTypeDefinition(it) => Self::UserDefinedValueTypeDefinition(it),
            Item::Other => return None,
        })
    }

    pub fn type_name(type_name: &'a TypeName) -> Option<Self> {
        Some(match type_name {
            TypeName::ElementaryTypeName(it) => Self::ElementaryTypeName(it),
            TypeName::UserDefinedTypeName(it) => Self::UserDefinedTypeName(it),
            TypeName::Mapping(it) => Self::Mapping(it),
            TypeName::ArrayTypeName(it) => Self::ArrayTypeName(it),
            TypeName::FunctionTypeName(it) => Self::FunctionTypeName(it),
            TypeName::Other => return None,
        })
    }

    pub fn statement(statement: &'a Statement) -> Option<Self> {
        Some(match statement {
            Statement::Block(it) | Statement::UncheckedBlock(it) => Self::Block(it),
            Statement::ExpressionStatement(it) => Self::ExpressionStatement(it),
            Statement::VariableDeclarationStatement(it) => Self::VariableDeclarationStatement(it),
            Statement::Return(it) => Self::Return(it),
            Statement::IfStatement(it) => Self::IfStatement(it),
            Statement::ForStatement(it) => Self::ForStatement(it),
            Statement::WhileStatement(it) | Statement::DoWhileStatement(it) => {
                Self::WhileStatement(it)
            }
            Statement::EmitStatement(it) => Self::EmitStatement(it),
            Statement::RevertStatement(it) => Self::RevertStatement(it),
            Statement::TryStatement(it) => Self::TryStatement(it),
            Statement::Break(it)
            | Statement::Continue(it)
            | Statement::PlaceholderStatement(it)
            | Statement::InlineAssembly(it) => Self::BareStatement(it),
            Statement::Other => return None,
        })
    }

    pub fn expression(expression: &'a Expression) -> Option<Self> {
        Some(match expression {
            Expression::Assignment(it) => Self::Assignment(it),
            Expression::BinaryOperation(it) => Self::BinaryOperation(it),
            Expression::UnaryOperation(it) => Self::UnaryOperation(it),
            Expression::Conditional(it) => Self::Conditional(it),
            Expression::FunctionCall(it) => Self::FunctionCall(it),
            Expression::FunctionCallOptions(it) => Self::FunctionCallOptions(it),
            Expression::MemberAccess(it) => Self::MemberAccess(it),
            Expression::IndexAccess(it) => Self::IndexAccess(it),
            Expression::IndexRangeAccess(it) => Self::IndexRangeAccess(it),
            Expression::TupleExpression(it) => Self::TupleExpression(it),
            Expression::NewExpression(it) => Self::NewExpression(it),
            Expression::ElementaryTypeNameExpression(it) => Self::ElementaryTypeNameExpression(it),
            Expression::Identifier(it) => Self::Identifier(it),
            Expression::Literal(it) => Self::Literal(it),
            Expression::Other => return None,
        })
    }

    pub fn documentation(documentation: &'a Documentation) -> Option<Self> {
        match documentation {
            Documentation::Structured(it) => Some(Self::StructuredDocumentation(it)),
            Documentation::Text(_) => None,
        }
    }

    pub fn range(self) -> Option<TextRange> {
        each_node!(self, it => it.src)
    }

    pub fn kind_name(self) -> &'static str {
        match self {
            Self::SourceUnit(_) => "SourceUnit",
            Self::PragmaDirective(_) => "PragmaDirective",
            Self::ContractDefinition(_) => "ContractDefinition",
            Self::InheritanceSpecifier(_) => "InheritanceSpecifier",
            Self::StructDefinition(_) => "StructDefinition",
            Self::EnumDefinition(_) => "EnumDefinition",
            Self::EnumValue(_) => "EnumValue",
            Self::ErrorDefinition(_) => "ErrorDefinition",
            Self::EventDefinition(_) => "EventDefinition",
            Self::FunctionDefinition(_) => "FunctionDefinition",
            Self::ModifierDefinition(_) => "ModifierDefinition",
            Self::ModifierInvocation(_) => "ModifierInvocation",
            Self::OverrideSpecifier(_) => "OverrideSpecifier",
            Self::ParameterList(_) => "ParameterList",
            Self::VariableDeclaration(_) => "VariableDeclaration",
            Self::UsingForDirective(_) => "UsingForDirective",
            Self::UserDefinedValueTypeDefinition(_) => "UserDefinedValueTypeDefinition",
            Self::StructuredDocumentation(_) => "StructuredDocumentation",
            Self::IdentifierPath(_) => "IdentifierPath",
            Self::ElementaryTypeName(_) => "ElementaryTypeName",
            Self::UserDefinedTypeName(_) => "UserDefinedTypeName",
            Self::Mapping(_) => "Mapping",
            Self::ArrayTypeName(_) => "ArrayTypeName",
            Self::FunctionTypeName(_) => "FunctionTypeName",
            Self::Block(_) => "Block",
            Self::BareStatement(_) => "BareStatement",
            Self::ExpressionStatement(_) => "ExpressionStatement",
            Self::VariableDeclarationStatement(_) => "VariableDeclarationStatement",
            Self::Return(_) => "Return",
            Self::IfStatement(_) => "IfStatement",
            Self::ForStatement(_) => "ForStatement",
            Self::WhileStatement(_) => "WhileStatement",
            Self::EmitStatement(_) => "EmitStatement",
            Self::RevertStatement(_) => "RevertStatement",
            Self::TryStatement(_) => "TryStatement",
            Self::TryCatchClause(_) => "TryCatchClause",
            Self::Assignment(_) => "Assignment",
            Self::BinaryOperation(_) => "BinaryOperation",
            Self::UnaryOperation(_) => "UnaryOperation",
            Self::Conditional(_) => "Conditional",
            Self::FunctionCall(_) => "FunctionCall",
            Self::FunctionCallOptions(_) => "FunctionCallOptions",
            Self::MemberAccess(_) => "MemberAccess",
            Self::IndexAccess(_) => "IndexAccess",
            Self::IndexRangeAccess(_) => "IndexRangeAccess",
            Self::TupleExpression(_) => "TupleExpression",
            Self::NewExpression(_) => "NewExpression",
            Self::ElementaryTypeNameExpression(_) => "ElementaryTypeNameExpression",
            Self::Identifier(_) => "Identifier",
            Self::Literal(_) => "Literal",
        }
    }

    /// Direct children in declaration order of their attributes.
    ///
    /// The order is the compiler's, not necessarily the textual one; callers
    /// that need source order sort by [`NodeRef::range`].
    pub fn children(self) -> Vec<Self> {
        let mut children = Children::default();
        match self {
            Self::SourceUnit(it) => children.items(&it.nodes),
            Self::ContractDefinition(it) => {
                children.documentation(&it.documentation);
                children.extend(it.base_contracts.iter().map(Self::InheritanceSpecifier));
                children.items(&it.nodes);
            }
            Self::InheritanceSpecifier(it) => {
                children.push(Self::IdentifierPath(&it.base_name));
                children.expressions(it.arguments.iter().flatten());
            }
            Self::StructDefinition(it) => {
                children.documentation(&it.documentation);
                children.extend(it.members.iter().map(Self::VariableDeclaration));
            }
            Self::EnumDefinition(it) => {
                children.documentation(&it.documentation);
                children.extend(it.members.iter().map(Self::EnumValue));
            }
            Self::ErrorDefinition(it) => {
                children.documentation(&it.documentation);
                children.push(Self::ParameterList(&it.parameters));
            }
            Self::EventDefinition(it) => {
                children.documentation(&it.documentation);
                children.push(Self::ParameterList(&it.parameters));
            }
            Self::FunctionDefinition(it) => {
                children.documentation(&it.documentation);
                children.push(Self::ParameterList(&it.parameters));
                children.extend(it.overrides.as_ref().map(Self::OverrideSpecifier));
                children.extend(it.modifiers.iter().map(Self::ModifierInvocation));
                children.push(Self::ParameterList(&it.return_parameters));
                children.extend(it.body.as_ref().map(Self::Block));
            }
            Self::ModifierDefinition(it) => {
                children.documentation(&it.documentation);
                children.push(Self::ParameterList(&it.parameters));
                children.extend(it.overrides.as_ref().map(Self::OverrideSpecifier));
                children.extend(it.body.as_ref().map(Self::Block));
            }
            Self::ModifierInvocation(it) => {
                children.push(Self::IdentifierPath(&it.modifier_name));
                children.expressions(it.arguments.iter().flatten());
            }
            Self::OverrideSpecifier(it) => {
                children.extend(it.overrides.iter().map(Self::IdentifierPath));
            }
            Self::ParameterList(it) => {
                children.extend(it.parameters.iter().map(Self::VariableDeclaration));
            }
            Self::VariableDeclaration(it) => {
                children.documentation(&it.documentation);
                children.type_name(it.type_name.as_ref());
                children.extend(it.overrides.as_ref().map(Self::OverrideSpecifier));
                children.expression(it.value.as_ref());
            }
            Self::UsingForDirective(it) => {
                children.extend(it.library_name.as_ref().map(Self::IdentifierPath));
                children.type_name(it.type_name.as_ref());
            }
            Self::UserDefinedValueTypeDefinition(it) => {
                children.type_name(Some(&it.underlying_type));
            }
            Self::Mapping(it) => {
                children.type_name(Some(&*it.key_type));
                children.type_name(Some(&*it.value_type));
            }
            Self::ArrayTypeName(it) => {
                children.type_name(Some(&*it.base_type));
                children.expression(it.length.as_deref());
            }
            Self::FunctionTypeName(it) => {
                children.push(Self::ParameterList(&it.parameter_types));
                children.push(Self::ParameterList(&it.return_parameter_types));
            }
            Self::Block(it) => children.statements(it.statements.iter()),
            Self::ExpressionStatement(it) => children.expression(Some(&it.expression)),
            Self::VariableDeclarationStatement(it) => {
                children.extend(it.declarations.iter().flatten().map(Self::VariableDeclaration));
                children.expression(it.initial_value.as_ref());
            }
            Self::Return(it) => children.expression(it.expression.as_ref()),
            Self::IfStatement(it) => {
                children.expression(Some(&it.condition));
                children.statements(Some(&*it.true_body));
                children.statements(it.false_body.as_deref());
            }
            Self::ForStatement(it) => {
                children.statements(it.initialization_expression.as_deref());
                children.expression(it.condition.as_ref());
                children.statements(it.loop_expression.as_deref());
                children.statements(Some(&*it.body));
            }
            Self::WhileStatement(it) => {
                children.expression(Some(&it.condition));
                children.statements(Some(&*it.body));
            }
            Self::EmitStatement(it) => children.expression(Some(&it.event_call)),
            Self::RevertStatement(it) => children.expression(Some(&it.error_call)),
            Self::TryStatement(it) => {
                children.expression(Some(&it.external_call));
                children.extend(it.clauses.iter().map(Self::TryCatchClause));
            }
            Self::TryCatchClause(it) => {
                children.extend(it.parameters.as_ref().map(Self::ParameterList));
                children.push(Self::Block(&it.block));
            }
            Self::Assignment(it) => {
                children.expression(Some(&*it.left_hand_side));
                children.expression(Some(&*it.right_hand_side));
            }
            Self::BinaryOperation(it) => {
                children.expression(Some(&*it.left_expression));
                children.expression(Some(&*it.right_expression));
            }
            Self::UnaryOperation(it) => children.expression(Some(&*it.sub_expression)),
            Self::Conditional(it) => {
                children.expression(Some(&*it.condition));
                children.expression(Some(&*it.true_expression));
                children.expression(Some(&*it.false_expression));
            }
            Self::FunctionCall(it) => {
                children.expression(Some(&*it.expression));
                children.expressions(&it.arguments);
            }
            Self::FunctionCallOptions(it) => {
                children.expression(Some(&*it.expression));
                children.expressions(&it.options);
            }
            Self::MemberAccess(it) => children.expression(Some(&*it.expression)),
            Self::IndexAccess(it) => {
                children.expression(Some(&*it.base_expression));
                children.expression(it.index_expression.as_deref());
            }
            Self::IndexRangeAccess(it) => {
                children.expression(Some(&*it.base_expression));
                children.expression(it.start_expression.as_deref());
                children.expression(it.end_expression.as_deref());
            }
            Self::TupleExpression(it) => children.expressions(it.components.iter().flatten()),
            Self::NewExpression(it) => children.type_name(Some(&it.type_name)),
            Self::ElementaryTypeNameExpression(it) => {
                children.push(Self::ElementaryTypeName(&it.type_name));
            }
            // The path of a user-defined type name is highlighted by the type
            // name itself and is not a separate child.
            Self::UserDefinedTypeName(_)
            | Self::PragmaDirective(_)
            | Self::EnumValue(_)
            | Self::StructuredDocumentation(_)
            | Self::IdentifierPath(_)
            | Self::ElementaryTypeName(_)
            | Self::BareStatement(_)
            | Self::Identifier(_)
            | Self::Literal(_) => {}
        }
        children.0
    }
}

#[derive(Default)]
struct Children<'a>(Vec<NodeRef<'a>>);

impl<'a> Children<'a> {
    fn push(&mut self, node: NodeRef<'a>) {
        self.0.push(node);
    }

    fn extend(&mut self, nodes: impl IntoIterator<Item = NodeRef<'a>>) {
        self.0.extend(nodes);
    }

    fn items(&mut self, items: &'a [Item]) {
        self.0.extend(items.iter().filter_map(NodeRef::item));
    }

    fn documentation(&mut self, documentation: &'a Option<Documentation>) {
        self.0.extend(documentation.as_ref().and_then(NodeRef::documentation));
    }

    fn type_name(&mut self, type_name: Option<&'a TypeName>) {
        self.0.extend(type_name.and_then(NodeRef::type_name));
    }

    fn statements(&mut self, statements: impl IntoIterator<Item = &'a Statement>) {
        self.0.extend(statements.into_iter().filter_map(NodeRef::statement));
    }

    fn expression(&mut self, expression: Option<&'a Expression>) {
        self.0.extend(expression.and_then(NodeRef::expression));
    }

    fn expressions(&mut self, expressions: impl IntoIterator<Item = &'a Expression>) {
        self.0.extend(expressions.into_iter().filter_map(NodeRef::expression));
    }
}
