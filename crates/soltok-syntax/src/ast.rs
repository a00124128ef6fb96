//! Owned Solidity AST, shaped after solc's compact JSON output.
//!
//! Only the attributes needed for highlighting are kept. Unknown node types
//! deserialize into the `Other` variant of their category and are never
//! visited.

use serde::Deserialize;
use text_size::{TextRange, TextSize};

use crate::src_location::{self, path_segments};

pub type NodeId = i64;

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceUnit {
    #[serde(default)]
    pub id: NodeId,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    #[serde(default)]
    pub absolute_path: Option<String>,
    #[serde(default)]
    pub nodes: Vec<Item>,
}

/// Source-unit and contract level definitions.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "nodeType")]
pub enum Item {
    PragmaDirective(PragmaDirective),
    ContractDefinition(ContractDefinition),
    StructDefinition(StructDefinition),
    EnumDefinition(EnumDefinition),
    ErrorDefinition(ErrorDefinition),
    EventDefinition(EventDefinition),
    FunctionDefinition(FunctionDefinition),
    ModifierDefinition(ModifierDefinition),
    VariableDeclaration(VariableDeclaration),
    UsingForDirective(UsingForDirective),
    UserDefinedValueTypeDefinition(UserDefinedValueTypeDefinition),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PragmaDirective {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    #[serde(default)]
    pub literals: Vec<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContractKind {
    #[default]
    Contract,
    Interface,
    Library,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContractDefinition {
    pub id: NodeId,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub name: String,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub name_location: Option<TextRange>,
    #[serde(default)]
    pub contract_kind: ContractKind,
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,
    #[serde(default)]
    pub base_contracts: Vec<InheritanceSpecifier>,
    #[serde(default)]
    pub documentation: Option<Documentation>,
    #[serde(default)]
    pub nodes: Vec<Item>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InheritanceSpecifier {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub base_name: IdentifierPath,
    #[serde(default)]
    pub arguments: Option<Vec<Expression>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructDefinition {
    pub id: NodeId,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub name: String,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub name_location: Option<TextRange>,
    #[serde(default)]
    pub members: Vec<VariableDeclaration>,
    #[serde(default)]
    pub documentation: Option<Documentation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumDefinition {
    pub id: NodeId,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub name: String,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub name_location: Option<TextRange>,
    #[serde(default)]
    pub members: Vec<EnumValue>,
    #[serde(default)]
    pub documentation: Option<Documentation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub id: NodeId,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub name: String,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub name_location: Option<TextRange>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorDefinition {
    pub id: NodeId,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub name: String,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub name_location: Option<TextRange>,
    pub parameters: ParameterList,
    #[serde(default)]
    pub documentation: Option<Documentation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDefinition {
    pub id: NodeId,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub name: String,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub name_location: Option<TextRange>,
    pub parameters: ParameterList,
    #[serde(default)]
    pub anonymous: bool,
    #[serde(default)]
    pub documentation: Option<Documentation>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FunctionKind {
    #[default]
    Function,
    Constructor,
    Fallback,
    Receive,
    FreeFunction,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionDefinition {
    pub id: NodeId,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub name_location: Option<TextRange>,
    #[serde(default)]
    pub kind: FunctionKind,
    pub parameters: ParameterList,
    pub return_parameters: ParameterList,
    #[serde(default)]
    pub modifiers: Vec<ModifierInvocation>,
    #[serde(default)]
    pub overrides: Option<OverrideSpecifier>,
    #[serde(default)]
    pub body: Option<Block>,
    #[serde(default)]
    pub documentation: Option<Documentation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierDefinition {
    pub id: NodeId,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub name: String,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub name_location: Option<TextRange>,
    pub parameters: ParameterList,
    #[serde(default)]
    pub overrides: Option<OverrideSpecifier>,
    #[serde(default)]
    pub body: Option<Block>,
    #[serde(default)]
    pub documentation: Option<Documentation>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifierInvocation {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub modifier_name: IdentifierPath,
    #[serde(default)]
    pub arguments: Option<Vec<Expression>>,
}

/// `override` or `override(A, B)` on a function, modifier or state variable.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideSpecifier {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    #[serde(default)]
    pub overrides: Vec<IdentifierPath>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterList {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    #[serde(default)]
    pub parameters: Vec<VariableDeclaration>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mutability {
    Mutable,
    Immutable,
    Constant,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDeclaration {
    pub id: NodeId,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub name_location: Option<TextRange>,
    #[serde(default)]
    pub type_name: Option<TypeName>,
    #[serde(default)]
    pub value: Option<Expression>,
    #[serde(default)]
    pub constant: bool,
    #[serde(default)]
    pub mutability: Option<Mutability>,
    #[serde(default)]
    pub state_variable: bool,
    #[serde(default)]
    pub overrides: Option<OverrideSpecifier>,
    #[serde(default)]
    pub documentation: Option<Documentation>,
}

impl VariableDeclaration {
    /// `constant` and `immutable` variables cannot be written after construction.
    pub fn is_readonly(&self) -> bool {
        self.constant
            || matches!(self.mutability, Some(Mutability::Constant | Mutability::Immutable))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsingForDirective {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    #[serde(default)]
    pub library_name: Option<IdentifierPath>,
    #[serde(default)]
    pub type_name: Option<TypeName>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDefinedValueTypeDefinition {
    pub id: NodeId,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub name: String,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub name_location: Option<TextRange>,
    pub underlying_type: TypeName,
}

/// NatSpec attached to a definition. Older compilers emit a bare string.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum Documentation {
    Structured(StructuredDocumentation),
    Text(String),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredDocumentation {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    #[serde(default)]
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifierPath {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub name: String,
    #[serde(default)]
    pub referenced_declaration: Option<NodeId>,
    #[serde(default, deserialize_with = "src_location::deserialize_many")]
    pub name_locations: Vec<Option<TextRange>>,
}

impl IdentifierPath {
    pub fn segments(&self) -> Vec<(TextRange, &str)> {
        path_segments(&self.name, self.src, &self.name_locations)
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "nodeType")]
pub enum TypeName {
    ElementaryTypeName(ElementaryTypeName),
    UserDefinedTypeName(UserDefinedTypeName),
    Mapping(Mapping),
    ArrayTypeName(ArrayTypeName),
    FunctionTypeName(FunctionTypeName),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementaryTypeName {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDefinedTypeName {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    #[serde(default)]
    pub path_node: Option<IdentifierPath>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub referenced_declaration: Option<NodeId>,
}

impl UserDefinedTypeName {
    pub fn segments(&self) -> Vec<(TextRange, &str)> {
        match (&self.path_node, &self.name) {
            (Some(path), _) => path.segments(),
            (None, Some(name)) => path_segments(name, self.src, &[]),
            (None, None) => Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mapping {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub key_type: Box<TypeName>,
    pub value_type: Box<TypeName>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayTypeName {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub base_type: Box<TypeName>,
    #[serde(default)]
    pub length: Option<Box<Expression>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionTypeName {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub parameter_types: ParameterList,
    pub return_parameter_types: ParameterList,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "nodeType")]
pub enum Statement {
    Block(Block),
    UncheckedBlock(Block),
    ExpressionStatement(ExpressionStatement),
    VariableDeclarationStatement(VariableDeclarationStatement),
    Return(Return),
    IfStatement(IfStatement),
    ForStatement(ForStatement),
    WhileStatement(WhileStatement),
    DoWhileStatement(WhileStatement),
    EmitStatement(EmitStatement),
    RevertStatement(RevertStatement),
    TryStatement(TryStatement),
    Break(BareStatement),
    Continue(BareStatement),
    PlaceholderStatement(BareStatement),
    InlineAssembly(BareStatement),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    #[serde(default)]
    pub statements: Vec<Statement>,
}

/// A statement without highlighted children (`break`, `_`, assembly, ...).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BareStatement {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpressionStatement {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub expression: Expression,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariableDeclarationStatement {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    #[serde(default)]
    pub declarations: Vec<Option<VariableDeclaration>>,
    #[serde(default)]
    pub initial_value: Option<Expression>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Return {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    #[serde(default)]
    pub expression: Option<Expression>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IfStatement {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub condition: Expression,
    pub true_body: Box<Statement>,
    #[serde(default)]
    pub false_body: Option<Box<Statement>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForStatement {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    #[serde(default)]
    pub initialization_expression: Option<Box<Statement>>,
    #[serde(default)]
    pub condition: Option<Expression>,
    #[serde(default)]
    pub loop_expression: Option<Box<Statement>>,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WhileStatement {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub condition: Expression,
    pub body: Box<Statement>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmitStatement {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub event_call: Expression,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevertStatement {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub error_call: Expression,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TryStatement {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub external_call: Expression,
    #[serde(default)]
    pub clauses: Vec<TryCatchClause>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TryCatchClause {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    #[serde(default)]
    pub parameters: Option<ParameterList>,
    pub block: Block,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "nodeType")]
pub enum Expression {
    Assignment(Assignment),
    BinaryOperation(BinaryOperation),
    UnaryOperation(UnaryOperation),
    Conditional(Conditional),
    FunctionCall(FunctionCall),
    FunctionCallOptions(FunctionCallOptions),
    MemberAccess(MemberAccess),
    IndexAccess(IndexAccess),
    IndexRangeAccess(IndexRangeAccess),
    TupleExpression(TupleExpression),
    NewExpression(NewExpression),
    ElementaryTypeNameExpression(ElementaryTypeNameExpression),
    Identifier(Identifier),
    Literal(Literal),
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    #[serde(default)]
    pub operator: String,
    pub left_hand_side: Box<Expression>,
    pub right_hand_side: Box<Expression>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BinaryOperation {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    #[serde(default)]
    pub operator: String,
    pub left_expression: Box<Expression>,
    pub right_expression: Box<Expression>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnaryOperation {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    #[serde(default)]
    pub operator: String,
    #[serde(default)]
    pub prefix: bool,
    pub sub_expression: Box<Expression>,
}

impl UnaryOperation {
    /// `++`, `--` and `delete` write to their operand.
    pub fn writes_operand(&self) -> bool {
        matches!(self.operator.as_str(), "++" | "--" | "delete")
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conditional {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub condition: Box<Expression>,
    pub true_expression: Box<Expression>,
    pub false_expression: Box<Expression>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCall {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub expression: Box<Expression>,
    #[serde(default)]
    pub arguments: Vec<Expression>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionCallOptions {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub expression: Box<Expression>,
    #[serde(default)]
    pub options: Vec<Expression>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberAccess {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub expression: Box<Expression>,
    pub member_name: String,
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub member_location: Option<TextRange>,
    #[serde(default)]
    pub referenced_declaration: Option<NodeId>,
}

impl MemberAccess {
    /// Range of the accessed member.
    ///
    /// Compilers that do not report `memberLocation` end the expression with
    /// the member name, so it is recovered from the tail of `src`.
    pub fn member_range(&self) -> Option<TextRange> {
        if self.member_location.is_some() {
            return self.member_location;
        }
        let src = self.src?;
        let len = TextSize::of(self.member_name.as_str());
        (len <= src.len()).then(|| TextRange::new(src.end() - len, src.end()))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexAccess {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub base_expression: Box<Expression>,
    #[serde(default)]
    pub index_expression: Option<Box<Expression>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndexRangeAccess {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub base_expression: Box<Expression>,
    #[serde(default)]
    pub start_expression: Option<Box<Expression>>,
    #[serde(default)]
    pub end_expression: Option<Box<Expression>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TupleExpression {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    #[serde(default)]
    pub components: Vec<Option<Expression>>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewExpression {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub type_name: TypeName,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementaryTypeNameExpression {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub type_name: ElementaryTypeName,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identifier {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub name: String,
    #[serde(default)]
    pub referenced_declaration: Option<NodeId>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LiteralKind {
    Bool,
    Number,
    String,
    HexString,
    UnicodeString,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Literal {
    #[serde(default, deserialize_with = "src_location::deserialize")]
    pub src: Option<TextRange>,
    pub kind: LiteralKind,
    #[serde(default)]
    pub value: Option<String>,
}
