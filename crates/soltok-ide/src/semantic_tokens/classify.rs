//! Per-node classification rules.

use soltok_syntax::ast::{ContractKind, LiteralKind};
use soltok_syntax::{DeclarationKind, Declarations, NodeRef, TextRange, VariableRole};

use super::legend::{TokenKind, TokenModifiers};

/// When a node's own tokens are emitted relative to its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyOn {
    /// Interleaved with the children by start offset.
    Enter,
    /// After all children.
    Exit,
    /// The node has no tokens of its own.
    Skip,
}

/// A classified span, before position resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Classified {
    pub(crate) range: TextRange,
    pub(crate) kind: TokenKind,
    pub(crate) modifiers: TokenModifiers,
}

/// Where a node sits in the walk.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Context<'a> {
    pub(crate) parent: Option<NodeRef<'a>>,
    /// The node is the target of a write.
    pub(crate) writes: bool,
    pub(crate) depth: u32,
}

impl<'a> Context<'a> {
    pub(crate) fn root() -> Self {
        Self { parent: None, writes: false, depth: 0 }
    }

    /// Context of the `index`-th child of `node`, as returned by
    /// [`NodeRef::children`].
    pub(crate) fn child(self, node: NodeRef<'a>, index: usize) -> Self {
        Self {
            parent: Some(node),
            writes: writes_child(node, index, self.writes),
            depth: self.depth + 1,
        }
    }
}

fn writes_child(node: NodeRef<'_>, index: usize, writes: bool) -> bool {
    match node {
        NodeRef::Assignment(it) => index == 0 && NodeRef::expression(&it.left_hand_side).is_some(),
        NodeRef::UnaryOperation(it) => it.writes_operand(),
        NodeRef::TupleExpression(_) => writes,
        NodeRef::IndexAccess(it) => {
            writes && index == 0 && NodeRef::expression(&it.base_expression).is_some()
        }
        NodeRef::IndexRangeAccess(it) => {
            writes && index == 0 && NodeRef::expression(&it.base_expression).is_some()
        }
        _ => false,
    }
}

pub fn policy(node: NodeRef<'_>) -> ClassifyOn {
    match node {
        NodeRef::ContractDefinition(_)
        | NodeRef::StructDefinition(_)
        | NodeRef::EnumDefinition(_)
        | NodeRef::EnumValue(_)
        | NodeRef::ErrorDefinition(_)
        | NodeRef::EventDefinition(_)
        | NodeRef::FunctionDefinition(_)
        | NodeRef::ModifierDefinition(_)
        | NodeRef::ParameterList(_)
        | NodeRef::VariableDeclaration(_)
        | NodeRef::UserDefinedValueTypeDefinition(_)
        | NodeRef::StructuredDocumentation(_)
        | NodeRef::ElementaryTypeName(_)
        | NodeRef::ElementaryTypeNameExpression(_)
        | NodeRef::UserDefinedTypeName(_)
        | NodeRef::MemberAccess(_) => ClassifyOn::Enter,

        NodeRef::PragmaDirective(_)
        | NodeRef::IdentifierPath(_)
        | NodeRef::Identifier(_)
        | NodeRef::Literal(_) => ClassifyOn::Exit,

        NodeRef::SourceUnit(_)
        | NodeRef::InheritanceSpecifier(_)
        | NodeRef::ModifierInvocation(_)
        | NodeRef::OverrideSpecifier(_)
        | NodeRef::UsingForDirective(_)
        | NodeRef::Mapping(_)
        | NodeRef::ArrayTypeName(_)
        | NodeRef::FunctionTypeName(_)
        | NodeRef::Block(_)
        | NodeRef::BareStatement(_)
        | NodeRef::ExpressionStatement(_)
        | NodeRef::VariableDeclarationStatement(_)
        | NodeRef::Return(_)
        | NodeRef::IfStatement(_)
        | NodeRef::ForStatement(_)
        | NodeRef::WhileStatement(_)
        | NodeRef::EmitStatement(_)
        | NodeRef::RevertStatement(_)
        | NodeRef::TryStatement(_)
        | NodeRef::TryCatchClause(_)
        | NodeRef::Assignment(_)
        | NodeRef::BinaryOperation(_)
        | NodeRef::UnaryOperation(_)
        | NodeRef::Conditional(_)
        | NodeRef::FunctionCall(_)
        | NodeRef::FunctionCallOptions(_)
        | NodeRef::IndexAccess(_)
        | NodeRef::IndexRangeAccess(_)
        | NodeRef::TupleExpression(_)
        | NodeRef::NewExpression(_) => ClassifyOn::Skip,
    }
}

pub(crate) struct Classifier<'a> {
    declarations: &'a Declarations,
}

impl<'a> Classifier<'a> {
    pub(crate) fn new(declarations: &'a Declarations) -> Self {
        Self { declarations }
    }

    /// The node's own tokens, sorted by start.
    pub(crate) fn classify(&self, node: NodeRef<'_>, cx: Context<'_>) -> Vec<Classified> {
        let mut tokens = Tokens::default();
        match node {
            NodeRef::PragmaDirective(it) => {
                tokens.push(it.src, TokenKind::Macro, TokenModifiers::empty());
            }
            NodeRef::ContractDefinition(it) => {
                let kind = match it.contract_kind {
                    ContractKind::Interface => TokenKind::Interface,
                    ContractKind::Contract | ContractKind::Library => TokenKind::Class,
                };
                let mut modifiers = TokenModifiers::DECLARATION;
                modifiers.set(TokenModifiers::ABSTRACT, it.is_abstract);
                tokens.push(it.name_location, kind, modifiers);
            }
            NodeRef::StructDefinition(it) => {
                tokens.push(it.name_location, TokenKind::Struct, TokenModifiers::DECLARATION);
            }
            NodeRef::EnumDefinition(it) => {
                tokens.push(it.name_location, TokenKind::Enum, TokenModifiers::DECLARATION);
            }
            NodeRef::EnumValue(it) => {
                tokens.push(it.name_location, TokenKind::EnumMember, TokenModifiers::READONLY);
            }
            NodeRef::ErrorDefinition(it) => {
                tokens.push(it.name_location, TokenKind::Event, TokenModifiers::empty());
            }
            NodeRef::EventDefinition(it) => {
                tokens.push(it.name_location, TokenKind::Event, TokenModifiers::empty());
            }
            NodeRef::FunctionDefinition(it) if !it.name.is_empty() => {
                let kind = match DeclarationKind::of(node, cx.parent) {
                    Some(DeclarationKind::Function { method: true }) => TokenKind::Method,
                    _ => TokenKind::Function,
                };
                let mut modifiers = TokenModifiers::DECLARATION;
                modifiers.set(TokenModifiers::ABSTRACT, it.body.is_none());
                tokens.push(it.name_location, kind, modifiers);
            }
            NodeRef::ModifierDefinition(it) => {
                let mut modifiers = TokenModifiers::DECLARATION;
                modifiers.set(TokenModifiers::ABSTRACT, it.body.is_none());
                tokens.push(it.name_location, TokenKind::Modifier, modifiers);
            }
            NodeRef::ParameterList(it) => {
                for parameter in it.parameters.iter().filter(|it| !it.name.is_empty()) {
                    let range = parameter.name_location;
                    tokens.push(range, TokenKind::Parameter, TokenModifiers::empty());
                }
            }
            NodeRef::VariableDeclaration(it) if !it.name.is_empty() => {
                if let Some(DeclarationKind::Variable { role, readonly }) =
                    DeclarationKind::of(node, cx.parent)
                {
                    let kind = match role {
                        VariableRole::Parameter => return Vec::new(),
                        VariableRole::State | VariableRole::StructMember => TokenKind::Property,
                        VariableRole::File | VariableRole::Local => TokenKind::Variable,
                    };
                    let mut modifiers = TokenModifiers::empty();
                    modifiers.set(TokenModifiers::READONLY, readonly);
                    tokens.push(it.name_location, kind, modifiers);
                }
            }
            NodeRef::UserDefinedValueTypeDefinition(it) => {
                tokens.push(it.name_location, TokenKind::Type, TokenModifiers::DECLARATION);
            }
            NodeRef::StructuredDocumentation(it) => {
                tokens.push(it.src, TokenKind::Comment, TokenModifiers::DOCUMENTATION);
            }
            NodeRef::ElementaryTypeName(it) => {
                tokens.push(it.src, TokenKind::Type, TokenModifiers::empty());
            }
            NodeRef::ElementaryTypeNameExpression(it) => {
                tokens.push(it.src, TokenKind::Type, TokenModifiers::empty());
            }
            NodeRef::UserDefinedTypeName(it) => {
                let segments = it.segments();
                if let Some(((last, _), qualifiers)) = segments.split_last() {
                    for &(range, name) in qualifiers {
                        let (kind, modifiers) = self.qualifier(name);
                        tokens.push(Some(range), kind, modifiers);
                    }
                    tokens.push(Some(*last), TokenKind::Type, TokenModifiers::empty());
                }
            }
            NodeRef::IdentifierPath(it) => {
                let segments = it.segments();
                if let Some(((last, _), qualifiers)) = segments.split_last() {
                    for &(range, name) in qualifiers {
                        let (kind, modifiers) = self.qualifier(name);
                        tokens.push(Some(range), kind, modifiers);
                    }
                    let (kind, modifiers) = self
                        .declarations
                        .resolve(it.referenced_declaration)
                        .map_or((TokenKind::Variable, TokenModifiers::empty()), reference);
                    tokens.push(Some(*last), kind, modifiers);
                }
            }
            NodeRef::Identifier(it) => {
                let (kind, mut modifiers) = self
                    .declarations
                    .resolve(it.referenced_declaration)
                    .map_or((TokenKind::Variable, TokenModifiers::empty()), reference);
                modifiers.set(TokenModifiers::MODIFICATION, cx.writes);
                tokens.push(it.src, kind, modifiers);
            }
            NodeRef::MemberAccess(it) => {
                let (kind, mut modifiers) = self
                    .declarations
                    .resolve(it.referenced_declaration)
                    .map_or((TokenKind::Property, TokenModifiers::empty()), reference);
                modifiers.set(TokenModifiers::MODIFICATION, cx.writes);
                tokens.push(it.member_range(), kind, modifiers);
            }
            NodeRef::Literal(it) => {
                let kind = match it.kind {
                    LiteralKind::Bool | LiteralKind::Number => TokenKind::Number,
                    LiteralKind::String | LiteralKind::HexString | LiteralKind::UnicodeString => {
                        TokenKind::String
                    }
                };
                tokens.push(it.src, kind, TokenModifiers::empty());
            }
            _ => {}
        }
        tokens.finish(node)
    }

    /// Qualifiers of a path (`Lib` in `Lib.Point`) are looked up by name
    /// among the source unit's top-level declarations.
    fn qualifier(&self, name: &str) -> (TokenKind, TokenModifiers) {
        self.declarations
            .lookup_name(name)
            .map_or((TokenKind::Variable, TokenModifiers::empty()), reference)
    }
}

/// Token for a reference to a declaration of `kind`.
fn reference(kind: DeclarationKind) -> (TokenKind, TokenModifiers) {
    let token = match kind {
        DeclarationKind::Contract(ContractKind::Interface) => TokenKind::Interface,
        DeclarationKind::Contract(ContractKind::Contract | ContractKind::Library) => {
            TokenKind::Class
        }
        DeclarationKind::Struct => TokenKind::Struct,
        DeclarationKind::Enum => TokenKind::Enum,
        DeclarationKind::EnumValue => return (TokenKind::EnumMember, TokenModifiers::READONLY),
        DeclarationKind::Event | DeclarationKind::Error => TokenKind::Event,
        DeclarationKind::Function { method: true } => TokenKind::Method,
        DeclarationKind::Function { method: false } => TokenKind::Function,
        DeclarationKind::Modifier => TokenKind::Modifier,
        DeclarationKind::UserDefinedValueType => TokenKind::Type,
        DeclarationKind::Variable { role, readonly } => {
            let kind = match role {
                VariableRole::State | VariableRole::StructMember => TokenKind::Property,
                VariableRole::Parameter => TokenKind::Parameter,
                VariableRole::File | VariableRole::Local => TokenKind::Variable,
            };
            let mut modifiers = TokenModifiers::empty();
            modifiers.set(TokenModifiers::READONLY, readonly);
            return (kind, modifiers);
        }
    };
    (token, TokenModifiers::empty())
}

#[derive(Default)]
struct Tokens(Vec<Classified>);

impl Tokens {
    fn push(&mut self, range: Option<TextRange>, kind: TokenKind, modifiers: TokenModifiers) {
        if let Some(range) = range.filter(|range| !range.is_empty()) {
            self.0.push(Classified { range, kind, modifiers });
        }
    }

    fn finish(mut self, node: NodeRef<'_>) -> Vec<Classified> {
        if self.0.is_empty() {
            tracing::trace!(kind = node.kind_name(), range = ?node.range(), "no tokens");
        }
        self.0.sort_by_key(|token| token.range.start());
        self.0
    }
}
