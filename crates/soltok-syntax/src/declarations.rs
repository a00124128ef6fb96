use rustc_hash::FxHashMap;

use crate::NodeRef;
use crate::ast::{ContractKind, NodeId, SourceUnit};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableRole {
    /// Contract storage.
    State,
    /// File-level constant.
    File,
    Local,
    Parameter,
    StructMember,
}

/// What a declaration declares, as far as highlighting cares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Contract(ContractKind),
    Struct,
    Enum,
    EnumValue,
    Event,
    Error,
    /// `method` is set for functions defined inside a contract.
    Function { method: bool },
    Modifier,
    UserDefinedValueType,
    Variable { role: VariableRole, readonly: bool },
}

impl DeclarationKind {
    /// Classifies a declaration site given its syntactic parent.
    pub fn of(node: NodeRef<'_>, parent: Option<NodeRef<'_>>) -> Option<Self> {
        Some(match node {
            NodeRef::ContractDefinition(it) => Self::Contract(it.contract_kind),
            NodeRef::StructDefinition(_) => Self::Struct,
            NodeRef::EnumDefinition(_) => Self::Enum,
            NodeRef::EnumValue(_) => Self::EnumValue,
            NodeRef::EventDefinition(_) => Self::Event,
            NodeRef::ErrorDefinition(_) => Self::Error,
            NodeRef::FunctionDefinition(_) => {
                Self::Function { method: matches!(parent, Some(NodeRef::ContractDefinition(_))) }
            }
            NodeRef::ModifierDefinition(_) => Self::Modifier,
            NodeRef::UserDefinedValueTypeDefinition(_) => Self::UserDefinedValueType,
            NodeRef::VariableDeclaration(it) => {
                let role = match parent {
                    Some(NodeRef::ParameterList(_)) => VariableRole::Parameter,
                    Some(NodeRef::StructDefinition(_)) => VariableRole::StructMember,
                    Some(NodeRef::ContractDefinition(_)) => VariableRole::State,
                    Some(NodeRef::SourceUnit(_)) => VariableRole::File,
                    _ if it.state_variable => VariableRole::State,
                    _ => VariableRole::Local,
                };
                Self::Variable { role, readonly: it.is_readonly() }
            }
            _ => return None,
        })
    }
}

/// Every declaration of a source unit, keyed by node id, plus the names
/// declared at source-unit level for resolving path qualifiers.
///
/// Node ids are unique across one compiler run, so the declarations of the
/// other units of that run can be added to resolve references into imports.
#[derive(Debug, Default)]
pub struct Declarations {
    by_id: FxHashMap<NodeId, DeclarationKind>,
    by_name: FxHashMap<String, DeclarationKind>,
}

impl Declarations {
    pub fn collect(unit: &SourceUnit) -> Self {
        let mut declarations = Self::default();
        declarations.visit(NodeRef::SourceUnit(unit), None, true);
        declarations
    }

    /// Adds the declarations of another unit of the same compiler run. Its
    /// top-level names are not added.
    pub fn add_sibling(&mut self, unit: &SourceUnit) {
        self.visit(NodeRef::SourceUnit(unit), None, false);
    }

    pub fn get(&self, id: NodeId) -> Option<DeclarationKind> {
        self.by_id.get(&id).copied()
    }

    /// Resolves a `referencedDeclaration`. Builtins carry negative ids and
    /// never resolve.
    pub fn resolve(&self, id: Option<NodeId>) -> Option<DeclarationKind> {
        id.filter(|&id| id >= 0).and_then(|id| self.get(id))
    }

    pub fn lookup_name(&self, name: &str) -> Option<DeclarationKind> {
        self.by_name.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    fn visit(&mut self, node: NodeRef<'_>, parent: Option<NodeRef<'_>>, names: bool) {
        if let Some(kind) = DeclarationKind::of(node, parent) {
            if let Some((id, name)) = identity(node) {
                self.by_id.insert(id, kind);
                if names && matches!(parent, Some(NodeRef::SourceUnit(_))) {
                    self.by_name.insert(name.to_owned(), kind);
                }
            }
        }

        for child in node.children() {
            self.visit(child, Some(node), names);
        }
    }
}

fn identity(node: NodeRef<'_>) -> Option<(NodeId, &str)> {
    Some(match node {
        NodeRef::ContractDefinition(it) => (it.id, it.name.as_str()),
        NodeRef::StructDefinition(it) => (it.id, it.name.as_str()),
        NodeRef::EnumDefinition(it) => (it.id, it.name.as_str()),
        NodeRef::EnumValue(it) => (it.id, it.name.as_str()),
        NodeRef::EventDefinition(it) => (it.id, it.name.as_str()),
        NodeRef::ErrorDefinition(it) => (it.id, it.name.as_str()),
        NodeRef::FunctionDefinition(it) => (it.id, it.name.as_str()),
        NodeRef::ModifierDefinition(it) => (it.id, it.name.as_str()),
        NodeRef::UserDefinedValueTypeDefinition(it) => (it.id, it.name.as_str()),
        NodeRef::VariableDeclaration(it) => (it.id, it.name.as_str()),
        _ => return None,
    })
}
