//! Resolved Solidity syntax trees as emitted by solc's compact AST JSON.
//!
//! The tree is owned and immutable once loaded. Traversal goes through
//! [`NodeRef`], a closed borrowed view with one variant per node kind.

/// Owned AST node types.
pub mod ast;
mod declarations;
mod load;
mod node;
mod src_location;

pub use ast::{Expression, Item, NodeId, SourceUnit, Statement, TypeName};
/// Binding table used to classify references.
pub use declarations::{DeclarationKind, Declarations, VariableRole};
pub use load::{LoadError, LoadedSource, load, source_unit_from_str, source_unit_from_value};
pub use node::NodeRef;
pub use src_location::parse_src;
pub use text_size::{TextRange, TextSize};
