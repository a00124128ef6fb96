use serde::Deserialize as _;
use serde_json::{Map, Value};

use crate::ast::SourceUnit;
use crate::declarations::Declarations;

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("invalid AST JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("expected a `SourceUnit` node, found `{found}`")]
    NotASourceUnit { found: String },
    #[error("compiler output has no source named `{0}`")]
    UnknownSource(String),
    #[error("compiler output contains {count} sources, pick one by name")]
    AmbiguousSource { count: usize },
    #[error("compiler output contains no sources")]
    NoSources,
}

/// Loads a bare `SourceUnit` node.
pub fn source_unit_from_str(json: &str) -> Result<SourceUnit, LoadError> {
    source_unit_from_value(serde_json::from_str(json)?)
}

pub fn source_unit_from_value(value: Value) -> Result<SourceUnit, LoadError> {
    let node_type = value.get("nodeType").and_then(Value::as_str).unwrap_or("<missing nodeType>");
    if node_type != "SourceUnit" {
        return Err(LoadError::NotASourceUnit { found: node_type.to_owned() });
    }
    Ok(SourceUnit::deserialize(value)?)
}

/// A unit picked out of compiler output and the other units compiled with it.
#[derive(Debug, Clone)]
pub struct LoadedSource {
    pub unit: SourceUnit,
    pub siblings: Vec<SourceUnit>,
}

impl LoadedSource {
    /// Bindings of `unit`, including declarations it imports from siblings.
    pub fn declarations(&self) -> Declarations {
        let mut declarations = Declarations::collect(&self.unit);
        for sibling in &self.siblings {
            declarations.add_sibling(sibling);
        }
        declarations
    }
}

/// Loads either a bare `SourceUnit` or one unit out of `solc --standard-json`
/// output (`{"sources": {"<name>": {"ast": ...}}}`).
///
/// Without `source_name` the compiler output must contain exactly one source.
pub fn load(json: &str, source_name: Option<&str>) -> Result<LoadedSource, LoadError> {
    let mut value: Value = serde_json::from_str(json)?;
    match value.get_mut("sources").map(Value::take) {
        Some(Value::Object(sources)) => select_source(sources, source_name),
        _ => Ok(LoadedSource { unit: source_unit_from_value(value)?, siblings: Vec::new() }),
    }
}

fn select_source(
    mut sources: Map<String, Value>,
    source_name: Option<&str>,
) -> Result<LoadedSource, LoadError> {
    let name = match source_name {
        Some(name) if sources.contains_key(name) => name.to_owned(),
        Some(name) => return Err(LoadError::UnknownSource(name.to_owned())),
        None => match sources.len() {
            0 => return Err(LoadError::NoSources),
            1 => sources.keys().next().cloned().unwrap_or_default(),
            count => return Err(LoadError::AmbiguousSource { count }),
        },
    };

    let unit = ast(sources.remove(&name).unwrap_or_default())?;
    let siblings = sources.into_iter().map(|(_, source)| ast(source)).collect::<Result<_, _>>()?;
    Ok(LoadedSource { unit, siblings })
}

fn ast(mut source: Value) -> Result<SourceUnit, LoadError> {
    source_unit_from_value(source.get_mut("ast").map(Value::take).unwrap_or_default())
}
