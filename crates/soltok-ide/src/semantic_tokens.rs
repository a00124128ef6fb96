//! Semantic tokens for a resolved Solidity source unit.
//!
//! The tree is walked once in source order. Each node kind classifies its own
//! spans according to [`policy`]; the spans are resolved to line and column
//! and folded into the relative LSP encoding by [`DeltaEncoder`].

mod builder;
mod classify;
mod encoder;
mod legend;
#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use soltok_errors::Diagnostic;
use soltok_inputs::PositionEncoding;
use text_size::TextRange;

pub use builder::SemanticTokensBuilder;
pub use classify::{ClassifyOn, policy};
pub use encoder::{
    DecodedToken, DeltaEncoder, EncodedToken, OutOfOrder, SemanticTokens, TokenPosition,
};
pub use legend::{TokenKind, TokenModifiers};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SemanticTokensConfig {
    pub position_encoding: PositionEncoding,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    /// The walk produced a token that starts before the previous one. This
    /// happens when node spans do not match the text they claim to cover.
    #[error("semantic token at {next} is out of order, the previous token is at {previous}")]
    OutOfOrder { previous: TokenPosition, next: TokenPosition, range: TextRange },
}

impl BuildError {
    pub fn range(&self) -> TextRange {
        match self {
            Self::OutOfOrder { range, .. } => *range,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self {
            Self::OutOfOrder { previous, .. } => format!("emitted after the token at {previous}"),
        };
        Diagnostic::error(self.to_string(), self.range()).with_label(label)
    }
}
