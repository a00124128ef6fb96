#![cfg_attr(test, recursion_limit = "256")]

mod analysis;
pub mod lsp;
mod semantic_tokens;

pub use analysis::Analysis;
pub use semantic_tokens::{
    BuildError, ClassifyOn, DecodedToken, DeltaEncoder, EncodedToken, OutOfOrder, SemanticTokens,
    SemanticTokensBuilder, SemanticTokensConfig, TokenKind, TokenModifiers, TokenPosition, policy,
};
pub use soltok_inputs::PositionEncoding;
