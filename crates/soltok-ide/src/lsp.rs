//! Conversions to and from `lsp-types`.

use lsp_types::{
    ClientCapabilities, PositionEncodingKind, SemanticToken, SemanticTokenModifier,
    SemanticTokenType, SemanticTokensFullOptions, SemanticTokensLegend, SemanticTokensOptions,
    SemanticTokensServerCapabilities, ServerCapabilities, WorkDoneProgressOptions,
};
use soltok_inputs::PositionEncoding;

use crate::{SemanticTokens, TokenKind, TokenModifiers};

pub fn legend() -> SemanticTokensLegend {
    SemanticTokensLegend {
        token_types: TokenKind::ALL
            .iter()
            .map(|kind| SemanticTokenType::new(kind.as_str()))
            .collect(),
        token_modifiers: TokenModifiers::NAMES
            .into_iter()
            .map(SemanticTokenModifier::new)
            .collect(),
    }
}

/// Full-document tokens only; neither ranges nor deltas are served.
pub fn semantic_tokens_provider() -> SemanticTokensServerCapabilities {
    SemanticTokensServerCapabilities::SemanticTokensOptions(SemanticTokensOptions {
        work_done_progress_options: WorkDoneProgressOptions::default(),
        legend: legend(),
        range: Some(false),
        full: Some(SemanticTokensFullOptions::Bool(true)),
    })
}

pub fn server_capabilities(encoding: PositionEncoding) -> ServerCapabilities {
    ServerCapabilities {
        position_encoding: Some(position_encoding_kind(encoding)),
        semantic_tokens_provider: Some(semantic_tokens_provider()),
        ..ServerCapabilities::default()
    }
}

/// Picks the first encoding the client offers that is supported, falling
/// back to UTF-16 which every client must accept.
pub fn negotiate_position_encoding(capabilities: &ClientCapabilities) -> PositionEncoding {
    capabilities
        .general
        .as_ref()
        .and_then(|general| general.position_encodings.as_deref())
        .and_then(|offered| offered.iter().find_map(position_encoding))
        .unwrap_or_default()
}

pub fn position_encoding(kind: &PositionEncodingKind) -> Option<PositionEncoding> {
    PositionEncoding::ALL.into_iter().find(|encoding| encoding.as_str() == kind.as_str())
}

pub fn position_encoding_kind(encoding: PositionEncoding) -> PositionEncodingKind {
    match encoding {
        PositionEncoding::Utf8 => PositionEncodingKind::UTF8,
        PositionEncoding::Utf16 => PositionEncodingKind::UTF16,
        PositionEncoding::Utf32 => PositionEncodingKind::UTF32,
    }
}

impl From<SemanticTokens> for lsp_types::SemanticTokens {
    fn from(tokens: SemanticTokens) -> Self {
        Self {
            result_id: None,
            data: tokens
                .tokens()
                .map(|token| SemanticToken {
                    delta_line: token.delta_line,
                    delta_start: token.delta_start,
                    length: token.length,
                    token_type: token.token_type,
                    token_modifiers_bitset: token.token_modifiers,
                })
                .collect(),
        }
    }
}
