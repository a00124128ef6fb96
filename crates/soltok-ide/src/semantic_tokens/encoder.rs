use std::fmt;

use super::legend::{TokenKind, TokenModifiers};

/// Zero-based line and start column of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TokenPosition {
    pub line: u32,
    pub start: u32,
}

impl fmt::Display for TokenPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.start)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("token at {next} submitted after token at {previous}")]
pub struct OutOfOrder {
    pub previous: TokenPosition,
    pub next: TokenPosition,
}

/// One relative 5-tuple of the wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodedToken {
    pub delta_line: u32,
    pub delta_start: u32,
    pub length: u32,
    pub token_type: u32,
    pub token_modifiers: u32,
}

/// A token with its absolute position restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedToken {
    pub line: u32,
    pub start: u32,
    pub length: u32,
    pub kind: TokenKind,
    pub modifiers: TokenModifiers,
}

impl DecodedToken {
    pub fn position(&self) -> TokenPosition {
        TokenPosition { line: self.line, start: self.start }
    }
}

impl fmt::Display for DecodedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{} +{} {}", self.line, self.start, self.length, self.kind)?;
        if !self.modifiers.is_empty() {
            write!(f, " [{}]", self.modifiers)?;
        }
        Ok(())
    }
}

/// The full-document token payload: groups of five integers
/// `[deltaLine, deltaStart, length, tokenType, tokenModifiers]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SemanticTokens {
    data: Vec<u32>,
}

impl SemanticTokens {
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    pub fn into_data(self) -> Vec<u32> {
        self.data
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.data.len() / 5
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn tokens(&self) -> impl Iterator<Item = EncodedToken> + '_ {
        self.data.chunks_exact(5).map(|chunk| EncodedToken {
            delta_line: chunk[0],
            delta_start: chunk[1],
            length: chunk[2],
            token_type: chunk[3],
            token_modifiers: chunk[4],
        })
    }

    /// Restores absolute positions by replaying the delta rule.
    pub fn decode(&self) -> Vec<DecodedToken> {
        let mut line = 0;
        let mut start = 0;
        self.tokens()
            .filter_map(|token| {
                if token.delta_line == 0 {
                    start += token.delta_start;
                } else {
                    line += token.delta_line;
                    start = token.delta_start;
                }
                Some(DecodedToken {
                    line,
                    start,
                    length: token.length,
                    kind: TokenKind::from_index(token.token_type)?,
                    modifiers: TokenModifiers::from_bits_truncate(token.token_modifiers),
                })
            })
            .collect()
    }
}

/// Folds absolute token positions into the relative wire encoding.
///
/// Tokens must arrive in non-decreasing `(line, start)` order.
#[derive(Debug, Default)]
pub struct DeltaEncoder {
    last_line: u32,
    last_start: u32,
    data: Vec<u32>,
}

impl DeltaEncoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.last_line = 0;
        self.last_start = 0;
        self.data.clear();
    }

    pub fn encode(
        &mut self,
        line: u32,
        start: u32,
        length: u32,
        kind: TokenKind,
        modifiers: TokenModifiers,
    ) -> Result<(), OutOfOrder> {
        let previous = TokenPosition { line: self.last_line, start: self.last_start };
        let next = TokenPosition { line, start };
        if next < previous {
            return Err(OutOfOrder { previous, next });
        }

        let delta_line = line - self.last_line;
        let delta_start = if delta_line == 0 { start - self.last_start } else { start };
        self.data.extend([delta_line, delta_start, length, kind.index(), modifiers.bits()]);

        self.last_line = line;
        self.last_start = start;
        Ok(())
    }

    /// Takes the encoded tokens and resets the encoder.
    pub fn finish(&mut self) -> SemanticTokens {
        let data = std::mem::take(&mut self.data);
        self.reset();
        SemanticTokens { data }
    }
}
