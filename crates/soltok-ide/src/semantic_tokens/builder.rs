use soltok_inputs::{LineIndex, LineSpan, PositionEncoding, resolve};
use soltok_syntax::{Declarations, NodeRef, SourceUnit, TextRange};

use super::classify::{Classified, ClassifyOn, Classifier, Context, policy};
use super::encoder::{DeltaEncoder, SemanticTokens};
use super::{BuildError, SemanticTokensConfig};

/// Builds the full-document semantic tokens of a resolved source unit.
///
/// One builder may be reused for several documents, one at a time.
#[derive(Debug, Default)]
pub struct SemanticTokensBuilder {
    config: SemanticTokensConfig,
    encoder: DeltaEncoder,
}

impl SemanticTokensBuilder {
    pub fn new(config: SemanticTokensConfig) -> Self {
        Self { config, encoder: DeltaEncoder::new() }
    }

    pub fn config(&self) -> &SemanticTokensConfig {
        &self.config
    }

    /// `text` must be the exact source `unit` was produced from and
    /// `line_index` must index `text`.
    ///
    /// References resolve against `unit` alone; see [`Self::build_with`] for
    /// units that import declarations from other files.
    pub fn build(
        &mut self,
        unit: &SourceUnit,
        text: &str,
        line_index: &LineIndex,
    ) -> Result<SemanticTokens, BuildError> {
        self.build_with(unit, &Declarations::collect(unit), text, line_index)
    }

    /// Like [`Self::build`], resolving references through `declarations`,
    /// which must at least cover `unit`.
    #[tracing::instrument(level = "debug", skip_all, fields(path = unit.absolute_path.as_deref()))]
    pub fn build_with(
        &mut self,
        unit: &SourceUnit,
        declarations: &Declarations,
        text: &str,
        line_index: &LineIndex,
    ) -> Result<SemanticTokens, BuildError> {
        self.encoder.reset();

        let mut walk = Walk {
            classifier: Classifier::new(declarations),
            text,
            line_index,
            encoding: self.config.position_encoding,
            encoder: &mut self.encoder,
            pending: None,
        };
        let result =
            walk.node(NodeRef::SourceUnit(unit), Context::root()).and_then(|()| walk.flush());

        match result {
            Ok(()) => {
                let tokens = self.encoder.finish();
                tracing::debug!(tokens = tokens.len(), declarations = declarations.len(), "built");
                Ok(tokens)
            }
            Err(error) => {
                self.encoder.reset();
                Err(error)
            }
        }
    }
}

/// A resolved token held back until the next token shows whether it is
/// shadowed by a deeper token at the same offset.
struct Pending {
    token: Classified,
    span: LineSpan,
    depth: u32,
}

struct Walk<'a> {
    classifier: Classifier<'a>,
    text: &'a str,
    line_index: &'a LineIndex,
    encoding: PositionEncoding,
    encoder: &'a mut DeltaEncoder,
    pending: Option<Pending>,
}

impl Walk<'_> {
    fn node<'t>(&mut self, node: NodeRef<'t>, cx: Context<'t>) -> Result<(), BuildError> {
        let policy = policy(node);
        let own = match policy {
            ClassifyOn::Skip => Vec::new(),
            ClassifyOn::Enter | ClassifyOn::Exit => self.classifier.classify(node, cx),
        };

        let mut children: Vec<_> = node
            .children()
            .into_iter()
            .enumerate()
            .map(|(index, child)| (child, cx.child(node, index)))
            .collect();
        children.sort_by_key(|(child, _)| child.range().map(TextRange::start));

        let mut own = own.into_iter().peekable();
        for (child, child_cx) in children {
            if policy == ClassifyOn::Enter {
                if let Some(child_start) = child.range().map(TextRange::start) {
                    while let Some(token) =
                        own.next_if(|token| token.range.start() <= child_start)
                    {
                        self.emit(token, cx.depth)?;
                    }
                }
            }
            self.node(child, child_cx)?;
        }
        for token in own {
            self.emit(token, cx.depth)?;
        }

        Ok(())
    }

    fn emit(&mut self, token: Classified, depth: u32) -> Result<(), BuildError> {
        let Some(span) = resolve(self.text, self.line_index, token.range, self.encoding) else {
            tracing::debug!(
                range = ?token.range,
                kind = %token.kind,
                "dropping token without a position"
            );
            return Ok(());
        };

        if let Some(pending) = &mut self.pending {
            if pending.token.range.start() == token.range.start() {
                if depth > pending.depth {
                    *pending = Pending { token, span, depth };
                }
                return Ok(());
            }
        }

        match self.pending.replace(Pending { token, span, depth }) {
            Some(previous) => self.encode(previous),
            None => Ok(()),
        }
    }

    fn flush(&mut self) -> Result<(), BuildError> {
        match self.pending.take() {
            Some(pending) => self.encode(pending),
            None => Ok(()),
        }
    }

    fn encode(&mut self, Pending { token, span, .. }: Pending) -> Result<(), BuildError> {
        self.encoder
            .encode(span.line, span.start, span.length, token.kind, token.modifiers)
            .map_err(|error| BuildError::OutOfOrder {
                previous: error.previous,
                next: error.next,
                range: token.range,
            })
    }
}
