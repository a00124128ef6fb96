use camino::Utf8PathBuf;
use salsa::DatabaseImpl;
use soltok_inputs::File;
use soltok_syntax::{Declarations, SourceUnit};

use crate::{BuildError, SemanticTokens, SemanticTokensBuilder, SemanticTokensConfig};

/// Owns the input database and answers token requests against it.
#[derive(Default)]
pub struct Analysis {
    db: DatabaseImpl,
    config: SemanticTokensConfig,
}

impl Analysis {
    pub fn new(config: SemanticTokensConfig) -> Self {
        Self { db: DatabaseImpl::default(), config }
    }

    pub fn db(&self) -> &DatabaseImpl {
        &self.db
    }

    pub fn db_mut(&mut self) -> &mut DatabaseImpl {
        &mut self.db
    }

    pub fn config(&self) -> &SemanticTokensConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: SemanticTokensConfig) {
        self.config = config;
    }

    pub fn add_file(&self, path: Utf8PathBuf, text: String) -> File {
        File::new(&self.db, path, text)
    }

    /// Full-document tokens of `file`, whose resolved tree is `unit`.
    pub fn semantic_tokens(
        &self,
        file: File,
        unit: &SourceUnit,
    ) -> Result<SemanticTokens, BuildError> {
        self.semantic_tokens_with(file, unit, &Declarations::collect(unit))
    }

    /// Like [`Self::semantic_tokens`], resolving references through
    /// `declarations`, e.g. those of a whole compiler run.
    pub fn semantic_tokens_with(
        &self,
        file: File,
        unit: &SourceUnit,
        declarations: &Declarations,
    ) -> Result<SemanticTokens, BuildError> {
        let text = file.text(&self.db);
        let line_index = file.line_index(&self.db);
        SemanticTokensBuilder::new(self.config).build_with(unit, declarations, text, line_index)
    }
}
