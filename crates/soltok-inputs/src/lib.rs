mod position;

pub use line_index::LineIndex;
pub use position::{LineSpan, PositionEncoding, resolve};

#[salsa::input(debug)]
pub struct File {
    #[returns(ref)]
    pub path: camino::Utf8PathBuf,
    #[returns(deref)]
    pub text: String,
}

#[salsa::tracked]
impl File {
    #[salsa::tracked(returns(ref), no_eq)]
    pub fn line_index(self, db: &dyn salsa::Database) -> LineIndex {
        LineIndex::new(self.text(db))
    }
}

impl File {
    /// Resolves `range` against this file's text.
    pub fn resolve(
        self,
        db: &dyn salsa::Database,
        range: text_size::TextRange,
        encoding: PositionEncoding,
    ) -> Option<LineSpan> {
        resolve(self.text(db), self.line_index(db), range, encoding)
    }
}
