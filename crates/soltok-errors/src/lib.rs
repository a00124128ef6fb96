use std::fmt::Display;

pub use annotate_snippets::Renderer;
use annotate_snippets::{Level, Snippet};
pub use text_size::TextRange;

/// An error anchored to a range of a source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    message: String,
    range: TextRange,
    label: Option<String>,
}

impl Diagnostic {
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn error(message: impl Into<String>, range: TextRange) -> Self {
        Self { message: message.into(), range, label: None }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn render<'a>(
        &'a self,
        renderer: &'a Renderer,
        path: &'a str,
        text: &'a str,
    ) -> impl Display + 'a {
        let label = self.label.as_deref().unwrap_or("here");
        let message = Level::Error.title(&self.message).snippet(
            Snippet::source(text)
                .origin(path)
                .annotation(Level::Error.span(self.clamped_range(text)).label(label))
                .fold(true),
        );
        renderer.render(message)
    }

    /// The range as a byte span that is safe to slice `text` with.
    fn clamped_range(&self, text: &str) -> std::ops::Range<usize> {
        let end = usize::from(self.range.end()).min(text.len());
        let start = usize::from(self.range.start()).min(end);
        start..end
    }
}
