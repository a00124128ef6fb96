use std::fmt;

use line_index::{LineCol, LineIndex, WideEncoding};
use serde::{Deserialize, Serialize};
use text_size::{TextRange, TextSize};

/// Code unit in which columns and lengths are reported to the client.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionEncoding {
    #[serde(rename = "utf-8")]
    Utf8,
    #[default]
    #[serde(rename = "utf-16")]
    Utf16,
    #[serde(rename = "utf-32")]
    Utf32,
}

impl PositionEncoding {
    pub const ALL: [Self; 3] = [Self::Utf8, Self::Utf16, Self::Utf32];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Utf16 => "utf-16",
            Self::Utf32 => "utf-32",
        }
    }

    fn wide(self) -> Option<WideEncoding> {
        match self {
            Self::Utf8 => None,
            Self::Utf16 => Some(WideEncoding::Utf16),
            Self::Utf32 => Some(WideEncoding::Utf32),
        }
    }
}

impl fmt::Display for PositionEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A token position on a single line, in [`PositionEncoding`] code units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineSpan {
    pub line: u32,
    pub start: u32,
    pub length: u32,
}

/// Converts a byte range of `text` into a zero-based line, start column and
/// length.
///
/// `line_index` must have been built from `text`. Returns `None` for empty
/// ranges and for ranges that are out of bounds or split a character. A range
/// spanning several lines is cut at the end of its first line.
pub fn resolve(
    text: &str,
    line_index: &LineIndex,
    range: TextRange,
    encoding: PositionEncoding,
) -> Option<LineSpan> {
    let start = usize::from(range.start());
    let end = usize::from(range.end());
    if range.is_empty() || !text.is_char_boundary(start) || !text.is_char_boundary(end) {
        return None;
    }

    let token = text.get(start..end)?;
    let token = token.find(['\r', '\n']).map_or(token, |eol| &token[..eol]);
    if token.is_empty() {
        return None;
    }

    let first = line_index.line_col(range.start());
    let last = LineCol { line: first.line, col: first.col + u32::from(TextSize::of(token)) };
    let (start, end) = match encoding.wide() {
        None => (first.col, last.col),
        Some(wide) => (line_index.to_wide(wide, first)?.col, line_index.to_wide(wide, last)?.col),
    };

    Some(LineSpan { line: first.line, start, length: end - start })
}
