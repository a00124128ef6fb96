use std::fmt;

/// Lexical category of a token. The discriminant is the wire index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    Class,
    Comment,
    Enum,
    EnumMember,
    Event,
    Function,
    Interface,
    Keyword,
    Macro,
    Method,
    Modifier,
    Number,
    Operator,
    Parameter,
    Property,
    String,
    Struct,
    Type,
    TypeParameter,
    Variable,
}

impl TokenKind {
    /// Every kind in legend order.
    pub const ALL: [Self; 20] = [
        Self::Class,
        Self::Comment,
        Self::Enum,
        Self::EnumMember,
        Self::Event,
        Self::Function,
        Self::Interface,
        Self::Keyword,
        Self::Macro,
        Self::Method,
        Self::Modifier,
        Self::Number,
        Self::Operator,
        Self::Parameter,
        Self::Property,
        Self::String,
        Self::Struct,
        Self::Type,
        Self::TypeParameter,
        Self::Variable,
    ];

    pub const fn index(self) -> u32 {
        self as u32
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// The standard LSP token type name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Comment => "comment",
            Self::Enum => "enum",
            Self::EnumMember => "enumMember",
            Self::Event => "event",
            Self::Function => "function",
            Self::Interface => "interface",
            Self::Keyword => "keyword",
            Self::Macro => "macro",
            Self::Method => "method",
            Self::Modifier => "modifier",
            Self::Number => "number",
            Self::Operator => "operator",
            Self::Parameter => "parameter",
            Self::Property => "property",
            Self::String => "string",
            Self::Struct => "struct",
            Self::Type => "type",
            Self::TypeParameter => "typeParameter",
            Self::Variable => "variable",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

bitflags::bitflags! {
    /// Modifier set of a token. Bit `i` is the `i`-th name of
    /// [`TokenModifiers::NAMES`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TokenModifiers: u32 {
        const ABSTRACT      = 1 << 0;
        const DECLARATION   = 1 << 1;
        const DEFINITION    = 1 << 2;
        const DEPRECATED    = 1 << 3;
        const DOCUMENTATION = 1 << 4;
        /// The token is written to.
        const MODIFICATION  = 1 << 5;
        const READONLY      = 1 << 6;
    }
}

impl TokenModifiers {
    /// Standard LSP modifier names in bit order.
    pub const NAMES: [&'static str; 7] = [
        "abstract",
        "declaration",
        "definition",
        "deprecated",
        "documentation",
        "modification",
        "readonly",
    ];

    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMES
            .into_iter()
            .enumerate()
            .filter(move |&(bit, _)| self.bits() & (1 << bit) != 0)
            .map(|(_, name)| name)
    }
}

impl fmt::Display for TokenModifiers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, name) in self.names().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            f.write_str(name)?;
        }
        Ok(())
    }
}
