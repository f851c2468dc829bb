//! Tokens produced by the scanner.

use mdview_syntax::TokenKind;
use serde::{Serialize, Serializer};

/// A scanned token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    /// The kind of token.
    pub kind: TokenKind,
    /// The exact bytes consumed for this token. `None` only for `End`.
    #[serde(serialize_with = "serialize_literal")]
    pub literal: Option<Vec<u8>>,
}

impl Token {
    pub fn new(kind: TokenKind, literal: Vec<u8>) -> Self {
        Self {
            kind,
            literal: Some(literal),
        }
    }

    /// The end-of-input token.
    pub fn end() -> Self {
        Self {
            kind: TokenKind::End,
            literal: None,
        }
    }

    /// The literal bytes, or an empty slice when there are none.
    pub fn bytes(&self) -> &[u8] {
        self.literal.as_deref().unwrap_or_default()
    }

    /// The literal as text, replacing invalid UTF-8.
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(self.bytes())
    }

    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::End
    }
}

fn serialize_literal<S: Serializer>(
    literal: &Option<Vec<u8>>,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    match literal {
        Some(bytes) => serializer.serialize_some(&String::from_utf8_lossy(bytes)),
        None => serializer.serialize_none(),
    }
}
