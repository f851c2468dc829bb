use mdview_syntax::TokenKind;
use thiserror::Error;

/// Errors raised while rendering a token stream.
#[derive(Debug, Error)]
pub enum ParseError {
    /// The parser has no rendering rule for this kind.
    #[error("unsupported token {kind}")]
    UnsupportedToken { kind: TokenKind },

    /// A text-carrying token arrived without its literal.
    #[error("{kind} token without a literal")]
    MissingLiteral { kind: TokenKind },

    #[error("failed to encode token dump: {0}")]
    Dump(#[from] serde_json::Error),
}
