//! mdview_syntax: Token kinds for the mdview Markdown dialect.
//!
//! Defines the closed set of token kinds produced by the scanner together with
//! the run-length lookups that map `#`, tab, `>`, `*` and `_` runs to kinds.

pub mod token_kind;

pub use token_kind::{Emphasis, EmphasisMarker, TokenKind};
