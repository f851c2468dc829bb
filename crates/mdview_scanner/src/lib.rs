//! mdview_scanner: Lexer for the mdview Markdown dialect.
//!
//! Produces a flat token stream from raw bytes in a single forward pass:
//! - Block markers (headings, list hyphens, tabs, citations, horizontal rules)
//! - Inline areas (code spans, `*`/`_` emphasis) that never span lines
//! - `[text](url)` links
//! - `String`/`Space`/`LineFeed` for everything else

mod char_codes;
mod scanner;
mod state;
mod token;

pub use scanner::{tokenize, Scanner};
pub use state::{InlineState, LinkPhase};
pub use token::Token;

pub use mdview_syntax::{Emphasis, EmphasisMarker, TokenKind};
