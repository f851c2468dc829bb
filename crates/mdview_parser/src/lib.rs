//! mdview_parser: Renders the mdview token stream.
//!
//! Pulls tokens from a [`Scanner`](mdview_scanner::Scanner) and appends flat
//! HTML-ish tags (or a token dump) to an output buffer in a single pass.

mod error;
mod parser;

pub use error::ParseError;
pub use parser::{render, Parser};

pub use mdview_options::{OutputFormat, RenderOptions, SpaceStyle};
