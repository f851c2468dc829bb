//! The token stream renderer.
//!
//! Single pass over the scanner's tokens. The only state carried between
//! tokens is the heading opened on the current line, whose closing tag is
//! written at the next line feed.

use crate::error::ParseError;
use mdview_options::{OutputFormat, RenderOptions, SpaceStyle};
use mdview_scanner::{Scanner, Token};
use mdview_syntax::{Emphasis, TokenKind};

fn emphasis_tag(emphasis: Emphasis) -> &'static str {
    match emphasis {
        Emphasis::Italic => "italic",
        Emphasis::Bold => "bold",
        Emphasis::ItalicBold => "italic_bold",
    }
}

/// The parser renders a token stream into an output buffer.
pub struct Parser {
    scanner: Scanner,
    options: RenderOptions,
    output: Vec<u8>,
    /// Level of the heading awaiting `</h{n}>`.
    pending_heading: Option<u8>,
}

impl Parser {
    /// Create a parser rendering markup with default options.
    pub fn new(scanner: Scanner) -> Self {
        Self::with_options(scanner, RenderOptions::default())
    }

    /// Create a parser with explicit render options.
    pub fn with_options(scanner: Scanner, options: RenderOptions) -> Self {
        Self {
            scanner,
            options,
            output: Vec::new(),
            pending_heading: None,
        }
    }

    /// The options this parser renders with.
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Consume the token stream up to `End` and return the rendered bytes.
    pub fn parse(mut self) -> Result<Vec<u8>, ParseError> {
        let input_len = self.scanner.input().len();
        log::debug!("rendering {} bytes as {:?}", input_len, self.options.format);

        loop {
            let token = self.scanner.next_token();
            if token.is_end() {
                break;
            }
            match self.options.format {
                OutputFormat::Markup => self.write_markup(&token)?,
                OutputFormat::TokenDump => self.write_dump(&token)?,
            }
        }
        self.close_pending();

        log::debug!("rendered {} bytes into {}", input_len, self.output.len());
        Ok(self.output)
    }

    // ========================================================================
    // Markup
    // ========================================================================

    fn write_markup(&mut self, token: &Token) -> Result<(), ParseError> {
        let kind = token.kind;
        if kind.is_literal_text() {
            let literal = literal_of(token)?;
            self.output.extend_from_slice(literal);
        } else if let Some(level) = kind.heading_level() {
            self.open_heading(level);
        } else if let Some(level) = kind.citation_level() {
            self.write_str(&format!("<citation{}>", level));
        } else if let Some(width) = kind.tab_width() {
            self.output
                .extend(std::iter::repeat(b'\t').take(width as usize));
        } else if let Some((emphasis, begin)) = kind.emphasis() {
            let tag = emphasis_tag(emphasis);
            if begin {
                self.write_str(&format!("<{}>", tag));
            } else {
                self.write_str(&format!("</{}>", tag));
            }
        } else {
            match kind {
                TokenKind::LineFeed => {
                    self.close_pending();
                    self.output.push(b'\n');
                }
                TokenKind::Space => match self.options.space {
                    SpaceStyle::Tag => self.write_str("<space>"),
                    SpaceStyle::Literal => self.output.push(b' '),
                },
                TokenKind::Hyphen => self.write_str("<hyphen>"),
                TokenKind::Horizon => self.write_str("<hr>"),
                TokenKind::BackQuoteBegin => self.write_str("<back_quote>"),
                TokenKind::BackQuoteFinish => self.write_str("</back_quote>"),
                TokenKind::LinkTextBegin => self.write_str("<a link=\"\">"),
                TokenKind::LinkTextFinish => self.write_str("</a>"),
                TokenKind::End => {}
                _ => return Err(ParseError::UnsupportedToken { kind }),
            }
        }
        Ok(())
    }

    /// Open a heading; one still pending on this line is closed first.
    fn open_heading(&mut self, level: u8) {
        self.close_pending();
        self.write_str(&format!("<h{}>", level));
        self.pending_heading = Some(level);
    }

    fn close_pending(&mut self) {
        if let Some(level) = self.pending_heading.take() {
            log::trace!("closing h{} at output byte {}", level, self.output.len());
            self.write_str(&format!("</h{}>", level));
        }
    }

    // ========================================================================
    // Token dump
    // ========================================================================

    fn write_dump(&mut self, token: &Token) -> Result<(), ParseError> {
        match token.kind {
            TokenKind::LineFeed => self.output.push(b'\n'),
            TokenKind::String => {
                let literal = literal_of(token)?;
                self.output.extend_from_slice(literal);
            }
            kind => serde_json::to_writer(&mut self.output, &kind)?,
        }
        Ok(())
    }

    #[inline]
    fn write_str(&mut self, text: &str) {
        self.output.extend_from_slice(text.as_bytes());
    }
}

fn literal_of(token: &Token) -> Result<&[u8], ParseError> {
    token
        .literal
        .as_deref()
        .ok_or(ParseError::MissingLiteral { kind: token.kind })
}

/// Scan and render `input` in one call.
pub fn render(input: impl AsRef<[u8]>, options: &RenderOptions) -> Result<Vec<u8>, ParseError> {
    Parser::with_options(Scanner::new(input), *options).parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_literal_is_reported() {
        let token = Token {
            kind: TokenKind::String,
            literal: None,
        };
        let err = literal_of(&token).unwrap_err();
        assert!(matches!(err, ParseError::MissingLiteral { kind: TokenKind::String }));
    }

    #[test]
    fn heading_opened_twice_closes_first() {
        let mut parser = Parser::new(Scanner::new(""));
        parser.open_heading(1);
        parser.open_heading(2);
        parser.close_pending();
        assert_eq!(parser.output, b"<h1></h1><h2></h2>");
    }

    #[test]
    fn citation_leaves_nothing_pending() {
        let mut parser = Parser::new(Scanner::new(""));
        let token = Token::new(TokenKind::Citation1, b"> ".to_vec());
        parser.write_markup(&token).unwrap();
        assert_eq!(parser.pending_heading, None);
        assert_eq!(parser.output, b"<citation1>");
    }
}
