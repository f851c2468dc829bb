//! The Markdown scanner.
//!
//! Converts a byte buffer into a flat stream of tokens. Most markers are only
//! structural in context (at line start, after whitespace, or when a matching
//! closer exists later on the same line); everything else degrades to
//! `String` tokens so that every byte ends up in some token.

use crate::char_codes::*;
use crate::state::{InlineState, LinkPhase};
use crate::token::Token;
use mdview_syntax::{Emphasis, EmphasisMarker, TokenKind};
use memchr::memmem;
use once_cell::sync::Lazy;
use regex::bytes::Regex;

/// `[text](scheme://rest)` anchored at the current `[`.
static LINK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\[[^\[\]\n]+\]\([A-Za-z][A-Za-z0-9+.\-]*://[^\s()]+\)").unwrap()
});

/// The scanner converts Markdown text into tokens.
pub struct Scanner {
    /// Normalized input; always ends with `\n`.
    input: Vec<u8>,
    /// Offset of the current byte.
    pos: usize,
    /// Regions open on the current line.
    state: InlineState,
    /// Whether `End` has been produced.
    finished: bool,
}

impl Scanner {
    /// Create a scanner over `input`. Line breaks are normalized to `\n` and a
    /// trailing `\n` is appended when missing.
    pub fn new(input: impl AsRef<[u8]>) -> Self {
        Self {
            input: normalize_line_breaks(input.as_ref()),
            pos: 0,
            state: InlineState::default(),
            finished: false,
        }
    }

    /// The normalized input buffer.
    pub fn input(&self) -> &[u8] {
        &self.input
    }

    /// Offset of the byte under the cursor.
    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// Inline regions currently open.
    #[inline]
    pub fn state(&self) -> InlineState {
        self.state
    }

    /// Whether the end-of-input token has been produced.
    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    // ========================================================================
    // Cursor
    // ========================================================================

    /// The byte under the cursor, `None` past the end.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.input.get(self.pos).copied()
    }

    /// The byte before the cursor, `None` at the start of input.
    #[inline]
    pub fn previous(&self) -> Option<u8> {
        self.pos
            .checked_sub(1)
            .and_then(|p| self.input.get(p).copied())
    }

    /// Move one byte forward. Saturates at the end of input.
    #[inline]
    pub fn advance(&mut self) {
        if self.pos < self.input.len() {
            self.pos += 1;
        }
    }

    #[inline]
    fn advance_by(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    /// The byte `n` positions past the lookahead cursor (`peek(0)` is the byte
    /// right after the current one).
    #[inline]
    pub fn peek(&self, n: usize) -> Option<u8> {
        self.byte_at(n + 1)
    }

    #[inline]
    fn byte_at(&self, offset: usize) -> Option<u8> {
        self.input.get(self.pos + offset).copied()
    }

    /// Length of the run of `ch` starting at the cursor.
    fn run_len(&self, ch: u8) -> usize {
        self.input[self.pos.min(self.input.len())..]
            .iter()
            .take_while(|&&b| b == ch)
            .count()
    }

    /// Span from the lookahead cursor through the next line terminator.
    fn rest_of_line(&self) -> &[u8] {
        let from = (self.pos + 1).min(self.input.len());
        let rest = &self.input[from..];
        let end = memchr::memchr(LINE_FEED, rest).map_or(rest.len(), |i| i + 1);
        &rest[..end]
    }

    /// Whether `pattern` occurs between the lookahead cursor and the end of
    /// the line, terminator included.
    pub fn line_has(&self, pattern: &[u8]) -> bool {
        memmem::find(self.rest_of_line(), pattern).is_some()
    }

    /// Whether a maximal run of exactly `len` bytes `ch`, followed by a space
    /// or the line end, occurs after the run under the cursor.
    pub fn line_has_closing_run(&self, ch: u8, len: usize) -> bool {
        let line = self.rest_of_line();
        let mut i = 0;
        while i < line.len() {
            // A run starts where the preceding byte differs; the byte before
            // `line[0]` is the one under the cursor.
            let prev = if i == 0 { self.current() } else { Some(line[i - 1]) };
            if line[i] == ch && prev != Some(ch) {
                let run = line[i..].iter().take_while(|&&b| b == ch).count();
                if run == len && is_space_or_line_end(line.get(i + run).copied()) {
                    return true;
                }
                i += run;
            } else {
                i += 1;
            }
        }
        false
    }

    #[inline]
    fn at_line_start(&self) -> bool {
        matches!(self.previous(), None | Some(LINE_FEED))
    }

    /// Line start, or directly after the line's indentation tabs.
    fn at_block_start(&self) -> bool {
        let before = &self.input[..self.pos.min(self.input.len())];
        let indent = before.iter().rev().take_while(|&&b| b == TAB).count();
        matches!(before[..before.len() - indent].last(), None | Some(&LINE_FEED))
    }

    /// Line start or after a space: where an inline opener may stand.
    #[inline]
    fn after_boundary(&self) -> bool {
        matches!(self.previous(), None | Some(LINE_FEED) | Some(SPACE))
    }

    // ========================================================================
    // Token production
    // ========================================================================

    /// Scan the next token.
    ///
    /// Once `End` has been returned, every further call returns `End` again.
    pub fn next_token(&mut self) -> Token {
        if self.finished {
            return Token::end();
        }
        let start = self.pos;
        let Some(ch) = self.current() else {
            self.finished = true;
            log::trace!("END at byte {}", start);
            return Token::end();
        };

        let kind = match (ByteClass::of(ch), self.state.code) {
            (ByteClass::LineBreak, _) => self.scan_line_break(),
            (ByteClass::Space, _) => {
                self.advance();
                TokenKind::Space
            }
            (ByteClass::Backtick, _) => self.scan_backtick(),
            // Inside a code area everything else is content.
            (_, true) => self.read_string(1),
            (ByteClass::Hash, false) => self.scan_heading(),
            (ByteClass::Minus, false) => self.scan_hyphen(),
            (ByteClass::Tab, false) => self.scan_tab(),
            (ByteClass::GreaterThan, false) => self.scan_citation(),
            (ByteClass::Asterisk, false) => self.scan_emphasis(EmphasisMarker::Asterisk),
            (ByteClass::Underscore, false) => self.scan_emphasis(EmphasisMarker::UnderScore),
            (ByteClass::OpenBracket, false) => self.scan_open_bracket(),
            (ByteClass::CloseBracket, false) => {
                self.scan_link_delimiter(LinkPhase::Text, LinkPhase::Between, TokenKind::LinkTextFinish)
            }
            (ByteClass::OpenParen, false) => {
                self.scan_link_delimiter(LinkPhase::Between, LinkPhase::Url, TokenKind::LinkBegin)
            }
            (ByteClass::CloseParen, false) => {
                self.scan_link_delimiter(LinkPhase::Url, LinkPhase::None, TokenKind::LinkFinish)
            }
            (ByteClass::Other, false) => self.read_string(1),
        };

        let token = Token::new(kind, self.input[start..self.pos].to_vec());
        log::trace!("{} {:?} at byte {}", token.kind, token.text(), start);
        token
    }

    fn scan_line_break(&mut self) -> TokenKind {
        self.advance();
        if !self.state.is_clear() {
            log::debug!("line end at byte {} closes {:?}", self.pos, self.state);
        }
        self.state.reset();
        TokenKind::LineFeed
    }

    fn scan_heading(&mut self) -> TokenKind {
        if !self.at_line_start() {
            return self.literal_with_prefix(1);
        }
        let n = self.run_len(HASH);
        match self.byte_at(n) {
            Some(SPACE) => {
                if let Some(kind) = TokenKind::heading(n) {
                    self.advance_by(n + 1);
                    return kind;
                }
            }
            Some(LINE_FEED) if n == 3 => {
                self.advance_by(n);
                return TokenKind::Horizon;
            }
            _ => {}
        }
        self.literal_with_prefix(n)
    }

    fn scan_hyphen(&mut self) -> TokenKind {
        if !self.at_block_start() {
            return self.literal_with_prefix(1);
        }
        let n = self.run_len(MINUS);
        match (n, self.byte_at(n)) {
            (3, Some(LINE_FEED)) if self.at_line_start() => {
                self.advance_by(n);
                TokenKind::Horizon
            }
            (1, Some(SPACE)) => {
                self.advance_by(2);
                TokenKind::Hyphen
            }
            _ => self.literal_with_prefix(n),
        }
    }

    /// Tab runs of 1-3 are indentation tokens wherever a token starts.
    fn scan_tab(&mut self) -> TokenKind {
        let n = self.run_len(TAB);
        match TokenKind::tab(n) {
            Some(kind) => {
                self.advance_by(n);
                kind
            }
            None => self.literal_with_prefix(n),
        }
    }

    fn scan_citation(&mut self) -> TokenKind {
        if !self.at_line_start() {
            return self.literal_with_prefix(1);
        }
        let n = self.run_len(GREATER_THAN);
        match TokenKind::citation(n) {
            Some(kind) => {
                self.advance_by(n);
                if self.current() == Some(SPACE) {
                    self.advance();
                }
                kind
            }
            None => self.literal_with_prefix(n),
        }
    }

    fn scan_backtick(&mut self) -> TokenKind {
        if self.state.code {
            if is_space_or_line_end(self.peek(0)) {
                self.advance();
                self.state.code = false;
                log::debug!("code area closed at byte {}", self.pos);
                return TokenKind::BackQuoteFinish;
            }
            return self.read_string(1);
        }
        if self.after_boundary() && (self.line_has(b"` ") || self.line_has(b"`\n")) {
            self.advance();
            self.state.code = true;
            log::debug!("code area opened at byte {}", self.pos);
            return TokenKind::BackQuoteBegin;
        }
        self.literal_with_prefix(1)
    }

    fn scan_emphasis(&mut self, marker: EmphasisMarker) -> TokenKind {
        let ch = marker.byte();
        let n = self.run_len(ch);

        if let Some(open) = self.state.emphasis(marker) {
            if self.closes_emphasis(open, n) {
                self.advance_by(n);
                self.state.set_emphasis(marker, None);
                log::debug!("{:?} {:?} closed at byte {}", marker, open, self.pos);
                return TokenKind::emphasis_finish(marker, open);
            }
            return self.literal_with_prefix(n);
        }

        if n == 3 && self.at_line_start() && self.byte_at(n) == Some(LINE_FEED) {
            self.advance_by(n);
            return TokenKind::Horizon;
        }
        if let Some(level) = Emphasis::from_run(n) {
            if self.after_boundary() && self.line_has_closing_run(ch, n) {
                self.advance_by(n);
                self.state.set_emphasis(marker, Some(level));
                log::debug!("{:?} {:?} opened at byte {}", marker, level, self.pos);
                return TokenKind::emphasis_begin(marker, level);
            }
        }
        self.literal_with_prefix(n)
    }

    /// Whether the run of `n` markers under the cursor closes `open`.
    #[inline]
    fn closes_emphasis(&self, open: Emphasis, n: usize) -> bool {
        n == open.run_len() && is_space_or_line_end(self.byte_at(n))
    }

    fn scan_open_bracket(&mut self) -> TokenKind {
        if self.state.link == LinkPhase::None {
            let line_end = self.pos + self.rest_of_line().len() + 1;
            let line = &self.input[self.pos..line_end.min(self.input.len())];
            if LINK_PATTERN.is_match(line) {
                self.advance();
                self.state.link = LinkPhase::Text;
                return TokenKind::LinkTextBegin;
            }
        }
        self.literal_with_prefix(1)
    }

    fn scan_link_delimiter(&mut self, from: LinkPhase, to: LinkPhase, kind: TokenKind) -> TokenKind {
        if self.state.link == from {
            self.advance();
            self.state.link = to;
            return kind;
        }
        self.literal_with_prefix(1)
    }

    // ========================================================================
    // Literal text
    // ========================================================================

    /// Fall back to text for a marker that is not structural here: the
    /// `prefix` marker bytes under the cursor become the start of a `String`
    /// token.
    fn literal_with_prefix(&mut self, prefix: usize) -> TokenKind {
        log::trace!(
            "marker run of {} at byte {} read as text",
            prefix,
            self.pos
        );
        self.read_string(prefix)
    }

    /// Consume `prefix` bytes unconditionally, then read until
    /// [`Self::stops_string`] holds. Marker runs are consumed whole so that a
    /// closer is never recognized in the middle of a longer run.
    fn read_string(&mut self, prefix: usize) -> TokenKind {
        self.advance_by(prefix.max(1));
        while let Some(ch) = self.current() {
            if self.stops_string(ch) {
                break;
            }
            if !self.state.code && (ch == ASTERISK || ch == UNDERSCORE) {
                let n = self.run_len(ch);
                self.advance_by(n);
            } else {
                self.advance();
            }
        }
        TokenKind::String
    }

    /// Whether a string run must end before `ch` at the cursor, given the
    /// regions open on this line.
    fn stops_string(&self, ch: u8) -> bool {
        match ch {
            SPACE | LINE_FEED | CARRIAGE_RETURN => true,
            BACKTICK if self.state.code => is_space_or_line_end(self.peek(0)),
            _ if self.state.code => false,
            TAB => true,
            ASTERISK | UNDERSCORE => {
                let marker = if ch == ASTERISK {
                    EmphasisMarker::Asterisk
                } else {
                    EmphasisMarker::UnderScore
                };
                self.state
                    .emphasis(marker)
                    .map_or(false, |open| self.closes_emphasis(open, self.run_len(ch)))
            }
            CLOSE_BRACKET => self.state.link == LinkPhase::Text,
            CLOSE_PAREN => self.state.link == LinkPhase::Url,
            _ => false,
        }
    }
}

impl Iterator for Scanner {
    type Item = Token;

    /// Yields every token including a single trailing `End`, then `None`.
    fn next(&mut self) -> Option<Token> {
        if self.finished {
            None
        } else {
            Some(self.next_token())
        }
    }
}

impl std::iter::FusedIterator for Scanner {}

/// Scan `input` completely, `End` included.
pub fn tokenize(input: impl AsRef<[u8]>) -> Vec<Token> {
    Scanner::new(input).collect()
}
