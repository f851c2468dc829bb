//! Byte constants and byte classes used by the scanner.

pub const LINE_FEED: u8 = b'\n';
pub const CARRIAGE_RETURN: u8 = b'\r';
pub const SPACE: u8 = b' ';
pub const TAB: u8 = b'\t';
pub const HASH: u8 = b'#';
pub const MINUS: u8 = b'-';
pub const GREATER_THAN: u8 = b'>';
pub const BACKTICK: u8 = b'`';
pub const ASTERISK: u8 = b'*';
pub const UNDERSCORE: u8 = b'_';
pub const OPEN_BRACKET: u8 = b'[';
pub const CLOSE_BRACKET: u8 = b']';
pub const OPEN_PAREN: u8 = b'(';
pub const CLOSE_PAREN: u8 = b')';

/// Check if a byte is a line terminator.
#[inline]
pub fn is_line_break(ch: u8) -> bool {
    ch == LINE_FEED || ch == CARRIAGE_RETURN
}

/// Whether a looked-ahead byte ends an inline marker: a space, a line
/// terminator, or the end of input.
#[inline]
pub fn is_space_or_line_end(ch: Option<u8>) -> bool {
    match ch {
        Some(c) => c == SPACE || is_line_break(c),
        None => true,
    }
}

/// Coarse classification of the byte under the cursor. The scanner dispatches
/// on this together with the open state of the code area.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteClass {
    LineBreak,
    Space,
    Tab,
    Hash,
    Minus,
    GreaterThan,
    Backtick,
    Asterisk,
    Underscore,
    OpenBracket,
    CloseBracket,
    OpenParen,
    CloseParen,
    Other,
}

impl ByteClass {
    #[inline]
    pub fn of(ch: u8) -> Self {
        match ch {
            LINE_FEED | CARRIAGE_RETURN => ByteClass::LineBreak,
            SPACE => ByteClass::Space,
            TAB => ByteClass::Tab,
            HASH => ByteClass::Hash,
            MINUS => ByteClass::Minus,
            GREATER_THAN => ByteClass::GreaterThan,
            BACKTICK => ByteClass::Backtick,
            ASTERISK => ByteClass::Asterisk,
            UNDERSCORE => ByteClass::Underscore,
            OPEN_BRACKET => ByteClass::OpenBracket,
            CLOSE_BRACKET => ByteClass::CloseBracket,
            OPEN_PAREN => ByteClass::OpenParen,
            CLOSE_PAREN => ByteClass::CloseParen,
            _ => ByteClass::Other,
        }
    }
}

/// Rewrite `\r\n` and lone `\r` as `\n` and make sure the buffer ends with a
/// line feed.
pub fn normalize_line_breaks(input: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(input.len() + 1);
    let mut rest = input;
    while let Some(i) = memchr::memchr(CARRIAGE_RETURN, rest) {
        out.extend_from_slice(&rest[..i]);
        out.push(LINE_FEED);
        rest = if rest.get(i + 1) == Some(&LINE_FEED) {
            &rest[i + 2..]
        } else {
            &rest[i + 1..]
        };
    }
    out.extend_from_slice(rest);
    if out.last() != Some(&LINE_FEED) {
        out.push(LINE_FEED);
    }
    out
}
