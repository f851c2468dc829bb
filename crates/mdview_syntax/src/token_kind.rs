//! TokenKind enum - every token the scanner can emit.

use serde::{Serialize, Serializer};

/// The kind of a scanned token.
///
/// Marker kinds that come in levels (headings, tabs, citations, emphasis) are
/// laid out contiguously so that level lookups are simple offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
#[non_exhaustive]
pub enum TokenKind {
    // ========================================================================
    // Text and layout
    // ========================================================================
    String = 0,
    End = 1,
    LineFeed = 2,
    Space = 3,

    // ========================================================================
    // Block markers
    // ========================================================================
    Hyphen = 4,
    Heading1 = 5,
    Heading2 = 6,
    Heading3 = 7,
    Heading4 = 8,
    Heading5 = 9,
    Heading6 = 10,
    Tab1 = 11,
    Tab2 = 12,
    Tab3 = 13,
    Citation1 = 14,
    Citation2 = 15,
    Horizon = 16,

    // ========================================================================
    // Inline areas
    // ========================================================================
    BackQuoteBegin = 17,
    BackQuoteFinish = 18,

    AsteriskItalicBegin = 19,
    AsteriskBoldBegin = 20,
    AsteriskItalicBoldBegin = 21,
    AsteriskItalicFinish = 22,
    AsteriskBoldFinish = 23,
    AsteriskItalicBoldFinish = 24,

    UnderScoreItalicBegin = 25,
    UnderScoreBoldBegin = 26,
    UnderScoreItalicBoldBegin = 27,
    UnderScoreItalicFinish = 28,
    UnderScoreBoldFinish = 29,
    UnderScoreItalicBoldFinish = 30,

    // ========================================================================
    // Links
    // ========================================================================
    LinkTextBegin = 31,
    LinkTextFinish = 32,
    LinkBegin = 33,
    LinkFinish = 34,
}

/// Emphasis level selected by the length of a `*` or `_` run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Emphasis {
    Italic,
    Bold,
    ItalicBold,
}

impl Emphasis {
    /// Map a marker run length to an emphasis level.
    pub fn from_run(len: usize) -> Option<Self> {
        match len {
            1 => Some(Emphasis::Italic),
            2 => Some(Emphasis::Bold),
            3 => Some(Emphasis::ItalicBold),
            _ => None,
        }
    }

    /// The run length that opens and closes this level.
    #[inline]
    pub fn run_len(self) -> usize {
        match self {
            Emphasis::Italic => 1,
            Emphasis::Bold => 2,
            Emphasis::ItalicBold => 3,
        }
    }
}

/// The two characters that delimit emphasis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmphasisMarker {
    Asterisk,
    UnderScore,
}

impl EmphasisMarker {
    #[inline]
    pub fn byte(self) -> u8 {
        match self {
            EmphasisMarker::Asterisk => b'*',
            EmphasisMarker::UnderScore => b'_',
        }
    }

    fn first_begin(self) -> TokenKind {
        match self {
            EmphasisMarker::Asterisk => TokenKind::AsteriskItalicBegin,
            EmphasisMarker::UnderScore => TokenKind::UnderScoreItalicBegin,
        }
    }
}

const ALL: [TokenKind; 35] = [
    TokenKind::String,
    TokenKind::End,
    TokenKind::LineFeed,
    TokenKind::Space,
    TokenKind::Hyphen,
    TokenKind::Heading1,
    TokenKind::Heading2,
    TokenKind::Heading3,
    TokenKind::Heading4,
    TokenKind::Heading5,
    TokenKind::Heading6,
    TokenKind::Tab1,
    TokenKind::Tab2,
    TokenKind::Tab3,
    TokenKind::Citation1,
    TokenKind::Citation2,
    TokenKind::Horizon,
    TokenKind::BackQuoteBegin,
    TokenKind::BackQuoteFinish,
    TokenKind::AsteriskItalicBegin,
    TokenKind::AsteriskBoldBegin,
    TokenKind::AsteriskItalicBoldBegin,
    TokenKind::AsteriskItalicFinish,
    TokenKind::AsteriskBoldFinish,
    TokenKind::AsteriskItalicBoldFinish,
    TokenKind::UnderScoreItalicBegin,
    TokenKind::UnderScoreBoldBegin,
    TokenKind::UnderScoreItalicBoldBegin,
    TokenKind::UnderScoreItalicFinish,
    TokenKind::UnderScoreBoldFinish,
    TokenKind::UnderScoreItalicBoldFinish,
    TokenKind::LinkTextBegin,
    TokenKind::LinkTextFinish,
    TokenKind::LinkBegin,
    TokenKind::LinkFinish,
];

impl TokenKind {
    pub const MAX_HEADING_LEVEL: usize = 6;
    pub const MAX_TAB_WIDTH: usize = 3;
    pub const MAX_CITATION_LEVEL: usize = 2;

    #[inline]
    fn from_u8(v: u8) -> Self {
        ALL[v as usize]
    }

    /// Heading kind for a `#` run of `level` characters.
    pub fn heading(level: usize) -> Option<Self> {
        if (1..=Self::MAX_HEADING_LEVEL).contains(&level) {
            Some(Self::from_u8(TokenKind::Heading1 as u8 + level as u8 - 1))
        } else {
            None
        }
    }

    /// Indentation kind for a run of `width` tabs.
    pub fn tab(width: usize) -> Option<Self> {
        if (1..=Self::MAX_TAB_WIDTH).contains(&width) {
            Some(Self::from_u8(TokenKind::Tab1 as u8 + width as u8 - 1))
        } else {
            None
        }
    }

    /// Citation kind for a `>` run of `level` characters.
    pub fn citation(level: usize) -> Option<Self> {
        if (1..=Self::MAX_CITATION_LEVEL).contains(&level) {
            Some(Self::from_u8(TokenKind::Citation1 as u8 + level as u8 - 1))
        } else {
            None
        }
    }

    /// Kind that opens an emphasis region.
    pub fn emphasis_begin(marker: EmphasisMarker, level: Emphasis) -> Self {
        Self::from_u8(marker.first_begin() as u8 + level.run_len() as u8 - 1)
    }

    /// Kind that closes an emphasis region.
    pub fn emphasis_finish(marker: EmphasisMarker, level: Emphasis) -> Self {
        Self::from_u8(marker.first_begin() as u8 + level.run_len() as u8 + 2)
    }

    /// Heading level (1-6) if this is a heading kind.
    pub fn heading_level(self) -> Option<u8> {
        let v = self as u8;
        if v >= TokenKind::Heading1 as u8 && v <= TokenKind::Heading6 as u8 {
            Some(v - TokenKind::Heading1 as u8 + 1)
        } else {
            None
        }
    }

    /// Number of tabs if this is an indentation kind.
    pub fn tab_width(self) -> Option<u8> {
        let v = self as u8;
        if v >= TokenKind::Tab1 as u8 && v <= TokenKind::Tab3 as u8 {
            Some(v - TokenKind::Tab1 as u8 + 1)
        } else {
            None
        }
    }

    /// Citation level (1-2) if this is a citation kind.
    pub fn citation_level(self) -> Option<u8> {
        let v = self as u8;
        if v >= TokenKind::Citation1 as u8 && v <= TokenKind::Citation2 as u8 {
            Some(v - TokenKind::Citation1 as u8 + 1)
        } else {
            None
        }
    }

    /// Emphasis level and whether the kind opens (`true`) or closes the region.
    pub fn emphasis(self) -> Option<(Emphasis, bool)> {
        let v = self as u8;
        let offset = if v >= TokenKind::AsteriskItalicBegin as u8
            && v <= TokenKind::AsteriskItalicBoldFinish as u8
        {
            v - TokenKind::AsteriskItalicBegin as u8
        } else if v >= TokenKind::UnderScoreItalicBegin as u8
            && v <= TokenKind::UnderScoreItalicBoldFinish as u8
        {
            v - TokenKind::UnderScoreItalicBegin as u8
        } else {
            return None;
        };
        let level = Emphasis::from_run(offset as usize % 3 + 1)?;
        Some((level, offset < 3))
    }

    /// Whether this kind carries text that a consumer copies verbatim.
    #[inline]
    pub fn is_literal_text(self) -> bool {
        matches!(
            self,
            TokenKind::String | TokenKind::LinkBegin | TokenKind::LinkFinish
        )
    }

    /// The upper-snake-case name used in token dumps and JSON.
    pub fn name(self) -> &'static str {
        match self {
            TokenKind::String => "STRING",
            TokenKind::End => "END",
            TokenKind::LineFeed => "LINE_FEED",
            TokenKind::Space => "SPACE",
            TokenKind::Hyphen => "HYPHEN",
            TokenKind::Heading1 => "HEADING1",
            TokenKind::Heading2 => "HEADING2",
            TokenKind::Heading3 => "HEADING3",
            TokenKind::Heading4 => "HEADING4",
            TokenKind::Heading5 => "HEADING5",
            TokenKind::Heading6 => "HEADING6",
            TokenKind::Tab1 => "TAB1",
            TokenKind::Tab2 => "TAB2",
            TokenKind::Tab3 => "TAB3",
            TokenKind::Citation1 => "CITATION1",
            TokenKind::Citation2 => "CITATION2",
            TokenKind::Horizon => "HORIZON",
            TokenKind::BackQuoteBegin => "BACK_QUOTE_BEGIN",
            TokenKind::BackQuoteFinish => "BACK_QUOTE_FINISH",
            TokenKind::AsteriskItalicBegin => "ASTERISK_ITALIC_BEGIN",
            TokenKind::AsteriskBoldBegin => "ASTERISK_BOLD_BEGIN",
            TokenKind::AsteriskItalicBoldBegin => "ASTERISK_ITALIC_BOLD_BEGIN",
            TokenKind::AsteriskItalicFinish => "ASTERISK_ITALIC_FINISH",
            TokenKind::AsteriskBoldFinish => "ASTERISK_BOLD_FINISH",
            TokenKind::AsteriskItalicBoldFinish => "ASTERISK_ITALIC_BOLD_FINISH",
            TokenKind::UnderScoreItalicBegin => "UNDER_SCORE_ITALIC_BEGIN",
            TokenKind::UnderScoreBoldBegin => "UNDER_SCORE_BOLD_BEGIN",
            TokenKind::UnderScoreItalicBoldBegin => "UNDER_SCORE_ITALIC_BOLD_BEGIN",
            TokenKind::UnderScoreItalicFinish => "UNDER_SCORE_ITALIC_FINISH",
            TokenKind::UnderScoreBoldFinish => "UNDER_SCORE_BOLD_FINISH",
            TokenKind::UnderScoreItalicBoldFinish => "UNDER_SCORE_ITALIC_BOLD_FINISH",
            TokenKind::LinkTextBegin => "LINK_TEXT_BEGIN",
            TokenKind::LinkTextFinish => "LINK_TEXT_FINISH",
            TokenKind::LinkBegin => "LINK_BEGIN",
            TokenKind::LinkFinish => "LINK_FINISH",
        }
    }
}

impl std::fmt::Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for TokenKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn discriminants_match_lookup_table() {
        for (i, kind) in ALL.iter().enumerate() {
            assert_eq!(*kind as usize, i, "{} is out of order", kind);
        }
    }

    #[rstest]
    #[case(1, TokenKind::Heading1)]
    #[case(2, TokenKind::Heading2)]
    #[case(3, TokenKind::Heading3)]
    #[case(4, TokenKind::Heading4)]
    #[case(5, TokenKind::Heading5)]
    #[case(6, TokenKind::Heading6)]
    fn heading_levels(#[case] level: usize, #[case] kind: TokenKind) {
        assert_eq!(TokenKind::heading(level), Some(kind));
        assert_eq!(kind.heading_level(), Some(level as u8));
    }

    #[rstest]
    #[case(0)]
    #[case(7)]
    #[case(12)]
    fn heading_out_of_range(#[case] level: usize) {
        assert_eq!(TokenKind::heading(level), None);
    }

    #[test]
    fn tab_and_citation_bounds() {
        assert_eq!(TokenKind::tab(2), Some(TokenKind::Tab2));
        assert_eq!(TokenKind::tab(4), None);
        assert_eq!(TokenKind::Tab3.tab_width(), Some(3));
        assert_eq!(TokenKind::citation(2), Some(TokenKind::Citation2));
        assert_eq!(TokenKind::citation(3), None);
        assert_eq!(TokenKind::Citation1.citation_level(), Some(1));
        assert_eq!(TokenKind::String.citation_level(), None);
    }

    #[rstest]
    #[case(EmphasisMarker::Asterisk, Emphasis::Italic, TokenKind::AsteriskItalicBegin, TokenKind::AsteriskItalicFinish)]
    #[case(EmphasisMarker::Asterisk, Emphasis::Bold, TokenKind::AsteriskBoldBegin, TokenKind::AsteriskBoldFinish)]
    #[case(EmphasisMarker::Asterisk, Emphasis::ItalicBold, TokenKind::AsteriskItalicBoldBegin, TokenKind::AsteriskItalicBoldFinish)]
    #[case(EmphasisMarker::UnderScore, Emphasis::Italic, TokenKind::UnderScoreItalicBegin, TokenKind::UnderScoreItalicFinish)]
    #[case(EmphasisMarker::UnderScore, Emphasis::Bold, TokenKind::UnderScoreBoldBegin, TokenKind::UnderScoreBoldFinish)]
    #[case(EmphasisMarker::UnderScore, Emphasis::ItalicBold, TokenKind::UnderScoreItalicBoldBegin, TokenKind::UnderScoreItalicBoldFinish)]
    fn emphasis_pairs(
        #[case] marker: EmphasisMarker,
        #[case] level: Emphasis,
        #[case] begin: TokenKind,
        #[case] finish: TokenKind,
    ) {
        assert_eq!(TokenKind::emphasis_begin(marker, level), begin);
        assert_eq!(TokenKind::emphasis_finish(marker, level), finish);
        assert_eq!(begin.emphasis(), Some((level, true)));
        assert_eq!(finish.emphasis(), Some((level, false)));
    }

    #[test]
    fn serializes_as_name() {
        let json = serde_json::to_string(&TokenKind::UnderScoreBoldBegin).unwrap();
        assert_eq!(json, "\"UNDER_SCORE_BOLD_BEGIN\"");
    }
}
