//! Per-line inline state held by the scanner.

use mdview_syntax::{Emphasis, EmphasisMarker};

/// Progress through a `[text](url)` link on the current line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LinkPhase {
    #[default]
    None,
    /// After `[`, before `]`.
    Text,
    /// After `]`, expecting `(`.
    Between,
    /// After `(`, before `)`.
    Url,
}

/// Which inline regions are open on the current line.
///
/// Every field is cleared when the scanner passes a line terminator, so no
/// region ever spans two lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InlineState {
    pub code: bool,
    pub asterisk: Option<Emphasis>,
    pub underscore: Option<Emphasis>,
    pub link: LinkPhase,
}

impl InlineState {
    #[inline]
    pub fn emphasis(&self, marker: EmphasisMarker) -> Option<Emphasis> {
        match marker {
            EmphasisMarker::Asterisk => self.asterisk,
            EmphasisMarker::UnderScore => self.underscore,
        }
    }

    #[inline]
    pub fn set_emphasis(&mut self, marker: EmphasisMarker, level: Option<Emphasis>) {
        match marker {
            EmphasisMarker::Asterisk => self.asterisk = level,
            EmphasisMarker::UnderScore => self.underscore = level,
        }
    }

    /// Whether nothing is open.
    pub fn is_clear(&self) -> bool {
        *self == InlineState::default()
    }

    pub fn reset(&mut self) {
        *self = InlineState::default();
    }
}
