//! Property-based tests for the parser.

use mdview_options::{OutputFormat, RenderOptions, SpaceStyle};
use mdview_parser::render;
use mdview_scanner::Scanner;
use proptest::prelude::*;

fn markdown_strategy() -> impl Strategy<Value = String> {
    "[#*_`>\\-\\[\\]():/ \t\r\nab]{0,96}"
}

fn line_feeds(bytes: &[u8]) -> usize {
    bytes.iter().filter(|&&b| b == b'\n').count()
}

proptest! {
    #[test]
    fn test_markup_never_fails(input in markdown_strategy()) {
        prop_assert!(render(&input, &RenderOptions::default()).is_ok());
    }

    #[test]
    fn test_dump_never_fails(input in markdown_strategy()) {
        prop_assert!(render(&input, &RenderOptions::token_dump()).is_ok());
    }

    #[test]
    fn test_markup_keeps_line_count(input in markdown_strategy()) {
        let normalized = Scanner::new(&input).input().to_vec();
        let output = render(&input, &RenderOptions::default()).unwrap();
        prop_assert_eq!(line_feeds(&output), line_feeds(&normalized));
    }

    #[test]
    fn test_plain_text_passes_through(input in "[a-z \n]{0,64}") {
        let options = RenderOptions {
            format: OutputFormat::Markup,
            space: SpaceStyle::Literal,
        };
        let normalized = Scanner::new(&input).input().to_vec();
        prop_assert_eq!(render(&input, &options).unwrap(), normalized);
    }
}
