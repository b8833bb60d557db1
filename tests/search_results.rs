//! Inline result construction and the LIKE-pattern escaping used for
//! catalog matching.
use cinevault_bot::database::catalog::contains_pattern;
use cinevault_bot::database::models::CatalogEntry;
use cinevault_bot::services::search::{build_inline_results, SearchOutcome};
use teloxide::types::{InlineQueryResult, InputMessageContent};

fn entry(title: &str) -> CatalogEntry {
    CatalogEntry {
        title: title.to_string(),
        file_ref: format!("file-{title}"),
    }
}

fn article_title(result: &InlineQueryResult) -> &str {
    match result {
        InlineQueryResult::Article(a) => &a.title,
        other => panic!("expected an article result, got {other:?}"),
    }
}

fn article_text(result: &InlineQueryResult) -> &str {
    match result {
        InlineQueryResult::Article(a) => match &a.input_message_content {
            InputMessageContent::Text(t) => &t.message_text,
            other => panic!("expected text content, got {other:?}"),
        },
        other => panic!("expected an article result, got {other:?}"),
    }
}

#[test]
fn contains_pattern_wraps_and_escapes() {
    assert_eq!(contains_pattern("dune"), "%dune%");
    assert_eq!(contains_pattern("100%"), "%100\\%%");
    assert_eq!(contains_pattern("a_b"), "%a\\_b%");
    assert_eq!(contains_pattern("back\\slash"), "%back\\\\slash%");
    assert_eq!(contains_pattern(""), "%%");
}

#[test]
fn matches_render_one_article_per_entry_in_order() {
    let outcome = SearchOutcome {
        matches: vec![entry("Dune 2024"), entry("Dune 1984")],
        matched: true,
    };
    let results = build_inline_results(&outcome);
    assert_eq!(results.len(), 2);
    assert_eq!(article_title(&results[0]), "Dune 2024");
    assert_eq!(article_title(&results[1]), "Dune 1984");
    assert_eq!(article_text(&results[0]), "🎬 Dune 2024");
}

#[test]
fn no_match_renders_single_synthetic_article() {
    let outcome = SearchOutcome {
        matches: vec![],
        matched: false,
    };
    let results = build_inline_results(&outcome);
    assert_eq!(results.len(), 1);
    assert_eq!(article_title(&results[0]), "No match found");
    assert!(article_text(&results[0]).contains("admin has been notified"));
}
