//! The catalog-search-and-notify flow behind inline queries.
//!
//! Searching is never silent to the administrator: every invocation sends
//! the admin the searcher's identity and the literal query text, whether or
//! not anything matched. Callers render a distinct "no match" result when
//! `matched` is false; an empty catalog hit is not an error.

use teloxide::types::{
    InlineQueryResult, InlineQueryResultArticle, InputMessageContent, InputMessageContentText,
    User,
};
use uuid::Uuid;

use crate::database;
use crate::database::init::DbPool;
use crate::database::models::CatalogEntry;
use crate::model::AdminPolicy;
use crate::services::notify::{Deliver, Notifier};
use crate::util::display_name;

pub struct SearchOutcome {
    pub matches: Vec<CatalogEntry>,
    pub matched: bool,
}

/// Case-insensitive substring search over catalog titles, in insertion
/// order, plus the unconditional admin alert.
pub async fn search_catalog<D: Deliver>(
    db: &DbPool,
    notifier: &Notifier<D>,
    admin: &AdminPolicy,
    who: &User,
    query: &str,
) -> Result<SearchOutcome, Box<dyn std::error::Error + Send + Sync>> {
    let matches = database::catalog::find_entries(db, query).await?;

    notifier
        .send_to(
            admin.chat_id(),
            &format!("🔍 {} ({}) searched: {}", display_name(who), who.id, query),
        )
        .await?;

    let matched = !matches.is_empty();
    Ok(SearchOutcome { matches, matched })
}

/// Renders a search outcome as inline results: one selectable article per
/// match carrying the title, or a single synthetic "no match" article.
pub fn build_inline_results(outcome: &SearchOutcome) -> Vec<InlineQueryResult> {
    let mut results: Vec<InlineQueryResult> = outcome
        .matches
        .iter()
        .map(|entry| {
            InlineQueryResult::Article(InlineQueryResultArticle::new(
                Uuid::new_v4().to_string(),
                entry.title.clone(),
                InputMessageContent::Text(InputMessageContentText::new(format!(
                    "🎬 {}",
                    entry.title
                ))),
            ))
        })
        .collect();

    if !outcome.matched {
        results.push(InlineQueryResult::Article(InlineQueryResultArticle::new(
            Uuid::new_v4().to_string(),
            "No match found",
            InputMessageContent::Text(InputMessageContentText::new(
                "⚠️ No match. The admin has been notified.",
            )),
        )));
    }

    results
}
