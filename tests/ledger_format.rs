//! Formatting of the /files and /logs replies.
use cinevault_bot::commands::files::format_catalog_list;
use cinevault_bot::commands::logs::format_request_logs;
use cinevault_bot::database::models::{CatalogEntry, RequestLogEntry};

fn entry(title: &str) -> CatalogEntry {
    CatalogEntry {
        title: title.to_string(),
        file_ref: format!("file-{title}"),
    }
}

fn log(user_id: i64, username: Option<&str>, query: &str) -> RequestLogEntry {
    RequestLogEntry {
        user_id,
        username: username.map(str::to_string),
        query: query.to_string(),
    }
}

#[test]
fn empty_catalog_renders_no_movies() {
    assert_eq!(format_catalog_list(&[]), "No movies");
}

#[test]
fn catalog_list_is_one_indexed_in_given_order() {
    let entries = [entry("Dune 2024"), entry("Alien"), entry("Dune 2024")];
    assert_eq!(
        format_catalog_list(&entries),
        "1. Dune 2024\n2. Alien\n3. Dune 2024"
    );
}

#[test]
fn empty_log_renders_no_requests() {
    assert_eq!(format_request_logs(&[]), "No requests");
}

#[test]
fn request_logs_render_identity_and_query_per_line() {
    let rows = [
        log(7, Some("ada_l"), "movie night"),
        log(9, None, "something older"),
    ];
    assert_eq!(
        format_request_logs(&rows),
        "ada_l (7): movie night\nunknown (9): something older"
    );
}
