//! Ensures the help text and the platform registration table stay in sync
//! with the command router.
use cinevault_bot::commands::help::{all_command_names, bot_commands, render_help};

#[test]
fn help_command_names_unique_and_present() {
    let names = all_command_names();
    // Ensure uniqueness
    let mut sorted = names.clone();
    sorted.sort();
    for w in sorted.windows(2) {
        assert_ne!(w[0], w[1], "Duplicate help command name: {}", w[0]);
    }
    let expected = [
        "start",
        "help",
        "search",
        "request",
        "upload",
        "files",
        "delete",
        "broadcast",
        "reply",
        "users",
        "logs",
    ];
    for e in expected {
        assert!(sorted.contains(&e), "Missing help entry for `{}`", e);
    }
    assert_eq!(names.len(), expected.len());
}

#[test]
fn help_text_lists_every_command_with_admin_section_last() {
    let text = render_help();
    for name in all_command_names() {
        assert!(
            text.contains(&format!("/{name}")),
            "help text missing /{name}"
        );
    }
    let admin_marker = text
        .find("🔒 Admin only:")
        .expect("help text missing admin section");
    // Public commands appear before the marker, admin commands after it.
    assert!(text.find("/request").unwrap() < admin_marker);
    assert!(text.find("/upload").unwrap() > admin_marker);
    assert!(text.find("/broadcast").unwrap() > admin_marker);
}

#[test]
fn registration_table_matches_router_names() {
    let registered = bot_commands();
    let names = all_command_names();
    assert_eq!(registered.len(), names.len());
    for (cmd, name) in registered.iter().zip(names) {
        assert_eq!(cmd.command, name);
        assert!(!cmd.description.is_empty());
    }
}
