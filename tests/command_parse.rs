//! Router command-name parsing, including the `name@botname` form used in
//! group chats.
use std::str::FromStr;

use cinevault_bot::handler::Command;

#[test]
fn parses_every_command_name() {
    let cases = [
        ("start", Command::Start),
        ("help", Command::Help),
        ("search", Command::Search),
        ("request", Command::Request),
        ("upload", Command::Upload),
        ("files", Command::Files),
        ("delete", Command::Delete),
        ("broadcast", Command::Broadcast),
        ("reply", Command::Reply),
        ("users", Command::Users),
        ("logs", Command::Logs),
    ];
    for (input, expected) in cases {
        assert_eq!(Command::from_str(input).unwrap(), expected, "{input}");
    }
}

#[test]
fn strips_bot_name_suffix() {
    assert_eq!(
        Command::from_str("files@CineVaultBot").unwrap(),
        Command::Files
    );
    assert_eq!(
        Command::from_str("start@CineVaultBot").unwrap(),
        Command::Start
    );
}

#[test]
fn unknown_names_map_to_unknown() {
    assert_eq!(Command::from_str("frobnicate").unwrap(), Command::Unknown);
    assert_eq!(Command::from_str("").unwrap(), Command::Unknown);
    // Case-sensitive on purpose: Telegram normalizes commands to lowercase.
    assert_eq!(Command::from_str("Start").unwrap(), Command::Unknown);
}
