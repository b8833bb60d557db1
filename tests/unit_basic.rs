use cinevault_bot::model::AdminPolicy;
use cinevault_bot::util::display_name;
use teloxide::types::{ChatId, User, UserId};

fn user(id: u64, first_name: &str, username: Option<&str>) -> User {
    User {
        id: UserId(id),
        is_bot: false,
        first_name: first_name.to_string(),
        last_name: None,
        username: username.map(str::to_string),
        language_code: None,
        is_premium: false,
        added_to_attachment_menu: false,
    }
}

#[test]
fn test_admin_policy_matches_only_configured_id() {
    let policy = AdminPolicy::new(UserId(42));
    assert!(policy.is_authorized(UserId(42)));
    assert!(!policy.is_authorized(UserId(43)));
    assert_eq!(policy.chat_id(), ChatId(42));
}

#[test]
fn test_display_name_prefers_username() {
    assert_eq!(display_name(&user(1, "Ada", Some("ada_l"))), "ada_l");
    assert_eq!(display_name(&user(2, "Grace", None)), "Grace");
}
