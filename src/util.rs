//! Misc small utilities shared across modules.

use teloxide::types::User;

/// Human-readable name for admin-facing notifications: the username when
/// set, otherwise the first name (every Telegram account has one).
pub fn display_name(user: &User) -> String {
    user.username
        .clone()
        .unwrap_or_else(|| user.first_name.clone())
}
