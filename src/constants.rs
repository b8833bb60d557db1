// Central constants for paging and limits.
pub const FILES_PAGE_SIZE: i64 = 20; // newest titles shown by /files
pub const RECENT_LOGS_LIMIT: i64 = 10; // request rows shown by /logs
pub const INLINE_CACHE_TIME_SECS: u32 = 1; // Telegram-side cache for inline answers
