use std::time::Duration;

pub const DEFAULT_HOST: &str = "127.0.0.1";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_MAX_BODY_BYTES: u64 = 20 * 1024 * 1024;

pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_MAX_ERROR_BODY_CHARS: usize = 500;

/// Characters of raw model text kept when reporting malformed JSON.
pub const RAW_PREVIEW_CHARS: usize = 200;

pub const CONFIG_DIR_NAME: &str = "doclyzer";
pub const CONFIG_FILE_NAME: &str = "config.toml";

pub const ANALYZE_ROUTE: &str = "analyze";
pub const API_ROUTE_PREFIX: &str = "api";

pub const DOCUMENT_MIME_TYPES: &[(&str, &str)] = &[
    ("pdf", "application/pdf"),
    ("png", "image/png"),
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("webp", "image/webp"),
    ("heic", "image/heic"),
    ("heif", "image/heif"),
    ("gif", "image/gif"),
    ("txt", "text/plain"),
    ("md", "text/markdown"),
    ("html", "text/html"),
    ("csv", "text/csv"),
];

pub const DEFAULT_MIME_TYPE: &str = "application/octet-stream";

pub fn timeout_duration_secs(seconds: u64) -> Duration {
    Duration::from_secs(seconds)
}

/// Media type for a file extension, case-insensitive.
pub fn mime_type_for_extension(extension: &str) -> &'static str {
    DOCUMENT_MIME_TYPES
        .iter()
        .find(|(ext, _)| ext.eq_ignore_ascii_case(extension))
        .map_or(DEFAULT_MIME_TYPE, |(_, mime)| *mime)
}
