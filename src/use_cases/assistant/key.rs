use std::env;

const PRIMARY_KEY_VAR: &str = "HF_API_KEY";
const ALTERNATE_KEY_VAR: &str = "HUGGING_FACE_API_KEY";

/// First non-blank of: the configured value, then the `HF_API_KEY` and
/// `HUGGING_FACE_API_KEY` environment variables. `None` means the assistant
/// is unconfigured.
pub fn resolve_api_key(configured: &str) -> Option<String> {
    _non_blank(configured.to_string())
        .or_else(|| env::var(PRIMARY_KEY_VAR).ok().and_then(_non_blank))
        .or_else(|| env::var(ALTERNATE_KEY_VAR).ok().and_then(_non_blank))
}

fn _non_blank(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
