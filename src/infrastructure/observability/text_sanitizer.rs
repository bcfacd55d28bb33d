const MAX_VISIBLE_CHARS: usize = 80;

/// Shortens user text for log lines and masks anything that looks like a secret.
///
/// Truncation counts characters, not bytes, so non-Latin scripts never split.
pub fn sanitize_for_log(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let total = trimmed.chars().count();
    let visible = if total > MAX_VISIBLE_CHARS {
        let head: String = trimmed.chars().take(MAX_VISIBLE_CHARS).collect();
        format!("{}... ({} chars total)", head, total)
    } else {
        trimmed.to_string()
    };

    redact_secrets(&visible)
}

fn redact_secrets(text: &str) -> String {
    const MARKERS: [&str; 3] = ["Bearer ", "key=", "token="];

    let mut result = text.to_string();
    for marker in MARKERS {
        let Some(idx) = result.find(marker) else {
            continue;
        };
        let start = idx + marker.len();
        let end = result[start..]
            .find(|c: char| c.is_whitespace() || c == '&' || c == ',')
            .map(|i| start + i)
            .unwrap_or(result.len());
        result.replace_range(start..end, "[REDACTED]");
    }

    result
}
