const MAX_VISIBLE_LENGTH: usize = 200;

/// Shortens upstream payloads and masks credentials before they reach the logs.
pub fn sanitize_for_log(text: &str) -> String {
    let trimmed = text.trim();

    if trimmed.is_empty() {
        return String::from("[EMPTY]");
    }

    let sanitized = match trimmed.char_indices().nth(MAX_VISIBLE_LENGTH) {
        Some((cut, _)) => format!(
            "{}... ({} chars total)",
            &trimmed[..cut],
            trimmed.chars().count()
        ),
        None => trimmed.to_string(),
    };

    redact_sensitive_patterns(&sanitized)
}

fn redact_sensitive_patterns(text: &str) -> String {
    let patterns = [
        ("Bearer ", "Bearer [REDACTED]"),
        ("access_token=", "access_token=[REDACTED]"),
        ("\"access_token\":\"", "\"access_token\":\"[REDACTED]"),
        ("key=", "key=[REDACTED]"),
    ];

    let mut result = text.to_string();
    for (pattern, replacement) in patterns {
        let mut from = 0;
        while let Some(found) = result[from..].find(pattern) {
            let idx = from + found;
            let value_start = idx + pattern.len();
            let end = result[value_start..]
                .find(|c: char| c.is_whitespace() || c == '&' || c == '"' || c == '\'')
                .map(|i| value_start + i)
                .unwrap_or(result.len());
            result.replace_range(idx..end, replacement);
            from = idx + replacement.len();
        }
    }

    result
}
