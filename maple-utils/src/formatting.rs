/// Discord relative timestamp markup (`<t:1700000000:R>`).
pub fn relative_timestamp(unix_secs: u64) -> String {
    format!("<t:{}:R>", unix_secs)
}

/// Discord absolute date-time markup (`<t:1700000000:f>`).
pub fn absolute_timestamp(unix_secs: u64) -> String {
    format!("<t:{}:f>", unix_secs)
}

/// Break `@` sequences so user-provided text cannot ping anyone.
pub fn escape_mentions(text: &str) -> String {
    text.replace('@', "@\u{200B}")
}

const UNITS: [(u64, &str); 4] = [(86_400, "d"), (3_600, "h"), (60, "m"), (1, "s")];

/// Short countdown text using the two largest non-zero units (`2d 3h`, `5m`,
/// `45s`). Zero renders as `0s`.
pub fn format_countdown(total_seconds: u64) -> String {
    let mut remaining = total_seconds;
    let parts: Vec<String> = UNITS
        .iter()
        .filter_map(|(unit_secs, suffix)| {
            let amount = remaining / unit_secs;
            remaining %= unit_secs;
            (amount > 0).then(|| format!("{}{}", amount, suffix))
        })
        .take(2)
        .collect();

    if parts.is_empty() {
        "0s".to_owned()
    } else {
        parts.join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::{escape_mentions, format_countdown, relative_timestamp};

    #[test]
    fn relative_timestamps_use_discord_markup() {
        assert_eq!(relative_timestamp(1_700_000_000), "<t:1700000000:R>");
    }

    #[test]
    fn mentions_are_neutralised() {
        assert_eq!(escape_mentions("@everyone hi"), "@\u{200B}everyone hi");
        assert_eq!(escape_mentions("no pings"), "no pings");
    }

    #[test]
    fn countdown_keeps_two_largest_units() {
        assert_eq!(format_countdown(0), "0s");
        assert_eq!(format_countdown(45), "45s");
        assert_eq!(format_countdown(300), "5m");
        assert_eq!(format_countdown(3_670), "1h 1m");
        assert_eq!(format_countdown(86_400 + 59), "1d 59s");
        assert_eq!(format_countdown(2 * 86_400 + 3 * 3_600 + 7), "2d 3h");
    }
}
