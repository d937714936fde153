use std::sync::LazyLock;

use regex::Regex;

static DURATION_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9]+)([smhd])$").expect("duration token pattern is valid")
});

/// Parse a compact duration token (`30s`, `10m`, `2h`, `1d`) into
/// milliseconds. Exactly one unit letter, no whitespace, no sign.
pub fn parse_duration_millis(raw: &str) -> Option<u64> {
    let captures = DURATION_TOKEN.captures(raw)?;
    let value = captures[1].parse::<u64>().ok()?;

    let multiplier = match &captures[2] {
        "s" => 1_000_u64,
        "m" => 60 * 1_000,
        "h" => 60 * 60 * 1_000,
        "d" => 24 * 60 * 60 * 1_000,
        _ => return None,
    };

    value.checked_mul(multiplier)
}
