use poise::serenity_prelude as serenity;

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x58_65_F2;
pub const WARNING_EMBED_COLOR: u32 = 0xFF_CC_00;
pub const MEME_EMBED_COLOR: u32 = 0xFF_6B_6B;
pub const PET_EMBED_COLOR: u32 = 0xFF_B6_C1;

/// Build a titled embed with the default color.
pub fn titled_embed(title: impl Into<String>) -> serenity::CreateEmbed {
    serenity::CreateEmbed::new()
        .title(title)
        .color(DEFAULT_EMBED_COLOR)
}

/// Build a titled embed with a description and the default color.
pub fn described_embed(
    title: impl Into<String>,
    description: impl Into<String>,
) -> serenity::CreateEmbed {
    titled_embed(title).description(description)
}

pub const EMBED_TITLE_LIMIT: usize = 256;
pub const EMBED_DESCRIPTION_LIMIT: usize = 4096;
pub const EMBED_FIELD_VALUE_LIMIT: usize = 1024;
pub const MESSAGE_CONTENT_LIMIT: usize = 2000;

/// Cut `text` to at most `max` characters, marking the cut with `…`.
pub fn clamp_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_owned();
    }

    let mut clamped: String = text.chars().take(max.saturating_sub(1)).collect();
    clamped.push('…');
    clamped
}

/// Join `items` with `separator` while staying within `max` characters.
/// Items that do not fit are summarised as `…and N more`.
pub fn join_within(items: &[String], separator: &str, max: usize) -> String {
    let separator_len = separator.chars().count();
    let tail_len = |remaining: usize| format!("…and {} more", remaining).chars().count();

    let mut out = String::new();
    let mut out_len = 0;

    for (index, item) in items.iter().enumerate() {
        let joined_len = if out.is_empty() { 0 } else { separator_len };
        let needed = out_len + joined_len + item.chars().count();
        let left_after = items.len() - index - 1;
        let reserve = if left_after > 0 {
            separator_len + tail_len(left_after)
        } else {
            0
        };

        if needed + reserve > max {
            if !out.is_empty() {
                out.push_str(separator);
            }
            out.push_str(&format!("…and {} more", items.len() - index));
            return out;
        }

        if !out.is_empty() {
            out.push_str(separator);
        }
        out.push_str(item);
        out_len = needed;
    }

    out
}

#[cfg(test)]
mod tests {
    use super::{EMBED_DESCRIPTION_LIMIT, clamp_chars, join_within};

    #[test]
    fn clamp_keeps_text_at_the_limit() {
        assert_eq!(clamp_chars("abcd", 4), "abcd");
        assert_eq!(clamp_chars("abcde", 4), "abc…");
        assert_eq!(clamp_chars("ääää", 3).chars().count(), 3);
    }

    #[test]
    fn join_keeps_everything_that_fits() {
        let items = vec!["a".to_owned(), "b".to_owned()];
        assert_eq!(join_within(&items, "\n", 3), "a\nb");
    }

    #[test]
    fn join_summarises_the_overflow() {
        let items: Vec<String> = (0..200).map(|i| format!("{:0>50}", i)).collect();
        let joined = join_within(&items, "\n", EMBED_DESCRIPTION_LIMIT);

        assert!(joined.chars().count() <= EMBED_DESCRIPTION_LIMIT);
        assert!(joined.starts_with(&items[0]));
        let kept = joined.lines().count() - 1;
        assert!(joined.ends_with(&format!("…and {} more", items.len() - kept)));
    }
}
