use crate::{CATEGORIES, CommandMeta};
use maple_utils::COMMAND_PREFIX;
use maple_utils::embed::{EMBED_DESCRIPTION_LIMIT, join_within};

pub const CUSTOM_CATEGORY: &str = "custom";

/// Help text grouped by category in display order, one usage line per
/// command. Custom command names are listed last under their own heading.
pub fn help_description(commands: &[CommandMeta], custom_names: &[String]) -> String {
    let mut lines = Vec::new();

    for category in CATEGORIES {
        let entries: Vec<String> = if *category == CUSTOM_CATEGORY {
            custom_names
                .iter()
                .map(|name| format!("`{}{}`", COMMAND_PREFIX, name))
                .collect()
        } else {
            commands
                .iter()
                .filter(|command| command.category == *category)
                .map(|command| format!("`{}`: {}", command.usage, command.desc))
                .collect()
        };

        if entries.is_empty() {
            continue;
        }
        if !lines.is_empty() {
            lines.push(String::new());
        }
        lines.push(format!("**{}**", display_category(category)));
        lines.extend(entries);
    }

    if lines.is_empty() {
        return "No commands available.".to_owned();
    }

    join_within(&lines, "\n", EMBED_DESCRIPTION_LIMIT)
}

fn display_category(category: &str) -> String {
    let mut chars = category.chars();
    match chars.next() {
        Some(first) => format!("{}{}", first.to_uppercase(), chars.as_str()),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::help_description;
    use crate::COMMANDS;
    use maple_utils::embed::EMBED_DESCRIPTION_LIMIT;

    #[test]
    fn lists_every_registered_command() {
        let description = help_description(COMMANDS, &[]);

        for command in COMMANDS {
            assert!(
                description.contains(&format!("`{}`: {}", command.usage, command.desc)),
                "{} missing from help",
                command.name
            );
        }
        assert!(!description.contains("**Custom**"));
    }

    #[test]
    fn usage_lines_show_arguments() {
        let description = help_description(COMMANDS, &[]);
        assert!(description.contains("`/remind <time> <message>`: Set a reminder."));
    }

    #[test]
    fn many_custom_commands_stay_within_embed_limit() {
        let names: Vec<String> = (0..500).map(|i| format!("custom-command-{}", i)).collect();
        let description = help_description(COMMANDS, &names);

        assert!(description.chars().count() <= EMBED_DESCRIPTION_LIMIT);
        assert!(description.contains("**Custom**"));
        assert!(description.ends_with("more"));
    }

    #[test]
    fn categories_follow_display_order() {
        let description = help_description(COMMANDS, &[]);
        let fun = description.find("**Fun**").unwrap();
        let moderation = description.find("**Moderation**").unwrap();
        let economy = description.find("**Economy**").unwrap();

        assert!(fun < moderation && moderation < economy);
    }

    #[test]
    fn custom_commands_get_their_own_section() {
        let description = help_description(COMMANDS, &["rules".to_owned(), "faq".to_owned()]);
        assert!(description.ends_with("**Custom**\n`!rules`\n`!faq`"));
    }
}
