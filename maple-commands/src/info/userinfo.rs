use poise::serenity_prelude as serenity;
use tracing::debug;

use crate::CommandMeta;
use maple_core::{Context, Error};
use maple_utils::embed::{EMBED_FIELD_VALUE_LIMIT, join_within, titled_embed};
use maple_utils::formatting::relative_timestamp;

pub const META: CommandMeta = CommandMeta {
    name: "userinfo",
    desc: "Get user information.",
    category: "utility",
    usage: "/userinfo [user]",
    placeholder: false,
};

#[poise::command(slash_command, category = "Utility")]
pub async fn userinfo(
    ctx: Context<'_>,
    #[description = "User to get info about"] user: Option<serenity::User>,
) -> Result<(), Error> {
    let user = user.as_ref().unwrap_or_else(|| ctx.author());

    let member = match ctx.guild_id() {
        Some(guild_id) => match guild_id.member(ctx.http(), user.id).await {
            Ok(member) => Some(member),
            Err(source) => {
                debug!(?source, user_id = %user.id, "userinfo target is not a member");
                None
            }
        },
        None => None,
    };

    let created = unix_secs(user.id.created_at());
    let joined = member
        .as_ref()
        .and_then(|member| member.joined_at)
        .map(unix_secs);
    let roles = match (ctx.guild_id(), member.as_ref()) {
        (Some(guild_id), Some(member)) => format_role_list(&member.roles, guild_id),
        _ => "None".to_owned(),
    };

    let mut embed = titled_embed(format!("User Info: {}", user.name)).thumbnail(user.face());
    for (name, value) in userinfo_fields(user.id.get(), created, joined, roles) {
        embed = embed.field(name, value, true);
    }
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}

fn unix_secs(timestamp: serenity::Timestamp) -> u64 {
    u64::try_from(timestamp.unix_timestamp()).unwrap_or(0)
}

/// Mentions for every held role except `@everyone`.
pub fn format_role_list(roles: &[serenity::RoleId], guild_id: serenity::GuildId) -> String {
    let everyone = serenity::RoleId::new(guild_id.get());
    let mentions: Vec<String> = roles
        .iter()
        .filter(|role_id| **role_id != everyone)
        .map(|role_id| format!("<@&{}>", role_id.get()))
        .collect();

    if mentions.is_empty() {
        "None".to_owned()
    } else {
        join_within(&mentions, ", ", EMBED_FIELD_VALUE_LIMIT)
    }
}

pub fn userinfo_fields(
    user_id: u64,
    created: u64,
    joined: Option<u64>,
    roles: String,
) -> Vec<(&'static str, String)> {
    vec![
        ("ID", user_id.to_string()),
        ("Created", relative_timestamp(created)),
        (
            "Joined",
            joined.map_or_else(|| "Unknown".to_owned(), relative_timestamp),
        ),
        ("Roles", roles),
    ]
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude as serenity;

    use super::{format_role_list, userinfo_fields};
    use maple_utils::embed::EMBED_FIELD_VALUE_LIMIT;

    #[test]
    fn everyone_is_left_out_of_roles() {
        let guild_id = serenity::GuildId::new(10);
        assert_eq!(format_role_list(&[serenity::RoleId::new(10)], guild_id), "None");
        assert_eq!(
            format_role_list(
                &[serenity::RoleId::new(10), serenity::RoleId::new(11), serenity::RoleId::new(12)],
                guild_id
            ),
            "<@&11>, <@&12>"
        );
    }

    #[test]
    fn large_role_lists_fit_a_field() {
        let guild_id = serenity::GuildId::new(1);
        let roles: Vec<serenity::RoleId> = (100_000_000_000_000_000..100_000_000_000_000_100)
            .map(serenity::RoleId::new)
            .collect();

        let list = format_role_list(&roles, guild_id);
        assert!(list.chars().count() <= EMBED_FIELD_VALUE_LIMIT);
        assert!(list.ends_with("more"));
    }

    #[test]
    fn fields_use_relative_timestamps() {
        let fields = userinfo_fields(42, 1_600_000_000, Some(1_700_000_000), "None".to_owned());

        assert_eq!(fields[0], ("ID", "42".to_owned()));
        assert_eq!(fields[1], ("Created", "<t:1600000000:R>".to_owned()));
        assert_eq!(fields[2], ("Joined", "<t:1700000000:R>".to_owned()));
        assert_eq!(fields[3], ("Roles", "None".to_owned()));
    }

    #[test]
    fn non_members_have_unknown_join_time() {
        let fields = userinfo_fields(42, 1_600_000_000, None, "None".to_owned());
        assert_eq!(fields[2].1, "Unknown");
    }
}
