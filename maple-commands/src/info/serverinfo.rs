use crate::CommandMeta;
use maple_core::{Context, Error};
use maple_utils::embed::titled_embed;
use maple_utils::formatting::relative_timestamp;

pub const META: CommandMeta = CommandMeta {
    name: "serverinfo",
    desc: "Get server information.",
    category: "utility",
    usage: "/serverinfo",
    placeholder: false,
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServerStats {
    pub members: Option<u64>,
    pub channels: usize,
    pub roles: usize,
    pub created: u64,
}

impl ServerStats {
    pub fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            (
                "Members",
                self.members
                    .map_or_else(|| "Unknown".to_owned(), |count| count.to_string()),
            ),
            ("Channels", self.channels.to_string()),
            ("Roles", self.roles.to_string()),
            ("Created", relative_timestamp(self.created)),
        ]
    }
}

#[poise::command(slash_command, guild_only, category = "Utility")]
pub async fn serverinfo(ctx: Context<'_>) -> Result<(), Error> {
    let Some(guild_id) = ctx.guild_id() else {
        return Ok(());
    };

    let guild = guild_id.to_partial_guild_with_counts(ctx.http()).await?;
    let channels = guild_id.channels(ctx.http()).await?;

    let stats = ServerStats {
        members: guild.approximate_member_count,
        channels: channels.len(),
        roles: guild.roles.len(),
        created: u64::try_from(guild_id.created_at().unix_timestamp()).unwrap_or(0),
    };

    let mut embed = titled_embed(format!("Server Info: {}", guild.name));
    if let Some(icon) = guild.icon_url() {
        embed = embed.thumbnail(icon);
    }
    for (name, value) in stats.fields() {
        embed = embed.field(name, value, true);
    }
    ctx.send(poise::CreateReply::default().embed(embed)).await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::ServerStats;

    #[test]
    fn fields_cover_members_channels_roles_and_age() {
        let stats = ServerStats {
            members: Some(120),
            channels: 14,
            roles: 6,
            created: 1_500_000_000,
        };

        assert_eq!(
            stats.fields(),
            vec![
                ("Members", "120".to_owned()),
                ("Channels", "14".to_owned()),
                ("Roles", "6".to_owned()),
                ("Created", "<t:1500000000:R>".to_owned()),
            ]
        );
    }
}
