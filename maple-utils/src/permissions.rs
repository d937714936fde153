use poise::serenity_prelude as serenity;

/// Fold the `@everyone` role and a member's own roles into effective guild
/// permissions. Guild owners hold every permission.
pub fn effective_permissions(
    guild_id: serenity::GuildId,
    is_owner: bool,
    member_roles: &[serenity::RoleId],
    roles: impl IntoIterator<Item = (serenity::RoleId, serenity::Permissions)>,
) -> serenity::Permissions {
    if is_owner {
        return serenity::Permissions::all();
    }

    let everyone_role_id = serenity::RoleId::new(guild_id.get());
    roles
        .into_iter()
        .filter(|(role_id, _)| *role_id == everyone_role_id || member_roles.contains(role_id))
        .fold(serenity::Permissions::empty(), |acc, (_, perms)| acc | perms)
}

/// Position of the highest role a member holds; 0 when they only have `@everyone`.
pub fn highest_role_position(
    member_roles: &[serenity::RoleId],
    roles: impl IntoIterator<Item = (serenity::RoleId, u16)>,
) -> u16 {
    roles
        .into_iter()
        .filter(|(role_id, _)| member_roles.contains(role_id))
        .map(|(_, position)| position)
        .max()
        .unwrap_or(0)
}

/// Inputs for deciding whether the bot can moderate a member.
#[derive(Clone, Copy, Debug)]
pub struct Hierarchy {
    pub bot_permissions: serenity::Permissions,
    pub bot_is_owner: bool,
    pub bot_top_role: u16,
    pub target_is_owner: bool,
    pub target_is_bot_itself: bool,
    pub target_top_role: u16,
}

impl Hierarchy {
    /// Whether the bot holds `required` and outranks the target.
    pub fn is_actionable(&self, required: serenity::Permissions) -> bool {
        let has_permission = self
            .bot_permissions
            .contains(serenity::Permissions::ADMINISTRATOR)
            || self.bot_permissions.contains(required);

        if !has_permission || self.target_is_owner || self.target_is_bot_itself {
            return false;
        }

        self.bot_is_owner || self.bot_top_role > self.target_top_role
    }
}

/// Resolve the role hierarchy between the bot and `target` in a guild.
pub async fn resolve_hierarchy(
    http: &serenity::Http,
    guild_id: serenity::GuildId,
    bot_id: serenity::UserId,
    target: &serenity::Member,
) -> anyhow::Result<Hierarchy> {
    let guild = guild_id.to_partial_guild(http).await?;
    let bot_member = guild_id.member(http, bot_id).await?;

    let role_perms = || guild.roles.values().map(|role| (role.id, role.permissions));
    let role_positions = || guild.roles.values().map(|role| (role.id, role.position));

    let bot_is_owner = guild.owner_id == bot_id;
    Ok(Hierarchy {
        bot_permissions: effective_permissions(
            guild_id,
            bot_is_owner,
            &bot_member.roles,
            role_perms(),
        ),
        bot_is_owner,
        bot_top_role: highest_role_position(&bot_member.roles, role_positions()),
        target_is_owner: guild.owner_id == target.user.id,
        target_is_bot_itself: target.user.id == bot_id,
        target_top_role: highest_role_position(&target.roles, role_positions()),
    })
}

#[cfg(test)]
mod tests {
    use poise::serenity_prelude as serenity;

    use super::{Hierarchy, effective_permissions, highest_role_position};

    fn role(id: u64) -> serenity::RoleId {
        serenity::RoleId::new(id)
    }

    fn hierarchy() -> Hierarchy {
        Hierarchy {
            bot_permissions: serenity::Permissions::KICK_MEMBERS,
            bot_is_owner: false,
            bot_top_role: 5,
            target_is_owner: false,
            target_is_bot_itself: false,
            target_top_role: 2,
        }
    }

    #[test]
    fn everyone_role_always_applies() {
        let guild_id = serenity::GuildId::new(100);
        let perms = effective_permissions(
            guild_id,
            false,
            &[role(2)],
            [
                (role(100), serenity::Permissions::SEND_MESSAGES),
                (role(2), serenity::Permissions::KICK_MEMBERS),
                (role(3), serenity::Permissions::BAN_MEMBERS),
            ],
        );

        assert!(perms.contains(serenity::Permissions::SEND_MESSAGES));
        assert!(perms.contains(serenity::Permissions::KICK_MEMBERS));
        assert!(!perms.contains(serenity::Permissions::BAN_MEMBERS));
    }

    #[test]
    fn owners_hold_everything() {
        let perms = effective_permissions(serenity::GuildId::new(1), true, &[], []);
        assert_eq!(perms, serenity::Permissions::all());
    }

    #[test]
    fn highest_role_ignores_unheld_roles() {
        let roles = [(role(1), 3), (role(2), 9), (role(3), 6)];
        assert_eq!(highest_role_position(&[role(1), role(3)], roles), 6);
        assert_eq!(highest_role_position(&[], roles), 0);
    }

    #[test]
    fn outranked_targets_are_actionable() {
        assert!(hierarchy().is_actionable(serenity::Permissions::KICK_MEMBERS));
    }

    #[test]
    fn missing_permission_blocks_action() {
        assert!(!hierarchy().is_actionable(serenity::Permissions::BAN_MEMBERS));

        let admin = Hierarchy {
            bot_permissions: serenity::Permissions::ADMINISTRATOR,
            ..hierarchy()
        };
        assert!(admin.is_actionable(serenity::Permissions::BAN_MEMBERS));
    }

    #[test]
    fn equal_or_higher_targets_are_not_actionable() {
        let equal = Hierarchy {
            target_top_role: 5,
            ..hierarchy()
        };
        assert!(!equal.is_actionable(serenity::Permissions::KICK_MEMBERS));

        let owner_bot = Hierarchy {
            bot_is_owner: true,
            ..equal
        };
        assert!(owner_bot.is_actionable(serenity::Permissions::KICK_MEMBERS));
    }

    #[test]
    fn owner_and_self_are_never_actionable() {
        let owner = Hierarchy {
            target_is_owner: true,
            ..hierarchy()
        };
        assert!(!owner.is_actionable(serenity::Permissions::KICK_MEMBERS));

        let itself = Hierarchy {
            target_is_bot_itself: true,
            ..hierarchy()
        };
        assert!(!itself.is_actionable(serenity::Permissions::KICK_MEMBERS));
    }
}
