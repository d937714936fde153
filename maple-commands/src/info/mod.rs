pub mod avatar;
pub mod serverinfo;
pub mod userinfo;

pub const AVATAR_SIZE: u16 = 512;

/// Pin a CDN image url to `size` pixels, replacing any existing query.
pub fn sized_avatar_url(url: &str, size: u16) -> String {
    let base = url.split_once('?').map_or(url, |(base, _)| base);
    format!("{}?size={}", base, size)
}

#[cfg(test)]
mod tests {
    use super::sized_avatar_url;

    #[test]
    fn replaces_existing_size() {
        assert_eq!(
            sized_avatar_url("https://cdn.discordapp.com/avatars/1/abc.webp?size=1024", 512),
            "https://cdn.discordapp.com/avatars/1/abc.webp?size=512"
        );
    }

    #[test]
    fn appends_size_to_default_avatars() {
        assert_eq!(
            sized_avatar_url("https://cdn.discordapp.com/embed/avatars/3.png", 512),
            "https://cdn.discordapp.com/embed/avatars/3.png?size=512"
        );
    }
}
