use crate::{database::Database, model::afk::AfkEntry, now_unix_secs};

/// Mark a user as AFK, replacing any earlier status.
pub async fn set_afk(db: &Database, user_id: u64, reason: &str) -> anyhow::Result<AfkEntry> {
    let entry = AfkEntry {
        reason: reason.to_owned(),
        since: now_unix_secs(),
    };
    db.backend().set_afk(user_id, entry.clone()).await?;
    Ok(entry)
}

pub async fn get_afk(db: &Database, user_id: u64) -> anyhow::Result<Option<AfkEntry>> {
    db.backend().get_afk(user_id).await
}

/// Remove a user's AFK status, returning it if one was set.
pub async fn clear_afk(db: &Database, user_id: u64) -> anyhow::Result<Option<AfkEntry>> {
    db.backend().take_afk(user_id).await
}

#[cfg(test)]
mod tests {
    use super::{clear_afk, get_afk, set_afk};
    use crate::Database;

    #[tokio::test]
    async fn clear_removes_status_once() {
        let db = Database::in_memory();
        set_afk(&db, 7, "lunch").await.unwrap();

        assert_eq!(get_afk(&db, 7).await.unwrap().unwrap().reason, "lunch");
        assert_eq!(clear_afk(&db, 7).await.unwrap().unwrap().reason, "lunch");
        assert!(clear_afk(&db, 7).await.unwrap().is_none());
        assert!(get_afk(&db, 7).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn setting_again_replaces_reason() {
        let db = Database::in_memory();
        set_afk(&db, 7, "lunch").await.unwrap();
        set_afk(&db, 7, "sleep").await.unwrap();

        assert_eq!(get_afk(&db, 7).await.unwrap().unwrap().reason, "sleep");
    }
}
