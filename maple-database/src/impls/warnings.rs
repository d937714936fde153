use crate::{
    database::Database,
    model::warnings::{WarningEntry, WarningRecord},
    now_unix_secs,
};

/// Record a warning for a target user and return the new warning number.
pub async fn record_warning(
    db: &Database,
    user_id: u64,
    moderator_id: u64,
    reason: &str,
) -> anyhow::Result<WarningRecord> {
    let entry = WarningEntry {
        user_id,
        moderator_id,
        reason: reason.to_owned(),
        warned_at: now_unix_secs(),
    };

    let warn_number = db.backend().append_warning(entry).await?;
    Ok(WarningRecord { warn_number })
}

/// Return every warning for a user, oldest first.
pub async fn list_warnings(db: &Database, user_id: u64) -> anyhow::Result<Vec<WarningEntry>> {
    db.backend().warnings(user_id).await
}

#[cfg(test)]
mod tests {
    use super::{list_warnings, record_warning};
    use crate::Database;

    #[tokio::test]
    async fn warning_numbers_grow_with_each_record() {
        let db = Database::in_memory();

        let first = record_warning(&db, 10, 1, "spam").await.unwrap();
        let second = record_warning(&db, 10, 2, "flood").await.unwrap();
        let other_user = record_warning(&db, 11, 1, "spam").await.unwrap();

        assert_eq!(first.warn_number, 1);
        assert_eq!(second.warn_number, 2);
        assert_eq!(other_user.warn_number, 1);
    }

    #[tokio::test]
    async fn warnings_keep_insertion_order() {
        let db = Database::in_memory();
        for reason in ["first", "second", "third"] {
            record_warning(&db, 5, 99, reason).await.unwrap();
        }

        let reasons: Vec<String> = list_warnings(&db, 5)
            .await
            .unwrap()
            .into_iter()
            .map(|entry| entry.reason)
            .collect();
        assert_eq!(reasons, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn unknown_user_has_no_warnings() {
        let db = Database::in_memory();
        assert!(list_warnings(&db, 42).await.unwrap().is_empty());
    }
}
