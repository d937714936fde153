use crate::database::Database;

/// Store a custom command reply. Returns the previous reply when the name was
/// already taken.
pub async fn upsert_custom_command(
    db: &Database,
    name: &str,
    response: &str,
) -> anyhow::Result<Option<String>> {
    db.backend()
        .put_custom_command(name.to_owned(), response.to_owned())
        .await
}

pub async fn get_custom_command(db: &Database, name: &str) -> anyhow::Result<Option<String>> {
    db.backend().get_custom_command(name).await
}

/// All custom command names, sorted.
pub async fn list_custom_command_names(db: &Database) -> anyhow::Result<Vec<String>> {
    db.backend().custom_command_names().await
}

#[cfg(test)]
mod tests {
    use super::{get_custom_command, list_custom_command_names, upsert_custom_command};
    use crate::Database;

    #[tokio::test]
    async fn last_write_wins() {
        let db = Database::in_memory();

        let previous = upsert_custom_command(&db, "rules", "be nice").await.unwrap();
        assert!(previous.is_none());

        let previous = upsert_custom_command(&db, "rules", "be kind").await.unwrap();
        assert_eq!(previous.as_deref(), Some("be nice"));
        assert_eq!(
            get_custom_command(&db, "rules").await.unwrap().as_deref(),
            Some("be kind")
        );
    }

    #[tokio::test]
    async fn names_are_sorted() {
        let db = Database::in_memory();
        upsert_custom_command(&db, "zeta", "z").await.unwrap();
        upsert_custom_command(&db, "alpha", "a").await.unwrap();

        assert_eq!(list_custom_command_names(&db).await.unwrap(), ["alpha", "zeta"]);
        assert!(get_custom_command(&db, "missing").await.unwrap().is_none());
    }
}
