use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::RwLock;

use crate::model::afk::AfkEntry;
use crate::model::reminders::{NewReminder, ReminderEntry};
use crate::model::warnings::WarningEntry;

/// Process-lifetime tables. Each table has its own lock and every mutation
/// completes under a single write guard.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    warnings: Arc<RwLock<HashMap<u64, Vec<WarningEntry>>>>,
    afk: Arc<RwLock<HashMap<u64, AfkEntry>>>,
    custom_commands: Arc<RwLock<HashMap<String, String>>>,
    reminders: Arc<RwLock<HashMap<u64, ReminderEntry>>>,
    last_reminder_id: Arc<AtomicU64>,
}

impl MemoryStore {
    pub async fn append_warning(&self, entry: WarningEntry) -> usize {
        let mut warnings = self.warnings.write().await;
        let entries = warnings.entry(entry.user_id).or_default();
        entries.push(entry);
        entries.len()
    }

    pub async fn warnings(&self, user_id: u64) -> Vec<WarningEntry> {
        self.warnings
            .read()
            .await
            .get(&user_id)
            .cloned()
            .unwrap_or_default()
    }

    pub async fn set_afk(&self, user_id: u64, entry: AfkEntry) {
        self.afk.write().await.insert(user_id, entry);
    }

    pub async fn get_afk(&self, user_id: u64) -> Option<AfkEntry> {
        self.afk.read().await.get(&user_id).cloned()
    }

    pub async fn take_afk(&self, user_id: u64) -> Option<AfkEntry> {
        self.afk.write().await.remove(&user_id)
    }

    pub async fn put_custom_command(&self, name: String, response: String) -> Option<String> {
        self.custom_commands.write().await.insert(name, response)
    }

    pub async fn get_custom_command(&self, name: &str) -> Option<String> {
        self.custom_commands.read().await.get(name).cloned()
    }

    pub async fn custom_command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.custom_commands.read().await.keys().cloned().collect();
        names.sort_unstable();
        names
    }

    pub async fn insert_reminder(&self, new: NewReminder) -> ReminderEntry {
        let id = self.last_reminder_id.fetch_add(1, Ordering::Relaxed) + 1;
        let entry = ReminderEntry {
            id,
            user_id: new.user_id,
            channel_id: new.channel_id,
            message: new.message,
            fire_at: new.fire_at,
        };

        self.reminders.write().await.insert(id, entry.clone());
        entry
    }

    pub async fn get_reminder(&self, id: u64) -> Option<ReminderEntry> {
        self.reminders.read().await.get(&id).cloned()
    }

    pub async fn remove_reminder(&self, id: u64) -> Option<ReminderEntry> {
        self.reminders.write().await.remove(&id)
    }

    pub async fn reminders_for_user(&self, user_id: u64) -> Vec<ReminderEntry> {
        let mut entries: Vec<ReminderEntry> = self
            .reminders
            .read()
            .await
            .values()
            .filter(|entry| entry.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by_key(|entry| (entry.fire_at, entry.id));
        entries
    }
}

#[cfg(test)]
mod tests {
    use super::MemoryStore;
    use crate::model::warnings::WarningEntry;

    fn warning(user_id: u64, reason: &str) -> WarningEntry {
        WarningEntry {
            user_id,
            moderator_id: 9,
            reason: reason.to_owned(),
            warned_at: 0,
        }
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_appends_are_not_lost() {
        let store = MemoryStore::default();

        let tasks = (0..50)
            .map(|index| {
                let store = store.clone();
                tokio::spawn(async move {
                    store.append_warning(warning(1, &format!("r{index}"))).await
                })
            })
            .collect::<Vec<_>>();

        for task in tasks {
            task.await.expect("append task panicked");
        }

        assert_eq!(store.warnings(1).await.len(), 50);
    }

    #[tokio::test]
    async fn clones_share_tables() {
        let store = MemoryStore::default();
        let other = store.clone();

        store.append_warning(warning(3, "spam")).await;
        assert_eq!(other.warnings(3).await.len(), 1);
        assert!(other.warnings(4).await.is_empty());
    }
}
