mod memory_store;

use memory_store::MemoryStore;

use crate::model::afk::AfkEntry;
use crate::model::reminders::{NewReminder, ReminderEntry};
use crate::model::warnings::WarningEntry;

/// Storage backends. Every table operation is dispatched here so that query
/// modules never touch a concrete store.
#[derive(Clone, Debug)]
pub(crate) enum StoreBackend {
    Memory(MemoryStore),
}

impl StoreBackend {
    pub(crate) fn memory() -> Self {
        Self::Memory(MemoryStore::default())
    }

    pub(crate) fn name(&self) -> &'static str {
        match self {
            Self::Memory(_) => "memory",
        }
    }

    pub(crate) async fn append_warning(&self, entry: WarningEntry) -> anyhow::Result<usize> {
        match self {
            Self::Memory(store) => Ok(store.append_warning(entry).await),
        }
    }

    pub(crate) async fn warnings(&self, user_id: u64) -> anyhow::Result<Vec<WarningEntry>> {
        match self {
            Self::Memory(store) => Ok(store.warnings(user_id).await),
        }
    }

    pub(crate) async fn set_afk(&self, user_id: u64, entry: AfkEntry) -> anyhow::Result<()> {
        match self {
            Self::Memory(store) => {
                store.set_afk(user_id, entry).await;
                Ok(())
            }
        }
    }

    pub(crate) async fn get_afk(&self, user_id: u64) -> anyhow::Result<Option<AfkEntry>> {
        match self {
            Self::Memory(store) => Ok(store.get_afk(user_id).await),
        }
    }

    pub(crate) async fn take_afk(&self, user_id: u64) -> anyhow::Result<Option<AfkEntry>> {
        match self {
            Self::Memory(store) => Ok(store.take_afk(user_id).await),
        }
    }

    pub(crate) async fn put_custom_command(
        &self,
        name: String,
        response: String,
    ) -> anyhow::Result<Option<String>> {
        match self {
            Self::Memory(store) => Ok(store.put_custom_command(name, response).await),
        }
    }

    pub(crate) async fn get_custom_command(&self, name: &str) -> anyhow::Result<Option<String>> {
        match self {
            Self::Memory(store) => Ok(store.get_custom_command(name).await),
        }
    }

    pub(crate) async fn custom_command_names(&self) -> anyhow::Result<Vec<String>> {
        match self {
            Self::Memory(store) => Ok(store.custom_command_names().await),
        }
    }

    pub(crate) async fn insert_reminder(&self, new: NewReminder) -> anyhow::Result<ReminderEntry> {
        match self {
            Self::Memory(store) => Ok(store.insert_reminder(new).await),
        }
    }

    pub(crate) async fn get_reminder(&self, id: u64) -> anyhow::Result<Option<ReminderEntry>> {
        match self {
            Self::Memory(store) => Ok(store.get_reminder(id).await),
        }
    }

    pub(crate) async fn remove_reminder(&self, id: u64) -> anyhow::Result<Option<ReminderEntry>> {
        match self {
            Self::Memory(store) => Ok(store.remove_reminder(id).await),
        }
    }

    pub(crate) async fn reminders_for_user(
        &self,
        user_id: u64,
    ) -> anyhow::Result<Vec<ReminderEntry>> {
        match self {
            Self::Memory(store) => Ok(store.reminders_for_user(user_id).await),
        }
    }
}
