use std::collections::HashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::AbortHandle;
use tracing::{debug, error};

use maple_database::Database;
use maple_database::impls::reminders::{
    get_reminder, insert_reminder, reminders_for_user, remove_reminder,
};
use maple_database::model::reminders::{NewReminder, ReminderEntry};

/// Owns the timer tasks of pending reminders, keyed by reminder id.
#[derive(Clone, Debug)]
pub struct ReminderScheduler {
    db: Database,
    tasks: Arc<Mutex<HashMap<u64, AbortHandle>>>,
}

impl ReminderScheduler {
    pub fn new(db: Database) -> Self {
        Self {
            db,
            tasks: Arc::default(),
        }
    }

    /// Store the reminder and run `deliver` once `delay` has elapsed. The
    /// store entry is removed before delivery.
    pub async fn schedule<F, Fut>(
        &self,
        new: NewReminder,
        delay: Duration,
        deliver: F,
    ) -> anyhow::Result<ReminderEntry>
    where
        F: FnOnce(ReminderEntry) -> Fut + Send + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        let entry = insert_reminder(&self.db, new).await?;
        let id = entry.id;
        let db = self.db.clone();
        let tasks = Arc::clone(&self.tasks);

        // Held until the handle is registered so the task cannot finish first.
        let mut pending = self.tasks.lock().await;
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            tasks.lock().await.remove(&id);

            let entry = match remove_reminder(&db, id).await {
                Ok(Some(entry)) => entry,
                Ok(None) => return,
                Err(source) => {
                    error!(?source, reminder_id = id, "failed to remove fired reminder");
                    return;
                }
            };

            if let Err(source) = deliver(entry).await {
                error!(?source, reminder_id = id, "failed to deliver reminder");
            }
        });
        pending.insert(id, handle.abort_handle());

        debug!(
            reminder_id = id,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            "reminder scheduled"
        );
        Ok(entry)
    }

    /// Cancel one of `user_id`'s pending reminders. Returns `None` when the id
    /// is unknown, already fired, or belongs to someone else.
    pub async fn cancel(&self, user_id: u64, id: u64) -> anyhow::Result<Option<ReminderEntry>> {
        let Some(entry) = get_reminder(&self.db, id).await? else {
            return Ok(None);
        };

        if entry.user_id != user_id {
            return Ok(None);
        }

        if let Some(handle) = self.tasks.lock().await.remove(&id) {
            handle.abort();
        }

        let removed = remove_reminder(&self.db, id).await?;
        if removed.is_some() {
            debug!(reminder_id = id, "reminder cancelled");
        }
        Ok(removed)
    }

    pub async fn pending_for(&self, user_id: u64) -> anyhow::Result<Vec<ReminderEntry>> {
        reminders_for_user(&self.db, user_id).await
    }

    /// Number of timer tasks still waiting to fire.
    pub async fn pending_tasks(&self) -> usize {
        self.tasks.lock().await.len()
    }
}
