use crate::{
    database::Database,
    model::reminders::{NewReminder, ReminderEntry},
};

/// Store a pending reminder and assign it an id.
pub async fn insert_reminder(db: &Database, new: NewReminder) -> anyhow::Result<ReminderEntry> {
    db.backend().insert_reminder(new).await
}

pub async fn get_reminder(db: &Database, id: u64) -> anyhow::Result<Option<ReminderEntry>> {
    db.backend().get_reminder(id).await
}

pub async fn remove_reminder(db: &Database, id: u64) -> anyhow::Result<Option<ReminderEntry>> {
    db.backend().remove_reminder(id).await
}

/// Pending reminders for a user, soonest first.
pub async fn reminders_for_user(db: &Database, user_id: u64) -> anyhow::Result<Vec<ReminderEntry>> {
    db.backend().reminders_for_user(user_id).await
}
