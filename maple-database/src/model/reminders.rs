/// A reminder that has not been stored yet.
#[derive(Clone, Debug)]
pub struct NewReminder {
    pub user_id: u64,
    pub channel_id: u64,
    pub message: String,
    pub fire_at: u64,
}

/// A pending reminder. Removed from the store once it fires or is cancelled.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReminderEntry {
    pub id: u64,
    pub user_id: u64,
    pub channel_id: u64,
    pub message: String,
    pub fire_at: u64,
}
