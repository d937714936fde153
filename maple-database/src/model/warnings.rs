#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WarningEntry {
    pub user_id: u64,
    pub moderator_id: u64,
    pub reason: String,
    pub warned_at: u64,
}

#[derive(Clone, Copy, Debug)]
pub struct WarningRecord {
    pub warn_number: usize,
}
