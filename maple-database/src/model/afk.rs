#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AfkEntry {
    pub reason: String,
    pub since: u64,
}
