/// Aggregated view of how far a game has come, useful for UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionProgress {
    pub total: usize,
    pub played: usize,
    pub solved: usize,
    pub skipped: usize,
    pub remaining: usize,
    pub is_finished: bool,
}
