#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteTimeLog {
    pub time_log_id: String,
    pub user_id: String,
}
