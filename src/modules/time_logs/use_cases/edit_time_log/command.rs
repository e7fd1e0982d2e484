use chrono::NaiveDate;

/// Replace the editable fields of a time log. `user_id` is the user asking for the change.
#[derive(Debug, Clone, PartialEq)]
pub struct EditTimeLog {
    pub time_log_id: String,
    pub user_id: String,
    pub project_id: String,
    pub task_name: String,
    pub time: f64,
    pub date: NaiveDate,
    pub updated_at: i64,
}
