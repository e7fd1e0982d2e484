use crate::modules::time_logs::core::time_log::NewTimeLog;
use chrono::NaiveDate;

/// Record hours against a project. `user_id` is always the authenticated user.
#[derive(Debug, Clone, PartialEq)]
pub struct LogTime {
    pub time_log_id: String,
    pub user_id: String,
    pub project_id: String,
    pub task_name: String,
    pub time: f64,
    pub date: NaiveDate,
    pub created_at: i64,
}

impl LogTime {
    pub fn into_new_time_log(self) -> NewTimeLog {
        NewTimeLog {
            time_log_id: self.time_log_id,
            user_id: self.user_id,
            project_id: self.project_id,
            task_name: self.task_name.trim().to_string(),
            time: self.time,
            date: self.date,
            created_at: self.created_at,
        }
    }
}
