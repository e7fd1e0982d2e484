use crate::modules::time_logs::use_cases::edit_time_log::command::EditTimeLog;
use chrono::NaiveDate;

pub struct EditTimeLogBuilder {
    inner: EditTimeLog,
}

impl Default for EditTimeLogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl EditTimeLogBuilder {
    /// Valid changes to the time log built by `LogTimeBuilder::new()`, made by its owner.
    pub fn new() -> Self {
        Self {
            inner: EditTimeLog {
                time_log_id: "tl-fixed-0001".into(),
                user_id: "user-fixed-0001".into(),
                project_id: "project-0002".into(),
                task_name: "Writing release notes".into(),
                time: 3.0,
                date: NaiveDate::from_ymd_opt(2024, 3, 12).unwrap(),
                updated_at: 1_710_236_400_000,
            },
        }
    }

    pub fn time_log_id(mut self, v: impl Into<String>) -> Self {
        self.inner.time_log_id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn project_id(mut self, v: impl Into<String>) -> Self {
        self.inner.project_id = v.into();
        self
    }

    pub fn task_name(mut self, v: impl Into<String>) -> Self {
        self.inner.task_name = v.into();
        self
    }

    pub fn time(mut self, v: f64) -> Self {
        self.inner.time = v;
        self
    }

    pub fn date(mut self, v: NaiveDate) -> Self {
        self.inner.date = v;
        self
    }

    pub fn updated_at(mut self, v: i64) -> Self {
        self.inner.updated_at = v;
        self
    }

    pub fn build(self) -> EditTimeLog {
        self.inner
    }
}
