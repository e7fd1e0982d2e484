use crate::modules::time_logs::use_cases::log_time::command::LogTime;
use chrono::NaiveDate;
use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct LogTimeDto {
    pub time_log_id: String,
    pub user_id: String,
    pub project_id: String,
    pub task_name: String,
    pub time: f64,
    pub date: NaiveDate,
}

pub struct LogTimeBuilder {
    inner: LogTime,
}

impl Default for LogTimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl LogTimeBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/log_time.json").unwrap();
        let dto: LogTimeDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: LogTime {
                time_log_id: dto.time_log_id,
                user_id: dto.user_id,
                project_id: dto.project_id,
                task_name: dto.task_name,
                time: dto.time,
                date: dto.date,
                created_at: 1_710_150_000_000,
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

    pub fn created_at(mut self, v: i64) -> Self {
        self.inner.created_at = v;
        self
    }

    pub fn build(self) -> LogTime {
        self.inner
    }
}

#[cfg(test)]
mod log_time_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = LogTimeBuilder::default().build();
        assert_eq!(built.time_log_id, "tl-fixed-0001");
        assert_eq!(built.user_id, "user-fixed-0001");
        assert_eq!(built.project_id, "project-0001");
        assert_eq!(built.task_name, "Writing release notes");
        assert_eq!(built.time, 2.5);
        assert_eq!(built.date, NaiveDate::from_ymd_opt(2024, 3, 11).unwrap());
        assert_eq!(built.created_at, 1_710_150_000_000i64);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = LogTimeBuilder::new()
            .time_log_id("tl-123")
            .user_id("user-456")
            .project_id("project-0002")
            .task_name("Support")
            .time(8.0)
            .date(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap())
            .created_at(3333)
            .build();

        assert_eq!(custom.time_log_id, "tl-123");
        assert_eq!(custom.user_id, "user-456");
        assert_eq!(custom.project_id, "project-0002");
        assert_eq!(custom.task_name, "Support");
        assert_eq!(custom.time, 8.0);
        assert_eq!(custom.date, NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        assert_eq!(custom.created_at, 3333);
    }
}
