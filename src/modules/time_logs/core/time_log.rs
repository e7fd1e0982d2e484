use chrono::NaiveDate;
use serde_json::{Map, Value};

/// A record of work performed by an employee against a project on a given date.
/// `time` is hours worked; timestamps are epoch milliseconds.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TimeLog {
    pub time_log_id: String,
    pub user_id: String,
    pub project_id: String,
    pub task_name: String,
    pub time: f64,
    pub date: NaiveDate,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Fields a repository needs to persist a new time log.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTimeLog {
    pub time_log_id: String,
    pub user_id: String,
    pub project_id: String,
    pub task_name: String,
    pub time: f64,
    pub date: NaiveDate,
    pub created_at: i64,
}

/// Editable fields. The owner is not part of it and never changes after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeLogChanges {
    pub project_id: String,
    pub task_name: String,
    pub time: f64,
    pub date: NaiveDate,
    pub updated_at: i64,
}

/// Column names as exposed to filters, column selections and the table endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeLogField {
    Id,
    UserId,
    ProjectId,
    TaskName,
    Time,
    Date,
    CreatedAt,
    UpdatedAt,
}

impl TimeLogField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeLogField::Id => "id",
            TimeLogField::UserId => "user_id",
            TimeLogField::ProjectId => "project_id",
            TimeLogField::TaskName => "task_name",
            TimeLogField::Time => "time",
            TimeLogField::Date => "date",
            TimeLogField::CreatedAt => "created_at",
            TimeLogField::UpdatedAt => "updated_at",
        }
    }
}

impl TimeLog {
    pub fn from_new(new: NewTimeLog) -> Self {
        Self {
            time_log_id: new.time_log_id,
            user_id: new.user_id,
            project_id: new.project_id,
            task_name: new.task_name,
            time: new.time,
            date: new.date,
            created_at: new.created_at,
            updated_at: new.created_at,
        }
    }

    pub fn apply(&mut self, changes: TimeLogChanges) {
        self.project_id = changes.project_id;
        self.task_name = changes.task_name;
        self.time = changes.time;
        self.date = changes.date;
        self.updated_at = changes.updated_at;
    }

    pub fn value_of(&self, field: TimeLogField) -> Value {
        match field {
            TimeLogField::Id => Value::from(self.time_log_id.clone()),
            TimeLogField::UserId => Value::from(self.user_id.clone()),
            TimeLogField::ProjectId => Value::from(self.project_id.clone()),
            TimeLogField::TaskName => Value::from(self.task_name.clone()),
            TimeLogField::Time => Value::from(self.time),
            TimeLogField::Date => Value::from(self.date.format("%Y-%m-%d").to_string()),
            TimeLogField::CreatedAt => Value::from(self.created_at),
            TimeLogField::UpdatedAt => Value::from(self.updated_at),
        }
    }

    /// Keep only the selected columns, keyed by column name.
    pub fn select(&self, columns: &[TimeLogField]) -> Map<String, Value> {
        columns
            .iter()
            .map(|field| (field.as_str().to_string(), self.value_of(*field)))
            .collect()
    }
}
