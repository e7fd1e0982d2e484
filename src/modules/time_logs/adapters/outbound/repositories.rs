use crate::modules::time_logs::core::employee::Employee;
use crate::modules::time_logs::core::errors::ApplicationError;
use crate::modules::time_logs::core::ownership::ensure_owner;
use crate::modules::time_logs::core::project::Project;
use crate::modules::time_logs::core::time_log::{NewTimeLog, TimeLog, TimeLogChanges, TimeLogField};
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::cmp::Ordering;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Eq,
    NotEq,
    Lt,
    Lte,
    Gt,
    Gte,
    /// Case-insensitive substring match with `%` wildcards stripped.
    Like,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub key: TimeLogField,
    pub operator: Operator,
    pub value: Value,
}

impl Filter {
    pub fn new(key: TimeLogField, operator: Operator, value: impl Into<Value>) -> Self {
        Self {
            key,
            operator,
            value: value.into(),
        }
    }

    pub fn matches(&self, time_log: &TimeLog) -> bool {
        let actual = time_log.value_of(self.key);
        match self.operator {
            Operator::Eq => compare(&actual, &self.value) == Some(Ordering::Equal),
            Operator::NotEq => compare(&actual, &self.value) != Some(Ordering::Equal),
            Operator::Lt => compare(&actual, &self.value) == Some(Ordering::Less),
            Operator::Lte => matches!(
                compare(&actual, &self.value),
                Some(Ordering::Less | Ordering::Equal)
            ),
            Operator::Gt => compare(&actual, &self.value) == Some(Ordering::Greater),
            Operator::Gte => matches!(
                compare(&actual, &self.value),
                Some(Ordering::Greater | Ordering::Equal)
            ),
            Operator::Like => {
                let needle = as_text(&self.value).trim_matches('%').to_lowercase();
                as_text(&actual).to_lowercase().contains(&needle)
            }
        }
    }
}

fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Number(l), Value::Number(r)) => l.as_f64()?.partial_cmp(&r.as_f64()?),
        (Value::String(l), Value::String(r)) => Some(l.cmp(r)),
        (Value::Bool(l), Value::Bool(r)) => Some(l.cmp(r)),
        (Value::Null, Value::Null) => Some(Ordering::Equal),
        _ => None,
    }
}

fn as_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[async_trait]
pub trait TimeLogRepository: Send + Sync {
    async fn get_by_id(&self, time_log_id: &str) -> anyhow::Result<Option<TimeLog>>;

    /// Rows matching every filter, holding only the selected columns.
    async fn get_collection(
        &self,
        filters: &[Filter],
        columns: &[TimeLogField],
    ) -> anyhow::Result<Vec<Map<String, Value>>>;

    async fn create(&self, time_log: NewTimeLog) -> anyhow::Result<TimeLog>;
    async fn update(&self, time_log_id: &str, changes: TimeLogChanges) -> anyhow::Result<TimeLog>;
    async fn delete(&self, time_log_id: &str) -> anyhow::Result<()>;
}

/// Load a time log for a mutation by `user_id`: unknown ids are `NotFound`,
/// foreign records are `Forbidden`.
pub async fn get_owned_by<TRepository>(
    repository: &TRepository,
    time_log_id: &str,
    user_id: &str,
) -> Result<TimeLog, ApplicationError>
where
    TRepository: TimeLogRepository + ?Sized,
{
    let time_log = repository
        .get_by_id(time_log_id)
        .await?
        .ok_or_else(|| ApplicationError::NotFound(time_log_id.to_string()))?;
    if let Err(reason) = ensure_owner(&time_log, user_id) {
        tracing::warn!(%time_log_id, %user_id, "time log ownership check failed");
        return Err(ApplicationError::Forbidden(reason));
    }
    Ok(time_log)
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn get_all(&self) -> anyhow::Result<Vec<Project>>;
    async fn get_by_id(&self, project_id: &str) -> anyhow::Result<Option<Project>>;
}

#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Employee records are keyed by the application user they belong to.
    async fn get_by_id(&self, user_id: &str) -> anyhow::Result<Option<Employee>>;
}
