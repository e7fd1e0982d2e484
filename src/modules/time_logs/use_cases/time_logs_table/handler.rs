use crate::modules::time_logs::adapters::inbound::views::actions_cell;
use crate::modules::time_logs::adapters::outbound::repositories::{
    Filter, Operator, ProjectRepository, TimeLogRepository,
};
use crate::modules::time_logs::core::errors::ApplicationError;
use crate::modules::time_logs::core::project::pluck_names;
use crate::modules::time_logs::core::time_log::TimeLogField;
use crate::shared::infrastructure::datatable::{DataTable, DataTableRequest, DataTableResponse};
use serde_json::Value;
use std::sync::Arc;

const COLUMNS: [TimeLogField; 5] = [
    TimeLogField::Id,
    TimeLogField::TaskName,
    TimeLogField::ProjectId,
    TimeLogField::Time,
    TimeLogField::Date,
];

pub struct TimeLogsTableHandler<TTimeLogs, TProjects>
where
    TTimeLogs: TimeLogRepository + 'static,
    TProjects: ProjectRepository + 'static,
{
    time_logs: Arc<TTimeLogs>,
    projects: Arc<TProjects>,
}

impl<TTimeLogs, TProjects> TimeLogsTableHandler<TTimeLogs, TProjects>
where
    TTimeLogs: TimeLogRepository + 'static,
    TProjects: ProjectRepository + 'static,
{
    pub fn new(time_logs: Arc<TTimeLogs>, projects: Arc<TProjects>) -> Self {
        Self {
            time_logs,
            projects,
        }
    }

    /// One table page of the user's own time logs, with the project name in
    /// `project_id` and an `actions` column.
    pub async fn handle(
        &self,
        user_id: &str,
        request: &DataTableRequest,
    ) -> Result<DataTableResponse, ApplicationError> {
        let rows = self
            .time_logs
            .get_collection(
                &[Filter::new(TimeLogField::UserId, Operator::Eq, user_id)],
                &COLUMNS,
            )
            .await?;
        let project_names = pluck_names(&self.projects.get_all().await?);

        let response = DataTable::of(rows)
            .edit_column(TimeLogField::ProjectId.as_str(), |row| {
                row.get(TimeLogField::ProjectId.as_str())
                    .and_then(Value::as_str)
                    .and_then(|project_id| project_names.get(project_id))
                    .map(|name| Value::from(name.as_str()))
                    .unwrap_or(Value::Null)
            })
            .add_column("actions", |row| {
                let time_log_id = row
                    .get(TimeLogField::Id.as_str())
                    .and_then(Value::as_str)
                    .unwrap_or_default();
                Value::from(actions_cell(time_log_id))
            })
            .make(request);

        tracing::debug!(
            %user_id,
            records_total = response.records_total,
            records_filtered = response.records_filtered,
            "time log table served"
        );
        Ok(response)
    }
}
