use crate::modules::time_logs::adapters::outbound::repositories::{
    EmployeeRepository, Filter, Operator, ProjectRepository, TimeLogRepository,
};
use crate::modules::time_logs::core::employee::Employee;
use crate::modules::time_logs::core::errors::ApplicationError;
use crate::modules::time_logs::core::project::Project;
use crate::modules::time_logs::core::time_log::TimeLogField;
use serde_json::{Map, Value};
use std::sync::Arc;

/// What the list page shows around the table.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeLogsOverview {
    pub projects: Vec<Project>,
    pub employee: Option<Employee>,
}

pub struct ListTimeLogsHandler<TTimeLogs, TProjects, TEmployees>
where
    TTimeLogs: TimeLogRepository + 'static,
    TProjects: ProjectRepository + 'static,
    TEmployees: EmployeeRepository + 'static,
{
    time_logs: Arc<TTimeLogs>,
    projects: Arc<TProjects>,
    employees: Arc<TEmployees>,
}

impl<TTimeLogs, TProjects, TEmployees> ListTimeLogsHandler<TTimeLogs, TProjects, TEmployees>
where
    TTimeLogs: TimeLogRepository + 'static,
    TProjects: ProjectRepository + 'static,
    TEmployees: EmployeeRepository + 'static,
{
    pub fn new(
        time_logs: Arc<TTimeLogs>,
        projects: Arc<TProjects>,
        employees: Arc<TEmployees>,
    ) -> Self {
        Self {
            time_logs,
            projects,
            employees,
        }
    }

    pub async fn overview(&self, user_id: &str) -> Result<TimeLogsOverview, ApplicationError> {
        let projects = self.projects.get_all().await?;
        let employee = self.employees.get_by_id(user_id).await?;
        Ok(TimeLogsOverview { projects, employee })
    }

    /// Projects for the create and edit forms.
    pub async fn projects(&self) -> Result<Vec<Project>, ApplicationError> {
        Ok(self.projects.get_all().await?)
    }

    /// A page of the user's own time logs, oldest first.
    pub async fn list_by_user_id(
        &self,
        user_id: &str,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Map<String, Value>>, ApplicationError> {
        let rows = self
            .time_logs
            .get_collection(
                &[Filter::new(TimeLogField::UserId, Operator::Eq, user_id)],
                &[
                    TimeLogField::Id,
                    TimeLogField::ProjectId,
                    TimeLogField::TaskName,
                    TimeLogField::Time,
                    TimeLogField::Date,
                    TimeLogField::CreatedAt,
                    TimeLogField::UpdatedAt,
                ],
            )
            .await?;
        Ok(rows
            .into_iter()
            .skip(usize::try_from(offset).unwrap_or(usize::MAX))
            .take(usize::try_from(limit).unwrap_or(usize::MAX))
            .collect())
    }
}
