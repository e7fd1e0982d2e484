use crate::modules::time_logs::adapters::outbound::repositories::{
    ProjectRepository, TimeLogRepository, get_owned_by,
};
use crate::modules::time_logs::core::errors::ApplicationError;
use crate::modules::time_logs::core::time_log::TimeLog;
use crate::modules::time_logs::use_cases::edit_time_log::command::EditTimeLog;
use crate::modules::time_logs::use_cases::edit_time_log::decide::{EditDecision, decide_edit};
use std::sync::Arc;

pub struct EditTimeLogHandler<TTimeLogs, TProjects>
where
    TTimeLogs: TimeLogRepository + 'static,
    TProjects: ProjectRepository + 'static,
{
    time_logs: Arc<TTimeLogs>,
    projects: Arc<TProjects>,
}

impl<TTimeLogs, TProjects> EditTimeLogHandler<TTimeLogs, TProjects>
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

    /// The time log as shown on the edit form.
    pub async fn load(&self, time_log_id: &str, user_id: &str) -> Result<TimeLog, ApplicationError> {
        get_owned_by(&*self.time_logs, time_log_id, user_id).await
    }

    pub async fn handle(&self, command: EditTimeLog) -> Result<TimeLog, ApplicationError> {
        let current = self
            .time_logs
            .get_by_id(&command.time_log_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(command.time_log_id.clone()))?;
        let project = self.projects.get_by_id(&command.project_id).await?;
        let time_log_id = command.time_log_id.clone();
        let user_id = command.user_id.clone();

        match decide_edit(&current, command, project.as_ref()) {
            EditDecision::Accepted { changes } => {
                let updated = self.time_logs.update(&time_log_id, changes).await?;
                tracing::info!(%time_log_id, %user_id, "time log updated");
                Ok(updated)
            }
            EditDecision::Forbidden { reason } => {
                tracing::warn!(%time_log_id, %user_id, "time log ownership check failed");
                Err(ApplicationError::Forbidden(reason))
            }
            EditDecision::Rejected { reason } => Err(ApplicationError::Domain(reason)),
        }
    }
}
