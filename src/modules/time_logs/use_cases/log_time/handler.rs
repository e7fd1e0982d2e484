use crate::modules::time_logs::adapters::outbound::repositories::{
    ProjectRepository, TimeLogRepository,
};
use crate::modules::time_logs::core::errors::ApplicationError;
use crate::modules::time_logs::core::time_log::TimeLog;
use crate::modules::time_logs::use_cases::log_time::command::LogTime;
use crate::modules::time_logs::use_cases::log_time::decide::decide_log_time;
use crate::modules::time_logs::use_cases::log_time::decision::Decision;
use std::sync::Arc;

pub struct LogTimeHandler<TTimeLogs, TProjects>
where
    TTimeLogs: TimeLogRepository + 'static,
    TProjects: ProjectRepository + 'static,
{
    time_logs: Arc<TTimeLogs>,
    projects: Arc<TProjects>,
}

impl<TTimeLogs, TProjects> LogTimeHandler<TTimeLogs, TProjects>
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

    pub async fn handle(&self, command: LogTime) -> Result<TimeLog, ApplicationError> {
        let project = self.projects.get_by_id(&command.project_id).await?;
        match decide_log_time(command, project.as_ref()) {
            Decision::Accepted { time_log } => {
                let created = self.time_logs.create(time_log).await?;
                tracing::info!(
                    time_log_id = %created.time_log_id,
                    user_id = %created.user_id,
                    "time log created"
                );
                Ok(created)
            }
            Decision::Rejected { reason } => Err(ApplicationError::Domain(reason)),
        }
    }
}
