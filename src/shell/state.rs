use crate::modules::time_logs::adapters::outbound::repositories_in_memory::{
    InMemoryEmployees, InMemoryProjects, InMemoryTimeLogs,
};
use crate::modules::time_logs::use_cases::delete_time_log::handler::DeleteTimeLogHandler;
use crate::modules::time_logs::use_cases::edit_time_log::handler::EditTimeLogHandler;
use crate::modules::time_logs::use_cases::list_time_logs::handler::ListTimeLogsHandler;
use crate::modules::time_logs::use_cases::log_time::handler::LogTimeHandler;
use crate::modules::time_logs::use_cases::time_logs_table::handler::TimeLogsTableHandler;
use crate::shell::config::AppConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub list_handler:
        Arc<ListTimeLogsHandler<InMemoryTimeLogs, InMemoryProjects, InMemoryEmployees>>,
    pub table_handler: Arc<TimeLogsTableHandler<InMemoryTimeLogs, InMemoryProjects>>,
    pub log_time_handler: Arc<LogTimeHandler<InMemoryTimeLogs, InMemoryProjects>>,
    pub edit_handler: Arc<EditTimeLogHandler<InMemoryTimeLogs, InMemoryProjects>>,
    pub delete_handler: Arc<DeleteTimeLogHandler<InMemoryTimeLogs>>,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        time_logs: Arc<InMemoryTimeLogs>,
        projects: Arc<InMemoryProjects>,
        employees: Arc<InMemoryEmployees>,
    ) -> Self {
        Self {
            config: Arc::new(config),
            list_handler: Arc::new(ListTimeLogsHandler::new(
                time_logs.clone(),
                projects.clone(),
                employees,
            )),
            table_handler: Arc::new(TimeLogsTableHandler::new(
                time_logs.clone(),
                projects.clone(),
            )),
            log_time_handler: Arc::new(LogTimeHandler::new(time_logs.clone(), projects.clone())),
            edit_handler: Arc::new(EditTimeLogHandler::new(time_logs.clone(), projects)),
            delete_handler: Arc::new(DeleteTimeLogHandler::new(time_logs)),
        }
    }

    /// Empty time logs, with projects and employees taken from `config.seed`.
    pub fn in_memory(config: AppConfig) -> Self {
        let projects = Arc::new(InMemoryProjects::new(config.seed.projects.clone()));
        let employees = Arc::new(InMemoryEmployees::new(config.seed.employees.clone()));
        Self::new(
            config,
            Arc::new(InMemoryTimeLogs::new()),
            projects,
            employees,
        )
    }
}
