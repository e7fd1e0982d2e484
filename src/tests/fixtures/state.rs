use crate::modules::time_logs::adapters::outbound::repositories::TimeLogRepository;
use crate::modules::time_logs::adapters::outbound::repositories_in_memory::{
    InMemoryEmployees, InMemoryProjects, InMemoryTimeLogs,
};
use crate::shell::config::AppConfig;
use crate::shell::state::AppState;
use crate::tests::fixtures::commands::log_time::LogTimeBuilder;
use crate::tests::fixtures::employees::make_employee;
use crate::tests::fixtures::projects::make_projects;
use std::sync::Arc;

pub const OWNER: &str = "user-fixed-0001";
pub const OTHER_USER: &str = "user-other-0002";
pub const OWNED_ID: &str = "tl-fixed-0001";

/// State over empty time logs plus the fixture projects and employee.
pub fn make_test_state() -> (AppState, Arc<InMemoryTimeLogs>) {
    let time_logs = Arc::new(InMemoryTimeLogs::new());
    let state = AppState::new(
        AppConfig::default(),
        time_logs.clone(),
        Arc::new(InMemoryProjects::new(make_projects())),
        Arc::new(InMemoryEmployees::new(vec![make_employee()])),
    );
    (state, time_logs)
}

/// `make_test_state` with `OWNED_ID` already logged by `OWNER`.
pub async fn make_seeded_state() -> (AppState, Arc<InMemoryTimeLogs>) {
    let (state, time_logs) = make_test_state();
    time_logs
        .create(LogTimeBuilder::new().build().into_new_time_log())
        .await
        .expect("seed failed");
    (state, time_logs)
}

pub fn make_offline_time_logs_state() -> AppState {
    let mut time_logs = InMemoryTimeLogs::new();
    time_logs.toggle_offline();
    AppState::new(
        AppConfig::default(),
        Arc::new(time_logs),
        Arc::new(InMemoryProjects::new(make_projects())),
        Arc::new(InMemoryEmployees::default()),
    )
}
