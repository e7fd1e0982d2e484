pub mod commands;
pub mod employees;
pub mod projects;
pub mod time_logs;
pub mod state;
