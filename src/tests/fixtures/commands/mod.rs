pub mod edit_time_log;
pub mod log_time;
