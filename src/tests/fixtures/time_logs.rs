use crate::modules::time_logs::core::time_log::TimeLog;
use crate::tests::fixtures::commands::log_time::LogTimeBuilder;

/// The stored counterpart of `LogTimeBuilder::new().build()`.
pub fn make_time_log() -> TimeLog {
    TimeLog::from_new(LogTimeBuilder::new().build().into_new_time_log())
}
