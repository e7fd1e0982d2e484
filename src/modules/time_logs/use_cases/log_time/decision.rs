use crate::modules::time_logs::core::rules::DecideError;
use crate::modules::time_logs::core::time_log::NewTimeLog;

pub enum Decision {
    Accepted { time_log: NewTimeLog },
    Rejected { reason: DecideError },
}
