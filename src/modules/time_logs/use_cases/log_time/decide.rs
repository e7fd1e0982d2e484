use crate::modules::time_logs::core::project::Project;
use crate::modules::time_logs::core::rules::check_details;
use crate::modules::time_logs::use_cases::log_time::{command::LogTime, decision::Decision};

/// `project` is the stored project matching `command.project_id`, if any.
pub fn decide_log_time(command: LogTime, project: Option<&Project>) -> Decision {
    match check_details(project, &command.task_name, command.time) {
        Ok(()) => Decision::Accepted {
            time_log: command.into_new_time_log(),
        },
        Err(reason) => Decision::Rejected { reason },
    }
}
