use crate::modules::time_logs::adapters::outbound::repositories::{
    TimeLogRepository, get_owned_by,
};
use crate::modules::time_logs::core::errors::ApplicationError;
use crate::modules::time_logs::use_cases::delete_time_log::command::DeleteTimeLog;
use std::sync::Arc;

pub struct DeleteTimeLogHandler<TTimeLogs>
where
    TTimeLogs: TimeLogRepository + 'static,
{
    time_logs: Arc<TTimeLogs>,
}

impl<TTimeLogs> DeleteTimeLogHandler<TTimeLogs>
where
    TTimeLogs: TimeLogRepository + 'static,
{
    pub fn new(time_logs: Arc<TTimeLogs>) -> Self {
        Self { time_logs }
    }

    pub async fn handle(&self, command: DeleteTimeLog) -> Result<(), ApplicationError> {
        get_owned_by(&*self.time_logs, &command.time_log_id, &command.user_id).await?;
        self.time_logs.delete(&command.time_log_id).await?;
        tracing::info!(
            time_log_id = %command.time_log_id,
            user_id = %command.user_id,
            "time log deleted"
        );
        Ok(())
    }
}
