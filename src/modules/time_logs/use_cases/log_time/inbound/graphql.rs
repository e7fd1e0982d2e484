use async_graphql::{Context, Object, Result as GqlResult};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::time_logs::use_cases::list_time_logs::inbound::graphql::GqlTimeLog;
use crate::modules::time_logs::use_cases::log_time::command::LogTime;
use crate::shell::auth::CurrentUser;
use crate::shell::graphql::{application_error, parse_details};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct LogTimeMutation;

#[Object]
impl LogTimeMutation {
    async fn log_time(
        &self,
        context: &Context<'_>,
        project_id: String,
        task_name: String,
        time: f64,
        date: String,
    ) -> GqlResult<GqlTimeLog> {
        let state = context.data_unchecked::<AppState>();
        let user = context.data::<CurrentUser>()?;
        let details = parse_details(project_id, task_name, time, date)?;

        let command = LogTime {
            time_log_id: Uuid::now_v7().to_string(),
            user_id: user.user_id.clone(),
            project_id: details.project_id,
            task_name: details.task_name,
            time: details.time,
            date: details.date,
            created_at: Utc::now().timestamp_millis(),
        };

        let created = state
            .log_time_handler
            .handle(command)
            .await
            .map_err(application_error)?;
        Ok(created.into())
    }
}
