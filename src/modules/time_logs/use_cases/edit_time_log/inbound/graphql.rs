use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::Utc;

use crate::modules::time_logs::use_cases::edit_time_log::command::EditTimeLog;
use crate::modules::time_logs::use_cases::list_time_logs::inbound::graphql::GqlTimeLog;
use crate::shell::auth::CurrentUser;
use crate::shell::graphql::{application_error, parse_details};
use crate::shell::state::AppState;

#[derive(Default)]
pub struct EditTimeLogMutation;

#[Object]
impl EditTimeLogMutation {
    async fn edit_time_log(
        &self,
        context: &Context<'_>,
        id: ID,
        project_id: String,
        task_name: String,
        time: f64,
        date: String,
    ) -> GqlResult<GqlTimeLog> {
        let state = context.data_unchecked::<AppState>();
        let user = context.data::<CurrentUser>()?;
        // ownership before input, as on the HTML form
        state
            .edit_handler
            .load(&id, &user.user_id)
            .await
            .map_err(application_error)?;
        let details = parse_details(project_id, task_name, time, date)?;

        let command = EditTimeLog {
            time_log_id: id.to_string(),
            user_id: user.user_id.clone(),
            project_id: details.project_id,
            task_name: details.task_name,
            time: details.time,
            date: details.date,
            updated_at: Utc::now().timestamp_millis(),
        };

        let updated = state
            .edit_handler
            .handle(command)
            .await
            .map_err(application_error)?;
        Ok(updated.into())
    }
}
