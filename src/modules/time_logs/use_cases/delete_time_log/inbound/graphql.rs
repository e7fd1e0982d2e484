use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::time_logs::use_cases::delete_time_log::command::DeleteTimeLog;
use crate::shell::auth::CurrentUser;
use crate::shell::graphql::application_error;
use crate::shell::state::AppState;

#[derive(Default)]
pub struct DeleteTimeLogMutation;

#[Object]
impl DeleteTimeLogMutation {
    async fn delete_time_log(&self, context: &Context<'_>, id: ID) -> GqlResult<bool> {
        let state = context.data_unchecked::<AppState>();
        let user = context.data::<CurrentUser>()?;
        state
            .delete_handler
            .handle(DeleteTimeLog {
                time_log_id: id.to_string(),
                user_id: user.user_id.clone(),
            })
            .await
            .map_err(application_error)?;
        Ok(true)
    }
}
