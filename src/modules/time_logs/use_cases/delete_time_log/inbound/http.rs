use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};

use crate::modules::time_logs::adapters::inbound::{messages, paths};
use crate::modules::time_logs::use_cases::delete_time_log::command::DeleteTimeLog;
use crate::shared::infrastructure::flash::{self, FlashMessage};
use crate::shell::auth::CurrentUser;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(time_log_id): Path<String>,
) -> Response {
    let command = DeleteTimeLog {
        time_log_id,
        user_id: user.user_id,
    };
    match state.delete_handler.handle(command).await {
        Ok(()) => flash::redirect_with(
            paths::INDEX,
            &FlashMessage::success(messages::DELETE_SUCCESS),
        ),
        Err(error) => error.into_response(),
    }
}
