use axum::{
    extract::State,
    http::HeaderMap,
    response::{Html, IntoResponse, Response},
};

use crate::modules::time_logs::adapters::inbound::views;
use crate::shared::infrastructure::flash::{self, FlashMessage};
use crate::shell::auth::CurrentUser;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    user: CurrentUser,
    headers: HeaderMap,
) -> Response {
    let message = FlashMessage::from_headers(&headers);
    match state.list_handler.overview(&user.user_id).await {
        Ok(overview) => flash::consume(
            message.as_ref(),
            Html(views::index_page(
                &overview.projects,
                overview.employee.as_ref(),
                message.as_ref(),
            )),
        ),
        Err(error) => error.into_response(),
    }
}
