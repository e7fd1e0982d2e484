use axum::{
    Json,
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use std::collections::HashMap;

use crate::shared::infrastructure::datatable::DataTableRequest;
use crate::shell::auth::CurrentUser;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    user: CurrentUser,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let request = DataTableRequest::from_params(
        &params,
        state.config.table.default_page_length,
        state.config.table.max_page_length,
    );
    match state.table_handler.handle(&user.user_id, &request).await {
        Ok(table) => Json(table).into_response(),
        Err(error) => error.into_response(),
    }
}
