use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::time_logs::adapters::inbound::form::{TimeLogForm, ValidationErrors};
use crate::modules::time_logs::adapters::inbound::{messages, paths, views};
use crate::modules::time_logs::core::errors::ApplicationError;
use crate::modules::time_logs::use_cases::log_time::command::LogTime;
use crate::shared::infrastructure::flash::{self, FlashMessage};
use crate::shell::auth::CurrentUser;
use crate::shell::state::AppState;

async fn render_form(state: &AppState, form: &TimeLogForm, errors: &ValidationErrors) -> Response {
    match state.list_handler.projects().await {
        Ok(projects) => Html(views::create_page(&projects, form, errors)).into_response(),
        Err(error) => error.into_response(),
    }
}

async fn reject(state: &AppState, form: &TimeLogForm, errors: &ValidationErrors) -> Response {
    let page = render_form(state, form, errors).await;
    if page.status() != StatusCode::OK {
        return page;
    }
    (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()
}

pub async fn create(State(state): State<AppState>, _user: CurrentUser) -> Response {
    render_form(&state, &TimeLogForm::default(), &ValidationErrors::default()).await
}

/// The owner is always the authenticated user; the form has no `user_id`.
pub async fn store(
    State(state): State<AppState>,
    user: CurrentUser,
    Form(form): Form<TimeLogForm>,
) -> Response {
    let details = match form.parse() {
        Ok(details) => details,
        Err(errors) => return reject(&state, &form, &errors).await,
    };

    let command = LogTime {
        time_log_id: Uuid::now_v7().to_string(),
        user_id: user.user_id,
        project_id: details.project_id,
        task_name: details.task_name,
        time: details.time,
        date: details.date,
        created_at: Utc::now().timestamp_millis(),
    };

    match state.log_time_handler.handle(command).await {
        Ok(created) => flash::redirect_with(
            &paths::edit(&created.time_log_id),
            &FlashMessage::success(messages::STORE_SUCCESS),
        ),
        Err(ApplicationError::Domain(reason)) => {
            reject(&state, &form, &ValidationErrors::from(&reason)).await
        }
        Err(error) => error.into_response(),
    }
}
