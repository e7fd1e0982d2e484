use axum::{
    Form,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
};
use chrono::Utc;

use crate::modules::time_logs::adapters::inbound::form::{TimeLogForm, ValidationErrors};
use crate::modules::time_logs::adapters::inbound::views::{self, EditPage};
use crate::modules::time_logs::adapters::inbound::{messages, paths};
use crate::modules::time_logs::core::errors::ApplicationError;
use crate::modules::time_logs::core::time_log::TimeLog;
use crate::modules::time_logs::use_cases::edit_time_log::command::EditTimeLog;
use crate::shared::infrastructure::flash::{self, FlashMessage};
use crate::shell::auth::CurrentUser;
use crate::shell::state::AppState;

async fn render_form(
    state: &AppState,
    time_log: &TimeLog,
    form: &TimeLogForm,
    errors: &ValidationErrors,
    message: Option<&FlashMessage>,
) -> Response {
    match state.list_handler.projects().await {
        Ok(projects) => Html(views::edit_page(EditPage {
            time_log_id: &time_log.time_log_id,
            title: &time_log.task_name,
            projects: &projects,
            form,
            errors,
            flash: message,
        }))
        .into_response(),
        Err(error) => error.into_response(),
    }
}

pub async fn edit(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(time_log_id): Path<String>,
    headers: HeaderMap,
) -> Response {
    let time_log = match state.edit_handler.load(&time_log_id, &user.user_id).await {
        Ok(time_log) => time_log,
        Err(error) => return error.into_response(),
    };
    let message = FlashMessage::from_headers(&headers);
    let page = render_form(
        &state,
        &time_log,
        &TimeLogForm::from_time_log(&time_log),
        &ValidationErrors::default(),
        message.as_ref(),
    )
    .await;
    flash::consume(message.as_ref(), page)
}

/// Ownership is checked before the form is looked at.
pub async fn update(
    State(state): State<AppState>,
    user: CurrentUser,
    Path(time_log_id): Path<String>,
    Form(form): Form<TimeLogForm>,
) -> Response {
    let current = match state.edit_handler.load(&time_log_id, &user.user_id).await {
        Ok(time_log) => time_log,
        Err(error) => return error.into_response(),
    };

    let errors = match form.parse() {
        Ok(details) => {
            let command = EditTimeLog {
                time_log_id,
                user_id: user.user_id,
                project_id: details.project_id,
                task_name: details.task_name,
                time: details.time,
                date: details.date,
                updated_at: Utc::now().timestamp_millis(),
            };
            match state.edit_handler.handle(command).await {
                Ok(updated) => {
                    return flash::redirect_with(
                        &paths::edit(&updated.time_log_id),
                        &FlashMessage::success(messages::UPDATE_SUCCESS),
                    );
                }
                Err(ApplicationError::Domain(reason)) => ValidationErrors::from(&reason),
                Err(error) => return error.into_response(),
            }
        }
        Err(errors) => errors,
    };

    let page = render_form(&state, &current, &form, &errors, None).await;
    if page.status() != StatusCode::OK {
        return page;
    }
    (StatusCode::UNPROCESSABLE_ENTITY, page).into_response()
}
