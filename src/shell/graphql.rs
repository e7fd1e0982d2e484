use async_graphql::http::GraphiQLSource;
use async_graphql::{EmptySubscription, ErrorExtensions, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::Extension;
use axum::response::Html;

use crate::modules::time_logs::adapters::inbound::form::{TimeLogForm, TimeLogDetails, ValidationErrors};
use crate::modules::time_logs::core::errors::ApplicationError;
use crate::modules::time_logs::use_cases::delete_time_log::inbound::graphql::DeleteTimeLogMutation;
use crate::modules::time_logs::use_cases::edit_time_log::inbound::graphql::EditTimeLogMutation;
pub use crate::modules::time_logs::use_cases::list_time_logs::inbound::graphql::QueryRoot;
use crate::modules::time_logs::use_cases::log_time::inbound::graphql::LogTimeMutation;
use crate::shell::auth::CurrentUser;
pub use crate::shell::state::AppState;

pub const ENDPOINT: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct MutationRoot(LogTimeMutation, EditTimeLogMutation, DeleteTimeLogMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot, MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(
    Extension(schema): Extension<AppSchema>,
    user: CurrentUser,
    request: GraphQLRequest,
) -> GraphQLResponse {
    schema.execute(request.into_inner().data(user)).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(ENDPOINT).finish())
}

pub fn application_error(error: ApplicationError) -> async_graphql::Error {
    let code = match &error {
        ApplicationError::NotFound(_) => "NOT_FOUND",
        ApplicationError::Forbidden(_) => "FORBIDDEN",
        ApplicationError::Domain(_) => "BAD_USER_INPUT",
        ApplicationError::Repository(source) => {
            tracing::error!(error = %source, "time log repository error");
            "INTERNAL_SERVER_ERROR"
        }
    };
    let field = match &error {
        ApplicationError::Domain(reason) => Some(reason.field()),
        _ => None,
    };
    let message = match &error {
        ApplicationError::NotFound(_) => error.to_string(),
        ApplicationError::Forbidden(_) => "This action is unauthorized.".to_string(),
        ApplicationError::Domain(reason) => ValidationErrors::from(reason)
            .iter()
            .map(|(_, message)| message.to_string())
            .collect(),
        ApplicationError::Repository(_) => "Server Error.".to_string(),
    };
    async_graphql::Error::new(message).extend_with(|_, extensions| {
        extensions.set("code", code);
        if let Some(field) = field {
            extensions.set("field", field);
        }
    })
}

fn validation_error(errors: ValidationErrors) -> async_graphql::Error {
    let message = errors
        .iter()
        .map(|(_, message)| message)
        .collect::<Vec<_>>()
        .join(" ");
    let fields: Vec<String> = errors.iter().map(|(field, _)| field.to_string()).collect();
    async_graphql::Error::new(message).extend_with(|_, extensions| {
        extensions.set("code", "BAD_USER_INPUT");
        extensions.set("fields", fields.clone());
    })
}

/// Mutation arguments go through the same checks as the HTML form.
pub fn parse_details(
    project_id: String,
    task_name: String,
    time: f64,
    date: String,
) -> async_graphql::Result<TimeLogDetails> {
    TimeLogForm {
        project_id,
        task_name,
        time: time.to_string(),
        date,
    }
    .parse()
    .map_err(validation_error)
}
