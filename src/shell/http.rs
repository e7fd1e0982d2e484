use axum::{
    Extension, Router,
    routing::{get, post, put},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::modules::time_logs::adapters::inbound::paths;
use crate::modules::time_logs::use_cases::delete_time_log::inbound::http as delete_http;
use crate::modules::time_logs::use_cases::edit_time_log::inbound::http as edit_http;
use crate::modules::time_logs::use_cases::list_time_logs::inbound::http as list_http;
use crate::modules::time_logs::use_cases::log_time::inbound::http as log_time_http;
use crate::modules::time_logs::use_cases::time_logs_table::inbound::http as table_http;
use crate::shell::graphql::{self, build_schema};
use crate::shell::state::AppState;

async fn health() -> &'static str {
    "ok"
}

pub fn router(state: AppState) -> Router {
    let schema = build_schema(state.clone());

    Router::new()
        .route(
            paths::INDEX,
            get(list_http::handle).post(log_time_http::store),
        )
        .route(paths::DATATABLE, get(table_http::handle))
        .route(paths::CREATE, get(log_time_http::create))
        .route(paths::EDIT, get(edit_http::edit))
        .route(
            paths::MEMBER,
            put(edit_http::update)
                .post(edit_http::update)
                .delete(delete_http::handle),
        )
        .route(paths::DELETE, post(delete_http::handle))
        .route(
            graphql::ENDPOINT,
            get(graphql::graphiql).post(graphql::graphql),
        )
        .route("/health", get(health))
        .layer(Extension(schema))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
