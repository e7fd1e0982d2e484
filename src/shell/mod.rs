// Composition root: configuration, state wiring, HTTP routing, GraphQL schema
// and the request-level concerns (authenticated user, error responses).

pub mod auth;
pub mod config;
pub mod errors;
pub mod graphql;
pub mod http;
pub mod state;
