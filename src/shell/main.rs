use employee_time::shell::config::AppConfig;
use employee_time::shell::http::router;
use employee_time::shell::state::AppState;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log.level))?;
    fmt().with_env_filter(filter).init();

    let addr = config.socket_addr()?;
    tracing::info!(
        projects = config.seed.projects.len(),
        employees = config.seed.employees.len(),
        "in-memory directory seeded"
    );
    let app = router(AppState::in_memory(config));

    tracing::info!("Time logs: http://{}/employee/time", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
