use tokio::net::TcpListener;
use todo_core::TodoList;
use todo_server::{
    config::ServerConfig,
    observability::{init_tracing, LogFormat},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    init_tracing(LogFormat::from_env());

    let config = ServerConfig::from_env()?;
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Running on http://{addr}");

    todo_server::run(listener, TodoList::seeded(), &config).await?;
    Ok(())
}
