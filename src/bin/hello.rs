// ABOUTME: Minimal embedded-server bootstrap serving a single hard-coded page.
// ABOUTME: Demonstrates the server wiring without the REST dispatcher or the store.

use axum::Router;
use axum::response::Html;
use axum::routing::get;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hello=debug".parse().unwrap()),
        )
        .init();

    let app = Router::new().route("/example", get(hello));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:7070").await?;
    tracing::info!("hello server listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

/// GET /example - A plain page, embedded-server style.
async fn hello() -> Html<&'static str> {
    Html("<h1>Hello from the embedded roster server</h1>")
}
