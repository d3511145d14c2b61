//! A small upstream for trying the relay by hand.
//!
//! ```text
//! cargo run --example mock_upstream
//! cargo run -- &
//! curl 'http://localhost:8080/fetch?url=http://127.0.0.1:8081/json'
//! ```

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Redirect},
    routing::get,
    Router,
};
use std::net::SocketAddr;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let app = Router::new()
        .route("/", get(|| async { "Hello from the pretend upstream!" }))
        .route(
            "/json",
            get(|| async { ([(header::CONTENT_TYPE, "application/json")], r#"{"ok":true}"#) }),
        )
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, "nothing here").into_response() }),
        )
        .route("/moved", get(|| async { Redirect::temporary("/") }));

    let addr = SocketAddr::from(([127, 0, 0, 1], 8081));
    println!("Mock upstream listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
