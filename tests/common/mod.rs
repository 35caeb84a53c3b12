//! Shared utilities for integration testing.

use std::sync::Arc;

use tokio::net::TcpListener;

use shape_service::config::ServiceConfig;
use shape_service::http::HttpServer;
use shape_service::registry::{Shape, ShapeRegistry};

/// Start a service instance with the default seed on an ephemeral port and
/// return its base URL.
pub async fn start_service() -> String {
    start_service_with_seed(ServiceConfig::default().registry.seed).await
}

/// Start a service instance with the given seed on an ephemeral port.
pub async fn start_service_with_seed(seed: Vec<Shape>) -> String {
    let config = ServiceConfig::default();
    let registry = Arc::new(ShapeRegistry::new(seed));
    let router = HttpServer::new(&config, registry).router();

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    format!("http://{addr}")
}

/// Shorthand for building a record.
pub fn shape(name: &str, sides: i64, id: i64) -> Shape {
    Shape {
        item_name: name.to_string(),
        no_of_sides: sides,
        id,
    }
}
