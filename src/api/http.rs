//! HTTP transport for the item catalogue. Uses axum for routing.
//!
//! ## Routes
//!
//! - `GET /api/items` — all items, in insertion order.
//! - `GET /api/items/:id` — one item, or 404.
//! - `POST /api/items` — create from `{ name, description, price }`; 201 or 400.
//! - `PUT /api/items/:id` — overwrite any subset of the fields; 200 or 404.
//! - `DELETE /api/items/:id` — 204 with an empty body, or 404.
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use items_api::{api, InMemoryItemRepository};
//!
//! let repo = Arc::new(InMemoryItemRepository::seeded());
//!
//! // Get the router to compose with other axum routes
//! let app = api::router(repo.clone());
//!
//! // Or serve directly
//! api::serve(repo, "0.0.0.0:3000").await?;
//! ```

use std::future::Future;
use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use tracing::{debug, info};

use super::body::decode_input;
use super::error::ApiError;
use crate::item::Item;
use crate::repository::ItemRepository;

/// Build an axum `Router` serving the item endpoints from `repo`.
pub fn router<R: ItemRepository + 'static>(repo: Arc<R>) -> Router {
    Router::new()
        .route("/api/items", get(list_items::<R>).post(create_item::<R>))
        .route(
            "/api/items/:id",
            get(get_item::<R>)
                .put(update_item::<R>)
                .delete(delete_item::<R>),
        )
        .with_state(repo)
}

/// Serve the item endpoints at the given address (e.g. `"0.0.0.0:3000"`).
pub async fn serve<R: ItemRepository + 'static>(
    repo: Arc<R>,
    addr: &str,
) -> Result<(), std::io::Error> {
    serve_with_shutdown(repo, addr, std::future::pending()).await
}

/// Like [`serve`], but stops accepting connections once `shutdown` resolves
/// and returns after in-flight requests finish.
pub async fn serve_with_shutdown<R, F>(
    repo: Arc<R>,
    addr: &str,
    shutdown: F,
) -> Result<(), std::io::Error>
where
    R: ItemRepository + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let app = router(repo);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(addr = %listener.local_addr()?, "item api listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
}

/// `GET /api/items`
async fn list_items<R: ItemRepository + 'static>(
    State(repo): State<Arc<R>>,
) -> Result<Json<Vec<Item>>, ApiError> {
    let items = repo.list()?;
    debug!(count = items.len(), "listed items");
    Ok(Json(items))
}

/// `GET /api/items/:id`
async fn get_item<R: ItemRepository + 'static>(
    State(repo): State<Arc<R>>,
    Path(id): Path<String>,
) -> Result<Json<Item>, ApiError> {
    let item = repo.get_raw(&id).inspect_err(|e| debug!(%id, error = %e, "get failed"))?;
    Ok(Json(item))
}

/// `POST /api/items`
async fn create_item<R: ItemRepository + 'static>(
    State(repo): State<Arc<R>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let input = decode_input(&headers, &body)?;
    let item = repo
        .create(input)
        .inspect_err(|e| debug!(error = ?e, "create rejected"))?;
    info!(id = item.id, name = %item.name, "item created");
    Ok((StatusCode::CREATED, Json(item)))
}

/// `PUT /api/items/:id`
async fn update_item<R: ItemRepository + 'static>(
    State(repo): State<Arc<R>>,
    Path(id): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<Item>, ApiError> {
    let input = decode_input(&headers, &body)?;
    let item = repo
        .update_raw(&id, input)
        .inspect_err(|e| debug!(%id, error = %e, "update failed"))?;
    info!(id = item.id, "item updated");
    Ok(Json(item))
}

/// `DELETE /api/items/:id`
async fn delete_item<R: ItemRepository + 'static>(
    State(repo): State<Arc<R>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    repo.delete_raw(&id)
        .inspect_err(|e| debug!(%id, error = %e, "delete failed"))?;
    info!(%id, "item deleted");
    Ok(StatusCode::NO_CONTENT)
}
