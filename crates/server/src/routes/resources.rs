//! CRUD handlers shared by every resource collection.
//!
//! Handlers are generic over the record shape; each collection mounts them
//! with its own store as router state.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use models::Record;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{info, warn};

use crate::errors::JsonApiError;
use crate::state::SharedStore;

/// Routes for one collection: `GET|POST {base}` and `GET|PUT|DELETE {base}/:id`.
pub fn resource_router<T>(base: &str, store: SharedStore<T>) -> Router
where
    T: Record + Serialize + DeserializeOwned,
{
    Router::new()
        .route(base, get(list::<T>).post(create::<T>))
        .route(&format!("{base}/:id"), get(get_one::<T>).put(update::<T>).delete(remove::<T>))
        .with_state(store)
}

/// Decode a request body as JSON whatever its content-type header says.
fn decode<T>(body: &Bytes) -> Result<T, JsonApiError>
where
    T: Record + DeserializeOwned,
{
    serde_json::from_slice(body).map_err(|e| {
        warn!(kind = T::KIND, error = %e, "rejected payload");
        JsonApiError::bad_request("invalid request payload")
    })
}

pub async fn list<T>(State(store): State<SharedStore<T>>) -> Json<Vec<T>>
where
    T: Record + Serialize,
{
    Json(store.list_all())
}

pub async fn get_one<T>(
    State(store): State<SharedStore<T>>,
    Path(id): Path<String>,
) -> Result<Json<T>, JsonApiError>
where
    T: Record + Serialize,
{
    store
        .get_by_id(&id)
        .map(Json)
        .ok_or_else(|| JsonApiError::not_found(format!("{} not found", T::KIND)))
}

pub async fn create<T>(
    State(store): State<SharedStore<T>>,
    body: Bytes,
) -> Result<(StatusCode, Json<T>), JsonApiError>
where
    T: Record + Serialize + DeserializeOwned,
{
    let raw = decode(&body)?;
    let created = store.create(raw);
    info!(kind = T::KIND, id = %created.id(), "created record");
    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update<T>(
    State(store): State<SharedStore<T>>,
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<T>, JsonApiError>
where
    T: Record + Serialize + DeserializeOwned,
{
    let raw = decode(&body)?;
    let updated = store.update(&id, raw)?;
    info!(kind = T::KIND, id = %updated.id(), "updated record");
    Ok(Json(updated))
}

pub async fn remove<T>(
    State(store): State<SharedStore<T>>,
    Path(id): Path<String>,
) -> Result<StatusCode, JsonApiError>
where
    T: Record,
{
    if store.delete_by_id(&id) {
        info!(kind = T::KIND, %id, "deleted record");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(JsonApiError::not_found(format!("{} not found", T::KIND)))
    }
}
