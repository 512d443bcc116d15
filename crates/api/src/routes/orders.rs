//! Order creation and listing endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use domain::{CreateOrderRequest, Order, validate_create_order};
use inventory::{InventoryCoordinator, ProductStore};
use orders::{OrderCoordinator, OrderStore};

use crate::error::ApiError;

/// Shared application state accessible from all handlers.
pub struct AppState<OS: OrderStore, PS: ProductStore> {
    pub orders: Arc<OrderCoordinator<OS>>,
    pub inventory: Arc<InventoryCoordinator<PS>>,
}

/// POST /orders — validate, persist, and kick off the fulfillment saga.
///
/// With synchronous dispatch the returned order already carries its
/// settled status.
#[tracing::instrument(skip(state, req))]
pub async fn create<OS: OrderStore + 'static, PS: ProductStore + 'static>(
    State(state): State<Arc<AppState<OS, PS>>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<Order>), ApiError> {
    let validated = validate_create_order(&req)?;
    let order = state.orders.create(validated).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

/// GET /orders — list every order.
#[tracing::instrument(skip(state))]
pub async fn list<OS: OrderStore + 'static, PS: ProductStore + 'static>(
    State(state): State<Arc<AppState<OS, PS>>>,
) -> Result<Json<Vec<Order>>, ApiError> {
    Ok(Json(state.orders.find_all().await?))
}
