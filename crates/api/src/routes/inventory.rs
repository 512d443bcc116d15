//! Inventory listing endpoint.

use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use domain::Product;
use inventory::ProductStore;
use orders::OrderStore;

use crate::error::ApiError;
use crate::routes::orders::AppState;

/// GET /inventory — list the catalog with current stock. Unauthenticated.
#[tracing::instrument(skip(state))]
pub async fn list<OS: OrderStore + 'static, PS: ProductStore + 'static>(
    State(state): State<Arc<AppState<OS, PS>>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    Ok(Json(state.inventory.find_all().await?))
}
