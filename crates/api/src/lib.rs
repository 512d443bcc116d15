//! HTTP API server and wiring for the fulfillment choreography.
//!
//! Exposes order creation and listings over REST, with structured
//! logging (tracing) and Prometheus metrics. The saga participants are
//! wired here: one explicitly constructed bus instance, both
//! coordinators, and their subscriptions.

pub mod auth;
pub mod config;
pub mod error;
pub mod routes;

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use bus::EventBus;
use domain::{ORDER_CREATED_TOPIC, ORDER_PROCESSED_TOPIC};
use inventory::{
    InMemoryProductStore, InventoryCoordinator, OrderCreatedSubscriber, ProductStore,
};
use metrics_exporter_prometheus::PrometheusHandle;
use orders::{InMemoryOrderStore, OrderCoordinator, OrderProcessedSubscriber, OrderStore};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use auth::AuthToken;
use routes::orders::AppState;

/// Creates the Axum application router with all routes and shared state.
///
/// `POST /orders` and `GET /orders` sit behind the bearer-token guard;
/// the inventory listing and operational endpoints are open.
pub fn create_app<OS: OrderStore + 'static, PS: ProductStore + 'static>(
    state: Arc<AppState<OS, PS>>,
    metrics_handle: PrometheusHandle,
    auth_token: AuthToken,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    let guarded = Router::new()
        .route("/orders", post(routes::orders::create::<OS, PS>))
        .route("/orders", get(routes::orders::list::<OS, PS>))
        .route_layer(axum::middleware::from_fn_with_state(
            auth_token,
            auth::require_bearer,
        ))
        .with_state(state.clone());

    Router::new()
        .route("/health", get(routes::health::check))
        .route("/inventory", get(routes::inventory::list::<OS, PS>))
        .with_state(state)
        .merge(guarded)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Creates the default application state over in-memory stores and
/// registers both saga subscriptions on a fresh bus.
///
/// The inventory coordinator subscribes to `order_created` and the order
/// coordinator to `order_processed`; nothing else touches either store.
pub fn create_default_state() -> (
    Arc<AppState<InMemoryOrderStore, InMemoryProductStore>>,
    EventBus,
) {
    let bus = EventBus::new();
    let order_store = InMemoryOrderStore::new();
    let product_store = InMemoryProductStore::new();

    let order_coordinator = Arc::new(OrderCoordinator::new(order_store, bus.clone()));
    let inventory_coordinator = Arc::new(InventoryCoordinator::new(product_store, bus.clone()));

    bus.subscribe(
        ORDER_CREATED_TOPIC,
        Arc::new(OrderCreatedSubscriber::new(inventory_coordinator.clone())),
    );
    bus.subscribe(
        ORDER_PROCESSED_TOPIC,
        Arc::new(OrderProcessedSubscriber::new(order_coordinator.clone())),
    );

    let state = Arc::new(AppState {
        orders: order_coordinator,
        inventory: inventory_coordinator,
    });

    (state, bus)
}
