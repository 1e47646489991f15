// HTTP routes

mod http;

use axum::{Router, routing::get};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::service_info::ServiceInfoCollector;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) collector: Arc<ServiceInfoCollector>,
}

pub fn app(collector: Arc<ServiceInfoCollector>) -> Router {
    let state = AppState { collector };
    Router::new()
        .route("/", get(http::alive_handler)) // GET /
        .route("/info", get(http::info_handler)) // GET /info
        .route("/version", get(http::version_handler)) // GET /version
        .layer(CorsLayer::new().allow_origin(Any))
        .with_state(state)
}
