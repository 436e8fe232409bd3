//! API Routes

pub mod health;
pub mod registro;

use axum::{routing::get, Router};
use std::sync::Arc;

use crate::ApiState;

pub fn router() -> Router<Arc<ApiState>> {
    Router::new().route("/api/registro", get(health::probe).post(registro::receive))
}
