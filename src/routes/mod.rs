pub mod health;
pub mod pages;
pub mod quiz;
pub mod upload;

use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(pages::index))
        .route("/health", get(health::health))
        .route("/upload", post(upload::upload_files))
        .route("/generate-quiz", post(quiz::generate_quiz))
        .with_state(state)
}
