pub mod config;
pub mod error;
pub mod models;
pub mod pdf;
pub mod routes;
pub mod services;
pub mod store;

use crate::services::quiz_service::QuizService;
use crate::store::SessionStore;
use reqwest::Client;

#[derive(Clone)]
pub struct AppState {
    pub quiz_service: QuizService,
    pub store: SessionStore,
}

impl AppState {
    pub fn new() -> Self {
        let config = crate::config::get_config();
        let http_client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .unwrap();

        Self {
            quiz_service: QuizService::new(
                config.openai_api_key.clone(),
                config.openai_base_url.clone(),
                config.openai_model.clone(),
                http_client,
            ),
            store: SessionStore::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
