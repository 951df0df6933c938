use std::sync::Arc;

use crate::application::services::EmbeddingService;

#[derive(Clone)]
pub struct AppState {
    pub embedding_service: Arc<EmbeddingService>,
}

impl AppState {
    pub fn new(embedding_service: Arc<EmbeddingService>) -> Self {
        Self { embedding_service }
    }
}
