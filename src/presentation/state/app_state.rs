use std::sync::Arc;

use crate::application::ports::SessionValidator;
use crate::application::services::GenerationService;

#[derive(Clone)]
pub struct AppState {
    pub generation_service: Arc<GenerationService>,
    pub session_validator: Arc<dyn SessionValidator>,
}
