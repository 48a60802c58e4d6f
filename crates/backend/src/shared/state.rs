use std::sync::Arc;

use super::directory::FacilityDirectory;

/// Общее состояние обработчиков
#[derive(Clone)]
pub struct AppState {
    pub directory: Arc<dyn FacilityDirectory>,
}
