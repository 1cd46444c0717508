use std::sync::Arc;

use crate::application::services::DocumentAssistant;
use crate::presentation::config::Settings;

#[derive(Clone)]
pub struct AppState {
    pub assistant: Arc<DocumentAssistant>,
    pub settings: Arc<Settings>,
}
