use std::sync::Arc;

use crate::domain::{ApiKey, Backend};

use super::{GenerationError, TextGenerator};

/// Builds a generation client bound to one credential.
pub trait GeneratorFactory: Send + Sync {
    fn create(
        &self,
        backend: Backend,
        api_key: ApiKey,
    ) -> Result<Arc<dyn TextGenerator>, GenerationError>;
}
