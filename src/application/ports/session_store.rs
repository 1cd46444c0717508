use std::sync::Arc;

use async_trait::async_trait;

use crate::application::services::DocumentSession;
use crate::domain::SessionId;

#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn insert(&self, session: Arc<DocumentSession>);
    async fn get(&self, id: SessionId) -> Option<Arc<DocumentSession>>;
    async fn remove(&self, id: SessionId) -> Option<Arc<DocumentSession>>;
    async fn len(&self) -> usize;
}
