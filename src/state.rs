//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{DocumentService, DocumentTypeService};
use crate::domain::repositories::{DocumentRepository, DocumentTypeRepository};
use crate::infrastructure::persistence::MemoryStore;

/// Services shared by all requests.
///
/// The store handle is passed explicitly through this state; there is no
/// global connection.
#[derive(Clone)]
pub struct AppState {
    pub document_service: Arc<DocumentService>,
    pub document_type_service: Arc<DocumentTypeService>,
}

impl AppState {
    /// Wires services on top of a pair of repositories.
    pub fn new(
        documents: Arc<dyn DocumentRepository>,
        document_types: Arc<dyn DocumentTypeRepository>,
    ) -> Self {
        Self {
            document_service: Arc::new(DocumentService::new(documents, document_types.clone())),
            document_type_service: Arc::new(DocumentTypeService::new(document_types)),
        }
    }

    /// State backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        let store = Arc::new(MemoryStore::new());
        Self::new(store.clone(), store)
    }
}
