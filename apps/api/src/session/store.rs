//! Session lifecycle: one `DocumentStore` per editing session, keyed by id.
//!
//! The document lives exactly as long as its session — created from the
//! sample default, replaced wholesale on every accepted edit, dropped on
//! session end. Nothing is persisted. The write lock is held for one
//! apply-and-replace, so each session sees single-writer, run-to-completion
//! edit semantics.

use std::collections::HashMap;

use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::document::{apply, DocumentStore, EditOp, ResumeDocument};
use crate::errors::AppError;

pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, DocumentStore>>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore {
            sessions: RwLock::new(HashMap::new()),
        }
    }

    /// Starts a session seeded with the fixed default document.
    pub async fn create(&self) -> (Uuid, ResumeDocument) {
        let id = Uuid::new_v4();
        let doc = ResumeDocument::sample();
        self.sessions
            .write()
            .await
            .insert(id, DocumentStore::new(doc.clone()));
        info!(session_id = %id, "session created");
        (id, doc)
    }

    /// The session's current document.
    pub async fn document(&self, id: Uuid) -> Result<ResumeDocument, AppError> {
        self.sessions
            .read()
            .await
            .get(&id)
            .map(|store| store.get().clone())
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }

    /// Applies one edit command. On success the store's document is replaced
    /// and the new value returned; on failure the stored document is
    /// untouched and the error surfaces to the caller.
    pub async fn apply(&self, id: Uuid, op: &EditOp) -> Result<ResumeDocument, AppError> {
        let mut sessions = self.sessions.write().await;
        let store = sessions
            .get_mut(&id)
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))?;

        match apply(store.get(), op) {
            Ok(next) => {
                store.replace(next.clone());
                Ok(next)
            }
            Err(e) => {
                warn!(session_id = %id, error = %e, "edit rejected");
                Err(e.into())
            }
        }
    }

    /// Ends the session; its document is dropped.
    pub async fn remove(&self, id: Uuid) -> Result<(), AppError> {
        self.sessions
            .write()
            .await
            .remove(&id)
            .map(|_| info!(session_id = %id, "session ended"))
            .ok_or_else(|| AppError::NotFound(format!("Session {id} not found")))
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        SessionStore::new()
    }
}
