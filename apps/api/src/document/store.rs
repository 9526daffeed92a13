//! Single-document store: holds exactly one `ResumeDocument` at a time.
//!
//! No validation and no merge semantics — `replace` is an unconditional
//! overwrite, last write wins. Concurrency is the session layer's problem.

use tracing::debug;

use crate::document::model::ResumeDocument;

#[derive(Debug, Clone)]
pub struct DocumentStore {
    doc: ResumeDocument,
}

impl DocumentStore {
    pub fn new(doc: ResumeDocument) -> Self {
        DocumentStore { doc }
    }

    /// The current document value.
    pub fn get(&self) -> &ResumeDocument {
        &self.doc
    }

    /// Unconditionally replaces the held document.
    pub fn replace(&mut self, next: ResumeDocument) {
        debug!("document replaced");
        self.doc = next;
    }
}
