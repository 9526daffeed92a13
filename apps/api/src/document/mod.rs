// The pure core: document model, field paths, edit operations, and the
// single-document store. Nothing in here knows about HTTP or sessions.

pub mod editor;
pub mod model;
pub mod path;
pub mod store;

pub use editor::{apply, EditError, EditOp};
pub use model::ResumeDocument;
pub use path::FieldPath;
pub use store::DocumentStore;
