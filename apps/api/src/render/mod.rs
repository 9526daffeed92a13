// Template-keyed rendering: the store's document is handed read-only to a
// template chosen by name; the result is a display projection, never a
// mutation. New templates register here.

pub mod harvard;
pub mod html;
pub mod projection;

use std::collections::HashMap;
use std::sync::Arc;

use crate::document::ResumeDocument;

pub use harvard::HarvardTemplate;
pub use html::render_html;
pub use projection::RenderedResume;

/// A resume template projects a document into its display form.
pub trait ResumeTemplate: Send + Sync {
    fn name(&self) -> &'static str;
    fn project(&self, doc: &ResumeDocument) -> RenderedResume;
}

/// Name → template mapping. Unrecognized keys resolve to the fallback
/// template rather than an error, so a stale template choice still previews.
pub struct TemplateRegistry {
    templates: HashMap<&'static str, Arc<dyn ResumeTemplate>>,
    fallback: Arc<dyn ResumeTemplate>,
}

impl TemplateRegistry {
    /// The built-in set: `harvard` only, which is also the fallback.
    pub fn builtin() -> Self {
        let harvard: Arc<dyn ResumeTemplate> = Arc::new(HarvardTemplate);
        let mut templates: HashMap<&'static str, Arc<dyn ResumeTemplate>> = HashMap::new();
        templates.insert(harvard.name(), Arc::clone(&harvard));
        TemplateRegistry {
            templates,
            fallback: harvard,
        }
    }

    pub fn resolve(&self, key: &str) -> Arc<dyn ResumeTemplate> {
        self.templates
            .get(key)
            .map(Arc::clone)
            .unwrap_or_else(|| Arc::clone(&self.fallback))
    }
}

impl Default for TemplateRegistry {
    fn default() -> Self {
        TemplateRegistry::builtin()
    }
}
