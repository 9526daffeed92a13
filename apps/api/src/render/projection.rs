//! The display projection handed to the preview surface.
//!
//! A `RenderedResume` is a pure function of `(document, template)` — no
//! document references survive into it, and nothing here can reach back into
//! the store. Sections with an empty backing sequence never appear: a
//! template must omit them rather than emit an empty heading.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedResume {
    /// Name of the template that produced this projection.
    pub template: String,
    pub name: String,
    pub contact_links: Vec<ContactLink>,
    pub sections: Vec<RenderedSection>,
}

/// One link in the contact line. Cleared (empty) contact fields are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactLink {
    pub href: String,
    pub text: String,
}

/// One rendered section: the user's (possibly renamed) heading label plus
/// a body whose shape depends on the section kind.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSection {
    pub key: String,
    pub heading: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SectionBody {
    Education { items: Vec<EducationBlock> },
    Entries { items: Vec<EntryBlock> },
    Research { items: Vec<ResearchBlock> },
    Skills { lines: Vec<SkillLine> },
    Paragraph { text: String },
    Bullets { items: Vec<String> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EducationBlock {
    pub degree: String,
    pub university: String,
    pub details: String,
}

/// A titled block for experience/project items. Optional fields are `None`
/// both when absent and when edited down to `""`; `points` may be empty, in
/// which case no bullet list is rendered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryBlock {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    pub points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResearchBlock {
    pub title: String,
    pub subtitle: String,
    pub journal: String,
    pub points: Vec<String>,
}

/// `Category: item, item, item` — items pre-joined for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkillLine {
    pub category: String,
    pub items: String,
}

impl RenderedResume {
    /// The section rendered for `key`, if the template emitted one.
    pub fn section(&self, key: &str) -> Option<&RenderedSection> {
        self.sections.iter().find(|s| s.key == key)
    }
}
