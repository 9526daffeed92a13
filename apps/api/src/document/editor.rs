//! Pure edit operations over `ResumeDocument`.
//!
//! Every operation takes the current document by reference and returns a
//! structurally new one; the input is never touched. A failed operation
//! returns only the error, so the caller's document is unchanged by
//! construction. Operations that cannot fail return the document directly.
//!
//! `EditOp` is the wire-level dispatch form: one variant per operation,
//! carrying section/path/field names as strings that are parsed here into
//! the closed enums before any mutation happens.

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::document::model::{
    ContactField, EducationField, EducationItem, Entry, EntryField, EntrySection, HeadingKey,
    ResearchField, ResearchItem, ResumeDocument,
};
use crate::document::path::FieldPath;

/// Everything that can go wrong while editing. All failures are synchronous
/// and local; nothing is retried.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EditError {
    #[error("invalid field path: {0}")]
    InvalidFieldPath(String),

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("invalid section key: {0}")]
    InvalidSectionKey(String),
}

fn guard_index(index: usize, len: usize) -> Result<(), EditError> {
    if index < len {
        Ok(())
    } else {
        Err(EditError::IndexOutOfRange { index, len })
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scalar fields, headings, contact
// ────────────────────────────────────────────────────────────────────────────

/// Replaces exactly the leaf named by `path`; every other field is untouched.
/// Total: an invalid path cannot be constructed (see `FieldPath`).
pub fn set_scalar_field(doc: &ResumeDocument, path: FieldPath, value: &str) -> ResumeDocument {
    let mut next = doc.clone();
    match path {
        FieldPath::Name => next.name = value.to_string(),
        FieldPath::Contact(field) => *next.contact.get_mut(field) = value.to_string(),
    }
    next
}

/// Replaces the display label for one fixed heading key.
pub fn set_heading(doc: &ResumeDocument, key: HeadingKey, value: &str) -> ResumeDocument {
    let mut next = doc.clone();
    *next.headings.label_mut(key) = value.to_string();
    next
}

/// Sets the named contact field to `""`. Clearing an already-empty field is
/// a no-op in content, but still yields a fresh document.
pub fn clear_contact_field(doc: &ResumeDocument, field: ContactField) -> ResumeDocument {
    let mut next = doc.clone();
    next.contact.get_mut(field).clear();
    next
}

// ────────────────────────────────────────────────────────────────────────────
// Entry sections (experience, projects)
// ────────────────────────────────────────────────────────────────────────────

/// Appends a fresh `Entry { title: "", points: [""] }`. Existing indices
/// are unchanged.
pub fn add_entry(section: EntrySection, doc: &ResumeDocument) -> ResumeDocument {
    let mut next = doc.clone();
    section.items_mut(&mut next).push(Entry::new());
    next
}

/// Removes the entry at `index`; later entries shift down by one.
pub fn remove_entry(
    section: EntrySection,
    doc: &ResumeDocument,
    index: usize,
) -> Result<ResumeDocument, EditError> {
    guard_index(index, section.items(doc).len())?;
    let mut next = doc.clone();
    section.items_mut(&mut next).remove(index);
    Ok(next)
}

/// Replaces one named field of the entry at `index`.
pub fn update_entry_field(
    section: EntrySection,
    doc: &ResumeDocument,
    index: usize,
    field: EntryField,
    value: &str,
) -> Result<ResumeDocument, EditError> {
    guard_index(index, section.items(doc).len())?;
    let mut next = doc.clone();
    let entry = &mut section.items_mut(&mut next)[index];
    match field {
        EntryField::Title => entry.title = value.to_string(),
        EntryField::Link => entry.link = Some(value.to_string()),
        EntryField::Stack => entry.stack = Some(value.to_string()),
        EntryField::Company => entry.company = Some(value.to_string()),
        EntryField::Duration => entry.duration = Some(value.to_string()),
        EntryField::Location => entry.location = Some(value.to_string()),
    }
    Ok(next)
}

/// Replaces one bullet point of the entry at `entry_index`.
pub fn set_point(
    section: EntrySection,
    doc: &ResumeDocument,
    entry_index: usize,
    point_index: usize,
    value: &str,
) -> Result<ResumeDocument, EditError> {
    guard_index(entry_index, section.items(doc).len())?;
    guard_index(point_index, section.items(doc)[entry_index].points.len())?;
    let mut next = doc.clone();
    section.items_mut(&mut next)[entry_index].points[point_index] = value.to_string();
    Ok(next)
}

/// Appends an empty bullet point to the entry at `entry_index`.
pub fn add_point(
    section: EntrySection,
    doc: &ResumeDocument,
    entry_index: usize,
) -> Result<ResumeDocument, EditError> {
    guard_index(entry_index, section.items(doc).len())?;
    let mut next = doc.clone();
    section.items_mut(&mut next)[entry_index]
        .points
        .push(String::new());
    Ok(next)
}

/// Splices one bullet point out. An entry may legally end up with zero
/// points; the renderer then emits no bullet list for it.
pub fn remove_point(
    section: EntrySection,
    doc: &ResumeDocument,
    entry_index: usize,
    point_index: usize,
) -> Result<ResumeDocument, EditError> {
    guard_index(entry_index, section.items(doc).len())?;
    guard_index(point_index, section.items(doc)[entry_index].points.len())?;
    let mut next = doc.clone();
    section.items_mut(&mut next)[entry_index]
        .points
        .remove(point_index);
    Ok(next)
}

// ────────────────────────────────────────────────────────────────────────────
// Education
// ────────────────────────────────────────────────────────────────────────────

pub fn add_education(doc: &ResumeDocument) -> ResumeDocument {
    let mut next = doc.clone();
    next.education.push(EducationItem::new());
    next
}

pub fn update_education(
    doc: &ResumeDocument,
    index: usize,
    field: EducationField,
    value: &str,
) -> Result<ResumeDocument, EditError> {
    guard_index(index, doc.education.len())?;
    let mut next = doc.clone();
    let item = &mut next.education[index];
    match field {
        EducationField::Degree => item.degree = value.to_string(),
        EducationField::University => item.university = value.to_string(),
        EducationField::Details => item.details = value.to_string(),
    }
    Ok(next)
}

pub fn remove_education(doc: &ResumeDocument, index: usize) -> Result<ResumeDocument, EditError> {
    guard_index(index, doc.education.len())?;
    let mut next = doc.clone();
    next.education.remove(index);
    Ok(next)
}

// ────────────────────────────────────────────────────────────────────────────
// Research
// ────────────────────────────────────────────────────────────────────────────

pub fn add_research(doc: &ResumeDocument) -> ResumeDocument {
    let mut next = doc.clone();
    next.research.push(ResearchItem::new());
    next
}

pub fn update_research(
    doc: &ResumeDocument,
    index: usize,
    field: ResearchField,
    value: &str,
) -> Result<ResumeDocument, EditError> {
    guard_index(index, doc.research.len())?;
    let mut next = doc.clone();
    let item = &mut next.research[index];
    match field {
        ResearchField::Title => item.title = value.to_string(),
        ResearchField::Subtitle => item.subtitle = value.to_string(),
        ResearchField::Journal => item.journal = value.to_string(),
    }
    Ok(next)
}

pub fn remove_research(doc: &ResumeDocument, index: usize) -> Result<ResumeDocument, EditError> {
    guard_index(index, doc.research.len())?;
    let mut next = doc.clone();
    next.research.remove(index);
    Ok(next)
}

pub fn set_research_point(
    doc: &ResumeDocument,
    index: usize,
    point_index: usize,
    value: &str,
) -> Result<ResumeDocument, EditError> {
    guard_index(index, doc.research.len())?;
    guard_index(point_index, doc.research[index].points.len())?;
    let mut next = doc.clone();
    next.research[index].points[point_index] = value.to_string();
    Ok(next)
}

pub fn add_research_point(doc: &ResumeDocument, index: usize) -> Result<ResumeDocument, EditError> {
    guard_index(index, doc.research.len())?;
    let mut next = doc.clone();
    next.research[index].points.push(String::new());
    Ok(next)
}

pub fn remove_research_point(
    doc: &ResumeDocument,
    index: usize,
    point_index: usize,
) -> Result<ResumeDocument, EditError> {
    guard_index(index, doc.research.len())?;
    guard_index(point_index, doc.research[index].points.len())?;
    let mut next = doc.clone();
    next.research[index].points.remove(point_index);
    Ok(next)
}

// ────────────────────────────────────────────────────────────────────────────
// Wire-level parsing for the enumerated keys
// ────────────────────────────────────────────────────────────────────────────

impl FromStr for EntrySection {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "experience" => Ok(EntrySection::Experience),
            "projects" => Ok(EntrySection::Projects),
            other => Err(EditError::InvalidSectionKey(other.to_string())),
        }
    }
}

impl FromStr for HeadingKey {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeadingKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| EditError::InvalidSectionKey(s.to_string()))
    }
}

impl FromStr for EntryField {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(EntryField::Title),
            "link" => Ok(EntryField::Link),
            "stack" => Ok(EntryField::Stack),
            "company" => Ok(EntryField::Company),
            "duration" => Ok(EntryField::Duration),
            "location" => Ok(EntryField::Location),
            other => Err(EditError::InvalidFieldPath(other.to_string())),
        }
    }
}

impl FromStr for EducationField {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "degree" => Ok(EducationField::Degree),
            "university" => Ok(EducationField::University),
            "details" => Ok(EducationField::Details),
            other => Err(EditError::InvalidFieldPath(format!("education.{other}"))),
        }
    }
}

impl FromStr for ResearchField {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "title" => Ok(ResearchField::Title),
            "subtitle" => Ok(ResearchField::Subtitle),
            "journal" => Ok(ResearchField::Journal),
            other => Err(EditError::InvalidFieldPath(format!("research.{other}"))),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Reducer-style dispatch
// ────────────────────────────────────────────────────────────────────────────

/// One edit command, as posted by the editor UI. Section, path, and field
/// names arrive as strings and are validated against the closed enums before
/// the operation runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum EditOp {
    SetField { path: String, value: String },
    SetHeading { key: String, value: String },
    ClearContactField { field: String },
    AddEntry { section: String },
    RemoveEntry { section: String, index: usize },
    UpdateEntryField { section: String, index: usize, field: String, value: String },
    SetPoint { section: String, entry: usize, point: usize, value: String },
    AddPoint { section: String, entry: usize },
    RemovePoint { section: String, entry: usize, point: usize },
    AddEducation,
    UpdateEducation { index: usize, field: String, value: String },
    RemoveEducation { index: usize },
    AddResearch,
    UpdateResearch { index: usize, field: String, value: String },
    RemoveResearch { index: usize },
    SetResearchPoint { index: usize, point: usize, value: String },
    AddResearchPoint { index: usize },
    RemoveResearchPoint { index: usize, point: usize },
}

/// Applies one command to the document, producing the next document.
/// On any error the input document is the still-current state.
pub fn apply(doc: &ResumeDocument, op: &EditOp) -> Result<ResumeDocument, EditError> {
    match op {
        EditOp::SetField { path, value } => {
            let path: FieldPath = path.parse()?;
            Ok(set_scalar_field(doc, path, value))
        }
        EditOp::SetHeading { key, value } => {
            let key: HeadingKey = key.parse()?;
            Ok(set_heading(doc, key, value))
        }
        EditOp::ClearContactField { field } => {
            let field: ContactField = field.parse()?;
            Ok(clear_contact_field(doc, field))
        }
        EditOp::AddEntry { section } => Ok(add_entry(section.parse()?, doc)),
        EditOp::RemoveEntry { section, index } => remove_entry(section.parse()?, doc, *index),
        EditOp::UpdateEntryField {
            section,
            index,
            field,
            value,
        } => update_entry_field(section.parse()?, doc, *index, field.parse()?, value),
        EditOp::SetPoint {
            section,
            entry,
            point,
            value,
        } => set_point(section.parse()?, doc, *entry, *point, value),
        EditOp::AddPoint { section, entry } => add_point(section.parse()?, doc, *entry),
        EditOp::RemovePoint {
            section,
            entry,
            point,
        } => remove_point(section.parse()?, doc, *entry, *point),
        EditOp::AddEducation => Ok(add_education(doc)),
        EditOp::UpdateEducation {
            index,
            field,
            value,
        } => update_education(doc, *index, field.parse()?, value),
        EditOp::RemoveEducation { index } => remove_education(doc, *index),
        EditOp::AddResearch => Ok(add_research(doc)),
        EditOp::UpdateResearch {
            index,
            field,
            value,
        } => update_research(doc, *index, field.parse()?, value),
        EditOp::RemoveResearch { index } => remove_research(doc, *index),
        EditOp::SetResearchPoint {
            index,
            point,
            value,
        } => set_research_point(doc, *index, *point, value),
        EditOp::AddResearchPoint { index } => add_research_point(doc, *index),
        EditOp::RemoveResearchPoint { index, point } => {
            remove_research_point(doc, *index, *point)
        }
    }
}
