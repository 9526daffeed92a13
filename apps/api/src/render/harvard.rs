//! The Harvard template: classic single-column layout, section order
//! education → experience → projects → research → skills → certifications →
//! positions. Certifications are joined with `"; "` into one paragraph,
//! skills render as `Category: a, b, c` lines, positions as a bullet list.

use crate::document::model::{Entry, HeadingKey, ResumeDocument};
use crate::render::projection::{
    ContactLink, EducationBlock, EntryBlock, RenderedResume, RenderedSection, ResearchBlock,
    SectionBody, SkillLine,
};
use crate::render::ResumeTemplate;

pub struct HarvardTemplate;

/// Empty-string optionals are treated as absent; the preview never shows a
/// blank italic line.
fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

fn contact_links(doc: &ResumeDocument) -> Vec<ContactLink> {
    let c = &doc.contact;
    let mut links = Vec::new();
    if !c.phone.is_empty() {
        links.push(ContactLink {
            href: format!("tel:{}", c.phone),
            text: c.phone.clone(),
        });
    }
    if !c.email.is_empty() {
        links.push(ContactLink {
            href: format!("mailto:{}", c.email),
            text: c.email.clone(),
        });
    }
    if !c.linkedin.is_empty() {
        links.push(ContactLink {
            href: c.linkedin.clone(),
            text: "LinkedIn".to_string(),
        });
    }
    if !c.github.is_empty() {
        links.push(ContactLink {
            href: c.github.clone(),
            text: "GitHub".to_string(),
        });
    }
    if !c.website.is_empty() {
        links.push(ContactLink {
            href: c.website.clone(),
            text: "Website".to_string(),
        });
    }
    links
}

fn entry_blocks(entries: &[Entry]) -> Vec<EntryBlock> {
    entries
        .iter()
        .map(|e| EntryBlock {
            title: e.title.clone(),
            company: non_empty(&e.company),
            duration: non_empty(&e.duration),
            location: non_empty(&e.location),
            stack: non_empty(&e.stack),
            link: non_empty(&e.link),
            points: e.points.clone(),
        })
        .collect()
}

impl ResumeTemplate for HarvardTemplate {
    fn name(&self) -> &'static str {
        "harvard"
    }

    fn project(&self, doc: &ResumeDocument) -> RenderedResume {
        let mut sections = Vec::new();
        let mut push = |key: HeadingKey, body: SectionBody| {
            sections.push(RenderedSection {
                key: key.as_str().to_string(),
                heading: doc.headings.label(key).to_string(),
                body,
            });
        };

        if !doc.education.is_empty() {
            push(
                HeadingKey::Education,
                SectionBody::Education {
                    items: doc
                        .education
                        .iter()
                        .map(|e| EducationBlock {
                            degree: e.degree.clone(),
                            university: e.university.clone(),
                            details: e.details.clone(),
                        })
                        .collect(),
                },
            );
        }

        if !doc.experience.is_empty() {
            push(
                HeadingKey::Experience,
                SectionBody::Entries {
                    items: entry_blocks(&doc.experience),
                },
            );
        }

        if !doc.projects.is_empty() {
            push(
                HeadingKey::Projects,
                SectionBody::Entries {
                    items: entry_blocks(&doc.projects),
                },
            );
        }

        if !doc.research.is_empty() {
            push(
                HeadingKey::Research,
                SectionBody::Research {
                    items: doc
                        .research
                        .iter()
                        .map(|r| ResearchBlock {
                            title: r.title.clone(),
                            subtitle: r.subtitle.clone(),
                            journal: r.journal.clone(),
                            points: r.points.clone(),
                        })
                        .collect(),
                },
            );
        }

        if !doc.skills.is_empty() {
            push(
                HeadingKey::Skills,
                SectionBody::Skills {
                    lines: doc
                        .skills
                        .iter()
                        .map(|s| SkillLine {
                            category: s.category.clone(),
                            items: s.items.join(", "),
                        })
                        .collect(),
                },
            );
        }

        if !doc.certifications.is_empty() {
            push(
                HeadingKey::Certifications,
                SectionBody::Paragraph {
                    text: doc.certifications.join("; "),
                },
            );
        }

        if !doc.positions.is_empty() {
            push(
                HeadingKey::Positions,
                SectionBody::Bullets {
                    items: doc.positions.clone(),
                },
            );
        }

        RenderedResume {
            template: self.name().to_string(),
            name: doc.name.clone(),
            contact_links: contact_links(doc),
            sections,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::editor::{clear_contact_field, set_heading};
    use crate::document::model::ContactField;

    fn project(doc: &ResumeDocument) -> RenderedResume {
        HarvardTemplate.project(doc)
    }

    #[test]
    fn test_empty_certifications_section_is_omitted_entirely() {
        let mut doc = ResumeDocument::sample();
        doc.certifications.clear();
        let rendered = project(&doc);
        assert!(rendered.section("certifications").is_none());
        assert!(
            !rendered
                .sections
                .iter()
                .any(|s| s.heading == "Certifications"),
            "no Certifications heading may appear"
        );
    }

    #[test]
    fn test_every_empty_section_is_omitted() {
        let mut doc = ResumeDocument::sample();
        doc.education.clear();
        doc.experience.clear();
        doc.projects.clear();
        doc.research.clear();
        doc.skills.clear();
        doc.certifications.clear();
        doc.positions.clear();
        let rendered = project(&doc);
        assert!(rendered.sections.is_empty());
        assert_eq!(rendered.name, doc.name, "header still renders");
    }

    #[test]
    fn test_renamed_heading_flows_into_projection() {
        let doc = set_heading(
            &ResumeDocument::sample(),
            HeadingKey::Skills,
            "Core Competencies",
        );
        let rendered = project(&doc);
        assert_eq!(
            rendered.section("skills").expect("skills present").heading,
            "Core Competencies"
        );
    }

    #[test]
    fn test_zero_point_entry_renders_no_bullets() {
        let mut doc = ResumeDocument::sample();
        doc.experience[0].points.clear();
        let rendered = project(&doc);
        match &rendered.section("experience").expect("present").body {
            SectionBody::Entries { items } => {
                assert!(items[0].points.is_empty(), "no bullets, but entry renders")
            }
            other => panic!("expected Entries body, got {other:?}"),
        }
    }

    #[test]
    fn test_cleared_contact_field_drops_its_link() {
        let doc = clear_contact_field(&ResumeDocument::sample(), ContactField::Website);
        let rendered = project(&doc);
        assert_eq!(rendered.contact_links.len(), 4);
        assert!(!rendered.contact_links.iter().any(|l| l.text == "Website"));
    }

    #[test]
    fn test_skills_items_joined_for_display() {
        let rendered = project(&ResumeDocument::sample());
        match &rendered.section("skills").expect("present").body {
            SectionBody::Skills { lines } => {
                assert_eq!(lines[0].category, "Languages");
                assert_eq!(lines[0].items, "JavaScript, TypeScript, Python");
            }
            other => panic!("expected Skills body, got {other:?}"),
        }
    }

    #[test]
    fn test_certifications_joined_with_semicolons() {
        let mut doc = ResumeDocument::sample();
        doc.certifications.push("Second Cert (2025)".to_string());
        let rendered = project(&doc);
        match &rendered.section("certifications").expect("present").body {
            SectionBody::Paragraph { text } => {
                assert_eq!(text, "Example Certification (2024); Second Cert (2025)")
            }
            other => panic!("expected Paragraph body, got {other:?}"),
        }
    }

    #[test]
    fn test_projection_never_mutates_the_document() {
        let doc = ResumeDocument::sample();
        let before = doc.clone();
        let _ = project(&doc);
        assert_eq!(doc, before);
    }
}
