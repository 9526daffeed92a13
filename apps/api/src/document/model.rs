//! Resume document model — the single in-memory value a session edits.
//!
//! Arrays are positionally ordered and index is the only identity: insert
//! appends, remove splices, reordering is unsupported. Every editor produces
//! a structurally new document; the model itself enforces nothing beyond its
//! shape (empty strings and zero-point entries are legal values).

use serde::{Deserialize, Serialize};

/// Named contact fields. Each is independently clearable to `""`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    pub phone: String,
    pub email: String,
    pub linkedin: String,
    pub github: String,
    pub website: String,
}

/// The closed set of contact field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContactField {
    Phone,
    Email,
    Linkedin,
    Github,
    Website,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Phone,
        ContactField::Email,
        ContactField::Linkedin,
        ContactField::Github,
        ContactField::Website,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ContactField::Phone => "phone",
            ContactField::Email => "email",
            ContactField::Linkedin => "linkedin",
            ContactField::Github => "github",
            ContactField::Website => "website",
        }
    }
}

impl Contact {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Phone => &self.phone,
            ContactField::Email => &self.email,
            ContactField::Linkedin => &self.linkedin,
            ContactField::Github => &self.github,
            ContactField::Website => &self.website,
        }
    }

    pub fn get_mut(&mut self, field: ContactField) -> &mut String {
        match field {
            ContactField::Phone => &mut self.phone,
            ContactField::Email => &mut self.email,
            ContactField::Linkedin => &mut self.linkedin,
            ContactField::Github => &mut self.github,
            ContactField::Website => &mut self.website,
        }
    }
}

/// The eight fixed heading keys. Keys never change; only labels are editable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeadingKey {
    Personal,
    Education,
    Experience,
    Projects,
    Research,
    Skills,
    Certifications,
    Positions,
}

impl HeadingKey {
    pub const ALL: [HeadingKey; 8] = [
        HeadingKey::Personal,
        HeadingKey::Education,
        HeadingKey::Experience,
        HeadingKey::Projects,
        HeadingKey::Research,
        HeadingKey::Skills,
        HeadingKey::Certifications,
        HeadingKey::Positions,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HeadingKey::Personal => "personal",
            HeadingKey::Education => "education",
            HeadingKey::Experience => "experience",
            HeadingKey::Projects => "projects",
            HeadingKey::Research => "research",
            HeadingKey::Skills => "skills",
            HeadingKey::Certifications => "certifications",
            HeadingKey::Positions => "positions",
        }
    }
}

/// User-renamable display labels, one per fixed heading key.
/// Labels carry no uniqueness constraint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Headings {
    pub personal: String,
    pub education: String,
    pub experience: String,
    pub projects: String,
    pub research: String,
    pub skills: String,
    pub certifications: String,
    pub positions: String,
}

impl Headings {
    pub fn label(&self, key: HeadingKey) -> &str {
        match key {
            HeadingKey::Personal => &self.personal,
            HeadingKey::Education => &self.education,
            HeadingKey::Experience => &self.experience,
            HeadingKey::Projects => &self.projects,
            HeadingKey::Research => &self.research,
            HeadingKey::Skills => &self.skills,
            HeadingKey::Certifications => &self.certifications,
            HeadingKey::Positions => &self.positions,
        }
    }

    pub fn label_mut(&mut self, key: HeadingKey) -> &mut String {
        match key {
            HeadingKey::Personal => &mut self.personal,
            HeadingKey::Education => &mut self.education,
            HeadingKey::Experience => &mut self.experience,
            HeadingKey::Projects => &mut self.projects,
            HeadingKey::Research => &mut self.research,
            HeadingKey::Skills => &mut self.skills,
            HeadingKey::Certifications => &mut self.certifications,
            HeadingKey::Positions => &mut self.positions,
        }
    }
}

/// Shared shape for experience and project items: a titled block with an
/// ordered list of bullet points. A fresh entry starts with one empty point;
/// a user may delete down to zero points, which renders as no bullet list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub points: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stack: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
}

impl Entry {
    /// The entry appended by `add_entry`: empty title, one empty point.
    pub fn new() -> Self {
        Entry {
            title: String::new(),
            points: vec![String::new()],
            link: None,
            stack: None,
            company: None,
            duration: None,
            location: None,
        }
    }
}

impl Default for Entry {
    fn default() -> Self {
        Entry::new()
    }
}

/// The Entry fields addressable by `update_entry_field`.
/// `points` is excluded — bullet points have their own operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryField {
    Title,
    Link,
    Stack,
    Company,
    Duration,
    Location,
}

/// The two sections that hold `Entry` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntrySection {
    Experience,
    Projects,
}

impl EntrySection {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntrySection::Experience => "experience",
            EntrySection::Projects => "projects",
        }
    }

    pub fn items<'a>(&self, doc: &'a ResumeDocument) -> &'a Vec<Entry> {
        match self {
            EntrySection::Experience => &doc.experience,
            EntrySection::Projects => &doc.projects,
        }
    }

    pub fn items_mut<'a>(&self, doc: &'a mut ResumeDocument) -> &'a mut Vec<Entry> {
        match self {
            EntrySection::Experience => &mut doc.experience,
            EntrySection::Projects => &mut doc.projects,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EducationItem {
    pub degree: String,
    pub university: String,
    pub details: String,
}

impl EducationItem {
    pub fn new() -> Self {
        EducationItem {
            degree: String::new(),
            university: String::new(),
            details: String::new(),
        }
    }
}

impl Default for EducationItem {
    fn default() -> Self {
        EducationItem::new()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Degree,
    University,
    Details,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchItem {
    pub title: String,
    pub subtitle: String,
    pub journal: String,
    pub points: Vec<String>,
}

impl ResearchItem {
    /// Fresh research item: empty scalar fields, one empty point.
    pub fn new() -> Self {
        ResearchItem {
            title: String::new(),
            subtitle: String::new(),
            journal: String::new(),
            points: vec![String::new()],
        }
    }
}

impl Default for ResearchItem {
    fn default() -> Self {
        ResearchItem::new()
    }
}

/// Research scalar fields; research points have their own operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResearchField {
    Title,
    Subtitle,
    Journal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

/// The whole resume. One value per session; edits replace it wholesale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeDocument {
    pub name: String,
    pub contact: Contact,
    pub headings: Headings,
    pub education: Vec<EducationItem>,
    pub experience: Vec<Entry>,
    pub projects: Vec<Entry>,
    pub research: Vec<ResearchItem>,
    pub skills: Vec<SkillGroup>,
    pub certifications: Vec<String>,
    pub positions: Vec<String>,
}

impl ResumeDocument {
    /// The fixed document every new session starts from.
    pub fn sample() -> Self {
        ResumeDocument {
            name: "John Doe".to_string(),
            contact: Contact {
                phone: "(555) 555-5555".to_string(),
                email: "john.doe@example.com".to_string(),
                linkedin: "https://linkedin.com/in/johndoe".to_string(),
                github: "https://github.com/johndoe".to_string(),
                website: "https://example.com".to_string(),
            },
            headings: Headings {
                personal: "Personal Details".to_string(),
                education: "Education".to_string(),
                experience: "Experience".to_string(),
                projects: "Projects".to_string(),
                research: "Research".to_string(),
                skills: "Technical Skills".to_string(),
                certifications: "Certifications".to_string(),
                positions: "Positions of Responsibility".to_string(),
            },
            education: vec![EducationItem {
                degree: "B.S. in Computer Science".to_string(),
                university: "Example University".to_string(),
                details: "Expected Graduation: 2026 • GPA: 3.5/4.0".to_string(),
            }],
            experience: vec![Entry {
                title: "Software Engineering Intern".to_string(),
                company: Some("Example Tech Co.".to_string()),
                duration: Some("Jun 2024 – Aug 2024".to_string()),
                location: Some("Remote".to_string()),
                points: vec![
                    "Worked on feature development for web applications using React and TypeScript."
                        .to_string(),
                    "Collaborated with cross-functional teams to ship improvements and fixes."
                        .to_string(),
                ],
                link: None,
                stack: None,
            }],
            projects: vec![Entry {
                title: "Example Project".to_string(),
                link: Some("https://github.com/johndoe/example-project".to_string()),
                stack: Some("React, TypeScript, Node.js".to_string()),
                points: vec![
                    "Implemented core features and UI for a sample project.".to_string(),
                    "Wrote unit tests and documentation.".to_string(),
                ],
                company: None,
                duration: None,
                location: None,
            }],
            research: vec![ResearchItem {
                title: "Example Research".to_string(),
                subtitle: "A short placeholder description of research work".to_string(),
                journal: "Presented at Example Conference".to_string(),
                points: vec![
                    "Summary point 1 about the research.".to_string(),
                    "Summary point 2 about methods or findings.".to_string(),
                ],
            }],
            skills: vec![
                SkillGroup {
                    category: "Languages".to_string(),
                    items: vec![
                        "JavaScript".to_string(),
                        "TypeScript".to_string(),
                        "Python".to_string(),
                    ],
                },
                SkillGroup {
                    category: "Frameworks".to_string(),
                    items: vec![
                        "React".to_string(),
                        "Next.js".to_string(),
                        "Node.js".to_string(),
                    ],
                },
            ],
            certifications: vec!["Example Certification (2024)".to_string()],
            positions: vec!["Student, Example University (2023 – Present)".to_string()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_document_has_all_sections_populated() {
        let doc = ResumeDocument::sample();
        assert!(!doc.name.is_empty());
        assert_eq!(doc.education.len(), 1);
        assert_eq!(doc.experience.len(), 1);
        assert_eq!(doc.projects.len(), 1);
        assert_eq!(doc.research.len(), 1);
        assert_eq!(doc.skills.len(), 2);
        assert_eq!(doc.certifications.len(), 1);
        assert_eq!(doc.positions.len(), 1);
    }

    #[test]
    fn test_new_entry_starts_with_one_empty_point() {
        let entry = Entry::new();
        assert_eq!(entry.title, "");
        assert_eq!(entry.points, vec![String::new()]);
        assert!(entry.company.is_none());
    }

    #[test]
    fn test_heading_label_roundtrip_for_every_key() {
        let mut doc = ResumeDocument::sample();
        for key in HeadingKey::ALL {
            *doc.headings.label_mut(key) = format!("label-{}", key.as_str());
        }
        for key in HeadingKey::ALL {
            assert_eq!(doc.headings.label(key), format!("label-{}", key.as_str()));
        }
    }

    #[test]
    fn test_contact_get_mut_targets_one_field() {
        let mut doc = ResumeDocument::sample();
        *doc.contact.get_mut(ContactField::Email) = "new@example.com".to_string();
        assert_eq!(doc.contact.email, "new@example.com");
        assert_eq!(doc.contact.phone, "(555) 555-5555");
    }

    #[test]
    fn test_entry_serde_omits_absent_optionals() {
        let json = serde_json::to_value(Entry::new()).expect("serialize");
        let obj = json.as_object().expect("object");
        assert!(obj.contains_key("title"));
        assert!(obj.contains_key("points"));
        assert!(!obj.contains_key("company"), "absent optionals are omitted");
        assert!(!obj.contains_key("link"));
    }
}
