//! Minimal printable HTML writer over a `RenderedResume`.
//!
//! Visual design is the stylesheet's job; this emits semantic structure only
//! (the host page prints it via the platform print facility).

use crate::render::projection::{RenderedResume, SectionBody};

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

fn push_bullets(out: &mut String, points: &[String]) {
    // A zero-point entry gets no list element at all.
    if points.is_empty() {
        return;
    }
    out.push_str("<ul>");
    for point in points {
        out.push_str(&format!("<li>{}</li>", escape(point)));
    }
    out.push_str("</ul>");
}

pub fn render_html(resume: &RenderedResume) -> String {
    let mut out = String::new();
    out.push_str("<article class=\"resume-page\">");

    out.push_str("<header>");
    out.push_str(&format!("<h1>{}</h1>", escape(&resume.name)));
    if !resume.contact_links.is_empty() {
        out.push_str("<p class=\"contact\">");
        for (i, link) in resume.contact_links.iter().enumerate() {
            if i > 0 {
                out.push_str(" | ");
            }
            out.push_str(&format!(
                "<a href=\"{}\">{}</a>",
                escape(&link.href),
                escape(&link.text)
            ));
        }
        out.push_str("</p>");
    }
    out.push_str("</header>");

    for section in &resume.sections {
        out.push_str(&format!("<section class=\"{}\">", escape(&section.key)));
        out.push_str(&format!("<h2>{}</h2>", escape(&section.heading)));
        match &section.body {
            SectionBody::Education { items } => {
                for item in items {
                    out.push_str(&format!(
                        "<div><h3>{}</h3><p>{}</p><p>{}</p></div>",
                        escape(&item.degree),
                        escape(&item.university),
                        escape(&item.details)
                    ));
                }
            }
            SectionBody::Entries { items } => {
                for item in items {
                    out.push_str("<div>");
                    out.push_str(&format!("<h3>{}</h3>", escape(&item.title)));
                    for meta in [&item.company, &item.duration, &item.location, &item.stack] {
                        if let Some(text) = meta {
                            out.push_str(&format!("<p>{}</p>", escape(text)));
                        }
                    }
                    if let Some(link) = &item.link {
                        out.push_str(&format!("<a href=\"{}\">Link</a>", escape(link)));
                    }
                    push_bullets(&mut out, &item.points);
                    out.push_str("</div>");
                }
            }
            SectionBody::Research { items } => {
                for item in items {
                    out.push_str(&format!(
                        "<div><h3>{}</h3><p>{}</p><p>{}</p>",
                        escape(&item.title),
                        escape(&item.subtitle),
                        escape(&item.journal)
                    ));
                    push_bullets(&mut out, &item.points);
                    out.push_str("</div>");
                }
            }
            SectionBody::Skills { lines } => {
                for line in lines {
                    out.push_str(&format!(
                        "<p><strong>{}: </strong>{}</p>",
                        escape(&line.category),
                        escape(&line.items)
                    ));
                }
            }
            SectionBody::Paragraph { text } => {
                out.push_str(&format!("<p>{}</p>", escape(text)));
            }
            SectionBody::Bullets { items } => {
                push_bullets(&mut out, items);
            }
        }
        out.push_str("</section>");
    }

    out.push_str("</article>");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::ResumeDocument;
    use crate::render::{HarvardTemplate, ResumeTemplate};

    fn html_for(doc: &ResumeDocument) -> String {
        render_html(&HarvardTemplate.project(doc))
    }

    #[test]
    fn test_html_contains_name_and_headings() {
        let html = html_for(&ResumeDocument::sample());
        assert!(html.contains("<h1>John Doe</h1>"));
        assert!(html.contains("<h2>Technical Skills</h2>"));
        assert!(html.contains("<h2>Positions of Responsibility</h2>"));
    }

    #[test]
    fn test_html_omits_empty_section_heading() {
        let mut doc = ResumeDocument::sample();
        doc.certifications.clear();
        let html = html_for(&doc);
        assert!(!html.contains("Certifications"));
    }

    #[test]
    fn test_html_escapes_user_text() {
        let mut doc = ResumeDocument::sample();
        doc.name = "Jane <script>alert(1)</script> Doe".to_string();
        let html = html_for(&doc);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_html_zero_point_entry_has_no_list() {
        let mut doc = ResumeDocument::sample();
        doc.projects[0].points.clear();
        let html = html_for(&doc);
        let projects = html
            .split("<section class=\"projects\">")
            .nth(1)
            .and_then(|rest| rest.split("</section>").next())
            .expect("projects section present");
        assert!(!projects.contains("<ul>"), "no bullet list for zero points");
    }
}
