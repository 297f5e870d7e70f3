// Template Renderer
// Pure mapping ResumeData + TemplateSelection -> HTML markup.
// `sections` decides what is shown; the three layout modules decide how.

pub mod classic;
pub mod creative;
pub mod document;
pub mod escape;
pub mod modern;
pub mod sections;

pub use document::render_document;

use crate::models::{ResumeData, TemplateSelection};
use crate::preview::Preview;
use sections::ResumeSections;

/// Markup shown in place of a resume while the name field is empty.
pub const PLACEHOLDER_HTML: &str = "<div class=\"preview-placeholder\">\n\
<i class=\"fas fa-file-alt\"></i>\n\
<p>Fill out the form to see your resume preview</p>\n\
</div>\n";

/// Renders `data` with the given template. Callers are expected to have checked
/// that `full_name` is present; see [`preview_for`].
pub fn render(data: &ResumeData, template: TemplateSelection) -> String {
    let sections = ResumeSections::from_data(data);
    match template {
        TemplateSelection::Modern => modern::render(&sections),
        TemplateSelection::Classic => classic::render(&sections),
        TemplateSelection::Creative => creative::render(&sections),
    }
}

/// The preview for the current form state: the placeholder when there is no
/// name, otherwise the rendered template.
pub fn preview_for(data: &ResumeData, template: TemplateSelection) -> Preview {
    if data.full_name.is_empty() {
        Preview::Placeholder
    } else {
        Preview::Rendered(render(data, template))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EducationEntry, ExperienceEntry};

    const ALL_TEMPLATES: [TemplateSelection; 3] = [
        TemplateSelection::Modern,
        TemplateSelection::Classic,
        TemplateSelection::Creative,
    ];

    fn full_resume() -> ResumeData {
        ResumeData {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: "+44 20 7946 0000".to_string(),
            location: "London".to_string(),
            linkedin: "https://linkedin.com/in/ada".to_string(),
            website: "https://ada.dev".to_string(),
            summary: "Wrote the first published algorithm.".to_string(),
            skills: "Math, Computing, Poetry".to_string(),
            experience: vec![
                ExperienceEntry {
                    job_title: "Translator".to_string(),
                    company: "Taylor's Scientific Memoirs".to_string(),
                    start_date: "1842".to_string(),
                    end_date: "1843".to_string(),
                    description: "Annotated Menabrea's paper.".to_string(),
                },
                ExperienceEntry {
                    job_title: "Collaborator".to_string(),
                    company: "Analytical Engine".to_string(),
                    ..Default::default()
                },
            ],
            education: vec![EducationEntry {
                degree: "Mathematics".to_string(),
                school: "Private tutoring".to_string(),
                graduation_year: "1835".to_string(),
                gpa: String::new(),
            }],
        }
    }

    #[test]
    fn test_empty_name_gives_placeholder_regardless_of_other_fields() {
        let mut data = full_resume();
        data.full_name.clear();
        for template in ALL_TEMPLATES {
            let preview = preview_for(&data, template);
            assert_eq!(preview, Preview::Placeholder);
            assert_eq!(preview.markup(), PLACEHOLDER_HTML);
        }
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let data = full_resume();
        for template in ALL_TEMPLATES {
            assert_eq!(render(&data, template), render(&data, template));
        }
    }

    #[test]
    fn test_every_template_shows_the_same_facts() {
        let data = full_resume();
        let facts = [
            "Ada Lovelace",
            "Wrote the first published algorithm.",
            "Math",
            "Computing",
            "Poetry",
            "Translator",
            "Taylor&#39;s Scientific Memoirs",
            "Collaborator",
            "Analytical Engine",
            "Mathematics",
            "Private tutoring",
            "1835",
        ];
        for template in ALL_TEMPLATES {
            let html = render(&data, template);
            for fact in facts {
                assert!(html.contains(fact), "{template} is missing {fact:?}");
            }
        }
    }

    #[test]
    fn test_sole_blank_experience_adds_no_section() {
        let data = ResumeData {
            full_name: "Ada".to_string(),
            experience: vec![ExperienceEntry::default()],
            education: vec![EducationEntry::default()],
            ..Default::default()
        };
        for template in ALL_TEMPLATES {
            let html = render(&data, template);
            assert!(!html.contains("Experience"), "{template}: {html}");
            assert!(!html.contains("Education"), "{template}: {html}");
            assert!(!html.contains("experience-entry"));
        }
    }

    #[test]
    fn test_no_empty_headings_for_missing_sections() {
        let data = ResumeData {
            full_name: "Ada".to_string(),
            ..Default::default()
        };
        let modern = render(&data, TemplateSelection::Modern);
        assert!(!modern.contains("<h2>"));
        let classic = render(&data, TemplateSelection::Classic);
        assert!(!classic.contains("<h2>"));
        // Creative always labels its contact block.
        let creative = render(&data, TemplateSelection::Creative);
        assert_eq!(creative.matches("<h2>").count(), 1);
    }

    #[test]
    fn test_classic_end_to_end() {
        let data = ResumeData {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            skills: "Math, Computing".to_string(),
            ..Default::default()
        };
        let html = render(&data, TemplateSelection::Classic);
        assert!(html.contains("<h1>Ada Lovelace</h1>"));
        assert!(html.contains(r#"<div class="contact-info">ada@example.com</div>"#));
        assert!(html.contains("<h2>Core Competencies</h2>"));
        assert!(html.contains("Math • Computing"));
    }

    #[test]
    fn test_field_text_cannot_inject_markup() {
        let data = ResumeData {
            full_name: "<img src=x onerror=alert(1)>".to_string(),
            summary: "</div><script>".to_string(),
            ..Default::default()
        };
        for template in ALL_TEMPLATES {
            let html = render(&data, template);
            assert!(!html.contains("<img"));
            assert!(!html.contains("<script>"));
            assert!(html.contains("&lt;img src=x onerror=alert(1)&gt;"));
        }
    }

    #[test]
    fn test_link_fields_never_become_live_links() {
        let data = ResumeData {
            full_name: "Ada".to_string(),
            linkedin: "javascript:alert(document.cookie)".to_string(),
            website: "javascript:alert(1)".to_string(),
            ..Default::default()
        };
        for template in [TemplateSelection::Modern, TemplateSelection::Creative] {
            let html = render(&data, template);
            assert!(!html.contains("javascript:"), "{template}: {html}");
            assert!(!html.contains("href"), "{template}: {html}");
            assert!(html.contains("LinkedIn"));
            assert!(html.contains("Website"));
        }
        // Classic prints the website verbatim as text, never as an attribute.
        let classic = render(&data, TemplateSelection::Classic);
        assert!(!classic.contains("href"));
    }
}
