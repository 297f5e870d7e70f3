//! Classic template: pipe-separated contact line, combined entry headings,
//! bullet-joined competencies.

use crate::render::sections::{graduation_line, ResumeSections};

pub fn render(s: &ResumeSections) -> String {
    let mut html = String::from("<div class=\"resume-template classic-template\">\n");

    let c = &s.contact;
    let contact_line = [
        c.email.clone(),
        c.phone.clone(),
        c.location.clone(),
        c.linkedin.as_ref().map(|_| "LinkedIn Profile".to_string()),
        c.website.clone(),
    ]
    .into_iter()
    .flatten()
    .collect::<Vec<_>>()
    .join(" | ");

    html.push_str(&format!(
        "<div class=\"resume-header\">\n<h1>{}</h1>\n<div class=\"contact-info\">{}</div>\n</div>\n",
        s.full_name, contact_line
    ));

    if let Some(summary) = &s.summary {
        html.push_str(&format!(
            "<div class=\"section\">\n<h2>Objective</h2>\n<p>{summary}</p>\n</div>\n"
        ));
    }

    if !s.experience.is_empty() {
        html.push_str("<div class=\"section\">\n<h2>Professional Experience</h2>\n");
        for exp in &s.experience {
            html.push_str(&format!(
                "<div class=\"experience-entry\">\n<h3>{} - {}</h3>\n<div class=\"date-range\">{} to {}</div>\n<p>{}</p>\n</div>\n",
                exp.job_title, exp.company, exp.start_date, exp.end_date, exp.description
            ));
        }
        html.push_str("</div>\n");
    }

    if !s.education.is_empty() {
        html.push_str("<div class=\"section\">\n<h2>Education</h2>\n");
        for edu in &s.education {
            html.push_str(&format!(
                "<div class=\"education-entry\">\n<h3>{} - {}</h3>\n<div class=\"date-range\">{}</div>\n</div>\n",
                edu.degree,
                edu.school,
                graduation_line(edu, "GPA: ")
            ));
        }
        html.push_str("</div>\n");
    }

    if !s.skills.is_empty() {
        html.push_str(&format!(
            "<div class=\"section\">\n<h2>Core Competencies</h2>\n<p>{}</p>\n</div>\n",
            s.skills.join(" • ")
        ));
    }

    html.push_str("</div>\n");
    html
}
