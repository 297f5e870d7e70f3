//! Creative template: two columns. The sidebar holds name, contact, skills and
//! education; the main column holds the summary and experience.

use crate::render::sections::{graduation_line, ResumeSections};

pub fn render(s: &ResumeSections) -> String {
    let mut html = String::from("<div class=\"resume-template creative-template\">\n");

    // Sidebar
    html.push_str("<div class=\"sidebar\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", s.full_name));
    html.push_str("<h2>Contact</h2>\n<div class=\"contact-section\">\n");
    let c = &s.contact;
    if let Some(email) = &c.email {
        html.push_str(&format!("<p><i class=\"fas fa-envelope\"></i> {email}</p>\n"));
    }
    if let Some(phone) = &c.phone {
        html.push_str(&format!("<p><i class=\"fas fa-phone\"></i> {phone}</p>\n"));
    }
    if let Some(location) = &c.location {
        html.push_str(&format!(
            "<p><i class=\"fas fa-map-marker-alt\"></i> {location}</p>\n"
        ));
    }
    // Links are shown by label only; the entered URLs never reach the markup.
    if c.linkedin.is_some() {
        html.push_str("<p><i class=\"fab fa-linkedin\"></i> LinkedIn</p>\n");
    }
    if c.website.is_some() {
        html.push_str("<p><i class=\"fas fa-globe\"></i> Website</p>\n");
    }
    html.push_str("</div>\n");

    if !s.skills.is_empty() {
        html.push_str("<h2>Skills</h2>\n<div class=\"skills-section\">\n");
        for skill in &s.skills {
            html.push_str(&format!("<p>• {skill}</p>\n"));
        }
        html.push_str("</div>\n");
    }

    if !s.education.is_empty() {
        html.push_str("<h2>Education</h2>\n");
        for edu in &s.education {
            html.push_str(&format!(
                "<div class=\"education-entry\">\n<h4>{}</h4>\n<p>{}</p>\n<p>{}</p>\n</div>\n",
                edu.degree,
                edu.school,
                graduation_line(edu, "")
            ));
        }
    }
    html.push_str("</div>\n");

    // Main column
    html.push_str("<div class=\"main-content\">\n");
    if let Some(summary) = &s.summary {
        html.push_str(&format!(
            "<div class=\"section\">\n<h2>About Me</h2>\n<p>{summary}</p>\n</div>\n"
        ));
    }

    if !s.experience.is_empty() {
        html.push_str("<div class=\"section\">\n<h2>Experience</h2>\n");
        for exp in &s.experience {
            html.push_str(&format!(
                "<div class=\"experience-entry\">\n<h3>{}</h3>\n<div class=\"company\">{}</div>\n<div class=\"date-range\">{} - {}</div>\n<p>{}</p>\n</div>\n",
                exp.job_title, exp.company, exp.start_date, exp.end_date, exp.description
            ));
        }
        html.push_str("</div>\n");
    }
    html.push_str("</div>\n");

    html.push_str("</div>\n");
    html
}
