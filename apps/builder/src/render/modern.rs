//! Modern template: single column, icon contact row, skills as tags at the end.

use crate::render::sections::{graduation_line, ResumeSections};

pub fn render(s: &ResumeSections) -> String {
    let mut html = String::from("<div class=\"resume-template modern-template\">\n");

    html.push_str("<div class=\"resume-header\">\n");
    html.push_str(&format!("<h1>{}</h1>\n", s.full_name));
    html.push_str("<div class=\"contact-info\">\n");
    let c = &s.contact;
    if let Some(email) = &c.email {
        html.push_str(&format!("<span><i class=\"fas fa-envelope\"></i> {email}</span>\n"));
    }
    if let Some(phone) = &c.phone {
        html.push_str(&format!("<span><i class=\"fas fa-phone\"></i> {phone}</span>\n"));
    }
    if let Some(location) = &c.location {
        html.push_str(&format!(
            "<span><i class=\"fas fa-map-marker-alt\"></i> {location}</span>\n"
        ));
    }
    // Links are shown by label only; the entered URLs never reach the markup.
    if c.linkedin.is_some() {
        html.push_str("<span><i class=\"fab fa-linkedin\"></i> LinkedIn</span>\n");
    }
    if c.website.is_some() {
        html.push_str("<span><i class=\"fas fa-globe\"></i> Website</span>\n");
    }
    html.push_str("</div>\n</div>\n");

    if let Some(summary) = &s.summary {
        html.push_str(&format!(
            "<div class=\"section\">\n<h2>Professional Summary</h2>\n<p>{summary}</p>\n</div>\n"
        ));
    }

    if !s.experience.is_empty() {
        html.push_str("<div class=\"section\">\n<h2>Work Experience</h2>\n");
        for exp in &s.experience {
            html.push_str(&format!(
                "<div class=\"experience-entry\">\n<h3>{}</h3>\n<div class=\"company\">{}</div>\n<div class=\"date-range\">{} - {}</div>\n<p>{}</p>\n</div>\n",
                exp.job_title, exp.company, exp.start_date, exp.end_date, exp.description
            ));
        }
        html.push_str("</div>\n");
    }

    if !s.education.is_empty() {
        html.push_str("<div class=\"section\">\n<h2>Education</h2>\n");
        for edu in &s.education {
            html.push_str(&format!(
                "<div class=\"education-entry\">\n<h3>{}</h3>\n<div class=\"school\">{}</div>\n<div class=\"date-range\">{}</div>\n</div>\n",
                edu.degree,
                edu.school,
                graduation_line(edu, "GPA: ")
            ));
        }
        html.push_str("</div>\n");
    }

    if !s.skills.is_empty() {
        html.push_str("<div class=\"section\">\n<h2>Skills</h2>\n<div class=\"skills-list\">\n");
        for skill in &s.skills {
            html.push_str(&format!("<span class=\"skill-tag\">{skill}</span>\n"));
        }
        html.push_str("</div>\n</div>\n");
    }

    html.push_str("</div>\n");
    html
}
