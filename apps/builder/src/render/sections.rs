//! Shared data-to-sections pass.
//!
//! Every template shows the same facts; only the markup around them differs. This
//! module decides *which* facts are present (and escapes them once) so the layouts
//! never repeat the inclusion rules.

use crate::models::{EducationEntry, ExperienceEntry, ResumeData};
use crate::render::escape::escape_html;

/// Contact details, each present only when the field is non-empty. Values are escaped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactItems {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub linkedin: Option<String>,
    pub website: Option<String>,
}

/// Escaped, filtered view of a `ResumeData`, ready for a layout to wrap in markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeSections {
    pub full_name: String,
    pub contact: ContactItems,
    pub summary: Option<String>,
    pub skills: Vec<String>,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

impl ResumeSections {
    pub fn from_data(data: &ResumeData) -> Self {
        Self {
            full_name: escape_html(&data.full_name),
            contact: ContactItems {
                email: non_empty(&data.email),
                phone: non_empty(&data.phone),
                location: non_empty(&data.location),
                linkedin: non_empty(&data.linkedin),
                website: non_empty(&data.website),
            },
            summary: non_empty(&data.summary),
            skills: data.skill_list().iter().map(|s| escape_html(s)).collect(),
            experience: data
                .experience
                .iter()
                .filter(|e| e.is_included())
                .map(escape_experience)
                .collect(),
            education: data
                .education
                .iter()
                .filter(|e| e.is_included())
                .map(escape_education)
                .collect(),
        }
    }
}

/// `"<year> | <prefix><gpa>"`, or just the year when no GPA was given.
pub fn graduation_line(edu: &EducationEntry, gpa_prefix: &str) -> String {
    if edu.gpa.is_empty() {
        edu.graduation_year.clone()
    } else {
        format!("{} | {}{}", edu.graduation_year, gpa_prefix, edu.gpa)
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| escape_html(value))
}

fn escape_experience(e: &ExperienceEntry) -> ExperienceEntry {
    ExperienceEntry {
        job_title: escape_html(&e.job_title),
        company: escape_html(&e.company),
        start_date: escape_html(&e.start_date),
        end_date: escape_html(&e.end_date),
        description: escape_html(&e.description),
    }
}

fn escape_education(e: &EducationEntry) -> EducationEntry {
    EducationEntry {
        degree: escape_html(&e.degree),
        school: escape_html(&e.school),
        graduation_year: escape_html(&e.graduation_year),
        gpa: escape_html(&e.gpa),
    }
}
