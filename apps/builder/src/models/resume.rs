use std::fmt;

use serde::{Deserialize, Serialize};

/// A snapshot of everything the form holds, rebuilt on every render trigger.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeData {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub location: String,
    pub linkedin: String,
    pub website: String,
    pub summary: String,
    /// Comma-delimited; see [`ResumeData::skill_list`].
    pub skills: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
}

impl ResumeData {
    /// Splits `skills` on commas, trims each token and drops empty ones. Order is preserved.
    pub fn skill_list(&self) -> Vec<String> {
        self.skills
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceEntry {
    pub job_title: String,
    pub company: String,
    pub start_date: String,
    pub end_date: String,
    pub description: String,
}

impl ExperienceEntry {
    /// Entries with neither a title nor a company are dropped on collection.
    pub fn is_included(&self) -> bool {
        !self.job_title.is_empty() || !self.company.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub graduation_year: String,
    pub gpa: String,
}

impl EducationEntry {
    /// Entries with neither a degree nor a school are dropped on collection.
    pub fn is_included(&self) -> bool {
        !self.degree.is_empty() || !self.school.is_empty()
    }
}

/// The visual template the preview is rendered with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateSelection {
    #[default]
    Modern,
    Classic,
    Creative,
}

impl TemplateSelection {
    /// Resolves a template name. Anything unrecognised falls back to `Modern`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "classic" => TemplateSelection::Classic,
            "creative" => TemplateSelection::Creative,
            _ => TemplateSelection::Modern,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateSelection::Modern => "modern",
            TemplateSelection::Classic => "classic",
            TemplateSelection::Creative => "creative",
        }
    }
}

impl fmt::Display for TemplateSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
