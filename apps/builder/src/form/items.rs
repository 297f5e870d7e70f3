//! Repeatable entry blocks and the field identifiers that address them.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{EducationEntry, ExperienceEntry};

/// One "experience" block on the form. The id is stable for the block's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    pub id: Uuid,
    pub entry: ExperienceEntry,
}

impl ExperienceItem {
    /// Creates an empty block, as appended by the "add experience" action.
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            entry: ExperienceEntry::default(),
        }
    }

    pub fn set(&mut self, field: ExperienceField, value: String) {
        let slot = match field {
            ExperienceField::JobTitle => &mut self.entry.job_title,
            ExperienceField::Company => &mut self.entry.company,
            ExperienceField::StartDate => &mut self.entry.start_date,
            ExperienceField::EndDate => &mut self.entry.end_date,
            ExperienceField::Description => &mut self.entry.description,
        };
        *slot = value;
    }
}

/// One "education" block on the form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationItem {
    pub id: Uuid,
    pub entry: EducationEntry,
}

impl EducationItem {
    /// Creates an empty block, as appended by the "add education" action.
    pub fn blank() -> Self {
        Self {
            id: Uuid::new_v4(),
            entry: EducationEntry::default(),
        }
    }

    pub fn set(&mut self, field: EducationField, value: String) {
        let slot = match field {
            EducationField::Degree => &mut self.entry.degree,
            EducationField::School => &mut self.entry.school,
            EducationField::GraduationYear => &mut self.entry.graduation_year,
            EducationField::Gpa => &mut self.entry.gpa,
        };
        *slot = value;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    Location,
    Linkedin,
    Website,
    Summary,
    Skills,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExperienceField {
    JobTitle,
    Company,
    StartDate,
    EndDate,
    Description,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationField {
    Degree,
    School,
    GraduationYear,
    Gpa,
}
