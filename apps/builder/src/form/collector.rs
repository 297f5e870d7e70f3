//! Form state and the collector that turns it into a `ResumeData` snapshot.

use uuid::Uuid;

use crate::errors::AppError;
use crate::form::items::{
    EducationField, EducationItem, ExperienceField, ExperienceItem, PersonalField,
};
use crate::models::ResumeData;

/// Current values of every form field, in on-screen order.
#[derive(Debug, Clone)]
pub struct FormState {
    personal: ResumeData,
    experience: Vec<ExperienceItem>,
    education: Vec<EducationItem>,
}

impl Default for FormState {
    /// The form opens with one blank experience block and one blank education block.
    fn default() -> Self {
        Self {
            personal: ResumeData::default(),
            experience: vec![ExperienceItem::blank()],
            education: vec![EducationItem::blank()],
        }
    }
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a fresh snapshot. Singular fields are copied verbatim; entry blocks
    /// with no title/company (or degree/school) are skipped.
    pub fn collect(&self) -> ResumeData {
        ResumeData {
            experience: self
                .experience
                .iter()
                .filter(|item| item.entry.is_included())
                .map(|item| item.entry.clone())
                .collect(),
            education: self
                .education
                .iter()
                .filter(|item| item.entry.is_included())
                .map(|item| item.entry.clone())
                .collect(),
            ..self.personal.clone()
        }
    }

    pub fn full_name(&self) -> &str {
        &self.personal.full_name
    }

    pub fn set_field(&mut self, field: PersonalField, value: String) {
        let p = &mut self.personal;
        let slot = match field {
            PersonalField::FullName => &mut p.full_name,
            PersonalField::Email => &mut p.email,
            PersonalField::Phone => &mut p.phone,
            PersonalField::Location => &mut p.location,
            PersonalField::Linkedin => &mut p.linkedin,
            PersonalField::Website => &mut p.website,
            PersonalField::Summary => &mut p.summary,
            PersonalField::Skills => &mut p.skills,
        };
        *slot = value;
    }

    pub fn experience_items(&self) -> &[ExperienceItem] {
        &self.experience
    }

    pub fn education_items(&self) -> &[EducationItem] {
        &self.education
    }

    pub fn add_experience(&mut self) -> Uuid {
        let item = ExperienceItem::blank();
        let id = item.id;
        self.experience.push(item);
        id
    }

    pub fn add_education(&mut self) -> Uuid {
        let item = EducationItem::blank();
        let id = item.id;
        self.education.push(item);
        id
    }

    pub fn remove_experience(&mut self, id: Uuid) -> Result<(), AppError> {
        let index = self
            .experience
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| AppError::NotFound(format!("experience block {id}")))?;
        self.experience.remove(index);
        Ok(())
    }

    pub fn remove_education(&mut self, id: Uuid) -> Result<(), AppError> {
        let index = self
            .education
            .iter()
            .position(|item| item.id == id)
            .ok_or_else(|| AppError::NotFound(format!("education block {id}")))?;
        self.education.remove(index);
        Ok(())
    }

    pub fn set_experience_field(
        &mut self,
        id: Uuid,
        field: ExperienceField,
        value: String,
    ) -> Result<(), AppError> {
        self.experience
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| AppError::NotFound(format!("experience block {id}")))?
            .set(field, value);
        Ok(())
    }

    pub fn set_education_field(
        &mut self,
        id: Uuid,
        field: EducationField,
        value: String,
    ) -> Result<(), AppError> {
        self.education
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or_else(|| AppError::NotFound(format!("education block {id}")))?
            .set(field, value);
        Ok(())
    }
}
