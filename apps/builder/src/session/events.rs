//! Wire shapes of the UI surface: events in, notices out. One JSON object per line.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::form::{EducationField, ExperienceField, PersonalField};
use crate::models::TemplateSelection;
use crate::theme::Theme;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UiEvent {
    SetField {
        field: PersonalField,
        value: String,
    },
    AddExperience,
    RemoveExperience {
        id: Uuid,
    },
    SetExperienceField {
        id: Uuid,
        field: ExperienceField,
        value: String,
    },
    AddEducation,
    RemoveEducation {
        id: Uuid,
    },
    SetEducationField {
        id: Uuid,
        field: EducationField,
        value: String,
    },
    /// Unknown template names select `modern`.
    SelectTemplate {
        template: String,
    },
    Generate,
    Download,
    ToggleTheme,
}

impl UiEvent {
    pub fn parse(line: &str) -> Result<Self, AppError> {
        serde_json::from_str(line)
            .map_err(|e| AppError::Validation(format!("malformed event: {e}")))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "notice", rename_all = "snake_case")]
pub enum Notice {
    Ready {
        template: TemplateSelection,
        theme: Theme,
        indicator: &'static str,
        experience_ids: Vec<Uuid>,
        education_ids: Vec<Uuid>,
    },
    ExperienceAdded {
        id: Uuid,
    },
    EducationAdded {
        id: Uuid,
    },
    ItemRemoved {
        id: Uuid,
    },
    PreviewUpdated {
        template: TemplateSelection,
        placeholder: bool,
    },
    GenerateStarted,
    GenerateFinished {
        download_enabled: bool,
    },
    ExportStarted {
        filename: String,
    },
    ExportFinished {
        path: PathBuf,
        size_bytes: usize,
        finished_at: DateTime<Utc>,
    },
    ExportFailed {
        code: &'static str,
        message: String,
    },
    ThemeChanged {
        theme: Theme,
        indicator: &'static str,
    },
    Ignored {
        action: &'static str,
        reason: String,
    },
    Error {
        code: &'static str,
        message: String,
    },
}

impl Notice {
    pub fn from_error(error: &AppError) -> Self {
        Notice::Error {
            code: error.code(),
            message: error.to_string(),
        }
    }
}
