// Form Collector
// Owns the editable field values and entry blocks; `collect` derives a fresh ResumeData.

pub mod collector;
pub mod items;

pub use collector::FormState;
pub use items::{EducationField, ExperienceField, PersonalField};
