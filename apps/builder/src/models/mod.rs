pub mod resume;

pub use resume::{EducationEntry, ExperienceEntry, ResumeData, TemplateSelection};
