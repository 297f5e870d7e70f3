#![allow(dead_code)]
//! Session: the reactive update controller.
//!
//! One `Session` owns all mutable UI state: the form, the selected template, the
//! debounce and generate timers, the in-flight export and the action controls.
//! It is driven from a single task:
//! - `handle` applies a UI event and returns the notices it produced.
//! - `wait_pending` resolves when a deferred piece of work (debounce, generate,
//!   export) is ready; `on_wake` then completes it.
//!
//! Nothing is shared, so nothing is locked. At most one debounce, one generate
//! and one export can be pending at a time.

pub mod controls;
pub mod events;
pub mod timer;

pub use controls::ActionControl;
pub use events::{Notice, UiEvent};
pub use timer::Timer;

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::{Config, DEFAULT_DEBOUNCE_MS, DEFAULT_GENERATE_DELAY_MS};
use crate::errors::AppError;
use crate::export::{ExportAdapter, ExportJob, ExportedFile};
use crate::form::FormState;
use crate::models::TemplateSelection;
use crate::preview::{Preview, PreviewSink};
use crate::render::preview_for;
use crate::theme::ThemeController;

use controls::{DOWNLOAD_BUSY_LABEL, DOWNLOAD_LABEL, GENERATE_LABEL};

// ────────────────────────────────────────────────────────────────────────────
// Timings
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionTimings {
    /// Quiet period after the last edit before the preview is recomputed.
    pub debounce: Duration,
    /// Simulated work time of the generate action. Zero completes immediately.
    pub generate_delay: Duration,
}

impl Default for SessionTimings {
    fn default() -> Self {
        Self {
            debounce: Duration::from_millis(DEFAULT_DEBOUNCE_MS),
            generate_delay: Duration::from_millis(DEFAULT_GENERATE_DELAY_MS),
        }
    }
}

impl From<&Config> for SessionTimings {
    fn from(config: &Config) -> Self {
        Self {
            debounce: config.debounce,
            generate_delay: config.generate_delay,
        }
    }
}

/// Deferred work that became ready.
#[derive(Debug)]
pub enum Wake {
    Debounce,
    Generate,
    Export(Result<ExportedFile, AppError>),
}

// ────────────────────────────────────────────────────────────────────────────
// Session
// ────────────────────────────────────────────────────────────────────────────

pub struct Session<P: PreviewSink> {
    form: FormState,
    template: TemplateSelection,
    preview: Preview,
    sink: P,
    theme: ThemeController,
    exporter: ExportAdapter,
    timings: SessionTimings,
    debounce: Timer,
    generation: Timer,
    export: Option<ExportJob>,
    generate_control: ActionControl,
    download_control: ActionControl,
}

impl<P: PreviewSink> Session<P> {
    pub fn new(
        sink: P,
        theme: ThemeController,
        exporter: ExportAdapter,
        timings: SessionTimings,
    ) -> Self {
        Self {
            form: FormState::new(),
            template: TemplateSelection::default(),
            preview: Preview::Placeholder,
            sink,
            theme,
            exporter,
            timings,
            debounce: Timer::new(),
            generation: Timer::new(),
            export: None,
            generate_control: ActionControl::generate(),
            download_control: ActionControl::download(),
        }
    }

    #[cfg(test)]
    pub fn form(&self) -> &FormState {
        &self.form
    }

    #[cfg(test)]
    pub fn template(&self) -> TemplateSelection {
        self.template
    }

    #[cfg(test)]
    pub fn preview(&self) -> &Preview {
        &self.preview
    }

    #[cfg(test)]
    pub fn sink(&self) -> &P {
        &self.sink
    }

    #[cfg(test)]
    pub fn theme(&self) -> &ThemeController {
        &self.theme
    }

    #[cfg(test)]
    pub fn generate_control(&self) -> &ActionControl {
        &self.generate_control
    }

    #[cfg(test)]
    pub fn download_control(&self) -> &ActionControl {
        &self.download_control
    }

    /// True while any timer or export is outstanding.
    pub fn has_pending(&self) -> bool {
        self.debounce.is_armed() || self.generation.is_armed() || self.export.is_some()
    }

    /// Initial load: renders the first preview and describes the starting state.
    pub fn start(&mut self) -> Result<Vec<Notice>, AppError> {
        let updated = self.refresh_preview()?;
        let ready = Notice::Ready {
            template: self.template,
            theme: self.theme.theme(),
            indicator: self.theme.indicator(),
            experience_ids: self.form.experience_items().iter().map(|i| i.id).collect(),
            education_ids: self.form.education_items().iter().map(|i| i.id).collect(),
        };
        Ok(vec![ready, updated])
    }

    /// Applies one UI event. Failures are reported as notices, never returned.
    pub fn handle(&mut self, event: UiEvent) -> Vec<Notice> {
        debug!("Event: {event:?}");
        match self.apply(event) {
            Ok(notices) => notices,
            Err(e) => {
                warn!("Event failed: {e}");
                vec![Notice::from_error(&e)]
            }
        }
    }

    fn apply(&mut self, event: UiEvent) -> Result<Vec<Notice>, AppError> {
        match event {
            UiEvent::SetField { field, value } => {
                self.form.set_field(field, value);
                self.edited();
                Ok(vec![])
            }
            UiEvent::AddExperience => {
                let id = self.form.add_experience();
                self.edited();
                Ok(vec![Notice::ExperienceAdded { id }])
            }
            UiEvent::RemoveExperience { id } => {
                self.form.remove_experience(id)?;
                self.edited();
                Ok(vec![Notice::ItemRemoved { id }])
            }
            UiEvent::SetExperienceField { id, field, value } => {
                self.form.set_experience_field(id, field, value)?;
                self.edited();
                Ok(vec![])
            }
            UiEvent::AddEducation => {
                let id = self.form.add_education();
                self.edited();
                Ok(vec![Notice::EducationAdded { id }])
            }
            UiEvent::RemoveEducation { id } => {
                self.form.remove_education(id)?;
                self.edited();
                Ok(vec![Notice::ItemRemoved { id }])
            }
            UiEvent::SetEducationField { id, field, value } => {
                self.form.set_education_field(id, field, value)?;
                self.edited();
                Ok(vec![])
            }
            UiEvent::SelectTemplate { template } => {
                self.template = TemplateSelection::from_name(&template);
                info!("Template selected: {}", self.template);
                Ok(vec![self.refresh_preview()?])
            }
            UiEvent::Generate => self.generate(),
            UiEvent::Download => self.download(),
            UiEvent::ToggleTheme => {
                let theme = self.theme.toggle()?;
                let mut notices = vec![Notice::ThemeChanged {
                    theme,
                    indicator: theme.indicator(),
                }];
                // The mode is already saved; a failed re-push is reported alongside it.
                if let Err(e) = self.sink.set_preview(&self.preview, theme) {
                    warn!("Preview not updated for theme change: {e}");
                    notices.push(Notice::from_error(&e));
                }
                Ok(notices)
            }
        }
    }

    /// Resolves when the next deferred piece of work is ready. Cancel-safe; never
    /// resolves while nothing is pending.
    pub async fn wait_pending(&mut self) -> Wake {
        let debounce = &mut self.debounce;
        let generation = &mut self.generation;
        let export = &mut self.export;

        tokio::select! {
            _ = debounce.fired() => Wake::Debounce,
            _ = generation.fired() => Wake::Generate,
            result = async {
                match export.as_mut() {
                    Some(job) => job.wait().await,
                    None => std::future::pending().await,
                }
            } => Wake::Export(result),
        }
    }

    /// Completes the work reported by `wait_pending`.
    pub fn on_wake(&mut self, wake: Wake) -> Vec<Notice> {
        let result = match wake {
            Wake::Debounce => self.refresh_preview().map(|n| vec![n]),
            Wake::Generate => self.finish_generate(),
            Wake::Export(result) => Ok(vec![self.finish_export(result)]),
        };
        result.unwrap_or_else(|e| {
            warn!("Deferred work failed: {e}");
            vec![Notice::from_error(&e)]
        })
    }

    /// Runs every outstanding timer and export to completion.
    pub async fn drain(&mut self) -> Vec<Notice> {
        let mut notices = Vec::new();
        while self.has_pending() {
            let wake = self.wait_pending().await;
            notices.extend(self.on_wake(wake));
        }
        notices
    }

    // ────────────────────────────────────────────────────────────────────────
    // Internals
    // ────────────────────────────────────────────────────────────────────────

    fn edited(&mut self) {
        self.debounce.arm(self.timings.debounce);
    }

    fn refresh_preview(&mut self) -> Result<Notice, AppError> {
        let data = self.form.collect();
        let preview = preview_for(&data, self.template);
        self.sink.set_preview(&preview, self.theme.theme())?;

        let placeholder = preview.is_placeholder();
        debug!(
            "Preview updated: template={} placeholder={placeholder}",
            self.template
        );
        self.preview = preview;
        Ok(Notice::PreviewUpdated {
            template: self.template,
            placeholder,
        })
    }

    fn generate(&mut self) -> Result<Vec<Notice>, AppError> {
        if !self.generate_control.enabled {
            return Ok(vec![Notice::Ignored {
                action: "generate",
                reason: "generation already in progress".to_string(),
            }]);
        }

        self.generate_control.begin(GENERATE_LABEL);
        info!("Generate started");

        if self.timings.generate_delay.is_zero() {
            let mut notices = vec![Notice::GenerateStarted];
            notices.extend(self.finish_generate()?);
            return Ok(notices);
        }

        self.generation.arm(self.timings.generate_delay);
        Ok(vec![Notice::GenerateStarted])
    }

    fn finish_generate(&mut self) -> Result<Vec<Notice>, AppError> {
        self.generate_control.finish(GENERATE_LABEL);
        let updated = self.refresh_preview()?;

        // An export in flight keeps its control locked until it settles.
        if self.export.is_none() {
            self.download_control.finish(DOWNLOAD_LABEL);
        }
        info!("Generate finished");
        Ok(vec![
            updated,
            Notice::GenerateFinished {
                download_enabled: self.download_control.enabled,
            },
        ])
    }

    fn download(&mut self) -> Result<Vec<Notice>, AppError> {
        if !self.download_control.enabled {
            let reason = if self.download_control.busy {
                "export already in progress"
            } else {
                "generate the resume first"
            };
            return Ok(vec![Notice::Ignored {
                action: "download",
                reason: reason.to_string(),
            }]);
        }

        let job = self
            .exporter
            .start(&self.preview, self.form.full_name(), self.theme.theme())?;
        let filename = job.filename.clone();

        self.download_control.begin(DOWNLOAD_BUSY_LABEL);
        self.export = Some(job);
        Ok(vec![Notice::ExportStarted { filename }])
    }

    fn finish_export(&mut self, result: Result<ExportedFile, AppError>) -> Notice {
        self.export = None;
        self.download_control.finish(DOWNLOAD_LABEL);

        match result {
            Ok(file) => Notice::ExportFinished {
                path: file.path,
                size_bytes: file.size_bytes,
                finished_at: file.finished_at,
            },
            Err(e) => {
                warn!("Export failed: {e}");
                Notice::ExportFailed {
                    code: e.code(),
                    message: e.to_string(),
                }
            }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use tokio::time::Instant;

    use super::*;
    use crate::export::testing::FakeRasterizer;
    use crate::export::ExportConfig;
    use crate::form::{ExperienceField, PersonalField};
    use crate::preview::MemoryPreview;
    use crate::theme::{MemoryPreferenceStore, Theme};

    fn session_with(
        rasterizer: Arc<FakeRasterizer>,
        export_dir: &std::path::Path,
        timings: SessionTimings,
    ) -> Session<MemoryPreview> {
        let mut session = Session::new(
            MemoryPreview::new(),
            ThemeController::load(Box::new(MemoryPreferenceStore::new())),
            ExportAdapter::new(rasterizer, ExportConfig::default(), export_dir),
            timings,
        );
        session.start().unwrap();
        session
    }

    fn session() -> Session<MemoryPreview> {
        session_with(
            Arc::new(FakeRasterizer::default()),
            &std::env::temp_dir(),
            SessionTimings::default(),
        )
    }

    fn set(field: PersonalField, value: &str) -> UiEvent {
        UiEvent::SetField {
            field,
            value: value.to_string(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_start_shows_placeholder() {
        let session = session();
        assert_eq!(session.preview(), &Preview::Placeholder);
        assert_eq!(session.sink().updates(), 1);
        assert!(!session.download_control().enabled);
        assert!(!session.has_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_burst_of_edits_renders_once_after_quiet_period() {
        let mut session = session();
        let start = Instant::now();

        session.handle(set(PersonalField::FullName, "A"));
        tokio::time::advance(Duration::from_millis(100)).await;
        session.handle(set(PersonalField::FullName, "Ad"));
        tokio::time::advance(Duration::from_millis(100)).await;
        session.handle(set(PersonalField::FullName, "Ada"));
        assert_eq!(session.sink().updates(), 1);

        let wake = session.wait_pending().await;
        assert!(matches!(wake, Wake::Debounce));
        // Fired 300ms after the last edit, not after the first.
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(500) && elapsed < Duration::from_millis(600));

        let notices = session.on_wake(wake);
        assert_eq!(
            notices,
            vec![Notice::PreviewUpdated {
                template: TemplateSelection::Modern,
                placeholder: false
            }]
        );
        assert_eq!(session.sink().updates(), 2);
        assert!(session.preview().markup().contains("<h1>Ada</h1>"));
        assert!(!session.has_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_template_switch_renders_immediately() {
        let mut session = session();
        session.handle(set(PersonalField::FullName, "Ada Lovelace"));
        session.handle(set(PersonalField::Email, "ada@example.com"));
        session.handle(set(PersonalField::Skills, "Math, Computing"));

        let notices = session.handle(UiEvent::SelectTemplate {
            template: "classic".to_string(),
        });
        assert_eq!(
            notices,
            vec![Notice::PreviewUpdated {
                template: TemplateSelection::Classic,
                placeholder: false
            }]
        );
        let html = session.preview().markup();
        assert!(html.contains("<h1>Ada Lovelace</h1>"));
        assert!(html.contains("ada@example.com"));
        assert!(html.contains("Math • Computing"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_template_falls_back_to_modern() {
        let mut session = session();
        session.handle(UiEvent::SelectTemplate {
            template: "creative".to_string(),
        });
        session.handle(UiEvent::SelectTemplate {
            template: "gothic".to_string(),
        });
        assert_eq!(session.template(), TemplateSelection::Modern);
    }

    #[tokio::test(start_paused = true)]
    async fn test_generate_delays_then_unlocks_download() {
        let mut session = session();
        session.handle(set(PersonalField::FullName, "Ada"));
        let start = Instant::now();

        assert_eq!(session.handle(UiEvent::Generate), vec![Notice::GenerateStarted]);
        assert!(session.generate_control().busy);
        assert!(matches!(
            session.handle(UiEvent::Generate)[..],
            [Notice::Ignored { action: "generate", .. }]
        ));
        assert!(matches!(
            session.handle(UiEvent::Download)[..],
            [Notice::Ignored { action: "download", .. }]
        ));

        let notices = session.drain().await;
        assert!(Instant::now() >= start + Duration::from_millis(1000));
        assert!(notices.contains(&Notice::GenerateFinished {
            download_enabled: true
        }));
        assert!(session.download_control().enabled);
        assert!(session.generate_control().enabled);
        assert!(session.preview().markup().contains("<h1>Ada</h1>"));
    }

    #[tokio::test]
    async fn test_download_exports_and_restores_control() {
        let dir = tempfile::tempdir().unwrap();
        let fake = Arc::new(FakeRasterizer::default());
        let mut session = session_with(
            fake.clone(),
            dir.path(),
            SessionTimings {
                debounce: Duration::from_millis(300),
                generate_delay: Duration::ZERO,
            },
        );
        session.handle(set(PersonalField::FullName, "Ada Lovelace"));
        session.handle(UiEvent::Generate);
        assert!(session.download_control().enabled);

        let notices = session.handle(UiEvent::Download);
        assert_eq!(
            notices,
            vec![Notice::ExportStarted {
                filename: "Ada Lovelace_resume.pdf".to_string()
            }]
        );
        assert_eq!(session.download_control().label, DOWNLOAD_BUSY_LABEL);
        assert!(matches!(
            session.handle(UiEvent::Download)[..],
            [Notice::Ignored { action: "download", .. }]
        ));

        let notices = session.drain().await;
        let finished = notices
            .iter()
            .find_map(|n| match n {
                Notice::ExportFinished { path, .. } => Some(path.clone()),
                _ => None,
            })
            .unwrap();
        assert!(finished.exists());
        assert_eq!(fake.calls(), 1);
        assert_eq!(session.download_control(), &{
            let mut c = ActionControl::download();
            c.finish(DOWNLOAD_LABEL);
            c
        });
    }

    #[tokio::test]
    async fn test_failed_export_restores_control_and_reports() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_with(
            Arc::new(FakeRasterizer::failing()),
            dir.path(),
            SessionTimings {
                debounce: Duration::from_millis(300),
                generate_delay: Duration::ZERO,
            },
        );
        session.handle(set(PersonalField::FullName, "Ada"));
        session.handle(UiEvent::Generate);
        session.handle(UiEvent::Download);

        let notices = session.drain().await;
        assert!(notices.iter().any(|n| matches!(
            n,
            Notice::ExportFailed {
                code: "export_error",
                ..
            }
        )));
        assert!(session.download_control().enabled);
        assert_eq!(session.download_control().label, DOWNLOAD_LABEL);
    }

    #[tokio::test(start_paused = true)]
    async fn test_download_after_name_cleared_is_error_without_lock() {
        let mut session = session_with(
            Arc::new(FakeRasterizer::default()),
            &std::env::temp_dir(),
            SessionTimings {
                debounce: Duration::from_millis(300),
                generate_delay: Duration::ZERO,
            },
        );
        session.handle(set(PersonalField::FullName, "Ada"));
        session.handle(UiEvent::Generate);
        session.handle(set(PersonalField::FullName, ""));
        session.drain().await;

        let notices = session.handle(UiEvent::Download);
        assert!(matches!(
            notices[..],
            [Notice::Error {
                code: "validation_error",
                ..
            }]
        ));
        assert!(session.download_control().enabled);
    }

    #[tokio::test(start_paused = true)]
    async fn test_entry_blocks_flow_into_preview() {
        let mut session = session();
        session.handle(set(PersonalField::FullName, "Ada"));
        let first = session.form().experience_items()[0].id;

        let added = session.handle(UiEvent::AddExperience);
        let second = match added[..] {
            [Notice::ExperienceAdded { id }] => id,
            _ => panic!("unexpected notices: {added:?}"),
        };
        session.handle(UiEvent::SetExperienceField {
            id: first,
            field: ExperienceField::JobTitle,
            value: "Translator".to_string(),
        });
        session.handle(UiEvent::SetExperienceField {
            id: second,
            field: ExperienceField::Company,
            value: "Analytical Engine".to_string(),
        });
        session.drain().await;
        let html = session.preview().markup().to_string();
        assert!(html.contains("Translator"));
        assert!(html.contains("Analytical Engine"));

        assert_eq!(
            session.handle(UiEvent::RemoveExperience { id: first }),
            vec![Notice::ItemRemoved { id: first }]
        );
        session.drain().await;
        assert!(!session.preview().markup().contains("Translator"));

        let missing = session.handle(UiEvent::RemoveExperience { id: first });
        assert!(matches!(missing[..], [Notice::Error { code: "not_found", .. }]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_theme_repushes_preview() {
        let mut session = session();
        let before = session.sink().updates();

        let notices = session.handle(UiEvent::ToggleTheme);
        assert_eq!(
            notices,
            vec![Notice::ThemeChanged {
                theme: Theme::Dark,
                indicator: "fas fa-sun"
            }]
        );
        assert_eq!(session.sink().updates(), before + 1);
        assert_eq!(session.sink().theme(), Some(Theme::Dark));

        session.handle(UiEvent::ToggleTheme);
        assert_eq!(session.theme().theme(), Theme::Light);
        assert_eq!(session.theme().indicator(), "fas fa-moon");
    }

    /// A sink whose writes always fail, like a preview file on a read-only disk.
    struct ReadOnlyPreview;

    impl PreviewSink for ReadOnlyPreview {
        fn set_preview(&mut self, _preview: &Preview, _theme: Theme) -> Result<(), AppError> {
            Err(AppError::Io(std::io::Error::new(
                std::io::ErrorKind::PermissionDenied,
                "read-only preview",
            )))
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_toggle_theme_reports_new_mode_even_when_preview_write_fails() {
        let mut session = Session::new(
            ReadOnlyPreview,
            ThemeController::load(Box::new(MemoryPreferenceStore::new())),
            ExportAdapter::new(
                Arc::new(FakeRasterizer::default()),
                ExportConfig::default(),
                &std::env::temp_dir(),
            ),
            SessionTimings::default(),
        );

        let notices = session.handle(UiEvent::ToggleTheme);
        assert_eq!(
            notices[0],
            Notice::ThemeChanged {
                theme: Theme::Dark,
                indicator: "fas fa-sun"
            }
        );
        assert!(matches!(notices[1..], [Notice::Error { .. }]));
        assert_eq!(session.theme().theme(), Theme::Dark);

        let notices = session.handle(UiEvent::ToggleTheme);
        assert_eq!(
            notices[0],
            Notice::ThemeChanged {
                theme: Theme::Light,
                indicator: "fas fa-moon"
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_export_runs_alongside_edits() {
        let dir = tempfile::tempdir().unwrap();
        let mut session = session_with(
            Arc::new(FakeRasterizer::slow(Duration::from_secs(5))),
            dir.path(),
            SessionTimings {
                debounce: Duration::from_millis(300),
                generate_delay: Duration::ZERO,
            },
        );
        session.handle(set(PersonalField::FullName, "Ada"));
        session.handle(UiEvent::Generate);
        session.handle(UiEvent::Download);

        // An edit during the export still gets its debounced render first.
        session.handle(set(PersonalField::Summary, "Poet of science"));
        let wake = session.wait_pending().await;
        assert!(matches!(wake, Wake::Debounce));
        session.on_wake(wake);
        assert!(session.preview().markup().contains("Poet of science"));
        assert!(session.download_control().busy);

        let notices = session.drain().await;
        assert!(matches!(notices[..], [Notice::ExportFinished { .. }]));
    }
}
