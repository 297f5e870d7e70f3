use serde::Serialize;

pub const GENERATE_LABEL: &str = "Generate Resume";
pub const DOWNLOAD_LABEL: &str = "Download PDF";
pub const DOWNLOAD_BUSY_LABEL: &str = "Generating...";

/// Visible state of a button-like action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionControl {
    pub enabled: bool,
    pub busy: bool,
    pub label: &'static str,
}

impl ActionControl {
    /// The generate action: available from the start.
    pub fn generate() -> Self {
        Self {
            enabled: true,
            busy: false,
            label: GENERATE_LABEL,
        }
    }

    /// The download action: locked until the first successful generate.
    pub fn download() -> Self {
        Self {
            enabled: false,
            busy: false,
            label: DOWNLOAD_LABEL,
        }
    }

    /// Disables the control and shows the busy indicator.
    pub fn begin(&mut self, busy_label: &'static str) {
        self.enabled = false;
        self.busy = true;
        self.label = busy_label;
    }

    /// Re-enables the control with its idle label.
    pub fn finish(&mut self, idle_label: &'static str) {
        self.enabled = true;
        self.busy = false;
        self.label = idle_label;
    }
}
