use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tracing::warn;

use crate::render::Renderer;

pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(5000);
/// Delay between starting the exit animation and removing the node.
pub const FADE_OUT_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    Warning,
    #[default]
    Info,
}

impl Severity {
    /// Unknown names map to `Info`.
    pub fn from_name(name: &str) -> Self {
        match name {
            "success" => Severity::Success,
            "error" => Severity::Error,
            "warning" => Severity::Warning,
            _ => Severity::Info,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Info => "info",
        }
    }

    pub fn background_color(&self) -> &'static str {
        match self {
            Severity::Success => "#27ae60",
            Severity::Error => "#e74c3c",
            Severity::Warning => "#f39c12",
            Severity::Info => "#3498db",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Severity::Success => "fa-check",
            Severity::Error => "fa-exclamation-triangle",
            Severity::Warning => "fa-exclamation",
            Severity::Info => "fa-info",
        }
    }
}

/// A transient notification: what to show and for how long.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub severity: Severity,
    pub duration: Duration,
}

impl Toast {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into(), severity: Severity::default(), duration: DEFAULT_TOAST_DURATION }
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    pub fn class_name(&self) -> String {
        format!("admin-notification admin-notification-{}", self.severity.as_str())
    }

    pub fn markup(&self) -> String {
        format!(
            concat!(
                "<div class=\"{class}\">",
                "<div style=\"position: fixed; top: 20px; right: 20px; z-index: 9999; padding: 15px 20px; ",
                "border-radius: 8px; color: white; font-weight: 600; box-shadow: 0 5px 15px rgba(0,0,0,0.3); ",
                "background: {color}; animation: slideInRight 0.3s ease;\">",
                "<i class=\"fas {icon}\" style=\"margin-right: 10px;\"></i>{message}",
                "</div></div>"
            ),
            class = self.class_name(),
            color = self.severity.background_color(),
            icon = self.severity.icon(),
            message = html_escape::encode_text(&self.message),
        )
    }
}

/// Shows toasts and removes them once their time is up.
#[derive(Clone)]
pub struct Notifier {
    renderer: Arc<dyn Renderer>,
}

impl Notifier {
    pub fn new(renderer: Arc<dyn Renderer>) -> Self {
        Self { renderer }
    }

    /// Mount the toast, fade it after `duration`, unmount it `FADE_OUT_DELAY` later.
    ///
    /// Removal is scheduled on the current Tokio runtime; without one the toast stays.
    pub fn show(&self, toast: Toast) {
        let node_id = format!("toast-{}", uuid::Uuid::new_v4());
        self.renderer.mount(&node_id, &toast.markup());

        let Ok(handle) = Handle::try_current() else {
            warn!(%node_id, "no async runtime, toast will not be dismissed");
            return;
        };
        let renderer = Arc::clone(&self.renderer);
        handle.spawn(async move {
            tokio::time::sleep(toast.duration).await;
            renderer.begin_fade_out(&node_id);
            tokio::time::sleep(FADE_OUT_DELAY).await;
            renderer.unmount(&node_id);
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.show(Toast::new(message).severity(Severity::Success));
    }

    pub fn error(&self, message: impl Into<String>) {
        self.show(Toast::new(message).severity(Severity::Error));
    }

    pub fn warning(&self, message: impl Into<String>) {
        self.show(Toast::new(message).severity(Severity::Warning));
    }

    pub fn info(&self, message: impl Into<String>) {
        self.show(Toast::new(message));
    }
}
