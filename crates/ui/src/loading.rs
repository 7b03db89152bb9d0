use std::sync::Arc;

use dashmap::DashSet;
use tracing::debug;

use crate::render::Renderer;

pub const DEFAULT_LOADING_MESSAGE: &str = "Cargando...";

/// Spinner placeholder shown while an element's data loads.
pub fn spinner_markup(message: &str) -> String {
    format!(
        concat!(
            "<div class=\"admin-loading\" style=\"text-align: center; padding: 20px; color: #666;\">",
            "<i class=\"fas fa-spinner fa-spin\" style=\"font-size: 2rem; margin-bottom: 10px;\"></i>",
            "<p>{}</p>",
            "</div>"
        ),
        html_escape::encode_text(message)
    )
}

/// Tracks which elements currently show a loading placeholder.
pub struct LoadingManager {
    renderer: Arc<dyn Renderer>,
    loading: DashSet<String>,
}

impl LoadingManager {
    pub fn new(renderer: Arc<dyn Renderer>) -> Self {
        Self { renderer, loading: DashSet::new() }
    }

    pub fn show_loading(&self, element_id: &str) {
        self.show_loading_with(element_id, DEFAULT_LOADING_MESSAGE);
    }

    /// No-op when the element does not exist.
    pub fn show_loading_with(&self, element_id: &str, message: &str) {
        if self.renderer.replace_content(element_id, &spinner_markup(message)) {
            self.loading.insert(element_id.to_string());
        } else {
            debug!(element_id, "loading target not found");
        }
    }

    /// Forget the loading state. The caller restores the element's content.
    pub fn hide_loading(&self, element_id: &str) {
        self.loading.remove(element_id);
    }

    pub fn is_loading(&self, element_id: &str) -> bool {
        self.loading.contains(element_id)
    }
}
