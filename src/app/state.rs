use crate::app::notifications::{NotificationKind, NotificationsDropdown};
use crate::bootstrap::{self, BootstrapSequencer};
use crate::config::AppConfig;
use crate::offline::OfflineRegistrar;
use crate::page::{Document, View};
use crate::routes::{Router, RouterError};
use chrono::Local;

const DASHBOARD_QUERY: &str = "query DashboardQuery { viewer { id } }";

/// Single-line editor for the address bar. The cursor is a char index.
#[derive(Debug, Default)]
pub struct AddressBar {
    pub text: String,
    pub cursor: usize,
    history: Vec<String>,
    history_index: Option<usize>,
}

impl AddressBar {
    fn byte_offset(&self, char_idx: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn delete_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.char_len() {
            let at = self.byte_offset(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_len());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
        self.history_index = None;
    }

    /// Take the text, recording it in history when non-empty.
    pub fn submit(&mut self) -> String {
        let text = std::mem::take(&mut self.text).trim().to_string();
        self.cursor = 0;
        self.history_index = None;
        if !text.is_empty() && self.history.last() != Some(&text) {
            self.history.push(text.clone());
        }
        text
    }

    pub fn history_up(&mut self) {
        let idx = match self.history_index {
            _ if self.history.is_empty() => return,
            Some(0) => return,
            Some(i) => i - 1,
            None => self.history.len() - 1,
        };
        self.recall(Some(idx));
    }

    pub fn history_down(&mut self) {
        match self.history_index {
            Some(i) if i + 1 < self.history.len() => self.recall(Some(i + 1)),
            Some(_) => self.recall(None),
            None => {}
        }
    }

    fn recall(&mut self, idx: Option<usize>) {
        self.history_index = idx;
        self.text = idx.map(|i| self.history[i].clone()).unwrap_or_default();
        self.cursor = self.char_len();
    }
}

pub struct AppState {
    pub config: AppConfig,
    pub document: Document,
    pub sequencer: BootstrapSequencer,
    pub notifications: NotificationsDropdown,
    pub address: AddressBar,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
    pub tick_count: u64,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let document = Document::new(&config.bootstrap.loader_id, &config.bootstrap.mount_id);
        let sequencer = BootstrapSequencer::new(&config.bootstrap);
        let notifications = NotificationsDropdown::new(config.ui.max_notifications);
        Self {
            config,
            document,
            sequencer,
            notifications,
            address: AddressBar::default(),
            should_quit: false,
            dirty: true,
            status_message: None,
            tick_count: 0,
        }
    }

    /// Run the startup sequence against this state's document.
    pub fn bootstrap(&mut self, registrar: &dyn OfflineRegistrar) {
        if self.sequencer.is_started() {
            return;
        }
        bootstrap::run(&mut self.sequencer, &mut self.document, &self.config, registrar);
        if self.document.mounted(&self.config.bootstrap.mount_id).is_none() {
            let msg = format!("Nothing mounted: #{} not found", self.config.bootstrap.mount_id);
            self.notify(NotificationKind::Danger, msg);
        }
        self.dirty = true;
    }

    /// Re-run the dashboard query through the router's environment.
    pub fn refresh(&mut self) {
        let Some(resolver) = self.router_mut().and_then(|r| r.resolver_mut()) else {
            self.status_message = Some("No data environment mounted".to_string());
            self.dirty = true;
            return;
        };
        let result = resolver
            .environment_mut()
            .execute(DASHBOARD_QUERY, &serde_json::Value::Null);
        match result {
            Ok(updated) => {
                tracing::info!(records = updated.len(), "store refreshed");
                self.status_message = None;
                self.notify(
                    NotificationKind::Success,
                    format!("Refreshed {} records", updated.len()),
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "store refresh failed");
                self.notify(NotificationKind::Danger, format!("Refresh failed: {}", e));
            }
        }
    }

    pub fn mounted(&self) -> Option<&View> {
        self.document.mounted(&self.config.bootstrap.mount_id)
    }

    pub fn router(&self) -> Option<&Router> {
        self.document.mounted_router(&self.config.bootstrap.mount_id)
    }

    pub fn router_mut(&mut self) -> Option<&mut Router> {
        self.document.mounted_router_mut(&self.config.bootstrap.mount_id)
    }

    pub fn loader_visible(&self) -> bool {
        self.document.element(&self.config.bootstrap.loader_id).is_some()
    }

    pub fn notify(&mut self, kind: NotificationKind, title: String) {
        let date = Local::now().format(&self.config.ui.date_format).to_string();
        self.notifications.push(kind, title, date);
        self.dirty = true;
    }

    pub fn navigate(&mut self, url: &str) {
        let Some(router) = self.router_mut() else {
            self.status_message = Some("No router mounted".to_string());
            self.dirty = true;
            return;
        };
        let result = router.navigate(url);
        let href = router.location().href();
        self.status_message = None;
        match result {
            Ok(m) => tracing::info!(location = %href, component = m.component.name(), "navigated"),
            Err(RouterError::NotFound(path)) => {
                tracing::info!(location = %href, "no route");
                self.notify(NotificationKind::Warning, format!("No page at {}", path));
            }
            Err(e) => self.status_message = Some(e.to_string()),
        }
        self.dirty = true;
    }

    pub fn back(&mut self) {
        let Some(router) = self.router_mut() else {
            return;
        };
        self.status_message = router.back().err().map(|e| e.to_string());
        self.dirty = true;
    }

    pub fn forward(&mut self) {
        let Some(router) = self.router_mut() else {
            return;
        };
        self.status_message = router.forward().err().map(|e| e.to_string());
        self.dirty = true;
    }

    /// Current location, or a placeholder when no router is mounted.
    pub fn location_label(&self) -> String {
        match self.router() {
            Some(router) => router.location().href(),
            None => "—".to_string(),
        }
    }

    pub fn body_classes(&self) -> String {
        self.document
            .body()
            .map(|b| b.classes.iter().collect::<Vec<_>>().join(" "))
            .unwrap_or_default()
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        let classes = self.body_classes();
        let mut s = format!(
            "{} | ready: {}",
            self.location_label(),
            self.document.ready_state().as_str()
        );
        if !classes.is_empty() {
            s.push_str(&format!(" | body: {}", classes));
        }
        s
    }
}
