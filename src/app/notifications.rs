//! Notifications dropdown: open/closed state over a capped list.

pub type NotificationId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Danger,
    Info,
    Success,
    Warning,
}

impl NotificationKind {
    pub fn icon(&self) -> &'static str {
        match self {
            NotificationKind::Danger => "✗",
            NotificationKind::Info => "i",
            NotificationKind::Success => "✓",
            NotificationKind::Warning => "!",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: NotificationId,
    pub kind: NotificationKind,
    pub title: String,
    pub date: String,
}

#[derive(Debug)]
pub struct NotificationsDropdown {
    pub open: bool,
    items: Vec<Notification>,
    selected: usize,
    next_id: NotificationId,
    max: usize,
}

impl NotificationsDropdown {
    pub fn new(max: usize) -> Self {
        Self {
            open: false,
            items: Vec::new(),
            selected: 0,
            next_id: 0,
            max: max.max(1),
        }
    }

    /// Newest first.
    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn push(&mut self, kind: NotificationKind, title: String, date: String) -> NotificationId {
        let id = self.next_id;
        self.next_id += 1;
        self.items.insert(0, Notification { id, kind, title, date });
        self.items.truncate(self.max);
        // Keep the same notification selected while the list shifts.
        if self.open && self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
        self.clamp();
        id
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
        self.selected = 0;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn select_next(&mut self) {
        if self.selected + 1 < self.items.len() {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn dismiss_selected(&mut self) -> Option<Notification> {
        if self.items.is_empty() {
            return None;
        }
        let removed = self.items.remove(self.selected);
        self.clamp();
        Some(removed)
    }

    fn clamp(&mut self) {
        if self.selected >= self.items.len() {
            self.selected = self.items.len().saturating_sub(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn push(d: &mut NotificationsDropdown, title: &str) -> NotificationId {
        d.push(NotificationKind::Info, title.to_string(), "01-Jan-2026, 10:00".into())
    }

    #[test]
    fn test_toggle_and_close() {
        let mut d = NotificationsDropdown::new(10);
        assert!(!d.open);
        d.toggle();
        assert!(d.open);
        d.toggle();
        assert!(!d.open);
        d.toggle();
        d.close();
        assert!(!d.open);
    }

    #[test]
    fn test_newest_first_and_capped() {
        let mut d = NotificationsDropdown::new(2);
        push(&mut d, "a");
        push(&mut d, "b");
        push(&mut d, "c");
        let titles: Vec<_> = d.items().iter().map(|n| n.title.as_str()).collect();
        assert_eq!(titles, vec!["c", "b"]);
    }

    #[test]
    fn test_selection_and_dismiss() {
        let mut d = NotificationsDropdown::new(10);
        push(&mut d, "a");
        push(&mut d, "b");
        d.toggle();
        d.select_next();
        d.select_next();
        assert_eq!(d.selected(), 1);

        let removed = d.dismiss_selected().unwrap();
        assert_eq!(removed.title, "a");
        assert_eq!(d.selected(), 0);
        assert_eq!(d.dismiss_selected().unwrap().title, "b");
        assert!(d.dismiss_selected().is_none());
    }

    #[test]
    fn test_push_keeps_selection_when_open() {
        let mut d = NotificationsDropdown::new(10);
        push(&mut d, "a");
        push(&mut d, "b");
        d.toggle();
        d.select_next();
        assert_eq!(d.items()[d.selected()].title, "a");
        push(&mut d, "c");
        assert_eq!(d.items()[d.selected()].title, "a");
    }
}
