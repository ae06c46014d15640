use leptos::*;

pub const ATTENDANCE_MARKED_DISMISS_MS: u32 = 1_500;
pub const EMPLOYEE_ADDED_DISMISS_MS: u32 = 2_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// `None` keeps the notification until the user dismisses it.
    pub auto_dismiss_ms: Option<u32>,
}

/// App-wide toast slot. One notification at a time; a newer one replaces the
/// current one.
#[derive(Clone, Copy)]
pub struct NotificationCenter {
    current: RwSignal<Option<Notification>>,
    next_id: StoredValue<u64>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self {
            current: create_rw_signal(None),
            next_id: store_value(1),
        }
    }

    pub fn current(&self) -> Signal<Option<Notification>> {
        self.current.into()
    }

    pub fn success(
        &self,
        title: impl Into<String>,
        message: impl Into<String>,
        auto_dismiss_ms: Option<u32>,
    ) -> u64 {
        self.push(NotificationKind::Success, title.into(), message.into(), auto_dismiss_ms)
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) -> u64 {
        self.push(NotificationKind::Error, title.into(), message.into(), None)
    }

    pub fn dismiss(&self) {
        self.current.set(None);
    }

    /// Clears the slot only if `id` is still shown, so a stale timer never
    /// hides a newer notification.
    pub fn dismiss_if_current(&self, id: u64) -> bool {
        let is_current = self
            .current
            .with_untracked(|current| current.as_ref().map(|n| n.id) == Some(id));
        if is_current {
            self.current.set(None);
        }
        is_current
    }

    fn push(
        &self,
        kind: NotificationKind,
        title: String,
        message: String,
        auto_dismiss_ms: Option<u32>,
    ) -> u64 {
        let id = self.next_id.get_value();
        self.next_id.set_value(id.wrapping_add(1));
        self.current.set(Some(Notification {
            id,
            kind,
            title,
            message,
            auto_dismiss_ms,
        }));
        id
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationCenter {
    match use_context::<NotificationCenter>() {
        Some(center) => center,
        None => {
            let center = NotificationCenter::new();
            provide_context(center);
            center
        }
    }
}
