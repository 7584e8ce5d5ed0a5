//! Toast notification queue.
//!
//! Only one toast is visible at a time; pushing a new one replaces whatever
//! is showing. The browser dismisses toasts after [`TOAST_DURATION_MS`].

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

/// Maximum number of toasts visible at once.
pub const TOAST_LIMIT: usize = 1;

/// How long a toast stays visible before auto-dismissal.
pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub toasts: Vec<Toast>,
    next_id: u64,
}

impl ToastState {
    /// Show a toast and return its id.
    pub fn push(&mut self, kind: ToastKind, title: &str, description: &str) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.toasts.insert(
            0,
            Toast { id, kind, title: title.to_owned(), description: description.to_owned() },
        );
        self.toasts.truncate(TOAST_LIMIT);
        id
    }

    /// Remove a toast. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }

    /// Ids of visible toasts newer than `last_scheduled`, oldest first.
    /// Ids are monotonic, so the caller only needs the highest id it has
    /// already handled.
    #[must_use]
    pub fn ids_after(&self, last_scheduled: u64) -> Vec<u64> {
        let mut ids: Vec<u64> = self.toasts.iter().map(|t| t.id).filter(|&id| id > last_scheduled).collect();
        ids.sort_unstable();
        ids
    }

    #[must_use]
    pub fn count_of(&self, kind: ToastKind) -> usize {
        self.toasts.iter().filter(|t| t.kind == kind).count()
    }
}

impl ToastKind {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}
