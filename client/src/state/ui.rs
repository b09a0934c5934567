//! Local UI chrome state: toast notifications.
//!
//! DESIGN
//! ======
//! Every page reports remote failures and confirmations through one toast
//! queue provided via context, so error surfacing stays uniform.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Most toasts visible at once; older ones are dropped first.
pub const MAX_TOASTS: usize = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastTone {
    #[default]
    Info,
    Success,
    Error,
}

impl ToastTone {
    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Info => "toast toast--info",
            Self::Success => "toast toast--success",
            Self::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub body: String,
    pub tone: ToastTone,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl UiState {
    /// Queue a toast and return its id.
    pub fn push(&mut self, title: impl Into<String>, body: impl Into<String>, tone: ToastTone) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toasts.push(Toast { id, title: title.into(), body: body.into(), tone });
        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..excess);
        }
        id
    }

    pub fn success(&mut self, title: impl Into<String>) -> u64 {
        self.push(title, String::new(), ToastTone::Success)
    }

    pub fn error(&mut self, title: impl Into<String>, body: impl Into<String>) -> u64 {
        self.push(title, body, ToastTone::Error)
    }

    pub fn dismiss(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
