//! Transient UI state: dialog flags, pending confirmations, notices.

use std::time::{Duration, Instant};

/// How long a notice stays on screen before expiring.
pub const NOTICE_TTL: Duration = Duration::from_secs(6);

/// Destructive actions that require a yes/no confirmation before running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmAction {
    ClearCells,
    ResetAll,
}

impl ConfirmAction {
    pub const fn title(&self) -> &'static str {
        match self {
            Self::ClearCells => "Clear Table",
            Self::ResetAll => "Reset Form",
        }
    }

    pub const fn message(&self) -> &'static str {
        match self {
            Self::ClearCells => "Clear all table contents?",
            Self::ResetAll => "Reset form and table to initial state?",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// An ephemeral user-facing message. Expires after [`NOTICE_TTL`] or when
/// clicked.
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
    pub posted: Instant,
}

#[derive(Default)]
pub struct UiState {
    /// Supplier dialog visibility.
    pub suppliers_open: bool,
    /// Confirmation dialog, if one is pending.
    pub confirm: Option<ConfirmAction>,
    pub notices: Vec<Notice>,
}

impl UiState {
    pub fn push_info(&mut self, text: impl Into<String>) {
        self.push_notice(NoticeKind::Info, text);
    }

    pub fn push_error(&mut self, text: impl Into<String>) {
        self.push_notice(NoticeKind::Error, text);
    }

    fn push_notice(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notices.push(Notice {
            kind,
            text: text.into(),
            posted: Instant::now(),
        });
    }

    /// Drop notices older than [`NOTICE_TTL`].
    pub fn prune_notices(&mut self) {
        self.notices.retain(|n| n.posted.elapsed() < NOTICE_TTL);
    }
}
