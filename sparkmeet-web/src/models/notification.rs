/// Severity of a user-facing feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    /// Green banner, the operation worked.
    Success,
    /// Red banner, the operation failed.
    Error,
    /// Yellow banner, caution or important notice.
    Warning,
}

impl NotificationKind {
    /// CSS alert class for the banner surface.
    #[must_use]
    pub fn alert_class(self) -> &'static str {
        match self {
            Self::Success => "alert-success",
            Self::Error => "alert-error",
            Self::Warning => "alert-warning",
        }
    }
}

/// A message to be displayed in the UI. At most one is live at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// The message text.
    pub text: String,

    /// Severity, controls the banner styling.
    pub kind: NotificationKind,
}

impl Notification {
    /// Creates a notification of the given kind.
    pub fn new(kind: NotificationKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
        }
    }
}
