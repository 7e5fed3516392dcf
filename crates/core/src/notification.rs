//! Accumulating validation failures.
//!
//! Entities that validate with the notification policy evaluate *all* of their
//! invariants, record each failure here, and only then fail with a single
//! [`DomainError::Notification`](crate::DomainError::Notification).

use serde::{Deserialize, Serialize};

/// One violated invariant, tagged with the context (entity kind) that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationError {
    pub context: String,
    pub message: String,
}

/// Ordered collection of validation failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    errors: Vec<NotificationError>,
}

impl Notification {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_error(&mut self, context: impl Into<String>, message: impl Into<String>) {
        self.errors.push(NotificationError {
            context: context.into(),
            message: message.into(),
        });
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn errors(&self) -> &[NotificationError] {
        &self.errors
    }

    /// Render the failures for a single context as `"ctx: msg,ctx: msg"`.
    ///
    /// Passing `None` renders every recorded failure.
    pub fn messages(&self, context: Option<&str>) -> String {
        self.errors
            .iter()
            .filter(|e| context.is_none_or(|c| e.context == c))
            .map(|e| format!("{}: {}", e.context, e.message))
            .collect::<Vec<_>>()
            .join(",")
    }

    /// `Ok(())` if nothing was recorded, otherwise the whole notification as an error.
    pub fn into_result(self) -> crate::DomainResult<()> {
        if self.has_errors() {
            Err(self.into())
        } else {
            Ok(())
        }
    }
}

impl core::fmt::Display for Notification {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.messages(None))
    }
}
