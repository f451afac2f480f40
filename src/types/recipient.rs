//! Targets, segments and their emails.

use serde::Serialize;
use serde_json::Value;

/// Recipient grouping. `Segment` is the legacy name for `Target`; both
/// expose the same operations under different path prefixes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecipientGroup {
    /// `/latest/target`
    Target,
    /// `/latest/segment`
    Segment,
}

impl RecipientGroup {
    /// Path prefix for the group.
    pub fn base_path(&self) -> &'static str {
        match self {
            RecipientGroup::Target => "/latest/target",
            RecipientGroup::Segment => "/latest/segment",
        }
    }

    /// `{base}/{name}`
    pub fn path(&self, name: &str) -> String {
        format!("{}/{}", self.base_path(), name)
    }

    /// `{base}/{name}/email`
    pub fn emails_path(&self, name: &str) -> String {
        format!("{}/{}/email", self.base_path(), name)
    }

    /// `{base}/{name}/email/{email_id}`
    pub fn email_path(&self, name: &str, email_id: &str) -> String {
        format!("{}/{}/email/{}", self.base_path(), name, email_id)
    }
}

/// Body of a target create/update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetAttributes {
    /// Attribute definitions, passed through unchecked.
    pub attributes: Vec<Value>,
}

/// Body of an email create/update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EmailContent {
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
    /// Plain-text body.
    pub plain: String,
}

impl EmailContent {
    /// Create email content.
    pub fn new(
        subject: impl Into<String>,
        html: impl Into<String>,
        plain: impl Into<String>,
    ) -> Self {
        Self {
            subject: subject.into(),
            html: html.into(),
            plain: plain.into(),
        }
    }
}

/// Body of `sendTestEmail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendTestEmail {
    /// Sender address.
    pub email_from: String,
    /// Test recipient address.
    pub recipient: String,
}

/// Body of `sendEmail`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SendEmail {
    /// Sender address.
    pub email_from: String,
}
