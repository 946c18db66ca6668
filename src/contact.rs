use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How long a status banner stays up.
pub const BANNER_SECS: u64 = 5;

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been sent successfully.";
pub const ERROR_MESSAGE: &str =
    "Oops! Something went wrong. Please try again or email me directly.";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("email address is not valid")]
    InvalidEmail,
    #[error("contact form is not configured")]
    NotConfigured,
    #[error("couldn't reach the contact webhook: {0}")]
    Transport(String),
    #[error("contact webhook answered with status {0}")]
    Rejected(u16),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactForm {
    pub fn validate(&self) -> Result<(), ContactError> {
        for (field, value) in [
            ("name", &self.name),
            ("email", &self.email),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(ContactError::MissingField(field));
            }
        }
        match self.email.trim().split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() => Ok(()),
            _ => Err(ContactError::InvalidEmail),
        }
    }

    pub fn into_submission(self, at: DateTime<Utc>) -> ContactSubmission {
        ContactSubmission {
            name: self.name,
            email: self.email,
            message: self.message,
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
        }
    }
}

/// JSON body posted to the webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitReceipt {
    pub received_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactStatus {
    #[default]
    Idle,
    Success,
    Error,
}

impl ContactStatus {
    pub fn from_result<T, E>(res: &Result<T, E>) -> Self {
        match res {
            Ok(_) => ContactStatus::Success,
            Err(_) => ContactStatus::Error,
        }
    }

    pub fn message(self) -> Option<&'static str> {
        match self {
            ContactStatus::Idle => None,
            ContactStatus::Success => Some(SUCCESS_MESSAGE),
            ContactStatus::Error => Some(ERROR_MESSAGE),
        }
    }
}

/// The banner above the form. Each `show` bumps the generation so a timer
/// started for an older banner can't dismiss a newer one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusBanner {
    pub status: ContactStatus,
    generation: u64,
}

impl StatusBanner {
    pub fn show(&mut self, status: ContactStatus) -> u64 {
        self.status = status;
        self.generation += 1;
        self.generation
    }

    pub fn dismiss(&mut self, generation: u64) {
        if generation == self.generation {
            self.status = ContactStatus::Idle;
        }
    }
}

#[cfg(feature = "ssr")]
pub use server::ContactConfig;

#[cfg(feature = "ssr")]
mod server {
    use std::time::Duration;

    use chrono::{DateTime, Utc};
    use http::StatusCode;

    use super::{ContactError, ContactForm, ContactSubmission, SubmitReceipt};

    const TIMEOUT_SECS: u64 = 10;

    /// Webhook settings shared with the contact server function.
    #[derive(Debug, Clone)]
    pub struct ContactConfig {
        webhook_url: Option<String>,
        client: reqwest::Client,
    }

    impl ContactConfig {
        /// Reads `CONTACT_WEBHOOK_URL`. A missing URL leaves the form disabled
        /// rather than failing startup.
        pub fn from_env() -> Result<Self, ContactError> {
            let webhook_url = std::env::var("CONTACT_WEBHOOK_URL")
                .ok()
                .filter(|s| !s.trim().is_empty());
            Self::new(webhook_url)
        }

        pub fn new(webhook_url: Option<String>) -> Result<Self, ContactError> {
            let client = reqwest::Client::builder()
                .timeout(Duration::from_secs(TIMEOUT_SECS))
                .build()
                .map_err(|e| ContactError::Transport(e.to_string()))?;
            Ok(Self {
                webhook_url,
                client,
            })
        }

        pub fn is_configured(&self) -> bool {
            self.webhook_url.is_some()
        }

        pub async fn deliver(
            &self,
            submission: &ContactSubmission,
        ) -> Result<StatusCode, ContactError> {
            let url = self
                .webhook_url
                .as_deref()
                .ok_or(ContactError::NotConfigured)?;
            let res = self
                .client
                .post(url)
                .json(submission)
                .send()
                .await
                .map_err(|e| ContactError::Transport(e.to_string()))?;
            let status = res.status();
            tracing::debug!(%status, "contact webhook answered");
            if status.is_success() {
                Ok(status)
            } else {
                Err(ContactError::Rejected(status.as_u16()))
            }
        }

        /// Validates `form`, stamps it with `at` and posts it to the webhook.
        pub async fn submit(
            &self,
            form: ContactForm,
            at: DateTime<Utc>,
        ) -> Result<SubmitReceipt, ContactError> {
            form.validate()?;
            let submission = form.into_submission(at);
            self.deliver(&submission).await?;
            Ok(SubmitReceipt { received_at: at })
        }
    }

}
