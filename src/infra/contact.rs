//! Simulated contact-form delivery.
//!
//! There is no backend: submission waits a fixed delay and then reports
//! success for any form that has its required fields filled in.

use std::time::Duration;

use thiserror::Error;

use crate::domain::{ContactField, ContactForm};

pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ContactError {
    #[error("please fill in: {}", join_labels(.0))]
    MissingFields(Vec<ContactField>),
}

fn join_labels(fields: &[ContactField]) -> String {
    fields
        .iter()
        .map(|field| field.label())
        .collect::<Vec<_>>()
        .join(", ")
}

#[derive(Clone, Debug, PartialEq)]
pub struct SubmissionReceipt {
    pub title: &'static str,
    pub detail: &'static str,
    pub sender: String,
}

#[derive(Clone, Debug)]
pub struct ContactClient {
    delay: Duration,
}

impl Default for ContactClient {
    fn default() -> Self {
        Self::new(DEFAULT_SUBMIT_DELAY)
    }
}

impl ContactClient {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub async fn submit(&self, form: &ContactForm) -> Result<SubmissionReceipt, ContactError> {
        let missing = form.missing_fields();
        if !missing.is_empty() {
            tracing::debug!(?missing, "rejecting incomplete contact form");
            return Err(ContactError::MissingFields(missing));
        }

        tracing::info!(
            delay_ms = self.delay().as_millis() as u64,
            has_company = !form.company.trim().is_empty(),
            "simulating contact form submission"
        );
        tokio::time::sleep(self.delay).await;

        Ok(SubmissionReceipt {
            title: "Message sent successfully!",
            detail: "We'll get back to you within 24 hours.",
            sender: form.name.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_form() -> ContactForm {
        let mut form = ContactForm::default();
        form.set(ContactField::Name, " Sarah Chen ");
        form.set(ContactField::Email, "sarah@techflow.example");
        form.set(ContactField::Message, "We'd like a demo.");
        form
    }

    #[tokio::test]
    async fn complete_form_is_accepted() {
        let client = ContactClient::new(Duration::from_millis(5));
        let receipt = client.submit(&complete_form()).await.unwrap();
        assert_eq!(receipt.title, "Message sent successfully!");
        assert_eq!(receipt.detail, "We'll get back to you within 24 hours.");
        assert_eq!(receipt.sender, "Sarah Chen");
    }

    #[tokio::test]
    async fn submission_waits_for_the_configured_delay() {
        let delay = Duration::from_millis(30);
        let client = ContactClient::new(delay);
        let started = std::time::Instant::now();
        client.submit(&complete_form()).await.unwrap();
        assert!(started.elapsed() >= delay);
    }

    #[tokio::test]
    async fn incomplete_form_is_rejected_without_waiting() {
        let client = ContactClient::new(Duration::from_secs(60));
        let mut form = complete_form();
        form.set(ContactField::Email, "");

        let err = client.submit(&form).await.unwrap_err();
        assert_eq!(err, ContactError::MissingFields(vec![ContactField::Email]));
        assert_eq!(err.to_string(), "please fill in: Email");
    }

    #[test]
    fn default_delay_matches_simulated_backend() {
        assert_eq!(ContactClient::default().delay(), Duration::from_millis(1500));
    }
}
