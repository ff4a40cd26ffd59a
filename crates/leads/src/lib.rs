//! # Leads Crate
//!
//! Lead-capture submission for the marketing site's contact and assessment
//! forms. Submission is modeled as a real asynchronous call with explicit
//! success and failure outcomes; there is no artificial delay standing in
//! for a backend.
//!
//! ## Main Components
//!
//! - `Lead` and its validation
//! - `LeadTransport`: async delivery trait, so the UI layer gets the real
//!   backend injected and tests get an in-memory double
//! - `submit`: validate-then-deliver entry point
//!
//! ## Example Usage
//!
//! ```ignore
//! use leads::{submit, InMemoryLeadSink, Lead};
//!
//! let sink = InMemoryLeadSink::new();
//! let lead = Lead::new("Sam", "sam@example.com", "Interested in coaching");
//! let outcome = submit(&sink, lead).await?;
//! ```

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

/// Errors from validating or delivering a lead.
#[derive(Error, Debug)]
pub enum LeadError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),

    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),
}

/// One captured lead from a site form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub name: String,
    pub email: String,
    /// Free-text message; empty is allowed.
    pub message: String,
}

impl Lead {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// Check the form-level requirements before delivery.
    ///
    /// This is deliberately shallow: a name and a plausible email. Anything
    /// stricter belongs to the receiving backend.
    pub fn validate(&self) -> Result<(), LeadError> {
        if self.name.trim().is_empty() {
            return Err(LeadError::MissingField("name"));
        }
        if self.email.trim().is_empty() {
            return Err(LeadError::MissingField("email"));
        }

        let plausible = self
            .email
            .split_once('@')
            .is_some_and(|(local, domain)| !local.is_empty() && domain.contains('.'));
        if !plausible {
            return Err(LeadError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }
}

/// Outcome of a delivery attempt, distinct from transport errors: a
/// rejection is the backend answering "no", not the call failing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    /// The backend accepted the lead and assigned it a reference number.
    Accepted { reference: u64 },
    /// The backend refused the lead (duplicate, blocklist, closed books).
    Rejected { reason: String },
}

/// Async delivery seam for leads.
///
/// The production implementation posts to the coaching backend; tests and
/// the CLI use [`InMemoryLeadSink`].
pub trait LeadTransport {
    fn deliver(
        &self,
        lead: &Lead,
    ) -> impl std::future::Future<Output = Result<SubmissionOutcome, LeadError>> + Send;
}

/// Validate a lead, then hand it to the transport.
pub async fn submit<T: LeadTransport>(
    transport: &T,
    lead: Lead,
) -> Result<SubmissionOutcome, LeadError> {
    lead.validate()?;
    debug!("Delivering lead from {}", lead.email);
    transport.deliver(&lead).await
}

/// Transport double that records every accepted lead in memory.
#[derive(Debug, Default)]
pub struct InMemoryLeadSink {
    delivered: Mutex<Vec<Lead>>,
    next_reference: AtomicU64,
}

impl InMemoryLeadSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Leads accepted so far, in delivery order.
    pub fn delivered(&self) -> Vec<Lead> {
        self.delivered
            .lock()
            .map(|leads| leads.clone())
            .unwrap_or_default()
    }
}

impl LeadTransport for InMemoryLeadSink {
    async fn deliver(&self, lead: &Lead) -> Result<SubmissionOutcome, LeadError> {
        let reference = self.next_reference.fetch_add(1, Ordering::Relaxed) + 1;
        self.delivered
            .lock()
            .map_err(|_| LeadError::DeliveryFailed("lead sink lock poisoned".to_string()))?
            .push(lead.clone());
        Ok(SubmissionOutcome::Accepted { reference })
    }
}
