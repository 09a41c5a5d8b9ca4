//! Request lifecycle of one workflow instance.
//!
//! ```text
//! Idle | Succeeded | Failed --begin--> Submitting --settle--> Succeeded | Failed
//! ```
//!
//! Every `begin` issues a [`Ticket`] carrying a sequence number. A response is
//! applied only when its ticket is the latest one issued and the instance is
//! still active, so a stale response (superseded, or arriving after a mode
//! switch) changes nothing. `begin` refuses while a request is outstanding.

use common::responses::{ResponseError, ServiceResponse};
use thiserror::Error;

use super::error_channel::ErrorChannel;
use super::request::AnonymizationRequest;

/// Message shown for every failure the service did not describe itself.
pub const GENERIC_FAILURE_MESSAGE: &str = "An error occurred while processing the request.";

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request could not be sent: {0}")]
    Network(String),
    #[error("service answered with unexpected status {status}")]
    UnexpectedStatus { status: u16 },
    #[error("malformed response: {0}")]
    Malformed(#[from] ResponseError),
    #[error("request payload could not be encoded: {0}")]
    Encoding(String),
}

/// The single point of network interaction. The browser build talks HTTP via
/// `gloo-net`; tests plug in stubs.
#[allow(async_fn_in_trait)]
pub trait AnonymizationService {
    async fn send(&self, request: &AnonymizationRequest)
        -> Result<ServiceResponse, TransportError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket(u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting(Ticket),
    Succeeded,
    Failed,
}

/// Which success shape the owning workflow can present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Text,
    Table,
}

#[derive(Debug, PartialEq)]
pub enum Settlement {
    /// The response belongs to a superseded or deactivated submission.
    Stale,
    Succeeded(ServiceResponse),
    /// `message` was published to the error channel; `detail` is the internal
    /// cause for logs, absent when the service reported the error itself.
    Failed {
        message: String,
        detail: Option<String>,
    },
}

#[derive(Debug)]
pub struct SubmissionController {
    phase: Phase,
    issued: u64,
    active: bool,
    errors: ErrorChannel,
}

impl SubmissionController {
    pub fn new(errors: ErrorChannel) -> Self {
        Self {
            phase: Phase::Idle,
            issued: 0,
            active: true,
            errors,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.phase, Phase::Submitting(_))
    }

    pub fn errors(&self) -> &ErrorChannel {
        &self.errors
    }

    /// Enters `Submitting` and clears the shared error slot. Returns `None`
    /// while another request is outstanding or after deactivation.
    pub fn begin(&mut self) -> Option<Ticket> {
        if !self.active || self.is_submitting() {
            return None;
        }
        self.issued += 1;
        let ticket = Ticket(self.issued);
        self.phase = Phase::Submitting(ticket);
        self.errors.clear();
        Some(ticket)
    }

    /// Settles the submission identified by `ticket`.
    pub fn settle(
        &mut self,
        ticket: Ticket,
        outcome: Result<ServiceResponse, TransportError>,
        expected: Expected,
    ) -> Settlement {
        if !self.active || self.phase != Phase::Submitting(ticket) {
            return Settlement::Stale;
        }

        let (message, detail) = match outcome {
            Ok(ServiceResponse::Error(message)) => (message, None),
            Ok(response) if shape_matches(&response, expected) => {
                self.phase = Phase::Succeeded;
                return Settlement::Succeeded(response);
            }
            Ok(response) => (
                GENERIC_FAILURE_MESSAGE.to_string(),
                Some(format!("expected a {:?} result, got {:?}", expected, response)),
            ),
            Err(err) => (GENERIC_FAILURE_MESSAGE.to_string(), Some(err.to_string())),
        };

        self.phase = Phase::Failed;
        self.errors.publish(message.clone());
        Settlement::Failed { message, detail }
    }

    /// Abandons any outstanding submission for good. Called when the owning
    /// workflow is torn down; later responses settle as [`Settlement::Stale`].
    pub fn deactivate(&mut self) {
        self.active = false;
        if self.is_submitting() {
            self.phase = Phase::Idle;
        }
    }
}

fn shape_matches(response: &ServiceResponse, expected: Expected) -> bool {
    matches!(
        (response, expected),
        (ServiceResponse::TextResult(_), Expected::Text)
            | (ServiceResponse::TableResult(_), Expected::Table)
    )
}
