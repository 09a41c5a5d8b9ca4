use common::responses::ServiceResponse;

use super::controller::{Expected, Settlement, SubmissionController, Ticket, TransportError};
use super::error_channel::ErrorChannel;
use super::request::AnonymizationRequest;

/// Free-text submission instance: the degenerate single-field case.
#[derive(Debug)]
pub struct TextWorkflow {
    text: String,
    result: Option<String>,
    controller: SubmissionController,
}

impl TextWorkflow {
    pub fn new(errors: ErrorChannel) -> Self {
        Self {
            text: String::new(),
            result: None,
            controller: SubmissionController::new(errors),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Last anonymized text, shown unchanged.
    pub fn result(&self) -> Option<&str> {
        self.result.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.controller.is_submitting()
    }

    /// Blank text never reaches the service.
    pub fn can_submit(&self) -> bool {
        !self.text.trim().is_empty() && !self.controller.is_submitting()
    }

    pub fn prepare_submit(&mut self) -> Option<(Ticket, AnonymizationRequest)> {
        if !self.can_submit() {
            return None;
        }
        let ticket = self.controller.begin()?;
        Some((ticket, AnonymizationRequest::text(&self.text)))
    }

    pub fn apply(
        &mut self,
        ticket: Ticket,
        outcome: Result<ServiceResponse, TransportError>,
    ) -> Settlement {
        let settlement = self.controller.settle(ticket, outcome, Expected::Text);
        if let Settlement::Succeeded(ServiceResponse::TextResult(text)) = &settlement {
            self.result = Some(text.clone());
        }
        settlement
    }

    pub fn deactivate(&mut self) {
        self.controller.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflow::testing::{submit, StubService};

    #[tokio::test]
    async fn blank_text_never_calls_the_service() {
        let service = StubService::replying(Ok(ServiceResponse::TextResult("x".to_string())));
        let mut workflow = TextWorkflow::new(ErrorChannel::new());

        assert!(submit(&mut workflow, &service).await.is_none());
        workflow.set_text("   \n".to_string());
        assert!(submit(&mut workflow, &service).await.is_none());

        assert_eq!(service.calls(), 0);
    }

    #[tokio::test]
    async fn anonymized_text_is_shown_unchanged() {
        let service = StubService::replying(Ok(ServiceResponse::TextResult(
            "<PERSON> lives in <LOCATION>".to_string(),
        )));
        let mut workflow = TextWorkflow::new(ErrorChannel::new());
        workflow.set_text("John lives in Paris".to_string());

        let settlement = submit(&mut workflow, &service).await.unwrap();

        assert!(matches!(settlement, Settlement::Succeeded(_)));
        assert_eq!(workflow.result(), Some("<PERSON> lives in <LOCATION>"));
        assert_eq!(service.calls(), 1);
        assert!(!workflow.is_submitting());
    }

    #[tokio::test]
    async fn failure_keeps_the_previous_result() {
        let errors = ErrorChannel::new();
        let mut workflow = TextWorkflow::new(errors.clone());
        workflow.set_text("John".to_string());

        let ok = StubService::replying(Ok(ServiceResponse::TextResult("<PERSON>".to_string())));
        submit(&mut workflow, &ok).await.unwrap();

        let failing = StubService::replying(Ok(ServiceResponse::Error("Text is empty".to_string())));
        submit(&mut workflow, &failing).await.unwrap();

        assert_eq!(workflow.result(), Some("<PERSON>"));
        assert_eq!(errors.current().as_deref(), Some("Text is empty"));
    }

    #[test]
    fn submit_is_disabled_while_outstanding() {
        let mut workflow = TextWorkflow::new(ErrorChannel::new());
        workflow.set_text("John".to_string());

        assert!(workflow.prepare_submit().is_some());
        assert!(!workflow.can_submit());
        assert!(workflow.prepare_submit().is_none());
    }

    #[tokio::test]
    async fn previous_result_stays_visible_while_resubmitting() {
        let mut workflow = TextWorkflow::new(ErrorChannel::new());
        workflow.set_text("John".to_string());
        let ok = StubService::replying(Ok(ServiceResponse::TextResult("<PERSON>".to_string())));
        submit(&mut workflow, &ok).await.unwrap();

        workflow.set_text("Mary".to_string());
        assert!(workflow.prepare_submit().is_some());

        assert!(workflow.is_submitting());
        assert_eq!(workflow.result(), Some("<PERSON>"));
    }
}
