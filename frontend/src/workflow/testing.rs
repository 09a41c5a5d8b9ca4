use std::cell::{Cell, RefCell};

use common::requests::{decode_column_metadata, COLUMN_METADATA_FIELD};
use common::responses::{ResultRow, ServiceResponse};
use serde_json::Value;

use super::controller::{AnonymizationService, Settlement, Ticket, TransportError};
use super::csv::CsvWorkflow;
use super::request::{AnonymizationRequest, FormValue, Payload};
use super::text::TextWorkflow;

type Outcome = Result<ServiceResponse, TransportError>;

/// Answers the first call with a canned outcome and counts calls.
pub struct StubService {
    reply: RefCell<Option<Outcome>>,
    calls: Cell<usize>,
}

impl StubService {
    pub fn replying(reply: Outcome) -> Self {
        Self {
            reply: RefCell::new(Some(reply)),
            calls: Cell::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl AnonymizationService for StubService {
    async fn send(&self, _request: &AnonymizationRequest) -> Outcome {
        self.calls.set(self.calls.get() + 1);
        self.reply
            .borrow_mut()
            .take()
            .expect("stub service answers a single call")
    }
}

/// Echoes the `column_metadata` part back as one row per descriptor.
#[derive(Default)]
pub struct EchoMetadataService;

impl AnonymizationService for EchoMetadataService {
    async fn send(&self, request: &AnonymizationRequest) -> Outcome {
        let Payload::Multipart(parts) = request
            .payload()
            .map_err(|err| TransportError::Encoding(err.to_string()))?
        else {
            return Ok(ServiceResponse::Error("expected multipart".to_string()));
        };
        let raw = parts
            .iter()
            .find_map(|part| match (&part.value, part.name) {
                (FormValue::Text(raw), COLUMN_METADATA_FIELD) => Some(raw.clone()),
                _ => None,
            })
            .ok_or_else(|| TransportError::Network("metadata part missing".to_string()))?;

        let columns = decode_column_metadata(&raw)
            .map_err(|err| TransportError::Network(err.to_string()))?;
        let rows = columns
            .iter()
            .map(|column| match serde_json::to_value(column) {
                Ok(Value::Object(row)) => row,
                _ => ResultRow::new(),
            })
            .collect();
        Ok(ServiceResponse::TableResult(rows))
    }
}

pub trait Submit {
    fn prepare_submit(&mut self) -> Option<(Ticket, AnonymizationRequest)>;
    fn apply(&mut self, ticket: Ticket, outcome: Outcome) -> Settlement;
}

impl Submit for TextWorkflow {
    fn prepare_submit(&mut self) -> Option<(Ticket, AnonymizationRequest)> {
        TextWorkflow::prepare_submit(self)
    }

    fn apply(&mut self, ticket: Ticket, outcome: Outcome) -> Settlement {
        TextWorkflow::apply(self, ticket, outcome)
    }
}

impl Submit for CsvWorkflow {
    fn prepare_submit(&mut self) -> Option<(Ticket, AnonymizationRequest)> {
        CsvWorkflow::prepare_submit(self)
    }

    fn apply(&mut self, ticket: Ticket, outcome: Outcome) -> Settlement {
        CsvWorkflow::apply(self, ticket, outcome)
    }
}

/// Runs one submission the way the components do: prepare, call, apply.
pub async fn submit<W: Submit, S: AnonymizationService>(
    workflow: &mut W,
    service: &S,
) -> Option<Settlement> {
    let (ticket, request) = workflow.prepare_submit()?;
    let outcome = service.send(&request).await;
    Some(workflow.apply(ticket, outcome))
}
