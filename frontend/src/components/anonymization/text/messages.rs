use common::responses::ServiceResponse;

use crate::workflow::controller::{Ticket, TransportError};

pub enum Msg {
    UpdateText(String),
    Submit,
    Settled(Ticket, Result<ServiceResponse, TransportError>),
}
