use common::responses::ServiceResponse;

use crate::workflow::controller::{Ticket, TransportError};
use crate::workflow::csv::FileRead;

pub enum Msg {
    /// The file input changed; `None` when the selection was emptied.
    FileSelected(Option<web_sys::File>),
    FileLoaded {
        read: FileRead,
        name: String,
        bytes: Vec<u8>,
    },
    FileReadFailed {
        read: FileRead,
        reason: String,
    },
    EditDataType {
        column: String,
        value: String,
    },
    EditSensitivity {
        column: String,
        value: String,
    },
    Submit,
    Settled(Ticket, Result<ServiceResponse, TransportError>),
    Export,
}
