use yew::prelude::*;

use crate::workflow::error_channel::ErrorChannel;

/// Properties shared by both workflow components.
#[derive(Properties, PartialEq, Clone)]
pub struct WorkflowProps {
    /// Base address of the anonymization service, from the client configuration.
    pub service_base_url: AttrValue,
    /// Session-wide error slot; failures are published here.
    pub errors: ErrorChannel,
}
