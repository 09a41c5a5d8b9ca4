use crate::workflow::error_channel::ErrorChannel;
use crate::workflow::text::TextWorkflow;

/// State of the text anonymization form.
pub struct TextAnonymizationComponent {
    /// Text being edited, submission lifecycle and last result.
    pub workflow: TextWorkflow,
}

impl TextAnonymizationComponent {
    pub fn new(errors: ErrorChannel) -> Self {
        Self {
            workflow: TextWorkflow::new(errors),
        }
    }
}
